use std::sync::Arc;

use async_trait::async_trait;
use lms_core::model::SessionRoute;
use services::error::GENERIC_VERIFY_FAILURE;
use services::{CompletionError, CompletionService, VerificationError, Verifier};
use storage::repository::{CompletionRepository, InMemoryRepository};

/// Accepts one fixed password, rejecting everything else with the scripted
/// server message.
struct FakeVerifier {
    password: &'static str,
    rejection: Option<&'static str>,
}

impl FakeVerifier {
    fn accepting(password: &'static str) -> Self {
        Self {
            password,
            rejection: Some("Invalid password"),
        }
    }

    fn without_error_body(password: &'static str) -> Self {
        Self {
            password,
            rejection: None,
        }
    }
}

#[async_trait]
impl Verifier for FakeVerifier {
    async fn verify(&self, _route: SessionRoute, password: &str) -> Result<(), VerificationError> {
        if password == self.password {
            return Ok(());
        }
        Err(VerificationError::Rejected(self.rejection.map_or_else(
            || GENERIC_VERIFY_FAILURE.to_string(),
            ToString::to_string,
        )))
    }
}

fn service_over(repo: InMemoryRepository, verifier: FakeVerifier) -> CompletionService {
    CompletionService::new(Arc::new(verifier), Arc::new(repo))
}

#[tokio::test]
async fn rejected_password_leaves_the_set_untouched() {
    let repo = InMemoryRepository::new();
    let service = service_over(repo.clone(), FakeVerifier::accepting("hunter2"));

    let err = service
        .complete(SessionRoute::new(1, 5), "wrong")
        .await
        .unwrap_err();

    // server message surfaces verbatim
    assert_eq!(err.user_message(), "Invalid password");
    assert!(matches!(
        err,
        CompletionError::Verification(VerificationError::Rejected(_)),
    ));
    assert!(repo.load().await.unwrap().is_empty());
}

#[tokio::test]
async fn rejection_without_server_text_uses_the_fallback() {
    let repo = InMemoryRepository::new();
    let service = service_over(repo, FakeVerifier::without_error_body("hunter2"));

    let err = service
        .complete(SessionRoute::new(1, 5), "wrong")
        .await
        .unwrap_err();
    assert_eq!(err.user_message(), GENERIC_VERIFY_FAILURE);
}

#[tokio::test]
async fn accepted_password_persists_the_session_key() {
    let repo = InMemoryRepository::new();
    let service = service_over(repo.clone(), FakeVerifier::accepting("hunter2"));

    let outcome = service
        .complete(SessionRoute::new(1, 5), "hunter2")
        .await
        .unwrap();

    assert!(outcome.newly_added);
    assert!(outcome.completed.contains(SessionRoute::new(1, 5)));

    let persisted = repo.load().await.unwrap();
    assert_eq!(persisted.keys().collect::<Vec<_>>(), vec!["1-5"]);
    assert!(service.is_completed(SessionRoute::new(1, 5)).await.unwrap());
}

#[tokio::test]
async fn completing_twice_keeps_one_key() {
    let repo = InMemoryRepository::new();
    let service = service_over(repo.clone(), FakeVerifier::accepting("hunter2"));
    let route = SessionRoute::new(2, 3);

    let first = service.complete(route, "hunter2").await.unwrap();
    assert!(first.newly_added);

    let second = service.complete(route, "hunter2").await.unwrap();
    assert!(!second.newly_added);

    let persisted = repo.load().await.unwrap();
    assert_eq!(persisted.len(), 1);
}

#[tokio::test]
async fn completion_merges_with_previously_persisted_keys() {
    let repo = InMemoryRepository::new();
    let mut seeded = lms_core::model::CompletionSet::new();
    seeded.insert(SessionRoute::new(1, 1));
    repo.save(&seeded).await.unwrap();

    let service = service_over(repo.clone(), FakeVerifier::accepting("hunter2"));
    service
        .complete(SessionRoute::new(1, 2), "hunter2")
        .await
        .unwrap();

    let persisted = repo.load().await.unwrap();
    assert_eq!(persisted.len(), 2);
    assert!(persisted.contains(SessionRoute::new(1, 1)));
    assert!(persisted.contains(SessionRoute::new(1, 2)));
}
