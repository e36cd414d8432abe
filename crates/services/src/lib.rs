#![forbid(unsafe_code)]

pub mod app_services;
pub mod completion_service;
pub mod error;
pub mod verification;

pub use app_services::AppServices;
pub use completion_service::{CompletionOutcome, CompletionService};
pub use error::{AppServicesError, CompletionError, VerificationError};
pub use verification::{HttpVerifier, Verifier, VerifierConfig};
