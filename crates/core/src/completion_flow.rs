/// Lifecycle of the password-gated completion dialog for one route.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub enum CompletionPhase {
    #[default]
    Unstarted,
    DialogOpen,
    Verifying,
    Completed,
    Error(String),
}

/// Owns the legal transitions of [`CompletionPhase`].
///
/// One verification request per gate instance is in flight at most:
/// `submit` refuses re-entry while `Verifying`, and so does `dismiss`, so a
/// visible dialog always reflects its own request. Completion is never
/// rolled back.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct CompletionFlow {
    phase: CompletionPhase,
}

impl CompletionFlow {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Seeds the flow from the persisted completion set on mount.
    #[must_use]
    pub fn seeded(completed: bool) -> Self {
        Self {
            phase: if completed {
                CompletionPhase::Completed
            } else {
                CompletionPhase::Unstarted
            },
        }
    }

    #[must_use]
    pub fn phase(&self) -> &CompletionPhase {
        &self.phase
    }

    #[must_use]
    pub fn is_completed(&self) -> bool {
        matches!(self.phase, CompletionPhase::Completed)
    }

    #[must_use]
    pub fn is_verifying(&self) -> bool {
        matches!(self.phase, CompletionPhase::Verifying)
    }

    #[must_use]
    pub fn dialog_visible(&self) -> bool {
        matches!(
            self.phase,
            CompletionPhase::DialogOpen | CompletionPhase::Verifying | CompletionPhase::Error(_)
        )
    }

    #[must_use]
    pub fn can_submit(&self) -> bool {
        matches!(
            self.phase,
            CompletionPhase::DialogOpen | CompletionPhase::Error(_)
        )
    }

    /// The error message to show inline, when in the error phase.
    #[must_use]
    pub fn error_message(&self) -> Option<&str> {
        match &self.phase {
            CompletionPhase::Error(message) => Some(message),
            _ => None,
        }
    }

    /// Finish clicked. Only an untouched gate opens the dialog.
    pub fn open(&mut self) {
        if matches!(self.phase, CompletionPhase::Unstarted) {
            self.phase = CompletionPhase::DialogOpen;
        }
    }

    /// Password submitted. Returns true when a verification request should
    /// be issued; false while one is already in flight or no dialog is open.
    pub fn submit(&mut self) -> bool {
        if self.can_submit() {
            self.phase = CompletionPhase::Verifying;
            true
        } else {
            false
        }
    }

    /// Server accepted the password; the dialog closes.
    pub fn resolve_ok(&mut self) {
        if self.is_verifying() {
            self.phase = CompletionPhase::Completed;
        }
    }

    /// Server rejected the password or the request failed; the dialog stays
    /// open for retry with the message shown inline.
    pub fn resolve_err(&mut self, message: impl Into<String>) {
        if self.is_verifying() {
            self.phase = CompletionPhase::Error(message.into());
        }
    }

    /// Dialog dismissed. Refused while a request is in flight.
    pub fn dismiss(&mut self) {
        if matches!(
            self.phase,
            CompletionPhase::DialogOpen | CompletionPhase::Error(_)
        ) {
            self.phase = CompletionPhase::Unstarted;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn happy_path_closes_the_dialog() {
        let mut flow = CompletionFlow::new();
        flow.open();
        assert!(flow.dialog_visible());

        assert!(flow.submit());
        assert!(flow.is_verifying());

        flow.resolve_ok();
        assert!(flow.is_completed());
        assert!(!flow.dialog_visible());
    }

    #[test]
    fn rejection_keeps_the_dialog_open_for_retry() {
        let mut flow = CompletionFlow::new();
        flow.open();
        assert!(flow.submit());

        flow.resolve_err("Invalid password");
        assert_eq!(flow.error_message(), Some("Invalid password"));
        assert!(flow.dialog_visible());

        // retry from the error phase
        assert!(flow.submit());
        flow.resolve_ok();
        assert!(flow.is_completed());
    }

    #[test]
    fn submit_is_refused_while_verifying() {
        let mut flow = CompletionFlow::new();
        flow.open();
        assert!(flow.submit());
        assert!(!flow.submit());
        assert!(flow.is_verifying());
    }

    #[test]
    fn dismiss_is_refused_while_verifying() {
        let mut flow = CompletionFlow::new();
        flow.open();
        assert!(flow.submit());

        flow.dismiss();
        assert!(flow.is_verifying());
    }

    #[test]
    fn dismiss_resets_an_open_or_errored_dialog() {
        let mut flow = CompletionFlow::new();
        flow.open();
        flow.dismiss();
        assert_eq!(*flow.phase(), CompletionPhase::Unstarted);

        flow.open();
        flow.submit();
        flow.resolve_err("nope");
        flow.dismiss();
        assert_eq!(*flow.phase(), CompletionPhase::Unstarted);
    }

    #[test]
    fn seeded_completed_gate_ignores_open() {
        let mut flow = CompletionFlow::seeded(true);
        flow.open();
        assert!(flow.is_completed());
        assert!(!flow.dialog_visible());
    }

    #[test]
    fn resolutions_outside_verifying_are_dropped() {
        let mut flow = CompletionFlow::new();
        flow.resolve_ok();
        assert_eq!(*flow.phase(), CompletionPhase::Unstarted);

        flow.resolve_err("late");
        assert_eq!(*flow.phase(), CompletionPhase::Unstarted);
    }
}
