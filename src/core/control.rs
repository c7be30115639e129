/// Lifecycle of a submit control around its single in-flight request.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SubmitPhase {
    #[default]
    Idle,
    Pending,
    Done,
}

/// The triggering control of a form: a disabled flag plus a label that
/// tracks the submission phase.
///
/// The control is disabled before a request leaves and only re-enabled on
/// the failure path; a completed one-shot action keeps it disabled.
#[derive(Debug, Clone)]
pub struct SubmitControl {
    action_label: String,
    pending_label: String,
    done_label: String,
    phase: SubmitPhase,
    disabled: bool,
}

impl SubmitControl {
    pub fn new(action_label: impl Into<String>) -> Self {
        let action_label = action_label.into();
        Self {
            pending_label: action_label.clone(),
            done_label: action_label.clone(),
            action_label,
            phase: SubmitPhase::default(),
            disabled: false,
        }
    }

    pub fn with_pending_label(mut self, label: impl Into<String>) -> Self {
        self.pending_label = label.into();
        self
    }

    pub fn with_done_label(mut self, label: impl Into<String>) -> Self {
        self.done_label = label.into();
        self
    }

    pub fn phase(&self) -> SubmitPhase {
        self.phase
    }

    pub fn is_disabled(&self) -> bool {
        self.disabled
    }

    pub fn can_trigger(&self) -> bool {
        !self.disabled
    }

    pub fn label(&self) -> &str {
        match self.phase {
            SubmitPhase::Idle => &self.action_label,
            SubmitPhase::Pending => &self.pending_label,
            SubmitPhase::Done => &self.done_label,
        }
    }

    /// idle → pending: disable the control for the duration of the request.
    pub fn begin_pending(&mut self) {
        self.phase = SubmitPhase::Pending;
        self.disabled = true;
    }

    /// pending → succeeded: the control stays disabled with the done label.
    pub fn succeed(&mut self) {
        self.phase = SubmitPhase::Done;
        self.disabled = true;
    }

    /// pending → failed: restore the original action label and re-enable.
    pub fn fail(&mut self) {
        self.phase = SubmitPhase::Idle;
        self.disabled = false;
    }
}

#[cfg(test)]
mod tests {
    use super::{SubmitControl, SubmitPhase};

    fn control() -> SubmitControl {
        SubmitControl::new("Submit rating")
            .with_pending_label("Sending…")
            .with_done_label("Rated")
    }

    #[test]
    fn pending_disables_and_swaps_label() {
        let mut control = control();
        assert!(control.can_trigger());
        control.begin_pending();
        assert!(!control.can_trigger());
        assert_eq!(control.label(), "Sending…");
        assert_eq!(control.phase(), SubmitPhase::Pending);
    }

    #[test]
    fn success_keeps_the_control_disabled() {
        let mut control = control();
        control.begin_pending();
        control.succeed();
        assert!(control.is_disabled());
        assert_eq!(control.label(), "Rated");
    }

    #[test]
    fn failure_restores_the_action_label_and_reenables() {
        let mut control = control();
        control.begin_pending();
        control.fail();
        assert!(control.can_trigger());
        assert_eq!(control.label(), "Submit rating");
        assert_eq!(control.phase(), SubmitPhase::Idle);
    }
}
