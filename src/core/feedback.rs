/// Style classification carried by a feedback element.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Tone {
    #[default]
    Neutral,
    Error,
    Success,
}

/// The page node whose text communicates a validation or request outcome.
///
/// The message is overwritten on every attempt, never appended.
#[derive(Debug, Clone, Default)]
pub struct Feedback {
    message: String,
    tone: Tone,
    visible: bool,
}

impl Feedback {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn message(&self) -> &str {
        &self.message
    }

    pub fn tone(&self) -> Tone {
        self.tone
    }

    pub fn is_visible(&self) -> bool {
        self.visible
    }

    pub fn show_error(&mut self, message: impl Into<String>) {
        self.message = message.into();
        self.tone = Tone::Error;
        self.visible = true;
    }

    pub fn show_success(&mut self, message: impl Into<String>) {
        self.message = message.into();
        self.tone = Tone::Success;
        self.visible = true;
    }

    pub fn clear(&mut self) {
        self.message.clear();
        self.tone = Tone::Neutral;
        self.visible = false;
    }
}
