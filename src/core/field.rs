/// Input variants a form can hold.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FieldKind {
    Text,
    Password,
    Select { options: Vec<String> },
    /// Carried in the payload but never rendered or edited.
    Hidden,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum FieldVisual {
    #[default]
    Neutral,
    Error,
}

/// A labeled input field. The value is read fresh at event time; nothing
/// here is cached across attempts.
#[derive(Debug, Clone)]
pub struct Field {
    name: String,
    label: String,
    kind: FieldKind,
    value: String,
    placeholder: Option<String>,
    visual: FieldVisual,
    disabled: bool,
}

impl Field {
    pub fn text(name: impl Into<String>, label: impl Into<String>) -> Self {
        Self::new(name, label, FieldKind::Text)
    }

    pub fn password(name: impl Into<String>, label: impl Into<String>) -> Self {
        Self::new(name, label, FieldKind::Password)
    }

    pub fn select(
        name: impl Into<String>,
        label: impl Into<String>,
        options: Vec<String>,
    ) -> Self {
        Self::new(name, label, FieldKind::Select { options })
    }

    pub fn hidden(name: impl Into<String>, value: impl Into<String>) -> Self {
        let mut field = Self::new(name, "", FieldKind::Hidden);
        field.value = value.into();
        field
    }

    fn new(name: impl Into<String>, label: impl Into<String>, kind: FieldKind) -> Self {
        Self {
            name: name.into(),
            label: label.into(),
            kind,
            value: String::new(),
            placeholder: None,
            visual: FieldVisual::default(),
            disabled: false,
        }
    }

    pub fn with_placeholder(mut self, placeholder: impl Into<String>) -> Self {
        self.placeholder = Some(placeholder.into());
        self
    }

    pub fn with_value(mut self, value: impl Into<String>) -> Self {
        self.value = value.into();
        self
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn label(&self) -> &str {
        &self.label
    }

    pub fn kind(&self) -> &FieldKind {
        &self.kind
    }

    pub fn value(&self) -> &str {
        &self.value
    }

    pub fn placeholder(&self) -> Option<&str> {
        self.placeholder.as_deref()
    }

    pub fn visual(&self) -> FieldVisual {
        self.visual
    }

    pub fn is_disabled(&self) -> bool {
        self.disabled
    }

    pub fn is_editable(&self) -> bool {
        !self.disabled && self.kind != FieldKind::Hidden
    }

    pub fn set_value(&mut self, value: impl Into<String>) {
        self.value = value.into();
    }

    pub fn push_char(&mut self, ch: char) {
        if self.is_editable() {
            self.value.push(ch);
        }
    }

    pub fn pop_char(&mut self) {
        if self.is_editable() {
            self.value.pop();
        }
    }

    pub fn mark_error(&mut self) {
        self.visual = FieldVisual::Error;
    }

    pub fn clear_error(&mut self) {
        self.visual = FieldVisual::Neutral;
    }

    pub fn set_disabled(&mut self, disabled: bool) {
        self.disabled = disabled;
    }

    /// Step a select field to the next option; an empty value steps to the
    /// first option. Ignored for other kinds.
    pub fn select_next(&mut self) {
        self.cycle_selection(1);
    }

    pub fn select_prev(&mut self) {
        self.cycle_selection(-1);
    }

    fn cycle_selection(&mut self, direction: isize) {
        if !self.is_editable() {
            return;
        }
        let FieldKind::Select { options } = &self.kind else {
            return;
        };
        if options.is_empty() {
            return;
        }

        let len = options.len() as isize;
        let next = match options.iter().position(|option| option == &self.value) {
            Some(current) => ((current as isize + direction + len) % len) as usize,
            None => {
                if direction >= 0 {
                    0
                } else {
                    options.len() - 1
                }
            }
        };
        self.value = options[next].clone();
    }
}

#[cfg(test)]
mod tests {
    use super::{Field, FieldVisual};

    #[test]
    fn select_cycles_through_options_and_wraps() {
        let mut field = Field::select(
            "rating",
            "Rating",
            vec!["1".to_string(), "2".to_string(), "3".to_string()],
        );
        assert_eq!(field.value(), "");

        field.select_next();
        assert_eq!(field.value(), "1");
        field.select_prev();
        assert_eq!(field.value(), "3");
        field.select_next();
        assert_eq!(field.value(), "1");
    }

    #[test]
    fn hidden_and_disabled_fields_reject_edits() {
        let mut hidden = Field::hidden("movie_id", "42");
        hidden.push_char('7');
        assert_eq!(hidden.value(), "42");

        let mut text = Field::text("email", "Email");
        text.set_disabled(true);
        text.push_char('a');
        assert_eq!(text.value(), "");
        assert!(!text.is_editable());
    }

    #[test]
    fn error_marker_round_trip() {
        let mut field = Field::password("password", "Password");
        field.mark_error();
        assert_eq!(field.visual(), FieldVisual::Error);
        field.clear_error();
        assert_eq!(field.visual(), FieldVisual::Neutral);
    }
}
