use crate::core::ElementId;
use crate::core::control::SubmitControl;
use crate::core::feedback::Feedback;
use crate::core::field::Field;
use crate::core::validation::FieldValues;
use indexmap::IndexMap;

/// A form element: labeled fields in declaration order, a feedback element
/// and a submit control, posting to a configured action endpoint.
pub struct Form {
    id: ElementId,
    title: String,
    action: String,
    fields: IndexMap<String, Field>,
    feedback: Feedback,
    control: SubmitControl,
}

impl Form {
    pub fn new(id: impl Into<ElementId>, action: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            title: String::new(),
            action: action.into(),
            fields: IndexMap::new(),
            feedback: Feedback::new(),
            control: SubmitControl::new("Submit"),
        }
    }

    pub fn with_title(mut self, title: impl Into<String>) -> Self {
        self.title = title.into();
        self
    }

    pub fn with_field(mut self, field: Field) -> Self {
        self.fields.insert(field.name().to_string(), field);
        self
    }

    pub fn with_control(mut self, control: SubmitControl) -> Self {
        self.control = control;
        self
    }

    pub fn id(&self) -> &ElementId {
        &self.id
    }

    pub fn title(&self) -> &str {
        &self.title
    }

    pub fn action(&self) -> &str {
        &self.action
    }

    pub fn field(&self, name: &str) -> Option<&Field> {
        self.fields.get(name)
    }

    pub fn field_mut(&mut self, name: &str) -> Option<&mut Field> {
        self.fields.get_mut(name)
    }

    pub fn fields(&self) -> impl Iterator<Item = &Field> {
        self.fields.values()
    }

    pub fn feedback(&self) -> &Feedback {
        &self.feedback
    }

    pub fn feedback_mut(&mut self) -> &mut Feedback {
        &mut self.feedback
    }

    pub fn control(&self) -> &SubmitControl {
        &self.control
    }

    pub fn control_mut(&mut self) -> &mut SubmitControl {
        &mut self.control
    }

    /// Fresh snapshot of every field value; taken per attempt, never cached.
    pub fn values(&self) -> FieldValues {
        self.fields
            .iter()
            .map(|(name, field)| (name.clone(), field.value().to_string()))
            .collect()
    }

    /// Request payload assembled from current field values, hidden fields
    /// included, in declaration order.
    pub fn payload(&self) -> IndexMap<String, String> {
        self.fields
            .iter()
            .map(|(name, field)| (name.clone(), field.value().to_string()))
            .collect()
    }

    pub fn clear_field_errors(&mut self) {
        for field in self.fields.values_mut() {
            field.clear_error();
        }
    }
}

#[cfg(test)]
mod tests {
    use super::Form;
    use crate::core::field::Field;

    fn rating_form() -> Form {
        Form::new("rating-7", "/rate")
            .with_field(Field::hidden("movie_id", "7"))
            .with_field(Field::select(
                "rating",
                "Rating",
                vec!["1".to_string(), "2".to_string()],
            ))
    }

    #[test]
    fn payload_includes_hidden_fields_in_order() {
        let mut form = rating_form();
        form.field_mut("rating").expect("field").set_value("2");

        let payload = form.payload();
        let pairs: Vec<(&str, &str)> = payload
            .iter()
            .map(|(name, value)| (name.as_str(), value.as_str()))
            .collect();
        assert_eq!(pairs, vec![("movie_id", "7"), ("rating", "2")]);
    }

    #[test]
    fn values_are_a_fresh_snapshot_each_call() {
        let mut form = rating_form();
        let before = form.values();
        form.field_mut("rating").expect("field").set_value("1");
        let after = form.values();

        assert_eq!(before.value("rating"), "");
        assert_eq!(after.value("rating"), "1");
    }
}
