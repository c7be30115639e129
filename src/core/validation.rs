use indexmap::IndexMap;
use regex::Regex;

pub type ValidationError = String;
pub type Validator = Box<dyn Fn(&str) -> Result<(), ValidationError> + Send + Sync>;

/// Run a list of validators against `value`, returning the first error.
pub fn run_validators(validators: &[Validator], value: &str) -> Result<(), ValidationError> {
    for validator in validators {
        validator(value)?;
    }
    Ok(())
}

pub fn required(message: impl Into<String>) -> Validator {
    let message = message.into();
    Box::new(move |value: &str| {
        if value.trim().is_empty() {
            Err(message.clone())
        } else {
            Ok(())
        }
    })
}

pub fn min_length(min_len: usize, message: impl Into<String>) -> Validator {
    let message = message.into();
    Box::new(move |value: &str| {
        if value.chars().count() < min_len {
            Err(message.clone())
        } else {
            Ok(())
        }
    })
}

pub fn email(message: impl Into<String>) -> Validator {
    let message = message.into();
    let re = Regex::new(r"^[a-zA-Z0-9._%+-]+@[a-zA-Z0-9.-]+\.[a-zA-Z]{2,}$")
        .expect("email pattern is valid");
    Box::new(move |value: &str| {
        if re.is_match(value) {
            Ok(())
        } else {
            Err(message.clone())
        }
    })
}

/// Snapshot of a form's field values, taken at the moment of the triggering
/// event. Validation never reads the live page.
#[derive(Debug, Clone, Default)]
pub struct FieldValues {
    values: IndexMap<String, String>,
}

impl FieldValues {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn insert(&mut self, name: impl Into<String>, value: impl Into<String>) {
        self.values.insert(name.into(), value.into());
    }

    /// Raw value of `name`; missing fields read as empty.
    pub fn value(&self, name: &str) -> &str {
        self.values.get(name).map(String::as_str).unwrap_or("")
    }

    pub fn trimmed(&self, name: &str) -> &str {
        self.value(name).trim()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.values
            .iter()
            .map(|(name, value)| (name.as_str(), value.as_str()))
    }
}

impl FromIterator<(String, String)> for FieldValues {
    fn from_iter<I: IntoIterator<Item = (String, String)>>(iter: I) -> Self {
        Self {
            values: iter.into_iter().collect(),
        }
    }
}

/// First failing rule, with the field it belongs to.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Violation {
    pub field: String,
    pub message: ValidationError,
}

/// One validator applied to one named field.
pub struct FieldRule {
    field: String,
    check: Validator,
}

impl FieldRule {
    pub fn new(field: impl Into<String>, check: Validator) -> Self {
        Self {
            field: field.into(),
            check,
        }
    }

    pub fn field(&self) -> &str {
        &self.field
    }
}

/// Evaluate rules in order against trimmed values; the first failure wins.
pub fn first_violation(rules: &[FieldRule], values: &FieldValues) -> Option<Violation> {
    rules.iter().find_map(|rule| {
        (rule.check)(values.trimmed(&rule.field))
            .err()
            .map(|message| Violation {
                field: rule.field.clone(),
                message,
            })
    })
}

/// Cross-field rule evaluated against the whole snapshot.
pub type FormRule = Box<dyn Fn(&FieldValues) -> Option<Violation> + Send + Sync>;

/// Fails on the confirming field when `field` is non-empty and differs from
/// `confirm`. An empty `field` always passes (the change is optional).
pub fn fields_match(
    field: impl Into<String>,
    confirm: impl Into<String>,
    message: impl Into<String>,
) -> FormRule {
    let field = field.into();
    let confirm = confirm.into();
    let message = message.into();
    Box::new(move |values: &FieldValues| {
        let entered = values.value(&field);
        if !entered.is_empty() && entered != values.value(&confirm) {
            return Some(Violation {
                field: confirm.clone(),
                message: message.clone(),
            });
        }
        None
    })
}
