use crate::core::ElementId;

/// How a success body is read.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ResponseParse {
    /// Read the body as text; callers may ignore it entirely.
    #[default]
    RawText,
    /// Parse the body as JSON; a parse failure fails the attempt.
    Json,
}

/// Outcome of one submission, delivered back on the page's event loop.
///
/// `error` is `None` exactly when the attempt succeeded: HTTP status OK and,
/// for JSON variants, a parseable body.
#[derive(Debug, Clone)]
pub struct SubmitCompletion {
    pub handler: ElementId,
    pub origin: ElementId,
    pub status: Option<u16>,
    pub body: String,
    pub value: Option<serde_json::Value>,
    pub error: Option<String>,
}

impl SubmitCompletion {
    pub fn is_ok(&self) -> bool {
        self.error.is_none()
    }

    /// A string field of the parsed JSON body, if present.
    pub fn json_str(&self, name: &str) -> Option<&str> {
        self.value
            .as_ref()
            .and_then(|value| value.get(name))
            .and_then(|field| field.as_str())
    }
}
