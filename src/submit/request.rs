use crate::core::ElementId;
use crate::submit::completion::ResponseParse;
use crate::submit::encode;
use indexmap::IndexMap;

/// One POST to be performed while the triggering control is disabled.
///
/// `handler` routes the completion back; `origin` names the element the
/// event fired on (the form, or the matched button for delegated cases).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SubmitRequest {
    pub handler: ElementId,
    pub origin: ElementId,
    pub endpoint: String,
    pub payload: IndexMap<String, String>,
    pub parse: ResponseParse,
}

impl SubmitRequest {
    pub fn new(
        handler: impl Into<ElementId>,
        origin: impl Into<ElementId>,
        endpoint: impl Into<String>,
    ) -> Self {
        Self {
            handler: handler.into(),
            origin: origin.into(),
            endpoint: endpoint.into(),
            payload: IndexMap::new(),
            parse: ResponseParse::default(),
        }
    }

    pub fn with_payload(mut self, payload: IndexMap<String, String>) -> Self {
        self.payload = payload;
        self
    }

    pub fn with_field(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.payload.insert(name.into(), value.into());
        self
    }

    pub fn with_parse(mut self, parse: ResponseParse) -> Self {
        self.parse = parse;
        self
    }

    /// Form-url-encoded body assembled from the payload.
    pub fn body(&self) -> String {
        encode::form_urlencode(&self.payload)
    }
}
