use crate::submit::completion::{ResponseParse, SubmitCompletion};
use crate::submit::request::SubmitRequest;

const CONTENT_TYPE_FORM: &str = "application/x-www-form-urlencoded";

/// Perform the request and classify the result. Blocking; runs on the
/// executor's worker thread, never on the page's event loop.
///
/// Redirects are not followed; navigation is outside these handlers, so a
/// 3xx is reported as-is.
pub fn send(request: &SubmitRequest) -> SubmitCompletion {
    let body = request.body();
    let agent = ureq::AgentBuilder::new().redirects(0).build();
    let result = agent
        .post(&request.endpoint)
        .set("Content-Type", CONTENT_TYPE_FORM)
        .send_string(&body);

    match result {
        Ok(response) => {
            let status = response.status();
            match response.into_string() {
                Ok(text) => classify_response(request, status, text),
                Err(err) => failure(
                    request,
                    Some(status),
                    String::new(),
                    format!("failed to read response body: {err}"),
                ),
            }
        }
        Err(ureq::Error::Status(code, response)) => {
            let text = response.into_string().unwrap_or_default();
            let message = server_error(&text).unwrap_or_else(|| format!("HTTP status {code}"));
            failure(request, Some(code), text, message)
        }
        Err(err) => failure(request, None, String::new(), err.to_string()),
    }
}

/// A 2xx status is success; for JSON variants the body must also parse.
fn classify_response(request: &SubmitRequest, status: u16, text: String) -> SubmitCompletion {
    if !(200..300).contains(&status) {
        let message = server_error(&text).unwrap_or_else(|| format!("HTTP status {status}"));
        return failure(request, Some(status), text, message);
    }

    let (value, error) = match request.parse {
        ResponseParse::RawText => (None, None),
        ResponseParse::Json => match serde_json::from_str::<serde_json::Value>(&text) {
            Ok(value) => (Some(value), None),
            Err(err) => (None, Some(format!("invalid JSON response: {err}"))),
        },
    };

    SubmitCompletion {
        handler: request.handler.clone(),
        origin: request.origin.clone(),
        status: Some(status),
        body: text,
        value,
        error,
    }
}

fn failure(
    request: &SubmitRequest,
    status: Option<u16>,
    body: String,
    message: String,
) -> SubmitCompletion {
    SubmitCompletion {
        handler: request.handler.clone(),
        origin: request.origin.clone(),
        status,
        body,
        value: None,
        error: Some(message),
    }
}

/// Error message carried in a non-OK JSON body, where the server provides
/// one (`{"error": "..."}`).
fn server_error(body: &str) -> Option<String> {
    let value: serde_json::Value = serde_json::from_str(body).ok()?;
    value
        .get("error")
        .and_then(|field| field.as_str())
        .map(ToOwned::to_owned)
}
