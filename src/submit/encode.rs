use indexmap::IndexMap;

/// Encode key-value pairs as an `application/x-www-form-urlencoded` body,
/// preserving insertion order.
pub fn form_urlencode(payload: &IndexMap<String, String>) -> String {
    payload
        .iter()
        .map(|(name, value)| {
            format!(
                "{}={}",
                urlencoding::encode(name),
                urlencoding::encode(value)
            )
        })
        .collect::<Vec<_>>()
        .join("&")
}
