use serde_json::Value;

use crate::{FailureKind, UploadError, UploadReply};

/// Classifies a backend reply body.
///
/// A truthy `error` field (not null, false, zero or empty) wins over
/// everything else. Without one, the `translation` field is the result; a
/// missing or falsy translation yields empty text. Anything that is not a
/// JSON object is a transport-level failure.
pub fn parse_reply(body: &[u8]) -> Result<UploadReply, UploadError> {
    let value: Value = serde_json::from_slice(body)
        .map_err(|err| UploadError::new(FailureKind::MalformedReply, err.to_string()))?;
    let Value::Object(fields) = value else {
        return Err(UploadError::new(
            FailureKind::MalformedReply,
            "reply is not a JSON object",
        ));
    };

    if let Some(message) = fields.get("error").and_then(field_text) {
        return Ok(UploadReply::Failed(message));
    }
    let translation = fields
        .get("translation")
        .and_then(field_text)
        .unwrap_or_default();
    Ok(UploadReply::Translated(translation))
}

/// Text of a field, or `None` when the value is falsy (null, false, zero, empty string).
fn field_text(value: &Value) -> Option<String> {
    match value {
        Value::Null | Value::Bool(false) => None,
        Value::Number(number) if number.as_f64() == Some(0.0) => None,
        Value::String(text) if text.is_empty() => None,
        Value::String(text) => Some(text.clone()),
        other => Some(other.to_string()),
    }
}
