//! Reply normalization: coerces arbitrary webhook JSON into ordered [`InboundItem`]s.
//!
//! The webhook may answer with an array of items, a single object, or a bare
//! JSON string; items may be tagged `audio` or `text`. Everything else is a
//! failure. Empty input fails as [`WebhookError::EmptyReply`], malformed input
//! as [`WebhookError::InvalidJson`], and the two never swap.

use hookchat_core::{InboundItem, WebhookError};
use serde_json::Value;

fn shape_name(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "boolean",
        Value::Number(_) => "number",
        Value::String(_) => "string",
        Value::Array(_) => "array",
        Value::Object(_) => "object",
    }
}

/// One array element: `audio` wins over `text`; a bare string is text; any
/// other shape fails the whole reply, so callers never see partial results.
fn normalize_element(element: &Value) -> Result<InboundItem, WebhookError> {
    match element {
        Value::Object(fields) => {
            if let Some(audio) = fields.get("audio").and_then(Value::as_str) {
                Ok(InboundItem::Audio(audio.to_string()))
            } else if let Some(text) = fields.get("text").and_then(Value::as_str) {
                Ok(InboundItem::Text(text.to_string()))
            } else {
                Err(WebhookError::InvalidJson(
                    "reply item carries neither audio nor text".to_string(),
                ))
            }
        }
        Value::String(text) => Ok(InboundItem::Text(text.clone())),
        other => Err(WebhookError::InvalidJson(format!(
            "unsupported reply item shape: {}",
            shape_name(other)
        ))),
    }
}

/// Normalizes a raw reply body into an ordered, non-empty item sequence.
///
/// Precedence per top-level shape:
/// - array: each element via [`normalize_element`], order preserved;
/// - single object: an `audio` field, then a `text` field (one object can
///   yield both items, audio first); a string `content` field counts as text
///   when `text` is absent;
/// - bare string: exactly one text item.
///
/// An empty or whitespace body, or a shape that yields no items, is
/// `EmptyReply`; a non-empty body that is not JSON, or any unsupported shape,
/// is `InvalidJson`.
pub fn normalize_body(body: &str) -> Result<Vec<InboundItem>, WebhookError> {
    if body.trim().is_empty() {
        return Err(WebhookError::EmptyReply);
    }

    let value: Value =
        serde_json::from_str(body).map_err(|e| WebhookError::InvalidJson(e.to_string()))?;

    let items = match &value {
        Value::Array(elements) => {
            let mut items = Vec::with_capacity(elements.len());
            for element in elements {
                items.push(normalize_element(element)?);
            }
            items
        }
        Value::Object(fields) => {
            let mut items = Vec::new();
            if let Some(audio) = fields.get("audio").and_then(Value::as_str) {
                items.push(InboundItem::Audio(audio.to_string()));
            }
            if let Some(text) = fields.get("text").and_then(Value::as_str) {
                items.push(InboundItem::Text(text.to_string()));
            } else if let Some(content) = fields.get("content").and_then(Value::as_str) {
                items.push(InboundItem::Text(content.to_string()));
            }
            items
        }
        Value::String(text) => vec![InboundItem::Text(text.clone())],
        other => {
            return Err(WebhookError::InvalidJson(format!(
                "unsupported reply shape: {}",
                shape_name(other)
            )))
        }
    };

    if items.is_empty() {
        return Err(WebhookError::EmptyReply);
    }

    Ok(items)
}
