use serde::de::DeserializeOwned;

use super::service::InferenceError;

/// Parses a model response into `T`, tolerating the usual damage LLMs do to
/// JSON output. Three attempts, in order:
///
/// 1. the raw text as-is,
/// 2. the text with a Markdown code fence stripped,
/// 3. the substring from the first `{` to the last `}`.
///
/// Fails with [`InferenceError::Parse`] only when all three fall through.
pub fn parse_response<T: DeserializeOwned>(raw: &str) -> Result<T, InferenceError> {
    let trimmed = raw.trim();

    if let Ok(value) = serde_json::from_str(trimmed) {
        return Ok(value);
    }

    if let Some(inner) = strip_code_fence(trimmed) {
        if let Ok(value) = serde_json::from_str(inner.trim()) {
            return Ok(value);
        }
    }

    if let Some(inner) = brace_substring(trimmed) {
        if let Ok(value) = serde_json::from_str(inner) {
            return Ok(value);
        }
    }

    Err(InferenceError::Parse(format!(
        "response is not valid JSON: {}",
        truncate(trimmed, 200)
    )))
}

fn strip_code_fence(text: &str) -> Option<&str> {
    let inner = if let Some(rest) = text.strip_prefix("```json") {
        rest
    } else if let Some(rest) = text.strip_prefix("```") {
        rest
    } else {
        return None;
    };
    Some(inner.strip_suffix("```").unwrap_or(inner))
}

fn brace_substring(text: &str) -> Option<&str> {
    let start = text.find('{')?;
    let end = text.rfind('}')?;
    if end < start {
        return None;
    }
    Some(&text[start..=end])
}

fn truncate(text: &str, limit: usize) -> &str {
    match text.char_indices().nth(limit) {
        Some((idx, _)) => &text[..idx],
        None => text,
    }
}
