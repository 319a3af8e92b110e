//! Pull a JSON object out of free-form LLM output

use serde_json::Value;
use tracing::warn;

/// Extract and parse the JSON object embedded in model text
///
/// Takes everything from the first `{` through the last `}` and parses it.
/// Leading and trailing commentary is tolerated. Text where the object sits
/// between unrelated braces in the surrounding prose cannot be recovered and
/// yields `None`, as do text without braces and invalid JSON.
pub fn extract_json_object(text: &str) -> Option<Value> {
    let start = text.find('{')?;
    let end = text.rfind('}')?;
    if end < start {
        return None;
    }

    // Both delimiters are single-byte, so these are valid char boundaries.
    match serde_json::from_str(&text[start..=end]) {
        Ok(value) => Some(value),
        Err(e) => {
            warn!("Model output between braces is not valid JSON: {}", e);
            None
        }
    }
}
