use serde::{Deserialize, Deserializer, Serialize};
use serde_json::Value;

/// Body of POST /api/tts. Every field is optional; see `TtsService` for
/// how missing values are resolved.
#[derive(Debug, Default, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SynthesisRequest {
    #[serde(default, deserialize_with = "lenient_string", skip_serializing_if = "Option::is_none")]
    pub text: Option<String>,
    #[serde(default, deserialize_with = "lenient_string", skip_serializing_if = "Option::is_none")]
    pub ssml: Option<String>,
    #[serde(default, deserialize_with = "lenient_string", skip_serializing_if = "Option::is_none")]
    pub voice_id: Option<String>,
    #[serde(default, deserialize_with = "lenient_string", skip_serializing_if = "Option::is_none")]
    pub rate: Option<String>,
    #[serde(default, deserialize_with = "lenient_string", skip_serializing_if = "Option::is_none")]
    pub pitch: Option<String>,
    #[serde(default, deserialize_with = "lenient_string", skip_serializing_if = "Option::is_none")]
    pub style: Option<String>,
    #[serde(default, deserialize_with = "lenient_string", skip_serializing_if = "Option::is_none")]
    pub output_format: Option<String>,
}

/// Successful synthesis: the audio payload, base64 encoded.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SynthesisResponse {
    pub audio_base64: String,
}

/// Why a request body could not be turned into a `SynthesisRequest`.
#[derive(Debug, thiserror::Error)]
pub enum RequestBodyError {
    #[error("malformed JSON: {0}")]
    Malformed(#[from] serde_json::Error),
    #[error("expected a JSON object")]
    NotAnObject,
}

impl SynthesisRequest {
    /// Decode a raw request body. A zero-length body is an empty request.
    pub fn from_body(body: &[u8]) -> Result<Self, RequestBodyError> {
        if body.is_empty() {
            return Ok(Self::default());
        }

        match serde_json::from_slice::<Value>(body)? {
            value @ Value::Object(_) => Ok(serde_json::from_value(value)?),
            _ => Err(RequestBodyError::NotAnObject),
        }
    }
}

/// Accept strings as-is and render non-zero numbers and `true` as text.
/// Zero, `null`, `false`, arrays and objects are treated as absent.
fn lenient_string<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(match Value::deserialize(deserializer)? {
        Value::String(s) => Some(s),
        Value::Number(n) if n.as_f64() != Some(0.0) => Some(n.to_string()),
        Value::Bool(true) => Some("true".to_string()),
        _ => None,
    })
}
