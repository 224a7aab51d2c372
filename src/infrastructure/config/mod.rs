use serde::Deserialize;
use std::env;

pub const DEFAULT_VOICE: &str = "en-US-AriaNeural";
pub const DEFAULT_RATE: &str = "0%";
pub const DEFAULT_PITCH: &str = "0%";
pub const DEFAULT_OUTPUT_FORMAT: &str = "audio-24khz-48kbitrate-mono-mp3";
pub const DEFAULT_USER_AGENT: &str = "storyline-tts";
pub const DEFAULT_MAX_BODY_BYTES: usize = 1024 * 1024;

#[derive(Debug, Clone, Deserialize)]
pub struct Config {
    pub host: String,
    pub port: u16,
    pub log_format: LogFormat,
    /// `None` until both key and region are set. Requests fail with 500 meanwhile.
    pub azure: Option<AzureCredentials>,
    pub azure_endpoint: Option<String>,
    // Synthesis defaults
    pub default_voice: String,
    pub default_rate: String,
    pub default_pitch: String,
    pub default_output_format: String,
    pub user_agent: String,
    pub max_body_bytes: usize,
}

#[derive(Clone, Deserialize)]
pub struct AzureCredentials {
    pub key: String,
    pub region: String,
}

// Keeps the subscription key out of `{:?}` output and logs.
impl std::fmt::Debug for AzureCredentials {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("AzureCredentials")
            .field("key", &"<redacted>")
            .field("region", &self.region)
            .finish()
    }
}

impl AzureCredentials {
    /// Region-templated synthesis endpoint
    pub fn endpoint(&self) -> String {
        format!(
            "https://{}.tts.speech.microsoft.com/cognitiveservices/v1",
            self.region
        )
    }
}

#[derive(Debug, Clone, Deserialize, PartialEq)]
#[serde(rename_all = "lowercase")]
pub enum LogFormat {
    Pretty,
    Json,
}

impl Config {
    pub fn from_env() -> Result<Self, Box<dyn std::error::Error>> {
        dotenvy::dotenv().ok();

        Self::from_lookup(|name| env::var(name).ok())
    }

    /// Build the configuration from an arbitrary variable source.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, Box<dyn std::error::Error>>
    where
        F: Fn(&str) -> Option<String>,
    {
        // Empty values are treated the same as unset ones.
        let var = |name: &str| {
            lookup(name)
                .map(|v| v.trim().to_string())
                .filter(|v| !v.is_empty())
        };
        let var_or = |name: &str, default: &str| var(name).unwrap_or_else(|| default.to_string());

        let azure = match (var("AZURE_SPEECH_KEY"), var("AZURE_SPEECH_REGION")) {
            (Some(key), Some(region)) => Some(AzureCredentials { key, region }),
            _ => None,
        };

        let config = Config {
            host: var_or("HOST", "0.0.0.0"),
            port: var_or("PORT", "8080").parse()?,
            log_format: match var_or("LOG_FORMAT", "pretty").to_lowercase().as_str() {
                "json" => LogFormat::Json,
                _ => LogFormat::Pretty,
            },
            azure,
            azure_endpoint: var("AZURE_SPEECH_ENDPOINT"),
            default_voice: var_or("TTS_DEFAULT_VOICE", DEFAULT_VOICE),
            default_rate: var_or("TTS_DEFAULT_RATE", DEFAULT_RATE),
            default_pitch: var_or("TTS_DEFAULT_PITCH", DEFAULT_PITCH),
            default_output_format: var_or("TTS_DEFAULT_OUTPUT_FORMAT", DEFAULT_OUTPUT_FORMAT),
            user_agent: var_or("TTS_USER_AGENT", DEFAULT_USER_AGENT),
            max_body_bytes: match var("MAX_BODY_BYTES") {
                Some(value) => value.parse()?,
                None => DEFAULT_MAX_BODY_BYTES,
            },
        };

        Ok(config)
    }

    /// The URL synthesis requests are posted to, if credentials are present.
    pub fn synthesis_endpoint(&self) -> Option<String> {
        let credentials = self.azure.as_ref()?;
        Some(
            self.azure_endpoint
                .clone()
                .unwrap_or_else(|| credentials.endpoint()),
        )
    }
}
