use super::dto::{SynthesisRequest, SynthesisResponse};
use super::error::TtsServiceError;
use super::ssml::{build_ssml, VoiceSettings};
use crate::infrastructure::config::{
    Config, DEFAULT_OUTPUT_FORMAT, DEFAULT_PITCH, DEFAULT_RATE, DEFAULT_VOICE,
};
use crate::infrastructure::repositories::TtsRepository;
use async_trait::async_trait;
use base64::{engine::general_purpose::STANDARD, Engine as _};
use std::sync::Arc;

/// Values used for fields a request leaves out.
#[derive(Debug, Clone, PartialEq)]
pub struct SynthesisDefaults {
    pub voice: String,
    pub rate: String,
    pub pitch: String,
    pub output_format: String,
}

impl Default for SynthesisDefaults {
    fn default() -> Self {
        Self {
            voice: DEFAULT_VOICE.to_string(),
            rate: DEFAULT_RATE.to_string(),
            pitch: DEFAULT_PITCH.to_string(),
            output_format: DEFAULT_OUTPUT_FORMAT.to_string(),
        }
    }
}

impl SynthesisDefaults {
    pub fn from_config(config: &Config) -> Self {
        Self {
            voice: config.default_voice.clone(),
            rate: config.default_rate.clone(),
            pitch: config.default_pitch.clone(),
            output_format: config.default_output_format.clone(),
        }
    }
}

pub struct TtsService {
    /// `None` when the deployment has no speech credentials.
    tts_repo: Option<Arc<dyn TtsRepository>>,
    defaults: SynthesisDefaults,
}

impl TtsService {
    pub fn new(tts_repo: Option<Arc<dyn TtsRepository>>, defaults: SynthesisDefaults) -> Self {
        Self { tts_repo, defaults }
    }
}

#[async_trait]
pub trait TtsServiceApi: Send + Sync {
    /// Synthesize a request and return the audio as base64.
    ///
    /// This operation:
    /// - Fails with `MissingCredentials` before looking at the request if no
    ///   provider is configured
    /// - Forwards `ssml` verbatim, or builds a document around `text`
    /// - Calls the provider once, without retries
    async fn synthesize(
        &self,
        request: SynthesisRequest,
    ) -> Result<SynthesisResponse, TtsServiceError>;

    /// Whether a speech provider is available.
    fn is_configured(&self) -> bool;
}

#[async_trait]
impl TtsServiceApi for TtsService {
    async fn synthesize(
        &self,
        request: SynthesisRequest,
    ) -> Result<SynthesisResponse, TtsServiceError> {
        let tts_repo = self
            .tts_repo
            .as_ref()
            .ok_or(TtsServiceError::MissingCredentials)?;

        let ssml = self.resolve_markup(&request)?;
        let output_format = request
            .output_format
            .as_deref()
            .filter(|f| !f.is_empty())
            .unwrap_or(&self.defaults.output_format);

        tracing::info!(
            raw_ssml = caller_ssml(&request).is_some(),
            ssml_length = ssml.len(),
            output_format = output_format,
            "TTS synthesis request"
        );

        let audio = tts_repo.synthesize(&ssml, output_format).await?;

        Ok(SynthesisResponse {
            audio_base64: STANDARD.encode(&audio),
        })
    }

    fn is_configured(&self) -> bool {
        self.tts_repo.is_some()
    }
}

impl TtsService {
    /// Pick the document to send: caller-supplied SSML wins over text.
    pub fn resolve_markup(&self, request: &SynthesisRequest) -> Result<String, TtsServiceError> {
        if let Some(ssml) = caller_ssml(request) {
            return Ok(ssml.to_string());
        }

        let text = trimmed(request.text.as_deref()).ok_or(TtsServiceError::MissingText)?;
        let settings = VoiceSettings {
            voice: trimmed(request.voice_id.as_deref())
                .unwrap_or(&self.defaults.voice)
                .to_string(),
            rate: trimmed(request.rate.as_deref())
                .unwrap_or(&self.defaults.rate)
                .to_string(),
            pitch: trimmed(request.pitch.as_deref())
                .unwrap_or(&self.defaults.pitch)
                .to_string(),
            style: trimmed(request.style.as_deref()).map(str::to_string),
        };

        Ok(build_ssml(text, &settings))
    }
}

/// The request's SSML when it is used as-is instead of building from text.
fn caller_ssml(request: &SynthesisRequest) -> Option<&str> {
    trimmed(request.ssml.as_deref())
}

fn trimmed(value: Option<&str>) -> Option<&str> {
    value.map(str::trim).filter(|v| !v.is_empty())
}
