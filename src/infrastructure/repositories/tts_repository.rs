use async_trait::async_trait;

/// Failure talking to the speech provider.
#[derive(Debug, thiserror::Error)]
pub enum SynthesisError {
    /// The provider answered with a non-success status. `detail` is its
    /// response body, or empty if that could not be read.
    #[error("provider returned status {status}")]
    Upstream { status: u16, detail: String },

    /// The request never produced a response (DNS, TLS, connection reset).
    #[error("transport error: {0}")]
    Transport(String),
}

/// Repository for TTS synthesis operations.
/// Abstracts the underlying speech provider behind a markup-in, audio-out call.
#[async_trait]
pub trait TtsRepository: Send + Sync {
    /// Synthesize an SSML document.
    ///
    /// Returns the raw audio bytes exactly as the provider sent them, encoded
    /// as requested by `output_format`.
    ///
    /// # Errors
    /// Returns `SynthesisError::Upstream` for a non-2xx answer and
    /// `SynthesisError::Transport` when no answer arrived.
    async fn synthesize(&self, ssml: &str, output_format: &str) -> Result<Vec<u8>, SynthesisError>;
}
