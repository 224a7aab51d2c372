use crate::error::AppError;
use crate::infrastructure::repositories::SynthesisError;

#[derive(Debug, thiserror::Error)]
pub enum TtsServiceError {
    #[error("speech credentials are not configured")]
    MissingCredentials,
    #[error("no text or ssml to synthesize")]
    MissingText,
    #[error(transparent)]
    Synthesis(#[from] SynthesisError),
}

impl From<TtsServiceError> for AppError {
    fn from(err: TtsServiceError) -> Self {
        match err {
            TtsServiceError::MissingCredentials => AppError::MissingCredentials,
            TtsServiceError::MissingText => AppError::MissingText,
            TtsServiceError::Synthesis(SynthesisError::Upstream { status, detail }) => {
                AppError::Upstream { status, detail }
            }
            TtsServiceError::Synthesis(SynthesisError::Transport(msg)) => AppError::Internal(msg),
        }
    }
}
