use axum::{body::Bytes, extract::rejection::BytesRejection, extract::State, Json};
use std::sync::Arc;

use crate::{
    domain::tts::{SynthesisRequest, SynthesisResponse, TtsService, TtsServiceApi},
    error::{AppError, AppResult},
};

pub struct TtsController {
    tts_service: Arc<TtsService>,
}

impl TtsController {
    pub fn new(tts_service: Arc<TtsService>) -> Self {
        Self { tts_service }
    }

    /// POST /api/tts - Convert text or SSML to base64 audio
    ///
    /// The body is read as raw bytes so that an empty body or a missing
    /// `Content-Type` does not trip axum's JSON extractor.
    pub async fn synthesize(
        State(controller): State<Arc<TtsController>>,
        body: Result<Bytes, BytesRejection>,
    ) -> AppResult<Json<SynthesisResponse>> {
        let body = body.map_err(|e| {
            tracing::warn!(error = %e, "Failed to read request body");
            AppError::InvalidBody
        })?;

        let request = SynthesisRequest::from_body(&body).map_err(|e| {
            tracing::warn!(error = %e, body_length = body.len(), "Rejected request body");
            AppError::InvalidBody
        })?;

        let response = controller.tts_service.synthesize(request).await?;

        tracing::info!(
            audio_base64_length = response.audio_base64.len(),
            "TTS synthesis succeeded"
        );

        Ok(Json(response))
    }

    /// Any method other than POST (OPTIONS is answered by the CORS middleware)
    pub async fn method_not_allowed() -> AppError {
        AppError::MethodNotAllowed
    }
}
