use super::tts_repository::{SynthesisError, TtsRepository};
use async_trait::async_trait;
use reqwest::{header, Client, Response};

const SUBSCRIPTION_KEY_HEADER: &str = "Ocp-Apim-Subscription-Key";
const OUTPUT_FORMAT_HEADER: &str = "X-Microsoft-OutputFormat";
const SSML_CONTENT_TYPE: &str = "application/ssml+xml";

/// Azure Cognitive Services Speech implementation of the TTS repository
pub struct AzureTtsRepository {
    client: Client,
    endpoint: String,
    subscription_key: String,
    user_agent: String,
}

impl AzureTtsRepository {
    pub fn new(client: Client, endpoint: String, subscription_key: String, user_agent: String) -> Self {
        Self {
            client,
            endpoint,
            subscription_key,
            user_agent,
        }
    }

    /// Read the error body of a failed response.
    ///
    /// A failure here must not hide the original status, so it yields an
    /// empty string instead of an error.
    async fn read_detail(response: Response) -> String {
        match response.text().await {
            Ok(detail) => detail,
            Err(e) => {
                tracing::warn!(error = %e, "Could not read Azure TTS error body");
                String::new()
            }
        }
    }
}

#[async_trait]
impl TtsRepository for AzureTtsRepository {
    async fn synthesize(&self, ssml: &str, output_format: &str) -> Result<Vec<u8>, SynthesisError> {
        let start_time = std::time::Instant::now();

        tracing::info!(
            endpoint = %self.endpoint,
            output_format = output_format,
            ssml_length = ssml.len(),
            "Calling Azure TTS API"
        );

        let response = self
            .client
            .post(&self.endpoint)
            .header(SUBSCRIPTION_KEY_HEADER, &self.subscription_key)
            .header(header::CONTENT_TYPE, SSML_CONTENT_TYPE)
            .header(OUTPUT_FORMAT_HEADER, output_format)
            .header(header::USER_AGENT, &self.user_agent)
            .body(ssml.to_string())
            .send()
            .await
            .map_err(|e| {
                tracing::error!(error = %e, endpoint = %self.endpoint, "Azure TTS request failed");
                SynthesisError::Transport(e.to_string())
            })?;

        let status = response.status();
        if !status.is_success() {
            let detail = Self::read_detail(response).await;
            tracing::error!(
                status = status.as_u16(),
                detail = %detail,
                latency_ms = start_time.elapsed().as_millis(),
                "Azure TTS returned an error"
            );
            return Err(SynthesisError::Upstream {
                status: status.as_u16(),
                detail,
            });
        }

        let audio = response.bytes().await.map_err(|e| {
            tracing::error!(error = %e, "Failed to read Azure TTS audio stream");
            SynthesisError::Transport(e.to_string())
        })?;

        tracing::info!(
            provider = "azure",
            output_format = output_format,
            latency_ms = start_time.elapsed().as_millis(),
            audio_size_bytes = audio.len(),
            "TTS synthesis completed"
        );

        Ok(audio.to_vec())
    }
}
