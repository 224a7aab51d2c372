pub mod dto;
pub mod error;
pub mod service;
pub mod ssml;

pub use dto::{RequestBodyError, SynthesisRequest, SynthesisResponse};
pub use error::TtsServiceError;
pub use service::{SynthesisDefaults, TtsService, TtsServiceApi};
pub use ssml::{build_ssml, escape_xml, VoiceSettings};
