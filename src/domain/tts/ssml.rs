//! Speech Synthesis Markup Language documents for the Azure voice service.

const SPEAK_OPEN: &str = concat!(
    r#"<speak version="1.0" xmlns="http://www.w3.org/2001/10/synthesis" "#,
    r#"xmlns:mstts="https://www.w3.org/2001/mstts" xml:lang="en-US">"#
);

/// Escape a value for use as XML element content or a quoted attribute.
///
/// `&` must be replaced first so entities produced by later steps are not
/// escaped twice.
pub fn escape_xml(value: &str) -> String {
    value
        .replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
        .replace('"', "&quot;")
        .replace('\'', "&apos;")
}

/// Voice and prosody settings wrapped around the spoken text.
#[derive(Debug, Clone, PartialEq)]
pub struct VoiceSettings {
    pub voice: String,
    pub rate: String,
    pub pitch: String,
    /// `mstts:express-as` style; no wrapper is emitted when `None`.
    pub style: Option<String>,
}

/// Build a single-line SSML document speaking `text` with `settings`.
///
/// Every caller-supplied value is escaped, so the result is well-formed
/// regardless of input.
pub fn build_ssml(text: &str, settings: &VoiceSettings) -> String {
    let mut ssml = String::with_capacity(SPEAK_OPEN.len() + text.len() + 192);

    ssml.push_str(SPEAK_OPEN);
    ssml.push_str(&format!(r#"<voice name="{}">"#, escape_xml(&settings.voice)));

    let style = settings.style.as_deref().filter(|s| !s.is_empty());
    if let Some(style) = style {
        ssml.push_str(&format!(
            r#"<mstts:express-as style="{}">"#,
            escape_xml(style)
        ));
    }

    ssml.push_str(&format!(
        r#"<prosody rate="{}" pitch="{}">{}</prosody>"#,
        escape_xml(&settings.rate),
        escape_xml(&settings.pitch),
        escape_xml(text)
    ));

    if style.is_some() {
        ssml.push_str("</mstts:express-as>");
    }
    ssml.push_str("</voice></speak>");

    ssml
}
