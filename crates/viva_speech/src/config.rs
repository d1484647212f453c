//! Recognizer settings: language, interim results, alternatives.

/// Settings applied to a recognition attempt. Defaults match the client's
/// original behavior: US English, final results only, a single alternative.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RecognizerConfig {
    /// BCP-47 language tag (e.g. "en-US").
    pub lang: String,
    /// When true, the backend may surface partial transcripts. This client
    /// only consumes final results.
    pub interim_results: bool,
    /// Maximum number of alternative transcripts to request.
    pub max_alternatives: u32,
}

impl Default for RecognizerConfig {
    fn default() -> Self {
        Self {
            lang: "en-US".to_string(),
            interim_results: false,
            max_alternatives: 1,
        }
    }
}

impl RecognizerConfig {
    pub fn with_lang(mut self, lang: impl Into<String>) -> Self {
        self.lang = lang.into();
        self
    }

    pub fn with_interim_results(mut self, interim: bool) -> Self {
        self.interim_results = interim;
        self
    }

    pub fn with_max_alternatives(mut self, n: u32) -> Self {
        self.max_alternatives = n;
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_match_client_settings() {
        let config = RecognizerConfig::default();
        assert_eq!(config.lang, "en-US");
        assert!(!config.interim_results);
        assert_eq!(config.max_alternatives, 1);
    }

    #[test]
    fn builders_override() {
        let config = RecognizerConfig::default()
            .with_lang("de-DE")
            .with_max_alternatives(3);
        assert_eq!(config.lang, "de-DE");
        assert_eq!(config.max_alternatives, 3);
    }
}
