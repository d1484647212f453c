//! Recognizer contract and the events it produces.

use async_trait::async_trait;
use thiserror::Error;

/// What a recognition attempt produced, as delivered to the UI loop.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SpeechEvent {
    /// Final transcript of the attempt.
    Result { transcript: String },
    /// The attempt failed; the UI shows this and returns to ready state.
    Error { message: String },
}

impl SpeechEvent {
    pub fn result(transcript: impl Into<String>) -> Self {
        SpeechEvent::Result {
            transcript: transcript.into(),
        }
    }

    pub fn error(message: impl Into<String>) -> Self {
        SpeechEvent::Error {
            message: message.into(),
        }
    }
}

#[derive(Error, Debug)]
pub enum SpeechError {
    /// No backend is configured or the configured backend cannot run.
    #[error("speech recognition not supported")]
    Unsupported,

    #[error("recognizer failed to start: {0}")]
    Start(String),

    #[error("recognition failed: {0}")]
    Recognition(String),

    #[error(transparent)]
    Io(#[from] std::io::Error),
}

/// One-shot speech recognition: a start produces exactly one final
/// transcript or one error, like the capability object the original client
/// wires its record button to.
#[async_trait]
pub trait SpeechRecognizer: Send + Sync {
    /// True when the backend can actually start a recognition attempt.
    /// When false, the record control is disabled at load.
    fn is_supported(&self) -> bool;

    /// Run one recognition attempt to completion.
    async fn recognize_once(&self) -> Result<String, SpeechError>;
}

#[cfg(test)]
mod tests {
    use super::*;

    struct Scripted {
        transcript: &'static str,
    }

    #[async_trait]
    impl SpeechRecognizer for Scripted {
        fn is_supported(&self) -> bool {
            true
        }

        async fn recognize_once(&self) -> Result<String, SpeechError> {
            Ok(self.transcript.to_string())
        }
    }

    #[tokio::test]
    async fn scripted_recognizer_round_trip() {
        let rec = Scripted {
            transcript: "what is gravity",
        };
        assert!(rec.is_supported());
        assert_eq!(rec.recognize_once().await.unwrap(), "what is gravity");
    }

    #[test]
    fn speech_event_constructors() {
        assert_eq!(
            SpeechEvent::result("hi"),
            SpeechEvent::Result {
                transcript: "hi".to_string()
            }
        );
        assert_eq!(
            SpeechEvent::error("mic busy"),
            SpeechEvent::Error {
                message: "mic busy".to_string()
            }
        );
    }

    #[test]
    fn unsupported_error_message() {
        assert_eq!(
            SpeechError::Unsupported.to_string(),
            "speech recognition not supported"
        );
    }
}
