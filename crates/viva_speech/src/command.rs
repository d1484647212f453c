//! External-command recognizer backend.
//!
//! The transcriber is a helper program (configured via `VIVA_SPEECH_CMD`)
//! that captures audio, performs speech-to-text, and prints the final
//! transcript to stdout. This crate only spawns it, passes the recognizer
//! settings on the command line, and reads the first line back.

use std::path::Path;

use async_trait::async_trait;
use tokio::process::Command;
use tracing::debug;

use crate::config::RecognizerConfig;
use crate::recognizer::{SpeechError, SpeechRecognizer};

/// Environment variable holding the transcriber command line.
pub const SPEECH_CMD_ENV: &str = "VIVA_SPEECH_CMD";

/// Recognizer that shells out to an external transcriber process.
#[derive(Debug, Clone)]
pub struct CommandRecognizer {
    program: String,
    args: Vec<String>,
    config: RecognizerConfig,
}

impl CommandRecognizer {
    pub fn new(
        program: impl Into<String>,
        args: Vec<String>,
        config: RecognizerConfig,
    ) -> Self {
        Self {
            program: program.into(),
            args,
            config,
        }
    }

    /// Build from `VIVA_SPEECH_CMD` (whitespace-split: program then args).
    /// Returns `None` when the variable is unset or blank.
    pub fn from_env(config: RecognizerConfig) -> Option<Self> {
        let raw = std::env::var(SPEECH_CMD_ENV).ok()?;
        let mut parts = raw.split_whitespace().map(str::to_string);
        let program = parts.next()?;
        Some(Self::new(program, parts.collect(), config))
    }

    /// True when the program names an existing file or resolves on PATH.
    fn resolves(&self) -> bool {
        let program = Path::new(&self.program);
        if program.components().count() > 1 {
            return program.is_file();
        }
        let Ok(path) = std::env::var("PATH") else {
            return false;
        };
        std::env::split_paths(&path).any(|dir| dir.join(&self.program).is_file())
    }

    fn settings_args(&self) -> Vec<String> {
        let mut args = vec![
            "--lang".to_string(),
            self.config.lang.clone(),
            "--max-alternatives".to_string(),
            self.config.max_alternatives.to_string(),
        ];
        if self.config.interim_results {
            args.push("--interim-results".to_string());
        }
        args
    }
}

#[async_trait]
impl SpeechRecognizer for CommandRecognizer {
    fn is_supported(&self) -> bool {
        !self.program.is_empty() && self.resolves()
    }

    async fn recognize_once(&self) -> Result<String, SpeechError> {
        if !self.is_supported() {
            return Err(SpeechError::Unsupported);
        }
        debug!(program = %self.program, "starting recognition attempt");
        let output = Command::new(&self.program)
            .args(&self.args)
            .args(self.settings_args())
            .kill_on_drop(true)
            .output()
            .await
            .map_err(|e| SpeechError::Start(e.to_string()))?;

        if !output.status.success() {
            let stderr = String::from_utf8_lossy(&output.stderr);
            return Err(SpeechError::Recognition(
                stderr.trim().lines().next().unwrap_or("transcriber failed").to_string(),
            ));
        }

        let stdout = String::from_utf8_lossy(&output.stdout);
        let transcript = stdout
            .lines()
            .map(str::trim)
            .find(|line| !line.is_empty())
            .unwrap_or("")
            .to_string();
        if transcript.is_empty() {
            return Err(SpeechError::Recognition("empty transcript".to_string()));
        }
        Ok(transcript)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    // `sh -c` swallows the settings args as positional params, so tests see
    // exactly what the script prints.
    fn sh(script: &str) -> CommandRecognizer {
        CommandRecognizer::new(
            "sh",
            vec!["-c".to_string(), script.to_string()],
            RecognizerConfig::default(),
        )
    }

    #[tokio::test]
    async fn transcript_from_stdout() {
        let rec = sh("echo what is gravity");
        assert!(rec.is_supported());
        assert_eq!(rec.recognize_once().await.unwrap(), "what is gravity");
    }

    #[tokio::test]
    async fn first_nonempty_line_wins() {
        let rec = sh("printf '\\nfirst line\\nsecond line\\n'");
        assert_eq!(rec.recognize_once().await.unwrap(), "first line");
    }

    #[tokio::test]
    async fn nonzero_exit_is_recognition_error() {
        let rec = sh("echo 'mic unavailable' >&2; exit 1");
        match rec.recognize_once().await {
            Err(SpeechError::Recognition(msg)) => assert_eq!(msg, "mic unavailable"),
            other => panic!("expected Recognition error, got {:?}", other),
        }
    }

    #[tokio::test]
    async fn empty_output_is_recognition_error() {
        let rec = sh("true");
        assert!(matches!(
            rec.recognize_once().await,
            Err(SpeechError::Recognition(_))
        ));
    }

    #[tokio::test]
    async fn missing_program_is_unsupported() {
        let rec = CommandRecognizer::new(
            "viva-no-such-transcriber",
            vec![],
            RecognizerConfig::default(),
        );
        assert!(!rec.is_supported());
        assert!(matches!(
            rec.recognize_once().await,
            Err(SpeechError::Unsupported)
        ));
    }

    #[test]
    fn from_env_round_trip() {
        // Set → parsed, unset → None. One test so the env var is not shared
        // across parallel tests.
        std::env::set_var(SPEECH_CMD_ENV, "transcribe --device default");
        let rec = CommandRecognizer::from_env(RecognizerConfig::default()).unwrap();
        assert_eq!(rec.program, "transcribe");
        assert_eq!(rec.args, vec!["--device".to_string(), "default".to_string()]);

        std::env::remove_var(SPEECH_CMD_ENV);
        assert!(CommandRecognizer::from_env(RecognizerConfig::default()).is_none());
    }

    #[test]
    fn settings_args_carry_config() {
        let rec = CommandRecognizer::new(
            "transcribe",
            vec![],
            RecognizerConfig::default()
                .with_lang("fr-FR")
                .with_interim_results(true),
        );
        let args = rec.settings_args();
        assert!(args.windows(2).any(|w| w == ["--lang", "fr-FR"]));
        assert!(args.contains(&"--interim-results".to_string()));
    }
}
