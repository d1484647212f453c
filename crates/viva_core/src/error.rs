use thiserror::Error;

#[derive(Error, Debug)]
pub enum VivaError {
    #[error("channel error: {0}")]
    Channel(String),

    #[error("speech error: {0}")]
    Speech(String),

    #[error("config error: {0}")]
    Config(String),

    #[error(transparent)]
    Io(#[from] std::io::Error),

    #[error(transparent)]
    Json(#[from] serde_json::Error),

    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

pub type Result<T> = std::result::Result<T, VivaError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_channel_error() {
        let err = VivaError::Channel("handshake refused".to_string());
        assert_eq!(err.to_string(), "channel error: handshake refused");
    }

    #[test]
    fn test_speech_error() {
        let err = VivaError::Speech("no transcript".to_string());
        assert_eq!(err.to_string(), "speech error: no transcript");
    }

    #[test]
    fn test_config_error() {
        let err = VivaError::Config("bad server url".to_string());
        assert_eq!(err.to_string(), "config error: bad server url");
    }

    #[test]
    fn test_io_error() {
        let io_err = std::io::Error::new(std::io::ErrorKind::ConnectionRefused, "refused");
        let err = VivaError::from(io_err);
        assert!(err.to_string().contains("refused"));
    }

    #[test]
    fn test_json_error() {
        let json_err = serde_json::from_str::<serde_json::Value>("not json");
        let err = VivaError::from(json_err.unwrap_err());
        assert!(err.to_string().contains("expected value"));
    }
}
