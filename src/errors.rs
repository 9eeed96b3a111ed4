use thiserror::Error;

pub type EllaResult<T> = Result<T, EllaError>;

#[derive(Error, Debug)]
pub enum EllaError {
    #[error("config error: {0}")]
    Config(String),

    #[error("logging error: {0}")]
    Logging(String),
}

impl EllaError {
    pub fn config_error(msg: impl Into<String>) -> Self {
        EllaError::Config(msg.into())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display_carries_context() {
        let err = EllaError::config_error("assistant_name is required");
        assert_eq!(err.to_string(), "config error: assistant_name is required");

        let err = EllaError::Logging("bad spec".to_string());
        assert_eq!(err.to_string(), "logging error: bad spec");
    }
}
