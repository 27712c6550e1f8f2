use thiserror::Error;

/// Failure while handing a completed application to a submission gateway.
#[derive(Debug, Error)]
pub enum SubmissionError {
    #[error("could not encode application: {0}")]
    Encode(#[from] serde_json::Error),
    #[error("submission service unavailable: {0}")]
    Unavailable(String),
}

pub type SubmissionResult<T> = Result<T, SubmissionError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display() {
        assert_eq!(
            SubmissionError::Unavailable("offline".to_string()).to_string(),
            "submission service unavailable: offline"
        );
    }

    #[test]
    fn test_from_serde_error() {
        let err = serde_json::from_str::<u8>("nope").unwrap_err();
        let err: SubmissionError = err.into();
        assert!(matches!(err, SubmissionError::Encode(_)));
    }
}
