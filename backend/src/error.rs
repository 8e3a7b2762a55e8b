use thiserror::Error;

/// Failures surfaced in the `error` field of a `/py-data` response.
#[derive(Debug, Error, Clone, PartialEq)]
pub enum ProcessingError {
    #[error("Invalid input: Please provide a numeric value for 'input'.")]
    InvalidInput,

    #[error("An error occurred during processing: {0}")]
    Unexpected(String),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn invalid_input_message_is_fixed() {
        assert_eq!(
            ProcessingError::InvalidInput.to_string(),
            "Invalid input: Please provide a numeric value for 'input'."
        );
    }

    #[test]
    fn unexpected_embeds_description() {
        let err = ProcessingError::Unexpected("result is not a number".to_string());
        assert_eq!(
            err.to_string(),
            "An error occurred during processing: result is not a number"
        );
    }
}
