use serde::{Deserialize, Serialize};

use crate::error::ProcessingError;

pub const DEFAULT_INPUT: &str = "0";

/// Query string of `/py-data`. Built from the raw pairs so a repeated
/// `input` keeps its first value and unknown keys are ignored.
#[derive(Debug, Deserialize, Clone, PartialEq)]
#[serde(from = "Vec<(String, String)>")]
pub struct NeuronQuery {
    pub input: String,
}

impl From<Vec<(String, String)>> for NeuronQuery {
    fn from(pairs: Vec<(String, String)>) -> Self {
        let input = pairs
            .into_iter()
            .find(|(key, _)| key == "input")
            .map(|(_, value)| value)
            .unwrap_or_else(|| DEFAULT_INPUT.to_string());

        NeuronQuery { input }
    }
}

impl NeuronQuery {
    /// Surrounding Unicode whitespace is tolerated, as are single `_`
    /// separators between digits (`1_000`). Anything else that is not an
    /// `f64` literal is rejected.
    pub fn parse_input(&self) -> Result<f64, ProcessingError> {
        strip_digit_separators(self.input.trim())
            .parse::<f64>()
            .map_err(|_| ProcessingError::InvalidInput)
    }
}

/// Drops each `_` whose neighbours are both ASCII digits. Leading, trailing
/// and doubled underscores are kept so the float parser rejects them.
fn strip_digit_separators(raw: &str) -> String {
    let chars: Vec<char> = raw.chars().collect();
    chars
        .iter()
        .enumerate()
        .filter(|&(i, &c)| {
            let between_digits = i > 0
                && chars[i - 1].is_ascii_digit()
                && chars.get(i + 1).is_some_and(|next| next.is_ascii_digit());
            !(c == '_' && between_digits)
        })
        .map(|(_, &c)| c)
        .collect()
}

#[derive(Debug, Serialize, Clone, PartialEq)]
pub struct NeuronResponse {
    pub input_received: String,
    pub processed_output: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

impl NeuronResponse {
    pub fn new(input_received: String, result: Result<f64, ProcessingError>) -> Self {
        match result {
            Ok(output) => NeuronResponse {
                input_received,
                processed_output: Some(output),
                error: None,
            },
            Err(e) => NeuronResponse {
                input_received,
                processed_output: None,
                error: Some(e.to_string()),
            },
        }
    }
}

#[derive(Debug, Serialize)]
pub struct ApiResponse<T> {
    pub success: bool,
    pub data: Option<T>,
    pub error: Option<String>,
    pub timestamp: String,
}

impl<T> ApiResponse<T> {
    pub fn success(data: T) -> Self {
        ApiResponse {
            success: true,
            data: Some(data),
            error: None,
            timestamp: chrono::Utc::now().to_rfc3339(),
        }
    }

    pub fn error(message: &str) -> Self {
        ApiResponse {
            success: false,
            data: None,
            error: Some(message.to_string()),
            timestamp: chrono::Utc::now().to_rfc3339(),
        }
    }
}
