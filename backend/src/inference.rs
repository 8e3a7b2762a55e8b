use serde::Serialize;

pub const WEIGHT: f64 = 0.5;
pub const BIAS: f64 = -0.1;

/// Logistic function, `1 / (1 + e^-x)`.
pub fn sigmoid(x: f64) -> f64 {
    1.0 / (1.0 + (-x).exp())
}

/// Single fixed-parameter neuron: `sigmoid(x * weight + bias)`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Neuron {
    pub weight: f64,
    pub bias: f64,
}

impl Default for Neuron {
    fn default() -> Self {
        Self {
            weight: WEIGHT,
            bias: BIAS,
        }
    }
}

impl Neuron {
    pub fn activation(&self, x: f64) -> f64 {
        x * self.weight + self.bias
    }

    /// Total over finite inputs; extreme magnitudes saturate to 0.0 or 1.0.
    pub fn compute(&self, x: f64) -> f64 {
        sigmoid(self.activation(x))
    }

    pub fn info(&self) -> NeuronInfo {
        NeuronInfo {
            weight: self.weight,
            bias: self.bias,
            activation: "sigmoid".to_string(),
        }
    }
}

#[derive(Debug, Serialize, Clone, PartialEq)]
pub struct NeuronInfo {
    pub weight: f64,
    pub bias: f64,
    pub activation: String,
}
