use serde::Serialize;

/// Fitted service-time model:
/// `hours = intercept + coefficients[0] * frequency + coefficients[1] * difficulty`.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct RegressionResult {
    pub r_squared: f64,
    /// Predictor order: frequency, difficulty.
    pub coefficients: [f64; 2],
    pub intercept: f64,
    pub samples: usize,
}

impl RegressionResult {
    pub fn predict(&self, frequency: f64, difficulty: f64) -> f64 {
        self.intercept + self.coefficients[0] * frequency + self.coefficients[1] * difficulty
    }

    pub fn coef_frequency(&self) -> f64 {
        self.coefficients[0]
    }

    pub fn coef_difficulty(&self) -> f64 {
        self.coefficients[1]
    }
}
