//! Data types shared across the regression engine
//!
//! - [`Observation`]: one (advertising spend, sales) sample, optionally carrying a prediction.
//! - [`Model`]: fitted coefficients of `sales ≈ intercept + slope × advertising_spend`.
//! - [`Metrics`]: goodness-of-fit summary of a set of predictions.
use serde::{Deserialize, Serialize};

/// A single (advertising spend, sales) sample.
///
/// Observations are never mutated once generated; [`Observation::with_prediction`]
/// returns a copy carrying the predicted value instead.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Observation {
    /// 1-based position in generation order
    pub id: usize,

    /// Advertising spend (x)
    pub advertising_spend: f64,

    /// Actual sales (y)
    pub sales: f64,

    /// Sales predicted by a model, if one has been applied
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub predicted: Option<f64>,
}
impl Observation {
    /// Creates an observation with no prediction attached.
    #[must_use]
    pub fn new(id: usize, advertising_spend: f64, sales: f64) -> Self {
        Self {
            id,
            advertising_spend,
            sales,
            predicted: None,
        }
    }

    /// Returns a copy of this observation with `predicted` set.
    #[must_use]
    pub fn with_prediction(self, predicted: f64) -> Self {
        Self {
            predicted: Some(predicted),
            ..self
        }
    }

    /// Prediction error (`predicted - sales`), if a prediction is attached.
    ///
    /// Positive means the model over-estimated sales.
    #[must_use]
    pub fn residual(&self) -> Option<f64> {
        self.predicted.map(|p| p - self.sales)
    }
}

/// Fitted coefficients of a simple linear model.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Model {
    /// Change in sales per unit of advertising spend
    pub slope: f64,

    /// Sales at zero advertising spend
    pub intercept: f64,
}
impl Model {
    /// Creates a model from known coefficients.
    #[must_use]
    pub fn new(slope: f64, intercept: f64) -> Self {
        Self { slope, intercept }
    }

    /// Evaluates the regression line at `advertising_spend`, without rounding.
    ///
    /// ```rust
    /// # use linear_lens::Model;
    /// let model = Model::new(2.5, 5000.0);
    /// assert_eq!(model.predict(1000.0), 7500.0);
    /// ```
    #[must_use]
    pub fn predict(&self, advertising_spend: f64) -> f64 {
        self.intercept + self.slope * advertising_spend
    }
}
impl std::fmt::Display for Model {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "Sales = {:.2} + {:.4} × Advertising Spend",
            self.intercept, self.slope
        )
    }
}

/// Goodness-of-fit of a model against a set of observations.
///
/// Values are rounded for display: `r_squared` to 4 decimals, `mse` and `rmse` to 2.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Metrics {
    /// Coefficient of determination. 1 is a perfect fit; can be negative for a bad one
    pub r_squared: f64,

    /// Mean squared error
    pub mse: f64,

    /// Root mean squared error, in the same units as sales
    pub rmse: f64,
}
