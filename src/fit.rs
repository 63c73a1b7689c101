use std::borrow::Cow;

use crate::{
    error::{Error, Result, Variable},
    observation::{Metrics, Model, Observation},
    statistics,
};

/// Minimum number of observations needed to estimate both slope and intercept
pub const MIN_FIT_OBSERVATIONS: usize = 2;

/// Fits a straight line to a set of observations using ordinary least squares.
///
/// This is the closed-form estimator that minimizes the total squared residual
/// of `sales ≈ intercept + slope × advertising_spend`.
///
/// <div class="warning">
///
/// **Technical Details**
///
/// ```math
/// slope     = Σ (x_i - x_mean)(y_i - y_mean) / Σ (x_i - x_mean)²
/// intercept = y_mean - slope * x_mean
/// where
///   x_i = advertising spend, y_i = sales
/// ```
/// </div>
///
/// The result depends only on the input values, so refitting the same data
/// yields bit-identical coefficients.
///
/// # Errors
/// - `Error::InsufficientData`: fewer than [`MIN_FIT_OBSERVATIONS`] observations.
/// - `Error::InsufficientVariance`: every observation has the same advertising spend,
///   so the slope is undefined.
///
/// # Example
/// ```
/// # use linear_lens::{fit, Observation};
/// let data = [
///     Observation::new(1, 1000.0, 7500.0),
///     Observation::new(2, 5000.0, 17500.0),
///     Observation::new(3, 10000.0, 30000.0),
/// ];
/// let model = fit(&data).unwrap();
/// assert!((model.slope - 2.5).abs() < 1e-9);
/// assert!((model.intercept - 5000.0).abs() < 1e-6);
/// ```
pub fn fit(observations: &[Observation]) -> Result<Model> {
    if observations.len() < MIN_FIT_OBSERVATIONS {
        return Err(Error::InsufficientData {
            required: MIN_FIT_OBSERVATIONS,
            actual: observations.len(),
        });
    }

    let x = observations.iter().map(|o| o.advertising_spend);
    let y = observations.iter().map(|o| o.sales);

    // Rounding in the mean keeps the centered sum below off zero for constant fractional spend
    if statistics::is_constant(x.clone()) == Some(true) {
        return Err(Error::InsufficientVariance(Variable::AdvertisingSpend));
    }

    // Both are Some, the length was checked above
    let (Some(x_mean), Some(y_mean)) = (statistics::mean(x), statistics::mean(y)) else {
        return Err(Error::InsufficientData {
            required: MIN_FIT_OBSERVATIONS,
            actual: 0,
        });
    };

    let mut numerator = 0.0;
    let mut denominator = 0.0;
    for o in observations {
        let dx = o.advertising_spend - x_mean;
        numerator += dx * (o.sales - y_mean);
        denominator += dx * dx;
    }

    if denominator <= 0.0 {
        return Err(Error::InsufficientVariance(Variable::AdvertisingSpend));
    }

    let slope = numerator / denominator;
    let intercept = y_mean - slope * x_mean;

    log::debug!(
        "fitted {} observations: slope={slope}, intercept={intercept}",
        observations.len()
    );
    Ok(Model { slope, intercept })
}

/// Attaches the model's prediction to each observation.
///
/// Predictions are rounded to the nearest whole unit of sales. The input is left
/// untouched; a new vector is returned in the same order, with every other field preserved.
/// Applying the same model twice gives the same predictions.
///
/// # Example
/// ```
/// # use linear_lens::{predict, Model, Observation};
/// let data = [Observation::new(1, 5000.0, 17000.0)];
/// let predicted = predict(&data, &Model::new(2.5, 5000.0));
/// assert_eq!(predicted[0].predicted, Some(17500.0));
/// ```
#[must_use]
pub fn predict(observations: &[Observation], model: &Model) -> Vec<Observation> {
    observations
        .iter()
        .map(|o| o.with_prediction(model.predict(o.advertising_spend).round()))
        .collect()
}

/// A fitted line together with the data it was fitted to.
///
/// This is a convenience over [`fit`] and [`predict`] for when you want to ask
/// questions about the fit itself (residuals, in-sample error) without juggling
/// both halves separately.
///
/// # Example
/// ```
/// # use linear_lens::{LinearFit, Observation};
/// let data = vec![
///     Observation::new(1, 1000.0, 3000.0),
///     Observation::new(2, 2000.0, 4500.0),
///     Observation::new(3, 3000.0, 7500.0),
///     Observation::new(4, 4000.0, 8000.0),
/// ];
/// let fit = LinearFit::new(data).unwrap();
/// println!("{}", fit.model());
/// println!("R² = {:?}", fit.r_squared());
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct LinearFit<'data> {
    data: Cow<'data, [Observation]>,
    model: Model,
}
impl<'data> LinearFit<'data> {
    /// Fits a line to `data`. See [`fit`] for the estimator and its failure modes.
    ///
    /// # Errors
    /// Same as [`fit`].
    pub fn new(data: impl Into<Cow<'data, [Observation]>>) -> Result<Self> {
        let data: Cow<_> = data.into();
        let model = fit(&data)?;
        Ok(Self { data, model })
    }

    /// The fitted coefficients
    #[must_use]
    pub fn model(&self) -> &Model {
        &self.model
    }

    /// The observations the line was fitted to
    #[must_use]
    pub fn data(&self) -> &[Observation] {
        &self.data
    }

    /// Unrounded value of the fitted line at `advertising_spend`.
    #[must_use]
    pub fn y(&self, advertising_spend: f64) -> f64 {
        self.model.predict(advertising_spend)
    }

    /// The source data with rounded predictions attached.
    #[must_use]
    pub fn solution(&self) -> Vec<Observation> {
        predict(&self.data, &self.model)
    }

    /// Computes the residuals of the fit against its source data.
    ///
    /// Each entry is `(advertising_spend, sales - line(advertising_spend))`,
    /// using the unrounded line.
    #[must_use]
    pub fn residuals(&self) -> Vec<(f64, f64)> {
        self.data
            .iter()
            .map(|o| (o.advertising_spend, o.sales - self.y(o.advertising_spend)))
            .collect()
    }

    /// In-sample R² of the unrounded line.
    ///
    /// `None` if every sales value is the same.
    #[must_use]
    pub fn r_squared(&self) -> Option<f64> {
        let y = self.data.iter().map(|o| o.sales);
        let y_fit = self.data.iter().map(|o| self.y(o.advertising_spend));
        statistics::r_squared(y, y_fit)
    }

    /// In-sample mean squared error of the unrounded line.
    #[must_use]
    pub fn mean_squared_error(&self) -> f64 {
        let y = self.data.iter().map(|o| o.sales);
        let y_fit = self.data.iter().map(|o| self.y(o.advertising_spend));
        statistics::mean_squared_error(y, y_fit).unwrap_or_default()
    }

    /// Scores the rounded predictions of this line against another set of observations,
    /// usually a held-out test set.
    ///
    /// # Errors
    /// Same as [`statistics::metrics`].
    pub fn evaluate(&self, observations: &[Observation]) -> Result<Metrics> {
        statistics::metrics(&predict(observations, &self.model))
    }

    /// Converts this fit into one that owns its data.
    #[must_use]
    pub fn to_owned(&self) -> LinearFit<'static> {
        LinearFit {
            data: Cow::Owned(self.data.to_vec()),
            model: self.model,
        }
    }
}
