//! Functions for evaluating how well a fitted line explains the data
//!
//! # Regression Diagnostics
//! - [`metrics`]: R², MSE and RMSE of a set of predicted observations, rounded for display.
//! - [`r_squared`]: Proportion of variance explained by the model. 1 is a perfect fit.
//!
//! # Error Metrics
//! - [`sum_of_squared_errors`]: Total squared difference between observed and predicted values.
//! - [`mean_squared_error`]: Average squared difference between observed and predicted values. Lower is better.
//! - [`root_mean_squared_error`]: Square root of MSE, giving error in the same units as sales. Lower is better.
//! - [`mean_absolute_error`]: Average absolute difference between observed and predicted values. Lower is better.
//!
//! # Descriptive Statistics
//! - [`mean`]: Arithmetic mean of a dataset.
//! - [`total_sum_of_squares`]: Squared spread of a dataset around its mean.
//! - [`is_constant`]: Whether every value in a dataset is identical.
//!
//! The iterator-based helpers return `None` where the result would be undefined
//! (empty input, zero variance) instead of producing `NaN`.
//!
//! # Examples
//!
//! ```rust
//! use linear_lens::statistics::{r_squared, mean_squared_error};
//!
//! let y = vec![1.0, 2.0, 3.0];
//! let y_fit = vec![1.1, 1.9, 3.05];
//!
//! let r2 = r_squared(y.iter().copied(), y_fit.iter().copied()).unwrap();
//! let mse = mean_squared_error(y.into_iter(), y_fit.into_iter()).unwrap();
//! println!("R² = {r2}, MSE = {mse}");
//! ```
use crate::{
    error::{Error, Result, Variable},
    observation::{Metrics, Observation},
};

/// Decimal places kept in [`Metrics::r_squared`]
pub const R_SQUARED_PRECISION: i32 = 4;

/// Decimal places kept in [`Metrics::mse`] and [`Metrics::rmse`]
pub const ERROR_PRECISION: i32 = 2;

/// Computes the arithmetic mean of a sequence of values.
///
/// Returns `None` if the iterator yields no elements.
///
/// # Examples
/// ```rust
/// let values = vec![1.0, 2.0, 3.0];
/// let m = linear_lens::statistics::mean(values.into_iter());
/// assert_eq!(m, Some(2.0));
/// ```
pub fn mean(data: impl Iterator<Item = f64>) -> Option<f64> {
    let mut sum = 0.0;
    let mut count = 0usize;
    for value in data {
        sum += value;
        count += 1;
    }

    if count == 0 {
        return None;
    }
    Some(sum / count as f64)
}

/// Sum of squared differences between observed and predicted values.
///
/// <div class="warning">
///
/// **Technical Details**
///
/// ```math
/// SSE = Σ (y_i - y_fit_i)²
/// ```
/// </div>
pub fn sum_of_squared_errors(
    y: impl Iterator<Item = f64>,
    y_fit: impl Iterator<Item = f64>,
) -> f64 {
    sum_of_squared_errors_with_n(y, y_fit).0
}

fn sum_of_squared_errors_with_n(
    y: impl Iterator<Item = f64>,
    y_fit: impl Iterator<Item = f64>,
) -> (f64, usize) {
    let mut sse = 0.0;
    let mut n = 0;
    for (y, y_fit) in y.zip(y_fit) {
        sse += (y - y_fit).powi(2);
        n += 1;
    }
    (sse, n)
}

/// Total sum of squares: the squared spread of `y` around its own mean.
///
/// <div class="warning">
///
/// **Technical Details**
///
/// ```math
/// SST = Σ (y_i - y_mean)²
/// ```
/// </div>
///
/// Returns `None` for an empty dataset.
pub fn total_sum_of_squares(y: impl Iterator<Item = f64> + Clone) -> Option<f64> {
    let y_mean = mean(y.clone())?;
    Some(y.map(|y| (y - y_mean).powi(2)).sum())
}

/// Whether every value in `data` is identical.
///
/// Compares values directly rather than checking the spread around the mean, which
/// picks up rounding error for values like `0.1` that have no exact binary form.
///
/// Returns `None` for an empty dataset.
///
/// ```rust
/// # use linear_lens::statistics::is_constant;
/// assert_eq!(is_constant([0.1, 0.1, 0.1].into_iter()), Some(true));
/// assert_eq!(is_constant([0.1, 0.2].into_iter()), Some(false));
/// ```
#[allow(clippy::float_cmp)]
pub fn is_constant(mut data: impl Iterator<Item = f64>) -> Option<bool> {
    let first = data.next()?;
    Some(data.all(|value| value == first))
}

/// Calculate the R-squared value for a set of data.
///
/// R-squared tells you how well the model explains the data:
/// - `1` means the model explains all the variation.
/// - `0` means it does no better than always guessing the mean.
/// - Negative values mean it does worse than the mean.
///
/// <div class="warning">
///
/// **Technical Details**
///
/// ```math
/// R² = 1 - (SS_res / SS_tot)
/// where
///   SS_res = Σ (y_i - y_fit_i)²
///   SS_tot = Σ (y_i - y_mean)²
/// ```
/// </div>
///
/// # Returns
/// `None` if `y` is empty or every value in it is identical, since `SS_tot` is then zero.
///
/// # Example
/// ```rust
/// # use linear_lens::statistics::r_squared;
/// let y = vec![1.0, 2.0, 3.0];
/// let y_fit = vec![2.0, 2.0, 2.0];
/// assert_eq!(r_squared(y.into_iter(), y_fit.into_iter()), Some(0.0));
/// ```
pub fn r_squared(
    y: impl Iterator<Item = f64> + Clone,
    y_fit: impl Iterator<Item = f64>,
) -> Option<f64> {
    // Constant non-integer data still leaves a rounding residue in SS_tot
    if is_constant(y.clone())? {
        return None;
    }

    let ss_tot = total_sum_of_squares(y.clone())?;
    if ss_tot == 0.0 {
        return None;
    }

    let ss_res = sum_of_squared_errors(y, y_fit);
    Some(1.0 - ss_res / ss_tot)
}

/// Average squared difference between observed and predicted values.
///
/// Returns `None` for an empty dataset.
pub fn mean_squared_error(
    y: impl Iterator<Item = f64>,
    y_fit: impl Iterator<Item = f64>,
) -> Option<f64> {
    let (sse, n) = sum_of_squared_errors_with_n(y, y_fit);
    if n == 0 {
        return None;
    }
    Some(sse / n as f64)
}

/// Square root of [`mean_squared_error`]; the typical size of a prediction error.
pub fn root_mean_squared_error(
    y: impl Iterator<Item = f64>,
    y_fit: impl Iterator<Item = f64>,
) -> Option<f64> {
    mean_squared_error(y, y_fit).map(f64::sqrt)
}

/// Average absolute difference between observed and predicted values.
///
/// Less sensitive to a few large misses than [`mean_squared_error`].
pub fn mean_absolute_error(
    y: impl Iterator<Item = f64>,
    y_fit: impl Iterator<Item = f64>,
) -> Option<f64> {
    let mut total = 0.0;
    let mut n = 0usize;
    for (y, y_fit) in y.zip(y_fit) {
        total += (y - y_fit).abs();
        n += 1;
    }

    if n == 0 {
        return None;
    }
    Some(total / n as f64)
}

/// Rounds `value` to `decimals` places after the point.
///
/// ```rust
/// # use linear_lens::statistics::round_to;
/// assert_eq!(round_to(0.939_130_4, 4), 0.9391);
/// assert_eq!(round_to(512.347_538, 2), 512.35);
/// ```
#[must_use]
pub fn round_to(value: f64, decimals: i32) -> f64 {
    let scale = 10f64.powi(decimals);
    (value * scale).round() / scale
}

/// Scores a set of predicted observations.
///
/// Every observation must already carry a prediction (see [`crate::predict`]).
/// Sums are computed at full precision; only the final values are rounded,
/// `r_squared` to [`R_SQUARED_PRECISION`] places and `mse`/`rmse` to [`ERROR_PRECISION`].
///
/// # Errors
/// - `Error::InsufficientData`: `observations` is empty.
/// - `Error::MissingPrediction`: an observation has no prediction.
/// - `Error::InsufficientVariance`: every `sales` value is the same, so R² is undefined.
///
/// # Example
/// ```rust
/// # use linear_lens::{Observation, statistics::metrics};
/// let data = [
///     Observation::new(1, 1000.0, 3000.0).with_prediction(3000.0),
///     Observation::new(2, 2000.0, 5000.0).with_prediction(5000.0),
/// ];
/// let m = metrics(&data).unwrap();
/// assert_eq!(m.r_squared, 1.0);
/// assert_eq!(m.rmse, 0.0);
/// ```
pub fn metrics(observations: &[Observation]) -> Result<Metrics> {
    if observations.is_empty() {
        return Err(Error::InsufficientData {
            required: 1,
            actual: 0,
        });
    }

    let predicted = observations
        .iter()
        .map(|o| o.predicted.ok_or(Error::MissingPrediction { id: o.id }))
        .collect::<Result<Vec<_>>>()?;
    let actual = observations.iter().map(|o| o.sales);

    let r_squared = r_squared(actual.clone(), predicted.iter().copied())
        .ok_or(Error::InsufficientVariance(Variable::Sales))?;

    // n > 0 was checked above
    let mse = mean_squared_error(actual, predicted.iter().copied()).unwrap_or_default();
    let rmse = mse.sqrt();

    log::trace!("metrics over {} observations: r2={r_squared}, mse={mse}", observations.len());
    Ok(Metrics {
        r_squared: round_to(r_squared, R_SQUARED_PRECISION),
        mse: round_to(mse, ERROR_PRECISION),
        rmse: round_to(rmse, ERROR_PRECISION),
    })
}
