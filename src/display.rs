//! Utilities for presenting a fitted model to a learner
//!
//! This module turns models, metrics and observations into human-readable text:
//! - [`metrics_report`]: the regression equation and the three goodness-of-fit numbers.
//! - [`interpretation`]: plain-language bullets explaining what the numbers mean.
//! - [`FitStrength`]: a coarse label for an R² value.
//! - [`DataTable`]: a preview of the first few rows of a dataset.
//! - [`CONCEPTS`]: background on the model and the metrics, independent of any fit.
//!
//! # Helpers
//! - [`format_number`]: Thousands-separated numbers, skipping trailing zeros.
//! - [`format_dollars`]: The same, with a leading `$`.
use std::fmt::Write;

use crate::observation::{Metrics, Model, Observation};

/// Number of rows shown by a [`DataTable`] preview
pub const PREVIEW_ROWS: usize = 10;

/// How strongly advertising spend and sales are related, judged from R².
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FitStrength {
    /// R² of at least 0.7
    Strong,

    /// R² of at least 0.5
    Moderate,

    /// Anything lower
    Weak,
}
impl FitStrength {
    /// Classifies an R² value.
    ///
    /// ```rust
    /// # use linear_lens::display::FitStrength;
    /// assert_eq!(FitStrength::from_r_squared(0.82), FitStrength::Strong);
    /// assert_eq!(FitStrength::from_r_squared(0.5), FitStrength::Moderate);
    /// assert_eq!(FitStrength::from_r_squared(-1.0), FitStrength::Weak);
    /// ```
    #[must_use]
    pub fn from_r_squared(r_squared: f64) -> Self {
        if r_squared >= 0.7 {
            Self::Strong
        } else if r_squared >= 0.5 {
            Self::Moderate
        } else {
            Self::Weak
        }
    }

    /// One-line description for display under the R² value
    #[must_use]
    pub fn description(self) -> &'static str {
        match self {
            Self::Strong => "Strong correlation between advertising and sales",
            Self::Moderate => "Moderate correlation between advertising and sales",
            Self::Weak => "Weak correlation between advertising and sales",
        }
    }
}

/// Formats a number with thousands separators and at most `max_decimals` decimals.
///
/// Trailing zeros after the decimal point are dropped.
///
/// ```rust
/// # use linear_lens::display::format_number;
/// assert_eq!(format_number(1234567.0, 2), "1,234,567");
/// assert_eq!(format_number(512.347, 2), "512.35");
/// assert_eq!(format_number(-2500.5, 2), "-2,500.5");
/// ```
#[must_use]
pub fn format_number(value: f64, max_decimals: usize) -> String {
    let fixed = format!("{:.*}", max_decimals, value.abs());
    let (int_part, frac_part) = match fixed.split_once('.') {
        Some((i, f)) => (i, f.trim_end_matches('0')),
        None => (fixed.as_str(), ""),
    };

    let mut out = String::with_capacity(fixed.len() + int_part.len() / 3 + 1);
    let is_zero = int_part.chars().all(|c| c == '0') && frac_part.is_empty();
    if value.is_sign_negative() && !is_zero {
        out.push('-');
    }

    for (i, c) in int_part.chars().enumerate() {
        if i > 0 && (int_part.len() - i) % 3 == 0 {
            out.push(',');
        }
        out.push(c);
    }

    if !frac_part.is_empty() {
        out.push('.');
        out.push_str(frac_part);
    }
    out
}

/// [`format_number`] with a dollar sign; negative amounts render as `-$1,234`.
#[must_use]
pub fn format_dollars(value: f64, max_decimals: usize) -> String {
    let formatted = format_number(value, max_decimals);
    match formatted.strip_prefix('-') {
        Some(abs) => format!("-${abs}"),
        None => format!("${formatted}"),
    }
}

/// Plain-language explanation of a fitted model and its test metrics.
///
/// Returns three bullets: base sales, the effect of each $1,000 of advertising,
/// and how much of the variation in sales the model explains.
#[must_use]
pub fn interpretation(model: &Model, metrics: &Metrics) -> Vec<String> {
    let base_sales = model.intercept.round().max(0.0);
    let explained = metrics.r_squared * 100.0;

    vec![
        format!(
            "Base sales: With zero advertising spend, the model predicts {} in sales.",
            format_dollars(base_sales, 0)
        ),
        format!(
            "Advertising impact: Each $1,000 spent on advertising is associated with \
             an additional ${:.2} in sales.",
            model.slope * 1000.0
        ),
        format!(
            "Model accuracy: The model explains {explained:.0}% of the variation in sales. \
             The remaining {:.0}% is due to other factors not included in the model.",
            100.0 - explained
        ),
    ]
}

/// Background on simple linear regression: the idea, the equation, and how to
/// read the three metrics.
pub const CONCEPTS: &str = "\
About Linear Regression

Concept
  Simple linear regression models the relationship between an independent
  variable X (Advertising Spend) and a dependent variable Y (Sales) by finding
  the best-fitting straight line through the data points: the regression line.

  Key assumptions:
  - There is a linear relationship between the variables
  - The data points are independent of each other
  - The variance of the residuals is constant (homoscedasticity)
  - The residuals follow a normal distribution

Equation
  Y = β₀ + β₁X + ε
  - Y:  Dependent variable (Sales)
  - X:  Independent variable (Advertising Spend)
  - β₀: Intercept, the sales when advertising is zero
  - β₁: Slope, the change in sales for each unit change in advertising
  - ε:  Error term, the variation not explained by the model
  β₀ and β₁ are estimated by minimizing the sum of squared residuals, the
  differences between observed and predicted values.

Metrics
  R² (Coefficient of Determination)
    The proportion of the variance in sales explained by advertising spend.
    Close to 1, advertising strongly explains sales; close to 0, it barely does.
  MSE (Mean Squared Error)
    The average squared difference between predicted and actual sales. Lower is
    better. Its units are squared dollars.
  RMSE (Root Mean Squared Error)
    The square root of MSE, back in dollars. It is the standard deviation of the
    residuals.
";

/// Renders the model equation, its meaning, and the test metrics as a text block.
///
/// # Example
/// ```rust
/// # use linear_lens::{display::metrics_report, Metrics, Model};
/// let report = metrics_report(
///     &Model::new(2.5, 5000.0),
///     &Metrics { r_squared: 0.8123, mse: 1_250_000.0, rmse: 1118.03 },
/// );
/// assert!(report.contains("Sales = 5000.00 + 2.5000 × Advertising Spend"));
/// assert!(report.contains("R²   0.81"));
/// ```
#[must_use]
pub fn metrics_report(model: &Model, metrics: &Metrics) -> String {
    let mut out = String::new();
    let strength = FitStrength::from_r_squared(metrics.r_squared);

    // Writing to a String cannot fail
    let _ = writeln!(out, "Regression Equation");
    let _ = writeln!(out, "  {model}");
    let _ = writeln!(
        out,
        "  For every additional $1 spent on advertising, we expect sales to increase by ${:.4}.",
        model.slope
    );
    let _ = writeln!(out);
    let _ = writeln!(out, "R²   {:.2}  {}", metrics.r_squared, strength.description());
    let _ = writeln!(
        out,
        "MSE  {}  Average squared difference between predicted and actual sales",
        format_number(metrics.mse, 2)
    );
    let _ = writeln!(
        out,
        "RMSE {}  Average error in sales prediction (in dollars)",
        format_dollars(metrics.rmse, 2)
    );
    out
}

/// A preview of a dataset: the first [`PREVIEW_ROWS`] observations.
///
/// Prediction and error columns are shown only when every previewed row has a prediction.
#[derive(Debug, Clone, Copy)]
pub struct DataTable<'a> {
    title: &'a str,
    rows: &'a [Observation],
}
impl<'a> DataTable<'a> {
    /// Creates a table preview over `rows`.
    #[must_use]
    pub fn new(title: &'a str, rows: &'a [Observation]) -> Self {
        Self { title, rows }
    }

    /// The rows that will actually be displayed
    #[must_use]
    pub fn visible_rows(&self) -> &'a [Observation] {
        &self.rows[..self.rows.len().min(PREVIEW_ROWS)]
    }

    /// `"Showing 10 of M records"`, if the table is truncated
    #[must_use]
    pub fn footer(&self) -> Option<String> {
        (self.rows.len() > PREVIEW_ROWS)
            .then(|| format!("Showing {PREVIEW_ROWS} of {} records", self.rows.len()))
    }

    fn show_predictions(&self) -> bool {
        let visible = self.visible_rows();
        !visible.is_empty() && visible.iter().all(|o| o.predicted.is_some())
    }
}
impl std::fmt::Display for DataTable<'_> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        writeln!(f, "{} ({} samples)", self.title, self.rows.len())?;

        let show_predictions = self.show_predictions();
        write!(f, "{:>4}  {:>17}  {:>12}", "#", "Advertising Spend", "Actual Sales")?;
        if show_predictions {
            write!(f, "  {:>15}  {:>10}", "Predicted Sales", "Error")?;
        }
        writeln!(f)?;

        for o in self.visible_rows() {
            write!(
                f,
                "{:>4}  {:>17}  {:>12}",
                o.id,
                format_dollars(o.advertising_spend, 0),
                format_dollars(o.sales, 0)
            )?;

            if let (true, Some(predicted), Some(error)) =
                (show_predictions, o.predicted, o.residual())
            {
                let sign = if error > 0.0 { "+" } else { "" };
                write!(
                    f,
                    "  {:>15}  {:>10}",
                    format_dollars(predicted, 0),
                    format!("{sign}{}", format_dollars(error, 0))
                )?;
            }
            writeln!(f)?;
        }

        if let Some(footer) = self.footer() {
            writeln!(f, "{footer}")?;
        }
        Ok(())
    }
}
