//! User-adjustable settings for a regression session
//!
//! [`Settings`] holds everything a learner can tweak: how much data to generate,
//! the true line behind it, how noisy it is, and how much to hold out for testing.
//!
//! Each field has a documented valid range (see the `*_RANGE` constants), and
//! [`Settings::validate`] rejects anything outside it.
//!
//! Settings can be loaded from TOML; missing keys take their defaults. Keys are
//! camelCase, matching the JSON snapshot, and `sample_size`/`test_size` are accepted too:
//! ```toml
//! sampleSize = 100
//! slope = 3.0
//! noise = 2500.0
//! seed = 42
//! ```
use std::{ops::RangeInclusive, path::Path};

use serde::{Deserialize, Serialize};

use crate::{
    error::{Error, Result},
    generate::GenerationConfig,
    split::test_count,
};

/// Valid number of generated observations
pub const SAMPLE_SIZE_RANGE: RangeInclusive<usize> = 10..=200;

/// Valid true slope
pub const SLOPE_RANGE: RangeInclusive<f64> = 0.5..=5.0;

/// Valid true intercept (base sales)
pub const INTERCEPT_RANGE: RangeInclusive<f64> = 0.0..=10000.0;

/// Valid noise factor
pub const NOISE_RANGE: RangeInclusive<f64> = 0.0..=10000.0;

/// Valid share of the data held out for testing
pub const TEST_SIZE_RANGE: RangeInclusive<f64> = 0.1..=0.5;

/// Smallest test set that can be scored; R² is undefined for a single observation
pub const MIN_TEST_OBSERVATIONS: usize = 2;

/// Settings for generating data and training a model.
///
/// Besides the per-field ranges, `sample_size × test_size` must leave at least
/// [`MIN_TEST_OBSERVATIONS`] observations in the test set, so small samples need a
/// larger test size: 15 observations at 0.1 would be scored on a single point.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields, rename_all = "camelCase")]
pub struct Settings {
    /// Number of observations to generate. See [`SAMPLE_SIZE_RANGE`]
    #[serde(alias = "sample_size")]
    pub sample_size: usize,

    /// True slope of the generating line. See [`SLOPE_RANGE`]
    pub slope: f64,

    /// True intercept of the generating line. See [`INTERCEPT_RANGE`]
    pub intercept: f64,

    /// Width of the uniform noise band on sales. See [`NOISE_RANGE`]
    pub noise: f64,

    /// Share of the data held out for testing. See [`TEST_SIZE_RANGE`]
    #[serde(alias = "test_size")]
    pub test_size: f64,

    /// Fixes the random number generator seed for reproducibility.
    /// If not provided, a system RNG will be used each run.
    pub seed: Option<u64>,
}
impl Default for Settings {
    fn default() -> Self {
        Self {
            sample_size: 50,
            slope: 2.5,
            intercept: 5000.0,
            noise: 4000.0,
            test_size: 0.2,
            seed: None,
        }
    }
}
impl Settings {
    /// Checks every field against its valid range, then checks that the test set
    /// will be large enough to score.
    ///
    /// # Errors
    /// `Error::InvalidConfiguration` naming the first field that is out of range,
    /// or the sample and test sizes if the test set would be too small.
    pub fn validate(&self) -> Result<()> {
        check("sample size", &self.sample_size, &SAMPLE_SIZE_RANGE)?;
        check("slope", &self.slope, &SLOPE_RANGE)?;
        check("intercept", &self.intercept, &INTERCEPT_RANGE)?;
        check("noise", &self.noise, &NOISE_RANGE)?;
        check("test size", &self.test_size, &TEST_SIZE_RANGE)?;

        let test_count = test_count(self.sample_size, self.test_size);
        if test_count < MIN_TEST_OBSERVATIONS {
            return Err(Error::InvalidConfiguration(format!(
                "a test size of {} leaves {test_count} of {} observations for testing, \
                 at least {MIN_TEST_OBSERVATIONS} are needed",
                self.test_size, self.sample_size
            )));
        }
        Ok(())
    }

    /// The generator parameters described by these settings.
    #[must_use]
    pub fn generation_config(&self) -> GenerationConfig {
        GenerationConfig::new(self.sample_size, self.slope, self.intercept, self.noise)
    }

    /// Parses settings from a TOML document and validates them.
    ///
    /// # Errors
    /// - `Error::Config` if the document is not valid TOML or has unknown keys.
    /// - `Error::InvalidConfiguration` if a value is out of range.
    ///
    /// # Example
    /// ```rust
    /// # use linear_lens::Settings;
    /// let settings = Settings::from_toml_str("sampleSize = 120\ntest_size = 0.3").unwrap();
    /// assert_eq!(settings.sample_size, 120);
    /// assert_eq!(settings.slope, 2.5);
    /// ```
    pub fn from_toml_str(s: &str) -> Result<Self> {
        let settings: Self = toml::from_str(s)?;
        settings.validate()?;
        Ok(settings)
    }

    /// Reads settings from a TOML file. See [`Settings::from_toml_str`].
    ///
    /// # Errors
    /// `Error::Io` if the file cannot be read, otherwise as [`Settings::from_toml_str`].
    pub fn from_toml_file(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        log::debug!("loading settings from {}", path.display());
        let contents = std::fs::read_to_string(path)?;
        Self::from_toml_str(&contents)
    }
}

fn check<T>(name: &str, value: &T, range: &RangeInclusive<T>) -> Result<()>
where
    T: PartialOrd + std::fmt::Display,
{
    if range.contains(value) {
        Ok(())
    } else {
        Err(Error::InvalidConfiguration(format!(
            "{name} must be between {} and {}, got {value}",
            range.start(),
            range.end()
        )))
    }
}
