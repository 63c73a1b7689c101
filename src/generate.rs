//! Synthetic "advertising spend vs. sales" data
//!
//! Each sample draws an advertising spend uniformly from [`SPEND_MIN`]..[`SPEND_MAX`],
//! then computes sales from a known line plus uniform noise:
//!
//! <div class="warning">
//!
//! **Technical Details**
//!
//! ```math
//! sales = intercept + slope * spend + ε
//! where
//!   spend ~ U(1000, 10000), ε ~ U(-noise / 2, +noise / 2)
//! ```
//! Both values are rounded to whole units, and sales are clamped at 0.
//! </div>
//!
//! Randomness is always supplied by the caller; use [`rng`] with a seed for
//! reproducible datasets.
use rand::SeedableRng;
use rand_distr::{Distribution, Uniform};
use serde::{Deserialize, Serialize};

use crate::{
    error::{Error, Result},
    observation::Observation,
};

/// Smallest advertising spend the generator draws
pub const SPEND_MIN: f64 = 1000.0;

/// Upper bound of the advertising spend the generator draws
pub const SPEND_MAX: f64 = 10000.0;

/// Returns a small, fast random number generator.
///
/// - `Some(seed)` gives the same sequence every time, for reproducible runs and tests.
/// - `None` seeds from the system's entropy source, so every call differs.
#[must_use]
pub fn rng(seed: Option<u64>) -> rand::rngs::SmallRng {
    match seed {
        Some(s) => rand::rngs::SmallRng::seed_from_u64(s),
        None => rand::rngs::SmallRng::from_rng(&mut rand::rng()),
    }
}

/// Parameters of the synthetic data generator.
///
/// These are the ground truth used to synthesize data, not a fitted [`crate::Model`].
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GenerationConfig {
    /// Number of observations to generate
    pub sample_size: usize,

    /// True change in sales per unit of spend
    pub slope: f64,

    /// True sales at zero spend
    pub intercept: f64,

    /// Width of the uniform noise band added to sales.
    /// Noise is drawn from `[-noise_factor / 2, +noise_factor / 2]`
    pub noise_factor: f64,
}
impl GenerationConfig {
    /// Creates a generator configuration.
    #[must_use]
    pub fn new(sample_size: usize, slope: f64, intercept: f64, noise_factor: f64) -> Self {
        Self {
            sample_size,
            slope,
            intercept,
            noise_factor,
        }
    }

    /// Checks that the parameters describe a usable distribution.
    ///
    /// # Errors
    /// `Error::InvalidConfiguration` if any coefficient is not finite, or the
    /// noise factor is negative.
    pub fn validate(&self) -> Result<()> {
        if !self.slope.is_finite() || !self.intercept.is_finite() {
            return Err(Error::InvalidConfiguration(format!(
                "slope and intercept must be finite, got slope={} intercept={}",
                self.slope, self.intercept
            )));
        }

        if !self.noise_factor.is_finite() || self.noise_factor < 0.0 {
            return Err(Error::InvalidConfiguration(format!(
                "noise factor must be a non-negative number, got {}",
                self.noise_factor
            )));
        }

        Ok(())
    }
}

/// Generates `config.sample_size` synthetic observations.
///
/// Observations are returned in generation order with ids `1..=sample_size`.
/// A sample size of 0 gives an empty dataset.
///
/// # Errors
/// `Error::InvalidConfiguration` if `config` fails [`GenerationConfig::validate`].
///
/// # Example
/// ```rust
/// # use linear_lens::{generate, rng, GenerationConfig};
/// let config = GenerationConfig::new(50, 2.5, 5000.0, 4000.0);
/// let data = generate(&config, &mut rng(Some(1234))).unwrap();
/// assert_eq!(data.len(), 50);
/// assert!(data.iter().all(|o| o.sales >= 0.0));
/// ```
pub fn generate<R: rand::Rng + ?Sized>(
    config: &GenerationConfig,
    rng: &mut R,
) -> Result<Vec<Observation>> {
    config.validate()?;

    let half_noise = config.noise_factor / 2.0;
    let spend = Uniform::new(SPEND_MIN, SPEND_MAX)
        .map_err(|e| Error::InvalidConfiguration(e.to_string()))?;
    let noise = Uniform::new_inclusive(-half_noise, half_noise)
        .map_err(|e| Error::InvalidConfiguration(e.to_string()))?;

    let data: Vec<_> = (1..=config.sample_size)
        .map(|id| {
            let advertising_spend = spend.sample(&mut *rng);
            let sales =
                config.intercept + config.slope * advertising_spend + noise.sample(&mut *rng);
            Observation::new(id, advertising_spend.round(), sales.round().max(0.0))
        })
        .collect();

    log::debug!(
        "generated {} observations (slope={}, intercept={}, noise={})",
        data.len(),
        config.slope,
        config.intercept,
        config.noise_factor
    );
    Ok(data)
}
