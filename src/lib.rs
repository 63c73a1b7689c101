//! # Linear Lens
//! ## How much are those ads actually worth?
//!
//! Simple linear regression is the first model most people learn, and the easiest one to
//! build an intuition for. This crate generates synthetic "advertising spend vs. sales" data
//! from a line you choose, fits a line back to it, and tells you how well it did.
//!
//! I provide a small set of tools designed to help you:
//! - Generate noisy data from a known line, reproducibly if you want
//! - Split it into training and test sets
//! - Fit an ordinary least squares line and make predictions with it
//! - Score the predictions with R², MSE and RMSE
//! - Explain the results in plain language
//!
//! The simplest use-case is to generate some data and fit a line to it:
//! ```rust
//! use linear_lens::{fit, generate, predict, rng, split, statistics::metrics, GenerationConfig};
//!
//! let config = GenerationConfig::new(100, 2.5, 5000.0, 4000.0);
//! let mut rng = rng(Some(42));
//!
//! let data = generate(&config, &mut rng)?;
//! let (train, test) = split(&data, 0.2, &mut rng)?;
//!
//! let model = fit(&train)?;
//! let scored = metrics(&predict(&test, &model))?;
//!
//! println!("{model}");
//! println!("R² = {}, RMSE = {}", scored.r_squared, scored.rmse);
//! # Ok::<(), linear_lens::error::Error>(())
//! ```
//!
//! # Core Concepts
//! - An [`Observation`] is one (advertising spend, sales) sample, optionally carrying a prediction.
//! - A [`Model`] is a fitted line: `sales ≈ intercept + slope × advertising_spend`.
//!     - It is estimated from a sample, unlike a [`GenerationConfig`], which is the ground truth
//!       the sample was drawn from.
//! - [`Metrics`] summarize how close a model's predictions are to the actual sales.
//!     - Score a model on data it was *not* trained on to get an honest estimate.
//! - A [`Session`] keeps the state of an interactive exploration: settings, data, model and metrics.
//!
//! # Errors
//!
//! Nothing in this crate quietly returns `NaN`. Undefined results such as a slope through
//! data with a single advertising spend, or an R² for constant sales, are reported as
//! [`error::Error`] values instead.
//!
//! # Testing utilities
//!
//! This crate includes a set of assertion macros for regression results. See [`test`].
#![warn(missing_docs)]
#![warn(clippy::pedantic)]
#![allow(clippy::cast_precision_loss)] // Sample sizes are far below 2^52
#![allow(clippy::module_name_repetitions)]


pub mod display;
pub mod error;
pub mod settings;
pub mod statistics;

mod fit;
mod generate;
mod observation;
mod session;
mod split;

pub use fit::{fit, predict, LinearFit, MIN_FIT_OBSERVATIONS};
pub use generate::{generate, rng, GenerationConfig, SPEND_MAX, SPEND_MIN};
pub use observation::{Metrics, Model, Observation};
pub use session::{Dataset, Session, Snapshot, Training};
pub use settings::Settings;
pub use split::split;

pub use rand;
