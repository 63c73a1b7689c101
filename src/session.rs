//! Explicit state for an interactive regression session
//!
//! A [`Session`] owns everything a front-end needs to show: the current settings,
//! the generated dataset and its train/test split, the fitted model, predictions
//! and test-set metrics. The regression engine itself stays stateless; the session
//! just calls into it and keeps the results.
//!
//! Operations that fail leave the previous state untouched, so a front-end can
//! report the error and keep displaying what it had.
use rand::rngs::SmallRng;
use serde::Serialize;

use crate::{
    error::{Error, Result},
    fit::{fit, predict},
    generate::{generate, rng},
    observation::{Metrics, Model, Observation},
    settings::Settings,
    split::split,
    statistics,
};

/// Everything produced by one "generate data" action.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Dataset {
    /// All generated observations, in generation order
    pub all: Vec<Observation>,

    /// Observations the model is trained on
    pub train: Vec<Observation>,

    /// Observations held out for scoring
    pub test: Vec<Observation>,
}

/// Everything produced by one "run model" action.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Training {
    /// Coefficients fitted on the training set
    pub model: Model,

    /// Test-set metrics
    pub metrics: Metrics,

    /// All observations with predictions attached
    pub predictions: Vec<Observation>,

    /// Training observations with predictions attached
    pub train: Vec<Observation>,

    /// Test observations with predictions attached
    pub test: Vec<Observation>,
}

/// State container for a regression session.
///
/// # Example
/// ```rust
/// # use linear_lens::{Session, Settings};
/// let mut session = Session::new(Settings { seed: Some(7), ..Settings::default() }).unwrap();
/// session.generate_data().unwrap();
/// let training = session.run_model().unwrap();
/// println!("{} (R² = {})", training.model, training.metrics.r_squared);
/// ```
#[derive(Debug, Clone)]
pub struct Session {
    settings: Settings,
    rng: SmallRng,
    dataset: Option<Dataset>,
    training: Option<Training>,
}
impl Session {
    /// Creates an empty session.
    ///
    /// If `settings.seed` is set, every dataset and split this session produces
    /// is reproducible.
    ///
    /// # Errors
    /// `Error::InvalidConfiguration` if the settings are out of range.
    pub fn new(settings: Settings) -> Result<Self> {
        settings.validate()?;
        Ok(Self {
            rng: rng(settings.seed),
            settings,
            dataset: None,
            training: None,
        })
    }

    /// Current settings
    #[must_use]
    pub fn settings(&self) -> &Settings {
        &self.settings
    }

    /// Replaces the settings. Takes effect on the next [`Session::generate_data`].
    ///
    /// A new seed restarts the random sequence.
    ///
    /// # Errors
    /// `Error::InvalidConfiguration` if the settings are out of range; the
    /// current settings are kept.
    pub fn update_settings(&mut self, settings: Settings) -> Result<()> {
        settings.validate()?;
        if settings.seed != self.settings.seed {
            self.rng = rng(settings.seed);
        }
        self.settings = settings;
        Ok(())
    }

    /// The last generated dataset, if any
    #[must_use]
    pub fn dataset(&self) -> Option<&Dataset> {
        self.dataset.as_ref()
    }

    /// The last trained model and its results, if any
    #[must_use]
    pub fn training(&self) -> Option<&Training> {
        self.training.as_ref()
    }

    /// The fitted model, if one has been trained on the current dataset
    #[must_use]
    pub fn model(&self) -> Option<&Model> {
        self.training.as_ref().map(|t| &t.model)
    }

    /// Test-set metrics of the current model, if any
    #[must_use]
    pub fn metrics(&self) -> Option<&Metrics> {
        self.training.as_ref().map(|t| &t.metrics)
    }

    /// Generates a fresh dataset and splits it, discarding any trained model.
    ///
    /// # Errors
    /// `Error::InvalidConfiguration` if generation or splitting rejects the settings;
    /// the previous dataset and model are kept.
    pub fn generate_data(&mut self) -> Result<&Dataset> {
        self.settings.validate()?;

        let all = generate(&self.settings.generation_config(), &mut self.rng)?;
        let (train, test) = split(&all, self.settings.test_size, &mut self.rng)?;

        log::info!(
            "Generated {} data points with a {}% test split",
            all.len(),
            statistics::round_to(self.settings.test_size * 100.0, 0)
        );

        self.training = None;
        Ok(self.dataset.insert(Dataset { all, train, test }))
    }

    /// Fits a model on the training set and scores it on the test set.
    ///
    /// # Errors
    /// - `Error::NoDataGenerated` if [`Session::generate_data`] has not succeeded yet.
    /// - Anything [`fit`] or [`statistics::metrics`] can return.
    ///
    /// The previous model, if any, is kept on failure.
    pub fn run_model(&mut self) -> Result<&Training> {
        let dataset = self.dataset.as_ref().ok_or(Error::NoDataGenerated)?;

        let model = fit(&dataset.train)?;
        let test = predict(&dataset.test, &model);
        let metrics = statistics::metrics(&test)?;

        log::info!("Linear regression model trained with R² of {:.2}", metrics.r_squared);

        let training = Training {
            model,
            metrics,
            predictions: predict(&dataset.all, &model),
            train: predict(&dataset.train, &model),
            test,
        };
        Ok(self.training.insert(training))
    }

    /// Serializable view of the whole session.
    #[must_use]
    pub fn snapshot(&self) -> Snapshot<'_> {
        Snapshot {
            settings: &self.settings,
            dataset: self.dataset.as_ref(),
            training: self.training.as_ref(),
        }
    }
}

/// Borrowed view of a [`Session`], for exporting as JSON.
#[derive(Debug, Serialize)]
pub struct Snapshot<'a> {
    /// Settings in effect
    pub settings: &'a Settings,

    /// Generated data, if any
    #[serde(skip_serializing_if = "Option::is_none")]
    pub dataset: Option<&'a Dataset>,

    /// Trained model and results, if any
    #[serde(skip_serializing_if = "Option::is_none")]
    pub training: Option<&'a Training>,
}
impl Snapshot<'_> {
    /// Renders the snapshot as pretty-printed JSON.
    ///
    /// # Errors
    /// `Error::Json` if serialization fails.
    pub fn to_json(&self) -> Result<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }
}
