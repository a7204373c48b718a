//! Sample series data types.

use crate::config::CleaningConfig;
use anyhow::{Context, Result, bail};
use quickstats::{Regression, Summary, cleaning};
use serde::{Deserialize, Serialize};
use std::{fs, path::Path};

/// Series of samples, optionally paired with an independent variable.
///
/// `x[i]` is the independent value at which `samples[i]` was observed.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct Series {
    /// Observed samples.
    pub samples: Vec<f64>,

    /// Independent variable, same length as `samples`.
    #[serde(default)]
    pub x: Option<Vec<f64>>,
}

impl Series {
    /// Load a [`Series`] from a TOML file.
    pub fn from_file<P: AsRef<Path>>(file: P) -> Result<Self> {
        let file = file.as_ref();
        let contents =
            fs::read_to_string(file).with_context(|| format!("failed to read {file:?}"))?;

        let series: Series = toml::from_str(&contents).context("failed to deserialize series")?;

        if let Some(x) = &series.x {
            let (n_x, n_samples) = (x.len(), series.samples.len());
            if n_x != n_samples {
                bail!("x length must be {n_samples}, but is {n_x}");
            }
        }

        Ok(series)
    }

    /// Apply the configured clean-up in place.
    ///
    /// Returns the number of samples dropped.
    pub fn clean(&mut self, cfg: &CleaningConfig) -> usize {
        let mut n_dropped = 0;
        if cfg.filter_invalid {
            n_dropped = match &mut self.x {
                Some(x) => cleaning::filter_invalid_pairs(x, &mut self.samples),
                None => cleaning::filter_invalid(&mut self.samples),
            };
        }
        if let Some(digits) = cfg.digits {
            cleaning::round_to_precision(&mut self.samples, digits);
        }
        n_dropped
    }

    /// Summarize the series and, if it has an independent variable, fit it.
    pub fn report(&self, name: String, n_dropped: usize, epsilon: f64) -> SeriesReport {
        SeriesReport {
            name,
            n_dropped,
            summary: Summary::new(&self.samples, epsilon),
            regression: self.x.as_ref().map(|x| Regression::fit(x, &self.samples)),
        }
    }
}

/// Analysis results of one series.
#[derive(Debug, Serialize, Deserialize)]
pub struct SeriesReport {
    /// File stem of the series.
    pub name: String,

    /// Samples removed by cleaning.
    pub n_dropped: usize,

    pub summary: Summary,

    /// Present only for series with an independent variable.
    pub regression: Option<Regression>,
}
