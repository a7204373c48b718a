use anyhow::{Context, Result, bail};
use serde::{Deserialize, Serialize};
use std::{
    fmt::Debug,
    fs,
    ops::{Bound, RangeBounds},
    path::Path,
};

/// Analysis configuration parameters.
///
/// Loaded from a TOML file and validated before use.
/// See [`Config::from_file`] for loading.
#[derive(Debug, PartialEq, Clone, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct Config {
    /// Clean-up applied to every series before analysis.
    pub cleaning: CleaningConfig,

    /// Mode bucketing parameters.
    pub mode: ModeConfig,
}

#[derive(Debug, PartialEq, Clone, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct CleaningConfig {
    /// Drop NaN and infinite samples.
    pub filter_invalid: bool,

    /// Number of decimal digits to round samples to, if any.
    #[serde(default)]
    pub digits: Option<i32>,
}

#[derive(Debug, PartialEq, Clone, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct ModeConfig {
    /// Tolerance below which two samples count as equal.
    pub epsilon: f64,
}

impl Config {
    /// Load a [`Config`] from a file.
    ///
    /// The file must be TOML-encoded and contain a serialized [`Config`].
    /// Performs validation on all parameters before returning.
    ///
    /// # Errors
    /// Returns an error if the file cannot be read, deserialized,
    /// or if the configuration values are invalid.
    pub fn from_file<P: AsRef<Path>>(file: P) -> Result<Self> {
        let file = file.as_ref();
        let contents =
            fs::read_to_string(file).with_context(|| format!("failed to read {file:?}"))?;

        let config: Config = toml::from_str(&contents).context("failed to deserialize config")?;

        config.validate().context("failed to validate config")?;

        Ok(config)
    }

    fn validate(&self) -> Result<()> {
        if let Some(digits) = self.cleaning.digits {
            check_num(digits, -15..=15).context("invalid number of rounding digits")?;
        }
        check_num(
            self.mode.epsilon,
            (Bound::Excluded(0.0), Bound::Excluded(1e6)),
        )
        .context("invalid mode tolerance")?;

        Ok(())
    }
}

fn check_num<T, R>(num: T, range: R) -> Result<()>
where
    T: PartialOrd + Debug,
    R: RangeBounds<T> + Debug,
{
    if !range.contains(&num) {
        bail!("number must be in the range {range:?}, but is {num:?}");
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn parse(contents: &str) -> Result<Config> {
        let config: Config = toml::from_str(contents)?;
        config.validate()?;
        Ok(config)
    }

    #[test]
    fn accepts_valid_config() {
        let config = parse(
            "[cleaning]\nfilter_invalid = true\ndigits = 2\n\n[mode]\nepsilon = 0.01\n",
        )
        .expect("valid config must parse");
        assert_eq!(config.cleaning.digits, Some(2));
        assert_eq!(config.mode.epsilon, 0.01);
    }

    #[test]
    fn digits_are_optional() {
        let config = parse("[cleaning]\nfilter_invalid = false\n\n[mode]\nepsilon = 0.5\n")
            .expect("valid config must parse");
        assert_eq!(config.cleaning.digits, None);
    }

    #[test]
    fn rejects_out_of_range_values() {
        assert!(parse("[cleaning]\nfilter_invalid = true\n\n[mode]\nepsilon = 0.0\n").is_err());
        assert!(parse("[cleaning]\nfilter_invalid = true\n\n[mode]\nepsilon = nan\n").is_err());
        assert!(
            parse("[cleaning]\nfilter_invalid = true\ndigits = 16\n\n[mode]\nepsilon = 0.1\n")
                .is_err()
        );
    }

    #[test]
    fn rejects_unknown_fields() {
        assert!(
            parse("[cleaning]\nfilter_invalid = true\nscale = 2\n\n[mode]\nepsilon = 0.1\n")
                .is_err()
        );
    }
}
