use crate::analysis::Analyzer;
use crate::config::Config;
use anyhow::{Context, Result, bail};
use glob::glob;
use std::{
    fs,
    path::{Path, PathBuf},
};

pub struct Manager {
    data_dir: PathBuf,
    cfg: Config,
}

impl Manager {
    pub fn new<P: AsRef<Path>>(data_dir: P) -> Result<Self> {
        let data_dir = data_dir.as_ref().to_path_buf();

        let cfg =
            Config::from_file(data_dir.join("config.toml")).context("failed to construct cfg")?;
        log::info!("{cfg:#?}");

        Ok(Self { data_dir, cfg })
    }

    pub fn analyze_series(&self) -> Result<()> {
        let series_files = self.series_files().context("failed to list series files")?;
        if series_files.is_empty() {
            bail!("no series files found in {:?}", self.data_dir);
        }

        let mut analyzer = Analyzer::new(self.cfg.clone());
        for file in &series_files {
            analyzer
                .add_file(file)
                .with_context(|| format!("failed to add {file:?}"))?;
        }

        let results_file = self.results_file();
        analyzer
            .save_results(&results_file)
            .context("failed to save results")?;
        log::info!("saved {results_file:?}");

        Ok(())
    }

    pub fn clean_results(&self) -> Result<()> {
        let results_file = self.results_file();
        if results_file.exists() {
            fs::remove_file(&results_file)
                .with_context(|| format!("failed to remove {results_file:?}"))?;
            log::info!("removed {results_file:?}");
        }

        Ok(())
    }

    fn series_files(&self) -> Result<Vec<PathBuf>> {
        let pattern = self.data_dir.join("series-*.toml");
        let pattern = pattern.to_str().context("pattern is not valid UTF-8")?;
        let mut files: Vec<_> = glob(pattern)
            .context("failed to glob series files")?
            .filter_map(Result::ok)
            .filter(|p| p.is_file())
            .collect();
        files.sort();
        Ok(files)
    }

    fn results_file(&self) -> PathBuf {
        self.data_dir.join("results.msgpack")
    }
}
