use crate::config::Config;
use crate::series::{Series, SeriesReport};
use anyhow::{Context, Result};
use rmp_serde::encode;
use std::{
    fs::File,
    io::{BufWriter, Write},
    path::Path,
};

pub struct Analyzer {
    cfg: Config,
    reports: Vec<SeriesReport>,
}

impl Analyzer {
    pub fn new(cfg: Config) -> Self {
        Self {
            cfg,
            reports: Vec::new(),
        }
    }

    pub fn add_file<P: AsRef<Path>>(&mut self, file: P) -> Result<()> {
        let file = file.as_ref();
        let mut series =
            Series::from_file(file).with_context(|| format!("failed to load {file:?}"))?;

        let name = file
            .file_stem()
            .and_then(|stem| stem.to_str())
            .with_context(|| format!("{file:?} has no valid UTF-8 file stem"))?
            .to_owned();

        let n_dropped = series.clean(&self.cfg.cleaning);
        let report = series.report(name, n_dropped, self.cfg.mode.epsilon);
        log::info!("{report:#?}");

        self.reports.push(report);
        Ok(())
    }

    pub fn save_results<P: AsRef<Path>>(&self, file: P) -> Result<()> {
        let file = file.as_ref();
        let file = File::create(file).with_context(|| format!("failed to create {file:?}"))?;
        let mut writer = BufWriter::new(file);

        encode::write(&mut writer, &self.reports).context("failed to serialize reports")?;

        writer.flush().context("failed to flush writer stream")?;

        Ok(())
    }
}
