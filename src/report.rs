use std::{
    fs::File,
    io::{BufReader, BufWriter, Write},
    path::Path,
};

use log::info;
use serde::{Deserialize, Serialize};

use crate::{error::Result, stats::Series, util::types::Experiment};

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct ExperimentResult {
    pub experiment: Experiment,
    pub series: Vec<Series>, //one per target system
}

///Aggregated results of a whole run, persisted next to the plots
#[derive(Serialize, Deserialize, Debug, Clone, Default, PartialEq)]
pub struct RunReport {
    pub experiments: Vec<ExperimentResult>,
}

impl RunReport {
    pub fn push(&mut self, experiment: Experiment, series: Vec<Series>) {
        self.experiments.push(ExperimentResult { experiment, series });
    }

    pub fn get(&self, experiment: Experiment) -> Option<&ExperimentResult> {
        self.experiments
            .iter()
            .find(|result| result.experiment == experiment)
    }

    pub fn save(&self, path: &Path) -> Result<()> {
        let mut writer = BufWriter::new(File::create(path)?);
        bincode::serialize_into(&mut writer, self)?;
        writer.flush()?;
        Ok(())
    }

    pub fn load(path: &Path) -> Result<Self> {
        let reader = BufReader::new(File::open(path)?);
        Ok(bincode::deserialize_from(reader)?)
    }

    ///One line per swept value and system
    pub fn log_summary(&self) {
        for result in &self.experiments {
            for series in &result.series {
                for (x, summary) in &series.points {
                    info!(
                        "{} {} {}={x}: mean {:.6}s min {:.6}s max {:.6}s",
                        result.experiment.name(),
                        series.label,
                        result.experiment.x_label(),
                        summary.mean,
                        summary.min,
                        summary.max
                    );
                }
            }
        }
    }
}
