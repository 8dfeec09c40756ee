use std::path::{Path, PathBuf};

use super::types::Experiment;

pub const DEFAULT_TABLE_FILE: &str = "largeTable.sql";
const PLOT_EXTENSION: &str = "svg";
const RESULTS_FILE: &str = "results.bin";

//Responsible for all output filename conversions
pub fn plot(experiment: Experiment) -> String {
    format!("{}.{PLOT_EXTENSION}", experiment.name())
}
pub fn plot_path(output_dir: &Path, experiment: Experiment) -> PathBuf {
    output_dir.join(plot(experiment))
}
pub fn results_path(output_dir: &Path) -> PathBuf {
    output_dir.join(RESULTS_FILE)
}
