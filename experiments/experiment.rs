use std::{fs, path::PathBuf};

use alter_bench::{
    benchmarker::Benchmarker,
    client::{ClientCommand, ProcessClient},
    plot::plot_comparison,
    report::RunReport,
    table::GeneratorConfig,
    util::{
        filename, names,
        types::{ColumnNaming, Experiment, RemainderPolicy, Size},
    },
};
use anyhow::Context;
use log::{info, warn};

use crate::Args;

const POSTGRES_LABEL: &str = "postgres";
const PELOTON_LABEL: &str = "peloton";

///Immutable settings for one run, built once from the command line
pub struct ExperimentConfig {
    pub base: GeneratorConfig,
    pub repeats: Size,
    pub postgres: ClientCommand,
    pub peloton: ClientCommand,
    pub output_dir: PathBuf,
    pub experiments: Vec<Experiment>,
}

impl ExperimentConfig {
    pub fn from_args(args: Args) -> anyhow::Result<Self> {
        //one table name for the whole run so every script and DROP agrees
        let table_name = args
            .table_name
            .unwrap_or_else(|| names::random_name(&mut rand::thread_rng(), args.def_name_len));
        let postgres =
            ClientCommand::parse(&args.postgres_command).context("invalid --postgres-command")?;
        let peloton = ClientCommand::parse(&args.peloton_command)
            .context("invalid --peloton-command")?
            .with_port(args.port);

        Ok(Self {
            base: GeneratorConfig {
                name_len: args.def_name_len,
                table_name: Some(table_name),
                column_naming: ColumnNaming::Alphabet,
                columns: args.columns,
                tuples: args.tuples,
                batch_size: args.batch_size,
                filename: args.filename,
                remainder: RemainderPolicy::Reject,
            },
            repeats: args.repeats,
            postgres,
            peloton,
            output_dir: args.output_dir,
            experiments: args.experiments,
        })
    }
}

///Runs every selected experiment on both systems and saves the summaries to results.bin,
/// then draws one plot per experiment. A plot that fails to render is only logged
pub fn run_and_save(config: &ExperimentConfig) -> anyhow::Result<()> {
    fs::create_dir_all(&config.output_dir)
        .with_context(|| format!("unable to create {}", config.output_dir.display()))?;

    let benchmarkers = [
        Benchmarker::new(
            Box::new(ProcessClient::new(config.postgres.clone())),
            POSTGRES_LABEL,
            config.repeats,
            config.base.name_len,
        ),
        Benchmarker::new(
            Box::new(ProcessClient::new(config.peloton.clone())),
            PELOTON_LABEL,
            config.repeats,
            config.base.name_len,
        ),
    ];

    let results = filename::results_path(&config.output_dir);
    let mut report = RunReport::default();
    for &experiment in &config.experiments {
        let series = benchmarkers
            .iter()
            .map(|bm| bm.run_experiment(experiment, &config.base))
            .collect::<alter_bench::Result<Vec<_>>>()
            .with_context(|| format!("{} experiment failed", experiment.name()))?;
        report.push(experiment, series);

        //rewritten after every experiment
        report
            .save(&results)
            .with_context(|| format!("unable to save {}", results.display()))?;
    }
    report.log_summary();
    info!("saved {}", results.display());

    for result in &report.experiments {
        let path = filename::plot_path(&config.output_dir, result.experiment);
        if let Err(why) = plot_comparison(&path, result.experiment.x_label(), &result.series) {
            warn!("{why}");
        }
    }
    Ok(())
}
