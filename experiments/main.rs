use std::path::PathBuf;

use alter_bench::util::{filename, types::Experiment};
use clap::Parser;
use log::info;

mod experiment;

use experiment::ExperimentConfig;

///Times ALTER TABLE add/drop column on PostgreSQL and Peloton and plots the comparison
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Args {
    ///Length of generated table and added column names
    #[clap(long, default_value_t = 6)]
    def_name_len: usize,
    ///Table name, random uppercase when omitted
    #[clap(long)]
    table_name: Option<String>,
    #[clap(long, default_value_t = 5)]
    columns: usize,
    ///Trials per sweep point
    #[clap(long, default_value_t = 5)]
    repeats: usize,
    #[clap(long, default_value_t = 1000)]
    tuples: usize,
    #[clap(long, default_value_t = 100)]
    batch_size: usize,
    #[clap(long, default_value = filename::DEFAULT_TABLE_FILE)]
    filename: PathBuf,
    ///Port Peloton listens on
    #[clap(long, default_value_t = 15721)]
    port: u16,
    #[clap(long, default_value = "sudo -u postgres psql")]
    postgres_command: String,
    #[clap(long, default_value = "psql sslmode=disable -U postgres -h localhost")]
    peloton_command: String,
    ///Where plots and results.bin are written
    #[clap(long, default_value = ".")]
    output_dir: PathBuf,
    #[clap(long, value_enum, value_delimiter = ',', default_values_t = Experiment::ALL)]
    experiments: Vec<Experiment>,
}

fn main() -> anyhow::Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let args = Args::parse();
    info!("Experiment details: ");
    info!("number of trials for each experiment: {}", args.repeats);
    info!(
        "base table: {} columns, {} tuples in batches of {}",
        args.columns, args.tuples, args.batch_size
    );
    info!("experiments: {:?}", args.experiments);

    let config = ExperimentConfig::from_args(args)?;
    experiment::run_and_save(&config)
}
