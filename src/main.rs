use std::path::PathBuf;

use alter_bench::{
    table::{generator, GeneratorConfig},
    util::{
        filename,
        types::{ColumnNaming, RemainderPolicy},
    },
};
use anyhow::Context;
use clap::Parser;
use log::info;

///Writes a randomly named table and batched inserts of random integers as a SQL script
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Args {
    ///Length of generated table and column names
    #[clap(long, default_value_t = 6)]
    def_name_len: usize,
    ///Table name, random uppercase when omitted
    #[clap(long)]
    table_name: Option<String>,
    #[clap(long, default_value_t = 2)]
    columns: usize,
    #[clap(long, default_value_t = 1000)]
    tuples: usize,
    ///Rows per INSERT statement
    #[clap(long, default_value_t = 10)]
    batch_size: usize,
    #[clap(long, default_value = filename::DEFAULT_TABLE_FILE)]
    filename: PathBuf,
    ///Drop the tuples % batch_size leftover rows instead of failing
    #[clap(long)]
    truncate_remainder: bool,
}

impl Args {
    fn into_config(self) -> GeneratorConfig {
        GeneratorConfig {
            name_len: self.def_name_len,
            table_name: self.table_name,
            column_naming: ColumnNaming::Random(self.def_name_len),
            columns: self.columns,
            tuples: self.tuples,
            batch_size: self.batch_size,
            filename: self.filename,
            remainder: if self.truncate_remainder {
                RemainderPolicy::Truncate
            } else {
                RemainderPolicy::Reject
            },
        }
    }
}

fn main() -> anyhow::Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let config = Args::parse().into_config();
    let spec = config
        .table_spec(&mut rand::thread_rng())
        .context("invalid table options")?;
    generator::write_table_file(&spec, &config.filename)
        .with_context(|| format!("unable to write {}", config.filename.display()))?;

    info!(
        "Wrote table {} with {} columns and {} rows to {}",
        spec.table_name(),
        spec.column_count(),
        spec.written_rows(),
        config.filename.display()
    );
    Ok(())
}
