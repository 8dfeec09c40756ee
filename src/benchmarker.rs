use std::{collections::HashSet, path::Path, time::Instant};

use log::{debug, info};
use rand::{seq::SliceRandom, thread_rng, Rng};

use crate::{
    client::SqlClient,
    error::{Error, Result},
    stats::{Sample, Series, Summary},
    table::{generator::write_table_file, sql, GeneratorConfig, TableSpec},
    util::{
        names,
        types::{Experiment, Seconds, Size, Trial},
    },
};

///Number of steps in the tuple and column scaling sweeps
pub const SWEEP_STEPS: Size = 5;
const TUPLES_PER_UNIT: f64 = 1000.0; //tuple sweep is plotted in thousands

///Builds the ALTER TABLE statement for trial. Added columns get fresh random uppercase names,
/// dropped columns are sampled without replacement from the table's columns
fn alter_statement<R: Rng + ?Sized>(
    spec: &TableSpec,
    trial: Trial,
    name_len: Size,
    rng: &mut R,
) -> Result<String> {
    if trial.column_count() == 0 {
        return Err(Error::InvalidSpec(format!(
            "{trial:?} does not alter any column"
        )));
    }
    match trial {
        Trial::AddColumns(count) => {
            let taken: HashSet<String> = spec.column_names().iter().cloned().collect();
            let added: Vec<String> = names::unique_random_names(rng, count, name_len, &taken)?
                .into_iter()
                .map(|name| name.to_uppercase())
                .collect();
            Ok(sql::add_columns(spec.table_name(), &added))
        }
        Trial::DropColumns(count) => {
            let count = count.min(spec.column_count());
            let dropped: Vec<String> = spec
                .column_names()
                .choose_multiple(rng, count)
                .cloned()
                .collect();
            Ok(sql::drop_columns(spec.table_name(), &dropped))
        }
    }
}

///Loads the script into a fresh table, times only the ALTER statement, then drops the table.
/// Returns elapsed wall clock seconds
pub fn run_trial<R: Rng + ?Sized>(
    client: &dyn SqlClient,
    spec: &TableSpec,
    script: &Path,
    trial: Trial,
    name_len: Size,
    rng: &mut R,
) -> Result<Seconds> {
    client.run_file(script)?;
    let statement = alter_statement(spec, trial, name_len, rng)?;

    let start = Instant::now();
    let altered = client.run_statement(&statement);
    let elapsed = start.elapsed().as_secs_f64();

    //the table is dropped even when the ALTER could not run
    client.run_statement(&sql::drop_table(spec.table_name()))?;
    altered?;
    debug!("{statement} took {elapsed:.6}s");
    Ok(elapsed)
}

///Runs every trial of an experiment sequentially against one target system
pub struct Benchmarker {
    pub client: Box<dyn SqlClient>,
    pub label: String,
    pub repeats: Size,
    pub name_len: Size, //length of added column names
}

impl Benchmarker {
    pub fn new(client: Box<dyn SqlClient>, label: &str, repeats: Size, name_len: Size) -> Self {
        Self {
            client,
            label: String::from(label),
            repeats,
            name_len,
        }
    }

    ///Repeats trial `repeats` times, reloading the table each time
    pub fn measure(
        &self,
        spec: &TableSpec,
        script: &Path,
        trial: Trial,
        variable: f64,
    ) -> Result<Summary> {
        let mut rng = thread_rng();
        let mut samples = Vec::with_capacity(self.repeats);
        for _ in 0..self.repeats {
            let seconds = run_trial(
                self.client.as_ref(),
                spec,
                script,
                trial,
                self.name_len,
                &mut rng,
            )?;
            samples.push(Sample {
                trial,
                variable,
                seconds,
            });
        }
        let summary = Summary::from_samples(&samples)?;
        info!(
            "[{}] {trial:?} at {variable}: mean {:.6}s min {:.6}s max {:.6}s",
            self.label, summary.mean, summary.min, summary.max
        );
        Ok(summary)
    }

    ///Resolves config into a table spec and writes its script
    fn prepare(&self, config: &GeneratorConfig) -> Result<TableSpec> {
        let spec = config.table_spec(&mut thread_rng())?;
        write_table_file(&spec, &config.filename)?;
        Ok(spec)
    }

    ///Alters 1..=columns columns of the base table
    fn sweep_alterations(
        &self,
        base: &GeneratorConfig,
        trial: fn(Size) -> Trial,
    ) -> Result<Vec<(f64, Summary)>> {
        let spec = self.prepare(base)?;
        (1..=spec.column_count())
            .map(|count| {
                let x = count as f64;
                Ok((x, self.measure(&spec, &base.filename, trial(count), x)?))
            })
            .collect()
    }

    ///Adds one column to tables of base.tuples / SWEEP_STEPS * step rows
    fn sweep_tuples(&self, base: &GeneratorConfig) -> Result<Vec<(f64, Summary)>> {
        (1..=SWEEP_STEPS)
            .map(|step| {
                let config = GeneratorConfig {
                    tuples: base.tuples / SWEEP_STEPS * step,
                    ..base.clone()
                };
                let spec = self.prepare(&config)?;
                let x = config.tuples as f64 / TUPLES_PER_UNIT;
                Ok((
                    x,
                    self.measure(&spec, &config.filename, Trial::AddColumns(1), x)?,
                ))
            })
            .collect()
    }

    ///Adds one column to tables of base.columns + step columns
    fn sweep_columns(&self, base: &GeneratorConfig) -> Result<Vec<(f64, Summary)>> {
        (0..SWEEP_STEPS)
            .map(|step| {
                let config = GeneratorConfig {
                    columns: base.columns + step,
                    ..base.clone()
                };
                let spec = self.prepare(&config)?;
                let x = config.columns as f64;
                Ok((
                    x,
                    self.measure(&spec, &config.filename, Trial::AddColumns(1), x)?,
                ))
            })
            .collect()
    }

    ///Runs experiment, returns one summary per value of the swept variable
    pub fn run_experiment(&self, experiment: Experiment, base: &GeneratorConfig) -> Result<Series> {
        info!("[{}] running {} experiment", self.label, experiment.name());
        let points = match experiment {
            Experiment::Add => self.sweep_alterations(base, Trial::AddColumns)?,
            Experiment::Drop => self.sweep_alterations(base, Trial::DropColumns)?,
            Experiment::Tuples => self.sweep_tuples(base)?,
            Experiment::Columns => self.sweep_columns(base)?,
        };
        Ok(Series {
            label: self.label.clone(),
            points,
        })
    }
}
