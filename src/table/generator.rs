use std::{
    fs::File,
    io::{BufWriter, Write},
    path::Path,
};

use log::debug;
use rand::{thread_rng, Rng};

use crate::{
    error::Result,
    util::types::{Row, Size, CELL_MAX, CELL_MIN},
};

use super::{sql, TableSpec};

pub fn random_row<R: Rng + ?Sized>(rng: &mut R, columns: Size) -> Row {
    (0..columns)
        .map(|_| rng.gen_range(CELL_MIN..=CELL_MAX))
        .collect()
}

///`count` rows of `columns` random integers each
pub fn random_rows<R: Rng + ?Sized>(rng: &mut R, columns: Size, count: Size) -> Vec<Row> {
    (0..count).map(|_| random_row(rng, columns)).collect()
}

///Writes the drop/create/insert script for spec, one statement per line
pub fn generate<W: Write, R: Rng + ?Sized>(
    spec: &TableSpec,
    writer: &mut W,
    rng: &mut R,
) -> Result<()> {
    writeln!(writer, "{}", sql::drop_table_if_exists(spec.table_name()))?;
    writeln!(writer, "{}", sql::create_table(spec))?;
    for _ in 0..spec.insert_count() {
        let rows = random_rows(rng, spec.column_count(), spec.batch_size());
        writeln!(writer, "{}", sql::insert_batch(spec.table_name(), &rows))?;
    }
    Ok(())
}

///Creates (or truncates) the file at path and fills it with the table script
pub fn write_table_file(spec: &TableSpec, path: &Path) -> Result<()> {
    let mut writer = BufWriter::new(File::create(path)?);
    generate(spec, &mut writer, &mut thread_rng())?;
    writer.flush()?;
    debug!(
        "wrote {} ({} columns, {} rows in {} inserts) to {}",
        spec.table_name(),
        spec.column_count(),
        spec.written_rows(),
        spec.insert_count(),
        path.display()
    );
    Ok(())
}
