use crate::util::types::Cell;

use super::TableSpec;

//Statement rendering. Identifiers are interpolated as is, TableSpec validates them

pub fn drop_table_if_exists(table: &str) -> String {
    format!("DROP TABLE IF EXISTS {table};")
}

pub fn drop_table(table: &str) -> String {
    format!("DROP TABLE {table};")
}

pub fn create_table(spec: &TableSpec) -> String {
    let schema = spec
        .column_names()
        .iter()
        .map(|column| format!("{column} int"))
        .collect::<Vec<_>>()
        .join(", ");
    format!("CREATE TABLE {} ({schema});", spec.table_name())
}

///Multi-row insert: `INSERT INTO t VALUES (1, 2), (3, 4);`
pub fn insert_batch<R: AsRef<[Cell]>>(table: &str, rows: &[R]) -> String {
    let values = rows
        .iter()
        .map(|row| tuple(row.as_ref()))
        .collect::<Vec<_>>()
        .join(", ");
    format!("INSERT INTO {table} VALUES {values};")
}

pub fn add_columns(table: &str, columns: &[String]) -> String {
    alter_table(table, columns.iter().map(|c| format!("ADD COLUMN {c} int")))
}

pub fn drop_columns(table: &str, columns: &[String]) -> String {
    alter_table(table, columns.iter().map(|c| format!("DROP COLUMN {c}")))
}

fn alter_table(table: &str, actions: impl Iterator<Item = String>) -> String {
    format!(
        "ALTER TABLE {table} {};",
        actions.collect::<Vec<_>>().join(", ")
    )
}

//a one column row is `(5)`, never `(5,)`
fn tuple(row: &[Cell]) -> String {
    let values = row
        .iter()
        .map(|cell| cell.to_string())
        .collect::<Vec<_>>()
        .join(", ");
    format!("({values})")
}
