use std::{collections::HashSet, path::PathBuf};

use rand::Rng;

use crate::{
    error::{Error, Result},
    util::{
        filename, names,
        types::{ColumnNaming, RemainderPolicy, Size},
    },
};

pub mod generator;
pub mod sql;

///Everything needed to produce a table script. Derive variations with struct update
/// syntax (`GeneratorConfig { columns: 7, ..base.clone() }`) instead of mutating a shared config
#[derive(Debug, Clone, PartialEq)]
pub struct GeneratorConfig {
    pub name_len: Size,
    pub table_name: Option<String>, //random uppercase name of name_len when None
    pub column_naming: ColumnNaming,
    pub columns: Size,
    pub tuples: Size,
    pub batch_size: Size,
    pub filename: PathBuf,
    pub remainder: RemainderPolicy,
}

impl Default for GeneratorConfig {
    fn default() -> Self {
        Self {
            name_len: 6,
            table_name: None,
            column_naming: ColumnNaming::Random(6),
            columns: 2,
            tuples: 1000,
            batch_size: 10,
            filename: PathBuf::from(filename::DEFAULT_TABLE_FILE),
            remainder: RemainderPolicy::Reject,
        }
    }
}

impl GeneratorConfig {
    ///Resolves random names and validates the result
    pub fn table_spec<R: Rng + ?Sized>(&self, rng: &mut R) -> Result<TableSpec> {
        let table_name = match &self.table_name {
            Some(name) => name.clone(),
            None => names::random_name(rng, self.name_len),
        };
        let column_names = match self.column_naming {
            ColumnNaming::Alphabet => names::alphabet_column_names(self.columns),
            ColumnNaming::Random(len) => names::random_column_names(rng, self.columns, len)?,
        };
        TableSpec::new(
            table_name,
            column_names,
            self.tuples,
            self.batch_size,
            self.remainder,
        )
    }
}

///Immutable description of one synthetic table
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TableSpec {
    table_name: String,
    column_names: Vec<String>,
    row_count: Size,
    batch_size: Size,
}

impl TableSpec {
    pub fn new(
        table_name: String,
        column_names: Vec<String>,
        row_count: Size,
        batch_size: Size,
        remainder: RemainderPolicy,
    ) -> Result<Self> {
        if !is_valid_identifier(&table_name) {
            return Err(Error::InvalidSpec(format!(
                "\"{table_name}\" is an invalid table name"
            )));
        }
        if column_names.is_empty() {
            return Err(Error::InvalidSpec(String::from(
                "a table needs at least one column",
            )));
        }
        if let Some(name) = column_names.iter().find(|name| !is_valid_identifier(name)) {
            return Err(Error::InvalidSpec(format!(
                "\"{name}\" is an invalid column name"
            )));
        }
        let distinct: HashSet<String> = column_names.iter().map(|c| c.to_lowercase()).collect();
        if distinct.len() != column_names.len() {
            return Err(Error::InvalidSpec(String::from(
                "column names must be distinct",
            )));
        }
        if batch_size < 1 {
            return Err(Error::InvalidSpec(format!(
                "{batch_size} is an invalid batch size"
            )));
        }
        if remainder == RemainderPolicy::Reject && row_count % batch_size != 0 {
            return Err(Error::UnevenBatches {
                rows: row_count,
                batch_size,
            });
        }
        Ok(Self {
            table_name,
            column_names,
            row_count,
            batch_size,
        })
    }

    pub fn table_name(&self) -> &str {
        &self.table_name
    }
    pub fn column_names(&self) -> &[String] {
        &self.column_names
    }
    pub fn column_count(&self) -> Size {
        self.column_names.len()
    }
    pub fn row_count(&self) -> Size {
        self.row_count
    }
    pub fn batch_size(&self) -> Size {
        self.batch_size
    }
    ///Number of INSERT statements. Under RemainderPolicy::Truncate the leftover
    /// row_count % batch_size rows are never written
    pub fn insert_count(&self) -> Size {
        self.row_count / self.batch_size
    }
    ///Rows actually present in the generated script
    pub fn written_rows(&self) -> Size {
        self.insert_count() * self.batch_size
    }
}

///Names are interpolated into SQL unquoted, so only plain identifiers are accepted
fn is_valid_identifier(name: &str) -> bool {
    let mut chars = name.chars();
    match chars.next() {
        Some(first) if first.is_ascii_alphabetic() || first == '_' => {
            chars.all(|c| c.is_ascii_alphanumeric() || c == '_')
        }
        _ => false,
    }
}
