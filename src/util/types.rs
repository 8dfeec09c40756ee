use serde::{Deserialize, Serialize};

pub type Size = usize; //for lengths, counts and batch sizes
pub type Seconds = f64; //wall clock durations
pub type Cell = u8; //synthetic integer value, always within CELL_MIN..=CELL_MAX
pub type Row = Vec<Cell>;

pub const CELL_MIN: Cell = 0;
pub const CELL_MAX: Cell = 100;

///What to do when the row count is not a multiple of the batch size
#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum RemainderPolicy {
    ///Refuse to build the table
    #[default]
    Reject,
    ///Emit rows / batch_size full batches, silently dropping the remainder
    Truncate,
}

#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq, Eq)]
pub enum ColumnNaming {
    ///a, b, ..., z, aa, bb, ..., zz, aaa, ...
    Alphabet,
    ///Random lowercase names of the given length
    Random(Size),
}

///A single timed ALTER TABLE statement
#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq, Eq)]
pub enum Trial {
    AddColumns(Size),
    DropColumns(Size),
}

impl Trial {
    pub fn column_count(&self) -> Size {
        match self {
            Trial::AddColumns(n) | Trial::DropColumns(n) => *n,
        }
    }
}

///Independent variable swept by an experiment
#[derive(
    Serialize, Deserialize, Debug, Clone, Copy, PartialEq, Eq, Hash, clap::ValueEnum,
)]
pub enum Experiment {
    Add,
    Drop,
    Tuples,
    Columns,
}

impl Experiment {
    pub const ALL: [Experiment; 4] = [
        Experiment::Add,
        Experiment::Drop,
        Experiment::Tuples,
        Experiment::Columns,
    ];

    pub fn name(&self) -> &'static str {
        match self {
            Experiment::Add => "add",
            Experiment::Drop => "drop",
            Experiment::Tuples => "tuples",
            Experiment::Columns => "columns",
        }
    }

    pub fn x_label(&self) -> &'static str {
        match self {
            Experiment::Add => "Added Columns",
            Experiment::Drop => "Dropped Columns",
            Experiment::Tuples => "Tuples (Thousands)",
            Experiment::Columns => "Columns",
        }
    }
}
