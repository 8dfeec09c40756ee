pub mod benchmarker;
pub mod client;
pub mod error;
pub mod plot;
pub mod report;
pub mod stats;
pub mod table;
pub mod util;

pub use error::{Error, Result};
