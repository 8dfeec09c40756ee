pub mod filename;
pub mod names;
#[cfg(test)]
pub mod testing;
pub mod types;
