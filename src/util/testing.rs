use std::{
    cell::RefCell,
    path::Path,
    rc::Rc,
};

use tempfile::TempDir;

use crate::{client::SqlClient, error::Result};

///Runs test inside a fresh directory that is removed afterwards, even if the test panics
pub fn with_scratch_dir(test: &mut dyn FnMut(&Path)) {
    let dir = TempDir::new().unwrap();
    test(dir.path());
}

///SqlClient that records what it was asked to run instead of spawning anything
#[derive(Clone, Default)]
pub struct RecordingClient {
    pub log: Rc<RefCell<Vec<String>>>,
}

impl RecordingClient {
    pub const FILE_PREFIX: &'static str = "FILE ";

    pub fn entries(&self) -> Vec<String> {
        self.log.borrow().clone()
    }
}

impl SqlClient for RecordingClient {
    fn run_file(&self, path: &Path) -> Result<()> {
        self.log
            .borrow_mut()
            .push(format!("{}{}", Self::FILE_PREFIX, path.display()));
        Ok(())
    }
    fn run_statement(&self, sql: &str) -> Result<()> {
        self.log.borrow_mut().push(sql.to_string());
        Ok(())
    }
}
