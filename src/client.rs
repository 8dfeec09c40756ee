use std::{
    fmt,
    fs::File,
    path::Path,
    process::{Command, Stdio},
};

use log::{debug, warn};

use crate::error::{Error, Result};

///Program plus argument list of a database command line client (psql and friends).
/// Arguments are handed to the OS as is, nothing goes through a shell
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ClientCommand {
    program: String,
    args: Vec<String>,
}

impl ClientCommand {
    pub fn new(program: &str, args: &[&str]) -> Self {
        Self {
            program: String::from(program),
            args: args.iter().map(|arg| arg.to_string()).collect(),
        }
    }
    ///Splits on whitespace, no quoting rules: `sudo -u postgres psql`
    pub fn parse(line: &str) -> Result<Self> {
        let mut parts = line.split_whitespace().map(String::from);
        let program = parts.next().ok_or(Error::EmptyCommand)?;
        Ok(Self {
            program,
            args: parts.collect(),
        })
    }
    pub fn with_port(mut self, port: u16) -> Self {
        self.args.push(String::from("-p"));
        self.args.push(port.to_string());
        self
    }
    pub fn program(&self) -> &str {
        &self.program
    }
    pub fn args(&self) -> &[String] {
        &self.args
    }
    fn command(&self) -> Command {
        let mut command = Command::new(&self.program);
        command.args(&self.args);
        command
    }
}

impl fmt::Display for ClientCommand {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.program)?;
        for arg in &self.args {
            write!(f, " {arg}")?;
        }
        Ok(())
    }
}

///A target system the benchmarker can load scripts into and run statements against
pub trait SqlClient {
    ///Executes every statement of the script at path
    fn run_file(&self, path: &Path) -> Result<()>;
    ///Executes a single statement
    fn run_statement(&self, sql: &str) -> Result<()>;
}

///Runs the client as a child process and waits for it. Standard output is discarded
pub struct ProcessClient {
    command: ClientCommand,
}

impl ProcessClient {
    pub fn new(command: ClientCommand) -> Self {
        Self { command }
    }
    pub fn command(&self) -> &ClientCommand {
        &self.command
    }

    //Non-zero exit is logged, not returned: the timing sample is still recorded
    fn wait(&self, mut command: Command, task: &str) -> Result<()> {
        let status = command
            .stdout(Stdio::null())
            .status()
            .map_err(|source| Error::Spawn {
                program: self.command.program.clone(),
                source,
            })?;
        if status.success() {
            debug!("`{}` finished {task}", self.command);
        } else {
            warn!("`{}` exited with {status} while running {task}", self.command);
        }
        Ok(())
    }
}

impl SqlClient for ProcessClient {
    fn run_file(&self, path: &Path) -> Result<()> {
        let script = File::open(path)?;
        let mut command = self.command.command();
        command.stdin(Stdio::from(script));
        self.wait(command, &path.display().to_string())
    }

    fn run_statement(&self, sql: &str) -> Result<()> {
        let mut command = self.command.command();
        command.arg("-c").arg(sql).stdin(Stdio::null());
        self.wait(command, sql)
    }
}
