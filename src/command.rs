use log::debug;
use std::{
    ffi::OsString,
    io,
    path::{Path, PathBuf},
    process::{Command, Stdio},
};

/// Interpreter flag requesting that a script file be run
pub const RUN_SCRIPT_FLAG: &str = "-f";

/// A single launch of the interpreter
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Invocation {
    pub program: PathBuf,
    pub args: Vec<OsString>,
    pub current_dir: PathBuf,
}

impl Invocation {
    #[must_use]
    pub fn new(program: PathBuf, script_path: &Path, current_dir: PathBuf) -> Self {
        Self {
            program,
            args: vec![
                OsString::from(RUN_SCRIPT_FLAG),
                script_path.as_os_str().to_owned(),
            ],
            current_dir,
        }
    }

    /// Build a [`Command`] whose standard streams are the parent's
    #[must_use]
    pub fn to_command(&self) -> Command {
        let mut command = Command::new(&self.program);
        command.args(&self.args);
        command.current_dir(&self.current_dir);
        command.stdin(Stdio::inherit());
        command.stdout(Stdio::inherit());
        command.stderr(Stdio::inherit());
        command
    }
}

/// Launches an [`Invocation`] and waits for it to finish
pub trait Spawn {
    /// Returns the child's exit code, or `None` if it did not exit with one (e.g., it was
    /// terminated by a signal).
    fn spawn_and_wait(&mut self, invocation: &Invocation) -> io::Result<Option<i32>>;
}

/// Runs the child with inherited standard streams
pub struct Inherit;

impl Spawn for Inherit {
    fn spawn_and_wait(&mut self, invocation: &Invocation) -> io::Result<Option<i32>> {
        let mut command = invocation.to_command();
        debug!("running: {command:?}");
        let status = command.status()?;
        Ok(status.code())
    }
}
