use anyhow::{Context, Result};
use log::{debug, warn};
use std::{
    env::current_dir,
    ffi::{OsStr, OsString},
    path::PathBuf,
};

mod command;
pub use command::{Inherit, Invocation, RUN_SCRIPT_FLAG, Spawn};

mod locate;
pub use locate::locate_interpreter;

mod resolve;
pub use resolve::{BUILD_OUTPUT_DIR, SCRIPT_FILE_NAME, program_dir, script_dir, script_path};

/// Name of the interpreter searched for by default
pub const INTERPRETER: &str = "pwsh";

#[must_use]
pub fn launcher() -> Launcher {
    Launcher {
        interpreter: OsString::from(INTERPRETER),
        search_path: None,
        program_dir: None,
        current_dir: None,
    }
}

pub struct Launcher {
    interpreter: OsString,
    search_path: Option<OsString>,
    program_dir: Option<PathBuf>,
    current_dir: Option<PathBuf>,
}

impl Launcher {
    /// Search for `name` instead of [`INTERPRETER`]
    #[must_use]
    pub fn interpreter<S>(mut self, name: S) -> Launcher
    where
        S: AsRef<OsStr>,
    {
        self.interpreter = name.as_ref().to_owned();
        self
    }

    /// Search `paths` instead of `PATH`
    #[must_use]
    pub fn search_path<S>(mut self, paths: S) -> Launcher
    where
        S: AsRef<OsStr>,
    {
        self.search_path = Some(paths.as_ref().to_owned());
        self
    }

    /// Resolve the script relative to `dir` instead of the current executable's directory
    #[must_use]
    pub fn program_dir<P>(mut self, dir: P) -> Launcher
    where
        P: Into<PathBuf>,
    {
        self.program_dir = Some(dir.into());
        self
    }

    /// Run the child in `dir` instead of the current directory
    #[must_use]
    pub fn current_dir<P>(mut self, dir: P) -> Launcher
    where
        P: Into<PathBuf>,
    {
        self.current_dir = Some(dir.into());
        self
    }

    /// Run the script, inheriting standard streams. Returns the child's exit code, if it had one.
    pub fn run(self) -> Result<Option<i32>> {
        self.run_with(&mut Inherit)
    }

    pub fn run_with<S: Spawn>(self, spawner: &mut S) -> Result<Option<i32>> {
        let invocation = self.invocation()?;

        match spawner.spawn_and_wait(&invocation) {
            Ok(Some(code)) => Ok(Some(code)),
            Ok(None) => {
                warn!(
                    "`{}` terminated without an exit code",
                    invocation.program.display()
                );
                Ok(None)
            }
            // The exit status is left at its default if the child could not be launched.
            Err(error) => {
                warn!(
                    "failed to launch `{}`: {error}",
                    invocation.program.display()
                );
                Ok(None)
            }
        }
    }

    fn invocation(self) -> Result<Invocation> {
        let program = locate_interpreter(&self.interpreter, self.search_path.as_deref())?;
        debug!("interpreter: {}", program.display());

        let program_dir = match self.program_dir {
            Some(dir) => dir,
            None => program_dir()?,
        };
        let script_path = script_path(&program_dir);
        debug!("script: {}", script_path.display());

        let current_dir = match self.current_dir {
            Some(dir) => dir,
            None => current_dir().context("failed to get current directory")?,
        };

        Ok(Invocation::new(program, &script_path, current_dir))
    }
}
