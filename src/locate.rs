use anyhow::{Context, Result};
use std::{env::current_dir, ffi::OsStr, path::PathBuf};

/// Find `name` on the executable search path.
///
/// With `search_path` of `None`, the process's `PATH` is searched. Otherwise only the directories
/// in `search_path` are.
pub fn locate_interpreter(name: &OsStr, search_path: Option<&OsStr>) -> Result<PathBuf> {
    let result = match search_path {
        None => which::which(name),
        Some(paths) => {
            let cwd = current_dir()?;
            which::which_in(name, Some(paths), cwd)
        }
    };
    result.with_context(|| {
        format!(
            "unable to locate `{}` on the executable search path",
            name.display()
        )
    })
}
