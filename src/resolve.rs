use anyhow::{Context, Result, bail};
use std::{
    env::current_exe,
    ffi::OsStr,
    path::{Path, PathBuf},
};

/// Name of the folder packaged builds are placed in. The script lives one level above it.
pub const BUILD_OUTPUT_DIR: &str = "dist";

pub const SCRIPT_FILE_NAME: &str = "action.ps1";

/// Directory containing the currently running executable
pub fn program_dir() -> Result<PathBuf> {
    let exe = current_exe().context("failed to determine current executable")?;
    let Some(dir) = exe.parent() else {
        bail!("failed to get parent of `{}`", exe.display());
    };
    Ok(dir.to_path_buf())
}

/// Strip one trailing [`BUILD_OUTPUT_DIR`] segment from `program_dir`, if present. The segment must
/// follow a separator, so a bare relative `dist` is kept.
#[must_use]
pub fn script_dir(program_dir: &Path) -> &Path {
    match program_dir.parent() {
        Some(parent)
            if !parent.as_os_str().is_empty()
                && program_dir.file_name() == Some(OsStr::new(BUILD_OUTPUT_DIR)) =>
        {
            parent
        }
        _ => program_dir,
    }
}

/// Path of the script to run. Whether the script exists is not checked.
#[must_use]
pub fn script_path(program_dir: &Path) -> PathBuf {
    script_dir(program_dir).join(SCRIPT_FILE_NAME)
}

#[cfg(test)]
mod test {
    use super::{program_dir, script_dir, script_path};
    use std::path::Path;

    #[cfg(unix)]
    #[test]
    fn strips_build_output_dir() {
        assert_eq!(
            Path::new("/opt/app/action.ps1"),
            script_path(Path::new("/opt/app/dist"))
        );
    }

    #[cfg(unix)]
    #[test]
    fn keeps_other_dirs() {
        assert_eq!(
            Path::new("/opt/app/action.ps1"),
            script_path(Path::new("/opt/app"))
        );
    }

    #[cfg(unix)]
    #[test]
    fn strips_exactly_once() {
        assert_eq!(
            Path::new("/opt/app/dist/action.ps1"),
            script_path(Path::new("/opt/app/dist/dist"))
        );
    }

    #[cfg(unix)]
    #[test]
    fn requires_whole_segment() {
        for dir in ["/opt/app/mydist", "/opt/app/dist-old", "/opt/dist/app"] {
            let dir = Path::new(dir);
            assert_eq!(dir, script_dir(dir), "failed for `{}`", dir.display());
        }
    }

    #[cfg(windows)]
    #[test]
    fn strips_build_output_dir_windows() {
        assert_eq!(
            Path::new(r"C:\app\action.ps1"),
            script_path(Path::new(r"C:\app\dist"))
        );
    }

    #[test]
    fn bare_build_output_dir_is_kept() {
        assert_eq!(
            Path::new("dist").join("action.ps1"),
            script_path(Path::new("dist"))
        );
        assert_eq!(
            Path::new("app").join("action.ps1"),
            script_path(&Path::new("app").join("dist"))
        );
    }

    #[test]
    fn program_dir_contains_test_binary() {
        let dir = program_dir().unwrap();
        let exe = std::env::current_exe().unwrap();
        assert_eq!(exe.parent(), Some(dir.as_path()));
    }
}
