use anyhow::Result;
use std::process::{ExitCode, exit};

fn main() -> Result<ExitCode> {
    env_logger::try_init().unwrap_or_default();

    let Some(code) = invoke_pwsh::launcher().run()? else {
        return Ok(ExitCode::SUCCESS);
    };

    // Windows exit codes may not fit in a `u8`.
    match u8::try_from(code) {
        Ok(code) => Ok(ExitCode::from(code)),
        Err(_) => exit(code),
    }
}
