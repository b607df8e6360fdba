//! Flag-driven, non-interactive mode.

mod context;
mod flags;
pub mod prompts;
pub mod quiet;

pub use context::Context;
pub use flags::CliFlags;

use crate::error::RunError;

/// Generate from parsed flags, reporting failures on stderr.
/// Returns the process exit code.
pub fn run(flags: CliFlags) -> i32 {
    let mut context = Context::new(flags);
    match context.run() {
        Ok(()) => 0,
        Err(RunError::Aborted) => 0,
        Err(e) => {
            log::debug!("run failed: {:?}", e);
            prompts::error(&e.to_string());
            1
        }
    }
}
