//! Interactive prompt mode.

mod input;
mod session;

use std::io;

pub use input::*;
pub use session::*;

use crate::cli::{prompts, quiet};
use crate::entropy::Source;
use crate::settings::Settings;

/// Run one interactive session against the real terminal.
///
/// Uses the raw-mode line editor when stdin is a terminal, plain line reads
/// otherwise.
pub fn run() -> io::Result<Outcome> {
    let settings = Settings::load_from_file().unwrap_or_else(|e| {
        prompts::warn(&format!("Failed to load settings: {}", e));
        Settings::default()
    });
    let mut rng = Source::default();

    let stdout = io::stdout();
    let mut out = stdout.lock();

    let outcome = if quiet::is_interactive() {
        run_session(&mut TerminalPrompter, &mut out, &settings, &mut rng)?
    } else {
        let stdin = io::stdin();
        let mut prompter = LinePrompter::new(stdin.lock(), io::stderr());
        run_session(&mut prompter, &mut out, &settings, &mut rng)?
    };

    log::debug!("interactive session ended: {:?}", outcome);
    Ok(outcome)
}
