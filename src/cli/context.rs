//! CLI context - bundles settings, flags, and clipboard state.

use copypasta::{ClipboardContext, ClipboardProvider};
use zeroize::Zeroize;

use super::{CliFlags, prompts, quiet};
use crate::entropy::Source;
use crate::error::RunError;
use crate::pass::{self, Password};
use crate::settings::Settings;
use crate::terminal::entropy_summary;

/// Application context for CLI mode.
pub struct Context {
    pub settings: Settings,
    pub saved_settings: Settings,
    pub clipboard: Option<ClipboardContext>,
    pub flags: CliFlags,
    /// Where `--save` writes the defaults.
    pub settings_path: String,
}

impl Context {
    pub fn new(flags: CliFlags) -> Self {
        quiet::set(flags.quiet);

        let settings_path = Settings::file_path();
        let saved_settings = Settings::load_from(&settings_path).unwrap_or_else(|e| {
            prompts::warn(&format!("Failed to load settings: {}", e));
            Settings::default()
        });
        let settings = apply_flags(&saved_settings, &flags);

        Self {
            settings,
            saved_settings,
            clipboard: None,
            flags,
            settings_path,
        }
    }

    pub fn run(&mut self) -> Result<(), RunError> {
        let request = self.settings.request();
        request.validate()?;

        self.handle_save();
        self.handle_clipboard()?;

        let mut rng = Source::from_seed(self.settings.seed);

        if self.flags.entropy {
            let mut err = std::io::stderr().lock();
            entropy_summary(
                &mut err,
                request.length,
                request.pools().size(),
                rng.describe(),
            )?;
        }

        let passwords =
            pass::generate_batch(&mut rng, &request, self.settings.number_of_passwords)?;
        self.output(&passwords)
    }

    /// The defaults `--save` would write, if there is anything valid to save.
    fn defaults_to_save(&self) -> Option<Settings> {
        if !self.flags.save || !self.flags.has_generation_args() {
            return None;
        }
        if let Err(e) = self.settings.request().validate() {
            log::debug!("not saving invalid defaults: {}", e);
            return None;
        }
        Some(Settings {
            pass_length: self.settings.pass_length,
            include_specials: self.settings.include_specials,
            exclude_chars: self.settings.exclude_chars.clone(),
            ..self.saved_settings.clone()
        })
    }

    /// Persist generation flags as the new defaults.
    fn handle_save(&mut self) {
        if self.flags.save && !self.flags.has_generation_args() {
            prompts::warn("Nothing to save: pass -l, --special, --no-special or -x with --save.");
            return;
        }
        let Some(defaults) = self.defaults_to_save() else {
            return;
        };

        match defaults.save_to(&self.settings_path) {
            Ok(()) => {
                self.saved_settings = defaults;
                prompts::settings_saved(&self.settings_path);
            }
            Err(e) => prompts::warn(&format!("Failed to save settings: {}", e)),
        }
    }

    fn handle_clipboard(&mut self) -> Result<(), RunError> {
        if !self.settings.to_clipboard {
            return Ok(());
        }
        match ClipboardContext::new() {
            Ok(ctx) => self.clipboard = Some(ctx),
            Err(e) => {
                log::debug!("clipboard unavailable: {}", e);
                if !prompts::clipboard_fallback_prompt() {
                    return Err(RunError::Aborted);
                }
                self.settings.to_clipboard = false;
            }
        }
        Ok(())
    }

    fn output(&mut self, passwords: &[Password]) -> Result<(), RunError> {
        if let Some(ctx) = self.clipboard.as_mut() {
            let mut text = pass::output::joined(passwords);
            match ctx.set_contents(text.clone()) {
                Ok(()) => {
                    if let Ok(mut retrieved) = ctx.get_contents() {
                        retrieved.zeroize();
                    }
                    prompts::clipboard_copied(passwords.len());
                }
                Err(e) => prompts::clipboard_error(&e.to_string()),
            }
            text.zeroize();
        } else if !self.settings.output_file_path.is_empty() {
            let path = &self.settings.output_file_path;
            pass::output::to_file(path, passwords)?;
            let full_path = std::fs::canonicalize(path)
                .map(|p| p.display().to_string())
                .unwrap_or_else(|_| path.clone());
            prompts::passwords_written(passwords.len(), &full_path);
        } else {
            pass::output::to_terminal(passwords)?;
        }
        Ok(())
    }
}

/// Layer command-line flags over the saved defaults.
pub fn apply_flags(saved: &Settings, flags: &CliFlags) -> Settings {
    let mut settings = Settings {
        number_of_passwords: 1,
        ..saved.clone()
    };

    if let Some(len) = flags.length {
        settings.pass_length = len;
    }
    if let Some(num) = flags.number {
        settings.number_of_passwords = num;
    }
    if flags.no_special {
        settings.include_specials = false;
    }
    if flags.special {
        settings.include_specials = true;
    }
    if let Some(ref chars) = flags.exclude {
        settings.exclude_chars = chars.clone();
    }
    if let Some(ref path) = flags.output {
        settings.output_file_path = pass::output::resolve_path(path);
    }
    settings.to_clipboard = flags.clipboard;
    settings.seed = flags.seed;
    settings
}
