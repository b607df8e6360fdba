//! Password generation settings.

mod file;

use crate::error::SettingsError;
use crate::pass::Request;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Settings {
    pub pass_length: usize,
    pub include_specials: bool,
    pub exclude_chars: String,
    pub number_of_passwords: usize,
    pub output_file_path: String,
    pub to_clipboard: bool,
    pub seed: Option<u64>,
}

impl Settings {
    pub fn load_from_file() -> Result<Self, SettingsError> {
        Self::load_from(&file::default_path())
    }

    pub fn load_from(path: &str) -> Result<Self, SettingsError> {
        let mut settings = Settings::default();
        file::load(&mut settings, path)?;
        Ok(settings)
    }

    pub fn save_to_file(&self) -> Result<(), SettingsError> {
        self.save_to(&file::default_path())
    }

    pub fn save_to(&self, path: &str) -> Result<(), SettingsError> {
        file::save(self, path)
    }

    /// The generation request these settings describe.
    pub fn request(&self) -> Request {
        Request::new(self.pass_length, self.include_specials, &self.exclude_chars)
    }

    pub fn file_path() -> String {
        file::default_path()
    }
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            pass_length: 12,
            include_specials: true,
            exclude_chars: String::new(),
            number_of_passwords: 1,
            output_file_path: String::new(),
            to_clipboard: false,
            seed: None,
        }
    }
}
