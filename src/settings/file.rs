//! Settings file persistence.
//!
//! One line of comma-separated fields. `|` escapes the next character so
//! commas and pipes can appear in the exclusion list.

use std::env;
use std::fs::OpenOptions;
use std::io::{BufRead, BufReader, Write};
use std::path::Path;

use super::Settings;
use crate::error::SettingsError;

const FIELD_COUNT: usize = 3;

pub fn save(settings: &Settings, path: &str) -> Result<(), SettingsError> {
    if let Some(parent) = Path::new(path).parent()
        && !parent.as_os_str().is_empty()
    {
        std::fs::create_dir_all(parent).map_err(|e| SettingsError::io(path, e))?;
    }

    let mut file = OpenOptions::new()
        .write(true)
        .create(true)
        .truncate(true)
        .open(path)
        .map_err(|e| SettingsError::io(path, e))?;

    let data = format!(
        "{},{},{}\n",
        settings.pass_length,
        settings.include_specials,
        escape(&settings.exclude_chars)
    );

    file.write_all(data.as_bytes())
        .map_err(|e| SettingsError::io(path, e))?;
    log::debug!("saved settings to {}", path);
    Ok(())
}

pub fn load(settings: &mut Settings, path: &str) -> Result<(), SettingsError> {
    if !Path::new(path).exists() {
        log::debug!("no settings file at {}, writing defaults", path);
        return save(settings, path);
    }

    let file = OpenOptions::new()
        .read(true)
        .open(path)
        .map_err(|e| SettingsError::io(path, e))?;

    let mut reader = BufReader::new(file);
    let mut line = String::new();
    reader
        .read_line(&mut line)
        .map_err(|e| SettingsError::io(path, e))?;

    let line = line.trim_end_matches(['\r', '\n']);
    let parts = split_escaped(line, ',');

    if parts.len() != FIELD_COUNT {
        log::warn!("malformed settings file {}, resetting to defaults", path);
        return save(settings, path);
    }

    settings.pass_length = parts[0].parse().unwrap_or(settings.pass_length);
    settings.include_specials = parts[1].parse().unwrap_or(settings.include_specials);
    settings.exclude_chars = parts[2].clone();
    log::debug!("loaded settings from {}", path);
    Ok(())
}

pub fn default_path() -> String {
    if let Ok(path) = env::var("PASSGEN_CONFIG")
        && !path.is_empty()
    {
        return path;
    }
    let home = env::var("HOME").unwrap_or_else(|_| ".".into());
    format!("{}/.config/passgen/settings", home)
}

fn escape(s: &str) -> String {
    let mut out = String::with_capacity(s.len());
    for c in s.chars() {
        if c == ',' || c == '|' {
            out.push('|');
        }
        out.push(c);
    }
    out
}

fn split_escaped(s: &str, delimiter: char) -> Vec<String> {
    let mut parts = vec![];
    let mut current = String::new();
    let mut escape_next = false;

    for c in s.chars() {
        if escape_next {
            current.push(c);
            escape_next = false;
        } else if c == '|' {
            escape_next = true;
        } else if c == delimiter {
            parts.push(std::mem::take(&mut current));
        } else {
            current.push(c);
        }
    }

    if !s.is_empty() {
        parts.push(current);
    }
    parts
}

#[cfg(test)]
mod tests {
    use super::*;

    fn temp_path(dir: &tempfile::TempDir) -> String {
        dir.path()
            .join("passgen/settings")
            .to_str()
            .unwrap()
            .to_string()
    }

    #[test]
    fn split_handles_escapes_and_empty_fields() {
        assert_eq!(split_escaped("12,true,", ','), vec!["12", "true", ""]);
        assert_eq!(split_escaped("12,true,a|,b||c", ','), vec!["12", "true", "a,b|c"]);
        assert_eq!(split_escaped(",,", ','), vec!["", "", ""]);
        assert!(split_escaped("", ',').is_empty());
    }

    #[test]
    fn escape_round_trips_through_split() {
        let raw = "O0,|l1 ";
        let parts = split_escaped(&format!("1,{}", escape(raw)), ',');
        assert_eq!(parts, vec!["1".to_string(), raw.to_string()]);
    }

    #[test]
    fn missing_file_is_created_with_defaults() {
        let dir = tempfile::tempdir().unwrap();
        let path = temp_path(&dir);

        let settings = Settings::load_from(&path).unwrap();
        assert_eq!(settings, Settings::default());
        assert_eq!(std::fs::read_to_string(&path).unwrap(), "12,true,\n");
    }

    #[test]
    fn saved_settings_load_back() {
        let dir = tempfile::tempdir().unwrap();
        let path = temp_path(&dir);

        let saved = Settings {
            pass_length: 20,
            include_specials: false,
            exclude_chars: "0O,l1|".to_string(),
            ..Default::default()
        };
        saved.save_to(&path).unwrap();

        let loaded = Settings::load_from(&path).unwrap();
        assert_eq!(loaded.pass_length, 20);
        assert!(!loaded.include_specials);
        assert_eq!(loaded.exclude_chars, "0O,l1|");
    }

    #[test]
    fn malformed_file_is_reset() {
        let dir = tempfile::tempdir().unwrap();
        let path = temp_path(&dir);
        std::fs::create_dir_all(dir.path().join("passgen")).unwrap();
        std::fs::write(&path, "garbage\n").unwrap();

        let settings = Settings::load_from(&path).unwrap();
        assert_eq!(settings, Settings::default());
        assert_eq!(std::fs::read_to_string(&path).unwrap(), "12,true,\n");
    }

    #[test]
    fn unparsable_fields_keep_defaults() {
        let dir = tempfile::tempdir().unwrap();
        let path = temp_path(&dir);
        std::fs::create_dir_all(dir.path().join("passgen")).unwrap();
        std::fs::write(&path, "abc,maybe,xyz\n").unwrap();

        let settings = Settings::load_from(&path).unwrap();
        assert_eq!(settings.pass_length, 12);
        assert!(settings.include_specials);
        assert_eq!(settings.exclude_chars, "xyz");
    }
}
