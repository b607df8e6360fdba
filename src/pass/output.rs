//! Password output to terminal and files.

use std::fs::OpenOptions;
use std::io::{self, Write};
use std::path::Path;

use zeroize::Zeroize;

use super::Password;

const DEFAULT_FILE_NAME: &str = "passgen.txt";

/// Buffered writer that wipes its buffer after every flush and on drop.
pub struct SecureBufWriter<W: Write> {
    inner: W,
    buf: Vec<u8>,
}

impl<W: Write> SecureBufWriter<W> {
    const CAPACITY: usize = 8 * 1024;

    pub fn new(inner: W) -> Self {
        Self {
            inner,
            buf: Vec::with_capacity(Self::CAPACITY),
        }
    }

    fn flush_buf(&mut self) -> io::Result<()> {
        let result = self.inner.write_all(&self.buf);
        self.buf.zeroize();
        result
    }
}

impl<W: Write> Write for SecureBufWriter<W> {
    fn write(&mut self, data: &[u8]) -> io::Result<usize> {
        if self.buf.len() + data.len() > Self::CAPACITY {
            self.flush_buf()?;
        }
        if data.len() >= Self::CAPACITY {
            return self.inner.write(data);
        }
        self.buf.extend_from_slice(data);
        Ok(data.len())
    }

    fn flush(&mut self) -> io::Result<()> {
        self.flush_buf()?;
        self.inner.flush()
    }
}

impl<W: Write> Drop for SecureBufWriter<W> {
    fn drop(&mut self) {
        let _ = self.flush();
        self.buf.zeroize();
    }
}

/// Write one password per line.
pub fn write_lines<W: Write>(out: &mut W, passwords: &[Password]) -> io::Result<()> {
    let mut writer = SecureBufWriter::new(out);
    for password in passwords {
        writer.write_all(password.as_str().as_bytes())?;
        writer.write_all(b"\n")?;
    }
    writer.flush()
}

/// Print passwords to stdout.
pub fn to_terminal(passwords: &[Password]) -> io::Result<()> {
    let stdout = io::stdout();
    let mut out = stdout.lock();
    write_lines(&mut out, passwords)
}

/// Append passwords to `path`, creating parent directories as needed.
pub fn to_file(path: &str, passwords: &[Password]) -> io::Result<()> {
    if let Some(parent) = Path::new(path).parent()
        && !parent.as_os_str().is_empty()
        && !parent.exists()
    {
        std::fs::create_dir_all(parent)?;
    }

    let mut file = OpenOptions::new().create(true).append(true).open(path)?;
    write_lines(&mut file, passwords)?;
    log::debug!("appended {} password(s) to {}", passwords.len(), path);
    Ok(())
}

/// Join passwords into one newline-separated block (for the clipboard).
pub fn joined(passwords: &[Password]) -> String {
    let mut text = String::new();
    for (i, password) in passwords.iter().enumerate() {
        if i > 0 {
            text.push('\n');
        }
        text.push_str(password.as_str());
    }
    text
}

/// Normalize an output path: `.` or a directory gets the default file name,
/// anything else gets a `.txt` extension if it lacks one.
pub fn resolve_path(path: &str) -> String {
    if path == "." {
        DEFAULT_FILE_NAME.to_string()
    } else if path.ends_with('/') {
        format!("{}{}", path, DEFAULT_FILE_NAME)
    } else if !path.ends_with(".txt") {
        format!("{}.txt", path)
    } else {
        path.to_string()
    }
}
