use std::io::{self, BufRead, Write};

use crossterm::event::{Event, KeyCode, KeyEventKind, KeyModifiers, read};

use crate::terminal::{RawModeGuard, flush, reset_terminal};

/// Edit a single line of input in raw mode, prefilled with `initial`.
///
/// Only characters accepted by `accept` can be typed. Returns `None` when the
/// user cancels with Esc or Ctrl+Q, or when the terminal stops delivering
/// events. Ctrl+C exits the process. Without raw mode, falls back to
/// [`read_plain_line`] on stdin.
fn edit_line(prompt: &str, initial: &str, accept: fn(char) -> bool) -> Option<String> {
    let mut input: Vec<char> = initial.chars().collect();
    let mut cursor = input.len();
    let mut drawn_len = input.len();
    let mut cancelled = false;

    let mut guard = match RawModeGuard::new() {
        Ok(g) => g,
        Err(e) => {
            log::debug!("raw mode unavailable, reading a plain line: {}", e);
            let mut stdout = io::stdout();
            return read_plain_line(&mut io::stdin().lock(), &mut stdout, prompt, initial);
        }
    };

    print!("{}: {}", prompt, initial);
    flush();

    loop {
        let key_event = match read() {
            Ok(Event::Key(key_event)) if key_event.kind != KeyEventKind::Release => key_event,
            Ok(_) => continue,
            Err(e) => {
                log::debug!("terminal read failed: {}", e);
                cancelled = true;
                break;
            }
        };
        let ctrl = key_event.modifiers.contains(KeyModifiers::CONTROL);

        match key_event.code {
            KeyCode::Char('c') if ctrl => {
                // process::exit skips destructors
                reset_terminal();
                println!();
                std::process::exit(0);
            }
            KeyCode::Char('q') if ctrl => {
                cancelled = true;
                break;
            }
            KeyCode::Char('u') if ctrl => {
                input.clear();
                cursor = 0;
            }
            KeyCode::Esc => {
                cancelled = true;
                break;
            }
            KeyCode::Enter => break,
            KeyCode::Backspace if cursor > 0 => {
                cursor -= 1;
                input.remove(cursor);
            }
            KeyCode::Delete if cursor < input.len() => {
                input.remove(cursor);
            }
            KeyCode::Left if cursor > 0 => cursor -= 1,
            KeyCode::Right if cursor < input.len() => cursor += 1,
            KeyCode::Home => cursor = 0,
            KeyCode::End => cursor = input.len(),
            KeyCode::Char(c) if !ctrl && accept(c) => {
                input.insert(cursor, c);
                cursor += 1;
            }
            _ => {}
        }

        let text: String = input.iter().collect();
        print!("\r{}: {}", prompt, " ".repeat(drawn_len + 1));
        print!("\r{}: {}", prompt, text);
        drawn_len = input.len();

        // Columns are 1-based
        print!("\x1b[{}G", prompt.chars().count() + 3 + cursor);
        flush();
    }

    guard.release();
    println!();

    if cancelled {
        None
    } else {
        Some(input.into_iter().collect())
    }
}

/// Cooked-mode prompt: shows `initial` in brackets, an empty line keeps it.
/// `None` at end of input or on a read error.
fn read_plain_line<R, W>(input: &mut R, output: &mut W, prompt: &str, initial: &str) -> Option<String>
where
    R: BufRead + ?Sized,
    W: Write + ?Sized,
{
    let shown = if initial.is_empty() {
        write!(output, "{}: ", prompt)
    } else {
        write!(output, "{} [{}]: ", prompt, initial)
    };
    if shown.and_then(|()| output.flush()).is_err() {
        return None;
    }

    let mut line = String::new();
    match input.read_line(&mut line) {
        Ok(0) | Err(_) => None,
        Ok(_) => {
            let line = line.trim_end_matches(['\r', '\n']);
            if line.trim().is_empty() {
                Some(initial.to_string())
            } else {
                Some(line.to_string())
            }
        }
    }
}

/// Free-text line editor.
pub fn get_editable_input(prompt: &str, initial: &str) -> Option<String> {
    edit_line(prompt, initial, |_| true)
}

/// Line editor that only accepts digits.
pub fn get_numeric_input(prompt: &str, initial: usize) -> Option<String> {
    edit_line(prompt, &initial.to_string(), |c| c.is_ascii_digit())
}
