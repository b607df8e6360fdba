//! Terminal output utilities.
//!
//! ANSI helpers, box drawing and the entropy summary.

use crossterm::terminal::disable_raw_mode;
use std::io::{self, Write};

// ============================================================================
// ANSI Color/Style Constants
// ============================================================================

pub const RESET: &str = "\x1b[0m";
pub const BOLD: &str = "\x1b[1m";

// ============================================================================
// Terminal Control
// ============================================================================

/// Flush stdout.
pub fn flush() {
    let _ = io::stdout().flush();
}

/// Leave raw mode and clear any active styling.
pub fn reset_terminal() {
    let _ = disable_raw_mode();
    print!("{RESET}");
    flush();
}

// ============================================================================
// Box Drawing
// ============================================================================

pub const BOX_WIDTH: usize = 60;

/// Top border with optional title: ┌─ Title ─────┐
pub fn box_top<W: Write>(out: &mut W, title: &str) -> io::Result<()> {
    if title.is_empty() {
        return writeln!(out, "┌{}┐", "─".repeat(BOX_WIDTH - 2));
    }
    let title_part = format!("─ {} ", title);
    let remaining = (BOX_WIDTH - 2).saturating_sub(title_part.chars().count());
    writeln!(out, "┌{}{}┐", title_part, "─".repeat(remaining))
}

/// Content line padded to the box width: │ content      │
pub fn box_line<W: Write>(out: &mut W, content: &str) -> io::Result<()> {
    let inner_width = BOX_WIDTH - 4;
    let padding = inner_width.saturating_sub(console_width(content));
    writeln!(out, "│ {}{} │", content, " ".repeat(padding))
}

pub fn box_bottom<W: Write>(out: &mut W) -> io::Result<()> {
    writeln!(out, "└{}┘", "─".repeat(BOX_WIDTH - 2))
}

/// Display width ignoring ANSI escape sequences.
fn console_width(s: &str) -> usize {
    let mut width = 0;
    let mut in_escape = false;
    for c in s.chars() {
        if c == '\x1b' {
            in_escape = true;
        } else if in_escape {
            if c == 'm' {
                in_escape = false;
            }
        } else {
            width += 1;
        }
    }
    width
}

// ============================================================================
// Entropy Summary
// ============================================================================

/// Boxed entropy report for a request drawing from `pool_size` characters.
pub fn entropy_summary<W: Write>(
    out: &mut W,
    length: usize,
    pool_size: usize,
    source: &str,
) -> io::Result<()> {
    let bits = crate::entropy::estimate_bits(length, pool_size);
    let strength = crate::entropy::strength(bits);

    box_top(out, "Entropy")?;
    box_line(out, &format!("{BOLD}{:.1} bits{RESET} ({})", bits, strength))?;
    box_line(out, &format!("Charset: {} chars • Length: {}", pool_size, length))?;
    box_line(out, &format!("Source: {}", source))?;
    box_bottom(out)
}
