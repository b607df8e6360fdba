//! The interactive generate-one-password session.

use std::io::{self, BufRead, Write};

use rand::Rng;

use super::{get_editable_input, get_numeric_input};
use crate::pass::{self, Request};
use crate::settings::Settings;

pub const LENGTH_PROMPT: &str = "Enter the desired password length";
pub const SPECIALS_PROMPT: &str = "Include special characters? (yes/no)";
pub const EXCLUDE_PROMPT: &str = "Enter characters to exclude (optional)";

/// Source of answers for the session prompts.
pub trait Prompter {
    /// Ask one question. `Ok(None)` means the user cancelled or input ended.
    fn ask(&mut self, question: &str, default: &str) -> io::Result<Option<String>>;

    /// Ask for a number. Defaults to [`Prompter::ask`].
    fn ask_number(&mut self, question: &str, default: usize) -> io::Result<Option<String>> {
        self.ask(question, &default.to_string())
    }

    /// Ask a question whose empty answer is meaningful on its own.
    /// Defaults to [`Prompter::ask`].
    fn ask_optional(&mut self, question: &str, default: &str) -> io::Result<Option<String>> {
        self.ask(question, default)
    }
}

/// Prompts on a raw-mode terminal with editable, prefilled answers.
pub struct TerminalPrompter;

impl Prompter for TerminalPrompter {
    fn ask(&mut self, question: &str, default: &str) -> io::Result<Option<String>> {
        Ok(get_editable_input(question, default))
    }

    fn ask_number(&mut self, question: &str, default: usize) -> io::Result<Option<String>> {
        Ok(get_numeric_input(question, default))
    }
}

/// Prompts over plain line-based streams. An empty line takes the default.
pub struct LinePrompter<R, W> {
    input: R,
    output: W,
}

impl<R: BufRead, W: Write> LinePrompter<R, W> {
    pub fn new(input: R, output: W) -> Self {
        Self { input, output }
    }

    /// Print the question and read one line. `None` at end of input.
    fn read_answer(&mut self, prompt: &str) -> io::Result<Option<String>> {
        write!(self.output, "{}: ", prompt)?;
        self.output.flush()?;

        let mut line = String::new();
        if self.input.read_line(&mut line)? == 0 {
            return Ok(None);
        }
        Ok(Some(line.trim_end_matches(['\r', '\n']).to_string()))
    }
}

impl<R: BufRead, W: Write> Prompter for LinePrompter<R, W> {
    fn ask(&mut self, question: &str, default: &str) -> io::Result<Option<String>> {
        let prompt = if default.is_empty() {
            question.to_string()
        } else {
            format!("{} [{}]", question, default)
        };

        let answer = self.read_answer(&prompt)?;
        Ok(answer.map(|line| {
            if line.trim().is_empty() {
                default.to_string()
            } else {
                line
            }
        }))
    }

    /// Lines can't be prefilled, so an empty line is taken as given.
    fn ask_optional(&mut self, question: &str, _default: &str) -> io::Result<Option<String>> {
        self.read_answer(question)
    }
}

/// How a session ended.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Outcome {
    Generated,
    Failed,
    Cancelled,
}

/// Turn the three raw answers into a request, or the message to report.
pub fn parse_answers(length: &str, specials: &str, exclude: &str) -> Result<Request, String> {
    let length = length.trim();
    let length = match length.parse::<i64>() {
        // Negative lengths fail the minimum-length check.
        Ok(n) => usize::try_from(n).unwrap_or(0),
        Err(_) => return Err(format!("Invalid length: {}", length)),
    };

    let specials = specials.trim().to_lowercase();
    let include_specials = specials == "yes";

    Ok(Request::new(length, include_specials, exclude.trim()))
}

/// Ask for length, specials and exclusions, then report one password on `out`.
pub fn run_session<P, W, R>(
    prompter: &mut P,
    out: &mut W,
    defaults: &Settings,
    rng: &mut R,
) -> io::Result<Outcome>
where
    P: Prompter + ?Sized,
    W: Write + ?Sized,
    R: Rng + ?Sized,
{
    let Some(length) = prompter.ask_number(LENGTH_PROMPT, defaults.pass_length)? else {
        return Ok(Outcome::Cancelled);
    };
    let specials_default = if defaults.include_specials { "yes" } else { "no" };
    let Some(specials) = prompter.ask(SPECIALS_PROMPT, specials_default)? else {
        return Ok(Outcome::Cancelled);
    };
    let Some(exclude) = prompter.ask_optional(EXCLUDE_PROMPT, &defaults.exclude_chars)? else {
        return Ok(Outcome::Cancelled);
    };

    let request = match parse_answers(&length, &specials, &exclude) {
        Ok(request) => request,
        Err(msg) => {
            writeln!(out, "Error: {}", msg)?;
            return Ok(Outcome::Failed);
        }
    };

    match pass::generate(rng, &request) {
        Ok(password) => {
            writeln!(out, "Generated Password: {}", password)?;
            Ok(Outcome::Generated)
        }
        Err(e) => {
            log::debug!("generation rejected: {}", e);
            writeln!(out, "Error: {}", e)?;
            Ok(Outcome::Failed)
        }
    }
}

#[cfg(test)]
mod tests {
    use std::io::Cursor;

    use rand::SeedableRng;
    use rand::rngs::StdRng;

    use super::*;

    fn session(input: &str, defaults: &Settings) -> (Outcome, String, String) {
        let mut prompts = Vec::new();
        let mut out = Vec::new();
        let mut rng = StdRng::seed_from_u64(21);
        let outcome = {
            let mut prompter = LinePrompter::new(Cursor::new(input.as_bytes()), &mut prompts);
            run_session(&mut prompter, &mut out, defaults, &mut rng).unwrap()
        };
        (
            outcome,
            String::from_utf8(prompts).unwrap(),
            String::from_utf8(out).unwrap(),
        )
    }

    fn generated(out: &str) -> &str {
        out.trim_end()
            .strip_prefix("Generated Password: ")
            .expect("no password line")
    }

    #[test]
    fn prints_generated_password() {
        let (outcome, prompts, out) = session("16\nyes\n\n", &Settings::default());
        assert_eq!(outcome, Outcome::Generated);
        assert!(prompts.contains(LENGTH_PROMPT));
        assert!(prompts.contains(SPECIALS_PROMPT));
        assert!(prompts.contains(EXCLUDE_PROMPT));

        let password = generated(&out);
        assert_eq!(password.chars().count(), 16);
        assert!(password.chars().any(|c| c.is_ascii_punctuation()));
    }

    #[test]
    fn honours_no_and_exclusions() {
        let (outcome, _, out) = session("30\nNO\nabcXYZ123\n", &Settings::default());
        assert_eq!(outcome, Outcome::Generated);

        let password = generated(&out);
        assert_eq!(password.chars().count(), 30);
        assert!(password.chars().all(|c| c.is_ascii_alphanumeric()));
        assert!(password.chars().all(|c| !"abcXYZ123".contains(c)));
    }

    #[test]
    fn short_length_reports_error() {
        let (outcome, _, out) = session("3\nyes\n\n", &Settings::default());
        assert_eq!(outcome, Outcome::Failed);
        assert_eq!(
            out,
            "Error: Password length must be at least 4 to include all character types.\n"
        );
    }

    #[test]
    fn negative_length_reports_length_error() {
        let (outcome, _, out) = session("-8\nyes\n\n", &Settings::default());
        assert_eq!(outcome, Outcome::Failed);
        assert!(out.starts_with("Error: Password length must be at least 4"));
    }

    #[test]
    fn non_numeric_length_reports_error() {
        let (outcome, _, out) = session("twelve\nyes\n\n", &Settings::default());
        assert_eq!(outcome, Outcome::Failed);
        assert_eq!(out, "Error: Invalid length: twelve\n");
    }

    #[test]
    fn excluded_class_reports_empty_pool() {
        let input = "10\nyes\nABCDEFGHIJKLMNOPQRSTUVWXYZ\n";
        let (outcome, _, out) = session(input, &Settings::default());
        assert_eq!(outcome, Outcome::Failed);
        assert_eq!(
            out,
            "Error: No uppercase characters remain after excluding specified characters.\n"
        );
    }

    #[test]
    fn empty_answers_take_saved_defaults() {
        let defaults = Settings {
            pass_length: 9,
            include_specials: false,
            ..Default::default()
        };
        let (outcome, prompts, out) = session("\n\n\n", &defaults);
        assert_eq!(outcome, Outcome::Generated);
        assert!(prompts.contains("[9]"));
        assert!(prompts.contains("[no]"));

        let password = generated(&out);
        assert_eq!(password.chars().count(), 9);
        assert!(password.chars().all(|c| c.is_ascii_alphanumeric()));
    }

    #[test]
    fn empty_exclusion_overrides_saved_exclusion() {
        let defaults = Settings {
            exclude_chars: "ABCDEFGHIJKLMNOPQRSTUVWXYZ".to_string(),
            ..Default::default()
        };
        let (outcome, prompts, out) = session("12\nyes\n\n", &defaults);
        assert_eq!(outcome, Outcome::Generated);
        assert!(!prompts.contains("[ABC"));

        let password = generated(&out);
        assert_eq!(password.chars().count(), 12);
        assert!(password.chars().any(|c| c.is_ascii_uppercase()));
    }

    #[test]
    fn typed_exclusion_is_used() {
        let (outcome, _, out) = session("12\nno\n0O1l\n", &Settings::default());
        assert_eq!(outcome, Outcome::Generated);
        assert!(generated(&out).chars().all(|c| !"0O1l".contains(c)));
    }

    #[test]
    fn huge_length_reports_error() {
        let (outcome, _, out) = session("9223372036854775807\nyes\n\n", &Settings::default());
        assert_eq!(outcome, Outcome::Failed);
        assert_eq!(out, "Error: Password length must be at most 4096 characters.\n");

        let (outcome, _, out) = session("4097\nno\n\n", &Settings::default());
        assert_eq!(outcome, Outcome::Failed);
        assert!(out.starts_with("Error: "));
    }

    #[test]
    fn length_beyond_integer_range_is_invalid() {
        let (outcome, _, out) = session("99999999999999999999999\nyes\n\n", &Settings::default());
        assert_eq!(outcome, Outcome::Failed);
        assert_eq!(out, "Error: Invalid length: 99999999999999999999999\n");
    }

    #[test]
    fn end_of_input_cancels() {
        let (outcome, _, out) = session("12\n", &Settings::default());
        assert_eq!(outcome, Outcome::Cancelled);
        assert!(out.is_empty());
    }

    #[test]
    fn answers_are_trimmed() {
        let request = parse_answers(" 8 ", " YES ", "  xy  ").unwrap();
        assert_eq!(request.length, 8);
        assert!(request.include_specials);
        assert_eq!(request.exclude.len(), 2);
    }

    #[test]
    fn only_yes_enables_specials() {
        for answer in ["yes", "Yes", " YES "] {
            assert!(parse_answers("8", answer, "").unwrap().include_specials);
        }
        for answer in ["y", "no", "", "yep", "true"] {
            assert!(!parse_answers("8", answer, "").unwrap().include_specials);
        }
    }
}
