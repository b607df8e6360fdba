use clap::Parser;

/// Generate passwords with at least one uppercase letter, lowercase letter,
/// digit and (optionally) special character.
///
/// Run without arguments for an interactive prompt.
#[derive(Debug, Default, Parser)]
#[command(name = "passgen", version, about)]
pub struct CliFlags {
    /// Characters per password (minimum 4)
    #[arg(short, long, value_name = "N")]
    pub length: Option<usize>,

    /// How many passwords to generate
    #[arg(short, long, value_name = "N")]
    pub number: Option<usize>,

    /// Leave special characters out of the password
    #[arg(long, conflicts_with = "special")]
    pub no_special: bool,

    /// Require special characters (overrides a saved default)
    #[arg(long)]
    pub special: bool,

    /// Characters that must never appear
    #[arg(short = 'x', long, value_name = "CHARS")]
    pub exclude: Option<String>,

    /// Seed for reproducible output
    #[arg(long, value_name = "U64")]
    pub seed: Option<u64>,

    /// Copy to the clipboard instead of printing
    #[arg(short = 'b', long = "board")]
    pub clipboard: bool,

    /// Append to a file (`.` or a path ending in `/` uses passgen.txt)
    #[arg(short, long, value_name = "PATH", num_args = 0..=1, default_missing_value = ".")]
    pub output: Option<String>,

    /// Print an entropy estimate to stderr
    #[arg(short, long)]
    pub entropy: bool,

    /// Save length, special and exclude options as defaults
    #[arg(short, long)]
    pub save: bool,

    /// Suppress warnings and confirmations
    #[arg(short, long)]
    pub quiet: bool,
}

impl CliFlags {
    /// True when any option changes what gets generated.
    pub fn has_generation_args(&self) -> bool {
        self.length.is_some() || self.no_special || self.special || self.exclude.is_some()
    }
}
