//! Password generation and output.

pub mod charset;
mod generate;
pub mod output;

pub use generate::{MAX_LENGTH, MIN_LENGTH, Password, Request, generate, generate_batch};
