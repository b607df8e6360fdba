use clap::Parser;

mod cli;
mod entropy;
mod error;
mod exits;
mod pass;
mod settings;
mod terminal;
mod tui;

use cli::CliFlags;

fn init_logging() {
    let env = env_logger::Env::default().filter_or("PASSGEN_LOG", "warn");
    env_logger::Builder::from_env(env)
        .format_timestamp(None)
        .init();
}

fn main() {
    init_logging();
    exits::install_handlers();
    exits::disable_core_dumps();

    if std::env::args_os().len() <= 1 {
        if let Err(e) = tui::run() {
            cli::prompts::error(&e.to_string());
            std::process::exit(1);
        }
        return;
    }

    let flags = CliFlags::parse();
    std::process::exit(cli::run(flags));
}
