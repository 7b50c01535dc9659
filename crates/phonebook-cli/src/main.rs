// phonebook-cli: interactive front-end for phonebook-core
// Argument parsing, menu loop, terminal output

mod cli;
mod output;
mod shell;

use cli::Cli;
use output::OutputHandler;
use phonebook_core::{CommandEvent, OutputSink, codec};
use shell::Shell;
use std::io;

/// Initialise `log` output on stderr. `RUST_LOG` wins over `--verbose`.
fn init_logging(verbose: bool) {
    let default_level = if verbose { "debug" } else { "warn" };
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(default_level))
        .format_timestamp(None)
        .init();
}

fn run(cli: &Cli) -> io::Result<()> {
    let cwd = std::env::current_dir()?;
    let config = cli.resolve_config(&cwd)?;
    log::debug!("config: {:?}", config);

    let output = OutputHandler::new(cli.verbose);

    let mut book = codec::load(&config.default_file);
    output.emit_event(CommandEvent::BookLoaded {
        path: config.default_file.clone(),
        count: book.len(),
    });

    let stdin = io::stdin();
    Shell::new(stdin.lock(), io::stdout(), &output).run(&mut book, &config)
}

fn main() -> io::Result<()> {
    let cli = cli::parse();
    init_logging(cli.verbose);
    run(&cli)
}
