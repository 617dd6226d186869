use std::path::PathBuf;

use anyhow::Context;
use clap::Parser;
use tally::config::Config;
use tally::logging::init_tracing;
use tally::script;
use tally::shutdown::ShutdownHandle;
use tally::ui::counter::parse_triggers;
use tally::ui::runtime;

#[derive(Parser, Debug)]
#[command(name = "tally", version, about = "A counter in your terminal")]
struct Cli {
    /// Override the starting value of the counter
    #[arg(long, allow_negative_numbers = true)]
    initial: Option<i64>,

    /// Read configuration from PATH instead of the default location
    #[arg(long, value_name = "PATH")]
    config: Option<PathBuf>,

    /// Apply a comma-separated trigger sequence (e.g. up,up,down), print the result and exit
    #[arg(long, value_name = "TRIGGERS")]
    apply: Option<String>,

    /// Do not capture mouse clicks
    #[arg(long)]
    no_mouse: bool,
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    init_tracing();

    let mut config = match &cli.config {
        Some(path) => Config::load_from(path),
        None => Config::load(),
    }
    .context("Failed to load configuration")?;

    if let Some(initial) = cli.initial {
        config.counter.initial = initial;
    }
    if cli.no_mouse {
        config.ui.mouse = false;
    }

    if let Some(sequence) = &cli.apply {
        let triggers = match parse_triggers(sequence) {
            Ok(triggers) => triggers,
            Err(err) => {
                eprintln!("Error: {}", err);
                std::process::exit(2);
            }
        };
        println!("{}", script::apply(config.counter.initial, &triggers));
        return Ok(());
    }

    let shutdown = ShutdownHandle::new();
    shutdown
        .install_signal_handlers()
        .context("Failed to install signal handlers")?;
    let count = runtime::run(&config, shutdown).context("Terminal UI failed")?;
    // Terminal is restored by now, so this lands in the normal screen
    println!("{}", count);
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::Cli;
    use clap::Parser;

    #[test]
    fn parses_negative_initial() {
        let cli = Cli::try_parse_from(["tally", "--initial", "-3"]).unwrap();
        assert_eq!(cli.initial, Some(-3));
    }

    #[test]
    fn defaults_to_interactive() {
        let cli = Cli::try_parse_from(["tally"]).unwrap();
        assert!(cli.apply.is_none());
        assert!(cli.config.is_none());
        assert!(!cli.no_mouse);
    }
}
