use std::fs;
use std::io::{self, Read, Write};

use clap::Parser;
use color_eyre::eyre::{Result, WrapErr};

use nestea::{
    infrastructure::{cli::Cli, config::Config},
    replay::{replay, Script},
    utils::{initialize_logging, initialize_panic_handler},
};

fn read_script(cli: &Cli) -> Result<Script> {
    let source = match &cli.script {
        Some(path) => fs::read_to_string(path)
            .wrap_err_with(|| format!("Failed to read script {}", path.display()))?,
        None => {
            let mut source = String::new();
            io::stdin()
                .read_to_string(&mut source)
                .wrap_err("Failed to read script from stdin")?;
            source
        }
    };
    Script::parse(&source)
}

fn run() -> Result<()> {
    initialize_logging()?;

    initialize_panic_handler()?;

    let args = <Cli as Parser>::parse();

    // File-based configuration, then command line overrides
    let config = Config::new()?.merge_cli(&args)?;
    tracing::info!(?config, "loaded configuration");

    let script = read_script(&args)?;
    let outcome = replay(config.dashboard(), &script);

    let mut stdout = io::stdout().lock();
    for report in &outcome.reports {
        if args.pretty {
            serde_json::to_writer_pretty(&mut stdout, report)?;
        } else {
            serde_json::to_writer(&mut stdout, report)?;
        }
        writeln!(stdout)?;
    }
    stdout.flush()?;

    Ok(())
}

fn main() -> Result<()> {
    if let Err(e) = run() {
        eprintln!("{} error: Something went wrong", env!("CARGO_PKG_NAME"));
        Err(e)
    } else {
        Ok(())
    }
}
