//! indra-tui - Terminal browser for the Indra agent-based modeling catalog

use anyhow::Result;
use clap::{CommandFactory, Parser, Subcommand};
use indra_tui::App;
use indra_tui::catalog::Loader;
use indra_tui::config::Config;
use indra_tui::handoff::HandoffStore;

/// Terminal browser for the Indra agent-based modeling catalog
#[derive(Parser)]
#[command(name = "indra-tui")]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Override the API server root URL
    #[arg(long)]
    api_url: Option<String>,

    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Clear the selection handoff store
    Reset {
        /// Skip confirmation
        #[arg(long)]
        force: bool,
    },
}

fn main() -> Result<()> {
    // Log to a file in the temp dir - tail with: tail -f /tmp/indra-tui.log
    // Set DEBUG=0-3 to control verbosity (0=off, 1=warn, 2=info, 3=debug)
    let debug_level = std::env::var("DEBUG")
        .ok()
        .and_then(|v| v.parse::<u8>().ok())
        .unwrap_or(0);

    if debug_level > 0 {
        let level = match debug_level {
            1 => tracing::Level::WARN,
            2 => tracing::Level::INFO,
            _ => tracing::Level::DEBUG,
        };

        let file_appender = tracing_appender::rolling::never(std::env::temp_dir(), "indra-tui.log");
        tracing_subscriber::fmt()
            .with_writer(file_appender)
            .with_max_level(level)
            .with_ansi(false)
            .init();
    }

    let cli = match Cli::try_parse() {
        Ok(cli) => cli,
        Err(e) => {
            // Let --help and --version exit normally
            if e.kind() == clap::error::ErrorKind::DisplayHelp
                || e.kind() == clap::error::ErrorKind::DisplayVersion
            {
                e.exit();
            }
            // For actual errors, show error + help
            eprintln!("error: {}\n", e.kind());
            Cli::command().print_help()?;
            std::process::exit(1);
        }
    };

    match cli.command {
        Some(Commands::Reset { force }) => cmd_reset(force),
        None => {
            let mut config = Config::load().unwrap_or_else(|e| {
                eprintln!("Warning: Failed to load config, using defaults: {e}");
                Config::default()
            });
            if let Some(api_url) = cli.api_url {
                config.api_url = api_url;
            }

            let handoff = HandoffStore::open();
            let mut loader = Loader::new(config.api_url.clone());
            let mut app = App::new(config, handoff);

            if let Some(route) = indra_tui::tui::run(&mut app, &mut loader)? {
                match app.handoff().selection() {
                    Some(selection) => println!(
                        "Selected {} ({}); detail view: {route}",
                        selection.name, selection.source
                    ),
                    None => println!("Detail view: {route}"),
                }
            }

            Ok(())
        }
    }
}

fn cmd_reset(force: bool) -> Result<()> {
    use std::io::{self, Write};

    let mut handoff = HandoffStore::open();

    if handoff.is_empty() {
        println!("Handoff store is already empty.");
        return Ok(());
    }

    if let Some(selection) = handoff.selection() {
        println!(
            "Current selection: {} ({}) [{}]\n",
            selection.name, selection.source, selection.id
        );
    }

    if !force {
        print!("Clear the handoff store? [y/N] ");
        io::stdout().flush()?;

        let mut input = String::new();
        io::stdin().read_line(&mut input)?;

        if !input.trim().eq_ignore_ascii_case("y") {
            println!("Aborted.");
            return Ok(());
        }
    }

    handoff.clear()?;
    println!("Handoff store cleared.");
    Ok(())
}
