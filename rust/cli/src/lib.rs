//! # pokerview CLI Library
//!
//! Command-line front end for the pokerview table compositor: render table
//! pictures and community cards to files, inspect layouts, post a table
//! through the file outbox and check the local setup.
//!
//! ## Main Entry Point
//!
//! The primary entry point is the [`run`] function, which parses command-line arguments
//! and executes the appropriate subcommand.
//!
//! ```no_run
//! use std::io;
//! let args = vec!["pokerview", "render", "--table", "table.json", "--output", "table.jpeg"];
//! let code = pokerview_cli::run(args, &mut io::stdout(), &mut io::stderr());
//! assert_eq!(code, 0);
//! ```
//!
//! ## Available Subcommands
//!
//! - `render`: Render a table description to JPEG
//! - `desk`: Render community cards to PNG
//! - `layout`: Print seat and community card coordinates
//! - `post`: Render a table and deliver it through the outbox messenger
//! - `cfg`: Display current configuration settings
//! - `doctor`: Run environment diagnostics

use clap::Parser;
use std::io::Write;
pub mod cli;
mod commands;
pub mod config;
mod error;
pub mod exit_code;
pub mod io_utils;
pub mod table_file;
pub mod ui;

use cli::{COMMANDS, Commands, PokerviewCli};
use commands::{
    handle_cfg_command, handle_desk_command, handle_doctor_command, handle_layout_command,
    handle_post_command, handle_render_command,
};
use config::Overrides;

pub use error::CliError;

/// Parses `args` and runs the selected subcommand.
///
/// Returns [`exit_code::SUCCESS`] or [`exit_code::ERROR`]. Help and version
/// requests print to `out` and succeed; every failure prints
/// `Error: <message>` to `err`.
pub fn run<I, S>(args: I, out: &mut dyn Write, err: &mut dyn Write) -> i32
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    let argv: Vec<String> = args.into_iter().map(|s| s.as_ref().to_string()).collect();

    let cli = match PokerviewCli::try_parse_from(&argv) {
        Ok(cli) => cli,
        Err(e) => return report_usage_error(e, out, err),
    };

    let result = match cli.cmd {
        Commands::Render {
            table,
            output,
            layout,
            assets,
        } => handle_render_command(
            table,
            output,
            Overrides {
                assets_dir: assets,
                layout,
                ..Overrides::default()
            },
            out,
            err,
        ),
        Commands::Desk {
            cards,
            output,
            assets,
        } => handle_desk_command(
            &cards,
            output,
            Overrides {
                assets_dir: assets,
                ..Overrides::default()
            },
            out,
        ),
        Commands::Layout { layout } => handle_layout_command(layout, out),
        Commands::Post {
            chat,
            table,
            layout,
            assets,
            outbox,
        } => handle_post_command(
            chat,
            table,
            Overrides {
                assets_dir: assets,
                layout,
                outbox_dir: outbox,
            },
            out,
            err,
        ),
        // cfg and doctor print their own error lines
        Commands::Cfg => return finish(handle_cfg_command(out, err), None),
        Commands::Doctor => return finish(handle_doctor_command(out, err), None),
    };
    finish(result, Some(err))
}

fn finish(result: Result<(), CliError>, err: Option<&mut dyn Write>) -> i32 {
    match result {
        Ok(()) => exit_code::SUCCESS,
        Err(e) => {
            tracing::warn!(error = %e, "command failed");
            if let Some(err) = err {
                let _ = ui::write_error(err, &e.to_string());
            }
            exit_code::ERROR
        }
    }
}

fn report_usage_error(e: clap::Error, out: &mut dyn Write, err: &mut dyn Write) -> i32 {
    use clap::error::ErrorKind;

    // Help and version should print to stdout and exit 0
    if matches!(e.kind(), ErrorKind::DisplayHelp | ErrorKind::DisplayVersion) {
        return match write!(out, "{}", e) {
            Ok(()) => exit_code::SUCCESS,
            Err(_) => exit_code::ERROR,
        };
    }

    let _ = writeln!(err, "{}", e);
    let _ = writeln!(err);
    let _ = writeln!(err, "pokerview table compositor");
    let _ = writeln!(err, "Usage: pokerview <command> [options]\n");
    let _ = writeln!(err, "Commands:");
    for c in COMMANDS {
        let _ = writeln!(err, "  {}", c);
    }
    let _ = writeln!(err, "\nFor full help, run: pokerview --help");
    exit_code::ERROR
}
