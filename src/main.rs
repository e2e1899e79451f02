use std::path::PathBuf;
use std::process::ExitCode;

use clap::{Parser, Subcommand};
use datatable2::io::table_io;
use simplelog::{ColorChoice, Config, LevelFilter, TermLogger, TerminalMode};

/// Checks data table definitions before they are handed to the renderer.
#[derive(Parser)]
#[command(name = "datatable2", about = "Data table definition checker")]
struct Args {
    /// Log at debug level.
    #[arg(short, long)]
    verbose: bool,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Validate a table definition file.
    Check {
        #[arg(value_name = "FILE")]
        file: PathBuf,
    },
    /// Apply a sort event payload such as '{"i":1,"a":true}' to a table definition
    /// and print the resulting sort state.
    Sort {
        #[arg(value_name = "FILE")]
        file: PathBuf,
        #[arg(value_name = "PAYLOAD")]
        payload: String,
    },
}

fn main() -> ExitCode {
    let args = Args::parse();

    let level = if args.verbose {
        LevelFilter::Debug
    } else {
        LevelFilter::Warn
    };
    if let Err(err) = TermLogger::init(
        level,
        Config::default(),
        TerminalMode::Stderr,
        ColorChoice::Auto,
    ) {
        eprintln!("Warning: logging disabled: {err}");
    }

    match run(args.command) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            eprintln!("Error: {err}");
            ExitCode::FAILURE
        }
    }
}

fn run(command: Command) -> Result<(), Box<dyn std::error::Error>> {
    match command {
        Command::Check { file } => {
            let model = table_io::load_table(&file)?;
            model.validate()?;
            println!(
                "{}: ok ({} visible columns, {} visible rows)",
                file.display(),
                model.visible_columns().count(),
                model.visible_rows().count()
            );
        }
        Command::Sort { file, payload } => {
            let mut model = table_io::load_table(&file)?;
            let request = model.handle_sort_event(&payload)?;
            println!(
                "sort_column_index={} sort_ascending={}",
                request.column_index, request.ascending
            );
        }
    }
    Ok(())
}
