use std::{fs::read_to_string, path::PathBuf, process::exit};

use clap::{Parser, Subcommand};
use tyl_checker::{parse_type, type_of_source};
use tyl_error::Error;

#[derive(Parser)]
#[command(version, about = "Type checker for fully annotated programs")]
struct Cli {
    /// Logs every checked definition (use RUST_LOG for finer control)
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Type checks a file and prints the type of its last expression
    Check { file: PathBuf },

    /// Type checks a program given as an argument
    Expr { code: String },

    /// Parses a type expression and prints it in normal form
    ParseType { text: String },
}

fn init_logger(verbose: bool) {
    let default = if verbose { "debug" } else { "warn" };
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(default)).init();
}

fn report(code: &str, file_name: &str, result: Result<String, Error>) {
    match result {
        Ok(typ) => println!("{typ}"),
        Err(err) => {
            eprintln!("{}", err.with_code(code, file_name));
            exit(1)
        }
    }
}

fn main() {
    let cli = Cli::parse();
    init_logger(cli.verbose);

    match cli.command {
        Command::Check { file } => {
            let code = read_to_string(&file).unwrap_or_else(|err| {
                eprintln!("cannot read '{}': {err}", file.display());
                exit(1)
            });

            log::debug!("checking '{}'", file.display());
            report(&code, &file.display().to_string(), type_of_source(&code));
        }

        Command::Expr { code } => report(&code, "<argument>", type_of_source(&code)),

        Command::ParseType { text } => {
            let result = parse_type(&text).map(|typ| typ.to_string());
            report(&text, "<argument>", result);
        }
    }
}
