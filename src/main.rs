use std::{fs, path::PathBuf, process::ExitCode};

use clap::Parser;

/// cixac is a small dynamically typed, C-family scripting language with a
/// tree-walking interpreter.
#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
struct Args {
    /// Execute inline code: specifies a string of code to be directly
    /// executed by the interpreter.
    #[arg(short, long)]
    eval: Option<String>,

    /// Path to a script file to run.
    file: Option<PathBuf>,
}

fn main() -> ExitCode {
    let args = Args::parse();

    match (args.eval, args.file) {
        (Some(code), _) => run_source(&code),
        (None, Some(path)) => {
            let source = match fs::read_to_string(&path) {
                Ok(source) => source,
                Err(_) => {
                    eprintln!(
                        "Failed to read the input file '{}'. Perhaps this file does not exist?",
                        path.display()
                    );
                    return ExitCode::FAILURE;
                },
            };
            run_source(&source)
        },
        (None, None) => {
            println!("Cixac {} — type \"quit()\" to exit the REPL", env!("CARGO_PKG_VERSION"));
            if let Err(error) = cixac::repl::start() {
                eprintln!("Error: {error}");
                return ExitCode::FAILURE;
            }
            ExitCode::SUCCESS
        },
    }
}

/// Runs a complete source text and prints the outcome.
///
/// Parser errors print tab-indented, one per line; a runtime error prints
/// as `Error: <message>`; otherwise the final value's inspect form is
/// printed unless the program produced no user-visible value.
fn run_source(source: &str) -> ExitCode {
    let (outcome, errors) = cixac::run(source);

    if !errors.is_empty() {
        for error in &errors {
            println!("\t{error}");
        }
        return ExitCode::SUCCESS;
    }

    match outcome {
        Ok(Some(value)) => println!("{value}"),
        Ok(None) => {},
        Err(error) => println!("Error: {error}"),
    }

    ExitCode::SUCCESS
}
