use rustyline::{error::ReadlineError, DefaultEditor, Result as RlResult};

use crate::{interpreter::environment::Environment, run_with_env};

const PROMPT: &str = "\u{1b}[31m»\u{1b}[0m ";
const CONTINUATION_PROMPT: &str = "... ";

/// Runs the interactive read-eval-print loop until the user exits.
///
/// One logical line is read per prompt; a line ending in `\` continues
/// onto the next prompt, and `quit()` exits. Declarations persist across
/// inputs. After each evaluation the result's inspect form is echoed
/// unless the statement produced no user-visible value; parser errors
/// print tab-indented, one per line, and runtime errors print as
/// `Error: <message>`. The loop survives both.
///
/// # Errors
/// Returns an error only when the line editor itself fails.
pub fn start() -> RlResult<()> {
    let mut editor = DefaultEditor::new()?;
    let env = Environment::new();
    let mut buffer = String::new();

    loop {
        let prompt = if buffer.is_empty() { PROMPT } else { CONTINUATION_PROMPT };

        let line = match editor.readline(prompt) {
            Ok(line) => line,
            Err(ReadlineError::Interrupted) => {
                buffer.clear();
                continue;
            },
            Err(ReadlineError::Eof) => break,
            Err(error) => {
                eprintln!("Error: {error}");
                break;
            },
        };

        if buffer.is_empty() && line.trim() == "quit()" {
            break;
        }

        if let Some(head) = line.strip_suffix('\\') {
            buffer.push_str(head);
            buffer.push('\n');
            continue;
        }

        buffer.push_str(&line);
        let source = std::mem::take(&mut buffer);
        let source = source.trim();

        if source.is_empty() {
            continue;
        }
        let _ = editor.add_history_entry(source);

        let (outcome, errors) = run_with_env(source, &env);

        if !errors.is_empty() {
            for error in &errors {
                println!("\t{error}");
            }
            continue;
        }

        match outcome {
            Ok(Some(value)) => println!("{value}"),
            Ok(None) => {},
            Err(error) => println!("Error: {error}"),
        }
    }

    Ok(())
}
