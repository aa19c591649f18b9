//! REPL for canto-repl
use anyhow::Result;
use canto::{EnvRef, Evaluator};
use std::path::PathBuf;

use crate::editor::{self, Editor};
use rustyline::error::ReadlineError;

/// Entrypoint for running REPL.
/// Returns Err if REPL terminated with error
pub(crate) fn run(evaluator: &mut Evaluator, env: &EnvRef) -> Result<()> {
    let mut rl = editor::editor()?;
    let history = history_file();

    load_history(&mut rl, &history);

    loop {
        let line = match rl.readline("canto> ") {
            Ok(line) => {
                let _ = rl.add_history_entry(line.as_str());
                line
            }
            Err(ReadlineError::Interrupted) | Err(ReadlineError::Eof) => break,
            Err(err) => {
                println!("Error: {:?}", err);
                break;
            }
        };
        if line.trim().is_empty() {
            continue;
        }
        let expr = match canto::parse(&line) {
            Ok(expr) => expr,
            Err(e) => {
                eprintln!("{}", e);
                continue;
            }
        };
        // each top level expression gets a fresh budget
        evaluator.reset();
        match evaluator.eval(&expr, env) {
            Ok(value) => println!("{}", value),
            Err(e) => eprintln!("{}", e),
        }
    }

    save_history(&mut rl, &history);

    Ok(())
}

/// Path to file to use for history
fn history_file() -> Option<PathBuf> {
    let dir = dirs::data_local_dir()
        .or_else(dirs::data_dir)
        .or_else(dirs::home_dir)?;
    Some(dir.as_path().join(".canto_history"))
}

fn load_history(rl: &mut Editor, history: &Option<PathBuf>) {
    if let Some(history) = history {
        if let Err(e) = rl.load_history(&history) {
            eprintln!("Failed to load {} - {}", history.to_string_lossy(), e);
        }
    }
}

fn save_history(rl: &mut Editor, history: &Option<PathBuf>) {
    if let Some(history) = history {
        if let Err(e) = rl.save_history(&history) {
            eprintln!("Failed to save {} - {}", history.to_string_lossy(), e);
        }
    }
}
