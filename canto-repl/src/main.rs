use anyhow::Result;
use canto::{Env, EnvRef, Evaluator};
use clap::{arg, command};
use std::cell::RefCell;
use std::rc::Rc;
use tracing::debug;

mod editor;
mod repl;

/// Evaluate a single expression and print the result
fn run_cmd(evaluator: &mut Evaluator, env: &EnvRef, cmd: &str) -> Result<()> {
    let expr = canto::parse(cmd)?;
    let value = evaluator.eval(&expr, env)?;
    println!("{}", value);
    Ok(())
}

/// The clap CLI interface
fn cli() -> clap::Command {
    command!().arg(
        arg!(command: -c --command <COMMAND> "If present, COMMAND is evaluated and program exits"),
    )
}

fn main() -> Result<()> {
    tracing_subscriber::fmt::init();
    let args = cli().get_matches();

    let env: EnvRef = Rc::new(RefCell::new(Env::standard()));
    let mut evaluator = Evaluator::new();
    debug!("standard environment ready");

    match args.get_one::<String>("command") {
        Some(cmd) => run_cmd(&mut evaluator, &env, cmd),
        None => repl::run(&mut evaluator, &env),
    }
}
