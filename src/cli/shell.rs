use std::{
    env,
    io::{self, BufRead},
};

use shell_words::split;

use crate::cli::{
    commands::CommandArgs,
    context::{CliMode, ShellContext},
    output,
};
use crate::core::errors::CliError;

pub const SCRIPT_ENV: &str = "PANTRY_CORE_CLI_SCRIPT";

pub fn run_cli() -> Result<(), CliError> {
    let mode = if env::var_os(SCRIPT_ENV).is_some() {
        CliMode::Script
    } else {
        CliMode::OneShot
    };
    let args: Vec<String> = env::args().skip(1).collect();

    let context = ShellContext::new(mode)?;
    output::set_color(context.style.use_color);

    match mode {
        CliMode::OneShot => run_once(&context, &args),
        CliMode::Script => run_script(&context, &args),
    }
}

fn run_once(context: &ShellContext, args: &[String]) -> Result<(), CliError> {
    let tokens = if args.is_empty() {
        vec!["help".to_string()]
    } else {
        args.to_vec()
    };
    let out = context.execute(&tokens, &CommandArgs::default())?;
    print!("{out}");
    Ok(())
}

/// Reads one command per stdin line. Options on the process command line act
/// as defaults for every line; a failing line is reported and skipped.
fn run_script(context: &ShellContext, args: &[String]) -> Result<(), CliError> {
    let defaults = CommandArgs::parse(args)?;
    let stdin = io::stdin();
    for line in stdin.lock().lines() {
        let line = line?;
        let tokens = match split(&line) {
            Ok(tokens) => tokens,
            Err(err) => {
                output::warning(format!("could not parse `{}`: {err}", line.trim()));
                continue;
            }
        };
        match tokens.first().map(|token| token.to_lowercase()) {
            None => continue,
            Some(command) if command == "exit" || command == "quit" => break,
            Some(command) if command.starts_with('#') => continue,
            Some(_) => {}
        }
        match context.execute(&tokens, &defaults) {
            Ok(out) => print!("{out}"),
            Err(err) => output::error(err),
        }
    }
    Ok(())
}
