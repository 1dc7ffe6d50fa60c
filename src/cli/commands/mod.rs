use std::{collections::HashMap, path::PathBuf};

use chrono::NaiveDate;
use strsim::levenshtein;

pub mod reports;
pub mod system;

use crate::{
    cli::context::ShellContext,
    core::errors::CliError,
    domain::common::parse_record_date,
};

pub type CommandResult = Result<String, CliError>;

pub type CommandHandler = fn(&ShellContext, &CommandArgs) -> CommandResult;

const MAX_SUGGESTION_DISTANCE: usize = 3;

pub(crate) fn all_definitions() -> Vec<CommandDefinition> {
    let mut commands = Vec::new();
    commands.extend(reports::definitions());
    commands.extend(system::definitions());
    commands
}

#[derive(Clone)]
pub struct CommandDefinition {
    pub name: &'static str,
    pub description: &'static str,
    pub usage: &'static str,
    pub handler: CommandHandler,
}

impl CommandDefinition {
    pub const fn new(
        name: &'static str,
        description: &'static str,
        usage: &'static str,
        handler: CommandHandler,
    ) -> Self {
        Self {
            name,
            description,
            usage,
            handler,
        }
    }
}

pub struct CommandRegistry {
    commands: HashMap<&'static str, CommandDefinition>,
    order: Vec<&'static str>,
}

impl CommandRegistry {
    pub fn new(definitions: Vec<CommandDefinition>) -> Self {
        let mut commands = HashMap::new();
        let mut order = Vec::new();
        for definition in definitions {
            order.push(definition.name);
            commands.insert(definition.name, definition);
        }
        Self { commands, order }
    }

    pub fn get(&self, name: &str) -> Option<&CommandDefinition> {
        self.commands.get(name)
    }

    pub fn names(&self) -> impl Iterator<Item = &'static str> + '_ {
        self.order.iter().copied()
    }

    pub fn list(&self) -> impl Iterator<Item = &CommandDefinition> {
        self.order.iter().filter_map(|name| self.commands.get(name))
    }

    /// Closest registered command name, if any is near enough to be a typo.
    pub fn suggest(&self, input: &str) -> Option<&'static str> {
        let input = input.to_lowercase();
        let mut suggestions: Vec<_> = self
            .names()
            .map(|name| (levenshtein(name, &input), name))
            .collect();
        suggestions.sort_by_key(|(distance, _)| *distance);
        suggestions
            .first()
            .filter(|(distance, _)| *distance <= MAX_SUGGESTION_DISTANCE)
            .map(|(_, name)| *name)
    }

    pub fn unknown_command(&self, input: &str) -> CliError {
        match self.suggest(input) {
            Some(best) => CliError::Input(format!(
                "unknown command `{input}`. Did you mean `{best}`?"
            )),
            None => CliError::Input(format!(
                "unknown command `{input}`. Run `help` to list commands"
            )),
        }
    }
}

/// Options shared by every command.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct CommandArgs {
    pub data_dir: Option<PathBuf>,
    pub json: bool,
    pub from: Option<NaiveDate>,
    pub to: Option<NaiveDate>,
    pub positional: Vec<String>,
}

impl CommandArgs {
    pub fn parse(tokens: &[String]) -> Result<Self, CliError> {
        let mut args = Self::default();
        let mut iter = tokens.iter();
        while let Some(token) = iter.next() {
            match token.as_str() {
                "--json" => args.json = true,
                "--data-dir" => args.data_dir = Some(PathBuf::from(value_for(token, iter.next())?)),
                "--from" => args.from = Some(parse_record_date(value_for(token, iter.next())?)?),
                "--to" => args.to = Some(parse_record_date(value_for(token, iter.next())?)?),
                flag if flag.starts_with("--") => {
                    return Err(CliError::Input(format!("unknown option `{flag}`")));
                }
                _ => args.positional.push(token.clone()),
            }
        }
        Ok(args)
    }

    /// Fills options not given here from `defaults`.
    pub fn with_defaults(mut self, defaults: &CommandArgs) -> Self {
        if self.data_dir.is_none() {
            self.data_dir = defaults.data_dir.clone();
        }
        self.json |= defaults.json;
        self.from = self.from.or(defaults.from);
        self.to = self.to.or(defaults.to);
        self
    }
}

fn value_for<'a>(flag: &str, value: Option<&'a String>) -> Result<&'a str, CliError> {
    value
        .map(String::as_str)
        .ok_or_else(|| CliError::Input(format!("`{flag}` expects a value")))
}
