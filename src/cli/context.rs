use std::path::PathBuf;

use tracing::debug;

use crate::{
    config::{Config, ConfigManager},
    core::errors::CliError,
    domain::InventorySnapshot,
    storage::{JsonSnapshotStore, SnapshotSource},
};

use super::{
    commands::{all_definitions, CommandArgs, CommandRegistry, CommandResult},
    format::NumberFormat,
    style::UiStyle,
    views::View,
};

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum CliMode {
    OneShot,
    Script,
}

/// Everything a command needs: settings, output styling, and the command table.
pub struct ShellContext {
    pub mode: CliMode,
    pub config: Config,
    pub base_dir: PathBuf,
    pub format: NumberFormat,
    pub style: UiStyle,
    pub registry: CommandRegistry,
}

impl ShellContext {
    pub fn new(mode: CliMode) -> Result<Self, CliError> {
        let manager = ConfigManager::new()?;
        let config = manager.load()?;
        let style = UiStyle::detect(config.color_enabled);
        Ok(Self::with_config(
            mode,
            config,
            manager.base_dir().to_path_buf(),
            style,
        ))
    }

    pub fn with_config(mode: CliMode, config: Config, base_dir: PathBuf, style: UiStyle) -> Self {
        Self {
            mode,
            format: NumberFormat::from(&config),
            config,
            base_dir,
            style,
            registry: CommandRegistry::new(all_definitions()),
        }
    }

    pub fn view(&self) -> View<'_> {
        View {
            format: &self.format,
            style: &self.style,
        }
    }

    pub fn store(&self, args: &CommandArgs) -> JsonSnapshotStore {
        let data_dir = self
            .config
            .resolve_data_dir(args.data_dir.clone(), &self.base_dir);
        JsonSnapshotStore::new(data_dir)
    }

    pub fn load_snapshot(&self, args: &CommandArgs) -> Result<InventorySnapshot, CliError> {
        Ok(self.store(args).load_snapshot()?)
    }

    /// Runs one tokenized command line. The first token names the command.
    pub fn execute(&self, tokens: &[String], defaults: &CommandArgs) -> CommandResult {
        let Some((raw, rest)) = tokens.split_first() else {
            return Ok(String::new());
        };
        let name = raw.to_lowercase();
        let Some(command) = self.registry.get(&name) else {
            return Err(self.registry.unknown_command(raw));
        };
        let args = CommandArgs::parse(rest)?.with_defaults(defaults);
        debug!(command = command.name, ?args, "dispatching command");
        (command.handler)(self, &args)
    }
}
