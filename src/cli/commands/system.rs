use crate::cli::context::ShellContext;
use crate::utils::build_info;

use super::{CommandArgs, CommandDefinition, CommandResult};

pub(crate) fn definitions() -> Vec<CommandDefinition> {
    vec![
        CommandDefinition::new("version", "Show build metadata", "version", cmd_version),
        CommandDefinition::new(
            "help",
            "Show available commands",
            "help [command]",
            cmd_help,
        ),
    ]
}

fn cmd_version(_context: &ShellContext, args: &CommandArgs) -> CommandResult {
    let meta = build_info::current();
    if args.json {
        return Ok(serde_json::to_string_pretty(&meta)?);
    }
    let mut out = format!("Pantry Core {}\n", meta.version);
    out.push_str(&format!(
        "  Build hash   : {} ({})\n",
        meta.git_hash, meta.git_status
    ));
    out.push_str(&format!("  Built at     : {}\n", meta.timestamp));
    out.push_str(&format!("  Target       : {}\n", meta.target));
    out.push_str(&format!("  Profile      : {}\n", meta.profile));
    out.push_str(&format!("  Rustc        : {}\n", meta.rustc));
    Ok(out)
}

fn cmd_help(context: &ShellContext, args: &CommandArgs) -> CommandResult {
    if let Some(name) = args.positional.first() {
        let Some(command) = context.registry.get(&name.to_lowercase()) else {
            return Err(context.registry.unknown_command(name));
        };
        return Ok(format!(
            "{}\n  Description: {}\n  Usage: {}\n",
            command.name, command.description, command.usage
        ));
    }

    let mut out = context.style.header("Available commands");
    out.push('\n');
    for entry in context.registry.list() {
        out.push_str(&format!("  {:<12} {}\n", entry.name, entry.description));
    }
    out.push_str("Use `help <command>` for details. Dates accept dd/mm/yyyy or yyyy-mm-dd.\n");
    Ok(out)
}
