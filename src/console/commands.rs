//! Command table and handlers

use core::fmt::Write;

use super::hex;
use super::parser::Args;
use super::ConsoleError;
use crate::config::{HEX_DIGITS, WORD_SIZE};
use crate::hal::WordBus;

/// Everything a handler may touch while it runs.
pub struct CommandContext<'c> {
    /// Console output.
    pub out: &'c mut dyn Write,
    /// Memory inspected and patched by `mrw`/`mww`.
    pub memory: &'c mut dyn WordBus,
}

/// Handler entry point. Errors may borrow from the arguments.
pub type Handler = for<'a> fn(&Args<'a>, &mut CommandContext<'_>) -> Result<(), ConsoleError<'a>>;

/// Command descriptor
pub struct CommandDescriptor {
    pub name: &'static str,
    pub handler: Handler,
}

/// All available commands
pub static COMMANDS: &[CommandDescriptor] = &[
    CommandDescriptor { name: "help", handler: cmd_help },
    CommandDescriptor { name: "mrw", handler: cmd_mrw },
    CommandDescriptor { name: "mww", handler: cmd_mww },
];

const MRW_USAGE: &str = "\
Usage: mrw address
Examples:
    mrw 0x00000000
    mrw 0x8
    mrw 00000
    mrw c
    mrw 00201000
    mrw 201000
";

const MWW_USAGE: &str = "\
Usage: mww address value
Examples:
    mww 0x00200000 0
    mww 0x100008 1234
    mww 100000 0x008
    mww 20100c 0x1
    mww 00201000 0
";

/// Look up a command by exact, case-sensitive name.
pub fn find(name: &str) -> Option<&'static CommandDescriptor> {
    COMMANDS.iter().find(|c| c.name == name)
}

/// Execute a tokenized line
pub fn execute<'a>(args: &Args<'a>, ctx: &mut CommandContext<'_>) -> Result<(), ConsoleError<'a>> {
    let name = args.command().ok_or(ConsoleError::EmptyLine)?;

    let Some(command) = find(name) else {
        log::warn!("unknown command {:?}", name);
        return Err(ConsoleError::UnknownCommand(name));
    };

    log::debug!("dispatch {} argc={}", name, args.argc());
    (command.handler)(args, ctx)
}

/// Get all command names
pub fn command_names() -> impl Iterator<Item = &'static str> {
    COMMANDS.iter().map(|c| c.name)
}

// --- Command Implementations ---

fn cmd_help<'a>(_args: &Args<'a>, ctx: &mut CommandContext<'_>) -> Result<(), ConsoleError<'a>> {
    let _ = writeln!(ctx.out, "Commands available:");
    for name in command_names() {
        let _ = writeln!(ctx.out, " - {}", name);
    }
    Ok(())
}

fn cmd_mrw<'a>(args: &Args<'a>, ctx: &mut CommandContext<'_>) -> Result<(), ConsoleError<'a>> {
    let addr = args.get(1).ok_or(ConsoleError::TooFewArguments { usage: MRW_USAGE })?;
    let addr = parse_address(addr)?;

    print_word(ctx, addr);
    Ok(())
}

fn cmd_mww<'a>(args: &Args<'a>, ctx: &mut CommandContext<'_>) -> Result<(), ConsoleError<'a>> {
    let (Some(addr), Some(value)) = (args.get(1), args.get(2)) else {
        return Err(ConsoleError::TooFewArguments { usage: MWW_USAGE });
    };
    let addr = parse_address(addr)?;

    // Show what is about to be overwritten.
    print_word(ctx, addr);

    let value = hex::parse(value)?;
    ctx.memory.write_word(addr, value);

    // Read back rather than echo, so a store that did not stick is visible.
    print_word(ctx, addr);
    Ok(())
}

fn parse_address<'a>(token: &str) -> Result<u32, ConsoleError<'a>> {
    let addr = hex::parse(token)?;
    if addr % WORD_SIZE != 0 {
        return Err(ConsoleError::Misaligned(addr));
    }
    Ok(addr)
}

fn print_word(ctx: &mut CommandContext<'_>, addr: u32) {
    let value = ctx.memory.read_word(addr);
    let _ = writeln!(
        ctx.out,
        "{}: {}",
        hex::format(addr, HEX_DIGITS),
        hex::format(value, HEX_DIGITS)
    );
}
