use std::io::{self, BufRead, Write};

use crate::{
    Res,
    cli::{help, search, top},
    info,
    management::TokenManager,
    utils, warning,
};

/// What the prompt loop does after a command.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Flow {
    Continue,
    Exit,
}

/// Reads commands from stdin until `exit`, `quit` or end of input.
pub fn shell(tokens: &mut TokenManager) -> Res<()> {
    info!("Type `help` to list the commands.");
    prompt_loop(tokens, io::stdin().lock(), io::stdout())
}

/// Runs the prompt loop over `input`, writing the prompt to `output`.
///
/// Command errors never end the loop: validation failures and failed
/// requests are printed and the next command is read. Failing to write the
/// prompt or to read a line is returned to the caller.
pub fn prompt_loop(
    tokens: &mut TokenManager,
    mut input: impl BufRead,
    mut output: impl Write,
) -> Res<()> {
    loop {
        write!(output, ">")?;
        output.flush()?;

        let mut line = String::new();
        if input.read_line(&mut line)? == 0 {
            return Ok(());
        }

        match execute(tokens, &line) {
            Ok(Flow::Continue) => {}
            Ok(Flow::Exit) => return Ok(()),
            Err(e) => warning!("{}", e),
        }
    }
}

/// Parses and runs a single command line.
pub fn execute(tokens: &mut TokenManager, line: &str) -> Res<Flow> {
    let parts = utils::split_tokens(line);
    let Some((verb, args)) = parts.split_first() else {
        warning!("Enter a valid command!");
        return Ok(Flow::Continue);
    };

    match verb.to_lowercase().as_str() {
        "top" => top(tokens, args)?,
        "search" => search(tokens, args)?,
        "help" => help(),
        "exit" | "quit" => return Ok(Flow::Exit),
        _ => warning!("Command is invalid!"),
    }
    Ok(Flow::Continue)
}
