//! Interactive setup questions asked before a `play` match when no names are
//! given on the command line.

use std::io::{self, BufRead, Write};

use crate::config::{MAX_PLAYERS, MIN_PLAYERS, validate_name, validate_player_count};

fn ask<R: BufRead, W: Write>(input: &mut R, output: &mut W, question: &str) -> io::Result<String> {
    write!(output, "{question}")?;
    output.flush()?;
    let mut line = String::new();
    if input.read_line(&mut line)? == 0 {
        return Err(io::Error::new(
            io::ErrorKind::UnexpectedEof,
            "input closed during setup",
        ));
    }
    Ok(line)
}

/// Asks for a player count until one in range is entered.
pub fn prompt_player_count<R: BufRead, W: Write>(input: &mut R, output: &mut W) -> io::Result<usize> {
    let question = format!("Choose number of players ({MIN_PLAYERS}-{MAX_PLAYERS}): ");
    loop {
        let line = ask(input, output, &question)?;
        match line.trim().parse::<usize>() {
            Ok(count) => match validate_player_count(count) {
                Ok(count) => return Ok(count),
                Err(_) => writeln!(
                    output,
                    "Invalid number of players. Please enter a number between {MIN_PLAYERS} and {MAX_PLAYERS}."
                )?,
            },
            Err(_) => writeln!(output, "Invalid input. Please enter a valid integer.")?,
        }
    }
}

/// Asks for `count` names, repeating each question until the answer is usable.
pub fn prompt_names<R: BufRead, W: Write>(
    input: &mut R,
    output: &mut W,
    count: usize,
) -> io::Result<Vec<String>> {
    let mut names = Vec::with_capacity(count);
    for idx in 1..=count {
        let question = format!("Enter name for Player {idx}: ");
        loop {
            let line = ask(input, output, &question)?;
            match validate_name(&line) {
                Ok(name) => {
                    names.push(name);
                    break;
                }
                Err(err) => writeln!(output, "Please enter a valid name ({err}).")?,
            }
        }
    }
    Ok(names)
}
