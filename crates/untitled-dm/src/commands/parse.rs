//! Argument tokenizing and `-e` record parsing.
//!
//! Extra commands arrive on the command line as a single string of the form
//! `NAME=PROGRAM ARG...`. Arguments are split on whitespace unless they are
//! wrapped in double quotes.

use thiserror::Error;

use super::CommandRecord;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ParseError {
    #[error("unterminated quote in arguments: {raw}")]
    MalformedInput { raw: String },
    #[error("expected NAME=PROGRAM ARG..., got: {raw}")]
    MissingSeparator { raw: String },
}

/// Split an argument tail into tokens.
///
/// Quoted segments are taken verbatim (without the quotes) and may be empty.
/// Whitespace between tokens never produces a token.
pub fn split_args(input: &str) -> Result<Vec<String>, ParseError> {
    if input.matches('"').count() % 2 != 0 {
        return Err(ParseError::MalformedInput {
            raw: input.to_string(),
        });
    }

    let mut tokens = Vec::new();
    let mut chars = input.chars().peekable();
    while let Some(&ch) = chars.peek() {
        if ch.is_whitespace() {
            chars.next();
            continue;
        }
        if ch == '"' {
            chars.next();
            let mut token = String::new();
            for inner in chars.by_ref() {
                if inner == '"' {
                    break;
                }
                token.push(inner);
            }
            tokens.push(token);
            continue;
        }
        let mut token = String::new();
        while let Some(&inner) = chars.peek() {
            if inner.is_whitespace() || inner == '"' {
                break;
            }
            token.push(inner);
            chars.next();
        }
        tokens.push(token);
    }
    Ok(tokens)
}

/// Parse one `-e` value into a command record.
pub fn parse_extra_command(raw: &str) -> Result<CommandRecord, ParseError> {
    let Some((name, rest)) = raw.split_once('=') else {
        return Err(ParseError::MissingSeparator {
            raw: raw.to_string(),
        });
    };
    let rest = rest.trim_start();
    let (program, tail) = rest.split_once(' ').unwrap_or((rest, ""));
    let args = split_args(tail)?;

    Ok(CommandRecord {
        name: name.to_string(),
        program: program.to_string(),
        args,
    })
}
