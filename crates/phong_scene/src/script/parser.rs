//! Line-based scene script parser.

use thiserror::Error;

use crate::command::{Command, CommandKind};

/// Errors that can occur during script parsing.
#[derive(Error, Debug, PartialEq)]
pub enum ParseError {
    #[error("Unknown command `{name}` at line {line}")]
    UnknownCommand { line: usize, name: String },

    #[error("`{command}` at line {line} takes {expected} parameters, found {found}")]
    WrongArity {
        line: usize,
        command: &'static str,
        expected: usize,
        found: usize,
    },

    #[error("Invalid number `{token}` at line {line}")]
    InvalidNumber { line: usize, token: String },
}

/// Result type for parsing operations.
pub type ParseResult<T> = Result<T, ParseError>;

/// Scene script parser.
pub struct ScriptParser<'a> {
    content: &'a str,
}

impl<'a> ScriptParser<'a> {
    /// Create a new parser from script contents.
    pub fn new(content: &'a str) -> Self {
        Self { content }
    }

    /// Parse every line and return the commands in file order.
    pub fn parse(&self) -> ParseResult<Vec<Command>> {
        let mut commands = Vec::new();

        for (index, line) in self.content.lines().enumerate() {
            if let Some(command) = Self::parse_line(index + 1, line)? {
                commands.push(command);
            }
        }

        log::debug!("Parsed {} scene commands", commands.len());
        Ok(commands)
    }

    /// Parse a single line. Blank and comment-only lines yield `None`.
    fn parse_line(line_num: usize, line: &str) -> ParseResult<Option<Command>> {
        let code = match line.find('#') {
            Some(start) => &line[..start],
            None => line,
        };

        let mut tokens = code
            .split(|c: char| c.is_whitespace() || c == ',')
            .filter(|token| !token.is_empty());

        let name = match tokens.next() {
            Some(name) => name,
            None => return Ok(None),
        };

        let kind = CommandKind::from_name(name).ok_or_else(|| ParseError::UnknownCommand {
            line: line_num,
            name: name.to_string(),
        })?;

        let values = tokens
            .map(|token| parse_number(line_num, token))
            .collect::<ParseResult<Vec<f32>>>()?;

        kind.build(&values)
            .map(Some)
            .ok_or(ParseError::WrongArity {
                line: line_num,
                command: kind.name(),
                expected: kind.arity(),
                found: values.len(),
            })
    }
}

fn parse_number(line: usize, token: &str) -> ParseResult<f32> {
    token.parse::<f32>().map_err(|_| ParseError::InvalidNumber {
        line,
        token: token.to_string(),
    })
}

/// Parse scene script content into a list of commands.
pub fn parse_script(content: &str) -> ParseResult<Vec<Command>> {
    ScriptParser::new(content).parse()
}
