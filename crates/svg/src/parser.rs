//! A parser for the SVG path data syntax.
//!
//! Numbers may be separated by white spaces, commas or nothing at all when the
//! result is not ambiguous: `M10-20` reads as `M 10 -20` and `l.5.5` as `l 0.5 0.5`.
//! The two flags of arcs are single digits, so `a5 5 0 1110 10` reads as
//! `a 5 5 0 1 1 10 10`.
//!
//! Values beyond the arity of a command repeat the command. Values following a move-to
//! command are line-to commands.

use crate::path::commands::MAX_VALUES;
use crate::path::{Command, CommandKind, ConversionOptions, Path, PathError};

use thiserror::Error;

/// A syntax error.
#[derive(Error, Clone, Debug, PartialEq)]
pub enum Diagnostic {
    #[error("The path data is empty.")]
    Empty,
    #[error("Line {line} Column {column}: Expected move-to command, got {command:?}.")]
    MissingMoveTo {
        command: char,
        line: i32,
        column: i32,
    },
    #[error("Line {line} Column {column}: Command {index} ({command:?}) expects {expected} values, got {actual}.")]
    Arity {
        index: usize,
        command: char,
        expected: usize,
        actual: usize,
        line: i32,
        column: i32,
    },
    #[error("Line {line} Column {column}: Expected flag (0/1), got {src:?}.")]
    Flag { src: char, line: i32, column: i32 },
    #[error("Line {line} Column {column}: Expected number, got {src:?}.")]
    Number { src: String, line: i32, column: i32 },
    #[error("Line {line} Column {column}: Invalid command {command:?}.")]
    Command {
        command: char,
        line: i32,
        column: i32,
    },
    #[error(transparent)]
    Path(#[from] PathError),
}

/// The path data could not be parsed.
///
/// Callers that need a path regardless can use the placeholder returned by
/// [`ParseError::path`](#method.path).
#[derive(Error, Clone, Debug, PartialEq)]
#[error("Invalid path data: {}", join(.diagnostics))]
pub struct ParseError {
    pub diagnostics: Vec<Diagnostic>,
}

impl ParseError {
    pub fn new(diagnostics: Vec<Diagnostic>) -> Self {
        ParseError { diagnostics }
    }

    /// The placeholder path `M0 0 L0 0`.
    pub fn path(&self) -> Path {
        Path::sentinel()
    }
}

fn join(diagnostics: &[Diagnostic]) -> String {
    diagnostics
        .iter()
        .map(|diagnostic| diagnostic.to_string())
        .collect::<Vec<_>>()
        .join(" ")
}

/// Parses path data without converting it.
///
/// Syntax errors end the path, the commands before them are kept.
pub fn parse(src: &str) -> Result<Path, ParseError> {
    PathParser::new().parse(&mut Source::new(src.chars()), false)
}

/// Parses path data and applies the conversions selected by the options.
///
/// With `options.debug`, any syntax error fails the whole parse.
pub fn parse_with_options(src: &str, options: &ConversionOptions) -> Result<Path, ParseError> {
    let path = PathParser::new().parse(&mut Source::new(src.chars()), options.debug)?;

    Ok(path.convert(options))
}

// A buffered iterator of characters keeping track of line and column.
pub struct Source<Iter> {
    src: Iter,
    current: char,
    line: i32,
    col: i32,
    finished: bool,
}

impl<Iter: Iterator<Item = char>> Source<Iter> {
    pub fn new<IntoIter>(src: IntoIter) -> Self
    where
        IntoIter: IntoIterator<IntoIter = Iter>,
    {
        let mut src = src.into_iter();

        let (current, finished) = match src.next() {
            Some(c) => (c, false),
            None => (' ', true),
        };

        let line = if current == '\n' { 1 } else { 0 };

        Source {
            current,
            finished,
            src,
            line,
            col: 0,
        }
    }

    fn skip_whitespace(&mut self) {
        while !self.finished && (self.current.is_whitespace() || self.current == ',') {
            self.advance_one();
        }
    }

    // Exponents can't start a number, so any letter is a command.
    fn at_command(&self) -> bool {
        !self.finished && self.current.is_ascii_alphabetic()
    }

    fn skip_to_next_command(&mut self) {
        while !self.finished && !self.current.is_ascii_alphabetic() {
            self.advance_one();
        }
    }

    fn advance_one(&mut self) {
        if self.finished {
            return;
        }
        match self.src.next() {
            Some('\n') => {
                self.current = '\n';
                self.line += 1;
                self.col = -1;
            }
            Some(c) => {
                self.current = c;
                self.col += 1;
            }
            None => {
                self.current = '~';
                self.finished = true;
            }
        }
    }
}

/// A context object for parsing path data.
#[derive(Debug, Default)]
pub struct PathParser {
    float_buffer: String,
    commands: Vec<Command>,
    diagnostics: Vec<Diagnostic>,
    debug: bool,
}

impl PathParser {
    pub fn new() -> Self {
        Self::default()
    }

    /// Parses a path.
    ///
    /// When `debug` is false, the first syntax error ends the path. Otherwise, parsing
    /// resumes at the next command and the path is rejected if any error was found.
    /// A path that does not start with a move-to command is always rejected.
    pub fn parse<Iter>(&mut self, src: &mut Source<Iter>, debug: bool) -> Result<Path, ParseError>
    where
        Iter: Iterator<Item = char>,
    {
        self.commands.clear();
        self.diagnostics.clear();
        self.debug = debug;

        src.skip_whitespace();
        if src.finished {
            return Err(ParseError::new(vec![Diagnostic::Empty]));
        }

        if src.current != 'M' && src.current != 'm' {
            return Err(ParseError::new(vec![Diagnostic::MissingMoveTo {
                command: src.current,
                line: src.line,
                column: src.col,
            }]));
        }

        self.parse_commands(src);

        let diagnostics = std::mem::take(&mut self.diagnostics);
        let commands = std::mem::take(&mut self.commands);

        if !diagnostics.is_empty() {
            if debug || commands.is_empty() {
                return Err(ParseError::new(diagnostics));
            }

            for diagnostic in &diagnostics {
                log::warn!("{}, ignoring the rest of the path.", diagnostic);
            }
        }

        Path::new(commands).map_err(|e| ParseError::new(vec![e.into()]))
    }

    fn parse_commands(&mut self, src: &mut Source<impl Iterator<Item = char>>) {
        let mut implicit_cmd = None;
        let mut prev_cmd = 'M';

        while !src.finished {
            let line = src.line;
            let column = src.col;

            let cmd = if src.at_command() {
                let cmd = src.current;
                src.advance_one();
                cmd
            } else if let Some(cmd) = implicit_cmd {
                cmd
            } else {
                // Numbers after a close path command.
                let actual = self.skip_numbers(src);
                let diagnostic = Diagnostic::Arity {
                    index: self.commands.len(),
                    command: prev_cmd,
                    expected: 0,
                    actual,
                    line,
                    column,
                };
                if !self.report(diagnostic, src) {
                    return;
                }
                continue;
            };

            let (kind, relative) = match CommandKind::from_letter(cmd) {
                Some(parsed) => parsed,
                None => {
                    if !self.report(Diagnostic::Command { command: cmd, line, column }, src) {
                        return;
                    }
                    implicit_cmd = None;
                    continue;
                }
            };

            match self.parse_command(cmd, kind, relative, src) {
                Ok(command) => {
                    self.commands.push(command);
                }
                Err(diagnostic) => {
                    if !self.report(diagnostic, src) {
                        return;
                    }
                    implicit_cmd = None;
                    continue;
                }
            }

            prev_cmd = cmd;
            implicit_cmd = match cmd {
                'm' => Some('l'),
                'M' => Some('L'),
                'z' | 'Z' => None,
                c => Some(c),
            };

            src.skip_whitespace();
        }
    }

    // Records a diagnostic and returns whether parsing goes on.
    fn report(
        &mut self,
        diagnostic: Diagnostic,
        src: &mut Source<impl Iterator<Item = char>>,
    ) -> bool {
        self.diagnostics.push(diagnostic);
        if self.debug {
            src.skip_to_next_command();
        }

        self.debug
    }

    fn parse_command(
        &mut self,
        cmd: char,
        kind: CommandKind,
        relative: bool,
        src: &mut Source<impl Iterator<Item = char>>,
    ) -> Result<Command, Diagnostic> {
        let arity = kind.arity();
        let mut values = [0.0; MAX_VALUES];
        for (i, value) in values.iter_mut().take(arity).enumerate() {
            src.skip_whitespace();
            if src.finished || src.at_command() {
                return Err(Diagnostic::Arity {
                    index: self.commands.len(),
                    command: cmd,
                    expected: arity,
                    actual: i,
                    line: src.line,
                    column: src.col,
                });
            }

            *value = if kind == CommandKind::ArcTo && (i == 3 || i == 4) {
                self.parse_flag(src)?
            } else {
                self.parse_number(src)?
            };
        }

        Ok(Command::new(kind, relative, &values[..arity])?)
    }

    fn skip_numbers(&mut self, src: &mut Source<impl Iterator<Item = char>>) -> usize {
        let mut count = 0;
        loop {
            src.skip_whitespace();
            if src.finished || src.at_command() || self.parse_number(src).is_err() {
                return count;
            }
            count += 1;
        }
    }

    fn parse_number(
        &mut self,
        src: &mut Source<impl Iterator<Item = char>>,
    ) -> Result<f64, Diagnostic> {
        self.float_buffer.clear();

        src.skip_whitespace();

        let line = src.line;
        let column = src.col;

        if src.current == '-' || src.current == '+' {
            self.float_buffer.push(src.current);
            src.advance_one();
        }

        while src.current.is_ascii_digit() {
            self.float_buffer.push(src.current);
            src.advance_one();
        }

        if src.current == '.' {
            self.float_buffer.push('.');
            src.advance_one();

            while src.current.is_ascii_digit() {
                self.float_buffer.push(src.current);
                src.advance_one();
            }
        }

        if src.current == 'e' || src.current == 'E' {
            self.float_buffer.push(src.current);
            src.advance_one();

            if src.current == '-' || src.current == '+' {
                self.float_buffer.push(src.current);
                src.advance_one();
            }

            while src.current.is_ascii_digit() {
                self.float_buffer.push(src.current);
                src.advance_one();
            }
        }

        match self.float_buffer.parse::<f64>() {
            Ok(val) => Ok(val),
            Err(_) => Err(Diagnostic::Number {
                src: std::mem::take(&mut self.float_buffer),
                line,
                column,
            }),
        }
    }

    fn parse_flag(
        &mut self,
        src: &mut Source<impl Iterator<Item = char>>,
    ) -> Result<f64, Diagnostic> {
        src.skip_whitespace();
        match src.current {
            '1' => {
                src.advance_one();
                Ok(1.0)
            }
            '0' => {
                src.advance_one();
                Ok(0.0)
            }
            _ => Err(Diagnostic::Flag {
                src: src.current,
                line: src.line,
                column: src.col,
            }),
        }
    }
}

#[cfg(test)]
use crate::path::math::{point, vector};
#[cfg(test)]
use crate::path::ArcFlags;

#[cfg(test)]
fn diagnostics(src: &str) -> Vec<Diagnostic> {
    PathParser::new()
        .parse(&mut Source::new(src.chars()), true)
        .err()
        .unwrap()
        .diagnostics
}

#[test]
fn implicit_commands() {
    let path = parse("M0 0L1 1 2 2Z").unwrap();
    assert_eq!(
        path.commands(),
        &[
            Command::move_to(point(0.0, 0.0)),
            Command::line_to(point(1.0, 1.0)),
            Command::line_to(point(2.0, 2.0)),
            Command::close(),
        ]
    );

    let path = parse("m 1 2 3 4 M 5 6 7 8").unwrap();
    assert_eq!(
        path.commands(),
        &[
            Command::move_to(point(1.0, 2.0)),
            Command::line_to(point(3.0, 4.0)).relative(),
            Command::move_to(point(5.0, 6.0)),
            Command::line_to(point(7.0, 8.0)),
        ]
    );
}

#[test]
fn arc_flags() {
    let path = parse("M0 0A5 5 0 1110 10").unwrap();
    assert_eq!(
        path[1],
        Command::arc_to(
            vector(5.0, 5.0),
            0.0,
            ArcFlags {
                large_arc: true,
                sweep: true,
            },
            point(10.0, 10.0),
        )
    );

    let path = parse("M0 0a5,5,30,0,1-10-10").unwrap();
    assert_eq!(path[1].values(), &[5.0, 5.0, 30.0, 0.0, 1.0, -10.0, -10.0]);
    assert!(path[1].is_relative());
}

#[test]
fn numbers() {
    let path = parse("M10-20l5.5.5,3e1-2\n\tL+1 1E-1").unwrap();
    assert_eq!(
        path.commands(),
        &[
            Command::move_to(point(10.0, -20.0)),
            Command::line_to(point(5.5, 0.5)).relative(),
            Command::line_to(point(30.0, -2.0)).relative(),
            Command::line_to(point(1.0, 0.1)),
        ]
    );
}

#[test]
fn missing_move_to() {
    let err = parse("L1 1").err().unwrap();
    assert_eq!(
        err.diagnostics,
        vec![Diagnostic::MissingMoveTo {
            command: 'L',
            line: 0,
            column: 0,
        }]
    );
    assert_eq!(err.path(), Path::sentinel());
    assert!(err.to_string().contains("Expected move-to command"));

    assert_eq!(parse("  ").err().unwrap().diagnostics, vec![Diagnostic::Empty]);
    // Reported even without debug.
    assert!(parse("0 0 L 1 1").is_err());
}

#[test]
fn errors_end_the_path() {
    let path = parse("M0 0 L1 1 2 Z L 5 5").unwrap();
    assert_eq!(
        path.commands(),
        &[
            Command::move_to(point(0.0, 0.0)),
            Command::line_to(point(1.0, 1.0)),
        ]
    );

    let path = parse("M0 0 L1 1 X 2 2").unwrap();
    assert_eq!(path.len(), 2);

    // Nothing left.
    assert!(parse("M0").is_err());
}

#[test]
fn debug_diagnostics() {
    assert_eq!(
        diagnostics("M0 0 L1 1 2 Z"),
        vec![Diagnostic::Arity {
            index: 2,
            command: 'L',
            expected: 2,
            actual: 1,
            line: 0,
            column: 12,
        }]
    );

    let found = diagnostics("M0 0 A5 5 0 2 1 10 10 X 1 z 1 2 L 1 --1");
    assert_eq!(found.len(), 4);
    assert_eq!(
        found[0],
        Diagnostic::Flag {
            src: '2',
            line: 0,
            column: 12,
        }
    );
    assert_eq!(
        found[1],
        Diagnostic::Command {
            command: 'X',
            line: 0,
            column: 22,
        }
    );
    match found[2] {
        Diagnostic::Arity {
            command: 'z',
            expected: 0,
            actual: 2,
            ..
        } => {}
        ref other => panic!("unexpected {:?}", other),
    }
    match found[3] {
        Diagnostic::Number { ref src, .. } => assert_eq!(src, "-"),
        ref other => panic!("unexpected {:?}", other),
    }
}

#[test]
fn debug_accepts_valid_paths() {
    let path = PathParser::new()
        .parse(&mut Source::new("M 0 0 q 1 1 2 0 t 2 0 z".chars()), true)
        .unwrap();
    assert_eq!(path.len(), 4);
}

#[test]
fn parse_and_convert() {
    let path = parse_with_options(
        "m10 10 h10 v10 c0 5 5 5 5 0 s5-5 5 0",
        &ConversionOptions::DEFAULT,
    )
    .unwrap();
    assert_eq!(
        path.commands(),
        &[
            Command::move_to(point(10.0, 10.0)),
            Command::line_to(point(20.0, 10.0)),
            Command::line_to(point(20.0, 20.0)),
            Command::cubic_curve_to(point(20.0, 25.0), point(25.0, 25.0), point(25.0, 20.0)),
            Command::cubic_curve_to(point(25.0, 15.0), point(30.0, 15.0), point(30.0, 20.0)),
        ]
    );

    let unchanged = parse_with_options("m10 10 h10", &ConversionOptions::unchanged()).unwrap();
    assert_eq!(unchanged[1], Command::horizontal_line_to(10.0).relative());

    let strict = ConversionOptions {
        debug: true,
        ..ConversionOptions::DEFAULT
    };
    assert!(parse_with_options("M0 0 L1", &strict).is_err());
}
