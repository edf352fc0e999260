use pathdata::path::ConversionOptions;
use pathdata::svg::ParseError;
use std::io;

pub struct ConvertCmd {
    pub input: String,
    pub output: Box<dyn io::Write>,
    pub options: ConversionOptions,
    pub minify: bool,
}

pub struct InspectCmd {
    pub input: String,
    pub output: Box<dyn io::Write>,
    /// Reject paths with syntax errors instead of truncating them.
    pub debug: bool,
}

#[derive(Debug)]
pub enum CliError {
    Io(io::Error),
    Parse(ParseError),
}

impl ::std::convert::From<io::Error> for CliError {
    fn from(err: io::Error) -> Self {
        CliError::Io(err)
    }
}

impl ::std::convert::From<ParseError> for CliError {
    fn from(err: ParseError) -> Self {
        CliError::Parse(err)
    }
}
