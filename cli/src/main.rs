extern crate clap;
extern crate pathdata;

mod commands;
mod convert;
mod inspect;

use clap::*;
use commands::*;
use pathdata::path::ConversionOptions;

use std::fs::File;
use std::io::prelude::*;
use std::io::{stdin, stdout};
use std::process;
use std::result::Result;

fn conversion_args() -> Vec<Arg<'static, 'static>> {
    vec![
        Arg::with_name("NORMALIZE")
            .long("normalize")
            .help("Absolute longhand commands, arcs and quadratic curves converted to cubic curves"),
        Arg::with_name("KEEP")
            .long("keep")
            .help("Keeps the commands as they are")
            .conflicts_with("NORMALIZE"),
        Arg::with_name("OPTIMIZE")
            .long("optimize")
            .help("Relative shorthand commands rounded to 3 decimals"),
        Arg::with_name("RELATIVE")
            .long("relative")
            .help("Converts to relative coordinates"),
        Arg::with_name("SHORTHANDS")
            .long("shorthands")
            .help("Uses shorthand commands where possible"),
        Arg::with_name("NO_LONGHANDS")
            .long("no-longhands")
            .help("Keeps shorthand commands"),
        Arg::with_name("ARC_TO_CUBIC")
            .long("arc-to-cubic")
            .help("Converts arcs to cubic bézier curves"),
        Arg::with_name("ARC_PARAM")
            .long("arc-param")
            .help("Replaces the radii of arcs with the radii used to draw them"),
        Arg::with_name("ARC_ACCURACY")
            .long("arc-accuracy")
            .help("Number of cubic bézier curves per quarter of arc (1 by default)")
            .value_name("N")
            .takes_value(true),
        Arg::with_name("QUADRATIC_TO_CUBIC")
            .long("quadratic-to-cubic")
            .help("Converts quadratic bézier curves to cubic ones"),
        Arg::with_name("CUBIC_TO_QUADRATIC")
            .long("cubic-to-quadratic")
            .help("Approximates cubic bézier curves with quadratic ones"),
        Arg::with_name("PRECISION")
            .long("precision")
            .help("Maximum distance between a cubic curve and its approximation (0.1 by default)")
            .value_name("PRECISION")
            .takes_value(true),
        Arg::with_name("LINE_TO_CUBIC")
            .long("line-to-cubic")
            .help("Converts lines to cubic bézier curves"),
        Arg::with_name("DECIMALS")
            .short("d")
            .long("decimals")
            .help("Rounds the values")
            .value_name("N")
            .takes_value(true),
        Arg::with_name("MINIFY")
            .short("m")
            .long("minify")
            .help("Writes the shortest possible output"),
        debug_arg(),
    ]
}

fn debug_arg() -> Arg<'static, 'static> {
    Arg::with_name("DEBUG")
        .long("debug")
        .help("Reports every syntax error instead of ignoring the end of the path")
}

fn main() {
    env_logger::init();

    let matches = App::new("pathdata command-line interface")
        .version("0.1")
        .author("Nicolas Silva <nical@fastmail.com>")
        .about("Converts SVG path data")
        .subcommand(
            SubCommand::with_name("convert")
                .about("Converts a path (default)")
                .args(&conversion_args()),
        )
        .subcommand(
            SubCommand::with_name("inspect")
                .about("Prints the resolved points of each command")
                .arg(debug_arg()),
        )
        .subcommand(
            SubCommand::with_name("arc")
                .about("Prints the center parametrization of each arc")
                .arg(debug_arg()),
        )
        .arg(
            Arg::with_name("PATH")
                .value_name("PATH")
                .help("An SVG path")
                .takes_value(true)
                .required(false),
        )
        .arg(
            Arg::with_name("INPUT")
                .help("Sets the input file to use")
                .short("i")
                .long("input")
                .value_name("FILE")
                .takes_value(true)
                .required(false),
        )
        .arg(
            Arg::with_name("OUTPUT")
                .help("Sets the output file to use")
                .value_name("FILE")
                .short("o")
                .long("output")
                .takes_value(true)
                .required(false),
        )
        .get_matches();

    let input = match read_input(&matches) {
        Ok(input) => input,
        Err(e) => {
            eprintln!("{}", e);
            process::exit(1);
        }
    };

    let mut output: Box<dyn Write> = Box::new(stdout());
    if let Some(output_file) = matches.value_of("OUTPUT") {
        match File::create(output_file) {
            Ok(file) => {
                output = Box::new(file);
            }
            Err(e) => {
                eprintln!("Cannot create file {}: {}", output_file, e);
                process::exit(1);
            }
        }
    }

    let result = if let Some(inspect_matches) = matches.subcommand_matches("inspect") {
        inspect::inspect(InspectCmd {
            input,
            output,
            debug: inspect_matches.is_present("DEBUG"),
        })
    } else if let Some(arc_matches) = matches.subcommand_matches("arc") {
        inspect::arcs(InspectCmd {
            input,
            output,
            debug: arc_matches.is_present("DEBUG"),
        })
    } else {
        let convert_matches = matches.subcommand_matches("convert");
        let options = match convert_matches.map(get_options) {
            Some(Ok(options)) => options,
            Some(Err(e)) => {
                eprintln!("{}", e);
                process::exit(1);
            }
            None => ConversionOptions::DEFAULT,
        };

        convert::convert(ConvertCmd {
            input,
            output,
            options,
            minify: convert_matches.map_or(false, |m| m.is_present("MINIFY")),
        })
    };

    match result {
        Ok(()) => {}
        Err(CliError::Parse(err)) => {
            for diagnostic in &err.diagnostics {
                eprintln!("{}", diagnostic);
            }
            process::exit(1);
        }
        Err(CliError::Io(err)) => {
            eprintln!("{}", err);
            process::exit(1);
        }
    }
}

fn read_input(matches: &ArgMatches) -> Result<String, String> {
    if let Some(path) = matches.value_of("PATH") {
        return Ok(path.to_string());
    }

    let mut input_buffer = String::new();
    if let Some(input_file) = matches.value_of("INPUT") {
        let mut file =
            File::open(input_file).map_err(|e| format!("Cannot open file {}: {}", input_file, e))?;
        file.read_to_string(&mut input_buffer)
            .map_err(|e| format!("Cannot read file {}: {}", input_file, e))?;
    } else {
        stdin()
            .read_to_string(&mut input_buffer)
            .map_err(|e| format!("Cannot read the standard input: {}", e))?;
    }

    Ok(input_buffer)
}

fn get_options(matches: &ArgMatches) -> Result<ConversionOptions, String> {
    let normalize = if matches.is_present("NORMALIZE") {
        Some(true)
    } else if matches.is_present("KEEP") {
        Some(false)
    } else {
        None
    };

    Ok(ConversionOptions {
        normalize,
        optimize: matches.is_present("OPTIMIZE"),
        to_relative: matches.is_present("RELATIVE"),
        to_longhands: !matches.is_present("NO_LONGHANDS"),
        to_shorthands: matches.is_present("SHORTHANDS"),
        arc_to_cubic: matches.is_present("ARC_TO_CUBIC"),
        arc_param: matches.is_present("ARC_PARAM"),
        arc_accuracy: get_value(matches, "ARC_ACCURACY")?
            .unwrap_or(ConversionOptions::DEFAULT.arc_accuracy),
        quadratic_to_cubic: matches.is_present("QUADRATIC_TO_CUBIC"),
        cubic_to_quadratic: matches.is_present("CUBIC_TO_QUADRATIC"),
        cubic_to_quadratic_precision: get_value(matches, "PRECISION")?
            .unwrap_or(ConversionOptions::DEFAULT.cubic_to_quadratic_precision),
        line_to_cubic: matches.is_present("LINE_TO_CUBIC"),
        decimals: get_value(matches, "DECIMALS")?,
        debug: matches.is_present("DEBUG"),
        ..ConversionOptions::DEFAULT
    })
}

fn get_value<T: std::str::FromStr>(matches: &ArgMatches, name: &str) -> Result<Option<T>, String> {
    match matches.value_of(name) {
        Some(value) => value
            .parse()
            .map(Some)
            .map_err(|_| format!("Invalid value for {}: {:?}", name, value)),
        None => Ok(None),
    }
}

#[cfg(test)]
fn parse_convert_args(args: &[&str]) -> Result<ConversionOptions, String> {
    let matches = App::new("pathdata")
        .subcommand(SubCommand::with_name("convert").args(&conversion_args()))
        .get_matches_from(args.iter().cloned());

    get_options(matches.subcommand_matches("convert").unwrap())
}

#[test]
fn option_values() {
    let options = parse_convert_args(&[
        "pathdata",
        "convert",
        "--decimals",
        "2",
        "--arc-accuracy",
        "4",
        "--precision",
        "0.5",
    ])
    .unwrap();
    assert_eq!(options.decimals, Some(2));
    assert_eq!(options.arc_accuracy, 4);
    assert_eq!(options.cubic_to_quadratic_precision, 0.5);

    let options = parse_convert_args(&["pathdata", "convert"]).unwrap();
    assert_eq!(options.decimals, None);
    assert_eq!(options.arc_accuracy, 1);
}

#[test]
fn invalid_option_values() {
    assert!(parse_convert_args(&["pathdata", "convert", "--decimals", "two"]).is_err());
    assert!(parse_convert_args(&["pathdata", "convert", "--arc-accuracy", "1.5"]).is_err());
    assert!(parse_convert_args(&["pathdata", "convert", "--precision", "fine"]).is_err());
}
