use crate::commands::{CliError, InspectCmd};
use pathdata::path::{CommandKind, ConversionOptions, Path, VerboseCommand};
use pathdata::svg::parse_with_options;
use std::io::Write;

fn parse(cmd: &InspectCmd) -> Result<Path, CliError> {
    let options = ConversionOptions {
        debug: cmd.debug,
        ..ConversionOptions::unchanged()
    };

    Ok(parse_with_options(cmd.input.trim(), &options)?)
}

fn format_values(values: &[f64]) -> String {
    values
        .iter()
        .map(|value| value.to_string())
        .collect::<Vec<_>>()
        .join(" ")
}

/// Prints the resolved points of each command.
pub fn inspect(mut cmd: InspectCmd) -> Result<(), CliError> {
    let path = parse(&cmd)?;

    for (idx, verbose) in path.to_verbose().iter().enumerate() {
        write!(
            &mut *cmd.output,
            "{:>4} {}{} -> {}{}",
            idx,
            verbose.letter(),
            format_values(&verbose.values),
            verbose.absolute.letter(),
            format_values(verbose.absolute.values()),
        )?;

        if let Some(ctrl) = verbose.ctrl1 {
            write!(&mut *cmd.output, " ctrl1 ({}, {})", ctrl.x, ctrl.y)?;
        }
        if let Some(ctrl) = verbose.ctrl2 {
            write!(&mut *cmd.output, " ctrl2 ({}, {})", ctrl.x, ctrl.y)?;
        }

        writeln!(
            &mut *cmd.output,
            " final ({}, {})",
            verbose.final_point.x, verbose.final_point.y
        )?;
    }

    Ok(())
}

fn write_arc(output: &mut dyn Write, idx: usize, verbose: &VerboseCommand) -> Result<(), CliError> {
    match verbose.arc {
        Some(arc) => {
            writeln!(
                output,
                "{:>4} center ({}, {}) radii ({}, {}) start {}° delta {}° end {}°{}",
                idx,
                arc.center.x,
                arc.center.y,
                arc.radii.x,
                arc.radii.y,
                arc.start_angle.to_degrees(),
                arc.delta_angle.to_degrees(),
                arc.end_angle.to_degrees(),
                if arc.clockwise { " clockwise" } else { "" },
            )?;
        }
        None => {
            writeln!(output, "{:>4} degenerate arc", idx)?;
        }
    }

    Ok(())
}

/// Prints the center parametrization of each arc.
pub fn arcs(mut cmd: InspectCmd) -> Result<(), CliError> {
    let path = parse(&cmd)?;

    for (idx, verbose) in path.to_verbose().iter().enumerate() {
        if verbose.kind == CommandKind::ArcTo {
            write_arc(&mut *cmd.output, idx, verbose)?;
        }
    }

    Ok(())
}
