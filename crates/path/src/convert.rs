//! Applies the conversions selected by a set of options, in a fixed order.
//!
//! 1. absolute coordinates,
//! 2. expansion of shorthands,
//! 3. resolution of the radii of arcs,
//! 4. arcs to cubic bézier curves,
//! 5. quadratic to cubic bézier curves,
//! 6. lines to cubic bézier curves,
//! 7. cubic to quadratic bézier curves,
//! 8. detection of shorthands,
//! 9. relative coordinates,
//! 10. rounding, unless already done by 8 or 9.
//!
//! Stages that would not change the path are skipped.

use crate::commands::CommandKind;
use crate::options::{ConversionOptions, Pipeline};
use crate::path::Path;
use crate::{coordinates, curves, shorthands};

/// Resolves the options and runs the corresponding pipeline.
pub fn convert(path: &Path, options: &ConversionOptions) -> Path {
    run(path, &options.resolve())
}

/// Runs the stages of a resolved pipeline.
pub fn run(input: &Path, pipeline: &Pipeline) -> Path {
    let mut path = input.clone();
    let mut changed = false;

    if pipeline.to_absolute && path.has_relative() {
        log::debug!("converting to absolute coordinates");
        path = coordinates::to_absolute(&path, None);
        changed = true;
    }

    if pipeline.to_longhands && path.has_shorthands() {
        log::debug!("expanding shorthands");
        path = shorthands::to_longhands(&path, None);
        changed = true;
    }

    if pipeline.arc_param && path.contains_any(&[CommandKind::ArcTo]) {
        log::debug!("resolving arc radii");
        path = curves::parametrize_arcs(&path);
        changed = true;
    }

    if pipeline.arc_to_cubic && path.contains_any(&[CommandKind::ArcTo]) {
        log::debug!("converting arcs, accuracy {}", pipeline.arc_accuracy);
        path = curves::arcs_to_cubics(&path, pipeline.arc_accuracy);
        changed = true;
    }

    if pipeline.quadratic_to_cubic
        && path.contains_any(&[
            CommandKind::QuadraticCurveTo,
            CommandKind::SmoothQuadraticCurveTo,
        ])
    {
        log::debug!("converting quadratic curves");
        path = curves::quadratics_to_cubics(&path);
        changed = true;
    }

    if pipeline.line_to_cubic && path.contains_any(&[CommandKind::LineTo]) {
        log::debug!("converting lines");
        path = curves::lines_to_cubics(&path);
        changed = true;
    }

    if pipeline.cubic_to_quadratic
        && path.contains_any(&[CommandKind::CubicCurveTo, CommandKind::SmoothCubicCurveTo])
    {
        log::debug!(
            "converting cubic curves, precision {}",
            pipeline.cubic_to_quadratic_precision
        );
        path = curves::cubics_to_quadratics(&path, pipeline.cubic_to_quadratic_precision);
        changed = true;
    }

    if pipeline.to_shorthands {
        log::debug!("detecting shorthands");
        path = shorthands::to_shorthands(&path, pipeline.decimals);
        changed = true;
    }

    if pipeline.to_relative {
        log::debug!("converting to relative coordinates");
        path = coordinates::to_relative(&path, pipeline.decimals);
        changed = true;
    }

    if let (false, Some(decimals)) = (pipeline.rounds_in_place(), pipeline.decimals) {
        log::debug!("rounding to {} decimals", decimals);
        path = coordinates::round(&path, decimals);
        changed = true;
    }

    if !changed {
        log::debug!("nothing to convert");
    }

    path
}

#[cfg(test)]
use crate::commands::Command;
#[cfg(test)]
use crate::math::{point, vector};
#[cfg(test)]
use crate::ArcFlags;

#[test]
fn pass_through() {
    let input = Path::new(vec![
        Command::move_to(point(0.0, 0.0)),
        Command::line_to(point(10.0, 0.123456)),
        Command::cubic_curve_to(point(1.0, 2.0), point(3.0, 4.0), point(5.0, 6.0)),
        Command::close(),
    ])
    .unwrap();

    assert_eq!(convert(&input, &ConversionOptions::DEFAULT), input);

    let relative = input.to_relative(None);
    assert_eq!(convert(&relative, &ConversionOptions::unchanged()), relative);
}

#[test]
fn normalize() {
    let input = Path::new(vec![
        Command::move_to(point(0.0, 0.0)),
        Command::horizontal_line_to(10.0).relative(),
        Command::quadratic_curve_to(point(5.0, 5.0), point(10.0, 0.0)).relative(),
        Command::arc_to(
            vector(5.0, 5.0),
            0.0,
            ArcFlags {
                large_arc: false,
                sweep: true,
            },
            point(10.0, 0.0),
        )
        .relative(),
    ])
    .unwrap();

    let output = convert(&input, &ConversionOptions::normalized());
    let kinds: Vec<CommandKind> = output.iter().map(|cmd| cmd.kind()).collect();
    assert_eq!(
        kinds,
        vec![
            CommandKind::MoveTo,
            CommandKind::LineTo,
            CommandKind::CubicCurveTo,
            CommandKind::CubicCurveTo,
            CommandKind::CubicCurveTo,
        ]
    );
    assert!(!output.has_relative());
    assert_eq!(output[1].values(), &[10.0, 0.0]);
    assert_eq!(output[4].end_point(), Some(point(30.0, 0.0)));
}

#[test]
fn optimize() {
    let input = Path::new(vec![
        Command::move_to(point(10.0, 10.0)),
        Command::line_to(point(20.0, 10.0)),
        Command::line_to(point(20.0, 20.1234)),
    ])
    .unwrap();

    let output = convert(&input, &ConversionOptions::optimized());
    assert_eq!(
        output,
        Path::new(vec![
            Command::move_to(point(10.0, 10.0)),
            Command::horizontal_line_to(10.0).relative(),
            Command::vertical_line_to(10.123).relative(),
        ])
        .unwrap()
    );
}

#[test]
fn rounding_only() {
    let input = Path::new(vec![
        Command::move_to(point(0.123, 0.456)),
        Command::line_to(point(1.25, 1.75)),
    ])
    .unwrap();

    let output = convert(
        &input,
        &ConversionOptions {
            decimals: Some(1),
            ..ConversionOptions::DEFAULT
        },
    );
    assert_eq!(output[0].values(), &[0.1, 0.5]);
    assert_eq!(output[1].values(), &[1.3, 1.8]);
}

#[test]
fn cubic_to_quadratic() {
    let input = Path::new(vec![
        Command::move_to(point(0.0, 0.0)),
        Command::cubic_curve_to(point(10.0, 0.0), point(20.0, 0.0), point(30.0, 0.0)).relative(),
    ])
    .unwrap();

    let output = convert(
        &input,
        &ConversionOptions {
            cubic_to_quadratic: true,
            ..ConversionOptions::DEFAULT
        },
    );
    assert_eq!(output.len(), 2);
    assert_eq!(output[1].kind(), CommandKind::QuadraticCurveTo);
    assert_eq!(output[1].end_point(), Some(point(30.0, 0.0)));
}
