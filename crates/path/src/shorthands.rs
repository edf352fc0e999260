//! Expansion of shorthand commands and their detection.
//!
//! Shorthands are horizontal and vertical lines (`H`, `V`) and smooth curves (`S`, `T`)
//! whose first control point is the reflection of the previous control point.

use crate::commands::{Command, CommandKind};
use crate::coordinates::to_absolute;
use crate::math::{point, Point};
use crate::path::Path;
use crate::path_state::PathState;
use crate::round_value;

/// Fractional digits compared when detecting horizontal and vertical lines.
const LINE_TOLERANCE_DECIMALS: u32 = 2;

/// Fractional digits compared when detecting reflected control points.
const REFLECTION_TOLERANCE_DECIMALS: u32 = 1;

/// Converts the path to absolute coordinates and replaces every shorthand command with
/// its canonical form.
///
/// - `H` and `V` become `L`, using the missing coordinate of the current point.
/// - `S` and `T` become `C` and `Q` with the reflected control point. If the previous
///   command has no control point to reflect, the current point is used.
pub fn to_longhands(path: &Path, decimals: Option<u32>) -> Path {
    let path = to_absolute(path, decimals);

    let mut state = PathState::new();
    let commands = path
        .iter()
        .map(|cmd| {
            let longhand = longhand(&state, cmd);
            state.update(&longhand);

            longhand.maybe_rounded(decimals)
        })
        .collect();

    Path::from_commands(commands)
}

/// The canonical form of an absolute command.
pub(crate) fn longhand(state: &PathState, cmd: &Command) -> Command {
    let current = state.current_position();
    let values = cmd.values();
    match cmd.kind() {
        CommandKind::HorizontalLineTo => Command::line_to(point(values[0], current.y)),
        CommandKind::VerticalLineTo => Command::line_to(point(current.x, values[0])),
        CommandKind::SmoothCubicCurveTo => Command::cubic_curve_to(
            state.smooth_cubic_ctrl(),
            cmd.point_at(0),
            cmd.point_at(2),
        ),
        CommandKind::SmoothQuadraticCurveTo => {
            Command::quadratic_curve_to(state.smooth_quadratic_ctrl(), cmd.point_at(0))
        }
        _ => cmd.clone(),
    }
}

/// Replaces canonical commands with shorthands where possible.
///
/// The path is first converted to absolute longhand commands. Then:
///
/// - a line that keeps the current y (respectively x) coordinate becomes `H` (respectively `V`),
///   coordinates being compared with two fractional digits,
/// - a curve whose first control point is the reflection of the previous control point
///   becomes `S` or `T`, control points being compared with one fractional digit.
///
/// The comparisons are tolerant, which means that curves that are close to, but not exactly
/// smooth are turned into smooth curves while curves that are smooth but further away from
/// the tolerance keep their long form.
pub fn to_shorthands(path: &Path, decimals: Option<u32>) -> Path {
    let path = to_longhands(path, decimals);

    let mut state = PathState::new();
    let commands = path
        .iter()
        .map(|cmd| {
            let shorthand = shorthand(&state, cmd);
            state.update(cmd);

            shorthand.maybe_rounded(decimals)
        })
        .collect();

    Path::from_commands(commands)
}

fn shorthand(state: &PathState, cmd: &Command) -> Command {
    let current = state.current_position();
    match cmd.kind() {
        CommandKind::LineTo => {
            let to = cmd.point_at(0);
            let same_x = same(current.x, to.x, LINE_TOLERANCE_DECIMALS);
            let same_y = same(current.y, to.y, LINE_TOLERANCE_DECIMALS);
            if same_y && !same_x {
                Command::horizontal_line_to(to.x)
            } else if same_x && !same_y {
                Command::vertical_line_to(to.y)
            } else {
                cmd.clone()
            }
        }
        CommandKind::QuadraticCurveTo => {
            if same_point(cmd.point_at(0), state.smooth_quadratic_ctrl()) {
                Command::smooth_quadratic_curve_to(cmd.point_at(2))
            } else {
                cmd.clone()
            }
        }
        CommandKind::CubicCurveTo => {
            if same_point(cmd.point_at(0), state.smooth_cubic_ctrl()) {
                Command::smooth_cubic_curve_to(cmd.point_at(2), cmd.point_at(4))
            } else {
                cmd.clone()
            }
        }
        _ => cmd.clone(),
    }
}

fn same(a: f64, b: f64, decimals: u32) -> bool {
    round_value(a, decimals) == round_value(b, decimals)
}

fn same_point(a: Point, b: Point) -> bool {
    same(a.x, b.x, REFLECTION_TOLERANCE_DECIMALS) && same(a.y, b.y, REFLECTION_TOLERANCE_DECIMALS)
}

#[cfg(test)]
fn path(commands: Vec<Command>) -> Path {
    Path::new(commands).unwrap()
}

#[test]
fn expand_shorthands() {
    let input = path(vec![
        Command::move_to(point(10.0, 10.0)),
        Command::horizontal_line_to(20.0),
        Command::vertical_line_to(30.0).relative(),
        Command::smooth_cubic_curve_to(point(30.0, 50.0), point(40.0, 40.0)),
        Command::smooth_cubic_curve_to(point(60.0, 30.0), point(70.0, 40.0)),
        Command::quadratic_curve_to(point(80.0, 50.0), point(90.0, 40.0)),
        Command::smooth_quadratic_curve_to(point(110.0, 40.0)),
    ]);

    let expected = path(vec![
        Command::move_to(point(10.0, 10.0)),
        Command::line_to(point(20.0, 10.0)),
        Command::line_to(point(20.0, 40.0)),
        // Nothing to reflect after a line.
        Command::cubic_curve_to(point(20.0, 40.0), point(30.0, 50.0), point(40.0, 40.0)),
        Command::cubic_curve_to(point(50.0, 30.0), point(60.0, 30.0), point(70.0, 40.0)),
        Command::quadratic_curve_to(point(80.0, 50.0), point(90.0, 40.0)),
        Command::quadratic_curve_to(point(100.0, 30.0), point(110.0, 40.0)),
    ]);

    let longhands = to_longhands(&input, None);
    assert_eq!(longhands, expected);

    // Idempotent.
    assert_eq!(to_longhands(&longhands, None), longhands);
}

#[test]
fn smooth_quadratic_after_cubic() {
    let input = path(vec![
        Command::move_to(point(0.0, 0.0)),
        Command::cubic_curve_to(point(0.0, 10.0), point(10.0, 10.0), point(10.0, 0.0)),
        Command::smooth_quadratic_curve_to(point(20.0, 0.0)),
    ]);

    let longhands = to_longhands(&input, None);
    assert_eq!(
        longhands[2],
        Command::quadratic_curve_to(point(10.0, 0.0), point(20.0, 0.0))
    );
}

#[test]
fn collapse_shorthands() {
    let input = path(vec![
        Command::move_to(point(10.0, 10.0)),
        Command::line_to(point(20.0, 10.001)),
        Command::line_to(point(20.0, 40.0)),
        Command::line_to(point(30.0, 50.0)),
        Command::cubic_curve_to(point(40.0, 40.0), point(50.0, 40.0), point(60.0, 50.0)),
        Command::cubic_curve_to(point(70.04, 60.0), point(80.0, 60.0), point(90.0, 50.0)),
        Command::quadratic_curve_to(point(100.0, 40.0), point(110.0, 50.0)),
        Command::quadratic_curve_to(point(120.0, 60.0), point(130.0, 50.0)),
        Command::quadratic_curve_to(point(150.0, 60.0), point(150.0, 50.0)),
    ]);

    let expected = path(vec![
        Command::move_to(point(10.0, 10.0)),
        Command::horizontal_line_to(20.0),
        Command::vertical_line_to(40.0),
        Command::line_to(point(30.0, 50.0)),
        Command::cubic_curve_to(point(40.0, 40.0), point(50.0, 40.0), point(60.0, 50.0)),
        Command::smooth_cubic_curve_to(point(80.0, 60.0), point(90.0, 50.0)),
        Command::quadratic_curve_to(point(100.0, 40.0), point(110.0, 50.0)),
        Command::smooth_quadratic_curve_to(point(130.0, 50.0)),
        Command::quadratic_curve_to(point(150.0, 60.0), point(150.0, 50.0)),
    ]);

    assert_eq!(to_shorthands(&input, None), expected);
}

#[test]
fn shorthand_round_trip() {
    let input = path(vec![
        Command::move_to(point(0.0, 0.0)),
        Command::cubic_curve_to(point(10.0, 10.0), point(20.0, 10.0), point(30.0, 0.0)),
        Command::smooth_cubic_curve_to(point(50.0, -10.0), point(60.0, 0.0)),
        Command::horizontal_line_to(70.0),
        Command::quadratic_curve_to(point(80.0, 10.0), point(90.0, 0.0)),
        Command::smooth_quadratic_curve_to(point(110.0, 0.0)),
    ]);

    let expanded = to_longhands(&input, None);
    assert!(!expanded.has_shorthands());
    assert_eq!(to_shorthands(&expanded, None), input);
}
