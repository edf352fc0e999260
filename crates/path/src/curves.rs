//! Conversions between kinds of curves.
//!
//! All conversions work on absolute coordinates. Their output is absolute, except for
//! `parametrize_arcs` which only touches the radii of the arcs.

use crate::commands::{Command, CommandKind};
use crate::coordinates::to_absolute;
use crate::geom::{CubicBezierSegment, QuadraticBezierSegment, SvgArc};
use crate::math::{vector, Angle, Vector};
use crate::path::Path;
use crate::path_state::PathState;
use crate::shorthands::{longhand, to_longhands};

/// The arc of an absolute arc command starting at the current position.
pub(crate) fn svg_arc(state: &PathState, cmd: &Command) -> SvgArc<f64> {
    debug_assert_eq!(cmd.kind(), CommandKind::ArcTo);
    let values = cmd.values();
    SvgArc {
        from: state.current_position(),
        to: cmd.point_at(5),
        radii: vector(values[0], values[1]),
        x_rotation: Angle::degrees(values[2]),
        flags: cmd.arc_flags().unwrap_or_default(),
    }
}

// A smooth cubic curve can't follow a command that was turned into a cubic curve
// without changing the reflected control point.
fn after_conversion(state: &PathState, cmd: &Command, converted_previous: bool) -> Command {
    if converted_previous && cmd.kind() == CommandKind::SmoothCubicCurveTo {
        longhand(state, cmd)
    } else {
        cmd.clone()
    }
}

/// Replaces every arc with a sequence of cubic bézier curves.
///
/// Each quarter of the arc is split into `accuracy` curves. Degenerate arcs (zero radius
/// or equal end points) and arcs that are too small to be worth a quarter are removed.
pub fn arcs_to_cubics(path: &Path, accuracy: u32) -> Path {
    let path = to_absolute(path, None);

    let mut state = PathState::new();
    let mut converted_previous = false;
    let mut commands = Vec::with_capacity(path.len());
    for cmd in &path {
        let converted = cmd.kind() == CommandKind::ArcTo;
        if converted {
            svg_arc(&state, cmd).for_each_cubic_bezier(accuracy, &mut |curve| {
                commands.push(Command::cubic_curve_to(curve.ctrl1, curve.ctrl2, curve.to));
            });
        } else {
            commands.push(after_conversion(&state, cmd, converted_previous));
        }

        state.update(cmd);
        converted_previous = converted;
    }

    Path::from_commands(commands)
}

/// Replaces every quadratic bézier curve with the equivalent cubic bézier curve.
///
/// Smooth quadratic curves are resolved through their reflected control point first.
pub fn quadratics_to_cubics(path: &Path) -> Path {
    let path = to_absolute(path, None);

    let mut state = PathState::new();
    let mut converted_previous = false;
    let mut commands = Vec::with_capacity(path.len());
    for cmd in &path {
        let from = state.current_position();
        let quadratic = match cmd.kind() {
            CommandKind::QuadraticCurveTo => Some(QuadraticBezierSegment {
                from,
                ctrl: cmd.point_at(0),
                to: cmd.point_at(2),
            }),
            CommandKind::SmoothQuadraticCurveTo => Some(QuadraticBezierSegment {
                from,
                ctrl: state.smooth_quadratic_ctrl(),
                to: cmd.point_at(0),
            }),
            _ => None,
        };

        match quadratic {
            Some(quadratic) => {
                let cubic = quadratic.to_cubic();
                commands.push(Command::cubic_curve_to(cubic.ctrl1, cubic.ctrl2, cubic.to));
            }
            None => {
                commands.push(after_conversion(&state, cmd, converted_previous));
            }
        }

        state.update(cmd);
        converted_previous = quadratic.is_some();
    }

    Path::from_commands(commands)
}

/// Replaces every line with a cubic bézier curve.
///
/// The first control point is at the start of the line, the second one at its end.
/// This makes it possible to interpolate between paths made of lines and paths
/// made of curves.
pub fn lines_to_cubics(path: &Path) -> Path {
    let path = to_absolute(path, None);

    let mut state = PathState::new();
    let commands = path
        .iter()
        .map(|cmd| {
            let result = match cmd.kind() {
                CommandKind::LineTo => {
                    let to = cmd.point_at(0);
                    Command::cubic_curve_to(state.current_position(), to, to)
                }
                _ => cmd.clone(),
            };
            state.update(cmd);

            result
        })
        .collect();

    Path::from_commands(commands)
}

/// Replaces the radii of every arc with the radii actually used to draw it.
///
/// Radii that are too small to join the end points of an arc are scaled up. Degenerate
/// arcs are left untouched.
pub fn parametrize_arcs(path: &Path) -> Path {
    let mut state = PathState::new();
    let commands = path
        .iter()
        .map(|cmd| {
            let result = match cmd.kind() {
                CommandKind::ArcTo => {
                    let absolute = state.to_absolute(cmd);
                    match svg_arc(&state, &absolute).center_parameters() {
                        Ok(params) => with_radii(cmd, params.radii),
                        Err(_) => cmd.clone(),
                    }
                }
                _ => cmd.clone(),
            };
            state.update(cmd);

            result
        })
        .collect();

    Path::from_commands(commands)
}

fn with_radii(cmd: &Command, radii: Vector) -> Command {
    let mut values = [0.0; 7];
    values.copy_from_slice(cmd.values());
    values[0] = radii.x;
    values[1] = radii.y;

    Command::from_parts(cmd.kind(), cmd.is_relative(), &values)
}

/// Replaces every cubic bézier curve with a sequence of quadratic bézier curves.
///
/// `precision` is the maximum distance between a cubic curve and its approximation.
/// The path is converted to absolute longhand commands first.
pub fn cubics_to_quadratics(path: &Path, precision: f64) -> Path {
    let path = to_longhands(path, None);

    let mut state = PathState::new();
    let mut commands = Vec::with_capacity(path.len());
    for cmd in &path {
        match cmd.kind() {
            CommandKind::CubicCurveTo => {
                let curve = CubicBezierSegment {
                    from: state.current_position(),
                    ctrl1: cmd.point_at(0),
                    ctrl2: cmd.point_at(2),
                    to: cmd.point_at(4),
                };
                curve.for_each_quadratic_bezier(precision, &mut |quadratic| {
                    commands.push(Command::quadratic_curve_to(quadratic.ctrl, quadratic.to));
                });
            }
            _ => {
                commands.push(cmd.clone());
            }
        }
        state.update(cmd);
    }

    Path::from_commands(commands)
}

#[cfg(test)]
use crate::math::{point, Point};
#[cfg(test)]
use crate::ArcFlags;

#[cfg(test)]
fn path(commands: Vec<Command>) -> Path {
    Path::new(commands).unwrap()
}

#[cfg(test)]
fn assert_approx_eq(a: Point, b: Point) {
    assert!((a - b).length() < 1e-9, "{:?} != {:?}", a, b);
}

#[test]
fn quarter_arc_to_cubic() {
    let input = path(vec![
        Command::move_to(point(50.0, 0.0)),
        Command::arc_to(
            vector(50.0, 50.0),
            0.0,
            ArcFlags {
                large_arc: false,
                sweep: true,
            },
            point(0.0, 50.0),
        ),
    ]);

    let output = arcs_to_cubics(&input, 1);
    assert_eq!(output.len(), 2);
    assert_eq!(output[1].kind(), CommandKind::CubicCurveTo);
    assert_eq!(output[1].end_point(), Some(point(0.0, 50.0)));

    let curve = CubicBezierSegment {
        from: point(50.0, 0.0),
        ctrl1: output[1].point_at(0),
        ctrl2: output[1].point_at(2),
        to: output[1].point_at(4),
    };
    let mid = curve.sample(0.5);
    assert!((mid.to_vector().length() - 50.0).abs() < 0.01);

    let accurate = arcs_to_cubics(&input, 3);
    assert_eq!(accurate.len(), 4);
    assert_eq!(accurate[3].end_point(), Some(point(0.0, 50.0)));
}

#[test]
fn smooth_curve_after_arc() {
    let input = path(vec![
        Command::move_to(point(0.0, 0.0)),
        Command::arc_to(vector(10.0, 10.0), 0.0, ArcFlags::default(), point(20.0, 0.0)),
        Command::smooth_cubic_curve_to(point(30.0, 10.0), point(40.0, 0.0)),
    ]);

    let output = arcs_to_cubics(&input, 1);
    // A half circle is made of two quarters.
    assert_eq!(output.len(), 4);
    assert_eq!(
        output[3],
        Command::cubic_curve_to(point(20.0, 0.0), point(30.0, 10.0), point(40.0, 0.0))
    );
}

#[test]
fn degenerate_arcs_are_removed() {
    let input = path(vec![
        Command::move_to(point(0.0, 0.0)),
        Command::arc_to(vector(0.0, 5.0), 0.0, ArcFlags::default(), point(20.0, 0.0)),
        Command::line_to(point(30.0, 0.0)),
    ]);

    let output = arcs_to_cubics(&input, 1);
    assert_eq!(output.len(), 2);
    assert_eq!(output[1], Command::line_to(point(30.0, 0.0)));
}

#[test]
fn quadratic_to_cubic() {
    let input = path(vec![
        Command::move_to(point(0.0, 0.0)),
        Command::quadratic_curve_to(point(30.0, 30.0), point(60.0, 0.0)),
        Command::smooth_quadratic_curve_to(point(120.0, 0.0)),
        Command::smooth_cubic_curve_to(point(130.0, 10.0), point(140.0, 0.0)),
    ]);

    let output = quadratics_to_cubics(&input);
    assert_eq!(output.len(), 4);
    assert_approx_eq(output[1].point_at(0), point(20.0, 20.0));
    assert_approx_eq(output[1].point_at(2), point(40.0, 20.0));
    assert_eq!(output[1].end_point(), Some(point(60.0, 0.0)));

    // The implied control point of the smooth curve is (90, -30).
    assert_approx_eq(output[2].point_at(0), point(80.0, -20.0));
    assert_approx_eq(output[2].point_at(2), point(100.0, -20.0));

    // Nothing was reflected by the smooth cubic curve.
    assert_eq!(
        output[3],
        Command::cubic_curve_to(point(120.0, 0.0), point(130.0, 10.0), point(140.0, 0.0))
    );
}

#[test]
fn line_to_cubic() {
    let input = path(vec![
        Command::move_to(point(10.0, 10.0)),
        Command::line_to(point(10.0, 10.0)).relative(),
    ]);

    let output = lines_to_cubics(&input);
    assert_eq!(
        output[1],
        Command::cubic_curve_to(point(10.0, 10.0), point(20.0, 20.0), point(20.0, 20.0))
    );
}

#[test]
fn arc_radii_are_resolved() {
    let input = path(vec![
        Command::move_to(point(0.0, 0.0)),
        Command::arc_to(vector(1.0, 1.0), 0.0, ArcFlags::default(), point(10.0, 0.0)).relative(),
        Command::arc_to(vector(0.0, 1.0), 0.0, ArcFlags::default(), point(20.0, 0.0)),
    ]);

    let output = parametrize_arcs(&input);
    assert!(output[1].is_relative());
    assert!((output[1].values()[0] - 5.0).abs() < 1e-9);
    assert!((output[1].values()[1] - 5.0).abs() < 1e-9);
    assert_eq!(&output[1].values()[2..], &[0.0, 0.0, 0.0, 10.0, 0.0]);
    assert_eq!(output[2], input[2]);
}

#[test]
fn cubic_to_quadratic() {
    let input = path(vec![
        Command::move_to(point(0.0, 0.0)),
        Command::cubic_curve_to(point(10.0, 0.0), point(20.0, 0.0), point(30.0, 0.0)),
        Command::smooth_cubic_curve_to(point(50.0, -40.0), point(60.0, 0.0)),
        Command::line_to(point(70.0, 0.0)),
    ]);

    let output = cubics_to_quadratics(&input, 0.1);
    assert_eq!(output[1].kind(), CommandKind::QuadraticCurveTo);
    assert_eq!(output[1].end_point(), Some(point(30.0, 0.0)));

    let last = output.len() - 1;
    assert_eq!(output[last], Command::line_to(point(70.0, 0.0)));
    assert_eq!(output[last - 1].end_point(), Some(point(60.0, 0.0)));
    assert!(output
        .iter()
        .skip(1)
        .take(last - 1)
        .all(|cmd| cmd.kind() == CommandKind::QuadraticCurveTo));
}
