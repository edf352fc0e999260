//! A detailed view of each command, for inspection and debugging.

use crate::commands::{Command, CommandKind};
use crate::curves::svg_arc;
use crate::geom::ArcCenterParameters;
use crate::math::Point;
use crate::path::Path;
use crate::path_state::PathState;
use crate::shorthands::longhand;

/// A command along with the points it resolves to in absolute coordinates.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serialization", derive(Serialize, Deserialize))]
pub struct VerboseCommand {
    /// The kind of the original command.
    pub kind: CommandKind,
    /// Whether the original command is relative.
    pub is_relative: bool,
    /// The values of the original command.
    pub values: Vec<f64>,
    /// The command converted to absolute coordinates, shorthands being expanded.
    pub absolute: Command,
    /// The position before the command, `None` for the first command.
    pub previous: Option<Point>,
    /// The position after the command. For close path commands this is the start of
    /// the sub-path.
    pub final_point: Point,
    /// The first control point of quadratic and cubic curves.
    pub ctrl1: Option<Point>,
    /// The second control point of cubic curves.
    pub ctrl2: Option<Point>,
    /// The center parametrization of arcs, `None` if the arc is degenerate.
    pub arc: Option<ArcCenterParameters<f64>>,
}

impl VerboseCommand {
    /// The letter of the original command.
    pub fn letter(&self) -> char {
        let letter = self.kind.letter();
        if self.is_relative {
            letter.to_ascii_lowercase()
        } else {
            letter
        }
    }
}

/// Resolves every command of the path.
pub fn to_verbose(path: &Path) -> Vec<VerboseCommand> {
    let mut state = PathState::new();
    path.iter()
        .enumerate()
        .map(|(idx, cmd)| {
            let absolute = longhand(&state, &state.to_absolute(cmd));

            let (ctrl1, ctrl2) = match absolute.kind() {
                CommandKind::CubicCurveTo => (Some(absolute.point_at(0)), Some(absolute.point_at(2))),
                CommandKind::QuadraticCurveTo => (Some(absolute.point_at(0)), None),
                _ => (None, None),
            };

            let arc = match absolute.kind() {
                CommandKind::ArcTo => svg_arc(&state, &absolute).center_parameters().ok(),
                _ => None,
            };

            let previous = if idx == 0 {
                None
            } else {
                Some(state.current_position())
            };

            state.update(&absolute);

            VerboseCommand {
                kind: cmd.kind(),
                is_relative: cmd.is_relative(),
                values: cmd.values().to_vec(),
                absolute,
                previous,
                final_point: state.current_position(),
                ctrl1,
                ctrl2,
                arc,
            }
        })
        .collect()
}

#[test]
fn verbose_view() {
    use crate::math::{point, vector};
    use crate::ArcFlags;

    let path = Path::new(vec![
        Command::move_to(point(10.0, 10.0)),
        Command::horizontal_line_to(10.0).relative(),
        Command::smooth_cubic_curve_to(point(10.0, 10.0), point(20.0, 0.0)).relative(),
        Command::arc_to(vector(5.0, 5.0), 0.0, ArcFlags::default(), point(40.0, 10.0)),
        Command::arc_to(vector(0.0, 5.0), 0.0, ArcFlags::default(), point(50.0, 10.0)),
        Command::close().relative(),
    ])
    .unwrap();

    let verbose = to_verbose(&path);
    assert_eq!(verbose.len(), 6);

    assert_eq!(verbose[0].previous, None);
    assert_eq!(verbose[0].final_point, point(10.0, 10.0));

    assert_eq!(verbose[1].letter(), 'h');
    assert_eq!(verbose[1].values, vec![10.0]);
    assert_eq!(verbose[1].absolute, Command::line_to(point(20.0, 10.0)));
    assert_eq!(verbose[1].previous, Some(point(10.0, 10.0)));

    assert_eq!(verbose[2].kind, CommandKind::SmoothCubicCurveTo);
    assert_eq!(verbose[2].ctrl1, Some(point(20.0, 10.0)));
    assert_eq!(verbose[2].ctrl2, Some(point(30.0, 20.0)));
    assert_eq!(verbose[2].final_point, point(40.0, 10.0));

    // Coincident end points.
    assert_eq!(verbose[3].arc, None);

    // Zero radius.
    assert_eq!(verbose[4].arc, None);
    assert_eq!(verbose[4].final_point, point(50.0, 10.0));

    assert_eq!(verbose[5].letter(), 'z');
    assert_eq!(verbose[5].final_point, point(10.0, 10.0));
    assert_eq!(verbose[5].previous, Some(point(50.0, 10.0)));
}

#[test]
fn verbose_arc() {
    use crate::math::{point, vector};
    use crate::ArcFlags;

    let path = Path::new(vec![
        Command::move_to(point(0.0, 0.0)),
        Command::arc_to(
            vector(10.0, 10.0),
            0.0,
            ArcFlags {
                large_arc: false,
                sweep: true,
            },
            point(20.0, 0.0),
        ),
    ])
    .unwrap();

    let verbose = to_verbose(&path);
    let arc = verbose[1].arc.unwrap();
    assert!((arc.center - point(10.0, 0.0)).length() < 1e-9);
    assert!((arc.delta_angle.radians - std::f64::consts::PI).abs() < 1e-9);
    assert!(verbose[1].ctrl1.is_none());
}
