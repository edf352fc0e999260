//! The SVG path commands.
//!
//! A [`Command`](struct.Command.html) is a [`CommandKind`](enum.CommandKind.html), a relative
//! flag and the list of its arguments. The number of arguments always matches the kind
//! of the command:
//!
//! | kind | letter | arguments |
//! |---|---|---|
//! | `MoveTo` | `M` | `x y` |
//! | `LineTo` | `L` | `x y` |
//! | `HorizontalLineTo` | `H` | `x` |
//! | `VerticalLineTo` | `V` | `y` |
//! | `CubicCurveTo` | `C` | `x1 y1 x2 y2 x y` |
//! | `SmoothCubicCurveTo` | `S` | `x2 y2 x y` |
//! | `QuadraticCurveTo` | `Q` | `x1 y1 x y` |
//! | `SmoothQuadraticCurveTo` | `T` | `x y` |
//! | `ArcTo` | `A` | `rx ry x-axis-rotation large-arc-flag sweep-flag x y` |
//! | `ClosePath` | `Z` | |

use crate::geom::ArcFlags;
use crate::math::{Point, Vector};
use crate::{round_value, PathError};

use arrayvec::ArrayVec;

/// The maximum number of values of a command (the arc command).
pub const MAX_VALUES: usize = 7;

/// The ten kinds of SVG path commands.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serialization", derive(Serialize, Deserialize))]
pub enum CommandKind {
    MoveTo,
    LineTo,
    HorizontalLineTo,
    VerticalLineTo,
    CubicCurveTo,
    SmoothCubicCurveTo,
    QuadraticCurveTo,
    SmoothQuadraticCurveTo,
    ArcTo,
    ClosePath,
}

impl CommandKind {
    /// The number of values of this kind of command.
    pub fn arity(self) -> usize {
        match self {
            CommandKind::MoveTo | CommandKind::LineTo | CommandKind::SmoothQuadraticCurveTo => 2,
            CommandKind::HorizontalLineTo | CommandKind::VerticalLineTo => 1,
            CommandKind::CubicCurveTo => 6,
            CommandKind::SmoothCubicCurveTo | CommandKind::QuadraticCurveTo => 4,
            CommandKind::ArcTo => 7,
            CommandKind::ClosePath => 0,
        }
    }

    /// The upper case letter of this kind of command.
    pub fn letter(self) -> char {
        match self {
            CommandKind::MoveTo => 'M',
            CommandKind::LineTo => 'L',
            CommandKind::HorizontalLineTo => 'H',
            CommandKind::VerticalLineTo => 'V',
            CommandKind::CubicCurveTo => 'C',
            CommandKind::SmoothCubicCurveTo => 'S',
            CommandKind::QuadraticCurveTo => 'Q',
            CommandKind::SmoothQuadraticCurveTo => 'T',
            CommandKind::ArcTo => 'A',
            CommandKind::ClosePath => 'Z',
        }
    }

    /// Parses a command letter, returning the kind and whether the command is relative
    /// (lower case).
    pub fn from_letter(letter: char) -> Option<(CommandKind, bool)> {
        let kind = match letter.to_ascii_uppercase() {
            'M' => CommandKind::MoveTo,
            'L' => CommandKind::LineTo,
            'H' => CommandKind::HorizontalLineTo,
            'V' => CommandKind::VerticalLineTo,
            'C' => CommandKind::CubicCurveTo,
            'S' => CommandKind::SmoothCubicCurveTo,
            'Q' => CommandKind::QuadraticCurveTo,
            'T' => CommandKind::SmoothQuadraticCurveTo,
            'A' => CommandKind::ArcTo,
            'Z' => CommandKind::ClosePath,
            _ => {
                return None;
            }
        };

        Some((kind, letter.is_ascii_lowercase()))
    }

    /// Horizontal and vertical lines, smooth cubic and quadratic curves.
    pub fn is_shorthand(self) -> bool {
        match self {
            CommandKind::HorizontalLineTo
            | CommandKind::VerticalLineTo
            | CommandKind::SmoothCubicCurveTo
            | CommandKind::SmoothQuadraticCurveTo => true,
            _ => false,
        }
    }
}

/// A single path command with its values.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serialization", derive(Serialize, Deserialize))]
pub struct Command {
    kind: CommandKind,
    relative: bool,
    values: ArrayVec<f64, MAX_VALUES>,
}

impl Command {
    /// Creates a command, checking that the number of values matches its kind.
    pub fn new(kind: CommandKind, relative: bool, values: &[f64]) -> Result<Self, PathError> {
        if values.len() != kind.arity() {
            return Err(PathError::Arity {
                kind,
                expected: kind.arity(),
                actual: values.len(),
            });
        }

        Ok(Command::from_parts(kind, relative, values))
    }

    // The caller guarantees the arity.
    pub(crate) fn from_parts(kind: CommandKind, relative: bool, values: &[f64]) -> Self {
        debug_assert_eq!(values.len(), kind.arity());
        Command {
            kind,
            relative,
            values: values.iter().cloned().collect(),
        }
    }

    pub fn move_to(to: Point) -> Self {
        Command::from_parts(CommandKind::MoveTo, false, &[to.x, to.y])
    }

    pub fn line_to(to: Point) -> Self {
        Command::from_parts(CommandKind::LineTo, false, &[to.x, to.y])
    }

    pub fn horizontal_line_to(x: f64) -> Self {
        Command::from_parts(CommandKind::HorizontalLineTo, false, &[x])
    }

    pub fn vertical_line_to(y: f64) -> Self {
        Command::from_parts(CommandKind::VerticalLineTo, false, &[y])
    }

    pub fn cubic_curve_to(ctrl1: Point, ctrl2: Point, to: Point) -> Self {
        Command::from_parts(
            CommandKind::CubicCurveTo,
            false,
            &[ctrl1.x, ctrl1.y, ctrl2.x, ctrl2.y, to.x, to.y],
        )
    }

    pub fn smooth_cubic_curve_to(ctrl2: Point, to: Point) -> Self {
        Command::from_parts(
            CommandKind::SmoothCubicCurveTo,
            false,
            &[ctrl2.x, ctrl2.y, to.x, to.y],
        )
    }

    pub fn quadratic_curve_to(ctrl: Point, to: Point) -> Self {
        Command::from_parts(
            CommandKind::QuadraticCurveTo,
            false,
            &[ctrl.x, ctrl.y, to.x, to.y],
        )
    }

    pub fn smooth_quadratic_curve_to(to: Point) -> Self {
        Command::from_parts(CommandKind::SmoothQuadraticCurveTo, false, &[to.x, to.y])
    }

    /// An arc command. The rotation of the x axis is expressed in degrees.
    pub fn arc_to(radii: Vector, x_rotation: f64, flags: ArcFlags, to: Point) -> Self {
        let large_arc = if flags.large_arc { 1.0 } else { 0.0 };
        let sweep = if flags.sweep { 1.0 } else { 0.0 };
        Command::from_parts(
            CommandKind::ArcTo,
            false,
            &[radii.x, radii.y, x_rotation, large_arc, sweep, to.x, to.y],
        )
    }

    pub fn close() -> Self {
        Command::from_parts(CommandKind::ClosePath, false, &[])
    }

    /// The same command with its values interpreted in relative coordinates.
    pub fn relative(mut self) -> Self {
        self.relative = true;
        self
    }

    #[inline]
    pub fn kind(&self) -> CommandKind {
        self.kind
    }

    #[inline]
    pub fn is_relative(&self) -> bool {
        self.relative
    }

    #[inline]
    pub fn values(&self) -> &[f64] {
        &self.values
    }

    /// The letter of the command, lower case for relative commands.
    pub fn letter(&self) -> char {
        let letter = self.kind.letter();
        if self.relative {
            letter.to_ascii_lowercase()
        } else {
            letter
        }
    }

    /// The point at `index` in the values, as an (x, y) pair.
    #[inline]
    pub(crate) fn point_at(&self, index: usize) -> Point {
        Point::new(self.values[index], self.values[index + 1])
    }

    /// The end point of commands that carry one (all but horizontal and vertical lines
    /// and close path), in the coordinate space of the command.
    pub fn end_point(&self) -> Option<Point> {
        match self.kind {
            CommandKind::HorizontalLineTo
            | CommandKind::VerticalLineTo
            | CommandKind::ClosePath => None,
            _ => Some(self.point_at(self.values.len() - 2)),
        }
    }

    /// The flags of arc commands.
    pub fn arc_flags(&self) -> Option<ArcFlags> {
        match self.kind {
            CommandKind::ArcTo => Some(ArcFlags {
                large_arc: self.values[3] != 0.0,
                sweep: self.values[4] != 0.0,
            }),
            _ => None,
        }
    }

    /// Moves all the coordinates of the command by `delta` and sets the relative flag.
    ///
    /// Arcs only move their end point, horizontal and vertical lines move along
    /// their axis and every other command moves its (x, y) pairs.
    pub fn translated(&self, delta: Vector, relative: bool) -> Self {
        let mut values = self.values.clone();
        match self.kind {
            CommandKind::ArcTo => {
                values[5] += delta.x;
                values[6] += delta.y;
            }
            CommandKind::HorizontalLineTo => {
                values[0] += delta.x;
            }
            CommandKind::VerticalLineTo => {
                values[0] += delta.y;
            }
            _ => {
                for (i, value) in values.iter_mut().enumerate() {
                    *value += if i % 2 == 0 { delta.x } else { delta.y };
                }
            }
        }

        Command {
            kind: self.kind,
            relative,
            values,
        }
    }

    /// The same command with every value rounded to `decimals` fractional digits.
    pub fn rounded(&self, decimals: u32) -> Self {
        Command {
            kind: self.kind,
            relative: self.relative,
            values: self
                .values
                .iter()
                .map(|&value| round_value(value, decimals))
                .collect(),
        }
    }

    /// Rounds if `decimals` is set.
    #[inline]
    pub(crate) fn maybe_rounded(&self, decimals: Option<u32>) -> Self {
        match decimals {
            Some(decimals) => self.rounded(decimals),
            None => self.clone(),
        }
    }
}

#[cfg(test)]
use crate::math::{point, vector};

#[test]
fn arity_is_checked() {
    assert!(Command::new(CommandKind::LineTo, false, &[1.0, 2.0]).is_ok());
    assert_eq!(
        Command::new(CommandKind::CubicCurveTo, true, &[1.0, 2.0]),
        Err(PathError::Arity {
            kind: CommandKind::CubicCurveTo,
            expected: 6,
            actual: 2,
        })
    );
    assert!(Command::new(CommandKind::ClosePath, false, &[]).is_ok());
}

#[test]
fn letters() {
    assert_eq!(
        CommandKind::from_letter('c'),
        Some((CommandKind::CubicCurveTo, true))
    );
    assert_eq!(CommandKind::from_letter('Z'), Some((CommandKind::ClosePath, false)));
    assert_eq!(CommandKind::from_letter('x'), None);
    assert_eq!(Command::line_to(point(1.0, 1.0)).relative().letter(), 'l');
    assert_eq!(Command::close().letter(), 'Z');
}

#[test]
fn translation_follows_the_axis_rule() {
    let delta = vector(10.0, 20.0);

    let arc = Command::arc_to(
        vector(5.0, 6.0),
        30.0,
        ArcFlags {
            large_arc: true,
            sweep: false,
        },
        point(1.0, 2.0),
    );
    assert_eq!(
        arc.translated(delta, true).values(),
        &[5.0, 6.0, 30.0, 1.0, 0.0, 11.0, 22.0]
    );

    let h = Command::horizontal_line_to(1.0).translated(delta, false);
    assert_eq!(h.values(), &[11.0]);
    let v = Command::vertical_line_to(1.0).translated(delta, false);
    assert_eq!(v.values(), &[21.0]);

    let c = Command::cubic_curve_to(point(0.0, 0.0), point(1.0, 1.0), point(2.0, 2.0));
    let c = c.translated(delta, true);
    assert!(c.is_relative());
    assert_eq!(c.values(), &[10.0, 20.0, 11.0, 21.0, 12.0, 22.0]);
}

#[test]
fn arc_flags() {
    let arc = Command::new(CommandKind::ArcTo, false, &[5.0, 5.0, 0.0, 1.0, 0.0, 10.0, 10.0])
        .unwrap();
    assert_eq!(
        arc.arc_flags(),
        Some(ArcFlags {
            large_arc: true,
            sweep: false
        })
    );
    assert_eq!(arc.end_point(), Some(point(10.0, 10.0)));
    assert_eq!(Command::close().arc_flags(), None);
    assert_eq!(Command::vertical_line_to(3.0).end_point(), None);
}
