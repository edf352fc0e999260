//! The default path data structure.

use crate::commands::{Command, CommandKind};
use crate::options::ConversionOptions;
use crate::verbose::VerboseCommand;
use crate::{convert, coordinates, curves, shorthands, verbose, ArrayCommand, PathError};

use std::slice;

/// A sequence of SVG path commands.
///
/// The first command of a path is always an absolute move-to.
///
/// Every conversion method returns a new path, which makes it possible to chain them:
///
/// ```
/// # extern crate pathdata_path;
/// # fn main() {
/// use pathdata_path::{Command, Path};
/// use pathdata_path::math::point;
///
/// let path = Path::new(vec![
///     Command::move_to(point(0.0, 0.0)),
///     Command::quadratic_curve_to(point(10.0, 10.0), point(20.0, 0.0)),
/// ]).unwrap();
///
/// let relative = path.quadratics_to_cubics().to_relative(Some(2));
/// assert_eq!(relative.commands()[1].letter(), 'c');
/// # }
/// ```
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serialization", derive(Serialize, Deserialize))]
pub struct Path {
    commands: Vec<Command>,
}

impl Path {
    /// Creates a path from a sequence of commands.
    ///
    /// A leading relative move-to is interpreted relatively to the origin and
    /// becomes absolute.
    pub fn new(mut commands: Vec<Command>) -> Result<Self, PathError> {
        let first = match commands.first_mut() {
            Some(first) => first,
            None => {
                return Err(PathError::Empty);
            }
        };

        if first.kind() != CommandKind::MoveTo {
            return Err(PathError::MissingMoveTo(first.kind()));
        }

        if first.is_relative() {
            *first = Command::from_parts(CommandKind::MoveTo, false, first.values());
        }

        Ok(Path { commands })
    }

    // The caller guarantees that the commands start with an absolute move-to.
    pub(crate) fn from_commands(commands: Vec<Command>) -> Self {
        debug_assert!(commands
            .first()
            .map(|cmd| cmd.kind() == CommandKind::MoveTo && !cmd.is_relative())
            .unwrap_or(false));
        Path { commands }
    }

    /// The placeholder path returned in place of invalid path data: `M0 0 L0 0`.
    pub fn sentinel() -> Self {
        use crate::math::point;

        Path {
            commands: vec![
                Command::move_to(point(0.0, 0.0)),
                Command::line_to(point(0.0, 0.0)),
            ],
        }
    }

    #[inline]
    pub fn commands(&self) -> &[Command] {
        &self.commands
    }

    #[inline]
    pub fn into_commands(self) -> Vec<Command> {
        self.commands
    }

    #[inline]
    pub fn iter(&self) -> slice::Iter<Command> {
        self.commands.iter()
    }

    /// The number of commands, always at least one.
    #[inline]
    pub fn len(&self) -> usize {
        self.commands.len()
    }

    /// Paths always contain a move-to, this is here for consistency.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.commands.is_empty()
    }

    /// Whether any command after the initial move-to is relative.
    pub fn has_relative(&self) -> bool {
        self.commands.iter().any(Command::is_relative)
    }

    /// Whether the path contains a command of one of the given kinds.
    pub fn contains_any(&self, kinds: &[CommandKind]) -> bool {
        self.commands.iter().any(|cmd| kinds.contains(&cmd.kind()))
    }

    /// Whether the path contains horizontal or vertical lines or smooth curves.
    pub fn has_shorthands(&self) -> bool {
        self.commands.iter().any(|cmd| cmd.kind().is_shorthand())
    }

    /// See [`coordinates::to_absolute`](../coordinates/fn.to_absolute.html).
    pub fn to_absolute(&self, decimals: Option<u32>) -> Path {
        coordinates::to_absolute(self, decimals)
    }

    /// See [`coordinates::to_relative`](../coordinates/fn.to_relative.html).
    pub fn to_relative(&self, decimals: Option<u32>) -> Path {
        coordinates::to_relative(self, decimals)
    }

    /// See [`coordinates::round`](../coordinates/fn.round.html).
    pub fn round(&self, decimals: u32) -> Path {
        coordinates::round(self, decimals)
    }

    /// See [`shorthands::to_longhands`](../shorthands/fn.to_longhands.html).
    pub fn to_longhands(&self, decimals: Option<u32>) -> Path {
        shorthands::to_longhands(self, decimals)
    }

    /// See [`shorthands::to_shorthands`](../shorthands/fn.to_shorthands.html).
    pub fn to_shorthands(&self, decimals: Option<u32>) -> Path {
        shorthands::to_shorthands(self, decimals)
    }

    /// See [`curves::cubics_to_quadratics`](../curves/fn.cubics_to_quadratics.html).
    pub fn to_quadratics(&self, precision: f64) -> Path {
        curves::cubics_to_quadratics(self, precision)
    }

    /// See [`curves::arcs_to_cubics`](../curves/fn.arcs_to_cubics.html).
    pub fn arcs_to_cubics(&self, accuracy: u32) -> Path {
        curves::arcs_to_cubics(self, accuracy)
    }

    /// See [`curves::quadratics_to_cubics`](../curves/fn.quadratics_to_cubics.html).
    pub fn quadratics_to_cubics(&self) -> Path {
        curves::quadratics_to_cubics(self)
    }

    /// See [`curves::lines_to_cubics`](../curves/fn.lines_to_cubics.html).
    pub fn lines_to_cubics(&self) -> Path {
        curves::lines_to_cubics(self)
    }

    /// See [`curves::parametrize_arcs`](../curves/fn.parametrize_arcs.html).
    pub fn parametrize_arcs(&self) -> Path {
        curves::parametrize_arcs(self)
    }

    /// See [`verbose::to_verbose`](../verbose/fn.to_verbose.html).
    pub fn to_verbose(&self) -> Vec<VerboseCommand> {
        verbose::to_verbose(self)
    }

    /// Applies the conversions selected by the options, see [`convert`](../convert/fn.convert.html).
    pub fn convert(&self, options: &ConversionOptions) -> Path {
        convert(self, options)
    }

    /// The `[letter, ...values]` representation of each command.
    pub fn to_array(&self) -> Vec<ArrayCommand> {
        self.commands.iter().map(ArrayCommand::from).collect()
    }

    /// Builds a path from its `[letter, ...values]` representation.
    pub fn from_array(array: &[ArrayCommand]) -> Result<Path, PathError> {
        let commands = array
            .iter()
            .map(ArrayCommand::to_command)
            .collect::<Result<Vec<_>, _>>()?;

        Path::new(commands)
    }
}

impl<'l> IntoIterator for &'l Path {
    type Item = &'l Command;
    type IntoIter = slice::Iter<'l, Command>;

    fn into_iter(self) -> slice::Iter<'l, Command> {
        self.iter()
    }
}

impl std::ops::Index<usize> for Path {
    type Output = Command;

    fn index(&self, index: usize) -> &Command {
        &self.commands[index]
    }
}

#[cfg(test)]
use crate::math::point;

#[test]
fn path_validation() {
    assert_eq!(Path::new(Vec::new()), Err(PathError::Empty));
    assert_eq!(
        Path::new(vec![Command::line_to(point(1.0, 1.0))]),
        Err(PathError::MissingMoveTo(CommandKind::LineTo))
    );

    let path = Path::new(vec![
        Command::move_to(point(1.0, 2.0)).relative(),
        Command::line_to(point(1.0, 1.0)).relative(),
    ])
    .unwrap();
    assert_eq!(path[0].letter(), 'M');
    assert_eq!(path[0].values(), &[1.0, 2.0]);
    assert_eq!(path[1].letter(), 'l');
    assert!(path.has_relative());
    assert!(!path.has_shorthands());
}

#[test]
fn sentinel() {
    let path = Path::sentinel();
    assert_eq!(path.len(), 2);
    assert_eq!(path[0].kind(), CommandKind::MoveTo);
    assert_eq!(path[1].kind(), CommandKind::LineTo);
    assert_eq!(path[1].values(), &[0.0, 0.0]);
}
