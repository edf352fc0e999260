//! Conversions between absolute and relative coordinates.
//!
//! When rounding is requested, the values of each command are rounded before the
//! conversion (so that already rounded data does not drift) and after it.

use crate::commands::Command;
use crate::path::Path;
use crate::path_state::PathState;

/// Converts every command to absolute coordinates.
///
/// Absolute commands are left untouched, which makes this conversion idempotent.
pub fn to_absolute(path: &Path, decimals: Option<u32>) -> Path {
    let mut state = PathState::new();
    let commands = path
        .iter()
        .map(|cmd| {
            let cmd = cmd.maybe_rounded(decimals);
            let absolute = state.to_absolute(&cmd).maybe_rounded(decimals);
            state.update(&absolute);

            absolute
        })
        .collect();

    Path::from_commands(commands)
}

/// Converts every command but the initial move-to to relative coordinates.
pub fn to_relative(path: &Path, decimals: Option<u32>) -> Path {
    let mut state = PathState::new();
    let commands = path
        .iter()
        .enumerate()
        .map(|(idx, cmd)| {
            let cmd = cmd.maybe_rounded(decimals);
            let absolute = state.to_absolute(&cmd);
            let relative = if idx == 0 {
                absolute.clone()
            } else if cmd.is_relative() {
                cmd
            } else {
                let origin = state.current_position().to_vector();
                absolute.translated(-origin, true).maybe_rounded(decimals)
            };
            state.update(&absolute);

            relative
        })
        .collect();

    Path::from_commands(commands)
}

/// Rounds every value of the path to `decimals` fractional digits.
pub fn round(path: &Path, decimals: u32) -> Path {
    Path::from_commands(path.iter().map(|cmd| cmd.rounded(decimals)).collect())
}

/// Rounds every value of the path if `decimals` is set.
pub(crate) fn maybe_round(path: Path, decimals: Option<u32>) -> Path {
    match decimals {
        Some(decimals) => round(&path, decimals),
        None => path,
    }
}

#[cfg(test)]
fn path(commands: Vec<Command>) -> Path {
    Path::new(commands).unwrap()
}

#[cfg(test)]
use crate::math::{point, vector};
#[cfg(test)]
use crate::ArcFlags;

#[test]
fn relative_to_absolute() {
    let input = path(vec![
        Command::move_to(point(10.0, 10.0)),
        Command::line_to(point(10.0, 0.0)).relative(),
        Command::horizontal_line_to(5.0).relative(),
        Command::vertical_line_to(-10.0).relative(),
        Command::cubic_curve_to(point(1.0, 1.0), point(2.0, 2.0), point(3.0, 3.0)).relative(),
        Command::arc_to(vector(5.0, 5.0), 0.0, ArcFlags::default(), point(10.0, 0.0)).relative(),
        Command::close().relative(),
        Command::move_to(point(1.0, 1.0)).relative(),
        Command::line_to(point(1.0, 1.0)).relative(),
    ]);

    let abs = to_absolute(&input, None);
    let expected = path(vec![
        Command::move_to(point(10.0, 10.0)),
        Command::line_to(point(20.0, 10.0)),
        Command::horizontal_line_to(25.0),
        Command::vertical_line_to(0.0),
        Command::cubic_curve_to(point(26.0, 1.0), point(27.0, 2.0), point(28.0, 3.0)),
        Command::arc_to(vector(5.0, 5.0), 0.0, ArcFlags::default(), point(38.0, 3.0)),
        Command::close(),
        Command::move_to(point(11.0, 11.0)),
        Command::line_to(point(12.0, 12.0)),
    ]);
    assert_eq!(abs, expected);

    // Idempotent.
    assert_eq!(to_absolute(&abs, None), abs);
}

#[test]
fn absolute_to_relative() {
    let input = path(vec![
        Command::move_to(point(10.0, 10.0)),
        Command::line_to(point(20.0, 10.0)),
        Command::horizontal_line_to(25.0),
        Command::vertical_line_to(0.0),
        Command::close(),
        Command::line_to(point(0.0, 0.0)),
    ]);

    let rel = to_relative(&input, None);
    let expected = path(vec![
        Command::move_to(point(10.0, 10.0)),
        Command::line_to(point(10.0, 0.0)).relative(),
        Command::horizontal_line_to(5.0).relative(),
        Command::vertical_line_to(-10.0).relative(),
        Command::close().relative(),
        Command::line_to(point(-10.0, -10.0)).relative(),
    ]);
    assert_eq!(rel, expected);

    assert_eq!(to_absolute(&rel, None), input);
}

#[test]
fn rounding_before_and_after() {
    let input = path(vec![
        Command::move_to(point(0.1234, 0.5678)),
        Command::line_to(point(1.0004, 2.0004)),
        Command::line_to(point(3.0004, 4.0004)),
    ]);

    let rel = to_relative(&input, Some(2));
    assert_eq!(rel[0].values(), &[0.12, 0.57]);
    assert_eq!(rel[1].values(), &[0.88, 1.43]);
    assert_eq!(rel[2].values(), &[2.0, 2.0]);

    let rounded = round(&input, 1);
    assert_eq!(rounded[0].values(), &[0.1, 0.6]);
    assert_eq!(rounded[2].values(), &[3.0, 4.0]);
}
