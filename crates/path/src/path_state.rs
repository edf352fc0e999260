use crate::commands::{Command, CommandKind};
use crate::math::{point, Point};

#[derive(Copy, Clone, Debug, PartialEq)]
enum LastCtrl {
    Cubic(Point),
    Quad(Point),
    None,
}

/// Represents the current state of a path while it is being traversed.
///
/// Commands are applied one at a time in either coordinate space. The state keeps the
/// absolute position of the current point, of the start of the current sub-path and of
/// the last control point (needed to resolve smooth curves).
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct PathState {
    /// The current point.
    current: Point,
    /// The first point of the current sub-path.
    first: Point,
    /// The last control point.
    last_ctrl: LastCtrl,
}

impl Default for PathState {
    fn default() -> Self {
        PathState::new()
    }
}

impl PathState {
    pub fn new() -> Self {
        PathState {
            current: point(0.0, 0.0),
            first: point(0.0, 0.0),
            last_ctrl: LastCtrl::None,
        }
    }

    /// The current position.
    pub fn current_position(&self) -> Point {
        self.current
    }

    /// The position at the start of the current sub-path.
    pub fn start_position(&self) -> Point {
        self.first
    }

    /// The first control point of a smooth cubic curve starting at the current position.
    ///
    /// This is the reflection of the last control point if the previous command was a
    /// cubic curve, and the current position otherwise.
    pub fn smooth_cubic_ctrl(&self) -> Point {
        match self.last_ctrl {
            LastCtrl::Cubic(ctrl) => self.current + (self.current - ctrl),
            _ => self.current,
        }
    }

    /// The control point of a smooth quadratic curve starting at the current position.
    pub fn smooth_quadratic_ctrl(&self) -> Point {
        match self.last_ctrl {
            LastCtrl::Quad(ctrl) => self.current + (self.current - ctrl),
            _ => self.current,
        }
    }

    /// The command in absolute coordinates.
    pub fn to_absolute(&self, command: &Command) -> Command {
        if command.is_relative() {
            command.translated(self.current.to_vector(), false)
        } else {
            command.clone()
        }
    }

    /// Moves the state past a command, relative or absolute.
    pub fn update(&mut self, command: &Command) {
        let command = self.to_absolute(command);
        let values = command.values();
        match command.kind() {
            CommandKind::MoveTo => {
                let to = command.point_at(0);
                self.current = to;
                self.first = to;
                self.last_ctrl = LastCtrl::None;
            }
            CommandKind::LineTo | CommandKind::ArcTo => {
                self.current = command.point_at(values.len() - 2);
                self.last_ctrl = LastCtrl::None;
            }
            CommandKind::HorizontalLineTo => {
                self.current.x = values[0];
                self.last_ctrl = LastCtrl::None;
            }
            CommandKind::VerticalLineTo => {
                self.current.y = values[0];
                self.last_ctrl = LastCtrl::None;
            }
            CommandKind::CubicCurveTo => {
                self.last_ctrl = LastCtrl::Cubic(command.point_at(2));
                self.current = command.point_at(4);
            }
            CommandKind::SmoothCubicCurveTo => {
                self.last_ctrl = LastCtrl::Cubic(command.point_at(0));
                self.current = command.point_at(2);
            }
            CommandKind::QuadraticCurveTo => {
                self.last_ctrl = LastCtrl::Quad(command.point_at(0));
                self.current = command.point_at(2);
            }
            CommandKind::SmoothQuadraticCurveTo => {
                self.last_ctrl = LastCtrl::Quad(self.smooth_quadratic_ctrl());
                self.current = command.point_at(0);
            }
            CommandKind::ClosePath => {
                self.current = self.first;
                self.last_ctrl = LastCtrl::None;
            }
        }
    }
}

#[test]
fn smooth_control_points() {
    let mut state = PathState::new();
    state.update(&Command::move_to(point(10.0, 10.0)));
    assert_eq!(state.smooth_cubic_ctrl(), point(10.0, 10.0));

    state.update(&Command::cubic_curve_to(
        point(10.0, 0.0),
        point(20.0, 0.0),
        point(30.0, 10.0),
    ));
    assert_eq!(state.smooth_cubic_ctrl(), point(40.0, 20.0));
    // Only cubic curves can be reflected by smooth cubic curves.
    assert_eq!(state.smooth_quadratic_ctrl(), point(30.0, 10.0));

    state.update(&Command::quadratic_curve_to(point(40.0, 0.0), point(50.0, 10.0)));
    assert_eq!(state.smooth_quadratic_ctrl(), point(60.0, 20.0));

    // The implied control point of T is reflected again.
    state.update(&Command::smooth_quadratic_curve_to(point(70.0, 10.0)));
    assert_eq!(state.smooth_quadratic_ctrl(), point(80.0, 0.0));
}

#[test]
fn relative_commands_and_close() {
    let mut state = PathState::new();
    state.update(&Command::move_to(point(10.0, 10.0)));
    state.update(&Command::line_to(point(5.0, 5.0)).relative());
    assert_eq!(state.current_position(), point(15.0, 15.0));
    state.update(&Command::horizontal_line_to(5.0).relative());
    assert_eq!(state.current_position(), point(20.0, 15.0));
    state.update(&Command::vertical_line_to(0.0));
    assert_eq!(state.current_position(), point(20.0, 0.0));
    state.update(&Command::close());
    assert_eq!(state.current_position(), point(10.0, 10.0));

    state.update(&Command::move_to(point(1.0, 1.0)).relative());
    assert_eq!(state.start_position(), point(11.0, 11.0));
}
