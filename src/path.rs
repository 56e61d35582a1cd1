//! 2D path representation and building.
//!
//! A trimmed-down SVG-like path model: straight segments, cubic Bezier
//! curves, and closed subpaths. This is all the badge outline needs.

use glam::Vec2;

/// A single command in a path.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum PathCommand {
    /// Move to a point without drawing.
    MoveTo(Vec2),
    /// Draw a line to a point.
    LineTo(Vec2),
    /// Cubic Bezier curve to a point with two control points.
    CubicTo {
        /// First control point.
        control1: Vec2,
        /// Second control point.
        control2: Vec2,
        /// End point.
        to: Vec2,
    },
    /// Close the current subpath back to its starting point.
    Close,
}

/// A 2D path consisting of path commands.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Path {
    commands: Vec<PathCommand>,
}

impl Path {
    /// Creates an empty path.
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns the path commands.
    pub fn commands(&self) -> &[PathCommand] {
        &self.commands
    }

    /// Returns true if the path is empty.
    pub fn is_empty(&self) -> bool {
        self.commands.is_empty()
    }

    /// Returns the number of commands.
    pub fn len(&self) -> usize {
        self.commands.len()
    }

    /// Returns true if the path ends with an explicit close.
    pub fn is_closed(&self) -> bool {
        matches!(self.commands.last(), Some(PathCommand::Close))
    }

    /// Returns the first on-curve point, if any.
    pub fn start_point(&self) -> Option<Vec2> {
        self.commands.iter().find_map(|cmd| match *cmd {
            PathCommand::MoveTo(p) | PathCommand::LineTo(p) => Some(p),
            PathCommand::CubicTo { to, .. } => Some(to),
            PathCommand::Close => None,
        })
    }

    /// Returns the last on-curve point before any trailing close, if any.
    pub fn end_point(&self) -> Option<Vec2> {
        self.commands.iter().rev().find_map(|cmd| match *cmd {
            PathCommand::MoveTo(p) | PathCommand::LineTo(p) => Some(p),
            PathCommand::CubicTo { to, .. } => Some(to),
            PathCommand::Close => None,
        })
    }
}

/// Builder for constructing paths.
#[derive(Debug, Clone, Default)]
pub struct PathBuilder {
    path: Path,
    current: Vec2,
    start: Vec2,
}

impl PathBuilder {
    /// Creates a new path builder.
    pub fn new() -> Self {
        Self::default()
    }

    /// Moves to a point without drawing.
    pub fn move_to(mut self, to: Vec2) -> Self {
        self.path.commands.push(PathCommand::MoveTo(to));
        self.current = to;
        self.start = to;
        self
    }

    /// Draws a line to a point.
    pub fn line_to(mut self, to: Vec2) -> Self {
        self.path.commands.push(PathCommand::LineTo(to));
        self.current = to;
        self
    }

    /// Draws a cubic Bezier curve.
    pub fn cubic_to(mut self, control1: Vec2, control2: Vec2, to: Vec2) -> Self {
        self.path.commands.push(PathCommand::CubicTo {
            control1,
            control2,
            to,
        });
        self.current = to;
        self
    }

    /// Closes the current subpath.
    pub fn close(mut self) -> Self {
        self.path.commands.push(PathCommand::Close);
        self.current = self.start;
        self
    }

    /// Builds the final path.
    pub fn build(self) -> Path {
        self.path
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_path_builder() {
        let path = PathBuilder::new()
            .move_to(Vec2::ZERO)
            .line_to(Vec2::new(1.0, 0.0))
            .line_to(Vec2::new(1.0, 1.0))
            .close()
            .build();

        assert_eq!(path.len(), 4);
        assert!(path.is_closed());
    }

    #[test]
    fn test_open_path() {
        let path = PathBuilder::new()
            .move_to(Vec2::ZERO)
            .line_to(Vec2::new(1.0, 0.0))
            .build();

        assert!(!path.is_closed());
        assert_eq!(path.start_point(), Some(Vec2::ZERO));
        assert_eq!(path.end_point(), Some(Vec2::new(1.0, 0.0)));
    }

    #[test]
    fn test_end_point_skips_close() {
        let end = Vec2::new(3.0, 4.0);
        let path = PathBuilder::new()
            .move_to(Vec2::ZERO)
            .cubic_to(Vec2::new(1.0, 0.0), Vec2::new(2.0, 0.0), end)
            .close()
            .build();

        assert_eq!(path.end_point(), Some(end));
    }
}
