//! Monotone robot paths on a bounded grid.

use super::total;
use crate::builder::BuildError;
use crate::core::{into_choice_vecs, Problem};
use crate::engine::Enumerator;
use serde::{Deserialize, Serialize};
use std::convert::Infallible;
use std::fmt;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Point {
    pub x: i64,
    pub y: i64,
}

impl Point {
    pub fn new(x: i64, y: i64) -> Self {
        Self { x, y }
    }

    /// The neighbouring point, or `None` when it is not representable.
    fn step(self, direction: Direction) -> Option<Self> {
        match direction {
            Direction::Down => self.y.checked_sub(1).map(|y| Self::new(self.x, y)),
            Direction::Right => self.x.checked_add(1).map(|x| Self::new(x, self.y)),
        }
    }
}

impl fmt::Display for Point {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.x, self.y)
    }
}

impl From<(i64, i64)> for Point {
    fn from((x, y): (i64, i64)) -> Self {
        Self::new(x, y)
    }
}

/// The two moves a robot can make. Down is tried first.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Direction {
    Down,
    Right,
}

impl Direction {
    pub const ALL: [Direction; 2] = [Direction::Down, Direction::Right];
}

impl fmt::Display for Direction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Down => write!(f, "down"),
            Self::Right => write!(f, "right"),
        }
    }
}

/// A move together with the point it lands on.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Move {
    pub direction: Direction,
    pub to: Point,
}

impl fmt::Display for Move {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {}", self.direction, self.to)
    }
}

/// Inclusive bounds `[0, max_x] x [0, max_y]`.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Grid {
    pub max_x: i64,
    pub max_y: i64,
}

impl Default for Grid {
    fn default() -> Self {
        Self {
            max_x: 10,
            max_y: 10,
        }
    }
}

impl Grid {
    pub fn new(max_x: i64, max_y: i64) -> Result<Self, BuildError> {
        if max_x < 0 || max_y < 0 {
            return Err(BuildError::NegativeGridExtent { max_x, max_y });
        }
        Ok(Self { max_x, max_y })
    }

    pub fn contains(&self, point: Point) -> bool {
        (0..=self.max_x).contains(&point.x) && (0..=self.max_y).contains(&point.y)
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Position {
    pub current: Point,
    pub target: Point,
}

impl Position {
    pub fn new(current: impl Into<Point>, target: impl Into<Point>) -> Self {
        Self {
            current: current.into(),
            target: target.into(),
        }
    }
}

/// Paths from `current` to `target` moving only down (y - 1) or right
/// (x + 1). Reaching the target is checked before leaving the grid.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct RobotPath {
    grid: Grid,
}

impl RobotPath {
    pub fn new(grid: Grid) -> Self {
        Self { grid }
    }

    pub fn grid(&self) -> Grid {
        self.grid
    }
}

impl Problem for RobotPath {
    type State = Position;
    type Choice = Move;
    type Error = Infallible;

    fn name(&self) -> &str {
        "robot_path"
    }

    fn is_goal(&self, position: &Position) -> bool {
        position.current == position.target
    }

    fn is_infeasible(&self, position: &Position) -> bool {
        !self.grid.contains(position.current)
    }

    fn choices(&self, position: &Position) -> Vec<Move> {
        // A step past i64 bounds leaves any grid, so it is never offered.
        Direction::ALL
            .iter()
            .filter_map(|&direction| {
                position
                    .current
                    .step(direction)
                    .map(|to| Move { direction, to })
            })
            .collect()
    }

    fn transition(&self, position: &Position, step: &Move) -> Position {
        Position {
            current: step.to,
            target: position.target,
        }
    }

    fn label(&self, _position: &Position, step: &Move) -> String {
        step.to_string()
    }

    fn terminal_label(&self, position: &Position) -> String {
        position.current.to_string()
    }
}

/// Every monotone path on the default 10 by 10 grid.
///
/// ```rust
/// use exhaust::problems::robot_path;
///
/// let paths = robot_path((0, 1), (1, 0));
///
/// assert_eq!(paths.len(), 2);
/// assert_eq!(paths[0][0].to_string(), "down (0, 0)");
/// assert!(robot_path((2, 2), (2, 2))[0].is_empty());
/// assert!(robot_path((2, 2), (1, 2)).is_empty());
/// ```
pub fn robot_path(from: impl Into<Point>, to: impl Into<Point>) -> Vec<Vec<Move>> {
    robot_path_within(Grid::default(), from, to)
}

/// Every monotone path from `from` to `to` inside `grid`.
pub fn robot_path_within(
    grid: Grid,
    from: impl Into<Point>,
    to: impl Into<Point>,
) -> Vec<Vec<Move>> {
    let problem = RobotPath::new(grid);
    into_choice_vecs(total(
        Enumerator::new(&problem).enumerate(Position::new(from, to)),
    ))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn binomial(n: u64, k: u64) -> u64 {
        (1..=k).fold(1, |acc, i| acc * (n + 1 - i) / i)
    }

    #[test]
    fn paths_between_sample_points() {
        let paths = robot_path((3, 7), (6, 4));

        assert_eq!(paths.len() as u64, binomial(6, 3));
        assert!(paths.iter().all(|path| path.len() == 6));
        assert!(paths
            .iter()
            .all(|path| path.last().map(|m| m.to) == Some(Point::new(6, 4))));
    }

    #[test]
    fn down_is_tried_before_right() {
        let paths = robot_path((0, 1), (1, 0));
        let directions: Vec<Vec<Direction>> = paths
            .iter()
            .map(|path| path.iter().map(|m| m.direction).collect())
            .collect();

        assert_eq!(
            directions,
            vec![
                vec![Direction::Down, Direction::Right],
                vec![Direction::Right, Direction::Down],
            ]
        );
    }

    #[test]
    fn same_point_yields_empty_path() {
        assert_eq!(robot_path((4, 4), (4, 4)), vec![Vec::<Move>::new()]);
    }

    #[test]
    fn unreachable_target_yields_nothing() {
        assert!(robot_path((5, 5), (4, 5)).is_empty());
        assert!(robot_path((5, 5), (5, 6)).is_empty());
    }

    #[test]
    fn target_outside_grid_is_unreachable() {
        let grid = Grid::new(3, 3).unwrap();
        assert!(robot_path_within(grid, (0, 3), (5, 0)).is_empty());
    }

    #[test]
    fn grid_at_integer_limit_does_not_overflow() {
        let grid = Grid::new(i64::MAX, 0).unwrap();

        assert!(robot_path_within(grid, (i64::MAX, 0), (0, 0)).is_empty());
        assert_eq!(
            robot_path_within(grid, (i64::MAX, 0), (i64::MAX, 0)),
            vec![Vec::<Move>::new()]
        );

        let last = robot_path_within(grid, (i64::MAX - 1, 0), (i64::MAX, 0));
        assert_eq!(
            last,
            vec![vec![Move {
                direction: Direction::Right,
                to: Point::new(i64::MAX, 0),
            }]]
        );
    }

    #[test]
    fn grid_bounds_are_inclusive() {
        let grid = Grid::default();

        assert!(grid.contains(Point::new(0, 0)));
        assert!(grid.contains(Point::new(10, 10)));
        assert!(!grid.contains(Point::new(11, 0)));
        assert!(!grid.contains(Point::new(0, -1)));
    }

    #[test]
    fn negative_grid_is_rejected() {
        assert_eq!(
            Grid::new(-1, 4),
            Err(BuildError::NegativeGridExtent { max_x: -1, max_y: 4 })
        );
    }

    #[test]
    fn moves_display_direction_and_point() {
        let step = Move {
            direction: Direction::Down,
            to: Point::new(3, 6),
        };
        assert_eq!(step.to_string(), "down (3, 6)");
    }
}
