use crate::coordinates::SquareCoordinates;
use crate::error::{SquareError, SquareResult};
use crate::name::SquareName;
use crate::square::Square;

/// Unit step from the start square towards the end square, per axis in `{-1, 0, 1}`.
/// Axes are independent: going up and to the left is `(-1, 1)`.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Default)]
pub struct Direction {
    pub x: i8,
    pub y: i8,
}

#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum LineKind {
    /// Start and end are the same square
    Point,
    File,
    Rank,
    Diagonal,
}

/// Line between two squares sharing a rank, a file or a diagonal.
///
/// Built for a single query and dropped afterwards, the walk is at most 6 steps.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SquaresLine {
    start: SquareCoordinates,
    end: SquareCoordinates,
    dx: i8,
    dy: i8,
    direction: Direction,
    between_squares_names: Vec<SquareName>,
}

impl SquaresLine {
    pub fn new<P>(start: &Square<P>, end: &Square<P>) -> SquareResult<SquaresLine> {
        Self::between(start.coordinates(), end.coordinates())
    }

    /// ```
    /// use squares::coordinates::SquareCoordinates;
    /// use squares::line::SquaresLine;
    /// let a1 = SquareCoordinates::new(0, 0).unwrap();
    /// let a4 = SquareCoordinates::new(0, 3).unwrap();
    /// let line = SquaresLine::between(a1, a4).unwrap();
    /// assert_eq!(line.between_squares_names(false, false), ["a2", "a3"]);
    /// assert_eq!(line.between_squares_names(true, true), ["a2", "a3", "a1", "a4"]);
    /// ```
    pub fn between(start: SquareCoordinates, end: SquareCoordinates) -> SquareResult<SquaresLine> {
        let dx = (end.x() - start.x()).abs();
        let dy = (end.y() - start.y()).abs();
        if !Self::colinear_offsets(dx, dy) {
            return Err(SquareError::NotOnSameLine {
                start: start.name(),
                end: end.name(),
            });
        }
        let direction = Direction {
            x: (end.x() - start.x()).signum(),
            y: (end.y() - start.y()).signum(),
        };

        let distance = dx.max(dy);
        let mut between_squares_names = Vec::with_capacity(distance.max(1) as usize - 1);
        for i in 1..distance {
            // strictly between two board squares, so on the board as well
            let step = SquareCoordinates::from_valid(
                start.x() + i * direction.x,
                start.y() + i * direction.y,
            );
            between_squares_names.push(step.name());
        }

        Ok(SquaresLine {
            start,
            end,
            dx,
            dy,
            direction,
            between_squares_names,
        })
    }

    /// Probe for callers filtering candidate pairs before asking for a line
    /// ```
    /// use squares::coordinates::SquareCoordinates;
    /// use squares::line::SquaresLine;
    /// let c = |x, y| SquareCoordinates::new(x, y).unwrap();
    /// assert!(SquaresLine::are_colinear(c(0, 0), c(7, 7)));
    /// assert!(SquaresLine::are_colinear(c(4, 3), c(4, 3)));
    /// assert!(!SquaresLine::are_colinear(c(1, 0), c(2, 2)));
    /// ```
    pub fn are_colinear(start: SquareCoordinates, end: SquareCoordinates) -> bool {
        Self::colinear_offsets(
            (end.x() - start.x()).abs(),
            (end.y() - start.y()).abs(),
        )
    }

    #[inline(always)]
    fn colinear_offsets(dx: i8, dy: i8) -> bool {
        dx == dy || dx == 0 || dy == 0
    }

    pub fn start(&self) -> SquareName {
        self.start.name()
    }

    pub fn end(&self) -> SquareName {
        self.end.name()
    }

    pub fn dx(&self) -> i8 {
        self.dx
    }

    pub fn dy(&self) -> i8 {
        self.dy
    }

    pub fn direction(&self) -> Direction {
        self.direction
    }

    /// King steps from start to end
    pub fn distance(&self) -> i8 {
        self.dx.max(self.dy)
    }

    pub fn kind(&self) -> LineKind {
        match (self.dx, self.dy) {
            (0, 0) => LineKind::Point,
            (0, _) => LineKind::File,
            (_, 0) => LineKind::Rank,
            _ => LineKind::Diagonal,
        }
    }

    /// Squares strictly between start and end, nearest to start first.
    /// The endpoints, when asked for, come after the interior: start, then end.
    pub fn between_squares_names(&self, include_start: bool, include_end: bool) -> Vec<SquareName> {
        let mut names = self.between_squares_names.clone();
        if include_start {
            names.push(self.start.name());
        }
        if include_end {
            names.push(self.end.name());
        }
        names
    }

    pub fn between_squares_count(&self, include_start: bool, include_end: bool) -> usize {
        self.between_squares_names.len() + include_start as usize + include_end as usize
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn line(start: &str, end: &str) -> SquareResult<SquaresLine> {
        SquaresLine::between(
            start.parse::<SquareName>()?.coordinates(),
            end.parse::<SquareName>()?.coordinates(),
        )
    }

    #[test]
    fn long_diagonal() {
        let l = line("a1", "h8").unwrap();
        assert_eq!(
            l.between_squares_names(false, false),
            ["b2", "c3", "d4", "e5", "f6", "g7"]
        );
        assert_eq!(l.between_squares_count(false, false), 6);
        assert_eq!(l.direction(), Direction { x: 1, y: 1 });
        assert_eq!(l.kind(), LineKind::Diagonal);
    }

    #[test]
    fn file_and_rank() {
        let l = line("a1", "a8").unwrap();
        assert_eq!(
            l.between_squares_names(false, false),
            ["a2", "a3", "a4", "a5", "a6", "a7"]
        );
        assert_eq!(l.kind(), LineKind::File);

        let l = line("h5", "c5").unwrap();
        assert_eq!(l.between_squares_names(false, false), ["g5", "f5", "e5", "d5"]);
        assert_eq!(l.direction(), Direction { x: -1, y: 0 });
        assert_eq!(l.kind(), LineKind::Rank);
    }

    #[test]
    fn interior_is_ordered_from_start() {
        let l = line("h8", "a1").unwrap();
        assert_eq!(
            l.between_squares_names(false, false),
            ["g7", "f6", "e5", "d4", "c3", "b2"]
        );
        // up and to the left
        let l = line("f2", "b6").unwrap();
        assert_eq!(l.direction(), Direction { x: -1, y: 1 });
        assert_eq!(l.between_squares_names(false, false), ["e3", "d4", "c5"]);
    }

    #[test]
    fn not_on_the_same_line() {
        assert_eq!(
            line("a1", "h2"),
            Err(SquareError::NotOnSameLine {
                start: "a1".parse().unwrap(),
                end: "h2".parse().unwrap()
            })
        );
        assert!(line("e4", "f6").is_err());
        assert!(line("b1", "c3").is_err());
    }

    #[test]
    fn endpoints_come_after_interior() {
        let l = line("a1", "a4").unwrap();
        assert_eq!(l.between_squares_names(true, true), ["a2", "a3", "a1", "a4"]);
        assert_eq!(l.between_squares_names(true, false), ["a2", "a3", "a1"]);
        assert_eq!(l.between_squares_names(false, true), ["a2", "a3", "a4"]);
        assert_eq!(l.between_squares_count(true, true), 4);
        assert_eq!(l.between_squares_count(false, true), 3);
    }

    #[test]
    fn degenerate_pairs() {
        let same = line("e4", "e4").unwrap();
        assert_eq!(same.between_squares_count(false, false), 0);
        assert!(same.between_squares_names(false, false).is_empty());
        assert_eq!(same.direction(), Direction::default());
        assert_eq!(same.kind(), LineKind::Point);
        assert_eq!(same.between_squares_names(true, true), ["e4", "e4"]);

        for neighbour in ["e5", "f5", "f4", "f3", "e3", "d3", "d4", "d5"] {
            let adjacent = line("e4", neighbour).unwrap();
            assert_eq!(adjacent.between_squares_count(false, false), 0);
            assert_eq!(adjacent.distance(), 1);
        }
    }

    #[test]
    fn count_is_symmetric() {
        for a in 0..64 {
            for b in 0..64 {
                let start = SquareCoordinates::from_index(a).unwrap();
                let end = SquareCoordinates::from_index(b).unwrap();
                match (SquaresLine::between(start, end), SquaresLine::between(end, start)) {
                    (Ok(forward), Ok(backward)) => {
                        assert_eq!(
                            forward.between_squares_count(false, false),
                            backward.between_squares_count(false, false)
                        );
                        let mut reversed = backward.between_squares_names(false, false);
                        reversed.reverse();
                        assert_eq!(forward.between_squares_names(false, false), reversed);
                    }
                    (Err(_), Err(_)) => assert!(!SquaresLine::are_colinear(start, end)),
                    _ => panic!("colinearity is not symmetric for {} {}", start, end),
                }
            }
        }
    }
}
