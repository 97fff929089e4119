use crate::error::{Axis, SquareError, SquareResult};
use crate::name::SquareName;
use std::fmt::{Display, Formatter};

/// Zero based square coordinates, `x` going along ranks and `y` along files.
/// ```text
///   _ _ _ _ _ _ _ _
/// 7|_|_|_|_|_|_|_|_|
/// 6|_|_|_|_|_|_|_|_|
/// 5|_|_|_|_|_|_|_|_|
/// 4|_|_|_|_|_|_|_|_|
/// 3|_|_|_|_|_|_|_|_|
/// 2|_|_|_|_|_|_|_|_|
/// 1|_|_|_|_|_|_|_|_|
/// 0|_|_|_|_|_|_|_|_|
///   0 1 2 3 4 5 6 7
/// ```
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct SquareCoordinates {
    x: i8,
    y: i8,
}

impl SquareCoordinates {
    pub const MIN: i32 = 0;
    pub const MAX: i32 = 7;

    /// Checks whether a single axis value lies on the board
    /// ```
    /// use squares::coordinates::SquareCoordinates;
    /// assert!(SquareCoordinates::is_valid_coordinate(0));
    /// assert!(SquareCoordinates::is_valid_coordinate(7));
    /// assert!(!SquareCoordinates::is_valid_coordinate(-1));
    /// assert!(!SquareCoordinates::is_valid_coordinate(8));
    /// ```
    #[inline(always)]
    pub fn is_valid_coordinate(value: i32) -> bool {
        (Self::MIN..=Self::MAX).contains(&value)
    }

    /// Cheap filter for candidate destinations, no allocation of a square needed
    #[inline(always)]
    pub fn are_valid(x: i32, y: i32) -> bool {
        Self::is_valid_coordinate(x) && Self::is_valid_coordinate(y)
    }

    pub fn new(x: i32, y: i32) -> SquareResult<SquareCoordinates> {
        if !Self::is_valid_coordinate(x) {
            return Err(SquareError::InvalidCoordinate {
                axis: Axis::X,
                value: x,
            });
        }
        if !Self::is_valid_coordinate(y) {
            return Err(SquareError::InvalidCoordinate {
                axis: Axis::Y,
                value: y,
            });
        }
        Ok(Self::from_valid(x as i8, y as i8))
    }

    pub(crate) fn from_valid(x: i8, y: i8) -> SquareCoordinates {
        debug_assert!(Self::are_valid(x as i32, y as i32));
        SquareCoordinates { x, y }
    }

    /// Builds coordinates back from a board index (`8 * y + x`)
    /// ```
    /// use squares::coordinates::SquareCoordinates;
    /// let c = SquareCoordinates::from_index(28).unwrap();
    /// assert_eq!((c.x(), c.y()), (4, 3));
    /// assert_eq!(SquareCoordinates::from_index(64), None);
    /// ```
    pub fn from_index(index: usize) -> Option<SquareCoordinates> {
        if index >= 64 {
            return None;
        }
        Some(Self::from_valid((index % 8) as i8, (index / 8) as i8))
    }

    pub fn x(&self) -> i8 {
        self.x
    }

    pub fn y(&self) -> i8 {
        self.y
    }

    pub fn value(&self) -> (i8, i8) {
        (self.x, self.y)
    }

    /// a1 is 0, h1 is 7, a8 is 56 and h8 is 63
    pub fn index(&self) -> usize {
        8 * self.y as usize + self.x as usize
    }

    pub fn name(&self) -> SquareName {
        SquareName::from_indices(self.x as usize, self.y as usize)
    }

    /// Steps away from these coordinates, `None` when the step leaves the board
    /// ```
    /// use squares::coordinates::SquareCoordinates;
    /// let e4 = SquareCoordinates::new(4, 3).unwrap();
    /// assert_eq!(e4.offset(1, 2), SquareCoordinates::new(5, 5).ok());
    /// assert_eq!(e4.offset(4, 0), None);
    /// ```
    pub fn offset(&self, dx: i8, dy: i8) -> Option<SquareCoordinates> {
        let x = self.x as i32 + dx as i32;
        let y = self.y as i32 + dy as i32;
        if Self::are_valid(x, y) {
            Some(Self::from_valid(x as i8, y as i8))
        } else {
            None
        }
    }
}

impl Display for SquareCoordinates {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "[{}, {}]", self.x, self.y)
    }
}

impl TryFrom<(i32, i32)> for SquareCoordinates {
    type Error = SquareError;

    fn try_from((x, y): (i32, i32)) -> Result<Self, Self::Error> {
        SquareCoordinates::new(x, y)
    }
}
