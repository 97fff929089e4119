use crate::coordinates::SquareCoordinates;

/// Which borders of the board a square touches
#[derive(Debug, Copy, Clone, PartialEq, Eq, Default)]
pub struct SquareOnEdge {
    up: bool,
    right: bool,
    down: bool,
    left: bool,
}

impl SquareOnEdge {
    /// ```
    /// use squares::coordinates::SquareCoordinates;
    /// use squares::edge::SquareOnEdge;
    /// let h1 = SquareOnEdge::new(SquareCoordinates::new(7, 0).unwrap());
    /// assert!(h1.right() && h1.down());
    /// assert!(!h1.up() && !h1.left());
    /// assert!(h1.is_corner());
    /// ```
    pub fn new(coordinates: SquareCoordinates) -> SquareOnEdge {
        SquareOnEdge {
            up: coordinates.y() == 7,
            right: coordinates.x() == 7,
            down: coordinates.y() == 0,
            left: coordinates.x() == 0,
        }
    }

    pub fn up(&self) -> bool {
        self.up
    }
    pub fn right(&self) -> bool {
        self.right
    }
    pub fn down(&self) -> bool {
        self.down
    }
    pub fn left(&self) -> bool {
        self.left
    }

    pub fn is_border(&self) -> bool {
        self.up || self.right || self.down || self.left
    }

    pub fn is_corner(&self) -> bool {
        (self.up || self.down) && (self.left || self.right)
    }
}

impl From<SquareCoordinates> for SquareOnEdge {
    fn from(coordinates: SquareCoordinates) -> Self {
        SquareOnEdge::new(coordinates)
    }
}
