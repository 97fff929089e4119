use crate::coordinates::SquareCoordinates;
use crate::edge::SquareOnEdge;
use crate::error::{SquareError, SquareResult};
use crate::line::SquaresLine;
use crate::name::SquareName;
use crate::piece::Piece;
use std::fmt::{Display, Formatter};
use std::str::FromStr;

/// The two ways a square can be identified
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum Identifier<'a> {
    Name(&'a str),
    Coordinates(i32, i32),
}

impl<'a> Identifier<'a> {
    /// Tells a name (`"e4"`) from a coordinate pair (`"4,3"`, `"[4, 3]"`, `"(4, 3)"`)
    /// ```
    /// use squares::square::Identifier;
    /// assert_eq!(Identifier::parse("e4"), Ok(Identifier::Name("e4")));
    /// assert_eq!(Identifier::parse("[4, 3]"), Ok(Identifier::Coordinates(4, 3)));
    /// assert!(Identifier::parse("").is_err());
    /// assert!(Identifier::parse("e4e5").is_err());
    /// ```
    pub fn parse(input: &'a str) -> SquareResult<Identifier<'a>> {
        let invalid = || SquareError::InvalidIdentifier {
            input: input.to_string(),
        };
        let trimmed = input.trim();
        if trimmed.contains(',') {
            let inner = trimmed
                .trim_start_matches(['[', '('])
                .trim_end_matches([']', ')']);
            let mut parts = inner.split(',').map(|p| p.trim().parse::<i32>());
            return match (parts.next(), parts.next(), parts.next()) {
                (Some(Ok(x)), Some(Ok(y)), None) => Ok(Identifier::Coordinates(x, y)),
                _ => Err(invalid()),
            };
        }
        if trimmed.chars().count() == 2 {
            return Ok(Identifier::Name(trimmed));
        }
        Err(invalid())
    }
}

/// A single board square.
///
/// Name and coordinates are derived from one another at construction, and
/// never change afterwards. The only mutable part is the occupancy slot.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Square<P = Piece> {
    name: SquareName,
    coordinates: SquareCoordinates,
    on_edge: SquareOnEdge,
    is_light: bool,
    piece: Option<P>,
}

impl<P> Square<P> {
    pub fn new(identifier: Identifier) -> SquareResult<Square<P>> {
        let coordinates = match identifier {
            Identifier::Name(name) => SquareName::new(name)?.coordinates(),
            Identifier::Coordinates(x, y) => SquareCoordinates::new(x, y)?,
        };
        Ok(Self::from(coordinates))
    }

    /// ```
    /// use squares::square::Square;
    /// let e4: Square = Square::from_name("e4").unwrap();
    /// assert_eq!(e4.coordinates().value(), (4, 3));
    /// assert!(e4.is_light());
    /// ```
    pub fn from_name(name: &str) -> SquareResult<Square<P>> {
        Self::new(Identifier::Name(name))
    }

    /// ```
    /// use squares::square::Square;
    /// let a1: Square = Square::from_coordinates(0, 0).unwrap();
    /// assert_eq!(a1.name(), "a1");
    /// assert!(!a1.is_light());
    /// assert!(a1.on_edge().is_corner());
    /// ```
    pub fn from_coordinates(x: i32, y: i32) -> SquareResult<Square<P>> {
        Self::new(Identifier::Coordinates(x, y))
    }

    pub fn coordinates_to_name(x: i32, y: i32) -> SquareResult<SquareName> {
        Ok(SquareCoordinates::new(x, y)?.name())
    }

    pub fn name(&self) -> SquareName {
        self.name
    }

    pub fn coordinates(&self) -> SquareCoordinates {
        self.coordinates
    }

    pub fn on_edge(&self) -> SquareOnEdge {
        self.on_edge
    }

    pub fn is_light(&self) -> bool {
        self.is_light
    }

    pub fn piece(&self) -> Option<&P> {
        self.piece.as_ref()
    }

    pub fn is_occupied(&self) -> bool {
        self.piece.is_some()
    }

    /// Puts a piece on the square, returning whatever was there before
    pub fn place_piece(&mut self, piece: P) -> Option<P> {
        self.piece.replace(piece)
    }

    /// Clears the square, returning the piece that has been removed if any
    pub fn remove_piece(&mut self) -> Option<P> {
        self.piece.take()
    }

    pub fn the_same<Q>(&self, other: &Square<Q>) -> bool {
        self.name == other.name
    }

    pub fn on_file(&self, file: char) -> bool {
        self.name.symbol() == file
    }

    pub fn on_rank(&self, rank: char) -> bool {
        self.name.number() == rank
    }

    /// Names of the squares between this one and `other`, see `SquaresLine`
    pub fn between_squares_names(
        &self,
        other: &Square<P>,
        include_this: bool,
        include_other: bool,
    ) -> SquareResult<Vec<SquareName>> {
        Ok(SquaresLine::new(self, other)?.between_squares_names(include_this, include_other))
    }

    pub fn between_squares_count(
        &self,
        other: &Square<P>,
        include_this: bool,
        include_other: bool,
    ) -> SquareResult<usize> {
        Ok(SquaresLine::new(self, other)?.between_squares_count(include_this, include_other))
    }
}

impl<P> From<SquareCoordinates> for Square<P> {
    fn from(coordinates: SquareCoordinates) -> Self {
        let x_even = coordinates.x() % 2 == 0;
        let y_even = coordinates.y() % 2 == 0;
        Square {
            name: coordinates.name(),
            coordinates,
            on_edge: SquareOnEdge::new(coordinates),
            is_light: x_even ^ y_even,
            piece: None,
        }
    }
}

impl<P> From<SquareName> for Square<P> {
    fn from(name: SquareName) -> Self {
        Self::from(name.coordinates())
    }
}

impl<P> FromStr for Square<P> {
    type Err = SquareError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Square::new(Identifier::parse(s)?)
    }
}

impl<P> Display for Square<P> {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.name)
    }
}
