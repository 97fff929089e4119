use crate::name::SquareName;
use std::fmt::{Display, Formatter};

/// Which half of a square name failed validation
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum NameComponent {
    Symbol,
    Number,
}

impl Display for NameComponent {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "{}",
            match self {
                NameComponent::Symbol => "symbol",
                NameComponent::Number => "number",
            }
        )
    }
}

#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum Axis {
    X,
    Y,
}

impl Display for Axis {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", if self == &Axis::X { "x" } else { "y" })
    }
}

/// Every way building or relating squares can fail.
/// All of them are contract violations on the caller's side, none is transient.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SquareError {
    /// A file letter outside `a..h` or a rank digit outside `1..8`
    InvalidSquareName {
        found: Option<char>,
        component: NameComponent,
    },
    /// An axis value outside `[0, 7]`
    InvalidCoordinate { axis: Axis, value: i32 },
    /// Two squares sharing no rank, file or diagonal
    NotOnSameLine { start: SquareName, end: SquareName },
    /// Neither a square name nor a coordinate pair
    InvalidIdentifier { input: String },
}

pub type SquareResult<T> = Result<T, SquareError>;

impl Display for SquareError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            SquareError::InvalidSquareName {
                found: Some(c),
                component,
            } => write!(f, "wrong {} ({}) passed", component, c),
            SquareError::InvalidSquareName {
                found: None,
                component,
            } => write!(f, "missing {} in square name", component),
            SquareError::InvalidCoordinate { axis, value } => {
                write!(f, "wrong {} value ({}) passed", axis, value)
            }
            SquareError::NotOnSameLine { start, end } => write!(
                f,
                "squares {} and {} aren't located on the same line (horizontal, vertical, diagonal)",
                start, end
            ),
            SquareError::InvalidIdentifier { input } => write!(
                f,
                "\"{}\" is neither a square name nor a coordinate pair",
                input
            ),
        }
    }
}

impl std::error::Error for SquareError {}
