use crate::coordinates::SquareCoordinates;
use crate::error::{NameComponent, SquareError, SquareResult};
use std::fmt::{Display, Formatter};
use std::str::FromStr;

/// Human readable square name, a file letter followed by a rank digit.
/// ```text
///   _ _ _ _ _ _ _ _
/// 8|_|_|_|_|_|_|_|_|
/// 7|_|_|_|_|_|_|_|_|
/// 6|_|_|_|_|_|_|_|_|
/// 5|_|_|_|_|_|_|_|_|
/// 4|_|_|_|_|_|_|_|_|
/// 3|_|_|_|_|_|_|_|_|
/// 2|_|_|_|_|_|_|_|_|
/// 1|_|_|_|_|_|_|_|_|
///   a b c d e f g h
/// ```
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash)]
pub struct SquareName {
    symbol: char,
    number: char,
}

impl SquareName {
    pub const SYMBOLS: [char; 8] = ['a', 'b', 'c', 'd', 'e', 'f', 'g', 'h'];
    pub const NUMBERS: [char; 8] = ['1', '2', '3', '4', '5', '6', '7', '8'];

    /// Validates a two characters name
    /// ```
    /// use squares::name::SquareName;
    /// let name = SquareName::new("e4").unwrap();
    /// assert_eq!(name.symbol(), 'e');
    /// assert_eq!(name.number(), '4');
    /// assert!(SquareName::new("i4").is_err());
    /// assert!(SquareName::new("e9").is_err());
    /// assert!(SquareName::new("e44").is_err());
    /// ```
    pub fn new(name: &str) -> SquareResult<SquareName> {
        let mut chars = name.chars();
        let symbol = match chars.next() {
            Some(c) if Self::SYMBOLS.contains(&c) => c,
            found => {
                return Err(SquareError::InvalidSquareName {
                    found,
                    component: NameComponent::Symbol,
                })
            }
        };
        let number = match chars.next() {
            Some(c) if Self::NUMBERS.contains(&c) => c,
            found => {
                return Err(SquareError::InvalidSquareName {
                    found,
                    component: NameComponent::Number,
                })
            }
        };
        if chars.next().is_some() {
            return Err(SquareError::InvalidIdentifier {
                input: name.to_string(),
            });
        }
        Ok(SquareName { symbol, number })
    }

    /// Both parts are expected to be in `[0, 7]`, callers go through
    /// `SquareCoordinates` which already checked them
    pub(crate) fn from_indices(x: usize, y: usize) -> SquareName {
        SquareName {
            symbol: Self::SYMBOLS[x],
            number: Self::NUMBERS[y],
        }
    }

    pub fn symbol(&self) -> char {
        self.symbol
    }

    pub fn number(&self) -> char {
        self.number
    }

    pub fn value(&self) -> String {
        self.to_string()
    }

    /// The exact inverse of `SquareCoordinates::name`
    pub fn coordinates(&self) -> SquareCoordinates {
        SquareCoordinates::from_valid(
            (self.symbol as u8 - b'a') as i8,
            (self.number as u8 - b'1') as i8,
        )
    }
}

impl Display for SquareName {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}{}", self.symbol, self.number)
    }
}

impl FromStr for SquareName {
    type Err = SquareError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        SquareName::new(s)
    }
}

impl PartialEq<str> for SquareName {
    fn eq(&self, other: &str) -> bool {
        let mut chars = other.chars();
        chars.next() == Some(self.symbol)
            && chars.next() == Some(self.number)
            && chars.next().is_none()
    }
}

impl PartialEq<&str> for SquareName {
    fn eq(&self, other: &&str) -> bool {
        self == *other
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn rejects_each_component_separately() {
        assert_eq!(
            SquareName::new("A1"),
            Err(SquareError::InvalidSquareName {
                found: Some('A'),
                component: NameComponent::Symbol
            })
        );
        assert_eq!(
            SquareName::new("a0"),
            Err(SquareError::InvalidSquareName {
                found: Some('0'),
                component: NameComponent::Number
            })
        );
        assert_eq!(
            SquareName::new("a"),
            Err(SquareError::InvalidSquareName {
                found: None,
                component: NameComponent::Number
            })
        );
        assert_eq!(
            SquareName::new(""),
            Err(SquareError::InvalidSquareName {
                found: None,
                component: NameComponent::Symbol
            })
        );
    }

    #[test]
    fn every_valid_name_is_accepted() {
        for symbol in SquareName::SYMBOLS {
            for number in SquareName::NUMBERS {
                let input: String = [symbol, number].iter().collect();
                let name = SquareName::new(&input).unwrap();
                assert_eq!(name.value(), input);
                assert_eq!(name, input.as_str());
            }
        }
    }

    #[test]
    fn equality_is_by_value() {
        assert_eq!(SquareName::new("c6"), "c6".parse::<SquareName>());
        assert_ne!(SquareName::new("c6").unwrap(), SquareName::new("c7").unwrap());
        assert_ne!(SquareName::new("c6").unwrap(), "c6x");
    }
}
