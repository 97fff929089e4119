use crate::coordinates::SquareCoordinates;
use crate::error::SquareResult;
use crate::line::SquaresLine;
use crate::name::SquareName;
use crate::piece::Piece;
use crate::square::{Identifier, Square};
use std::collections::HashMap;
use std::fmt::{Display, Formatter};

/// Action kind squares are registered under in the relation table by default
pub const SQUARES_RELATION: &str = "squares";

/// Raised by the board after its occupancy changed.
/// The board does not know what refreshing means, the engine owning it does.
pub trait RefreshHook {
    fn refresh_all_squares(&mut self);
}

/// A hook for callers that have nothing to refresh
pub struct NoRefresh;

impl RefreshHook for NoRefresh {
    fn refresh_all_squares(&mut self) {}
}

impl<F: FnMut()> RefreshHook for F {
    fn refresh_all_squares(&mut self) {
        self()
    }
}

/// Whether clearing a square raises a refresh like placing a piece does
#[derive(Debug, Copy, Clone, PartialEq, Eq, Default)]
pub enum RemovalRefresh {
    #[default]
    Invoke,
    Skip,
}

#[derive(Debug, Copy, Clone, PartialEq, Eq, Default)]
pub struct BoardConfig {
    pub removal_refresh: RemovalRefresh,
}

/// Opaque handles the engine attaches to squares, keyed by square and action kind
#[derive(Debug, Clone)]
pub struct Relations<R> {
    handles: HashMap<(usize, &'static str), R>,
}

impl<R> Default for Relations<R> {
    fn default() -> Self {
        Relations {
            handles: HashMap::new(),
        }
    }
}

impl<R> Relations<R> {
    pub fn attach(&mut self, at: SquareCoordinates, kind: &'static str, handle: R) -> Option<R> {
        self.handles.insert((at.index(), kind), handle)
    }

    pub fn get(&self, at: SquareCoordinates, kind: &'static str) -> Option<&R> {
        self.handles.get(&(at.index(), kind))
    }

    pub fn detach(&mut self, at: SquareCoordinates, kind: &'static str) -> Option<R> {
        self.handles.remove(&(at.index(), kind))
    }

    pub fn len(&self) -> usize {
        self.handles.len()
    }

    pub fn is_empty(&self) -> bool {
        self.handles.is_empty()
    }
}

// Squares are indexed by 8 * y + x, a1 first and h8 last.

pub struct Board<P = Piece, R = ()> {
    squares: [Square<P>; 64],
    config: BoardConfig,
    relations: Relations<R>,
}

impl<P, R> Board<P, R> {
    pub fn new(config: BoardConfig) -> Board<P, R> {
        Board {
            squares: std::array::from_fn(|i| {
                Square::from(SquareCoordinates::from_valid((i % 8) as i8, (i / 8) as i8))
            }),
            config,
            relations: Relations::default(),
        }
    }

    pub fn config(&self) -> BoardConfig {
        self.config
    }

    pub fn set_config(&mut self, config: BoardConfig) {
        self.config = config
    }

    pub fn square(&self, at: SquareCoordinates) -> &Square<P> {
        &self.squares[at.index()]
    }

    /// Looks a square up by name or coordinate pair
    /// ```
    /// use squares::board::{Board, BoardConfig};
    /// let board: Board = Board::new(BoardConfig::default());
    /// assert_eq!(board.get("4,3").unwrap().name(), "e4");
    /// assert!(board.get("e9").is_err());
    /// ```
    pub fn get(&self, identifier: &str) -> SquareResult<&Square<P>> {
        let coordinates = match Identifier::parse(identifier)? {
            Identifier::Name(name) => SquareName::new(name)?.coordinates(),
            Identifier::Coordinates(x, y) => SquareCoordinates::new(x, y)?,
        };
        Ok(self.square(coordinates))
    }

    pub fn squares(&self) -> impl Iterator<Item = &Square<P>> {
        self.squares.iter()
    }

    pub fn piece_on(&self, at: SquareCoordinates) -> Option<&P> {
        self.squares[at.index()].piece()
    }

    /// Places a piece, then raises a refresh through `hook`.
    /// Returns the piece that was standing there if any
    pub fn place_piece<H: RefreshHook>(&mut self, at: SquareCoordinates, piece: P, hook: &mut H) -> Option<P> {
        let previous = self.squares[at.index()].place_piece(piece);
        hook.refresh_all_squares();
        previous
    }

    /// Clears a square. Whether `hook` is raised depends on `BoardConfig::removal_refresh`
    pub fn remove_piece<H: RefreshHook>(&mut self, at: SquareCoordinates, hook: &mut H) -> Option<P> {
        let removed = self.squares[at.index()].remove_piece();
        if self.config.removal_refresh == RemovalRefresh::Invoke {
            hook.refresh_all_squares();
        }
        removed
    }

    /// Empties the whole board with a single refresh at the end
    pub fn clear<H: RefreshHook>(&mut self, hook: &mut H) {
        self.squares.iter_mut().for_each(|sq| {
            sq.remove_piece();
        });
        hook.refresh_all_squares();
    }

    pub fn line(&self, start: SquareCoordinates, end: SquareCoordinates) -> SquareResult<SquaresLine> {
        SquaresLine::new(self.square(start), self.square(end))
    }

    /// Occupied squares strictly between `start` and `end`, nearest to `start` first
    pub fn occupied_between(&self, start: SquareCoordinates, end: SquareCoordinates) -> SquareResult<Vec<SquareName>> {
        Ok(self
            .line(start, end)?
            .between_squares_names(false, false)
            .into_iter()
            .filter(|name| self.squares[name.coordinates().index()].is_occupied())
            .collect())
    }

    /// Line of sight between two colinear squares, endpoints excluded
    pub fn is_path_clear(&self, start: SquareCoordinates, end: SquareCoordinates) -> SquareResult<bool> {
        Ok(self
            .line(start, end)?
            .between_squares_names(false, false)
            .iter()
            .all(|name| !self.squares[name.coordinates().index()].is_occupied()))
    }

    pub fn relations(&self) -> &Relations<R> {
        &self.relations
    }

    pub fn relations_mut(&mut self) -> &mut Relations<R> {
        &mut self.relations
    }
}

impl<P, R> Default for Board<P, R> {
    fn default() -> Self {
        Board::new(BoardConfig::default())
    }
}

impl<P: Display, R> Display for Board<P, R> {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        for y in (0..8).rev() {
            write!(f, "{} ", SquareName::NUMBERS[y])?;
            for x in 0..8 {
                match self.squares[8 * y + x].piece() {
                    None => write!(f, ". ")?,
                    Some(p) => write!(f, "{} ", p)?,
                }
            }
            writeln!(f)?;
        }
        write!(f, "  ")?;
        for symbol in SquareName::SYMBOLS {
            write!(f, "{} ", symbol)?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::piece::{Color, PieceType};
    use std::cell::Cell;

    fn at(name: &str) -> SquareCoordinates {
        SquareName::new(name).unwrap().coordinates()
    }

    fn rook() -> Piece {
        Piece {
            piece_type: PieceType::Rook,
            color: Color::Black,
        }
    }

    #[test]
    fn squares_are_indexed() {
        let board: Board = Board::default();
        assert_eq!(board.squares().count(), 64);
        for (i, sq) in board.squares().enumerate() {
            assert_eq!(sq.coordinates().index(), i);
        }
        assert_eq!(board.square(at("h1")).name(), "h1");
        assert_eq!(board.get("a8").unwrap().coordinates().index(), 56);
    }

    #[test]
    fn placement_raises_refresh() {
        let refreshes = Cell::new(0);
        let mut hook = || refreshes.set(refreshes.get() + 1);
        let mut board: Board = Board::default();

        assert_eq!(board.place_piece(at("c4"), rook(), &mut hook), None);
        assert_eq!(refreshes.get(), 1);
        assert_eq!(board.piece_on(at("c4")), Some(&rook()));

        assert_eq!(board.remove_piece(at("c4"), &mut hook), Some(rook()));
        assert_eq!(refreshes.get(), 2);
        assert_eq!(board.piece_on(at("c4")), None);
    }

    #[test]
    fn removal_refresh_can_be_skipped() {
        let refreshes = Cell::new(0);
        let mut hook = || refreshes.set(refreshes.get() + 1);
        let mut board: Board = Board::new(BoardConfig {
            removal_refresh: RemovalRefresh::Skip,
        });

        board.place_piece(at("c4"), rook(), &mut hook);
        board.remove_piece(at("c4"), &mut hook);
        assert_eq!(refreshes.get(), 1);
        assert_eq!(board.piece_on(at("c4")), None);
    }

    #[test]
    fn line_of_sight() {
        let mut board: Board = Board::default();
        board.place_piece(at("d4"), rook(), &mut NoRefresh);
        board.place_piece(at("f6"), rook(), &mut NoRefresh);

        assert_eq!(board.occupied_between(at("a1"), at("h8")).unwrap(), ["d4", "f6"]);
        assert_eq!(board.occupied_between(at("h8"), at("a1")).unwrap(), ["f6", "d4"]);
        assert_eq!(board.is_path_clear(at("a1"), at("h8")), Ok(false));
        assert_eq!(board.is_path_clear(at("a1"), at("d4")), Ok(true));
        assert_eq!(board.is_path_clear(at("d1"), at("d8")), Ok(false));
        assert_eq!(board.is_path_clear(at("e1"), at("e8")), Ok(true));
        assert!(board.is_path_clear(at("a1"), at("b3")).is_err());
    }

    #[test]
    fn relations_are_keyed_by_square_and_kind() {
        let mut board: Board<Piece, u32> = Board::default();
        assert!(board.relations().is_empty());
        board.relations_mut().attach(at("e4"), SQUARES_RELATION, 7);
        board.relations_mut().attach(at("e4"), "attack", 9);
        assert_eq!(board.relations().get(at("e4"), SQUARES_RELATION), Some(&7));
        assert_eq!(board.relations().get(at("e5"), SQUARES_RELATION), None);
        assert_eq!(board.relations_mut().detach(at("e4"), "attack"), Some(9));
        assert_eq!(board.relations().len(), 1);
    }

    #[test]
    fn display() {
        let mut board: Board = Board::default();
        board.place_piece(at("a8"), rook(), &mut NoRefresh);
        board.place_piece(at("h1"), Piece::from_char('K').unwrap(), &mut NoRefresh);
        let dump = board.to_string();
        let lines: Vec<&str> = dump.lines().collect();
        assert_eq!(lines[0], "8 r . . . . . . . ");
        assert_eq!(lines[7], "1 . . . . . . . K ");
        assert_eq!(lines[8], "  a b c d e f g h ");
        board.clear(&mut NoRefresh);
        assert!(board.squares().all(|sq| !sq.is_occupied()));
    }
}
