use crate::error::SquareResult;
use crate::square::Square;

pub mod board;
pub mod coordinates;
pub mod edge;
pub mod error;
pub mod line;
pub mod name;
pub mod piece;
pub mod shell;
pub mod square;

/// Prints the squares lying between two squares, endpoints excluded
pub fn print_line(start: &str, end: &str) -> SquareResult<()> {
    let start: Square = start.parse()?;
    let end: Square = end.parse()?;
    let names = start.between_squares_names(&end, false, false)?;
    println!("{} -> {} ({} between)", start, end, names.len());
    for name in names {
        println!("{}", name);
    }
    Ok(())
}
