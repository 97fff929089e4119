fn main() {
    println!("squares v{}, by {}", env!("CARGO_PKG_VERSION"), env!("CARGO_PKG_AUTHORS"));

    let line_mode = std::env::args().nth(1).as_deref() == Some("line");

    // Prints a single line and exits
    if line_mode {
        let (start, end) = match (std::env::args().nth(2), std::env::args().nth(3)) {
            (Some(s), Some(e)) => (s, e),
            _ => {
                eprintln!("Expected : line <from> <to>");
                std::process::exit(2)
            }
        };
        if let Err(e) = squares::print_line(&start, &end) {
            eprintln!("{}", e);
            std::process::exit(1)
        }
    } else {
        squares::shell::Shell::default().run()
    }
}
