use crate::board::{Board, BoardConfig, RemovalRefresh};
use crate::coordinates::SquareCoordinates;
use crate::error::SquareError;
use crate::name::SquareName;
use crate::piece::Piece;
use crate::square::Square;

use regex::Regex;
use rustyline::config::Configurer;
use rustyline::Editor;
use std::collections::HashMap;
use std::fmt::{Display, Error, Formatter};

/// Line editor front end over a `Session`
pub struct Shell {
    session: Session,
    editor: Editor<()>,
}

impl Default for Shell {
    fn default() -> Self {
        let mut editor = Editor::<()>::new();
        editor.set_auto_add_history(true);
        editor.set_check_cursor_position(true);
        Shell {
            session: Session::default(),
            editor,
        }
    }
}

impl Shell {
    pub fn run(&mut self) {
        while let Ok(line) = self.editor.readline("squares> ") {
            match self.session.handle_command(&line) {
                Ok(ShellOkCode::ShouldQuit) => break,
                Err(ShellErrCode::BadCommand(cmd)) => {
                    eprintln!("Unknown or badly formed command: {}", cmd)
                }
                Err(ShellErrCode::BadPiece(p)) => {
                    eprintln!("Not a piece letter: {}", p)
                }
                Err(ShellErrCode::MissingArg(arg)) => {
                    eprintln!("Missing an argument: {} {} <- here", line.trim(), arg)
                }
                Err(ShellErrCode::Square(e)) => eprintln!("{}", e),
                _ => (),
            }
        }
    }
}

/// Everything the shell knows between two commands
pub struct Session {
    board: Board,
    options: HashMap<String, ShellOption>,
    debug_mode: bool,
    args_regex: Regex,
}

impl Default for Session {
    fn default() -> Self {
        let options = [
            ShellOption::StringChoice {
                name: "RemovalRefresh".to_string(),
                value: "invoke".to_string(),
                default: "invoke".to_string(),
                possible_values: vec!["invoke".to_string(), "skip".to_string()],
            },
            ShellOption::BoolValue {
                name: "IncludeStart".to_string(),
                value: false,
                default: false,
            },
            ShellOption::BoolValue {
                name: "IncludeEnd".to_string(),
                value: false,
                default: false,
            },
        ];
        Session {
            board: Board::default(),
            options: options
                .into_iter()
                .map(|o| (o.name().to_string(), o))
                .collect(),
            debug_mode: false,
            // Quoted arguments are kept whole
            args_regex: Regex::new(r#"(".*?"|[^"\s]+)"#).expect("tokenizer regex is valid"),
        }
    }
}

impl Session {
    pub fn board(&self) -> &Board {
        &self.board
    }

    pub fn handle_command(&mut self, line: &str) -> Result<ShellOkCode, ShellErrCode> {
        let mut args = self
            .args_regex
            .find_iter(line)
            .map(|m| m.as_str().trim_matches('"'));
        let cmd = if let Some(c) = args.next() {
            c
        } else {
            return Err(ShellErrCode::NoCommand);
        };
        let debug = self.debug_mode;
        let mut refresh = || {
            if debug {
                Self::send(ShellReply::Info("refresh all squares"))
            }
        };

        match cmd {
            "square" => {
                let at = self.coordinates(args.next(), "<square>")?;
                Self::send(ShellReply::Square(self.board.square(at)))
            }
            "line" | "count" => {
                let start = self.coordinates(args.next(), "<from>")?;
                let end = self.coordinates(args.next(), "<to>")?;
                let mut include_start = self.flag("IncludeStart");
                let mut include_end = self.flag("IncludeEnd");
                for flag in args {
                    match flag {
                        "start" => include_start = true,
                        "end" => include_end = true,
                        _ => return Err(ShellErrCode::BadCommand(flag.to_string())),
                    }
                }
                let line = self.board.line(start, end)?;
                if cmd == "line" {
                    Self::send(ShellReply::Names(
                        &line.between_squares_names(include_start, include_end),
                    ))
                } else {
                    Self::send(ShellReply::Count(
                        line.between_squares_count(include_start, include_end),
                    ))
                }
            }
            "between" => {
                let start = self.coordinates(args.next(), "<from>")?;
                let end = self.coordinates(args.next(), "<to>")?;
                Self::send(ShellReply::Names(&self.board.occupied_between(start, end)?))
            }
            "place" => {
                let at = self.coordinates(args.next(), "<square>")?;
                let letter = args
                    .next()
                    .ok_or_else(|| ShellErrCode::MissingArg(String::from("<piece>")))?;
                let piece = match (letter.len(), letter.chars().next().and_then(Piece::from_char)) {
                    (1, Some(p)) => p,
                    _ => return Err(ShellErrCode::BadPiece(letter.to_string())),
                };
                self.board.place_piece(at, piece, &mut refresh);
            }
            "remove" => {
                let at = self.coordinates(args.next(), "<square>")?;
                self.board.remove_piece(at, &mut refresh);
            }
            "reset" => self.board.clear(&mut refresh),
            "show" => Self::send(ShellReply::Board(&self.board)),
            "options" => self
                .options
                .values()
                .for_each(|o| Self::send(ShellReply::Option(o))),
            "setoption" => {
                let option_name = if let Some("name") = args.next() {
                    args.next().unwrap_or("")
                } else {
                    ""
                };
                let option_value = match args.nth(1) {
                    Some(v) => v,
                    None => return Err(ShellErrCode::MissingArg(String::from("<value>"))),
                };
                match self.options.get_mut(option_name) {
                    Some(option) => option.set_value(option_value),
                    None => return Err(ShellErrCode::BadCommand(option_name.to_string())),
                }
                let config = self.board_config();
                self.board.set_config(config);
            }
            "debug" => self.debug_mode = args.next().unwrap_or("off") == "on",
            "quit" => return Ok(ShellOkCode::ShouldQuit),
            _ => return Err(ShellErrCode::BadCommand(String::from(cmd))),
        }

        Ok(ShellOkCode::OkCommand)
    }

    pub fn send(reply: ShellReply) {
        match reply {
            ShellReply::Square(sq) => {
                let edge = sq.on_edge();
                println!(
                    "square {} coordinates {} color {} edges{}{}{}{} piece {}",
                    sq.name(),
                    sq.coordinates(),
                    if sq.is_light() { "light" } else { "dark" },
                    if edge.up() { " up" } else { "" },
                    if edge.right() { " right" } else { "" },
                    if edge.down() { " down" } else { "" },
                    if edge.left() { " left" } else { "" },
                    sq.piece().map_or(String::from("-"), Piece::to_string)
                )
            }
            ShellReply::Names(names) => println!(
                "{}",
                names
                    .iter()
                    .map(SquareName::to_string)
                    .collect::<Vec<_>>()
                    .join(" ")
            ),
            ShellReply::Count(count) => println!("{}", count),
            ShellReply::Board(board) => println!("{}", board),
            ShellReply::Option(option) => println!("option {}", option),
            ShellReply::Info(info) => println!("info {}", info),
        }
    }

    fn coordinates(&self, arg: Option<&str>, expected: &str) -> Result<SquareCoordinates, ShellErrCode> {
        let arg = arg.ok_or_else(|| ShellErrCode::MissingArg(String::from(expected)))?;
        Ok(self.board.get(arg)?.coordinates())
    }

    fn flag(&self, name: &str) -> bool {
        matches!(self.options.get(name), Some(ShellOption::BoolValue { value: true, .. }))
    }

    fn board_config(&self) -> BoardConfig {
        let removal_refresh = match self.options.get("RemovalRefresh") {
            Some(ShellOption::StringChoice { value, .. }) if value == "skip" => RemovalRefresh::Skip,
            _ => RemovalRefresh::Invoke,
        };
        BoardConfig { removal_refresh }
    }
}

#[derive(Debug, PartialEq, Eq)]
pub enum ShellOkCode {
    OkCommand,
    ShouldQuit,
}

#[derive(Debug, PartialEq, Eq)]
pub enum ShellErrCode {
    MissingArg(String),
    NoCommand,
    BadCommand(String),
    BadPiece(String),
    Square(SquareError),
}

impl From<SquareError> for ShellErrCode {
    fn from(e: SquareError) -> Self {
        ShellErrCode::Square(e)
    }
}

pub enum ShellReply<'a> {
    Square(&'a Square),
    Names(&'a [SquareName]),
    Count(usize),
    Board(&'a Board),
    Option(&'a ShellOption),
    Info(&'a str),
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ShellOption {
    BoolValue {
        name: String,
        value: bool,
        default: bool,
    },
    StringChoice {
        name: String,
        value: String,
        default: String,
        possible_values: Vec<String>,
    },
}

impl ShellOption {
    pub fn name(&self) -> &str {
        match self {
            Self::BoolValue { name, .. } | Self::StringChoice { name, .. } => name,
        }
    }

    pub fn set_value(&mut self, v: &str) {
        match self {
            Self::BoolValue { value, .. } => *value = v.parse::<bool>().unwrap_or(*value),
            Self::StringChoice {
                value,
                possible_values,
                ..
            } => {
                if possible_values.iter().any(|x| x.as_str() == v) {
                    *value = v.to_string();
                }
            }
        }
    }
}

impl Display for ShellOption {
    fn fmt(&self, f: &mut Formatter<'_>) -> Result<(), Error> {
        match self {
            Self::BoolValue {
                name,
                value,
                default,
            } => write!(f, "name {} type check value {} default {}", name, value, default),
            Self::StringChoice {
                name,
                value,
                default,
                possible_values,
            } => write!(
                f,
                "name {} type combo value {} default {}{}",
                name,
                value,
                default,
                possible_values
                    .iter()
                    .fold(String::new(), |acc, x| format!("{} var {}", acc, x))
            ),
        }
    }
}
