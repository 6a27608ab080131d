//! Implements the subset of the [Universal Chess Interface](http://wbec-ridderkerk.nl/html/UCIProtocol.html)
//! the engine understands.
//
//  This Source Code Form is subject to the terms of the Mozilla Public
//  License, v. 2.0. If a copy of the MPL was not distributed with this
//  file, You can obtain one at http://mozilla.org/MPL/2.0/.
//
////////////////////////////////////////////////////////////////////////////////////////////////////
use std::fmt;
use std::str::FromStr;
use std::time::Duration;
use log::{debug, info, warn, error};
use lazy_static::lazy_static;
use regex::{RegexSet, Regex};
use super::io;
use crate::engine::Bot;

/// Name reported in response to `uci`
pub const ENGINE_NAME: &str = concat!("magpie ", env!("CARGO_PKG_VERSION"));

/// Author reported in response to `uci`
pub const ENGINE_AUTHOR: &str = env!("CARGO_PKG_AUTHORS");

////////////////////////////////////////////////////////////////////////////////////////////////////
/// Runs the UCI loop on stdin and stdout
#[derive(Debug)]
pub struct Uci {
    client: io::Client,
    session: Session,
}

impl Uci {
    /// Connects to the client
    pub fn new(bot: Bot) -> Self {
        Uci {
            client: io::Client::connect(),
            session: Session::new(bot),
        }
    }

    /// Handles commands until `quit` is received or the input ends
    pub fn run(&mut self) {
        while let Ok(line) = self.client.recv() {
            if line.is_empty() {
                continue;
            }

            match line.parse::<Command>() {
                Ok(cmd) => {
                    for response in self.session.execute(&cmd) {
                        response.send();
                    }
                },
                Err(_) => warn!("unknown command: {}", line),
            }

            if self.session.quitting() {
                break;
            }
        }
        info!("leaving uci loop");
    }
}

////////////////////////////////////////////////////////////////////////////////////////////////////
/// Applies commands to the engine and collects the responses
#[derive(Debug)]
pub struct Session {
    bot: Bot,
    quitting: bool,
}

impl Session {
    /// Creates a session around `bot`
    pub fn new(bot: Bot) -> Self {
        Session { bot, quitting: false }
    }

    /// Returns `true` once `quit` has been received
    pub fn quitting(&self) -> bool {
        self.quitting
    }

    /// Returns the engine
    pub fn bot(&self) -> &Bot {
        &self.bot
    }

    /// Carries out `cmd`. Errors are logged, never returned.
    pub fn execute(&mut self, cmd: &Command) -> Vec<Response> {
        use Command::*;

        match cmd {
            Command::Uci => vec![
                Response::Id { name: ENGINE_NAME.to_string(), author: ENGINE_AUTHOR.to_string() },
                Response::UciOk,
            ],
            IsReady => vec![Response::ReadyOk],
            UciNewGame => {
                self.bot.new_game();
                Vec::new()
            },
            Position { fen, moves } => {
                match self.bot.setup(fen.as_ref().map(String::as_str), &moves[..]) {
                    Ok(()) => debug!("position: {}", self.bot.position()),
                    Err(err) => error!("{}: {}", cmd, err),
                }
                Vec::new()
            },
            Go(params) => self.go(params),
            Stop => Vec::new(),
            Quit => {
                self.quitting = true;
                Vec::new()
            },
            Display => vec![Response::Diagram(self.bot.diagram())],
        }
    }

    fn go(&mut self, params: &GoParams) -> Vec<Response> {
        let time = match (params.movetime, params.wtime, params.btime) {
            (Some(movetime), _, _) => movetime,
            (None, Some(wtime), Some(btime)) => {
                let zero = Duration::from_millis(0);
                self.bot.thinking_time(wtime, btime, params.winc.unwrap_or(zero),
                                       params.binc.unwrap_or(zero))
            },
            _ => {
                warn!("go without movetime or wtime and btime");
                return vec![Response::BestMove("0000".to_string())];
            },
        };
        info!("thinking time: {} ms", time.as_millis());

        let best = match self.bot.choose_move() {
            Some(mv) => {
                info!("chose {}", mv);
                mv.to_coord()
            },
            None => "0000".to_string(),
        };

        vec![
            Response::Info(format!("string thinking time {} ms", time.as_millis())),
            Response::BestMove(best),
        ]
    }
}

////////////////////////////////////////////////////////////////////////////////////////////////////
/// Search limits given with the `go` command
#[derive(Debug, Clone, Default, PartialEq, Eq)]
#[allow(missing_docs)]
pub struct GoParams {
    pub movetime: Option<Duration>,
    pub wtime: Option<Duration>,
    pub btime: Option<Duration>,
    pub winc: Option<Duration>,
    pub binc: Option<Duration>,
}

////////////////////////////////////////////////////////////////////////////////////////////////////
/// Commands from the client
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    /// Asks the engine to identify itself.
    ///
    /// ```text
    /// uci
    /// ```
    Uci,

    /// Asks whether the engine is ready for more commands.
    ///
    /// ```text
    /// isready
    /// ```
    IsReady,

    /// The next position will be from a new game.
    ///
    /// ```text
    /// ucinewgame
    /// ```
    UciNewGame,

    /// Sets up a position.
    ///
    /// ```text
    /// position [startpos | fen FEN] [moves MOVE ...]
    /// ```
    ///
    /// `fen` is `None` for the starting position.
    Position {
        /// The position in FEN, or `None` for `startpos`
        fen: Option<String>,
        /// Moves in coordinate notation, played from the position
        moves: Vec<String>,
    },

    /// Asks for a move.
    ///
    /// ```text
    /// go [movetime MS] [wtime MS btime MS [winc MS binc MS]]
    /// ```
    Go(GoParams),

    /// Stops thinking.
    ///
    /// ```text
    /// stop
    /// ```
    Stop,

    /// Exits.
    ///
    /// ```text
    /// quit
    /// ```
    Quit,

    /// Prints the board, FEN and hash key.
    ///
    /// ```text
    /// d
    /// ```
    Display,
}

impl fmt::Display for Command {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        use Command::*;

        match self {
            Command::Uci => "uci".fmt(f),
            IsReady => "isready".fmt(f),
            UciNewGame => "ucinewgame".fmt(f),
            Position { fen, moves } => {
                let mut s = match fen {
                    Some(fen) => format!("position fen {}", fen),
                    None => "position startpos".to_string(),
                };
                if !moves.is_empty() {
                    s += " moves ";
                    s += &moves.join(" ");
                }
                s.fmt(f)
            },
            Go(params) => {
                let mut s = "go".to_string();
                let named = [
                    ("movetime", params.movetime), ("wtime", params.wtime),
                    ("btime", params.btime), ("winc", params.winc), ("binc", params.binc),
                ];
                for (name, value) in named.iter() {
                    if let Some(value) = value {
                        s += &format!(" {} {}", name, value.as_millis());
                    }
                }
                s.fmt(f)
            },
            Stop => "stop".fmt(f),
            Quit => "quit".fmt(f),
            Display => "d".fmt(f),
        }
    }
}

impl FromStr for Command {
    type Err = UciError;

    fn from_str(s: &str) -> Result<Self, UciError> {
        use Command::*;

        let s = s.trim();
        if let Some(ind) = COMMAND_SET.matches(s).iter().next() {
            let args = COMMAND_VEC[ind].captures(s).expect("INFALLIBLE");

            match ind {
                0 => Ok(Command::Uci),
                1 => Ok(IsReady),
                2 => Ok(UciNewGame),
                3 => {
                    let fen = args.get(2).map(|fen| fen.as_str().trim().to_string());
                    let moves = match args.get(3) {
                        Some(moves) => moves.as_str().split_whitespace()
                            .map(|mv| mv.to_string()).collect(),
                        None => Vec::new(),
                    };
                    Ok(Position { fen, moves })
                },
                4 => {
                    let mut params = GoParams::default();
                    let rest = args.get(1).map_or("", |rest| rest.as_str());
                    for param in GO_PARAM.captures_iter(rest) {
                        // digits only, so the one failure is overflow
                        let ms = param[2].parse::<u64>().unwrap_or(u64::MAX);
                        let value = Some(Duration::from_millis(ms));
                        match &param[1] {
                            "movetime" => params.movetime = value,
                            "wtime" => params.wtime = value,
                            "btime" => params.btime = value,
                            "winc" => params.winc = value,
                            "binc" => params.binc = value,
                            _ => { },
                        }
                    }
                    Ok(Go(params))
                },
                5 => Ok(Stop),
                6 => Ok(Quit),
                7 => Ok(Display),
                _ => unreachable!(),
            }
        } else {
            Err(UciError)
        }
    }
}

const COMMANDS: [&str; 8] = [
    r"^uci$",
    r"^isready$",
    r"^ucinewgame$",
    r"^position\s+(?:(startpos)|fen\s+(.+?))(?:\s+moves\b\s*(.*?))?$",
    r"^go\b(.*)$",
    r"^stop$",
    r"^quit$",
    r"^d$",
];

lazy_static! {
    static ref COMMAND_SET: RegexSet = RegexSet::new(&COMMANDS).expect("INFALLIBLE");
    static ref COMMAND_VEC: Vec<Regex> = {
        let mut cmd_vec = Vec::new();
        for cmd in &COMMANDS {
            cmd_vec.push(Regex::new(cmd).expect("INFALLIBLE"));
        }
        cmd_vec
    };
    static ref GO_PARAM: Regex =
        Regex::new(r"\b(movetime|wtime|btime|winc|binc|movestogo)\s+(\d+)\b").expect("INFALLIBLE");
}

////////////////////////////////////////////////////////////////////////////////////////////////////
/// Responses from the engine
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Response {
    /// Identifies the engine. Sent as two lines.
    ///
    /// ```text
    /// id name NAME
    /// id author AUTHOR
    /// ```
    Id {
        /// Name and version of the engine
        name: String,
        /// Who wrote it
        author: String,
    },

    /// Ends the reply to `uci`.
    ///
    /// ```text
    /// uciok
    /// ```
    UciOk,

    /// Reply to `isready`.
    ///
    /// ```text
    /// readyok
    /// ```
    ReadyOk,

    /// The engine's move, `0000` if it has none.
    ///
    /// ```text
    /// bestmove MOVE
    /// ```
    BestMove(String),

    /// Information for the client.
    ///
    /// ```text
    /// info ...
    /// ```
    Info(String),

    /// The board diagram printed for `d`
    Diagram(String),
}

impl Response {
    fn send(&self) {
        io::Client::send(&self.to_string());
    }
}

impl fmt::Display for Response {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        use Response::*;

        match self {
            Id { name, author } => format!("id name {}\nid author {}", name, author).fmt(f),
            UciOk => "uciok".fmt(f),
            ReadyOk => "readyok".fmt(f),
            BestMove(mv) => format!("bestmove {}", mv).fmt(f),
            Info(info) => format!("info {}", info).fmt(f),
            Diagram(diagram) => diagram.trim_end().fmt(f),
        }
    }
}

////////////////////////////////////////////////////////////////////////////////////////////////////
/// Error type for uci
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub struct UciError;

impl fmt::Display for UciError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        "unrecognized command".fmt(f)
    }
}

impl std::error::Error for UciError { }
