//! The engine. Holds the game position and picks moves; there is no search, a move is simply
//! drawn at random from the generated list.
//
//  Copyright 2019 Michael Leany
//
//  This Source Code Form is subject to the terms of the Mozilla Public
//  License, v. 2.0. If a copy of the MPL was not distributed with this
//  file, You can obtain one at http://mozilla.org/MPL/2.0/.
//
////////////////////////////////////////////////////////////////////////////////////////////////////
use std::fmt;
use std::sync::Arc;
use std::time::Duration;
use log::debug;
use rand::SeedableRng;
use rand::rngs::StdRng;
use rand::seq::SliceRandom;
use serde::Deserialize;
use crate::chess::{self, movegen, CastlingRule, Move, Position, Tables};
use chess::error::{ParseFenError, PlayMoveError};

////////////////////////////////////////////////////////////////////////////////////////////////////
/// Which move generator the engine draws its moves from
#[derive(Debug, Copy, Clone, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Generator {
    /// Only fully legal moves
    Legal,
    /// Pseudo-legal moves, which may leave the king in check
    PseudoLegal,
}

impl Default for Generator {
    fn default() -> Self {
        Generator::Legal
    }
}

impl Generator {
    /// Generates moves for `pos` using this generator
    pub fn moves(self, pos: &Position, tables: &Tables) -> Vec<Move> {
        match self {
            Generator::Legal => movegen::legal_moves(pos, tables.attacks()),
            Generator::PseudoLegal => movegen::pseudo_legal_moves(pos, tables.attacks()),
        }
    }
}

////////////////////////////////////////////////////////////////////////////////////////////////////
/// A position could not be set up
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SetupError {
    /// The FEN string is invalid
    Fen(ParseFenError),
    /// The given move could not be played
    Move(String, PlayMoveError),
}

impl fmt::Display for SetupError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SetupError::Fen(err) => write!(f, "invalid fen: {}", err),
            SetupError::Move(mv, err) => write!(f, "cannot play {}: {}", mv, err),
        }
    }
}

impl std::error::Error for SetupError { }

impl From<ParseFenError> for SetupError {
    fn from(err: ParseFenError) -> Self {
        SetupError::Fen(err)
    }
}

////////////////////////////////////////////////////////////////////////////////////////////////////
/// The engine's view of the game
#[derive(Debug)]
pub struct Bot {
    tables: Arc<Tables>,
    generator: Generator,
    rule: CastlingRule,
    time_divisor: u32,
    position: Position,
    rng: StdRng,
}

impl Bot {
    /// Creates a new bot at the starting position
    pub fn new(tables: Arc<Tables>, generator: Generator, rule: CastlingRule,
               time_divisor: u32) -> Bot {
        let position = Position::start(tables.keys()).with_castling_rule(rule);
        Bot {
            tables,
            generator,
            rule,
            time_divisor: time_divisor.max(1),
            position,
            rng: StdRng::from_entropy(),
        }
    }

    /// Replaces the random number generator with one seeded from `seed`
    pub fn with_seed(mut self, seed: u64) -> Bot {
        self.rng = StdRng::seed_from_u64(seed);
        self
    }

    /// Resets to the starting position
    pub fn new_game(&mut self) {
        self.position = Position::start(self.tables.keys()).with_castling_rule(self.rule);
    }

    /// Sets up the position given in FEN, or the starting position if `fen` is `None`
    pub fn set_position(&mut self, fen: Option<&str>) -> Result<(), SetupError> {
        self.setup::<&str>(fen, &[])
    }

    /// Sets up a position and plays `moves` from it. Nothing changes unless every step succeeds.
    pub fn setup<S: AsRef<str>>(&mut self, fen: Option<&str>, moves: &[S])
            -> Result<(), SetupError> {
        let keys = self.tables.keys();
        let mut pos = match fen {
            Some(fen) => Position::from_fen(fen, keys)?,
            None => Position::start(keys),
        }.with_castling_rule(self.rule);

        for mv in moves {
            let mv = mv.as_ref();
            pos = pos.apply_coord_move(mv, keys)
                .map_err(|err| SetupError::Move(mv.to_string(), err))?;
        }

        self.position = pos;
        Ok(())
    }

    /// Plays a move given in coordinate notation
    pub fn play(&mut self, coord: &str) -> Result<(), PlayMoveError> {
        self.position = self.position.apply_coord_move(coord, self.tables.keys())?;
        Ok(())
    }

    /// Returns the current position
    pub fn position(&self) -> &Position {
        &self.position
    }

    /// Returns the current position drawn as text
    pub fn diagram(&self) -> String {
        self.position.diagram()
    }

    /// Time to spend on a move given each side's remaining time and increment: our remaining time
    /// divided by the configured divisor, plus our increment.
    pub fn thinking_time(&self, wtime: Duration, btime: Duration, winc: Duration,
                         binc: Duration) -> Duration {
        let (time, inc) = match self.position.side_to_move() {
            chess::Color::White => (wtime, winc),
            chess::Color::Black => (btime, binc),
        };
        (time / self.time_divisor).saturating_add(inc)
    }

    /// Picks a move at random, or returns `None` if there are none
    pub fn choose_move(&mut self) -> Option<Move> {
        let moves = self.generator.moves(&self.position, &self.tables);
        debug!("generated {} moves: {}", moves.len(),
            moves.iter().map(|mv| mv.to_string()).collect::<Vec<_>>().join(" "));

        moves.choose(&mut self.rng).copied()
    }
}
