//! Contains the packed `Move` record and the enums that describe it
//
//  This Source Code Form is subject to the terms of the Mozilla Public
//  License, v. 2.0. If a copy of the MPL was not distributed with this
//  file, You can obtain one at http://mozilla.org/MPL/2.0/.
//
////////////////////////////////////////////////////////////////////////////////////////////////////
use std::convert::TryFrom;
use std::fmt;
use std::hash::{Hash, Hasher};
use super::*;

////////////////////////////////////////////////////////////////////////////////////////////////////
/// Which piece to promote to for a promotion move
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash)]
#[allow(missing_docs)]
pub enum Promotion {
    Knight = 1,
    Bishop = 2,
    Rook = 3,
    Queen = 4,
}

impl Promotion {
    /// Promotions in the order the generator emits them
    pub const ALL: [Promotion; 4] =
        [Promotion::Queen, Promotion::Rook, Promotion::Knight, Promotion::Bishop];

    /// Returns the lowercase letter used in coordinate notation
    pub fn to_char(self) -> char {
        match self {
            Promotion::Knight => 'n',
            Promotion::Bishop => 'b',
            Promotion::Rook => 'r',
            Promotion::Queen => 'q',
        }
    }

    /// Parses a lowercase promotion letter
    pub fn from_char(ch: char) -> Option<Promotion> {
        match ch {
            'n' => Some(Promotion::Knight),
            'b' => Some(Promotion::Bishop),
            'r' => Some(Promotion::Rook),
            'q' => Some(Promotion::Queen),
            _ => None,
        }
    }

    fn from_bits(bits: u32) -> Option<Promotion> {
        match bits {
            1 => Some(Promotion::Knight),
            2 => Some(Promotion::Bishop),
            3 => Some(Promotion::Rook),
            4 => Some(Promotion::Queen),
            _ => None,
        }
    }
}

impl Default for Promotion {
    fn default() -> Self {
        Promotion::Queen
    }
}

impl From<Promotion> for Piece {
    fn from(prom: Promotion) -> Self {
        match prom {
            Promotion::Knight => Piece::Knight,
            Promotion::Bishop => Piece::Bishop,
            Promotion::Rook => Piece::Rook,
            Promotion::Queen => Piece::Queen,
        }
    }
}

////////////////////////////////////////////////////////////////////////////////////////////////////
/// The special-move category of a move
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash)]
pub enum MoveKind {
    /// Anything other than the special moves below, including promotions and double pushes
    Normal = 0,
    /// An en passant capture
    EnPassant = 1,
    /// Castling on the king side
    ShortCastle = 2,
    /// Castling on the queen side
    LongCastle = 3,
}

impl MoveKind {
    fn from_bits(bits: u32) -> MoveKind {
        match bits & 3 {
            1 => MoveKind::EnPassant,
            2 => MoveKind::ShortCastle,
            3 => MoveKind::LongCastle,
            _ => MoveKind::Normal,
        }
    }
}

impl Default for MoveKind {
    fn default() -> Self {
        MoveKind::Normal
    }
}

////////////////////////////////////////////////////////////////////////////////////////////////////
/// Optional annotation telling whether a move gives check
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash)]
pub enum CheckType {
    /// Not annotated, or gives no check
    None = 0,
    /// Gives check
    Check = 1,
    /// Gives checkmate
    Checkmate = 2,
}

impl CheckType {
    fn from_bits(bits: u32) -> CheckType {
        match bits & 3 {
            1 => CheckType::Check,
            2 => CheckType::Checkmate,
            _ => CheckType::None,
        }
    }
}

impl Default for CheckType {
    fn default() -> Self {
        CheckType::None
    }
}

////////////////////////////////////////////////////////////////////////////////////////////////////
const TO_SHIFT: u32 = 0;
const FROM_SHIFT: u32 = 6;
const PIECE_SHIFT: u32 = 12;
const PROMOTION_SHIFT: u32 = 15;
const CAPTURE_SHIFT: u32 = 18;
const KIND_SHIFT: u32 = 19;
const CHECK_SHIFT: u32 = 21;

const SQUARE_MASK: u32 = 0o77;
const SQUARES_MASK: u32 = 0o7777;

/// A single move packed into 32 bits.
///
/// Holds the origin, destination, moved piece, capture flag, promotion choice, special-move kind
/// and an optional check annotation. Two moves are equal when their origin and destination match;
/// every other field is ignored by `==` and by hashing. The all-zero move is `Move::NULL`.
#[derive(Copy, Clone, Default)]
pub struct Move(u32);

impl Move {
    /// The "no move" value
    pub const NULL: Move = Move(0);

    /// Creates a new move
    pub fn new(from: Square, to: Square, piece: Piece, capture: bool,
               promotion: Option<Promotion>, kind: MoveKind) -> Move {
        let prom = promotion.map_or(0, |p| p as u32);
        Move((to as u32) << TO_SHIFT
            | (from as u32) << FROM_SHIFT
            | (piece as u32) << PIECE_SHIFT
            | prom << PROMOTION_SHIFT
            | (capture as u32) << CAPTURE_SHIFT
            | (kind as u32) << KIND_SHIFT)
    }

    /// Returns a copy of the move with the given check annotation
    pub fn with_check(self, check: CheckType) -> Move {
        Move(self.0 & !(3 << CHECK_SHIFT) | (check as u32) << CHECK_SHIFT)
    }

    /// Returns the origin square
    pub fn from(self) -> Square {
        Square::try_from(((self.0 >> FROM_SHIFT) & SQUARE_MASK) as usize).expect("INFALLIBLE")
    }

    /// Returns the destination square
    pub fn to(self) -> Square {
        Square::try_from(((self.0 >> TO_SHIFT) & SQUARE_MASK) as usize).expect("INFALLIBLE")
    }

    /// Returns the piece being moved
    pub fn piece(self) -> Piece {
        Piece::try_from(((self.0 >> PIECE_SHIFT) & 7) as usize).unwrap_or(Piece::Pawn)
    }

    /// Returns the promotion choice, if any
    pub fn promotion(self) -> Option<Promotion> {
        Promotion::from_bits((self.0 >> PROMOTION_SHIFT) & 7)
    }

    /// Returns `true` if the move was flagged as a capture
    pub fn is_capture(self) -> bool {
        (self.0 >> CAPTURE_SHIFT) & 1 != 0
    }

    /// Returns the special-move kind
    pub fn kind(self) -> MoveKind {
        MoveKind::from_bits(self.0 >> KIND_SHIFT)
    }

    /// Returns the check annotation
    pub fn check(self) -> CheckType {
        CheckType::from_bits(self.0 >> CHECK_SHIFT)
    }

    /// Returns `true` for castling moves of either side
    pub fn is_castle(self) -> bool {
        match self.kind() {
            MoveKind::ShortCastle | MoveKind::LongCastle => true,
            _ => false,
        }
    }

    /// Returns `true` for the all-zero move
    pub fn is_null(self) -> bool {
        self.0 == 0
    }

    /// Returns the move in coordinate notation, eg. `e2e4` or `a7a8q`. The null move is `0000`.
    pub fn to_coord(self) -> String {
        if self.is_null() {
            return "0000".to_string();
        }
        let mut s = format!("{}{}", self.from(), self.to());
        if let Some(prom) = self.promotion() {
            s.push(prom.to_char());
        }
        s
    }
}

impl PartialEq for Move {
    fn eq(&self, other: &Self) -> bool {
        self.0 & SQUARES_MASK == other.0 & SQUARES_MASK
    }
}

impl Eq for Move { }

impl Hash for Move {
    fn hash<H: Hasher>(&self, state: &mut H) {
        (self.0 & SQUARES_MASK).hash(state);
    }
}

impl fmt::Display for Move {
    /// Writes the compact form, eg. `Ng1-f3`, `e4xd5`, `e7-e8=Q`. The alternate flag (`{:#}`)
    /// writes coordinate notation instead.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if f.alternate() {
            return self.to_coord().fmt(f);
        }
        if self.is_null() {
            return "--".fmt(f);
        }

        let mut s = String::new();
        if self.piece() != Piece::Pawn {
            s.push(self.piece().to_char(Color::White));
        }
        s += &self.from().to_string();
        s.push(if self.is_capture() { 'x' } else { '-' });
        s += &self.to().to_string();
        if let Some(prom) = self.promotion() {
            s.push('=');
            s.push(Piece::from(prom).to_char(Color::White));
        }
        match self.check() {
            CheckType::Check => s.push('+'),
            CheckType::Checkmate => s.push('#'),
            CheckType::None => {},
        }
        s.fmt(f)
    }
}

impl fmt::Debug for Move {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.is_null() {
            return write!(f, "Move::NULL");
        }
        write!(f, "Move({} {:?}", self, self.kind())?;
        if self.check() != CheckType::None {
            write!(f, " {:?}", self.check())?;
        }
        write!(f, ")")
    }
}
