//! Defines the error types needed by the chess module
//
//  Copyright 2019 Michael Leany
//
//  This Source Code Form is subject to the terms of the Mozilla Public
//  License, v. 2.0. If a copy of the MPL was not distributed with this
//  file, You can obtain one at http://mozilla.org/MPL/2.0/.
//
////////////////////////////////////////////////////////////////////////////////////////////////////
use std::fmt;
use super::Square;

////////////////////////////////////////////////////////////////////////////////////////////////////
/// Failed to convert an integer to one of the board enums
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub struct TryFromIntError;

impl fmt::Display for TryFromIntError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        "integer out of range".fmt(f)
    }
}

impl std::error::Error for TryFromIntError { }

/// Cannot parse a color
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub struct ParseColorError;

impl fmt::Display for ParseColorError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        "invalid color, expected 'w' or 'b'".fmt(f)
    }
}

impl std::error::Error for ParseColorError { }

/// Cannot parse a piece
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub struct ParsePieceError;

impl fmt::Display for ParsePieceError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        "invalid piece".fmt(f)
    }
}

impl std::error::Error for ParsePieceError { }

/// Cannot parse a file
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub struct ParseFileError;

impl fmt::Display for ParseFileError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        "invalid file".fmt(f)
    }
}

impl std::error::Error for ParseFileError { }

/// Cannot parse a rank
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub struct ParseRankError;

impl fmt::Display for ParseRankError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        "invalid rank".fmt(f)
    }
}

impl std::error::Error for ParseRankError { }

/// Cannot parse a square name
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub struct ParseSquareError;

impl fmt::Display for ParseSquareError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        "invalid square".fmt(f)
    }
}

impl std::error::Error for ParseSquareError { }

impl From<ParseFileError> for ParseSquareError {
    fn from(_: ParseFileError) -> Self {
        ParseSquareError
    }
}

impl From<ParseRankError> for ParseSquareError {
    fn from(_: ParseRankError) -> Self {
        ParseSquareError
    }
}

////////////////////////////////////////////////////////////////////////////////////////////////////
/// The field of a FEN string which could not be parsed, or the reason the position is unusable
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum ParseFenError {
    /// The string is empty
    Empty,
    /// The piece placement field is malformed
    ParseBoard,
    /// The side to move is missing or is not `w` or `b`
    ParseTurn,
    /// The castling field is missing or contains something other than `KQkq` or `-`
    ParseCastling,
    /// The en passant field is missing, not a square, or on an impossible rank
    ParseEnPassant,
    /// The half-move clock is not a non-negative integer
    ParseHalfMoveClock,
    /// The full-move number is not a positive integer
    ParseMoveNumber,
    /// There are fields after the full-move number
    ExtraFields,
    /// A side does not have exactly one king
    KingCount,
}

impl fmt::Display for ParseFenError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        use ParseFenError::*;

        match self {
            Empty => "empty fen string",
            ParseBoard => "invalid piece placement",
            ParseTurn => "invalid side to move",
            ParseCastling => "invalid castling rights",
            ParseEnPassant => "invalid en passant square",
            ParseHalfMoveClock => "invalid half-move clock",
            ParseMoveNumber => "invalid full-move number",
            ExtraFields => "unexpected fields after the full-move number",
            KingCount => "missing king or multiple kings of the same color",
        }.fmt(f)
    }
}

impl std::error::Error for ParseFenError { }

impl From<ParseColorError> for ParseFenError {
    fn from(_: ParseColorError) -> Self {
        ParseFenError::ParseTurn
    }
}

impl From<ParsePieceError> for ParseFenError {
    fn from(_: ParsePieceError) -> Self {
        ParseFenError::ParseBoard
    }
}

impl From<ParseSquareError> for ParseFenError {
    fn from(_: ParseSquareError) -> Self {
        ParseFenError::ParseEnPassant
    }
}

////////////////////////////////////////////////////////////////////////////////////////////////////
/// A coordinate move (eg. `e2e4`, `a7a8q`) could not be parsed
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum ParseMoveError {
    /// The move is not four or five characters long
    Length,
    /// The origin or destination is not a square name
    Square,
    /// The fifth character is not one of `n`, `b`, `r` or `q`
    InvalidPromotion,
    /// A promotion letter was given for a move that is not a promotion
    UnexpectedPromotion,
    /// A pawn reaches the last rank without a promotion letter
    MissingPromotion,
}

impl fmt::Display for ParseMoveError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        use ParseMoveError::*;

        match self {
            Length => "move must be four or five characters",
            Square => "invalid square in move",
            InvalidPromotion => "invalid promotion piece",
            UnexpectedPromotion => "promotion piece given for a non-promoting move",
            MissingPromotion => "promotion piece required",
        }.fmt(f)
    }
}

impl std::error::Error for ParseMoveError { }

impl From<ParseSquareError> for ParseMoveError {
    fn from(_: ParseSquareError) -> Self {
        ParseMoveError::Square
    }
}

////////////////////////////////////////////////////////////////////////////////////////////////////
/// A move could not be applied to a position
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum ApplyMoveError {
    /// There is no piece on the origin square
    EmptySource(Square),
    /// The destination holds a piece of the moving side
    OwnPieceCaptured(Square),
}

impl fmt::Display for ApplyMoveError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ApplyMoveError::EmptySource(sq) => write!(f, "no piece on {}", sq),
            ApplyMoveError::OwnPieceCaptured(sq) => write!(f, "{} holds a piece of the mover", sq),
        }
    }
}

impl std::error::Error for ApplyMoveError { }

////////////////////////////////////////////////////////////////////////////////////////////////////
/// A coordinate move could not be parsed or could not be applied
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum PlayMoveError {
    /// The move text is malformed
    Parse(ParseMoveError),
    /// The move does not fit the position
    Apply(ApplyMoveError),
}

impl fmt::Display for PlayMoveError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PlayMoveError::Parse(err) => err.fmt(f),
            PlayMoveError::Apply(err) => err.fmt(f),
        }
    }
}

impl std::error::Error for PlayMoveError { }

impl From<ParseMoveError> for PlayMoveError {
    fn from(err: ParseMoveError) -> Self {
        PlayMoveError::Parse(err)
    }
}

impl From<ApplyMoveError> for PlayMoveError {
    fn from(err: ApplyMoveError) -> Self {
        PlayMoveError::Apply(err)
    }
}

impl From<ParseSquareError> for PlayMoveError {
    fn from(err: ParseSquareError) -> Self {
        PlayMoveError::Parse(err.into())
    }
}
