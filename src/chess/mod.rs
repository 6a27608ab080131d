//! The `chess` module holds the move generation core: board primitives, attack tables, positions
//! and the generator itself.
//
//  This Source Code Form is subject to the terms of the Mozilla Public
//  License, v. 2.0. If a copy of the MPL was not distributed with this
//  file, You can obtain one at http://mozilla.org/MPL/2.0/.
//
////////////////////////////////////////////////////////////////////////////////////////////////////
use std::ops;
use std::fmt;
use std::mem;
use std::str::FromStr;
use std::convert::TryFrom;
use error::*;

////////////////////////////////////////////////////////////////////////////////////////////////////
/// Which side a piece or player is on, based on the color of the pieces for that side.
#[derive(Debug, Copy, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[allow(missing_docs)]
pub enum Color {
    White = 0,
    Black = 1,
}

impl Color {
    /// The number of colors
    pub const COUNT: usize = 2;

    /// Direction pawns of this color advance in, as a rank delta
    pub fn forward(self) -> i8 {
        match self {
            Color::White => 1,
            Color::Black => -1,
        }
    }
}

impl ops::Not for Color {
    type Output = Color;

    /// Returns the opposite color
    ///
    /// # Example
    /// ```
    /// use magpie::chess::Color;
    /// assert_eq!(!Color::White, Color::Black);
    /// assert_eq!(!Color::Black, Color::White);
    /// ```
    fn not(self) -> Color {
        match self {
            Color::White => Color::Black,
            Color::Black => Color::White,
        }
    }
}

impl fmt::Display for Color {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Color::White => 'w'.fmt(f),
            Color::Black => 'b'.fmt(f),
        }
    }
}

impl FromStr for Color {
    type Err = ParseColorError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "w" => Ok(Color::White),
            "b" => Ok(Color::Black),
            _   => Err(ParseColorError),
        }
    }
}

impl Default for Color {
    fn default() -> Self {
        Color::White
    }
}

impl TryFrom<usize> for Color {
    type Error = TryFromIntError;

    fn try_from(value: usize) -> Result<Self, Self::Error> {
        if value < Self::COUNT {
            unsafe { Ok(mem::transmute::<u8, Color>(value as u8)) }
        } else {
            Err(TryFromIntError)
        }
    }
}

impl From<Color> for usize {
    fn from(value: Color) -> Self {
        value as Self
    }
}

////////////////////////////////////////////////////////////////////////////////////////////////////
/// The type of a chess piece
#[derive(Debug, Copy, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[allow(missing_docs)]
pub enum Piece {
    Pawn = 0,
    Knight = 1,
    Bishop = 2,
    Rook = 3,
    Queen = 4,
    King = 5,
}

impl Piece {
    /// The number of piece types
    pub const COUNT: usize = Piece::King as usize + 1;

    /// All piece types in index order
    pub const ALL: [Piece; Piece::COUNT] = [
        Piece::Pawn, Piece::Knight, Piece::Bishop, Piece::Rook, Piece::Queen, Piece::King,
    ];

    /// Returns the FEN character for a piece of this type and the given color
    pub fn to_char(self, c: Color) -> char {
        let ch = match self {
            Piece::Pawn => 'P',
            Piece::Knight => 'N',
            Piece::Bishop => 'B',
            Piece::Rook => 'R',
            Piece::Queen => 'Q',
            Piece::King => 'K',
        };

        match c {
            Color::White => ch,
            Color::Black => ch.to_ascii_lowercase(),
        }
    }

    /// Parses a FEN piece character, uppercase for white and lowercase for black
    pub fn from_char(ch: char) -> Result<(Color, Piece), ParsePieceError> {
        let color = if ch.is_ascii_uppercase() { Color::White } else { Color::Black };
        let piece = ch.to_string().parse()?;
        Ok((color, piece))
    }
}

impl fmt::Display for Piece {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.to_char(Color::White).fmt(f)
    }
}

impl FromStr for Piece {
    type Err = ParsePieceError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "P"|"p" => Ok(Piece::Pawn),
            "N"|"n" => Ok(Piece::Knight),
            "B"|"b" => Ok(Piece::Bishop),
            "R"|"r" => Ok(Piece::Rook),
            "Q"|"q" => Ok(Piece::Queen),
            "K"|"k" => Ok(Piece::King),
            _       => Err(ParsePieceError),
        }
    }
}

impl Default for Piece {
    fn default() -> Self {
        Piece::Pawn
    }
}

impl TryFrom<usize> for Piece {
    type Error = TryFromIntError;

    fn try_from(value: usize) -> Result<Self, Self::Error> {
        if value < Self::COUNT {
            unsafe { Ok(mem::transmute::<u8, Piece>(value as u8)) }
        } else {
            Err(TryFromIntError)
        }
    }
}

impl From<Piece> for usize {
    fn from(value: Piece) -> Self {
        value as Self
    }
}

////////////////////////////////////////////////////////////////////////////////////////////////////
/// Vertical column of the board, labeled from left to right from `White`'s perspective as
/// `A` through `H`.
#[derive(Debug, Copy, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[allow(missing_docs)]
pub enum File {
    // discriminants are spelled out so nothing can go wrong when we use transmute later
    A = 0, B = 1, C = 2, D = 3, E = 4, F = 5, G = 6, H = 7,
}

impl File {
    /// The number of files
    pub const COUNT: usize = File::H as usize + 1;
}

impl fmt::Display for File {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        ((b'a' + *self as u8) as char).fmt(f)
    }
}

impl FromStr for File {
    type Err = ParseFileError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.as_bytes() {
            [c @ b'a'..=b'h'] => File::try_from((c - b'a') as usize).map_err(|_| ParseFileError),
            _ => Err(ParseFileError),
        }
    }
}

impl Default for File {
    fn default() -> Self {
        File::A
    }
}

impl TryFrom<usize> for File {
    type Error = TryFromIntError;

    fn try_from(value: usize) -> Result<Self, Self::Error> {
        if value < Self::COUNT {
            unsafe { Ok(mem::transmute::<u8, File>(value as u8)) }
        } else {
            Err(TryFromIntError)
        }
    }
}

impl From<File> for usize {
    fn from(value: File) -> Self {
        value as Self
    }
}

////////////////////////////////////////////////////////////////////////////////////////////////////
/// Horizontal row of the board, labeled from nearest to farthest from `White`'s perspective
/// as `R1` through `R8`.
#[derive(Debug, Copy, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[allow(missing_docs)]
pub enum Rank {
    // discriminants are spelled out so nothing can go wrong when we use transmute later
    R1 = 0, R2 = 1, R3 = 2, R4 = 3, R5 = 4, R6 = 5, R7 = 6, R8 = 7,
}

impl Rank {
    /// The number of ranks
    pub const COUNT: usize = Rank::R8 as usize + 1;

    /// The rank `n` steps away from `color`'s back rank
    pub fn relative(color: Color, n: usize) -> Rank {
        let r = match color {
            Color::White => n,
            Color::Black => Rank::COUNT - 1 - n,
        };
        Rank::try_from(r).expect("INFALLIBLE")
    }
}

impl fmt::Display for Rank {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        ((b'1' + *self as u8) as char).fmt(f)
    }
}

impl FromStr for Rank {
    type Err = ParseRankError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.as_bytes() {
            [c @ b'1'..=b'8'] => Rank::try_from((c - b'1') as usize).map_err(|_| ParseRankError),
            _ => Err(ParseRankError),
        }
    }
}

impl Default for Rank {
    fn default() -> Self {
        Rank::R1
    }
}

impl TryFrom<usize> for Rank {
    type Error = TryFromIntError;

    fn try_from(value: usize) -> Result<Self, Self::Error> {
        if value < Self::COUNT {
            unsafe { Ok(mem::transmute::<u8, Rank>(value as u8)) }
        } else {
            Err(TryFromIntError)
        }
    }
}

impl From<Rank> for usize {
    fn from(value: Rank) -> Self {
        value as Self
    }
}

////////////////////////////////////////////////////////////////////////////////////////////////////
/// A specific square on the board, labeled using the `File` and `Rank` as coordinates.
///
/// Squares are numbered rank by rank, so `A1` is 0, `H1` is 7, `A2` is 8 and `H8` is 63.
#[derive(Debug, Copy, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[allow(missing_docs)]
pub enum Square {
    // discriminants are spelled out so nothing can go wrong when we use transmute later
    A1 = 0o00, B1 = 0o01, C1 = 0o02, D1 = 0o03, E1 = 0o04, F1 = 0o05, G1 = 0o06, H1 = 0o07,
    A2 = 0o10, B2 = 0o11, C2 = 0o12, D2 = 0o13, E2 = 0o14, F2 = 0o15, G2 = 0o16, H2 = 0o17,
    A3 = 0o20, B3 = 0o21, C3 = 0o22, D3 = 0o23, E3 = 0o24, F3 = 0o25, G3 = 0o26, H3 = 0o27,
    A4 = 0o30, B4 = 0o31, C4 = 0o32, D4 = 0o33, E4 = 0o34, F4 = 0o35, G4 = 0o36, H4 = 0o37,
    A5 = 0o40, B5 = 0o41, C5 = 0o42, D5 = 0o43, E5 = 0o44, F5 = 0o45, G5 = 0o46, H5 = 0o47,
    A6 = 0o50, B6 = 0o51, C6 = 0o52, D6 = 0o53, E6 = 0o54, F6 = 0o55, G6 = 0o56, H6 = 0o57,
    A7 = 0o60, B7 = 0o61, C7 = 0o62, D7 = 0o63, E7 = 0o64, F7 = 0o65, G7 = 0o66, H7 = 0o67,
    A8 = 0o70, B8 = 0o71, C8 = 0o72, D8 = 0o73, E8 = 0o74, F8 = 0o75, G8 = 0o76, H8 = 0o77,
}

impl Square {
    /// The number of squares
    pub const COUNT: usize = Square::H8 as usize + 1;

    /// Returns a square from its file and rank
    pub fn from_coord(file: File, rank: Rank) -> Square {
        Square::try_from(((rank as usize) << 3) + file as usize).expect("INFALLIBLE")
    }

    /// Returns the square's file
    pub fn file(self) -> File {
        File::try_from((self as usize) & 7).expect("INFALLIBLE")
    }

    /// Returns the square's rank
    pub fn rank(self) -> Rank {
        Rank::try_from((self as usize) >> 3).expect("INFALLIBLE")
    }

    /// Returns the square `df` files and `dr` ranks away, or `None` if that is off the board
    pub fn shifted(self, df: i8, dr: i8) -> Option<Square> {
        let f = self.file() as i8 + df;
        let r = self.rank() as i8 + dr;

        if (0..8).contains(&f) && (0..8).contains(&r) {
            Square::try_from((r * 8 + f) as usize).ok()
        } else {
            None
        }
    }

    /// Iterates over every square from `A1` to `H8`
    pub fn all() -> impl Iterator<Item = Square> {
        (0..Square::COUNT).map(|i| Square::try_from(i).expect("INFALLIBLE"))
    }
}

impl fmt::Display for Square {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        (self.file().to_string() + &self.rank().to_string()).fmt(f)
    }
}

impl FromStr for Square {
    type Err = ParseSquareError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        if s.len() == 2 && s.is_char_boundary(1) {
            Ok(Square::from_coord(s[0..1].parse()?, s[1..2].parse()?))
        } else {
            Err(ParseSquareError)
        }
    }
}

impl Default for Square {
    fn default() -> Self {
        Square::A1
    }
}

impl TryFrom<usize> for Square {
    type Error = TryFromIntError;

    fn try_from(value: usize) -> Result<Self, Self::Error> {
        if value < Self::COUNT {
            unsafe { Ok(mem::transmute::<u8, Square>(value as u8)) }
        } else {
            Err(TryFromIntError)
        }
    }
}

impl From<Square> for usize {
    fn from(value: Square) -> Self {
        value as Self
    }
}

////////////////////////////////////////////////////////////////////////////////////////////////////
/// The read-only lookup data shared by positions and the move generator.
///
/// Built once at startup and passed by reference; nothing in here changes afterwards, so a single
/// instance can be shared freely between threads.
#[derive(Debug)]
pub struct Tables {
    attacks: AttackTables,
    keys: ZobristKeys,
}

impl Tables {
    /// Builds the attack tables and draws the Zobrist keys from `seed`
    pub fn new(seed: u64) -> Tables {
        Tables {
            attacks: AttackTables::new(),
            keys: ZobristKeys::new(seed),
        }
    }

    /// Returns the attack tables
    pub fn attacks(&self) -> &AttackTables {
        &self.attacks
    }

    /// Returns the Zobrist keys
    pub fn keys(&self) -> &ZobristKeys {
        &self.keys
    }
}

impl Default for Tables {
    fn default() -> Self {
        Tables::new(DEFAULT_SEED)
    }
}

////////////////////////////////////////////////////////////////////////////////////////////////////
pub mod bitboard;
pub use bitboard::Bitboard;
pub use bitboard::magic::AttackTables;

mod moves;
pub use moves::{Move, MoveKind, Promotion, CheckType};

mod position;
pub use position::{Position, CastlingRight, CastlingRule, START_FEN};
pub use position::zobrist::{Zobrist, ZobristKeys, DEFAULT_SEED};

pub mod movegen;
pub mod variations;

pub mod error;


#[cfg(test)]
mod piece_tests {
    use std::convert::TryFrom;
    use super::{Color, Piece};

    #[test]
    fn display_trait_works() {
        let s: String = Piece::ALL.iter().map(|p| p.to_string()).collect();
        assert_eq!(s, "PNBRQK");
    }

    #[test]
    fn fromstr_trait_works() {
        assert_eq!("N".parse::<Piece>().unwrap(), Piece::Knight);
        assert_eq!("q".parse::<Piece>().unwrap(), Piece::Queen);
        assert!("X".parse::<Piece>().is_err());
        assert!("".parse::<Piece>().is_err());
    }

    #[test]
    fn chars_carry_color() {
        assert_eq!(Piece::Rook.to_char(Color::White), 'R');
        assert_eq!(Piece::Rook.to_char(Color::Black), 'r');
        assert_eq!(Piece::from_char('k').unwrap(), (Color::Black, Piece::King));
        assert_eq!(Piece::from_char('P').unwrap(), (Color::White, Piece::Pawn));
        assert!(Piece::from_char('x').is_err());
    }

    #[test]
    fn usize_conversions_are_consistent() {
        for (i, p) in Piece::ALL.iter().enumerate() {
            assert_eq!(usize::from(*p), i);
            assert_eq!(Piece::try_from(i).unwrap(), *p);
        }
        assert!(Piece::try_from(6).is_err());
    }
}

#[cfg(test)]
mod file_rank_tests {
    use super::{Color, File, Rank};

    #[test]
    fn display_and_fromstr_agree() {
        assert_eq!(File::A.to_string(), "a");
        assert_eq!(File::H.to_string(), "h");
        assert_eq!(Rank::R1.to_string(), "1");
        assert_eq!(Rank::R8.to_string(), "8");
        assert_eq!("e".parse::<File>().unwrap(), File::E);
        assert_eq!("7".parse::<Rank>().unwrap(), Rank::R7);
    }

    #[test]
    fn fromstr_rejects_bad_input() {
        assert!("i".parse::<File>().is_err());
        assert!("A".parse::<File>().is_err());
        assert!("ab".parse::<File>().is_err());
        assert!("0".parse::<Rank>().is_err());
        assert!("9".parse::<Rank>().is_err());
        assert!("".parse::<Rank>().is_err());
    }

    #[test]
    fn relative_ranks() {
        assert_eq!(Rank::relative(Color::White, 0), Rank::R1);
        assert_eq!(Rank::relative(Color::White, 1), Rank::R2);
        assert_eq!(Rank::relative(Color::Black, 0), Rank::R8);
        assert_eq!(Rank::relative(Color::Black, 3), Rank::R5);
    }
}

#[cfg(test)]
mod square_tests {
    use std::convert::TryFrom;
    use super::{File, Rank, Square};

    #[test]
    fn squares_are_numbered_rank_by_rank() {
        assert_eq!(Square::A1 as usize, 0);
        assert_eq!(Square::H1 as usize, 7);
        assert_eq!(Square::A2 as usize, 8);
        assert_eq!(Square::E4 as usize, 28);
        assert_eq!(Square::H8 as usize, 63);
    }

    #[test]
    fn file_and_rank_methods_match_from_coord() {
        for i in 0..Square::COUNT {
            let s = Square::try_from(i).unwrap();
            assert_eq!(s.file() as usize, i % 8);
            assert_eq!(s.rank() as usize, i / 8);
            assert_eq!(Square::from_coord(s.file(), s.rank()), s);
        }
        assert_eq!(Square::from_coord(File::C, Rank::R6), Square::C6);
    }

    #[test]
    fn display_and_fromstr_traits_match() {
        for s in Square::all() {
            assert_eq!(format!("{}", s), format!("{}{}", s.file(), s.rank()));
            assert_eq!(s.to_string().parse::<Square>().unwrap(), s);
        }
        assert_eq!(Square::A1.to_string(), "a1");
        assert_eq!(Square::H8.to_string(), "h8");
    }

    #[test]
    fn fromstr_trait_produces_errors_when_it_should() {
        assert!("a".parse::<Square>().is_err());
        assert!("1".parse::<Square>().is_err());
        assert!("ax".parse::<Square>().is_err());
        assert!("x1".parse::<Square>().is_err());
        assert!("a1x".parse::<Square>().is_err());
        assert!("a9".parse::<Square>().is_err());
        assert!("é".parse::<Square>().is_err());
    }

    #[test]
    fn shifted_stays_on_the_board() {
        assert_eq!(Square::E4.shifted(1, 2), Some(Square::F6));
        assert_eq!(Square::E4.shifted(-4, -3), Some(Square::A1));
        assert_eq!(Square::H4.shifted(1, 0), None);
        assert_eq!(Square::A4.shifted(-1, 0), None);
        assert_eq!(Square::E8.shifted(0, 1), None);
        assert_eq!(Square::E1.shifted(0, -1), None);
    }

    #[test]
    fn all_visits_every_square_in_order() {
        let v: Vec<_> = Square::all().collect();
        assert_eq!(v.len(), 64);
        assert_eq!(v[0], Square::A1);
        assert_eq!(v[63], Square::H8);
    }

    #[test]
    fn out_of_bound_usize_conversion_is_an_error() {
        assert!(Square::try_from(Square::COUNT).is_err());
    }
}
