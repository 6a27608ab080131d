//! Contains structures related to the `Position`
//
//  This Source Code Form is subject to the terms of the Mozilla Public
//  License, v. 2.0. If a copy of the MPL was not distributed with this
//  file, You can obtain one at http://mozilla.org/MPL/2.0/.
//
////////////////////////////////////////////////////////////////////////////////////////////////////
use std::convert::TryInto;
use std::fmt;
use std::hash::{Hash, Hasher};
use super::*;

use Color::*;
use Piece::*;

/// FEN of the standard starting position
pub const START_FEN: &str = "rnbqkbnr/pppppppp/8/8/8/8/PPPPPPPP/RNBQKBNR w KQkq - 0 1";

////////////////////////////////////////////////////////////////////////////////////////////////////
/// One of the four castling rights, in `KQkq` order
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash)]
#[allow(missing_docs)]
pub enum CastlingRight {
    WhiteKingSide = 0,
    WhiteQueenSide = 1,
    BlackKingSide = 2,
    BlackQueenSide = 3,
}

impl CastlingRight {
    /// The number of castling rights
    pub const COUNT: usize = 4;

    /// Every castling right in `KQkq` order
    pub const ALL: [CastlingRight; CastlingRight::COUNT] = [
        CastlingRight::WhiteKingSide, CastlingRight::WhiteQueenSide,
        CastlingRight::BlackKingSide, CastlingRight::BlackQueenSide,
    ];

    /// Returns the right for `color` on the king or queen side
    pub fn new(color: Color, king_side: bool) -> CastlingRight {
        match (color, king_side) {
            (White, true) => CastlingRight::WhiteKingSide,
            (White, false) => CastlingRight::WhiteQueenSide,
            (Black, true) => CastlingRight::BlackKingSide,
            (Black, false) => CastlingRight::BlackQueenSide,
        }
    }

    /// The side this right belongs to
    pub fn color(self) -> Color {
        match self {
            CastlingRight::WhiteKingSide | CastlingRight::WhiteQueenSide => White,
            CastlingRight::BlackKingSide | CastlingRight::BlackQueenSide => Black,
        }
    }

    /// Returns `true` for the king-side rights
    pub fn is_king_side(self) -> bool {
        self == CastlingRight::WhiteKingSide || self == CastlingRight::BlackKingSide
    }

    /// The corner the rook starts on
    pub fn rook_home(self) -> Square {
        let file = if self.is_king_side() { File::H } else { File::A };
        Square::from_coord(file, Rank::relative(self.color(), 0))
    }

    fn to_char(self) -> char {
        "KQkq".as_bytes()[self as usize] as char
    }
}

////////////////////////////////////////////////////////////////////////////////////////////////////
/// When castling rights are lost.
///
/// `Source` only revokes a right when the king or that rook moves. `Standard` also revokes it
/// when the rook is captured on its home square.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum CastlingRule {
    /// Rights are lost only by moving the king or rook
    Source,
    /// Rights are also lost when the rook is captured at home
    Standard,
}

impl Default for CastlingRule {
    fn default() -> Self {
        CastlingRule::Source
    }
}

////////////////////////////////////////////////////////////////////////////////////////////////////
/// A snapshot of the game: piece placement, side to move, castling rights, en passant target and
/// the move clocks.
///
/// Positions are never changed once built. Applying a move produces a new `Position` with its own
/// copy of every array, so earlier positions stay valid. Two positions compare equal when their
/// Zobrist hashes match.
#[allow(missing_copy_implementations)]
#[derive(Debug, Clone)]
pub struct Position {
    board: [Option<(Color, Piece)>; Square::COUNT],
    occ_by_piece: [[Bitboard; Piece::COUNT]; Color::COUNT],
    occ_by_color: [Bitboard; Color::COUNT],
    occ_squares: Bitboard,
    turn: Color,

    castling: [bool; CastlingRight::COUNT],
    ep_square: Option<Square>,

    halfmove_clock: u32,
    fullmove_number: u32,

    zobrist: Zobrist,
    rule: CastlingRule,
}

impl Position {
    /// Returns a position with an empty board
    fn empty_board() -> Position {
        Position {
            board: [None; Square::COUNT],
            occ_by_piece: [[Bitboard::EMPTY; Piece::COUNT]; Color::COUNT],
            occ_by_color: [Bitboard::EMPTY; Color::COUNT],
            occ_squares: Bitboard::EMPTY,
            turn: White,
            castling: [false; CastlingRight::COUNT],
            ep_square: None,
            halfmove_clock: 0,
            fullmove_number: 1,
            zobrist: Zobrist::new(),
            rule: CastlingRule::default(),
        }
    }

    /// Returns the standard starting position
    pub fn start(keys: &ZobristKeys) -> Position {
        Position::from_fen(START_FEN, keys).expect("INFALLIBLE")
    }

    /// Parse a position from a FEN string.
    ///
    /// The half-move clock and full-move number may be left off, in which case they default to
    /// 0 and 1.
    pub fn from_fen(s: &str, keys: &ZobristKeys) -> Result<Position, ParseFenError> {
        use ParseFenError::*;

        let mut pos = Position::empty_board();
        let mut fields = s.split_whitespace();

        // parse the board
        if let Some(board) = fields.next() {
            let mut r = Rank::COUNT - 1;
            let mut f = 0;
            for c in board.chars() {
                match c {
                    '1' ..= '8' => {
                        f += c.to_digit(10).expect("INFALLIBLE") as usize;
                        if f > File::COUNT {
                            return Err(ParseBoard);
                        }
                    }
                    '/' => {
                        if f == File::COUNT && r > 0 {
                            r -= 1;
                            f = 0;
                        } else {
                            return Err(ParseBoard);
                        }
                    }
                    _ => {
                        let sq = match (f.try_into(), r.try_into()) {
                            (Ok(f), Ok(r)) => Square::from_coord(f, r),
                            _ => return Err(ParseBoard),
                        };
                        let (color, piece) = Piece::from_char(c)?;
                        pos.put(color, piece, sq);

                        f += 1;
                    }
                }
            }
            if r > 0 || f != File::COUNT {
                return Err(ParseBoard);
            }
        } else {
            return Err(Empty);
        }

        // parse the turn
        match fields.next() {
            Some(turn) => pos.turn = turn.parse()?,
            None => return Err(ParseTurn),
        }

        // parse the castling flags
        match fields.next() {
            Some("-") => {},
            Some(castling_flags) => {
                for c in castling_flags.chars() {
                    match CastlingRight::ALL.iter().find(|right| right.to_char() == c) {
                        Some(right) => pos.castling[*right as usize] = true,
                        None => return Err(ParseCastling),
                    }
                }
            },
            None => return Err(ParseCastling),
        }

        // parse en passant square
        match fields.next() {
            Some("-") => {},
            Some(ep_square) => {
                let sq: Square = ep_square.parse()?;
                if sq.rank() != Rank::relative(!pos.turn, 2) {
                    return Err(ParseEnPassant);
                }
                pos.ep_square = Some(sq);
            },
            None => return Err(ParseEnPassant),
        }

        // parse half move clock, if present
        if let Some(plies) = fields.next() {
            pos.halfmove_clock = plies.parse().map_err(|_| ParseHalfMoveClock)?;
        }

        // parse move number, if present
        if let Some(move_num) = fields.next() {
            match move_num.parse() {
                Ok(n) if n > 0 => pos.fullmove_number = n,
                _ => return Err(ParseMoveNumber),
            }
        }

        if fields.next().is_some() {
            return Err(ExtraFields);
        }

        // exactly one king per side
        for c in 0..Color::COUNT {
            if pos.occ_by_piece[c][King as usize].len() != 1 {
                return Err(KingCount);
            }
        }

        pos.zobrist = keys.hash(&pos);

        Ok(pos)
    }

    /// Converts the position to a FEN string
    pub fn to_fen(&self) -> String {
        // the board
        let mut board = String::new();

        for r in (0..Rank::COUNT).rev() {
            let mut count = 0;
            for f in 0..File::COUNT {
                let sq = Square::from_coord(
                    f.try_into().expect("INFALLIBLE"),
                    r.try_into().expect("INFALLIBLE"),
                );
                if let Some((c, p)) = self.board[sq as usize] {
                    if count > 0 {
                        board += &count.to_string();
                        count = 0;
                    }
                    board.push(p.to_char(c));
                } else {
                    count += 1;
                }
            }
            if count > 0 {
                board += &count.to_string();
            }
            if r > 0 {
                board += "/";
            }
        }

        // castling rights
        let mut castling: String = CastlingRight::ALL.iter()
            .filter(|right| self.castling[**right as usize])
            .map(|right| right.to_char())
            .collect();
        if castling.is_empty() {
            castling += "-";
        }

        // en passant square
        let ep_square = match self.ep_square {
            Some(sq) => sq.to_string(),
            None => "-".to_string(),
        };

        format!("{} {} {} {} {} {}", board, self.turn, castling, ep_square,
                                     self.halfmove_clock, self.fullmove_number)
    }

    /// Returns the same position with a different castling rule for future moves
    pub fn with_castling_rule(mut self, rule: CastlingRule) -> Position {
        self.rule = rule;
        self
    }

    /// Returns the castling rule applied by `apply_move`
    pub fn castling_rule(&self) -> CastlingRule {
        self.rule
    }

    /// Returns the color whose turn it is
    pub fn side_to_move(&self) -> Color {
        self.turn
    }

    /// Returns the color and type of piece, if any, at the given location
    pub fn piece_at(&self, sq: Square) -> Option<(Color, Piece)> {
        self.board[sq as usize]
    }

    /// Returns the squares holding pieces of color `c` and type `p`
    pub fn pieces(&self, c: Color, p: Piece) -> Bitboard {
        self.occ_by_piece[c as usize][p as usize]
    }

    /// Returns every occupied square
    pub fn occupied(&self) -> Bitboard {
        self.occ_squares
    }

    /// Returns the squares occupied by color `c`
    pub fn occupied_by(&self, c: Color) -> Bitboard {
        self.occ_by_color[c as usize]
    }

    /// Returns `true` if the castling right is still held
    pub fn castling_right(&self, right: CastlingRight) -> bool {
        self.castling[right as usize]
    }

    /// Returns the square a pawn may capture en passant this move, if any
    pub fn en_passant(&self) -> Option<Square> {
        self.ep_square
    }

    /// Returns the number of plies since the last capture or pawn move
    pub fn halfmove_clock(&self) -> u32 {
        self.halfmove_clock
    }

    /// Returns the full-move number, starting at 1 and incremented after each of Black's moves
    pub fn fullmove_number(&self) -> u32 {
        self.fullmove_number
    }

    /// Return the position's Zobrist key
    pub fn hash(&self) -> Zobrist {
        self.zobrist
    }

    /// Returns the square where the king of the given color is located.
    ///
    /// Only `None` if the king was captured, which the pseudo-legal generator allows.
    pub fn king_square(&self, c: Color) -> Option<Square> {
        self.occ_by_piece[c as usize][King as usize].lsb()
    }

    /// Returns the pieces of color `by` that attack `sq`, treating `occupied` as the set of
    /// blockers for sliding pieces.
    pub fn attackers_to(&self, sq: Square, by: Color, occupied: Bitboard,
                        attacks: &AttackTables) -> Bitboard {
        let diagonal = self.pieces(by, Bishop) | self.pieces(by, Queen);
        let orthogonal = self.pieces(by, Rook) | self.pieces(by, Queen);

        (attacks.bishop_attacks(sq, occupied) & diagonal)
            | (attacks.rook_attacks(sq, occupied) & orthogonal)
            | (attacks.knight_attacks(sq) & self.pieces(by, Knight))
            | (attacks.king_attacks(sq) & self.pieces(by, King))
            | (attacks.pawn_attacks(!by, sq) & self.pieces(by, Pawn))
    }

    /// Returns `true` if `sq` is attacked by a piece of color `by`
    pub fn is_square_attacked(&self, sq: Square, by: Color, attacks: &AttackTables) -> bool {
        !self.attackers_to(sq, by, self.occ_squares, attacks).is_empty()
    }

    /// Returns `true` if the side to move is in check
    pub fn in_check(&self, attacks: &AttackTables) -> bool {
        match self.king_square(self.turn) {
            Some(king) => self.is_square_attacked(king, !self.turn, attacks),
            None => false,
        }
    }

    /// Draws the board as text with Black at the top, followed by the FEN and the hash key
    pub fn diagram(&self) -> String {
        const SEPARATOR: &str = "+---+---+---+---+---+---+---+---+\n";
        let mut s = String::new();

        for r in (0..Rank::COUNT).rev() {
            s += SEPARATOR;
            for f in 0..File::COUNT {
                let sq = Square::from_coord(
                    f.try_into().expect("INFALLIBLE"),
                    r.try_into().expect("INFALLIBLE"),
                );
                let ch = self.board[sq as usize].map_or(' ', |(c, p)| p.to_char(c));
                s += &format!("| {} ", ch);
            }
            s += &format!("| {}\n", r + 1);
        }
        s += SEPARATOR;
        s += "  a   b   c   d   e   f   g   h  \n\n";
        s += &format!("Fen         : {}\n", self.to_fen());
        s += &format!("Zobrist Key : {:016X}\n", self.zobrist);

        s
    }

    /// Places a piece on an empty square
    fn put(&mut self, c: Color, p: Piece, sq: Square) {
        self.board[sq as usize] = Some((c, p));
        self.occ_by_piece[c as usize][p as usize].insert(sq);
        self.occ_by_color[c as usize].insert(sq);
        self.occ_squares.insert(sq);
    }

    /// Removes and returns the piece on `sq`, if any
    fn take(&mut self, sq: Square) -> Option<(Color, Piece)> {
        let taken = self.board[sq as usize].take();
        if let Some((c, p)) = taken {
            self.occ_by_piece[c as usize][p as usize].remove(sq);
            self.occ_by_color[c as usize].remove(sq);
            self.occ_squares.remove(sq);
        }
        taken
    }
}

impl PartialEq for Position {
    fn eq(&self, other: &Self) -> bool {
        self.zobrist == other.zobrist
    }
}

impl Eq for Position { }

impl Hash for Position {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.zobrist.hash(state);
    }
}

impl fmt::Display for Position {
    /// Writes out the position using FEN
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.to_fen().fmt(f)
    }
}

////////////////////////////////////////////////////////////////////////////////////////////////////
pub mod zobrist;
mod make;

////////////////////////////////////////////////////////////////////////////////////////////////////
#[cfg(test)]
mod tests {
    use super::*;

    fn keys() -> ZobristKeys {
        ZobristKeys::default()
    }

    fn fen(s: &str) -> Result<Position, ParseFenError> {
        Position::from_fen(s, &keys())
    }

    /// Mailbox and bitboards must describe the same placement
    pub(super) fn assert_consistent(pos: &Position) {
        let mut union = Bitboard::EMPTY;
        for c in 0..Color::COUNT {
            let mut by_color = Bitboard::EMPTY;
            for p in 0..Piece::COUNT {
                let bb = pos.occ_by_piece[c][p];
                assert!(union.is_disjoint(bb), "{} claimed twice", bb);
                union |= bb;
                by_color |= bb;
            }
            assert_eq!(by_color, pos.occ_by_color[c]);
        }
        assert_eq!(union, pos.occ_squares);
        for sq in Square::all() {
            match pos.board[sq as usize] {
                Some((c, p)) => assert!(pos.pieces(c, p).contains(sq)),
                None => assert!(!union.contains(sq)),
            }
        }
    }

    #[test]
    fn start_is_the_standard_starting_position() {
        let pos = Position::start(&keys());
        assert_eq!(pos.to_fen(), START_FEN);
        assert_eq!(pos.occupied().len(), 32);
        assert_eq!(pos.king_square(White), Some(Square::E1));
        assert_eq!(pos.king_square(Black), Some(Square::E8));
        assert_eq!(pos.piece_at(Square::D8), Some((Black, Queen)));
        assert_consistent(&pos);
    }

    /// Tests for Position::from_fen()
    mod from_fen {
        use super::*;
        use ParseFenError::*;

        // 1. empty string returns Err(Empty)
        #[test]
        fn empty_string_returns_error() {
            assert_eq!(fen(""), Err(Empty));
            assert_eq!(fen(" \t\r\n"), Err(Empty));
        }

        // 2. 0 or 9 in board string returns Err(ParseBoard)
        #[test]
        fn invalid_empty_square_count_returns_error() {
            assert_eq!(fen("0K1k5/8/8/8/8/8/8/8 w - - 0 1"), Err(ParseBoard));
            assert_eq!(fen("K1k5/9/8/8/8/8/8/8 w - - 0 1"), Err(ParseBoard));
        }

        // 3. ranks of the wrong length return Err(ParseBoard)
        #[test]
        fn wrong_rank_length_returns_error() {
            assert_eq!(fen("K1k6/8/8/8/8/8/8/8 w - - 0 1"), Err(ParseBoard));
            assert_eq!(fen("K1k4/8/8/8/8/8/8/8 w - - 0 1"), Err(ParseBoard));
            assert_eq!(fen("K1k5/8/8/8/8/8/8/8B w - - 0 1"), Err(ParseBoard));
            assert_eq!(fen("K1k5/8/8/8/8/8/8/6B w - - 0 1"), Err(ParseBoard));
        }

        // 4. the wrong number of ranks returns Err(ParseBoard)
        #[test]
        fn wrong_rank_count_returns_error() {
            assert_eq!(fen("K1k5/8/8/8/8/8/8/8/8 w - - 0 1"), Err(ParseBoard));
            assert_eq!(fen("K1k5/8/8/8/8/8/8 w - - 0 1"), Err(ParseBoard));
        }

        // 5. unknown piece letters return Err(ParseBoard)
        #[test]
        fn bad_piece_letter_returns_error() {
            assert_eq!(fen("K1k4x/8/8/8/8/8/8/8 w - - 0 1"), Err(ParseBoard));
        }

        // 6. missing or bad turn field returns Err(ParseTurn)
        #[test]
        fn bad_turn_returns_error() {
            assert_eq!(fen("K1k5/8/8/8/8/8/8/8"), Err(ParseTurn));
            assert_eq!(fen("K1k5/8/8/8/8/8/8/8 x - - 0 1"), Err(ParseTurn));
        }

        // 7. 'w' and 'b' set the turn correctly
        #[test]
        fn turn_set_correctly() {
            assert_eq!(fen("K1k5/8/8/8/8/8/8/8 w - - 0 1").unwrap().side_to_move(), White);
            assert_eq!(fen("K1k5/8/8/8/8/8/8/8 b - - 0 1").unwrap().side_to_move(), Black);
        }

        // 8. missing or bad castling field returns Err(ParseCastling)
        #[test]
        fn bad_castling_returns_error() {
            assert_eq!(fen("K1k5/8/8/8/8/8/8/8 w"), Err(ParseCastling));
            assert_eq!(fen("K1k5/8/8/8/8/8/8/8 w x - 0 1"), Err(ParseCastling));
        }

        // 9. any combination of "KQkq" sets the matching rights
        #[test]
        fn castling_flags_set_correctly() {
            let pos = fen("r3k2r/8/8/8/8/8/8/R3K2R w Kq - 0 1").unwrap();
            assert!(pos.castling_right(CastlingRight::WhiteKingSide));
            assert!(!pos.castling_right(CastlingRight::WhiteQueenSide));
            assert!(!pos.castling_right(CastlingRight::BlackKingSide));
            assert!(pos.castling_right(CastlingRight::BlackQueenSide));

            let pos = fen("r3k2r/8/8/8/8/8/8/R3K2R w - - 0 1").unwrap();
            assert!(CastlingRight::ALL.iter().all(|r| !pos.castling_right(*r)));
        }

        // 10. en passant field is parsed and checked against the side to move
        #[test]
        fn en_passant_square() {
            assert_eq!(fen("K1k5/8/8/8/8/8/8/8 w -"), Err(ParseEnPassant));
            assert_eq!(fen("K1k5/8/8/8/8/8/8/8 w - x 0 1"), Err(ParseEnPassant));
            assert_eq!(fen("K1k5/8/8/8/8/8/8/8 w - e3 0 1"), Err(ParseEnPassant));
            assert_eq!(fen("K1k5/8/8/7p/8/8/8/8 w - h6 0 1").unwrap().en_passant(),
                Some(Square::H6));
            assert_eq!(fen("K1k5/8/8/8/4P3/8/8/8 b - e3 0 1").unwrap().en_passant(),
                Some(Square::E3));
            assert_eq!(fen("K1k5/8/8/8/8/8/8/8 w - - 0 1").unwrap().en_passant(), None);
        }

        // 11. clocks default when missing and must be numeric
        #[test]
        fn clocks() {
            let pos = fen("K1k5/8/8/8/8/8/8/8 w - -").unwrap();
            assert_eq!(pos.halfmove_clock(), 0);
            assert_eq!(pos.fullmove_number(), 1);

            let pos = fen("K1k5/8/8/8/8/8/8/8 w - - 57 9999").unwrap();
            assert_eq!(pos.halfmove_clock(), 57);
            assert_eq!(pos.fullmove_number(), 9999);

            assert_eq!(fen("K1k5/8/8/8/8/8/8/8 w - - x 1"), Err(ParseHalfMoveClock));
            assert_eq!(fen("K1k5/8/8/8/8/8/8/8 w - - -1 1"), Err(ParseHalfMoveClock));
            assert_eq!(fen("K1k5/8/8/8/8/8/8/8 w - - 0 x"), Err(ParseMoveNumber));
            assert_eq!(fen("K1k5/8/8/8/8/8/8/8 w - - 0 0"), Err(ParseMoveNumber));
        }

        // 12. anything after the move number is an error
        #[test]
        fn extra_fields_return_error() {
            assert_eq!(fen("K1k5/8/8/8/8/8/8/8 w - - 0 1 extra"), Err(ExtraFields));
        }

        // 13. each side needs exactly one king
        #[test]
        fn king_count() {
            assert_eq!(fen("K1k5/8/8/8/8/8/7K/8 w - - 0 1"), Err(KingCount));
            assert_eq!(fen("K7/8/8/8/8/8/8/8 w - - 0 1"), Err(KingCount));
        }

        // 14. fields and placement survive a round trip
        #[test]
        fn back_to_identical_fen() {
            for s in &[
                START_FEN,
                "r3k2r/p1ppqpb1/bn2pnp1/3PN3/1p2P3/2N2Q1p/PPPBBPPP/R3K2R w KQkq - 0 1",
                "rnbqkbnr/pp1ppppp/8/2p5/4P3/8/PPPP1PPP/RNBQKBNR w KQkq c6 0 2",
                "8/2p5/3p4/KP5r/1R3p1k/8/4P1P1/8 b - - 13 42",
            ] {
                let pos = fen(s).unwrap();
                assert_eq!(pos.to_fen(), *s);
                assert_consistent(&pos);
            }
        }
    }

    #[test]
    fn equality_is_by_hash() {
        let a = fen("K1k5/8/8/8/8/8/8/8 w - - 0 1").unwrap();
        let b = fen("K1k5/8/8/8/8/8/8/8 w - - 30 12").unwrap();
        let c = fen("K1k5/8/8/8/8/8/8/8 b - - 0 1").unwrap();
        assert_eq!(a, b);
        assert_ne!(a, c);
    }

    #[test]
    fn hash_depends_on_every_field() {
        let base = fen("r3k2r/8/8/8/4p3/8/8/R3K2R b KQkq - 0 1").unwrap();
        let no_castle = fen("r3k2r/8/8/8/4p3/8/8/R3K2R b KQk - 0 1").unwrap();
        let moved = fen("r3k2r/8/8/8/3p4/8/8/R3K2R b KQkq - 0 1").unwrap();
        assert_ne!(base.hash(), no_castle.hash());
        assert_ne!(base.hash(), moved.hash());
        assert_eq!(base.hash(), keys().hash(&base));
    }

    #[test]
    fn attack_queries() {
        let t = AttackTables::new();
        let pos = fen("4k3/8/8/8/8/8/3p4/R3K3 w - - 0 1").unwrap();
        assert!(pos.in_check(&t));
        assert!(pos.is_square_attacked(Square::C1, Black, &t));
        assert!(pos.is_square_attacked(Square::A8, White, &t));
        assert!(!pos.is_square_attacked(Square::E8, White, &t));
        assert_eq!(pos.attackers_to(Square::E1, Black, pos.occupied(), &t),
            Square::D2.into());
    }

    #[test]
    fn diagram_layout() {
        let pos = Position::start(&keys());
        let d = pos.diagram();
        let lines: Vec<_> = d.lines().collect();
        assert_eq!(lines[0], "+---+---+---+---+---+---+---+---+");
        assert_eq!(lines[1], "| r | n | b | q | k | b | n | r | 8");
        assert_eq!(lines[13], "| P | P | P | P | P | P | P | P | 2");
        assert_eq!(lines[17], "  a   b   c   d   e   f   g   h  ");
        assert_eq!(lines[19], format!("Fen         : {}", START_FEN));
        assert_eq!(lines[20], format!("Zobrist Key : {:016X}", pos.hash()));
    }

    #[test]
    fn castling_right_helpers() {
        assert_eq!(CastlingRight::new(White, true), CastlingRight::WhiteKingSide);
        assert_eq!(CastlingRight::new(Black, false), CastlingRight::BlackQueenSide);
        assert_eq!(CastlingRight::WhiteQueenSide.rook_home(), Square::A1);
        assert_eq!(CastlingRight::BlackKingSide.rook_home(), Square::H8);
        assert_eq!(CastlingRight::BlackKingSide.color(), Black);
    }
}
