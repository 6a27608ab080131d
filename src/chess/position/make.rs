//! Applying moves to a `Position`
//
//  This Source Code Form is subject to the terms of the Mozilla Public
//  License, v. 2.0. If a copy of the MPL was not distributed with this
//  file, You can obtain one at http://mozilla.org/MPL/2.0/.
//
////////////////////////////////////////////////////////////////////////////////////////////////////
use super::*;

impl Position {
    /// Applies `mv` and returns the resulting position. `self` is left untouched.
    ///
    /// Only structural checks are made: the origin must hold a piece and the destination must not
    /// hold one of the mover's own pieces. Whatever stands on the destination is captured, whether
    /// or not the move was flagged as a capture.
    pub fn apply_move(&self, mv: Move, keys: &ZobristKeys) -> Result<Position, ApplyMoveError> {
        let (orig, dest) = (mv.from(), mv.to());
        let (color, piece) = match self.board[orig as usize] {
            Some(pc) => pc,
            None => return Err(ApplyMoveError::EmptySource(orig)),
        };
        if let Some((c, _)) = self.board[dest as usize] {
            if c == color {
                return Err(ApplyMoveError::OwnPieceCaptured(dest));
            }
        }

        let mut pos = self.clone();
        let mut reset_clock = piece == Pawn;

        // remove the captured piece, which sits beside the destination for en passant
        let capt_sq = if mv.kind() == MoveKind::EnPassant && piece == Pawn {
            Square::from_coord(dest.file(), orig.rank())
        } else {
            dest
        };
        if let Some((_, capt_pc)) = pos.take(capt_sq) {
            reset_clock = true;
            if capt_pc == Rook && pos.rule == CastlingRule::Standard {
                pos.revoke_rook_right(!color, capt_sq);
            }
        }

        // move the piece, promoting if asked to
        pos.take(orig);
        let placed = match (piece, mv.promotion()) {
            (Pawn, Some(prom)) => prom.into(),
            _ => piece,
        };
        pos.put(color, placed, dest);

        // relocate the rook when castling
        if piece == King {
            let rook_move = match mv.kind() {
                MoveKind::ShortCastle => Some((orig.shifted(3, 0), orig.shifted(1, 0))),
                MoveKind::LongCastle => Some((orig.shifted(-4, 0), orig.shifted(-1, 0))),
                _ => None,
            };
            if let Some((Some(rook_orig), Some(rook_dest))) = rook_move {
                if let Some(rook) = pos.take(rook_orig) {
                    pos.put(rook.0, rook.1, rook_dest);
                }
            }

            pos.castling[CastlingRight::new(color, true) as usize] = false;
            pos.castling[CastlingRight::new(color, false) as usize] = false;
        } else if piece == Rook {
            pos.revoke_rook_right(color, orig);
        }

        // en passant target
        pos.ep_square = None;
        if piece == Pawn && (dest as i32 - orig as i32).abs() == 16 {
            pos.ep_square = orig.shifted(0, color.forward());
        }

        // clocks and turn
        pos.halfmove_clock = if reset_clock { 0 } else { pos.halfmove_clock + 1 };
        if color == Black {
            pos.fullmove_number += 1;
        }
        pos.turn = !color;

        pos.zobrist = keys.hash(&pos);

        Ok(pos)
    }

    /// Builds the `Move` described by a coordinate string such as `e2e4` or `e7e8q`.
    ///
    /// The move kind, moved piece and capture flag are worked out from this position: a king
    /// moving two files castles, and a pawn moving diagonally onto the empty en passant target
    /// captures en passant. No legality check is made.
    pub fn coord_move(&self, s: &str) -> Result<Move, PlayMoveError> {
        if !s.is_ascii() || s.len() < 4 || s.len() > 5 {
            return Err(ParseMoveError::Length.into());
        }

        let orig: Square = s[0..2].parse()?;
        let dest: Square = s[2..4].parse()?;
        let promotion = match s[4..].chars().next() {
            Some(ch) => match Promotion::from_char(ch) {
                Some(prom) => Some(prom),
                None => return Err(ParseMoveError::InvalidPromotion.into()),
            },
            None => None,
        };

        let (color, piece) = match self.board[orig as usize] {
            Some(pc) => pc,
            None => return Err(ApplyMoveError::EmptySource(orig).into()),
        };
        let capture = self.board[dest as usize].is_some();
        let file_delta = dest.file() as i32 - orig.file() as i32;

        let mut kind = MoveKind::Normal;
        if piece == King && file_delta == 2 {
            kind = MoveKind::ShortCastle;
        } else if piece == King && file_delta == -2 {
            kind = MoveKind::LongCastle;
        } else if piece == Pawn && file_delta != 0 && !capture && self.ep_square == Some(dest) {
            kind = MoveKind::EnPassant;
        }

        let last_rank = Rank::relative(!color, 0);
        if piece == Pawn && dest.rank() == last_rank {
            if promotion.is_none() {
                return Err(ParseMoveError::MissingPromotion.into());
            }
        } else if promotion.is_some() {
            return Err(ParseMoveError::UnexpectedPromotion.into());
        }

        Ok(Move::new(orig, dest, piece, capture || kind == MoveKind::EnPassant, promotion, kind))
    }

    /// Parses a coordinate move and applies it
    pub fn apply_coord_move(&self, s: &str, keys: &ZobristKeys) -> Result<Position, PlayMoveError> {
        let mv = self.coord_move(s)?;
        Ok(self.apply_move(mv, keys)?)
    }

    /// Drops the right tied to a rook of `color` on `sq`, if `sq` is that rook's home corner
    fn revoke_rook_right(&mut self, color: Color, sq: Square) {
        for &king_side in &[true, false] {
            let right = CastlingRight::new(color, king_side);
            if right.rook_home() == sq {
                self.castling[right as usize] = false;
            }
        }
    }
}

////////////////////////////////////////////////////////////////////////////////////////////////////
#[cfg(test)]
mod tests {
    use super::*;
    use super::super::tests::assert_consistent;

    fn keys() -> ZobristKeys {
        ZobristKeys::default()
    }

    fn play(fen: &str, moves: &[&str]) -> Position {
        let keys = keys();
        let mut pos = Position::from_fen(fen, &keys).unwrap();
        for mv in moves {
            pos = pos.apply_coord_move(mv, &keys).unwrap();
            assert_consistent(&pos);
        }
        pos
    }

    #[test]
    fn prior_position_is_unchanged() {
        let keys = keys();
        let before = Position::start(&keys);
        let fen = before.to_fen();
        let hash = before.hash();

        let after = before.apply_coord_move("e2e4", &keys).unwrap();

        assert_eq!(before.to_fen(), fen);
        assert_eq!(before.hash(), hash);
        assert_eq!(before.piece_at(Square::E2), Some((White, Pawn)));
        assert_eq!(before.piece_at(Square::E4), None);
        assert_eq!(after.piece_at(Square::E2), None);
        assert_eq!(after.piece_at(Square::E4), Some((White, Pawn)));
        assert_ne!(before, after);
    }

    #[test]
    fn double_push_sets_en_passant_target() {
        let pos = play(START_FEN, &["e2e4"]);
        assert_eq!(pos.to_fen(), "rnbqkbnr/pppppppp/8/8/4P3/8/PPPP1PPP/RNBQKBNR b KQkq e3 0 1");
        let pos = play(START_FEN, &["e2e4", "c7c5"]);
        assert_eq!(pos.to_fen(), "rnbqkbnr/pp1ppppp/8/2p5/4P3/8/PPPP1PPP/RNBQKBNR w KQkq c6 0 2");
        let pos = play(START_FEN, &["e2e4", "c7c5", "g1f3"]);
        assert_eq!(pos.en_passant(), None);
        assert_eq!(pos.halfmove_clock(), 1);
    }

    #[test]
    fn en_passant_removes_the_double_pushed_pawn() {
        let pos = play("4k3/8/8/8/1p6/8/P7/4K3 w - - 0 1", &["a2a4"]);
        assert_eq!(pos.en_passant(), Some(Square::A3));

        let mv = pos.coord_move("b4a3").unwrap();
        assert_eq!(mv.kind(), MoveKind::EnPassant);
        assert!(mv.is_capture());

        let pos = pos.apply_move(mv, &keys()).unwrap();
        assert_eq!(pos.piece_at(Square::A3), Some((Black, Pawn)));
        assert_eq!(pos.piece_at(Square::A4), None);
        assert_eq!(pos.piece_at(Square::B4), None);
        assert_eq!(pos.occupied().len(), 3);
        assert_eq!(pos.halfmove_clock(), 0);
        assert_eq!(pos.fullmove_number(), 2);
    }

    #[test]
    fn castling_moves_both_pieces_and_clears_rights() {
        let fen = "r3k2r/8/8/8/8/8/8/R3K2R w KQkq - 0 1";

        let pos = play(fen, &["e1g1"]);
        assert_eq!(pos.piece_at(Square::G1), Some((White, King)));
        assert_eq!(pos.piece_at(Square::F1), Some((White, Rook)));
        assert_eq!(pos.piece_at(Square::H1), None);
        assert!(!pos.castling_right(CastlingRight::WhiteKingSide));
        assert!(!pos.castling_right(CastlingRight::WhiteQueenSide));
        assert!(pos.castling_right(CastlingRight::BlackKingSide));

        let pos = play(fen, &["e1g1", "e8c8"]);
        assert_eq!(pos.piece_at(Square::C8), Some((Black, King)));
        assert_eq!(pos.piece_at(Square::D8), Some((Black, Rook)));
        assert_eq!(pos.piece_at(Square::A8), None);
        assert_eq!(pos.to_fen(), "2kr3r/8/8/8/8/8/8/R4RK1 w - - 2 2");
    }

    #[test]
    fn rook_moves_revoke_one_right() {
        let pos = play("r3k2r/8/8/8/8/8/8/R3K2R w KQkq - 0 1", &["a1a2", "h8h7"]);
        assert_eq!(pos.to_fen(), "r3k3/7r/8/8/8/8/R7/4K2R w Kq - 2 2");
    }

    #[test]
    fn rook_capture_depends_on_castling_rule() {
        let keys = keys();
        let fen = "r3k2r/8/8/8/8/8/8/R3K2R w KQkq - 0 1";

        let source = Position::from_fen(fen, &keys).unwrap();
        let pos = source.apply_coord_move("a1a8", &keys).unwrap();
        assert_eq!(pos.to_fen(), "R3k2r/8/8/8/8/8/8/4K2R b Kkq - 0 1");

        let standard = source.clone().with_castling_rule(CastlingRule::Standard);
        let pos = standard.apply_coord_move("a1a8", &keys).unwrap();
        assert_eq!(pos.to_fen(), "R3k2r/8/8/8/8/8/8/4K2R b Kk - 0 1");
        assert_eq!(pos.castling_rule(), CastlingRule::Standard);
    }

    #[test]
    fn promotion_replaces_the_pawn() {
        let pos = play("1n2k3/P7/8/8/8/8/8/4K3 w - - 5 40", &["a7b8q"]);
        assert_eq!(pos.piece_at(Square::B8), Some((White, Queen)));
        assert_eq!(pos.pieces(White, Pawn), Bitboard::EMPTY);
        assert_eq!(pos.pieces(Black, Knight), Bitboard::EMPTY);
        assert_eq!(pos.halfmove_clock(), 0);

        let pos = play("4k3/8/8/8/8/8/p7/4K3 b - - 0 1", &["a2a1n"]);
        assert_eq!(pos.piece_at(Square::A1), Some((Black, Knight)));
    }

    #[test]
    fn hash_matches_a_fresh_parse() {
        let keys = keys();
        let pos = play(START_FEN, &["g1f3", "d7d5", "e2e4", "d5e4"]);
        let reparsed = Position::from_fen(&pos.to_fen(), &keys).unwrap();
        assert_eq!(pos.hash(), reparsed.hash());
    }

    #[test]
    fn structural_errors() {
        let keys = keys();
        let pos = Position::start(&keys);

        let mv = Move::new(Square::E4, Square::E5, Piece::Pawn, false, None, MoveKind::Normal);
        assert_eq!(pos.apply_move(mv, &keys), Err(ApplyMoveError::EmptySource(Square::E4)));

        let mv = Move::new(Square::D1, Square::D2, Piece::Queen, true, None, MoveKind::Normal);
        assert_eq!(pos.apply_move(mv, &keys), Err(ApplyMoveError::OwnPieceCaptured(Square::D2)));

        assert_eq!(pos.apply_coord_move("e3e4", &keys),
            Err(PlayMoveError::Apply(ApplyMoveError::EmptySource(Square::E3))));
    }

    #[test]
    fn coordinate_parse_errors() {
        let pos = Position::from_fen("4k3/P7/8/8/8/8/8/4K3 w - - 0 1", &keys()).unwrap();
        let err = |s: &str| match pos.coord_move(s) {
            Err(PlayMoveError::Parse(e)) => Some(e),
            _ => None,
        };

        assert_eq!(err("e1"), Some(ParseMoveError::Length));
        assert_eq!(err("e1e2qq"), Some(ParseMoveError::Length));
        assert_eq!(err("e1é2"), Some(ParseMoveError::Length));
        assert_eq!(err("z1e2"), Some(ParseMoveError::Square));
        assert_eq!(err("e1e9"), Some(ParseMoveError::Square));
        assert_eq!(err("a7a8k"), Some(ParseMoveError::InvalidPromotion));
        assert_eq!(err("a7a8Q"), Some(ParseMoveError::InvalidPromotion));
        assert_eq!(err("a7a8"), Some(ParseMoveError::MissingPromotion));
        assert_eq!(err("e1e2q"), Some(ParseMoveError::UnexpectedPromotion));
        assert_eq!(pos.coord_move("a7a8q").unwrap().promotion(), Some(Promotion::Queen));
    }

    #[test]
    fn coordinate_moves_are_classified() {
        let pos = Position::from_fen("r3k2r/8/8/8/8/8/8/R3K2R w KQkq - 0 1", &keys()).unwrap();
        assert_eq!(pos.coord_move("e1g1").unwrap().kind(), MoveKind::ShortCastle);
        assert_eq!(pos.coord_move("e1c1").unwrap().kind(), MoveKind::LongCastle);
        assert_eq!(pos.coord_move("e1f1").unwrap().kind(), MoveKind::Normal);
        assert!(pos.coord_move("a1a8").unwrap().is_capture());
        assert!(!pos.coord_move("a1a7").unwrap().is_capture());
    }
}
