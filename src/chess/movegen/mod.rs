//! Move generation.
//!
//! One algorithm serves both the legal and the pseudo-legal generator. The difference is entirely
//! in the `Restrict` implementation handed to `generate`: `CheckRestriction` for legal moves and
//! `Unrestricted` for pseudo-legal ones.
//
//  This Source Code Form is subject to the terms of the Mozilla Public
//  License, v. 2.0. If a copy of the MPL was not distributed with this
//  file, You can obtain one at http://mozilla.org/MPL/2.0/.
//
////////////////////////////////////////////////////////////////////////////////////////////////////
use crate::chess::*;

use Piece::*;

mod restriction;
pub use restriction::{Restrict, Unrestricted, CheckRestriction};

/// Returns every legal move for the side to move
pub fn legal_moves(pos: &Position, attacks: &AttackTables) -> Vec<Move> {
    let mut moves = Vec::with_capacity(64);
    generate(pos, attacks, &CheckRestriction::new(pos, attacks), &mut moves);
    moves
}

/// Returns every pseudo-legal move for the side to move. These may leave the king in check.
pub fn pseudo_legal_moves(pos: &Position, attacks: &AttackTables) -> Vec<Move> {
    let mut moves = Vec::with_capacity(64);
    generate(pos, attacks, &Unrestricted, &mut moves);
    moves
}

/// Appends the moves for the side to move that `restrict` permits.
///
/// King moves come first, then pawns, knights, bishops, rooks and queens. Each origin and
/// destination pair is produced once, except for promotions which produce one move per piece.
pub fn generate<R: Restrict>(pos: &Position, attacks: &AttackTables, restrict: &R,
                             moves: &mut Vec<Move>) {
    let gen = Generator { pos, attacks, restrict, us: pos.side_to_move() };

    gen.king_moves(moves);
    if restrict.checkers().len() > 1 {
        return;
    }

    gen.pawn_moves(moves);
    gen.knight_moves(moves);
    gen.slider_moves(Bishop, moves);
    gen.slider_moves(Rook, moves);
    gen.slider_moves(Queen, moves);
}

struct Generator<'a, R: Restrict> {
    pos: &'a Position,
    attacks: &'a AttackTables,
    restrict: &'a R,
    us: Color,
}

impl<'a, R: Restrict> Generator<'a, R> {
    fn push(&self, moves: &mut Vec<Move>, from: Square, targets: Bitboard, piece: Piece) {
        let theirs = self.pos.occupied_by(!self.us);
        for to in targets {
            moves.push(Move::new(from, to, piece, theirs.contains(to), None, MoveKind::Normal));
        }
    }

    fn king_moves(&self, moves: &mut Vec<Move>) {
        let from = match self.pos.king_square(self.us) {
            Some(sq) => sq,
            None => return,
        };

        let targets = self.attacks.king_attacks(from)
            & !self.pos.occupied_by(self.us)
            & !self.restrict.king_danger();
        self.push(moves, from, targets, King);

        // castling
        if !self.restrict.checkers().is_empty()
            || from != Square::from_coord(File::E, Rank::relative(self.us, 0)) {
            return;
        }
        for &king_side in &[true, false] {
            let right = CastlingRight::new(self.us, king_side);
            if !self.pos.castling_right(right) {
                continue;
            }

            let rook = right.rook_home();
            if self.pos.piece_at(rook) != Some((self.us, Rook))
                || self.pos.occupied().intersects(Bitboard::between(from, rook)) {
                continue;
            }

            let step = if king_side { 1 } else { -1 };
            let (transit, dest) = match (from.shifted(step, 0), from.shifted(2 * step, 0)) {
                (Some(transit), Some(dest)) => (transit, dest),
                _ => continue,
            };
            let danger = self.restrict.king_danger();
            if danger.contains(transit) || danger.contains(dest) {
                continue;
            }

            let kind = if king_side { MoveKind::ShortCastle } else { MoveKind::LongCastle };
            moves.push(Move::new(from, dest, King, false, None, kind));
        }
    }

    fn pawn_moves(&self, moves: &mut Vec<Move>) {
        let forward = self.us.forward();
        let empty = !self.pos.occupied();
        let theirs = self.pos.occupied_by(!self.us);
        let start_rank = Rank::relative(self.us, 1);

        for from in self.pos.pieces(self.us, Pawn) {
            // a pawn pinned along a rank cannot move at all
            if self.restrict.horizontally_pinned().contains(from) {
                continue;
            }
            let allowed = self.restrict.evasion_mask() & self.restrict.pin_ray(from);

            // pushes
            if !self.restrict.diagonally_pinned().contains(from) {
                if let Some(one) = from.shifted(0, forward).filter(|sq| empty.contains(*sq)) {
                    if allowed.contains(one) {
                        self.push_pawn(moves, from, one, false);
                    }
                    if from.rank() == start_rank {
                        if let Some(two) = one.shifted(0, forward) {
                            if empty.contains(two) && allowed.contains(two) {
                                moves.push(Move::new(from, two, Pawn, false, None,
                                                     MoveKind::Normal));
                            }
                        }
                    }
                }
            }

            // captures
            if self.restrict.vertically_pinned().contains(from) {
                continue;
            }
            let targets = self.attacks.pawn_attacks(self.us, from);
            for to in targets & theirs & allowed {
                self.push_pawn(moves, from, to, true);
            }

            // en passant
            if let Some(ep) = self.pos.en_passant() {
                let victim = Square::from_coord(ep.file(), from.rank());
                if targets.contains(ep)
                    && empty.contains(ep)
                    && self.pos.piece_at(victim) == Some((!self.us, Pawn))
                    && self.restrict.allows_en_passant(from, ep, victim) {
                    moves.push(Move::new(from, ep, Pawn, true, None, MoveKind::EnPassant));
                }
            }
        }
    }

    /// Adds a pawn move, expanded into one move per promotion piece on the last rank
    fn push_pawn(&self, moves: &mut Vec<Move>, from: Square, to: Square, capture: bool) {
        if to.rank() == Rank::relative(!self.us, 0) {
            for prom in Promotion::ALL.iter() {
                moves.push(Move::new(from, to, Pawn, capture, Some(*prom), MoveKind::Normal));
            }
        } else {
            moves.push(Move::new(from, to, Pawn, capture, None, MoveKind::Normal));
        }
    }

    fn knight_moves(&self, moves: &mut Vec<Move>) {
        let pinned = self.restrict.pinned();
        for from in self.pos.pieces(self.us, Knight) {
            // a pinned knight can never stay on its line
            if pinned.contains(from) {
                continue;
            }
            let targets = self.attacks.knight_attacks(from)
                & !self.pos.occupied_by(self.us)
                & self.restrict.evasion_mask();
            self.push(moves, from, targets, Knight);
        }
    }

    fn slider_moves(&self, piece: Piece, moves: &mut Vec<Move>) {
        for from in self.pos.pieces(self.us, piece) {
            let targets = match piece {
                Bishop => self.diagonal_targets(from),
                Rook => self.orthogonal_targets(from),
                _ => self.diagonal_targets(from) | self.orthogonal_targets(from),
            };
            self.push(moves, from, targets, piece);
        }
    }

    fn diagonal_targets(&self, from: Square) -> Bitboard {
        let restrict = self.restrict;
        if (restrict.vertically_pinned() | restrict.horizontally_pinned()).contains(from) {
            return Bitboard::EMPTY;
        }

        self.attacks.bishop_attacks(from, self.pos.occupied())
            & !self.pos.occupied_by(self.us)
            & restrict.evasion_mask()
            & restrict.pin_ray(from)
    }

    fn orthogonal_targets(&self, from: Square) -> Bitboard {
        let restrict = self.restrict;
        if restrict.diagonally_pinned().contains(from) {
            return Bitboard::EMPTY;
        }

        self.attacks.rook_attacks(from, self.pos.occupied())
            & !self.pos.occupied_by(self.us)
            & restrict.evasion_mask()
            & restrict.pin_ray(from)
    }
}
