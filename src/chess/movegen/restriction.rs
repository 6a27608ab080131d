//! Pin and check analysis used to keep generated moves legal
//
//  This Source Code Form is subject to the terms of the Mozilla Public
//  License, v. 2.0. If a copy of the MPL was not distributed with this
//  file, You can obtain one at http://mozilla.org/MPL/2.0/.
//
////////////////////////////////////////////////////////////////////////////////////////////////////
use crate::chess::*;

use Piece::*;

////////////////////////////////////////////////////////////////////////////////////////////////////
/// Limits on where the side to move may go, as seen by the move generator.
///
/// The generator asks these questions for every piece; an implementation decides how strict the
/// answers are.
pub trait Restrict {
    /// Squares the king may not step onto
    fn king_danger(&self) -> Bitboard;

    /// Destinations that deal with a check on our king. `FULL` when not in check.
    fn evasion_mask(&self) -> Bitboard;

    /// Enemy pieces giving check
    fn checkers(&self) -> Bitboard;

    /// Every pinned piece
    fn pinned(&self) -> Bitboard;

    /// Pieces pinned along a diagonal
    fn diagonally_pinned(&self) -> Bitboard;

    /// Pieces pinned along a file
    fn vertically_pinned(&self) -> Bitboard;

    /// Pieces pinned along a rank
    fn horizontally_pinned(&self) -> Bitboard;

    /// Squares the piece on `sq` may move to without leaving its pin. `FULL` if not pinned.
    fn pin_ray(&self, sq: Square) -> Bitboard;

    /// Returns `true` if a pawn may capture en passant from `from` to `to`, taking the pawn on
    /// `victim`.
    fn allows_en_passant(&self, from: Square, to: Square, victim: Square) -> bool;
}

////////////////////////////////////////////////////////////////////////////////////////////////////
/// No restrictions at all. Produces pseudo-legal moves.
#[derive(Debug, Copy, Clone, Default)]
pub struct Unrestricted;

impl Restrict for Unrestricted {
    fn king_danger(&self) -> Bitboard {
        Bitboard::EMPTY
    }

    fn evasion_mask(&self) -> Bitboard {
        Bitboard::FULL
    }

    fn checkers(&self) -> Bitboard {
        Bitboard::EMPTY
    }

    fn pinned(&self) -> Bitboard {
        Bitboard::EMPTY
    }

    fn diagonally_pinned(&self) -> Bitboard {
        Bitboard::EMPTY
    }

    fn vertically_pinned(&self) -> Bitboard {
        Bitboard::EMPTY
    }

    fn horizontally_pinned(&self) -> Bitboard {
        Bitboard::EMPTY
    }

    fn pin_ray(&self, _sq: Square) -> Bitboard {
        Bitboard::FULL
    }

    fn allows_en_passant(&self, _from: Square, _to: Square, _victim: Square) -> bool {
        true
    }
}

////////////////////////////////////////////////////////////////////////////////////////////////////
/// Pins, checks and attacked squares for the side to move.
///
/// Computed once per position. A position without a king for the side to move gets no
/// restrictions.
#[derive(Debug, Clone)]
pub struct CheckRestriction<'a> {
    pos: &'a Position,
    attacks: &'a AttackTables,
    king: Option<Square>,
    king_danger: Bitboard,
    checkers: Bitboard,
    evasion_mask: Bitboard,
    diagonal: Bitboard,
    vertical: Bitboard,
    horizontal: Bitboard,
    pin_rays: [Bitboard; Square::COUNT],
}

impl<'a> CheckRestriction<'a> {
    /// Analyses `pos` from the point of view of the side to move
    pub fn new(pos: &'a Position, attacks: &'a AttackTables) -> CheckRestriction<'a> {
        let mut restriction = CheckRestriction {
            pos,
            attacks,
            king: pos.king_square(pos.side_to_move()),
            king_danger: Bitboard::EMPTY,
            checkers: Bitboard::EMPTY,
            evasion_mask: Bitboard::FULL,
            diagonal: Bitboard::EMPTY,
            vertical: Bitboard::EMPTY,
            horizontal: Bitboard::EMPTY,
            pin_rays: [Bitboard::FULL; Square::COUNT],
        };

        if let Some(king) = restriction.king {
            restriction.find_checks(king);
            restriction.find_pins(king);
        }

        restriction
    }

    fn find_checks(&mut self, king: Square) {
        let us = self.pos.side_to_move();
        let them = !us;

        // the king must not hide behind itself from a slider
        let occupied = self.pos.occupied() ^ Bitboard::from(king);
        self.king_danger = attacked_squares(self.pos, self.attacks, them, occupied);

        self.checkers = self.pos.attackers_to(king, them, self.pos.occupied(), self.attacks);
        self.evasion_mask = match self.checkers.len() {
            0 => Bitboard::FULL,
            1 => {
                let checker = self.checkers.lsb().expect("INFALLIBLE");
                self.checkers | Bitboard::between(king, checker)
            },
            _ => Bitboard::EMPTY,
        };
    }

    fn find_pins(&mut self, king: Square) {
        let us = self.pos.side_to_move();
        let them = !us;
        let ours = self.pos.occupied_by(us);
        let theirs = self.pos.occupied_by(them);

        let diagonal_sliders = self.pos.pieces(them, Bishop) | self.pos.pieces(them, Queen);
        let orthogonal_sliders = self.pos.pieces(them, Rook) | self.pos.pieces(them, Queen);

        let candidates = (diagonal_sliders | orthogonal_sliders) & self.attacks.rays(king);
        for slider in candidates {
            let df = slider.file() as i8 - king.file() as i8;
            let dr = slider.rank() as i8 - king.rank() as i8;

            // the slider has to be able to move along the line joining it to the king
            let aligned = if df == 0 || dr == 0 {
                orthogonal_sliders.contains(slider)
            } else {
                df.abs() == dr.abs() && diagonal_sliders.contains(slider)
            };
            if !aligned {
                continue;
            }

            let ray = pin_ray(king, slider);

            // exactly one of our pieces and nothing of theirs between king and slider
            let blockers = ray & ours;
            if blockers.len() != 1 || (ray & theirs) != Bitboard::from(slider) {
                continue;
            }

            let pinned = blockers.lsb().expect("INFALLIBLE");
            self.pin_rays[pinned as usize] = ray;
            if df == 0 {
                self.vertical.insert(pinned);
            } else if dr == 0 {
                self.horizontal.insert(pinned);
            } else {
                self.diagonal.insert(pinned);
            }
        }
    }
}

impl<'a> Restrict for CheckRestriction<'a> {
    fn king_danger(&self) -> Bitboard {
        self.king_danger
    }

    fn evasion_mask(&self) -> Bitboard {
        self.evasion_mask
    }

    fn checkers(&self) -> Bitboard {
        self.checkers
    }

    fn pinned(&self) -> Bitboard {
        self.diagonal | self.vertical | self.horizontal
    }

    fn diagonally_pinned(&self) -> Bitboard {
        self.diagonal
    }

    fn vertically_pinned(&self) -> Bitboard {
        self.vertical
    }

    fn horizontally_pinned(&self) -> Bitboard {
        self.horizontal
    }

    fn pin_ray(&self, sq: Square) -> Bitboard {
        self.pin_rays[sq as usize]
    }

    fn allows_en_passant(&self, from: Square, to: Square, victim: Square) -> bool {
        let king = match self.king {
            Some(king) => king,
            None => return true,
        };

        // play the capture out on the occupancy and look for anything hitting the king
        let them = !self.pos.side_to_move();
        let occupied = (self.pos.occupied() ^ Bitboard::from(from) ^ Bitboard::from(victim))
            | Bitboard::from(to);
        let attackers = self.pos.attackers_to(king, them, occupied, self.attacks)
            & !Bitboard::from(victim);

        attackers.is_empty()
    }
}

/// Walks from `king` towards an aligned `slider`, collecting every square up to and including the
/// slider's.
fn pin_ray(king: Square, slider: Square) -> Bitboard {
    let step_f = (slider.file() as i8 - king.file() as i8).signum();
    let step_r = (slider.rank() as i8 - king.rank() as i8).signum();

    let mut ray = Bitboard::EMPTY;
    let mut sq = king.shifted(step_f, step_r);
    while let Some(s) = sq {
        ray.insert(s);
        if s == slider {
            break;
        }
        sq = s.shifted(step_f, step_r);
    }

    ray
}

/// Every square attacked by `color` with `occupied` as the blockers
fn attacked_squares(pos: &Position, attacks: &AttackTables, color: Color,
                    occupied: Bitboard) -> Bitboard {
    let mut attacked = Bitboard::EMPTY;

    for sq in pos.pieces(color, Pawn) {
        attacked |= attacks.pawn_attacks(color, sq);
    }
    for sq in pos.pieces(color, Knight) {
        attacked |= attacks.knight_attacks(sq);
    }
    for sq in pos.pieces(color, Bishop) | pos.pieces(color, Queen) {
        attacked |= attacks.bishop_attacks(sq, occupied);
    }
    for sq in pos.pieces(color, Rook) | pos.pieces(color, Queen) {
        attacked |= attacks.rook_attacks(sq, occupied);
    }
    for sq in pos.pieces(color, King) {
        attacked |= attacks.king_attacks(sq);
    }

    attacked
}
