//! Contains structure and data for Zobrist hash keys
//
//  Copyright 2020 Michael Leany
//
//  This Source Code Form is subject to the terms of the Mozilla Public
//  License, v. 2.0. If a copy of the MPL was not distributed with this
//  file, You can obtain one at http://mozilla.org/MPL/2.0/.
//
////////////////////////////////////////////////////////////////////////////////////////////////////
use std::fmt;
use rand::{Rng, SeedableRng};
use rand::rngs::StdRng;
use super::*;

/// The seed used when no other is configured
pub const DEFAULT_SEED: u64 = 20240526;

////////////////////////////////////////////////////////////////////////////////////////////////////
/// The random constants a `Zobrist` key is built from.
///
/// Drawn once from a seeded generator, so the same seed always gives the same keys and therefore
/// the same hash for the same position.
pub struct ZobristKeys {
    pieces: [[[u64; Square::COUNT]; Piece::COUNT]; Color::COUNT],
    castling: [u64; CastlingRight::COUNT],
    en_passant: [u64; File::COUNT],
    black_to_move: u64,
}

impl ZobristKeys {
    /// Draws a fresh set of keys from `seed`
    pub fn new(seed: u64) -> ZobristKeys {
        let mut rng = StdRng::seed_from_u64(seed);
        let mut keys = ZobristKeys {
            pieces: [[[0; Square::COUNT]; Piece::COUNT]; Color::COUNT],
            castling: [0; CastlingRight::COUNT],
            en_passant: [0; File::COUNT],
            black_to_move: 0,
        };

        for color in keys.pieces.iter_mut() {
            for piece in color.iter_mut() {
                for key in piece.iter_mut() {
                    *key = rng.gen();
                }
            }
        }
        for key in keys.castling.iter_mut() {
            *key = rng.gen();
        }
        for key in keys.en_passant.iter_mut() {
            *key = rng.gen();
        }
        keys.black_to_move = rng.gen();

        keys
    }

    /// Calculates the hash of `pos` from scratch
    pub fn hash(&self, pos: &Position) -> Zobrist {
        let mut zobrist = Zobrist::new();

        for sq in Square::all() {
            if let Some((c, p)) = pos.piece_at(sq) {
                zobrist.toggle_piece_placement(self, c, p, sq);
            }
        }

        for right in CastlingRight::ALL.iter() {
            if pos.castling_right(*right) {
                zobrist.toggle_castling_right(self, *right);
            }
        }

        if let Some(sq) = pos.en_passant() {
            zobrist.toggle_ep_square(self, sq);
        }

        if pos.side_to_move() == Color::Black {
            zobrist.toggle_turn(self);
        }

        zobrist
    }
}

impl Default for ZobristKeys {
    fn default() -> Self {
        ZobristKeys::new(DEFAULT_SEED)
    }
}

impl fmt::Debug for ZobristKeys {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ZobristKeys")
            .field("black_to_move", &format_args!("{:016x}", self.black_to_move))
            .finish()
    }
}

////////////////////////////////////////////////////////////////////////////////////////////////////
/// A 64-bit hash key generated from a position
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash, Default)]
pub struct Zobrist(u64);

impl Zobrist {
    /// Creates a new zobrist key
    pub fn new() -> Zobrist {
        Zobrist(0)
    }

    /// Toggles piece placement
    pub fn toggle_piece_placement(&mut self, keys: &ZobristKeys, c: Color, p: Piece, sq: Square) {
        self.0 ^= keys.pieces[c as usize][p as usize][sq as usize];
    }

    /// Toggles an en passant square
    pub fn toggle_ep_square(&mut self, keys: &ZobristKeys, sq: Square) {
        self.0 ^= keys.en_passant[sq.file() as usize];
    }

    /// Toggles a single castling right
    pub fn toggle_castling_right(&mut self, keys: &ZobristKeys, right: CastlingRight) {
        self.0 ^= keys.castling[right as usize];
    }

    /// Toggles whose turn it is
    pub fn toggle_turn(&mut self, keys: &ZobristKeys) {
        self.0 ^= keys.black_to_move;
    }
}

impl fmt::Display for Zobrist {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.0.fmt(f)
    }
}

impl fmt::UpperHex for Zobrist {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::UpperHex::fmt(&self.0, f)
    }
}

impl fmt::LowerHex for Zobrist {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::LowerHex::fmt(&self.0, f)
    }
}

impl From<Zobrist> for u64 {
    fn from(z: Zobrist) -> u64 {
        z.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn same_seed_same_keys() {
        let a = ZobristKeys::new(7);
        let b = ZobristKeys::new(7);
        assert_eq!(a.pieces[1][3][17], b.pieces[1][3][17]);
        assert_eq!(a.black_to_move, b.black_to_move);
    }

    #[test]
    fn different_seeds_differ() {
        let a = ZobristKeys::new(1);
        let b = ZobristKeys::new(2);
        assert_ne!(a.black_to_move, b.black_to_move);
    }

    #[test]
    fn toggling_twice_is_identity() {
        let keys = ZobristKeys::default();
        let mut z = Zobrist::new();
        z.toggle_piece_placement(&keys, Color::White, Piece::Knight, Square::G1);
        z.toggle_turn(&keys);
        assert_ne!(z, Zobrist::new());
        z.toggle_turn(&keys);
        z.toggle_piece_placement(&keys, Color::White, Piece::Knight, Square::G1);
        assert_eq!(z, Zobrist::new());
    }

    #[test]
    fn upper_hex_is_padded_by_the_caller() {
        let z = Zobrist(0xab);
        assert_eq!(format!("{:016X}", z), "00000000000000AB");
    }
}
