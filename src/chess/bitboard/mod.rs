//! Provides a representation of the pieces on the board
//
//  This Source Code Form is subject to the terms of the Mozilla Public
//  License, v. 2.0. If a copy of the MPL was not distributed with this
//  file, You can obtain one at http://mozilla.org/MPL/2.0/.
//
////////////////////////////////////////////////////////////////////////////////////////////////////
use std::convert::TryInto;
use std::iter::FusedIterator;
use std::iter::{FromIterator, Extend};
use std::ops;
use std::fmt;
use super::*;

pub mod magic;

////////////////////////////////////////////////////////////////////////////////////////////////////
/// A set of squares with each bit representing one square
///
/// Bit 0 is `A1` and bit 63 is `H8`. The type is a plain value: every operation that changes the
/// set either returns a new bitboard or works through `&mut self`.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash, Default)]
pub struct Bitboard(u64);

impl Bitboard {
    /// The empty set
    pub const EMPTY: Bitboard = Bitboard(0);
    /// Every square on the board
    pub const FULL: Bitboard = Bitboard(!0);

    const FILE_A: u64 = 0x0101_0101_0101_0101;
    const RANK_1: u64 = 0x0000_0000_0000_00ff;

    /// Creates a new, empty bitboard
    pub fn new() -> Bitboard {
        Default::default()
    }

    /// Returns the raw bit pattern
    pub fn bits(self) -> u64 {
        self.0
    }

    /// Returns the number of squares in the bitboard
    pub fn len(self) -> usize {
        self.0.count_ones() as usize
    }

    /// Returns `true` if the bitboard is empty
    pub fn is_empty(self) -> bool {
        self.0 == 0
    }

    /// Returns `true` if the bitboard contains `sq`
    pub fn contains(self, sq: Square) -> bool {
        self.0 & (1 << sq as u64) != 0
    }

    /// Returns `true` if `self` intersects `other`
    pub fn intersects(self, other: Bitboard) -> bool {
        !(self & other).is_empty()
    }

    /// Returns `true` if `self` does not intersect `other`
    pub fn is_disjoint(self, other: Bitboard) -> bool {
        (self & other).is_empty()
    }

    /// Returns a copy of the bitboard with `sq` added
    pub fn set(self, sq: Square) -> Bitboard {
        self | Bitboard::from(sq)
    }

    /// Returns a copy of the bitboard with `sq` removed
    pub fn clear(self, sq: Square) -> Bitboard {
        self & !Bitboard::from(sq)
    }

    /// Returns a copy of the bitboard with `sq` toggled
    pub fn toggle(self, sq: Square) -> Bitboard {
        self ^ Bitboard::from(sq)
    }

    /// Adds a square to the bitboard if it is not already present
    pub fn insert(&mut self, sq: Square) {
        *self |= sq.into();
    }

    /// Removes a square from the bitboard if it is present
    pub fn remove(&mut self, sq: Square) {
        *self &= !Bitboard::from(sq);
    }

    /// Removes the lowest square from the bitboard and returns it
    pub fn pop(&mut self) -> Option<Square> {
        let sq = self.lsb();
        // clear the least significant bit
        self.0 &= self.0.wrapping_sub(1);
        sq
    }

    /// Returns the lowest square in the set, or `None` if the set is empty
    pub fn lsb(self) -> Option<Square> {
        if self.0 != 0 {
            Some((self.0.trailing_zeros() as usize).try_into().expect("INFALLIBLE"))
        } else {
            None
        }
    }

    /// Returns the highest square in the set, or `None` if the set is empty
    pub fn msb(self) -> Option<Square> {
        if self.0 != 0 {
            Some((63 - self.0.leading_zeros() as usize).try_into().expect("INFALLIBLE"))
        } else {
            None
        }
    }

    /// Shifts the raw pattern towards `H8` by `n` bits. Shifting by 64 or more empties the set.
    pub fn shift_left(self, n: u32) -> Bitboard {
        Bitboard(self.0.checked_shl(n).unwrap_or(0))
    }

    /// Shifts the raw pattern towards `A1` by `n` bits. Shifting by 64 or more empties the set.
    pub fn shift_right(self, n: u32) -> Bitboard {
        Bitboard(self.0.checked_shr(n).unwrap_or(0))
    }

    /// Returns a bitboard with every square moved `df` files and `dr` ranks. Squares that would
    /// leave the board are dropped instead of wrapping to the opposite edge.
    pub fn shift(self, df: i8, dr: i8) -> Bitboard {
        let mut bits = self.0;

        // drop the files that would wrap around
        for f in 0..df.abs() {
            let edge = if df > 0 { File::COUNT as i8 - 1 - f } else { f };
            bits &= !(Bitboard::FILE_A << edge);
        }

        let n = (dr as i32) * 8 + df as i32;
        if n >= 0 {
            Bitboard(bits).shift_left(n as u32)
        } else {
            Bitboard(bits).shift_right((-n) as u32)
        }
    }

    /// Returns every square on the same rank as `sq`
    pub fn rank_mask(sq: Square) -> Bitboard {
        sq.rank().into()
    }

    /// Returns every square on the same file as `sq`
    pub fn file_mask(sq: Square) -> Bitboard {
        sq.file().into()
    }

    /// Returns the squares strictly between `a` and `b` if they share a rank, file or diagonal,
    /// or an empty bitboard otherwise.
    pub fn between(a: Square, b: Square) -> Bitboard {
        let df = b.file() as i8 - a.file() as i8;
        let dr = b.rank() as i8 - a.rank() as i8;

        if (df == 0 && dr == 0) || (df != 0 && dr != 0 && df.abs() != dr.abs()) {
            return Bitboard::EMPTY;
        }

        let (step_f, step_r) = (df.signum(), dr.signum());
        let mut squares = Bitboard::EMPTY;
        let mut sq = a.shifted(step_f, step_r);
        while let Some(s) = sq {
            if s == b {
                break;
            }
            squares.insert(s);
            sq = s.shifted(step_f, step_r);
        }

        squares
    }
}

impl ops::Not for Bitboard {
    type Output = Self;

    fn not(self) -> Self::Output {
        Bitboard(!self.0)
    }
}

impl ops::BitAnd for Bitboard {
    type Output = Self;

    fn bitand(self, rhs: Self) -> Self::Output {
        Bitboard(self.0 & rhs.0)
    }
}

impl ops::BitAnd<u64> for Bitboard {
    type Output = Self;

    fn bitand(self, rhs: u64) -> Self::Output {
        Bitboard(self.0 & rhs)
    }
}

impl ops::BitAndAssign for Bitboard {
    fn bitand_assign(&mut self, rhs: Self) {
        self.0 &= rhs.0
    }
}

impl ops::BitOr for Bitboard {
    type Output = Self;

    fn bitor(self, rhs: Self) -> Self::Output {
        Bitboard(self.0 | rhs.0)
    }
}

impl ops::BitOr<u64> for Bitboard {
    type Output = Self;

    fn bitor(self, rhs: u64) -> Self::Output {
        Bitboard(self.0 | rhs)
    }
}

impl ops::BitOrAssign for Bitboard {
    fn bitor_assign(&mut self, rhs: Self) {
        self.0 |= rhs.0
    }
}

impl ops::BitXor for Bitboard {
    type Output = Self;

    fn bitxor(self, rhs: Self) -> Self::Output {
        Bitboard(self.0 ^ rhs.0)
    }
}

impl ops::BitXor<u64> for Bitboard {
    type Output = Self;

    fn bitxor(self, rhs: u64) -> Self::Output {
        Bitboard(self.0 ^ rhs)
    }
}

impl ops::BitXorAssign for Bitboard {
    fn bitxor_assign(&mut self, rhs: Self) {
        self.0 ^= rhs.0
    }
}

impl fmt::Display for Bitboard {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::LowerHex::fmt(&self.0, f)
    }
}

impl fmt::UpperHex for Bitboard {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::UpperHex::fmt(&self.0, f)
    }
}

impl fmt::LowerHex for Bitboard {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::LowerHex::fmt(&self.0, f)
    }
}

impl fmt::Binary for Bitboard {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Binary::fmt(&self.0, f)
    }
}

impl From<u64> for Bitboard {
    fn from(val: u64) -> Bitboard {
        Bitboard(val)
    }
}

impl From<Bitboard> for u64 {
    fn from(bb: Bitboard) -> u64 {
        bb.0
    }
}

impl From<Square> for Bitboard {
    fn from(sq: Square) -> Bitboard {
        Bitboard(1 << sq as u64)
    }
}

impl From<File> for Bitboard {
    fn from(f: File) -> Bitboard {
        Bitboard(Bitboard::FILE_A << f as u64)
    }
}

impl From<Rank> for Bitboard {
    fn from(r: Rank) -> Bitboard {
        Bitboard(Bitboard::RANK_1 << (8 * r as u64))
    }
}

impl IntoIterator for Bitboard {
    type Item = Square;
    type IntoIter = IntoIter;

    fn into_iter(self) -> Self::IntoIter {
        IntoIter(self)
    }
}

impl FromIterator<Square> for Bitboard {
    fn from_iter<I: IntoIterator<Item=Square>>(iter: I) -> Self {
        let mut bd = Bitboard::new();

        for sq in iter {
            bd.insert(sq);
        }

        bd
    }
}

impl Extend<Square> for Bitboard {
    fn extend<I: IntoIterator<Item=Square>>(&mut self, iter: I) {
        for sq in iter {
            self.insert(sq);
        }
    }
}

/// Iterator over the squares of a `Bitboard`, lowest first
#[derive(Debug, Copy, Clone)]
pub struct IntoIter(Bitboard);

impl Iterator for IntoIter {
    type Item = Square;

    fn next(&mut self) -> Option<Self::Item> {
        self.0.pop()
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.0.len(), Some(self.0.len()))
    }
}

impl ExactSizeIterator for IntoIter { }

impl FusedIterator for IntoIter { }
