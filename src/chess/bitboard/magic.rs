//! Attack tables for every piece type, using magic bitboards for sliding pieces
//
//  This Source Code Form is subject to the terms of the Mozilla Public
//  License, v. 2.0. If a copy of the MPL was not distributed with this
//  file, You can obtain one at http://mozilla.org/MPL/2.0/.
//
////////////////////////////////////////////////////////////////////////////////////////////////////
use std::fmt;
use super::*;

const BISHOP_DIRECTIONS: [(i8, i8); 4] = [(1, 1), (1, -1), (-1, 1), (-1, -1)];
const ROOK_DIRECTIONS: [(i8, i8); 4] = [(0, 1), (0, -1), (1, 0), (-1, 0)];
const KNIGHT_STEPS: [(i8, i8); 8] = [
    (1, 2), (2, 1), (2, -1), (1, -2), (-1, -2), (-2, -1), (-2, 1), (-1, 2),
];
const KING_STEPS: [(i8, i8); 8] = [
    (0, 1), (1, 1), (1, 0), (1, -1), (0, -1), (-1, -1), (-1, 0), (-1, 1),
];

////////////////////////////////////////////////////////////////////////////////////////////////////
/// Lookup parameters for one slider on one square
#[derive(Debug, Copy, Clone, Default)]
struct Magic {
    mask: u64,
    magic: u64,
    shift: u32,
    offset: usize,
}

impl Magic {
    fn index(&self, occupied: Bitboard) -> usize {
        let blockers = occupied.bits() & self.mask;
        self.offset + (blockers.wrapping_mul(self.magic) >> self.shift) as usize
    }
}

////////////////////////////////////////////////////////////////////////////////////////////////////
/// Precomputed attack sets for all pieces.
///
/// Sliding attacks are stored in one flat table indexed through a per-square magic multiplier.
/// Leaper attacks and the unobstructed eight-direction rays are plain per-square arrays.
pub struct AttackTables {
    bishops: [Magic; Square::COUNT],
    rooks: [Magic; Square::COUNT],
    sliders: Vec<Bitboard>,
    knights: [Bitboard; Square::COUNT],
    kings: [Bitboard; Square::COUNT],
    pawns: [[Bitboard; Square::COUNT]; Color::COUNT],
    rays: [Bitboard; Square::COUNT],
}

impl AttackTables {
    /// Builds every table. This is deterministic and only needs doing once per process.
    pub fn new() -> AttackTables {
        let mut tables = AttackTables {
            bishops: [Magic::default(); Square::COUNT],
            rooks: [Magic::default(); Square::COUNT],
            sliders: Vec::new(),
            knights: [Bitboard::EMPTY; Square::COUNT],
            kings: [Bitboard::EMPTY; Square::COUNT],
            pawns: [[Bitboard::EMPTY; Square::COUNT]; Color::COUNT],
            rays: [Bitboard::EMPTY; Square::COUNT],
        };

        let mut offset = 0;
        for sq in Square::all() {
            tables.bishops[sq as usize] =
                slider_magic(sq, BISHOP_MAGICS[sq as usize], &BISHOP_DIRECTIONS, offset);
            offset += 1 << tables.bishops[sq as usize].mask.count_ones();
        }
        for sq in Square::all() {
            tables.rooks[sq as usize] =
                slider_magic(sq, ROOK_MAGICS[sq as usize], &ROOK_DIRECTIONS, offset);
            offset += 1 << tables.rooks[sq as usize].mask.count_ones();
        }

        tables.sliders = vec![Bitboard::EMPTY; offset];
        for sq in Square::all() {
            let bishop = tables.bishops[sq as usize];
            tables.fill(sq, bishop, &BISHOP_DIRECTIONS);
            let rook = tables.rooks[sq as usize];
            tables.fill(sq, rook, &ROOK_DIRECTIONS);
        }

        for sq in Square::all() {
            tables.knights[sq as usize] = steps(sq, &KNIGHT_STEPS);
            tables.kings[sq as usize] = steps(sq, &KING_STEPS);
            tables.pawns[Color::White as usize][sq as usize] = steps(sq, &[(-1, 1), (1, 1)]);
            tables.pawns[Color::Black as usize][sq as usize] = steps(sq, &[(-1, -1), (1, -1)]);
            tables.rays[sq as usize] = slide(sq, Bitboard::EMPTY, &BISHOP_DIRECTIONS)
                | slide(sq, Bitboard::EMPTY, &ROOK_DIRECTIONS);
        }

        tables
    }

    /// Stores the blocked attack set of every subset of the relevant occupancy
    fn fill(&mut self, sq: Square, magic: Magic, directions: &[(i8, i8)]) {
        // walk all subsets of the mask (carry-rippler)
        let mut subset = 0u64;
        loop {
            let occupied = Bitboard::from(subset);
            self.sliders[magic.index(occupied)] = slide(sq, occupied, directions);

            subset = subset.wrapping_sub(magic.mask) & magic.mask;
            if subset == 0 {
                break;
            }
        }
    }

    /// Squares attacked by a bishop on `sq` given the occupied squares
    pub fn bishop_attacks(&self, sq: Square, occupied: Bitboard) -> Bitboard {
        self.sliders[self.bishops[sq as usize].index(occupied)]
    }

    /// Squares attacked by a rook on `sq` given the occupied squares
    pub fn rook_attacks(&self, sq: Square, occupied: Bitboard) -> Bitboard {
        self.sliders[self.rooks[sq as usize].index(occupied)]
    }

    /// Squares attacked by a queen on `sq` given the occupied squares
    pub fn queen_attacks(&self, sq: Square, occupied: Bitboard) -> Bitboard {
        self.bishop_attacks(sq, occupied) | self.rook_attacks(sq, occupied)
    }

    /// Squares attacked by a knight on `sq`
    pub fn knight_attacks(&self, sq: Square) -> Bitboard {
        self.knights[sq as usize]
    }

    /// Squares attacked by a king on `sq`
    pub fn king_attacks(&self, sq: Square) -> Bitboard {
        self.kings[sq as usize]
    }

    /// Squares attacked by a pawn of color `c` on `sq`
    pub fn pawn_attacks(&self, c: Color, sq: Square) -> Bitboard {
        self.pawns[c as usize][sq as usize]
    }

    /// Every square on one of the eight lines through `sq`, ignoring blockers
    pub fn rays(&self, sq: Square) -> Bitboard {
        self.rays[sq as usize]
    }

    /// Number of entries in the shared slider table
    pub fn slider_table_len(&self) -> usize {
        self.sliders.len()
    }
}

impl Default for AttackTables {
    fn default() -> Self {
        AttackTables::new()
    }
}

impl fmt::Debug for AttackTables {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("AttackTables")
            .field("slider_entries", &self.sliders.len())
            .finish()
    }
}

/// Relevant occupancy mask and table parameters for a slider on `sq`
fn slider_magic(sq: Square, magic: u64, directions: &[(i8, i8)], offset: usize) -> Magic {
    let mut mask = 0u64;

    // the last square on each ray never blocks anything, so it is left out
    for &(df, dr) in directions {
        let mut next = sq.shifted(df, dr);
        while let Some(s) = next {
            next = s.shifted(df, dr);
            if next.is_some() {
                mask |= Bitboard::from(s).bits();
            }
        }
    }

    Magic {
        mask,
        magic,
        shift: 64 - mask.count_ones(),
        offset,
    }
}

/// Walks each direction from `sq`, stopping at and including the first occupied square
fn slide(sq: Square, occupied: Bitboard, directions: &[(i8, i8)]) -> Bitboard {
    let mut attacks = Bitboard::EMPTY;

    for &(df, dr) in directions {
        let mut next = sq.shifted(df, dr);
        while let Some(s) = next {
            attacks.insert(s);
            if occupied.contains(s) {
                break;
            }
            next = s.shifted(df, dr);
        }
    }

    attacks
}

fn steps(sq: Square, offsets: &[(i8, i8)]) -> Bitboard {
    offsets.iter().filter_map(|&(df, dr)| sq.shifted(df, dr)).collect()
}

////////////////////////////////////////////////////////////////////////////////////////////////////
const BISHOP_MAGICS: [u64; Square::COUNT] = [
    0x0040_0408_2286_2081, 0x0004_0118_0202_8400, 0x0014_0344_0100_0410, 0x0008_2042_4284_0040,
    0x4884_0420_0a00_0040, 0x0002_0104_2000_0400, 0x2015_0807_0420_00a0, 0x0022_0101_0841_0402,
    0x0000_0809_0821_8411, 0x8228_3001_0101_0200, 0x0005_8468_0081_0902, 0x0400_0820_a020_0000,
    0x0002_8405_0425_4104, 0x0048_0609_1018_020c, 0x0608_5081_8420_2004, 0x2100_0c20_9828_0819,
    0x2020_0042_4202_0200, 0x4102_1004_9004_0101, 0x0114_0122_0800_1500, 0x0108_0006_8200_4460,
    0x7809_0004_9040_1000, 0x8c02_0011_2090_0808, 0x4024_0161_0082_1001, 0x0041_0040_2405_0420,
    0x0844_4042_2002_c400, 0x0119_1110_9404_0810, 0x4404_4808_1004_8010, 0x0420_1100_0802_400c,
    0x8001_0010_0900_4000, 0x4010_1080_0100_4128, 0x6002_0200_9402_c204, 0x0210_8481_8202_1280,
    0x0012_0210_00c0_1120, 0x001a_482a_0004_1020, 0x1002_4048_0010_0930, 0x0002_0080_2042_0200,
    0x0020_040c_0002_c102, 0x0006_0802_0080_4050, 0x9a82_0899_0844_0401, 0x0038_0500_4610_2202,
    0x0188_0848_8440_0911, 0x0004_0082_4900_9020, 0x1c02_0010_4820_0401, 0x6002_5202_1404_1a02,
    0x2800_4010_9100_0200, 0x0044_9100_5100_1200, 0x2018_0808_6042_0082, 0xd003_4101_0100_0a02,
    0x2008_8a18_208c_0040, 0x012a_0101_0110_0100, 0x0000_4241_d410_0310, 0x0040_0000_8c24_0010,
    0xd048_2820_6041_0880, 0xcd82_4010_0206_2100, 0x0288_c208_0624_0014, 0x1820_8431_0200_2050,
    0x0082_00c8_4410_0804, 0x0110_9460_a410_2800, 0x1000_2000_4c14_0400, 0x0042_0700_0284_0404,
    0x0000_3500_2004_6404, 0x2400_8108_5003_0a00, 0x0101_5060_a109_2212, 0x0020_2024_4480_2040,
];

const ROOK_MAGICS: [u64; Square::COUNT] = [
    0x7180_0292_2480_4000, 0x6040_1000_2001_4001, 0x5900_1409_0020_0040, 0x8100_2100_3804_5000,
    0x4080_0400_0380_0800, 0x0100_0400_5100_481a, 0x0080_0200_0f00_2080, 0xc080_0040_2100_0480,
    0x0080_8000_9240_01a0, 0x0088_8020_0140_0880, 0x0411_0010_4220_0101, 0x0105_0021_0028_1001,
    0x2201_0008_0045_0010, 0x0052_8002_0004_0081, 0x0002_0001_4200_0884, 0xc002_0001_1200_4084,
    0x0040_0280_0020_4482, 0x0020_4200_2082_0900, 0x1002_0200_2080_4411, 0x0028_8080_0800_1004,
    0x0418_0100_0900_0411, 0x5400_8080_0c00_0200, 0x0100_8400_5805_0250, 0x8080_4600_00c4_01a1,
    0x0200_8020_8001_c000, 0x00c0_0080_8020_0448, 0x0250_0020_2004_0802, 0x4e01_0019_0024_5000,
    0x1000_1101_0004_0800, 0x2006_0002_0088_4410, 0x0008_0804_0002_1009, 0x0000_8000_8018_6300,
    0x9c80_0040_0040_2000, 0xc008_4620_0240_1001, 0x1003_8830_0080_2000, 0x2010_8110_0480_0800,
    0x1203_8014_0080_1802, 0x0112_0005_0200_1028, 0x0400_4203_0400_4810, 0x2001_0010_4100_0282,
    0x0000_4008_2080_8000, 0x0800_2000_4000_8080, 0x1040_c020_0101_0012, 0x0050_0100_1021_0008,
    0x0202_0008_9006_0020, 0x2401_0088_0401_0012, 0x0102_0044_0802_0005, 0x1010_5081_0042_0024,
    0x0002_4100_8000_2900, 0x1000_2085_0040_1100, 0x0002_4020_0211_0100, 0x0028_1000_8900_6100,
    0x1060_1500_2800_1100, 0x0042_01b0_080c_0a00, 0x010a_8012_0001_0080, 0x0200_0400_8041_1200,
    0x0180_2010_8902_0042, 0x3200_8111_0820_4202, 0x1100_2000_108b_0041, 0x1110_3000_4900_2005,
    0x7310_a800_0500_1591, 0x0001_0068_0c00_0201, 0x2000_5042_0188_110c, 0x0142_0381_4021_040a,
];
