//! Module for counting and printing the number of variations from a given position
//
//  Copyright 2019 Michael Leany
//
//  This Source Code Form is subject to the terms of the Mozilla Public
//  License, v. 2.0. If a copy of the MPL was not distributed with this
//  file, You can obtain one at http://mozilla.org/MPL/2.0/.
//
////////////////////////////////////////////////////////////////////////////////////////////////////
use crate::chess::*;

/// The castling rule perft counts are made under. Published counts assume `Standard`, so that is
/// used unless `source_rule` asks for `Source`.
pub fn perft_rule(source_rule: bool) -> CastlingRule {
    if source_rule {
        CastlingRule::Source
    } else {
        CastlingRule::Standard
    }
}

/// Print the number of variations of the given `depth` for each legal move from `pos`, returning
/// the total
pub fn divide(pos: &Position, tables: &Tables, depth: usize) -> u64 {
    let mut total = 0;

    for (mv, count) in divide_counts(pos, tables, depth) {
        total += count;
        println!("{:#}: {}", mv, count);
    }

    total
}

/// The number of variations of `depth - 1` after each legal move from `pos`
pub fn divide_counts(pos: &Position, tables: &Tables, depth: usize) -> Vec<(Move, u64)> {
    if depth < 1 {
        return Vec::new();
    }

    movegen::legal_moves(pos, tables.attacks()).into_iter()
        .filter_map(|mv| {
            pos.apply_move(mv, tables.keys()).ok()
                .map(|next| (mv, count(&next, tables, depth - 1)))
        })
        .collect()
}

/// Count the number of variations of the given `depth` from `pos`
pub fn count(pos: &Position, tables: &Tables, depth: usize) -> u64 {
    if depth < 1 {
        return 1;
    }

    let moves = movegen::legal_moves(pos, tables.attacks());
    if depth == 1 {
        return moves.len() as u64;
    }

    let mut total = 0;
    for mv in moves {
        if let Ok(pos) = pos.apply_move(mv, tables.keys()) {
            total += count(&pos, tables, depth - 1);
        }
    }

    total
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn depth_zero_is_one() {
        let tables = Tables::default();
        let pos = Position::start(tables.keys());
        assert_eq!(count(&pos, &tables, 0), 1);
        assert!(divide_counts(&pos, &tables, 0).is_empty());
    }

    #[test]
    fn divide_adds_up_to_count() {
        let tables = Tables::default();
        let pos = Position::start(tables.keys());
        let counts = divide_counts(&pos, &tables, 3);
        assert_eq!(counts.len(), 20);
        assert_eq!(counts.iter().map(|(_, n)| n).sum::<u64>(), 8902);

        let e2e4 = counts.iter().find(|(mv, _)| mv.to_coord() == "e2e4").unwrap();
        assert_eq!(e2e4.1, 600);
    }

    #[test]
    fn perft_defaults_to_standard_castling() {
        assert_eq!(perft_rule(false), CastlingRule::Standard);
        assert_eq!(perft_rule(true), CastlingRule::Source);

        let tables = Tables::default();
        let fen = "r3k2r/8/8/8/8/8/8/R3K2R w KQkq - 0 1";
        let pos = Position::from_fen(fen, tables.keys()).unwrap()
            .with_castling_rule(perft_rule(false));
        assert_eq!(count(&pos, &tables, 2), 568);

        // the captured rook's right is gone under the default
        let mv = pos.coord_move("a1a8").unwrap();
        let next = pos.apply_move(mv, tables.keys()).unwrap();
        assert!(!next.to_fen().contains('q'));
    }
}
