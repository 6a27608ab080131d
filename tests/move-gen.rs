//! Tests the move generator (chess module)
//
//  Copyright 2020 Michael Leany
//
//  This Source Code Form is subject to the terms of the Mozilla Public
//  License, v. 2.0. If a copy of the MPL was not distributed with this
//  file, You can obtain one at http://mozilla.org/MPL/2.0/.
//
////////////////////////////////////////////////////////////////////////////////////////////////////

mod move_gen {
    use magpie::chess::{variations, CastlingRule, Position, Tables};

    fn count(fen: &str, depth: usize) -> u64 {
        let tables = Tables::default();
        let pos = Position::from_fen(fen, tables.keys())
            .unwrap()
            .with_castling_rule(CastlingRule::Standard);
        variations::count(&pos, &tables, depth)
    }

    mod position_001 {
        use super::count;

        const FEN: &str = "rnbqkbnr/pppppppp/8/8/8/8/PPPPPPPP/RNBQKBNR w KQkq - 0 1";

        #[test]
        fn depth_1() { assert_eq!(count(FEN, 1), 20); }

        #[test]
        fn depth_2() { assert_eq!(count(FEN, 2), 400); }

        #[test]
        fn depth_3() { assert_eq!(count(FEN, 3), 8902); }

        #[test]
        fn depth_4() { assert_eq!(count(FEN, 4), 197281); }

        #[test]
        #[ignore]
        fn depth_5() { assert_eq!(count(FEN, 5), 4865609); }
    }

    mod position_002 {
        use super::count;

        const FEN: &str = "r3k2r/p1ppqpb1/bn2pnp1/3PN3/1p2P3/2N2Q1p/PPPBBPPP/R3K2R w KQkq - 0 1";

        #[test]
        fn depth_1() { assert_eq!(count(FEN, 1), 48); }

        #[test]
        fn depth_2() { assert_eq!(count(FEN, 2), 2039); }

        #[test]
        fn depth_3() { assert_eq!(count(FEN, 3), 97862); }

        #[test]
        #[ignore]
        fn depth_4() { assert_eq!(count(FEN, 4), 4085603); }
    }

    mod position_003 {
        use super::count;

        const FEN: &str = "8/2p5/3p4/KP5r/1R3p1k/8/4P1P1/8 w - - 0 1";

        #[test]
        fn depth_1() { assert_eq!(count(FEN, 1), 14); }

        #[test]
        fn depth_2() { assert_eq!(count(FEN, 2), 191); }

        #[test]
        fn depth_3() { assert_eq!(count(FEN, 3), 2812); }

        #[test]
        fn depth_4() { assert_eq!(count(FEN, 4), 43238); }

        #[test]
        #[ignore]
        fn depth_5() { assert_eq!(count(FEN, 5), 674624); }
    }

    mod position_004 {
        use super::count;

        const FEN: &str = "r3k2r/Pppp1ppp/1b3nbN/nP6/BBP1P3/q4N2/Pp1P2PP/R2Q1RK1 w kq - 0 1";

        #[test]
        fn depth_1() { assert_eq!(count(FEN, 1), 6); }

        #[test]
        fn depth_2() { assert_eq!(count(FEN, 2), 264); }

        #[test]
        fn depth_3() { assert_eq!(count(FEN, 3), 9467); }

        #[test]
        #[ignore]
        fn depth_4() { assert_eq!(count(FEN, 4), 422333); }
    }

    mod position_005 {
        use super::count;

        const FEN: &str = "rnbq1k1r/pp1Pbppp/2p5/8/2B5/8/PPP1NnPP/RNBQK2R w KQ - 1 8";

        #[test]
        fn depth_1() { assert_eq!(count(FEN, 1), 44); }

        #[test]
        fn depth_2() { assert_eq!(count(FEN, 2), 1486); }

        #[test]
        fn depth_3() { assert_eq!(count(FEN, 3), 62379); }
    }

    mod position_006 {
        use super::count;

        const FEN: &str =
            "r4rk1/1pp1qppp/p1np1n2/2b1p1B1/2B1P1b1/P1NP1N2/1PP1QPPP/R4RK1 w - - 0 10";

        #[test]
        fn depth_1() { assert_eq!(count(FEN, 1), 46); }

        #[test]
        fn depth_2() { assert_eq!(count(FEN, 2), 2079); }

        #[test]
        fn depth_3() { assert_eq!(count(FEN, 3), 89890); }
    }

    #[test]
    #[ignore]
    fn position_007() { assert_eq!(count("4k3/8/8/8/8/8/8/4K2R w K - 0 1", 6), 764643); }

    #[test]
    #[ignore]
    fn position_008() { assert_eq!(count("4k3/8/8/8/8/8/8/R3K3 w Q - 0 1", 6), 846648); }

    #[test]
    #[ignore]
    fn position_009() { assert_eq!(count("4k2r/8/8/8/8/8/8/4K3 w k - 0 1", 6), 899442); }

    #[test]
    #[ignore]
    fn position_010() { assert_eq!(count("r3k3/8/8/8/8/8/8/4K3 w q - 0 1", 6), 1001523); }

    #[test]
    #[ignore]
    fn position_011() { assert_eq!(count("4k3/8/8/8/8/8/8/R3K2R w KQ - 0 1", 6), 2788982); }

    #[test]
    #[ignore]
    fn position_012() { assert_eq!(count("r3k2r/8/8/8/8/8/8/4K3 w kq - 0 1", 6), 3517770); }

    #[test]
    fn castling_positions_shallow() {
        assert_eq!(count("4k3/8/8/8/8/8/8/4K2R w K - 0 1", 1), 15);
        assert_eq!(count("4k3/8/8/8/8/8/8/R3K3 w Q - 0 1", 1), 16);
        assert_eq!(count("r3k2r/8/8/8/8/8/8/R3K2R w KQkq - 0 1", 1), 26);
        assert_eq!(count("r3k2r/8/8/8/8/8/8/R3K2R w KQkq - 0 1", 2), 568);
    }

    #[test]
    fn pseudo_legal_matches_at_the_start() {
        use magpie::chess::movegen;

        let tables = Tables::default();
        let pos = Position::start(tables.keys());
        assert_eq!(movegen::pseudo_legal_moves(&pos, tables.attacks()).len(), 20);
    }
}
