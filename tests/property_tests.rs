//! Property-based tests for move generation and validation.
//!
//! These tests use proptest to verify properties hold across
//! many randomly generated inputs.

use hanoi::core::{
    canonical, check, generate, move_count, validate, Move, MoveError, Moves, Peg, Towers,
};
use hanoi::PuzzleBuilder;
use proptest::prelude::*;

prop_compose! {
    fn arbitrary_peg()(variant in 0..3u8) -> Peg {
        match variant {
            0 => Peg::A,
            1 => Peg::B,
            _ => Peg::C,
        }
    }
}

prop_compose! {
    fn arbitrary_move()(from in arbitrary_peg(), to in arbitrary_peg()) -> Move {
        Move::new(from, to)
    }
}

prop_compose! {
    /// Three distinct pegs in random roles.
    fn arbitrary_roles()(rotation in 0..3usize, swap in any::<bool>()) -> (Peg, Peg, Peg) {
        let mut pegs = Peg::ALL;
        pegs.rotate_left(rotation);
        if swap {
            pegs.swap(1, 2);
        }
        (pegs[0], pegs[1], pegs[2])
    }
}

proptest! {
    #[test]
    fn move_count_law_holds(n in -20i64..=14) {
        let moves = canonical(n);
        let expected = if n <= 0 { 0 } else { (1u128 << n) - 1 };
        prop_assert_eq!(moves.len() as u128, expected);
        prop_assert_eq!(move_count(n), expected);
    }

    #[test]
    fn generated_sequence_is_legal(n in 1i64..=12) {
        let moves = canonical(n);
        prop_assert_eq!(validate(n as usize, &moves), Ok(()));
        prop_assert_eq!(check(n as usize, &moves).into_parts(), (true, None));
    }

    #[test]
    fn generated_sequence_solves_puzzle(n in 0usize..=10) {
        let mut towers = Towers::new(n);
        for (i, mv) in canonical(n as i64).iter().enumerate() {
            towers.apply(i + 1, mv).unwrap();
            prop_assert!(towers.is_legal());
        }
        prop_assert!(towers.is_solved(Peg::C));
        prop_assert_eq!(towers.height(Peg::C), n);
    }

    #[test]
    fn generation_is_pure(n in 0i64..=10, (s, t, a) in arbitrary_roles()) {
        prop_assert_eq!(generate(n, s, t, a), generate(n, s, t, a));
    }

    #[test]
    fn lazy_and_eager_generators_agree(n in -3i64..=10, (s, t, a) in arbitrary_roles()) {
        let lazy: Vec<Move> = Moves::new(n, s, t, a).collect();
        prop_assert_eq!(lazy, generate(n, s, t, a));
    }

    #[test]
    fn middle_move_carries_largest_disk(n in 1i64..=10, (s, t, a) in arbitrary_roles()) {
        let moves = generate(n, s, t, a);
        let middle = moves.len() / 2;
        prop_assert_eq!(moves[middle], Move::new(s, t));
    }

    #[test]
    fn never_moves_onto_own_peg(n in 1i64..=10) {
        prop_assert!(canonical(n).iter().all(|m| m.from != m.to));
    }

    #[test]
    fn random_sequences_fail_at_first_illegal_move(
        n in 0usize..=5,
        moves in prop::collection::vec(arbitrary_move(), 0..30)
    ) {
        // Replay step by step to find the expected first failure.
        let mut towers = Towers::new(n);
        let mut expected = Ok(());
        for (i, mv) in moves.iter().enumerate() {
            if let Err(error) = towers.apply(i + 1, mv) {
                expected = Err(error);
                break;
            }
        }

        let result = validate(n, &moves);
        prop_assert_eq!(&result, &expected);

        let verdict = check(n, &moves);
        prop_assert_eq!(verdict.ok, result.is_ok());
        prop_assert_eq!(verdict.detail.is_some(), result.is_err());
    }

    #[test]
    fn towers_stay_legal_under_random_moves(
        n in 0usize..=6,
        moves in prop::collection::vec(arbitrary_move(), 0..50)
    ) {
        let mut towers = Towers::new(n);
        for (i, mv) in moves.iter().enumerate() {
            let before = towers.clone();
            if towers.apply(i + 1, mv).is_err() {
                prop_assert_eq!(&towers, &before);
            }
            prop_assert!(towers.is_legal());
            prop_assert_eq!(towers.disk_count(), n);
        }
    }

    #[test]
    fn tampered_solution_is_rejected(n in 2i64..=8, position in any::<prop::sample::Index>()) {
        let mut moves = canonical(n);
        let i = position.index(moves.len());
        // Repeating a move either empties its source or stacks a larger disk.
        let repeated = moves[i];
        moves.insert(i + 1, repeated);
        let err = validate(n as usize, &moves).unwrap_err();
        prop_assert_eq!(err.index(), i + 2);
    }

    #[test]
    fn unknown_labels_are_rejected_at_their_index(
        prefix in 0usize..7,
        label in "[D-Z]"
    ) {
        let mut moves: Vec<Move<String>> = canonical(3)
            .into_iter()
            .take(prefix)
            .map(|m| Move::new(m.from.to_string(), m.to.to_string()))
            .collect();
        moves.push(Move::new("A".to_string(), label.clone()));

        let err = validate(3, &moves).unwrap_err();
        prop_assert_eq!(
            err,
            MoveError::UnknownPeg { index: prefix + 1, from: "A".to_string(), to: label }
        );
    }

    #[test]
    fn builder_respects_ceiling(n in -5i64..=40, max in 0u32..=30) {
        let result = PuzzleBuilder::new().disks(n).max_disks(max).build();
        prop_assert_eq!(result.is_ok(), n <= i64::from(max));
    }

    #[test]
    fn move_roundtrip_serialization(mv in arbitrary_move()) {
        let json = serde_json::to_string(&mv).unwrap();
        let deserialized: Move = serde_json::from_str(&json).unwrap();
        prop_assert_eq!(mv, deserialized);
    }

    #[test]
    fn move_display_parses_back(mv in arbitrary_move()) {
        let parsed: Move<String> = mv.to_string().parse().unwrap();
        prop_assert_eq!(parsed, Move::new(mv.from.to_string(), mv.to.to_string()));
    }
}
