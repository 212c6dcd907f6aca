//! Property tests for the adjacency rule and state conservation.

use golf_solitaire::{Card, GameState, GolfConfig, Move, Rank, Suit, DECK_SIZE};
use proptest::prelude::*;

fn rank() -> impl Strategy<Value = Rank> {
    (0..13usize).prop_map(|i| Rank::ALL[i])
}

fn suit() -> impl Strategy<Value = Suit> {
    (0..4usize).prop_map(|i| Suit::ALL[i])
}

fn card() -> impl Strategy<Value = Card> {
    (suit(), rank(), any::<bool>()).prop_map(|(suit, rank, hidden)| Card { suit, rank, hidden })
}

/// A step in a random session: a column play, a stock draw, or an undo.
#[derive(Clone, Copy, Debug)]
enum Step {
    Play(usize),
    Draw,
    Undo,
    Redo,
}

fn step() -> impl Strategy<Value = Step> {
    prop_oneof![
        4 => (0..8usize).prop_map(Step::Play),
        3 => Just(Step::Draw),
        2 => Just(Step::Undo),
        1 => Just(Step::Redo),
    ]
}

proptest! {
    #[test]
    fn adjacency_is_symmetric(a in card(), b in card()) {
        prop_assert_eq!(a.can_place_on(&b), b.can_place_on(&a));
    }

    #[test]
    fn adjacency_is_one_step_or_ace_king(a in rank(), b in rank()) {
        let diff = a.index().abs_diff(b.index());
        let wraps = matches!((a, b), (Rank::Ace, Rank::King) | (Rank::King, Rank::Ace));
        let expected = diff == 1 || wraps;
        prop_assert_eq!(Card::new(Suit::Hearts, a).can_place_on(&Card::new(Suit::Spades, b)), expected);
    }

    #[test]
    fn card_count_is_conserved(seed in any::<u64>(), steps in prop::collection::vec(step(), 0..80)) {
        let mut game = GameState::with_seed(seed);
        let mut last_moves = game.moves();

        for step in steps {
            let _ = match step {
                Step::Play(column) => game.apply(Move::PlayColumn(column)).map(|_| ()),
                Step::Draw => game.apply(Move::DrawStock).map(|_| ()),
                Step::Undo => game.undo(),
                Step::Redo => game.redo(),
            };
            prop_assert_eq!(game.total_cards(), DECK_SIZE);
            prop_assert!(game.waste_len() >= 1);
            prop_assert!(game.moves() >= last_moves);
            last_moves = game.moves();
        }
    }

    #[test]
    fn undoing_every_move_restores_the_deal(seed in any::<u64>(), picks in prop::collection::vec(0..8usize, 0..40)) {
        let mut game = GameState::new(GolfConfig::default().with_seed(seed)).unwrap();
        let initial = game.snapshot();
        let mut made = 0;

        for pick in picks {
            let legal = game.legal_moves();
            if legal.is_empty() {
                break;
            }
            game.apply(legal[pick % legal.len()]).unwrap();
            made += 1;
        }
        for _ in 0..made {
            game.undo().unwrap();
        }

        let restored = game.snapshot();
        prop_assert_eq!(restored.tableau, initial.tableau);
        prop_assert_eq!(restored.stock, initial.stock);
        prop_assert_eq!(restored.waste, initial.waste);
        prop_assert_eq!(game.moves() as usize, 2 * made);
    }

    #[test]
    fn legal_moves_always_succeed(seed in any::<u64>(), picks in prop::collection::vec(0..8usize, 0..30)) {
        let mut game = GameState::with_seed(seed);
        for pick in picks {
            let legal = game.legal_moves();
            if legal.is_empty() {
                prop_assert!(game.status().is_terminal());
                break;
            }
            for &mv in &legal {
                prop_assert!(game.clone().apply(mv).is_ok());
            }
            game.apply(legal[pick % legal.len()]).unwrap();
        }
    }
}
