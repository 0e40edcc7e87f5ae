use std::collections::HashSet;

use showdown_engine::cards::Card;
use showdown_engine::errors::EngineError;
use showdown_engine::hand::{evaluate, HandRank};
use showdown_engine::showdown::{
    deck_seed, draw_seed, execute_showdown, execute_showdown_with, format_hand, resolve,
    simulate_outcome, simulate_outcome_with, DrawMode, ShowdownConfig, MAX_PLAYERS,
};
use showdown_engine::strategy::DrawStrategy;

fn ids(n: usize) -> Vec<String> {
    (0..n).map(|i| format!("p{}", i)).collect()
}

fn shared() -> ShowdownConfig {
    ShowdownConfig {
        draw_mode: DrawMode::SharedRemainder,
        ..ShowdownConfig::default()
    }
}

const MIXED: [DrawStrategy; 4] = [
    DrawStrategy::CONSERVATIVE,
    DrawStrategy::BALANCED,
    DrawStrategy::AGGRESSIVE,
    DrawStrategy::BALANCED,
];

#[test]
fn seed_derivation_is_fixed() {
    assert_eq!(deck_seed("42"), "poker-42-deck");
    assert_eq!(draw_seed("poker-42-deck", 3), "poker-42-deck-3-draw");
}

#[test]
fn same_inputs_same_round() {
    let a = execute_showdown(&MIXED, &ids(4), 500, "repeat-me").unwrap();
    let b = execute_showdown(&MIXED, &ids(4), 500, "repeat-me").unwrap();
    assert_eq!(a, b);
    assert_eq!(
        serde_json::to_string(&a).unwrap(),
        serde_json::to_string(&b).unwrap()
    );
}

#[test]
fn golden_round_fixture_1() {
    let strategies = [DrawStrategy::BALANCED, DrawStrategy::BALANCED];
    let r = execute_showdown(&strategies, &ids(2), 1000, "fixture-1").unwrap();

    assert_eq!(r.winner_index, Some(0));
    assert_eq!(r.seed, "fixture-1");
    assert_eq!(r.game_id, "practice");

    let p0 = &r.players[0];
    assert_eq!(format_hand(&p0.initial_hand), "Kh 3s 5s Ad Kd");
    assert_eq!(p0.discard_indices, vec![1, 2, 3]);
    assert_eq!(format_hand(&p0.final_hand), "Kh 8s 6s 6d Kd");
    assert_eq!(p0.hand_eval.rank, HandRank::TwoPair);
    assert_eq!(p0.hand_eval.kickers, vec![12, 5, 7]);
    assert_eq!(p0.payout, 1000);

    let p1 = &r.players[1];
    assert_eq!(format_hand(&p1.initial_hand), "Jd 4c 7d 3c 5d");
    assert_eq!(p1.discard_indices, vec![1, 2, 3, 4]);
    assert_eq!(format_hand(&p1.final_hand), "Jd 7c Ah 8h 2d");
    assert_eq!(p1.hand_eval.rank, HandRank::HighCard);
    assert_eq!(p1.payout, 0);
}

#[test]
fn golden_round_fixture_1_shared_remainder() {
    let strategies = [DrawStrategy::BALANCED, DrawStrategy::BALANCED];
    let r = execute_showdown_with(&shared(), &strategies, &ids(2), 1000, "fixture-1").unwrap();
    assert_eq!(format_hand(&r.players[0].final_hand), "Kh 6s 8c 9c Kd");
    assert_eq!(format_hand(&r.players[1].final_hand), "Jd 8d Ac Jh 7s");
    assert_eq!(r.winner_index, Some(0));
}

#[test]
fn initial_hands_never_share_a_card() {
    for seed in ["a", "b", "c", "d", "e"] {
        let r = execute_showdown(&[DrawStrategy::AGGRESSIVE; MAX_PLAYERS], &[], 9, seed).unwrap();
        let mut seen = HashSet::new();
        for p in &r.players {
            for c in p.initial_hand {
                assert!(seen.insert(c), "{} dealt twice under seed {}", c, seed);
            }
        }
        assert_eq!(seen.len(), 5 * MAX_PLAYERS);
    }
}

#[test]
fn final_hand_differs_only_at_discards() {
    for seed in ["x1", "x2", "x3"] {
        let r = execute_showdown(&MIXED, &ids(4), 10, seed).unwrap();
        let dealt: HashSet<Card> = r.players.iter().flat_map(|p| p.initial_hand).collect();
        for p in &r.players {
            for i in 0..5 {
                if p.discard_indices.contains(&i) {
                    assert!(!dealt.contains(&p.final_hand[i]));
                } else {
                    assert_eq!(p.final_hand[i], p.initial_hand[i]);
                }
            }
            let unique: HashSet<Card> = p.final_hand.iter().copied().collect();
            assert_eq!(unique.len(), 5);
            assert_eq!(evaluate(&p.final_hand).unwrap(), p.hand_eval);
        }
    }
}

#[test]
fn shared_remainder_never_repeats_a_card() {
    for seed in ["s1", "s2", "s3", "s4"] {
        let r = execute_showdown_with(
            &shared(),
            &[DrawStrategy::AGGRESSIVE; MAX_PLAYERS],
            &[],
            1,
            seed,
        )
        .unwrap();
        let mut seen = HashSet::new();
        for p in &r.players {
            for c in p.final_hand {
                assert!(seen.insert(c), "{} appears twice under seed {}", c, seed);
            }
        }
    }
}

#[test]
fn exactly_one_winner_takes_the_pot() {
    let r = execute_showdown(&MIXED, &ids(4), 2_000, "pot").unwrap();
    let winners: Vec<_> = r.players.iter().filter(|p| p.is_winner).collect();
    assert_eq!(winners.len(), 1);
    assert_eq!(winners[0].player_index, r.winner_index.unwrap());
    assert_eq!(winners[0].payout, 2_000);
    let paid: u64 = r.players.iter().map(|p| p.payout).sum();
    assert_eq!(paid, r.total_pot);
}

#[test]
fn winner_holds_the_maximum_value() {
    for seed in ["m1", "m2", "m3", "m4", "m5"] {
        let r = execute_showdown(&MIXED, &ids(4), 1, seed).unwrap();
        let max = r.players.iter().map(|p| p.hand_eval.value).max().unwrap();
        let w = r.winner().unwrap();
        assert_eq!(w.hand_eval.value, max);
        // lowest index among ties
        assert!(r.players[..w.player_index]
            .iter()
            .all(|p| p.hand_eval.value < max));
    }
}

#[test]
fn simulate_agrees_with_execute() {
    for n in 0..25 {
        let seed = format!("agree-{}", n);
        let full = execute_showdown(&MIXED, &ids(4), 100, &seed).unwrap();
        let quick = simulate_outcome(&MIXED, &seed).unwrap();
        assert_eq!(quick.winner_index, full.winner_index);
        let w = full.winner().unwrap();
        assert_eq!(quick.winner_hand_rank, Some(w.hand_eval.rank));
        assert_eq!(quick.winner_hand_value, w.hand_eval.value);

        let full = execute_showdown_with(&shared(), &MIXED, &ids(4), 100, &seed).unwrap();
        let quick = simulate_outcome_with(&shared(), &MIXED, &seed).unwrap();
        assert_eq!(quick.winner_index, full.winner_index);
    }
}

#[test]
fn ties_resolve_to_lowest_index() {
    let same = |s: &str| evaluate(&showdown_engine::cards::parse_cards(s).unwrap()).unwrap();
    let evals = vec![
        same("2c 3d 5h 7s 9c"),
        same("Ad Kd 9c 7h 2s"),
        same("Ac Kc 9d 7s 2h"),
    ];
    assert_eq!(resolve(&evals), Some(1));
    assert_eq!(resolve(&[]), None);
}

#[test]
fn empty_table_has_no_winner() {
    let r = execute_showdown(&[], &[], 700, "nobody").unwrap();
    assert!(r.players.is_empty());
    assert_eq!(r.winner_index, None);
    assert_eq!(r.total_pot, 700);

    let s = simulate_outcome(&[], "nobody").unwrap();
    assert_eq!(s.winner_index, None);
    assert_eq!(s.winner_hand_rank, None);
    assert_eq!(s.winner_hand_value, 0);
}

#[test]
fn single_player_always_wins() {
    let r = execute_showdown(&[DrawStrategy::CONSERVATIVE], &ids(1), 50, "solo").unwrap();
    assert_eq!(r.winner_index, Some(0));
    assert_eq!(r.players[0].payout, 50);
}

#[test]
fn too_many_players_is_an_error() {
    let strategies = [DrawStrategy::BALANCED; MAX_PLAYERS + 1];
    assert_eq!(
        execute_showdown(&strategies, &[], 1, "crowd").unwrap_err(),
        EngineError::TooManyPlayers {
            max: MAX_PLAYERS,
            actual: MAX_PLAYERS + 1
        }
    );
    assert!(simulate_outcome(&strategies, "crowd").is_err());
}

#[test]
fn missing_ids_get_placeholders() {
    let r = execute_showdown(&MIXED[..3], &["human".to_string()], 1, "ids").unwrap();
    let names: Vec<&str> = r.players.iter().map(|p| p.player_id.as_str()).collect();
    assert_eq!(names, ["human", "player-1", "player-2"]);
}

#[test]
fn zero_pot_pays_zero() {
    let r = execute_showdown(&MIXED, &ids(4), 0, "free").unwrap();
    assert!(r.players.iter().all(|p| p.payout == 0));
    assert!(r.winner_index.is_some());
}

#[test]
fn draw_mode_parses_aliases() {
    assert_eq!("shared".parse::<DrawMode>(), Ok(DrawMode::SharedRemainder));
    assert_eq!(
        "per-player-deck".parse::<DrawMode>(),
        Ok(DrawMode::PerPlayerDeck)
    );
    assert!("lottery".parse::<DrawMode>().is_err());
    assert_eq!(DrawMode::default(), DrawMode::PerPlayerDeck);
}
