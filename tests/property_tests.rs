use j16t::chart::ChartProjector;
use j16t::config::ScoringConfig;
use j16t::ledger::ResponseLedger;
use j16t::scorer::Scorer;
use j16t::types::{Axis, Letter};
use proptest::prelude::*;

// --- STRATEGIES ---

// A question bank of random axes with each cell unanswered or set to one of
// the two letters of its axis.
prop_compose! {
    fn arb_ledger()(
        cells in proptest::collection::vec((0usize..4, 0usize..3), 0..240)
    ) -> ResponseLedger {
        let axes: Vec<Axis> = cells.iter().map(|&(a, _)| Axis::ALL[a]).collect();
        let mut ledger = ResponseLedger::new(axes);
        for (i, &(_, choice)) in cells.iter().enumerate() {
            if choice < 2 {
                ledger.set_option(i, choice).unwrap();
            }
        }
        ledger
    }
}

prop_compose! {
    fn arb_config()(
        cap in 1u32..40,
        extra in proptest::array::uniform8(0u32..30),
        ei_weight in 1u32..=16
    ) -> ScoringConfig {
        ScoringConfig {
            max_score_e: cap + extra[0],
            max_score_i: cap + extra[1],
            max_score_s: cap + extra[2],
            max_score_n: cap + extra[3],
            max_score_t: cap + extra[4],
            max_score_f: cap + extra[5],
            max_score_j: cap + extra[6],
            max_score_p: cap + extra[7],
            score_cap: cap,
            ei_weight,
        }
    }
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(500))]

    #[test]
    fn test_tally_sums_to_answered_per_axis(ledger in arb_ledger()) {
        let scorer = Scorer::new(ScoringConfig::default()).unwrap();
        let raw = scorer.tally(&ledger);
        for axis in Axis::ALL {
            let answered = ledger
                .iter()
                .filter(|&(a, l)| a == axis && l.is_some())
                .count() as u32;
            prop_assert_eq!(raw.axis_total(axis), answered);
        }
    }

    #[test]
    fn test_weighting_doubles_only_ei(ledger in arb_ledger()) {
        let scorer = Scorer::new(ScoringConfig::default()).unwrap();
        let report = scorer.score(&ledger);
        for letter in Letter::ALL {
            let factor = if letter.axis() == Axis::EI { 2 } else { 1 };
            prop_assert_eq!(report.weighted.get(letter), report.raw.get(letter) * factor);
        }
    }

    #[test]
    fn test_percents_stay_in_range(ledger in arb_ledger(), config in arb_config()) {
        let scorer = Scorer::new(config).unwrap();
        let projector = ChartProjector::new(&scorer);
        let report = scorer.score(&ledger);

        for bar in projector.primary(&report).bars {
            prop_assert!((0.0..=100.0).contains(&bar.percent), "primary {}", bar.percent);
        }
        for bar in projector.paired(&report).bars() {
            prop_assert!((0.0..=100.0).contains(&bar.percent), "paired {}", bar.percent);
        }
    }

    #[test]
    fn test_codes_are_complementary(ledger in arb_ledger()) {
        let scorer = Scorer::new(ScoringConfig::default()).unwrap();
        let report = scorer.score(&ledger);
        for axis in Axis::ALL {
            let a = report.type_code.letter(axis);
            let b = report.converse_code.letter(axis);
            prop_assert_ne!(a, b);
            prop_assert!(axis.contains(a) && axis.contains(b));
        }
        prop_assert_eq!(report.converse_code.converse(), report.type_code);
    }

    #[test]
    fn test_winner_never_scores_below_loser(ledger in arb_ledger()) {
        let scorer = Scorer::new(ScoringConfig::default()).unwrap();
        let report = scorer.score(&ledger);
        for r in &report.axes {
            prop_assert!(r.winner_score >= r.loser_score);
            if r.is_tie() {
                prop_assert!(r.winner.is_priority());
            }
        }
    }

    #[test]
    fn test_scoring_is_deterministic(ledger in arb_ledger()) {
        let scorer = Scorer::new(ScoringConfig::default()).unwrap();
        prop_assert_eq!(scorer.score(&ledger), scorer.score(&ledger.clone()));
    }
}
