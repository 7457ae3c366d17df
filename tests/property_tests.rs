use cracktime::estimate::{
    Attacker, CharClass, Event, Selection, Tracker, Trend, duration, effective_alphabet,
    estimate, sanitize,
};
use proptest::prelude::*;

// --- STRATEGIES ---

prop_compose! {
    fn arb_selection()(bits in 0u8..16) -> Selection {
        CharClass::ALL
            .into_iter()
            .enumerate()
            .filter(|(i, _)| bits & (1 << i) != 0)
            .map(|(_, c)| c)
            .collect()
    }
}

#[derive(Debug, Clone)]
enum Step {
    Type(String),
    Toggle(CharClass),
}

fn arb_class() -> impl Strategy<Value = CharClass> {
    prop::sample::select(CharClass::ALL.to_vec())
}

fn arb_step() -> impl Strategy<Value = Step> {
    prop_oneof![
        4 => "[a-zA-Z0-9!@#_ ]{0,12}".prop_map(Step::Type),
        1 => arb_class().prop_map(Step::Toggle),
    ]
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(300))]

    #[test]
    fn test_sanitize_is_idempotent(raw in ".{0,40}", selection in arb_selection()) {
        let permitted = effective_alphabet(selection).permitted;
        let once = sanitize(&raw, &permitted);
        prop_assert_eq!(sanitize(&once, &permitted), once.clone());
        prop_assert!(once.chars().all(|c| permitted.contains(&c)));
    }

    #[test]
    fn test_alphabet_size_floor(selection in arb_selection()) {
        let alphabet = effective_alphabet(selection);
        let sum: usize = selection.iter().map(CharClass::size).sum();
        prop_assert_eq!(alphabet.size, sum.max(1));
    }

    #[test]
    fn test_estimate_law(length in 1usize..20, size in 1usize..95, rate in 0.1f64..1e10) {
        // 94^19 still fits a u128, and the cast rounds to nearest.
        let exact = (size as u128).pow(length as u32);
        prop_assert_eq!(estimate(length, size, 1.0), exact as f64);
        prop_assert_eq!(estimate(length, size, rate), exact as f64 / rate);
        prop_assert_eq!(estimate(0, size, rate), 0.0);
    }

    #[test]
    fn test_format_never_panics(seconds in 0.0f64..1e300) {
        prop_assert!(!duration::format(seconds).is_empty());
    }

    #[test]
    fn test_typing_prefixes_fills_history(word in "[a-z]{1,15}") {
        let mut tracker = Tracker::new([CharClass::Lowercase].into_iter().collect());
        for end in 1..=word.len() {
            tracker.advance(Event::Typed(&word[..end]));
        }

        for attacker in Attacker::ALL {
            let samples = tracker.history(attacker).samples();
            prop_assert_eq!(samples.len(), word.len());
            for (i, sample) in samples.iter().enumerate() {
                prop_assert_eq!(sample.length, i + 1);
                prop_assert_eq!(sample.alphabet_size, 26);
                prop_assert_eq!(sample.time, estimate(i + 1, 26, attacker.profile().rate));
            }
        }
    }

    #[test]
    fn test_history_invariants_hold(
        initial in arb_selection(),
        steps in proptest::collection::vec(arb_step(), 1..40)
    ) {
        let mut tracker = Tracker::new(initial);
        for step in &steps {
            let update = match step {
                Step::Type(raw) => tracker.advance(Event::Typed(raw)),
                Step::Toggle(class) => tracker.advance(Event::Toggled(*class)),
            };

            // Toggles always wipe the trend.
            if let Step::Toggle(_) = step {
                prop_assert!(matches!(update.trend, Trend::Restarted | Trend::Cleared));
            }
            match update.trend {
                Trend::Restarted => {
                    prop_assert_eq!(tracker.history(Attacker::Human).len(), 1);
                }
                Trend::Cleared => {
                    prop_assert!(tracker.history(Attacker::Human).is_empty());
                }
                Trend::Extended | Trend::Unchanged => {}
            }

            let human = tracker.history(Attacker::Human).samples();
            let computer = tracker.history(Attacker::Computer).samples();
            prop_assert_eq!(human.len(), computer.len());

            // Strictly increasing lengths, one alphabet size throughout.
            prop_assert!(human.windows(2).all(|w| w[0].length < w[1].length));
            prop_assert!(human.iter().all(|s| s.alphabet_size == tracker.alphabet().size));
            prop_assert!(human.iter().all(|s| s.length >= 1));

            // The newest sample is the current password.
            let length = tracker.password().chars().count();
            prop_assert_eq!(tracker.previous_length(), length);
            if let Some(last) = human.last() {
                prop_assert_eq!(last.length, length);
            }
        }
    }
}
