use nfa2dfa::{
    Automaton, ClosureStrategy, DeterminizeConfig, Determinizer, Label, WorklistOrder,
    subset_construction,
};
use proptest::prelude::*;
use std::collections::BTreeSet;

const ALPHABET: [char; 2] = ['a', 'b'];

/// Small automata over {a, b} with random ε- and symbol edges.
fn arb_nfa() -> impl Strategy<Value = Automaton<u8, char>> {
    (1u8..7)
        .prop_flat_map(|n| {
            let label = prop_oneof![
                Just(Label::Epsilon),
                Just(Label::Symbol('a')),
                Just(Label::Symbol('b')),
            ];
            (
                Just(n),
                prop::collection::vec((0..n, label, 0..n), 0..16),
                0..n,
                prop::collection::vec(0..n, 0..3),
            )
        })
        .prop_map(|(n, edges, initial, accepting)| {
            let transitions = edges
                .into_iter()
                .map(|(from, label, to)| ((from, label), [to]));
            Automaton::new(0..n, ALPHABET, accepting, initial, transitions).unwrap()
        })
}

fn arb_word() -> impl Strategy<Value = Vec<char>> {
    prop::collection::vec(prop::sample::select(ALPHABET.to_vec()), 0..10)
}

proptest! {
    #[test]
    fn closure_is_idempotent_superset(nfa in arb_nfa(), seed in prop::collection::btree_set(0u8..7, 0..4)) {
        let seed: BTreeSet<u8> = seed.into_iter().filter(|s| nfa.contains_state(s)).collect();
        for strategy in [ClosureStrategy::Adjacency, ClosureStrategy::Scan] {
            let config = DeterminizeConfig::builder().closure(strategy).build().unwrap();
            let determinizer = Determinizer::with_config(&nfa, config).unwrap();

            let once = determinizer.epsilon_closure_of(&seed).unwrap();
            let twice = determinizer.epsilon_closure_of(&once).unwrap();
            prop_assert!(seed.is_subset(&once));
            prop_assert_eq!(&once, &twice);

            let union: BTreeSet<u8> = seed
                .iter()
                .flat_map(|state| determinizer.epsilon_closure(state).unwrap())
                .collect();
            prop_assert_eq!(&once, &union);
        }
    }

    #[test]
    fn result_is_independent_of_worklist_order(nfa in arb_nfa()) {
        let fifo = subset_construction(&nfa).unwrap();
        let config = DeterminizeConfig::builder()
            .order(WorklistOrder::Lifo)
            .closure(ClosureStrategy::Scan)
            .build()
            .unwrap();
        let lifo = Determinizer::with_config(&nfa, config).unwrap().determinize().unwrap();

        prop_assert_eq!(
            fifo.states().collect::<BTreeSet<_>>(),
            lifo.states().collect::<BTreeSet<_>>()
        );
        prop_assert_eq!(fifo.transition_table(), lifo.transition_table());
    }

    #[test]
    fn table_is_total_within_alphabet(nfa in arb_nfa()) {
        let dfa = subset_construction(&nfa).unwrap();
        let determinizer = Determinizer::new(&nfa);
        let declared: BTreeSet<u8> = nfa.states().copied().collect();

        for state in dfa.states() {
            prop_assert!(!state.is_empty());
            prop_assert!(state.states().is_subset(&declared));
            prop_assert_eq!(
                state.states(),
                &determinizer.epsilon_closure_of(state.iter()).unwrap()
            );
            for symbol in ALPHABET {
                let moved = nfa.move_states(state.iter(), &Label::Symbol(symbol));
                match dfa.transition(state, &symbol) {
                    Some(target) => {
                        prop_assert_eq!(
                            target.states(),
                            &determinizer.epsilon_closure_of(&moved).unwrap()
                        );
                        prop_assert!(dfa.contains(target));
                    }
                    None => {
                        prop_assert!(moved.is_empty());
                    }
                }
            }
            prop_assert_eq!(
                dfa.is_accepting(state),
                state.iter().any(|s| nfa.is_accepting(s))
            );
        }
    }

    #[test]
    fn dfa_accepts_the_same_language(nfa in arb_nfa(), words in prop::collection::vec(arb_word(), 1..8)) {
        let dfa = subset_construction(&nfa).unwrap();
        let renumbered = dfa.renumber();
        for word in &words {
            let expected = nfa.accepts(word);
            prop_assert_eq!(dfa.accepts(word), expected, "{:?}", word);
            prop_assert_eq!(renumbered.accepts(word), expected, "{:?}", word);
        }
    }
}
