use proptest::prelude::*;
use rand::rngs::StdRng;
use rand::SeedableRng;
use sentencechain::token::tokenize;
use sentencechain::{Chain, ChainConfig};

fn sentence(max_words: usize) -> impl Strategy<Value = String> {
    prop::collection::vec(prop_oneof!["[a-c]{1,2}", Just("'".to_string())], 0..max_words)
        .prop_map(|words| words.join(" "))
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(64))]

    #[test]
    fn short_sentences_change_nothing(order in 1usize..5, words in 0usize..5) {
        let s = vec!["w"; words.min(order)].join(" ");
        let mut chain = Chain::new(order).unwrap();
        prop_assert!(!chain.add_sentence(&s));
        prop_assert!(chain.beginnings().is_empty());
        prop_assert!(chain.frequencies().is_empty());
    }

    #[test]
    fn beginnings_are_sentence_openings(
        order in 1usize..4,
        sentences in prop::collection::vec(sentence(8), 1..6),
    ) {
        let mut chain = Chain::new(order).unwrap();
        let mut expected = Vec::new();
        for s in &sentences {
            let tokens: Vec<&str> = tokenize(s).collect();
            chain.add_sentence(s);
            if tokens.len() > order {
                expected.push(tokens[..=order].to_vec());
            }
        }

        prop_assert_eq!(chain.beginnings().len(), expected.len());
        for (beginning, tokens) in chain.beginnings().iter().zip(&expected) {
            prop_assert_eq!(beginning.len(), order + 1);
            prop_assert_eq!(beginning, tokens);
        }
    }

    #[test]
    fn one_continuation_per_word_after_the_window(
        order in 1usize..4,
        sentences in prop::collection::vec(sentence(10), 1..6),
    ) {
        let mut chain = Chain::new(order).unwrap();
        let mut observations = 0;
        for s in &sentences {
            observations += tokenize(s).count().saturating_sub(order + 1);
            chain.add_sentence(s);
        }

        let stored: usize = chain.frequencies().values().map(|c| c.len()).sum();
        prop_assert_eq!(stored, observations);
        prop_assert!(chain.frequencies().values().all(|c| !c.is_empty()));
    }

    #[test]
    fn generation_terminates(
        order in 1usize..4,
        seed in any::<u64>(),
        sentences in prop::collection::vec(sentence(12), 1..8),
    ) {
        let config = ChainConfig { max_words: Some(200), ..ChainConfig::with_order(order) };
        let mut chain = Chain::with_config(config).unwrap();
        for s in &sentences {
            chain.add_sentence(s);
        }
        prop_assume!(!chain.beginnings().is_empty());

        let mut rng = StdRng::seed_from_u64(seed);
        let s = chain.generate_sentence(&mut rng).unwrap();
        prop_assert!(s.ends_with(['.', '!', '?']));
        let words = s[..s.len() - 1].split(' ').count();
        prop_assert!(words > order && words <= 200);
    }
}
