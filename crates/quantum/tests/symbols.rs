use quantum::{leading_outcome, render, sample, FrequencyTable, Leader, SamplingError, DEFAULT_VOCABULARY};
use rng::OndRng;
use state::C64;

#[test]
fn one_hot_scenario_renders_first_word() {
    let amps: Vec<C64> = [1.0, 0.0, 0.0, 0.0].iter().map(|&v| C64::new(v, 0.0)).collect();
    let mut rng = OndRng::new(b"alpha");
    let t = sample(&amps, 50, &mut rng).unwrap();

    let vocab = ["alpha", "beta", "gamma", "delta"];
    assert_eq!(t, FrequencyTable::from_counts([("00", 50)]).unwrap());
    assert_eq!(render(&t, &vocab, 3), "alpha: 50");
}

#[test]
fn ties_break_by_ascending_label() {
    let t = FrequencyTable::from_counts([("10", 5), ("01", 5)]).unwrap();
    let vocab = ["a", "b", "c"];

    assert_eq!(render(&t, &vocab, 3), "b: 5, c: 5");
    assert_eq!(render(&t, &vocab, 3), render(&t, &vocab, 3));
}

#[test]
fn ranks_by_count_then_truncates_to_top_k() {
    let t = FrequencyTable::from_counts([
        ("000", 3),
        ("001", 9),
        ("010", 1),
        ("011", 9),
        ("100", 4),
    ])
    .unwrap();

    assert_eq!(
        render(&t, &DEFAULT_VOCABULARY, 3),
        "goodbye: 9, no: 9, maybe: 4"
    );
    assert_eq!(render(&t, &DEFAULT_VOCABULARY, 1), "goodbye: 9");
    assert_eq!(
        render(&t, &DEFAULT_VOCABULARY, 10),
        "goodbye: 9, no: 9, maybe: 4, hello: 3, yes: 1"
    );
    assert_eq!(render(&t, &DEFAULT_VOCABULARY, 0), "");
}

#[test]
fn out_of_vocabulary_outcomes_are_skipped() {
    let t = FrequencyTable::from_counts([("11", 7), ("00", 2), ("10", 1)]).unwrap();

    assert_eq!(render(&t, &["x", "y"], 3), "x: 2");
    assert_eq!(render(&t, &["x", "y"], 1), "");

    let none: [&str; 0] = [];
    assert_eq!(render(&t, &none, 3), "");
}

#[test]
fn empty_table_renders_empty_message() {
    let t = FrequencyTable::from_counts(Vec::<(String, usize)>::new()).unwrap();
    assert!(t.is_empty());
    assert_eq!(render(&t, &DEFAULT_VOCABULARY, 3), "");
    assert_eq!(leading_outcome(&t), None);
}

#[test]
fn leader_is_single_or_tied() {
    let single = FrequencyTable::from_counts([("00", 1), ("11", 6), ("01", 2)]).unwrap();
    let leader = leading_outcome(&single).unwrap();
    assert_eq!(leader, Leader::Single(3));
    assert_eq!(leader.word(&["a", "b", "c", "d"]), Some("d".to_string()));
    assert_eq!(leader.word(&["a"]), None);

    let tied = FrequencyTable::from_counts([("10", 4), ("00", 4), ("01", 1)]).unwrap();
    let leader = leading_outcome(&tied).unwrap();
    assert_eq!(leader, Leader::Tied(vec![0, 2]));
    assert_eq!(leader.indices(), &[0, 2]);
    assert_eq!(leader.word(&["a", "b", "c"]), Some("a/c".to_string()));
    assert_eq!(leader.word(&["a"]), Some("a".to_string()));
    assert_eq!(leader.to_string(), "tie(0, 2)");
}

#[test]
fn hand_built_tables_are_validated() {
    assert_eq!(
        FrequencyTable::from_counts([("0x", 1)]),
        Err(SamplingError::InvalidLabel {
            label: "0x".to_string()
        })
    );
    assert_eq!(
        FrequencyTable::from_counts([("01", 1), ("1", 2)]),
        Err(SamplingError::LabelWidthMismatch {
            label: "1".to_string(),
            expected: 2,
            found: 1,
        })
    );

    let merged = FrequencyTable::from_counts([("01", 1), ("01", 2)]).unwrap();
    assert_eq!(merged.get("01"), 3);
}
