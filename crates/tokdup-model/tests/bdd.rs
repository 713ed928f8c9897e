use tokdup_model::{Rejection, Sample, SampleSet, TokenCount, Vocabulary};

fn split(text: &str) -> Vec<&str> {
    text.split(' ').filter(|t| !t.is_empty()).collect()
}

#[test]
fn given_repeated_tokens_when_sample_is_built_then_bag_counts_each_once() {
    let mut vocab = Vocabulary::new();
    let s = Sample::from_tokens("a", &split("int x = x + x ;"), &mut vocab);
    // int=0 x=1 '='=2 '+'=3 ';'=4
    assert_eq!(s.seq(), &[0, 1, 2, 1, 3, 1, 4]);
    assert_eq!(
        s.bag(),
        &[
            TokenCount { id: 0, freq: 1 },
            TokenCount { id: 1, freq: 3 },
            TokenCount { id: 2, freq: 1 },
            TokenCount { id: 3, freq: 1 },
            TokenCount { id: 4, freq: 1 },
        ]
    );
    let total: u32 = s.bag().iter().map(|c| c.freq).sum();
    assert_eq!(total as usize, s.seq().len());
}

#[test]
fn given_min_tokens_when_record_is_too_short_then_it_is_discarded() {
    // Minimum of 3: "A a b c" stays, "B a b" is discarded.
    let mut set = SampleSet::new(3);
    assert_eq!(set.ingest("A", &split("a b c")), Ok(0));
    let err = set.ingest("B", &split("a b")).unwrap_err();
    assert!(matches!(err, Rejection::TooFewTokens { ref id, tokens: 2, minimum: 3 } if id == "B"));
    assert_eq!(set.len(), 1);
    assert_eq!(set.discarded(), 1);
}

#[test]
fn given_duplicate_id_when_ingested_then_first_record_wins() {
    let mut set = SampleSet::new(1);
    set.ingest("x", &split("a b c")).unwrap();
    assert!(set.ingest("x", &split("d e f")).is_err());
    assert_eq!(set.samples()[0].seq(), &[0, 1, 2]);
    assert_eq!(set.duplicate_ids(), 1);
}

#[test]
fn given_no_records_when_set_is_inspected_then_it_is_empty() {
    let set = SampleSet::new(20);
    assert!(set.is_empty());
    assert_eq!(set.min_tokens(), 20);
    assert!(set.vocabulary().is_empty());
}
