use std::collections::BTreeMap;

use grp_engine::{Alphabet, GroupError, Merge, ReductionTable, Rep, Rule, Update};
use test_log::test;

fn rep(s: &str) -> Rep {
    Rep::new(s)
}

fn alphabet() -> Alphabet {
    let mut alphabet = Alphabet::new();
    alphabet.register('H');
    alphabet
}

#[test]
fn new_table_only_knows_the_identity() -> Result<(), GroupError> {
    let table = ReductionTable::new();
    assert_eq!(table.len(), 1);
    assert!(table.is_sink(&Rep::identity()));
    assert!(table.rules().is_empty());
    table.validate()
}

#[test]
fn conflicting_sinks_merge_into_the_smaller_one() -> Result<(), GroupError> {
    let alphabet = alphabet();
    let mut table = ReductionTable::new();

    assert_eq!(
        table.insert_or_merge(&rep("H"), &rep("H"), &alphabet),
        Update::Inserted { is_sink: true }
    );
    assert_eq!(
        table.insert_or_merge(&rep("HHH"), &rep("H"), &alphabet),
        Update::Inserted { is_sink: false }
    );
    assert_eq!(
        table.insert_or_merge(&rep("HHH"), &rep("H"), &alphabet),
        Update::Unchanged
    );
    assert_eq!(table.sink_count(), 2);

    let update = table.insert_or_merge(&rep("HHH"), &Rep::identity(), &alphabet);
    assert_eq!(
        update,
        Update::Merged(Merge {
            canonical: Rep::identity(),
            retired: rep("H"),
            redirected: vec![rep("H"), rep("HHH")],
        })
    );
    assert_eq!(table.sink_count(), 1);
    assert_eq!(table.sink_of(&rep("H")), Some(&Rep::identity()));
    table.validate()
}

#[test]
fn proposing_a_reducible_sink_uses_its_own_sink() -> Result<(), GroupError> {
    let alphabet = alphabet();
    let mut table = ReductionTable::new();
    table.insert_or_merge(&rep("HH"), &Rep::identity(), &alphabet);
    table.insert_or_merge(&rep("HHHH"), &rep("HH"), &alphabet);

    assert_eq!(table.sink_of(&rep("HHHH")), Some(&Rep::identity()));
    assert_eq!(table.sink_of(&rep("HH")), Some(&Rep::identity()));
    assert_eq!(table.merge(&rep("HH"), &Rep::identity()), None);
    table.validate()
}

#[test]
fn rebuilding_from_parts_checks_the_invariants() {
    let identity = Rep::identity();

    let mut entries = BTreeMap::new();
    entries.insert(rep("H"), rep("H"));
    let err = ReductionTable::from_parts(entries, Vec::new()).unwrap_err();
    assert_eq!(err.info().code, "identity-not-sink");

    let mut entries = BTreeMap::new();
    entries.insert(identity.clone(), identity.clone());
    entries.insert(rep("H"), rep("Hr"));
    let err = ReductionTable::from_parts(entries, Vec::new()).unwrap_err();
    assert!(matches!(err, GroupError::Table(_)));
    assert_eq!(err.info().code, "value-not-sink");
    assert_eq!(err.info().context.get("rep").map(String::as_str), Some("H"));

    let mut entries = BTreeMap::new();
    entries.insert(identity.clone(), identity.clone());
    let err = ReductionTable::from_parts(entries.clone(), vec![identity.clone()]).unwrap_err();
    assert_eq!(err.info().code, "prime-not-reductible");

    entries.insert(rep("HH"), identity.clone());
    let table = ReductionTable::from_parts(entries, vec![rep("HH")]).unwrap();
    assert_eq!(table.rules(), vec![Rule::new(rep("HH"), identity)]);
    assert_eq!(table.rules()[0].to_string(), "H2 -> e");
}
