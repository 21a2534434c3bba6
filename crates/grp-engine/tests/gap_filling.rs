use std::collections::BTreeMap;

use grp_engine::{ClosureStatus, Group, GroupConfig, GroupError, Rep};
use test_log::test;

fn rendered(reps: &[Rep]) -> Vec<String> {
    reps.iter().map(ToString::to_string).collect()
}

fn rendered_rules(group: &Group) -> Vec<String> {
    group.prime_rules().iter().map(ToString::to_string).collect()
}

#[test]
fn cyclic_group_of_order_six_needs_gap_filling() -> Result<(), GroupError> {
    let mut group = Group::from_batches(
        [vec!["a3", "e"], vec!["b2", "e"], vec!["ab", "ba"]],
        GroupConfig::named("Z6"),
    )?;
    assert_eq!(
        group.status(),
        ClosureStatus::Incomplete {
            sink: Rep::new("b"),
            generator: 'A',
        }
    );

    assert_eq!(group.fill_in_gaps(), ClosureStatus::Complete);
    assert_eq!(rendered(&group.sinks()), ["e", "a", "b", "a2", "ab", "a2b"]);
    assert_eq!(
        rendered_rules(&group),
        ["ba -> ab", "b2 -> e", "a3 -> e", "A -> a2", "B -> b"]
    );
    assert_eq!(group.sink_of("ba2ba")?, Rep::identity());
    group.table().validate()?;
    Ok(())
}

#[test]
fn filling_never_separates_equivalent_representations() -> Result<(), GroupError> {
    let mut group = Group::from_batches(
        [vec!["a3", "e"], vec!["b2", "e"], vec!["ab", "ba"]],
        GroupConfig::named("Z6"),
    )?;
    let before: BTreeMap<Rep, Rep> = group.table().entries().clone();

    group.fill_in_gaps();
    let table = group.table();
    for (left, left_sink) in &before {
        for (right, right_sink) in &before {
            if left_sink == right_sink {
                assert_eq!(table.sink_of(left), table.sink_of(right), "{left} ~ {right}");
            }
        }
    }
    assert!(group.explored_count() >= before.len());
    Ok(())
}

#[test]
fn empty_batches_change_nothing() -> Result<(), GroupError> {
    let mut group = Group::from_batches(
        [vec!["a3", "e"], vec![], vec!["b2", "e"], vec!["ab", "ba"]],
        GroupConfig::named("Z6"),
    )?;
    let before = group.table().clone();

    assert_eq!(group.add_equivalences(Vec::<&str>::new())?, None);
    assert_eq!(group.add_reps(Vec::new())?, None);
    assert_eq!(group.table(), &before);
    Ok(())
}

#[test]
fn trivial_group_reports_trivial_completeness() -> Result<(), GroupError> {
    let group = Group::from_batches([vec!["a", "e"]], GroupConfig::named("trivial"))?;
    assert_eq!(group.sink_count(), 1);
    assert_eq!(rendered_rules(&group), ["a -> e", "A -> e"]);
    assert_eq!(
        group.to_string(),
        "Group with name: trivial\n\nSinks:\n[e]\n\nPrime reductibles:\na -> e\nA -> e\n\nComplete (trivially)"
    );
    Ok(())
}

#[test]
fn small_presentations_close_to_their_orders() -> Result<(), GroupError> {
    let cases: [(&str, Vec<Vec<&str>>, &[&str]); 4] = [
        ("Z5", vec![vec!["r5", "e"]], &["e", "r", "r2", "r3", "r4"]),
        (
            "K4",
            vec![vec!["a2", "b2", "e"], vec!["ab", "ba"]],
            &["e", "a", "b", "ab"],
        ),
        (
            "S3",
            vec![vec!["a2", "b2", "e"], vec!["aba", "bab"]],
            &["e", "a", "b", "ab", "ba", "aba"],
        ),
        (
            "Q8",
            vec![vec!["i4", "e"], vec!["j2", "i2"], vec!["ji", "Ij"]],
            &["e", "i", "j", "i2", "ij", "ji", "i3", "i2j"],
        ),
    ];

    for (name, batches, sinks) in cases {
        let mut group = Group::from_batches(batches, GroupConfig::named(name))?;
        assert_eq!(group.fill_in_gaps(), ClosureStatus::Complete, "{name}");
        assert_eq!(rendered(&group.sinks()), sinks, "{name}");
    }
    Ok(())
}

#[test]
fn dihedral_group_of_order_eight() -> Result<(), GroupError> {
    let group = Group::from_batches(
        [vec!["H2", "r4", "e"], vec!["Hr", "RH"]],
        GroupConfig::named("D8"),
    )?;
    assert!(group.is_complete());
    assert_eq!(group.sink_count(), 8);
    assert_eq!(group.sink_of("rH")?, group.sink_of("Hr3")?);
    Ok(())
}
