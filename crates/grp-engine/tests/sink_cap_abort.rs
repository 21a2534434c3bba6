use grp_engine::{ClosureStatus, Group, GroupConfig, GroupError, Rep};
use test_log::test;

#[test]
fn infinite_dihedral_aborts_at_the_sink_limit() -> Result<(), GroupError> {
    let mut group = Group::default();
    group.add_equivalences(["H2", "r2", ""])?;

    let status = group.fill_in_gaps();
    let ClosureStatus::Aborted { sink_count } = status else {
        panic!("expected an aborted closure, got {status}");
    };
    assert_eq!(sink_count, 51);
    assert_eq!(status.to_string(), "Aborted, too many sinks (51)");

    // The group keeps its last state within the limit.
    assert_eq!(group.sink_count(), 50);
    assert!(matches!(group.status(), ClosureStatus::Incomplete { .. }));
    let rules: Vec<String> = group.prime_rules().iter().map(ToString::to_string).collect();
    assert_eq!(rules, ["H2 -> e", "r2 -> e", "R -> r", "h -> H"]);
    group.table().validate()?;

    let err = status.into_result().unwrap_err();
    assert!(matches!(err, GroupError::Capacity(_)));
    assert_eq!(err.info().code, "too-many-sinks");
    assert!(err.info().hint.is_some());
    Ok(())
}

#[test]
fn lower_limit_aborts_a_finite_group() -> Result<(), GroupError> {
    let mut group = Group::new(GroupConfig::named("Z6").with_max_sinks(3));
    group.add_equivalences(["a3", "e"])?;
    group.add_equivalences(["b2", "e"])?;
    group.add_equivalences(["ab", "ba"])?;

    let status = group.fill_in_gaps();
    assert!(matches!(status, ClosureStatus::Aborted { sink_count } if sink_count > 3));
    assert!(group.sink_count() <= 3);
    Ok(())
}

#[test]
fn construction_reports_saturation_overflow() -> Result<(), GroupError> {
    let err = Group::from_batches([vec!["r60", "e"]], GroupConfig::named("Z60")).unwrap_err();
    assert!(matches!(err, GroupError::Capacity(_)));
    assert_eq!(err.info().code, "too-many-sinks");
    let reached: usize = err.info().context["sink_count"].parse().unwrap();
    assert!(reached > 50);

    let group = Group::from_batches(
        [vec!["r60", "e"]],
        GroupConfig::named("Z60").with_max_sinks(64),
    )?;
    assert!(group.is_complete());
    assert_eq!(group.sink_count(), 60);
    assert_eq!(group.sink_of("r61")?, Rep::new("r"));
    Ok(())
}

#[test]
fn saturation_overflow_rolls_back_the_round() -> Result<(), GroupError> {
    let mut group = Group::new(GroupConfig::named("Z8").with_max_sinks(5));
    group.add_equivalences(["r8", "e"])?;
    let before = group.table().clone();

    let status = group.integrate_combined_prime_reductibles();
    assert_eq!(status, ClosureStatus::Aborted { sink_count: 8 });
    assert_eq!(group.table(), &before);
    group.table().validate()?;
    Ok(())
}

#[test]
fn round_limit_stops_saturation_early() -> Result<(), GroupError> {
    let batches = || [vec!["H2", "r3", "e"], vec!["Hr", "rrH"]];

    let group = Group::from_batches(batches(), GroupConfig::named("D6").with_max_rounds(0))?;
    assert_eq!(
        group.status(),
        ClosureStatus::Incomplete {
            sink: Rep::identity(),
            generator: 'H',
        }
    );
    assert_eq!(group.sink_count(), 2);

    let group = Group::from_batches(batches(), GroupConfig::named("D6").with_max_rounds(1))?;
    assert!(group.is_complete());
    assert_eq!(group.sink_count(), 6);
    Ok(())
}

#[test]
fn incomplete_groups_refuse_sink_queries() -> Result<(), GroupError> {
    let mut group = Group::default();
    group.add_equivalences(["H2", "r2", ""])?;
    assert_eq!(group.sink_count(), 1);

    let status = group.status();
    let ClosureStatus::Incomplete { sink, generator } = status.clone() else {
        panic!("expected a gap, got {status}");
    };
    assert_eq!(group.missing_generator_report(), Some((sink.clone(), generator)));
    assert!(status.to_string().starts_with("Incomplete, missing "));

    let err = group.sink_of("H").unwrap_err();
    assert!(matches!(err, GroupError::Incomplete(_)));
    assert_eq!(err.info().code, "image-missing");
    assert_eq!(err.info().context.get("sink"), Some(&sink.to_string()));
    assert_ne!(sink.then(generator), Rep::identity());
    Ok(())
}
