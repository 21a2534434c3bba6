use grp_engine::{
    canonical_hash, group_from_bytes, group_from_json, group_to_bytes, group_to_json, Group,
    GroupConfig, GroupError, Rep,
};
use test_log::test;

fn d6() -> Group {
    Group::from_batches(
        [vec!["H2", "r3", "e"], vec!["Hr", "rrH"]],
        GroupConfig::named("D6").with_max_sinks(12),
    )
    .unwrap()
}

#[test]
fn json_snapshot_restores_the_group() -> Result<(), GroupError> {
    let group = d6();
    let json = group_to_json(&group)?;
    let restored = group_from_json(&json)?;

    assert_eq!(canonical_hash(&restored), canonical_hash(&group));
    assert_eq!(restored.config(), group.config());
    assert_eq!(restored.table(), group.table());
    assert!(restored.is_complete());
    assert_eq!(restored.sink_of("Hrh")?, Rep::new("rr"));
    Ok(())
}

#[test]
fn binary_snapshot_restores_the_group() -> Result<(), GroupError> {
    let group = d6();
    let bytes = group_to_bytes(&group)?;
    let restored = group_from_bytes(&bytes)?;
    assert_eq!(restored.to_string(), group.to_string());
    assert_eq!(restored.alphabet(), group.alphabet());

    let err = group_from_bytes(&bytes[..bytes.len() / 2]).unwrap_err();
    assert!(matches!(err, GroupError::Serde(_)));
    Ok(())
}

#[test]
fn newer_schema_is_rejected() -> Result<(), GroupError> {
    let json = group_to_json(&d6())?;
    let mut value: serde_json::Value = serde_json::from_str(&json).unwrap();
    value["schema_version"]["major"] = serde_json::json!(2);

    let err = group_from_json(&value.to_string()).unwrap_err();
    assert_eq!(err.info().code, "schema-mismatch");
    assert_eq!(err.info().context.get("found").map(String::as_str), Some("2.0.0"));
    Ok(())
}

#[test]
fn corrupted_tables_are_rejected() -> Result<(), GroupError> {
    let json = group_to_json(&d6())?;
    let mut value: serde_json::Value = serde_json::from_str(&json).unwrap();
    value["entries"]["HH"] = serde_json::json!("zz");

    let err = group_from_json(&value.to_string()).unwrap_err();
    assert!(matches!(err, GroupError::Table(_)));
    assert_eq!(err.info().code, "value-not-sink");
    Ok(())
}
