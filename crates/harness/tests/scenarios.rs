// SPDX-License-Identifier: MIT

//! End-to-end harness passes against a form-data style target.

#![allow(clippy::unwrap_used, clippy::expect_used, clippy::panic)]

use formtest::log::MessageLog;
use formtest::{
    EntityHandle, Expect, OpFailure, OpValue, Registry, RequestInfo, Runner, TestCase, Verb,
};
use serde_json::{json, Value};
use std::collections::BTreeMap;

/// A small form-data provider: named fields, a mandatory-fetch that raises
/// `BadValue`, and an entity store whose lookups raise `MissingEntity`.
fn form_data_target(fields: &[(&str, Value)]) -> Registry {
    let fields: BTreeMap<String, Value> = fields
        .iter()
        .map(|(k, v)| (k.to_string(), v.clone()))
        .collect();
    let mut registry = Registry::new();

    {
        let fields = fields.clone();
        registry.register("exists", move |params: &[Value]| {
            let name = field_name(params)?;
            Ok(OpValue::Scalar(json!(fields.contains_key(&name))))
        });
    }
    {
        let fields = fields.clone();
        registry.register("fetch", move |params: &[Value]| {
            let name = field_name(params)?;
            let fallback = params.get(1).cloned().unwrap_or(Value::Null);
            Ok(OpValue::Scalar(fields.get(&name).cloned().unwrap_or(fallback)))
        });
    }
    {
        let fields = fields.clone();
        registry.register("mustFetch", move |params: &[Value]| {
            let name = field_name(params)?;
            match fields.get(&name) {
                Some(value) => Ok(OpValue::Scalar(value.clone())),
                None => Err(OpFailure::BadValue(format!("no field '{}'", name))),
            }
        });
    }
    {
        let fields = fields.clone();
        registry.register("listTags", move |_: &[Value]| {
            let entries = fields
                .iter()
                .filter(|(k, _)| k.starts_with("tag"))
                .enumerate()
                .map(|(i, (_, v))| (i.to_string(), v.clone()))
                .collect();
            Ok(OpValue::Keyed(entries))
        });
    }
    {
        let fields = fields.clone();
        registry.register("fieldNames", move |_: &[Value]| {
            Ok(OpValue::Set(fields.keys().map(|k| json!(k)).collect()))
        });
    }

    let mut stored_name = String::new();
    registry.register("setName", move |params: &[Value]| {
        stored_name = params
            .first()
            .and_then(Value::as_str)
            .unwrap_or_default()
            .to_string();
        Ok(OpValue::Scalar(json!(stored_name)))
    });

    // entity store holds notes 1..=3
    registry.register("loadNote", |params: &[Value]| {
        let id = params.first().and_then(Value::as_i64).unwrap_or(0);
        if (1..=3).contains(&id) {
            Ok(OpValue::Entity(EntityHandle::new("note", id)))
        } else {
            Err(OpFailure::MissingEntity(format!("no note with id {}", id)))
        }
    });
    registry.register("deleteUnknown", |params: &[Value]| {
        let id = params.first().and_then(Value::as_i64).unwrap_or(0);
        Err(OpFailure::MissingEntity(format!("no note with id {}", id)))
    });

    registry
}

fn field_name(params: &[Value]) -> Result<String, OpFailure> {
    params
        .first()
        .and_then(Value::as_str)
        .map(str::to_string)
        .ok_or_else(|| OpFailure::BadValue("field name must be a string".to_string()))
}

fn post_request() -> RequestInfo {
    RequestInfo::new(Verb::Post)
        .with_snapshot(json!({"name": "Alpha"}))
        .with_actor_id(json!(42))
}

fn run_cases(cases: &[TestCase]) -> MessageLog {
    let target = form_data_target(&[
        ("name", json!("Alpha")),
        ("tag_a", json!("a")),
        ("count", json!("3")),
    ]);
    let log = MessageLog::new();
    let mut runner = Runner::new(target, Registry::new(), log.clone());
    runner.run(cases, &post_request(), true);
    log
}

#[test]
fn scenario_set_name_echo_passes() {
    let log = run_cases(&[TestCase::new(
        "setName",
        vec![json!("Alpha")],
        Expect::Scalar(json!("Alpha")),
    )]);

    let verdicts = log.find("setName(Alpha)");
    assert_eq!(verdicts.len(), 1);
    assert!(verdicts[0].text.contains("setName(Alpha) OK"));
}

#[test]
fn scenario_delete_unknown_expected_failure_passes() {
    let log = run_cases(&[TestCase::expecting_failure("deleteUnknown", vec![json!(999)])]);

    let verdicts = log.find("deleteUnknown(999)");
    assert_eq!(verdicts.len(), 1);
    assert!(verdicts[0].text.contains("OK"));
    assert!(verdicts[0].text.contains("MissingEntity"));
    assert!(verdicts[0].text.contains("no note with id 999"));
}

#[test]
fn scenario_keyed_subset_passes() {
    // the target produces only tag_a, a strict subset of the expectation
    let log = run_cases(&[TestCase::new(
        "listTags",
        vec![],
        Expect::Keyed(vec![
            ("0".to_string(), json!("a")),
            ("1".to_string(), json!("b")),
        ]),
    )]);

    assert_eq!(log.find("listTags() OK").len(), 1);
    assert!(log.errors().is_empty());
}

#[test]
fn scenario_keyed_unexpected_key_fails() {
    let target = form_data_target(&[("tag_a", json!("a")), ("tag_z", json!("z"))]);
    let log = MessageLog::new();
    let mut runner = Runner::new(target, Registry::new(), log.clone());

    // expectation only covers key 0; produced key 1 (z) is unexpected
    runner.run(
        &[TestCase::new(
            "listTags",
            vec![],
            Expect::Keyed(vec![("0".to_string(), json!("a"))]),
        )],
        &post_request(),
        true,
    );

    let errors = log.errors();
    assert_eq!(errors.len(), 1);
    assert!(errors[0].text.contains("listTags() FAIL"));
    assert!(errors[0].text.contains("unexpected key 1 => z"));
}

#[test]
fn scenario_full_form_pass() {
    let cases = [
        TestCase::new("exists", vec![json!("name")], Expect::Scalar(json!(true))),
        TestCase::new("fetch", vec![json!("name")], Expect::Scalar(json!("Alpha"))),
        TestCase::new(
            "fetch",
            vec![json!("missing"), json!("fallback")],
            Expect::Scalar(json!("fallback")),
        ),
        // loose equality: stored "3" matches expected 3
        TestCase::new("fetch", vec![json!("count")], Expect::Scalar(json!(3))),
        TestCase::new(
            "fieldNames",
            vec![],
            Expect::Set(vec![json!("count"), json!("name"), json!("tag_a")]),
        ),
        TestCase::new("loadNote", vec![json!(2)], Expect::Entity),
        TestCase::expecting_failure("mustFetch", vec![json!("missing")]),
        TestCase::expecting_failure("loadNote", vec![json!(999)]),
    ];

    let log = run_cases(&cases);

    assert!(log.errors().is_empty(), "errors: {:?}", log.errors());
    // one snapshot line and one verdict per case, in declaration order
    assert_eq!(log.len(), cases.len() * 2);
    assert!(log.find("loadNote(2) OK").first().is_some_and(|m| m.text.contains("note#2")));
    assert!(log
        .find("mustFetch(missing) OK")
        .first()
        .is_some_and(|m| m.text.contains("BadValue")));
}

#[test]
fn scenario_short_circuit_on_plain_get() {
    let target = form_data_target(&[("name", json!("Alpha"))]);
    let log = MessageLog::new();
    let mut runner = Runner::new(target, Registry::new(), log.clone());

    runner.run(
        &[TestCase::new(
            "setName",
            vec![json!("Alpha")],
            Expect::Scalar(json!("Alpha")),
        )],
        &RequestInfo::new(Verb::Get),
        true,
    );

    assert!(log.is_empty());
}

#[test]
fn scenario_actor_id_sentinel() {
    let mut target = form_data_target(&[]);
    target.register("currentActor", |_: &[Value]| Ok(OpValue::Scalar(json!(42))));
    let log = MessageLog::new();
    let mut runner = Runner::new(target, Registry::new(), log.clone());

    runner.run(
        &[TestCase::new("currentActor", vec![], Expect::ActorId)],
        &post_request(),
        true,
    );

    assert_eq!(log.find("currentActor() OK").len(), 1);
}
