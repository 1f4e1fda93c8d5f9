//! End-to-end tests of the typed store through the public `brinedb` surface.
//!
//! Exercises the full chain (facade, codec, backend) for every operation
//! family: core set/get/has/del/keys/clean, array mutators, object mutators,
//! trust modes, and persistence across reopen.

use std::collections::HashMap;

use brinedb::{Brine, FnSource, Pattern, Value};

fn ints(xs: &[i64]) -> Vec<Value> {
    xs.iter().copied().map(Value::Int).collect()
}

// ========================================================================
// Core operations
// ========================================================================

#[test]
fn roundtrip_every_class() {
    let db = Brine::in_memory();
    let ts = db.ephemeral();

    ts.set("null", Value::Null).unwrap();
    ts.set("bool", true).unwrap();
    ts.set("int", -7i64).unwrap();
    ts.set("float", 2.5f64).unwrap();
    ts.set("string", "plain text").unwrap();
    ts.set("array", ints(&[1, 2, 3])).unwrap();
    let mut m = HashMap::new();
    m.insert("x".to_string(), Value::Int(1));
    ts.set("object", m.clone()).unwrap();
    ts.set("regex", Pattern::new("ab+c", "gi").unwrap()).unwrap();
    ts.set("fn", FnSource::parse("function (a) { return a; }").unwrap())
        .unwrap();

    assert_eq!(ts.get("null").unwrap(), Value::Null);
    assert_eq!(ts.get("bool").unwrap(), Value::Bool(true));
    assert_eq!(ts.get("int").unwrap(), Value::Int(-7));
    assert_eq!(ts.get("float").unwrap(), Value::Float(2.5));
    assert_eq!(ts.get("string").unwrap(), Value::String("plain text".into()));
    assert_eq!(ts.get("array").unwrap(), Value::Array(ints(&[1, 2, 3])));
    assert_eq!(ts.get("object").unwrap(), Value::Object(m));

    let r = ts.get("regex").unwrap();
    let p = r.as_regex().unwrap();
    assert_eq!((p.source(), p.flags()), ("ab+c", "gi"));

    let f = ts.get("fn").unwrap();
    assert_eq!(f.as_function().unwrap().params(), ["a"]);
}

#[test]
fn strings_shaped_like_other_classes_roundtrip() {
    let db = Brine::in_memory();
    let ts = db.ephemeral();

    for s in ["/foo/i", "function () { return 1; }", "42", "null", "[1]"] {
        ts.set("s", s).unwrap();
        assert_eq!(ts.get("s").unwrap(), Value::String(s.into()));
    }
}

#[test]
fn get_absent_key_raises_not_found() {
    let db = Brine::in_memory();
    let err = db.ephemeral().get("absent").unwrap_err();
    assert!(err.is_key_not_found());
    assert!(err.to_string().contains("absent"));
}

#[test]
fn stored_false_is_not_absent() {
    let db = Brine::in_memory();
    let ts = db.ephemeral();
    ts.set("flag", false).unwrap();
    assert_eq!(ts.get("flag").unwrap(), Value::Bool(false));
    assert!(ts.has("flag").unwrap());
}

#[test]
fn has_is_false_after_del_and_clean() {
    let db = Brine::in_memory();
    let ts = db.ephemeral();

    ts.set("a", 1i64).unwrap();
    assert!(ts.del("a").unwrap());
    assert!(!ts.has("a").unwrap());

    ts.set("b", 2i64).unwrap();
    ts.set("c", 3i64).unwrap();
    ts.clean().unwrap();
    assert!(!ts.has("b").unwrap());
    assert!(!ts.has("c").unwrap());
}

#[test]
fn clean_then_keys_is_empty() {
    let db = Brine::in_memory();
    let ts = db.ephemeral();
    ts.set("a", 1i64).unwrap();
    ts.set("b", 2i64).unwrap();
    assert_eq!(ts.keys().unwrap().len(), 2);

    ts.clean().unwrap();
    assert!(ts.keys().unwrap().is_empty());
}

#[test]
fn del_returns_whether_key_existed() {
    let db = Brine::in_memory();
    let ts = db.ephemeral();
    assert!(!ts.del("never").unwrap());
    ts.set("once", 1i64).unwrap();
    assert!(ts.del("once").unwrap());
    assert!(!ts.del("once").unwrap());
}

// ========================================================================
// Spec scenarios for arrays
// ========================================================================

#[test]
fn scenario_pop_returns_last_and_store_shrinks() {
    let db = Brine::in_memory();
    let ts = db.ephemeral();
    ts.set("a", ints(&[1, 2, 3])).unwrap();

    assert_eq!(
        ts.arr_pop("a").unwrap().value(),
        Some(Some(Value::Int(3)))
    );
    assert_eq!(ts.get("a").unwrap(), Value::Array(ints(&[1, 2])));
}

#[test]
fn scenario_len_on_mapping_is_wrong_type() {
    let db = Brine::in_memory();
    let ts = db.ephemeral();
    let mut m = HashMap::new();
    m.insert("f".to_string(), Value::Int(1));
    ts.set("a", m).unwrap();

    assert!(ts.arr_len("a").unwrap().is_wrong_type());
}

#[test]
fn array_pipeline() {
    let db = Brine::in_memory();
    let ts = db.ephemeral();
    ts.set("q", Vec::<Value>::new()).unwrap();

    assert_eq!(ts.arr_push("q", 1i64).unwrap().value(), Some(1));
    assert_eq!(ts.arr_push("q", 2i64).unwrap().value(), Some(2));
    assert_eq!(ts.arr_unshift("q", 0i64).unwrap().value(), Some(3));
    assert_eq!(ts.get("q").unwrap(), Value::Array(ints(&[0, 1, 2])));

    assert_eq!(
        ts.arr_shift("q").unwrap().value(),
        Some(Some(Value::Int(0)))
    );
    assert_eq!(
        ts.arr_reverse("q").unwrap().value(),
        Some(ints(&[2, 1]))
    );
    assert_eq!(ts.get("q").unwrap(), Value::Array(ints(&[2, 1])));

    assert_eq!(
        ts.arr_index_of("q", &Value::Int(1), None).unwrap().value(),
        Some(Some(1))
    );
    assert_eq!(ts.arr_item("q", 0).unwrap().value(), Some(Some(Value::Int(2))));
    assert_eq!(
        ts.arr_slice("q", 0, Some(1)).unwrap().value(),
        Some(ints(&[2]))
    );
    assert_eq!(
        ts.arr_concat("q", &ints(&[9])).unwrap().value(),
        Some(ints(&[2, 1, 9]))
    );
    // concat and slice never write back
    assert_eq!(ts.get("q").unwrap(), Value::Array(ints(&[2, 1])));
}

// ========================================================================
// Spec scenarios for mappings
// ========================================================================

#[test]
fn scenario_set_value_then_get_value() {
    let db = Brine::in_memory();
    let ts = db.ephemeral();
    ts.set("o", HashMap::new()).unwrap();

    assert!(ts.obj_set("o", "x", 5i64).unwrap().is_value());
    assert_eq!(
        ts.obj_get("o", "x").unwrap().value(),
        Some(Some(Value::Int(5)))
    );
}

#[test]
fn mapping_ops_reject_arrays_and_scalars() {
    let db = Brine::in_memory();
    let ts = db.ephemeral();
    ts.set("a", ints(&[1])).unwrap();
    ts.set("n", 3i64).unwrap();

    assert!(ts.obj_keys("a").unwrap().is_wrong_type());
    assert!(ts.obj_get("n", "x").unwrap().is_wrong_type());
    assert!(ts.obj_set("a", "x", 1i64).unwrap().is_wrong_type());
    assert!(ts.obj_remove("n", "x").unwrap().is_wrong_type());
}

#[test]
fn mapping_remove_then_keys() {
    let db = Brine::in_memory();
    let ts = db.ephemeral();
    let mut m = HashMap::new();
    m.insert("x".to_string(), Value::Int(1));
    m.insert("y".to_string(), Value::Int(2));
    ts.set("o", m).unwrap();

    assert_eq!(ts.obj_remove("o", "x").unwrap().value(), Some(true));
    assert_eq!(ts.obj_keys("o").unwrap().value(), Some(vec!["y".to_string()]));
}

// ========================================================================
// Regex scenario
// ========================================================================

#[test]
fn scenario_regex_roundtrip_preserves_source_and_flags() {
    let db = Brine::in_memory();
    let ts = db.ephemeral();
    ts.set("r", Pattern::new("foo", "i").unwrap()).unwrap();

    let v = ts.get("r").unwrap();
    let p = v.as_regex().unwrap();
    assert_eq!(p.source(), "foo");
    assert_eq!(p.flags(), "i");

    // And the reconstructed pattern actually matches per its flags
    let re = p.compile().unwrap();
    assert!(re.is_match("FOO"));
}

// ========================================================================
// Trust modes
// ========================================================================

#[test]
fn foreign_function_text_needs_trusted_decode() {
    let db = Brine::in_memory();
    let ts = db.ephemeral();
    let text = "function (a, b) { return a + b; }";
    ts.raw().set_item("f", text).unwrap();

    assert_eq!(ts.get("f").unwrap(), Value::String(text.into()));

    let v = ts.get_trusted("f").unwrap();
    let f = v.as_function().unwrap();
    assert_eq!(f.arity(), 2);
    assert_eq!(f.body(), "return a + b;");
}

// ========================================================================
// Persistence
// ========================================================================

#[test]
fn persistent_scope_survives_reopen_with_types_intact() {
    let dir = tempfile::TempDir::new().unwrap();
    let path = dir.path().join("brine.json");

    {
        let db = Brine::open(&path).unwrap();
        let ts = db.persistent();
        ts.set("n", 42i64).unwrap();
        ts.set("xs", ints(&[1, 2])).unwrap();
        ts.set("r", Pattern::new("x+", "g").unwrap()).unwrap();
        ts.arr_push("xs", 3i64).unwrap();
    }

    let db = Brine::open(&path).unwrap();
    let ts = db.persistent();
    assert_eq!(ts.get("n").unwrap(), Value::Int(42));
    assert_eq!(ts.get("xs").unwrap(), Value::Array(ints(&[1, 2, 3])));
    assert_eq!(ts.get("r").unwrap().as_regex().unwrap().flags(), "g");
}

#[test]
fn mutators_work_against_the_persistent_scope() {
    let dir = tempfile::TempDir::new().unwrap();
    let db = Brine::open(dir.path().join("brine.json")).unwrap();
    let ts = db.persistent();

    let mut m = HashMap::new();
    m.insert("hits".to_string(), Value::Int(0));
    ts.set("stats", m).unwrap();
    ts.obj_set("stats", "hits", 1i64).unwrap();

    assert_eq!(
        ts.obj_get("stats", "hits").unwrap().value(),
        Some(Some(Value::Int(1)))
    );
}
