use worldvars::vars::{VarStore, VarType};

#[test]
fn reopened_store_reproduces_triples_in_order() {
    let dir = tempfile::tempdir().expect("tempdir");
    let path = dir.path().join("world_vars.json");

    let mut store = VarStore::open(&path);
    store.create("score", VarType::Int, "10", "").expect("create");
    store
        .create("ratio", VarType::Double, "2.50", "")
        .expect("create");
    store
        .create("motd", VarType::String, "hello world", "")
        .expect("create");
    store
        .create("open", VarType::Boolean, "1", "")
        .expect("create");
    drop(store);

    let reopened = VarStore::open(&path);
    let triples: Vec<(&str, VarType, &str)> = reopened
        .iter()
        .map(|v| (v.name(), v.var_type(), v.value()))
        .collect();
    assert_eq!(
        triples,
        vec![
            ("score", VarType::Int, "10"),
            ("ratio", VarType::Double, "2.50"),
            ("motd", VarType::String, "hello world"),
            ("open", VarType::Boolean, "true"),
        ]
    );
}

#[test]
fn vars_file_uses_the_bare_array_schema() {
    let dir = tempfile::tempdir().expect("tempdir");
    let path = dir.path().join("world_vars.json");

    let mut store = VarStore::open(&path);
    store.create("score", VarType::Int, "10", "").expect("create");
    store
        .create("open", VarType::Boolean, "FALSE", "")
        .expect("create");

    let content = std::fs::read_to_string(&path).expect("read vars file");
    let parsed: serde_json::Value = serde_json::from_str(&content).expect("valid json");
    let array = parsed.as_array().expect("top-level array");
    assert_eq!(array.len(), 2);

    let first = array[0].as_object().expect("object entry");
    assert_eq!(first.keys().len(), 3);
    assert_eq!(first["name"], "score");
    assert_eq!(first["type"], "INT");
    assert_eq!(first["value"], "10");

    assert_eq!(array[1]["type"], "BOOLEAN");
    assert_eq!(array[1]["value"], "false");

    // Pretty-printed, per the file contract.
    assert!(content.contains('\n'));
}

#[test]
fn descriptions_are_session_only() {
    let dir = tempfile::tempdir().expect("tempdir");
    let path = dir.path().join("world_vars.json");

    let mut store = VarStore::open(&path);
    store
        .create("score", VarType::Int, "10", "points this round")
        .expect("create");
    assert_eq!(store.get("score").unwrap().description(), "points this round");

    let content = std::fs::read_to_string(&path).expect("read vars file");
    assert!(!content.contains("points this round"));

    let reopened = VarStore::open(&path);
    assert_eq!(reopened.get("score").unwrap().description(), "");
}

#[test]
fn corrupt_file_yields_empty_store_without_error() {
    let dir = tempfile::tempdir().expect("tempdir");
    let path = dir.path().join("world_vars.json");
    std::fs::write(&path, "{ \"oops\": 1 }").unwrap();

    let mut store = VarStore::open(&path);
    assert!(store.is_empty());

    // The store is still usable and the next mutation rewrites the file.
    store.create("fresh", VarType::Int, "1", "").expect("create");
    let reopened = VarStore::open(&path);
    assert_eq!(reopened.len(), 1);
    assert_eq!(reopened.get("fresh").unwrap().value(), "1");
}
