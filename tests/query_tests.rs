use yamlpick::diagnostics::Diagnostics;
use yamlpick::document::node::{Entry, Value};
use yamlpick::document::parser::parse_str;
use yamlpick::query::{get, getstr, validate, DuplicateKeyPolicy, Found};

const POLICIES: [DuplicateKeyPolicy; 3] = [
    DuplicateKeyPolicy::First,
    DuplicateKeyPolicy::Last,
    DuplicateKeyPolicy::Error,
];

fn s(text: &str) -> Value {
    Value::String(text.to_string())
}

fn parse_yaml(yaml: &str) -> Value {
    let mut diagnostics = Diagnostics::new();
    parse_str(yaml, &mut diagnostics).unwrap().unwrap()
}

/// Helper to create a small inventory document
fn create_inventory() -> Value {
    parse_yaml(
        r#"
store:
  books:
    - title: Sayings of the Century
      author: Nigel Rees
    - title: Moby Dick
      author: Herman Melville
  bicycle:
    color: red
    price: 19.95
  closed:
"#,
    )
}

#[test]
fn test_end_to_end_example() {
    let tree = parse_yaml("a:\n  - 1\n  - 2\nb: 3");

    for policy in POLICIES {
        let mut diagnostics = Diagnostics::new();
        assert_eq!(getstr(Some(&tree), ".a[1]", policy, &mut diagnostics), Some("2"));
        assert!(get(Some(&tree), ".c", policy, &mut diagnostics).is_none());
    }
}

#[test]
fn test_identity_on_empty_query() {
    let trees = vec![
        s("leaf"),
        Value::Array(vec![]),
        Value::Dict(vec![Entry::new("k", None)]),
        create_inventory(),
    ];

    for tree in &trees {
        let mut diagnostics = Diagnostics::new();
        let found = get(Some(tree), "", DuplicateKeyPolicy::First, &mut diagnostics)
            .expect("empty query should resolve");
        assert!(std::ptr::eq(found.value().unwrap(), tree));
    }
}

#[test]
fn test_index_succeeds_iff_slot_exists() {
    let tree = Value::Array(vec![s("zero"), s("one")]);
    let mut diagnostics = Diagnostics::new();

    for i in 0..6 {
        let query = format!("[{}]", i);
        let found = get(Some(&tree), &query, DuplicateKeyPolicy::First, &mut diagnostics);
        assert_eq!(found.is_some(), i < 2, "index {}", i);
    }
    assert!(diagnostics.contains("index 3 is beyond array bounds (2 elements)"));
}

#[test]
fn test_duplicate_key_policies() {
    let tree = Value::Dict(vec![
        Entry::new("k", Some(s("zero"))),
        Entry::new("other", Some(s("one"))),
        Entry::new("k", Some(s("two"))),
    ]);
    let mut diagnostics = Diagnostics::new();

    assert_eq!(
        getstr(Some(&tree), ".k", DuplicateKeyPolicy::First, &mut diagnostics),
        Some("zero")
    );
    assert_eq!(
        getstr(Some(&tree), ".k", DuplicateKeyPolicy::Last, &mut diagnostics),
        Some("two")
    );
    assert!(diagnostics.is_empty());

    assert_eq!(
        getstr(Some(&tree), ".k", DuplicateKeyPolicy::Error, &mut diagnostics),
        None
    );
    assert!(diagnostics.contains("duplicate matching keys in dict for k"));

    // A key that is not duplicated resolves under every policy.
    for policy in POLICIES {
        assert_eq!(getstr(Some(&tree), ".other", policy, &mut diagnostics), Some("one"));
    }
}

#[test]
fn test_duplicate_keys_from_yaml() {
    let tree = parse_yaml("k: 1\nk: 2\nk: 3\n");
    let mut diagnostics = Diagnostics::new();
    assert_eq!(
        getstr(Some(&tree), ".k", DuplicateKeyPolicy::First, &mut diagnostics),
        Some("1")
    );
    assert_eq!(
        getstr(Some(&tree), ".k", DuplicateKeyPolicy::Last, &mut diagnostics),
        Some("3")
    );
    assert_eq!(
        getstr(Some(&tree), ".k", DuplicateKeyPolicy::Error, &mut diagnostics),
        None
    );
}

#[test]
fn test_malformed_queries_fail_before_traversal() {
    let tree = create_inventory();

    for query in [".store.books[]", ".store.books[0[1]]", ".store.books[x]", ".store]"] {
        let mut diagnostics = Diagnostics::new();
        assert!(!validate(query, &mut Diagnostics::new()), "{}", query);
        assert!(get(Some(&tree), query, DuplicateKeyPolicy::First, &mut diagnostics).is_none());
        // Only the validation complaint; the walk never started.
        assert_eq!(diagnostics.len(), 1, "{}", query);
        assert!(diagnostics.contains("query"), "{}", query);
    }
}

#[test]
fn test_unclosed_bracket_warns_then_fails_in_walk() {
    let tree = create_inventory();
    let mut diagnostics = Diagnostics::new();

    assert!(get(Some(&tree), ".store.books[1", DuplicateKeyPolicy::First, &mut diagnostics).is_none());
    let messages: Vec<_> = diagnostics.iter().map(|d| d.message.clone()).collect();
    assert_eq!(messages.len(), 2);
    assert!(messages[0].contains("missing closing delimiter"));
    assert!(messages[1].contains("missing closing delimiter"));
}

#[test]
fn test_getstr_rejects_collections() {
    let tree = create_inventory();
    let mut diagnostics = Diagnostics::new();

    assert_eq!(
        getstr(Some(&tree), ".store.books", DuplicateKeyPolicy::First, &mut diagnostics),
        None
    );
    assert_eq!(
        getstr(Some(&tree), ".store.bicycle", DuplicateKeyPolicy::First, &mut diagnostics),
        None
    );
    assert_eq!(
        getstr(Some(&tree), ".store.bicycle.price", DuplicateKeyPolicy::First, &mut diagnostics),
        Some("19.95")
    );
    assert_eq!(
        getstr(Some(&tree), ".store.books[1].author", DuplicateKeyPolicy::First, &mut diagnostics),
        Some("Herman Melville")
    );
}

#[test]
fn test_absent_value_distinct_from_not_found() {
    let tree = create_inventory();
    let mut diagnostics = Diagnostics::new();

    let closed = get(Some(&tree), ".store.closed", DuplicateKeyPolicy::First, &mut diagnostics);
    assert_eq!(closed, Some(Found::Absent));

    let missing = get(Some(&tree), ".store.open", DuplicateKeyPolicy::First, &mut diagnostics);
    assert_eq!(missing, None);

    let beyond = get(Some(&tree), ".store.closed.x", DuplicateKeyPolicy::First, &mut diagnostics);
    assert_eq!(beyond, None);

    assert_eq!(
        getstr(Some(&tree), ".store.closed", DuplicateKeyPolicy::First, &mut diagnostics),
        None
    );
}

#[test]
fn test_type_directed_failures() {
    let tree = create_inventory();
    let mut diagnostics = Diagnostics::new();

    assert!(get(Some(&tree), "[0]", DuplicateKeyPolicy::First, &mut diagnostics).is_none());
    assert!(diagnostics.contains("expected DICT"));

    assert!(get(Some(&tree), ".store.books.title", DuplicateKeyPolicy::First, &mut diagnostics).is_none());
    assert!(diagnostics.contains("expected ARRAY"));

    assert!(get(
        Some(&tree),
        ".store.bicycle.color.shade",
        DuplicateKeyPolicy::First,
        &mut diagnostics
    )
    .is_none());
    assert!(diagnostics.contains("reached terminal node"));
}

#[test]
fn test_keys_may_contain_spaces_and_unicode() {
    let tree = parse_yaml("\"full name\": Ada\ncafé: open\n");
    let mut diagnostics = Diagnostics::new();
    assert_eq!(
        getstr(Some(&tree), ".full name", DuplicateKeyPolicy::First, &mut diagnostics),
        Some("Ada")
    );
    assert_eq!(
        getstr(Some(&tree), ".café", DuplicateKeyPolicy::First, &mut diagnostics),
        Some("open")
    );
}

#[test]
fn test_no_tree() {
    let mut diagnostics = Diagnostics::new();
    assert!(get(None, ".a", DuplicateKeyPolicy::First, &mut diagnostics).is_none());
    assert!(getstr(None, "", DuplicateKeyPolicy::Last, &mut diagnostics).is_none());
}
