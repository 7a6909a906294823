use dialog_diff::{
    apply_set, diff, diff_adds, diff_deletes, get, list_diff, ChangeKind, Comparator, Edit,
};
use proptest::prelude::*;
use serde_json::{Map, Value};

fn leaf() -> impl Strategy<Value = Value> {
    prop_oneof![
        Just(Value::Null),
        any::<bool>().prop_map(Value::Bool),
        (-20i64..20).prop_map(Value::from),
        "[a-c]{0,2}".prop_map(Value::String),
    ]
}

fn object_of(inner: impl Strategy<Value = Value>) -> impl Strategy<Value = Value> {
    prop::collection::btree_map("[a-d$.]{1,2}", inner, 0..4)
        .prop_map(|m| Value::Object(m.into_iter().collect::<Map<_, _>>()))
}

fn arb_json() -> impl Strategy<Value = Value> {
    leaf().prop_recursive(4, 32, 4, |inner| {
        prop_oneof![
            prop::collection::vec(inner.clone(), 0..4).prop_map(Value::Array),
            object_of(inner),
        ]
    })
}

/// Documents built from objects and scalars only.
fn arb_object_tree() -> impl Strategy<Value = Value> {
    leaf().prop_recursive(4, 32, 4, |inner| object_of(inner))
}

/// A document and a copy with some random edits applied.
fn arb_pair() -> impl Strategy<Value = (Value, Value)> {
    (arb_json(), arb_json(), prop::collection::vec(("[a-d]", arb_json()), 0..3)).prop_map(
        |(base, other, extra)| {
            let mut curr = match (base.clone(), other) {
                (Value::Object(mut merged), Value::Object(b)) => {
                    merged.extend(b);
                    Value::Object(merged)
                }
                (_, other) => other,
            };
            if let Value::Object(map) = &mut curr {
                for (k, v) in extra {
                    map.insert(k, v);
                }
            }
            (base, curr)
        },
    )
}

proptest! {
    #[test]
    fn diff_of_identical_documents_is_empty(doc in arb_json()) {
        prop_assert!(diff(&doc, &doc).is_empty());
    }

    #[test]
    fn deletes_are_swapped_adds((prev, curr) in arb_pair()) {
        let cmp = Comparator::default();
        let deletes = diff_deletes(&prev, &curr, &cmp);
        let swapped = diff_adds(&curr, &prev, &cmp);
        prop_assert_eq!(deletes.len(), swapped.len());
        for (delete, add) in deletes.iter().zip(&swapped) {
            prop_assert_eq!(delete.kind(), ChangeKind::Delete);
            prop_assert_eq!(add.kind(), ChangeKind::Add);
            prop_assert_eq!(delete.path(), add.path());
            prop_assert_eq!(delete.value(), add.value());
        }
    }

    #[test]
    fn added_values_can_be_set_back((prev, curr) in arb_pair()) {
        for add in diff(&prev, &curr).adds {
            let edit = Edit::new(add.path(), add.value().clone());
            let patched = apply_set(&prev, &[edit]).unwrap();
            prop_assert_eq!(get(&patched, add.path()), Some(add.value()));
        }
    }

    #[test]
    fn change_paths_resolve((prev, curr) in arb_pair()) {
        let changes = diff(&prev, &curr);
        for change in changes.adds.iter().chain(&changes.updates) {
            prop_assert_eq!(get(&curr, change.path()), Some(change.value()));
        }
        for change in &changes.deletes {
            prop_assert_eq!(get(&prev, change.path()), Some(change.value()));
        }
        for change in &changes.updates {
            prop_assert_eq!(get(&prev, change.path()), change.pre_value());
        }
    }

    #[test]
    fn rotated_list_has_no_changes(list in prop::collection::vec(arb_json(), 0..6), by in 0usize..6) {
        let mut rotated = list.clone();
        if !rotated.is_empty() {
            let by = by % rotated.len();
            rotated.rotate_left(by);
        }
        prop_assert!(list_diff(&list, &rotated).is_empty());
    }

    #[test]
    fn invert_matches_reverse_diff(a in arb_object_tree(), b in arb_object_tree()) {
        prop_assert_eq!(diff(&a, &b).invert(), diff(&b, &a));
    }
}
