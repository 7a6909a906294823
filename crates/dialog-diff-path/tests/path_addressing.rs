use dialog_diff_path::{format_path, get, get_at, has, parse_path, PathStep};
use serde_json::json;

fn dialog() -> serde_json::Value {
    json!({
        "$kind": "Microsoft.AdaptiveDialog",
        "triggers": [
            {
                "$kind": "Microsoft.OnBeginDialog",
                "actions": [
                    {"$kind": "Microsoft.SendActivity", "activity": "hi"},
                    {"$kind": "Microsoft.EndDialog"}
                ]
            }
        ],
        "recognizer": {"intents": {"greeting.hello": ["hello"]}}
    })
}

#[test]
fn test_dialog_paths_resolve() {
    let doc = dialog();
    assert_eq!(
        get(&doc, "$.triggers[0].actions[1].$kind"),
        Some(&json!("Microsoft.EndDialog"))
    );
    assert_eq!(
        get(&doc, "$.recognizer.intents['greeting.hello'][0]"),
        Some(&json!("hello"))
    );
    assert!(has(&doc, "$.triggers[0].actions"));
    assert!(!has(&doc, "$.triggers[1].actions"));
}

#[test]
fn test_root_is_whole_document() {
    let doc = dialog();
    assert_eq!(get(&doc, "$"), Some(&doc));
    assert!(has(&json!(null), "$"));
}

#[test]
fn test_missing_intermediate_is_not_an_error() {
    let doc = dialog();
    assert_eq!(get(&doc, "$.nope.deeper[3].x"), None);
    assert!(!has(&doc, "$.triggers[0].actions[9].$kind"));
}

#[test]
fn test_paths_found_by_walking_render_back() {
    let doc = dialog();
    let steps = vec![
        PathStep::from("recognizer"),
        PathStep::from("intents"),
        PathStep::from("greeting.hello"),
    ];
    let rendered = format_path(&steps);
    assert_eq!(rendered, "$.recognizer.intents['greeting.hello']");
    assert_eq!(parse_path(&rendered).unwrap(), steps);
    assert_eq!(get(&doc, &rendered), get_at(&doc, &steps));
}

#[test]
fn test_relative_paths_resolve_from_root() {
    let doc = json!({"foo": {"bar": [1, 2]}});
    assert_eq!(get(&doc, "foo.bar[1]"), Some(&json!(2)));
    assert_eq!(get(&json!([5, 6]), "[1]"), Some(&json!(6)));
}
