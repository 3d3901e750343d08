use super::*;
use chrono::{TimeZone, Utc};

fn node(id: &str, role: Role, content: &str, parent: Option<&str>) -> ChatNode {
    let ts = Utc.with_ymd_and_hms(2025, 1, 1, 0, 0, 0).unwrap();
    ChatNode::new(id, role, content, parent.map(str::to_string), ts)
}

/// root
/// ├── a
/// │   └── a1
/// └── b
fn sample_tree() -> ChatNode {
    let mut a = node("a", Role::Assistant, "first answer", Some("root"));
    a.children.push(node("a1", Role::User, "follow up", Some("a")));
    let b = node("b", Role::Assistant, "second answer", Some("root"));

    let mut root = node("root", Role::User, "question", None);
    root.children.push(a);
    root.children.push(b);
    root
}

#[test]
fn test_find() {
    let tree = sample_tree();
    assert_eq!(tree.find("a1").map(|n| n.content.as_str()), Some("follow up"));
    assert_eq!(tree.find("root").map(|n| n.role), Some(Role::User));
    assert!(tree.find("missing").is_none());
}

#[test]
fn test_branch_path() {
    let tree = sample_tree();
    assert_eq!(tree.branch_path_to("a1"), Some(vec!["root".into(), "a".into(), "a1".into()]));
    assert_eq!(tree.branch_path_to("b"), Some(vec!["root".into(), "b".into()]));
    assert_eq!(tree.branch_path_to("root"), Some(vec!["root".into()]));
    assert_eq!(tree.branch_path_to("missing"), None);
}

#[test]
fn test_linear_thread_skips_unknown() {
    let tree = sample_tree();
    let path = vec!["root".to_string(), "ghost".to_string(), "b".to_string()];
    let thread: Vec<&str> = tree.linear_thread(&path).iter().map(|n| n.id.as_str()).collect();
    assert_eq!(thread, vec!["root", "b"]);
}

#[test]
fn test_depth_of() {
    let tree = sample_tree();
    assert_eq!(tree.depth_of("root"), Some(0));
    assert_eq!(tree.depth_of("b"), Some(1));
    assert_eq!(tree.depth_of("a1"), Some(2));
    assert_eq!(tree.depth_of("missing"), None);
}

#[test]
fn test_with_child_leaves_original_untouched() {
    let tree = sample_tree();
    let updated = tree.with_child("b", node("b1", Role::User, "new branch", Some("b")));

    assert!(tree.find("b1").is_none());
    assert_eq!(updated.depth_of("b1"), Some(2));
    assert_eq!(updated.find("b").map(|n| n.children.len()), Some(1));
}

#[test]
fn test_with_child_unknown_parent() {
    let tree = sample_tree();
    let updated = tree.with_child("nope", node("x", Role::User, "lost", None));
    assert_eq!(updated, tree);
}

#[test]
fn test_flatten_pre_order() {
    let tree = sample_tree();
    let ids: Vec<&str> = tree.flatten().iter().map(|n| n.id.as_str()).collect();
    assert_eq!(ids, vec!["root", "a", "a1", "b"]);
}

#[test]
fn test_documents() {
    let tree = sample_tree();
    let docs = tree.documents();

    assert_eq!(docs.len(), 4);
    assert_eq!(docs[0].id, "root");
    assert_eq!(docs[0].text, "question");
    assert_eq!(docs[3].text, "second answer");
}

#[test]
fn test_role_serde_lowercase() {
    assert_eq!(serde_json::to_string(&Role::Assistant).unwrap(), "\"assistant\"");
    let role: Role = serde_json::from_str("\"user\"").unwrap();
    assert_eq!(role, Role::User);
    assert_eq!(Role::User.short_name(), "You");
}
