use super::*;

fn sample() -> Tree<u32> {
    let d = EntrySnapshot::node(
        "d",
        "Docs",
        1,
        vec![EntrySnapshot::node(
            "e",
            "Evidence",
            2,
            vec![EntrySnapshot::leaf("f", "file.pdf", 3)],
        )],
    );
    let a = EntrySnapshot::node(
        "a",
        "Archive",
        4,
        vec![
            EntrySnapshot::leaf("c", "c.txt", 5),
            EntrySnapshot::leaf("b", "b.txt", 6),
        ],
    );
    Tree::from_snapshot(EntrySnapshot::node("root", "Root", 0, vec![d, a])).unwrap()
}

#[test]
fn test_from_snapshot_indexes_every_entry() {
    let tree = sample();
    assert_eq!(tree.len(), 7);
    assert!(!tree.is_empty());
    assert_eq!(tree.root_id(), "root");
    for id in ["root", "a", "b", "c", "d", "e", "f"] {
        assert!(tree.contains(id), "missing {id}");
    }
    assert_eq!(tree.get("f").map(|e| *e.data()), Some(3));
    assert!(tree.get("zzz").is_none());
}

#[test]
fn test_children_keep_server_order() {
    let tree = sample();
    let names: Vec<&str> = tree.children(tree.root()).map(Entry::id).collect();
    assert_eq!(names, vec!["d", "a"]);

    let a = tree.get("a").unwrap();
    let names: Vec<&str> = tree.children(a).map(Entry::id).collect();
    assert_eq!(names, vec!["c", "b"]);

    let leaf = tree.get("b").unwrap();
    assert_eq!(tree.children(leaf).count(), 0);
}

#[test]
fn test_empty_root() {
    let tree = Tree::from_snapshot(EntrySnapshot::node("root", "Root", (), Vec::new())).unwrap();
    assert_eq!(tree.len(), 1);
    assert!(tree.is_empty());
}

#[test]
fn test_duplicate_ids_rejected() {
    let snapshot = EntrySnapshot::node(
        "root",
        "Root",
        (),
        vec![
            EntrySnapshot::leaf("x", "one", ()),
            EntrySnapshot::node("n", "folder", (), vec![EntrySnapshot::leaf("x", "two", ())]),
        ],
    );
    let err = Tree::from_snapshot(snapshot).unwrap_err();
    assert_eq!(err, TreeError::DuplicateId("x".into()));
}

#[test]
fn test_leaf_root_rejected() {
    let err = Tree::from_snapshot(EntrySnapshot::leaf("lonely", "lonely", ())).unwrap_err();
    assert_eq!(err, TreeError::RootNotNode("lonely".into()));
}

#[test]
fn test_ancestors_nearest_first() {
    let tree = sample();
    let ids: Vec<&str> = tree.ancestors("f").map(Entry::id).collect();
    assert_eq!(ids, vec!["e", "d", "root"]);
    assert_eq!(tree.ancestors("root").count(), 0);
    assert_eq!(tree.ancestors("missing").count(), 0);
}

#[test]
fn test_is_descendant_of() {
    let tree = sample();
    assert!(tree.is_descendant_of("f", "d"));
    assert!(tree.is_descendant_of("f", "root"));
    assert!(tree.is_descendant_of("c", "a"));
    assert!(!tree.is_descendant_of("c", "b"));
    assert!(!tree.is_descendant_of("d", "f"));
    assert!(!tree.is_descendant_of("a", "a"));
    assert!(!tree.is_descendant_of("missing", "root"));
}

#[test]
fn test_depth_and_parent() {
    let tree = sample();
    assert_eq!(tree.depth("root"), 0);
    assert_eq!(tree.depth("a"), 1);
    assert_eq!(tree.depth("f"), 3);
    assert_eq!(tree.parent("b").map(Entry::id), Some("a"));
    assert!(tree.parent("root").is_none());
}

#[test]
fn test_display_relative_path() {
    let tree = sample();
    assert_eq!(tree.display_relative_path("e"), "Root/Docs/Evidence/");
    // Leaves stop at their folder.
    assert_eq!(tree.display_relative_path("f"), "Root/Docs/Evidence/");
    assert_eq!(tree.display_relative_path("root"), "Root/");
    assert_eq!(tree.display_relative_path("missing"), "");
}

#[test]
fn test_leaf_flags() {
    let snapshot: EntrySnapshot<()> = serde_json::from_str(
        r#"{"id":"root","name":"Root","data":null,"children":[
            {"id":"zip","name":"bundle.zip","data":null,"isExpandable":true},
            {"id":"txt","name":"notes.txt","data":null},
            {"id":"dir","name":"empty","data":null,"children":[]}
        ]}"#,
    )
    .unwrap();
    let tree = Tree::from_snapshot(snapshot).unwrap();

    let zip = tree.get("zip").unwrap();
    assert!(zip.is_leaf());
    assert!(zip.is_expandable());
    assert!(!tree.get("txt").unwrap().is_expandable());
    assert!(tree.is_node("dir"));
    assert!(tree.get("dir").unwrap().is_expandable());
}

#[test]
fn test_to_snapshot_restores_nesting() {
    let tree = sample();
    let rebuilt = Tree::from_snapshot(tree.to_snapshot()).unwrap();
    let ids: Vec<&str> = rebuilt.ancestors("f").map(Entry::id).collect();
    assert_eq!(ids, vec!["e", "d", "root"]);
    assert_eq!(rebuilt.len(), tree.len());
}
