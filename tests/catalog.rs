use grid_launcher::catalog::{Catalog, ItemDraft, ItemKind, UNCATEGORIZED, UNKNOWN_CATEGORY};
use grid_launcher::config::ConfigStore;
use grid_launcher::error::CatalogError;
use tempfile::tempdir;

fn catalog_in(dir: &tempfile::TempDir) -> Catalog {
    Catalog::open(ConfigStore::new(dir.path().join("config.json")))
}

fn draft(name: &str, kind: ItemKind, command: &str, category_id: Option<String>) -> ItemDraft {
    ItemDraft {
        name: name.into(),
        kind,
        command: command.into(),
        category_id,
        icon: String::new(),
        run_in_terminal: false,
    }
}

#[test]
fn add_category_appends_with_unique_id() {
    let dir = tempdir().unwrap();
    let mut catalog = catalog_in(&dir);

    let a = catalog.add_category("Dev", "fa-code").unwrap();
    let b = catalog.add_category("Dev", "").unwrap();

    assert_eq!(catalog.categories().len(), 2);
    assert_ne!(a.id, b.id);
    assert_eq!(a.name, "Dev");
    assert_eq!(a.icon, "fa-code");
    // icon falls back to the folder glyph
    assert_eq!(b.icon, "fa-folder");
}

#[test]
fn add_category_rejects_blank_name() {
    let dir = tempdir().unwrap();
    let mut catalog = catalog_in(&dir);

    let err = catalog.add_category("   ", "fa-code").unwrap_err();
    assert!(matches!(err, CatalogError::EmptyField(_)));
    assert!(catalog.categories().is_empty());
}

#[test]
fn rename_category_propagates_to_items() {
    let dir = tempdir().unwrap();
    let mut catalog = catalog_in(&dir);

    let dev = catalog.add_category("Dev", "").unwrap();
    let other = catalog.add_category("Other", "").unwrap();
    catalog
        .add_item(draft("a", ItemKind::Command, "ls", Some(dev.id.clone())))
        .unwrap();
    catalog
        .add_item(draft("b", ItemKind::Command, "ls", Some(dev.id.clone())))
        .unwrap();
    catalog
        .add_item(draft("c", ItemKind::Command, "ls", Some(other.id.clone())))
        .unwrap();

    catalog.update_category(&dev.id, "Development", "").unwrap();

    for item in catalog.items() {
        if item.category_id.as_deref() == Some(dev.id.as_str()) {
            assert_eq!(item.category_name, "Development");
        } else {
            assert_eq!(item.category_name, "Other");
        }
    }
}

#[test]
fn update_category_unknown_id_is_rejected() {
    let dir = tempdir().unwrap();
    let mut catalog = catalog_in(&dir);

    let err = catalog.update_category("nope", "Name", "").unwrap_err();
    assert!(matches!(err, CatalogError::CategoryNotFound(_)));
}

#[test]
fn delete_category_cascades_to_items() {
    let dir = tempdir().unwrap();
    let mut catalog = catalog_in(&dir);

    let dev = catalog.add_category("Dev", "").unwrap();
    let other = catalog.add_category("Other", "").unwrap();
    catalog
        .add_item(draft("a", ItemKind::Command, "ls", Some(dev.id.clone())))
        .unwrap();
    catalog
        .add_item(draft("b", ItemKind::Command, "ls", Some(dev.id.clone())))
        .unwrap();
    catalog
        .add_item(draft("c", ItemKind::Command, "ls", Some(other.id.clone())))
        .unwrap();

    catalog.delete_category(&dev.id).unwrap();

    assert_eq!(catalog.categories().len(), 1);
    assert_eq!(catalog.items().len(), 1);
    assert_eq!(catalog.items()[0].name, "c");
}

#[test]
fn add_item_resolves_category_name() {
    let dir = tempdir().unwrap();
    let mut catalog = catalog_in(&dir);

    let dev = catalog.add_category("Dev", "").unwrap();
    let item = catalog
        .add_item(draft("editor", ItemKind::Command, "code .", Some(dev.id)))
        .unwrap();
    assert_eq!(item.category_name, "Dev");

    let loose = catalog
        .add_item(draft("loose", ItemKind::Url, "example.com", None))
        .unwrap();
    assert_eq!(loose.category_name, UNCATEGORIZED);

    let dangling = catalog
        .add_item(draft(
            "dangling",
            ItemKind::Url,
            "example.com",
            Some("no-such-id".into()),
        ))
        .unwrap();
    assert_eq!(dangling.category_name, UNKNOWN_CATEGORY);
}

#[test]
fn add_item_rejects_duplicates_and_blank_fields() {
    let dir = tempdir().unwrap();
    let mut catalog = catalog_in(&dir);

    catalog
        .add_item(draft("editor", ItemKind::Command, "code .", None))
        .unwrap();

    let err = catalog
        .add_item(draft("editor", ItemKind::Url, "example.com", None))
        .unwrap_err();
    assert!(matches!(err, CatalogError::DuplicateName(_)));
    assert_eq!(catalog.items().len(), 1);

    // exact case-sensitive match only
    catalog
        .add_item(draft("Editor", ItemKind::Url, "example.com", None))
        .unwrap();

    assert!(matches!(
        catalog
            .add_item(draft("  ", ItemKind::Command, "ls", None))
            .unwrap_err(),
        CatalogError::EmptyField(_)
    ));
    assert!(matches!(
        catalog
            .add_item(draft("ok", ItemKind::Command, "  ", None))
            .unwrap_err(),
        CatalogError::EmptyField(_)
    ));
    assert_eq!(catalog.items().len(), 2);
}

#[test]
fn update_item_allows_renaming_to_existing_name() {
    let dir = tempdir().unwrap();
    let mut catalog = catalog_in(&dir);

    catalog
        .add_item(draft("one", ItemKind::Command, "ls", None))
        .unwrap();
    let two = catalog
        .add_item(draft("two", ItemKind::Command, "ls", None))
        .unwrap();

    // duplicate check applies on create only
    catalog
        .update_item(&two.id, draft("one", ItemKind::Command, "ls", None))
        .unwrap();
    assert_eq!(
        catalog.items().iter().filter(|i| i.name == "one").count(),
        2
    );
}

#[test]
fn leaving_command_kind_removes_terminal_flag() {
    let dir = tempdir().unwrap();
    let mut catalog = catalog_in(&dir);

    let mut d = draft("term", ItemKind::Command, "htop", None);
    d.run_in_terminal = true;
    let item = catalog.add_item(d).unwrap();
    assert_eq!(item.run_in_terminal, Some(true));

    catalog
        .update_item(&item.id, draft("term", ItemKind::Url, "example.com", None))
        .unwrap();

    let updated = catalog.item(&item.id).unwrap();
    assert_eq!(updated.run_in_terminal, None);

    // absent from the serialized document, not just false
    let json = serde_json::to_string_pretty(catalog.document()).unwrap();
    assert!(!json.contains("runInTerminal"));
}

#[test]
fn non_command_items_never_carry_terminal_flag() {
    let dir = tempdir().unwrap();
    let mut catalog = catalog_in(&dir);

    let mut d = draft("site", ItemKind::Url, "example.com", None);
    d.run_in_terminal = true;
    let item = catalog.add_item(d).unwrap();
    assert_eq!(item.run_in_terminal, None);
}

#[test]
fn query_preserves_insertion_order() {
    let dir = tempdir().unwrap();
    let mut catalog = catalog_in(&dir);

    for name in ["zeta", "alpha", "mid"] {
        catalog
            .add_item(draft(name, ItemKind::Command, "ls", None))
            .unwrap();
    }

    let all: Vec<&str> = catalog
        .query(None, "")
        .iter()
        .map(|i| i.name.as_str())
        .collect();
    assert_eq!(all, ["zeta", "alpha", "mid"]);
}

#[test]
fn query_filters_by_category_and_search_term() {
    let dir = tempdir().unwrap();
    let mut catalog = catalog_in(&dir);

    let dev = catalog.add_category("Dev", "").unwrap();
    catalog
        .add_item(draft(
            "Editor",
            ItemKind::Command,
            "code .",
            Some(dev.id.clone()),
        ))
        .unwrap();
    catalog
        .add_item(draft("browser", ItemKind::Url, "example.com", None))
        .unwrap();

    // search matches name case-insensitively
    let hits = catalog.query(None, "eDiT");
    assert_eq!(hits.len(), 1);
    assert_eq!(hits[0].name, "Editor");

    // search matches command too
    let hits = catalog.query(None, "EXAMPLE");
    assert_eq!(hits.len(), 1);
    assert_eq!(hits[0].name, "browser");

    // category filter is an exact id match
    let hits = catalog.query(Some(&dev.id), "");
    assert_eq!(hits.len(), 1);
    assert_eq!(hits[0].name, "Editor");

    assert!(catalog.query(Some(&dev.id), "browser").is_empty());
}

#[test]
fn delete_item_unknown_id_is_rejected() {
    let dir = tempdir().unwrap();
    let mut catalog = catalog_in(&dir);

    assert!(matches!(
        catalog.delete_item("missing").unwrap_err(),
        CatalogError::ItemNotFound(_)
    ));
}

#[test]
fn full_lifecycle_scenario() {
    let dir = tempdir().unwrap();
    let mut catalog = catalog_in(&dir);
    assert!(catalog.query(None, "").is_empty());

    let dev = catalog.add_category("Dev", "fa-code").unwrap();
    catalog
        .add_item(draft(
            "VSCode",
            ItemKind::Command,
            "code .",
            Some(dev.id.clone()),
        ))
        .unwrap();

    let items = catalog.query(None, "");
    assert_eq!(items.len(), 1);
    assert_eq!(items[0].category_name, "Dev");

    catalog.delete_category(&dev.id).unwrap();
    assert!(catalog.query(None, "").is_empty());

    // the cascade survives a reload from disk
    catalog.reload();
    assert!(catalog.items().is_empty());
    assert!(catalog.categories().is_empty());
}
