use crate::config::ConfigStore;
use crate::error::CatalogError;
use crate::settings::Settings;
use serde::{Deserialize, Serialize};
use std::sync::atomic::{AtomicU64, Ordering};

/// Display name for items with no category.
pub const UNCATEGORIZED: &str = "Uncategorized";
/// Display name for items whose category id no longer resolves.
pub const UNKNOWN_CATEGORY: &str = "Unknown category";

const DEFAULT_CATEGORY_ICON: &str = "fa-folder";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ItemKind {
    Url,
    File,
    Folder,
    Command,
    /// Anything a hand-edited config file may contain. Dispatch surfaces
    /// these as a warning instead of failing to load the document.
    #[serde(other)]
    Unknown,
}

impl Default for ItemKind {
    fn default() -> Self {
        ItemKind::Command
    }
}

impl ItemKind {
    pub fn default_icon(self) -> &'static str {
        match self {
            ItemKind::Url => "fa-globe",
            ItemKind::File => "fa-file",
            ItemKind::Folder => "fa-folder",
            ItemKind::Command | ItemKind::Unknown => "fa-terminal",
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            ItemKind::Url => "URL",
            ItemKind::File => "File",
            ItemKind::Folder => "Folder",
            ItemKind::Command => "Command",
            ItemKind::Unknown => "Unknown",
        }
    }
}

#[derive(Debug, Serialize, Deserialize, Clone, PartialEq)]
pub struct Category {
    pub id: String,
    pub name: String,
    #[serde(default = "default_category_icon")]
    pub icon: String,
}

fn default_category_icon() -> String {
    DEFAULT_CATEGORY_ICON.to_string()
}

#[derive(Debug, Serialize, Deserialize, Clone, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Item {
    pub id: String,
    pub name: String,
    #[serde(rename = "type")]
    pub kind: ItemKind,
    pub command: String,
    #[serde(default)]
    pub category_id: Option<String>,
    /// Display cache of the referenced category's name. The mutation layer
    /// keeps it in sync; `category_id` stays authoritative.
    #[serde(default)]
    pub category_name: String,
    #[serde(default)]
    pub icon: String,
    /// Present only for command items. Absence is meaningful, so this is an
    /// optional field skipped on serialization rather than a plain bool.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub run_in_terminal: Option<bool>,
}

/// The full persisted state: categories, items and the settings block.
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq, Default)]
pub struct Document {
    #[serde(default)]
    pub categories: Vec<Category>,
    #[serde(default)]
    pub items: Vec<Item>,
    #[serde(default)]
    pub settings: Settings,
}

/// Generate a unique id: millisecond timestamp plus an in-process sequence
/// number so same-millisecond creations cannot collide within a session.
pub fn next_id() -> String {
    static SEQ: AtomicU64 = AtomicU64::new(0);
    format!(
        "{}-{}",
        chrono::Local::now().timestamp_millis(),
        SEQ.fetch_add(1, Ordering::Relaxed)
    )
}

/// Field values for creating or editing an item. Ids and the denormalized
/// category name are resolved by the catalog, never supplied by callers.
#[derive(Debug, Clone, Default)]
pub struct ItemDraft {
    pub name: String,
    pub kind: ItemKind,
    pub command: String,
    pub category_id: Option<String>,
    pub icon: String,
    pub run_in_terminal: bool,
}

/// Owns the in-memory document and its config store. Every mutation applies
/// in memory first and then saves synchronously; a failed save is reported
/// but the mutation is not rolled back.
pub struct Catalog {
    doc: Document,
    store: ConfigStore,
}

impl Catalog {
    pub fn open(store: ConfigStore) -> Self {
        let doc = store.load();
        Self { doc, store }
    }

    pub fn categories(&self) -> &[Category] {
        &self.doc.categories
    }

    pub fn items(&self) -> &[Item] {
        &self.doc.items
    }

    pub fn settings(&self) -> &Settings {
        &self.doc.settings
    }

    pub fn document(&self) -> &Document {
        &self.doc
    }

    pub fn store(&self) -> &ConfigStore {
        &self.store
    }

    pub fn category(&self, id: &str) -> Option<&Category> {
        self.doc.categories.iter().find(|c| c.id == id)
    }

    pub fn item(&self, id: &str) -> Option<&Item> {
        self.doc.items.iter().find(|i| i.id == id)
    }

    /// Number of items referencing the given category, for sidebar badges.
    pub fn items_in(&self, category_id: &str) -> usize {
        self.doc
            .items
            .iter()
            .filter(|i| i.category_id.as_deref() == Some(category_id))
            .count()
    }

    pub fn add_category(&mut self, name: &str, icon: &str) -> Result<Category, CatalogError> {
        let name = name.trim();
        if name.is_empty() {
            return Err(CatalogError::EmptyField("category name"));
        }
        let icon = icon.trim();
        let category = Category {
            id: next_id(),
            name: name.to_string(),
            icon: if icon.is_empty() {
                DEFAULT_CATEGORY_ICON.to_string()
            } else {
                icon.to_string()
            },
        };
        self.doc.categories.push(category.clone());
        self.persist()?;
        Ok(category)
    }

    /// Rename a category and propagate the new name to the display cache of
    /// every item referencing it.
    pub fn update_category(
        &mut self,
        id: &str,
        name: &str,
        icon: &str,
    ) -> Result<(), CatalogError> {
        let name = name.trim();
        if name.is_empty() {
            return Err(CatalogError::EmptyField("category name"));
        }
        let Some(category) = self.doc.categories.iter_mut().find(|c| c.id == id) else {
            return Err(CatalogError::CategoryNotFound(id.to_string()));
        };
        category.name = name.to_string();
        let icon = icon.trim();
        category.icon = if icon.is_empty() {
            DEFAULT_CATEGORY_ICON.to_string()
        } else {
            icon.to_string()
        };
        for item in &mut self.doc.items {
            if item.category_id.as_deref() == Some(id) {
                item.category_name = name.to_string();
            }
        }
        self.persist()
    }

    /// Destructive cascade: removes the category and every item referencing
    /// it. Callers confirm with the user before invoking this.
    pub fn delete_category(&mut self, id: &str) -> Result<(), CatalogError> {
        if !self.doc.categories.iter().any(|c| c.id == id) {
            return Err(CatalogError::CategoryNotFound(id.to_string()));
        }
        self.doc.items.retain(|i| i.category_id.as_deref() != Some(id));
        self.doc.categories.retain(|c| c.id != id);
        self.persist()
    }

    pub fn add_item(&mut self, draft: ItemDraft) -> Result<Item, CatalogError> {
        let name = draft.name.trim();
        if name.is_empty() {
            return Err(CatalogError::EmptyField("item name"));
        }
        let command = draft.command.trim();
        if command.is_empty() {
            return Err(CatalogError::EmptyField("command"));
        }
        if self.doc.items.iter().any(|i| i.name == name) {
            return Err(CatalogError::DuplicateName(name.to_string()));
        }
        let item = Item {
            id: next_id(),
            name: name.to_string(),
            kind: draft.kind,
            command: command.to_string(),
            category_name: self.resolve_category_name(draft.category_id.as_deref()),
            category_id: draft.category_id,
            icon: icon_or_default(&draft.icon, draft.kind),
            run_in_terminal: terminal_flag(draft.kind, draft.run_in_terminal),
        };
        self.doc.items.push(item.clone());
        self.persist()?;
        Ok(item)
    }

    /// Edit an item in place. The duplicate-name check is deliberately not
    /// re-applied here: renaming to an existing name is allowed, matching
    /// the create-only check of the original behavior.
    pub fn update_item(&mut self, id: &str, draft: ItemDraft) -> Result<(), CatalogError> {
        let name = draft.name.trim().to_string();
        if name.is_empty() {
            return Err(CatalogError::EmptyField("item name"));
        }
        let command = draft.command.trim().to_string();
        if command.is_empty() {
            return Err(CatalogError::EmptyField("command"));
        }
        let category_name = self.resolve_category_name(draft.category_id.as_deref());
        let Some(item) = self.doc.items.iter_mut().find(|i| i.id == id) else {
            return Err(CatalogError::ItemNotFound(id.to_string()));
        };
        item.name = name;
        item.kind = draft.kind;
        item.command = command;
        item.category_id = draft.category_id;
        item.category_name = category_name;
        item.icon = icon_or_default(&draft.icon, draft.kind);
        // Leaving the command kind strips the field entirely, it is not
        // merely set to false.
        item.run_in_terminal = terminal_flag(draft.kind, draft.run_in_terminal);
        self.persist()
    }

    pub fn delete_item(&mut self, id: &str) -> Result<(), CatalogError> {
        if !self.doc.items.iter().any(|i| i.id == id) {
            return Err(CatalogError::ItemNotFound(id.to_string()));
        }
        self.doc.items.retain(|i| i.id != id);
        self.persist()
    }

    /// Filter items by category and a case-insensitive substring over name
    /// or command. Results keep insertion order.
    pub fn query(&self, category_id: Option<&str>, search_term: &str) -> Vec<&Item> {
        let needle = search_term.trim().to_lowercase();
        self.doc
            .items
            .iter()
            .filter(|i| category_id.map_or(true, |c| i.category_id.as_deref() == Some(c)))
            .filter(|i| {
                needle.is_empty()
                    || i.name.to_lowercase().contains(&needle)
                    || i.command.to_lowercase().contains(&needle)
            })
            .collect()
    }

    pub fn set_settings(&mut self, settings: Settings) -> Result<(), CatalogError> {
        self.doc.settings = settings;
        self.persist()
    }

    /// Commit a confirmed import: the whole document is replaced, no merge.
    pub fn replace_document(&mut self, doc: Document) -> Result<(), CatalogError> {
        self.doc = doc;
        self.persist()
    }

    /// Re-read the document from disk, discarding unsaved in-memory state.
    pub fn reload(&mut self) {
        self.doc = self.store.load();
    }

    fn resolve_category_name(&self, category_id: Option<&str>) -> String {
        match category_id {
            None => UNCATEGORIZED.to_string(),
            Some(id) => self
                .doc
                .categories
                .iter()
                .find(|c| c.id == id)
                .map(|c| c.name.clone())
                .unwrap_or_else(|| UNKNOWN_CATEGORY.to_string()),
        }
    }

    fn persist(&self) -> Result<(), CatalogError> {
        self.store.save(&self.doc)
    }
}

fn icon_or_default(icon: &str, kind: ItemKind) -> String {
    let icon = icon.trim();
    if icon.is_empty() {
        kind.default_icon().to_string()
    } else {
        icon.to_string()
    }
}

fn terminal_flag(kind: ItemKind, run_in_terminal: bool) -> Option<bool> {
    (kind == ItemKind::Command).then_some(run_in_terminal)
}
