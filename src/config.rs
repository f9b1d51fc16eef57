use crate::catalog::Document;
use crate::error::CatalogError;
use std::path::{Path, PathBuf};

/// On-disk home of the [`Document`]. One fixed path per store; the default
/// lives under the per-user config directory.
#[derive(Debug, Clone)]
pub struct ConfigStore {
    path: PathBuf,
}

impl ConfigStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn default_path() -> PathBuf {
        dirs_next::config_dir()
            .unwrap_or_else(std::env::temp_dir)
            .join("grid_launcher")
            .join("config.json")
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Quiet read of the debug-logging flag, for picking a log filter before
    /// the subscriber exists. Missing or malformed files count as disabled;
    /// nothing is logged or written back here.
    pub fn debug_logging_hint(&self) -> bool {
        std::fs::read_to_string(&self.path)
            .ok()
            .and_then(|raw| serde_json::from_str::<Document>(&raw).ok())
            .map(|doc| doc.settings.debug_logging)
            .unwrap_or(false)
    }

    /// Read the document. A missing or unparsable file degrades to the
    /// default empty document, which is written back immediately so the next
    /// load sees a healthy file. The application always starts with a usable
    /// document; read failures are never fatal.
    pub fn load(&self) -> Document {
        match std::fs::read_to_string(&self.path) {
            Ok(content) => match serde_json::from_str(&content) {
                Ok(doc) => return doc,
                Err(e) => {
                    tracing::warn!(
                        "config file {} is unreadable ({e}); starting fresh",
                        self.path.display()
                    );
                }
            },
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => {
                tracing::info!("no config file at {}; creating one", self.path.display());
            }
            Err(e) => {
                tracing::warn!("could not read {} ({e}); starting fresh", self.path.display());
            }
        }
        let doc = Document::default();
        if let Err(e) = self.save(&doc) {
            tracing::error!("failed to write fresh config: {e}");
        }
        doc
    }

    /// Persist the document as pretty-printed JSON in a single write call.
    pub fn save(&self, doc: &Document) -> Result<(), CatalogError> {
        if let Some(parent) = self.path.parent() {
            std::fs::create_dir_all(parent)?;
        }
        let json = serde_json::to_string_pretty(doc)?;
        std::fs::write(&self.path, json)?;
        Ok(())
    }

    /// Write the current document verbatim to a user-chosen path.
    pub fn export_to(path: &Path, doc: &Document) -> Result<(), CatalogError> {
        let json = serde_json::to_string_pretty(doc)?;
        std::fs::write(path, json)?;
        Ok(())
    }

    /// Parse a replacement document from a user-chosen path. The caller
    /// commits it (after explicit confirmation) via
    /// [`Catalog::replace_document`](crate::catalog::Catalog::replace_document);
    /// until then nothing is touched, so a cancelled picker is a no-op.
    pub fn import_from(path: &Path) -> Result<Document, CatalogError> {
        let content = std::fs::read_to_string(path)?;
        Ok(serde_json::from_str(&content)?)
    }
}
