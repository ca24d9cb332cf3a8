//! Non-interactive outputs: the static HTML page and the JSON content dump.

pub mod html;

use std::fs;
use std::path::Path;

use anyhow::{Context, Result};
use tracing::info;

use crate::content::ContentStore;
use crate::models::{LayoutMode, MenuState};
use crate::view::build_document;

/// Write the page as standalone HTML
pub fn export_html(store: &ContentStore, menu: MenuState, path: &Path) -> Result<()> {
    let doc = build_document(store, menu, LayoutMode::Responsive);
    let page = html::render(&doc, store.profile().name);

    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        fs::create_dir_all(parent)
            .with_context(|| format!("Failed to create {}", parent.display()))?;
    }
    fs::write(path, &page).with_context(|| format!("Failed to write {}", path.display()))?;

    info!(path = %path.display(), bytes = page.len(), menu = menu.label(), "exported html");
    Ok(())
}

/// Pretty JSON of every display record
pub fn dump_content(store: &ContentStore) -> Result<String> {
    serde_json::to_string_pretty(store).context("Failed to serialize content store")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_export_html_writes_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("site").join("index.html");

        export_html(ContentStore::portfolio(), MenuState::Closed, &path).unwrap();

        let written = fs::read_to_string(&path).unwrap();
        assert!(written.starts_with("<!DOCTYPE html>"));
        assert!(written.contains("<title>Elise Straub</title>"));
    }

    #[test]
    fn test_dump_content_is_valid_json() {
        let json = dump_content(ContentStore::portfolio()).unwrap();
        let value: serde_json::Value = serde_json::from_str(&json).unwrap();
        assert_eq!(value["experience"][0]["company"], "Company X");
        assert_eq!(value["capabilities"].as_array().unwrap().len(), 5);
    }
}
