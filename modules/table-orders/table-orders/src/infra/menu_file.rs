//! Menu file loader.
//!
//! The menu is a JSON array of `{ "name": ..., "price": ..., ... }` objects.
//! Entries are kept exactly as written. It is read once at startup; a missing
//! file or one that is not a JSON array leaves the service running with an
//! empty menu.

use std::path::{Path, PathBuf};

use serde_json::Value;
use thiserror::Error;
use tracing::{error, info, warn};

use crate::domain::menu::Menu;

#[derive(Error, Debug)]
pub enum MenuLoadError {
    #[error("failed to read menu file {path}: {source}")]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to parse menu file {path}: {source}")]
    Parse {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },
}

/// Read and parse the menu file.
///
/// # Errors
/// Returns [`MenuLoadError`] if the file cannot be read or is not a JSON array.
pub async fn read_menu(path: &Path) -> Result<Menu, MenuLoadError> {
    let raw = tokio::fs::read_to_string(path)
        .await
        .map_err(|source| MenuLoadError::Read {
            path: path.to_path_buf(),
            source,
        })?;

    let entries: Vec<Value> =
        serde_json::from_str(&raw).map_err(|source| MenuLoadError::Parse {
            path: path.to_path_buf(),
            source,
        })?;

    Ok(Menu::from_entries(entries))
}

/// Like [`read_menu`], but never fails: errors are logged and an empty menu
/// is returned.
pub async fn load_menu(path: &Path) -> Menu {
    match read_menu(path).await {
        Ok(menu) => {
            let unorderable = menu.len() - menu.items().len();
            if unorderable > 0 {
                warn!(
                    path = %path.display(),
                    unorderable,
                    "Menu entries without a string name and numeric price cannot be ordered"
                );
            }
            info!(path = %path.display(), items = menu.len(), "Menu loaded");
            menu
        }
        Err(e) => {
            error!(error = %e, "Error reading menu file; serving an empty menu");
            Menu::empty()
        }
    }
}
