//! Asset Store
//!
//! Local directory holding the PNG pages generated by uploads.
//!
//! Assets are named `<uuid>.png` or `<uuid>_<page>.png` and are never
//! deleted: every upload adds files and nothing evicts them. Disk usage
//! grows with each upload for the life of the directory.

use std::io;
use std::path::{Path, PathBuf};
use std::sync::Arc;

use uuid::Uuid;

/// Extension of every stored asset
pub const ASSET_EXTENSION: &str = "png";

/// Local PNG asset directory
#[derive(Clone, Debug)]
pub struct AssetStore {
    inner: Arc<AssetStoreInner>,
}

#[derive(Debug)]
struct AssetStoreInner {
    base_path: PathBuf,
}

impl AssetStore {
    /// Open the asset directory, creating it (and its parents) if absent
    pub fn open<P: AsRef<Path>>(base_path: P) -> io::Result<Self> {
        let base_path = base_path.as_ref().to_path_buf();
        std::fs::create_dir_all(&base_path)?;

        Ok(Self {
            inner: Arc::new(AssetStoreInner { base_path }),
        })
    }

    /// Write PNG bytes under a freshly generated name and return that name
    ///
    /// `page` appends a `_<page>` suffix, used for multi-page documents.
    /// Blocking; call from a blocking context.
    pub fn store_png(&self, page: Option<usize>, png: &[u8]) -> io::Result<String> {
        let name = generate_asset_name(page);
        let path = self.inner.base_path.join(&name);
        std::fs::write(&path, png)?;

        tracing::debug!(asset = %name, size = png.len(), "Stored asset");

        Ok(name)
    }

    /// Resolve an asset name to its path
    ///
    /// Returns `None` for names that could escape the asset directory.
    pub fn asset_path(&self, name: &str) -> Option<PathBuf> {
        if !is_valid_asset_name(name) {
            return None;
        }
        Some(self.inner.base_path.join(name))
    }

    /// Read an asset, `Ok(None)` if it does not exist
    pub async fn read(&self, name: &str) -> io::Result<Option<Vec<u8>>> {
        let Some(path) = self.asset_path(name) else {
            return Ok(None);
        };

        match tokio::fs::read(&path).await {
            Ok(data) => Ok(Some(data)),
            Err(e) if e.kind() == io::ErrorKind::NotFound => Ok(None),
            Err(e) => Err(e),
        }
    }

    /// Number of PNG assets currently on disk
    pub fn asset_count(&self) -> io::Result<usize> {
        let mut count = 0;
        for entry in std::fs::read_dir(&self.inner.base_path)? {
            let path = entry?.path();
            if path.extension().and_then(|e| e.to_str()) == Some(ASSET_EXTENSION) {
                count += 1;
            }
        }
        Ok(count)
    }
}

/// Build a new unique asset filename
fn generate_asset_name(page: Option<usize>) -> String {
    let id = Uuid::new_v4();
    match page {
        Some(index) => format!("{}_{}.{}", id, index, ASSET_EXTENSION),
        None => format!("{}.{}", id, ASSET_EXTENSION),
    }
}

/// Plain file name inside the asset directory (no separators, no traversal)
fn is_valid_asset_name(name: &str) -> bool {
    !name.is_empty()
        && name != "."
        && !name.contains("..")
        && !name.contains('/')
        && !name.contains('\\')
        && !name.contains('\0')
}

// ============================================================================
// Tests
// ============================================================================
