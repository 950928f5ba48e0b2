//! Bundled asset access
//!
//! Resource paths are rooted at the bundle: `/gfx/test.tga` refers to
//! `<root>/gfx/test.tga`. Opening yields the whole byte range of the asset;
//! closing releases it.

use std::path::{Component, Path, PathBuf};

use super::ServiceError;

/// An opened asset
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Asset {
    path: String,
    bytes: Vec<u8>,
}

impl Asset {
    /// Wrap bytes read from `path`
    pub const fn new(path: String, bytes: Vec<u8>) -> Self {
        Self { path, bytes }
    }

    /// Resource path the asset was opened from
    pub fn path(&self) -> &str {
        &self.path
    }

    /// Asset contents
    pub fn bytes(&self) -> &[u8] {
        &self.bytes
    }

    /// Length in bytes
    pub fn len(&self) -> usize {
        self.bytes.len()
    }

    /// Whether the asset is empty
    pub fn is_empty(&self) -> bool {
        self.bytes.is_empty()
    }

    /// Take ownership of the contents
    pub fn into_bytes(self) -> Vec<u8> {
        self.bytes
    }
}

/// Source of bundled assets
pub trait AssetSource: Send + Sync {
    /// Open the asset at a resource path
    fn open(&self, path: &str) -> Result<Asset, ServiceError>;

    /// Release an opened asset
    fn close(&self, asset: Asset) {
        log::trace!("Closed asset {}", asset.path());
    }
}

/// Turn `/a/b.png` into the relative path `a/b.png`
///
/// Rejects paths without the leading slash, empty paths and anything that
/// would escape the bundle root.
pub fn resolve_resource_path(path: &str) -> Result<PathBuf, ServiceError> {
    let relative = path
        .strip_prefix('/')
        .ok_or_else(|| ServiceError::InvalidPath(path.to_string()))?;

    let relative = Path::new(relative);
    let mut resolved = PathBuf::new();
    for component in relative.components() {
        match component {
            Component::Normal(part) => resolved.push(part),
            Component::CurDir => {}
            _ => return Err(ServiceError::InvalidPath(path.to_string())),
        }
    }

    if resolved.as_os_str().is_empty() {
        return Err(ServiceError::InvalidPath(path.to_string()));
    }
    Ok(resolved)
}

/// Assets stored as plain files under a directory
#[derive(Debug, Clone)]
pub struct DirAssetSource {
    root: PathBuf,
}

impl DirAssetSource {
    /// Serve assets from `root`
    pub fn new(root: impl AsRef<Path>) -> Self {
        Self {
            root: root.as_ref().to_path_buf(),
        }
    }

    /// Bundle root directory
    pub fn root(&self) -> &Path {
        &self.root
    }
}

impl AssetSource for DirAssetSource {
    fn open(&self, path: &str) -> Result<Asset, ServiceError> {
        let full = self.root.join(resolve_resource_path(path)?);
        let bytes = std::fs::read(&full).map_err(|e| match e.kind() {
            std::io::ErrorKind::NotFound => ServiceError::AssetNotFound(path.to_string()),
            _ => ServiceError::Io(e),
        })?;
        log::debug!("Opened asset {path} ({} bytes)", bytes.len());
        Ok(Asset::new(path.to_string(), bytes))
    }
}
