//! Auxiliary host services
//!
//! Asset access, media playback, soft keyboard and URL launching are plain
//! delegations to the host platform. They never touch the coordinator or its
//! lock, and their failures stay local: the caller gets an error, nothing is
//! retried, lifecycle state is unaffected.

pub mod assets;
pub mod keyboard;
pub mod media;
pub mod url;

pub use assets::{Asset, AssetSource, DirAssetSource};
pub use keyboard::{HeadlessKeyboard, KeyboardMode, KeyboardToggle, SoftKeyboard};
pub use media::{MediaService, PlayerHandle, SilentMedia};
pub use url::{LogUrlLauncher, UrlLauncher};

use std::sync::Arc;
use thiserror::Error;

use crate::config::HostConfig;

/// Host service errors
#[derive(Error, Debug)]
pub enum ServiceError {
    /// Resource path is not of the form `/dir/file`
    #[error("Invalid resource path: {0}")]
    InvalidPath(String),

    /// No asset at the given path
    #[error("Asset not found: {0}")]
    AssetNotFound(String),

    /// IO error
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Media could not be prepared or started
    #[error("Playback failed: {0}")]
    Playback(String),

    /// Handle does not refer to a live player
    #[error("Invalid player handle")]
    InvalidHandle,

    /// URL is empty or lacks a scheme
    #[error("Invalid URL: {0}")]
    InvalidUrl(String),
}

/// Bundle of platform services handed to engine code
///
/// Media backends may hold thread-bound audio devices, so the bundle as a
/// whole is not `Send`; keep it on the thread that created it.
pub struct HostServices {
    /// Bundled asset access
    pub assets: Arc<dyn AssetSource>,
    /// Sound and music playback
    pub media: Box<dyn MediaService>,
    /// Soft keyboard visibility
    pub keyboard: Box<dyn SoftKeyboard>,
    /// External URL launching
    pub urls: Box<dyn UrlLauncher>,
}

impl HostServices {
    /// Services that work without any platform: files from the asset root,
    /// silent media, logged keyboard and URL requests
    pub fn headless(config: &HostConfig) -> Self {
        let assets: Arc<dyn AssetSource> = Arc::new(DirAssetSource::new(&config.assets.root));
        Self {
            media: Box::new(SilentMedia::new(Arc::clone(&assets))),
            assets,
            keyboard: Box::new(HeadlessKeyboard::default()),
            urls: Box::new(LogUrlLauncher::default()),
        }
    }

    /// Like [`headless`](Self::headless) but with audible rodio playback
    #[cfg(feature = "audio")]
    pub fn with_audio(config: &HostConfig) -> Result<Self, ServiceError> {
        let mut services = Self::headless(config);
        services.media = Box::new(media::RodioMedia::new(Arc::clone(&services.assets))?);
        Ok(services)
    }
}
