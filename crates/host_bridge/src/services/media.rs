//! Media playback
//!
//! Players follow a create/destroy pairing: `create` prepares a player for an
//! asset (paused), `play` starts it, `destroy` releases it. Handles are slot
//! map keys, so a destroyed handle never aliases a later player.

use std::sync::Arc;

use slotmap::{new_key_type, SlotMap};

use super::{AssetSource, ServiceError};

new_key_type! {
    /// Handle to a prepared media player
    pub struct PlayerHandle;
}

/// Media playback service
///
/// # Threading
/// Not `Send`: audio output devices are often bound to the thread that opened
/// them.
pub trait MediaService {
    /// Prepare a player for the asset at a resource path
    fn create(&mut self, path: &str) -> Result<PlayerHandle, ServiceError>;

    /// Start or continue playback
    fn play(&mut self, handle: PlayerHandle) -> Result<(), ServiceError>;

    /// Release a player; unknown handles are ignored
    fn destroy(&mut self, handle: PlayerHandle);

    /// Whether the player exists and was started
    fn is_playing(&self, handle: PlayerHandle) -> bool;
}

#[derive(Debug)]
struct SilentPlayer {
    path: String,
    playing: bool,
}

/// Media service that validates assets but produces no sound
pub struct SilentMedia {
    assets: Arc<dyn AssetSource>,
    players: SlotMap<PlayerHandle, SilentPlayer>,
}

impl SilentMedia {
    /// Create a silent player backed by `assets`
    pub fn new(assets: Arc<dyn AssetSource>) -> Self {
        Self {
            assets,
            players: SlotMap::with_key(),
        }
    }

    /// Number of live players
    pub fn len(&self) -> usize {
        self.players.len()
    }

    /// Whether no players are live
    pub fn is_empty(&self) -> bool {
        self.players.is_empty()
    }
}

impl MediaService for SilentMedia {
    fn create(&mut self, path: &str) -> Result<PlayerHandle, ServiceError> {
        let asset = self.assets.open(path)?;
        if asset.is_empty() {
            self.assets.close(asset);
            return Err(ServiceError::Playback(format!("{path} is empty")));
        }
        self.assets.close(asset);

        Ok(self.players.insert(SilentPlayer {
            path: path.to_string(),
            playing: false,
        }))
    }

    fn play(&mut self, handle: PlayerHandle) -> Result<(), ServiceError> {
        let player = self.players.get_mut(handle).ok_or(ServiceError::InvalidHandle)?;
        player.playing = true;
        log::debug!("Playing {} (silent)", player.path);
        Ok(())
    }

    fn destroy(&mut self, handle: PlayerHandle) {
        self.players.remove(handle);
    }

    fn is_playing(&self, handle: PlayerHandle) -> bool {
        self.players.get(handle).is_some_and(|player| player.playing)
    }
}

#[cfg(feature = "audio")]
pub use rodio_media::RodioMedia;

#[cfg(feature = "audio")]
mod rodio_media {
    use std::io::Cursor;
    use std::sync::Arc;

    use rodio::{Decoder, OutputStream, OutputStreamHandle, Sink};
    use slotmap::SlotMap;

    use super::{MediaService, PlayerHandle};
    use crate::services::{AssetSource, ServiceError};

    /// Rodio-based media playback
    pub struct RodioMedia {
        /// Audio output stream (must be kept alive)
        _output_stream: OutputStream,
        stream_handle: OutputStreamHandle,
        assets: Arc<dyn AssetSource>,
        players: SlotMap<PlayerHandle, Sink>,
    }

    impl RodioMedia {
        /// Open the default output device
        pub fn new(assets: Arc<dyn AssetSource>) -> Result<Self, ServiceError> {
            let (stream, stream_handle) = OutputStream::try_default()
                .map_err(|e| ServiceError::Playback(format!("Failed to create audio output: {e}")))?;
            log::info!("Rodio media output initialized");
            Ok(Self {
                _output_stream: stream,
                stream_handle,
                assets,
                players: SlotMap::with_key(),
            })
        }
    }

    impl MediaService for RodioMedia {
        fn create(&mut self, path: &str) -> Result<PlayerHandle, ServiceError> {
            let asset = self.assets.open(path)?;
            let sink = Sink::try_new(&self.stream_handle)
                .map_err(|e| ServiceError::Playback(format!("Failed to create sink: {e}")))?;
            let source = Decoder::new(Cursor::new(asset.into_bytes()))
                .map_err(|e| ServiceError::Playback(format!("Failed to decode {path}: {e}")))?;

            sink.pause();
            sink.append(source);
            Ok(self.players.insert(sink))
        }

        fn play(&mut self, handle: PlayerHandle) -> Result<(), ServiceError> {
            let sink = self.players.get(handle).ok_or(ServiceError::InvalidHandle)?;
            sink.play();
            Ok(())
        }

        fn destroy(&mut self, handle: PlayerHandle) {
            if let Some(sink) = self.players.remove(handle) {
                sink.stop();
            }
        }

        fn is_playing(&self, handle: PlayerHandle) -> bool {
            self.players
                .get(handle)
                .is_some_and(|sink| !sink.is_paused() && !sink.empty())
        }
    }

    impl Drop for RodioMedia {
        fn drop(&mut self) {
            for (_handle, sink) in self.players.drain() {
                sink.stop();
            }
        }
    }
}
