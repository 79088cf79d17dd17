//! Sprite asset management
//!
//! Icon readiness is modeled explicitly: a sprite slot is pending until its
//! image decodes, then ready or failed, and the state is cached. Draw code
//! substitutes the fallback shape for anything not ready, so a slow or
//! missing asset never blocks a frame.

pub mod image_loader;

pub use image_loader::ImageData;

use slotmap::SlotMap;
use thiserror::Error;

slotmap::new_key_type! {
    /// Stable handle to a sprite slot
    pub struct SpriteHandle;
}

/// Readiness of a sprite asset
#[derive(Debug, Clone, PartialEq)]
pub enum SpriteState {
    /// Decode has not completed yet
    Pending,

    /// Image decoded and ready to draw
    Ready(ImageData),

    /// Decode failed; the fallback shape is drawn for this sprite from now on
    Failed,
}

/// Sprite storage with stable handles
#[derive(Default)]
pub struct SpriteStore {
    sprites: SlotMap<SpriteHandle, SpriteState>,
}

impl SpriteStore {
    /// Create an empty store
    pub fn new() -> Self {
        Self::default()
    }

    /// Reserve a slot for a sprite whose image is still decoding
    pub fn insert_pending(&mut self) -> SpriteHandle {
        self.sprites.insert(SpriteState::Pending)
    }

    /// Insert an already decoded sprite
    pub fn insert_ready(&mut self, image: ImageData) -> SpriteHandle {
        self.sprites.insert(SpriteState::Ready(image))
    }

    /// Resolve a slot with the outcome of its decode.
    ///
    /// A failed decode parks the slot in [`SpriteState::Failed`]; the engine
    /// keeps drawing the fallback shape for it.
    pub fn fulfill(&mut self, handle: SpriteHandle, result: Result<ImageData, AssetError>) {
        let Some(slot) = self.sprites.get_mut(handle) else {
            log::warn!("fulfill called with a stale sprite handle");
            return;
        };
        *slot = match result {
            Ok(image) => SpriteState::Ready(image),
            Err(e) => {
                log::warn!("sprite decode failed: {}", e);
                SpriteState::Failed
            }
        };
    }

    /// Image for a ready sprite, `None` while pending or after failure
    pub fn image(&self, handle: SpriteHandle) -> Option<&ImageData> {
        match self.sprites.get(handle) {
            Some(SpriteState::Ready(image)) => Some(image),
            _ => None,
        }
    }

    /// Current state of a slot, if the handle is live
    pub fn state(&self, handle: SpriteHandle) -> Option<&SpriteState> {
        self.sprites.get(handle)
    }

    /// Number of sprite slots
    pub fn len(&self) -> usize {
        self.sprites.len()
    }

    /// Whether the store holds no sprites
    pub fn is_empty(&self) -> bool {
        self.sprites.is_empty()
    }
}

/// Asset pipeline errors
#[derive(Error, Debug)]
pub enum AssetError {
    /// Image file could not be read or decoded
    #[error("failed to load image: {0}")]
    LoadFailed(String),
}
