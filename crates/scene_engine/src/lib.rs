//! # Scene Engine
//!
//! A frame-driven 2D animation engine for self-playing "shooter wallpaper"
//! scenes: an autonomous ship drifts along the bottom edge, fires on a
//! cooldown, and pops drifting icon targets into particle bursts.
//!
//! The engine owns all mutable scene state and is driven by its host: the
//! host supplies elapsed time each tick and a [`render::Canvas`] surface to
//! paint on. There is no input handling and no failure path in the frame
//! loop; an unusable surface just skips the frame.
//!
//! ## Quick Start
//!
//! ```rust,no_run
//! use scene_engine::prelude::*;
//!
//! let config = SceneConfig::default();
//! let mut engine = SceneEngine::new(config, 1280.0, 720.0);
//! let mut canvas = NullCanvas::new(1280.0, 720.0);
//! let mut timer = Timer::new();
//!
//! loop {
//!     timer.update();
//!     engine.tick(timer.delta_time(), Some(&mut canvas));
//! }
//! ```

#![warn(missing_docs)]
#![warn(clippy::all, clippy::pedantic, clippy::nursery)]
#![allow(clippy::module_name_repetitions, clippy::similar_names, clippy::too_many_arguments)]

pub mod assets;
pub mod config;
pub mod entity;
pub mod foundation;
pub mod render;

mod engine;

pub use engine::{SceneEngine, TargetStyle};

/// Common imports for engine users
pub mod prelude {
    pub use crate::{
        assets::{AssetError, ImageData, SpriteHandle, SpriteState, SpriteStore},
        config::{ConfigError, SceneConfig},
        entity::{Cannon, Entity, EntityKind},
        foundation::math::{Aabb, Vec2},
        foundation::time::Timer,
        render::{Canvas, Color, NullCanvas},
        SceneEngine, TargetStyle,
    };
}
