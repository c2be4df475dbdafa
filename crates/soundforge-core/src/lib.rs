//! SoundForge Core - editing model shared by the studio widgets and app
//!
//! Everything here is plain in-memory state with synchronous update
//! functions. Rendering lives in `soundforge-widgets`.

pub mod arrangement;
pub mod config;
pub mod effect;
pub mod error;
pub mod music;
pub mod notes;
pub mod sample;
pub mod transport;
pub mod types;

pub use error::{EditError, EditResult};
pub use types::*;
