#![warn(clippy::all, clippy::cargo)]

mod error;
mod grid;
mod traits;

pub use error::GridError;
pub use grid::GridEngine;
pub use traits::Engine;

pub type DefaultEngine = GridEngine;

/// Fill rate used when the caller has no opinion, e.g. by the soup driver.
pub const DEFAULT_FILL_RATE: f64 = 0.3;
