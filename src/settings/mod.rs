//! Configuration loading and resolution utilities.
//!
//! This module is intentionally decomposed into smaller submodules to keep the
//! configuration pipeline manageable. `load` is the primary entry point and
//! returns a [`ResolvedConfig`] that is handed to the external build tools.

mod loader;
mod raw;
mod resolved;
mod sources;
mod util;

pub use loader::load;
pub use resolved::ResolvedConfig;
