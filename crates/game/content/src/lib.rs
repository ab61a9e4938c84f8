//! Data-driven content definitions and loaders.
//!
//! This crate houses static ring content and provides loaders for RON/TOML data files:
//! - Effect catalog (data-driven via RON)
//! - Recipe book (data-driven via RON)
//! - Ring tuning configuration (data-driven via TOML)
//!
//! Built-in copies of all three are embedded so a host can start without a
//! data directory. All loaders use fingers-core types directly with serde.

#[cfg(feature = "loaders")]
pub mod builtin;

#[cfg(feature = "loaders")]
pub mod loaders;

#[cfg(feature = "loaders")]
pub use loaders::{
    ConfigLoader, ContentFactory, EffectLoader, LoadResult, RecipeBook, RecipeLoader, RecipeSpec,
};
