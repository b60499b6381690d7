//! Storage for generated note assets

pub mod assets;

pub use assets::{AssetStore, ASSET_EXTENSION};
