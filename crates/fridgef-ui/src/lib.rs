//! Shared UI components for FridgeF windows.
//!
//! Provides the theme system, the success badge, and the photo strip
//! shared across FridgeF desktop surfaces.

pub mod badge;
pub mod photo_strip;
pub mod theme;

pub use badge::SuccessBadge;
pub use photo_strip::{PhotoInfo, PhotoStrip};
pub use theme::{Theme, ThemedRoot, CURRENT_THEME};

/// Shared CSS containing design tokens, theme definitions, and base styles.
pub const SHARED_CSS: &str = include_str!("../assets/shared.css");
