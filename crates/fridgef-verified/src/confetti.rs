//! Decorative confetti burst fired when the screen comes up.
//!
//! Purely cosmetic: the burst runs through canvas-confetti inside the
//! webview and must never interfere with rendering or the redirect.

use dioxus::prelude::*;

/// Configuration for a single confetti burst.
#[derive(Debug, Clone, PartialEq)]
pub struct ConfettiBurst {
    /// Number of particles in the burst.
    pub particle_count: u32,
    /// Spread angle in degrees.
    pub spread: u32,
    /// Vertical origin as a fraction of viewport height.
    pub origin_y: f64,
}

impl Default for ConfettiBurst {
    fn default() -> Self {
        Self {
            particle_count: 100,
            spread: 70,
            origin_y: 0.3,
        }
    }
}

impl ConfettiBurst {
    /// Build the canvas-confetti invocation for this burst.
    ///
    /// Guarded so a window where the library failed to load degrades to a
    /// no-op instead of a script error.
    pub fn js(&self) -> String {
        format!(
            "if (typeof confetti === 'function') {{ confetti({{particleCount: {}, spread: {}, origin: {{ y: {} }}}}); }}",
            self.particle_count, self.spread, self.origin_y
        )
    }

    /// Fire the burst in the current webview. Fire-and-forget.
    pub fn fire(&self) {
        document::eval(&self.js());
    }
}
