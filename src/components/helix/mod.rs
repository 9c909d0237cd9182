//! Double-helix petal overlay.
//!
//! Two interleaved helices of sunflower petals rise through the page:
//! - Each petal sweeps a circle while drifting upward, giving a spiral
//! - Helix B runs half a turn out of phase with helix A
//! - Sine of the sweep angle fakes depth through scale and opacity
//! - Petals that leave the top are respawned at the bottom
//! - Small screens confine petals to a lower-right region
//!
//! The simulation ([`HelixField`]) is host-agnostic: it draws through a
//! [`PetalSurface`] and is driven by a [`Ticker`], so it runs the same on
//! synthetic ticks as on `requestAnimationFrame`.
//!
//! # Example
//!
//! ```ignore
//! use sunflower_helix::{HelixConfig, PetalOverlay};
//!
//! let config = HelixConfig { total_petals: 60, ..HelixConfig::default() };
//! view! { <PetalOverlay config=config /> }
//! ```

mod component;
mod config;
mod debounce;
mod driver;
mod particles;
mod render;
mod state;
#[cfg(test)]
mod testing;
mod ticker;
mod types;

pub use component::PetalOverlay;
pub use config::{ConfigError, HelixConfig};
