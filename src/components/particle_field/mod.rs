//! Interactive particle backdrop.
//!
//! Renders a field of drifting particles on a full-viewport canvas with:
//! - Repulsion and brightening around the pointer
//! - Links between nearby particles and towards the pointer
//! - A glow under the pointer
//! - Colors following whichever tool card is hovered
//!
//! The simulation ([`ParticleField`](particles::ParticleField)) is independent
//! of the browser; it draws through the [`Surface`] trait.
//!
//! # Example
//!
//! ```ignore
//! let (hovered, set_hovered) = signal(None::<String>);
//! view! { <InteractiveBackground hovered_tool=hovered /> }
//! ```

mod component;
pub mod config;
pub mod particles;
pub mod render;
pub mod state;
pub mod theme;

pub use component::InteractiveBackground;
pub use config::FieldConfig;
pub use render::Surface;
pub use state::{FieldRuntime, PointerState};
pub use theme::{Color, ColorTheme, resolve_color, theme_for};
