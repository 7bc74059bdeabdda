//! Animated, mouse-reactive portal effect.
//!
//! Draws on an HTML canvas:
//! - Drifting light particles joined by fading proximity lines
//! - Rotating polygonal debris in the background
//! - A glowing, pulsing ring that trails the cursor
//!
//! Each frame the portal center is smoothed toward the pointer, particles are
//! pushed away from the pointer and pulled toward the portal, and the whole
//! scene is redrawn.
//!
//! # Example
//!
//! ```ignore
//! use portal_fx::{PortalCanvas, Theme};
//!
//! view! { <PortalCanvas theme=Theme::default() /> }
//! ```

mod animation;
mod component;
pub mod physics;
pub mod population;
mod render;
mod state;
pub mod surface;
pub mod theme;
pub mod tracker;
mod types;

pub use animation::{PortalContext, frame};
pub use component::PortalCanvas;
pub use render::{connection_alpha, render, ring_hue, ring_radius};
pub use state::{PointerState, PortalState, SceneState};
pub use surface::Surface;
pub use theme::Theme;
pub use types::{Accent, Debris, DebrisShape, Particle, Point};
