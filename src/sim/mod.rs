//! Simulation module
//!
//! All gameplay logic lives here. This module must stay free of rendering
//! and platform dependencies:
//! - Seeded RNG only
//! - Collision effects staged, then applied in one pass
//! - Stable member order (player first, then by insertion)

pub mod arena;
pub mod behavior;
pub mod collision;
pub mod factory;
pub mod life_form;
pub mod population;
pub mod state;
pub mod tick;

pub use arena::{Arena, Color};
pub use behavior::Behavior;
pub use collision::{Contact, circle_intersection_area, classify};
pub use life_form::{LifeForm, Redraw};
pub use population::{Population, TickReport};
pub use state::{GameState, Outcome, RngState};
pub use tick::{TickInput, frame, tick};
