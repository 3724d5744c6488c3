//! Osmos - a mass-absorption arena game
//!
//! Core modules:
//! - `sim`: Simulation (life forms, collisions, population, game session)
//! - `renderer`: Draw contract consumed by whatever puts pixels on screen
//! - `hud`: Debug overlay statistics
//! - `settings`: Arena and session configuration

pub mod hud;
pub mod renderer;
pub mod settings;
pub mod sim;

pub use hud::DebugStats;
pub use settings::{Settings, SettingsError};

use glam::DVec2;

/// 2D vector used for positions, momenta and impulses
pub type Vector2 = DVec2;

/// Game configuration constants
pub mod consts {
    use super::Vector2;

    /// Mass per unit of area
    pub const DENSITY: f64 = 1.0;
    /// Magnitude of a single player impulse
    pub const IMPULSE: f64 = 40.0;
    /// Divisor turning accumulated impulse into ejected mass
    pub const EJECTION_FRAC: f64 = 400.0 * IMPULSE;
    /// Ejections fire at most once every this many ticks
    pub const EJECT_TICKS: u32 = 10;
    /// A life form at or below this mass is dead
    pub const MIN_MASS: f64 = 0.0;

    pub const LEFT: Vector2 = Vector2::new(-IMPULSE, 0.0);
    pub const RIGHT: Vector2 = Vector2::new(IMPULSE, 0.0);
    pub const UP: Vector2 = Vector2::new(0.0, -IMPULSE);
    pub const DOWN: Vector2 = Vector2::new(0.0, IMPULSE);

    /// Inset from the arena edge for randomly placed life forms
    pub const MARGIN: f64 = 10.0;
    /// Upper bound (exclusive) on random life form mass
    pub const MAX_SIZE: f64 = 4000.0;
    /// Per-axis bound on random life form velocity
    pub const MAX_VEL: f64 = 0.5;

    /// Starting mass of the player
    pub const INITIAL_SIZE: f64 = 2000.0;
    /// Default number of enemies in a fresh arena
    pub const ENEMIES: usize = 15;
    pub const ARENA_WIDTH: f64 = 800.0;
    pub const ARENA_HEIGHT: f64 = 600.0;

    /// Upper bound on the ticks-per-frame multiplier
    pub const MAX_SPEED: u32 = 64;
}

/// Radius of a circle of the given mass at `DENSITY`, rounded to whole pixels
#[inline]
pub fn mass_to_radius(mass: f64) -> f64 {
    (mass.max(0.0) / (consts::DENSITY * std::f64::consts::PI))
        .sqrt()
        .round()
}
