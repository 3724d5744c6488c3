//! Game session state
//!
//! Owns the population between frames along with the loop-level flags the
//! player can toggle (pause, speed) and the current outcome message.

use rand::SeedableRng;
use rand_pcg::Pcg32;
use serde::{Deserialize, Serialize};

use super::arena::{Arena, Color};
use super::factory;
use super::life_form::LifeForm;
use super::population::Population;
use crate::Vector2;
use crate::settings::Settings;

/// Latest verdict shown to the player
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Outcome {
    /// Player is the largest life form
    Won,
    /// Player cannot realistically become the largest
    Hopeless,
    /// Player was absorbed; the session is over
    Terminated,
}

impl Outcome {
    pub fn message(&self) -> &'static str {
        match self {
            Outcome::Won => "You Win!",
            Outcome::Hopeless => "It's Not Looking Good...",
            Outcome::Terminated => "LifeForm Terminated",
        }
    }
}

/// RNG seed wrapper, kept so a session can report what it was started with
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RngState {
    pub seed: u64,
}

impl RngState {
    pub fn new(seed: u64) -> Self {
        Self { seed }
    }

    pub fn to_rng(&self) -> Pcg32 {
        Pcg32::seed_from_u64(self.seed)
    }
}

/// Complete session state
#[derive(Debug, Clone)]
pub struct GameState {
    pub rng_state: RngState,
    rng: Pcg32,
    pub arena: Arena,
    pub enemies: usize,
    /// Starting mass of the player after every reset
    pub player_mass: f64,
    pub population: Population,
    /// False once the player is dead; input and outcome checks stop
    pub active: bool,
    pub paused: bool,
    /// Ticks run per frame
    pub speed: u32,
    pub outcome: Option<Outcome>,
    /// Ticks since the last reset
    pub time_ticks: u64,
}

impl GameState {
    pub fn new(settings: &Settings) -> Self {
        let seed = settings.seed;
        let rng_state = RngState::new(seed);
        let mut rng = rng_state.to_rng();
        let arena = settings.arena();
        let population = spawn(arena, settings.player_mass, settings.enemies, &mut rng);

        log::info!(
            "new session: seed {}, arena {}x{}, {} enemies",
            seed,
            arena.width,
            arena.height,
            settings.enemies
        );

        Self {
            rng_state,
            rng,
            arena,
            enemies: settings.enemies,
            player_mass: settings.player_mass,
            population,
            active: true,
            paused: false,
            speed: settings.speed.max(1),
            outcome: None,
            time_ticks: 0,
        }
    }

    /// Start over with a fresh player and random enemies
    ///
    /// The generator carries on from where it was, so each restart differs.
    pub fn reset(&mut self, arena: Arena, enemies: usize) {
        self.arena = arena;
        self.enemies = enemies;
        self.population = spawn(arena, self.player_mass, enemies, &mut self.rng);
        self.active = true;
        self.paused = false;
        self.outcome = None;
        self.time_ticks = 0;
        log::info!("session reset: {} enemies", enemies);
    }

    /// Pause or resume; only a live session can be paused
    pub fn toggle_pause(&mut self) {
        if self.active {
            self.paused = !self.paused;
        }
    }

    pub fn speed_up(&mut self) {
        self.speed = (self.speed * 2).min(crate::consts::MAX_SPEED);
    }

    pub fn slow_down(&mut self) {
        if self.speed > 1 {
            self.speed /= 2;
        }
    }

    pub fn message(&self) -> Option<&'static str> {
        if self.paused {
            Some("PAUSED")
        } else {
            self.outcome.map(|o| o.message())
        }
    }
}

/// The player sits at rest in the middle of the arena
fn spawn(arena: Arena, player_mass: f64, enemies: usize, rng: &mut Pcg32) -> Population {
    let player = LifeForm::new(player_mass, Color::WHITE, arena.center(), Vector2::ZERO);
    factory::ambient(arena, player, enemies, rng)
}
