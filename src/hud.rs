//! Debug console contents
//!
//! Gathers the numbers the on-screen debug console shows. Drawing the text
//! is left to the frontend; the headless binary logs it instead.

use serde::Serialize;

use crate::Vector2;
use crate::sim::GameState;

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct DebugStats {
    pub tick: u64,
    pub player_mass: f64,
    pub player_momentum: Vector2,
    pub player_position: Vector2,
    pub absorbable: f64,
    pub next_largest: Option<f64>,
    pub life_forms: usize,
    pub total_mass: f64,
    pub total_momentum: Vector2,
    pub speed: u32,
    pub message: Option<&'static str>,
}

impl DebugStats {
    pub fn collect(state: &GameState) -> Self {
        let population = &state.population;
        let player = population.player();
        Self {
            tick: state.time_ticks,
            player_mass: player.mass(),
            player_momentum: player.momentum(),
            player_position: player.position(),
            absorbable: population.absorbable(),
            next_largest: population.next_largest(),
            life_forms: population.living(),
            total_mass: population.total_mass(),
            total_momentum: population.total_momentum(),
            speed: state.speed,
            message: state.message(),
        }
    }

    /// Console text, one entry per line
    pub fn lines(&self) -> Vec<String> {
        let next = self
            .next_largest
            .map_or_else(|| "none".to_string(), |m| format!("{m:.6}"));
        vec![
            format!(
                "Player - m: {:.6}, p: ({:.3}, {:.3}), x: ({:.1}, {:.1})",
                self.player_mass,
                self.player_momentum.x,
                self.player_momentum.y,
                self.player_position.x,
                self.player_position.y
            ),
            format!("Absorbable: {:.6}, next largest: {}", self.absorbable, next),
            format!("# LifeForms: {}", self.life_forms),
            format!("Total mass: {:.6}", self.total_mass),
            format!(
                "Total momentum: ({:.3}, {:.3})",
                self.total_momentum.x, self.total_momentum.y
            ),
            format!("Speed: {}", self.speed),
        ]
    }
}
