//! Frame and tick stepping
//!
//! A frame handles one-shot commands and then runs `speed` ticks. Each tick
//! advances the population, updates the outcome and feeds held input to the
//! player.

use super::state::{GameState, Outcome};
use crate::Vector2;

/// Input sampled once per frame
#[derive(Debug, Clone, Default)]
pub struct TickInput {
    /// Held directions
    pub up: bool,
    pub down: bool,
    pub left: bool,
    pub right: bool,
    /// Held pointer button, at this arena position
    pub click: Option<Vector2>,
    /// One-shot commands
    pub pause: bool,
    pub speed_up: bool,
    pub slow_down: bool,
    pub restart: bool,
}

/// Advance one rendered frame; returns the number of ticks run
pub fn frame(state: &mut GameState, input: &TickInput) -> u32 {
    if input.restart {
        state.reset(state.arena, state.enemies);
    }
    if input.pause {
        state.toggle_pause();
    }
    if input.speed_up {
        state.speed_up();
    }
    if input.slow_down {
        state.slow_down();
    }

    if state.paused {
        return 0;
    }
    for _ in 0..state.speed {
        tick(state, input);
    }
    state.speed
}

/// Advance the simulation by exactly one tick
pub fn tick(state: &mut GameState, input: &TickInput) {
    state.population.update();
    state.time_ticks += 1;

    if state.active {
        let population = &state.population;
        let outcome = if population.player_dead() {
            state.active = false;
            Some(Outcome::Terminated)
        } else if population.player_won() {
            Some(Outcome::Won)
        } else if population.player_hopeless() {
            Some(Outcome::Hopeless)
        } else {
            state.outcome
        };

        if let Some(verdict) = outcome.filter(|_| outcome != state.outcome) {
            log::info!("tick {}: {}", state.time_ticks, verdict.message());
            state.outcome = outcome;
        }
    }

    if state.active {
        apply_input(state, input);
    }
}

fn apply_input(state: &mut GameState, input: &TickInput) {
    let population = &mut state.population;
    if input.up {
        population.up();
    }
    if input.down {
        population.down();
    }
    if input.left {
        population.left();
    }
    if input.right {
        population.right();
    }
    if let Some(point) = input.click {
        population.click_at(point);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::consts::{EJECT_TICKS, IMPULSE};
    use crate::settings::Settings;
    use crate::sim::{Arena, Color, LifeForm, Population};

    fn lone_player_state(enemies: Vec<LifeForm>) -> GameState {
        let mut state = GameState::new(&Settings {
            enemies: 0,
            ..Settings::default()
        });
        let arena = Arena::new(800.0, 600.0);
        let player = LifeForm::new(2000.0, Color::WHITE, arena.center(), Vector2::ZERO);
        let mut population = Population::new(arena, player);
        for lf in enemies {
            population.push(lf);
        }
        state.population = population;
        state
    }

    #[test]
    fn test_frame_runs_speed_ticks() {
        let mut state = lone_player_state(vec![]);
        state.speed = 4;
        assert_eq!(frame(&mut state, &TickInput::default()), 4);
        assert_eq!(state.time_ticks, 4);
    }

    #[test]
    fn test_paused_frame_freezes_simulation() {
        let mut state = lone_player_state(vec![]);
        let pause = TickInput {
            pause: true,
            ..Default::default()
        };
        assert_eq!(frame(&mut state, &pause), 0);
        assert_eq!(frame(&mut state, &TickInput::default()), 0);
        assert_eq!(state.time_ticks, 0);
        assert_eq!(frame(&mut state, &pause), 1);
    }

    #[test]
    fn test_held_input_moves_player() {
        let mut state = lone_player_state(vec![]);
        let input = TickInput {
            right: true,
            ..Default::default()
        };
        frame(&mut state, &input);
        // Impulse is applied after the tick and takes effect on the next one
        assert_eq!(state.population.player().position(), Vector2::new(400.0, 300.0));
        frame(&mut state, &TickInput::default());
        let expected_x = 400.0 + IMPULSE / 2000.0;
        assert!((state.population.player().position().x - expected_x).abs() < 1e-9);
    }

    #[test]
    fn test_steering_ejects_mass() {
        let mut state = lone_player_state(vec![]);
        let input = TickInput {
            left: true,
            ..Default::default()
        };
        for _ in 0..EJECT_TICKS {
            frame(&mut state, &input);
        }
        assert_eq!(state.population.len(), 2);
        assert!(state.population.player().mass() < 2000.0);
        assert!((state.population.total_mass() - 2000.0).abs() < 1e-9);
    }

    #[test]
    fn test_absorbing_last_enemy_wins() {
        let enemy = LifeForm::new(500.0, Color::TRANSPARENT, Vector2::new(400.0, 300.0), Vector2::ZERO);
        let mut state = lone_player_state(vec![enemy]);
        frame(&mut state, &TickInput::default());
        assert_eq!(state.outcome, Some(Outcome::Won));
        assert_eq!(state.message(), Some("You Win!"));
        assert!(state.active);
    }

    #[test]
    fn test_being_absorbed_ends_session() {
        let enemy = LifeForm::new(3000.0, Color::TRANSPARENT, Vector2::new(400.0, 300.0), Vector2::ZERO);
        let mut state = lone_player_state(vec![enemy]);
        let input = TickInput {
            up: true,
            ..Default::default()
        };
        frame(&mut state, &input);
        assert_eq!(state.outcome, Some(Outcome::Terminated));
        assert!(!state.active);

        // No pausing a finished session; restart brings it back
        frame(&mut state, &TickInput { pause: true, ..Default::default() });
        assert!(!state.paused);
        frame(&mut state, &TickInput { restart: true, ..Default::default() });
        assert!(state.active);
        assert_eq!(state.time_ticks, 1);
        assert_eq!(state.population.player().mass(), crate::consts::INITIAL_SIZE);
    }

    #[test]
    fn test_hopeless_against_giant() {
        let small = LifeForm::new(100.0, Color::TRANSPARENT, Vector2::new(50.0, 50.0), Vector2::ZERO);
        let giant = LifeForm::new(3900.0, Color::TRANSPARENT, Vector2::new(700.0, 500.0), Vector2::ZERO);
        let mut state = lone_player_state(vec![small, giant]);
        frame(&mut state, &TickInput::default());
        assert_eq!(state.outcome, Some(Outcome::Hopeless));
        assert!(state.active);
    }
}
