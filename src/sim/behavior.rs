//! Steering strategies injected into life forms
//!
//! A behavior looks at its own body and the rest of the population and may
//! request an impulse for the coming tick. Only ambient drifting is
//! implemented; the other variants are hooks for AI and attraction.

use serde::{Deserialize, Serialize};

use super::life_form::LifeForm;
use crate::Vector2;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum Behavior {
    /// Drifts on its momentum; the player also uses this and steers via input
    #[default]
    Ambient,
    /// Decides its own impulses
    Organism,
    /// Pulls neighbours toward itself
    Attractor,
}

impl Behavior {
    /// Impulse this behavior wants applied to `body` before collisions run
    pub fn steer(&self, body: &LifeForm, neighbours: &[LifeForm]) -> Option<Vector2> {
        let _ = (body, neighbours);
        match self {
            Behavior::Ambient => None,
            // No decision policy yet
            Behavior::Organism => None,
            // No attraction model yet
            Behavior::Attractor => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::sim::Color;

    #[test]
    fn test_no_behavior_steers_yet() {
        let body = LifeForm::new(100.0, Color::WHITE, Vector2::new(50.0, 50.0), Vector2::ZERO);
        let others = vec![body.clone()];
        for behavior in [Behavior::Ambient, Behavior::Organism, Behavior::Attractor] {
            assert_eq!(behavior.steer(&body, &others), None);
        }
    }

    #[test]
    fn test_injected_behavior_is_idle_in_population() {
        use crate::sim::{Arena, Population};

        let player = LifeForm::new(2000.0, Color::WHITE, Vector2::new(100.0, 100.0), Vector2::ZERO);
        let organism = LifeForm::new(500.0, Color::WHITE, Vector2::new(600.0, 400.0), Vector2::new(1.0, 0.0))
            .with_behavior(Behavior::Organism);
        let attractor = LifeForm::new(300.0, Color::WHITE, Vector2::new(300.0, 400.0), Vector2::ZERO)
            .with_behavior(Behavior::Attractor);
        assert_eq!(organism.behavior(), Behavior::Organism);

        let mut pop = Population::new(Arena::new(800.0, 600.0), player);
        pop.push(organism);
        pop.push(attractor);
        pop.update();

        let members: Vec<_> = pop.iter().collect();
        assert_eq!(members[1].behavior(), Behavior::Organism);
        assert_eq!(members[1].position(), Vector2::new(601.0, 400.0));
        assert_eq!(members[2].behavior(), Behavior::Attractor);
        assert_eq!(members[2].position(), Vector2::new(300.0, 400.0));
    }
}
