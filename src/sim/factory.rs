//! Random population generation
//!
//! All randomness comes from the caller's seeded generator, so the same seed
//! always produces the same arena.

use rand::Rng;

use super::arena::{Arena, Color};
use super::life_form::LifeForm;
use super::population::Population;
use crate::Vector2;
use crate::consts::{MARGIN, MAX_SIZE, MAX_VEL};

/// A population with the player plus `n` random life forms
pub fn ambient<R: Rng>(arena: Arena, player: LifeForm, n: usize, rng: &mut R) -> Population {
    let mut population = Population::new(arena, player);
    populate(&mut population, n, rng);
    population
}

/// Add `n` random life forms
pub fn populate<R: Rng>(population: &mut Population, n: usize, rng: &mut R) {
    let arena = *population.arena();
    for _ in 0..n {
        population.push(random_life_form(&arena, MAX_SIZE, MAX_VEL, rng));
    }
    log::debug!("populated {} life forms, {} total", n, population.len());
}

/// Uniform position inside the margin, mass in `[0, max_size)`, velocity in `[-max_vel, max_vel]` per axis
pub fn random_life_form<R: Rng>(arena: &Arena, max_size: f64, max_vel: f64, rng: &mut R) -> LifeForm {
    debug_assert!(arena.width > 2.0 * MARGIN && arena.height > 2.0 * MARGIN);

    let position = Vector2::new(
        rng.random_range(MARGIN..arena.width - MARGIN),
        rng.random_range(MARGIN..arena.height - MARGIN),
    );
    let velocity = Vector2::new(
        rng.random_range(-max_vel..=max_vel),
        rng.random_range(-max_vel..=max_vel),
    );
    let mass = rng.random_range(0.0..max_size);

    LifeForm::new(mass, Color::TRANSPARENT, position, velocity)
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use rand_pcg::Pcg32;

    fn player(arena: &Arena) -> LifeForm {
        LifeForm::new(2000.0, Color::WHITE, arena.center(), Vector2::ZERO)
    }

    #[test]
    fn test_ambient_population_size() {
        let arena = Arena::new(800.0, 600.0);
        let mut rng = Pcg32::seed_from_u64(7);
        let pop = ambient(arena, player(&arena), 15, &mut rng);
        assert_eq!(pop.len(), 16);
        assert_eq!(pop.player().mass(), 2000.0);
    }

    #[test]
    fn test_random_life_forms_within_ranges() {
        let arena = Arena::new(320.0, 240.0);
        let mut rng = Pcg32::seed_from_u64(12345);
        for _ in 0..500 {
            let lf = random_life_form(&arena, MAX_SIZE, MAX_VEL, &mut rng);
            let p = lf.position();
            assert!(p.x >= MARGIN && p.x < arena.width - MARGIN);
            assert!(p.y >= MARGIN && p.y < arena.height - MARGIN);
            assert!(lf.mass() >= 0.0 && lf.mass() < MAX_SIZE);
            if !lf.is_dead() {
                let v = lf.velocity();
                assert!(v.x.abs() <= MAX_VEL + 1e-9 && v.y.abs() <= MAX_VEL + 1e-9);
            }
            assert_eq!(lf.fill(), Color::TRANSPARENT);
        }
    }

    #[test]
    fn test_same_seed_same_arena() {
        let arena = Arena::default();
        let a = ambient(arena, player(&arena), 10, &mut Pcg32::seed_from_u64(99));
        let b = ambient(arena, player(&arena), 10, &mut Pcg32::seed_from_u64(99));
        let c = ambient(arena, player(&arena), 10, &mut Pcg32::seed_from_u64(100));

        let masses = |p: &Population| p.iter().map(|lf| lf.mass()).collect::<Vec<_>>();
        assert_eq!(masses(&a), masses(&b));
        assert_ne!(masses(&a), masses(&c));
    }
}
