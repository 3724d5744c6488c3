//! The universe: every life form in the arena, plus win/lose bookkeeping
//!
//! A tick is two passes. The collision pass only reads the member list and
//! stages deltas; the update pass mutates members, appends ejections and
//! compacts out the dead.

use serde::Serialize;

use super::arena::{Arena, Color};
use super::life_form::LifeForm;
use crate::Vector2;
use crate::consts::MIN_MASS;
use crate::renderer::{Renderer, Sprite};

/// Index of the player in the member list
const PLAYER: usize = 0;

/// What changed in the member list during one tick
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct TickReport {
    pub spawned: usize,
    pub removed: usize,
}

#[derive(Debug, Clone, Serialize)]
pub struct Population {
    arena: Arena,
    /// Draw order; the player is always first
    members: Vec<LifeForm>,
    player_id: u32,
    /// Extremes over living members, refreshed once per tick
    min_mass: Option<f64>,
    max_mass: Option<f64>,
    next_id: u32,
}

impl Population {
    /// Create a population holding only the player
    pub fn new(arena: Arena, mut player: LifeForm) -> Self {
        player.id = 1;
        let mut population = Self {
            arena,
            members: vec![player],
            player_id: 1,
            min_mass: None,
            max_mass: None,
            next_id: 2,
        };
        population.refresh_extremes();
        population
    }

    /// Add a life form, assigning it a fresh id
    pub fn push(&mut self, mut life_form: LifeForm) -> u32 {
        let id = self.next_id;
        self.next_id += 1;
        life_form.id = id;
        self.members.push(life_form);
        self.refresh_extremes();
        id
    }

    pub fn arena(&self) -> &Arena {
        &self.arena
    }

    pub fn len(&self) -> usize {
        self.members.len()
    }

    pub fn is_empty(&self) -> bool {
        self.members.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &LifeForm> {
        self.members.iter()
    }

    /// Members still in play; a dead player is kept but not counted
    pub fn living(&self) -> usize {
        self.members.iter().filter(|lf| !lf.is_dead()).count()
    }

    /// The player's life form; it stays first in draw order and is never pruned
    pub fn player(&self) -> &LifeForm {
        debug_assert_eq!(self.members[PLAYER].id(), self.player_id);
        &self.members[PLAYER]
    }

    fn player_mut(&mut self) -> &mut LifeForm {
        &mut self.members[PLAYER]
    }

    /// Advance every member by one tick
    pub fn update(&mut self) -> TickReport {
        // Behaviors request impulses against the pre-tick state
        let steering: Vec<Option<Vector2>> = self
            .members
            .iter()
            .map(|lf| lf.behavior().steer(lf, &self.members))
            .collect();
        for (lf, impulse) in self.members.iter_mut().zip(steering) {
            if let Some(impulse) = impulse {
                lf.impulse(impulse);
            }
        }

        let staged: Vec<(f64, Vector2)> = self
            .members
            .iter()
            .map(|lf| lf.collision_deltas(&self.members))
            .collect();
        for (lf, (d_mass, d_momentum)) in self.members.iter_mut().zip(staged) {
            lf.stage(d_mass, d_momentum);
        }

        let arena = self.arena;
        let ejected: Vec<LifeForm> = self
            .members
            .iter_mut()
            .filter_map(|lf| lf.update(&arena))
            .collect();
        let spawned = ejected.len();
        for life_form in ejected {
            let id = self.push(life_form);
            log::debug!("life form {} ejected", id);
        }

        self.recolor();

        let before = self.members.len();
        let player_id = self.player_id;
        self.members
            .retain(|lf| lf.id() == player_id || lf.mass() > MIN_MASS);
        let removed = before - self.members.len();
        if removed > 0 {
            log::debug!("{} life forms absorbed, {} remain", removed, self.members.len());
        }

        self.refresh_extremes();
        log::trace!(
            "tick: {} members, mass range {:?}..{:?}",
            self.members.len(),
            self.min_mass,
            self.max_mass
        );

        TickReport { spawned, removed }
    }

    /// Shade every other living member by its mass relative to the player
    fn recolor(&mut self) {
        let player = self.player();
        if player.is_dead() {
            return;
        }
        let (player_id, player_mass) = (player.id(), player.mass());

        for lf in self.members.iter_mut() {
            if lf.id() == player_id || lf.is_dead() {
                continue;
            }
            lf.set_fill(mass_to_fill(lf.mass(), player_mass));
            lf.set_edge(mass_to_edge(lf.mass(), player_mass));
        }
    }

    fn refresh_extremes(&mut self) {
        let living = self.members.iter().filter(|lf| !lf.is_dead()).map(|lf| lf.mass());
        let (min, max) = living.fold((None, None), |(min, max): (Option<f64>, Option<f64>), m| {
            (
                Some(min.map_or(m, |v| v.min(m))),
                Some(max.map_or(m, |v| v.max(m))),
            )
        });
        self.min_mass = min;
        self.max_mass = max;
    }

    // === Input, forwarded to the player while alive ===

    fn steer_player(&mut self, apply: impl FnOnce(&mut LifeForm)) {
        let player = self.player_mut();
        if !player.is_dead() {
            apply(player);
        }
    }

    pub fn up(&mut self) {
        self.steer_player(LifeForm::up);
    }

    pub fn down(&mut self) {
        self.steer_player(LifeForm::down);
    }

    pub fn left(&mut self) {
        self.steer_player(LifeForm::left);
    }

    pub fn right(&mut self) {
        self.steer_player(LifeForm::right);
    }

    pub fn click_at(&mut self, point: Vector2) {
        self.steer_player(|player| player.click_at(point));
    }

    // === Predicates ===

    /// The player is (possibly tied for) the largest life form
    pub fn player_won(&self) -> bool {
        self.max_mass == Some(self.player().mass())
    }

    pub fn player_dead(&self) -> bool {
        self.player().mass() <= MIN_MASS
    }

    /// The player is the smallest, or cannot reach the next size up even
    /// after absorbing everything smaller
    pub fn player_hopeless(&self) -> bool {
        let mass = self.player().mass();
        if self.min_mass == Some(mass) {
            return true;
        }
        self.next_largest()
            .is_some_and(|next| mass + self.absorbable() < next)
    }

    // === Aggregates ===

    pub fn min_mass(&self) -> Option<f64> {
        self.min_mass
    }

    pub fn max_mass(&self) -> Option<f64> {
        self.max_mass
    }

    pub fn total_mass(&self) -> f64 {
        self.members.iter().map(|lf| lf.mass()).sum()
    }

    pub fn total_momentum(&self) -> Vector2 {
        self.members
            .iter()
            .fold(Vector2::ZERO, |sum, lf| sum + lf.momentum())
    }

    /// Combined mass of every living member smaller than the player
    pub fn absorbable(&self) -> f64 {
        let mass = self.player().mass();
        self.members
            .iter()
            .filter(|lf| !lf.is_dead() && lf.mass() < mass)
            .fold(0.0, |sum, lf| sum + lf.mass())
    }

    /// Smallest mass strictly greater than the player's, if any
    pub fn next_largest(&self) -> Option<f64> {
        let mass = self.player().mass();
        self.members
            .iter()
            .map(|lf| lf.mass())
            .filter(|&m| m > mass)
            .min_by(f64::total_cmp)
    }

    // === Rendering ===

    /// Hand every living member to `renderer` in draw order
    pub fn draw(&mut self, renderer: &mut impl Renderer) {
        for lf in self.members.iter_mut().filter(|lf| !lf.is_dead()) {
            let redraw = lf.take_redraw();
            renderer.draw(&Sprite {
                id: lf.id(),
                position: lf.position(),
                radius: lf.radius(),
                fill: lf.fill(),
                edge: lf.edge(),
                redraw_fill: redraw.fill,
                redraw_edge: redraw.edge,
            });
        }
    }
}

/// Red for heavier than the player, blending to blue for lighter
pub fn mass_to_fill(mass: f64, player_mass: f64) -> Color {
    let fraction = mass / player_mass;
    let red = (fraction - 0.5).clamp(0.0, 1.0) as f32;
    Color::rgb(red, 0.0, 1.0 - red)
}

pub fn mass_to_edge(mass: f64, player_mass: f64) -> Color {
    if mass > player_mass { Color::RED } else { Color::BLUE }
}
