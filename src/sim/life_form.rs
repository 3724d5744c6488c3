//! A single circular body: mass, position, momentum
//!
//! Collisions never mutate a life form directly. They are staged into
//! pending deltas and applied atomically by `update`, so the order in which
//! pairs are examined within a tick cannot change the outcome.

use std::cell::Cell;

use serde::Serialize;

use super::arena::{Arena, Color};
use super::behavior::Behavior;
use super::collision::{Contact, circle_intersection_area, classify};
use crate::consts::*;
use crate::{Vector2, mass_to_radius};

/// Which layers of a life form's sprite are stale
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Redraw {
    pub fill: bool,
    pub edge: bool,
}

impl Redraw {
    pub fn any(&self) -> bool {
        self.fill || self.edge
    }
}

#[derive(Debug, Clone, Serialize)]
pub struct LifeForm {
    /// Assigned by the owning population; 0 until then
    pub(crate) id: u32,
    mass: f64,
    position: Vector2,
    momentum: Vector2,
    /// Collision effects staged during this tick
    pending_mass: f64,
    pending_momentum: Vector2,
    /// Opposite of every impulse received since the last ejection
    pending_ejection: Vector2,
    /// Tick counter modulo `EJECT_TICKS`
    eject_tick: u32,
    fill: Color,
    edge: Color,
    behavior: Behavior,
    /// Cached radius; `None` whenever mass changed since it was computed
    #[serde(skip)]
    radius: Cell<Option<f64>>,
    #[serde(skip)]
    fill_changed: bool,
    #[serde(skip)]
    edge_changed: bool,
    /// Radius at the time of the last `take_redraw`
    #[serde(skip)]
    drawn_radius: Option<f64>,
}

impl LifeForm {
    pub fn new(mass: f64, color: Color, position: Vector2, velocity: Vector2) -> Self {
        Self {
            id: 0,
            mass,
            position,
            momentum: velocity * mass,
            pending_mass: 0.0,
            pending_momentum: Vector2::ZERO,
            pending_ejection: Vector2::ZERO,
            eject_tick: 0,
            fill: color,
            edge: color,
            behavior: Behavior::Ambient,
            radius: Cell::new(None),
            fill_changed: true,
            edge_changed: true,
            drawn_radius: None,
        }
    }

    pub fn with_behavior(mut self, behavior: Behavior) -> Self {
        self.behavior = behavior;
        self
    }

    pub fn id(&self) -> u32 {
        self.id
    }

    pub fn mass(&self) -> f64 {
        self.mass
    }

    pub fn position(&self) -> Vector2 {
        self.position
    }

    pub fn momentum(&self) -> Vector2 {
        self.momentum
    }

    pub fn fill(&self) -> Color {
        self.fill
    }

    pub fn edge(&self) -> Color {
        self.edge
    }

    pub fn behavior(&self) -> Behavior {
        self.behavior
    }

    pub fn is_dead(&self) -> bool {
        self.mass <= MIN_MASS
    }

    /// Radius derived from mass, recomputed only after the mass changes
    pub fn radius(&self) -> f64 {
        if let Some(r) = self.radius.get() {
            return r;
        }
        let r = mass_to_radius(self.mass);
        self.radius.set(Some(r));
        r
    }

    /// Velocity derived from momentum; zero for a dead life form
    pub fn velocity(&self) -> Vector2 {
        debug_assert!(!self.is_dead(), "velocity of a dead life form");
        if self.is_dead() {
            return Vector2::ZERO;
        }
        self.momentum / self.mass
    }

    pub fn set_fill(&mut self, color: Color) {
        if self.fill != color {
            self.fill = color;
            self.fill_changed = true;
        }
    }

    pub fn set_edge(&mut self, color: Color) {
        if self.edge != color {
            self.edge = color;
            self.edge_changed = true;
        }
    }

    /// Report which sprite layers changed since the previous call and reset the signals
    pub fn take_redraw(&mut self) -> Redraw {
        let r = self.radius();
        let resized = self.drawn_radius != Some(r);
        let redraw = Redraw {
            fill: self.fill_changed || resized,
            edge: self.edge_changed || resized,
        };
        self.fill_changed = false;
        self.edge_changed = false;
        self.drawn_radius = Some(r);
        redraw
    }

    // === Input ===

    /// Queue a change in momentum, and an equal and opposite ejection
    pub fn impulse(&mut self, impulse: Vector2) {
        self.pending_momentum += impulse;
        self.pending_ejection -= impulse;
    }

    pub fn left(&mut self) {
        self.impulse(LEFT);
    }

    pub fn right(&mut self) {
        self.impulse(RIGHT);
    }

    pub fn up(&mut self) {
        self.impulse(UP);
    }

    pub fn down(&mut self) {
        self.impulse(DOWN);
    }

    /// Push away from `point`
    pub fn click_at(&mut self, point: Vector2) {
        self.impulse((self.position - point).normalize_or_zero() * IMPULSE);
    }

    // === Collisions ===

    /// Mass and momentum this life form would gain (or lose) from touching `others`
    ///
    /// `others` may contain `self`; it is skipped by identity, so a distinct
    /// life form with identical state still collides.
    pub fn collision_deltas(&self, others: &[LifeForm]) -> (f64, Vector2) {
        let mut d_mass = 0.0;
        let mut d_momentum = Vector2::ZERO;
        if self.is_dead() {
            return (d_mass, d_momentum);
        }

        let r = self.radius();
        for other in others {
            if std::ptr::eq(self, other) || other.is_dead() || self.mass == other.mass {
                continue;
            }

            let distance = self.position.distance(other.position);
            let larger = self.mass > other.mass;
            match classify(distance, r, other.radius()) {
                Contact::Contained => {
                    if larger {
                        d_mass += other.mass;
                        d_momentum += other.momentum;
                    } else {
                        d_mass -= other.mass;
                        d_momentum -= self.momentum;
                    }
                }
                Contact::Overlapping => {
                    let overlap = DENSITY * circle_intersection_area(distance, r, other.radius());
                    if larger {
                        d_mass += overlap;
                        d_momentum += other.velocity() * overlap;
                    } else {
                        d_mass -= overlap;
                        d_momentum -= self.velocity() * overlap;
                    }
                }
                Contact::Separate => {}
            }
        }

        (d_mass, d_momentum)
    }

    /// Add staged collision effects to the pending deltas
    pub fn stage(&mut self, d_mass: f64, d_momentum: Vector2) {
        self.pending_mass += d_mass;
        self.pending_momentum += d_momentum;
    }

    /// Stage collisions against `candidates`, which may include `self`
    pub fn check_collisions(&mut self, candidates: &[LifeForm]) {
        let (d_mass, d_momentum) = self.collision_deltas(candidates);
        self.stage(d_mass, d_momentum);
    }

    // === Integration ===

    /// Apply this tick's deltas, move, and possibly eject a new life form
    pub fn update(&mut self, arena: &Arena) -> Option<LifeForm> {
        self.grow();
        if self.is_dead() {
            return None;
        }
        self.advance(arena);

        self.eject_tick = (self.eject_tick + 1) % EJECT_TICKS;
        if self.eject_tick == 0 && self.pending_ejection.length() > 0.0 {
            self.eject()
        } else {
            None
        }
    }

    fn grow(&mut self) {
        if self.pending_mass == 0.0 {
            return;
        }
        self.radius.set(None);
        self.mass += self.pending_mass;
        self.pending_mass = 0.0;
        if self.mass <= MIN_MASS {
            // Momentum went to whatever absorbed it
            self.mass = MIN_MASS;
            self.momentum = Vector2::ZERO;
            self.pending_momentum = Vector2::ZERO;
        }
    }

    fn advance(&mut self, arena: &Arena) {
        self.momentum += self.pending_momentum;
        self.pending_momentum = Vector2::ZERO;
        self.position += self.velocity();

        // Elastic bounce off the arena walls
        let r = self.radius();
        if self.position.x - r < 0.0 {
            self.position.x = 2.0 * r - self.position.x;
            self.momentum.x = -self.momentum.x;
        } else if self.position.x + r > arena.width {
            self.position.x = 2.0 * (arena.width - r) - self.position.x;
            self.momentum.x = -self.momentum.x;
        }

        if self.position.y - r < 0.0 {
            self.position.y = 2.0 * r - self.position.y;
            self.momentum.y = -self.momentum.y;
        } else if self.position.y + r > arena.height {
            self.position.y = 2.0 * (arena.height - r) - self.position.y;
            self.momentum.y = -self.momentum.y;
        }
    }

    fn eject(&mut self) -> Option<LifeForm> {
        let ejection = std::mem::take(&mut self.pending_ejection);
        let ejected_mass = ejection.length() * self.mass / EJECTION_FRAC;
        if self.mass - ejected_mass <= MIN_MASS {
            log::debug!("life form {} too light to eject {:.2}", self.id, ejected_mass);
            return None;
        }

        let offset = self.radius() + mass_to_radius(ejected_mass) + 1.0;
        let position = self.position + ejection.normalize_or_zero() * offset;

        self.mass -= ejected_mass;
        self.radius.set(None);

        Some(LifeForm::new(
            ejected_mass,
            Color::TRANSPARENT,
            position,
            ejection / ejected_mass,
        ))
    }
}
