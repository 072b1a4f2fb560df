//! Source -> aggregator -> destination particle flow.
//!
//! Three entity sets are advanced every tick:
//! - particles travel from a source toward a fixed point near the aggregator,
//! - each arrival turns into exactly one parcel that slides toward the
//!   destination,
//! - parcels settle next to the destination and are dropped when their ttl
//!   runs out.
//!
//! Every entity has a bounded lifetime, so the working set stays bounded too.

use crate::color::ColorClass;
use crate::constants::*;
use glam::Vec2;
use rand::prelude::*;

/// Anchor positions derived from the surface size.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct FlowLayout {
    pub size: Vec2,
    pub left_x: f32,
    pub center_x: f32,
    pub right_x: f32,
    pub mid_y: f32,
}

impl FlowLayout {
    pub fn new(size: Vec2) -> Self {
        Self {
            size,
            left_x: (size.x * LEFT_FRACTION).round(),
            center_x: (size.x * 0.5).round(),
            right_x: (size.x * RIGHT_FRACTION).round(),
            mid_y: (size.y * 0.5).round(),
        }
    }

    #[inline]
    pub fn aggregator(&self) -> Vec2 {
        Vec2::new(self.center_x, self.mid_y)
    }

    #[inline]
    pub fn destination(&self) -> Vec2 {
        Vec2::new(self.right_x, self.mid_y)
    }
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Source {
    pub position: Vec2,
    pub radius: f32,
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct FlowParticle {
    pub position: Vec2,
    /// Chosen at spawn and never re-rolled.
    pub target: Vec2,
    /// Displacement applied on the last tick (already scaled by dt).
    pub velocity: Vec2,
    pub age: f32,
    pub color_class: ColorClass,
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub enum ParcelState {
    Forming,
    Settled { rest: Vec2, ttl: f32 },
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct AggregateParcel {
    pub spawn: Vec2,
    pub destination: Vec2,
    pub progress: f32,
    pub size: f32,
    pub color_class: ColorClass,
    pub state: ParcelState,
}

impl AggregateParcel {
    /// Where the parcel is drawn right now.
    pub fn position(&self) -> Vec2 {
        match self.state {
            ParcelState::Forming => self.spawn.lerp(self.destination, self.progress),
            ParcelState::Settled { rest, .. } => rest,
        }
    }

    /// Rounded-rect footprint while forming; widens as it travels.
    pub fn footprint(&self) -> Vec2 {
        Vec2::new(
            (self.size * (0.8 + self.progress * 0.6)).max(PARCEL_MIN_WIDTH),
            (self.size * 0.5).max(PARCEL_MIN_HEIGHT),
        )
    }

    pub fn is_settled(&self) -> bool {
        matches!(self.state, ParcelState::Settled { .. })
    }
}

/// Lifecycle transitions reported by [`FlowSimulator::tick`].
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum FlowEvent {
    Spawned { source: usize },
    /// A particle reached the aggregator (or timed out) and became a parcel.
    Arrived {
        last_position: Vec2,
        timed_out: bool,
    },
    Settled,
    Expired,
}

#[derive(Clone, Debug)]
pub struct FlowParams {
    pub source_count: usize,
    pub spawn_chance: f32,
    pub max_particles: usize,
    pub particle_speed: f32,
    pub arrival_distance: f32,
    pub timeout_sec: f32,
    pub accent_chance: f32,
}

impl Default for FlowParams {
    fn default() -> Self {
        Self {
            source_count: SOURCE_COUNT,
            spawn_chance: SPAWN_CHANCE,
            max_particles: MAX_PARTICLES,
            particle_speed: PARTICLE_SPEED,
            arrival_distance: ARRIVAL_DISTANCE,
            timeout_sec: PARTICLE_TIMEOUT_SEC,
            accent_chance: ACCENT_PARTICLE_CHANCE,
        }
    }
}

pub struct FlowSimulator {
    pub params: FlowParams,
    layout: FlowLayout,
    sources: Vec<Source>,
    particles: Vec<FlowParticle>,
    parcels: Vec<AggregateParcel>,
    rng: StdRng,
}

/// Uniform offset in `[-half, half)`.
#[inline]
fn jitter<R: Rng + ?Sized>(rng: &mut R, half: f32) -> f32 {
    rng.gen::<f32>() * half * 2.0 - half
}

impl FlowSimulator {
    pub fn new(params: FlowParams, size: Vec2, seed: u64) -> Self {
        let mut sim = Self {
            params,
            layout: FlowLayout::new(size),
            sources: Vec::new(),
            particles: Vec::new(),
            parcels: Vec::new(),
            rng: StdRng::seed_from_u64(seed),
        };
        sim.place_sources();
        sim
    }

    pub fn layout(&self) -> &FlowLayout {
        &self.layout
    }

    pub fn sources(&self) -> &[Source] {
        &self.sources
    }

    pub fn particles(&self) -> &[FlowParticle] {
        &self.particles
    }

    pub fn parcels(&self) -> &[AggregateParcel] {
        &self.parcels
    }

    /// Recompute anchors for a new surface size. In-flight entities keep
    /// their already-fixed targets.
    pub fn relayout(&mut self, size: Vec2) {
        self.layout = FlowLayout::new(size);
        self.place_sources();
    }

    fn place_sources(&mut self) {
        let l = self.layout;
        let n = self.params.source_count.max(1);
        let lane = (l.size.y - SOURCE_MARGIN_Y * 2.0) / n as f32;
        self.sources = (0..self.params.source_count)
            .map(|i| Source {
                position: Vec2::new(
                    l.left_x + jitter(&mut self.rng, SOURCE_JITTER),
                    SOURCE_MARGIN_Y + i as f32 * lane + jitter(&mut self.rng, SOURCE_JITTER),
                ),
                radius: SOURCE_RADIUS_MIN + self.rng.gen::<f32>() * SOURCE_RADIUS_SPAN,
            })
            .collect();
    }

    /// Launch one particle from `source`. Returns false when the source index
    /// is out of range or the particle cap is reached.
    pub fn spawn_from(&mut self, source: usize) -> bool {
        if self.particles.len() >= self.params.max_particles {
            return false;
        }
        let Some(src) = self.sources.get(source).copied() else {
            return false;
        };
        let center = self.layout.aggregator();
        let position = src.position
            + Vec2::new(
                jitter(&mut self.rng, SPAWN_JITTER),
                jitter(&mut self.rng, SPAWN_JITTER),
            );
        let target = center
            + Vec2::new(
                jitter(&mut self.rng, TARGET_JITTER),
                jitter(&mut self.rng, TARGET_JITTER),
            );
        let color_class = ColorClass::pick(&mut self.rng, self.params.accent_chance);
        self.particles.push(FlowParticle {
            position,
            target,
            velocity: Vec2::ZERO,
            age: 0.0,
            color_class,
        });
        true
    }

    /// Advance all three stages by `dt_sec` of wall time.
    pub fn tick(&mut self, dt_sec: f32, out_events: &mut Vec<FlowEvent>) {
        self.maybe_spawn(out_events);
        self.step_particles(dt_sec, out_events);
        self.step_parcels(dt_sec, out_events);
    }

    fn maybe_spawn(&mut self, out_events: &mut Vec<FlowEvent>) {
        if self.sources.is_empty() || self.particles.len() >= self.params.max_particles {
            return;
        }
        if self.rng.gen::<f32>() < self.params.spawn_chance {
            let source = self.rng.gen_range(0..self.sources.len());
            if self.spawn_from(source) {
                out_events.push(FlowEvent::Spawned { source });
            }
        }
    }

    fn step_particles(&mut self, dt_sec: f32, out_events: &mut Vec<FlowEvent>) {
        let mut i = self.particles.len();
        while i > 0 {
            i -= 1;
            let p = &mut self.particles[i];
            let to_target = p.target - p.position;
            let mut dist = to_target.length();
            if dist == 0.0 {
                dist = 1e-4;
            }
            // speed re-rolled every tick on purpose
            let speed =
                self.params.particle_speed * (SPEED_BAND_MIN + self.rng.gen::<f32>() * SPEED_BAND_SPAN);
            p.velocity = to_target / dist * speed * dt_sec;
            p.position += p.velocity;
            p.age += dt_sec;

            let timed_out = p.age > self.params.timeout_sec;
            if dist < self.params.arrival_distance || timed_out {
                let arrived = self.particles.swap_remove(i);
                self.spawn_parcel(arrived.color_class);
                out_events.push(FlowEvent::Arrived {
                    last_position: arrived.position,
                    timed_out: timed_out && dist >= self.params.arrival_distance,
                });
            }
        }
    }

    fn spawn_parcel(&mut self, color_class: ColorClass) {
        let center = self.layout.aggregator();
        let spawn = center
            + Vec2::new(
                jitter(&mut self.rng, PARCEL_SPAWN_JITTER),
                jitter(&mut self.rng, PARCEL_SPAWN_JITTER),
            );
        let destination = Vec2::new(
            self.layout.right_x - PARCEL_DEST_INSET,
            self.layout.mid_y + jitter(&mut self.rng, PARCEL_DEST_JITTER_Y),
        );
        self.parcels.push(AggregateParcel {
            spawn,
            destination,
            progress: 0.0,
            size: PARCEL_SIZE_MIN + self.rng.gen::<f32>() * PARCEL_SIZE_SPAN,
            color_class,
            state: ParcelState::Forming,
        });
    }

    fn step_parcels(&mut self, dt_sec: f32, out_events: &mut Vec<FlowEvent>) {
        let rng = &mut self.rng;
        self.parcels.retain_mut(|a| match a.state {
            ParcelState::Forming => {
                a.progress += PARCEL_STEP_MIN + rng.gen::<f32>() * PARCEL_STEP_SPAN;
                if a.progress >= 1.0 {
                    a.progress = 1.0;
                    let rest = Vec2::new(
                        a.destination.x - rng.gen::<f32>() * REST_SPREAD_X,
                        a.destination.y + rng.gen::<f32>() * REST_SPREAD_Y,
                    );
                    let ttl = PARCEL_TTL_MIN_SEC + rng.gen::<f32>() * PARCEL_TTL_SPAN_SEC;
                    a.state = ParcelState::Settled { rest, ttl };
                    out_events.push(FlowEvent::Settled);
                }
                true
            }
            ParcelState::Settled { rest, ttl } => {
                let ttl = ttl - dt_sec;
                if ttl <= 0.0 {
                    out_events.push(FlowEvent::Expired);
                    false
                } else {
                    a.state = ParcelState::Settled { rest, ttl };
                    true
                }
            }
        });
    }
}
