//! Point-cloud state and its per-tick motion.

use crate::color::ColorClass;
use crate::constants::*;
use crate::error::Result;
use crate::profile::{DatasetProfile, ProfileRegistry, DEFAULT_PROFILE_KEY};
use crate::sphere::{sample_points, Shell};
use glam::Vec3;
use rand::prelude::*;

#[derive(Clone, Debug, PartialEq)]
pub struct ClusterPoint {
    pub position: Vec3,
    pub size_base: f32,
    pub color_class: ColorClass,
    /// Radius at creation. Never modified afterwards.
    pub target_radius: f32,
    pub wobble_phase: f32,
}

#[derive(Clone, Debug)]
pub struct ClusterParams {
    pub shell: Shell,
    pub correction_rate: f32,
}

impl Default for ClusterParams {
    fn default() -> Self {
        Self {
            shell: Shell {
                base_radius: SPHERE_BASE_RADIUS,
                jitter: SPHERE_RADIUS_JITTER,
            },
            correction_rate: CORRECTION_RATE,
        }
    }
}

pub struct ClusterSimulator {
    pub params: ClusterParams,
    registry: ProfileRegistry,
    profile_key: String,
    profile: DatasetProfile,
    points: Vec<ClusterPoint>,
    rng: StdRng,
}

impl ClusterSimulator {
    /// Simulator on the default profile with a freshly sampled point set.
    pub fn new(params: ClusterParams, registry: ProfileRegistry, seed: u64) -> Result<Self> {
        let profile = registry.get(DEFAULT_PROFILE_KEY)?.clone();
        let mut sim = Self {
            params,
            registry,
            profile_key: DEFAULT_PROFILE_KEY.to_owned(),
            profile,
            points: Vec::new(),
            rng: StdRng::seed_from_u64(seed),
        };
        sim.reset();
        Ok(sim)
    }

    pub fn points(&self) -> &[ClusterPoint] {
        &self.points
    }

    /// Direct access for hosts that nudge points between ticks.
    pub fn points_mut(&mut self) -> &mut [ClusterPoint] {
        &mut self.points
    }

    pub fn profile(&self) -> &DatasetProfile {
        &self.profile
    }

    pub fn profile_key(&self) -> &str {
        &self.profile_key
    }

    /// Throw the current point set away and sample a new one for the active profile.
    pub fn reset(&mut self) {
        self.points = sample_points(&mut self.rng, &self.profile, self.params.shell);
        log::debug!(
            "[cluster] sampled {} points for {:?}",
            self.points.len(),
            self.profile_key
        );
    }

    /// Make `key` the active profile and resample. Unknown keys leave
    /// everything untouched.
    pub fn switch_profile(&mut self, key: &str) -> Result<()> {
        let profile = self.registry.get(key)?.clone();
        self.profile_key = key.to_owned();
        self.profile = profile;
        self.reset();
        log::info!("[cluster] profile -> {} ({} points)", key, self.points.len());
        Ok(())
    }

    /// Advance every point one step. `now_ms` is a monotonic clock driving the
    /// smooth wobble; jitter and cohesion are applied on top.
    pub fn tick(&mut self, now_ms: f64) {
        let speed = self.profile.speed_scale;
        let pull = self.params.correction_rate * self.profile.cohesion_strength;
        for p in &mut self.points {
            let phase = p.wobble_phase as f64;
            let wobble_x = (now_ms * WOBBLE_FREQ_X + phase).sin() as f32;
            let wobble_y = (now_ms * WOBBLE_FREQ_Y + phase).cos() as f32;
            p.position.x +=
                wobble_x * speed * WOBBLE_AMP_X + (self.rng.gen::<f32>() - 0.5) * speed * JITTER_AMP;
            p.position.y +=
                wobble_y * speed * WOBBLE_AMP_Y + (self.rng.gen::<f32>() - 0.5) * speed * JITTER_AMP;
            p.position.z += (self.rng.gen::<f32>() - 0.5) * speed * JITTER_AMP;

            let dist = p.position.length();
            if dist > 0.0 {
                let radial = p.position / dist;
                p.position += radial * (p.target_radius - dist) * pull;
            }
        }
    }
}
