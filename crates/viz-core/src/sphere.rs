//! Uniform sampling of points on a spherical shell.

use crate::cluster::ClusterPoint;
use crate::color::ColorClass;
use crate::constants::WOBBLE_PHASE_MAX;
use crate::profile::DatasetProfile;
use glam::Vec3;
use rand::Rng;
use std::f32::consts::TAU;

/// Radial band the cluster is sampled into.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Shell {
    pub base_radius: f32,
    pub jitter: f32,
}

/// Unit direction uniformly distributed over the sphere's surface.
///
/// The polar angle uses the inverse CDF `acos(2v - 1)`; sampling it uniformly
/// instead would bunch points up at the poles.
#[inline]
pub fn uniform_direction(u: f32, v: f32) -> Vec3 {
    let theta = TAU * u;
    let phi = (2.0 * v - 1.0).clamp(-1.0, 1.0).acos();
    let (sin_phi, cos_phi) = phi.sin_cos();
    Vec3::new(sin_phi * theta.cos(), sin_phi * theta.sin(), cos_phi)
}

/// Generate `profile.count` points on the shell.
pub fn sample_points<R: Rng + ?Sized>(
    rng: &mut R,
    profile: &DatasetProfile,
    shell: Shell,
) -> Vec<ClusterPoint> {
    let (size_min, size_max) = profile.size_range;
    (0..profile.count)
        .map(|_| {
            let u: f32 = rng.gen();
            let v: f32 = rng.gen();
            let r = shell.base_radius + rng.gen::<f32>() * shell.jitter;
            let position = uniform_direction(u, v) * r;
            let color_class = ColorClass::pick(rng, profile.accent_probability);
            let size_base = size_min + rng.gen::<f32>() * (size_max - size_min);
            ClusterPoint {
                position,
                size_base,
                color_class,
                // measured, so the creation-time radius is exact to the stored position
                target_radius: position.length(),
                wobble_phase: rng.gen::<f32>() * WOBBLE_PHASE_MAX,
            }
        })
        .collect()
}
