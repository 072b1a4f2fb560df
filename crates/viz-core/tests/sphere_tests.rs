// Host-side tests for shell sampling.

use rand::rngs::StdRng;
use rand::SeedableRng;
use viz_core::*;

fn shell() -> Shell {
    Shell {
        base_radius: SPHERE_BASE_RADIUS,
        jitter: SPHERE_RADIUS_JITTER,
    }
}

#[test]
fn sampled_points_start_exactly_on_their_target_radius() {
    let mut rng = StdRng::seed_from_u64(7);
    let points = sample_points(&mut rng, &ACQUISITION, shell());
    assert_eq!(points.len(), ACQUISITION.count);
    for p in &points {
        assert_eq!(p.position.length(), p.target_radius);
        assert!(p.target_radius >= SPHERE_BASE_RADIUS - 1e-3);
        assert!(p.target_radius <= SPHERE_BASE_RADIUS + SPHERE_RADIUS_JITTER + 1e-3);
    }
}

#[test]
fn sizes_and_phases_stay_in_range() {
    let mut rng = StdRng::seed_from_u64(11);
    let points = sample_points(&mut rng, &RETENTION, shell());
    let (lo, hi) = RETENTION.size_range;
    for p in &points {
        assert!(p.size_base >= lo && p.size_base <= hi, "size {}", p.size_base);
        assert!(p.wobble_phase >= 0.0 && p.wobble_phase < WOBBLE_PHASE_MAX);
    }
}

#[test]
fn normalized_z_is_uniform_over_the_sphere() {
    let profile = DatasetProfile {
        count: 20_000,
        ..MANAGER
    };
    let mut rng = StdRng::seed_from_u64(2024);
    let points = sample_points(&mut rng, &profile, shell());

    const BINS: usize = 10;
    let mut hist = [0usize; BINS];
    for p in &points {
        let zn = (p.position.z / p.position.length()).clamp(-1.0, 1.0);
        let bin = (((zn + 1.0) * 0.5) * BINS as f32).floor() as usize;
        hist[bin.min(BINS - 1)] += 1;
    }
    let expected = profile.count as f32 / BINS as f32;
    for (i, &n) in hist.iter().enumerate() {
        let rel = (n as f32 - expected).abs() / expected;
        assert!(rel < 0.1, "bin {i} has {n} samples, expected ~{expected}");
    }
}

#[test]
fn uniform_direction_is_unit_length_and_hits_the_poles() {
    for &(u, v) in &[(0.0, 0.0), (0.25, 0.5), (0.9, 0.999), (0.5, 1.0)] {
        let d = uniform_direction(u, v);
        assert!((d.length() - 1.0).abs() < 1e-5);
    }
    assert!((uniform_direction(0.3, 1.0).z - 1.0).abs() < 1e-6);
    assert!((uniform_direction(0.3, 0.0).z + 1.0).abs() < 1e-6);
}

#[test]
fn accent_share_tracks_profile_probability() {
    let profile = DatasetProfile {
        count: 10_000,
        accent_probability: 0.25,
        ..ACQUISITION
    };
    let mut rng = StdRng::seed_from_u64(3);
    let points = sample_points(&mut rng, &profile, shell());
    let accents = points.iter().filter(|p| p.color_class.is_accent()).count();
    let share = accents as f32 / profile.count as f32;
    assert!((share - 0.25).abs() < 0.03, "accent share {share}");
}
