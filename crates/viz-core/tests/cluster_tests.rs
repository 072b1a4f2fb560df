// Host-side tests for the cluster simulator and dataset switching.

use viz_core::*;

fn make_sim(seed: u64) -> ClusterSimulator {
    ClusterSimulator::new(ClusterParams::default(), ProfileRegistry::default(), seed)
        .expect("default profile exists")
}

/// Registry with a motionless profile so only the cohesion term acts.
fn still_registry() -> ProfileRegistry {
    let mut reg = ProfileRegistry::empty();
    reg.insert(
        DEFAULT_PROFILE_KEY,
        DatasetProfile {
            count: 16,
            speed_scale: 0.0,
            ..MANAGER
        },
    );
    reg
}

#[test]
fn starts_on_default_profile() {
    let sim = make_sim(1);
    assert_eq!(sim.profile_key(), "manager");
    assert_eq!(sim.points().len(), 180);
}

#[test]
fn switching_profiles_replaces_the_whole_point_set() {
    let mut sim = make_sim(5);
    let before: Vec<_> = sim.points().iter().map(|p| p.position).collect();
    assert_eq!(before.len(), 180);

    sim.switch_profile("acq").expect("known profile");
    assert_eq!(sim.profile_key(), "acq");
    assert_eq!(sim.points().len(), 260);
    for p in sim.points() {
        assert!(
            !before.contains(&p.position),
            "point from previous profile survived the switch"
        );
    }
}

#[test]
fn unknown_profile_is_rejected_and_state_kept() {
    let mut sim = make_sim(9);
    let before = sim.points().to_vec();
    let err = sim.switch_profile("ops").unwrap_err();
    assert_eq!(err, VizError::UnknownProfile("ops".into()));
    assert_eq!(sim.profile_key(), "manager");
    assert_eq!(sim.points(), &before[..]);
}

#[test]
fn cohesion_pulls_displaced_point_toward_target_radius() {
    let mut sim = ClusterSimulator::new(ClusterParams::default(), still_registry(), 3).unwrap();
    let target = sim.points()[0].target_radius;
    let dir = sim.points()[0].position.normalize();
    sim.points_mut()[0].position = dir * target * 1.5;

    sim.tick(0.0);

    let d0 = target * 1.5;
    let expected = d0 + (target - d0) * CORRECTION_RATE * MANAGER.cohesion_strength;
    let d1 = sim.points()[0].position.length();
    assert!((d1 - expected).abs() < 1e-3, "got {d1}, expected {expected}");
    assert!(d1 < d0);
    // still on the same ray
    assert!(sim.points()[0].position.normalize().dot(dir) > 0.9999);
}

#[test]
fn undisturbed_points_stay_put_without_motion() {
    let mut sim = ClusterSimulator::new(ClusterParams::default(), still_registry(), 4).unwrap();
    let before = sim.points().to_vec();
    for t in 0..10 {
        sim.tick(t as f64 * 16.0);
    }
    for (a, b) in before.iter().zip(sim.points()) {
        assert!((a.position - b.position).length() < 1e-3);
    }
}

#[test]
fn target_radius_never_changes_while_points_drift() {
    let mut sim = make_sim(12);
    sim.switch_profile("acq").unwrap();
    let targets: Vec<f32> = sim.points().iter().map(|p| p.target_radius).collect();
    for frame in 0..600 {
        sim.tick(frame as f64 * 16.7);
    }
    for (p, t) in sim.points().iter().zip(&targets) {
        assert_eq!(p.target_radius, *t);
        // drift stays close to the shell thanks to cohesion
        let d = p.position.length();
        assert!((d - t).abs() < 10.0, "drifted to {d} from {t}");
    }
}

#[test]
fn reset_resamples_same_profile() {
    let mut sim = make_sim(21);
    sim.switch_profile("ret").unwrap();
    let first = sim.points()[0].position;
    sim.reset();
    assert_eq!(sim.points().len(), 120);
    assert_ne!(sim.points()[0].position, first);
}
