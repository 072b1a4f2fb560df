// Host-side tests for draw ordering, using the recording painter.

use glam::{Vec2, Vec3};
use viz_core::render::*;
use viz_core::*;

fn point_at(position: Vec3, color_class: ColorClass) -> ClusterPoint {
    ClusterPoint {
        position,
        size_base: 2.0,
        color_class,
        target_radius: position.length(),
        wobble_phase: 0.0,
    }
}

fn count(list: &CommandList, pred: impl Fn(&DrawCommand) -> bool) -> usize {
    list.commands.iter().filter(|c| pred(c)).count()
}

#[test]
fn cluster_frame_is_backdrop_then_links_then_glows() {
    let points: Vec<ClusterPoint> = (0..5)
        .map(|i| point_at(Vec3::new(150.0 + i as f32, 0.0, 0.0), ColorClass::Primary))
        .collect();
    let mut list = CommandList::new();
    render_cluster(&mut list, Vec2::new(400.0, 300.0), &points, 0.0, 0.0);

    assert!(matches!(list.commands[0], DrawCommand::Clear { .. }));
    assert!(matches!(list.commands[1], DrawCommand::RectGradient { .. }));

    let last_line = list
        .commands
        .iter()
        .rposition(|c| matches!(c, DrawCommand::Line { .. }))
        .expect("close points are linked");
    let first_glow = list
        .commands
        .iter()
        .position(|c| matches!(c, DrawCommand::CircleGradient { .. }))
        .expect("points are drawn");
    assert!(last_line < first_glow);

    assert_eq!(count(&list, |c| matches!(c, DrawCommand::CircleGradient { .. })), 5);
    assert_eq!(count(&list, |c| matches!(c, DrawCommand::Circle { .. })), 5);
}

#[test]
fn links_only_look_four_ahead_in_depth_order() {
    // Six coincident points: every candidate pair is in range.
    let points = vec![point_at(Vec3::new(0.0, 0.0, 150.0), ColorClass::Primary); 6];
    let mut list = CommandList::new();
    render_cluster(&mut list, Vec2::new(200.0, 200.0), &points, 0.0, 0.0);
    // 4 + 4 + 3 + 2 + 1 + 0
    assert_eq!(count(&list, |c| matches!(c, DrawCommand::Line { .. })), 14);
}

#[test]
fn distant_points_are_not_linked() {
    let points = vec![
        point_at(Vec3::new(-150.0, 0.0, 0.0), ColorClass::Primary),
        point_at(Vec3::new(150.0, 0.0, 0.0), ColorClass::Primary),
    ];
    let mut list = CommandList::new();
    render_cluster(&mut list, Vec2::new(800.0, 600.0), &points, 0.0, 0.0);
    assert_eq!(count(&list, |c| matches!(c, DrawCommand::Line { .. })), 0);
}

#[test]
fn link_alpha_fades_with_distance() {
    assert!((link_alpha(0.0).unwrap() - (LINK_ALPHA_BASE + LINK_ALPHA_SPAN)).abs() < 1e-6);
    let mid = link_alpha(LINK_DIST2_MAX * 0.5).unwrap();
    assert!(mid < link_alpha(10.0).unwrap());
    assert!(mid > LINK_ALPHA_BASE);
    assert_eq!(link_alpha(LINK_DIST2_MAX), None);
}

#[test]
fn nearer_points_glow_larger_and_brighter() {
    let (r_far, a_far) = glow_metrics(2.0, 0.7);
    let (r_near, a_near) = glow_metrics(2.0, 1.1);
    assert!(r_near > r_far);
    assert!(a_near > a_far);
    assert_eq!(glow_metrics(0.1, 0.5).0, GLOW_MIN_RADIUS);
}

#[test]
fn accent_points_use_the_accent_glow() {
    let points = vec![point_at(Vec3::new(0.0, 0.0, 150.0), ColorClass::Accent)];
    let mut list = CommandList::new();
    render_cluster(&mut list, Vec2::new(200.0, 200.0), &points, 0.0, 0.0);
    let glow = list
        .commands
        .iter()
        .find_map(|c| match c {
            DrawCommand::CircleGradient { gradient, .. } => Some(gradient.clone()),
            _ => None,
        })
        .unwrap();
    let inner = glow.stops[0].color;
    assert_eq!((inner.r, inner.g, inner.b), (143, 255, 176));
    assert_eq!(glow.stops.len(), 3);
}

#[test]
fn empty_flow_frame_draws_fixed_scenery() {
    let params = FlowParams {
        spawn_chance: 0.0,
        ..FlowParams::default()
    };
    let sim = FlowSimulator::new(params, Vec2::new(800.0, 400.0), 1);
    let mut list = CommandList::new();
    render_flow(&mut list, &sim);
    // clear + vignette + sources + halo + 2 core + 2 destination + connector
    assert_eq!(list.len(), 2 + SOURCE_COUNT + 1 + 2 + 2 + 1);
    assert!(matches!(list.commands.last(), Some(DrawCommand::Line { .. })));
}

#[test]
fn flow_frame_draws_particles_and_parcels() {
    let params = FlowParams {
        spawn_chance: 0.0,
        ..FlowParams::default()
    };
    let mut sim = FlowSimulator::new(params, Vec2::new(200.0, 200.0), 2);
    assert!(sim.spawn_from(4));
    let mut events = Vec::new();
    sim.tick(1.0 / 60.0, &mut events);

    let mut list = CommandList::new();
    render_flow(&mut list, &sim);
    // trail + head on top of the fixed scenery
    assert_eq!(list.len(), 2 + SOURCE_COUNT + 2 + 1 + 2 + 2 + 1);

    while sim.parcels().is_empty() {
        sim.tick(1.0 / 60.0, &mut events);
    }
    list.clear_commands();
    render_flow(&mut list, &sim);
    assert_eq!(count(&list, |c| matches!(c, DrawCommand::RoundRect { .. })), 1);
}

#[test]
fn reduced_motion_frame_has_three_nodes() {
    let mut list = CommandList::new();
    render_flow_static(&mut list, Vec2::new(600.0, 300.0));
    assert!(matches!(list.commands[0], DrawCommand::Clear { .. }));
    assert!(matches!(list.commands[1], DrawCommand::Rect { .. }));
    assert_eq!(count(&list, |c| matches!(c, DrawCommand::Circle { .. })), 3);
    assert_eq!(list.len(), 5);
}

fn kind(c: &DrawCommand) -> &'static str {
    match c {
        DrawCommand::Clear { .. } => "clear",
        DrawCommand::Rect { .. } => "rect",
        DrawCommand::RectGradient { .. } => "rect-gradient",
        DrawCommand::Circle { .. } => "circle",
        DrawCommand::CircleGradient { .. } => "circle-gradient",
        DrawCommand::Line { .. } => "line",
        DrawCommand::RoundRect { .. } => "round-rect",
    }
}

/// One forming parcel plus one particle still travelling from the left.
fn busy_flow(params: FlowParams) -> FlowSimulator {
    let mut sim = FlowSimulator::new(params, Vec2::new(200.0, 200.0), 3);
    assert!(sim.spawn_from(4));
    let mut events = Vec::new();
    while sim.parcels().is_empty() {
        sim.tick(1.0 / 60.0, &mut events);
    }
    assert!(sim.spawn_from(0));
    sim.tick(1.0 / 60.0, &mut events);
    assert_eq!(sim.particles().len(), 1);
    assert_eq!(sim.parcels().len(), 1);
    assert!(!sim.parcels()[0].is_settled());
    sim
}

#[test]
fn flow_frame_layers_in_fixed_order() {
    let params = FlowParams {
        spawn_chance: 0.0,
        ..FlowParams::default()
    };
    let sim = busy_flow(params);
    let mut list = CommandList::new();
    render_flow(&mut list, &sim);

    let mut expected = vec!["clear", "rect-gradient"];
    expected.extend(std::iter::repeat("circle").take(SOURCE_COUNT));
    expected.extend([
        "line",            // trail
        "circle",          // head
        "circle-gradient", // aggregator halo
        "circle",
        "circle",
        "round-rect", // forming parcel
        "line",       // its tether to the aggregator
        "circle",     // destination
        "circle",
        "line", // connector
    ]);
    let actual: Vec<&str> = list.commands.iter().map(kind).collect();
    assert_eq!(actual, expected);
}

#[test]
fn accent_parcels_draw_in_the_flow_accent() {
    let params = FlowParams {
        spawn_chance: 0.0,
        accent_chance: 1.0,
        ..FlowParams::default()
    };
    let sim = busy_flow(params);
    let mut list = CommandList::new();
    render_flow(&mut list, &sim);
    let color = list
        .commands
        .iter()
        .find_map(|c| match c {
            DrawCommand::RoundRect { color, .. } => Some(*color),
            _ => None,
        })
        .unwrap();
    assert_eq!((color.r, color.g, color.b), (160, 255, 170));
    assert_eq!((color.r, color.g, color.b), (FLOW_ACCENT.r, FLOW_ACCENT.g, FLOW_ACCENT.b));
}
