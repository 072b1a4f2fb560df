// Shared tuning constants for the cluster and flow visualizations.
// All lengths are CSS pixels unless noted otherwise.

// ---------------- Cluster: sampling ----------------
pub const SPHERE_BASE_RADIUS: f32 = 150.0;
pub const SPHERE_RADIUS_JITTER: f32 = 44.0; // radius = base + U * jitter
pub const WOBBLE_PHASE_MAX: f32 = 0.6;

// ---------------- Cluster: motion ----------------
pub const WOBBLE_FREQ_X: f64 = 0.001; // rad per ms
pub const WOBBLE_FREQ_Y: f64 = 0.0015;
pub const WOBBLE_AMP_X: f32 = 2.4; // multiples of speed_scale
pub const WOBBLE_AMP_Y: f32 = 2.2;
pub const JITTER_AMP: f32 = 10.0; // (U - 0.5) * speed_scale * JITTER_AMP
pub const CORRECTION_RATE: f32 = 0.0027; // radial spring rate, scaled by cohesion

// ---------------- Cluster: projection ----------------
pub const ZOOM: f32 = 950.0;
pub const DEPTH_OFFSET: f32 = 260.0;

// ---------------- Cluster: camera ----------------
pub const INITIAL_PITCH: f32 = 0.38;
pub const INITIAL_YAW: f32 = 0.0;
pub const YAW_SENSITIVITY: f32 = 0.008; // radians per pixel
pub const PITCH_SENSITIVITY: f32 = 0.006;
pub const IDLE_YAW_STEP: f32 = 0.0008; // radians per frame

// ---------------- Cluster: rendering ----------------
pub const LINK_WINDOW: usize = 4; // neighbours scanned ahead in depth order
pub const LINK_DIST2_MAX: f32 = 7000.0;
pub const LINK_ALPHA_BASE: f32 = 0.012;
pub const LINK_ALPHA_SPAN: f32 = 0.06;
pub const GLOW_ALPHA_PER_SCALE: f32 = 0.54;
pub const GLOW_RADIUS_PER_SIZE: f32 = 1.5;
pub const GLOW_MIN_RADIUS: f32 = 0.9;
pub const ACCENT_GLOW_DIM: f32 = 0.9;
pub const CORE_DOT_RATIO: f32 = 0.25;
pub const CORE_DOT_MIN_RADIUS: f32 = 0.6;
pub const CLUSTER_VIGNETTE_ALPHA: f32 = 0.6;
pub const VIGNETTE_RADIUS_DIVISOR: f32 = 1.2; // radius = max(w, h) / divisor

// ---------------- Flow: layout ----------------
pub const SOURCE_COUNT: usize = 8;
pub const LEFT_FRACTION: f32 = 0.12;
pub const RIGHT_FRACTION: f32 = 0.88;
pub const SOURCE_MARGIN_Y: f32 = 40.0;
pub const SOURCE_JITTER: f32 = 10.0; // +/- on both axes
pub const SOURCE_RADIUS_MIN: f32 = 3.0;
pub const SOURCE_RADIUS_SPAN: f32 = 2.0;

// ---------------- Flow: particles ----------------
pub const SPAWN_CHANCE: f32 = 0.12; // per tick
pub const MAX_PARTICLES: usize = 90;
pub const SPAWN_JITTER: f32 = 2.0;
pub const TARGET_JITTER: f32 = 13.0;
pub const PARTICLE_SPEED: f32 = 60.0; // px/sec before the random band
pub const SPEED_BAND_MIN: f32 = 0.5;
pub const SPEED_BAND_SPAN: f32 = 0.8;
pub const ARRIVAL_DISTANCE: f32 = 8.0;
pub const PARTICLE_TIMEOUT_SEC: f32 = 3.0;
pub const ACCENT_PARTICLE_CHANCE: f32 = 0.06;

// ---------------- Flow: parcels ----------------
pub const PARCEL_SPAWN_JITTER: f32 = 18.0;
pub const PARCEL_DEST_INSET: f32 = 36.0; // destination sits this far left of the node
pub const PARCEL_DEST_JITTER_Y: f32 = 5.0;
pub const PARCEL_STEP_MIN: f32 = 0.01;
pub const PARCEL_STEP_SPAN: f32 = 0.01;
pub const PARCEL_SIZE_MIN: f32 = 12.0;
pub const PARCEL_SIZE_SPAN: f32 = 8.0;
pub const REST_SPREAD_X: f32 = 18.0;
pub const REST_SPREAD_Y: f32 = 12.0;
pub const PARCEL_TTL_MIN_SEC: f32 = 4.0;
pub const PARCEL_TTL_SPAN_SEC: f32 = 6.0;

// ---------------- Flow: rendering ----------------
pub const FLOW_VIGNETTE_ALPHA: f32 = 0.5;
pub const HALO_RADIUS: f32 = 90.0;
pub const CORE_OUTER_RADIUS: f32 = 24.0;
pub const CORE_INNER_RADIUS: f32 = 8.0;
pub const DEST_OUTER_RADIUS: f32 = 10.0;
pub const DEST_INNER_RADIUS: f32 = 4.0;
pub const PARTICLE_HEAD_RADIUS: f32 = 1.8;
pub const TRAIL_FACTOR: f32 = 2.0; // trail length in velocity steps
pub const SETTLED_DOT_RADIUS: f32 = 2.6;
pub const PARCEL_CORNER_RADIUS: f32 = 4.0;
pub const PARCEL_MIN_WIDTH: f32 = 8.0;
pub const PARCEL_MIN_HEIGHT: f32 = 6.0;

// ---------------- Reduced-motion frame ----------------
pub const STATIC_SOURCE_INSET: f32 = 80.0;
pub const STATIC_SOURCE_RADIUS: f32 = 6.0;
pub const STATIC_HUB_RADIUS: f32 = 22.0;
pub const STATIC_DEST_RADIUS: f32 = 8.0;
