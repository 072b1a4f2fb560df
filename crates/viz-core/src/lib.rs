pub mod camera;
pub mod clock;
pub mod cluster;
pub mod color;
pub mod constants;
pub mod error;
pub mod flow;
pub mod paint;
pub mod profile;
pub mod projection;
pub mod render;
pub mod scene;
pub mod signal;
pub mod sphere;
pub mod viewport;

pub use camera::*;
pub use clock::*;
pub use cluster::*;
pub use color::*;
pub use constants::*;
pub use error::{Result, VizError};
pub use flow::*;
pub use paint::*;
pub use profile::*;
pub use projection::*;
pub use scene::*;
pub use signal::*;
pub use sphere::*;
pub use viewport::*;
