//! Planar convex hulls via QuickHull.
//!
//! Layout
//! - `hull`: orientation, partition, expansion, driver and shoelace area.
//! - `source`: point sources (slices, tuples, `X Y` text).
//! - `result`: `HullResult`, the one-step construction and its presentation.
//! - `cloud`: deterministic random point clouds for demos, benches and tests.
//!
//! Numerics are plain `f64`; no exact predicates.

pub mod cloud;
pub mod error;
pub mod hull;
pub mod result;
pub mod source;

/// Library version string.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

pub use error::HullError;
pub use hull::{DirectedLine, EndpointFilter, HullCfg, Point};
pub use result::HullResult;

/// Common exports for quick imports in callers.
pub mod prelude {
    pub use crate::cloud::{draw_cloud, CloudCfg, CloudShape, ReplayToken};
    pub use crate::hull::{
        area, build_hull, build_hull_with, find_hull, orientation, right_subset, DirectedLine,
        EndpointFilter, HullCfg, Point, Side,
    };
    pub use crate::source::{parse_points, read_points_file, PointSource, TextSource};
    pub use crate::{HullError, HullResult};
}
