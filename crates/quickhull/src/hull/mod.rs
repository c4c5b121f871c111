//! QuickHull in the plane.
//!
//! Purpose
//! - Build the convex hull of a finite point set as a clockwise vertex
//!   sequence starting at the first minimal-x point, then its shoelace area.
//!
//! Conventions
//! - "Right" of a directed line means positive `orientation` (see `orient`).
//!   With the usual y-up axes this is the counterclockwise side, so the hull
//!   grows A → upper chain → B → lower chain, i.e. clockwise.
//! - Plain `f64` arithmetic, no epsilons; ties are first-wins everywhere.
//! - Endpoint exclusion during partitioning is configurable (`EndpointFilter`).
//!
//! Code cross-refs: `build_hull`, `find_hull`, `right_subset`, `area`

pub mod area;
pub mod driver;
pub mod expand;
pub mod orient;
pub mod partition;
mod types;

pub use area::area;
pub use driver::{build_hull, build_hull_with, extreme_x};
pub use expand::{farthest_point, find_hull, find_hull_with};
pub use orient::{orientation, side_of, Side};
pub use partition::{right_subset, right_subset_with};
pub use types::{DirectedLine, EndpointFilter, HullCfg, Point};
