//! Convex hull metrics and sliding-window hull analysis of trajectories.
//!
//! Pure math library, zero I/O. Computes the enclosed measure and boundary
//! measure of the convex hull of 2-D and 3-D point sets, and slides a fixed
//! window along a trajectory to produce a per-window hull series. Degenerate
//! windows are recorded as `NaN` rather than aborting the series.

mod config;
mod error;
mod metrics;
mod planar;
mod result;
mod spatial;

pub use config::{SlidingHullConfig, sliding_hull};
pub use error::HullError;
pub use metrics::{DEGENERACY_EPS, HullMetrics, hull_metrics};
pub use result::{SlidingHullResult, WindowHull};
