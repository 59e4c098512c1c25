//! Trajectory data model and motion statistics.
//!
//! Pure math library, zero I/O. Provides a validated fixed-dimension trajectory
//! table, Hurst exponent estimation by log-log variance regression, mean squared
//! displacement (scalar and tau-indexed), jump-length distributions and radius of
//! gyration (global and cumulative).

mod describe;
mod error;
mod gyration;
mod hurst;
mod jump;
mod lags;
mod msd;
mod preprocess;
mod projection;
mod trajectory;

pub use describe::std_dev;
pub use error::{ErrorKind, MotionError};
pub use gyration::{center_of_mass, cumulative_gyration, radius_of_gyration, radius_of_gyration_about};
pub use hurst::{HurstConfig, HurstEstimate, LagVariance, estimate_hurst};
pub use jump::jump_lengths;
pub use lags::LagSet;
pub use msd::{MsdPoint, msd_by_tau, msd_by_tau_axes, msd_direct};
pub use preprocess::upsample;
pub use projection::{Projection, radial};
pub use trajectory::{TimedTrajectory, Trajectory, TrajectoryView};
