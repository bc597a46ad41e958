//! cartesian-axis: axis option builder for cartesian charts.
//!
//! The crate turns a computed chart model, user display settings and measured
//! layout into a declarative axis configuration for an external renderer.
//! Every builder is a pure function of its inputs.

pub mod api;
pub mod core;
pub mod error;
pub mod telemetry;

pub use api::{AxesOption, ChartSettings, build_axes};
pub use error::{ChartError, ChartResult};
