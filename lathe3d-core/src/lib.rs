//! Lathe3D Core Library - geometry pipeline for revolution surfaces
//!
//! Converts an ordered sequence of circumference measurements into a 2D
//! profile polyline, coarsens it into an envelope contour, sweeps that
//! contour into a revolved 3D mesh, and projects the result to screen
//! space for painter's-algorithm rendering. Everything here is pure
//! computation; drawing lives in the front-end crates.

pub mod envelope;
pub mod mesh;
pub mod pipeline;
pub mod profile;
pub mod projection;
pub mod sequence;
pub mod transform;

// Re-export commonly used types
pub use envelope::{build_envelope, EnvelopeParams};
pub use mesh::{revolve, Face, FaceColor, MeshVertex, RevolvedMesh};
pub use pipeline::{compute_profile, compute_shape, ProfileStats, ShapeParams};
pub use profile::{circumference_to_radius, place_points, ProfilePoint};
pub use projection::{depth_sorted_faces, project, project_mesh, ProjectedPoint};
pub use sequence::{parse_measurements, validate, SequenceError};
pub use transform::{RotationState, ViewState};
