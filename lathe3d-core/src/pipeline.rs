/// End-to-end pipeline: magnitudes -> profile -> envelope -> revolved mesh
use crate::envelope::{build_envelope, EnvelopeParams};
use crate::mesh::{revolve, RevolvedMesh};
use crate::profile::{place_points, ProfilePoint};
use crate::sequence::{validate, SequenceError};

/// Default number of angular divisions for the sweep.
pub const DEFAULT_DIVISIONS: usize = 32;

/// Parameters for the full shape computation.
#[derive(Debug, Clone, Copy)]
pub struct ShapeParams {
    pub envelope: EnvelopeParams,
    pub divisions: usize,
}

impl Default for ShapeParams {
    fn default() -> Self {
        Self {
            envelope: EnvelopeParams::default(),
            divisions: DEFAULT_DIVISIONS,
        }
    }
}

/// Validate the magnitudes and place the 2D profile. An empty sequence is
/// not an error; it simply yields an empty profile.
pub fn compute_profile(magnitudes: &[f64]) -> Result<Vec<ProfilePoint>, SequenceError> {
    validate(magnitudes)?;
    Ok(place_points(magnitudes))
}

/// Full chain from magnitudes to the revolved mesh.
pub fn compute_shape(
    magnitudes: &[f64],
    params: &ShapeParams,
) -> Result<RevolvedMesh, SequenceError> {
    let profile = compute_profile(magnitudes)?;
    let envelope = build_envelope(&profile, &params.envelope);
    Ok(revolve(&envelope, params.divisions))
}

/// Summary statistics over a computed profile; a pure read, recomputed on
/// demand rather than cached.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ProfileStats {
    pub point_count: usize,
    pub base_radius: f64,
    pub min_x: f64,
    pub max_x: f64,
    pub min_y: f64,
    pub max_y: f64,
}

impl ProfileStats {
    /// `None` when the profile is empty.
    pub fn from_profile(profile: &[ProfilePoint]) -> Option<Self> {
        let first = profile.first()?;
        let mut stats = Self {
            point_count: profile.len(),
            base_radius: first.y,
            min_x: first.x,
            max_x: first.x,
            min_y: first.y,
            max_y: first.y,
        };
        for point in &profile[1..] {
            stats.min_x = stats.min_x.min(point.x);
            stats.max_x = stats.max_x.max(point.x);
            stats.min_y = stats.min_y.min(point.y);
            stats.max_y = stats.max_y.max(point.y);
        }
        Some(stats)
    }
}
