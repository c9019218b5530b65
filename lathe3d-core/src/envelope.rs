/// Envelope coarsening: subsamples and smooths a profile polyline into the
/// coarse contour the mesher sweeps. Deliberately not an alpha shape or
/// convex hull; downstream visuals depend on this weaker approximation.
use nalgebra::Point2;

use crate::profile::ProfilePoint;

/// Number of samples the subsampling stride aims for.
const TARGET_SAMPLES: usize = 8;

/// Tuning knobs for the envelope pass.
#[derive(Debug, Clone, Copy)]
pub struct EnvelopeParams {
    /// Uniform expansion factor applied to each sampled y (x is untouched).
    pub alpha_radius: f64,
    /// Weight of the 3-point averaging pass; 0 disables smoothing.
    pub smoothing: f64,
}

impl Default for EnvelopeParams {
    fn default() -> Self {
        Self {
            alpha_radius: 1.5,
            smoothing: 0.3,
        }
    }
}

/// Build the coarse envelope contour for a profile.
///
/// Profiles shorter than two points pass through unchanged. Otherwise the
/// profile is sampled every `max(1, len / 8)` points, the true last point is
/// appended when the stride skipped it, each y is scaled by `alpha_radius`,
/// and one smoothing pass runs if the weight is positive.
pub fn build_envelope(profile: &[ProfilePoint], params: &EnvelopeParams) -> Vec<Point2<f64>> {
    if profile.len() < 2 {
        return profile.iter().map(|p| Point2::new(p.x, p.y)).collect();
    }

    let stride = (profile.len() / TARGET_SAMPLES).max(1);
    let mut sampled = Vec::with_capacity(profile.len() / stride + 2);
    let mut last_sampled = 0;
    let mut i = 0;
    while i < profile.len() {
        sampled.push(Point2::new(profile[i].x, profile[i].y));
        last_sampled = i;
        i += stride;
    }
    // The stride loop may step over the final point; it anchors the tip of
    // the contour, so bring it back.
    if last_sampled != profile.len() - 1 {
        let last = profile[profile.len() - 1];
        sampled.push(Point2::new(last.x, last.y));
    }

    for point in &mut sampled {
        point.y *= params.alpha_radius;
    }

    if params.smoothing > 0.0 {
        sampled = smooth(&sampled, params.smoothing);
    }

    sampled
}

/// One pass of 3-point weighted averaging. Boundary points clamp their
/// missing neighbor to themselves, which dampens the smoothing at the ends
/// without eliminating it.
fn smooth(points: &[Point2<f64>], weight: f64) -> Vec<Point2<f64>> {
    points
        .iter()
        .enumerate()
        .map(|(i, curr)| {
            let prev = if i == 0 { curr } else { &points[i - 1] };
            let next = if i + 1 == points.len() {
                curr
            } else {
                &points[i + 1]
            };
            Point2::new(
                curr.x * (1.0 - weight) + (prev.x + next.x) * weight / 2.0,
                curr.y * (1.0 - weight) + (prev.y + next.y) * weight / 2.0,
            )
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn profile_of(points: &[(f64, f64)]) -> Vec<ProfilePoint> {
        points
            .iter()
            .enumerate()
            .map(|(i, &(x, y))| ProfilePoint { x, y, index: i + 1 })
            .collect()
    }

    #[test]
    fn test_short_profile_passes_through() {
        let profile = profile_of(&[(0.0, 2.0)]);
        let envelope = build_envelope(&profile, &EnvelopeParams::default());
        assert_eq!(envelope.len(), 1);
        assert_eq!(envelope[0], Point2::new(0.0, 2.0));
    }

    #[test]
    fn test_sixteen_points_sample_to_eight_plus_tail() {
        let profile = profile_of(&(0..16).map(|i| (i as f64, 1.0)).collect::<Vec<_>>());
        let params = EnvelopeParams {
            alpha_radius: 1.0,
            smoothing: 0.0,
        };
        let envelope = build_envelope(&profile, &params);
        // Stride 2 samples indices 0, 2, ..., 14; index 15 is appended.
        assert_eq!(envelope.len(), 9);
        assert_eq!(envelope[8].x, 15.0);
    }

    #[test]
    fn test_last_point_not_duplicated_when_stride_lands_on_it() {
        let profile = profile_of(&(0..9).map(|i| (i as f64, 1.0)).collect::<Vec<_>>());
        let params = EnvelopeParams {
            alpha_radius: 1.0,
            smoothing: 0.0,
        };
        // Stride 1 visits every index including the last.
        let envelope = build_envelope(&profile, &params);
        assert_eq!(envelope.len(), 9);
        assert_eq!(envelope[8].x, 8.0);
        assert_ne!(envelope[7].x, envelope[8].x);
    }

    #[test]
    fn test_alpha_radius_scales_y_only() {
        let profile = profile_of(&[(0.0, 1.0), (1.0, 2.0)]);
        let params = EnvelopeParams {
            alpha_radius: 1.5,
            smoothing: 0.0,
        };
        let envelope = build_envelope(&profile, &params);
        assert_eq!(envelope[0], Point2::new(0.0, 1.5));
        assert_eq!(envelope[1], Point2::new(1.0, 3.0));
    }

    #[test]
    fn test_smoothing_pulls_interior_toward_neighbors() {
        let profile = profile_of(&[(0.0, 0.0), (1.0, 10.0), (2.0, 0.0)]);
        let params = EnvelopeParams {
            alpha_radius: 1.0,
            smoothing: 0.3,
        };
        let envelope = build_envelope(&profile, &params);
        // Interior spike: 10*(1-0.3) + (0+0)*0.3/2 = 7.
        assert!((envelope[1].y - 7.0).abs() < 1e-12);
        // Boundary clamps to itself: 0*(1-0.3) + (0+10)*0.3/2 = 1.5.
        assert!((envelope[0].y - 1.5).abs() < 1e-12);
        assert!((envelope[2].y - 1.5).abs() < 1e-12);
    }
}
