/// Profile placement: converts a circumference sequence into the 2D
/// cross-section polyline that gets swept into a surface of revolution
use std::f64::consts::TAU;

/// Horizontal spacing between successive profile points, as a multiple of
/// the base radius. A tunable constant, not the circumference of anything.
pub const SPACING_FACTOR: f64 = 1.3;

/// A single point of the 2D revolution profile. `y` is the radius derived
/// from the measurement at `index`, `x` is solved by the placement rule.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ProfilePoint {
    pub x: f64,
    pub y: f64,
    /// 1-based position in the input sequence.
    pub index: usize,
}

/// Convert a circumference measurement to its radius.
pub fn circumference_to_radius(magnitude: f64) -> f64 {
    magnitude / TAU
}

/// Place one profile point per magnitude.
///
/// The first point sits at `(0, radius[0])`. Each later point keeps a fixed
/// distance of `base_radius * SPACING_FACTOR` from its predecessor, stepping
/// rightward by whatever `dx` satisfies that distance at the new radius.
/// When the radius jump alone already exceeds the spacing, the point stacks
/// vertically on its predecessor and a diagnostic is logged; this is a known
/// approximation, not an error.
pub fn place_points(magnitudes: &[f64]) -> Vec<ProfilePoint> {
    if magnitudes.is_empty() {
        return Vec::new();
    }

    let base_radius = circumference_to_radius(magnitudes[0]);
    let spacing = base_radius * SPACING_FACTOR;

    let mut points = Vec::with_capacity(magnitudes.len());
    points.push(ProfilePoint {
        x: 0.0,
        y: base_radius,
        index: 1,
    });

    for (i, &magnitude) in magnitudes.iter().enumerate().skip(1) {
        let prev = points[i - 1];
        let target_y = circumference_to_radius(magnitude);
        let dy = target_y - prev.y;
        let discriminant = spacing * spacing - dy * dy;

        let x = if discriminant >= 0.0 {
            prev.x + discriminant.sqrt()
        } else {
            log::warn!(
                "spacing {:.4} unreachable at point {} (dy = {:.4}), stacking vertically",
                spacing,
                i + 1,
                dy
            );
            prev.x
        };

        points.push(ProfilePoint {
            x,
            y: target_y,
            index: i + 1,
        });
    }

    points
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_radius_conversion_inverts_circumference() {
        let radius = circumference_to_radius(5.0);
        assert!((radius * TAU - 5.0).abs() < 1e-12);
        assert!((circumference_to_radius(TAU) - 1.0).abs() < 1e-12);
    }

    #[test]
    fn test_empty_sequence_yields_empty_profile() {
        assert!(place_points(&[]).is_empty());
    }

    #[test]
    fn test_first_point_at_origin_x() {
        let points = place_points(&[TAU * 3.0]);
        assert_eq!(points.len(), 1);
        assert_eq!(points[0].x, 0.0);
        assert!((points[0].y - 3.0).abs() < 1e-12);
        assert_eq!(points[0].index, 1);
    }

    #[test]
    fn test_x_monotonically_non_decreasing() {
        let magnitudes = [TAU, TAU * 1.2, TAU * 0.9, TAU * 1.1, TAU];
        let points = place_points(&magnitudes);
        for pair in points.windows(2) {
            assert!(pair[1].x >= pair[0].x);
        }
    }

    #[test]
    fn test_consecutive_distance_equals_spacing() {
        // Radii 1, 2, 1 with base radius 1: no fallback can trigger.
        let magnitudes = [TAU, TAU * 2.0, TAU];
        let points = place_points(&magnitudes);
        let spacing = 1.0 * SPACING_FACTOR;
        for pair in points.windows(2) {
            let dx = pair[1].x - pair[0].x;
            let dy = pair[1].y - pair[0].y;
            let dist = (dx * dx + dy * dy).sqrt();
            assert!((dist - spacing).abs() / spacing < 1e-9);
        }
    }

    #[test]
    fn test_vase_round_trip_coordinates() {
        // Radii 1, 2, 1: dy = ±1 against spacing 1.3, so each step moves
        // sqrt(1.69 - 1) = sqrt(0.69) ≈ 0.8307 to the right.
        let points = place_points(&[TAU, TAU * 2.0, TAU]);
        let dx = 0.69_f64.sqrt();
        assert!((points[0].x - 0.0).abs() < 1e-3);
        assert!((points[0].y - 1.0).abs() < 1e-3);
        assert!((points[1].x - dx).abs() < 1e-3);
        assert!((points[1].y - 2.0).abs() < 1e-3);
        assert!((points[2].x - 2.0 * dx).abs() < 1e-3);
        assert!((points[2].y - 1.0).abs() < 1e-3);
    }

    #[test]
    fn test_unreachable_spacing_stacks_vertically() {
        // Radii 1, 10: dy = 9 against spacing 1.3, discriminant is negative.
        let points = place_points(&[TAU, TAU * 10.0]);
        assert_eq!(points.len(), 2);
        assert_eq!(points[1].x, points[0].x);
        assert!((points[1].y - 10.0).abs() < 1e-12);
    }

    #[test]
    fn test_output_length_matches_input() {
        let magnitudes: Vec<f64> = (1..=20).map(|i| i as f64).collect();
        assert_eq!(place_points(&magnitudes).len(), 20);
    }
}
