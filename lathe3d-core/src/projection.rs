/// Centroid-pivot rotation, perspective projection, and painter's-algorithm
/// depth ordering
use nalgebra::{Point3, Rotation3, Vector3};

use crate::mesh::RevolvedMesh;
use crate::transform::ViewState;

/// Focal constant of the perspective divide.
pub const PERSPECTIVE: f64 = 500.0;
/// World-to-pixel scale applied on top of the perspective factor and zoom.
const SCREEN_SCALE: f64 = 50.0;

/// A vertex after rotation and projection. `x`/`y` are screen pixels,
/// `depth` is the rotated centroid-relative z used only for face sorting.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ProjectedPoint {
    pub x: f64,
    pub y: f64,
    pub depth: f64,
}

/// Rotate a position about the pivot: X-axis rotation first, then Y-axis.
/// The z rotation angle in the view state is reserved and not applied.
fn rotate_about(position: &Point3<f64>, view: &ViewState, pivot: &Point3<f64>) -> Vector3<f64> {
    let relative = position - pivot;
    let rx = Rotation3::from_axis_angle(&Vector3::x_axis(), view.rotation.x);
    let ry = Rotation3::from_axis_angle(&Vector3::y_axis(), view.rotation.y);
    ry * (rx * relative)
}

/// Project a single 3D position to screen space.
///
/// Pure function of its arguments: rotation about the centroid, perspective
/// divide against [`PERSPECTIVE`], then centering in the viewport with a
/// y-flip for screen coordinates.
pub fn project(
    position: &Point3<f64>,
    view: &ViewState,
    centroid: &Point3<f64>,
    viewport_width: f64,
    viewport_height: f64,
) -> ProjectedPoint {
    let relative = rotate_about(position, view, centroid);
    let scale = PERSPECTIVE / (PERSPECTIVE + relative.z) * view.zoom * SCREEN_SCALE;
    ProjectedPoint {
        x: viewport_width / 2.0 + relative.x * scale,
        y: viewport_height / 2.0 - relative.y * scale,
        depth: relative.z,
    }
}

/// Project every vertex of a mesh.
pub fn project_mesh(
    mesh: &RevolvedMesh,
    view: &ViewState,
    viewport_width: f64,
    viewport_height: f64,
) -> Vec<ProjectedPoint> {
    mesh.vertices
        .iter()
        .map(|vertex| {
            project(
                &vertex.position,
                view,
                &mesh.centroid,
                viewport_width,
                viewport_height,
            )
        })
        .collect()
}

/// Mean depth of a face's three projected vertices.
pub fn face_depth(indices: &[usize; 3], projected: &[ProjectedPoint]) -> f64 {
    (projected[indices[0]].depth + projected[indices[1]].depth + projected[indices[2]].depth) / 3.0
}

/// Face indices sorted ascending by mean depth, ready for painter's-algorithm
/// drawing. The sort is stable, so faces at equal depth keep input order.
pub fn depth_sorted_faces(mesh: &RevolvedMesh, projected: &[ProjectedPoint]) -> Vec<usize> {
    let mut order: Vec<usize> = (0..mesh.faces.len()).collect();
    order.sort_by(|&a, &b| {
        let da = face_depth(&mesh.faces[a].indices, projected);
        let db = face_depth(&mesh.faces[b].indices, projected);
        da.partial_cmp(&db).unwrap_or(std::cmp::Ordering::Equal)
    });
    order
}
