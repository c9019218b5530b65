/// Surface-of-revolution meshing: sweeps the envelope contour around the
/// x-axis into a triangulated vertex/face set with a base cap
use nalgebra::{Point2, Point3};
use std::f64::consts::TAU;

/// Hue advance per envelope ring, in degrees.
const HUE_RING_STEP: usize = 30;
/// Hue advance per angular segment, in degrees.
const HUE_SEGMENT_STEP: usize = 5;
const SIDE_SATURATION: f64 = 0.7;
const SIDE_LIGHTNESS: f64 = 0.5;
/// Neutral gray for the base cap fan.
const CAP_COLOR: FaceColor = FaceColor {
    hue: 0.0,
    saturation: 0.0,
    lightness: 0.6,
};

/// An HSL face color. Hue in degrees [0, 360), saturation and lightness in
/// [0, 1].
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FaceColor {
    pub hue: f64,
    pub saturation: f64,
    pub lightness: f64,
}

impl FaceColor {
    /// Convert to 8-bit RGB for raster output.
    pub fn to_rgb(&self) -> (u8, u8, u8) {
        let c = (1.0 - (2.0 * self.lightness - 1.0).abs()) * self.saturation;
        let sector = self.hue / 60.0;
        let x = c * (1.0 - (sector % 2.0 - 1.0).abs());
        let (r, g, b) = match sector as u32 {
            0 => (c, x, 0.0),
            1 => (x, c, 0.0),
            2 => (0.0, c, x),
            3 => (0.0, x, c),
            4 => (x, 0.0, c),
            _ => (c, 0.0, x),
        };
        let m = self.lightness - c / 2.0;
        (
            ((r + m) * 255.0).round() as u8,
            ((g + m) * 255.0).round() as u8,
            ((b + m) * 255.0).round() as u8,
        )
    }
}

/// A mesh vertex tagged with the envelope ring and angular step that
/// produced it.
#[derive(Debug, Clone, Copy)]
pub struct MeshVertex {
    pub position: Point3<f64>,
    pub original_index: usize,
    pub rotation_index: usize,
}

/// A triangle referencing three vertices by index into the mesh.
#[derive(Debug, Clone, Copy)]
pub struct Face {
    pub indices: [usize; 3],
    pub color: FaceColor,
}

/// A revolved surface: flat vertex array, index triangles, and the vertex
/// centroid used as the rotation pivot.
#[derive(Debug, Clone)]
pub struct RevolvedMesh {
    pub vertices: Vec<MeshVertex>,
    pub faces: Vec<Face>,
    pub centroid: Point3<f64>,
}

impl RevolvedMesh {
    pub fn empty() -> Self {
        Self {
            vertices: Vec::new(),
            faces: Vec::new(),
            centroid: Point3::origin(),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.vertices.is_empty()
    }
}

impl Default for RevolvedMesh {
    fn default() -> Self {
        Self::empty()
    }
}

/// Sweep an envelope contour around the x-axis.
///
/// Each envelope point becomes one ring of `divisions` vertices. Adjacent
/// rings are stitched with two triangles per angular segment, split along
/// the same diagonal for every quad. If the first envelope point does not
/// start on the axis of the sweep's open end (x != 0), a cap vertex is added
/// on the axis and the first ring is closed with a triangle fan.
///
/// Generation is deterministic: identical inputs give identical meshes.
///
/// Panics if `divisions < 3`; a sweep needs at least a triangular ring.
/// Valid measurement input can never trip this: it is a caller contract,
/// not a data error.
pub fn revolve(envelope: &[Point2<f64>], divisions: usize) -> RevolvedMesh {
    assert!(divisions >= 3, "revolution needs at least 3 divisions");

    if envelope.is_empty() {
        return RevolvedMesh::empty();
    }

    let rings = envelope.len();
    let mut vertices = Vec::with_capacity(rings * divisions + 1);
    for (ring, point) in envelope.iter().enumerate() {
        for step in 0..divisions {
            let angle = TAU * step as f64 / divisions as f64;
            vertices.push(MeshVertex {
                position: Point3::new(point.x, point.y * angle.cos(), point.y * angle.sin()),
                original_index: ring,
                rotation_index: step,
            });
        }
    }

    let mut faces = Vec::with_capacity(2 * divisions * rings.saturating_sub(1) + divisions);
    for ring in 0..rings.saturating_sub(1) {
        for step in 0..divisions {
            let next_step = (step + 1) % divisions;
            let a = ring * divisions + step;
            let b = ring * divisions + next_step;
            let c = (ring + 1) * divisions + next_step;
            let d = (ring + 1) * divisions + step;
            let color = FaceColor {
                hue: ((ring * HUE_RING_STEP + step * HUE_SEGMENT_STEP) % 360) as f64,
                saturation: SIDE_SATURATION,
                lightness: SIDE_LIGHTNESS,
            };
            faces.push(Face {
                indices: [a, b, c],
                color,
            });
            faces.push(Face {
                indices: [a, c, d],
                color,
            });
        }
    }

    if envelope[0].x != 0.0 {
        let center = vertices.len();
        vertices.push(MeshVertex {
            position: Point3::new(envelope[0].x, 0.0, 0.0),
            original_index: 0,
            rotation_index: 0,
        });
        for step in 0..divisions {
            faces.push(Face {
                indices: [center, step, (step + 1) % divisions],
                color: CAP_COLOR,
            });
        }
    }

    let centroid = centroid_of(&vertices);

    RevolvedMesh {
        vertices,
        faces,
        centroid,
    }
}

fn centroid_of(vertices: &[MeshVertex]) -> Point3<f64> {
    if vertices.is_empty() {
        return Point3::origin();
    }
    let mut sum = Point3::new(0.0, 0.0, 0.0);
    for vertex in vertices {
        sum.x += vertex.position.x;
        sum.y += vertex.position.y;
        sum.z += vertex.position.z;
    }
    let n = vertices.len() as f64;
    Point3::new(sum.x / n, sum.y / n, sum.z / n)
}
