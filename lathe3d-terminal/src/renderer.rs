/// Painter's-algorithm cell rasterizer for terminal rendering
use crossterm::{
    style::{Color, Print, ResetColor, SetForegroundColor},
    QueueableCommand,
};
use lathe3d_core::projection::{self, ProjectedPoint};
use lathe3d_core::{ProfilePoint, RevolvedMesh, ViewState};
use std::io::Write;

/// Opacity of the sorted face fills.
const FILL_OPACITY: f64 = 0.7;
/// Opacity of the wireframe stroke pass.
const WIRE_OPACITY: f64 = 0.25;
const WIRE_RGB: (u8, u8, u8) = (220, 220, 220);
/// Colors of the 2D profile view.
const PROFILE_LINE_RGB: (u8, u8, u8) = (90, 160, 220);
const PROFILE_POINT_RGB: (u8, u8, u8) = (255, 210, 80);
/// Cells of padding around the auto-fit profile viewport.
const PROFILE_PADDING: f64 = 2.0;
/// Segments with an endpoint beyond this many pixels from the origin are
/// dropped instead of walked. Near the perspective singularity the
/// projected coordinates can reach the billions.
const OFFSCREEN_LIMIT: f64 = 16_384.0;

/// Renders meshes and profiles into a grid of RGB cells, then flushes the
/// grid to the terminal.
pub struct PainterRenderer {
    width: usize,
    height: usize,
    color_buffer: Vec<Option<(u8, u8, u8)>>,
}

impl PainterRenderer {
    pub fn new(width: usize, height: usize) -> Self {
        Self {
            width,
            height,
            color_buffer: vec![None; width * height],
        }
    }

    /// Recreate the cell grid after a terminal resize.
    pub fn resize(&mut self, width: usize, height: usize) {
        self.width = width;
        self.height = height;
        self.color_buffer = vec![None; width * height];
    }

    pub fn clear(&mut self) {
        for cell in &mut self.color_buffer {
            *cell = None;
        }
    }

    /// Draw a revolved mesh with the painter's algorithm: project all
    /// vertices, fill faces back-to-front by mean depth, then stroke every
    /// face outline in original face order.
    pub fn render_mesh(&mut self, mesh: &RevolvedMesh, view: &ViewState) {
        if mesh.is_empty() {
            return;
        }

        let projected =
            projection::project_mesh(mesh, view, self.width as f64, self.height as f64);
        let order = projection::depth_sorted_faces(mesh, &projected);

        for &face_index in &order {
            let face = &mesh.faces[face_index];
            let coords = [
                projected[face.indices[0]],
                projected[face.indices[1]],
                projected[face.indices[2]],
            ];
            self.fill_triangle(&coords, face.color.to_rgb(), FILL_OPACITY);
        }

        // Wireframe pass runs over the unsorted face list, after all fills.
        for face in &mesh.faces {
            for edge in 0..3 {
                let a = projected[face.indices[edge]];
                let b = projected[face.indices[(edge + 1) % 3]];
                self.stroke_line(&a, &b, WIRE_RGB, WIRE_OPACITY);
            }
        }
    }

    /// Draw the 2D profile polyline, auto-fit to the viewport: the point
    /// bounds are recomputed every call, so a resized surface refits on the
    /// next frame.
    pub fn render_profile(&mut self, profile: &[ProfilePoint]) {
        if profile.is_empty() {
            return;
        }

        let mut min_x = profile[0].x;
        let mut max_x = profile[0].x;
        let mut min_y = profile[0].y;
        let mut max_y = profile[0].y;
        for point in profile {
            min_x = min_x.min(point.x);
            max_x = max_x.max(point.x);
            min_y = min_y.min(point.y);
            max_y = max_y.max(point.y);
        }

        let avail_w = (self.width as f64 - 2.0 * PROFILE_PADDING).max(1.0);
        let avail_h = (self.height as f64 - 2.0 * PROFILE_PADDING).max(1.0);
        let span_x = (max_x - min_x).max(1e-9);
        let span_y = (max_y - min_y).max(1e-9);
        let scale = (avail_w / span_x).min(avail_h / span_y);

        let height = self.height as f64;
        let to_screen = move |p: &ProfilePoint| ProjectedPoint {
            x: PROFILE_PADDING + (p.x - min_x) * scale,
            // y grows upward in profile space, downward on screen.
            y: height - PROFILE_PADDING - (p.y - min_y) * scale,
            depth: 0.0,
        };

        for pair in profile.windows(2) {
            let a = to_screen(&pair[0]);
            let b = to_screen(&pair[1]);
            self.stroke_line(&a, &b, PROFILE_LINE_RGB, 1.0);
        }
        for point in profile {
            let s = to_screen(point);
            self.blend_cell(s.x.round() as i32, s.y.round() as i32, PROFILE_POINT_RGB, 1.0);
        }
    }

    /// Flush the cell grid to the writer, one colored block per cell.
    pub fn draw<W: Write>(&self, writer: &mut W) -> std::io::Result<()> {
        for y in 0..self.height {
            for x in 0..self.width {
                match self.color_buffer[y * self.width + x] {
                    Some((r, g, b)) => {
                        writer.queue(SetForegroundColor(Color::Rgb { r, g, b }))?;
                        writer.queue(Print('█'))?;
                    }
                    None => {
                        writer.queue(Print(' '))?;
                    }
                }
            }
            writer.queue(Print('\n'))?;
        }
        writer.queue(ResetColor)?;
        Ok(())
    }

    /// Alpha-blend a color into one cell; empty cells blend over black.
    fn blend_cell(&mut self, x: i32, y: i32, rgb: (u8, u8, u8), alpha: f64) {
        if x < 0 || y < 0 || x >= self.width as i32 || y >= self.height as i32 {
            return;
        }
        let idx = y as usize * self.width + x as usize;
        let (dr, dg, db) = self.color_buffer[idx].unwrap_or((0, 0, 0));
        let blend = |src: u8, dst: u8| {
            (src as f64 * alpha + dst as f64 * (1.0 - alpha)).round() as u8
        };
        self.color_buffer[idx] = Some((
            blend(rgb.0, dr),
            blend(rgb.1, dg),
            blend(rgb.2, db),
        ));
    }

    /// Scanline fill over the triangle's bounding box using barycentric
    /// inside tests. No depth buffer; ordering comes from the caller.
    fn fill_triangle(&mut self, coords: &[ProjectedPoint; 3], rgb: (u8, u8, u8), alpha: f64) {
        let (v0, v1, v2) = (coords[0], coords[1], coords[2]);

        let min_x = (v0.x.min(v1.x).min(v2.x).floor() as i32).max(0);
        let max_x = (v0.x.max(v1.x).max(v2.x).ceil() as i32).min(self.width as i32 - 1);
        let min_y = (v0.y.min(v1.y).min(v2.y).floor() as i32).max(0);
        let max_y = (v0.y.max(v1.y).max(v2.y).ceil() as i32).min(self.height as i32 - 1);

        for y in min_y..=max_y {
            for x in min_x..=max_x {
                let px = x as f64 + 0.5;
                let py = y as f64 + 0.5;
                if let Some((w0, w1, w2)) =
                    barycentric((v0.x, v0.y), (v1.x, v1.y), (v2.x, v2.y), (px, py))
                {
                    if w0 >= 0.0 && w1 >= 0.0 && w2 >= 0.0 {
                        self.blend_cell(x, y, rgb, alpha);
                    }
                }
            }
        }
    }

    /// Bresenham line between two projected points. Segments with a
    /// non-finite or far-offscreen endpoint are skipped entirely; they carry
    /// no visible pixels worth walking to.
    fn stroke_line(&mut self, a: &ProjectedPoint, b: &ProjectedPoint, rgb: (u8, u8, u8), alpha: f64) {
        if !(a.x.is_finite() && a.y.is_finite() && b.x.is_finite() && b.y.is_finite()) {
            return;
        }
        if a.x.abs().max(a.y.abs()).max(b.x.abs()).max(b.y.abs()) > OFFSCREEN_LIMIT {
            return;
        }

        let mut x0 = a.x.round() as i32;
        let mut y0 = a.y.round() as i32;
        let x1 = b.x.round() as i32;
        let y1 = b.y.round() as i32;

        let dx = (x1 - x0).abs() as i64;
        let dy = -((y1 - y0).abs() as i64);
        let sx = if x0 < x1 { 1 } else { -1 };
        let sy = if y0 < y1 { 1 } else { -1 };
        let mut err = dx + dy;

        loop {
            self.blend_cell(x0, y0, rgb, alpha);
            if x0 == x1 && y0 == y1 {
                break;
            }
            let e2 = 2 * err;
            if e2 >= dy {
                err += dy;
                x0 += sx;
            }
            if e2 <= dx {
                err += dx;
                y0 += sy;
            }
        }
    }
}

/// Calculate barycentric coordinates for a point in a triangle
fn barycentric(
    v0: (f64, f64),
    v1: (f64, f64),
    v2: (f64, f64),
    p: (f64, f64),
) -> Option<(f64, f64, f64)> {
    let denom = (v1.1 - v2.1) * (v0.0 - v2.0) + (v2.0 - v1.0) * (v0.1 - v2.1);

    if denom.abs() < 1e-9 {
        return None;
    }

    let w0 = ((v1.1 - v2.1) * (p.0 - v2.0) + (v2.0 - v1.0) * (p.1 - v2.1)) / denom;
    let w1 = ((v2.1 - v0.1) * (p.0 - v2.0) + (v0.0 - v2.0) * (p.1 - v2.1)) / denom;
    let w2 = 1.0 - w0 - w1;

    Some((w0, w1, w2))
}

#[cfg(test)]
mod tests {
    use super::*;
    use lathe3d_core::{compute_profile, compute_shape, ShapeParams};
    use std::f64::consts::TAU;

    #[test]
    fn test_barycentric_center() {
        let (w0, w1, w2) =
            barycentric((0.0, 0.0), (10.0, 0.0), (0.0, 10.0), (3.0, 3.0)).unwrap();
        assert!((w0 + w1 + w2 - 1.0).abs() < 1e-9);
        assert!(w0 >= 0.0 && w1 >= 0.0 && w2 >= 0.0);
    }

    #[test]
    fn test_barycentric_degenerate_triangle() {
        assert!(barycentric((0.0, 0.0), (1.0, 1.0), (2.0, 2.0), (1.0, 1.0)).is_none());
    }

    #[test]
    fn test_fill_stays_in_bounds() {
        let mut renderer = PainterRenderer::new(10, 10);
        let coords = [
            ProjectedPoint {
                x: -20.0,
                y: -20.0,
                depth: 0.0,
            },
            ProjectedPoint {
                x: 40.0,
                y: -10.0,
                depth: 0.0,
            },
            ProjectedPoint {
                x: 5.0,
                y: 40.0,
                depth: 0.0,
            },
        ];
        // Must not panic on coordinates far outside the grid.
        renderer.fill_triangle(&coords, (200, 100, 50), 1.0);
        assert!(renderer.color_buffer.iter().any(|c| c.is_some()));
    }

    #[test]
    fn test_empty_mesh_draws_nothing() {
        let mut renderer = PainterRenderer::new(20, 10);
        let mesh = RevolvedMesh::empty();
        renderer.render_mesh(&mesh, &ViewState::new());
        assert!(renderer.color_buffer.iter().all(|c| c.is_none()));
    }

    #[test]
    fn test_mesh_render_marks_cells() {
        let mut renderer = PainterRenderer::new(80, 40);
        let mesh = compute_shape(&[TAU, TAU * 2.0, TAU], &ShapeParams::default()).unwrap();
        renderer.render_mesh(&mesh, &ViewState::new());
        assert!(renderer.color_buffer.iter().any(|c| c.is_some()));
    }

    #[test]
    fn test_near_focal_radius_mesh_renders_without_panic() {
        // An envelope radius just shy of the perspective focal distance puts
        // some rotated vertices almost exactly at the eye plane, so their
        // projected coordinates blow up into the billions. The renderer must
        // drop those segments rather than overflow or walk them.
        let mut renderer = PainterRenderer::new(80, 40);
        let magnitudes = [TAU * (499.999 / 1.5); 2];
        let mesh = compute_shape(&magnitudes, &ShapeParams::default()).unwrap();
        renderer.render_mesh(&mesh, &ViewState::new());
    }

    #[test]
    fn test_stroke_skips_extreme_endpoints() {
        let mut renderer = PainterRenderer::new(10, 10);
        let near = ProjectedPoint {
            x: 5.0,
            y: 5.0,
            depth: 0.0,
        };
        let exploded = ProjectedPoint {
            x: 2.5e9,
            y: -1.0e10,
            depth: 0.0,
        };
        renderer.stroke_line(&near, &exploded, (255, 255, 255), 1.0);
        let nan = ProjectedPoint {
            x: f64::NAN,
            y: 5.0,
            depth: 0.0,
        };
        renderer.stroke_line(&near, &nan, (255, 255, 255), 1.0);
        assert!(renderer.color_buffer.iter().all(|c| c.is_none()));
    }

    #[test]
    fn test_profile_render_fits_viewport() {
        let mut renderer = PainterRenderer::new(60, 20);
        let profile = compute_profile(&[TAU, TAU * 2.0, TAU]).unwrap();
        renderer.render_profile(&profile);
        assert!(renderer.color_buffer.iter().any(|c| c.is_some()));
    }

    #[test]
    fn test_resize_clears_grid() {
        let mut renderer = PainterRenderer::new(10, 10);
        renderer.blend_cell(5, 5, (255, 255, 255), 1.0);
        renderer.resize(12, 6);
        assert_eq!(renderer.color_buffer.len(), 12 * 6);
        assert!(renderer.color_buffer.iter().all(|c| c.is_none()));
    }
}
