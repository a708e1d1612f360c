//! Box-extruded "skyline" mesh of a finished height field.
//!
//! Layout of the vertex list:
//!
//! 1. a floor rectangle spanning `[0, product_size]²` at `z = 0`;
//! 2. for every cell with a nonzero (normalized) height, five quads in order:
//!    two walls at constant x, two walls at constant y, then the cap.
//!
//! Each quad contributes four vertices and two triangles `(a, b, c)`,
//! `(a, c, d)`. Face indices are 1-based, as in Wavefront OBJ.
use crate::config::ProductGeometry;
use crate::heightfield::HeightField;
use crate::image::io::ensure_parent_dir;
use nalgebra::Point3;
use std::fs::File;
use std::io::{self, BufWriter, Write};
use std::path::Path;

/// Triangles emitted per non-empty cell (five quads, two triangles each).
pub const TRIANGLES_PER_CELL: usize = 10;

/// Quad whose edge `p1 → p3` is a diagonal of a wall standing on the plane
/// through `p1` and `p3`; the other corners swap the z coordinates.
pub fn vertical_quad(p1: Point3<f64>, p3: Point3<f64>) -> [Point3<f64>; 4] {
    let p2 = Point3::new(p1.x, p1.y, p3.z);
    let p4 = Point3::new(p3.x, p3.y, p1.z);
    [p1, p2, p3, p4]
}

/// Horizontal quad at the height of `p3` with `p1`, `p3` as opposite corners.
pub fn horizontal_quad(p1: Point3<f64>, p3: Point3<f64>) -> [Point3<f64>; 4] {
    let p2 = Point3::new(p3.x, p1.y, p3.z);
    let p4 = Point3::new(p1.x, p3.y, p3.z);
    [p1, p2, p3, p4]
}

/// Export scaling derived from the product geometry.
#[derive(Clone, Copy, Debug)]
pub struct ExportOptions {
    /// Horizontal size of one cell.
    pub cell_size: f64,
    /// z per height unit: `cell_size * S`, `S = 1 / tan(light angle)`.
    pub vertical_unit: f64,
    /// Side of the floor rectangle.
    pub product_size: f64,
}

impl From<&ProductGeometry> for ExportOptions {
    fn from(geometry: &ProductGeometry) -> Self {
        Self {
            cell_size: geometry.heightfield,
            vertical_unit: geometry.heightfield * geometry.vertical_scale(),
            product_size: geometry.product_size,
        }
    }
}

/// Vertex and triangle lists of the exported relief.
#[derive(Clone, Debug, Default)]
pub struct Mesh {
    vertices: Vec<Point3<f64>>,
    faces: Vec<[usize; 3]>,
}

impl Mesh {
    /// Build the skyline of `height` after shifting its minimum to zero.
    pub fn skyline(height: &HeightField, options: &ExportOptions) -> Self {
        let mut mesh = Mesh::default();
        let p = options.product_size;
        mesh.push_quad([
            Point3::new(0.0, 0.0, 0.0),
            Point3::new(0.0, p, 0.0),
            Point3::new(p, p, 0.0),
            Point3::new(p, 0.0, 0.0),
        ]);

        let normalized = height.normalized();
        let s = options.cell_size;
        for i in 0..normalized.size() {
            for j in 0..normalized.size() {
                let h = normalized.get(i, j);
                if h == 0 {
                    continue;
                }
                let z = h as f64 * options.vertical_unit;
                let (x0, x1) = (i as f64 * s, (i + 1) as f64 * s);
                let (y0, y1) = (j as f64 * s, (j + 1) as f64 * s);
                mesh.push_quad(vertical_quad(
                    Point3::new(x0, y0, 0.0),
                    Point3::new(x0, y1, z),
                ));
                mesh.push_quad(vertical_quad(
                    Point3::new(x1, y0, 0.0),
                    Point3::new(x1, y1, z),
                ));
                mesh.push_quad(vertical_quad(
                    Point3::new(x0, y1, 0.0),
                    Point3::new(x1, y1, z),
                ));
                mesh.push_quad(vertical_quad(
                    Point3::new(x0, y0, 0.0),
                    Point3::new(x1, y0, z),
                ));
                mesh.push_quad(horizontal_quad(
                    Point3::new(x0, y0, z),
                    Point3::new(x1, y1, z),
                ));
            }
        }
        mesh
    }

    fn push_quad(&mut self, quad: [Point3<f64>; 4]) {
        let n = self.vertices.len() + 1;
        self.faces.push([n, n + 1, n + 2]);
        self.faces.push([n, n + 2, n + 3]);
        self.vertices.extend(quad);
    }

    pub fn vertices(&self) -> &[Point3<f64>] {
        &self.vertices
    }

    /// Triangles as 1-based vertex indices.
    pub fn faces(&self) -> &[[usize; 3]] {
        &self.faces
    }

    /// Number of extruded cells (excludes the floor).
    pub fn block_count(&self) -> usize {
        self.faces.len().saturating_sub(2) / TRIANGLES_PER_CELL
    }

    /// Write `v x y z` lines followed by `f i j k` lines.
    pub fn write_obj<W: Write>(&self, mut out: W) -> io::Result<()> {
        for v in &self.vertices {
            writeln!(out, "v {} {} {}", v.x, v.y, v.z)?;
        }
        for [a, b, c] in &self.faces {
            writeln!(out, "f {a} {b} {c}")?;
        }
        out.flush()
    }
}

/// Write `mesh` as OBJ text to `path`, creating parent directories.
pub fn save_obj(mesh: &Mesh, path: &Path) -> Result<(), String> {
    ensure_parent_dir(path)?;
    let file =
        File::create(path).map_err(|e| format!("Failed to create {}: {e}", path.display()))?;
    mesh.write_obj(BufWriter::new(file))
        .map_err(|e| format!("Failed to write {}: {e}", path.display()))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn unit_options() -> ExportOptions {
        ExportOptions {
            cell_size: 1.0,
            vertical_unit: 1.0,
            product_size: 4.0,
        }
    }

    #[test]
    fn quads_share_diagonal_corners() {
        let a = Point3::new(0.0, 0.0, 0.0);
        let c = Point3::new(0.0, 1.0, 2.0);
        let q = vertical_quad(a, c);
        assert_eq!(q[1], Point3::new(0.0, 0.0, 2.0));
        assert_eq!(q[3], Point3::new(0.0, 1.0, 0.0));
        let top = horizontal_quad(Point3::new(0.0, 0.0, 2.0), Point3::new(1.0, 1.0, 2.0));
        assert!(top.iter().all(|p| p.z == 2.0));
        assert_eq!(top[1], Point3::new(1.0, 0.0, 2.0));
        assert_eq!(top[3], Point3::new(0.0, 1.0, 2.0));
    }

    #[test]
    fn flat_field_exports_only_the_floor() {
        let mesh = Mesh::skyline(&HeightField::new(4), &unit_options());
        assert_eq!(mesh.vertices().len(), 4);
        assert_eq!(mesh.faces(), &[[1, 2, 3], [1, 3, 4]]);
        assert_eq!(mesh.block_count(), 0);
    }

    #[test]
    fn one_block_adds_five_quads() {
        let mut hf = HeightField::new(4);
        hf.set(1, 2, 3);
        let mesh = Mesh::skyline(&hf, &unit_options());
        assert_eq!(mesh.vertices().len(), 4 + 20);
        assert_eq!(mesh.faces().len(), 2 + TRIANGLES_PER_CELL);
        assert_eq!(mesh.block_count(), 1);
        let cap = &mesh.vertices()[20..24];
        assert!(cap.iter().all(|p| p.z == 3.0));
        assert!(cap.iter().all(|p| (1.0..=2.0).contains(&p.x) && (2.0..=3.0).contains(&p.y)));
        let max_index = mesh.faces().iter().flatten().copied().max().unwrap();
        assert_eq!(max_index, mesh.vertices().len());
    }

    #[test]
    fn negative_heights_are_lifted_to_the_floor() {
        let mut hf = HeightField::new(3);
        hf.set(0, 0, -2);
        // Minimum is -2: every other cell becomes a block of height 2.
        let mesh = Mesh::skyline(&hf, &unit_options());
        assert_eq!(mesh.block_count(), 8);
        let top = mesh.vertices().iter().map(|p| p.z).fold(0.0, f64::max);
        assert_eq!(top, 2.0);
    }

    #[test]
    fn obj_text_lists_vertices_then_faces() {
        let mut hf = HeightField::new(2);
        hf.set(0, 0, 1);
        let mesh = Mesh::skyline(&hf, &unit_options());
        let mut buf = Vec::new();
        mesh.write_obj(&mut buf).unwrap();
        let text = String::from_utf8(buf).unwrap();
        let lines: Vec<&str> = text.lines().collect();
        assert_eq!(lines.len(), mesh.vertices().len() + mesh.faces().len());
        assert_eq!(lines[0], "v 0 0 0");
        assert_eq!(lines[1], "v 0 4 0");
        assert!(lines[mesh.vertices().len()].starts_with("f 1 2 3"));
        assert!(lines.iter().all(|l| l.starts_with("v ") || l.starts_with("f ")));
    }

    #[test]
    fn geometry_scales_heights_by_light_angle() {
        let geometry = ProductGeometry {
            product_size: 10.0,
            heightfield: 0.5,
            light_angle_deg: 45.0,
        };
        let options = ExportOptions::from(&geometry);
        assert!((options.vertical_unit - 0.5).abs() < 1e-12);
        let steep = ProductGeometry {
            light_angle_deg: 60.0,
            ..geometry
        };
        assert!(ExportOptions::from(&steep).vertical_unit < options.vertical_unit);
    }
}
