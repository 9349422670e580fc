// SPDX-License-Identifier: Apache-2.0
// Copyright (c) 2025 Polyframe Inc.

//! STL file importer

use anyhow::{Context, Result};
use nalgebra::{Point3, Vector3};
use std::fs::File;
use std::path::Path;
use stl_io::read_stl;

use crate::geometry::{Mesh, Triangle, Vertex};

/// Longest edge below which coordinates are assumed to be meters
const METER_SCALE_LIMIT_MM: f64 = 1.0;

/// Import an STL file as a part mesh in millimeters
///
/// Both binary and ASCII STL are accepted. Files whose longest
/// bounding-box edge is under 1.0 are assumed to be modeled in meters
/// and are scaled to millimeters.
pub fn import_stl(path: &Path) -> Result<Mesh> {
    let mut file =
        File::open(path).with_context(|| format!("Failed to open STL file: {:?}", path))?;
    let stl = read_stl(&mut file).with_context(|| format!("Failed to read STL file: {:?}", path))?;

    let mut mesh = Mesh::with_capacity(stl.faces.len() * 3, stl.faces.len());

    for face in &stl.faces {
        let normal = Vector3::new(
            f64::from(face.normal[0]),
            f64::from(face.normal[1]),
            f64::from(face.normal[2]),
        );

        let mut indices = [0usize; 3];
        for (slot, &vertex_index) in indices.iter_mut().zip(face.vertices.iter()) {
            let position = &stl.vertices[vertex_index];
            *slot = mesh.add_vertex(Vertex::new(
                Point3::new(
                    f64::from(position[0]),
                    f64::from(position[1]),
                    f64::from(position[2]),
                ),
                normal,
            ));
        }
        mesh.add_triangle(Triangle::new(indices));
    }

    let longest = mesh.bounding_box().longest_edge();
    if longest > 0.0 && longest < METER_SCALE_LIMIT_MM {
        mesh.scale_uniform(1000.0);
    }

    Ok(mesh)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::geometry::Primitive;
    use crate::io::export_stl;
    use anyhow::Result;
    use approx::assert_relative_eq;
    use tempfile::tempdir;

    #[test]
    fn test_round_trip_preserves_geometry() -> Result<()> {
        let dir = tempdir()?;
        let path = dir.path().join("cube.stl");

        let original = Primitive::cube(nalgebra::Vector3::new(20.0, 20.0, 20.0)).to_mesh();
        export_stl(&original, &path)?;
        let imported = import_stl(&path)?;

        assert_eq!(imported.triangle_count(), original.triangle_count());
        let dims = imported.bounding_box().dims();
        assert_relative_eq!(dims[0], 20.0, epsilon = 1e-3);
        assert_relative_eq!(dims[2], 20.0, epsilon = 1e-3);

        Ok(())
    }

    #[test]
    fn test_meter_scale_heuristic() -> Result<()> {
        let dir = tempdir()?;
        let path = dir.path().join("meters.stl");

        // 0.05 m cube; importer should rescale to 50 mm
        let original = Primitive::cube(nalgebra::Vector3::new(0.05, 0.05, 0.05)).to_mesh();
        export_stl(&original, &path)?;
        let imported = import_stl(&path)?;

        let dims = imported.bounding_box().dims();
        assert_relative_eq!(dims[0], 50.0, epsilon = 1e-2);

        Ok(())
    }

    #[test]
    fn test_missing_file_errors() {
        let result = import_stl(Path::new("/nonexistent/part.stl"));
        assert!(result.is_err());
    }
}
