// SPDX-License-Identifier: Apache-2.0
// Copyright (c) 2025 Polyframe Inc.

//! Part measurement for quoting

use super::{convex_hull_volume, BoundingBox, Mesh};
use ahash::AHashSet;
use serde::{Deserialize, Serialize};

/// Measured geometric quantities of a part, in mm
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PartGeometry {
    /// Axis-aligned bounds
    pub bbox: BoundingBox,
    /// Enclosed volume in mm³
    pub volume: f64,
    /// Total surface area in mm²
    pub surface_area: f64,
    /// Convex hull volume in mm³, never below `volume`
    pub hull_volume: f64,
    /// Number of triangles
    pub face_count: usize,
    /// Number of unique undirected edges
    pub edge_count: usize,
}

impl PartGeometry {
    /// Zero-valued measurements for unusable input
    pub fn empty() -> Self {
        Self {
            bbox: BoundingBox::zero(),
            volume: 0.0,
            surface_area: 0.0,
            hull_volume: 0.0,
            face_count: 0,
            edge_count: 0,
        }
    }

    /// Bounding-box extents as (length, width, height) in mm
    pub fn dims(&self) -> [f64; 3] {
        self.bbox.dims()
    }

    /// True when the mesh produced usable measurements
    pub fn is_measurable(&self) -> bool {
        self.volume > 0.0 && self.face_count > 0 && self.hull_volume > 0.0
    }
}

/// Measure a mesh for quoting
///
/// Empty meshes return zero-valued measurements rather than failing.
/// When the convex hull cannot be built, the hull volume falls back to
/// the enclosed volume; it is also clamped to never sit below it, which
/// float noise would otherwise allow on convex parts.
pub fn measure(mesh: &Mesh) -> PartGeometry {
    if mesh.vertices.is_empty() || mesh.triangles.is_empty() {
        return PartGeometry::empty();
    }

    let bbox = mesh.bounding_box();
    let volume = calculate_volume(mesh);
    let surface_area = calculate_surface_area(mesh);
    let hull_volume = match convex_hull_volume(mesh) {
        Some(hull) => hull.max(volume),
        None => volume,
    };

    PartGeometry {
        bbox,
        volume,
        surface_area,
        hull_volume,
        face_count: mesh.triangle_count(),
        edge_count: count_unique_edges(mesh),
    }
}

/// Calculate enclosed volume using signed tetrahedron volumes
fn calculate_volume(mesh: &Mesh) -> f64 {
    let mut volume = 0.0;

    for triangle in &mesh.triangles {
        let v0 = &mesh.vertices[triangle.indices[0]].position;
        let v1 = &mesh.vertices[triangle.indices[1]].position;
        let v2 = &mesh.vertices[triangle.indices[2]].position;

        volume += v0.coords.dot(&v1.coords.cross(&v2.coords)) / 6.0;
    }

    volume.abs()
}

/// Calculate total surface area
fn calculate_surface_area(mesh: &Mesh) -> f64 {
    let mut area = 0.0;

    for triangle in &mesh.triangles {
        let v0 = &mesh.vertices[triangle.indices[0]].position;
        let v1 = &mesh.vertices[triangle.indices[1]].position;
        let v2 = &mesh.vertices[triangle.indices[2]].position;

        let edge1 = v1 - v0;
        let edge2 = v2 - v0;
        area += edge1.cross(&edge2).norm() / 2.0;
    }

    area
}

/// Count unique undirected edges by vertex index
fn count_unique_edges(mesh: &Mesh) -> usize {
    let mut edges: AHashSet<(usize, usize)> = AHashSet::with_capacity(mesh.triangles.len() * 3);

    for triangle in &mesh.triangles {
        let indices = &triangle.indices;
        for i in 0..3 {
            let v1 = indices[i];
            let v2 = indices[(i + 1) % 3];
            let edge = if v1 < v2 { (v1, v2) } else { (v2, v1) };
            edges.insert(edge);
        }
    }

    edges.len()
}
