// SPDX-License-Identifier: Apache-2.0
// Copyright (c) 2025 Polyframe Inc.

//! Convex hull volume via parry

use super::Mesh;
use nalgebra::{Point3, Vector3};
use parry3d::transformation;

/// Compute the volume enclosed by the convex hull of the mesh vertices.
///
/// Returns `None` when the hull cannot be built, such as for fewer than
/// four vertices or fully coplanar input. Parry works in f32; the volume
/// sum is carried out in f64 to keep large parts accurate.
pub fn convex_hull_volume(mesh: &Mesh) -> Option<f64> {
    if mesh.vertices.len() < 4 {
        return None;
    }

    let points: Vec<Point3<f32>> = mesh
        .vertices
        .iter()
        .map(|v| {
            Point3::new(
                v.position.x as f32,
                v.position.y as f32,
                v.position.z as f32,
            )
        })
        .collect();

    let (hull_vertices, hull_indices) = transformation::try_convex_hull(&points).ok()?;

    let mut volume = 0.0;
    for tri in &hull_indices {
        let a = to_f64(&hull_vertices[tri[0] as usize]);
        let b = to_f64(&hull_vertices[tri[1] as usize]);
        let c = to_f64(&hull_vertices[tri[2] as usize]);
        volume += a.dot(&b.cross(&c)) / 6.0;
    }

    Some(volume.abs())
}

fn to_f64(p: &Point3<f32>) -> Vector3<f64> {
    Vector3::new(p.x as f64, p.y as f64, p.z as f64)
}
