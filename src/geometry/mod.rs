// SPDX-License-Identifier: Apache-2.0
// Copyright (c) 2025 Polyframe Inc.

//! Geometry module - mesh representation and measurement

mod bbox;
mod hull;
mod mesh;
mod metrics;
mod primitives;

pub use bbox::BoundingBox;
pub use hull::convex_hull_volume;
pub use mesh::{Mesh, Triangle, Vertex};
pub use metrics::{measure, PartGeometry};
pub use primitives::Primitive;
