use super::extract::GridVertex;
use super::grid::VoxelGrid;
use crate::core::models::atom::Atom;
use crate::core::models::mesh::{MeshVertex, SurfaceMesh};
use std::collections::HashSet;

/// Maps the extracted grid-space mesh back to world coordinates and filters
/// the face list down to the caller's visible atoms.
///
/// Every vertex is kept (faces index into the full list); a triangle survives
/// when its three indices are distinct and the smallest atom id among its
/// vertices is in `visible_ids`. Ownership recorded as a slice index during
/// rasterization is resolved to the external atom id here.
pub fn assemble_mesh(
    grid: &VoxelGrid,
    atoms: &[Atom],
    grid_vertices: Vec<GridVertex>,
    faces: Vec<[u32; 3]>,
    visible_ids: &HashSet<i32>,
) -> SurfaceMesh {
    let vertices: Vec<MeshVertex> = grid_vertices
        .into_iter()
        .map(|vertex| MeshVertex {
            position: grid.to_world(&vertex.position),
            atom_id: if vertex.owner >= 0 {
                atoms[vertex.owner as usize].id
            } else {
                -1
            },
        })
        .collect();

    let mut kept = Vec::with_capacity(faces.len());
    for [a, b, c] in faces {
        if a == b || b == c || a == c {
            continue;
        }
        let owner = vertices[a as usize]
            .atom_id
            .min(vertices[b as usize].atom_id)
            .min(vertices[c as usize].atom_id);
        if visible_ids.contains(&owner) {
            kept.push([a, b, c]);
        }
    }

    SurfaceMesh {
        vertices,
        faces: kept,
    }
}
