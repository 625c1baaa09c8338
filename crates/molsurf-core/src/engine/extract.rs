use super::grid::VoxelGrid;
use crate::core::tables::{EDGE_CORNERS, EDGE_TABLE, TRI_TABLE};
use nalgebra::Point3;

/// A vertex in grid space, carrying the owning atom's index in the input
/// slice (-1 if the grid point was never claimed).
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct GridVertex {
    pub position: Point3<f64>,
    pub owner: i32,
}

/// Table-driven marching cubes over the Finalized bit.
///
/// Vertices are not interpolated: the voxel classification is all-or-nothing,
/// so each cut edge's vertex snaps to the edge endpoint whose corner is
/// inside. With shared vertices (the default) one vertex exists per grid
/// point, reused by every cube edge that lands on it; triangles whose corners
/// collapse onto the same point are emitted anyway and left for the assembler
/// to drop. In `blocky` mode nothing is shared: every edge lookup mints a
/// fresh vertex, and triangles after a cube's first duplicate their corners
/// again, producing the faceted voxel look.
pub fn extract_surface(grid: &VoxelGrid, blocky: bool) -> (Vec<GridVertex>, Vec<[u32; 3]>) {
    let mut vertices: Vec<GridVertex> = Vec::new();
    let mut faces: Vec<[u32; 3]> = Vec::new();
    let mut vertex_memo = vec![-1i32; grid.cell_count()];
    let mut crossings = [0u32; 12];

    for x in 0..grid.length.saturating_sub(1) as i32 {
        for y in 0..grid.width.saturating_sub(1) as i32 {
            for z in 0..grid.height.saturating_sub(1) as i32 {
                // Corner bits: bit0 selects +z, bit1 +y, bit2 +x.
                let mut code = 0usize;
                for corner in 0..8i32 {
                    let cell = grid.index_of(
                        x + ((corner >> 2) & 1),
                        y + ((corner >> 1) & 1),
                        z + (corner & 1),
                    );
                    if grid.flags[cell].is_finalized() {
                        code |= 1 << corner;
                    }
                }
                if code == 0 || code == 255 {
                    continue;
                }
                let edge_mask = EDGE_TABLE[code];
                if edge_mask == 0 {
                    continue;
                }

                for (edge, &[c1, c2]) in EDGE_CORNERS.iter().enumerate() {
                    if edge_mask & (1 << edge) != 0 {
                        crossings[edge] = edge_vertex(
                            grid,
                            &mut vertices,
                            &mut vertex_memo,
                            blocky,
                            [x, y, z],
                            code,
                            c1,
                            c2,
                        );
                    }
                }

                for (triangle, corners) in TRI_TABLE[code].chunks_exact(3).enumerate() {
                    let mut a = crossings[corners[0] as usize];
                    let mut b = crossings[corners[1] as usize];
                    let mut c = crossings[corners[2] as usize];
                    if blocky && triangle > 0 {
                        a = duplicate(&mut vertices, a);
                        b = duplicate(&mut vertices, b);
                        c = duplicate(&mut vertices, c);
                    }
                    faces.push([a, b, c]);
                }
            }
        }
    }
    (vertices, faces)
}

/// Returns the vertex for a cut edge of the cube at `[x, y, z]`, creating it
/// if this grid point has none yet.
#[allow(clippy::too_many_arguments)]
fn edge_vertex(
    grid: &VoxelGrid,
    vertices: &mut Vec<GridVertex>,
    vertex_memo: &mut [i32],
    blocky: bool,
    cube: [i32; 3],
    code: usize,
    c1: u8,
    c2: u8,
) -> u32 {
    let inside1 = code & (1 << c1) != 0;
    let inside2 = code & (1 << c2) != 0;
    // Snap to the inside corner (c1 on ties; only cut edges reach here).
    let corner = i32::from(if !inside1 && inside2 { c2 } else { c1 });

    let vx = cube[0] + ((corner >> 2) & 1);
    let vy = cube[1] + ((corner >> 1) & 1);
    let vz = cube[2] + (corner & 1);
    let cell = grid.index_of(vx, vy, vz);

    let make = |grid: &VoxelGrid| GridVertex {
        position: Point3::new(vx as f64, vy as f64, vz as f64),
        owner: grid.owner[cell],
    };

    if blocky {
        vertices.push(make(grid));
        return (vertices.len() - 1) as u32;
    }
    if vertex_memo[cell] < 0 {
        vertex_memo[cell] = vertices.len() as i32;
        vertices.push(make(grid));
    }
    vertex_memo[cell] as u32
}

fn duplicate(vertices: &mut Vec<GridVertex>, index: u32) -> u32 {
    let copy = vertices[index as usize];
    vertices.push(copy);
    (vertices.len() - 1) as u32
}
