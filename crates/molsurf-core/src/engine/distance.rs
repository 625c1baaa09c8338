use super::grid::{CellFlags, NEIGHBORS, VoxelGrid};
use tracing::debug;

/// Active-set pruning slack: cells slightly past the cutoff keep expanding
/// for one more round so late relaxations can still converge.
const OVER_RELAXATION: f64 = 1.0404;

/// Computes, for every Occupied cell, the squared lattice distance to the
/// nearest cell of the initial boundary shell, then re-flags Boundary on the
/// cells that fall outside the probe-radius envelope.
///
/// This is a multi-source shortest-path expansion, not a strict BFS: each
/// wavefront cell carries its nearest boundary point, neighbors adopt it and
/// may later be relaxed retroactively when a closer boundary point arrives.
/// Neighbors are visited in three bands (6 faces, 12 edges, 8 corners); the
/// band order decides which boundary point is recorded first on ties and must
/// not change.
pub fn propagate_distance_field(grid: &mut VoxelGrid, probe_radius: f64) {
    let cut_radius_sq = (probe_radius * grid.scale_factor).powi(2);

    // Scratch per-cell nearest-boundary-point record, dropped with this stage.
    let mut boundary_point: Vec<[i32; 3]> = vec![[0, 0, 0]; grid.cell_count()];
    let mut wavefront: Vec<[i32; 3]> = Vec::new();

    for x in 0..grid.length as i32 {
        for y in 0..grid.width as i32 {
            for z in 0..grid.height as i32 {
                let cell = grid.index_of(x, y, z);
                grid.flags[cell].remove(CellFlags::FINALIZED);
                if grid.flags[cell].contains(CellFlags::OCCUPIED | CellFlags::BOUNDARY) {
                    boundary_point[cell] = [x, y, z];
                    grid.distance_sq[cell] = 0.0;
                    grid.flags[cell].insert(CellFlags::FINALIZED);
                    grid.flags[cell].remove(CellFlags::BOUNDARY);
                    wavefront.push([x, y, z]);
                }
            }
        }
    }

    let keep_active = OVER_RELAXATION * cut_radius_sq;
    let mut shell = 0usize;
    while !wavefront.is_empty() {
        let reached = expand_shell(grid, &wavefront, &mut boundary_point);
        shell += 1;
        debug!(shell, reached = reached.len(), "distance wavefront advanced");

        wavefront.clear();
        for cell_coords in reached {
            let cell = grid.index_of(cell_coords[0], cell_coords[1], cell_coords[2]);
            grid.flags[cell].remove(CellFlags::BOUNDARY);
            if grid.distance_sq[cell] <= keep_active {
                wavefront.push(cell_coords);
            }
        }
    }

    // Cells the wavefront never settled, or settled at or past the cutoff,
    // lie outside the solvent-excluded interior.
    let cut_slack = (grid.scale_factor - 0.5).max(0.0);
    let cutoff = cut_radius_sq - 0.5 / (0.1 + cut_slack);
    for cell in 0..grid.cell_count() {
        grid.flags[cell].remove(CellFlags::BOUNDARY);
        if grid.flags[cell].is_occupied()
            && (!grid.flags[cell].is_finalized() || grid.distance_sq[cell] >= cutoff)
        {
            grid.flags[cell].insert(CellFlags::BOUNDARY);
        }
    }
}

/// Expands the wavefront by one shell, returning the cells whose distance was
/// written or improved. Each band fully sweeps the wavefront before the next
/// band starts.
fn expand_shell(
    grid: &mut VoxelGrid,
    wavefront: &[[i32; 3]],
    boundary_point: &mut [[i32; 3]],
) -> Vec<[i32; 3]> {
    let mut reached = Vec::new();
    for band in [0..6, 6..18, 18..26] {
        for &[x, y, z] in wavefront {
            let origin = boundary_point[grid.index_of(x, y, z)];
            for &[dx, dy, dz] in &NEIGHBORS[band.clone()] {
                let (nx, ny, nz) = (x + dx, y + dy, z + dz);
                if !grid.contains(nx, ny, nz) {
                    continue;
                }
                let cell = grid.index_of(nx, ny, nz);
                if !grid.flags[cell].is_occupied() {
                    continue;
                }
                let offset_sq = ((nx - origin[0]).pow(2)
                    + (ny - origin[1]).pow(2)
                    + (nz - origin[2]).pow(2)) as f64;

                if !grid.flags[cell].is_finalized() {
                    boundary_point[cell] = origin;
                    grid.distance_sq[cell] = offset_sq;
                    grid.flags[cell].insert(CellFlags::FINALIZED | CellFlags::BOUNDARY);
                    reached.push([nx, ny, nz]);
                } else if offset_sq < grid.distance_sq[cell] {
                    boundary_point[cell] = origin;
                    grid.distance_sq[cell] = offset_sq;
                    if !grid.flags[cell].is_boundary() {
                        grid.flags[cell].insert(CellFlags::BOUNDARY);
                        reached.push([nx, ny, nz]);
                    }
                }
            }
        }
    }
    reached
}
