use super::grid::{CellFlags, NEIGHBORS, VoxelGrid};

/// Flags every Occupied cell that touches empty space.
///
/// A cell is Boundary when any of its 26 in-bounds neighbors is not Occupied.
/// Out-of-bounds neighbors do not count as empty, so a region flush against
/// the lattice edge grows no boundary there (the construction margin makes
/// that case unreachable for real input). One pass, no iteration.
pub fn detect_boundary(grid: &mut VoxelGrid) {
    for x in 0..grid.length as i32 {
        for y in 0..grid.width as i32 {
            for z in 0..grid.height as i32 {
                let cell = grid.index_of(x, y, z);
                if !grid.flags[cell].is_occupied() {
                    continue;
                }
                for [dx, dy, dz] in NEIGHBORS {
                    let (nx, ny, nz) = (x + dx, y + dy, z + dz);
                    if grid.contains(nx, ny, nz)
                        && !grid.flags[grid.index_of(nx, ny, nz)].is_occupied()
                    {
                        grid.flags[cell].insert(CellFlags::BOUNDARY);
                        break;
                    }
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    /// 10^3 grid with a centered 3x3x3 occupied block.
    fn block_grid() -> VoxelGrid {
        let mut grid = VoxelGrid::with_dims(10, 10, 10, 1.0);
        for x in 4..7 {
            for y in 4..7 {
                for z in 4..7 {
                    let cell = grid.index_of(x, y, z);
                    grid.flags[cell].insert(CellFlags::OCCUPIED);
                }
            }
        }
        grid
    }

    #[test]
    fn shell_cells_are_boundary_and_core_is_not() {
        let mut grid = block_grid();
        detect_boundary(&mut grid);

        // The 3^3 block has exactly one interior cell.
        let core = grid.index_of(5, 5, 5);
        assert!(!grid.flags[core].is_boundary());

        let mut boundary_count = 0;
        for flags in &grid.flags {
            if flags.is_boundary() {
                assert!(flags.is_occupied());
                boundary_count += 1;
            }
        }
        assert_eq!(boundary_count, 26);
    }

    #[test]
    fn empty_cells_are_never_flagged() {
        let mut grid = block_grid();
        detect_boundary(&mut grid);
        for flags in &grid.flags {
            if !flags.is_occupied() {
                assert!(!flags.is_boundary());
            }
        }
    }

    #[test]
    fn detection_is_idempotent() {
        let mut grid = block_grid();
        detect_boundary(&mut grid);
        let first_pass = grid.flags.clone();
        detect_boundary(&mut grid);
        assert_eq!(grid.flags, first_pass);
    }

    #[test]
    fn fully_occupied_grid_has_no_boundary() {
        let mut grid = VoxelGrid::with_dims(4, 4, 4, 1.0);
        for flags in &mut grid.flags {
            flags.insert(CellFlags::OCCUPIED);
        }
        detect_boundary(&mut grid);
        assert!(grid.flags.iter().all(|f| !f.is_boundary()));
    }

    #[test]
    fn isolated_single_cell_is_boundary() {
        let mut grid = VoxelGrid::with_dims(5, 5, 5, 1.0);
        let cell = grid.index_of(2, 2, 2);
        grid.flags[cell].insert(CellFlags::OCCUPIED);
        detect_boundary(&mut grid);
        assert!(grid.flags[cell].is_boundary());
    }
}
