use super::grid::{CellFlags, VoxelGrid};
use super::profile::{OUTSIDE, ProfileTable};
use crate::core::models::atom::Atom;

const SIGNS: [i32; 2] = [-1, 1];

/// Rasterizes every atom into the grid as Occupied cells, then promotes the
/// whole occupied set to Finalized (the raw sphere-union classification that
/// stands until a distance pass refines it).
///
/// Cells claimed by more than one atom resolve ownership to whichever atom's
/// discretized center is nearest (squared lattice distance, first writer wins
/// ties).
pub fn fill_occupancy(grid: &mut VoxelGrid, atoms: &[Atom], profiles: &ProfileTable) {
    grid.reset();
    for atom_index in 0..atoms.len() {
        fill_atom(grid, atoms, atom_index, profiles, CellFlags::OCCUPIED);
    }
    for flags in &mut grid.flags {
        if flags.is_occupied() {
            flags.insert(CellFlags::FINALIZED);
        }
    }
}

/// Re-rasterizes the atoms with undilated profiles, rebuilding the Finalized
/// bit as the van der Waals union. Occupancy and distances from the dilated
/// pass are left untouched; this runs after the distance transform so the
/// mode selector can intersect the two classifications.
pub fn fill_vdw(grid: &mut VoxelGrid, atoms: &[Atom], profiles: &ProfileTable) {
    for flags in &mut grid.flags {
        flags.remove(CellFlags::FINALIZED);
    }
    for atom_index in 0..atoms.len() {
        fill_atom(grid, atoms, atom_index, profiles, CellFlags::FINALIZED);
    }
}

fn fill_atom(
    grid: &mut VoxelGrid,
    atoms: &[Atom],
    atom_index: usize,
    profiles: &ProfileTable,
    claim_bit: u8,
) {
    let atom = &atoms[atom_index];
    let [cx, cy, cz] = grid.discretize(&atom.position);
    let profile = profiles.get(atom.element);
    let extent = profile.width();

    for i in 0..extent {
        for j in 0..extent {
            let max_depth = profile.depth_at(i, j);
            if max_depth == OUTSIDE {
                continue;
            }
            for sx in SIGNS {
                for sy in SIGNS {
                    for sz in SIGNS {
                        // Profile index i sweeps x, the depth run sweeps y,
                        // and profile index j sweeps z. This axis assignment
                        // is an output contract: changing it moves which
                        // boundary cells exist and is visible in the mesh.
                        let dx = sx * i;
                        let dz = sz * j;
                        for k in 0..=max_depth {
                            let dy = sy * k;
                            let (gx, gy, gz) = (cx + dx, cy + dy, cz + dz);
                            if !grid.contains(gx, gy, gz) {
                                continue;
                            }
                            let cell = grid.index_of(gx, gy, gz);
                            if !grid.flags[cell].contains(claim_bit) {
                                grid.flags[cell].insert(claim_bit);
                                grid.owner[cell] = atom_index as i32;
                            } else {
                                resolve_ownership(
                                    grid,
                                    atoms,
                                    atom_index,
                                    cell,
                                    [gx, gy, gz],
                                    dx * dx + dy * dy + dz * dz,
                                );
                            }
                        }
                    }
                }
            }
        }
    }
}

/// Keeps the incumbent owner unless the candidate atom's squared lattice
/// offset to the cell is strictly smaller than the incumbent's offset from
/// its own discretized center.
fn resolve_ownership(
    grid: &mut VoxelGrid,
    atoms: &[Atom],
    candidate: usize,
    cell: usize,
    cell_coords: [i32; 3],
    candidate_offset_sq: i32,
) {
    let incumbent = grid.owner[cell];
    if incumbent < 0 {
        grid.owner[cell] = candidate as i32;
        return;
    }
    if incumbent as usize == candidate {
        return;
    }
    let [ox, oy, oz] = grid.discretize(&atoms[incumbent as usize].position);
    let incumbent_offset_sq = (cell_coords[0] - ox).pow(2)
        + (cell_coords[1] - oy).pow(2)
        + (cell_coords[2] - oz).pow(2);
    if candidate_offset_sq < incumbent_offset_sq {
        grid.owner[cell] = candidate as i32;
    }
}
