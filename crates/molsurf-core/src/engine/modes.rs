use super::config::SurfaceKind;
use super::grid::{CellFlags, VoxelGrid};

/// Reinterprets the accumulated cell flags so that the Finalized bit means
/// "inside the requested surface", which is the one bit the extractor reads.
///
/// - Van der Waals and solvent-accessible surfaces take the rasterized union
///   as-is and only discard leftover Boundary marks.
/// - The solvent-excluded surface replaces the classification wholesale with
///   the exclusion shell the distance pass flagged.
/// - The molecular surface intersects the van der Waals re-rasterization with
///   that shell: excluded van-der-Waals cells stay inside, excluded empty
///   cells are pulled inside.
pub fn apply_surface_mode(grid: &mut VoxelGrid, kind: SurfaceKind) {
    for flags in &mut grid.flags {
        match kind {
            SurfaceKind::VanDerWaals | SurfaceKind::SolventAccessible => {
                flags.remove(CellFlags::BOUNDARY);
            }
            SurfaceKind::SolventExcluded => {
                flags.remove(CellFlags::FINALIZED);
                if flags.is_boundary() {
                    flags.insert(CellFlags::FINALIZED);
                }
                flags.remove(CellFlags::BOUNDARY);
            }
            SurfaceKind::Molecular => {
                if flags.is_boundary() && flags.is_finalized() {
                    flags.remove(CellFlags::BOUNDARY);
                } else if flags.is_boundary() {
                    flags.insert(CellFlags::FINALIZED);
                }
            }
        }
    }
}
