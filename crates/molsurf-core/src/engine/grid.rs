use super::error::SurfaceError;
use crate::core::models::atom::BoundingExtent;
use nalgebra::{Point3, Vector3};

/// Per-cell classification flags.
///
/// A cell's state is a set over {Occupied, Finalized, Boundary}, not a single
/// enum: the pipeline routinely holds combinations such as
/// Occupied-and-Boundary (a shell cell) or Occupied-and-Finalized (a settled
/// interior cell), and the surface-mode selector reinterprets the combinations
/// wholesale.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct CellFlags(u8);

impl CellFlags {
    /// Inside at least one atom's (possibly probe-dilated) sphere.
    pub const OCCUPIED: u8 = 1;
    /// Classification/distance settled for the current pass. The extractor
    /// reads this bit as the inside/outside classification.
    pub const FINALIZED: u8 = 2;
    /// On the occupied/empty interface (or, after distance finalization,
    /// beyond the solvent-exclusion cutoff).
    pub const BOUNDARY: u8 = 4;

    pub fn contains(self, bits: u8) -> bool {
        self.0 & bits == bits
    }

    pub fn insert(&mut self, bits: u8) {
        self.0 |= bits;
    }

    pub fn remove(&mut self, bits: u8) {
        self.0 &= !bits;
    }

    pub fn is_occupied(self) -> bool {
        self.contains(Self::OCCUPIED)
    }

    pub fn is_finalized(self) -> bool {
        self.contains(Self::FINALIZED)
    }

    pub fn is_boundary(self) -> bool {
        self.contains(Self::BOUNDARY)
    }
}

/// 26-connected neighborhood offsets: 6 face neighbors, then 12 edge
/// neighbors, then 8 corner neighbors. The distance propagator visits these
/// in band order, which fixes which nearest-boundary-point wins ties; the
/// order is part of the reproducibility contract.
pub const NEIGHBORS: [[i32; 3]; 26] = [
    [1, 0, 0],
    [-1, 0, 0],
    [0, 1, 0],
    [0, -1, 0],
    [0, 0, 1],
    [0, 0, -1],
    [1, 1, 0],
    [1, -1, 0],
    [-1, 1, 0],
    [-1, -1, 0],
    [1, 0, 1],
    [1, 0, -1],
    [-1, 0, 1],
    [-1, 0, -1],
    [0, 1, 1],
    [0, 1, -1],
    [0, -1, 1],
    [0, -1, -1],
    [1, 1, 1],
    [1, 1, -1],
    [1, -1, 1],
    [-1, 1, 1],
    [1, -1, -1],
    [-1, -1, 1],
    [-1, 1, -1],
    [-1, -1, -1],
];

/// The dense voxel lattice a surface computation runs on.
///
/// Three same-sized arrays hold per-cell flags, squared distance to the
/// nearest boundary cell (valid once Finalized; -1.0 before), and the index
/// of the owning atom in the caller's slice (-1 while unclaimed). Cells are
/// addressed as `(x * width + y) * height + z`.
///
/// The grid covers the atom extent expanded by a fixed margin (and by the
/// probe radius for dilated surfaces) to keep the surface away from the
/// lattice edge, with the bounds snapped outward to whole voxels.
#[derive(Debug, Clone)]
pub struct VoxelGrid {
    /// Cell count along x.
    pub length: usize,
    /// Cell count along y.
    pub width: usize,
    /// Cell count along z.
    pub height: usize,
    /// Cells per Angstrom.
    pub scale_factor: f64,
    /// World offset added before scaling; grid = scale * (world + translation).
    pub translation: Vector3<f64>,
    pub flags: Vec<CellFlags>,
    pub distance_sq: Vec<f64>,
    pub owner: Vec<i32>,
}

impl VoxelGrid {
    /// Margin in Angstroms at scale 1, shrinking with resolution. Keeps
    /// boundary detection and rasterization clear of edge round-off.
    const MARGIN: f64 = 5.5;

    pub fn new(
        extent: &BoundingExtent,
        scale_factor: f64,
        probe_radius: f64,
        dilate: bool,
    ) -> Result<Self, SurfaceError> {
        let margin = Self::MARGIN / scale_factor;
        let pad = if dilate { margin + probe_radius } else { margin };

        let mut min = [0.0f64; 3];
        let mut max = [0.0f64; 3];
        for axis in 0..3 {
            min[axis] = ((extent.min[axis] - pad) * scale_factor).floor() / scale_factor;
            max[axis] = ((extent.max[axis] + pad) * scale_factor).ceil() / scale_factor;
        }

        let length = (scale_factor * (max[0] - min[0])).ceil() as usize + 1;
        let width = (scale_factor * (max[1] - min[1])).ceil() as usize + 1;
        let height = (scale_factor * (max[2] - min[2])).ceil() as usize + 1;

        let cells = length
            .checked_mul(width)
            .and_then(|v| v.checked_mul(height))
            .ok_or(SurfaceError::GridTooLarge {
                length,
                width,
                height,
            })?;

        Ok(Self {
            length,
            width,
            height,
            scale_factor,
            translation: Vector3::new(-min[0], -min[1], -min[2]),
            flags: vec![CellFlags::default(); cells],
            distance_sq: vec![-1.0; cells],
            owner: vec![-1; cells],
        })
    }

    /// A bare grid for stage-level tests, bypassing extent geometry.
    #[cfg(test)]
    pub fn with_dims(length: usize, width: usize, height: usize, scale_factor: f64) -> Self {
        let cells = length * width * height;
        Self {
            length,
            width,
            height,
            scale_factor,
            translation: Vector3::zeros(),
            flags: vec![CellFlags::default(); cells],
            distance_sq: vec![-1.0; cells],
            owner: vec![-1; cells],
        }
    }

    pub fn cell_count(&self) -> usize {
        self.flags.len()
    }

    #[inline]
    pub fn index_of(&self, x: i32, y: i32, z: i32) -> usize {
        (x as usize * self.width + y as usize) * self.height + z as usize
    }

    #[inline]
    pub fn contains(&self, x: i32, y: i32, z: i32) -> bool {
        x >= 0
            && y >= 0
            && z >= 0
            && (x as usize) < self.length
            && (y as usize) < self.width
            && (z as usize) < self.height
    }

    /// Nearest lattice point to a world position.
    #[inline]
    pub fn discretize(&self, position: &Point3<f64>) -> [i32; 3] {
        [
            (0.5 + self.scale_factor * (position.x + self.translation.x)).floor() as i32,
            (0.5 + self.scale_factor * (position.y + self.translation.y)).floor() as i32,
            (0.5 + self.scale_factor * (position.z + self.translation.z)).floor() as i32,
        ]
    }

    /// Grid-space point back to world coordinates.
    #[inline]
    pub fn to_world(&self, grid_point: &Point3<f64>) -> Point3<f64> {
        Point3::new(
            grid_point.x / self.scale_factor - self.translation.x,
            grid_point.y / self.scale_factor - self.translation.y,
            grid_point.z / self.scale_factor - self.translation.z,
        )
    }

    /// Clears flags, distances, and ownership for a fresh occupancy pass.
    pub fn reset(&mut self) {
        self.flags.fill(CellFlags::default());
        self.distance_sq.fill(-1.0);
        self.owner.fill(-1);
    }
}
