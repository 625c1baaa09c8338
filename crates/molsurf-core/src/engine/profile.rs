use crate::core::models::element::Element;

/// Sentinel depth meaning a lattice offset lies outside the sphere footprint.
pub const OUTSIDE: i32 = -1;

/// Precomputed sphere footprint for one element at grid resolution.
///
/// For a lattice offset `(i, j)` inside the bounding square, `depth_at(i, j)`
/// is the largest depth `k` with `i^2 + j^2 + k^2` still inside the (possibly
/// probe-dilated) sphere, or [`OUTSIDE`]. The rasterizer sweeps this quarter
/// profile over all eight sign octants, so only non-negative offsets are
/// stored.
#[derive(Debug, Clone)]
pub struct RadiusProfile {
    width: i32,
    depth: Vec<i32>,
}

impl RadiusProfile {
    fn build(radius: f64, probe_radius: f64, scale_factor: f64) -> Self {
        // The half-cell bias keeps spheres from losing their outermost
        // lattice shell to truncation.
        let lattice_radius = (radius + probe_radius) * scale_factor + 0.5;
        let radius_sq = lattice_radius * lattice_radius;
        let width = lattice_radius.floor() as i32 + 1;

        let mut depth = Vec::with_capacity((width * width) as usize);
        for j in 0..width {
            for k in 0..width {
                let offset_sq = (j * j + k * k) as f64;
                if offset_sq > radius_sq {
                    depth.push(OUTSIDE);
                } else {
                    depth.push((radius_sq - offset_sq).sqrt().floor() as i32);
                }
            }
        }
        Self { width, depth }
    }

    /// Side of the bounding square, in cells.
    pub fn width(&self) -> i32 {
        self.width
    }

    #[inline]
    pub fn depth_at(&self, i: i32, j: i32) -> i32 {
        self.depth[(i * self.width + j) as usize]
    }
}

/// Radius profiles for every element, built once per surface computation.
///
/// Indexed by the fixed [`Element`] enum, so lookup is a plain array access
/// and unknown elements hit the fallback profile like any other variant.
#[derive(Debug, Clone)]
pub struct ProfileTable {
    profiles: Vec<RadiusProfile>,
}

impl ProfileTable {
    /// Builds profiles at the given resolution. Pass `probe_radius` 0.0 for
    /// undilated van der Waals footprints.
    pub fn new(scale_factor: f64, probe_radius: f64) -> Self {
        let profiles = Element::ALL
            .iter()
            .map(|element| RadiusProfile::build(element.vdw_radius(), probe_radius, scale_factor))
            .collect();
        Self { profiles }
    }

    pub fn get(&self, element: Element) -> &RadiusProfile {
        &self.profiles[element as usize]
    }
}
