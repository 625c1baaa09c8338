use super::error::SurfaceError;
use serde::{Deserialize, Serialize};

/// The surface definition to triangulate.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum SurfaceKind {
    /// Union of the atoms' van der Waals spheres.
    VanDerWaals,
    /// The molecular surface: the van der Waals union re-classified against
    /// the solvent-exclusion shell computed by the distance transform.
    Molecular,
    /// Union of probe-dilated spheres (the probe center's reachable envelope).
    SolventAccessible,
    /// The solvent-excluded surface proper.
    #[default]
    SolventExcluded,
}

impl SurfaceKind {
    /// Whether occupancy is rasterized with probe-dilated radius profiles.
    pub fn is_probe_dilated(self) -> bool {
        !matches!(self, SurfaceKind::VanDerWaals)
    }

    /// Whether the squared-distance field (and the subsequent van der Waals
    /// re-rasterization) must be computed before extraction.
    pub fn uses_distance_field(self) -> bool {
        matches!(self, SurfaceKind::SolventExcluded | SurfaceKind::Molecular)
    }
}

/// Parameters for one surface computation.
///
/// The defaults reproduce the reference setup: a 0.5 Angstrom grid
/// (`scale_factor` 2.0), a 1.4 Angstrom water probe, and a single smoothing
/// pass.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct SurfaceConfig {
    pub kind: SurfaceKind,
    /// Grid cells per Angstrom.
    pub scale_factor: f64,
    /// Radius of the notional solvent sphere, in Angstroms.
    pub probe_radius: f64,
    /// Laplacian relaxation passes applied to the extracted mesh.
    pub smoothing_iterations: usize,
    /// Duplicate vertices per cube instead of sharing them along cut edges,
    /// for a faceted voxel-style mesh.
    pub blocky: bool,
}

impl Default for SurfaceConfig {
    fn default() -> Self {
        Self {
            kind: SurfaceKind::default(),
            scale_factor: 2.0,
            probe_radius: 1.4,
            smoothing_iterations: 1,
            blocky: false,
        }
    }
}

impl SurfaceConfig {
    pub fn validate(&self) -> Result<(), SurfaceError> {
        if !self.scale_factor.is_finite() || self.scale_factor <= 0.0 {
            return Err(SurfaceError::InvalidParameter {
                name: "scale_factor",
                value: self.scale_factor,
                requirement: "finite and positive",
            });
        }
        if !self.probe_radius.is_finite() || self.probe_radius < 0.0 {
            return Err(SurfaceError::InvalidParameter {
                name: "probe_radius",
                value: self.probe_radius,
                requirement: "finite and non-negative",
            });
        }
        Ok(())
    }
}

/// Builder for [`SurfaceConfig`], starting from the defaults.
#[derive(Debug, Default)]
pub struct SurfaceConfigBuilder {
    config: SurfaceConfig,
}

impl SurfaceConfigBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn kind(mut self, kind: SurfaceKind) -> Self {
        self.config.kind = kind;
        self
    }
    pub fn scale_factor(mut self, scale_factor: f64) -> Self {
        self.config.scale_factor = scale_factor;
        self
    }
    pub fn probe_radius(mut self, probe_radius: f64) -> Self {
        self.config.probe_radius = probe_radius;
        self
    }
    pub fn smoothing_iterations(mut self, iterations: usize) -> Self {
        self.config.smoothing_iterations = iterations;
        self
    }
    pub fn blocky(mut self, blocky: bool) -> Self {
        self.config.blocky = blocky;
        self
    }

    pub fn build(self) -> Result<SurfaceConfig, SurfaceError> {
        self.config.validate()?;
        Ok(self.config)
    }
}
