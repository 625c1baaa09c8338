use thiserror::Error;

/// Errors a surface computation can report.
///
/// The pipeline itself is total: malformed geometry degrades to an empty mesh
/// rather than failing (unknown elements fall back to a default radius,
/// out-of-grid offsets are clipped, degenerate triangles are dropped). What
/// remains is configuration validation and the guard against unallocatable
/// grids.
#[derive(Debug, Error, Clone, PartialEq)]
pub enum SurfaceError {
    #[error("invalid {name}: {value} (must be {requirement})")]
    InvalidParameter {
        name: &'static str,
        value: f64,
        requirement: &'static str,
    },

    #[error("voxel grid of {length}x{width}x{height} cells exceeds addressable size")]
    GridTooLarge {
        length: usize,
        width: usize,
        height: usize,
    },
}
