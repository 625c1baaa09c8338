use nalgebra::Point3;
use serde::{Deserialize, Serialize};

/// A mesh vertex in world coordinates, tagged with the id of the atom whose
/// sphere owns the grid cell it was extracted from. A vertex on a grid point
/// never claimed by any atom carries id -1.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct MeshVertex {
    pub position: Point3<f64>,
    pub atom_id: i32,
}

/// The triangulated surface produced by the pipeline.
///
/// `faces` holds index triples into `vertices`, in extraction order. The
/// vertex list is complete (unfiltered); the face list contains only
/// triangles whose owning atom is in the caller's visible set, with
/// degenerate triangles removed.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct SurfaceMesh {
    pub vertices: Vec<MeshVertex>,
    pub faces: Vec<[u32; 3]>,
}

impl SurfaceMesh {
    pub fn is_empty(&self) -> bool {
        self.vertices.is_empty()
    }
}
