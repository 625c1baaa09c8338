use super::extract::GridVertex;
use nalgebra::{Point3, Vector3};

/// Adjacency slots tracked per vertex. Neighbors past the cap silently do not
/// participate in relaxation; marching-cubes vertices stay far below it, and
/// the fixed bound keeps the adjacency table one flat allocation.
pub const MAX_TRACKED_NEIGHBORS: usize = 19;

/// Umbrella-operator Laplacian relaxation with valence-dependent damping.
///
/// Each pass moves every vertex of degree >= 3 to the weighted average of its
/// face-edge neighbors and itself (self-weight 0.5 for degree 3-4, else 1.0);
/// vertices of lower degree stay put. All updates within a pass read the
/// previous positions, so the result does not depend on vertex order. There
/// is no displacement along normals; the surface contracts slightly toward
/// its local centroids.
pub fn laplacian_smooth(vertices: &mut [GridVertex], faces: &[[u32; 3]], iterations: usize) {
    if vertices.is_empty() || iterations == 0 {
        return;
    }

    let mut degree = vec![0u8; vertices.len()];
    let mut adjacency = vec![[0u32; MAX_TRACKED_NEIGHBORS]; vertices.len()];
    for &[a, b, c] in faces {
        track_neighbor(&mut degree, &mut adjacency, a, b);
        track_neighbor(&mut degree, &mut adjacency, a, c);
        track_neighbor(&mut degree, &mut adjacency, b, a);
        track_neighbor(&mut degree, &mut adjacency, b, c);
        track_neighbor(&mut degree, &mut adjacency, c, a);
        track_neighbor(&mut degree, &mut adjacency, c, b);
    }

    let mut relaxed = vec![Point3::origin(); vertices.len()];
    for _ in 0..iterations {
        for (index, vertex) in vertices.iter().enumerate() {
            let valence = degree[index] as usize;
            if valence < 3 {
                relaxed[index] = vertex.position;
                continue;
            }
            let self_weight = if valence <= 4 { 0.5 } else { 1.0 };
            let mut sum = Vector3::zeros();
            for &neighbor in &adjacency[index][..valence] {
                sum += vertices[neighbor as usize].position.coords;
            }
            sum += vertex.position.coords * self_weight;
            relaxed[index] = Point3::from(sum / (self_weight + valence as f64));
        }
        for (vertex, position) in vertices.iter_mut().zip(&relaxed) {
            vertex.position = *position;
        }
    }
}

/// Records `neighbor` in `vertex`'s adjacency list, skipping duplicates and
/// self-loops from degenerate faces.
fn track_neighbor(
    degree: &mut [u8],
    adjacency: &mut [[u32; MAX_TRACKED_NEIGHBORS]],
    vertex: u32,
    neighbor: u32,
) {
    if vertex == neighbor {
        return;
    }
    let slot = vertex as usize;
    let valence = degree[slot] as usize;
    if adjacency[slot][..valence].contains(&neighbor) {
        return;
    }
    if valence < MAX_TRACKED_NEIGHBORS {
        adjacency[slot][valence] = neighbor;
        degree[slot] = (valence + 1) as u8;
    }
}
