use crate::core::models::atom::{Atom, BoundingExtent};
use crate::core::models::mesh::SurfaceMesh;
use crate::engine::assemble::assemble_mesh;
use crate::engine::boundary::detect_boundary;
use crate::engine::config::SurfaceConfig;
use crate::engine::distance::propagate_distance_field;
use crate::engine::error::SurfaceError;
use crate::engine::extract::extract_surface;
use crate::engine::grid::VoxelGrid;
use crate::engine::modes::apply_surface_mode;
use crate::engine::profile::ProfileTable;
use crate::engine::rasterize::{fill_occupancy, fill_vdw};
use crate::engine::smooth::laplacian_smooth;
use std::collections::HashSet;
use tracing::{info, instrument};

/// Computes the requested molecular surface over `atoms` as a triangle mesh
/// in world coordinates.
///
/// `extent` is the axis-aligned bounding box of the atom centers (callers
/// usually track it already; see [`BoundingExtent::from_atoms`]). Only
/// triangles owned by an atom id in `visible_ids` appear in the result's face
/// list; the vertex list is always complete.
///
/// The whole computation is synchronous and single-pass: one voxel grid is
/// allocated, threaded through the pipeline stages, and dropped before this
/// function returns. An empty atom slice yields an empty mesh.
///
/// # Errors
///
/// Returns [`SurfaceError::InvalidParameter`] for an invalid configuration
/// and [`SurfaceError::GridTooLarge`] when the extent at the requested scale
/// exceeds addressable memory.
#[instrument(skip_all, name = "surface_workflow", fields(kind = ?config.kind, atoms = atoms.len()))]
pub fn generate_surface(
    atoms: &[Atom],
    extent: &BoundingExtent,
    visible_ids: &HashSet<i32>,
    config: &SurfaceConfig,
) -> Result<SurfaceMesh, SurfaceError> {
    config.validate()?;
    if atoms.is_empty() {
        info!("no atoms to triangulate, returning an empty mesh");
        return Ok(SurfaceMesh::default());
    }

    // === Phase 1: Occupancy ===
    let dilated = config.kind.is_probe_dilated();
    let mut grid = VoxelGrid::new(extent, config.scale_factor, config.probe_radius, dilated)?;
    info!(
        length = grid.length,
        width = grid.width,
        height = grid.height,
        cells = grid.cell_count(),
        "allocated voxel grid"
    );

    let probe = if dilated { config.probe_radius } else { 0.0 };
    let profiles = ProfileTable::new(config.scale_factor, probe);
    fill_occupancy(&mut grid, atoms, &profiles);
    detect_boundary(&mut grid);

    // === Phase 2: Solvent exclusion (distance transform + vdW re-fill) ===
    if config.kind.uses_distance_field() {
        propagate_distance_field(&mut grid, config.probe_radius);
        let vdw_profiles = ProfileTable::new(config.scale_factor, 0.0);
        fill_vdw(&mut grid, atoms, &vdw_profiles);
    }

    // === Phase 3: Classification and extraction ===
    apply_surface_mode(&mut grid, config.kind);
    let (mut vertices, faces) = extract_surface(&grid, config.blocky);
    info!(
        vertices = vertices.len(),
        faces = faces.len(),
        "isosurface extracted"
    );

    // === Phase 4: Relaxation and assembly ===
    laplacian_smooth(&mut vertices, &faces, config.smoothing_iterations);
    let mesh = assemble_mesh(&grid, atoms, vertices, faces, visible_ids);
    info!(
        vertices = mesh.vertices.len(),
        faces = mesh.faces.len(),
        "surface mesh assembled"
    );
    Ok(mesh)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::models::element::Element;
    use crate::engine::config::{SurfaceConfigBuilder, SurfaceKind};
    use nalgebra::Point3;
    use std::collections::HashMap;

    fn carbon(id: i32, x: f64, y: f64, z: f64) -> Atom {
        Atom::new(id, Element::Carbon, Point3::new(x, y, z))
    }

    fn surface_of(atoms: &[Atom], config: &SurfaceConfig) -> SurfaceMesh {
        let extent = BoundingExtent::from_atoms(atoms);
        let visible: HashSet<i32> = atoms.iter().map(|a| a.id).collect();
        generate_surface(atoms, &extent, &visible, config).unwrap()
    }

    /// Counts how many faces touch each undirected vertex-pair edge.
    fn edge_incidence(faces: &[[u32; 3]]) -> HashMap<(u32, u32), usize> {
        let mut incidence = HashMap::new();
        for &[a, b, c] in faces {
            for (u, v) in [(a, b), (b, c), (c, a)] {
                let key = (u.min(v), u.max(v));
                *incidence.entry(key).or_insert(0) += 1;
            }
        }
        incidence
    }

    /// Number of connected components among vertices referenced by faces.
    fn face_component_count(vertex_count: usize, faces: &[[u32; 3]]) -> usize {
        let mut parent: Vec<usize> = (0..vertex_count).collect();
        fn find(parent: &mut Vec<usize>, mut x: usize) -> usize {
            while parent[x] != x {
                parent[x] = parent[parent[x]];
                x = parent[x];
            }
            x
        }
        for &[a, b, c] in faces {
            for (u, v) in [(a, b), (b, c)] {
                let (ru, rv) = (find(&mut parent, u as usize), find(&mut parent, v as usize));
                if ru != rv {
                    parent[ru] = rv;
                }
            }
        }
        let mut roots = HashSet::new();
        for &[a, b, c] in faces {
            for v in [a, b, c] {
                let root = find(&mut parent, v as usize);
                roots.insert(root);
            }
        }
        roots.len()
    }

    #[test]
    fn empty_atom_list_yields_empty_mesh() {
        let extent = BoundingExtent::from_atoms(&[]);
        let mesh =
            generate_surface(&[], &extent, &HashSet::new(), &SurfaceConfig::default()).unwrap();
        assert!(mesh.is_empty());
        assert!(mesh.faces.is_empty());
    }

    #[test]
    fn invalid_config_is_rejected_before_any_work() {
        let atoms = [carbon(0, 0.0, 0.0, 0.0)];
        let extent = BoundingExtent::from_atoms(&atoms);
        let mut config = SurfaceConfig::default();
        config.scale_factor = -1.0;
        let result = generate_surface(&atoms, &extent, &HashSet::from([0]), &config);
        assert!(matches!(
            result,
            Err(SurfaceError::InvalidParameter { .. })
        ));
    }

    #[test]
    fn single_atom_vdw_mesh_is_a_closed_two_manifold() {
        let config = SurfaceConfigBuilder::new()
            .kind(SurfaceKind::VanDerWaals)
            .build()
            .unwrap();
        let mesh = surface_of(&[carbon(0, 0.0, 0.0, 0.0)], &config);

        assert!(!mesh.vertices.is_empty());
        assert!(!mesh.faces.is_empty());
        for (edge, count) in edge_incidence(&mesh.faces) {
            assert_eq!(count, 2, "edge {edge:?} not shared by exactly two faces");
        }
    }

    #[test]
    fn single_atom_vertices_all_carry_its_id() {
        let config = SurfaceConfigBuilder::new()
            .kind(SurfaceKind::VanDerWaals)
            .build()
            .unwrap();
        let mesh = surface_of(&[carbon(42, 0.0, 0.0, 0.0)], &config);
        for vertex in &mesh.vertices {
            assert_eq!(vertex.atom_id, 42);
        }
    }

    #[test]
    fn identical_input_produces_bit_identical_output() {
        let atoms = [
            carbon(0, 0.0, 0.0, 0.0),
            carbon(1, 2.0, 0.5, -0.5),
            Atom::new(2, Element::Oxygen, Point3::new(-1.0, 1.0, 1.0)),
        ];
        for kind in [
            SurfaceKind::VanDerWaals,
            SurfaceKind::Molecular,
            SurfaceKind::SolventAccessible,
            SurfaceKind::SolventExcluded,
        ] {
            let config = SurfaceConfigBuilder::new().kind(kind).build().unwrap();
            let first = surface_of(&atoms, &config);
            let second = surface_of(&atoms, &config);
            assert_eq!(first, second, "{kind:?} output not reproducible");
        }
    }

    #[test]
    fn distant_atoms_produce_two_disjoint_closed_components() {
        // Separation 10 A exceeds the combined probe-dilated radii
        // (2 * (1.7 + 1.4) = 6.2 A), so the occupancy regions are disjoint.
        let atoms = [carbon(5, 0.0, 0.0, 0.0), carbon(9, 10.0, 0.0, 0.0)];
        let mesh = surface_of(&atoms, &SurfaceConfig::default());

        assert!(!mesh.faces.is_empty());
        assert_eq!(face_component_count(mesh.vertices.len(), &mesh.faces), 2);
        for (edge, count) in edge_incidence(&mesh.faces) {
            assert_eq!(count, 2, "edge {edge:?} not shared by exactly two faces");
        }
        // No triangle mixes the two atoms' vertices.
        for &[a, b, c] in &mesh.faces {
            let ids: HashSet<i32> = [a, b, c]
                .iter()
                .map(|&v| mesh.vertices[v as usize].atom_id)
                .collect();
            assert_eq!(ids.len(), 1);
        }
    }

    #[test]
    fn coincident_atoms_merge_into_one_component() {
        let atoms = [carbon(0, 0.0, 0.0, 0.0), carbon(1, 0.0, 0.0, 0.0)];
        let mesh = surface_of(&atoms, &SurfaceConfig::default());
        assert!(!mesh.faces.is_empty());
        assert_eq!(face_component_count(mesh.vertices.len(), &mesh.faces), 1);
    }

    #[test]
    fn visibility_filter_keeps_only_requested_atoms_faces() {
        let atoms = [carbon(5, 0.0, 0.0, 0.0), carbon(9, 10.0, 0.0, 0.0)];
        let extent = BoundingExtent::from_atoms(&atoms);
        let config = SurfaceConfig::default();

        let both = generate_surface(&atoms, &extent, &HashSet::from([5, 9]), &config).unwrap();
        let only_first = generate_surface(&atoms, &extent, &HashSet::from([5]), &config).unwrap();

        assert!(!only_first.faces.is_empty());
        assert!(only_first.faces.len() < both.faces.len());
        for &[a, b, c] in &only_first.faces {
            for v in [a, b, c] {
                assert_eq!(only_first.vertices[v as usize].atom_id, 5);
            }
        }
        // The vertex list itself is not filtered.
        assert_eq!(only_first.vertices.len(), both.vertices.len());
    }

    #[test]
    fn all_kinds_produce_geometry_for_a_small_molecule() {
        let atoms = [
            carbon(0, 0.0, 0.0, 0.0),
            Atom::new(1, Element::Nitrogen, Point3::new(1.4, 0.0, 0.0)),
            Atom::new(2, Element::Oxygen, Point3::new(0.0, 1.3, 0.0)),
        ];
        for kind in [
            SurfaceKind::VanDerWaals,
            SurfaceKind::Molecular,
            SurfaceKind::SolventAccessible,
            SurfaceKind::SolventExcluded,
        ] {
            let config = SurfaceConfigBuilder::new().kind(kind).build().unwrap();
            let mesh = surface_of(&atoms, &config);
            assert!(!mesh.vertices.is_empty(), "{kind:?} produced no vertices");
            assert!(!mesh.faces.is_empty(), "{kind:?} produced no faces");
        }
    }

    #[test]
    fn sas_mesh_is_larger_than_vdw_mesh() {
        let atoms = [carbon(0, 0.0, 0.0, 0.0)];
        let vdw = SurfaceConfigBuilder::new()
            .kind(SurfaceKind::VanDerWaals)
            .build()
            .unwrap();
        let sas = SurfaceConfigBuilder::new()
            .kind(SurfaceKind::SolventAccessible)
            .build()
            .unwrap();
        let vdw_mesh = surface_of(&atoms, &vdw);
        let sas_mesh = surface_of(&atoms, &sas);

        let max_radius = |mesh: &SurfaceMesh| {
            mesh.vertices
                .iter()
                .map(|v| v.position.coords.norm())
                .fold(0.0, f64::max)
        };
        assert!(max_radius(&sas_mesh) > max_radius(&vdw_mesh));
    }

    #[test]
    fn blocky_extraction_duplicates_vertices() {
        let atoms = [carbon(0, 0.0, 0.0, 0.0)];
        let smooth = SurfaceConfigBuilder::new()
            .kind(SurfaceKind::VanDerWaals)
            .smoothing_iterations(0)
            .build()
            .unwrap();
        let blocky = SurfaceConfigBuilder::new()
            .kind(SurfaceKind::VanDerWaals)
            .smoothing_iterations(0)
            .blocky(true)
            .build()
            .unwrap();
        let shared_mesh = surface_of(&atoms, &smooth);
        let blocky_mesh = surface_of(&atoms, &blocky);
        assert!(blocky_mesh.vertices.len() > shared_mesh.vertices.len());
    }
}
