//! # MolSurf Core Library
//!
//! A library for computing triangulated molecular surfaces — van der Waals,
//! solvent-accessible, and solvent-excluded — from a set of atom positions and
//! radii, using a Euclidean-distance-transform voxel pipeline and table-driven
//! marching cubes.
//!
//! ## Architectural Philosophy
//!
//! The library is designed with a strict three-layer architecture to ensure a
//! clear separation of concerns, making it modular, testable, and extensible.
//!
//! - **[`core`]: The Foundation.** Contains stateless data models (`Atom`,
//!   `Element`, `SurfaceMesh`), the van der Waals radius data, and the static
//!   marching-cubes lookup tables.
//!
//! - **[`engine`]: The Logic Core.** This stateful layer implements the
//!   volumetric pipeline stage by stage: the `VoxelGrid` occupancy lattice,
//!   sphere rasterization, boundary detection, squared-distance wavefront
//!   propagation, surface-mode selection, isosurface extraction, and Laplacian
//!   mesh relaxation.
//!
//! - **[`workflows`]: The Public API.** This is the highest-level, user-facing
//!   layer. It ties the `engine` and `core` together to execute a complete
//!   surface computation from an atom list to a world-space triangle mesh. It
//!   provides a simple and powerful entry point for end-users of the library.

pub mod core;
pub mod engine;
pub mod workflows;
