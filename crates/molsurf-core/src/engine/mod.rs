//! # Engine Module
//!
//! This module implements the volumetric surface pipeline for MolSurf: the
//! voxel lattice and every stage that transforms it, from atom rasterization
//! to the relaxed triangle mesh.
//!
//! ## Overview
//!
//! The engine owns all mutable pipeline state. A surface computation allocates
//! one `VoxelGrid` and threads it through the stages in order; each stage
//! reads the flags the previous stages left behind and rewrites them for the
//! next. No stage holds state of its own, and the grid has exactly one owner
//! (the workflow orchestrator) for its whole lifetime.
//!
//! ## Architecture
//!
//! The stages, in pipeline order:
//!
//! - **Radius Profiles** (`profile`) - per-element sphere footprints at grid
//!   resolution, optionally dilated by the probe radius
//! - **Rasterization** (`rasterize`) - stamps atom spheres into the grid and
//!   resolves per-cell atom ownership
//! - **Boundary Detection** (`boundary`) - flags occupied cells adjacent to
//!   empty space
//! - **Distance Propagation** (`distance`) - squared-distance wavefront
//!   expansion from the boundary shell, defining the solvent-excluded volume
//! - **Surface-Mode Selection** (`modes`) - reinterprets the accumulated
//!   flags as the inside/outside classification for the requested surface type
//! - **Isosurface Extraction** (`extract`) - table-driven marching cubes
//!   over the classification bit
//! - **Mesh Relaxation** (`smooth`) - valence-weighted Laplacian smoothing
//! - **Assembly** (`assemble`) - grid-to-world transform, atom-id tagging,
//!   and visibility filtering of faces
//!
//! Configuration ([`config`]) and the error type ([`error`]) are public; the
//! stage internals are crate-private and reached through [`crate::workflows`].

pub(crate) mod assemble;
pub(crate) mod boundary;
pub mod config;
pub(crate) mod distance;
pub mod error;
pub(crate) mod extract;
pub(crate) mod grid;
pub(crate) mod modes;
pub(crate) mod profile;
pub(crate) mod rasterize;
pub(crate) mod smooth;
