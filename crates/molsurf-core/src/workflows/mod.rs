//! # Workflows Module
//!
//! This module provides the high-level entry points that orchestrate complete
//! surface computations in MolSurf.
//!
//! ## Overview
//!
//! Workflows are the top-level API of the library. They own the voxel grid
//! for the duration of one computation, run the engine stages in the right
//! order for the requested surface type, and return a world-space
//! [`crate::core::models::mesh::SurfaceMesh`], releasing all grid storage
//! before they return.
//!
//! ## Architecture
//!
//! - **Surface Workflow** ([`surface`]) - the full pipeline from an atom list
//!   to a filtered, smoothed triangle mesh: rasterization, boundary
//!   detection, distance propagation (for solvent-excluded surfaces),
//!   mode selection, marching-cubes extraction, Laplacian relaxation, and
//!   world-space assembly.

pub mod surface;
