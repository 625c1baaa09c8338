//! # Core Module
//!
//! This module provides the fundamental building blocks for molecular surface
//! triangulation in MolSurf, serving as the stateless foundation of the
//! library.
//!
//! ## Overview
//!
//! The core module defines the data that the volumetric pipeline consumes and
//! produces, together with the static reference data the algorithms depend on.
//! Nothing in this layer holds pipeline state; everything is a plain value
//! that can be constructed, cloned, and serialized freely.
//!
//! ## Architecture
//!
//! The module is organized into specialized submodules:
//!
//! - **Molecular Representation** ([`models`]) - Data structures for atoms,
//!   chemical elements, bounding extents, and the triangle-mesh output.
//! - **Marching-Cubes Tables** ([`tables`]) - The static edge-activity and
//!   triangulation lookup tables used by the isosurface extractor.
//!
//! ## Key Capabilities
//!
//! - **Fixed element table** with van der Waals radii and an explicit
//!   unknown-element fallback, avoiding open-ended dynamic lookups
//! - **Serializable boundary types** so callers can persist inputs and results
//! - **Discrete-data marching-cubes tables** pruned for all-or-nothing voxel
//!   classification

pub mod models;
pub mod tables;
