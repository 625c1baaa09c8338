//! Data models for surface computation inputs and outputs.
//!
//! The types here form the public boundary of the library: callers construct
//! [`atom::Atom`] values (with an [`element::Element`] each), hand them to the
//! workflow together with a bounding extent, and receive a
//! [`mesh::SurfaceMesh`] back.

pub mod atom;
pub mod element;
pub mod mesh;
