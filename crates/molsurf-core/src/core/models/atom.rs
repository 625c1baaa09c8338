use super::element::Element;
use nalgebra::Point3;
use serde::{Deserialize, Serialize};

/// An atom as consumed by the surface pipeline.
///
/// This is deliberately minimal: the pipeline needs only a position, a
/// chemical element (for the van der Waals radius), and a caller-assigned
/// integer id. The id is carried through rasterization so that every output
/// vertex can report which atom's sphere produced it; it is opaque to the
/// pipeline and is only compared for equality and ordering.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Atom {
    /// Caller-assigned identifier, echoed on output vertices.
    pub id: i32,
    /// Chemical element, used to select the radius profile.
    pub element: Element,
    /// Position in world coordinates (Angstroms).
    pub position: Point3<f64>,
}

impl Atom {
    pub fn new(id: i32, element: Element, position: Point3<f64>) -> Self {
        Self {
            id,
            element,
            position,
        }
    }
}

/// Axis-aligned bounding box over an atom set, in world coordinates.
///
/// The extent is an input to the pipeline (callers typically already track it
/// for camera fitting); [`BoundingExtent::from_atoms`] is a convenience for
/// callers and tests that do not.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct BoundingExtent {
    pub min: Point3<f64>,
    pub max: Point3<f64>,
}

impl BoundingExtent {
    pub fn new(min: Point3<f64>, max: Point3<f64>) -> Self {
        Self { min, max }
    }

    /// Componentwise min/max over the atom centers. Returns a degenerate
    /// extent at the origin for an empty slice.
    pub fn from_atoms(atoms: &[Atom]) -> Self {
        let mut min = Point3::new(f64::INFINITY, f64::INFINITY, f64::INFINITY);
        let mut max = Point3::new(f64::NEG_INFINITY, f64::NEG_INFINITY, f64::NEG_INFINITY);
        for atom in atoms {
            for axis in 0..3 {
                min[axis] = min[axis].min(atom.position[axis]);
                max[axis] = max[axis].max(atom.position[axis]);
            }
        }
        if atoms.is_empty() {
            return Self {
                min: Point3::origin(),
                max: Point3::origin(),
            };
        }
        Self { min, max }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn new_atom_stores_fields() {
        let atom = Atom::new(7, Element::Carbon, Point3::new(1.0, 2.0, 3.0));
        assert_eq!(atom.id, 7);
        assert_eq!(atom.element, Element::Carbon);
        assert_eq!(atom.position, Point3::new(1.0, 2.0, 3.0));
    }

    #[test]
    fn extent_from_atoms_covers_all_centers() {
        let atoms = vec![
            Atom::new(0, Element::Carbon, Point3::new(-1.0, 0.0, 5.0)),
            Atom::new(1, Element::Oxygen, Point3::new(2.0, -3.0, 1.0)),
            Atom::new(2, Element::Nitrogen, Point3::new(0.5, 4.0, -2.0)),
        ];
        let extent = BoundingExtent::from_atoms(&atoms);
        assert_eq!(extent.min, Point3::new(-1.0, -3.0, -2.0));
        assert_eq!(extent.max, Point3::new(2.0, 4.0, 5.0));
    }

    #[test]
    fn extent_from_empty_slice_is_degenerate_at_origin() {
        let extent = BoundingExtent::from_atoms(&[]);
        assert_eq!(extent.min, Point3::origin());
        assert_eq!(extent.max, Point3::origin());
    }

    #[test]
    fn extent_of_single_atom_is_its_center() {
        let atoms = [Atom::new(0, Element::Sulfur, Point3::new(1.5, 1.5, 1.5))];
        let extent = BoundingExtent::from_atoms(&atoms);
        assert_eq!(extent.min, extent.max);
        assert_eq!(extent.min, Point3::new(1.5, 1.5, 1.5));
    }
}
