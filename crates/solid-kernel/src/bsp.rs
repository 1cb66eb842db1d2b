//! Binary space partitioning tree over polygon soups.
//!
//! Each node stores the polygons coplanar with its splitting plane; front
//! and back subtrees hold the rest. Boolean operations are expressed as
//! mutual clipping plus inversion of the operand trees.

use crate::plane::Plane;
use crate::polygon::Polygon;

#[derive(Debug, Clone, Default)]
pub struct BspNode {
    plane: Option<Plane>,
    front: Option<Box<BspNode>>,
    back: Option<Box<BspNode>>,
    polygons: Vec<Polygon>,
}

impl BspNode {
    pub fn new(polygons: Vec<Polygon>) -> Self {
        let mut node = BspNode::default();
        node.build(polygons);
        node
    }

    /// Convert solid space to empty space and vice versa.
    pub fn invert(&mut self) {
        for p in &mut self.polygons {
            p.flip();
        }
        if let Some(plane) = &mut self.plane {
            plane.flip();
        }
        if let Some(front) = &mut self.front {
            front.invert();
        }
        if let Some(back) = &mut self.back {
            back.invert();
        }
        std::mem::swap(&mut self.front, &mut self.back);
    }

    /// Remove the parts of `polygons` inside this tree's solid volume.
    pub fn clip_polygons(&self, polygons: Vec<Polygon>) -> Vec<Polygon> {
        let Some(plane) = &self.plane else {
            return polygons;
        };

        let mut front = Vec::new();
        let mut back = Vec::new();
        let mut coplanar_front = Vec::new();
        let mut coplanar_back = Vec::new();
        for polygon in &polygons {
            plane.split_polygon(
                polygon,
                &mut coplanar_front,
                &mut coplanar_back,
                &mut front,
                &mut back,
            );
        }
        front.extend(coplanar_front);
        back.extend(coplanar_back);

        let mut front = match &self.front {
            Some(node) => node.clip_polygons(front),
            None => front,
        };
        let back = match &self.back {
            Some(node) => node.clip_polygons(back),
            // No back subtree: back space is solid, polygons there vanish.
            None => Vec::new(),
        };

        front.extend(back);
        front
    }

    /// Remove the parts of this tree's polygons inside `other`'s volume.
    pub fn clip_to(&mut self, other: &BspNode) {
        self.polygons = other.clip_polygons(std::mem::take(&mut self.polygons));
        if let Some(front) = &mut self.front {
            front.clip_to(other);
        }
        if let Some(back) = &mut self.back {
            back.clip_to(other);
        }
    }

    pub fn all_polygons(&self) -> Vec<Polygon> {
        let mut out = self.polygons.clone();
        if let Some(front) = &self.front {
            out.extend(front.all_polygons());
        }
        if let Some(back) = &self.back {
            out.extend(back.all_polygons());
        }
        out
    }

    /// Insert polygons, extending the tree as needed. The first polygon's
    /// plane seeds each new node; insertion order is deterministic.
    pub fn build(&mut self, polygons: Vec<Polygon>) {
        if polygons.is_empty() {
            return;
        }
        if self.plane.is_none() {
            self.plane = Some(polygons[0].plane);
        }
        let plane = self.plane.expect("splitting plane set above");

        let mut coplanar_front = Vec::new();
        let mut coplanar_back = Vec::new();
        let mut front = Vec::new();
        let mut back = Vec::new();
        for polygon in &polygons {
            plane.split_polygon(
                polygon,
                &mut coplanar_front,
                &mut coplanar_back,
                &mut front,
                &mut back,
            );
        }
        self.polygons.extend(coplanar_front);
        self.polygons.extend(coplanar_back);

        if !front.is_empty() {
            self.front
                .get_or_insert_with(|| Box::new(BspNode::default()))
                .build(front);
        }
        if !back.is_empty() {
            self.back
                .get_or_insert_with(|| Box::new(BspNode::default()))
                .build(back);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::primitives::cuboid;

    #[test]
    fn round_trip_preserves_polygons() {
        let cube = cuboid(2.0, 2.0, 2.0).unwrap();
        let node = BspNode::new(cube.polygons().to_vec());
        assert_eq!(node.all_polygons().len(), cube.polygons().len());
    }

    #[test]
    fn clipping_against_self_keeps_boundary() {
        let cube = cuboid(2.0, 2.0, 2.0).unwrap();
        let node = BspNode::new(cube.polygons().to_vec());
        // The boundary of a solid is not strictly inside it.
        let clipped = node.clip_polygons(cube.polygons().to_vec());
        assert!(!clipped.is_empty());
    }

    #[test]
    fn interior_polygons_are_clipped_away() {
        let big = cuboid(4.0, 4.0, 4.0).unwrap();
        let small = cuboid(1.0, 1.0, 1.0).unwrap();
        let node = BspNode::new(big.polygons().to_vec());
        let clipped = node.clip_polygons(small.polygons().to_vec());
        assert!(clipped.is_empty());
    }
}
