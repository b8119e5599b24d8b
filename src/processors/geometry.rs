//! Geometric primitives for document detection.
//!
//! This module provides the point, polygon, and quadrilateral types used
//! while searching for a page boundary: shoelace area and perimeter for
//! ranking contour candidates, Douglas-Peucker simplification for reducing
//! a contour to a polygon, and canonical corner ordering for the detected
//! quadrilateral.

use imageproc::contours::Contour;
use imageproc::point::Point as ImageProcPoint;
use serde::{Deserialize, Serialize};

/// A 2D point with floating-point coordinates.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Point {
    /// X-coordinate of the point.
    pub x: f32,
    /// Y-coordinate of the point.
    pub y: f32,
}

impl Point {
    /// Creates a new point with the given coordinates.
    #[inline]
    pub fn new(x: f32, y: f32) -> Self {
        Self { x, y }
    }

    /// Creates a point from an imageproc point with unsigned integer coordinates.
    pub fn from_imageproc_point(p: ImageProcPoint<u32>) -> Self {
        Self {
            x: p.x as f32,
            y: p.y as f32,
        }
    }
}

/// A closed polygon represented by an ordered sequence of vertices.
///
/// Contours extracted from an edge map are converted into polygons so they
/// can be ranked by enclosed area and simplified down to candidate page
/// boundaries. The vertex list is treated as a closed ring: the last vertex
/// connects back to the first.
#[derive(Debug, Clone)]
pub struct Polygon {
    /// The vertices of the polygon.
    pub points: Vec<Point>,
}

impl Polygon {
    /// Creates a new polygon from a vector of vertices.
    pub fn new(points: Vec<Point>) -> Self {
        Self { points }
    }

    /// Creates a polygon from an imageproc contour.
    pub fn from_contour(contour: &Contour<u32>) -> Self {
        let points = contour
            .points
            .iter()
            .map(|&p| Point::from_imageproc_point(p))
            .collect();
        Self { points }
    }

    /// Calculates the enclosed area of the polygon using the shoelace formula.
    ///
    /// Returns 0.0 if the polygon has fewer than 3 vertices.
    pub fn area(&self) -> f32 {
        if self.points.len() < 3 {
            return 0.0;
        }

        let mut area = 0.0;
        let n = self.points.len();
        for i in 0..n {
            let j = (i + 1) % n;
            area += self.points[i].x * self.points[j].y;
            area -= self.points[j].x * self.points[i].y;
        }
        area.abs() / 2.0
    }

    /// Calculates the perimeter of the polygon, including the closing edge.
    pub fn perimeter(&self) -> f32 {
        let mut perimeter = 0.0;
        let n = self.points.len();
        for i in 0..n {
            let j = (i + 1) % n;
            let dx = self.points[j].x - self.points[i].x;
            let dy = self.points[j].y - self.points[i].y;
            perimeter += (dx * dx + dy * dy).sqrt();
        }
        perimeter
    }

    /// Approximates the polygon with fewer vertices using the
    /// Douglas-Peucker algorithm, honoring the closed-ring topology.
    ///
    /// The ring is split at the vertex farthest from the first vertex and
    /// each open chain is simplified independently. Splitting is what lets a
    /// rectangle contour collapse to exactly its 4 corners; simplifying the
    /// ring as a single open curve would pin both ends near the same corner
    /// and yield 5 vertices.
    ///
    /// # Arguments
    ///
    /// * `epsilon` - The maximum distance between the original curve and the
    ///   simplified curve.
    pub fn approx_poly_dp(&self, epsilon: f32) -> Polygon {
        let n = self.points.len();
        if n <= 2 {
            return self.clone();
        }

        let start = self.points[0];
        let mut split = 1;
        let mut split_dist = 0.0;
        for (i, p) in self.points.iter().enumerate().skip(1) {
            let d = (p.x - start.x).powi(2) + (p.y - start.y).powi(2);
            if d > split_dist {
                split_dist = d;
                split = i;
            }
        }

        let mut first_chain = Vec::new();
        douglas_peucker(&self.points[..=split], epsilon, &mut first_chain);

        // Second chain wraps around from the split vertex back to the start.
        let mut wrapped: Vec<Point> = self.points[split..].to_vec();
        wrapped.push(start);
        let mut second_chain = Vec::new();
        douglas_peucker(&wrapped, epsilon, &mut second_chain);

        // Both chains share their endpoints; drop the duplicates when merging.
        let mut points = first_chain;
        points.extend(second_chain.into_iter().skip(1));
        points.pop();

        Polygon::new(points)
    }
}

/// Simplifies an open point chain with the Douglas-Peucker algorithm.
///
/// The first and last points are always kept. Interior points are kept only
/// if they deviate from the chord between the kept endpoints by more than
/// `epsilon`.
fn douglas_peucker(points: &[Point], epsilon: f32, result: &mut Vec<Point>) {
    if points.len() <= 2 {
        result.extend_from_slice(points);
        return;
    }

    let mut keep = vec![false; points.len()];
    keep[0] = true;
    keep[points.len() - 1] = true;

    let mut stack = vec![(0usize, points.len() - 1)];
    while let Some((start, end)) = stack.pop() {
        if end - start <= 1 {
            continue;
        }

        // Find the interior point with maximum distance from the chord.
        let mut max_dist = 0.0;
        let mut max_index = start;
        for (i, point) in points.iter().enumerate().take(end).skip(start + 1) {
            let dist = point_to_segment_distance(point, &points[start], &points[end]);
            if dist > max_dist {
                max_dist = dist;
                max_index = i;
            }
        }

        if max_dist > epsilon {
            keep[max_index] = true;
            if max_index - start > 1 {
                stack.push((start, max_index));
            }
            if end - max_index > 1 {
                stack.push((max_index, end));
            }
        }
    }

    for (point, &should_keep) in points.iter().zip(keep.iter()) {
        if should_keep {
            result.push(*point);
        }
    }
}

/// Computes the perpendicular distance from a point to the line through two
/// segment endpoints. Falls back to point distance if the segment is degenerate.
fn point_to_segment_distance(p: &Point, a: &Point, b: &Point) -> f32 {
    let dx = b.x - a.x;
    let dy = b.y - a.y;
    let length = (dx * dx + dy * dy).sqrt();
    if length < f32::EPSILON {
        return (p.x - a.x).hypot(p.y - a.y);
    }
    ((p.x - a.x) * dy - (p.y - a.y) * dx).abs() / length
}

/// A quadrilateral with corners in canonical order.
///
/// Index 0 is the top-left corner, 1 the top-right, 2 the bottom-right, and
/// 3 the bottom-left.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Quad {
    points: [Point; 4],
}

impl Quad {
    /// Orders four corners into the canonical top-left, top-right,
    /// bottom-right, bottom-left arrangement.
    ///
    /// The top-left corner minimizes x+y and the bottom-right maximizes it;
    /// the top-right corner minimizes y-x and the bottom-left maximizes it.
    /// This sum/difference rule is robust to small rotations but assumes the
    /// quadrilateral is roughly axis-aligned, i.e. a document photographed
    /// close to head-on. Highly skewed quadrilaterals may order incorrectly;
    /// that is a documented limitation of the rule, not something this
    /// function tries to repair.
    pub fn from_unordered(points: [Point; 4]) -> Self {
        let sum = |p: Point| p.x + p.y;
        let diff = |p: Point| p.y - p.x;

        let mut tl = 0;
        let mut br = 0;
        let mut tr = 0;
        let mut bl = 0;
        for i in 1..4 {
            if sum(points[i]) < sum(points[tl]) {
                tl = i;
            }
            if sum(points[i]) > sum(points[br]) {
                br = i;
            }
            if diff(points[i]) < diff(points[tr]) {
                tr = i;
            }
            if diff(points[i]) > diff(points[bl]) {
                bl = i;
            }
        }

        Self {
            points: [points[tl], points[tr], points[br], points[bl]],
        }
    }

    /// The corners in canonical order.
    pub fn points(&self) -> &[Point; 4] {
        &self.points
    }

    /// The top-left corner.
    pub fn top_left(&self) -> Point {
        self.points[0]
    }

    /// The top-right corner.
    pub fn top_right(&self) -> Point {
        self.points[1]
    }

    /// The bottom-right corner.
    pub fn bottom_right(&self) -> Point {
        self.points[2]
    }

    /// The bottom-left corner.
    pub fn bottom_left(&self) -> Point {
        self.points[3]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn rect_ring(x0: f32, y0: f32, x1: f32, y1: f32, steps: usize) -> Vec<Point> {
        // Walk the rectangle boundary clockwise with `steps` points per edge.
        let mut points = Vec::new();
        for i in 0..steps {
            let t = i as f32 / steps as f32;
            points.push(Point::new(x0 + t * (x1 - x0), y0));
        }
        for i in 0..steps {
            let t = i as f32 / steps as f32;
            points.push(Point::new(x1, y0 + t * (y1 - y0)));
        }
        for i in 0..steps {
            let t = i as f32 / steps as f32;
            points.push(Point::new(x1 - t * (x1 - x0), y1));
        }
        for i in 0..steps {
            let t = i as f32 / steps as f32;
            points.push(Point::new(x0, y1 - t * (y1 - y0)));
        }
        points
    }

    #[test]
    fn test_square_area_and_perimeter() {
        let square = Polygon::new(vec![
            Point::new(0.0, 0.0),
            Point::new(4.0, 0.0),
            Point::new(4.0, 4.0),
            Point::new(0.0, 4.0),
        ]);
        assert_eq!(square.area(), 16.0);
        assert_eq!(square.perimeter(), 16.0);
    }

    #[test]
    fn test_area_of_degenerate_polygon_is_zero() {
        let line = Polygon::new(vec![Point::new(0.0, 0.0), Point::new(5.0, 0.0)]);
        assert_eq!(line.area(), 0.0);
    }

    #[test]
    fn test_approx_poly_dp_reduces_rectangle_ring_to_four_corners() {
        let ring = Polygon::new(rect_ring(10.0, 20.0, 110.0, 90.0, 25));
        let epsilon = 0.02 * ring.perimeter();
        let approx = ring.approx_poly_dp(epsilon);
        assert_eq!(approx.points.len(), 4);
    }

    #[test]
    fn test_approx_poly_dp_keeps_pentagon_vertices() {
        // A regular pentagon must not collapse to 4 vertices.
        let n = 5;
        let points: Vec<Point> = (0..n)
            .map(|i| {
                let angle = std::f32::consts::TAU * i as f32 / n as f32;
                Point::new(100.0 * angle.cos(), 100.0 * angle.sin())
            })
            .collect();
        let pentagon = Polygon::new(points);
        let epsilon = 0.02 * pentagon.perimeter();
        let approx = pentagon.approx_poly_dp(epsilon);
        assert_eq!(approx.points.len(), 5);
    }

    #[test]
    fn test_quad_ordering_axis_aligned() {
        let quad = Quad::from_unordered([
            Point::new(9.0, 7.0),
            Point::new(1.0, 7.0),
            Point::new(9.0, 1.0),
            Point::new(1.0, 1.0),
        ]);
        assert_eq!(quad.top_left(), Point::new(1.0, 1.0));
        assert_eq!(quad.top_right(), Point::new(9.0, 1.0));
        assert_eq!(quad.bottom_right(), Point::new(9.0, 7.0));
        assert_eq!(quad.bottom_left(), Point::new(1.0, 7.0));
    }

    #[test]
    fn test_quad_ordering_slightly_rotated() {
        // A mildly rotated page: corners perturbed off the axes.
        let quad = Quad::from_unordered([
            Point::new(96.0, 12.0),
            Point::new(4.0, 8.0),
            Point::new(8.0, 76.0),
            Point::new(100.0, 80.0),
        ]);
        assert_eq!(quad.top_left(), Point::new(4.0, 8.0));
        assert_eq!(quad.top_right(), Point::new(96.0, 12.0));
        assert_eq!(quad.bottom_right(), Point::new(100.0, 80.0));
        assert_eq!(quad.bottom_left(), Point::new(8.0, 76.0));
    }

    #[test]
    fn test_quad_ordering_invariant_under_permutation() {
        let corners = [
            Point::new(2.0, 3.0),
            Point::new(50.0, 2.0),
            Point::new(51.0, 40.0),
            Point::new(1.0, 41.0),
        ];
        let reference = Quad::from_unordered(corners);
        let shuffled = Quad::from_unordered([corners[2], corners[0], corners[3], corners[1]]);
        assert_eq!(reference, shuffled);
    }

    #[test]
    fn test_quad_corner_sums_satisfy_invariant() {
        let quad = Quad::from_unordered([
            Point::new(13.0, 2.0),
            Point::new(3.0, 18.0),
            Point::new(14.0, 17.0),
            Point::new(2.0, 3.0),
        ]);
        let tl = quad.top_left();
        let br = quad.bottom_right();
        assert!(tl.x + tl.y <= br.x + br.y);
        let tr = quad.top_right();
        let bl = quad.bottom_left();
        assert!(tr.y - tr.x <= bl.y - bl.x);
    }
}
