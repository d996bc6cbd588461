use crate::geometry::face::Face;
use crate::geometry::fundamental_constants::VERTICES_IN_TRIANGLE;
use crate::geometry::triangle::Triangle;
use log::info;

/// Fans every face from its first vertex, keeping face order.
#[must_use]
pub fn triangulate(faces: &[Face]) -> Vec<Triangle> {
    info!("triangulating faces...");

    let mut triangles: Vec<Triangle> = Vec::with_capacity(faces.len() * 2);
    for face in faces {
        fan_into(face.vertices(), &mut triangles);
    }

    info!("created {} triangles", triangles.len());
    triangles
}

/// Polygons with fewer than three corners silently contribute nothing.
pub fn fan_into(polygon: &[usize], target: &mut Vec<Triangle>) {
    if polygon.len() < VERTICES_IN_TRIANGLE {
        return;
    }
    let apex = polygon[0];
    for edge in polygon[1..].windows(2) {
        target.push(Triangle::new(apex, edge[0], edge[1]));
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[test]
    fn test_triangle_face_kept_in_order() {
        let faces = vec![Face::new(vec![2, 0, 1], vec![], 0)];

        let triangles = triangulate(&faces);

        assert_eq!(triangles, vec![Triangle::new(2, 0, 1)]);
    }

    #[test]
    fn test_pentagon_fan() {
        let faces = vec![Face::new(vec![10, 11, 12, 13, 14], vec![], 0)];

        let triangles = triangulate(&faces);

        assert_eq!(triangles, vec![
            Triangle::new(10, 11, 12),
            Triangle::new(10, 12, 13),
            Triangle::new(10, 13, 14),
        ]);
    }

    #[rstest]
    #[case(0, 0)]
    #[case(1, 0)]
    #[case(2, 0)]
    #[case(3, 1)]
    #[case(4, 2)]
    #[case(7, 5)]
    #[case(255, 253)]
    fn test_fan_size(#[case] corners: usize, #[case] expected_triangles: usize) {
        let polygon: Vec<usize> = (0..corners).collect();
        let mut triangles = Vec::new();

        fan_into(&polygon, &mut triangles);

        assert_eq!(triangles.len(), expected_triangles);
        assert!(triangles.iter().all(|triangle| triangle.corners()[0] == 0));
    }

    #[test]
    fn test_face_order_preserved() {
        let faces = vec![
            Face::new(vec![0, 1, 2, 3], vec![], 0),
            Face::new(vec![1], vec![], 0),
            Face::new(vec![4, 5, 6], vec![], 0),
        ];

        let triangles = triangulate(&faces);

        assert_eq!(triangles, vec![
            Triangle::new(0, 1, 2),
            Triangle::new(0, 2, 3),
            Triangle::new(4, 5, 6),
        ]);
    }

    #[test]
    fn test_no_faces() {
        assert!(triangulate(&[]).is_empty());
    }
}
