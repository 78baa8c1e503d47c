/// Geometry primitives for shape plotting
use nalgebra::Point3;

/// A 3D point
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Vertex {
    pub position: Point3<f64>,
}

impl Vertex {
    pub fn new(x: f64, y: f64, z: f64) -> Self {
        Self {
            position: Point3::new(x, y, z),
        }
    }

    /// Distance from the origin
    pub fn length(&self) -> f64 {
        self.position.coords.norm()
    }
}

impl From<[f64; 3]> for Vertex {
    fn from(c: [f64; 3]) -> Self {
        Self::new(c[0], c[1], c[2])
    }
}

impl From<Vertex> for [f64; 3] {
    fn from(v: Vertex) -> Self {
        [v.position.x, v.position.y, v.position.z]
    }
}

/// A named ordered sequence of vertices defining a polyhedron or polygon
#[derive(Debug, Clone, PartialEq)]
pub struct Shape {
    pub name: String,
    pub vertices: Vec<Vertex>,
}

impl Shape {
    pub fn new(name: impl Into<String>, vertices: Vec<Vertex>) -> Self {
        Self {
            name: name.into(),
            vertices,
        }
    }

    /// Regular tetrahedron with unit-length vertices
    pub fn tetrahedron() -> Self {
        Self::new(
            "Tetrahedron",
            vec![
                Vertex::new((8.0f64 / 9.0).sqrt(), 0.0, -1.0 / 3.0),
                Vertex::new(-(2.0f64 / 9.0).sqrt(), (2.0f64 / 3.0).sqrt(), -1.0 / 3.0),
                Vertex::new(-(2.0f64 / 9.0).sqrt(), -(2.0f64 / 3.0).sqrt(), -1.0 / 3.0),
                Vertex::new(0.0, 0.0, 1.0),
            ],
        )
    }

    /// Regular octahedron: (0,±1,0), (±1,0,0), (0,0,±1)
    pub fn octahedron() -> Self {
        Self::new(
            "Octahedron",
            vec![
                Vertex::new(0.0, 1.0, 0.0),
                Vertex::new(0.0, -1.0, 0.0),
                Vertex::new(1.0, 0.0, 0.0),
                Vertex::new(-1.0, 0.0, 0.0),
                Vertex::new(0.0, 0.0, 1.0),
                Vertex::new(0.0, 0.0, -1.0),
            ],
        )
    }

    /// Cube with corners at (±1,±1,±1)
    pub fn hexahedron() -> Self {
        Self::new(
            "Hexahedron",
            vec![
                Vertex::new(-1.0, -1.0, -1.0),
                Vertex::new(-1.0, -1.0, 1.0),
                Vertex::new(-1.0, 1.0, -1.0),
                Vertex::new(-1.0, 1.0, 1.0),
                Vertex::new(1.0, -1.0, -1.0),
                Vertex::new(1.0, -1.0, 1.0),
                Vertex::new(1.0, 1.0, -1.0),
                Vertex::new(1.0, 1.0, 1.0),
            ],
        )
    }

    /// Unit square in the z = -1 plane
    pub fn square() -> Self {
        Self::new(
            "Square",
            vec![
                Vertex::new(-1.0, -1.0, -1.0),
                Vertex::new(-1.0, 1.0, -1.0),
                Vertex::new(1.0, 1.0, -1.0),
                Vertex::new(1.0, -1.0, -1.0),
            ],
        )
    }

    /// Equilateral triangle: the base of the tetrahedron
    pub fn triangle() -> Self {
        Self::new(
            "Triangle",
            vec![
                Vertex::new((8.0f64 / 9.0).sqrt(), 0.0, -1.0 / 3.0),
                Vertex::new(-(2.0f64 / 9.0).sqrt(), (2.0f64 / 3.0).sqrt(), -1.0 / 3.0),
                Vertex::new(-(2.0f64 / 9.0).sqrt(), -(2.0f64 / 3.0).sqrt(), -1.0 / 3.0),
            ],
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn test_vertex_roundtrip_through_components() {
        let v = Vertex::from([0.5, -1.25, 3.0]);
        assert_eq!(v, Vertex::new(0.5, -1.25, 3.0));
        let c: [f64; 3] = v.into();
        assert_eq!(c, [0.5, -1.25, 3.0]);
    }

    #[test]
    fn test_tetrahedron_vertices_are_unit_length() {
        for v in Shape::tetrahedron().vertices {
            assert_relative_eq!(v.length(), 1.0, epsilon = 1e-12);
        }
    }

    #[test]
    fn test_builtin_vertex_counts() {
        assert_eq!(Shape::tetrahedron().vertices.len(), 4);
        assert_eq!(Shape::octahedron().vertices.len(), 6);
        assert_eq!(Shape::hexahedron().vertices.len(), 8);
        assert_eq!(Shape::square().vertices.len(), 4);
        assert_eq!(Shape::triangle().vertices.len(), 3);
    }

    #[test]
    fn test_triangle_is_tetrahedron_base() {
        let tetra = Shape::tetrahedron();
        let tri = Shape::triangle();
        assert_eq!(&tetra.vertices[..3], &tri.vertices[..]);
    }
}
