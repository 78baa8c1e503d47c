/// Axis rotations and the fixed isometric viewing transform
use nalgebra::Matrix3;

use crate::geometry::Vertex;

/// First stage of the isometric composition: rotation about Z.
pub const ISO_Z_DEGREES: f64 = 45.0;
/// Second stage: rotation about X, the classic isometric tilt (atan(1/2)).
pub const ISO_X_DEGREES: f64 = 26.565;

/// A rotation axis. One rotation implementation is parameterized by this
/// instead of three near-duplicate functions.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Axis {
    X,
    Y,
    Z,
}

/// Build the 3x3 rotation matrix for an axis and an angle in degrees.
pub fn rotation_matrix(axis: Axis, angle_degrees: f64) -> Matrix3<f64> {
    let theta = angle_degrees.to_radians();
    let (sin, cos) = theta.sin_cos();
    match axis {
        Axis::X => Matrix3::new(
            1.0, 0.0, 0.0, //
            0.0, cos, -sin, //
            0.0, sin, cos,
        ),
        Axis::Y => Matrix3::new(
            cos, 0.0, -sin, //
            0.0, 1.0, 0.0, //
            sin, 0.0, cos,
        ),
        Axis::Z => Matrix3::new(
            cos, -sin, 0.0, //
            sin, cos, 0.0, //
            0.0, 0.0, 1.0,
        ),
    }
}

/// Rotate every vertex about the given axis. Output order matches input
/// order; the input is never mutated.
pub fn rotate(vertices: &[Vertex], axis: Axis, angle_degrees: f64) -> Vec<Vertex> {
    let m = rotation_matrix(axis, angle_degrees);
    vertices
        .iter()
        .map(|v| Vertex {
            position: m * v.position,
        })
        .collect()
}

/// Rotate every vertex about the X axis by an angle in degrees.
pub fn rotate_x(vertices: &[Vertex], angle_degrees: f64) -> Vec<Vertex> {
    rotate(vertices, Axis::X, angle_degrees)
}

/// Rotate every vertex about the Y axis by an angle in degrees.
pub fn rotate_y(vertices: &[Vertex], angle_degrees: f64) -> Vec<Vertex> {
    rotate(vertices, Axis::Y, angle_degrees)
}

/// Rotate every vertex about the Z axis by an angle in degrees.
pub fn rotate_z(vertices: &[Vertex], angle_degrees: f64) -> Vec<Vertex> {
    rotate(vertices, Axis::Z, angle_degrees)
}

/// Apply the fixed isometric viewing transform: 45 degrees about Z first,
/// then 26.565 degrees about X.
pub fn isometric(vertex: Vertex) -> Vertex {
    let m = rotation_matrix(Axis::X, ISO_X_DEGREES) * rotation_matrix(Axis::Z, ISO_Z_DEGREES);
    Vertex {
        position: m * vertex.position,
    }
}

/// Accumulated rotation about the three axes, in degrees.
///
/// This is a value type: the combinators return a new state instead of
/// mutating, so interaction handlers can pass states around explicitly.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct RotationState {
    pub x: f64,
    pub y: f64,
    pub z: f64,
}

impl RotationState {
    pub fn new(x: f64, y: f64, z: f64) -> Self {
        Self { x, y, z }
    }

    pub fn zero() -> Self {
        Self::default()
    }

    /// A copy of this state with additional rotation about one axis.
    #[must_use]
    pub fn rotated(self, axis: Axis, degrees: f64) -> Self {
        match axis {
            Axis::X => Self {
                x: self.x + degrees,
                ..self
            },
            Axis::Y => Self {
                y: self.y + degrees,
                ..self
            },
            Axis::Z => Self {
                z: self.z + degrees,
                ..self
            },
        }
    }

    /// Compose the per-axis rotations: X first, then Y, then Z.
    pub fn matrix(&self) -> Matrix3<f64> {
        rotation_matrix(Axis::Z, self.z)
            * rotation_matrix(Axis::Y, self.y)
            * rotation_matrix(Axis::X, self.x)
    }

    /// Rotate every vertex by the accumulated state.
    pub fn apply(&self, vertices: &[Vertex]) -> Vec<Vertex> {
        let m = self.matrix();
        vertices
            .iter()
            .map(|v| Vertex {
                position: m * v.position,
            })
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    const AXES: [Axis; 3] = [Axis::X, Axis::Y, Axis::Z];

    fn sample_vertices() -> Vec<Vertex> {
        vec![
            Vertex::new(1.0, 0.0, 0.0),
            Vertex::new(0.3, -0.7, 2.1),
            Vertex::new(-1.5, 0.25, -0.6),
        ]
    }

    #[test]
    fn test_zero_rotation_is_identity() {
        for axis in AXES {
            let vertices = sample_vertices();
            let rotated = rotate(&vertices, axis, 0.0);
            assert_eq!(rotated, vertices);
        }
    }

    #[test]
    fn test_full_turn_is_identity() {
        for axis in AXES {
            let vertices = sample_vertices();
            let rotated = rotate(&vertices, axis, 360.0);
            for (r, v) in rotated.iter().zip(&vertices) {
                assert_relative_eq!(r.position, v.position, epsilon = 1e-9);
            }
        }
    }

    #[test]
    fn test_rotation_round_trip() {
        for axis in AXES {
            let vertices = sample_vertices();
            let back = rotate(&rotate(&vertices, axis, 73.2), axis, -73.2);
            for (b, v) in back.iter().zip(&vertices) {
                assert_relative_eq!(b.position, v.position, epsilon = 1e-9);
            }
        }
    }

    #[test]
    fn test_rotation_preserves_length() {
        for axis in AXES {
            for angle in [-300.0, -45.0, 12.5, 90.0, 217.0] {
                for (r, v) in rotate(&sample_vertices(), axis, angle)
                    .iter()
                    .zip(&sample_vertices())
                {
                    assert_relative_eq!(r.length(), v.length(), epsilon = 1e-9);
                }
            }
        }
    }

    #[test]
    fn test_z_quarter_turn_maps_x_to_y() {
        let rotated = rotate_z(&[Vertex::new(1.0, 0.0, 0.0)], 90.0);
        assert_relative_eq!(
            rotated[0].position,
            nalgebra::Point3::new(0.0, 1.0, 0.0),
            epsilon = 1e-9
        );
    }

    #[test]
    fn test_empty_input() {
        assert!(rotate_x(&[], 42.0).is_empty());
    }

    #[test]
    fn test_axis_wrappers_match_parameterized_rotation() {
        let vertices = sample_vertices();
        assert_eq!(rotate_x(&vertices, 30.0), rotate(&vertices, Axis::X, 30.0));
        assert_eq!(rotate_y(&vertices, 30.0), rotate(&vertices, Axis::Y, 30.0));
        assert_eq!(rotate_z(&vertices, 30.0), rotate(&vertices, Axis::Z, 30.0));
    }

    #[test]
    fn test_isometric_of_x_basis() {
        // Z by 45 deg takes (1,0,0) to (cos45, sin45, 0); X by 26.565 deg
        // then leaves x alone and splits sin45 into y*cos, y*sin. With
        // cos(26.565) = 2/sqrt(5) the closed forms are sqrt(0.4), sqrt(0.1).
        let v = isometric(Vertex::new(1.0, 0.0, 0.0));
        assert_relative_eq!(v.position.x, 0.5f64.sqrt(), epsilon = 1e-12);
        assert_relative_eq!(v.position.y, 0.4f64.sqrt(), epsilon = 1e-5);
        assert_relative_eq!(v.position.z, 0.1f64.sqrt(), epsilon = 1e-5);
    }

    #[test]
    fn test_isometric_of_y_basis() {
        let v = isometric(Vertex::new(0.0, 1.0, 0.0));
        assert_relative_eq!(v.position.x, -(0.5f64.sqrt()), epsilon = 1e-12);
        assert_relative_eq!(v.position.y, 0.4f64.sqrt(), epsilon = 1e-5);
        assert_relative_eq!(v.position.z, 0.1f64.sqrt(), epsilon = 1e-5);
    }

    #[test]
    fn test_isometric_preserves_length() {
        let v = isometric(Vertex::new(0.3, -0.7, 2.1));
        assert_relative_eq!(
            v.length(),
            Vertex::new(0.3, -0.7, 2.1).length(),
            epsilon = 1e-9
        );
    }

    #[test]
    fn test_rotation_state_is_a_value() {
        let state = RotationState::zero();
        let turned = state.rotated(Axis::X, 15.0).rotated(Axis::Z, -30.0);
        // The original state is untouched.
        assert_eq!(state, RotationState::zero());
        assert_eq!(turned, RotationState::new(15.0, 0.0, -30.0));
    }

    #[test]
    fn test_rotation_state_single_axis_matches_rotate() {
        let vertices = sample_vertices();
        let state = RotationState::new(0.0, 25.0, 0.0);
        assert_eq!(state.apply(&vertices), rotate_y(&vertices, 25.0));
    }

    #[test]
    fn test_rotation_state_applies_x_then_y_then_z() {
        let vertices = sample_vertices();
        let state = RotationState::new(10.0, 20.0, 30.0);
        let expected = rotate_z(&rotate_y(&rotate_x(&vertices, 10.0), 20.0), 30.0);
        for (a, b) in state.apply(&vertices).iter().zip(&expected) {
            assert_relative_eq!(a.position, b.position, epsilon = 1e-9);
        }
    }
}
