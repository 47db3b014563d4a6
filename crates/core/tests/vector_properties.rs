//! Algebraic properties of `Vector3` over a spread of sample vectors
use approx::assert_relative_eq;
use particle_sim_core::{Vector3, VectorError};

fn samples() -> Vec<Vector3> {
    vec![
        Vector3::zeros(),
        Vector3::new(1.0, 0.0, 0.0),
        Vector3::new(-3.5, 2.25, 8.0),
        Vector3::new(1e6, -1e-6, 42.0),
        Vector3::new(0.1, 0.2, 0.3),
        Vector3::new(-7.0, -7.0, -7.0),
    ]
}

fn assert_vec_eq(a: Vector3, b: Vector3) {
    assert_relative_eq!(a.x(), b.x(), epsilon = 1e-9, max_relative = 1e-12);
    assert_relative_eq!(a.y(), b.y(), epsilon = 1e-9, max_relative = 1e-12);
    assert_relative_eq!(a.z(), b.z(), epsilon = 1e-9, max_relative = 1e-12);
}

#[test]
fn test_addition_commutes_and_subtraction_inverts() {
    for a in samples() {
        for b in samples() {
            assert_eq!(a + b, b + a);
            assert_vec_eq((a + b) - b, a);
        }
    }
}

#[test]
fn test_scale_then_divide_roundtrips() {
    for v in samples() {
        for s in [2.0, -0.5, 1e-3, 123.456] {
            let back = (v * s).div_scalar(s).unwrap();
            assert_vec_eq(back, v);
        }
    }
}

#[test]
fn test_division_by_exact_zero_only() {
    for v in samples() {
        assert_eq!(v.div_scalar(0.0), Err(VectorError::DivisionByZero));
        assert!(v.div_scalar(f64::MIN_POSITIVE).is_ok());
        assert!(v.div_scalar(-1e-300).is_ok());
    }
}

#[test]
fn test_normalize_gives_unit_vector_in_same_direction() {
    for v in samples().into_iter().filter(|v| v.magnitude() > 0.0) {
        let n = v.normalize().unwrap();
        assert_relative_eq!(n.magnitude(), 1.0, epsilon = 1e-12);
        // Same direction: parallel and positively aligned
        assert_relative_eq!(n.dot(v), v.magnitude(), max_relative = 1e-12);
        assert_relative_eq!(n.cross(v).magnitude(), 0.0, epsilon = 1e-6);
    }
    assert_eq!(Vector3::zeros().normalize(), Err(VectorError::ZeroMagnitude));
}

#[test]
fn test_cross_is_anticommutative() {
    for a in samples() {
        for b in samples() {
            assert_eq!(a.cross(b), b.cross(a) * -1.0);
        }
    }
}

#[test]
fn test_cross_of_parallel_vectors_is_zero() {
    for a in samples() {
        assert_eq!(a.cross(a), Vector3::zeros());
        assert_eq!(a.cross(a * 4.0).magnitude(), 0.0);
        assert_eq!(a.cross(Vector3::zeros()), Vector3::zeros());
    }
}

#[test]
fn test_cross_is_orthogonal_to_inputs() {
    let a = Vector3::new(1.0, 2.0, 3.0);
    let b = Vector3::new(-4.0, 0.5, 2.0);
    let c = a.cross(b);
    assert_relative_eq!(c.dot(a), 0.0, epsilon = 1e-12);
    assert_relative_eq!(c.dot(b), 0.0, epsilon = 1e-12);
}

#[test]
fn test_non_finite_components_propagate() {
    let v = Vector3::new(f64::INFINITY, 1.0, 0.0);
    let sum = v + Vector3::new(f64::NEG_INFINITY, 0.0, 0.0);
    assert!(sum.x().is_nan());
    assert!(v.magnitude().is_infinite());

    // inf / inf inside normalize yields NaN, still not an error
    let n = v.normalize().unwrap();
    assert!(n.x().is_nan());
}
