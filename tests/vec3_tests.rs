// tests/vec3_tests.rs

use vecalg::prelude::*;

const EPS: f64 = 1e-12;

#[test]
fn test_new_and_fields() {
    let v = Vec3::new(1.0, 2.0, 3.0);
    assert_eq!(v.x, 1.0);
    assert_eq!(v.y, 2.0);
    assert_eq!(v.z, 3.0);
}

#[test]
fn test_from_slice() {
    let v = Vec3::from_slice(&[1.0, 2.0, 3.0]).unwrap();
    assert_eq!(v, Vec3::new(1.0, 2.0, 3.0));
}

#[test]
fn test_from_slice_wrong_count() {
    assert_eq!(
        Vec3::from_slice(&[1.0, 2.0]),
        Err(VectorError::ArgumentCount { expected: 3, got: 2 })
    );
    assert_eq!(
        Vec3::from_slice(&[1.0, 2.0, 3.0, 4.0]),
        Err(VectorError::ArgumentCount { expected: 3, got: 4 })
    );
}

#[test]
fn test_dot() {
    let a = Vec3::new(1.0, 2.0, 3.0);
    let b = Vec3::new(4.0, -5.0, 6.0);
    // 1*4 + 2*(-5) + 3*6 = 4 -10 +18 = 12
    assert!((a.dot(&b) - 12.0).abs() < EPS);
}

#[test]
fn test_cross_basis() {
    let e1 = Vec3::new(1.0, 0.0, 0.0);
    let e2 = Vec3::new(0.0, 1.0, 0.0);
    let e3 = Vec3::new(0.0, 0.0, 1.0);
    assert_eq!(e1.cross(&e2), e3);
    assert_eq!(e2.cross(&e3), e1);
    assert_eq!(e3.cross(&e1), e2);
    // anti-commutativity
    assert_eq!(e2.cross(&e1), Vec3::new(0.0, 0.0, -1.0));
}

#[test]
fn test_cross_general() {
    let a = Vec3::new(2.0, 3.0, 4.0);
    let b = Vec3::new(5.0, 6.0, 7.0);
    // (3*7-4*6, 4*5-2*7, 2*6-3*5) = (-3, 6, -3)
    assert_eq!(a.cross(&b), Vec3::new(-3.0, 6.0, -3.0));
    // the product is perpendicular to both operands
    assert!(a.dot(&a.cross(&b)).abs() < EPS);
    assert!(b.dot(&a.cross(&b)).abs() < EPS);
}

#[test]
fn test_norms() {
    let v = Vec3::new(3.0, -4.0, 0.0);
    assert!((v.norm() - 5.0).abs() < EPS);
    // L1 = |3| + |-4| + |0| = 7
    assert!((v.norm_l(Norm::L1) - 7.0).abs() < EPS);
}

#[test]
fn test_normalize() {
    let n = Vec3::new(0.0, 3.0, 4.0).normalize();
    assert!((n.y - 0.6).abs() < EPS);
    assert!((n.z - 0.8).abs() < EPS);
    assert!((n.norm() - 1.0).abs() < EPS);
}

#[test]
fn test_operators() {
    let a = Vec3::new(1.0, 2.0, 3.0);
    let b = Vec3::new(4.0, 5.0, 6.0);
    assert_eq!(a + b, Vec3::new(5.0, 7.0, 9.0));
    assert_eq!(b - a, Vec3::new(3.0, 3.0, 3.0));
    assert_eq!(a * 3.0, Vec3::new(3.0, 6.0, 9.0));
    assert_eq!(-a, Vec3::new(-1.0, -2.0, -3.0));
}

#[test]
fn test_vector_ops() {
    let a = Vec3::new(1.0, 2.0, 3.0);
    assert_eq!(a.opposite(), Vec3::new(-1.0, -2.0, -3.0));
    assert_eq!(a.scalar(2.0), Vec3::new(2.0, 4.0, 6.0));
    assert_eq!(a.to_array(), vec![1.0, 2.0, 3.0]);
    assert!(a.equals(&a));
    assert!(Vec3::new(1.0, 0.0, 0.0).is_normal(&Vec3::new(0.0, 1.0, 0.0)));
}

#[test]
fn test_conversions() {
    let v = Vec3::from([1.0, 2.0, 3.0]);
    let arr: [f64; 3] = v.into();
    assert_eq!(arr, [1.0, 2.0, 3.0]);

    let base: Vector = v.into();
    assert_eq!(base.components(), &[1.0, 2.0, 3.0]);
    assert_eq!(Vec3::try_from(&base), Ok(v));

    let too_small = Vector::new(vec![1.0, 2.0]);
    assert_eq!(
        Vec3::try_from(&too_small),
        Err(VectorError::ArgumentCount { expected: 3, got: 2 })
    );
}

#[test]
fn test_display() {
    let v = Vec3::new(1.0, -2.0, 3.5);
    assert_eq!(format!("{v}"), "Vec3([1, -2, 3.5])");
}
