use super::*;
use crate::geom::cfg::APPROX_EPS;
use crate::primitives::{Circle, Polygon, Rectangle, Triangle};
use crate::shape::shared;
use nalgebra::point;
use proptest::prelude::*;
use std::f64::consts::PI;
use std::rc::Rc;

fn circle(x: f64, y: f64, r: f64) -> ShapePtr {
    shared(Circle::new(point![x, y], r).unwrap())
}

fn rect(w: f64, h: f64, x: f64, y: f64) -> ShapePtr {
    shared(Rectangle::new(w, h, point![x, y]).unwrap())
}

fn two_circles() -> CompositeShape {
    CompositeShape::from_shapes([circle(0.0, 0.0, 1.0), circle(4.0, 0.0, 1.0)]).unwrap()
}

#[test]
fn from_empty_collection_is_rejected() {
    let none: Vec<ShapePtr> = Vec::new();
    assert!(matches!(
        CompositeShape::from_shapes(none),
        Err(ShapeError::InvalidArgument(_))
    ));
    let mut c = CompositeShape::new(circle(0.0, 0.0, 1.0));
    assert!(matches!(c.try_add(None), Err(ShapeError::InvalidArgument(_))));
    assert_eq!(c.size(), 1);
}

#[test]
fn add_appends_and_sums_area() {
    let mut c = CompositeShape::new(circle(1.0, 2.0, 10.0));
    let before = c.area();
    let r = rect(10.0, 12.0, 1.0, 2.0);
    c.add(r.clone());
    assert_eq!(c.size(), 2);
    assert!((c.area() - (before + 120.0)).abs() < APPROX_EPS);
    assert!(Rc::ptr_eq(&c.get(1).unwrap(), &r));
}

#[test]
fn remove_keeps_order_and_guards_last() {
    let a = circle(0.0, 0.0, 1.0);
    let b = rect(1.0, 1.0, 5.0, 5.0);
    let t = shared(Triangle::new(point![1.0, 2.0], point![3.0, -1.0], point![2.0, 5.0]).unwrap());
    let mut c = CompositeShape::from_shapes([a.clone(), b.clone(), t.clone()]).unwrap();

    assert!(matches!(
        c.remove(3),
        Err(ShapeError::OutOfRange { index: 3, len: 3 })
    ));
    let removed = c.remove(1).unwrap();
    assert!(Rc::ptr_eq(&removed, &b));
    assert_eq!(c.size(), 2);
    assert!(Rc::ptr_eq(&c.get(0).unwrap(), &a));
    assert!(Rc::ptr_eq(&c.get(1).unwrap(), &t));

    c.remove(0).unwrap();
    assert_eq!(c.size(), 1);
    assert!(matches!(c.remove(0), Err(ShapeError::LengthError(_))));
    assert!(matches!(c.get(1), Err(ShapeError::OutOfRange { .. })));
}

#[test]
fn frame_is_union_and_centre_is_frame_center() {
    let c = CompositeShape::from_shapes([
        circle(0.0, 0.0, 1.0),
        rect(2.0, 2.0, 9.0, 0.0),
        circle(0.0, 3.0, 1.0),
    ])
    .unwrap();
    let f = c.bounding_rect();
    assert!((f.left() + 1.0).abs() < APPROX_EPS);
    assert!((f.right() - 10.0).abs() < APPROX_EPS);
    assert!((f.bottom() + 1.0).abs() < APPROX_EPS);
    assert!((f.top() - 4.0).abs() < APPROX_EPS);
    // Mean of member centres would be (3, 1).
    assert!((c.centre() - point![4.5, 1.5]).norm() < APPROX_EPS);
}

#[test]
fn move_preserves_layout() {
    let mut c = two_circles();
    let f0 = c.bounding_rect();
    c.move_by(3.0, -2.0);
    let f1 = c.bounding_rect();
    assert!((f1.width - f0.width).abs() < APPROX_EPS);
    assert!((f1.height - f0.height).abs() < APPROX_EPS);
    assert!((f1.center - (f0.center + crate::Delta::new(3.0, -2.0))).norm() < APPROX_EPS);

    c.move_to(point![-10.0, 10.0]);
    assert!((c.centre() - point![-10.0, 10.0]).norm() < APPROX_EPS);
    assert!((c.get(0).unwrap().borrow().centre() - point![-12.0, 10.0]).norm() < APPROX_EPS);
}

#[test]
fn scale_relocates_then_scales_members() {
    let mut c = two_circles();
    let area0 = c.area();
    c.scale(2.0).unwrap();
    assert!((c.area() - 4.0 * area0).abs() < APPROX_EPS);
    let left = c.get(0).unwrap();
    let right = c.get(1).unwrap();
    assert!((left.borrow().centre() - point![-2.0, 0.0]).norm() < APPROX_EPS);
    assert!((right.borrow().centre() - point![6.0, 0.0]).norm() < APPROX_EPS);
    let f = c.bounding_rect();
    assert!((f.width - 12.0).abs() < APPROX_EPS);
    assert!((f.height - 4.0).abs() < APPROX_EPS);
    assert!((c.centre() - point![2.0, 0.0]).norm() < APPROX_EPS);

    assert!(matches!(c.scale(0.0), Err(ShapeError::InvalidArgument(_))));
}

#[test]
fn rotate_quarter_turn_about_frame_center() {
    let mut c = two_circles();
    c.rotate(90.0);
    let left = c.get(0).unwrap();
    let right = c.get(1).unwrap();
    assert!((left.borrow().centre() - point![2.0, -2.0]).norm() < APPROX_EPS);
    assert!((right.borrow().centre() - point![2.0, 2.0]).norm() < APPROX_EPS);
    let f = c.bounding_rect();
    assert!((f.width - 2.0).abs() < APPROX_EPS);
    assert!((f.height - 6.0).abs() < APPROX_EPS);
    assert!((c.area() - 2.0 * PI).abs() < APPROX_EPS);
}

#[test]
fn clone_shares_members_but_not_sequence() {
    let mut original = two_circles();
    let copy = original.clone();
    original.add(rect(1.0, 1.0, 0.0, 0.0));
    assert_eq!(copy.size(), 2);
    assert_eq!(original.size(), 3);

    // Editing a shared member is visible through both containers.
    original.get(0).unwrap().borrow_mut().move_by(0.0, 10.0);
    assert!((copy.get(0).unwrap().borrow().centre() - point![0.0, 10.0]).norm() < APPROX_EPS);
}

#[test]
fn nested_composite_behaves_as_a_shape() {
    let inner = shared(two_circles());
    let square = shared(
        Polygon::new([
            point![-3.0, -3.0],
            point![-3.0, 3.0],
            point![3.0, 3.0],
            point![3.0, -3.0],
        ])
        .unwrap(),
    );
    let mut outer = CompositeShape::from_shapes([inner.clone(), square]).unwrap();
    assert!((outer.area() - (2.0 * PI + 36.0)).abs() < APPROX_EPS);
    outer.move_by(1.0, 1.0);
    assert!((inner.borrow().centre() - point![3.0, 1.0]).norm() < APPROX_EPS);
}

fn member() -> impl Strategy<Value = ShapePtr> {
    prop_oneof![
        (-30.0..30.0f64, -30.0..30.0f64, 0.1..5.0f64).prop_map(|(x, y, r)| circle(x, y, r)),
        (0.1..5.0f64, 0.1..5.0f64, -30.0..30.0f64, -30.0..30.0f64)
            .prop_map(|(w, h, x, y)| rect(w, h, x, y)),
        (-30.0..30.0f64, -30.0..30.0f64, 0.5..5.0f64, 0.5..5.0f64).prop_map(|(x, y, a, b)| {
            shared(Triangle::new(point![x, y], point![x + a, y], point![x, y + b]).unwrap())
        }),
    ]
}

proptest! {
    #[test]
    fn area_is_additive(members in prop::collection::vec(member(), 1..8), extra in member()) {
        let c0 = CompositeShape::from_shapes(members).unwrap();
        let mut c = c0.clone();
        let expected = c0.area() + extra.borrow().area();
        c.add(extra);
        prop_assert!((c.area() - expected).abs() < 1e-9 * expected.max(1.0));
        prop_assert_eq!(c.size(), c0.size() + 1);
    }

    #[test]
    fn full_turn_in_half_steps_restores_frame(members in prop::collection::vec(member(), 1..8)) {
        let mut c = CompositeShape::from_shapes(members).unwrap();
        let f0 = c.bounding_rect();
        c.rotate(180.0);
        c.rotate(180.0);
        prop_assert!(c.bounding_rect().approx_eq_eps(&f0, 1e-8));
    }

    #[test]
    fn composite_scale_is_quadratic_in_area(members in prop::collection::vec(member(), 1..8), k in 0.2..4.0f64) {
        let mut c = CompositeShape::from_shapes(members).unwrap();
        let a0 = c.area();
        c.scale(k).unwrap();
        prop_assert!((c.area() - a0 * k * k).abs() < 1e-9 * (a0 * k * k).max(1.0));
    }
}
