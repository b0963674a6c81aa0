use super::*;
use crate::quiz::bank::ox_questions;
use crate::quiz::Answer;
use crate::shapes::{compute_outline, ShapeOutline, ShapeParameters};
use crate::Point2;

fn quad(points: [(f64, f64); 4]) -> ShapeOutline {
    ShapeOutline::new(
        ShapeKind::Parallelogram,
        points.iter().map(|&(x, y)| Point2::new(x, y)).collect(),
    )
}

#[test]
fn containment() {
    assert!(Quad::Square.is_a(Quad::Trapezoid));
    assert!(Quad::Square.is_a(Quad::Rectangle));
    assert!(Quad::Square.is_a(Quad::Rhombus));
    assert!(Quad::Rectangle.is_a(Quad::Parallelogram));
    assert!(Quad::Rhombus.is_a(Quad::Rhombus));
    assert!(!Quad::Rhombus.is_a(Quad::Rectangle));
    assert!(!Quad::Trapezoid.is_a(Quad::Parallelogram));
    assert_eq!(
        Quad::Square.ancestors(),
        vec![Quad::Trapezoid, Quad::Parallelogram, Quad::Rectangle, Quad::Rhombus]
    );
    assert!(Quad::Trapezoid.ancestors().is_empty());
}

#[test]
fn diagram_edges_and_layout() {
    let edges = Quad::edges();
    assert_eq!(edges.len(), 5);
    assert!(edges.contains(&(Quad::Trapezoid, Quad::Parallelogram)));
    assert!(edges.contains(&(Quad::Rhombus, Quad::Square)));
    // parents sit above their children
    for (parent, child) in edges {
        assert!(parent.diagram_position().1 > child.diagram_position().1);
    }
}

#[test]
fn ox_answers_agree_with_hierarchy() {
    let qs = ox_questions();
    let facts = [
        Quad::Square.is_a(Quad::Rectangle),
        Quad::Parallelogram.is_a(Quad::Trapezoid),
        Quad::Rhombus.is_a(Quad::Rectangle),
    ];
    for (q, fact) in qs.iter().zip(facts) {
        assert_eq!(q.correct, Answer::Truth(fact), "{}", q.prompt);
    }
}

#[test]
fn kinds_map_onto_nodes() {
    assert_eq!(Quad::of(ShapeKind::Rhombus), Some(Quad::Rhombus));
    assert_eq!(Quad::of(ShapeKind::Circle), None);
    assert_eq!(Quad::parse(" Square"), Some(Quad::Square));
    assert_eq!(Quad::parse("kite"), None);
}

#[test]
fn classify_drawn_outlines() {
    let rect = compute_outline(&ShapeParameters::Rectangle {
        width: 4.0,
        height: 2.0,
    })
    .unwrap();
    assert_eq!(classify(&rect), Some(Quad::Rectangle));

    let square = compute_outline(&ShapeParameters::Rectangle {
        width: 3.0,
        height: 3.0,
    })
    .unwrap();
    assert_eq!(classify(&square), Some(Quad::Square));

    let flat = compute_outline(&ShapeParameters::Parallelogram {
        width: 4.0,
        height: 2.0,
        tilt_deg: 0.0,
    })
    .unwrap();
    assert_eq!(classify(&flat), Some(Quad::Rectangle));

    let slanted = compute_outline(&ShapeParameters::Parallelogram {
        width: 4.0,
        height: 2.5,
        tilt_deg: 20.0,
    })
    .unwrap();
    assert_eq!(classify(&slanted), Some(Quad::Parallelogram));

    // slanted side 2 / sin 30° = 4 = base
    let rhombus = compute_outline(&ShapeParameters::Parallelogram {
        width: 4.0,
        height: 2.0,
        tilt_deg: 30.0,
    })
    .unwrap();
    assert_eq!(classify(&rhombus), Some(Quad::Rhombus));

    // the approximate rhombus is drawn as a plain parallelogram
    let approx = compute_outline(&ShapeParameters::Rhombus {
        side_length: 4.0,
        height: 2.5,
    })
    .unwrap();
    assert_eq!(classify(&approx), Some(Quad::Parallelogram));
}

#[test]
fn classify_trapezoid_and_rejects() {
    let trap = quad([(0.0, 0.0), (4.0, 0.0), (3.0, 2.0), (1.0, 2.0)]);
    assert_eq!(classify(&trap), Some(Quad::Trapezoid));
    let kite = quad([(0.0, 0.0), (2.0, -1.0), (4.0, 0.0), (2.0, 3.0)]);
    assert_eq!(classify(&kite), None);
    let tri = compute_outline(&ShapeParameters::triangle(4.0, 50.0, 60.0)).unwrap();
    assert_eq!(classify(&tri), None);
    let pinched = quad([(0.0, 0.0), (0.0, 0.0), (1.0, 1.0), (0.0, 1.0)]);
    assert_eq!(classify(&pinched), None);
}
