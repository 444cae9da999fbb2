//! A handful of ready-made outlines for demos and tests.

use kurbo::{BezPath, Circle, Point, RoundedRect};

use crate::outline::Outline;

pub fn square() -> Outline {
    polygon(&[(0.0, 0.0), (100.0, 0.0), (100.0, 100.0), (0.0, 100.0)])
}

pub fn diamond() -> Outline {
    polygon(&[(50.0, 0.0), (100.0, 50.0), (50.0, 100.0), (0.0, 50.0)])
}

pub fn triangle() -> Outline {
    polygon(&[(50.0, 0.0), (100.0, 100.0), (0.0, 100.0)])
}

/// Five-pointed star, drawn counter-clockwise on screen.
pub fn star() -> Outline {
    let mut corners = Vec::with_capacity(10);

    for i in 0..10 {
        let radius = if i % 2 == 0 { 50.0 } else { 20.0 };
        let angle = -std::f64::consts::FRAC_PI_2 - std::f64::consts::TAU * i as f64 / 10.0;
        corners.push((50.0 + radius * angle.cos(), 50.0 + radius * angle.sin()));
    }

    polygon(&corners)
}

pub fn circle() -> Outline {
    Outline::from_shape(&Circle::new((50.0, 50.0), 50.0))
}

pub fn rounded_rect() -> Outline {
    Outline::from_shape(&RoundedRect::new(0.0, 0.0, 160.0, 100.0, 24.0))
}

pub fn all() -> Vec<Outline> {
    vec![square(), circle(), star(), diamond(), rounded_rect(), triangle()]
}

fn polygon(corners: &[(f64, f64)]) -> Outline {
    let mut path = BezPath::new();
    let mut iter = corners.iter().map(|&(x, y)| Point::new(x, y));

    if let Some(first) = iter.next() {
        path.move_to(first);
        iter.for_each(|p| path.line_to(p));
        path.close_path();
    }

    Outline::new(path)
}
