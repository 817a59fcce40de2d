// Integration tests for phantom entity detection

use dxfanalyzer_core::{
    classify, sample, Circle, DesignStatistics, Line, Point, Polyline, Primitive, Verdict,
};

fn stats(center: Point, max_dimension: f64) -> DesignStatistics {
    DesignStatistics {
        center,
        max_dimension,
    }
}

fn line_on(layer: &str, start: Point, end: Point) -> Primitive {
    Primitive::Line(Line {
        start,
        end,
        layer: layer.to_string(),
        visible: true,
    })
}

fn reason(verdict: Verdict) -> String {
    match verdict {
        Verdict::Phantom(reason) => reason,
        Verdict::Valid => panic!("expected phantom verdict"),
    }
}

#[test]
fn test_valid_entity() {
    let primitive = line_on("CUT", Point::new(1.0, 1.0), Point::new(11.0, 1.0));
    let sampled = sample(&primitive);
    let verdict = classify(&sampled, &primitive, &stats(Point::new(6.0, 1.0), 10.0));

    assert_eq!(verdict, Verdict::Valid);
    assert!(verdict.is_valid());
}

#[test]
fn test_empty_points_rejected_first() {
    // A degenerate primitive on a phantom layer still reports the
    // higher-priority "no valid points" reason.
    let primitive = line_on("DEFPOINTS", Point::new(f64::NAN, 0.0), Point::new(1.0, 1.0));
    let sampled = sample(&primitive);
    let verdict = classify(&sampled, &primitive, &stats(Point::new(0.0, 0.0), 10.0));

    assert_eq!(reason(verdict), "no valid points");
}

#[test]
fn test_phantom_layer_rejected() {
    let primitive = line_on("DEFPOINTS", Point::new(100.0, 100.0), Point::new(110.0, 100.0));
    let sampled = sample(&primitive);
    let verdict = classify(&sampled, &primitive, &stats(Point::new(105.0, 100.0), 10.0));

    assert!(reason(verdict).contains("DEFPOINTS"));
}

#[test]
fn test_phantom_layer_case_insensitive() {
    for layer in ["Defpoints", "defpoints", "hidden", "Construction", "temp"] {
        let primitive = line_on(layer, Point::new(100.0, 100.0), Point::new(110.0, 100.0));
        let sampled = sample(&primitive);
        let verdict = classify(&sampled, &primitive, &stats(Point::new(105.0, 100.0), 10.0));

        assert!(!verdict.is_valid(), "layer {} should be phantom", layer);
    }
}

#[test]
fn test_invisible_entity_rejected() {
    let primitive = Primitive::Circle(Circle {
        center: Point::new(50.0, 50.0),
        radius: 5.0,
        layer: "CUT".to_string(),
        visible: false,
    });
    let sampled = sample(&primitive);
    let verdict = classify(&sampled, &primitive, &stats(Point::new(50.0, 50.0), 100.0));

    assert_eq!(reason(verdict), "invisible entity");
}

#[test]
fn test_line_from_origin_rejected() {
    let primitive = line_on("CUT", Point::new(0.0, 0.0), Point::new(10.0, 0.0));
    let sampled = sample(&primitive);
    let verdict = classify(&sampled, &primitive, &stats(Point::new(5.0, 0.0), 10.0));

    assert!(reason(verdict).contains("origin"));
}

#[test]
fn test_line_to_origin_rejected() {
    let primitive = line_on("CUT", Point::new(10.0, 5.0), Point::new(0.0005, -0.0005));
    let sampled = sample(&primitive);
    let verdict = classify(&sampled, &primitive, &stats(Point::new(5.0, 2.5), 10.0));

    assert!(reason(verdict).contains("origin"));
}

#[test]
fn test_line_near_origin_outside_tolerance_kept() {
    let primitive = line_on("CUT", Point::new(0.01, 0.01), Point::new(10.0, 0.0));
    let sampled = sample(&primitive);
    let verdict = classify(&sampled, &primitive, &stats(Point::new(5.0, 0.0), 10.0));

    assert!(verdict.is_valid());
}

#[test]
fn test_overlong_line_rejected() {
    // max_dimension 10 -> anything beyond 100 units is out of scale.
    let primitive = line_on("CUT", Point::new(1.0, 1.0), Point::new(150.0, 1.0));
    let sampled = sample(&primitive);
    let verdict = classify(&sampled, &primitive, &stats(Point::new(5.0, 1.0), 10.0));

    let reason = reason(verdict);
    assert!(reason.contains("too long"));
    assert!(reason.contains("149.00"));
}

#[test]
fn test_far_away_line_rejected() {
    // Short line whose midpoint sits far outside the design extent.
    let primitive = line_on("CUT", Point::new(500.0, 500.0), Point::new(510.0, 500.0));
    let sampled = sample(&primitive);
    let verdict = classify(&sampled, &primitive, &stats(Point::new(5.0, 5.0), 10.0));

    assert!(reason(verdict).contains("far from design"));
}

#[test]
fn test_extreme_coordinates_rejected() {
    let primitive = Primitive::Polyline(Polyline {
        vertices: vec![Point::new(100.0, 100.0), Point::new(60000.0, 100.0)],
        layer: "CUT".to_string(),
        visible: true,
    });
    let sampled = sample(&primitive);
    let verdict = classify(&sampled, &primitive, &stats(Point::new(30000.0, 100.0), 59900.0));

    let reason = reason(verdict);
    assert!(reason.contains("extreme coordinates"));
    assert!(reason.contains("60000.00"));
}

#[test]
fn test_length_rules_apply_to_lines_only() {
    // A polyline as out-of-scale as the rejected line stays valid:
    // the length and distance rules are line-specific.
    let primitive = Primitive::Polyline(Polyline {
        vertices: vec![Point::new(1.0, 1.0), Point::new(150.0, 1.0)],
        layer: "CUT".to_string(),
        visible: true,
    });
    let sampled = sample(&primitive);
    let verdict = classify(&sampled, &primitive, &stats(Point::new(5.0, 1.0), 10.0));

    assert!(verdict.is_valid());
}

#[test]
fn test_circle_crossing_origin_kept() {
    // The origin rule targets line endpoints; a circle sampled near
    // the origin is fine.
    let primitive = Primitive::Circle(Circle {
        center: Point::new(0.0, 0.0),
        radius: 5.0,
        layer: "CUT".to_string(),
        visible: true,
    });
    let sampled = sample(&primitive);
    let verdict = classify(&sampled, &primitive, &stats(Point::new(0.0, 0.0), 10.0));

    assert!(verdict.is_valid());
}
