// tests/turtle_geometry.rs
use glam::Vec3;
use std::time::Duration;
use verdure::{Grammar, TurtleConfig, TurtleGeometry, TurtleInterpreter, VerdureError};

/// Interpreter with step 1, turn angle 90 degrees.
fn setup() -> TurtleInterpreter {
    TurtleInterpreter::new(TurtleConfig::default()).unwrap()
}

fn interpret(symbols: &str) -> TurtleGeometry {
    setup().interpret(symbols).unwrap()
}

fn assert_close(actual: &[f32], expected: &[f32]) {
    assert_eq!(actual.len(), expected.len(), "buffer length mismatch");
    for (i, (a, e)) in actual.iter().zip(expected).enumerate() {
        assert!((a - e).abs() < 1e-5, "index {i}: {a} != {e}");
    }
}

#[test]
fn single_forward_move_draws_one_segment_along_heading() {
    // Initial heading is +Y, so F draws from the origin to (0, 1, 0).
    let geometry = interpret("F");
    assert_eq!(geometry.line_vertices, vec![0.0, 0.0, 0.0, 0.0, 1.0, 0.0]);
    assert_eq!(geometry.line_segment_count(), 1);
}

#[test]
fn g_draws_like_f() {
    assert_eq!(interpret("G").line_vertices, interpret("F").line_vertices);
}

#[test]
fn centroid_uses_the_literal_accumulation_rule() {
    // The position sum starts at the origin and the count starts at 1.
    // After one draw: sum = (0,1,0), count = 2, centroid = (0, 0.5, 0).
    let geometry = interpret("F");
    assert_eq!(geometry.centroid, Vec3::new(0.0, 0.5, 0.0));

    // After two draws: sum = (0,1,0) + (0,2,0), count = 3.
    let geometry = interpret("FF");
    assert_eq!(geometry.centroid, Vec3::new(0.0, 1.0, 0.0));
}

#[test]
fn no_draw_move_emits_nothing_and_skips_the_centroid() {
    // f advances silently, then F draws from (0,1,0) to (0,2,0). Only the
    // drawing move contributes to the centroid: sum = (0,2,0), count = 2.
    let geometry = interpret("fF");
    assert_eq!(geometry.line_vertices, vec![0.0, 1.0, 0.0, 0.0, 2.0, 0.0]);
    assert_eq!(geometry.centroid, Vec3::new(0.0, 1.0, 0.0));
}

#[test]
fn turn_symbols_rotate_about_the_up_axis() {
    // With the initial frame (Heading +Y, Left +X, Up -Z), `+` swings the
    // heading toward Left and `-` away from it.
    let geometry = interpret("+F");
    assert_close(&geometry.line_vertices, &[0.0, 0.0, 0.0, 1.0, 0.0, 0.0]);

    let geometry = interpret("-F");
    assert_close(&geometry.line_vertices, &[0.0, 0.0, 0.0, -1.0, 0.0, 0.0]);
}

#[test]
fn pitch_symbols_rotate_about_the_left_axis() {
    // Up is -Z, so pitching down (&) tips the heading toward +Z.
    let geometry = interpret("&F");
    assert_close(&geometry.line_vertices, &[0.0, 0.0, 0.0, 0.0, 0.0, 1.0]);

    let geometry = interpret("^F");
    assert_close(&geometry.line_vertices, &[0.0, 0.0, 0.0, 0.0, 0.0, -1.0]);
}

#[test]
fn roll_symbols_rotate_the_frame_about_the_heading() {
    // Rolling leaves the heading itself untouched; it only moves Left/Up.
    let geometry = interpret(r"\F");
    assert_close(&geometry.line_vertices, &[0.0, 0.0, 0.0, 0.0, 1.0, 0.0]);

    // After a 90-degree roll-left, Left points at +Z, so a subsequent `+`
    // turn swings the heading out of the XY plane.
    let geometry = interpret(r"\+F");
    assert_close(&geometry.line_vertices, &[0.0, 0.0, 0.0, 0.0, 0.0, 1.0]);

    let geometry = interpret("/+F");
    assert_close(&geometry.line_vertices, &[0.0, 0.0, 0.0, 0.0, 0.0, -1.0]);
}

#[test]
fn turn_around_negates_heading_and_left() {
    let geometry = interpret("|F");
    assert_eq!(geometry.line_vertices, vec![0.0, 0.0, 0.0, 0.0, -1.0, 0.0]);

    // Two turn-arounds restore the frame exactly (sign flips only).
    let geometry = interpret("||F");
    assert_eq!(geometry.line_vertices, vec![0.0, 0.0, 0.0, 0.0, 1.0, 0.0]);
}

#[test]
fn balanced_brackets_preserve_the_cursor() {
    // F[+F]F: the bracketed excursion draws a side branch but must not
    // affect the main path, so the final segment is identical to the second
    // segment of plain FF.
    let branched = interpret("F[+F]F");
    let straight = interpret("FF");

    assert_eq!(branched.line_segment_count(), 3);

    // Side branch starts at (0,1,0) and heads toward +X.
    assert_close(&branched.line_vertices[6..12], &[0.0, 1.0, 0.0, 1.0, 1.0, 0.0]);

    // Main path resumes from the saved state bit-for-bit.
    assert_eq!(branched.line_vertices[12..18], straight.line_vertices[6..12]);
}

#[test]
fn unbalanced_pop_is_an_error() {
    let err = setup().interpret("]").unwrap_err();
    assert!(matches!(err, VerdureError::UnbalancedStateStack(0)));

    // The reported index is the position of the offending symbol.
    let err = setup().interpret("F]").unwrap_err();
    assert!(matches!(err, VerdureError::UnbalancedStateStack(1)));
}

#[test]
fn unrecognized_symbols_are_ignored() {
    let geometry = interpret("XwZ?");
    assert!(geometry.is_empty());
    assert_eq!(geometry.centroid, Vec3::ZERO);
}

#[test]
fn leaf_quad_fans_symmetrically_around_the_heading() {
    // edge1 = normalize(H + 0.5 L) * step, edge2 = normalize(H - 0.5 L) * step.
    // At the initial pose with step 1: e1 = (0.447, 0.894, 0), e2 mirrors it.
    let e = 0.4472136;
    let h = 0.8944272;
    let geometry = interpret("L");
    assert_close(
        &geometry.leaf_vertices,
        &[
            0.0, 0.0, 0.0, // P
            e, h, 0.0, // P + edge1
            0.0, 2.0 * h, 0.0, // P + diag
            0.0, 2.0 * h, 0.0, // P + diag
            -e, h, 0.0, // P + edge2
            0.0, 0.0, 0.0, // P
        ],
    );
    assert_eq!(geometry.leaf_count(), 1);
    assert!(geometry.petal_vertices.is_empty());

    // Leaves do not touch the centroid.
    assert_eq!(geometry.centroid, Vec3::ZERO);
}

#[test]
fn petal_quad_uses_the_same_construction_in_its_own_buffer() {
    let leaf = interpret("L");
    let petal = interpret("P");
    assert_eq!(petal.petal_vertices, leaf.leaf_vertices);
    assert!(petal.leaf_vertices.is_empty());
    assert_eq!(petal.petal_count(), 1);
}

#[test]
fn leaf_is_anchored_at_the_current_position() {
    let geometry = interpret("FL");
    assert_close(&geometry.leaf_vertices[0..3], &[0.0, 1.0, 0.0]);
}

#[test]
fn zero_step_size_is_legal_and_degenerate() {
    let config = TurtleConfig {
        step_size: 0.0,
        ..Default::default()
    };
    let geometry = TurtleInterpreter::new(config).unwrap().interpret("F").unwrap();
    assert_eq!(geometry.line_vertices, vec![0.0; 6]);
}

#[test]
fn negative_step_size_is_rejected() {
    let config = TurtleConfig {
        step_size: -1.0,
        ..Default::default()
    };
    let err = TurtleInterpreter::new(config).unwrap_err();
    assert!(matches!(err, VerdureError::InvalidStepSize(s) if s == -1.0));
}

#[test]
fn koch_curve_preset_produces_the_expected_vertex_count() {
    // Koch-curve-1: axiom F-F-F-F, rule F -> FF-F+F-F-FF, 90 degrees,
    // step 2, 3 iterations. Every drawing move emits exactly 2 points.
    let grammar = Grammar::from_rules([('F', "FF-F+F-F-FF")]).unwrap();
    let expanded = grammar.expand("F-F-F-F", 3);
    let draw_symbols = expanded.chars().filter(|c| *c == 'F' || *c == 'G').count();

    let config = TurtleConfig {
        step_size: 2.0,
        turn_angle_degrees: 90.0,
        timeout: None,
    };
    let geometry = TurtleInterpreter::new(config).unwrap().interpret(&expanded).unwrap();

    assert_eq!(geometry.line_vertices.len(), 6 * draw_symbols);
    assert_eq!(geometry.line_vertices.len(), 8232);
    assert_eq!(geometry.line_vertices.len() % 6, 0);
}

#[test]
fn timed_pass_surfaces_a_timeout() {
    let config = TurtleConfig {
        timeout: Some(Duration::ZERO),
        ..Default::default()
    };
    let err = TurtleInterpreter::new(config).unwrap().interpret("F").unwrap_err();
    assert!(matches!(err, VerdureError::Timeout(_)));
}
