//! Tests for the WASM-facing pipeline helpers.

use super::*;
use config::constants::EPSILON;

/// Confirms the internal build helper produces the reference 4x4 strip.
#[test]
fn build_strip_produces_grid_buffers() {
    let strip = build_strip_internal(1.0, 0.2, 4).expect("valid parameters");

    assert_eq!(strip.resolution(), 4);
    assert_eq!(strip.vertex_count(), 16);
    assert_eq!(strip.triangle_count(), 18); // 9 cells * 2 triangles
    assert_eq!(strip.vertex_buffer().len(), 48); // 16 vertices * 3 components
    assert_eq!(strip.index_buffer().len(), 54);
    assert_eq!(strip.color_buffer().len(), 64); // 16 vertices * RGBA
    assert_eq!(strip.z_grid().len(), 16);
    assert!(!strip.is_empty());
}

/// Row 0, column 0 is v = -0.1, u = 0.
#[test]
fn build_strip_first_vertex_matches_reference() {
    let strip = build_strip_internal(1.0, 0.2, 4).expect("valid parameters");
    let first = &strip.vertex_buffer()[..3];
    assert!((first[0] - 0.9).abs() < 1e-6);
    assert_eq!(first[1], 0.0);
    assert_eq!(first[2], 0.0);
}

/// Ensures invalid parameters surface explicit diagnostics.
#[test]
fn build_strip_rejects_invalid_parameters() {
    let diag = build_strip_internal(0.0, 0.3, 10).unwrap_err();
    assert_eq!(diag.stage(), Stage::Mesh);
    assert_eq!(diag.parameter().as_deref(), Some("radius"));

    let diag = build_strip_internal(1.0, -0.1, 10).unwrap_err();
    assert_eq!(diag.parameter().as_deref(), Some("width"));

    let diag = build_strip_internal(1.0, 0.3, 1).unwrap_err();
    assert_eq!(diag.parameter().as_deref(), Some("resolution"));
    assert!(diag.message().contains("at least 2"));
}

/// The inclusive sampling duplicates the seam column.
#[test]
fn build_strip_reports_duplicated_seam() {
    let strip = build_strip_internal(1.0, 0.3, 21).expect("valid parameters");
    assert!(strip.seam_gap() < EPSILON);
    assert!(strip.seam_closed());
}

#[test]
fn default_parameters_match_constants() {
    let params = default_parameters();
    assert_eq!(params.radius(), 1.0);
    assert_eq!(params.width(), 0.2);
    assert_eq!(params.resolution(), 100);
}

#[test]
fn animate_strip_produces_document() {
    let json = animate_strip_internal(1.0, 0.3, 10, 12, 100).expect("valid settings");
    assert!(json.contains("\"kind\":\"animation\""));
    assert!(json.contains("\"interval_ms\":100"));
}

#[test]
fn animate_strip_rejects_zero_frames() {
    let diag = animate_strip_internal(1.0, 0.3, 10, 0, 100).unwrap_err();
    assert_eq!(diag.stage(), Stage::View);
    assert!(diag.parameter().is_none());
    assert!(diag.message().contains("frames"));
}

#[test]
fn demo_document_uses_demo_strip() {
    let json = demo_document_internal().expect("demo builds");
    assert!(json.contains("\"resolution\":150"));
    assert!(json.contains("\"kind\":\"animation\""));
}
