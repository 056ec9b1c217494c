use alifig_core::example::{DEFAULT_SEED, example_spectrum};
use alifig_render::config::{FigConfig, resolve_config};
use alifig_render::style::BuiltinStyle;

#[test]
fn example_figure_end_to_end() {
    let art = example_spectrum(DEFAULT_SEED).unwrap();
    let json = serde_json::to_string(&art).unwrap();

    let svg = alifig_render::render_svg(&json, &FigConfig::default()).unwrap();

    assert!(svg.starts_with("<svg"));
    assert!(svg.trim_end().ends_with("</svg>"));
    assert!(svg.contains("width=\"800\""));
    assert!(svg.contains("height=\"600\""));

    // The standard decorations are all present.
    assert!(svg.contains("ALICE Preliminary"));
    assert!(svg.contains("p-Pb \u{221A}s_NN = 5.02 TeV"));
    assert!(svg.contains("V0A Multiplicity Classes (Pb-Side)"));
    assert!(svg.contains("0-5%, stat errors"));
    assert!(svg.contains("syst error (Uncorrelated)"));
    assert!(svg.contains("syst error (Correlated)"));
    assert!(svg.contains("p_T (GeV/c)"));

    // All 100 example bins are populated, so there are 100 data markers
    // plus the legend swatch marker.
    assert_eq!(svg.matches("<circle").count(), 101);
}

#[test]
fn render_to_bytes_svg_matches_render_svg() {
    let art = example_spectrum(DEFAULT_SEED).unwrap();
    let json = serde_json::to_string(&art).unwrap();
    let config = FigConfig::default();

    let svg = alifig_render::render_svg(&json, &config).unwrap();
    let bytes = alifig_render::render_to_bytes(&json, "svg", &config).unwrap();
    assert_eq!(bytes, svg.into_bytes());

    let err = alifig_render::render_to_bytes(&json, "bmp", &config).unwrap_err();
    assert!(err.to_string().contains("bmp"));
}

#[test]
fn malformed_artifact_json_is_rejected() {
    let err = alifig_render::render_svg("{\"not\": \"a spectrum\"}", &FigConfig::default());
    assert!(err.is_err());
}

#[test]
fn shape_mismatched_artifact_is_rejected() {
    // Deserializes fine, but the data arrays disagree with the bin edges;
    // rendering must refuse it rather than index out of bounds.
    let json = r#"{
        "schema_version": "alifig_spectrum_v1",
        "x_label": "x", "y_label": "y", "legend_label": "l",
        "bin_edges": [0.0, 1.0],
        "values": [1.0, 2.0, 3.0],
        "stat_errors": [0.1, 0.1, 0.1],
        "syst_uncorr": [0.1, 0.1, 0.1],
        "syst_corr": [0.1, 0.1, 0.1]
    }"#;
    let err = alifig_render::render_svg(json, &FigConfig::default()).unwrap_err();
    assert!(err.to_string().contains("length"));
}

#[test]
fn yaml_override_changes_the_figure() {
    let art = example_spectrum(DEFAULT_SEED).unwrap();
    let json = serde_json::to_string(&art).unwrap();

    let config = resolve_config(Some(
        "experiment:\n  name: ALICE\n  status: \"\"\n  annotations: []\n",
    ))
    .unwrap();
    let svg = alifig_render::render_svg(&json, &config).unwrap();
    assert!(svg.contains(">ALICE</text>"));
    assert!(!svg.contains("Preliminary"));
    assert!(!svg.contains("TeV"));
}

#[test]
fn gray_style_uses_grayscale_band() {
    let art = example_spectrum(DEFAULT_SEED).unwrap();
    let json = serde_json::to_string(&art).unwrap();

    let svg =
        alifig_render::render_svg(&json, &BuiltinStyle::AliceGray.base_config()).unwrap();
    // Gray band fill instead of the colored default.
    assert!(svg.contains("#aaaaaa"));
}
