//! Integration tests for CSS generation.
//!
//! Drives the full pipeline through [`lui::compile`] and checks the
//! exact rendered text: render modes, unit injection, media grouping,
//! @layer nesting and value validation.

use lui::generator::generate;
use lui::parser::{Declaration, Record};
use lui::{ClassNameFormat, CompileOptions, LuiError, RenderMode, compile};

fn options(format: ClassNameFormat, mode: RenderMode) -> CompileOptions {
    CompileOptions {
        class_format: format,
        mode,
        ..CompileOptions::default()
    }
}

fn minimal() -> CompileOptions {
    options(ClassNameFormat::Minimalistic, RenderMode::Minimalistic)
}

// ============================================================================
// RENDER MODES
// ============================================================================

#[test]
fn minimalistic_mode_renders_one_compact_rule() {
    let out = compile("ADD width 100px", &minimal()).unwrap();
    assert_eq!(out.css, ".w_100px{width:100px}");
}

#[test]
fn standard_mode_renders_two_space_indent() {
    let opts = options(ClassNameFormat::Minimalistic, RenderMode::Standard);
    let out = compile("ADD width 100px", &opts).unwrap();
    assert_eq!(out.css, ".w_100px {\n  width: 100px;\n}");
}

#[test]
fn pretty_mode_renders_four_space_indent() {
    let opts = options(ClassNameFormat::Minimalistic, RenderMode::Pretty);
    let out = compile("ADD width 100px", &opts).unwrap();
    assert_eq!(out.css, ".w_100px {\n    width: 100px;\n}");
}

#[test]
fn full_name_format_capitalizes_the_selector() {
    let opts = options(ClassNameFormat::FullName, RenderMode::Minimalistic);
    let out = compile("ADD width 100px", &opts).unwrap();
    assert_eq!(out.css, ".Width_100px{width:100px}");
}

// ============================================================================
// VALUES
// ============================================================================

#[test]
fn bare_number_gets_the_default_length_unit() {
    let out = compile("ADD width 100", &minimal()).unwrap();
    assert_eq!(out.css, ".w_100{width:100px}");
}

#[test]
fn intrinsic_sizing_keyword_passes_validation() {
    let out = compile("ADD width max-content", &minimal()).unwrap();
    assert_eq!(out.css, ".w_max-content{width:max-content}");
}

#[test]
fn compound_property_values_pass_through() {
    let out = compile("ADD margin 10px 20px", &minimal()).unwrap();
    assert_eq!(out.css, ".m_10px-20px{margin:10px 20px}");
}

#[test]
fn pseudo_class_suffixes_the_selector() {
    let out = compile("ADD background :hover blue", &minimal()).unwrap();
    assert_eq!(out.css, ".b_blue_h:hover{background:blue}");
}

#[test]
fn unusable_value_fails_generation() {
    let err = compile("ADD width wiggly", &minimal()).unwrap_err();
    assert!(matches!(err, LuiError::Render(_)));
    assert!(err.to_string().contains("invalid value 'wiggly'"));
}

#[test]
fn whitespace_only_value_fails_generation() {
    let records = vec![Record::Declaration(Declaration::new(
        "width",
        vec!["  ".to_string()],
    ))];
    let err = generate(
        &records,
        ClassNameFormat::Minimalistic,
        RenderMode::Minimalistic,
    )
    .unwrap_err();
    assert!(err.to_string().contains("empty value"));
}

// ============================================================================
// MEDIA GROUPING
// ============================================================================

#[test]
fn shared_condition_groups_into_one_media_block() {
    let opts = CompileOptions {
        mobile_first: true,
        ..minimal()
    };
    let source = "ADD width @768px 100px\nADD height @768px 50px";
    let out = compile(source, &opts).unwrap();
    assert_eq!(
        out.css,
        "@media (min-width: 768px){.w_100px_m768{width:100px}.h_50px_m768{height:50px}}"
    );
}

#[test]
fn media_blocks_flush_after_unconditioned_rules() {
    let opts = CompileOptions {
        mobile_first: true,
        ..minimal()
    };
    let source = "ADD height @768px 50px\nADD width 100px";
    let out = compile(source, &opts).unwrap();
    assert_eq!(
        out.css,
        ".w_100px{width:100px}@media (min-width: 768px){.h_50px_m768{height:50px}}"
    );
}

#[test]
fn desktop_first_rewrites_min_width_to_max_width() {
    let out = compile("ADD width @768px 100px", &minimal()).unwrap();
    assert_eq!(
        out.css,
        "@media (max-width: 768px){.w_100px_m768{width:100px}}"
    );
}

// ============================================================================
// LAYERS
// ============================================================================

#[test]
fn layer_markers_are_invisible_without_layering() {
    let source = "LAYER main START\nADD width 100px\nLAYER main END\n";
    let out = compile(source, &minimal()).unwrap();
    assert_eq!(out.css, ".w_100px{width:100px}");
}

#[test]
fn layer_markers_do_not_indent_when_layering_is_off() {
    let opts = options(ClassNameFormat::Minimalistic, RenderMode::Standard);
    let source = "LAYER main START\nADD width 100px\nADD height 50px\nLAYER main END\n";
    let out = compile(source, &opts).unwrap();
    assert_eq!(
        out.css,
        ".w_100px {\n  width: 100px;\n}\n.h_50px {\n  height: 50px;\n}"
    );
}

#[test]
fn layering_emits_declaration_order_and_blocks() {
    let opts = CompileOptions {
        layers: true,
        ..minimal()
    };
    let source = "LAYER main START\nADD width 100px\nLAYER main END\n";
    let out = compile(source, &opts).unwrap();
    assert_eq!(
        out.css,
        "@layer main;@layer main {.w_100px{width:100px}}"
    );
}

#[test]
fn layered_standard_mode_indents_nested_rules() {
    let opts = CompileOptions {
        layers: true,
        mode: RenderMode::Standard,
        ..minimal()
    };
    let source = "LAYER main START\nADD width 100px\nLAYER main END\n";
    let out = compile(source, &opts).unwrap();
    assert_eq!(
        out.css,
        "@layer main;\n@layer main {\n  .w_100px {\n    width: 100px;\n  }\n}"
    );
}

#[test]
fn empty_layer_contributes_no_layer_block() {
    let opts = CompileOptions {
        layers: true,
        ..minimal()
    };
    let source = "LAYER empty START\nLAYER empty END\nADD width 100px\n";
    let out = compile(source, &opts).unwrap();
    assert_eq!(out.css, ".w_100px{width:100px}");
}

#[test]
fn unbalanced_layer_start_is_closed_at_the_end() {
    let opts = CompileOptions {
        layers: true,
        ..minimal()
    };
    let out = compile("LAYER main START\nADD width 100px\n", &opts).unwrap();
    assert_eq!(
        out.css,
        "@layer main;@layer main {.w_100px{width:100px}}"
    );
}

// ============================================================================
// COMMENTS AND METADATA
// ============================================================================

#[test]
fn public_comment_renders_as_css_comment() {
    let out = compile("//* layout\nADD width 100px", &minimal()).unwrap();
    assert_eq!(out.css, "/* layout */.w_100px{width:100px}");
}

#[test]
fn compilation_reports_variables_and_record_count() {
    let out = compile("VAR size = 50px\nADD width {size}", &minimal()).unwrap();
    assert_eq!(out.record_count, 1);
    assert_eq!(out.variables.get("size").map(String::as_str), Some("50px"));
    assert_eq!(out.css, ".w_sz{width:50px}");
}
