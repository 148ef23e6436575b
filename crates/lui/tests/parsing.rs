//! Integration tests for statement parsing and expansion.
//!
//! Exercises the parser over real token streams: ADD/VAR statements,
//! variable resolution, property expansion, deduplication and layer
//! elision.

use lui::parser::{Declaration, Parser, Record};
use lui::store::VariableStore;
use lui::tokenizer::tokenize;
use lui::vocab;
use lui::LuiError;

fn parse(source: &str) -> Result<Vec<Record>, LuiError> {
    let tokens = tokenize(source)?;
    let mut store = VariableStore::new();
    Parser::new(&mut store).parse(&tokens)
}

fn declarations(records: &[Record]) -> Vec<&Declaration> {
    records
        .iter()
        .filter_map(|r| match r {
            Record::Declaration(decl) => Some(decl),
            _ => None,
        })
        .collect()
}

// ============================================================================
// ADD STATEMENTS
// ============================================================================

#[test]
fn parses_simple_add_statement() {
    let records = parse("ADD width 100px").unwrap();
    let decls = declarations(&records);
    assert_eq!(decls.len(), 1);
    assert_eq!(decls[0].property, "width");
    assert_eq!(decls[0].values, vec!["100px"]);
    assert_eq!(decls[0].optional_name, None);
    assert_eq!(decls[0].pseudo_class, None);
    assert_eq!(decls[0].media, None);
}

#[test]
fn percent_unit_is_fused_onto_the_value() {
    let records = parse("ADD width 50%").unwrap();
    assert_eq!(declarations(&records)[0].values, vec!["50%"]);
}

#[test]
fn pseudo_class_is_stored_with_its_colon() {
    let records = parse("ADD background :hover blue").unwrap();
    let decls = declarations(&records);
    assert_eq!(decls[0].pseudo_class.as_deref(), Some(":hover"));
    assert_eq!(decls[0].values, vec!["blue"]);
}

#[test]
fn line_without_keyword_is_rejected() {
    let err = parse("width 100px").unwrap_err();
    assert!(err.to_string().contains("no keyword found"));
}

#[test]
fn line_with_two_keywords_is_rejected() {
    let err = parse("ADD VAR width 100px").unwrap_err();
    assert!(err.to_string().contains("multiple keywords"));
}

#[test]
fn reserved_keyword_without_handler_is_rejected() {
    let err = parse("STYLE width 100px").unwrap_err();
    assert!(err.to_string().contains("invalid keyword: STYLE"));
}

// ============================================================================
// PROPERTY EXPANSION
// ============================================================================

#[test]
fn all_identifier_expands_to_the_whole_family() {
    let records = parse("ADD margin $all 4px").unwrap();
    let decls = declarations(&records);

    let family: Vec<&&str> = vocab::PROPERTIES
        .iter()
        .filter(|p| p.starts_with("margin"))
        .collect();
    assert_eq!(decls.len(), family.len());
    assert!(decls.iter().any(|d| d.property == "margin-top"));
    assert!(decls.iter().all(|d| d.property.starts_with("margin")));
    assert!(decls.iter().all(|d| d.values == vec!["4px"]));
}

#[test]
fn directional_identifier_expands_to_one_property() {
    let records = parse("ADD margin $top 4px").unwrap();
    let decls = declarations(&records);
    assert_eq!(decls.len(), 1);
    assert_eq!(decls[0].property, "margin-top");
}

#[test]
fn several_identifiers_expand_independently() {
    let records = parse("ADD margin $top $bottom 4px").unwrap();
    let properties: Vec<&str> = declarations(&records)
        .iter()
        .map(|d| d.property.as_str())
        .collect();
    assert_eq!(properties, vec!["margin-top", "margin-bottom"]);
}

#[test]
fn unknown_expansion_target_is_fatal() {
    let err = parse("ADD opacity $top 4px").unwrap_err();
    assert!(err.to_string().contains("invalid property: opacity-top"));
}

// ============================================================================
// VARIABLES
// ============================================================================

#[test]
fn reference_resolves_to_the_bound_value() {
    let records = parse("VAR size = 50px\nADD width {size}").unwrap();
    let decls = declarations(&records);
    assert_eq!(decls[0].values, vec!["50px"]);
    assert_eq!(decls[0].optional_name.as_deref(), Some("size"));
}

#[test]
fn reference_unit_override_wins() {
    let records = parse("VAR size = 50px\nADD width {size}rem").unwrap();
    assert_eq!(declarations(&records)[0].values, vec!["50rem"]);
}

#[test]
fn undefined_reference_is_fatal() {
    let err = parse("ADD width {missing}").unwrap_err();
    assert!(err.to_string().contains("variable not found: missing"));
}

#[test]
fn redefinition_replaces_the_binding() {
    let records = parse("VAR size = 50px\nVAR size = 60px\nADD width {size}").unwrap();
    assert_eq!(declarations(&records)[0].values, vec!["60px"]);
}

#[test]
fn multi_value_binding_renders_space_separated() {
    let records = parse("VAR gut = 10px 20px\nADD padding {gut}").unwrap();
    let decls = declarations(&records);
    assert_eq!(decls[0].values, vec!["10px 20px"]);
    assert_eq!(decls[0].optional_name.as_deref(), Some("gut"));
}

#[test]
fn percent_binding_keeps_its_unit() {
    let records = parse("VAR half = 50%\nADD width {half}").unwrap();
    assert_eq!(declarations(&records)[0].values, vec!["50%"]);
}

#[test]
fn mixed_reference_and_literal_suppresses_the_name() {
    let records = parse("VAR size = 50px\nADD margin {size} 4px").unwrap();
    let decls = declarations(&records);
    assert_eq!(decls[0].values, vec!["50px", "4px"]);
    assert_eq!(decls[0].optional_name, None);
}

#[test]
fn var_without_value_is_rejected() {
    let err = parse("VAR size").unwrap_err();
    assert!(err.to_string().contains("value"));
}

// ============================================================================
// MEDIA CONDITIONS
// ============================================================================

#[test]
fn media_literal_becomes_a_min_width_condition() {
    let records = parse("ADD padding @768px 20px").unwrap();
    let decls = declarations(&records);
    assert_eq!(decls[0].media.as_deref(), Some("(min-width: 768px)"));
    assert_eq!(decls[0].values, vec!["20px"]);
}

#[test]
fn bare_media_number_defaults_to_px() {
    let records = parse("ADD padding @768 20px").unwrap();
    assert_eq!(
        declarations(&records)[0].media.as_deref(),
        Some("(min-width: 768px)")
    );
}

#[test]
fn media_variable_resolves_through_the_store() {
    let records = parse("VAR tablet = 768px\nADD padding @{tablet} 20px").unwrap();
    assert_eq!(
        declarations(&records)[0].media.as_deref(),
        Some("(min-width: 768px)")
    );
}

#[test]
fn unresolved_media_variable_drops_the_condition() {
    let records = parse("ADD padding @{tablet} 20px").unwrap();
    let decls = declarations(&records);
    assert_eq!(decls.len(), 1);
    assert_eq!(decls[0].media, None);
}

// ============================================================================
// DEDUPLICATION
// ============================================================================

#[test]
fn identical_statements_collapse_to_one_record() {
    let source = "ADD margin 100px\n".repeat(100);
    let records = parse(&source).unwrap();
    assert_eq!(records.len(), 1);
}

#[test]
fn distinct_values_are_kept_apart() {
    let records = parse("ADD margin 100px\nADD margin 200px").unwrap();
    assert_eq!(declarations(&records).len(), 2);
}

#[test]
fn repeated_public_comments_collapse_to_one_record() {
    let records = parse("//* note\n//* note\nADD width 4px").unwrap();
    assert_eq!(records.len(), 2);
    assert_eq!(records[0], Record::Comment("note".to_string()));
}

// ============================================================================
// COMMENTS
// ============================================================================

#[test]
fn private_comments_are_dropped() {
    let records = parse("// internal note\nADD width 4px").unwrap();
    assert_eq!(records.len(), 1);
    assert!(matches!(records[0], Record::Declaration(_)));
}

#[test]
fn public_comments_become_records() {
    let records = parse("//* section: layout\nADD width 4px").unwrap();
    assert_eq!(records.len(), 2);
    assert_eq!(records[0], Record::Comment("section: layout".to_string()));
}

#[test]
fn trailing_public_comment_rides_with_the_statement() {
    let records = parse("ADD width 4px //* the default").unwrap();
    assert_eq!(records[0], Record::Comment("the default".to_string()));
    assert!(matches!(records[1], Record::Declaration(_)));
}

// ============================================================================
// LAYER ELISION
// ============================================================================

#[test]
fn empty_layer_span_is_elided() {
    let records = parse("LAYER a START\nLAYER a END\nADD width 4px").unwrap();
    assert_eq!(records.len(), 1);
    assert!(matches!(records[0], Record::Declaration(_)));
}

#[test]
fn nested_empty_spans_collapse_to_nothing() {
    let records = parse("LAYER a START\nLAYER b START\nLAYER b END\nLAYER a END\n").unwrap();
    assert!(records.is_empty());
}

#[test]
fn layer_with_content_keeps_its_markers() {
    let records = parse("LAYER a START\nADD width 4px\nLAYER a END\n").unwrap();
    assert_eq!(records.len(), 3);
    assert!(matches!(records[0], Record::Layer { .. }));
    assert!(matches!(records[1], Record::Declaration(_)));
    assert!(matches!(records[2], Record::Layer { .. }));
}

#[test]
fn deduplication_can_empty_a_layer() {
    let source = "ADD width 4px\nLAYER a START\nADD width 4px\nLAYER a END\n";
    let records = parse(source).unwrap();
    assert_eq!(records.len(), 1);
    assert!(matches!(records[0], Record::Declaration(_)));
}
