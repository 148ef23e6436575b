//! Property expansion.
//!
//! An `ADD` statement names one base property and zero or more
//! identifiers; each identifier broadens the base into directional or
//! axis variants (`margin` + `$top` -> `margin-top`, `margin` + `$all`
//! -> every `margin*` property).

use crate::error::LuiError;
use crate::vocab;

/// Expands `base` by `identifier`, validating every resulting property
/// against the recognized set.
///
/// `none` keeps the base untouched; `all` selects every recognized
/// property sharing the base as a prefix (the base itself included);
/// any other identifier selects exactly `base-identifier`.
pub fn expand_property(base: &str, identifier: &str) -> Result<Vec<String>, LuiError> {
    match identifier {
        "none" => {
            if !vocab::PROPERTIES.contains(base) {
                return Err(LuiError::Semantic(format!("invalid property: {base}")));
            }
            Ok(vec![base.to_string()])
        }
        "all" => {
            let mut family: Vec<String> = vocab::PROPERTIES
                .iter()
                .filter(|p| p.starts_with(base))
                .map(|p| p.to_string())
                .collect();
            // phf iteration order is arbitrary; keep output deterministic.
            family.sort();
            if family.is_empty() {
                return Err(LuiError::Semantic(format!("invalid property: {base}")));
            }
            Ok(family)
        }
        suffix => {
            let expanded = format!("{base}-{suffix}");
            if !vocab::PROPERTIES.contains(expanded.as_str()) {
                return Err(LuiError::Semantic(format!("invalid property: {expanded}")));
            }
            Ok(vec![expanded])
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn none_keeps_the_base() {
        assert_eq!(expand_property("width", "none").unwrap(), vec!["width"]);
    }

    #[test]
    fn directional_suffix_forms_exactly_one_property() {
        assert_eq!(
            expand_property("margin", "top").unwrap(),
            vec!["margin-top"]
        );
    }

    #[test]
    fn all_selects_the_whole_prefix_family() {
        let family = expand_property("margin", "all").unwrap();
        assert!(family.contains(&"margin".to_string()));
        assert!(family.contains(&"margin-top".to_string()));
        assert!(family.contains(&"margin-inline".to_string()));
        assert!(family.iter().all(|p| p.starts_with("margin")));
    }

    #[test]
    fn unknown_expansion_is_fatal() {
        assert!(expand_property("opacity", "top").is_err());
        assert!(expand_property("marding", "none").is_err());
    }
}
