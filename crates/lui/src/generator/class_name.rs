//! Class-name synthesis.
//!
//! Selectors are derived from the declaration itself: a prefix built
//! from the property segments, a suffix from the variable name or the
//! values, and short tags for pseudo-class and media refinements.
//! `.w_100px`, `.w_sz`, `.b_blue_h`, `.p_20px_m768`.

use crate::options::ClassNameFormat;
use crate::parser::Declaration;

/// Characters dropped entirely when a value becomes a class-name part.
const SPECIAL_CHARACTERS: [char; 6] = ['#', '(', ')', ',', '.', '/'];

/// Synthesizes the class selector (including the leading `.`).
pub fn format_class_name(decl: &Declaration, format: ClassNameFormat) -> String {
    let prefix = match format {
        ClassNameFormat::Minimalistic | ClassNameFormat::Standard => decl
            .property
            .split('-')
            .filter_map(|part| part.chars().next())
            .collect::<String>()
            .to_lowercase(),
        ClassNameFormat::FullName => decl.property.split('-').map(capitalize).collect(),
    };

    let suffix = match &decl.optional_name {
        Some(name) if format == ClassNameFormat::Minimalistic => strip_vowels(name),
        Some(name) => name.clone(),
        None => {
            let joined = decl
                .values
                .iter()
                .map(|value| value.split(' ').collect::<Vec<_>>().join("-"))
                .collect::<Vec<_>>()
                .join("-");
            let joined = if joined.is_empty() {
                "none".to_string()
            } else {
                joined
            };
            safe_class_name(&joined)
        }
    };

    let mut name = format!(".{prefix}_{suffix}");

    if let Some(pseudo) = &decl.pseudo_class {
        let tag = pseudo_tag(pseudo, format);
        name.push('_');
        name.push_str(&tag);
    }

    if let Some(media) = &decl.media {
        let digits: String = media.chars().filter(char::is_ascii_digit).collect();
        name.push_str("_m");
        name.push_str(&digits);
    }

    name
}

/// Drops special characters and rewrites `%` to `p` so the result is a
/// valid class name.
fn safe_class_name(value: &str) -> String {
    value
        .chars()
        .filter(|c| !SPECIAL_CHARACTERS.contains(c))
        .map(|c| if c == '%' { 'p' } else { c })
        .collect()
}

fn pseudo_tag(pseudo: &str, format: ClassNameFormat) -> String {
    let name: String = pseudo
        .trim_start_matches(':')
        .chars()
        .take_while(|c| c.is_ascii_alphanumeric() || *c == '-')
        .collect();

    match format {
        ClassNameFormat::Minimalistic => name.chars().take(1).collect(),
        ClassNameFormat::Standard => strip_vowels(&name),
        ClassNameFormat::FullName => name,
    }
}

fn strip_vowels(value: &str) -> String {
    value
        .chars()
        .filter(|c| !matches!(c.to_ascii_lowercase(), 'a' | 'e' | 'i' | 'o' | 'u'))
        .collect()
}

fn capitalize(part: &str) -> String {
    let mut chars = part.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn decl(property: &str, values: &[&str]) -> Declaration {
        Declaration::new(property, values.iter().map(|v| v.to_string()).collect())
    }

    #[test]
    fn minimalistic_prefix_takes_segment_initials() {
        let d = decl("background-color", &["#fff"]);
        assert_eq!(
            format_class_name(&d, ClassNameFormat::Minimalistic),
            ".bc_fff"
        );
    }

    #[test]
    fn full_name_prefix_capitalizes_segments() {
        let d = decl("width", &["100px"]);
        assert_eq!(
            format_class_name(&d, ClassNameFormat::FullName),
            ".Width_100px"
        );
    }

    #[test]
    fn optional_name_is_vowel_stripped_only_in_minimalistic() {
        let mut d = decl("width", &["50px"]);
        d.optional_name = Some("size".to_string());
        assert_eq!(format_class_name(&d, ClassNameFormat::Minimalistic), ".w_sz");
        assert_eq!(format_class_name(&d, ClassNameFormat::Standard), ".w_size");
    }

    #[test]
    fn percent_becomes_p() {
        let d = decl("width", &["50%"]);
        assert_eq!(format_class_name(&d, ClassNameFormat::Minimalistic), ".w_50p");
    }

    #[test]
    fn pseudo_and_media_tags() {
        let mut d = decl("width", &["100px"]);
        d.pseudo_class = Some(":hover".to_string());
        assert_eq!(
            format_class_name(&d, ClassNameFormat::Minimalistic),
            ".w_100px_h"
        );

        let mut d = decl("width", &["100px"]);
        d.media = Some("(min-width: 768px)".to_string());
        assert_eq!(
            format_class_name(&d, ClassNameFormat::Minimalistic),
            ".w_100px_m768"
        );
    }
}
