//! Naming conventions: pluralization, snake casing and attribute labels

use crate::enums::host::HostType;

/// Marker that routes an attribute name to its human-readable label
pub const TRANSLATED_PREFIX: &str = "t_";

/// Convert a name to plural form using English grammar rules
pub fn pluralize(name: &str) -> String {
    if name.is_empty() {
        return name.to_string();
    }

    let lower = name.to_lowercase();

    // Words ending in 'z' double it before adding 'es'
    if lower.ends_with('z') && !lower.ends_with("tz") {
        return format!("{}zes", name);
    }
    if lower.ends_with('s') || lower.ends_with("sh") || lower.ends_with("ch") || lower.ends_with('x') {
        return format!("{}es", name);
    }

    // Consonant + 'y' -> 'ies'
    if lower.ends_with('y') && lower.len() > 1 {
        let second_last = lower.chars().rev().nth(1).unwrap_or('a');
        if !"aeiou".contains(second_last) {
            return format!("{}ies", &name[..name.len() - 1]);
        }
    }

    if lower.ends_with("fe") {
        return format!("{}ves", &name[..name.len() - 2]);
    }
    if lower.ends_with('f') {
        return format!("{}ves", &name[..name.len() - 1]);
    }

    // Consonant + 'o' -> add 'es'
    if lower.ends_with('o') && lower.len() > 1 {
        let second_last = lower.chars().rev().nth(1).unwrap_or('a');
        if !"aeiou".contains(second_last) {
            return format!("{}es", name);
        }
    }

    format!("{}s", name)
}

/// Underscore a model name: `EnumExtTest::EnumT` -> `enum_ext_test/enum_t`
pub fn snake_case(name: &str) -> String {
    let mut out = String::with_capacity(name.len() + 4);

    for (index, segment) in name.split("::").enumerate() {
        if index > 0 {
            out.push('/');
        }

        let chars: Vec<char> = segment.chars().collect();
        for (i, ch) in chars.iter().enumerate() {
            if ch.is_uppercase() {
                let prev_lower = i > 0 && (chars[i - 1].is_lowercase() || chars[i - 1].is_ascii_digit());
                let prev_upper = i > 0 && chars[i - 1].is_uppercase();
                let next_lower = chars.get(i + 1).map_or(false, |c| c.is_lowercase());
                if prev_lower || (prev_upper && next_lower) {
                    out.push('_');
                }
                out.extend(ch.to_lowercase());
            } else {
                out.push(*ch);
            }
        }
    }

    out
}

/// Label for an attribute name.
///
/// A `t_`-prefixed name whose remainder is a host column is labelled as that
/// column, so `t_status` reads the same as `status`. Everything else goes to
/// `fallback` unchanged.
pub fn human_attribute_name(host: &HostType, name: &str, fallback: impl Fn(&str) -> String) -> String {
    match name.strip_prefix(TRANSLATED_PREFIX) {
        Some(column) if host.has_column(column) => fallback(column),
        _ => fallback(name),
    }
}

/// Default label: `waiting_for_payment` -> `Waiting for payment`
pub fn humanize(name: &str) -> String {
    let spaced = name.trim_end_matches("_id").replace('_', " ");
    let mut chars = spaced.trim().chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}
