use syn::{Attribute, LitStr};

/// Value of `key = "..."` inside an attribute such as `#[enum_ext(rename = "asap")]`
pub fn get_attr_string(attr: &Attribute, key: &str) -> Option<String> {
    let mut result = None;
    let _ = attr.parse_nested_meta(|meta| {
        if meta.path.is_ident(key) {
            let lit: LitStr = meta.value()?.parse()?;
            result = Some(lit.value());
        }
        Ok(())
    });
    result
}

/// Convert a CamelCase variant name into the snake_case enum key
pub fn snake_case(ident: &str) -> String {
    let mut out = String::with_capacity(ident.len() + 4);
    let chars: Vec<char> = ident.chars().collect();

    for (i, ch) in chars.iter().enumerate() {
        if ch.is_uppercase() {
            let prev_lower = i > 0 && (chars[i - 1].is_lowercase() || chars[i - 1].is_ascii_digit());
            let next_lower = chars.get(i + 1).map_or(false, |c| c.is_lowercase());
            let prev_upper = i > 0 && chars[i - 1].is_uppercase();
            if prev_lower || (prev_upper && next_lower) {
                out.push('_');
            }
            out.extend(ch.to_lowercase());
        } else {
            out.push(*ch);
        }
    }

    out
}
