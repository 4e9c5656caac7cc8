//! Default values as Dart constant expressions.

use dtox_ir::DefaultValue;

/// Render a default value as a Dart constant expression.
///
/// Lists are prefixed with `const` so they can be used as parameter defaults.
pub fn dart_literal(value: &DefaultValue) -> String {
    match value {
        DefaultValue::List(_) => format!("const {}", literal(value)),
        _ => literal(value),
    }
}

fn literal(value: &DefaultValue) -> String {
    match value {
        DefaultValue::Null => "null".to_string(),
        DefaultValue::Bool(b) => b.to_string(),
        DefaultValue::Int(i) => i.to_string(),
        DefaultValue::Float(f) => float(*f),
        DefaultValue::String(s) => quote(s),
        DefaultValue::List(items) => format!(
            "[{}]",
            items.iter().map(literal).collect::<Vec<_>>().join(", ")
        ),
    }
}

fn float(f: f64) -> String {
    if f.is_nan() {
        "double.nan".to_string()
    } else if f.is_infinite() {
        if f > 0.0 {
            "double.infinity"
        } else {
            "double.negativeInfinity"
        }
        .to_string()
    } else {
        f.to_string()
    }
}

fn quote(s: &str) -> String {
    let mut out = String::with_capacity(s.len() + 2);
    out.push('\'');
    for c in s.chars() {
        match c {
            '\'' => out.push_str("\\'"),
            '\\' => out.push_str("\\\\"),
            '$' => out.push_str("\\$"),
            '\n' => out.push_str("\\n"),
            '\r' => out.push_str("\\r"),
            '\t' => out.push_str("\\t"),
            c => out.push(c),
        }
    }
    out.push('\'');
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_scalars() {
        assert_eq!(dart_literal(&DefaultValue::Null), "null");
        assert_eq!(dart_literal(&DefaultValue::Bool(true)), "true");
        assert_eq!(dart_literal(&DefaultValue::Int(42)), "42");
        assert_eq!(dart_literal(&DefaultValue::Float(0.5)), "0.5");
    }

    #[test]
    fn test_non_finite_floats() {
        assert_eq!(
            dart_literal(&DefaultValue::Float(f64::INFINITY)),
            "double.infinity"
        );
        assert_eq!(
            dart_literal(&DefaultValue::Float(f64::NEG_INFINITY)),
            "double.negativeInfinity"
        );
        assert_eq!(dart_literal(&DefaultValue::Float(f64::NAN)), "double.nan");
    }

    #[test]
    fn test_strings_escape_interpolation() {
        assert_eq!(
            dart_literal(&DefaultValue::String("it's $5".into())),
            "'it\\'s \\$5'"
        );
    }

    #[test]
    fn test_lists_are_const() {
        let nested = DefaultValue::List(vec![
            DefaultValue::List(vec![DefaultValue::Int(1)]),
            DefaultValue::List(vec![]),
        ]);
        assert_eq!(dart_literal(&nested), "const [[1], []]");
        assert_eq!(dart_literal(&DefaultValue::List(vec![])), "const []");
    }
}
