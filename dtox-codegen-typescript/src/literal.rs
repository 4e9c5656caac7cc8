//! Default values as TypeScript literals.

use dtox_ir::DefaultValue;

/// Render a default value as a TypeScript expression.
pub fn ts_literal(value: &DefaultValue) -> String {
    match value {
        DefaultValue::Null => "null".to_string(),
        DefaultValue::Bool(b) => b.to_string(),
        DefaultValue::Int(i) => i.to_string(),
        DefaultValue::Float(f) => float(*f),
        DefaultValue::String(s) => quote(s),
        DefaultValue::List(items) => format!(
            "[{}]",
            items.iter().map(ts_literal).collect::<Vec<_>>().join(", ")
        ),
    }
}

fn float(f: f64) -> String {
    if f.is_nan() {
        "NaN".to_string()
    } else if f.is_infinite() {
        if f > 0.0 { "Infinity" } else { "-Infinity" }.to_string()
    } else {
        f.to_string()
    }
}

fn quote(s: &str) -> String {
    let mut out = String::with_capacity(s.len() + 2);
    out.push('"');
    for c in s.chars() {
        match c {
            '"' => out.push_str("\\\""),
            '\\' => out.push_str("\\\\"),
            '\n' => out.push_str("\\n"),
            '\r' => out.push_str("\\r"),
            '\t' => out.push_str("\\t"),
            c => out.push(c),
        }
    }
    out.push('"');
    out
}
