use crate::spec::{ClassSpec, Condition};

/// Flatten class specs into one space-separated class string.
///
/// Tokens keep the left-to-right, depth-first order of their sources and are
/// never de-duplicated. Whitespace runs collapse to a single space, so the
/// result has no leading, trailing or doubled separators.
pub fn resolve(specs: &[ClassSpec]) -> String {
    let mut out = String::new();
    resolve_into(&mut out, specs);
    out
}

/// Append the resolved tokens of `specs` to an existing class string
pub fn resolve_into(out: &mut String, specs: &[ClassSpec]) {
    for spec in specs {
        write_spec(out, spec);
    }
}

fn write_spec(out: &mut String, spec: &ClassSpec) {
    match spec {
        ClassSpec::Text(text) => push_tokens(out, text),
        ClassSpec::Absent => {}
        ClassSpec::List(items) => resolve_into(out, items),
        ClassSpec::Conditional(entries) => {
            for (name, condition) in entries {
                if !condition.is_truthy() {
                    continue;
                }
                match condition {
                    Condition::Flag(true) => push_tokens(out, name),
                    other => push_tokens(out, &format!("{}-{}", name, other)),
                }
            }
        }
    }
}

fn push_tokens(out: &mut String, text: &str) {
    for token in text.split_whitespace() {
        if !out.is_empty() {
            out.push(' ');
        }
        out.push_str(token);
    }
}
