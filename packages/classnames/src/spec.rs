use serde::Deserialize;
use std::fmt;

/// Input accepted by the resolver.
///
/// Any nesting of these variants resolves to a class string; there is no
/// invalid shape once a value has been constructed.
#[derive(Debug, Clone, PartialEq, Default, Deserialize)]
#[serde(try_from = "serde_json::Value")]
pub enum ClassSpec {
    /// Literal class text, trimmed on resolution
    Text(String),
    /// Contributes nothing (null, undefined, false)
    #[default]
    Absent,
    /// Names gated by a condition, kept in insertion order
    Conditional(Vec<(String, Condition)>),
    /// Nested specs, flattened as if passed at the top level
    List(Vec<ClassSpec>),
}

/// Value attached to a name inside a conditional spec
#[derive(Debug, Clone, PartialEq)]
pub enum Condition {
    Flag(bool),
    Text(String),
    Number(f64),
    Null,
}

impl ClassSpec {
    pub fn text(text: impl Into<String>) -> Self {
        ClassSpec::Text(text.into())
    }

    pub fn list<I, T>(items: I) -> Self
    where
        I: IntoIterator<Item = T>,
        T: Into<ClassSpec>,
    {
        ClassSpec::List(items.into_iter().map(Into::into).collect())
    }

    pub fn conditional<I, K, V>(entries: I) -> Self
    where
        I: IntoIterator<Item = (K, V)>,
        K: Into<String>,
        V: Into<Condition>,
    {
        ClassSpec::Conditional(
            entries
                .into_iter()
                .map(|(name, value)| (name.into(), value.into()))
                .collect(),
        )
    }

    /// Resolve this single spec to a class string
    pub fn resolve(&self) -> String {
        crate::resolve(std::slice::from_ref(self))
    }
}

impl Condition {
    pub fn is_truthy(&self) -> bool {
        match self {
            Condition::Flag(b) => *b,
            Condition::Text(s) => !s.is_empty(),
            Condition::Number(n) => *n != 0.0 && !n.is_nan(),
            Condition::Null => false,
        }
    }
}

impl fmt::Display for Condition {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Condition::Flag(b) => write!(f, "{}", b),
            Condition::Text(s) => f.write_str(s),
            Condition::Number(n) => write_number(f, *n),
            Condition::Null => f.write_str("null"),
        }
    }
}

/// Numbers print the way a browser stringifies them: `Infinity`, and
/// exponent notation with an explicit sign outside `1e-6..1e21`.
fn write_number(f: &mut fmt::Formatter<'_>, n: f64) -> fmt::Result {
    if n.is_nan() {
        return f.write_str("NaN");
    }
    if n.is_infinite() {
        return f.write_str(if n > 0.0 { "Infinity" } else { "-Infinity" });
    }

    let magnitude = n.abs();
    if magnitude != 0.0 && !(1e-6..1e21).contains(&magnitude) {
        let formatted = format!("{:e}", n);
        match formatted.split_once('e') {
            Some((mantissa, exponent)) if !exponent.starts_with('-') => {
                write!(f, "{}e+{}", mantissa, exponent)
            }
            _ => f.write_str(&formatted),
        }
    } else {
        write!(f, "{}", n)
    }
}

impl From<&str> for ClassSpec {
    fn from(s: &str) -> Self {
        ClassSpec::Text(s.to_string())
    }
}

impl From<String> for ClassSpec {
    fn from(s: String) -> Self {
        ClassSpec::Text(s)
    }
}

impl From<&String> for ClassSpec {
    fn from(s: &String) -> Self {
        ClassSpec::Text(s.clone())
    }
}

impl<T: Into<ClassSpec>> From<Option<T>> for ClassSpec {
    fn from(value: Option<T>) -> Self {
        value.map(Into::into).unwrap_or(ClassSpec::Absent)
    }
}

impl<T: Into<ClassSpec>> From<Vec<T>> for ClassSpec {
    fn from(items: Vec<T>) -> Self {
        ClassSpec::list(items)
    }
}

impl<T: Into<ClassSpec>, const N: usize> From<[T; N]> for ClassSpec {
    fn from(items: [T; N]) -> Self {
        ClassSpec::list(items)
    }
}

impl From<bool> for Condition {
    fn from(b: bool) -> Self {
        Condition::Flag(b)
    }
}

impl From<&str> for Condition {
    fn from(s: &str) -> Self {
        Condition::Text(s.to_string())
    }
}

impl From<String> for Condition {
    fn from(s: String) -> Self {
        Condition::Text(s)
    }
}

impl From<f64> for Condition {
    fn from(n: f64) -> Self {
        Condition::Number(n)
    }
}

impl From<i32> for Condition {
    fn from(n: i32) -> Self {
        Condition::Number(n as f64)
    }
}

impl From<i64> for Condition {
    fn from(n: i64) -> Self {
        Condition::Number(n as f64)
    }
}

impl From<usize> for Condition {
    fn from(n: usize) -> Self {
        Condition::Number(n as f64)
    }
}

impl<T: Into<Condition>> From<Option<T>> for Condition {
    fn from(value: Option<T>) -> Self {
        value.map(Into::into).unwrap_or(Condition::Null)
    }
}
