use crate::error::{SpecError, SpecResult};
use crate::spec::{ClassSpec, Condition};
use serde_json::Value;

impl TryFrom<Value> for ClassSpec {
    type Error = SpecError;

    fn try_from(value: Value) -> Result<Self, Self::Error> {
        match value {
            Value::String(s) => Ok(ClassSpec::Text(s)),
            Value::Null | Value::Bool(false) => Ok(ClassSpec::Absent),
            Value::Array(items) => items
                .into_iter()
                .map(ClassSpec::try_from)
                .collect::<Result<Vec<_>, _>>()
                .map(ClassSpec::List),
            Value::Object(map) => map
                .into_iter()
                .map(|(name, value)| {
                    let condition = condition_from_json(&name, value)?;
                    Ok::<_, SpecError>((name, condition))
                })
                .collect::<Result<Vec<_>, _>>()
                .map(ClassSpec::Conditional),
            other @ (Value::Bool(true) | Value::Number(_)) => Err(SpecError::InvalidSpec {
                found: other.to_string(),
            }),
        }
    }
}

fn condition_from_json(name: &str, value: Value) -> SpecResult<Condition> {
    match value {
        Value::Bool(b) => Ok(Condition::Flag(b)),
        Value::String(s) => Ok(Condition::Text(s)),
        Value::Number(n) => Ok(Condition::Number(n.as_f64().unwrap_or(f64::NAN))),
        Value::Null => Ok(Condition::Null),
        other => Err(SpecError::InvalidCondition {
            name: name.to_string(),
            found: other.to_string(),
        }),
    }
}

impl ClassSpec {
    /// Parse a JSON document into a spec
    pub fn from_json(source: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(source)
    }
}
