use serde::{Deserialize, Serialize};

/// Separators used when composing BEM names
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct BemOptions {
    /// Joins a block and an element (`block__element`)
    pub element_separator: String,

    /// Joins a block or element and a modifier (`block--modifier`)
    pub modifier_separator: String,
}

impl Default for BemOptions {
    fn default() -> Self {
        Self {
            element_separator: "__".to_string(),
            modifier_separator: "--".to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_partial_options_fill_defaults() {
        let options: BemOptions = serde_json::from_str(r#"{ "modifierSeparator": "_" }"#).unwrap();
        assert_eq!(options.element_separator, "__");
        assert_eq!(options.modifier_separator, "_");
    }
}
