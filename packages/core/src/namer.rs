use crate::options::BemOptions;
use std::fmt;
use withbem_classnames::{resolve, resolve_into, ClassSpec};

/// Classes a parent contributes to every block-level name of a child.
///
/// This is the single place where an incoming mix-in value is turned into a
/// string; the namer only ever stores the converted text.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash)]
pub struct AutoMix(String);

impl AutoMix {
    pub fn none() -> Self {
        Self::default()
    }

    pub fn into_string(self) -> String {
        self.0
    }
}

impl fmt::Display for AutoMix {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for AutoMix {
    fn from(s: &str) -> Self {
        AutoMix(s.to_string())
    }
}

impl From<String> for AutoMix {
    fn from(s: String) -> Self {
        AutoMix(s)
    }
}

impl From<&String> for AutoMix {
    fn from(s: &String) -> Self {
        AutoMix(s.clone())
    }
}

impl<T: Into<AutoMix>> From<Option<T>> for AutoMix {
    fn from(value: Option<T>) -> Self {
        value.map(Into::into).unwrap_or_default()
    }
}

/// Block identifier plus the auto-mix it applies to block-level names
#[derive(Debug, Clone, PartialEq)]
pub struct BemName {
    block_id: String,
    auto_mix: String,
    options: BemOptions,
}

impl BemName {
    pub fn new(block_id: impl Into<String>, auto_mix: impl Into<AutoMix>) -> Self {
        Self::with_options(block_id, auto_mix, BemOptions::default())
    }

    pub fn with_options(
        block_id: impl Into<String>,
        auto_mix: impl Into<AutoMix>,
        options: BemOptions,
    ) -> Self {
        Self {
            block_id: block_id.into(),
            auto_mix: auto_mix.into().into_string(),
            options,
        }
    }

    pub fn block_id(&self) -> &str {
        &self.block_id
    }

    /// `block auto-mix block--modifier...`
    pub fn block(&self, modifiers: &[ClassSpec]) -> String {
        let prefixed = self.prefixed(&self.block_id, modifiers);
        resolve(&[
            ClassSpec::text(self.block_id.as_str()),
            ClassSpec::text(self.auto_mix.as_str()),
            ClassSpec::Text(prefixed),
        ])
    }

    /// `block__element block__element--modifier...`, never carrying the auto-mix
    pub fn element(&self, element: &str, modifiers: &[ClassSpec]) -> String {
        let element_id = self.element_id(element);
        let prefixed = self.prefixed(&element_id, modifiers);

        let mut out = String::new();
        resolve_into(&mut out, &[ClassSpec::Text(element_id), ClassSpec::Text(prefixed)]);
        out
    }

    pub fn element_id(&self, element: &str) -> String {
        format!(
            "{}{}{}",
            self.block_id,
            self.options.element_separator,
            element.trim()
        )
    }

    /// Resolve `modifiers` and put `prefix` plus the modifier separator in
    /// front of every token. Nothing resolves to nothing.
    pub fn prefixed(&self, prefix: &str, modifiers: &[ClassSpec]) -> String {
        resolve(modifiers)
            .split(' ')
            .filter(|token| !token.is_empty())
            .map(|token| format!("{}{}{}", prefix, self.options.modifier_separator, token))
            .collect::<Vec<_>>()
            .join(" ")
    }
}

impl fmt::Display for BemName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.block(&[]))
    }
}

/// Convert a component name to a block identifier (`MyWidget` -> `my-widget`)
pub fn to_kebab_case(name: &str) -> String {
    let mut out = String::with_capacity(name.len() + 4);
    let mut previous_lower = false;

    for c in name.chars() {
        if previous_lower && c.is_ascii_uppercase() {
            out.push('-');
        }
        out.push(c);
        previous_lower = c.is_ascii_lowercase();
    }

    out.to_lowercase()
}

#[cfg(test)]
mod tests {
    use super::*;
    use withbem_classnames::conditional;

    #[test]
    fn test_kebab_case() {
        assert_eq!(to_kebab_case("MyWidget"), "my-widget");
        assert_eq!(to_kebab_case("Alpha"), "alpha");
        assert_eq!(to_kebab_case("HTMLButton"), "htmlbutton");
        assert_eq!(to_kebab_case("navBarItem"), "nav-bar-item");
        assert_eq!(to_kebab_case(""), "");
    }

    #[test]
    fn test_prefixed_empty_stays_empty() {
        let name = BemName::new("alpha", AutoMix::none());
        assert_eq!(name.prefixed("alpha", &[]), "");
        assert_eq!(name.prefixed("alpha", &[conditional! { "x" => false }]), "");
    }

    #[test]
    fn test_prefixed_splits_tokens() {
        let name = BemName::new("alpha", AutoMix::none());
        assert_eq!(
            name.prefixed("alpha", &["  bravo   charlie ".into()]),
            "alpha--bravo alpha--charlie"
        );
    }

    #[test]
    fn test_block_carries_auto_mix_before_modifiers() {
        let name = BemName::new("alpha", "mixed-in");
        assert_eq!(name.block(&["bravo".into()]), "alpha mixed-in alpha--bravo");
    }

    #[test]
    fn test_element_trims_name() {
        let name = BemName::new("alpha", "mixed-in");
        assert_eq!(name.element(" foo ", &[]), "alpha__foo");
    }

    #[test]
    fn test_custom_separators() {
        let options = BemOptions {
            element_separator: "-".to_string(),
            modifier_separator: "_".to_string(),
        };
        let name = BemName::with_options("card", AutoMix::none(), options);
        assert_eq!(name.block(&["wide".into()]), "card card_wide");
        assert_eq!(name.element("title", &["big".into()]), "card-title card-title_big");
    }
}
