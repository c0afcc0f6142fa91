use crate::mixable::MixableString;
use crate::namer::{AutoMix, BemName};
use crate::options::BemOptions;
use crate::template::Template;
use std::fmt;
use withbem_classnames::{resolve_into, ClassSpec};

/// Per-component naming helper bound to one block.
///
/// `block` treats every literal as a modifier. `element` takes its name from
/// the leading literal, prefixes only the dynamic values, and appends any later
/// literals as plain classes.
#[derive(Debug, Clone, PartialEq)]
pub struct BemHelper {
    name: BemName,
    class_name: String,
}

pub fn make_helper(block_id: &str, auto_mix: impl Into<AutoMix>) -> BemHelper {
    make_helper_with_options(block_id, auto_mix, BemOptions::default())
}

pub fn make_helper_with_options(
    block_id: &str,
    auto_mix: impl Into<AutoMix>,
    options: BemOptions,
) -> BemHelper {
    BemHelper::new(BemName::with_options(block_id, auto_mix, options))
}

impl BemHelper {
    pub fn new(name: BemName) -> Self {
        let class_name = name.block(&[]);
        Self { name, class_name }
    }

    pub fn name(&self) -> &BemName {
        &self.name
    }

    /// The bare block name, including any auto-mix
    pub fn class_name(&self) -> &str {
        &self.class_name
    }

    pub fn block(&self, template: impl Into<Template>) -> MixableString {
        self.block_with(&template.into().normalize())
    }

    pub fn block_with(&self, modifiers: &[ClassSpec]) -> MixableString {
        MixableString::new(self.name.block(modifiers))
    }

    pub fn element(&self, template: impl Into<Template>) -> MixableString {
        let template = template.into();
        let mut out = self.name.element(template.head(), template.values());
        let mixes: Vec<ClassSpec> = template.tail().iter().map(ClassSpec::from).collect();
        resolve_into(&mut out, &mixes);
        MixableString::new(out)
    }

    pub fn element_with(&self, element: &str, modifiers: &[ClassSpec]) -> MixableString {
        MixableString::new(self.name.element(element, modifiers))
    }

    /// The bare block name followed by unprefixed extra classes
    pub fn mix(&self, template: impl Into<Template>) -> String {
        let mut out = self.class_name.clone();
        resolve_into(&mut out, &template.into().normalize());
        out
    }
}

impl fmt::Display for BemHelper {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.class_name)
    }
}

impl AsRef<str> for BemHelper {
    fn as_ref(&self) -> &str {
        &self.class_name
    }
}

impl From<&BemHelper> for AutoMix {
    fn from(helper: &BemHelper) -> Self {
        AutoMix::from(helper.class_name.as_str())
    }
}

impl From<&BemHelper> for ClassSpec {
    fn from(helper: &BemHelper) -> Self {
        ClassSpec::text(helper.class_name.as_str())
    }
}
