use crate::namer::AutoMix;
use crate::template::Template;
use std::fmt;
use std::ops::Deref;
use withbem_classnames::{resolve, resolve_into, ClassSpec};

/// A composed class string that can have extra classes mixed in.
///
/// Renders as its base string through `Display`, `AsRef<str>` and `Deref`.
/// Attribute bindings are expected to go through one of these conversions;
/// nothing is coerced implicitly.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct MixableString {
    base: String,
}

impl MixableString {
    /// Whitespace in `base` is normalized like any other class text
    pub fn new(base: impl Into<String>) -> Self {
        Self {
            base: resolve(&[ClassSpec::Text(base.into())]),
        }
    }

    pub fn as_str(&self) -> &str {
        &self.base
    }

    /// Append `template`'s classes verbatim, without any BEM prefix
    pub fn mix(&self, template: impl Into<Template>) -> String {
        self.mix_with(&template.into().normalize())
    }

    pub fn mix_with(&self, extras: &[ClassSpec]) -> String {
        let mut out = self.base.clone();
        resolve_into(&mut out, extras);
        out
    }
}

impl fmt::Display for MixableString {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.base)
    }
}

impl Deref for MixableString {
    type Target = str;

    fn deref(&self) -> &str {
        &self.base
    }
}

impl AsRef<str> for MixableString {
    fn as_ref(&self) -> &str {
        &self.base
    }
}

impl PartialEq<str> for MixableString {
    fn eq(&self, other: &str) -> bool {
        self.base == other
    }
}

impl PartialEq<&str> for MixableString {
    fn eq(&self, other: &&str) -> bool {
        self.base == *other
    }
}

impl From<MixableString> for String {
    fn from(value: MixableString) -> Self {
        value.base
    }
}

impl From<MixableString> for ClassSpec {
    fn from(value: MixableString) -> Self {
        ClassSpec::Text(value.base)
    }
}

impl From<&MixableString> for ClassSpec {
    fn from(value: &MixableString) -> Self {
        ClassSpec::Text(value.base.clone())
    }
}

impl From<MixableString> for AutoMix {
    fn from(value: MixableString) -> Self {
        AutoMix::from(value.base)
    }
}

impl From<&MixableString> for AutoMix {
    fn from(value: &MixableString) -> Self {
        AutoMix::from(value.base.as_str())
    }
}
