use crate::error::{TemplateError, TemplateResult};
use withbem_classnames::ClassSpec;

/// Literal fragments interleaved with dynamic values.
///
/// Mirrors a string-interpolation call: every value sits between two
/// fragments, so there is always exactly one more fragment than values.
/// Fragments may be empty.
#[derive(Debug, Clone, PartialEq)]
pub struct Template {
    fragments: Vec<String>,
    values: Vec<ClassSpec>,
}

impl Template {
    pub fn new(fragments: Vec<String>, values: Vec<ClassSpec>) -> TemplateResult<Self> {
        if fragments.len() != values.len() + 1 {
            return Err(TemplateError::Arity {
                fragments: fragments.len(),
                values: values.len(),
            });
        }
        Ok(Self { fragments, values })
    }

    pub fn builder() -> TemplateBuilder {
        TemplateBuilder::default()
    }

    pub fn fragments(&self) -> &[String] {
        &self.fragments
    }

    pub fn values(&self) -> &[ClassSpec] {
        &self.values
    }

    /// The leading fragment; always present
    pub fn head(&self) -> &str {
        self.fragments.first().map(String::as_str).unwrap_or("")
    }

    /// Every fragment after the leading one
    pub fn tail(&self) -> &[String] {
        self.fragments.get(1..).unwrap_or(&[])
    }

    /// Interleave fragments and values in call order
    pub fn normalize(&self) -> Vec<ClassSpec> {
        let mut specs = Vec::with_capacity(self.fragments.len() + self.values.len());
        let mut fragments = self.fragments.iter();

        if let Some(first) = fragments.next() {
            specs.push(ClassSpec::from(first));
        }
        for (value, fragment) in self.values.iter().zip(fragments) {
            specs.push(value.clone());
            specs.push(ClassSpec::from(fragment));
        }

        specs
    }
}

impl Default for Template {
    fn default() -> Self {
        Self {
            fragments: vec![String::new()],
            values: Vec::new(),
        }
    }
}

impl From<&str> for Template {
    fn from(literal: &str) -> Self {
        Self {
            fragments: vec![literal.to_string()],
            values: Vec::new(),
        }
    }
}

impl From<String> for Template {
    fn from(literal: String) -> Self {
        Self {
            fragments: vec![literal],
            values: Vec::new(),
        }
    }
}

impl From<ClassSpec> for Template {
    fn from(value: ClassSpec) -> Self {
        Self {
            fragments: vec![String::new(), String::new()],
            values: vec![value],
        }
    }
}

/// Incremental construction of a [`Template`] that keeps its framing valid.
///
/// Adjacent values get an empty fragment between them and adjacent literals
/// are joined with a space.
#[derive(Debug, Default)]
pub struct TemplateBuilder {
    fragments: Vec<String>,
    values: Vec<ClassSpec>,
}

impl TemplateBuilder {
    pub fn literal(mut self, literal: impl AsRef<str>) -> Self {
        let literal = literal.as_ref();
        let ends_with_literal = self.fragments.len() > self.values.len();
        match self.fragments.last_mut() {
            Some(last) if ends_with_literal => {
                last.push(' ');
                last.push_str(literal);
            }
            _ => self.fragments.push(literal.to_string()),
        }
        self
    }

    pub fn value(mut self, value: impl Into<ClassSpec>) -> Self {
        if self.fragments.len() == self.values.len() {
            self.fragments.push(String::new());
        }
        self.values.push(value.into());
        self
    }

    pub fn build(mut self) -> Template {
        if self.fragments.len() == self.values.len() {
            self.fragments.push(String::new());
        }
        Template {
            fragments: self.fragments,
            values: self.values,
        }
    }
}

/// Build a [`Template`] from string literals and dynamic values, in order.
///
/// ```
/// use withbem_core::{conditional, template};
///
/// let t = template!["item ", conditional! { "selected" => true }, " me-2"];
/// assert_eq!(t.fragments(), ["item ", " me-2"]);
/// assert_eq!(t.values().len(), 1);
/// ```
#[macro_export]
macro_rules! template {
    (@build $builder:expr;) => {
        $builder.build()
    };
    (@build $builder:expr; $literal:literal $(, $($rest:tt)*)?) => {
        $crate::template!(@build $builder.literal($literal); $($($rest)*)?)
    };
    (@build $builder:expr; $value:expr $(, $($rest:tt)*)?) => {
        $crate::template!(@build $builder.value($value); $($($rest)*)?)
    };
    () => {
        $crate::Template::default()
    };
    ($($part:tt)+) => {
        $crate::template!(@build $crate::Template::builder(); $($part)+)
    };
}
