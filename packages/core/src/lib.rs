//! BEM class-name composition for UI components.
//!
//! A [`BemHelper`] owns one block identifier and hands out block, element and
//! modifier names for it. Components wrapped with [`with_bem`] receive a
//! helper that is recomputed only when the parent-supplied class changes, and
//! that class is mixed into every block-level name the child produces.

mod binder;
mod error;
mod helper;
mod memo;
mod mixable;
mod namer;
mod options;
mod template;
mod vdom;

pub use binder::{component_fn, with_bem, with_bem_named, BemInstance, BemProps, Component, FnComponent, WithBem};
pub use error::{TemplateError, TemplateResult};
pub use helper::{make_helper, make_helper_with_options, BemHelper};
pub use memo::Memo;
pub use mixable::MixableString;
pub use namer::{to_kebab_case, AutoMix, BemName};
pub use options::BemOptions;
pub use template::{Template, TemplateBuilder};
pub use vdom::VNode;

pub use withbem_classnames::{classes, conditional, resolve, ClassSpec, Condition};
