mod error;
mod json;
mod macros;
mod resolver;
mod spec;

pub use error::{SpecError, SpecResult};
pub use resolver::{resolve, resolve_into};
pub use spec::{ClassSpec, Condition};
