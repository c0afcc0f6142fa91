pub mod block;
pub mod element;
pub mod init;
pub mod resolve;

pub use block::{block, BlockArgs};
pub use element::{element, ElementArgs};
pub use init::{init, InitArgs};
pub use resolve::{resolve, ResolveArgs};

use anyhow::{anyhow, Result};
use clap::ValueEnum;
use withbem_classnames::ClassSpec;

/// How composed class names are printed
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    Text,
    Json,
}

/// Read a command-line argument as a class spec.
///
/// Valid JSON is decoded as a spec; anything that is not JSON is class text.
/// An argument opening with `{`, `[` or `"` must decode.
pub fn parse_spec(arg: &str) -> Result<ClassSpec> {
    let looks_like_json = arg.trim_start().starts_with(['{', '[', '"']);
    match ClassSpec::from_json(arg) {
        Ok(spec) => Ok(spec),
        Err(err) if !looks_like_json && (err.is_syntax() || err.is_eof()) => {
            Ok(ClassSpec::text(arg))
        }
        Err(err) => Err(anyhow!("Invalid class spec '{}': {}", arg, err)),
    }
}

pub fn parse_specs(args: &[String]) -> Result<Vec<ClassSpec>> {
    args.iter().map(String::as_str).map(parse_spec).collect()
}

pub fn render_output(class_name: &str, format: OutputFormat) -> Result<String> {
    match format {
        OutputFormat::Text => Ok(class_name.to_string()),
        OutputFormat::Json => Ok(serde_json::to_string(&serde_json::json!({
            "className": class_name
        }))?),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_plain_text_is_class_text() {
        assert_eq!(parse_spec("px-2 me-1").unwrap(), ClassSpec::text("px-2 me-1"));
    }

    #[test]
    fn test_json_is_decoded() {
        let spec = parse_spec(r#"{"active": true, "size": "lg"}"#).unwrap();
        assert_eq!(spec.resolve(), "active size-lg");
    }

    #[test]
    fn test_invalid_json_spec_is_an_error() {
        assert!(parse_spec("true").is_err());
    }

    #[test]
    fn test_truncated_json_is_an_error() {
        assert!(parse_spec(r#"{"active": true"#).is_err());
        assert!(parse_spec(r#"["a""#).is_err());
        assert!(parse_spec(r#" "unterminated"#).is_err());
    }

    #[test]
    fn test_non_json_text_with_braces_inside_is_class_text() {
        assert_eq!(parse_spec("a{b").unwrap(), ClassSpec::text("a{b"));
    }

    #[test]
    fn test_json_output() {
        assert_eq!(
            render_output("alpha alpha--bravo", OutputFormat::Json).unwrap(),
            r#"{"className":"alpha alpha--bravo"}"#
        );
        assert_eq!(render_output("alpha", OutputFormat::Text).unwrap(), "alpha");
    }
}
