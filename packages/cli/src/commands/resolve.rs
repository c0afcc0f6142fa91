use super::{parse_specs, render_output, OutputFormat};
use anyhow::Result;
use clap::Args;

#[derive(Debug, Args)]
pub struct ResolveArgs {
    /// Class specs: JSON (string, null, false, object, array) or plain class text
    pub specs: Vec<String>,

    /// Output format
    #[arg(short, long, value_enum, default_value = "text")]
    pub format: OutputFormat,
}

pub fn resolve(args: ResolveArgs) -> Result<()> {
    println!("{}", resolve_specs(&args)?);
    Ok(())
}

fn resolve_specs(args: &ResolveArgs) -> Result<String> {
    let specs = parse_specs(&args.specs)?;
    tracing::debug!(count = specs.len(), "Resolving class specs");
    render_output(&withbem_classnames::resolve(&specs), args.format)
}
