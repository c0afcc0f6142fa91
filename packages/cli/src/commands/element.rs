use super::{parse_specs, render_output, OutputFormat};
use crate::config::Config;
use anyhow::Result;
use clap::Args;
use withbem_core::{make_helper_with_options, to_kebab_case, AutoMix};

#[derive(Debug, Args)]
pub struct ElementArgs {
    /// Component name, e.g. ProductCard
    pub component: String,

    /// Element name within the block
    pub element: String,

    /// Modifier specs, prefixed with the element name
    #[arg(short, long = "modifier")]
    pub modifiers: Vec<String>,

    /// Extra classes appended without prefixing
    #[arg(long)]
    pub mix: Vec<String>,

    /// Output format
    #[arg(short, long, value_enum, default_value = "text")]
    pub format: OutputFormat,
}

pub fn element(args: ElementArgs, config: &Config) -> Result<()> {
    println!("{}", compose_element(&args, config)?);
    Ok(())
}

fn compose_element(args: &ElementArgs, config: &Config) -> Result<String> {
    let helper = make_helper_with_options(
        &to_kebab_case(&args.component),
        AutoMix::none(),
        config.options.clone(),
    );

    let name = helper.element_with(&args.element, &parse_specs(&args.modifiers)?);
    let class_name = name.mix_with(&parse_specs(&args.mix)?);

    render_output(&class_name, args.format)
}
