use super::{parse_specs, render_output, OutputFormat};
use crate::config::Config;
use anyhow::Result;
use clap::Args;
use withbem_core::{make_helper_with_options, to_kebab_case};

#[derive(Debug, Args)]
pub struct BlockArgs {
    /// Component name, e.g. ProductCard
    pub component: String,

    /// Modifier specs, prefixed with the block name
    #[arg(short, long = "modifier")]
    pub modifiers: Vec<String>,

    /// Class passed down by a parent, mixed into the block
    #[arg(short, long)]
    pub parent_class: Option<String>,

    /// Extra classes appended without prefixing
    #[arg(long)]
    pub mix: Vec<String>,

    /// Output format
    #[arg(short, long, value_enum, default_value = "text")]
    pub format: OutputFormat,
}

pub fn block(args: BlockArgs, config: &Config) -> Result<()> {
    println!("{}", compose_block(&args, config)?);
    Ok(())
}

fn compose_block(args: &BlockArgs, config: &Config) -> Result<String> {
    let helper = make_helper_with_options(
        &to_kebab_case(&args.component),
        args.parent_class.as_deref(),
        config.options.clone(),
    );

    let name = helper.block_with(&parse_specs(&args.modifiers)?);
    let class_name = name.mix_with(&parse_specs(&args.mix)?);

    render_output(&class_name, args.format)
}
