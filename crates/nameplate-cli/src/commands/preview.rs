use crate::commands::print_json;
use anyhow::Result;
use clap::Args;
use nameplate_config::AppConfig;
use nameplate_core::dto::PreviewDto;

#[derive(Debug, Args)]
pub struct PreviewArgs {
    #[arg(long)]
    pub name: String,
}

pub fn preview(config: &AppConfig, json: bool, args: PreviewArgs) -> Result<()> {
    let draft = config.naming.draft(&args.name)?;

    if json {
        print_json(&PreviewDto::from(draft))?;
    } else {
        println!("name: {}", draft.name);
        println!("email: {}", draft.email);
    }
    Ok(())
}
