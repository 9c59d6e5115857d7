use anyhow::Result;
use nameplate_config::AppConfig;
use nameplate_store::Store;
use serde::Serialize;
use std::io::{self, Write};

pub mod completions;
pub mod people;
pub mod preview;
pub mod serve;

pub struct Context<'a> {
    pub store: &'a Store,
    pub json: bool,
    pub config: &'a AppConfig,
}

pub fn print_json<T: Serialize>(value: &T) -> Result<()> {
    let mut stdout = io::stdout().lock();
    serde_json::to_writer_pretty(&mut stdout, value)?;
    writeln!(stdout)?;
    Ok(())
}
