use anyhow::{Context as _, Result};
use clap::Args;
use nameplate_api::AppState;
use nameplate_config::{self as config, AppConfig};
use nameplate_store::Store;
use tokio::net::TcpListener;
use tracing::info;

#[derive(Debug, Args)]
pub struct ServeArgs {
    /// Address to listen on, overriding `server.bind` from the config file
    #[arg(long)]
    pub bind: Option<String>,
}

pub fn serve(store: Store, app_config: &AppConfig, args: ServeArgs) -> Result<()> {
    let bind = match args.bind.as_deref() {
        Some(raw) => config::parse_bind(raw)?,
        None => app_config.server.bind,
    };
    let state = AppState::new(store, app_config.naming.clone());

    let runtime = tokio::runtime::Builder::new_multi_thread()
        .enable_all()
        .build()
        .with_context(|| "start async runtime")?;
    runtime.block_on(async move {
        let listener = TcpListener::bind(bind)
            .await
            .with_context(|| format!("bind {bind}"))?;
        info!(
            domain = app_config.naming.emails().domain(),
            "serving nameplate API"
        );
        nameplate_api::serve(listener, state)
            .await
            .with_context(|| "serve http")
    })
}
