use std::sync::Arc;

use clap::Parser;
use feedview::cli::Cli;
use feedview::config::{Config, ViewConfig};
use feedview::fetch::{HttpClient, ReqwestClient};
use feedview::logging::{self, LogTarget};
use feedview::view::{DataListView, RenderOutput};

#[tokio::main(flavor = "current_thread")]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    let mut config = match &cli.config {
        Some(path) => Config::load_from(path)?,
        None => Config::load()?,
    };
    cli.apply_to(&mut config);
    config.validate()?;

    let target = if cli.plain {
        LogTarget::Stderr
    } else {
        LogTarget::for_terminal(config.logging.file.clone())
    };
    logging::init(target)?;

    let client = Arc::new(ReqwestClient::new(&config.http)?);

    if cli.plain {
        let output = fetch_once(client, config.view).await;
        print!("{}", output);
        if matches!(output, RenderOutput::Error(_)) {
            std::process::exit(1);
        }
        return Ok(());
    }

    feedview::ui::run(client, config.view).await?;
    Ok(())
}

async fn fetch_once<C: HttpClient>(client: Arc<C>, view_config: ViewConfig) -> RenderOutput {
    let mut view = DataListView::new(client, view_config.mode);
    view.activate(view_config.endpoint, view_config.param);
    // Manual mode waits for a trigger; running headless is that trigger.
    view.trigger_fetch();
    view.settle().await;
    let output = view.render();
    view.deactivate();
    output
}
