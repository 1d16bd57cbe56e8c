mod commands;
mod render;

use std::io;

use commands::{CommandLine, Commands};
use rickmorty_core::AppGraph;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "rickmorty_core=warn".into()),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    let commands = CommandLine::parse_args();
    let config = commands.config()?;
    tracing::debug!(base_url = %config.base_url, "starting");
    let graph = AppGraph::new(&config)?;

    match commands.command {
        Commands::List => {
            let controller = graph.list_controller();
            render::present(controller.subscribe(), render::list, &mut io::stdout()).await?;
        }
        Commands::Show { id } => {
            let controller = graph.detail_controller();
            let updates = controller.subscribe();
            controller.load(id);
            render::present(updates, render::detail, &mut io::stdout()).await?;
        }
    }
    Ok(())
}
