use anyhow::{Context, Result};
use roster::config::{App, Config};
use roster::db::{init_marks_schema, init_db};
use roster::menu::{Console, marks};
use roster::logging;
use std::io;
use tracing::info;

#[tokio::main(flavor = "current_thread")]
async fn main() -> Result<()> {
    let config = Config::from_env(App::Marks)?;
    logging::init(&config);

    info!("Marks system starting...");

    let mut conn = init_db(&config.database_url)
        .await
        .with_context(|| format!("Failed to open {}", config.database_url))?;
    init_marks_schema(&mut conn)
        .await
        .context("Failed to prepare student tables")?;

    let mut console = Console::new(io::stdin().lock(), io::stdout().lock());
    marks::run(&mut conn, &mut console).await?;
    Ok(())
}
