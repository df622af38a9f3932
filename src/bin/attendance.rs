use anyhow::{Context, Result};
use roster::config::{App, Config};
use roster::db::{init_attendance_schema, init_db};
use roster::menu::{Console, attendance};
use roster::logging;
use std::io;
use tracing::info;

#[tokio::main(flavor = "current_thread")]
async fn main() -> Result<()> {
    let config = Config::from_env(App::Attendance)?;
    logging::init(&config);

    info!("Attendance system starting...");

    let mut conn = init_db(&config.database_url)
        .await
        .with_context(|| format!("Failed to open {}", config.database_url))?;
    init_attendance_schema(&mut conn)
        .await
        .context("Failed to prepare attendance tables")?;

    let mut console = Console::new(io::stdin().lock(), io::stdout().lock());
    attendance::run(&mut conn, &mut console).await?;
    Ok(())
}
