use anyhow::Result;

use pageflow::{App, Settings};

#[tokio::main]
async fn main() -> Result<()> {
    let settings = Settings::new()?;
    settings.validate()?;

    // Logging is initialized in App::run()
    App::new(settings).run().await?;

    Ok(())
}
