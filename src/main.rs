// src/main.rs
use flag_checker::{run_session, Metrics, VerifierConfig};
use tokio::io::BufReader;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    env_logger::init();

    let config = match VerifierConfig::resolve_path() {
        Some(path) => VerifierConfig::load(&path)?,
        None => {
            log::debug!("No config file found, using built-in flag");
            VerifierConfig::default()
        }
    };
    let verifier = config.build_verifier()?;
    let metrics = Metrics::new();

    let mut stdin = BufReader::new(tokio::io::stdin());
    let mut stdout = tokio::io::stdout();
    run_session(&verifier, &config, &mut stdin, &mut stdout, &metrics).await?;

    log::info!("{}", metrics.report());
    Ok(())
}
