use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    // Missing secrets are fatal: the process does not start without both keys.
    let secrets = match config::Secrets::load() {
        Ok(secrets) => secrets,
        Err(e) => {
            eprintln!("failed to load secrets: {e}");
            std::process::exit(1);
        }
    };

    let addr = std::env::var("SIBYL_ADDR").ok();
    if let Err(e) = serve::run_serve(addr.as_deref(), secrets).await {
        eprintln!("serve error: {e}");
        std::process::exit(1);
    }
}
