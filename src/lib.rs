pub mod api; // HTTP surface
pub mod config;
pub mod gate; // Chat domain gate
pub mod llm; // Language model client + conversation memory
pub mod prediction; // Measurement prediction relay

use tracing_subscriber::EnvFilter;

use crate::gate::DomainClassifier;

/// Run the HTTP server until Ctrl-C.
pub async fn run() -> Result<(), String> {
    // Initialize tracing
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| EnvFilter::new(config::default_log_filter())),
        )
        .init();

    tracing::info!("{} starting v{}", config::APP_NAME, config::APP_VERSION);

    // Compile every matcher now so a bad lexicon fails at startup, not on
    // the first request.
    let classifier =
        DomainClassifier::try_global().map_err(|e| format!("Invalid domain gate lexicon: {e}"))?;
    for (name, matcher) in classifier.matchers() {
        tracing::debug!(
            lexicon = %name,
            terms = name.terms().len(),
            mode = matcher.mode(),
            "Lexicon loaded"
        );
    }

    let app_config = config::AppConfig::from_env();
    if app_config.llm.api_key.is_none() {
        tracing::warn!("DEEPSEEK_API_KEY is not set; chat requests will be sent unauthenticated");
    }

    let ctx = api::ApiContext::from_config(&app_config)?;
    let server = api::start_server_on(ctx, app_config.bind_addr).await?;
    tracing::info!(
        addr = %server.session.server_addr,
        session_id = %server.session.session_id,
        "Listening"
    );

    if let Err(e) = tokio::signal::ctrl_c().await {
        tracing::error!("Cannot listen for Ctrl-C: {e}");
    }

    server.stop().await;
    Ok(())
}
