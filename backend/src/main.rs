use backend::{
    build_rocket,
    config::Config,
    quotes::ProxyQuoteClient,
    routes::AppState,
};
use shuttle_runtime::CustomError;
use tracing::info;

#[shuttle_runtime::main]
async fn rocket(
    #[shuttle_runtime::Secrets] secret_store: shuttle_runtime::SecretStore,
) -> shuttle_rocket::ShuttleRocket {
    info!("🚀 Starting stock price checker");

    let config = Config::from_lookup(|key| secret_store.get(key));
    info!(
        "📈 Quotes from {} (timeout {}s)",
        config.quote_api_url,
        config.quote_timeout.as_secs()
    );

    let quotes = ProxyQuoteClient::new(&config).map_err(CustomError::new)?;
    let rocket = build_rocket(AppState::new(quotes));

    Ok(rocket.into())
}
