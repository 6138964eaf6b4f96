use log::info;
use profile_form_server::{app, config::Config, profile::CoreProfileFormValidator, state::AppState};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();
    tracing_subscriber::fmt().init();

    let config = Config::load()?;
    let app_state = AppState { profile_validator: CoreProfileFormValidator::new_dyn() };

    let bind_addr = config.server.bind_addr();
    let listener = tokio::net::TcpListener::bind(&bind_addr).await?;
    info!("Listening on {}", bind_addr);
    axum::serve(listener, app(app_state)).await?;

    Ok(())
}
