use pulseboard::{config::Config, model::app::AppState, router, startup};

#[tokio::main]
async fn main() {
    dotenvy::dotenv().ok();
    tracing_subscriber::fmt::init();

    let config = match Config::from_env() {
        Ok(config) => config,
        Err(e) => {
            eprintln!("Configuration error: {}", e);
            std::process::exit(1);
        }
    };

    let db = match startup::connect_to_database(&config).await {
        Ok(db) => db,
        Err(e) => {
            eprintln!("Database error: {}", e);
            std::process::exit(1);
        }
    };

    let session = startup::session_layer();

    let app = router::routes()
        .with_state(AppState { db })
        .layer(session);

    tracing::info!("Starting server on {}", config.listen_addr);

    let listener = tokio::net::TcpListener::bind(&config.listen_addr)
        .await
        .unwrap_or_else(|e| {
            eprintln!("Failed to bind {}: {}", config.listen_addr, e);
            std::process::exit(1);
        });

    axum::serve(listener, app).await.unwrap();
}
