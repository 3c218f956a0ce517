#![allow(non_snake_case)]

mod client;

#[cfg(feature = "server")]
use voyager::server;

fn main() {
    #[cfg(not(feature = "server"))]
    dioxus::launch(client::App);

    #[cfg(feature = "server")]
    dioxus::serve(|| async move {
        use dioxus_logger::tracing;

        use crate::server::{config::Config, model::app::AppState, startup};

        dotenvy::dotenv().ok();
        let config = match Config::from_env() {
            Ok(config) => config,
            Err(e) => {
                eprintln!("Configuration error: {}", e);
                std::process::exit(1);
            }
        };

        let ai_client = startup::build_ai_client(&config);
        let session = startup::connect_to_session(&config)
            .await
            .unwrap_or_else(|e| {
                eprintln!("Failed to connect to session store: {}", e);
                std::process::exit(1);
            });
        let db = startup::connect_to_database(&config)
            .await
            .unwrap_or_else(|e| {
                eprintln!("Failed to connect to database: {}", e);
                std::process::exit(1);
            });

        tracing::info!("Starting server with model {}", ai_client.model());

        let mut router = dioxus::server::router(client::App);
        let server_routes = server::router::routes()
            .with_state(AppState { db, ai_client })
            .layer(session);
        router = router.merge(server_routes);

        Ok(router)
    })
}
