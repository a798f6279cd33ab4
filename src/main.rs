mod client;
mod model;

#[cfg(feature = "server")]
mod server;

use client::App;

fn main() {
    #[cfg(not(feature = "server"))]
    dioxus::launch(App);

    #[cfg(feature = "server")]
    dioxus::serve(|| async move {
        use std::sync::Arc;

        use dioxus_logger::tracing;

        use crate::server::{
            capabilities::Capabilities, config::Config, service::credential::PlainTextVerifier,
            startup, state::AppState,
        };

        dotenvy::dotenv().ok();
        let config = Config::from_env()?;

        let db = startup::connect_to_database(&config).await?;
        let session = startup::connect_to_session(&db).await?;

        // Optional analytics tables are probed once here; request handlers
        // branch on the flags instead of catching per-request failures.
        let capabilities = Capabilities::detect(&db).await;
        tracing::info!(
            "Starting server (visit log: {}, service usage log: {})",
            capabilities.visits,
            capabilities.service_usage
        );

        let verifier = Arc::new(PlainTextVerifier);
        startup::check_for_admin(&db, &config, verifier.as_ref()).await?;

        let mut router = dioxus::server::router(App);
        let server_routes = server::router::router(&config)
            .with_state(AppState::new(db, &config, capabilities, verifier))
            .layer(session);
        router = router.merge(server_routes);

        Ok(router)
    })
}
