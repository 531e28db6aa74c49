#[tokio::main]
async fn main() {
    stockroom_observability::init();

    let config = stockroom_api::config::ApiConfig::from_env();

    let app = stockroom_api::app::build_app(&config).await;

    let listener = tokio::net::TcpListener::bind(&config.bind_addr)
        .await
        .expect("failed to bind listen address");

    tracing::info!("listening on {}", listener.local_addr().unwrap());

    axum::serve(listener, app).await.unwrap();
}
