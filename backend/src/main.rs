use backend::store::SnippetStore;
use backend::AppState;
use std::sync::Arc;
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .init();

    let snippets_path =
        std::env::var("SNIPPETS_PATH").unwrap_or_else(|_| "data/snippets.json".to_string());

    let state = Arc::new(AppState {
        store: SnippetStore::new(snippets_path),
    });

    let app = backend::app(state);

    let addr = std::net::SocketAddr::from(([0, 0, 0, 0], 3000));
    tracing::info!("listening on {}", addr);
    let listener = tokio::net::TcpListener::bind(addr).await.unwrap();
    axum::serve(listener, app).await.unwrap();
}
