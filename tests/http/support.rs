use std::sync::{Arc, Mutex};

use recordstore::{http, Catalog, LogReporter, StoreOptions, Timing};

pub struct TestServer {
    pub base: String,
    pub catalog: Catalog,
    pub timings: Arc<Mutex<Vec<Timing>>>,
    // Keeps the data directory alive for the duration of the test.
    _dir: tempfile::TempDir,
}

/// Bind to port 0 and return the server with its actual address.
pub async fn start_server() -> TestServer {
    let dir = tempfile::tempdir().unwrap();
    let catalog = Catalog::open(dir.path(), StoreOptions::default()).unwrap();
    let timings = Arc::new(Mutex::new(Vec::new()));
    let app = http::router(&catalog, Arc::new(LogReporter::with_buffer(timings.clone())));

    let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    tokio::spawn(async move {
        axum::serve(listener, app).await.unwrap();
    });

    TestServer {
        base: format!("http://{addr}"),
        catalog,
        timings,
        _dir: dir,
    }
}
