//! Integration tests for document loading.
//!
//! HTTP sources are exercised against a throw-away responder bound to a
//! local port; directory sources use temporary directories.

use std::time::Duration;

use rueda_core::CategoryId;
use rueda_etl::{
    spawn_categories_load, spawn_moves_load, Document, DocumentLoader, DocumentSource, Liveness,
    LoadError,
};
use tempfile::TempDir;
use tokio::io::{AsyncReadExt, AsyncWriteExt};
use tokio::net::TcpListener;

const MOVES: &str = r#"[
    {"spanishName": "Sombrero", "englishName": "Hat", "difficulty": 2, "categoryId": "turn-complex"},
    {"spanishName": "", "englishName": ""},
    {"spanishName": "Enchufla", "difficulty": "x", "categoryId": "basic"}
]"#;

const CATEGORIES: &str = r#"[
    {"id": "basic", "name": "Basic Moves", "description": "Foundations"},
    {"id": "turn-complex", "name": "Complex Turns", "description": ""}
]"#;

type Route = (&'static str, u16, &'static str);

/// Serve canned responses keyed by request path. Unknown paths get a 404.
async fn serve(routes: Vec<Route>, delay: Duration) -> String {
    let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();

    tokio::spawn(async move {
        while let Ok((mut stream, _)) = listener.accept().await {
            let routes = routes.clone();
            tokio::spawn(async move {
                let mut buf = vec![0u8; 8192];
                let mut read = 0;
                loop {
                    let n = stream.read(&mut buf[read..]).await.unwrap_or(0);
                    read += n;
                    if n == 0
                        || read == buf.len()
                        || buf[..read].windows(4).any(|w| w == b"\r\n\r\n")
                    {
                        break;
                    }
                }

                let request = String::from_utf8_lossy(&buf[..read]).to_string();
                let path = request.split_whitespace().nth(1).unwrap_or("/").to_string();
                let (status, body) = routes
                    .iter()
                    .find(|(p, _, _)| *p == path)
                    .map(|(_, s, b)| (*s, *b))
                    .unwrap_or((404, "not found"));

                tokio::time::sleep(delay).await;
                let response = format!(
                    "HTTP/1.1 {status} Canned\r\nContent-Type: application/json\r\nContent-Length: {}\r\nConnection: close\r\n\r\n{body}",
                    body.len()
                );
                stream.write_all(response.as_bytes()).await.ok();
                stream.shutdown().await.ok();
            });
        }
    });

    format!("http://{addr}/rueda/")
}

fn http_loader(base: &str) -> DocumentLoader {
    DocumentLoader::new(DocumentSource::parse(base).unwrap()).unwrap()
}

fn directory_with(moves: Option<&str>, categories: Option<&str>) -> TempDir {
    let dir = TempDir::new().unwrap();
    if let Some(moves) = moves {
        std::fs::write(dir.path().join("rueda-moves.json"), moves).unwrap();
    }
    if let Some(categories) = categories {
        std::fs::write(dir.path().join("categories.json"), categories).unwrap();
    }
    dir
}

#[tokio::test]
async fn test_http_moves_load_relative_to_base() {
    let base = serve(
        vec![("/rueda/rueda-moves.json", 200, MOVES)],
        Duration::ZERO,
    )
    .await;

    let ingested = http_loader(&base).load_moves().await.unwrap();
    let names: Vec<_> = ingested.moves.iter().map(|m| m.spanish_name.as_str()).collect();
    assert_eq!(names, vec!["Sombrero", "Enchufla"]);
    assert_eq!(ingested.dropped, 1);
    assert_eq!(ingested.warnings.len(), 1);
}

#[tokio::test]
async fn test_http_categories_load_from_origin_root() {
    let base = serve(vec![("/categories.json", 200, CATEGORIES)], Duration::ZERO).await;

    let catalog = http_loader(&base).load_categories().await.unwrap();
    assert_eq!(catalog.len(), 2);
    assert_eq!(catalog.display_name(CategoryId::TurnComplex), "Complex Turns");
}

#[tokio::test]
async fn test_http_error_status_fails_whole_load() {
    let base = serve(
        vec![("/rueda/rueda-moves.json", 500, "oops")],
        Duration::ZERO,
    )
    .await;

    let err = http_loader(&base).load_moves().await.unwrap_err();
    assert!(matches!(
        err,
        LoadError::Status {
            document: Document::Moves,
            status: 500
        }
    ));
}

#[tokio::test]
async fn test_http_missing_document_is_status_error() {
    let base = serve(Vec::new(), Duration::ZERO).await;
    let err = http_loader(&base).load_moves().await.unwrap_err();
    assert!(matches!(err, LoadError::Status { status: 404, .. }));
}

#[tokio::test]
async fn test_http_malformed_json_fails_whole_load() {
    let base = serve(
        vec![("/rueda/rueda-moves.json", 200, r#"[{"spanishName": "Sombrero"#)],
        Duration::ZERO,
    )
    .await;

    let err = http_loader(&base).load_moves().await.unwrap_err();
    assert!(matches!(
        err,
        LoadError::Parse {
            document: Document::Moves,
            ..
        }
    ));
}

#[tokio::test]
async fn test_http_connection_refused_is_http_error() {
    let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    drop(listener);

    let err = http_loader(&format!("http://{addr}/"))
        .load_moves()
        .await
        .unwrap_err();
    assert!(matches!(err, LoadError::Http { .. }));
}

#[tokio::test]
async fn test_configured_timeout_fails_stalled_load() {
    let base = serve(
        vec![("/rueda/rueda-moves.json", 200, MOVES)],
        Duration::from_secs(5),
    )
    .await;
    let loader = DocumentLoader::with_timeout(
        DocumentSource::parse(&base).unwrap(),
        Some(Duration::from_millis(200)),
    )
    .unwrap();

    let err = loader.load_moves().await.unwrap_err();
    assert!(matches!(err, LoadError::Http { .. }));
}

#[tokio::test]
async fn test_category_failure_degrades_to_empty_catalog() {
    let base = serve(vec![("/categories.json", 503, "")], Duration::ZERO).await;
    let loader = http_loader(&base);

    assert!(loader.load_categories().await.is_err());
    let catalog = loader.load_categories_or_empty().await;
    assert!(catalog.is_empty());
    assert_eq!(catalog.display_name(CategoryId::Styling), "styling");
}

#[tokio::test]
async fn test_directory_source_loads_both_documents() {
    let dir = directory_with(Some(MOVES), Some(CATEGORIES));
    let loader = DocumentLoader::new(DocumentSource::Directory(dir.path().to_path_buf())).unwrap();

    let ingested = loader.load_moves().await.unwrap();
    assert_eq!(ingested.moves.len(), 2);

    let catalog = loader.load_categories().await.unwrap();
    assert_eq!(catalog.display_name(CategoryId::Basic), "Basic Moves");
}

#[tokio::test]
async fn test_directory_source_missing_moves_is_io_error() {
    let dir = directory_with(None, Some(CATEGORIES));
    let loader = DocumentLoader::new(DocumentSource::Directory(dir.path().to_path_buf())).unwrap();

    let err = loader.load_moves().await.unwrap_err();
    assert!(matches!(err, LoadError::Io { .. }));
    assert_eq!(err.document(), Some(Document::Moves));

    // The category document is independent of the move document.
    assert_eq!(loader.load_categories().await.unwrap().len(), 2);
}

#[tokio::test]
async fn test_spawned_loads_deliver_while_live() {
    let dir = directory_with(Some(MOVES), Some(CATEGORIES));
    let loader = DocumentLoader::new(DocumentSource::Directory(dir.path().to_path_buf())).unwrap();
    let liveness = Liveness::new();

    let moves_rx = spawn_moves_load(&loader, liveness.token());
    let categories_rx = spawn_categories_load(&loader, liveness.token());

    let catalog = categories_rx.await.unwrap().unwrap();
    let ingested = moves_rx.await.unwrap().unwrap();
    assert_eq!(catalog.len(), 2);
    assert_eq!(ingested.moves.len(), 2);
}

#[tokio::test]
async fn test_spawned_load_discarded_after_teardown() {
    let base = serve(
        vec![("/rueda/rueda-moves.json", 200, MOVES)],
        Duration::from_millis(200),
    )
    .await;
    let loader = http_loader(&base);
    let liveness = Liveness::new();

    let rx = spawn_moves_load(&loader, liveness.token());
    liveness.teardown();

    // The sender is dropped without delivering anything.
    assert!(rx.await.is_err());
}
