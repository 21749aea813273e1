//! Integration tests for galleria
//!
//! These tests drive the public API end to end: generate a manifest into a
//! temporary media tree, load it from disk or over a local HTTP server, and
//! run sessions against the loaded catalog.

use galleria::catalog::{self, GenerateOptions, LoadError, ManifestSource, MediaType};
use galleria::filter::{Category, CategoryMatch};
use galleria::render::{RecordingSink, RenderSink, ViewOptions, ViewerMedia, project};
use galleria::session::{Event, LoadState, Outcome, Session, SessionOptions};
use galleria::viewer::ResyncPolicy;
use std::fs;
use std::path::Path;
use tempfile::TempDir;
use tokio::io::{AsyncReadExt, AsyncWriteExt};
use tokio::net::TcpListener;
use tokio::task::JoinHandle;

const MANIFEST: &str = r#"{
  "generated": true,
  "count": 4,
  "items": [
    {"path": "Trips/Japan/fuji.jpg", "name": "fuji.jpg", "dir": "Trips/Japan", "type": "image"},
    {"path": "Trips/Japan/kyoto.png", "name": "kyoto.png", "dir": "Trips/Japan", "type": "image"},
    {"path": "Docs/manual.pdf", "name": "manual.pdf", "dir": "Docs", "type": "pdf"},
    {"path": "TripsArchive/2019.pdf", "name": "2019.pdf", "dir": "TripsArchive", "type": "pdf"}
  ]
}"#;

/// Helper function to create a file, including parent directories
fn touch(root: &Path, rel: &str) {
    let path = root.join(rel);
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent).unwrap();
    }
    fs::write(path, b"x").unwrap();
}

/// Helper function to build a media tree with noise the generator must skip
fn media_tree() -> TempDir {
    let tmp = TempDir::new().unwrap();
    for rel in [
        "Trips/Japan/fuji.jpg",
        "Trips/Japan/kyoto.PNG",
        "Trips/Italy/rome.jpeg",
        "Docs/manual.pdf",
        "Docs/notes.txt",
        "assets/logo.png",
        ".cache/thumb.jpg",
        "README.md",
        "cover.webp",
    ] {
        touch(tmp.path(), rel);
    }
    tmp
}

/// Helper function to serve one HTTP response and hand back the raw request
async fn serve_once(status_line: &'static str, body: &'static str) -> (String, JoinHandle<String>) {
    let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();

    let handle = tokio::spawn(async move {
        let (mut socket, _) = listener.accept().await.unwrap();
        let mut request = Vec::new();
        let mut buf = [0u8; 1024];
        while !request.windows(4).any(|w| w == b"\r\n\r\n") {
            let n = socket.read(&mut buf).await.unwrap();
            if n == 0 {
                break;
            }
            request.extend_from_slice(&buf[..n]);
        }

        let response = format!(
            "{status_line}\r\nContent-Type: application/json\r\nContent-Length: {}\r\nConnection: close\r\n\r\n{body}",
            body.len()
        );
        socket.write_all(response.as_bytes()).await.unwrap();
        socket.shutdown().await.ok();
        String::from_utf8_lossy(&request).to_lowercase()
    });

    (format!("http://{addr}/gallery/gallery.json"), handle)
}

#[test]
fn test_generate_then_load_from_disk() {
    let tmp = media_tree();
    let manifest = catalog::generate(tmp.path(), &GenerateOptions::default()).unwrap();
    let output = catalog::default_output(tmp.path());
    catalog::write_manifest(&manifest, &output).unwrap();

    let paths: Vec<_> = manifest.items.iter().map(|i| i.path.as_str()).collect();
    assert_eq!(
        paths,
        [
            "cover.webp",
            "Docs/manual.pdf",
            "Trips/Italy/rome.jpeg",
            "Trips/Japan/fuji.jpg",
            "Trips/Japan/kyoto.PNG",
        ]
    );
    assert_eq!(manifest.count, 5);

    let runtime = tokio::runtime::Builder::new_current_thread()
        .enable_all()
        .build()
        .unwrap();
    let source = ManifestSource::Local(output.clone());
    let loaded = runtime.block_on(catalog::load(&source)).unwrap();
    assert_eq!(loaded, manifest.items);

    let mut session = Session::new(SessionOptions::default()).with_source(source);
    session.apply_load(Ok(loaded));
    assert_eq!(session.categories()[0], Category::All);
    assert_eq!(session.categories().len(), 3);

    session.handle(Event::OpenItem(0));
    let expected = tmp.path().join("cover.webp").display().to_string();
    assert_eq!(session.asset_url(session.current_item().unwrap()), expected);
}

#[tokio::test]
async fn test_remote_load_bypasses_cache() {
    let (url, server) = serve_once("HTTP/1.1 200 OK", MANIFEST).await;
    let source = ManifestSource::parse(&url).unwrap();

    let catalog = catalog::load(&source).await.unwrap();
    assert_eq!(catalog.len(), 4);
    assert_eq!(catalog[2].media_type, MediaType::Pdf);
    assert_eq!(catalog[2].ext, ".pdf");

    let request = server.await.unwrap();
    assert!(request.starts_with("get /gallery/gallery.json"));
    assert!(request.contains("cache-control: no-cache, no-store"));
    assert!(request.contains("pragma: no-cache"));

    let session = Session::with_catalog(catalog, SessionOptions::default()).with_source(source);
    let manual = &session.catalog()[2];
    assert!(session.asset_url(manual).ends_with("/gallery/Docs/manual.pdf"));
}

#[tokio::test]
async fn test_remote_http_error_is_a_load_failure() {
    let (url, server) = serve_once("HTTP/1.1 404 Not Found", "{}").await;
    let source = ManifestSource::parse(&url).unwrap();

    let err = catalog::load(&source).await.unwrap_err();
    assert!(matches!(err, LoadError::Status { status: 404, .. }));
    server.await.unwrap();

    let mut session = Session::new(SessionOptions::default());
    session.apply_load(Err(err));
    assert!(matches!(session.load_state(), LoadState::Failed(msg) if msg.contains("404")));
    assert!(session.filtered().is_empty());
    assert_eq!(session.categories(), [Category::All]);

    let view = project(&session, &ViewOptions::default());
    assert!(view.load_error.unwrap().contains("404"));
}

#[tokio::test]
async fn test_malformed_manifest_is_a_load_failure() {
    let (url, server) = serve_once("HTTP/1.1 200 OK", "<html>not json</html>").await;
    let source = ManifestSource::parse(&url).unwrap();

    let err = catalog::load(&source).await.unwrap_err();
    assert!(matches!(err, LoadError::Parse(_)));
    server.await.unwrap();
}

#[test]
fn test_browsing_session_end_to_end() {
    let catalog = catalog::parse_manifest(MANIFEST).unwrap();
    let mut session = Session::with_catalog(catalog, SessionOptions::default());
    let mut sink = RecordingSink::new();
    let options = ViewOptions::default();

    // Prefix matching folds TripsArchive into Trips
    session.handle(Event::CategorySelected(Category::Named("Trips".into())));
    sink.render(&project(&session, &options)).unwrap();
    assert_eq!(sink.last().unwrap().result_stats, "3 items");

    // Open the last one and walk back
    assert_eq!(session.handle(Event::OpenItem(2)), Outcome::Navigated);
    assert_eq!(session.handle(Event::Next), Outcome::Ignored);
    assert_eq!(session.handle(Event::Previous), Outcome::Navigated);
    assert_eq!(session.current_item().unwrap().name, "kyoto.png");

    // Filtering PDFs away keeps the open image open
    session.handle(Event::TypeToggled(MediaType::Pdf, false));
    assert_eq!(session.current_item().unwrap().name, "kyoto.png");
    sink.render(&project(&session, &options)).unwrap();

    let view = sink.last().unwrap();
    let viewer = view.viewer.as_ref().unwrap();
    assert_eq!(viewer.media, ViewerMedia::Image { src: "Trips/Japan/kyoto.png".into() });
    assert_eq!((viewer.position, viewer.total), (2, 2));

    // A search that hides the open item clamps the cursor
    session.handle(Event::SearchChanged("fuji".into()));
    assert_eq!(session.cursor().index(), Some(0));
    assert!(session.cursor_is_valid());

    // Nothing left: the viewer closes
    session.handle(Event::SearchChanged("nothing".into()));
    assert!(!session.cursor().is_open());
    assert_eq!(sink.frames().len(), 2);
}

#[test]
fn test_segment_matching_and_close_policy() {
    let catalog = catalog::parse_manifest(MANIFEST).unwrap();
    let options = SessionOptions {
        category_match: CategoryMatch::Segment,
        resync: ResyncPolicy::Close,
    };
    let mut session = Session::with_catalog(catalog, options);

    session.handle(Event::CategorySelected(Category::Named("Trips".into())));
    assert_eq!(session.filtered().len(), 2);

    session.handle(Event::OpenItem(1));
    session.handle(Event::SearchChanged("fuji".into()));
    assert!(!session.cursor().is_open());
}
