use std::path::PathBuf;

use axum::body::{Body, to_bytes};
use axum::http::{Request, StatusCode, header};
use tower::ServiceExt;

use super::*;

/// Fresh asset tree under the system temp dir, unique per test.
fn asset_tree(name: &str) -> PathBuf {
    let root = std::env::temp_dir().join(format!("portfolio-routes-{}-{name}", std::process::id()));
    let _ = std::fs::remove_dir_all(&root);
    std::fs::create_dir_all(root.join("pkg")).unwrap();
    std::fs::create_dir_all(root.join("profile")).unwrap();
    std::fs::write(root.join("pkg").join("portfolio.js"), "export function hydrate() {}").unwrap();
    std::fs::write(root.join("profile").join("photo.txt"), "portrait").unwrap();
    root
}

fn static_app(root: &Path) -> Router {
    with_http_layers(serve_static(base_routes(), root, root))
}

async fn get_path(app: Router, uri: &str) -> (StatusCode, String) {
    let response = app
        .oneshot(Request::builder().uri(uri).body(Body::empty()).unwrap())
        .await
        .unwrap();
    let status = response.status();
    let body = to_bytes(response.into_body(), usize::MAX).await.unwrap();
    (status, String::from_utf8_lossy(&body).into_owned())
}

// =============================================================
// healthz
// =============================================================

#[tokio::test]
async fn healthz_returns_ok() {
    let (status, body) = get_path(base_routes(), "/healthz").await;
    assert_eq!(status, StatusCode::OK);
    assert!(body.is_empty());
}

#[tokio::test]
async fn healthz_survives_http_layers() {
    let root = asset_tree("healthz");
    let (status, _) = get_path(static_app(&root), "/healthz").await;
    assert_eq!(status, StatusCode::OK);
}

// =============================================================
// Static assets
// =============================================================

#[tokio::test]
async fn pkg_serves_bundle_files() {
    let root = asset_tree("pkg");
    let (status, body) = get_path(static_app(&root), "/pkg/portfolio.js").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body, "export function hydrate() {}");
}

#[tokio::test]
async fn fallback_serves_asset_files() {
    let root = asset_tree("fallback");
    let (status, body) = get_path(static_app(&root), "/profile/photo.txt").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body, "portrait");
}

#[tokio::test]
async fn unknown_paths_are_not_found() {
    let root = asset_tree("missing");
    let (status, _) = get_path(static_app(&root), "/does-not-exist.png").await;
    assert_eq!(status, StatusCode::NOT_FOUND);

    let (status, _) = get_path(static_app(&root), "/pkg/missing.wasm").await;
    assert_eq!(status, StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn gzip_is_negotiated_for_assets() {
    let root = asset_tree("gzip");
    std::fs::write(root.join("pkg").join("portfolio.css"), "a { color: red; }\n".repeat(200)).unwrap();

    let response = static_app(&root)
        .oneshot(
            Request::builder()
                .uri("/pkg/portfolio.css")
                .header(header::ACCEPT_ENCODING, "gzip")
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(response.headers().get(header::CONTENT_ENCODING).unwrap(), "gzip");
}
