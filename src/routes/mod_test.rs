use tokio::net::TcpListener;

use super::*;

fn test_options() -> LeptosOptions {
    LeptosOptions::builder()
        .output_name("portfolio")
        .site_root(concat!(env!("CARGO_MANIFEST_DIR"), "/target/test-site"))
        .build()
}

/// Serve the router on an ephemeral port and return its base URL.
async fn spawn_server() -> String {
    let listener = TcpListener::bind("127.0.0.1:0").await.expect("bind ephemeral port");
    let addr = listener.local_addr().expect("local addr");
    tokio::spawn(async move {
        axum::serve(listener, router(test_options())).await.expect("serve");
    });
    format!("http://{addr}")
}

#[tokio::test]
async fn healthz_returns_ok() {
    assert_eq!(healthz().await, StatusCode::OK);
}

#[tokio::test]
async fn healthz_is_routed() {
    let base = spawn_server().await;
    let res = reqwest::get(format!("{base}/healthz")).await.expect("request");
    assert_eq!(res.status(), reqwest::StatusCode::OK);
}

#[tokio::test]
async fn missing_pkg_asset_is_not_found() {
    let base = spawn_server().await;
    let res = reqwest::get(format!("{base}/pkg/does-not-exist.wasm")).await.expect("request");
    assert_eq!(res.status(), reqwest::StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn unknown_path_is_not_found() {
    let base = spawn_server().await;
    let res = reqwest::get(format!("{base}/no/such/page")).await.expect("request");
    assert_eq!(res.status(), reqwest::StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn unknown_project_redirects_to_projects() {
    let base = spawn_server().await;
    let client = reqwest::Client::builder().redirect(reqwest::redirect::Policy::none()).build().expect("client");
    let res = client
        .get(format!("{base}/projects/nope"))
        .header(reqwest::header::ACCEPT, "text/html")
        .send()
        .await
        .expect("request");
    assert_eq!(res.status(), reqwest::StatusCode::FOUND);
    let location = res.headers().get(reqwest::header::LOCATION).expect("location header");
    assert_eq!(location, "/projects");
}

#[tokio::test]
async fn home_page_is_server_rendered() {
    let base = spawn_server().await;
    let res = reqwest::get(format!("{base}/")).await.expect("request");
    assert_eq!(res.status(), reqwest::StatusCode::OK);
    let body = res.text().await.expect("body");
    assert!(body.contains("<html"));
    assert!(body.contains("/pkg/portfolio.css"));
}
