use std::io::Write;
use std::net::TcpListener;
use std::time::Duration;

use reqwest::Client;
use tempfile::NamedTempFile;
use tokio::time::sleep;

/// Find an available port
fn get_available_port() -> u16 {
    TcpListener::bind("127.0.0.1:0")
        .unwrap()
        .local_addr()
        .unwrap()
        .port()
}

/// Wait for server to be ready
async fn wait_for_server(port: u16, max_attempts: u32) -> bool {
    let client = Client::new();
    for _ in 0..max_attempts {
        if client
            .get(format!("http://127.0.0.1:{}/api/health", port))
            .send()
            .await
            .is_ok()
        {
            return true;
        }
        sleep(Duration::from_millis(50)).await;
    }
    false
}

#[tokio::test]
async fn test_boots_from_environment_alone() {
    let port = get_available_port();

    // No config file anywhere; everything comes from env and defaults.
    let mut server = tokio::process::Command::new(env!("CARGO_BIN_EXE_nollywatch"))
        .env("NOLLYWATCH_CONFIG", "/nonexistent/nollywatch.toml")
        .env("NOLLYWATCH_SERVER__HOST", "127.0.0.1")
        .env("PORT", port.to_string())
        .env_remove("TMDB_API_KEY")
        .env_remove("GEMINI_API_KEY")
        .env("RUST_LOG", "error") // Quiet logs during tests
        .kill_on_drop(true)
        .spawn()
        .expect("Failed to spawn server");

    assert!(
        wait_for_server(port, 40).await,
        "Server did not start in time"
    );

    let client = Client::new();
    let response = client
        .get(format!("http://127.0.0.1:{}/api/health", port))
        .send()
        .await
        .expect("Failed to send request");
    assert!(response.status().is_success());

    let json: serde_json::Value = response.json().await.expect("Failed to parse JSON");
    assert_eq!(json["status"], "ok");

    // Cleanup
    server.kill().await.ok();
}

#[tokio::test]
async fn test_config_file_and_sanitized_endpoint() {
    let port = get_available_port();

    let mut temp_file = NamedTempFile::with_suffix(".toml").unwrap();
    writeln!(
        temp_file,
        r#"
[server]
host = "127.0.0.1"
port = {}

[tmdb]
api_key = "startup-test-key"
region = "NG"
"#,
        port
    )
    .unwrap();
    temp_file.flush().unwrap();

    let mut server = tokio::process::Command::new(env!("CARGO_BIN_EXE_nollywatch"))
        .env("NOLLYWATCH_CONFIG", temp_file.path())
        .env_remove("PORT")
        .env_remove("TMDB_REGION")
        .env("RUST_LOG", "error")
        .kill_on_drop(true)
        .spawn()
        .expect("Failed to spawn server");

    assert!(
        wait_for_server(port, 40).await,
        "Server did not start in time"
    );

    let client = Client::new();
    let response = client
        .get(format!("http://127.0.0.1:{}/api/config", port))
        .send()
        .await
        .expect("Failed to send request");
    assert!(response.status().is_success());

    let json: serde_json::Value = response.json().await.expect("Failed to parse JSON");
    assert_eq!(json["server"]["port"], port);
    assert_eq!(json["tmdb"]["region"], "NG");
    assert_eq!(json["tmdb"]["api_key_configured"], true);
    // The raw key must not leak through the sanitized view.
    assert!(!json.to_string().contains("startup-test-key"));

    // Cleanup
    server.kill().await.ok();
}

#[tokio::test]
async fn test_unconfigured_feed_fails_loud() {
    let port = get_available_port();

    let mut server = tokio::process::Command::new(env!("CARGO_BIN_EXE_nollywatch"))
        .env("NOLLYWATCH_CONFIG", "/nonexistent/nollywatch.toml")
        .env("NOLLYWATCH_SERVER__HOST", "127.0.0.1")
        .env("PORT", port.to_string())
        .env_remove("TMDB_API_KEY")
        .env_remove("NOLLYWATCH_TMDB__API_KEY")
        .env("RUST_LOG", "error")
        .kill_on_drop(true)
        .spawn()
        .expect("Failed to spawn server");

    assert!(
        wait_for_server(port, 40).await,
        "Server did not start in time"
    );

    let client = Client::new();
    let response = client
        .get(format!("http://127.0.0.1:{}/api/movies/trending", port))
        .send()
        .await
        .expect("Failed to send request");
    assert_eq!(response.status().as_u16(), 400);

    let json: serde_json::Value = response.json().await.expect("Failed to parse JSON");
    assert_eq!(json["error"], "TMDB_API_KEY is not configured.");

    // Cleanup
    server.kill().await.ok();
}
