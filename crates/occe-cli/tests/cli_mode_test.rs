use std::path::PathBuf;
use std::process::{Command, Output};

use serde_json::{Value, json};
use tokio_test::assert_ok;
use wiremock::matchers::{method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

fn write_config(name: &str, server: &MockServer) -> PathBuf {
    let path = std::env::temp_dir().join(format!("occe-cli-{}-{name}.yaml", std::process::id()));
    let content = format!(
        "access_key: \"test-access-key\"\n\
         secret_key: \"test-secret-key\"\n\
         public_base_url: \"{uri}/public/\"\n\
         api_base_url: \"{uri}\"\n",
        uri = server.uri()
    );
    assert_ok!(std::fs::write(&path, content));
    path
}

async fn run_cli(args: Vec<String>) -> Output {
    // Get the path to the binary from Cargo
    let binary_path = env!("CARGO_BIN_EXE_occe-cli");
    tokio::task::spawn_blocking(move || {
        Command::new(binary_path)
            .args(args)
            .env("RUST_LOG", "error")
            .output()
            .expect("Failed to start occe-cli binary")
    })
    .await
    .expect("join cli process")
}

fn args(config: &PathBuf, rest: &[&str]) -> Vec<String> {
    let mut argv = vec![
        "--config".to_string(),
        config.display().to_string(),
        "--log-level".to_string(),
        "error".to_string(),
    ];
    argv.extend(rest.iter().map(|s| s.to_string()));
    argv
}

#[tokio::test(flavor = "multi_thread")]
async fn cli_balance_prints_available_amount() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/v2/account/balance"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "result": "success",
            "data": {
                "currencies": [{ "name": "KRB", "value": 12.5, "onOrder": 0 }],
                "balanceVersion": 3
            }
        })))
        .expect(1)
        .mount(&server)
        .await;

    let config = write_config("balance", &server);
    let output = run_cli(args(&config, &["balance", "krb"])).await;
    std::fs::remove_file(&config).ok();

    assert!(
        output.status.success(),
        "Process exited with non-zero status: {}\nStdout: {}\nStderr: {}",
        output.status,
        String::from_utf8_lossy(&output.stdout),
        String::from_utf8_lossy(&output.stderr)
    );

    let printed: Value = assert_ok!(serde_json::from_slice(&output.stdout));
    assert_eq!(printed, json!({ "coin": "KRB", "value": "12.5" }));
}

#[tokio::test(flavor = "multi_thread")]
async fn cli_exchange_rejection_exits_with_failure() {
    let server = MockServer::start().await;
    Mock::given(method("DELETE"))
        .and(path("/v2/tlr_rub/orders40271"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "result": "error",
            "message": "Order not found"
        })))
        .expect(1)
        .mount(&server)
        .await;

    let config = write_config("cancel", &server);
    let output = run_cli(args(&config, &["cancel-order", "TLR_RUB", "40271"])).await;
    std::fs::remove_file(&config).ok();

    assert!(!output.status.success());
    assert!(output.stdout.is_empty());
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("Order not found"), "stderr: {stderr}");
}

#[tokio::test(flavor = "multi_thread")]
async fn cli_private_command_without_config_fails() {
    let output = run_cli(vec!["balances".to_string()]).await;
    assert!(!output.status.success());
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("access_key"), "stderr: {stderr}");
}
