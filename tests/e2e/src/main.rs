mod test_utils;

use anyhow::{Context, Result};
use reqwest::{header, Client, StatusCode};
use test_utils::*;

const TEST_FILES: [(&str, &str); 2] = [
    ("a.txt", "first test file\n"),
    ("b.txt", "second test file\n"),
];

#[tokio::main]
async fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter("e2e_tests=debug,info")
        .init();

    let server_url =
        std::env::var("SERVER_URL").unwrap_or_else(|_| "http://localhost:14756".to_string());
    println!("Server URL: {}", server_url);

    let client = Client::new();
    wait_for_server(&client, &server_url).await?;

    let run_id = std::process::id();
    let files: Vec<(String, &str)> = TEST_FILES
        .iter()
        .map(|(name, content)| (format!("e2e-{}-{}", run_id, name), *content))
        .collect();

    println!("\n📤 Testing upload...");
    for (name, content) in &files {
        upload(&client, &server_url, name, content.as_bytes()).await?;
    }
    println!("✅ Upload passed");

    println!("\n🔍 Testing list...");
    let listed = list(&client, &server_url).await?;
    for (name, _) in &files {
        if !listed.contains(name) {
            anyhow::bail!("{} missing from listing {:?}", name, listed);
        }
    }
    println!("✅ List passed ({} files on server)", listed.len());

    println!("\n📥 Testing download...");
    for (name, content) in &files {
        let response = expect_status(download(&client, &server_url, name).await?, StatusCode::OK)
            .await?;
        let disposition = response
            .headers()
            .get(header::CONTENT_DISPOSITION)
            .and_then(|v| v.to_str().ok())
            .unwrap_or_default()
            .to_string();
        if !disposition.starts_with("attachment") || !disposition.contains(name.as_str()) {
            anyhow::bail!("Unexpected Content-Disposition for {}: {:?}", name, disposition);
        }
        let body = response.bytes().await.context("Failed to read download")?;
        if body.as_ref() != content.as_bytes() {
            anyhow::bail!("Downloaded content of {} does not match upload", name);
        }
    }
    println!("✅ Download passed");

    println!("\n🚫 Testing rejected downloads...");
    let missing = format!("e2e-{}-missing.txt", run_id);
    expect_status(
        download(&client, &server_url, &missing).await?,
        StatusCode::NOT_FOUND,
    )
    .await?;
    expect_status(
        download(&client, &server_url, "../lemon_push.conf").await?,
        StatusCode::BAD_REQUEST,
    )
    .await?;
    println!("✅ Missing and traversal downloads rejected");

    println!("\n📋 Testing clipboard...");
    let text = format!("lemon push e2e {}", run_id);
    set_clipboard(&client, &server_url, &text).await?;
    let current = get_clipboard(&client, &server_url).await?;
    if current != text {
        anyhow::bail!("Clipboard holds {:?}, expected {:?}", current, text);
    }
    println!("✅ Clipboard passed");

    println!("\n✅ All E2E tests passed!");
    Ok(())
}
