use anyhow::{Context, Result};
use common::ApiResponse;
use reqwest::header::ACCESS_CONTROL_ALLOW_ORIGIN;
use reqwest::multipart::{Form, Part};
use reqwest::{Client, Response, StatusCode};
use serde::de::DeserializeOwned;
use std::time::Duration;
use tokio::time::sleep;
use tracing::debug;

pub async fn wait_for_server(client: &Client, url: &str) -> Result<()> {
    let health_url = format!("{}/health", url);

    println!("Waiting for server to be ready...");
    for i in 0..30 {
        match client.get(&health_url).send().await {
            Ok(response) if response.status().is_success() => {
                println!("Server is ready!");
                return Ok(());
            }
            _ => {
                if i < 29 {
                    sleep(Duration::from_secs(1)).await;
                }
            }
        }
    }

    anyhow::bail!("Server did not become ready within 30 seconds");
}

/// Every gateway response, errors included, must allow any origin
pub fn check_cors(response: &Response) -> Result<()> {
    let origin = response
        .headers()
        .get(ACCESS_CONTROL_ALLOW_ORIGIN)
        .and_then(|v| v.to_str().ok());
    if origin != Some("*") {
        anyhow::bail!(
            "{} responded without Access-Control-Allow-Origin: * (got {:?})",
            response.url(),
            origin
        );
    }
    Ok(())
}

pub async fn expect_status(response: Response, expected: StatusCode) -> Result<Response> {
    check_cors(&response)?;
    if response.status() != expected {
        let status = response.status();
        let url = response.url().clone();
        let body = response.text().await.unwrap_or_default();
        anyhow::bail!("{} returned {} (expected {}): {}", url, status, expected, body);
    }
    Ok(response)
}

pub async fn read_envelope<T: DeserializeOwned>(response: Response) -> Result<T> {
    let response = expect_status(response, StatusCode::OK).await?;
    let envelope: ApiResponse<T> = response
        .json()
        .await
        .context("Response is not a {data, code} envelope")?;
    if envelope.code != common::SUCCESS_CODE {
        anyhow::bail!("Unexpected response code {}", envelope.code);
    }
    Ok(envelope.data)
}

pub async fn upload(client: &Client, url: &str, filename: &str, content: &[u8]) -> Result<()> {
    let part = Part::bytes(content.to_vec()).file_name(filename.to_string());
    let form = Form::new().part("file", part);

    let response = client
        .post(format!("{}/upload", url))
        .multipart(form)
        .send()
        .await
        .with_context(|| format!("Failed to upload {}", filename))?;

    let data: String = read_envelope(response).await?;
    if data != common::OK_DATA {
        anyhow::bail!("Upload of {} answered {:?}", filename, data);
    }
    debug!("Uploaded {} ({} bytes)", filename, content.len());
    Ok(())
}

pub async fn list(client: &Client, url: &str) -> Result<Vec<String>> {
    let response = client
        .get(format!("{}/list", url))
        .send()
        .await
        .context("Failed to list files")?;
    read_envelope(response).await
}

pub async fn download(client: &Client, url: &str, filename: &str) -> Result<Response> {
    client
        .get(format!("{}/download", url))
        .query(&[("filename", filename)])
        .send()
        .await
        .with_context(|| format!("Failed to download {}", filename))
}

pub async fn set_clipboard(client: &Client, url: &str, text: &str) -> Result<()> {
    let response = client
        .get(format!("{}/set_clipboard", url))
        .query(&[("text", text)])
        .send()
        .await
        .context("Failed to set clipboard")?;
    let _: String = read_envelope(response).await?;
    Ok(())
}

pub async fn get_clipboard(client: &Client, url: &str) -> Result<String> {
    let response = client
        .get(format!("{}/get_clipboard", url))
        .send()
        .await
        .context("Failed to read clipboard")?;
    read_envelope(response).await
}
