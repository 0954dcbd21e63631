use crate::image::compressor::data_url;
use crate::{Result as StoreErrorResult, StoreError};

use armadio_core::ImageResource;

use async_trait::async_trait;
use chrono::Utc;
use error_location::ErrorLocation;
use serde::Deserialize;

#[async_trait]
pub trait ImageHost: Send + Sync {
    async fn upload(&self, data: &[u8], content_type: &str) -> StoreErrorResult<ImageResource>;
}

/// imgbb-style REST uploader. The image travels as a multipart `image`
/// part; the API key rides on the query string.
pub struct RestImageHost {
    client: reqwest::Client,
    endpoint: String,
    api_key: String,
}

#[derive(Deserialize)]
struct UploadResponse {
    data: UploadData,
}

#[derive(Deserialize)]
struct UploadData {
    url: String,
    #[serde(default)]
    id: Option<String>,
    #[serde(default)]
    delete_url: Option<String>,
}

impl RestImageHost {
    pub fn new(endpoint: impl Into<String>, api_key: impl Into<String>) -> Self {
        Self {
            client: reqwest::Client::new(),
            endpoint: endpoint.into(),
            api_key: api_key.into(),
        }
    }
}

#[async_trait]
impl ImageHost for RestImageHost {
    async fn upload(&self, data: &[u8], content_type: &str) -> StoreErrorResult<ImageResource> {
        let part = reqwest::multipart::Part::bytes(data.to_vec())
            .file_name("image")
            .mime_str(content_type)?;
        let form = reqwest::multipart::Form::new().part("image", part);

        let response = self
            .client
            .post(format!("{}?key={}", self.endpoint, self.api_key))
            .multipart(form)
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            return Err(StoreError::UploadRejected {
                status: status.as_u16(),
                location: ErrorLocation::from(std::panic::Location::caller()),
            });
        }

        let body: UploadResponse = response.json().await?;
        Ok(ImageResource {
            url: body.data.url,
            provider: "imgbb".to_string(),
            provider_id: body.data.id,
            delete_url: body.data.delete_url,
            uploaded_at: Some(Utc::now()),
        })
    }
}

/// Embeds the bytes directly as a data URL. Never fails, never leaves the
/// device; used when no upload endpoint is configured or the real host is
/// unreachable.
#[derive(Debug, Clone, Copy, Default)]
pub struct DataUrlHost;

#[async_trait]
impl ImageHost for DataUrlHost {
    async fn upload(&self, data: &[u8], content_type: &str) -> StoreErrorResult<ImageResource> {
        Ok(ImageResource {
            url: data_url(data, content_type),
            provider: "local".to_string(),
            provider_id: None,
            delete_url: None,
            uploaded_at: Some(Utc::now()),
        })
    }
}

/// Tries the primary host, then degrades to an inline data URL so the item
/// can still be saved with its photo attached.
pub async fn upload_with_fallback(
    primary: &dyn ImageHost,
    data: &[u8],
    content_type: &str,
) -> ImageResource {
    match primary.upload(data, content_type).await {
        Ok(resource) => resource,
        Err(e) => {
            log::warn!("[image] upload failed, falling back to inline data URL: {e}");
            // DataUrlHost is infallible.
            match DataUrlHost.upload(data, content_type).await {
                Ok(resource) => resource,
                Err(_) => ImageResource::legacy(data_url(data, content_type)),
            }
        }
    }
}
