use log::info;
use reqwest::multipart::{Form, Part};
use reqwest::Client;

use crate::error::{AppError, Result};
use crate::testimonial::models::{Config, UploadResponse};

/// A trait, necessary for every entity that will push a photo to the image
/// host and hand back its public URL.
#[allow(async_fn_in_trait)]
pub trait PhotoUploader {
    async fn upload_photo(
        &self,
        config: &Config,
        file_name: &str,
        bytes: Vec<u8>,
    ) -> Result<String>;
}

/// Allows to use Client for uploading photos via the image host's multipart
/// endpoint.
impl PhotoUploader for Client {
    async fn upload_photo(
        &self,
        config: &Config,
        file_name: &str,
        bytes: Vec<u8>,
    ) -> Result<String> {
        info!("Uploading photo {} ({} bytes)", file_name, bytes.len());
        let form = Form::new().part("image", Part::bytes(bytes).file_name(file_name.to_string()));
        let response = self
            .post(&config.image_upload_url)
            .multipart(form)
            .send()
            .await
            .and_then(|resp| resp.error_for_status())
            .map_err(|err| AppError::Network {
                url: config.image_upload_url.clone(),
                source: err,
            })?;
        let upload: UploadResponse = response.json().await.map_err(|err| AppError::Decode {
            url: config.image_upload_url.clone(),
            source: err,
        })?;
        upload
            .data
            .and_then(|image| image.url)
            .ok_or_else(|| AppError::Upload("image host answered without a url".to_string()))
    }
}
