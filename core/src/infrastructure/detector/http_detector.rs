use std::time::Duration;

use bytes::Bytes;
use reqwest::{
    Client,
    multipart::{Form, Part},
};
use tracing::{error, warn};

use crate::domain::{
    common::{DetectorConfig, entities::app_errors::CoreError},
    detection::{entities::DetectorResponse, ports::FoodDetector},
};

const HEALTH_TIMEOUT: Duration = Duration::from_secs(5);

/// Client for the object-detection service exposing `/api/detect`.
#[derive(Debug, Clone)]
pub struct HttpFoodDetector {
    base_url: String,
    client: Client,
}

impl HttpFoodDetector {
    pub fn new(config: &DetectorConfig) -> Result<Self, CoreError> {
        let client = Client::builder()
            .timeout(Duration::from_secs(config.timeout_secs))
            .build()
            .map_err(|e| {
                error!("Failed to build detector client: {}", e);
                CoreError::InternalServerError
            })?;

        Ok(Self {
            base_url: config.base_url.trim_end_matches('/').to_string(),
            client,
        })
    }

    fn endpoint(&self, path: &str) -> String {
        format!("{}{}", self.base_url, path)
    }
}

fn mime_type_for(filename: &str) -> &'static str {
    let extension = filename
        .rsplit_once('.')
        .map(|(_, ext)| ext.to_ascii_lowercase())
        .unwrap_or_default();

    match extension.as_str() {
        "png" => "image/png",
        "webp" => "image/webp",
        "bmp" => "image/bmp",
        _ => "image/jpeg",
    }
}

impl FoodDetector for HttpFoodDetector {
    async fn detect(&self, image_data: Bytes, filename: String) -> Result<DetectorResponse, CoreError> {
        let mime_type = mime_type_for(&filename);
        let part = Part::stream(image_data)
            .file_name(filename)
            .mime_str(mime_type)
            .map_err(|e| {
                error!("Invalid image mime type {}: {}", mime_type, e);
                CoreError::InternalServerError
            })?;

        let response = self
            .client
            .post(self.endpoint("/api/detect"))
            .multipart(Form::new().part("image", part))
            .send()
            .await
            .map_err(|e| {
                error!("Detector request failed: {}", e);
                CoreError::DetectorUnavailable(e.to_string())
            })?;

        if !response.status().is_success() {
            let status = response.status();
            let error_text = response.text().await.unwrap_or_default();
            error!("Detector error: {} - {}", status, error_text);
            return Err(CoreError::ExternalServiceError(format!(
                "detector returned {}: {}",
                status, error_text
            )));
        }

        response.json::<DetectorResponse>().await.map_err(|e| {
            error!("Failed to parse detector response: {}", e);
            CoreError::ExternalServiceError(format!("invalid detector response: {}", e))
        })
    }

    async fn is_healthy(&self) -> bool {
        match self
            .client
            .get(self.endpoint("/api/health"))
            .timeout(HEALTH_TIMEOUT)
            .send()
            .await
        {
            Ok(response) => response.status().is_success(),
            Err(e) => {
                warn!("Detector health check failed: {}", e);
                false
            }
        }
    }
}
