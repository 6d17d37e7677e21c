use async_trait::async_trait;
use reqwest::Response;

/// Status code and body of an unsuccessful response.
#[derive(Debug, Clone)]
pub struct ErrorResponse {
    pub status: u16,
    pub body: String,
}

#[async_trait]
pub trait ResponseExt {
    async fn check_success(self) -> Result<Self, ErrorResponse>
    where
        Self: Sized;
}

#[async_trait]
impl ResponseExt for Response {
    async fn check_success(self) -> Result<Self, ErrorResponse> {
        let status = self.status();
        if !status.is_success() {
            return Err(ErrorResponse {
                status: status.as_u16(),
                body: self
                    .text()
                    .await
                    .unwrap_or_else(|_| "Failed to read response text".to_string()),
            });
        }
        Ok(self)
    }
}
