use std::time::Duration;

use async_compat::Compat;
use base64::{engine::general_purpose::STANDARD, Engine};
use reqwest::header::CONTENT_TYPE;

use crate::{Error, Result};

/// QR code options
#[derive(Serialize, Deserialize, Clone, Debug)]
#[serde(default)]
pub struct QrCode {
    /// Account label shown in authenticator apps
    ///
    /// Defaults to the `APP_NAME` environment variable.
    pub label: String,

    /// Seconds to wait for the image service, `None` waits indefinitely
    pub timeout: Option<u64>,
}

impl Default for QrCode {
    fn default() -> QrCode {
        QrCode {
            label: std::env::var("APP_NAME").unwrap_or_else(|_| "gauth".into()),
            timeout: Some(10),
        }
    }
}

impl QrCode {
    /// Download a rendered QR image and inline it as a data URI
    ///
    /// The request runs inside [`Compat`], so it works from any executor and
    /// not only from within a Tokio runtime.
    pub async fn fetch_data_uri(&self, url: &str) -> Result<String> {
        Compat::new(self.fetch(url)).await
    }

    async fn fetch(&self, url: &str) -> Result<String> {
        let mut builder = reqwest::Client::builder();
        if let Some(timeout) = self.timeout {
            builder = builder.timeout(Duration::from_secs(timeout));
        }

        let client = builder.build().map_err(|err| {
            error!("Failed to build QR code client: {}", err);
            Error::InternalError
        })?;

        let response = client
            .get(url)
            .send()
            .await
            .and_then(|response| response.error_for_status())
            .map_err(|err| {
                error!("Failed to fetch QR code image: {}", err);
                Error::QrCodeUnavailable
            })?;

        let content_type = response
            .headers()
            .get(CONTENT_TYPE)
            .and_then(|value| value.to_str().ok())
            .unwrap_or("application/octet-stream")
            .to_string();

        let body = response.bytes().await.map_err(|err| {
            error!("Failed to read QR code image: {}", err);
            Error::QrCodeUnavailable
        })?;

        Ok(data_uri(&content_type, &body))
    }
}

/// Encode bytes as a base64 data URI
pub fn data_uri(content_type: &str, body: &[u8]) -> String {
    format!("data:{};base64,{}", content_type, STANDARD.encode(body))
}

#[cfg(test)]
mod tests {
    use async_std::io::{ReadExt, WriteExt};
    use async_std::net::TcpListener;

    use super::{data_uri, QrCode};
    use crate::Error;

    /// Answer a single request with a canned response, returning its URL
    async fn serve_once(response: &'static [u8]) -> String {
        let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
        let addr = listener.local_addr().unwrap();

        async_std::task::spawn(async move {
            let (mut stream, _) = listener.accept().await.unwrap();

            let mut request = Vec::new();
            let mut buf = [0u8; 1024];
            while !request.windows(4).any(|w| w == b"\r\n\r\n") {
                let n = stream.read(&mut buf).await.unwrap();
                if n == 0 {
                    break;
                }
                request.extend_from_slice(&buf[..n]);
            }

            stream.write_all(response).await.unwrap();
            stream.flush().await.unwrap();
        });

        format!("http://{addr}/qr")
    }

    #[test]
    fn it_builds_data_uri() {
        assert_eq!(
            data_uri("image/png", b"hello"),
            "data:image/png;base64,aGVsbG8="
        );
        assert_eq!(data_uri("image/svg+xml", b""), "data:image/svg+xml;base64,");
    }

    #[test]
    fn it_waits_ten_seconds_by_default() {
        assert_eq!(QrCode::default().timeout, Some(10));
    }

    #[async_std::test]
    async fn it_inlines_fetched_image_with_its_content_type() {
        let url = serve_once(
            b"HTTP/1.1 200 OK\r\nContent-Type: image/png\r\nContent-Length: 5\r\nConnection: close\r\n\r\nhello",
        )
        .await;

        assert_eq!(
            QrCode::default().fetch_data_uri(&url).await,
            Ok("data:image/png;base64,aGVsbG8=".to_string())
        );
    }

    #[async_std::test]
    async fn it_fails_on_error_status() {
        let url = serve_once(
            b"HTTP/1.1 500 Internal Server Error\r\nContent-Length: 0\r\nConnection: close\r\n\r\n",
        )
        .await;

        assert_eq!(
            QrCode::default().fetch_data_uri(&url).await,
            Err(Error::QrCodeUnavailable)
        );
    }

    #[async_std::test]
    async fn it_fails_when_service_is_unreachable() {
        let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
        let addr = listener.local_addr().unwrap();
        drop(listener);

        assert_eq!(
            QrCode::default()
                .fetch_data_uri(&format!("http://{addr}/qr"))
                .await,
            Err(Error::QrCodeUnavailable)
        );
    }
}
