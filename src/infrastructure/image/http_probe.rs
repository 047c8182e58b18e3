//! HTTP image probe.

use std::time::Duration;

use async_trait::async_trait;
use reqwest::{Client, Url};
use tracing::{debug, trace};

use crate::domain::errors::LoadFailureReason;
use crate::domain::ports::{ImageInfo, ImageProbePort};

use super::decode::decode_image;

/// Default user agent sent with image requests.
pub const DEFAULT_USER_AGENT: &str = concat!("camfeed/", env!("CARGO_PKG_VERSION"));

/// Configuration for the HTTP probe.
#[derive(Debug, Clone)]
pub struct HttpProbeConfig {
    /// Origin used to fetch site-relative urls.
    pub origin: Option<Url>,
    /// Request timeout in seconds.
    pub timeout_secs: u64,
    /// User agent header.
    pub user_agent: String,
}

impl Default for HttpProbeConfig {
    fn default() -> Self {
        Self {
            origin: None,
            timeout_secs: 30,
            user_agent: DEFAULT_USER_AGENT.to_string(),
        }
    }
}

/// Request timeout for `timeout_secs`, never shorter than one second.
fn request_timeout(timeout_secs: u64) -> Duration {
    Duration::from_secs(timeout_secs.max(1))
}

/// Fetches images over HTTP and decodes them.
#[derive(Debug, Clone)]
pub struct HttpImageProbe {
    client: Client,
    origin: Option<Url>,
}

impl HttpImageProbe {
    /// Creates a probe with the given configuration.
    ///
    /// # Errors
    /// Returns error if the HTTP client cannot be created.
    pub fn new(config: HttpProbeConfig) -> Result<Self, LoadFailureReason> {
        let client = Client::builder()
            .user_agent(config.user_agent)
            .timeout(request_timeout(config.timeout_secs))
            .build()
            .map_err(|e| {
                LoadFailureReason::network(format!("failed to create HTTP client: {e}"))
            })?;

        Ok(Self::with_client(client, config.origin))
    }

    /// Creates a probe on top of an existing client.
    #[must_use]
    pub const fn with_client(client: Client, origin: Option<Url>) -> Self {
        Self { client, origin }
    }

    /// Turns `url` into an absolute URL, joining site-relative paths to the origin.
    ///
    /// # Errors
    /// Returns `InvalidUrl` if `url` is relative and no origin is configured,
    /// or if it cannot be parsed.
    pub fn absolute_url(&self, url: &str) -> Result<Url, LoadFailureReason> {
        if url.starts_with('/') {
            let origin = self
                .origin
                .as_ref()
                .ok_or_else(|| LoadFailureReason::invalid_url("relative url without origin"))?;
            return origin
                .join(url)
                .map_err(|e| LoadFailureReason::invalid_url(e.to_string()));
        }

        Url::parse(url).map_err(|e| LoadFailureReason::invalid_url(e.to_string()))
    }
}

#[async_trait]
impl ImageProbePort for HttpImageProbe {
    async fn probe(&self, url: &str) -> Result<ImageInfo, LoadFailureReason> {
        let target = self.absolute_url(url)?;
        debug!(url = %target, "Fetching image");

        let response = self
            .client
            .get(target)
            .send()
            .await
            .map_err(|e| LoadFailureReason::network(e.to_string()))?;

        let status = response.status();
        if !status.is_success() {
            return Err(LoadFailureReason::Status(status.as_u16()));
        }

        let bytes = response
            .bytes()
            .await
            .map_err(|e| LoadFailureReason::network(format!("failed to read body: {e}")))?;
        trace!(url = %url, bytes = bytes.len(), "Image downloaded");

        decode_image(bytes).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::infrastructure::image::decode::fixtures::png_bytes;
    use tokio::io::{AsyncReadExt, AsyncWriteExt};
    use test_case::test_case;
    use tokio::net::TcpListener;

    /// Serves one canned response per connection.
    async fn serve(status_line: &'static str, body: Vec<u8>) -> Url {
        let listener = TcpListener::bind("127.0.0.1:0").await.expect("bind");
        let addr = listener.local_addr().expect("local addr");

        tokio::spawn(async move {
            while let Ok((mut socket, _)) = listener.accept().await {
                let body = body.clone();
                tokio::spawn(async move {
                    let mut buf = [0u8; 2048];
                    let _ = socket.read(&mut buf).await;
                    let head = format!(
                        "HTTP/1.1 {status_line}\r\nContent-Length: {}\r\nConnection: close\r\n\r\n",
                        body.len()
                    );
                    let _ = socket.write_all(head.as_bytes()).await;
                    let _ = socket.write_all(&body).await;
                    let _ = socket.shutdown().await;
                });
            }
        });

        Url::parse(&format!("http://{addr}/")).expect("server url")
    }

    fn probe_with_origin(origin: Option<Url>) -> HttpImageProbe {
        let client = Client::builder()
            .no_proxy()
            .timeout(Duration::from_secs(5))
            .build()
            .expect("client");
        HttpImageProbe::with_client(client, origin)
    }

    #[test]
    fn test_new_from_config() {
        assert!(HttpImageProbe::new(HttpProbeConfig::default()).is_ok());
    }

    #[test_case(0, 1 ; "zero_is_clamped")]
    #[test_case(1, 1 ; "one_second")]
    #[test_case(30, 30 ; "default")]
    fn test_request_timeout(secs: u64, expected: u64) {
        assert_eq!(request_timeout(secs), Duration::from_secs(expected));
    }

    #[test]
    fn test_new_with_zero_timeout() {
        let config = HttpProbeConfig {
            timeout_secs: 0,
            ..HttpProbeConfig::default()
        };
        assert!(HttpImageProbe::new(config).is_ok());
    }

    #[test]
    fn test_relative_without_origin_is_invalid() {
        let probe = probe_with_origin(None);
        assert!(matches!(
            probe.absolute_url("/images/placeholder.jpg"),
            Err(LoadFailureReason::InvalidUrl(_))
        ));
    }

    #[test]
    fn test_relative_joins_origin() -> Result<(), Box<dyn std::error::Error>> {
        let probe = probe_with_origin(Some(Url::parse("https://weather.test/app/")?));
        let url = probe.absolute_url("/app/images/placeholder.jpg?t=1")?;
        assert_eq!(url.as_str(), "https://weather.test/app/images/placeholder.jpg?t=1");
        Ok(())
    }

    #[test]
    fn test_garbage_url_is_invalid() {
        let probe = probe_with_origin(None);
        assert!(matches!(
            probe.absolute_url("not a url"),
            Err(LoadFailureReason::InvalidUrl(_))
        ));
    }

    #[tokio::test]
    async fn test_probe_success() -> Result<(), Box<dyn std::error::Error>> {
        let origin = serve("200 OK", png_bytes(2, 2)).await;
        let probe = probe_with_origin(Some(origin));

        let info = probe.probe("/images/webcam/harbor.jpg").await?;
        assert_eq!((info.width, info.height), (2, 2));
        Ok(())
    }

    #[tokio::test]
    async fn test_probe_status_error() {
        let origin = serve("404 Not Found", Vec::new()).await;
        let probe = probe_with_origin(Some(origin));

        let result = probe.probe("/images/webcam/missing.jpg").await;
        assert_eq!(result, Err(LoadFailureReason::Status(404)));
    }

    #[tokio::test]
    async fn test_probe_non_image_body() {
        let origin = serve("200 OK", b"<html></html>".to_vec()).await;
        let probe = probe_with_origin(Some(origin.clone()));

        let result = probe.probe(origin.join("page.html").expect("join").as_str()).await;
        assert!(matches!(result, Err(LoadFailureReason::Decode(_))));
    }
}
