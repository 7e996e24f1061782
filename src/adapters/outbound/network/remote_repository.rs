use crate::dependency_info::domain::Gav;
use crate::ports::outbound::{PomLocator, PomSource};
use crate::shared::security::{validate_coordinate_component, MAX_POM_SIZE};
use crate::shared::Result;
use std::io::Read;
use std::thread;
use std::time::Duration;
use tracing::debug;

pub const MAVEN_CENTRAL_URL: &str = "https://repo.maven.apache.org/maven2";

const REQUEST_TIMEOUT_SECS: u64 = 10;
const MAX_ATTEMPTS: u32 = 3;
/// Base delay between attempts; attempt `n` waits `n` times this
const RETRY_DELAY_MS: u64 = 200;

/// RemoteRepositoryLocator adapter downloading POMs from an HTTP(S) Maven
/// repository
///
/// Requests are blocking. Transport errors and 5xx responses are retried with
/// a linear backoff; a 404 fails immediately.
pub struct RemoteRepositoryLocator {
    client: reqwest::blocking::Client,
    base_url: String,
    max_attempts: u32,
}

impl RemoteRepositoryLocator {
    /// Creates a locator for the repository at `base_url`
    ///
    /// # Errors
    /// Returns an error if the URL is not http(s) or the HTTP client cannot
    /// be built
    pub fn new(base_url: &str) -> Result<Self> {
        let base_url = base_url.trim_end_matches('/').to_string();
        if !(base_url.starts_with("https://") || base_url.starts_with("http://")) {
            anyhow::bail!(
                "Repository URL must start with http:// or https://: {}",
                base_url
            );
        }

        let user_agent = format!("depinfo/{}", env!("CARGO_PKG_VERSION"));
        let client = reqwest::blocking::Client::builder()
            .timeout(Duration::from_secs(REQUEST_TIMEOUT_SECS))
            .user_agent(user_agent)
            .build()?;

        Ok(Self {
            client,
            base_url,
            max_attempts: MAX_ATTEMPTS,
        })
    }

    pub fn maven_central() -> Result<Self> {
        Self::new(MAVEN_CENTRAL_URL)
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// `<base>/<group as dirs>/<artifact>/<version>/<artifact>-<version>.pom`
    pub fn pom_url(&self, gav: &Gav) -> Result<String> {
        validate_coordinate_component(&gav.group_id, "Group id")?;
        validate_coordinate_component(&gav.artifact_id, "Artifact id")?;
        validate_coordinate_component(&gav.version, "Version")?;

        let group_path = gav
            .group_id
            .split('.')
            .map(|segment| urlencoding::encode(segment).into_owned())
            .collect::<Vec<_>>()
            .join("/");
        let artifact = urlencoding::encode(&gav.artifact_id);
        let version = urlencoding::encode(&gav.version);

        Ok(format!(
            "{}/{}/{}/{}/{}-{}.pom",
            self.base_url, group_path, artifact, version, artifact, version
        ))
    }

    fn fetch(&self, url: &str) -> std::result::Result<String, FetchError> {
        let response = self
            .client
            .get(url)
            .send()
            .map_err(|e| FetchError::Retryable(e.into()))?;

        let status = response.status();
        if status.is_server_error() {
            return Err(FetchError::Retryable(anyhow::anyhow!(
                "repository returned status code {}",
                status
            )));
        }
        if !status.is_success() {
            return Err(FetchError::Fatal(anyhow::anyhow!(
                "repository returned status code {}",
                status
            )));
        }
        if response
            .content_length()
            .is_some_and(|length| length > MAX_POM_SIZE)
        {
            return Err(FetchError::Fatal(anyhow::anyhow!(
                "POM exceeds the maximum allowed size of {} bytes",
                MAX_POM_SIZE
            )));
        }

        read_body(response, MAX_POM_SIZE)
    }
}

/// Reads at most `limit` bytes of `body` as UTF-8; a longer body is rejected
/// whether or not the server announced its length.
fn read_body<R: Read>(body: R, limit: u64) -> std::result::Result<String, FetchError> {
    let mut buffer = Vec::new();
    body.take(limit + 1)
        .read_to_end(&mut buffer)
        .map_err(|e| FetchError::Retryable(e.into()))?;
    if buffer.len() as u64 > limit {
        return Err(FetchError::Fatal(anyhow::anyhow!(
            "POM exceeds the maximum allowed size of {} bytes",
            limit
        )));
    }
    String::from_utf8(buffer).map_err(|e| FetchError::Fatal(e.into()))
}

enum FetchError {
    Retryable(anyhow::Error),
    Fatal(anyhow::Error),
}

impl PomLocator for RemoteRepositoryLocator {
    fn locate(&self, gav: &Gav) -> Result<PomSource> {
        let url = self.pom_url(gav)?;
        let mut attempt = 1;

        loop {
            debug!("Fetching {} (attempt {}/{})", url, attempt, self.max_attempts);
            match self.fetch(&url) {
                Ok(content) => return Ok(PomSource::new(url, content)),
                Err(FetchError::Fatal(e)) => {
                    return Err(e.context(format!("Failed to fetch {}", url)));
                }
                Err(FetchError::Retryable(e)) if attempt >= self.max_attempts => {
                    return Err(e.context(format!(
                        "Failed to fetch {} after {} attempts",
                        url, attempt
                    )));
                }
                Err(FetchError::Retryable(_)) => {
                    thread::sleep(Duration::from_millis(RETRY_DELAY_MS * attempt as u64));
                    attempt += 1;
                }
            }
        }
    }
}
