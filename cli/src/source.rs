//! Where the terminal widget reads its quote document from.

#[cfg(test)]
#[path = "source_test.rs"]
mod source_test;

use std::path::PathBuf;

/// A quote document location given on the command line.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum QuoteSource {
    Url(String),
    File(PathBuf),
}

#[derive(Debug, thiserror::Error)]
pub enum SourceError {
    #[error("HTTP error! status: {0}")]
    Status(u16),
    #[error("request failed: {0}")]
    Http(#[from] reqwest::Error),
    #[error("cannot read {path}: {source}")]
    Read { path: String, source: std::io::Error },
}

impl QuoteSource {
    /// `http://` and `https://` locations are fetched, anything else is a path.
    pub fn parse(raw: &str) -> Self {
        if raw.starts_with("http://") || raw.starts_with("https://") {
            Self::Url(raw.to_owned())
        } else {
            Self::File(PathBuf::from(raw))
        }
    }

    /// Fetch the raw document. One attempt, no retries.
    pub async fn fetch(&self) -> Result<String, SourceError> {
        match self {
            Self::Url(url) => {
                let response = reqwest::get(url).await?;
                let status = response.status();
                if !status.is_success() {
                    return Err(SourceError::Status(status.as_u16()));
                }
                Ok(response.text().await?)
            }
            Self::File(path) => tokio::fs::read_to_string(path)
                .await
                .map_err(|source| SourceError::Read { path: path.display().to_string(), source }),
        }
    }
}
