use std::path::PathBuf;

use thiserror::Error;

/// Failure kinds for release resolution, download verification, archive
/// extraction and version selection.
///
/// Commands surface these unwrapped; callers branch on the variant rather
/// than matching message strings.
#[derive(Debug, Error)]
pub enum Error {
  #[error("failed to parse releases payload")]
  MalformedCatalog(#[source] serde_json::Error),

  #[error("release {0} does not exist")]
  ReleaseNotFound(String),

  #[error("the os {os} and arch {arch} cannot be resolved as a valid nvim asset")]
  AssetNotResolved { os: String, arch: String },

  #[error("unable to download {url}")]
  DownloadFailed {
    url: String,
    #[source]
    source: Option<reqwest::Error>,
  },

  #[error("checksum mismatch for {file}: expected {expected}, got {actual}")]
  ChecksumMismatch {
    file: String,
    expected: String,
    actual: String,
  },

  #[error("archive entry {0:?} contains an invalid or unsafe path, extraction aborted")]
  UnsafeEntry(PathBuf),

  #[error("release {0} is not installed")]
  ReleaseNotInstalled(String),

  #[error(transparent)]
  Io(#[from] std::io::Error),
}

impl Error {
  pub fn asset_not_resolved(os: &str, arch: &str) -> Self {
    Self::AssetNotResolved {
      os: os.to_string(),
      arch: arch.to_string(),
    }
  }
}
