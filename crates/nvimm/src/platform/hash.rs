use std::fs;
use std::io;
use std::path::Path;

use sha2::Digest;
use sha2::Sha256;

/// A content digest in the "sha256:<hex>" form attached to release assets
#[derive(Debug, PartialEq)]
pub struct Integrity(String);

impl Integrity {
  /// Parses a prefixed digest. Returns `None` for any scheme other than
  /// sha256 so callers fail closed instead of skipping verification.
  pub fn parse(input: impl AsRef<str>) -> Option<Self> {
    let (tag, hash) = input.as_ref().split_once(':')?;
    if tag != "sha256" {
      log::info!("hash:unsupported_scheme: {}", tag);
      return None;
    }
    Some(Self(hash.to_ascii_lowercase()))
  }

  pub fn matches(&self, candidate: &str) -> bool {
    self.0 == candidate.to_ascii_lowercase()
  }
}

/// Streams a file through sha256 and returns the lowercase hex digest
pub fn sha256_file(path: &Path) -> io::Result<String> {
  let mut file = fs::File::open(path)?;
  let mut hasher = Sha256::new();
  io::copy(&mut file, &mut hasher)?;
  Ok(hex::encode(hasher.finalize()))
}
