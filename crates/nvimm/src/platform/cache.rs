use std::fs;
use std::io;
use std::path::Path;
use std::path::PathBuf;
use std::time::Duration;

/// Filesystem byte cache for API payloads, keyed by a fixed filename.
///
/// Staleness is judged from the file's last-write time, relative to a
/// caller-supplied validity window.
pub struct FileCache {
  path: PathBuf,
}

impl FileCache {
  pub fn new(dir: &Path, filename: &str) -> Self {
    Self {
      path: dir.join(filename),
    }
  }

  pub fn get(&self) -> io::Result<Vec<u8>> {
    fs::read(&self.path)
  }

  pub fn set(&self, data: &[u8]) -> io::Result<()> {
    if let Some(parent) = self.path.parent() {
      fs::create_dir_all(parent)?;
    }
    fs::write(&self.path, data)
  }

  /// True if the cached data is older than `ttl` or missing entirely
  pub fn stale(&self, ttl: Duration) -> bool {
    let Ok(meta) = fs::metadata(&self.path) else {
      return true;
    };
    let Ok(modified) = meta.modified() else {
      return true;
    };
    match modified.elapsed() {
      Ok(age) => age > ttl,
      Err(_) => false,
    }
  }
}
