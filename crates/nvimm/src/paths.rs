use std::path::PathBuf;

use crate::env::Env;
use crate::platform::fs_ext;
use crate::platform::temp_dir::TempDir;

/// Directory layout under $NVIMM_DIR, bootstrapped on startup
#[allow(unused)]
#[derive(Debug, Clone)]
pub struct Paths {
  /// $NVIMM_DIR (default $HOME/.local/nvimm)
  pub nvimm_dir: PathBuf,
  /// $NVIMM_DIR/versions (one directory per installed version, plus the
  /// `current` symlink)
  pub versions: PathBuf,
  /// $NVIMM_DIR/cache (downloaded archives and the releases payload)
  pub cache: PathBuf,
  /// $NVIMM_DIR/.temp (extraction staging)
  pub temp: PathBuf,
}

impl Paths {
  pub fn new(env: &Env) -> anyhow::Result<Self> {
    let nvimm_dir = env.nvimm_dir.clone();
    let versions = nvimm_dir.join("versions");
    let cache = nvimm_dir.join("cache");
    let temp = nvimm_dir.join(".temp");

    fs_ext::create_dir_if_not_exists(&nvimm_dir)?;
    fs_ext::create_dir_if_not_exists(&versions)?;
    fs_ext::create_dir_if_not_exists(&cache)?;

    Ok(Self {
      nvimm_dir,
      versions,
      cache,
      temp,
    })
  }

  pub fn temp_dir(&self) -> anyhow::Result<TempDir> {
    fs_ext::create_dir_if_not_exists(&self.temp)?;
    TempDir::new(&self.temp)
  }
}

#[cfg(test)]
mod tests {
  use super::*;

  #[test]
  fn bootstraps_the_directory_layout() {
    let dir = tempfile::tempdir().unwrap();
    let env = Env {
      nvimm_dir: dir.path().join("nvimm"),
      min_release: "0.7.0".to_string(),
    };

    let paths = Paths::new(&env).unwrap();

    assert!(paths.versions.is_dir());
    assert!(paths.cache.is_dir());

    let temp = paths.temp_dir().unwrap();
    assert!(temp.starts_with(&paths.temp));
  }
}
