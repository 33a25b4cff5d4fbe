use std::fs;
use std::path::PathBuf;

use crate::platform::constants as c;

/// Immutable invocation configuration, constructed once in `main` and
/// passed by reference into every command.
#[derive(Debug, Clone)]
pub struct Env {
  /// $NVIMM_DIR (default $HOME/.local/nvimm)
  pub nvimm_dir: PathBuf,
  /// $NVIMM_MIN_RELEASE (default "0.7.0")
  pub min_release: String,
}

impl Env {
  pub fn parse(nvimm_dir: Option<PathBuf>, min_release: Option<String>) -> anyhow::Result<Self> {
    Ok(Self {
      nvimm_dir: match nvimm_dir {
        Some(nvimm_dir) => nvimm_dir,
        None => nvimm_dir_default()?,
      },
      min_release: min_release.unwrap_or_else(|| c::MIN_RELEASE_DEFAULT.to_string()),
    })
  }
}

fn nvimm_dir_default() -> anyhow::Result<PathBuf> {
  let Ok(Some(home)) = homedir::my_home() else {
    return Err(anyhow::anyhow!(
      "Cannot find the nvimm home. Please set $NVIMM_DIR manually"
    ));
  };
  let default_dir = home.join(".local").join("nvimm");
  if default_dir.is_file() {
    return Err(anyhow::anyhow!("{:?} exists but is a file", default_dir));
  }
  if !default_dir.exists() {
    fs::create_dir_all(&default_dir)?;
  }
  Ok(default_dir)
}

#[cfg(test)]
mod tests {
  use super::*;

  #[test]
  fn explicit_values_take_precedence() {
    let env = Env::parse(
      Some(PathBuf::from("/opt/nvimm")),
      Some("0.10.0".to_string()),
    )
    .unwrap();

    assert_eq!(env.nvimm_dir, PathBuf::from("/opt/nvimm"));
    assert_eq!(env.min_release, "0.10.0");
  }

  #[test]
  fn min_release_defaults_to_the_floor() {
    let env = Env::parse(Some(PathBuf::from("/opt/nvimm")), None).unwrap();
    assert_eq!(env.min_release, c::MIN_RELEASE_DEFAULT);
  }
}
