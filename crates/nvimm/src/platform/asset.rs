use super::constants as c;
use super::releases::Release;

/// Maps a release and host platform to the expected tarball filename.
///
/// Neovim renamed the linux x86_64 tarball starting with 0.10.4; every other
/// supported pair kept a single name across releases. Returns `None` for
/// unsupported platforms.
pub fn tarball_name(release: &Release, os: &str, arch: &str) -> Option<&'static str> {
  match (os, arch) {
    ("macos", "x86_64") => Some("nvim-macos-x86_64.tar.gz"),
    ("macos", "aarch64") => Some("nvim-macos-arm64.tar.gz"),
    ("linux", "x86_64") => {
      if release.version_less(c::LINUX_X86_64_RENAME_SINCE) {
        Some("nvim-linux64.tar.gz")
      } else {
        Some("nvim-linux-x86_64.tar.gz")
      }
    }
    ("linux", "aarch64") => Some("nvim-linux-arm64.tar.gz"),
    _ => None,
  }
}

#[cfg(test)]
mod tests {
  use super::*;

  fn release(tag: &str) -> Release {
    Release {
      tag_name: tag.to_string(),
      name: format!("NVIM {tag}"),
      body: String::new(),
      html_url: String::new(),
      published_at: None,
      assets: vec![],
      stable: false,
    }
  }

  #[test]
  fn macos_names_are_fixed_across_versions() {
    for tag in ["v0.7.0", "v0.10.3", "v0.11.3", "nightly"] {
      assert_eq!(
        tarball_name(&release(tag), "macos", "aarch64"),
        Some("nvim-macos-arm64.tar.gz")
      );
      assert_eq!(
        tarball_name(&release(tag), "macos", "x86_64"),
        Some("nvim-macos-x86_64.tar.gz")
      );
    }
  }

  #[test]
  fn linux_x86_64_name_is_version_gated() {
    assert_eq!(
      tarball_name(&release("v0.10.3"), "linux", "x86_64"),
      Some("nvim-linux64.tar.gz")
    );
    assert_eq!(
      tarball_name(&release("v0.10.4"), "linux", "x86_64"),
      Some("nvim-linux-x86_64.tar.gz")
    );
    assert_eq!(
      tarball_name(&release("v0.11.3"), "linux", "x86_64"),
      Some("nvim-linux-x86_64.tar.gz")
    );
  }

  #[test]
  fn nightly_uses_the_current_linux_name() {
    assert_eq!(
      tarball_name(&release("nightly"), "linux", "x86_64"),
      Some("nvim-linux-x86_64.tar.gz")
    );
  }

  #[test]
  fn unsupported_platforms_resolve_to_none() {
    assert_eq!(tarball_name(&release("v0.11.3"), "windows", "x86_64"), None);
    assert_eq!(tarball_name(&release("v0.11.3"), "linux", "riscv64"), None);
  }
}
