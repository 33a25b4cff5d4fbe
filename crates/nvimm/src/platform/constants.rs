use std::time::Duration;

// GitHub Releases API
pub static RELEASES_URL: &str = "https://api.github.com/repos/neovim/neovim/releases";
pub static USER_AGENT: &str = concat!("nvimm/", env!("CARGO_PKG_VERSION"));

// Catalog cache
pub static RELEASES_CACHE_FILE: &str = "releases.json";
pub static RELEASES_CACHE_TTL: Duration = Duration::from_secs(30 * 60);

/// Tag of the synthetic release aliasing the rolling stable version
pub static STABLE_TAG: &str = "stable";

/// Name of the symlink marking the selected version
pub static CURRENT_LINK: &str = "current";

/// Releases below this floor are hidden unless overridden
pub static MIN_RELEASE_DEFAULT: &str = "0.7.0";

/// First release where the GitHub API reports per-asset digests natively.
/// Older releases only publish checksums in the release notes.
pub static ASSET_DIGEST_SINCE: &str = "0.11.3";

/// First release shipping the renamed linux x86_64 tarball
pub static LINUX_X86_64_RENAME_SINCE: &str = "0.10.4";
