use std::collections::HashMap;
use std::collections::HashSet;
use std::path::Path;
use std::sync::LazyLock;

use regex::Regex;
use serde::Deserialize;
use serde::Serialize;

use super::constants as c;
use super::version;
use crate::error::Error;

/// One downloadable artifact attached to a release
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Asset {
  pub name: String,
  #[serde(default)]
  pub size: u64,
  /// "sha256:<hex>" when the API reports it; backfilled from the release
  /// notes for releases predating native digests
  #[serde(default)]
  pub digest: Option<String>,
}

/// One published release as reported by the GitHub API
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Release {
  pub tag_name: String,
  pub name: String,
  #[serde(default)]
  pub body: String,
  pub html_url: String,
  #[serde(default)]
  pub published_at: Option<String>,
  #[serde(default)]
  pub assets: Vec<Asset>,
  #[serde(skip)]
  pub stable: bool,
}

static CHECKSUM_RE: LazyLock<Regex> =
  LazyLock::new(|| Regex::new(r"([a-f0-9]{64})\s+([^\s]+)").expect("invalid checksum pattern"));

impl Release {
  /// The tag without the leading "v" marker ("nightly" stays as is)
  pub fn clean_tag(&self) -> &str {
    version::clean_tag(&self.tag_name)
  }

  /// True if this release sorts strictly below the reference version
  pub fn version_less(&self, reference: &str) -> bool {
    if self.tag_name == c::STABLE_TAG {
      return false;
    }
    version::less(self.clean_tag(), reference)
  }

  /// Download URL for an asset, derived from the release page URL
  pub fn download_url(&self, asset_name: &str) -> String {
    format!(
      "{}/{}",
      self.html_url.replace("/tag/", "/download/"),
      asset_name
    )
  }

  /// Scans the release notes for `<sha256-hex> <filename>` lines and returns
  /// a filename to digest mapping
  pub fn checksums_from_body(&self) -> HashMap<String, String> {
    let mut result = HashMap::new();
    for capture in CHECKSUM_RE.captures_iter(&self.body) {
      result.insert(capture[2].to_string(), capture[1].to_string());
    }
    result
  }
}

/// The release catalog: parsed, filtered and annotated once per fetch cycle
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Releases {
  releases: Vec<Release>,
}

impl Releases {
  /// Parses the raw API payload into a catalog.
  ///
  /// The synthetic "stable" entry is consumed to flag the real release it
  /// aliases (the two share a name, not a tag). Releases below `min_release`
  /// are dropped, except "nightly" which is always retained. Releases
  /// predating native per-asset digests get missing digests backfilled from
  /// their release notes. Source order is preserved.
  pub fn process(data: &[u8], min_release: &str) -> Result<Self, Error> {
    let mut parsed = serde_json::from_slice::<Vec<Release>>(data).map_err(Error::MalformedCatalog)?;

    let stable_name = parsed
      .iter()
      .position(|info| info.tag_name == c::STABLE_TAG)
      .map(|index| parsed.remove(index).name);

    let mut releases = Vec::new();
    for mut info in parsed {
      if info.version_less(min_release) {
        log::info!("releases:below_floor: {}", info.tag_name);
        continue;
      }

      if info.version_less(c::ASSET_DIGEST_SINCE) {
        let checksums = info.checksums_from_body();
        for asset in &mut info.assets {
          if asset.digest.is_none() {
            if let Some(digest) = checksums.get(&asset.name) {
              asset.digest = Some(format!("sha256:{}", digest));
            }
          }
        }
      }

      releases.push(info);
    }

    if let Some(stable_name) = stable_name {
      for info in &mut releases {
        if info.name == stable_name {
          info.stable = true;
        }
      }
    }

    Ok(Self { releases })
  }

  pub fn iter(&self) -> impl Iterator<Item = &Release> {
    self.releases.iter()
  }

  /// Looks up a release. The identifier "stable" resolves to the release
  /// flagged stable, anything else is matched against clean tags exactly.
  pub fn get(&self, release: &str) -> Result<&Release, Error> {
    for info in &self.releases {
      if release == c::STABLE_TAG && info.stable {
        return Ok(info);
      }
      if info.clean_tag() == release {
        return Ok(info);
      }
    }
    Err(Error::ReleaseNotFound(release.to_string()))
  }

  /// Catalog entries with a matching version directory under `root`
  pub fn installed(&self, root: &Path) -> Vec<&Release> {
    self
      .releases
      .iter()
      .filter(|info| root.join(info.clean_tag()).is_dir())
      .collect()
  }

  /// Catalog entries not present in `installed`, order preserved
  pub fn available<'a>(&'a self, installed: &[&Release]) -> Vec<&'a Release> {
    let installed_tags = installed
      .iter()
      .map(|info| info.clean_tag())
      .collect::<HashSet<&str>>();
    self
      .releases
      .iter()
      .filter(|info| !installed_tags.contains(info.clean_tag()))
      .collect()
  }
}
