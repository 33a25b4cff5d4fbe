use std::fs;
use std::io;
use std::path::Path;

use super::constants as c;
use super::fs_ext;
use crate::error::Error;

/// Result of a pointer update. Re-selecting the already current version is
/// informational, not an error.
#[derive(Debug, PartialEq)]
pub enum CurrentOutcome {
  AlreadyCurrent,
  Updated,
}

/// Reads the `current` pointer under `root`. A missing pointer is the valid
/// "none selected" state.
pub fn query(root: &Path) -> Result<Option<String>, Error> {
  let link = root.join(c::CURRENT_LINK);
  let target = match fs::read_link(&link) {
    Ok(target) => target,
    Err(err) if err.kind() == io::ErrorKind::NotFound => return Ok(None),
    Err(err) => return Err(err.into()),
  };
  Ok(
    target
      .file_name()
      .map(|name| name.to_string_lossy().into_owned()),
  )
}

/// Points `root/current` at `root/<clean_tag>`.
///
/// Rejected before any filesystem mutation when the version directory is
/// missing. Replaces an existing or dangling pointer.
pub fn set(root: &Path, clean_tag: &str) -> Result<CurrentOutcome, Error> {
  let target = root.join(clean_tag);
  if !target.is_dir() {
    return Err(Error::ReleaseNotInstalled(clean_tag.to_string()));
  }

  let link = root.join(c::CURRENT_LINK);
  if let Ok(existing) = fs::read_link(&link) {
    if existing == target {
      log::info!("current:unchanged: {:?}", target);
      return Ok(CurrentOutcome::AlreadyCurrent);
    }
  }

  fs_ext::remove_if_exists(&link)?;
  fs_ext::soft_link(&target, &link)?;
  log::info!("current:set: {:?}", target);
  Ok(CurrentOutcome::Updated)
}
