use std::fs;
use std::io;
use std::path::Path;
use std::path::PathBuf;

use jwalk::WalkDir;

pub fn soft_link(original: &Path, link: &Path) -> io::Result<()> {
  #[cfg(unix)]
  std::os::unix::fs::symlink(original, link)?;

  #[cfg(windows)]
  std::os::windows::fs::symlink_dir(original, link)?;

  Ok(())
}

pub fn hard_link_or_copy<Source: AsRef<Path>, Dest: AsRef<Path>>(
  original: Source,
  link: Dest,
) -> io::Result<()> {
  match fs::hard_link(original.as_ref(), link.as_ref()) {
    Ok(_) => 0,
    Err(_) => fs::copy(original, link)?,
  };
  Ok(())
}

pub fn cp_dir_recursive<S: AsRef<Path>, D: AsRef<Path>>(source: S, dest: D) -> anyhow::Result<()> {
  let source = source.as_ref();
  let dest = dest.as_ref();

  log::info!("cp_dir_recursive: {:?} -> {:?}", source, dest);

  for entry in WalkDir::new(source).sort(true) {
    let entry = entry?;
    let entry_path_abs = entry.path();
    let entry_path_rel = entry_path_abs.strip_prefix(source)?;
    let dest_path_abs = dest.join(entry_path_rel);

    if entry_path_rel == PathBuf::from("") {
      continue;
    }

    if dest_path_abs.exists() {
      return Err(anyhow::anyhow!("PathAlreadyExists: {:?}", dest_path_abs));
    }

    let Ok(entry_meta) = fs::metadata(&entry_path_abs) else {
      log::info!("copy:err:skipping: {:?}", entry_path_rel);
      continue;
    };
    if entry_meta.is_dir() {
      fs::create_dir_all(dest_path_abs)?;
    } else {
      hard_link_or_copy(entry_path_abs, dest_path_abs)?;
    }
  }

  Ok(())
}

/// Remove a file, symlink or folder if it exists. Dangling symlinks count
/// as existing.
pub fn remove_if_exists<P: AsRef<Path>>(target: P) -> io::Result<()> {
  let target = target.as_ref();

  let meta = match fs::symlink_metadata(target) {
    Ok(meta) => meta,
    Err(err) if err.kind() == io::ErrorKind::NotFound => {
      log::info!("remv:does_not_exist: {:?}", target);
      return Ok(());
    }
    Err(err) => return Err(err),
  };

  if meta.is_dir() {
    log::info!("remv:dir: {:?}", target);
    return fs::remove_dir_all(target);
  }

  log::info!("remv:file: {:?}", target);
  fs::remove_file(target)
}

/// Creates a directory if it doesn't exist
pub fn create_dir_if_not_exists<P: AsRef<Path>>(target: P) -> io::Result<()> {
  let target = target.as_ref();
  if fs::exists(target)? {
    return Ok(());
  }
  log::info!("create_dir:create: {:?}", target);
  fs::create_dir_all(target)
}
