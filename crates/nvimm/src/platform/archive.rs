use std::fs;
use std::io;
use std::io::Read;
use std::path::Component;
use std::path::Path;
use std::path::PathBuf;
use std::time::Duration;
use std::time::SystemTime;

use flate2::read::GzDecoder;
use tar::Archive;
use tar::EntryType;

use super::fs_ext;
use crate::error::Error;

/// Streams a gzip compressed tarball into `dest_dir` one entry at a time.
///
/// Every entry path is normalized syntactically before touching the
/// filesystem; an absolute path or one escaping `dest_dir` aborts the whole
/// extraction. Directories, regular files, symlinks and hard links are
/// recreated with their recorded permission bits, anything else is skipped.
pub fn unpack_tar_gz<R: Read>(reader: R, dest_dir: &Path) -> Result<(), Error> {
  let mut archive = Archive::new(GzDecoder::new(reader));

  for entry in archive.entries()? {
    let mut entry = entry?;
    let name = sanitize_entry_path(&entry.path()?)?;
    let target = dest_dir.join(&name);

    match entry.header().entry_type() {
      EntryType::Directory => {
        fs::create_dir_all(&target)?;
        set_mode(&target, entry.header().mode()?)?;
      }
      EntryType::Regular => {
        if let Some(parent) = target.parent() {
          fs::create_dir_all(parent)?;
        }
        let mut out = fs::File::create(&target)?;
        io::copy(&mut entry, &mut out)?;
        // Timestamp restoration is best effort
        if let Ok(mtime) = entry.header().mtime() {
          out
            .set_modified(SystemTime::UNIX_EPOCH + Duration::from_secs(mtime))
            .ok();
        }
        drop(out);
        set_mode(&target, entry.header().mode()?)?;
      }
      EntryType::Symlink => {
        if let Some(parent) = target.parent() {
          fs::create_dir_all(parent)?;
        }
        if let Some(link_name) = entry.link_name()? {
          fs_ext::soft_link(&link_name, &target)?;
        }
      }
      EntryType::Link => {
        if let Some(link_name) = entry.link_name()? {
          let link_target = dest_dir.join(sanitize_entry_path(&link_name)?);
          fs::hard_link(&link_target, &target)?;
        }
      }
      kind => {
        log::info!("unpack:skipping: {:?} {:?}", kind, name);
      }
    }
  }

  Ok(())
}

/// Resolves "." and ".." segments syntactically. Absolute paths and paths
/// escaping the extraction root are rejected.
fn sanitize_entry_path(path: &Path) -> Result<PathBuf, Error> {
  let mut clean = PathBuf::new();
  for component in path.components() {
    match component {
      Component::Prefix(_) | Component::RootDir => {
        return Err(Error::UnsafeEntry(path.to_path_buf()));
      }
      Component::CurDir => {}
      Component::ParentDir => {
        if !clean.pop() {
          return Err(Error::UnsafeEntry(path.to_path_buf()));
        }
      }
      Component::Normal(part) => clean.push(part),
    }
  }
  Ok(clean)
}

#[cfg(unix)]
fn set_mode(path: &Path, mode: u32) -> io::Result<()> {
  use std::os::unix::fs::PermissionsExt;
  fs::set_permissions(path, fs::Permissions::from_mode(mode))
}

#[cfg(not(unix))]
fn set_mode(_path: &Path, _mode: u32) -> io::Result<()> {
  Ok(())
}

#[cfg(test)]
mod tests {
  use std::io::Write;

  use flate2::write::GzEncoder;
  use flate2::Compression;

  use super::*;

  struct ArchiveBuilder {
    builder: tar::Builder<Vec<u8>>,
  }

  impl ArchiveBuilder {
    fn new() -> Self {
      Self {
        builder: tar::Builder::new(Vec::new()),
      }
    }

    fn dir(mut self, path: &str) -> Self {
      let mut header = tar::Header::new_gnu();
      header.set_entry_type(EntryType::Directory);
      header.set_size(0);
      header.set_mode(0o755);
      header.set_cksum();
      self
        .builder
        .append_data(&mut header, path, io::empty())
        .unwrap();
      self
    }

    // `Builder::append_data` refuses ".." segments, so hostile paths are
    // written into the header name bytes directly
    fn raw_file(mut self, path: &str, data: &[u8]) -> Self {
      let mut header = tar::Header::new_gnu();
      header.set_size(data.len() as u64);
      header.set_mode(0o644);
      header.as_old_mut().name[..path.len()].copy_from_slice(path.as_bytes());
      header.set_cksum();
      self.builder.append(&header, data).unwrap();
      self
    }

    fn file(mut self, path: &str, data: &[u8], mode: u32) -> Self {
      let mut header = tar::Header::new_gnu();
      header.set_size(data.len() as u64);
      header.set_mode(mode);
      header.set_mtime(1_700_000_000);
      header.set_cksum();
      self.builder.append_data(&mut header, path, data).unwrap();
      self
    }

    fn symlink(mut self, path: &str, target: &str) -> Self {
      let mut header = tar::Header::new_gnu();
      header.set_entry_type(EntryType::Symlink);
      header.set_size(0);
      header.set_mode(0o777);
      header.set_cksum();
      self.builder.append_link(&mut header, path, target).unwrap();
      self
    }

    fn hard_link(mut self, path: &str, target: &str) -> Self {
      let mut header = tar::Header::new_gnu();
      header.set_entry_type(EntryType::Link);
      header.set_size(0);
      header.set_mode(0o644);
      header.set_cksum();
      self.builder.append_link(&mut header, path, target).unwrap();
      self
    }

    fn build(self) -> Vec<u8> {
      let tar_bytes = self.builder.into_inner().unwrap();
      let mut encoder = GzEncoder::new(Vec::new(), Compression::default());
      encoder.write_all(&tar_bytes).unwrap();
      encoder.finish().unwrap()
    }
  }

  #[test]
  fn unpacks_directories_files_and_links() {
    let bytes = ArchiveBuilder::new()
      .dir("nvim-linux-x86_64/")
      .dir("nvim-linux-x86_64/bin/")
      .file("nvim-linux-x86_64/bin/nvim", b"#!/bin/sh\n", 0o755)
      .file("nvim-linux-x86_64/README.md", b"readme", 0o644)
      .symlink("nvim-linux-x86_64/bin/vi", "nvim")
      .hard_link("nvim-linux-x86_64/bin/nvim-hard", "nvim-linux-x86_64/bin/nvim")
      .build();

    let dest = tempfile::tempdir().unwrap();
    unpack_tar_gz(bytes.as_slice(), dest.path()).unwrap();

    let root = dest.path().join("nvim-linux-x86_64");
    assert_eq!(fs::read(root.join("bin/nvim")).unwrap(), b"#!/bin/sh\n");
    assert_eq!(fs::read(root.join("README.md")).unwrap(), b"readme");
    assert_eq!(fs::read(root.join("bin/nvim-hard")).unwrap(), b"#!/bin/sh\n");

    #[cfg(unix)]
    {
      use std::os::unix::fs::PermissionsExt;
      let mode = fs::metadata(root.join("bin/nvim")).unwrap().permissions().mode();
      assert_eq!(mode & 0o777, 0o755);
      assert_eq!(fs::read_link(root.join("bin/vi")).unwrap(), PathBuf::from("nvim"));
    }
  }

  #[test]
  fn creates_missing_parent_directories_for_files() {
    let bytes = ArchiveBuilder::new()
      .file("nvim-linux-x86_64/share/man/nvim.1", b"manual", 0o644)
      .build();

    let dest = tempfile::tempdir().unwrap();
    unpack_tar_gz(bytes.as_slice(), dest.path()).unwrap();

    let path = dest.path().join("nvim-linux-x86_64/share/man/nvim.1");
    assert_eq!(fs::read(path).unwrap(), b"manual");
  }

  #[test]
  fn traversal_entries_abort_the_extraction() {
    let bytes = ArchiveBuilder::new()
      .file("ok.txt", b"ok", 0o644)
      .raw_file("../../etc/passwd", b"root::0:0")
      .build();

    let dest = tempfile::tempdir().unwrap();
    let outside = dest.path().join("inner");
    fs::create_dir(&outside).unwrap();

    let result = unpack_tar_gz(bytes.as_slice(), &outside);
    assert!(matches!(result, Err(Error::UnsafeEntry(_))));
    assert!(!dest.path().join("etc/passwd").exists());
  }

  #[test]
  fn interior_parent_segments_are_resolved() {
    let bytes = ArchiveBuilder::new()
      .raw_file("nvim/./docs/../bin/nvim", b"binary")
      .build();

    let dest = tempfile::tempdir().unwrap();
    unpack_tar_gz(bytes.as_slice(), dest.path()).unwrap();

    assert_eq!(fs::read(dest.path().join("nvim/bin/nvim")).unwrap(), b"binary");
    assert!(!dest.path().join("nvim/docs").exists());
  }

  #[test]
  fn sanitize_rejects_absolute_paths() {
    let result = sanitize_entry_path(Path::new("/etc/passwd"));
    assert!(matches!(result, Err(Error::UnsafeEntry(_))));
  }

  #[test]
  fn sanitize_rejects_escaping_paths() {
    let result = sanitize_entry_path(Path::new("a/../../b"));
    assert!(matches!(result, Err(Error::UnsafeEntry(_))));
  }

  #[test]
  fn sanitize_normalizes_safe_paths() {
    let clean = sanitize_entry_path(Path::new("./a/b/../c")).unwrap();
    assert_eq!(clean, PathBuf::from("a/c"));
  }
}
