use std::fs;
use std::time::SystemTime;

use clap::Parser;

use crate::context::Context;
use crate::error::Error;
use crate::platform::archive;
use crate::platform::asset;
use crate::platform::current;
use crate::platform::fs_ext;
use crate::platform::github;
use crate::platform::hash;
use crate::platform::hash::Integrity;
use crate::platform::http;

#[derive(Debug, Parser)]
pub struct InstallCommand {
  /// Target release to install ("stable", "nightly" or a version like "0.11.3")
  pub release: String,

  /// Replace an existing version if already installed
  #[arg(short = 'f', long = "force")]
  pub force: bool,
}

pub fn main(ctx: Context, cmd: InstallCommand) -> anyhow::Result<()> {
  let start_time = SystemTime::now();

  let releases = github::fetch_releases(&ctx)?;
  let info = releases.get(&cmd.release)?;
  let clean_tag = info.clean_tag();

  let target_dir = ctx.paths.versions.join(clean_tag);
  if fs::exists(&target_dir)? {
    if !cmd.force {
      println!("✅ Already installed ({})", clean_tag);
      return Ok(());
    }
    println!("Removing existing");
    fs_ext::remove_if_exists(&target_dir)?;
  }

  let os = std::env::consts::OS;
  let arch = std::env::consts::ARCH;
  let tarball =
    asset::tarball_name(info, os, arch).ok_or_else(|| Error::asset_not_resolved(os, arch))?;
  let asset = info
    .assets
    .iter()
    .find(|asset| asset.name == tarball)
    .ok_or_else(|| Error::asset_not_resolved(os, arch))?;

  println!("Downloading {}", tarball);
  let archive_path = http::download_to_file(info.download_url(&asset.name), &ctx.paths.cache)?;

  match &asset.digest {
    Some(digest) => {
      let actual = hash::sha256_file(&archive_path)?;
      let verified = Integrity::parse(digest).is_some_and(|expected| expected.matches(&actual));
      if !verified {
        return Err(
          Error::ChecksumMismatch {
            file: tarball.to_string(),
            expected: digest.clone(),
            actual,
          }
          .into(),
        );
      }
      log::info!("install:verified {}", tarball);
    }
    None => log::warn!("no digest recorded for {}, skipping verification", tarball),
  }

  println!("Extracting");
  let staging = ctx.paths.temp_dir()?;
  archive::unpack_tar_gz(fs::File::open(&archive_path)?, &staging)?;

  // The tarball unpacks into a single directory named after itself
  let unpacked = staging.join(tarball.strip_suffix(".tar.gz").unwrap_or(tarball));
  fs_ext::create_dir_if_not_exists(&target_dir)?;
  fs_ext::cp_dir_recursive(&unpacked, &target_dir)?;

  if current::query(&ctx.paths.versions)?.is_none() {
    current::set(&ctx.paths.versions, clean_tag)?;
    println!("Current version set to {}", clean_tag);
  }

  println!(
    "✅ Installed in {:.2?} ({})",
    start_time.elapsed()?,
    clean_tag
  );
  Ok(())
}
