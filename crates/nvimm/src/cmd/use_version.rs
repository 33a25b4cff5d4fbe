use clap::Parser;

use crate::context::Context;
use crate::platform::constants as c;
use crate::platform::current;
use crate::platform::current::CurrentOutcome;
use crate::platform::github;
use crate::platform::version;

#[derive(Debug, Parser)]
pub struct UseCommand {
  /// Target version to select ("stable" or an installed version)
  pub release: String,
}

pub fn main(ctx: Context, cmd: UseCommand) -> anyhow::Result<()> {
  // Only the "stable" alias is resolved through the catalog; explicit
  // versions switch without touching the network
  let clean_tag = if cmd.release == c::STABLE_TAG {
    let releases = github::fetch_releases(&ctx)?;
    releases.get(c::STABLE_TAG)?.clean_tag().to_string()
  } else {
    version::clean_tag(&cmd.release).to_string()
  };

  match current::set(&ctx.paths.versions, &clean_tag)? {
    CurrentOutcome::AlreadyCurrent => println!("✅ Already current ({})", clean_tag),
    CurrentOutcome::Updated => println!("✅ Current version set ({})", clean_tag),
  }
  Ok(())
}
