use std::collections::HashSet;

use clap::Parser;

use crate::context::Context;
use crate::platform::github;

#[derive(Debug, Parser)]
pub struct ListCommand {
  /// Only show releases that are not installed yet
  #[arg(long = "available")]
  pub available: bool,
}

pub fn main(ctx: Context, cmd: ListCommand) -> anyhow::Result<()> {
  let releases = github::fetch_releases(&ctx)?;
  let installed = releases.installed(&ctx.paths.versions);

  if cmd.available {
    for info in releases.available(&installed) {
      println!("{}", info.clean_tag());
    }
    return Ok(());
  }

  let installed_tags = installed
    .iter()
    .map(|info| info.clean_tag())
    .collect::<HashSet<&str>>();

  for info in releases.iter() {
    let marker = if installed_tags.contains(info.clean_tag()) {
      "*"
    } else {
      " "
    };
    if info.stable {
      println!("{} {} (stable)", marker, info.clean_tag());
    } else {
      println!("{} {}", marker, info.clean_tag());
    }
  }

  Ok(())
}
