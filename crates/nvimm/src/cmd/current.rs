use clap::Parser;

use crate::context::Context;
use crate::platform::current;

#[derive(Debug, Parser)]
pub struct CurrentCommand {}

pub fn main(ctx: Context, _cmd: CurrentCommand) -> anyhow::Result<()> {
  match current::query(&ctx.paths.versions)? {
    Some(version) => println!("{}", version),
    None => println!("No current version set"),
  }
  Ok(())
}
