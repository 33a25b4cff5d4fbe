#![deny(unused_crate_dependencies)]

mod cmd;
mod context;
mod env;
mod error;
mod paths;
mod platform;

use std::path::PathBuf;

use clap::Parser;
use clap::Subcommand;
use env::Env;
use paths::Paths;

#[derive(Debug, Subcommand)]
pub enum NvimmCommandType {
  /// Display the version of Neovim currently selected
  Current(cmd::current::CurrentCommand),
  /// Install a version of Neovim
  Install(cmd::install::InstallCommand),
  /// List remote and installed versions of Neovim
  List(cmd::list::ListCommand),
  /// Select the current version of Neovim
  Use(cmd::use_version::UseCommand),
}

#[derive(Parser, Debug)]
pub struct NvimmCommand {
  #[clap(subcommand)]
  pub command: NvimmCommandType,
  /// [default value: "$HOME/.local/nvimm"]
  #[arg(long = "nvimm-dir", env = "NVIMM_DIR")]
  pub nvimm_dir: Option<PathBuf>,
  /// Lowest release offered for install [default value: "0.7.0"]
  #[arg(long = "min-release", env = "NVIMM_MIN_RELEASE")]
  pub min_release: Option<String>,
  /// [possible values: "error", "warn", "info", "debug", "trace"]
  #[arg(long = "log", env = "RUST_LOG")]
  pub _rust_log: Option<String>,
}

fn main() -> anyhow::Result<()> {
  env_logger::init();

  let args = NvimmCommand::parse();
  let env = Env::parse(args.nvimm_dir, args.min_release)?;
  let paths = Paths::new(&env)?;
  let ctx = context::Context { env, paths };

  match args.command {
    NvimmCommandType::Current(cmd) => cmd::current::main(ctx, cmd),
    NvimmCommandType::Install(cmd) => cmd::install::main(ctx, cmd),
    NvimmCommandType::List(cmd) => cmd::list::main(ctx, cmd),
    NvimmCommandType::Use(cmd) => cmd::use_version::main(ctx, cmd),
  }
}
