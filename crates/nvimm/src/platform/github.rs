use super::cache::FileCache;
use super::constants as c;
use super::http;
use super::releases::Releases;
use crate::context::Context;

/// Loads the release catalog, refreshing the cached API payload when it is
/// older than the TTL. Processing always runs on the cached bytes so a
/// fetch cycle and a cache hit take the same path.
pub fn fetch_releases(ctx: &Context) -> anyhow::Result<Releases> {
  let cache = FileCache::new(&ctx.paths.cache, c::RELEASES_CACHE_FILE);

  if cache.stale(c::RELEASES_CACHE_TTL) {
    log::info!("releases:refresh {}", c::RELEASES_URL);
    let data = http::download_bytes(c::RELEASES_URL)?;
    cache.set(&data)?;
  }

  let data = cache.get()?;
  Ok(Releases::process(&data, &ctx.env.min_release)?)
}
