use std::fs;
use std::path::Path;
use std::path::PathBuf;

use reqwest::blocking::Client;
use reqwest::blocking::Response;

use super::constants as c;
use crate::error::Error;

fn get(url: &str) -> Result<Response, Error> {
  log::info!("http:get {}", url);
  let response = Client::builder()
    .user_agent(c::USER_AGENT)
    .build()
    .and_then(|client| client.get(url).send())
    .map_err(|source| Error::DownloadFailed {
      url: url.to_string(),
      source: Some(source),
    })?;

  if !response.status().is_success() {
    return Err(Error::DownloadFailed {
      url: url.to_string(),
      source: None,
    });
  }

  Ok(response)
}

pub fn download_bytes<S: AsRef<str>>(url: S) -> Result<Vec<u8>, Error> {
  let url = url.as_ref();
  let response = get(url)?;
  let bytes = response.bytes().map_err(|source| Error::DownloadFailed {
    url: url.to_string(),
    source: Some(source),
  })?;
  Ok(bytes.to_vec())
}

/// Streams the response body into `dest_dir`, named by the final path
/// segment of the URL, and returns the local file path
pub fn download_to_file<S: AsRef<str>>(url: S, dest_dir: &Path) -> Result<PathBuf, Error> {
  let url = url.as_ref();
  fs::create_dir_all(dest_dir)?;

  let file_name = url.rsplit('/').next().unwrap_or(url);
  let out_path = dest_dir.join(file_name);

  let mut response = get(url)?;
  let mut out = fs::File::create(&out_path)?;
  response
    .copy_to(&mut out)
    .map_err(|source| Error::DownloadFailed {
      url: url.to_string(),
      source: Some(source),
    })?;

  log::info!("http:saved {:?}", out_path);
  Ok(out_path)
}
