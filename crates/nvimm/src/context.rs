use crate::env::Env;
use crate::paths::Paths;

#[derive(Debug, Clone)]
pub struct Context {
  pub env: Env,
  pub paths: Paths,
}
