// Авторские права (c) 2025 urdekcah. Все права защищены.
//
// Этот исходный код распространяется под лицензией AGPL-3.0,
// текст которой находится в файле LICENSE в корневом каталоге данного проекта.
use anyhow::{Context, Result};
use config::Config;
use std::{
  env,
  path::{Path, PathBuf},
};
use tracing::{error, info, instrument};
use viber::Payload;

const DEFAULT_MESSAGE_FILE: &str = "message.toml";

#[cfg(debug_assertions)]
fn setup_logging() {
  tracing_subscriber::fmt()
    .with_writer(std::io::stderr)
    .with_file(true)
    .with_line_number(true)
    .with_thread_ids(true)
    .init();
}

#[cfg(not(debug_assertions))]
fn setup_logging() {
  tracing_subscriber::fmt().with_writer(std::io::stderr).init();
}

fn main() -> Result<()> {
  setup_logging();

  let path: PathBuf = env::args_os()
    .nth(1)
    .map_or_else(|| DEFAULT_MESSAGE_FILE.into(), PathBuf::from);

  match build(&path) {
    Ok(payload) => {
      let json = serde_json::to_string_pretty(&payload).context("Failed to render payload")?;
      println!("{json}");
      Ok(())
    }
    Err(e) => {
      error!("Failed to build message from {}: {:?}", path.display(), e);
      std::process::exit(1);
    }
  }
}

#[instrument]
fn build(path: &Path) -> Result<Payload> {
  let config = Config::from_file(path)?;
  let message = config
    .to_message()
    .context("Message description failed validation")?;
  info!(message_type = %message.message_type(), "Message payload ready");
  Ok(message.into_payload())
}
