// Авторские права (c) 2025 urdekcah. Все права защищены.
//
// Этот исходный код распространяется под лицензией AGPL-3.0,
// текст которой находится в файле LICENSE в корневом каталоге данного проекта.
use anyhow::Context;
use error::Error;
use serde::Deserialize;
use serde_json::{Map, Value};
use std::fs;
use std::path::Path;
use tracing::instrument;
use viber::{ButtonOptions, Message};

/// A message description, usually read from a TOML file.
#[derive(Debug, Clone, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct Config {
  pub message: MessageConfig,
  #[serde(default)]
  pub keyboard: Option<KeyboardConfig>,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(tag = "type", rename_all = "lowercase")]
pub enum MessageConfig {
  Text {
    text: String,
  },
  #[serde(rename = "picture", alias = "photo")]
  Photo {
    media: String,
    text: String,
  },
  Video {
    media: String,
    size: u64,
    #[serde(default)]
    duration: Option<u32>,
  },
  File {
    media: String,
    size: u64,
    file_name: String,
  },
  Contact {
    name: String,
    phone_number: String,
  },
  Location {
    latitude: f64,
    longitude: f64,
  },
  Url {
    media: String,
  },
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct KeyboardConfig {
  pub default_height: Option<bool>,
  pub background_color: Option<String>,
  #[serde(default)]
  pub buttons: Vec<ButtonConfig>,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct ButtonConfig {
  pub text: String,
  pub action: String,
  pub columns: Option<u8>,
  pub rows: Option<u8>,
  pub background_color: Option<String>,
  pub image: Option<String>,
  /// Raw Viber button attributes, e.g. `TextSize = "large"`.
  #[serde(default)]
  pub attributes: Map<String, Value>,
}

impl Config {
  #[instrument(skip(path))]
  pub fn from_file<P: AsRef<Path>>(path: P) -> anyhow::Result<Self> {
    let path = path.as_ref();
    let content = fs::read_to_string(path)
      .with_context(|| format!("Failed to read message file {}", path.display()))?;
    let config = Self::parse(&content)?;
    tracing::debug!("Loaded message description successfully");
    Ok(config)
  }

  pub fn parse(content: &str) -> anyhow::Result<Self> {
    toml::from_str(content).context("Invalid message description")
  }

  /// Builds the described message, keyboard and buttons included.
  pub fn to_message(&self) -> Result<Message, Error> {
    let message = self.message.to_message()?;

    let Some(keyboard) = &self.keyboard else {
      return Ok(message);
    };

    keyboard.buttons.iter().try_fold(
      message.attach_reply_keyboard(keyboard.default_height, keyboard.background_color.as_deref()),
      |message, button| {
        message.add_keyboard_button(
          button.text.as_str(),
          button.action.as_str(),
          button.columns,
          button.rows,
          Some(button.options()),
        )
      },
    )
  }
}

impl MessageConfig {
  pub fn to_message(&self) -> Result<Message, Error> {
    match self {
      MessageConfig::Text { text } => Message::text(text.as_str()),
      MessageConfig::Photo { media, text } => Message::photo(media.as_str(), text.as_str()),
      MessageConfig::Video {
        media,
        size,
        duration,
      } => Message::video(media.as_str(), *size, *duration),
      MessageConfig::File {
        media,
        size,
        file_name,
      } => Message::file(media.as_str(), *size, file_name.as_str()),
      MessageConfig::Contact { name, phone_number } => {
        Message::contact(name.as_str(), phone_number.as_str())
      }
      MessageConfig::Location {
        latitude,
        longitude,
      } => Message::location(*latitude, *longitude),
      MessageConfig::Url { media } => Message::url(media.as_str()),
    }
  }
}

impl ButtonConfig {
  fn options(&self) -> ButtonOptions {
    let mut options = ButtonOptions::from(self.attributes.clone());
    if let Some(color) = &self.background_color {
      options = options.bg_color(color.as_str());
    }
    if let Some(image) = &self.image {
      options = options.image(image.as_str());
    }
    options
  }
}
