// Авторские права (c) 2025 urdekcah. Все права защищены.
//
// Этот исходный код распространяется под лицензией AGPL-3.0,
// текст которой находится в файле LICENSE в корневом каталоге данного проекта.
use serde::Serialize;
use serde_json::{Map, Value};
use std::fmt;

/// Keys owned by the builder; extra attributes never override them.
pub(crate) const RESERVED_BUTTON_KEYS: [&str; 3] = ["Text", "ActionBody", "ActionType"];

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum MessageType {
  Text,
  Photo,
  Video,
  File,
  Contact,
  Location,
  Url,
}

impl MessageType {
  pub fn as_str(self) -> &'static str {
    match self {
      MessageType::Text => "text",
      MessageType::Photo => "picture",
      MessageType::Video => "video",
      MessageType::File => "file",
      MessageType::Contact => "contact",
      MessageType::Location => "location",
      MessageType::Url => "url",
    }
  }
}

impl fmt::Display for MessageType {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    f.write_str(self.as_str())
  }
}

#[derive(Debug, Serialize, Clone, PartialEq)]
pub struct Contact {
  pub name: String,
  pub phone_number: String,
}

#[derive(Debug, Serialize, Clone, Copy, PartialEq)]
pub struct Location {
  pub lat: f64,
  pub lon: f64,
}

/// Type-specific part of a payload. Serializes with its `type` tag inline.
#[derive(Debug, Serialize, Clone, PartialEq)]
#[serde(tag = "type", rename_all = "lowercase")]
pub enum Body {
  Text {
    text: String,
  },
  #[serde(rename = "picture")]
  Photo {
    media: String,
    text: String,
  },
  Video {
    media: String,
    size: u64,
    #[serde(skip_serializing_if = "Option::is_none")]
    duration: Option<u32>,
  },
  File {
    media: String,
    size: u64,
    file_name: String,
  },
  Contact {
    contact: Contact,
  },
  Location {
    location: Location,
  },
  Url {
    media: String,
  },
}

impl Body {
  pub fn message_type(&self) -> MessageType {
    match self {
      Body::Text { .. } => MessageType::Text,
      Body::Photo { .. } => MessageType::Photo,
      Body::Video { .. } => MessageType::Video,
      Body::File { .. } => MessageType::File,
      Body::Contact { .. } => MessageType::Contact,
      Body::Location { .. } => MessageType::Location,
      Body::Url { .. } => MessageType::Url,
    }
  }
}

#[derive(Debug, Serialize, Clone, PartialEq)]
pub struct Payload {
  #[serde(flatten)]
  pub body: Body,
  #[serde(skip_serializing_if = "Option::is_none")]
  pub keyboard: Option<Keyboard>,
}

impl Payload {
  pub fn message_type(&self) -> MessageType {
    self.body.message_type()
  }

  /// Plain JSON mapping view of the payload.
  pub fn to_value(&self) -> serde_json::Result<Value> {
    serde_json::to_value(self)
  }
}

#[derive(Debug, Serialize, Clone, PartialEq)]
#[serde(tag = "Type", rename = "keyboard", rename_all = "PascalCase")]
pub struct Keyboard {
  pub default_height: bool,
  pub bg_color: String,
  pub buttons: Vec<Button>,
}

#[derive(Debug, Serialize, Clone, Copy, PartialEq, Eq)]
#[serde(rename_all = "kebab-case")]
pub enum ActionType {
  OpenUrl,
  Reply,
}

#[derive(Debug, Serialize, Clone, PartialEq)]
#[serde(rename_all = "PascalCase")]
pub struct Button {
  pub text: String,
  pub action_body: String,
  pub action_type: ActionType,
  #[serde(skip_serializing_if = "Option::is_none")]
  pub columns: Option<u8>,
  #[serde(skip_serializing_if = "Option::is_none")]
  pub rows: Option<u8>,
  #[serde(skip_serializing_if = "Option::is_none")]
  pub bg_color: Option<String>,
  #[serde(skip_serializing_if = "Option::is_none")]
  pub image: Option<String>,
  #[serde(flatten)]
  pub extra: Map<String, Value>,
}

/// Optional button attributes beyond text, action and span.
#[derive(Debug, Default, Clone, PartialEq)]
pub struct ButtonOptions {
  pub(crate) bg_color: Option<String>,
  pub(crate) image: Option<String>,
  pub(crate) extra: Map<String, Value>,
}

impl ButtonOptions {
  pub fn new() -> Self {
    Self::default()
  }

  pub fn bg_color(mut self, color: impl Into<String>) -> Self {
    self.bg_color = Some(color.into());
    self
  }

  pub fn image(mut self, url: impl Into<String>) -> Self {
    self.image = Some(url.into());
    self
  }

  /// Adds a raw attribute passed through to the button as-is, e.g. `TextSize`.
  pub fn attribute(mut self, key: impl Into<String>, value: impl Into<Value>) -> Self {
    self.extra.insert(key.into(), value.into());
    self
  }
}

impl From<Map<String, Value>> for ButtonOptions {
  fn from(extra: Map<String, Value>) -> Self {
    Self {
      extra,
      ..Self::default()
    }
  }
}
