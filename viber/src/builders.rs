// Авторские права (c) 2025 urdekcah. Все права защищены.
//
// Этот исходный код распространяется под лицензией AGPL-3.0,
// текст которой находится в файле LICENSE в корневом каталоге данного проекта.
use crate::{
  config::{
    BUTTON_COLUMNS, BUTTON_ROWS, DEFAULT_KEYBOARD_BG_COLOR, DEFAULT_KEYBOARD_HEIGHT,
    MAX_URL_LENGTH,
  },
  link::is_url,
  types::{
    ActionType, Body, Button, ButtonOptions, Contact, Keyboard, Location, MessageType, Payload,
    RESERVED_BUTTON_KEYS,
  },
};
use error::Error;
use std::ops::RangeInclusive;
use tracing::debug;

/// A Viber message payload under construction.
///
/// Each constructor validates its arguments and fixes the message type. The
/// keyboard methods may then be chained before the payload is read with
/// [`Message::get`] or taken with [`Message::into_payload`].
#[derive(Debug, Clone, PartialEq)]
pub struct Message {
  payload: Payload,
}

impl Message {
  fn from_body(body: Body) -> Self {
    debug!(message_type = %body.message_type(), "Built message payload");
    Self {
      payload: Payload {
        body,
        keyboard: None,
      },
    }
  }

  pub fn text(text: impl Into<String>) -> Result<Self, Error> {
    let text = required(text.into(), "Text is required for the Viber Text message")?;
    Ok(Self::from_body(Body::Text { text }))
  }

  pub fn photo(media: impl Into<String>, text: impl Into<String>) -> Result<Self, Error> {
    let media = required(media.into(), "Photo media must be a URL for the Viber Photo message")?;
    let text = required(text.into(), "Text is required for the Viber Photo message")?;
    Ok(Self::from_body(Body::Photo { media, text }))
  }

  /// `duration` is dropped when zero.
  pub fn video(media: impl Into<String>, size: u64, duration: Option<u32>) -> Result<Self, Error> {
    let media = required(media.into(), "Media must be a URL for the Viber Video message")?;
    let size = required_size(size, "Size in bytes is required for the Viber Video message")?;
    Ok(Self::from_body(Body::Video {
      media,
      size,
      duration: duration.filter(|d| *d > 0),
    }))
  }

  pub fn file(
    media: impl Into<String>,
    size: u64,
    file_name: impl Into<String>,
  ) -> Result<Self, Error> {
    let media = required(media.into(), "Media must be a URL for the Viber File message")?;
    let size = required_size(size, "Size in bytes is required for the Viber File message")?;
    let file_name = required(
      file_name.into(),
      "File name is required for the Viber File message",
    )?;
    Ok(Self::from_body(Body::File {
      media,
      size,
      file_name,
    }))
  }

  pub fn contact(name: impl Into<String>, phone_number: impl Into<String>) -> Result<Self, Error> {
    let name = required(name.into(), "Contact name is required for the Viber Contact message")?;
    let phone_number = required(
      phone_number.into(),
      "Contact phone number is required for the Viber Contact message",
    )?;
    Ok(Self::from_body(Body::Contact {
      contact: Contact { name, phone_number },
    }))
  }

  /// Zero is a valid coordinate; NaN and infinities are not.
  pub fn location(latitude: f64, longitude: f64) -> Result<Self, Error> {
    let lat = coordinate(latitude, "Latitude")?;
    let lon = coordinate(longitude, "Longitude")?;
    Ok(Self::from_body(Body::Location {
      location: Location { lat, lon },
    }))
  }

  pub fn url(media: impl Into<String>) -> Result<Self, Error> {
    let media = required(media.into(), "Media must be a URL for the Viber URL message")?;
    // Viber measures length in UTF-16 code units.
    let length = media.encode_utf16().count();
    if length > MAX_URL_LENGTH {
      return Err(Error::validation(format!(
        "Media URL too long: {} UTF-16 units (max {})",
        length, MAX_URL_LENGTH
      )));
    }
    Ok(Self::from_body(Body::Url { media }))
  }

  /// Attaches an empty reply keyboard, replacing any existing one.
  ///
  /// A missing or `false` height flag falls back to the default height, and a
  /// missing or empty color falls back to `#FFFFFF`.
  pub fn attach_reply_keyboard(
    mut self,
    default_height: Option<bool>,
    bg_color: Option<&str>,
  ) -> Self {
    let default_height = default_height.filter(|h| *h).unwrap_or(DEFAULT_KEYBOARD_HEIGHT);
    let bg_color = bg_color
      .filter(|c| !c.is_empty())
      .unwrap_or(DEFAULT_KEYBOARD_BG_COLOR);

    if self.payload.keyboard.is_some() {
      debug!("Replacing existing reply keyboard");
    }

    self.payload.keyboard = Some(Keyboard {
      default_height,
      bg_color: bg_color.to_string(),
      buttons: Vec::new(),
    });
    self
  }

  /// Appends a button to the attached keyboard.
  ///
  /// The action type is `open-url` when `action` is an absolute URL and
  /// `reply` otherwise. Column and row spans outside 1..=6 and 1..=2 are
  /// not recorded; a `Columns` or `Rows` extra attribute is kept in that case.
  pub fn add_keyboard_button(
    mut self,
    text: impl Into<String>,
    action: impl Into<String>,
    columns: Option<u8>,
    rows: Option<u8>,
    options: Option<ButtonOptions>,
  ) -> Result<Self, Error> {
    let keyboard = self.payload.keyboard.as_mut().ok_or_else(|| {
      Error::precondition("Keyboard button can only be added after attaching a reply keyboard")
    })?;

    let text = required(text.into(), "Text is required for the Viber keyboard button")?;
    let action_body = required(
      action.into(),
      "Button value is required for the Viber keyboard button and can be a URL or a reply string",
    )?;

    let action_type = if is_url(&action_body) {
      ActionType::OpenUrl
    } else {
      ActionType::Reply
    };

    let ButtonOptions {
      bg_color,
      image,
      mut extra,
    } = options.unwrap_or_default();
    for key in RESERVED_BUTTON_KEYS {
      extra.remove(key);
    }
    if bg_color.is_some() {
      extra.remove("BgColor");
    }
    if image.is_some() {
      extra.remove("Image");
    }

    let columns = span(columns, BUTTON_COLUMNS, "columns");
    if columns.is_some() {
      extra.remove("Columns");
    }
    let rows = span(rows, BUTTON_ROWS, "rows");
    if rows.is_some() {
      extra.remove("Rows");
    }

    keyboard.buttons.push(Button {
      text,
      action_body,
      action_type,
      columns,
      rows,
      bg_color,
      image,
      extra,
    });
    Ok(self)
  }

  pub fn get(&self) -> &Payload {
    &self.payload
  }

  pub fn into_payload(self) -> Payload {
    self.payload
  }

  pub fn message_type(&self) -> MessageType {
    self.payload.message_type()
  }
}

fn required(value: String, msg: &str) -> Result<String, Error> {
  if value.is_empty() {
    return Err(Error::validation(msg));
  }
  Ok(value)
}

fn required_size(size: u64, msg: &str) -> Result<u64, Error> {
  if size == 0 {
    return Err(Error::validation(msg));
  }
  Ok(size)
}

fn coordinate(value: f64, name: &str) -> Result<f64, Error> {
  if !value.is_finite() {
    return Err(Error::validation(format!(
      "{} must be a finite number for the Viber Location message, got {}",
      name, value
    )));
  }
  Ok(value)
}

fn span(value: Option<u8>, range: RangeInclusive<u8>, name: &str) -> Option<u8> {
  match value {
    Some(v) if range.contains(&v) => Some(v),
    Some(v) => {
      debug!("Dropping out-of-range button {}: {}", name, v);
      None
    }
    None => None,
  }
}
