// Авторские права (c) 2025 urdekcah. Все права защищены.
//
// Этот исходный код распространяется под лицензией AGPL-3.0,
// текст которой находится в файле LICENSE в корневом каталоге данного проекта.
mod builders;
mod config;
mod types;
mod link;

pub use crate::{
  builders::Message,
  config::{DEFAULT_KEYBOARD_BG_COLOR, DEFAULT_KEYBOARD_HEIGHT, MAX_URL_LENGTH},
  types::{
    ActionType, Body, Button, ButtonOptions, Contact, Keyboard, Location, MessageType, Payload,
  },
  link::is_url,
};
pub use error::Error;
