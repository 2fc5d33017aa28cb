// Авторские права (c) 2025 urdekcah. Все права защищены.
//
// Этот исходный код распространяется под лицензией AGPL-3.0,
// текст которой находится в файле LICENSE в корневом каталоге данного проекта.
use std::ops::RangeInclusive;

pub const DEFAULT_KEYBOARD_BG_COLOR: &str = "#FFFFFF";
pub const DEFAULT_KEYBOARD_HEIGHT: bool = true;
pub const MAX_URL_LENGTH: usize = 2000;

pub(crate) const BUTTON_COLUMNS: RangeInclusive<u8> = 1..=6;
pub(crate) const BUTTON_ROWS: RangeInclusive<u8> = 1..=2;
