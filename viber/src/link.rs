// Авторские права (c) 2025 urdekcah. Все права защищены.
//
// Этот исходный код распространяется под лицензией AGPL-3.0,
// текст которой находится в файле LICENSE в корневом каталоге данного проекта.
use url::Url;

/// Returns `true` when `value` is an absolute URL with a scheme and a host.
///
/// Purely syntactic: nothing is resolved or fetched.
pub fn is_url(value: &str) -> bool {
  if value.is_empty() || value.chars().any(char::is_whitespace) {
    return false;
  }

  match Url::parse(value) {
    Ok(url) => !url.cannot_be_a_base() && url.host_str().is_some_and(|h| !h.is_empty()),
    Err(_) => false,
  }
}
