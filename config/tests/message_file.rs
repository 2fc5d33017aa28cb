use config::{Config, MessageConfig};
use serde_json::json;
use std::io::Write;

#[test]
fn text_with_keyboard() {
  let config = Config::parse(
    r##"
[message]
type = "text"
text = "Pick one"

[keyboard]
background_color = "#2db9b9"

[[keyboard.buttons]]
text = "Site"
action = "https://example.com"
columns = 3
image = "https://example.com/icon.png"

[[keyboard.buttons]]
text = "Later"
action = "later"
columns = 9
rows = 2

[keyboard.buttons.attributes]
TextSize = "small"
"##,
  )
  .unwrap();

  let payload = config.to_message().unwrap().into_payload();
  assert_eq!(
    payload.to_value().unwrap(),
    json!({
      "type": "text",
      "text": "Pick one",
      "keyboard": {
        "Type": "keyboard",
        "DefaultHeight": true,
        "BgColor": "#2db9b9",
        "Buttons": [
          {
            "Text": "Site",
            "ActionBody": "https://example.com",
            "ActionType": "open-url",
            "Columns": 3,
            "Image": "https://example.com/icon.png"
          },
          {
            "Text": "Later",
            "ActionBody": "later",
            "ActionType": "reply",
            "Rows": 2,
            "TextSize": "small"
          }
        ]
      }
    })
  );
}

#[test]
fn photo_alias_and_location() {
  let photo = Config::parse(
    r#"
[message]
type = "photo"
media = "http://x/img.png"
text = "caption"
"#,
  )
  .unwrap();
  assert!(matches!(photo.message, MessageConfig::Photo { .. }));
  assert_eq!(photo.to_message().unwrap().get().to_value().unwrap()["type"], "picture");

  let location = Config::parse(
    r#"
[message]
type = "location"
latitude = 0.0
longitude = 30.5
"#,
  )
  .unwrap();
  assert!(location.keyboard.is_none());
  assert_eq!(
    location.to_message().unwrap().get().to_value().unwrap(),
    json!({"type": "location", "location": {"lat": 0.0, "lon": 30.5}})
  );
}

#[test]
fn validation_errors_surface() {
  let config = Config::parse(
    r#"
[message]
type = "file"
media = "https://example.com/a.pdf"
size = 0
file_name = "a.pdf"
"#,
  )
  .unwrap();
  assert!(config.to_message().unwrap_err().is_validation());
}

#[test]
fn unknown_fields_and_types_are_rejected() {
  assert!(Config::parse("[message]\ntype = \"sticker\"\n").is_err());
  assert!(Config::parse("[message]\ntype = \"text\"\ntext = \"hi\"\n[keyboard]\ncolour = \"#000\"\n").is_err());
  assert!(Config::parse("[message]\ntype = \"video\"\nmedia = \"http://x/v.mp4\"\n").is_err());
}

#[test]
fn from_file_reads_toml() {
  let path = std::env::temp_dir().join(format!("viber-message-{}.toml", std::process::id()));
  let mut file = std::fs::File::create(&path).unwrap();
  writeln!(file, "[message]\ntype = \"url\"\nmedia = \"http://short.url\"").unwrap();
  drop(file);

  let config = Config::from_file(&path).unwrap();
  std::fs::remove_file(&path).unwrap();
  assert_eq!(config.to_message().unwrap().get().to_value().unwrap()["media"], "http://short.url");

  assert!(Config::from_file(path.with_extension("missing")).is_err());
}
