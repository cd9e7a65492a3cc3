use serde::{de, Deserialize, Deserializer, Serialize};
use serde_json::{Map, Value};
use std::{fs::File, io::BufReader, path::Path, str::FromStr};
use tracing::debug;

use crate::{
    options::{AlignX, AlignY, Language, RatingType, WidgetStyle},
    ChatCodeError, ChatCodeResult,
};

pub const DEFAULT_CHARSET: &str = "utf-8";
pub const DEFAULT_OFFSET_X: i64 = 10;
pub const DEFAULT_OFFSET_Y: i64 = 100;

/// Google Analytics tracker options, passed through to the widget untouched.
pub type GaOptions = Map<String, Value>;

/// Complete state of a chat widget configuration.
///
/// Serialized with camelCase keys. Missing keys fall back to the widget defaults and
/// enumerated values are validated while deserializing. A document must keep the
/// same pairs the builder writes together: `userName` with `userEmail`, and
/// `gaOptions` only alongside `gaKey`.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct WidgetConfig {
    /// Chat key issued by the vendor after registration.
    pub key: Option<String>,
    /// Cookie domain for the visitor identifier. A leading dot (".example.com")
    /// keeps conversations alive across sub-domains.
    pub cookie_domain: Option<String>,
    pub language: Language,
    pub charset: String,
    pub user_name: Option<String>,
    pub user_email: Option<String>,
    pub extra_info: Vec<ExtraInfo>,
    pub send_email_transcript: bool,
    pub rating_enabled: bool,
    pub rating_type: RatingType,
    pub rating_comment: bool,
    pub align_x: AlignX,
    pub align_y: AlignY,
    pub offset_x: i64,
    pub offset_y: i64,
    pub widget_style: WidgetStyle,
    pub ga_key: Option<String>,
    pub ga_options: Option<GaOptions>,
    pub hide_widget: bool,
}

/// Document shape before the paired fields are checked.
#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
struct WidgetDocument {
    #[serde(default)]
    key: Option<String>,

    #[serde(default)]
    cookie_domain: Option<String>,

    #[serde(default)]
    language: Language,

    #[serde(default = "default_charset")]
    charset: String,

    #[serde(default)]
    user_name: Option<String>,

    #[serde(default)]
    user_email: Option<String>,

    #[serde(default)]
    extra_info: Vec<ExtraInfo>,

    #[serde(default = "default_true")]
    send_email_transcript: bool,

    #[serde(default)]
    rating_enabled: bool,

    #[serde(default)]
    rating_type: RatingType,

    #[serde(default)]
    rating_comment: bool,

    #[serde(default)]
    align_x: AlignX,

    #[serde(default)]
    align_y: AlignY,

    #[serde(default = "default_offset_x")]
    offset_x: i64,

    #[serde(default = "default_offset_y")]
    offset_y: i64,

    #[serde(default)]
    widget_style: WidgetStyle,

    #[serde(default)]
    ga_key: Option<String>,

    #[serde(default)]
    ga_options: Option<GaOptions>,

    #[serde(default)]
    hide_widget: bool,
}

impl WidgetDocument {
    fn into_config(self) -> Result<WidgetConfig, &'static str> {
        if self.user_name.is_some() != self.user_email.is_some() {
            return Err("userName and userEmail must be set together");
        }
        if self.ga_options.is_some() && self.ga_key.is_none() {
            return Err("gaOptions requires gaKey");
        }

        Ok(WidgetConfig {
            key: self.key,
            cookie_domain: self.cookie_domain,
            language: self.language,
            charset: self.charset,
            user_name: self.user_name,
            user_email: self.user_email,
            extra_info: self.extra_info,
            send_email_transcript: self.send_email_transcript,
            rating_enabled: self.rating_enabled,
            rating_type: self.rating_type,
            rating_comment: self.rating_comment,
            align_x: self.align_x,
            align_y: self.align_y,
            offset_x: self.offset_x,
            offset_y: self.offset_y,
            widget_style: self.widget_style,
            ga_key: self.ga_key,
            ga_options: self.ga_options,
            hide_widget: self.hide_widget,
        })
    }
}

impl<'de> Deserialize<'de> for WidgetConfig {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        WidgetDocument::deserialize(deserializer)?
            .into_config()
            .map_err(de::Error::custom)
    }
}

/// Extra visitor information shown to chat agents.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ExtraInfo {
    pub id: String,
    pub label: String,
    pub value: String,
}

impl ExtraInfo {
    pub fn new(id: impl Into<String>, label: impl Into<String>, value: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            label: label.into(),
            value: value.into(),
        }
    }
}

impl Default for WidgetConfig {
    fn default() -> Self {
        Self {
            key: None,
            cookie_domain: None,
            language: Language::default(),
            charset: default_charset(),
            user_name: None,
            user_email: None,
            extra_info: Vec::new(),
            send_email_transcript: default_true(),
            rating_enabled: false,
            rating_type: RatingType::default(),
            rating_comment: false,
            align_x: AlignX::default(),
            align_y: AlignY::default(),
            offset_x: default_offset_x(),
            offset_y: default_offset_y(),
            widget_style: WidgetStyle::default(),
            ga_key: None,
            ga_options: None,
            hide_widget: false,
        }
    }
}

impl WidgetConfig {
    /// Loads a JSON configuration document.
    pub fn from_file<P: AsRef<Path>>(path: P) -> ChatCodeResult<Self> {
        let path = path.as_ref();
        debug!(path = %path.display(), "loading widget config");
        let file = File::open(path).map_err(|e| {
            ChatCodeError::config(format!("Failed to open {}: {}", path.display(), e))
        })?;
        let reader = BufReader::new(file);
        serde_json::from_reader(reader).map_err(|e| {
            ChatCodeError::config(format!("Failed to parse {}: {}", path.display(), e))
        })
    }

    pub fn to_json(&self) -> ChatCodeResult<String> {
        serde_json::to_string_pretty(self)
            .map_err(|e| ChatCodeError::config(format!("Failed to serialize config: {}", e)))
    }
}

impl FromStr for WidgetConfig {
    type Err = ChatCodeError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        serde_json::from_str(s)
            .map_err(|e| ChatCodeError::config(format!("Failed to parse config: {}", e)))
    }
}

fn default_charset() -> String {
    DEFAULT_CHARSET.to_string()
}

fn default_true() -> bool {
    true
}

fn default_offset_x() -> i64 {
    DEFAULT_OFFSET_X
}

fn default_offset_y() -> i64 {
    DEFAULT_OFFSET_Y
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use std::io::Write;

    #[test]
    fn test_widget_config_serde() {
        let mut config = WidgetConfig::default();
        config.key = Some("abc123".to_string());
        config.extra_info.push(ExtraInfo::new("orders", "Orders", "5"));
        let json = config.to_json().unwrap();
        tracing::debug!("{}", json);
        let deserialized: WidgetConfig = json.parse().unwrap();
        assert_eq!(config, deserialized);
    }

    #[test]
    fn test_empty_document_yields_defaults() {
        let config: WidgetConfig = "{}".parse().unwrap();
        assert_eq!(config, WidgetConfig::default());
        assert_eq!(config.charset, "utf-8");
        assert_eq!(config.offset_x, 10);
        assert_eq!(config.offset_y, 100);
        assert!(config.send_email_transcript);
    }

    #[test]
    fn test_camel_case_keys() {
        let json = r#"{
            "cookieDomain": ".example.com",
            "language": "de",
            "ratingEnabled": true,
            "ratingType": "advanced",
            "alignX": "left",
            "alignY": "side",
            "offsetY": 40,
            "widgetStyle": "button",
            "gaKey": "UA-1",
            "gaOptions": { "cookieDomain": "auto", "sampleRate": 50 },
            "hideWidget": true
        }"#;
        let config: WidgetConfig = json.parse().unwrap();

        assert_eq!(config.cookie_domain.as_deref(), Some(".example.com"));
        assert_eq!(config.language, Language::German);
        assert!(config.rating_enabled);
        assert_eq!(config.rating_type, RatingType::Advanced);
        assert_eq!(config.align_x, AlignX::Left);
        assert_eq!(config.align_y, AlignY::Side);
        assert_eq!(config.offset_x, DEFAULT_OFFSET_X);
        assert_eq!(config.offset_y, 40);
        assert_eq!(config.widget_style, WidgetStyle::Button);
        assert!(config.hide_widget);

        let ga_options = config.ga_options.unwrap();
        assert_eq!(ga_options.get("sampleRate"), Some(&Value::from(50)));
    }

    #[test]
    fn test_invalid_option_in_document() {
        let err = r#"{ "widgetStyle": "popup" }"#
            .parse::<WidgetConfig>()
            .unwrap_err();
        match err {
            ChatCodeError::Config(message) => {
                assert!(message.contains("Widget style value 'popup' is not allowed"));
            }
            other => panic!("Unexpected error type: {:?}", other),
        }
    }

    #[test]
    fn test_user_pair_must_be_complete() {
        for json in [
            r#"{ "userEmail": "jane@example.com" }"#,
            r#"{ "userName": "Jane" }"#,
        ] {
            let err = json.parse::<WidgetConfig>().unwrap_err();
            match err {
                ChatCodeError::Config(message) => {
                    assert!(message.contains("userName and userEmail must be set together"));
                }
                other => panic!("Unexpected error type: {:?}", other),
            }
        }

        let config: WidgetConfig = r#"{ "userName": "Jane", "userEmail": "jane@example.com" }"#
            .parse()
            .unwrap();
        assert_eq!(config.user_name.as_deref(), Some("Jane"));
        assert_eq!(config.user_email.as_deref(), Some("jane@example.com"));
    }

    #[test]
    fn test_ga_options_require_ga_key() {
        let err = r#"{ "gaOptions": { "x": 1 } }"#
            .parse::<WidgetConfig>()
            .unwrap_err();
        match err {
            ChatCodeError::Config(message) => {
                assert!(message.contains("gaOptions requires gaKey"));
            }
            other => panic!("Unexpected error type: {:?}", other),
        }

        let config: WidgetConfig = r#"{ "gaKey": "UA-1" }"#.parse().unwrap();
        assert_eq!(config.ga_key.as_deref(), Some("UA-1"));
        assert_eq!(config.ga_options, None);
    }

    #[test]
    fn test_from_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        write!(file, r#"{{ "key": "k-1", "language": "sk" }}"#).unwrap();

        let config = WidgetConfig::from_file(file.path()).unwrap();
        assert_eq!(config.key.as_deref(), Some("k-1"));
        assert_eq!(config.language, Language::Slovak);
    }

    #[test]
    fn test_from_missing_file() {
        let dir = tempfile::TempDir::new().unwrap();
        let err = WidgetConfig::from_file(dir.path().join("missing.json")).unwrap_err();
        assert!(matches!(err, ChatCodeError::Config(_)));
    }
}
