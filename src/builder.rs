//! # Widget Config Builder
//!
//! [`WidgetConfigBuilder`] owns a [`WidgetConfig`] and is the only way to change it
//! after construction. Enumerated settings are validated when they are set, so an
//! invalid value never reaches the serialized configuration.
//!
//! ## Failure Semantics
//!
//! A setter that rejects an argument returns [`ChatCodeError::InvalidOption`] and
//! leaves every field untouched. Setters that take several constrained arguments
//! validate all of them before writing any.
//!
//! ## Example
//!
//! ```rust
//! use chatcode::{AlignX, WidgetConfigBuilder};
//!
//! let mut builder = WidgetConfigBuilder::new();
//! builder
//!     .set_key("your-chat-key")
//!     .set_language("cs")?
//!     .enable_rating("advanced", true)?
//!     .set_box_position(AlignX::Left, "side", 5, 50)?
//!     .hide_widget();
//!
//! let config = builder.build();
//! assert!(config.hide_widget);
//! # Ok::<(), chatcode::ChatCodeError>(())
//! ```

use crate::{
    config::{ExtraInfo, GaOptions, WidgetConfig},
    options::{AlignX, AlignY, IntoOption, Language, RatingType, WidgetStyle},
    ChatCodeResult,
};

#[derive(Debug, Clone, Default)]
pub struct WidgetConfigBuilder {
    config: WidgetConfig,
}

impl WidgetConfigBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    /// Continues from an existing configuration, e.g. one loaded from a file.
    pub fn from_config(config: WidgetConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &WidgetConfig {
        &self.config
    }

    pub fn build(self) -> WidgetConfig {
        self.config
    }

    pub fn set_language(
        &mut self,
        language: impl IntoOption<Language>,
    ) -> ChatCodeResult<&mut Self> {
        self.config.language = language.into_option()?;
        Ok(self)
    }

    /// Stored as given. The widget expects an IANA charset name.
    pub fn set_charset(&mut self, charset: impl Into<String>) -> &mut Self {
        self.config.charset = charset.into();
        self
    }

    pub fn set_key(&mut self, key: impl Into<String>) -> &mut Self {
        self.config.key = Some(key.into());
        self
    }

    /// The visitor is identified by a cookie. By default a conversation ends when
    /// the visitor moves to a sub-domain; pass the main domain with a leading dot
    /// (".your-domain.com") to keep it running across all sub-domains.
    pub fn set_cookie_domain(&mut self, domain: impl Into<String>) -> &mut Self {
        self.config.cookie_domain = Some(domain.into());
        self
    }

    /// Removes the "send transcript by email" button from the closing dialog.
    pub fn disable_send_email_transcript(&mut self) -> &mut Self {
        self.config.send_email_transcript = false;
        self
    }

    /// Prompts visitors to rate the conversation once it ends.
    pub fn enable_rating(
        &mut self,
        rating_type: impl IntoOption<RatingType>,
        rating_comment: bool,
    ) -> ChatCodeResult<&mut Self> {
        let rating_type = rating_type.into_option()?;

        self.config.rating_enabled = true;
        self.config.rating_type = rating_type;
        self.config.rating_comment = rating_comment;
        Ok(self)
    }

    /// Identifies the visitor to chat agents. Neither value is validated.
    pub fn set_user_basic_information(
        &mut self,
        name: impl Into<String>,
        email: impl Into<String>,
    ) -> &mut Self {
        self.config.user_name = Some(name.into());
        self.config.user_email = Some(email.into());
        self
    }

    /// Appends an entry; repeated ids are kept as separate entries.
    pub fn set_user_extra_information(
        &mut self,
        id: impl Into<String>,
        label: impl Into<String>,
        value: impl Into<String>,
    ) -> &mut Self {
        self.config.extra_info.push(ExtraInfo::new(id, label, value));
        self
    }

    /// Moves the chat box. Defaults are `right`, `bottom`, 10 and 100
    /// (see [`crate::DEFAULT_OFFSET_X`] and [`crate::DEFAULT_OFFSET_Y`]).
    pub fn set_box_position(
        &mut self,
        align_x: impl IntoOption<AlignX>,
        align_y: impl IntoOption<AlignY>,
        offset_x: i64,
        offset_y: i64,
    ) -> ChatCodeResult<&mut Self> {
        let align_x = align_x.into_option()?;
        let align_y = align_y.into_option()?;

        self.config.align_x = align_x;
        self.config.align_y = align_y;
        self.config.offset_x = offset_x;
        self.config.offset_y = offset_y;
        Ok(self)
    }

    pub fn set_widget_style(
        &mut self,
        style: impl IntoOption<WidgetStyle>,
    ) -> ChatCodeResult<&mut Self> {
        self.config.widget_style = style.into_option()?;
        Ok(self)
    }

    /// Links a Google Analytics property. `ga_options` is forwarded to the tracker
    /// as-is; use it when one GA account tracks several sub-domains.
    pub fn set_google_analytics(
        &mut self,
        ga_key: impl Into<String>,
        ga_options: Option<GaOptions>,
    ) -> &mut Self {
        self.config.ga_key = Some(ga_key.into());
        self.config.ga_options = ga_options;
        self
    }

    pub fn hide_widget(&mut self) -> &mut Self {
        self.config.hide_widget = true;
        self
    }
}
