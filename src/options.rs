//! # Widget Options
//!
//! Closed enumerations for every constrained widget setting, together with the
//! string boundary that turns untyped input into them.
//!
//! ## Option Types
//!
//! * [`Language`]: chat box language, 17 supported codes
//! * [`RatingType`]: conversation rating layout
//! * [`AlignX`] / [`AlignY`]: chat box anchoring
//! * [`WidgetStyle`]: chat box layout
//!
//! ## Parsing
//!
//! Each enum implements [`ChatOption`], whose [`ChatOption::parse_option`] is the only
//! place a string becomes an option value. A rejected value yields
//! [`ChatCodeError::InvalidOption`] listing every allowed value in declaration order.
//! The `strum` derives provide:
//!
//! * String conversion via `EnumString`
//! * Display formatting via `Display`
//! * Iteration over all allowed values via `EnumIter`
//! * String reference access via `AsRefStr`
//!
//! Serde goes through the same boundary (`TryFrom<String>`), so a configuration
//! document cannot smuggle in a value a setter would reject.

use std::str::FromStr;

use serde::{Deserialize, Serialize};
use strum::IntoEnumIterator;
use tracing::debug;

use crate::error::{ChatCodeError, ChatCodeResult};

/// Names the constrained field an option value belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, strum::Display, strum::AsRefStr)]
pub enum OptionField {
    #[strum(serialize = "Language")]
    Language,
    #[strum(serialize = "Rating type")]
    RatingType,
    #[strum(serialize = "AlignX")]
    AlignX,
    #[strum(serialize = "AlignY")]
    AlignY,
    #[strum(serialize = "Widget style")]
    WidgetStyle,
}

/// A value drawn from a fixed allowed set.
pub trait ChatOption: Copy + FromStr + IntoEnumIterator + AsRef<str> {
    const FIELD: OptionField;

    /// Every allowed value, in declaration order.
    fn allowed_values() -> Vec<String> {
        Self::iter()
            .map(|option| option.as_ref().to_string())
            .collect()
    }

    /// Parses `value`, matching case-sensitively against the allowed set.
    fn parse_option(value: &str) -> ChatCodeResult<Self> {
        Self::from_str(value).map_err(|_| {
            debug!(field = %Self::FIELD, value, "rejected widget option");
            ChatCodeError::invalid_option(Self::FIELD, value, Self::allowed_values())
        })
    }
}

/// Conversion accepted by the builder setters: either an already typed option or
/// a string that still has to be validated.
pub trait IntoOption<T> {
    fn into_option(self) -> ChatCodeResult<T>;
}

macro_rules! chat_option {
    ($option:ident, $field:expr) => {
        impl ChatOption for $option {
            const FIELD: OptionField = $field;
        }

        impl IntoOption<$option> for $option {
            fn into_option(self) -> ChatCodeResult<$option> {
                Ok(self)
            }
        }

        impl IntoOption<$option> for &str {
            fn into_option(self) -> ChatCodeResult<$option> {
                <$option as ChatOption>::parse_option(self)
            }
        }

        impl IntoOption<$option> for String {
            fn into_option(self) -> ChatCodeResult<$option> {
                <$option as ChatOption>::parse_option(&self)
            }
        }

        impl TryFrom<String> for $option {
            type Error = ChatCodeError;

            fn try_from(value: String) -> Result<Self, Self::Error> {
                <$option as ChatOption>::parse_option(&value)
            }
        }

        impl From<$option> for String {
            fn from(option: $option) -> Self {
                option.as_ref().to_string()
            }
        }
    };
}

/// Chat box language.
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Hash,
    Default,
    Serialize,
    Deserialize,
    strum::EnumString,
    strum::Display,
    strum::EnumIter,
    strum::AsRefStr,
)]
#[serde(try_from = "String", into = "String")]
pub enum Language {
    #[default]
    #[strum(serialize = "en")]
    English,
    #[strum(serialize = "fr")]
    French,
    #[strum(serialize = "es")]
    Spanish,
    #[strum(serialize = "de")]
    German,
    #[strum(serialize = "ru")]
    Russian,
    #[strum(serialize = "cs")]
    Czech,
    #[strum(serialize = "sk")]
    Slovak,
    #[strum(serialize = "pl")]
    Polish,
    #[strum(serialize = "hu")]
    Hungarian,
    #[strum(serialize = "cn")]
    Chinese,
    #[strum(serialize = "da")]
    Danish,
    #[strum(serialize = "nl")]
    Dutch,
    #[strum(serialize = "it")]
    Italian,
    #[strum(serialize = "pt")]
    Portuguese,
    #[strum(serialize = "hi")]
    Hindi,
    #[strum(serialize = "ro")]
    Romanian,
    #[strum(serialize = "no")]
    Norwegian,
}

chat_option!(Language, OptionField::Language);

/// Layout of the rating prompt shown after a conversation ends.
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Hash,
    Default,
    Serialize,
    Deserialize,
    strum::EnumString,
    strum::Display,
    strum::EnumIter,
    strum::AsRefStr,
)]
#[serde(try_from = "String", into = "String")]
#[strum(serialize_all = "lowercase")]
pub enum RatingType {
    Advanced,
    #[default]
    Simple,
}

chat_option!(RatingType, OptionField::RatingType);

/// Horizontal anchoring of the chat box.
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Hash,
    Default,
    Serialize,
    Deserialize,
    strum::EnumString,
    strum::Display,
    strum::EnumIter,
    strum::AsRefStr,
)]
#[serde(try_from = "String", into = "String")]
#[strum(serialize_all = "lowercase")]
pub enum AlignX {
    #[default]
    Right,
    Left,
}

chat_option!(AlignX, OptionField::AlignX);

/// Vertical anchoring: along the bottom edge or on the side of the page.
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Hash,
    Default,
    Serialize,
    Deserialize,
    strum::EnumString,
    strum::Display,
    strum::EnumIter,
    strum::AsRefStr,
)]
#[serde(try_from = "String", into = "String")]
#[strum(serialize_all = "lowercase")]
pub enum AlignY {
    Side,
    #[default]
    Bottom,
}

chat_option!(AlignY, OptionField::AlignY);

/// Chat box layout.
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Hash,
    Default,
    Serialize,
    Deserialize,
    strum::EnumString,
    strum::Display,
    strum::EnumIter,
    strum::AsRefStr,
)]
#[serde(try_from = "String", into = "String")]
#[strum(serialize_all = "lowercase")]
pub enum WidgetStyle {
    Button,
    #[default]
    Widget,
}

chat_option!(WidgetStyle, OptionField::WidgetStyle);
