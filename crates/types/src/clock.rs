//! Clock face configuration types

use serde::{Deserialize, Serialize};

/// Widget type name under which the clock face is registered
pub const WIDGET_TYPE_TIME_CLOCK: &str = "time_clock";

/// Property names understood by the clock face
pub mod props {
    pub const HOUR: &str = "hour";
    pub const MINUTE: &str = "minute";
    pub const SECOND: &str = "second";
    pub const HOUR_IMAGE: &str = "hour_image";
    pub const MINUTE_IMAGE: &str = "minute_image";
    pub const SECOND_IMAGE: &str = "second_image";
    pub const BG_IMAGE: &str = "bg_image";
    /// Foreground overlay drawn above the hands
    pub const IMAGE: &str = "image";
}

/// Every clock face property, in the order they are persisted
pub const TIME_CLOCK_PROPERTIES: &[&str] = &[
    props::HOUR,
    props::MINUTE,
    props::SECOND,
    props::BG_IMAGE,
    props::HOUR_IMAGE,
    props::MINUTE_IMAGE,
    props::SECOND_IMAGE,
    props::IMAGE,
];

/// Persisted state of a clock face
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Default)]
pub struct ClockFaceConfig {
    #[serde(default)]
    pub hour: i32,
    #[serde(default)]
    pub minute: i32,
    #[serde(default)]
    pub second: i32,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub bg_image: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub hour_image: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub minute_image: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub second_image: Option<String>,
    /// Foreground overlay
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub image: Option<String>,
}
