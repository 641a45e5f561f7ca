//! Logo prompt composition.
//!
//! Maps a project name, description, and `LogoStyle` to the natural-language
//! prompt sent to the image model. Construction is pure and deterministic;
//! the style descriptor table is static. Callers supply trimmed, non-empty
//! strings — no validation happens here.
use std::fmt;
use std::str::FromStr;

use crate::error::AppError;

/// The five logo styles the form offers. Unknown style strings are rejected
/// at parse time so an undefined descriptor can never be embedded in a
/// prompt.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LogoStyle {
    Minimalist,
    Modern,
    Playful,
    Professional,
    Vintage,
}

impl LogoStyle {
    pub const ALL: [LogoStyle; 5] = [
        LogoStyle::Minimalist,
        LogoStyle::Modern,
        LogoStyle::Playful,
        LogoStyle::Professional,
        LogoStyle::Vintage,
    ];

    /// Adjective list woven into the prompt's style clause.
    pub fn descriptors(&self) -> &'static str {
        match self {
            LogoStyle::Minimalist => "minimalist, clean lines, simple shapes, modern",
            LogoStyle::Modern => "modern, tech-inspired, futuristic, digital, sleek",
            LogoStyle::Playful => "playful, colorful, fun, friendly, vibrant",
            LogoStyle::Professional => "professional, corporate, elegant, trustworthy, refined",
            LogoStyle::Vintage => "vintage, retro, classic, nostalgic, timeless",
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            LogoStyle::Minimalist => "minimalist",
            LogoStyle::Modern => "modern",
            LogoStyle::Playful => "playful",
            LogoStyle::Professional => "professional",
            LogoStyle::Vintage => "vintage",
        }
    }
}

impl fmt::Display for LogoStyle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for LogoStyle {
    type Err = AppError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "minimalist" => Ok(LogoStyle::Minimalist),
            "modern" => Ok(LogoStyle::Modern),
            "playful" => Ok(LogoStyle::Playful),
            "professional" => Ok(LogoStyle::Professional),
            "vintage" => Ok(LogoStyle::Vintage),
            other => Err(AppError::UnknownStyle(other.to_string())),
        }
    }
}

/// Compose the generation prompt for a logo.
///
/// Fixed template: subject and description, the style's descriptor clause,
/// and a closing clause instructing the model to render a centered
/// vector-style icon with no in-image text.
pub fn build_prompt(name: &str, description: &str, style: LogoStyle) -> String {
    format!(
        "Professional logo design for \"{}\", {}. \nStyle: {}. \nClean background, vector-style icon, high quality, centered composition, \nmodern and memorable. Logo symbol only, no text in the image.",
        name,
        description,
        style.descriptors()
    )
}
