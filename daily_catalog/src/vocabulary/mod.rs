//! Shared vocabulary: languages, genders and the kinds of daily content.

use serde::{Deserialize, Serialize};
use std::str::FromStr;
use thiserror::Error;

/// Languages content can be written in.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
pub enum Language {
    #[serde(rename = "ko")]
    Korean,
    #[default]
    #[serde(rename = "en")]
    English,
    #[serde(rename = "ja")]
    Japanese,
    #[serde(rename = "zh")]
    Chinese,
}

impl Language {
    /// Resolve a language code. Unknown codes are written in English.
    pub fn from_code(code: &str) -> Self {
        match code.trim() {
            "ko" => Language::Korean,
            "ja" => Language::Japanese,
            "zh" => Language::Chinese,
            _ => Language::English,
        }
    }

    pub fn code(&self) -> &'static str {
        match self {
            Language::Korean => "ko",
            Language::English => "en",
            Language::Japanese => "ja",
            Language::Chinese => "zh",
        }
    }

    /// English name of the language, as used inside prompts.
    pub fn label(&self) -> &'static str {
        match self {
            Language::Korean => "Korean",
            Language::English => "English",
            Language::Japanese => "Japanese",
            Language::Chinese => "Chinese",
        }
    }

    /// CJK scripts pack more meaning per character, so targets are shorter.
    pub fn is_cjk(&self) -> bool {
        matches!(
            self,
            Language::Korean | Language::Japanese | Language::Chinese
        )
    }
}

impl std::fmt::Display for Language {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.label())
    }
}

/// Gender of the main character.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum Gender {
    Female,
    Male,
    NonBinary,
}

impl Gender {
    pub fn code(&self) -> &'static str {
        match self {
            Gender::Female => "female",
            Gender::Male => "male",
            Gender::NonBinary => "nonBinary",
        }
    }
}

/// Returned when a gender code is not one of `female`, `male`, `nonBinary`.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("unknown gender '{0}'")]
pub struct UnknownGender(pub String);

impl FromStr for Gender {
    type Err = UnknownGender;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim() {
            "female" => Ok(Gender::Female),
            "male" => Ok(Gender::Male),
            "nonBinary" => Ok(Gender::NonBinary),
            other => Err(UnknownGender(other.to_string())),
        }
    }
}

impl std::fmt::Display for Gender {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.code())
    }
}

/// The kinds of content generated each day.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum ContentKind {
    Episode,
    Poetry,
    Fortune,
}

impl ContentKind {
    /// Approximate length the model should aim for, in characters.
    ///
    /// Fortunes are field-structured and have no single target.
    pub fn target_length(&self, language: Language) -> Option<&'static str> {
        match (self, language.is_cjk()) {
            (ContentKind::Episode, true) => Some("around 400–450 characters"),
            (ContentKind::Episode, false) => Some("around 600–700 characters"),
            (ContentKind::Poetry, true) => Some("around 250–300 characters"),
            (ContentKind::Poetry, false) => Some("around 400–450 characters"),
            (ContentKind::Fortune, _) => None,
        }
    }
}
