//! Incoming request bodies and their validation.
//!
//! Bodies arrive as camelCase JSON. Every field is optional at the wire level so
//! that all missing fields can be reported together; `validate_request` turns a raw body
//! into its typed, validated form.

use daily_catalog::{Gender, Language, UnknownGender};
use serde::{Deserialize, Serialize};
use thiserror::Error;
use validator::Validate;

/// Rendered in prompts for optional inputs the client left out.
pub const UNSPECIFIED: &str = "unspecified";

/// Rust field name and wire name of the birth fields, in check order.
const BIRTH_FIELDS: [(&str, &str); 5] = [
    ("birth_year", "birthYear"),
    ("birth_month", "birthMonth"),
    ("birth_day", "birthDay"),
    ("birth_hour", "birthHour"),
    ("birth_minute", "birthMinute"),
];

/// Reasons a request body is rejected.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum RequestError {
    #[error("missing required fields: {}", .0.join(","))]
    MissingFields(Vec<String>),

    #[error("field '{field}' is out of range")]
    OutOfRange { field: String },

    #[error(transparent)]
    InvalidGender(#[from] UnknownGender),
}

/// Body of an episode or poetry request.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct StoryRequest {
    pub gender: Option<String>,
    pub love_status: Option<String>,
    pub current_date: Option<String>,
    pub language: Option<String>,
    pub age_group: Option<String>,
    pub world: Option<String>,
}

pub type EpisodeRequest = StoryRequest;
pub type PoetryRequest = StoryRequest;

/// A validated episode or poetry request.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ValidStoryRequest {
    pub gender: Gender,
    pub love_status: String,
    pub current_date: String,
    pub language: Language,
    pub age_group: String,
    pub world: String,
}

impl StoryRequest {
    pub fn validate_request(&self) -> Result<ValidStoryRequest, RequestError> {
        let mut required = Required::default();
        let gender = required.text("gender", &self.gender);
        let love_status = required.text("loveStatus", &self.love_status);
        let current_date = required.text("currentDate", &self.current_date);
        let language = required.text("language", &self.language);
        required.finish()?;

        Ok(ValidStoryRequest {
            gender: gender.parse()?,
            love_status: love_status.to_string(),
            current_date: current_date.to_string(),
            language: Language::from_code(language),
            age_group: optional_text(&self.age_group),
            world: optional_text(&self.world),
        })
    }
}

/// Body of a fortune request.
#[derive(Debug, Clone, Default, Serialize, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct FortuneRequest {
    #[validate(range(min = 1900, max = 2100))]
    pub birth_year: Option<i32>,
    #[validate(range(min = 1, max = 12))]
    pub birth_month: Option<i32>,
    #[validate(range(min = 1, max = 31))]
    pub birth_day: Option<i32>,
    #[validate(range(min = 0, max = 23))]
    pub birth_hour: Option<i32>,
    #[validate(range(min = 0, max = 59))]
    pub birth_minute: Option<i32>,
    pub gender: Option<String>,
    pub location: Option<String>,
    pub love_status: Option<String>,
    pub current_date: Option<String>,
    pub genre: Option<String>,
    pub language: Option<String>,
}

/// Date and time of birth as given by the user. Not checked as a calendar date.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct BirthMoment {
    pub year: i32,
    pub month: i32,
    pub day: i32,
    pub hour: i32,
    pub minute: i32,
}

impl std::fmt::Display for BirthMoment {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "{}-{}-{} {}:{}",
            self.year, self.month, self.day, self.hour, self.minute
        )
    }
}

/// A validated fortune request.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ValidFortuneRequest {
    pub birth: BirthMoment,
    pub gender: Gender,
    pub location: String,
    pub love_status: String,
    pub current_date: String,
    pub genre: String,
    pub language: Language,
}

impl FortuneRequest {
    /// Missing fields first, then ranges in birth-field order, then gender.
    pub fn validate_request(&self) -> Result<ValidFortuneRequest, RequestError> {
        let mut required = Required::default();
        let year = required.number("birthYear", self.birth_year);
        let month = required.number("birthMonth", self.birth_month);
        let day = required.number("birthDay", self.birth_day);
        let hour = required.number("birthHour", self.birth_hour);
        let minute = required.number("birthMinute", self.birth_minute);
        let gender = required.text("gender", &self.gender);
        let location = required.text("location", &self.location);
        let love_status = required.text("loveStatus", &self.love_status);
        let current_date = required.text("currentDate", &self.current_date);
        let genre = required.text("genre", &self.genre);
        let language = required.text("language", &self.language);
        required.finish()?;

        if let Err(errors) = self.validate() {
            let failed = errors.field_errors();
            let field = BIRTH_FIELDS
                .iter()
                .find(|(rust_name, _)| failed.contains_key(*rust_name))
                .map(|(_, wire_name)| *wire_name)
                .unwrap_or("birth");
            return Err(RequestError::OutOfRange {
                field: field.to_string(),
            });
        }

        Ok(ValidFortuneRequest {
            birth: BirthMoment {
                year,
                month,
                day,
                hour,
                minute,
            },
            gender: gender.parse()?,
            location: location.to_string(),
            love_status: love_status.to_string(),
            current_date: current_date.to_string(),
            genre: genre.to_string(),
            language: Language::from_code(language),
        })
    }
}

/// Collects every missing field before failing.
#[derive(Default)]
struct Required {
    missing: Vec<String>,
}

impl Required {
    fn text<'a>(&mut self, name: &str, value: &'a Option<String>) -> &'a str {
        match present(value) {
            Some(text) => text,
            None => {
                self.missing.push(name.to_string());
                ""
            }
        }
    }

    fn number(&mut self, name: &str, value: Option<i32>) -> i32 {
        value.unwrap_or_else(|| {
            self.missing.push(name.to_string());
            0
        })
    }

    fn finish(self) -> Result<(), RequestError> {
        if self.missing.is_empty() {
            Ok(())
        } else {
            Err(RequestError::MissingFields(self.missing))
        }
    }
}

/// Absent, null and blank strings all count as missing.
fn present(value: &Option<String>) -> Option<&str> {
    value
        .as_deref()
        .map(str::trim)
        .filter(|text| !text.is_empty())
}

fn optional_text(value: &Option<String>) -> String {
    present(value).unwrap_or(UNSPECIFIED).to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn story_json() -> serde_json::Value {
        serde_json::json!({
            "gender": "female",
            "loveStatus": "single",
            "currentDate": "2024-03-01",
            "language": "ko",
            "ageGroup": "20s",
            "world": "modern Seoul"
        })
    }

    fn fortune() -> FortuneRequest {
        serde_json::from_value(serde_json::json!({
            "birthYear": 1995,
            "birthMonth": 4,
            "birthDay": 12,
            "birthHour": 0,
            "birthMinute": 30,
            "gender": "male",
            "location": "Busan",
            "loveStatus": "married",
            "currentDate": "2024-03-01",
            "genre": "healing",
            "language": "en"
        }))
        .unwrap()
    }

    #[test]
    fn test_valid_story_request() {
        let request: StoryRequest = serde_json::from_value(story_json()).unwrap();
        let valid = request.validate_request().unwrap();

        assert_eq!(valid.gender, Gender::Female);
        assert_eq!(valid.language, Language::Korean);
        assert_eq!(valid.world, "modern Seoul");
    }

    #[test]
    fn test_story_request_reports_all_missing_fields() {
        let request: StoryRequest = serde_json::from_value(serde_json::json!({
            "gender": "female",
            "loveStatus": "   ",
            "currentDate": null
        }))
        .unwrap();

        let err = request.validate_request().unwrap_err();
        assert_eq!(
            err,
            RequestError::MissingFields(vec![
                "loveStatus".to_string(),
                "currentDate".to_string(),
                "language".to_string(),
            ])
        );
        assert_eq!(
            err.to_string(),
            "missing required fields: loveStatus,currentDate,language"
        );
    }

    #[test]
    fn test_story_request_optional_fields() {
        let mut body = story_json();
        body.as_object_mut().unwrap().remove("world");
        let request: StoryRequest = serde_json::from_value(body).unwrap();

        assert_eq!(request.validate_request().unwrap().world, UNSPECIFIED);
    }

    #[test]
    fn test_story_request_invalid_gender() {
        let mut request: StoryRequest = serde_json::from_value(story_json()).unwrap();
        request.gender = Some("robot".to_string());

        assert!(matches!(
            request.validate_request(),
            Err(RequestError::InvalidGender(_))
        ));
    }

    #[test]
    fn test_unknown_language_falls_back_to_english() {
        let mut request: StoryRequest = serde_json::from_value(story_json()).unwrap();
        request.language = Some("fr".to_string());

        assert_eq!(request.validate_request().unwrap().language, Language::English);
    }

    #[test]
    fn test_valid_fortune_request() {
        let valid = fortune().validate_request().unwrap();

        assert_eq!(valid.birth.to_string(), "1995-4-12 0:30");
        assert_eq!(valid.gender, Gender::Male);
        assert_eq!(valid.language, Language::English);
    }

    #[test]
    fn test_fortune_zero_values_are_present() {
        let mut request = fortune();
        request.birth_hour = Some(0);
        request.birth_minute = Some(0);

        assert!(request.validate_request().is_ok());
    }

    #[test]
    fn test_fortune_missing_fields() {
        let mut request = fortune();
        request.birth_year = None;
        request.location = Some(String::new());

        assert_eq!(
            request.validate_request().unwrap_err(),
            RequestError::MissingFields(vec!["birthYear".to_string(), "location".to_string()])
        );
    }

    #[test]
    fn test_fortune_ranges() {
        let cases: [(fn(&mut FortuneRequest), &str); 5] = [
            (|r| r.birth_year = Some(1899), "birthYear"),
            (|r| r.birth_month = Some(13), "birthMonth"),
            (|r| r.birth_day = Some(0), "birthDay"),
            (|r| r.birth_hour = Some(24), "birthHour"),
            (|r| r.birth_minute = Some(60), "birthMinute"),
        ];

        for (mutate, field) in cases {
            let mut request = fortune();
            mutate(&mut request);
            assert_eq!(
                request.validate_request().unwrap_err(),
                RequestError::OutOfRange {
                    field: field.to_string()
                }
            );
        }
    }

    #[test]
    fn test_fortune_first_range_error_wins() {
        let mut request = fortune();
        request.birth_minute = Some(99);
        request.birth_month = Some(0);

        assert_eq!(
            request.validate_request().unwrap_err(),
            RequestError::OutOfRange {
                field: "birthMonth".to_string()
            }
        );
    }

    #[test]
    fn test_fortune_invalid_gender() {
        let mut request = fortune();
        request.gender = Some("unknown".to_string());

        assert!(matches!(
            request.validate_request(),
            Err(RequestError::InvalidGender(_))
        ));
    }
}
