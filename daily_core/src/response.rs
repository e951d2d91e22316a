//! Parsing of model replies into typed content.
//!
//! Models sometimes wrap the JSON they were asked for in prose or code fences,
//! so the object is cut out from the first `{` to the last `}` before parsing.

use daily_catalog::ContentKind;
use serde::{Deserialize, Serialize};
use serde_json::Value;
use thiserror::Error;

/// Reasons a model reply cannot be turned into content.
#[derive(Debug, Error)]
pub enum ResponseError {
    #[error("reply contains no JSON object")]
    NoJson,

    #[error("reply JSON is malformed: {0}")]
    Malformed(#[from] serde_json::Error),

    #[error("reply is missing required field '{0}'")]
    MissingField(&'static str),
}

/// A generated episode or poem.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct StoryContent {
    pub title: String,
    pub content: String,
    pub content_length: String,
    pub summary: String,
    pub tomorrow_summary: String,
}

/// A generated fortune, one short text per life area.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FortuneReading {
    pub love: String,
    pub wealth: String,
    pub health: String,
    pub study: String,
    pub overall: String,
}

/// Cut the outermost `{ ... }` span out of `text`.
pub fn extract_json(text: &str) -> Option<&str> {
    let start = text.find('{')?;
    let end = text.rfind('}')?;
    (start < end).then(|| &text[start..=end])
}

fn parse_object(text: &str) -> Result<Value, ResponseError> {
    let json = extract_json(text).ok_or(ResponseError::NoJson)?;
    Ok(serde_json::from_str(json)?)
}

/// Text of the first non-empty field among `keys`. Numbers are rendered as text.
fn field_text(object: &Value, keys: &[&str]) -> Option<String> {
    keys.iter().find_map(|key| match object.get(key)? {
        Value::String(s) if !s.trim().is_empty() => Some(s.clone()),
        Value::Number(n) => Some(n.to_string()),
        _ => None,
    })
}

fn required(object: &Value, name: &'static str, keys: &[&str]) -> Result<String, ResponseError> {
    field_text(object, keys).ok_or(ResponseError::MissingField(name))
}

/// Defaults for the optional story fields.
fn story_defaults(kind: ContentKind) -> (&'static str, &'static str) {
    match kind {
        ContentKind::Poetry => ("A short poem for today", "A glimpse of tomorrow's poem"),
        _ => ("A short episode for today", "A glimpse of tomorrow's episode"),
    }
}

/// Parse an episode or poem reply.
///
/// Poems may name the body `poem` or `poetry` and the teaser `tomorrowHint`.
pub fn parse_story(kind: ContentKind, text: &str) -> Result<StoryContent, ResponseError> {
    let object = parse_object(text)?;

    let (content_keys, teaser_keys): (&[&str], &[&str]) = match kind {
        ContentKind::Poetry => (
            &["poem", "poetry", "content"][..],
            &["tomorrowHint", "tomorrowSummary"][..],
        ),
        _ => (&["content"][..], &["tomorrowSummary"][..]),
    };

    let title = required(&object, "title", &["title"])?;
    let content = required(&object, "content", content_keys)?;
    let (default_summary, default_teaser) = story_defaults(kind);

    Ok(StoryContent {
        content_length: field_text(&object, &["contentLength"])
            .unwrap_or_else(|| content.chars().count().to_string()),
        summary: field_text(&object, &["summary"]).unwrap_or_else(|| default_summary.to_string()),
        tomorrow_summary: field_text(&object, teaser_keys)
            .unwrap_or_else(|| default_teaser.to_string()),
        title,
        content,
    })
}

/// Parse a fortune reply. All five fields are required.
pub fn parse_fortune(text: &str) -> Result<FortuneReading, ResponseError> {
    let object = parse_object(text)?;

    Ok(FortuneReading {
        love: required(&object, "love", &["love"])?,
        wealth: required(&object, "wealth", &["wealth"])?,
        health: required(&object, "health", &["health"])?,
        study: required(&object, "study", &["study"])?,
        overall: required(&object, "overall", &["overall"])?,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_extract_json() {
        assert_eq!(extract_json("```json\n{\"a\":1}\n```"), Some("{\"a\":1}"));
        assert_eq!(extract_json("no json here"), None);
        assert_eq!(extract_json("} backwards {"), None);
    }

    #[test]
    fn test_parse_episode() {
        let reply = r#"Here you go:
{"title": "Fog Lantern", "content": "She found the key.", "contentLength": 18,
 "summary": "A key in the fog", "tomorrowSummary": "A door waits"}"#;

        let story = parse_story(ContentKind::Episode, reply).unwrap();

        assert_eq!(story.title, "Fog Lantern");
        assert_eq!(story.content_length, "18");
        assert_eq!(story.tomorrow_summary, "A door waits");
    }

    #[test]
    fn test_parse_episode_defaults() {
        let story = parse_story(ContentKind::Episode, r#"{"title": "T", "content": "봄비"}"#).unwrap();

        assert_eq!(story.content_length, "2");
        assert_eq!(story.summary, "A short episode for today");
        assert_eq!(story.tomorrow_summary, "A glimpse of tomorrow's episode");
    }

    #[test]
    fn test_parse_poem_aliases() {
        let reply = r#"{"title": "Rain", "poem": "drops\non glass", "tomorrowHint": "sun"}"#;
        let story = parse_story(ContentKind::Poetry, reply).unwrap();

        assert_eq!(story.content, "drops\non glass");
        assert_eq!(story.tomorrow_summary, "sun");
        assert_eq!(story.summary, "A short poem for today");
    }

    #[test]
    fn test_episode_does_not_accept_poem_alias() {
        let reply = r#"{"title": "Rain", "poem": "drops"}"#;
        assert!(matches!(
            parse_story(ContentKind::Episode, reply),
            Err(ResponseError::MissingField("content"))
        ));
    }

    #[test]
    fn test_parse_story_missing_title() {
        let reply = r#"{"title": "  ", "content": "text"}"#;
        assert!(matches!(
            parse_story(ContentKind::Episode, reply),
            Err(ResponseError::MissingField("title"))
        ));
    }

    #[test]
    fn test_parse_story_errors() {
        assert!(matches!(
            parse_story(ContentKind::Episode, "I could not write today."),
            Err(ResponseError::NoJson)
        ));
        assert!(matches!(
            parse_story(ContentKind::Episode, "{title: oops}"),
            Err(ResponseError::Malformed(_))
        ));
    }

    #[test]
    fn test_parse_fortune() {
        let reply = r#"{"love": "l", "wealth": "w", "health": "h", "study": "s", "overall": "o"}"#;
        let fortune = parse_fortune(reply).unwrap();
        assert_eq!(fortune.overall, "o");

        let reply = r#"{"love": "l", "wealth": "w", "health": "h", "study": "s"}"#;
        assert!(matches!(
            parse_fortune(reply),
            Err(ResponseError::MissingField("overall"))
        ));
    }
}
