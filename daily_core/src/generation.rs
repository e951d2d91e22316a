//! Text generation: model parameters, the generator seam, and the service that
//! turns a request into finished daily content.
//!
//! The third-party model API lives behind [`TextGenerator`], so the flow can be
//! exercised end to end with a scripted generator.

use daily_catalog::ContentKind;
use serde::{Deserialize, Serialize};
use std::time::Instant;
use thiserror::Error;

use crate::config::DaybookConfig;
use crate::error::ServiceError;
use crate::prompts::{episode_prompts, fortune_prompts, poetry_prompts, PromptPair};
use crate::requests::{FortuneRequest, StoryRequest};
use crate::response::{parse_fortune, parse_story, FortuneReading, StoryContent};
use crate::selector::{normalize_daily_date, DailySelector, EpisodeElements, PoetryElements};

/// Errors reported by a text generator.
#[derive(Debug, Error)]
pub enum GeneratorError {
    #[error("generator not configured: {0}")]
    NotConfigured(String),

    #[error("API error: {0}")]
    Api(String),

    #[error("rate limited")]
    RateLimited,

    #[error("network error: {0}")]
    Network(String),

    #[error("generator returned an empty reply")]
    EmptyReply,
}

/// Sampling parameters for one completion.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GenerationParams {
    pub model: String,
    /// Creativity vs. consistency (0.0 - 2.0).
    pub temperature: f32,
    pub top_p: f32,
    /// Room for the requested length plus the closing JSON.
    pub max_tokens: u32,
    pub frequency_penalty: f32,
    pub presence_penalty: f32,
    /// Ask the model for a bare JSON object.
    pub json_response: bool,
}

impl GenerationParams {
    /// Defaults for a content kind.
    pub fn for_kind(kind: ContentKind) -> Self {
        let (max_tokens, json_response) = match kind {
            ContentKind::Episode => (800, false),
            ContentKind::Poetry => (650, true),
            ContentKind::Fortune => (500, true),
        };

        Self {
            model: "gpt-4o-mini".to_string(),
            temperature: 0.7,
            top_p: 1.0,
            max_tokens,
            frequency_penalty: 0.0,
            presence_penalty: 0.0,
            json_response,
        }
    }
}

/// Parameters for every content kind.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct GenerationSettings {
    pub episode: GenerationParams,
    pub poetry: GenerationParams,
    pub fortune: GenerationParams,
}

impl Default for GenerationSettings {
    fn default() -> Self {
        Self {
            episode: GenerationParams::for_kind(ContentKind::Episode),
            poetry: GenerationParams::for_kind(ContentKind::Poetry),
            fortune: GenerationParams::for_kind(ContentKind::Fortune),
        }
    }
}

impl GenerationSettings {
    pub fn params(&self, kind: ContentKind) -> &GenerationParams {
        match kind {
            ContentKind::Episode => &self.episode,
            ContentKind::Poetry => &self.poetry,
            ContentKind::Fortune => &self.fortune,
        }
    }
}

/// Everything a generator needs for one call.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CompletionRequest {
    pub kind: ContentKind,
    pub system: String,
    pub user: String,
    pub params: GenerationParams,
}

/// A text-generation backend. Returns the raw reply text.
pub trait TextGenerator: Send + Sync {
    fn complete(&self, request: &CompletionRequest) -> Result<String, GeneratorError>;
}

impl<T: TextGenerator + ?Sized> TextGenerator for &T {
    fn complete(&self, request: &CompletionRequest) -> Result<String, GeneratorError> {
        (**self).complete(request)
    }
}

impl<T: TextGenerator + ?Sized> TextGenerator for Box<T> {
    fn complete(&self, request: &CompletionRequest) -> Result<String, GeneratorError> {
        (**self).complete(request)
    }
}

/// A finished daily episode.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct EpisodeOutcome {
    pub served_date: String,
    pub elements: EpisodeElements,
    pub story: StoryContent,
}

/// A finished daily poem.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PoetryOutcome {
    pub served_date: String,
    pub elements: PoetryElements,
    pub story: StoryContent,
}

/// Validates requests, resolves the day's elements, and drives the generator.
pub struct DailyStoryService<G> {
    generator: G,
    episode: DailySelector,
    poetry: DailySelector,
    settings: GenerationSettings,
}

impl<G: TextGenerator> DailyStoryService<G> {
    /// Create a service over the built-in catalogs and default parameters.
    pub fn new(generator: G) -> Result<Self, ServiceError> {
        Ok(Self::with_parts(
            generator,
            DailySelector::episode()?,
            DailySelector::poetry()?,
            GenerationSettings::default(),
        ))
    }

    /// Create a service from loaded configuration.
    pub fn from_config(generator: G, config: &DaybookConfig) -> Result<Self, ServiceError> {
        Ok(Self::with_parts(
            generator,
            config.episode_selector()?,
            config.poetry_selector()?,
            config.generation.clone(),
        ))
    }

    pub fn with_parts(
        generator: G,
        episode: DailySelector,
        poetry: DailySelector,
        settings: GenerationSettings,
    ) -> Self {
        Self {
            generator,
            episode,
            poetry,
            settings,
        }
    }

    pub fn generator(&self) -> &G {
        &self.generator
    }

    pub fn episode_selector(&self) -> &DailySelector {
        &self.episode
    }

    pub fn poetry_selector(&self) -> &DailySelector {
        &self.poetry
    }

    /// Generate today's episode for the request.
    pub fn generate_episode(&self, request: &StoryRequest) -> Result<EpisodeOutcome, ServiceError> {
        let request = request.validate_request()?;
        let served_date = normalize_daily_date(&request.current_date);
        let elements = self.episode.episode_elements(&served_date)?;

        let reply = self.complete(ContentKind::Episode, episode_prompts(&request, &elements))?;
        let story = self.parse(ContentKind::Episode, || parse_story(ContentKind::Episode, &reply))?;

        Ok(EpisodeOutcome {
            served_date,
            elements,
            story,
        })
    }

    /// Generate today's poem for the request.
    pub fn generate_poetry(&self, request: &StoryRequest) -> Result<PoetryOutcome, ServiceError> {
        let request = request.validate_request()?;
        let served_date = normalize_daily_date(&request.current_date);
        let elements = self.poetry.poetry_elements(&served_date)?;

        let reply = self.complete(ContentKind::Poetry, poetry_prompts(&request, &elements))?;
        let story = self.parse(ContentKind::Poetry, || parse_story(ContentKind::Poetry, &reply))?;

        Ok(PoetryOutcome {
            served_date,
            elements,
            story,
        })
    }

    /// Generate today's fortune for the request.
    pub fn generate_fortune(&self, request: &FortuneRequest) -> Result<FortuneReading, ServiceError> {
        let request = request.validate_request()?;

        let reply = self.complete(ContentKind::Fortune, fortune_prompts(&request))?;
        self.parse(ContentKind::Fortune, || parse_fortune(&reply))
    }

    fn complete(&self, kind: ContentKind, prompts: PromptPair) -> Result<String, ServiceError> {
        let request = CompletionRequest {
            kind,
            system: prompts.system,
            user: prompts.user,
            params: self.settings.params(kind).clone(),
        };

        tracing::debug!(
            kind = ?kind,
            model = %request.params.model,
            prompt_chars = request.user.chars().count(),
            "Requesting completion"
        );

        let started = Instant::now();
        let result = self.generator.complete(&request);
        let elapsed_ms = started.elapsed().as_millis() as u64;

        match result {
            Ok(reply) if reply.trim().is_empty() => {
                tracing::warn!(kind = ?kind, elapsed_ms, "Completion returned no text");
                Err(GeneratorError::EmptyReply.into())
            }
            Ok(reply) => {
                tracing::info!(
                    kind = ?kind,
                    elapsed_ms,
                    reply_chars = reply.chars().count(),
                    "Completion finished"
                );
                Ok(reply)
            }
            Err(e) => {
                tracing::warn!(kind = ?kind, elapsed_ms, error = %e, "Completion failed");
                Err(e.into())
            }
        }
    }

    fn parse<T, E>(&self, kind: ContentKind, parse: impl FnOnce() -> Result<T, E>) -> Result<T, ServiceError>
    where
        E: Into<ServiceError> + std::fmt::Display,
    {
        parse().map_err(|e| {
            tracing::warn!(kind = ?kind, error = %e, "Model reply rejected");
            e.into()
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::response::ResponseError;
    use std::sync::Mutex;

    /// Replies with canned text and records every request.
    struct ScriptedGenerator {
        reply: Result<String, String>,
        seen: Mutex<Vec<CompletionRequest>>,
    }

    impl ScriptedGenerator {
        fn replying(reply: &str) -> Self {
            Self {
                reply: Ok(reply.to_string()),
                seen: Mutex::new(Vec::new()),
            }
        }

        fn failing(message: &str) -> Self {
            Self {
                reply: Err(message.to_string()),
                seen: Mutex::new(Vec::new()),
            }
        }

        fn requests(&self) -> Vec<CompletionRequest> {
            self.seen.lock().unwrap().clone()
        }
    }

    impl TextGenerator for ScriptedGenerator {
        fn complete(&self, request: &CompletionRequest) -> Result<String, GeneratorError> {
            self.seen.lock().unwrap().push(request.clone());
            self.reply.clone().map_err(GeneratorError::Api)
        }
    }

    fn story_request(date: &str) -> StoryRequest {
        StoryRequest {
            gender: Some("female".to_string()),
            love_status: Some("single".to_string()),
            current_date: Some(date.to_string()),
            language: Some("en".to_string()),
            age_group: Some("20s".to_string()),
            world: Some("a rainy city".to_string()),
        }
    }

    const STORY_REPLY: &str = r#"{"title": "Umbrella", "content": "A quiet walk.", "summary": "s", "tomorrowSummary": "t"}"#;

    #[test]
    fn test_params_per_kind() {
        let settings = GenerationSettings::default();
        assert_eq!(settings.params(ContentKind::Episode).max_tokens, 800);
        assert_eq!(settings.params(ContentKind::Poetry).max_tokens, 650);
        assert_eq!(settings.params(ContentKind::Fortune).max_tokens, 500);
        assert!(!settings.episode.json_response);
        assert!(settings.fortune.json_response);
        assert_eq!(settings.poetry.model, "gpt-4o-mini");
    }

    #[test]
    fn test_generate_episode() {
        let generator = ScriptedGenerator::replying(STORY_REPLY);
        let service = DailyStoryService::new(&generator).unwrap();

        let outcome = service.generate_episode(&story_request("2024-03-01")).unwrap();

        assert_eq!(outcome.served_date, "2024-03-01");
        assert_eq!(outcome.story.title, "Umbrella");
        assert_eq!(
            outcome.elements,
            service.episode_selector().episode_elements("2024-03-01").unwrap()
        );

        let requests = generator.requests();
        assert_eq!(requests.len(), 1);
        assert_eq!(requests[0].kind, ContentKind::Episode);
        assert!(requests[0].user.contains(&outcome.elements.plot_device));
        assert!(requests[0].system.contains("Write in English."));
    }

    #[test]
    fn test_generate_episode_normalizes_timestamp_dates() {
        let generator = ScriptedGenerator::replying(STORY_REPLY);
        let service = DailyStoryService::new(&generator).unwrap();

        let from_timestamp = service
            .generate_episode(&story_request("2024-03-01T08:00:00Z"))
            .unwrap();
        let from_date = service.generate_episode(&story_request("2024-03-01")).unwrap();

        assert_eq!(from_timestamp.served_date, "2024-03-01");
        assert_eq!(from_timestamp.elements, from_date.elements);
    }

    #[test]
    fn test_generate_poetry_uses_daily_genre() {
        let generator = ScriptedGenerator::replying(
            r#"{"title": "Ink", "poetry": "line one\nline two"}"#,
        );
        let service = DailyStoryService::new(&generator).unwrap();

        let outcome = service.generate_poetry(&story_request("2024-03-01")).unwrap();

        assert_eq!(outcome.elements.genre, "daily");
        assert_eq!(outcome.story.content, "line one\nline two");
        assert_eq!(generator.requests()[0].params.max_tokens, 650);
    }

    #[test]
    fn test_invalid_request_never_reaches_generator() {
        let generator = ScriptedGenerator::replying(STORY_REPLY);
        let service = DailyStoryService::new(&generator).unwrap();

        let mut request = story_request("2024-03-01");
        request.language = None;

        let err = service.generate_episode(&request).unwrap_err();
        assert!(err.is_client_error());
        assert!(generator.requests().is_empty());
    }

    #[test]
    fn test_generator_failure_is_reported() {
        let generator = ScriptedGenerator::failing("quota exceeded");
        let service = DailyStoryService::new(&generator).unwrap();

        let err = service.generate_episode(&story_request("2024-03-01")).unwrap_err();
        assert!(matches!(err, ServiceError::Generator(GeneratorError::Api(_))));
        assert!(!err.is_client_error());
    }

    #[test]
    fn test_empty_reply_is_reported() {
        let generator = ScriptedGenerator::replying("   ");
        let service = DailyStoryService::new(&generator).unwrap();

        let err = service.generate_poetry(&story_request("2024-03-01")).unwrap_err();
        assert!(matches!(err, ServiceError::Generator(GeneratorError::EmptyReply)));
    }

    #[test]
    fn test_unparseable_reply_is_reported() {
        let generator = ScriptedGenerator::replying("Sorry, no story today.");
        let service = DailyStoryService::new(&generator).unwrap();

        let err = service.generate_episode(&story_request("2024-03-01")).unwrap_err();
        assert!(matches!(err, ServiceError::Response(ResponseError::NoJson)));
    }

    #[test]
    fn test_generate_fortune() {
        let generator = ScriptedGenerator::replying(
            r#"{"love": "l", "wealth": "w", "health": "h", "study": "s", "overall": "o"}"#,
        );
        let service = DailyStoryService::new(&generator).unwrap();

        let request: FortuneRequest = serde_json::from_value(serde_json::json!({
            "birthYear": 2000, "birthMonth": 1, "birthDay": 1, "birthHour": 12, "birthMinute": 0,
            "gender": "nonBinary", "location": "Seoul", "loveStatus": "single",
            "currentDate": "2024-03-01", "genre": "drama", "language": "ja"
        }))
        .unwrap();

        let reading = service.generate_fortune(&request).unwrap();
        assert_eq!(reading.love, "l");

        let requests = generator.requests();
        assert!(requests[0].params.json_response);
        assert!(requests[0].user.contains("Birthplace: Seoul"));
    }
}
