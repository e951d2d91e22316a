//! Episode prompts.

use daily_catalog::{ContentKind, Language};

use super::{bullet_lines, PromptPair};
use crate::requests::ValidStoryRequest;
use crate::selector::EpisodeElements;

/// Build the system prompt for a daily episode.
pub fn episode_system_prompt(language: Language) -> String {
    let label = language.label();
    let target = ContentKind::Episode
        .target_length(language)
        .unwrap_or_default();

    format!(
        r#"You are a professional fiction writer who creates short daily episodes,
designed to feel like a small piece of literature delivered each day.
Guidelines:
1. Write in {label}.
2. Keep the tone immersive, warm, and meaningful, as if offering readers a small gift for the day.
3. Focus on beauty, imagination, and emotional depth rather than predictions or fortune.
4. Write a short episode that feels like a brief but complete story.
   For {label}, aim for approximately {target} in length.
5. Return only valid JSON in the following format:
{{
  "title": "Episode title",
  "content": "Episode content",
  "contentLength": Number of characters in content string,
  "summary": "One-line summary of this episode",
  "tomorrowSummary": "Write it in the same style as a book's one-line teaser, mysterious but warm"
}}"#
    )
}

/// Build the user prompt from the request and the elements of the day.
pub fn episode_user_prompt(request: &ValidStoryRequest, elements: &EpisodeElements) -> String {
    let inputs = bullet_lines(
        &[
            ("Age group of the main character", request.age_group.as_str()),
            ("Gender of the main character", request.gender.code()),
            ("Story world or background", request.world.as_str()),
            ("Tone or emotional mood", request.love_status.as_str()),
            ("Current date", request.current_date.as_str()),
            ("Genre", elements.genre.as_str()),
            ("Weather", elements.weather.as_str()),
            ("Object/item", elements.item.as_str()),
            ("Plot device/event", elements.plot_device.as_str()),
        ],
        3,
    );

    format!(
        "Write a short episode using the following inputs:\n\
         1. Incorporate the following inputs naturally into the story:\n\
         {inputs}\
         2. The episode must be written in {}, weaving these elements naturally into the narrative.\n",
        request.language.label()
    )
}

/// System and user prompt for an episode.
pub fn episode_prompts(request: &ValidStoryRequest, elements: &EpisodeElements) -> PromptPair {
    PromptPair {
        system: episode_system_prompt(request.language),
        user: episode_user_prompt(request, elements),
    }
}
