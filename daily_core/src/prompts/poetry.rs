//! Poetry prompts.

use daily_catalog::{ContentKind, Language};

use super::{bullet_lines, PromptPair};
use crate::requests::ValidStoryRequest;
use crate::selector::PoetryElements;

/// Build the system prompt for a daily poem. Poems run shorter than episodes.
pub fn poetry_system_prompt(language: Language) -> String {
    let label = language.label();
    let target = ContentKind::Poetry
        .target_length(language)
        .unwrap_or_default();

    format!(
        r#"You are a professional poet who creates short daily poems,
designed to feel like a delicate gift of words each day.
Guidelines:
1. Write in {label}.
2. The poem should be lyrical, imaginative, and emotionally resonant.
3. Avoid predictions or fortune-telling; focus on beauty and literary depth.
4. Aim for {target}, enough to feel complete but concise.
5. Return ONLY valid JSON, without explanations, notes, or extra text.
6. JSON format:
{{
  "title": "Poem title",
  "content": "Poem content (line breaks allowed)",
  "contentLength": Number of characters in content string,
  "summary": "One-line summary of this poem",
  "tomorrowSummary": "One-line teaser for tomorrow's poem"
}}"#
    )
}

pub fn poetry_user_prompt(request: &ValidStoryRequest, elements: &PoetryElements) -> String {
    let inputs = bullet_lines(
        &[
            ("Age group of the main character", request.age_group.as_str()),
            ("Gender of the main character", request.gender.code()),
            ("Story world or background", request.world.as_str()),
            ("Tone or emotional mood", request.love_status.as_str()),
            ("Current date", request.current_date.as_str()),
            ("Genre", elements.genre.as_str()),
            ("Object/item", elements.item.as_str()),
        ],
        0,
    );

    format!(
        "Write a short poem using the following inputs:\n\
         {inputs}\
         The poem must be written in {}, weaving these elements naturally into the imagery.\n",
        request.language.label()
    )
}

pub fn poetry_prompts(request: &ValidStoryRequest, elements: &PoetryElements) -> PromptPair {
    PromptPair {
        system: poetry_system_prompt(request.language),
        user: poetry_user_prompt(request, elements),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use daily_catalog::Gender;

    #[test]
    fn test_poetry_system_prompt() {
        let prompt = poetry_system_prompt(Language::Korean);
        assert!(prompt.contains("Write in Korean."));
        assert!(prompt.contains("around 250–300 characters"));

        let prompt = poetry_system_prompt(Language::English);
        assert!(prompt.contains("around 400–450 characters"));
    }

    #[test]
    fn test_poetry_user_prompt() {
        let request = ValidStoryRequest {
            gender: Gender::Female,
            love_status: "in love".to_string(),
            current_date: "2024-10-01".to_string(),
            language: Language::Chinese,
            age_group: "teens".to_string(),
            world: "an old library".to_string(),
        };
        let elements = PoetryElements {
            genre: "daily".to_string(),
            item: "Dreamcatcher".to_string(),
        };

        let prompt = poetry_user_prompt(&request, &elements);

        assert!(prompt.contains("- Genre: daily"));
        assert!(prompt.contains("- Object/item: Dreamcatcher"));
        assert!(prompt.contains("- Tone or emotional mood: in love"));
        assert!(prompt.contains("written in Chinese"));
        assert!(!prompt.contains("Weather"));
    }
}
