//! Fortune prompts. The reply is split into five short fields.

use daily_catalog::Language;

use super::{bullet_lines, PromptPair};
use crate::requests::ValidFortuneRequest;

pub fn fortune_system_prompt(language: Language) -> String {
    let label = language.label();

    format!(
        r#"You are a professional writer creating daily personalized short stories inspired by astrology.
Guidelines:
1. Do NOT mention birth date, birthplace, zodiac signs, or astrology terms.
2. Create a warm, hopeful short story that reflects the energies and possible emotions of today (based on the current date).
3. Focus on beauty and meaning in everyday life.
4. Include subtle hints of destiny or guidance without being explicit.
5. Each field must be written in {label}, exactly 2 lines per item.
6. The total is about 450 characters.
7. Return only valid JSON in the following format:
{{
  "love": "Love",
  "wealth": "Wealth",
  "health": "Health",
  "study": "Study & Business",
  "overall": "Overall"
}}"#
    )
}

pub fn fortune_user_prompt(request: &ValidFortuneRequest) -> String {
    let birth = request.birth.to_string();
    let inputs = bullet_lines(
        &[
            ("Date of birth", birth.as_str()),
            ("Gender", request.gender.code()),
            ("Birthplace", request.location.as_str()),
            ("Love status", request.love_status.as_str()),
            ("Current date", request.current_date.as_str()),
            ("Genre", request.genre.as_str()),
        ],
        0,
    );

    format!(
        "User information:\n{inputs}- Write in {} format.",
        request.language.label()
    )
}

pub fn fortune_prompts(request: &ValidFortuneRequest) -> PromptPair {
    PromptPair {
        system: fortune_system_prompt(request.language),
        user: fortune_user_prompt(request),
    }
}
