//! Prompt Renderer: prompt spec + request inputs → model instructions

use crate::types::{PromptInputs, PromptSpec};

/// Render the full prompt. Deterministic; disabled constraint lines are omitted.
pub fn render_prompt(spec: &PromptSpec, inputs: &PromptInputs) -> String {
    let constraints = &spec.constraints;
    let words = inputs.length.word_range();

    let lines = [
        spec.system_instruction.clone(),
        String::new(),
        spec.task_instruction.clone(),
        format!("Theme: {}.", inputs.theme),
        format!("Difficulty: {}.", inputs.difficulty),
        format!("Length: {}.", inputs.length),
        inputs.difficulty.instruction().to_string(),
        String::new(),
        "Constraints:".to_string(),
        format!("- {} sentences", constraints.sentence_range),
        format!("- {} words", words),
        flag_line(constraints.require_alliteration, "- Strong alliteration"),
        flag_line(constraints.require_safe_language, "- Safe language only"),
        flag_line(constraints.output_only, "- Output only the twister text"),
        "Do not add commentary, quotes, or lists.".to_string(),
    ];

    // Blank separators are dropped along with disabled bullets
    lines
        .into_iter()
        .filter(|line| !line.is_empty())
        .collect::<Vec<_>>()
        .join("\n")
}

fn flag_line(enabled: bool, line: &str) -> String {
    if enabled {
        line.to_string()
    } else {
        String::new()
    }
}

// =============================================================================
// TESTS
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::{Difficulty, LengthPreset};
    use pretty_assertions::assert_eq;

    fn inputs(difficulty: Difficulty, length: LengthPreset) -> PromptInputs {
        PromptInputs {
            theme: "deep sea".to_string(),
            difficulty,
            length,
        }
    }

    #[test]
    fn test_render_full_prompt() {
        let prompt = render_prompt(
            &PromptSpec::default_twister(),
            &inputs(Difficulty::Hard, LengthPreset::Short),
        );
        let expected = [
            "You generate tongue twisters. Follow the constraints exactly. Output only the twister text.",
            "Generate a tongue twister based on the provided theme.",
            "Theme: deep sea.",
            "Difficulty: hard.",
            "Length: short.",
            "Use strong alliteration and tricky consonant clusters.",
            "Constraints:",
            "- 1-2 sentences",
            "- 4-8 words",
            "- Strong alliteration",
            "- Safe language only",
            "- Output only the twister text",
            "Do not add commentary, quotes, or lists.",
        ]
        .join("\n");
        assert_eq!(prompt, expected);
    }

    #[test]
    fn test_word_range_follows_length_preset() {
        let prompt = render_prompt(
            &PromptSpec::default_twister(),
            &inputs(Difficulty::Easy, LengthPreset::Long),
        );
        assert!(prompt.contains("- 12-16 words"));
        assert!(!prompt.contains("- 8-12 words"));
    }

    #[test]
    fn test_disabled_flags_are_omitted() {
        let mut spec = PromptSpec::default_twister();
        spec.constraints.require_alliteration = false;
        spec.constraints.require_safe_language = false;
        spec.constraints.output_only = false;

        let prompt = render_prompt(&spec, &inputs(Difficulty::Medium, LengthPreset::Medium));
        assert!(!prompt.contains("alliteration\n"));
        assert!(!prompt.contains("Safe language"));
        assert!(!prompt.contains("Output only the twister text\n"));
        assert!(!prompt.contains("\n\n"), "no empty lines or bullets");
        assert!(prompt.ends_with("- 8-12 words\nDo not add commentary, quotes, or lists."));
    }

    #[test]
    fn test_render_is_reproducible() {
        let spec = PromptSpec::default_twister();
        let i = inputs(Difficulty::Expert, LengthPreset::Medium);
        assert_eq!(render_prompt(&spec, &i), render_prompt(&spec, &i));
    }
}
