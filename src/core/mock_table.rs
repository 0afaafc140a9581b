//! Mock twister catalogue: theme × length × difficulty

use crate::types::{Difficulty, LengthPreset};

/// Catalogue theme keys, in lookup order
pub const MOCK_THEMES: [&str; 6] = ["sea", "cooking", "space", "music", "sports", "animals"];

/// Find the first catalogue key contained in a normalized theme
pub fn resolve_theme_key(theme: &str) -> Option<&'static str> {
    MOCK_THEMES.iter().copied().find(|key| theme.contains(key))
}

/// Table entry for a known theme key
pub fn lookup(key: &str, length: LengthPreset, difficulty: Difficulty) -> Option<&'static str> {
    use Difficulty::*;
    use LengthPreset as L;

    let entry = match (key, length, difficulty) {
        ("sea", L::Short, Easy) => "Sly sea slugs slide softly.",
        ("sea", L::Short, Medium) => "Sleek sea seals slide swiftly.",
        ("sea", L::Short, Hard) => "Swift sea swans swish, slosh.",
        ("sea", L::Short, Expert) => "Seething sea swans swiftly swish, slosh.",
        ("sea", L::Medium, Easy) => "Slick sea slugs slide swiftly by salty shores.",
        ("sea", L::Medium, Medium) => "Sleek sea seals slide past salty shoals steadily.",
        ("sea", L::Medium, Hard) => "Stormy sea swans swirl, splashing slick shells and shoals.",
        ("sea", L::Medium, Expert) => "Stormy sea swans swirl, splashing slick shells, shoals, skiffs.",
        ("sea", L::Long, Easy) => "Slick sea slugs slide swiftly by salty shores, seeking shiny shells today.",
        ("sea", L::Long, Medium) => "Sleek sea seals slide past salty shoals, seeking smooth stones nearby today.",
        ("sea", L::Long, Hard) => "Stormy sea swans swirl, splashing slick shells and shoals while sailors steer.",
        ("sea", L::Long, Expert) => "Stormy sea swans swirl, splashing slick shells, shoals, skiffs while sailors steer.",

        ("cooking", L::Short, Easy) => "Silly chefs chop chili.",
        ("cooking", L::Short, Medium) => "Clever chefs chop chili quickly.",
        ("cooking", L::Short, Hard) => "Crisp crusts crack, clatter, crumble.",
        ("cooking", L::Short, Expert) => "Crisp crusts crackle, clatter, crumble.",
        ("cooking", L::Medium, Easy) => "Clever cooks cut carrots, coat pans, and stir steadily.",
        ("cooking", L::Medium, Medium) => "Clever cooks cut carrots, coat pans, stir steadily.",
        ("cooking", L::Medium, Hard) => "Crisp crusts crackle as crafty chefs chop charred chiles.",
        ("cooking", L::Medium, Expert) => "Crisp crusts crackle as crafty chefs chop charred chiles quickly.",
        ("cooking", L::Long, Easy) => "Clever cooks cut carrots, coat pans, and stir stews for supper slowly.",
        ("cooking", L::Long, Medium) => "Clever cooks cut carrots, coat pans, stir stews for supper slowly today.",
        ("cooking", L::Long, Hard) => "Crisp crusts crackle as crafty chefs chop charred chiles with clattering knives.",
        ("cooking", L::Long, Expert) => "Crisp crusts crackle as crafty chefs chop charred chiles with clattering, clinking knives.",

        ("space", L::Short, Easy) => "Starry skies spin slowly.",
        ("space", L::Short, Medium) => "Starry ships spin silently.",
        ("space", L::Short, Hard) => "Spaced ships shift, shimmer, shudder.",
        ("space", L::Short, Expert) => "Spaced ships shift, shimmer, shudder sharply.",
        ("space", L::Medium, Easy) => "Silent star sailors steer silver ships through soft starlight.",
        ("space", L::Medium, Medium) => "Silent star sailors steer silver ships through steady starlight.",
        ("space", L::Medium, Hard) => "Spaced pilots spin past spirals, skimming swift stellar streams.",
        ("space", L::Medium, Expert) => "Spaced pilots spin past spirals, skimming swift stellar streams swiftly.",
        ("space", L::Long, Easy) => "Silent star sailors steer silver ships through soft starlight and steady streams.",
        ("space", L::Long, Medium) => "Silent star sailors steer silver ships through steady starlight and streaming skies.",
        ("space", L::Long, Hard) => "Spaced pilots spin past spirals, skimming swift stellar streams and shadowy stations.",
        ("space", L::Long, Expert) => "Spaced pilots spin past spirals, skimming swift stellar streams and shadowy stations swiftly.",

        ("music", L::Short, Easy) => "Merry melodies move minds.",
        ("music", L::Short, Medium) => "Mellow melodies move minds.",
        ("music", L::Short, Hard) => "Sharp strings strike, shimmer, sing.",
        ("music", L::Short, Expert) => "Sharp strings strike, shimmer, sing sharply.",
        ("music", L::Medium, Easy) => "Mellow musicians make merry melodies, moving many minds.",
        ("music", L::Medium, Medium) => "Mellow musicians make mellow melodies, moving many minds.",
        ("music", L::Medium, Hard) => "Sharp strings strike, shimmering scales skip swiftly through silent halls.",
        ("music", L::Medium, Expert) => "Sharp strings strike, shimmering scales skip swiftly through silent halls, singing.",
        ("music", L::Long, Easy) => "Mellow musicians make merry melodies, moving many minds with measured beats today.",
        ("music", L::Long, Medium) => "Mellow musicians make mellow melodies, moving many minds with measured beats today.",
        ("music", L::Long, Hard) => "Sharp strings strike, shimmering scales skip swiftly through silent halls and stages.",
        ("music", L::Long, Expert) => "Sharp strings strike, shimmering scales skip swiftly through silent halls and stages, singing.",

        ("sports", L::Short, Easy) => "Swift strikers score smoothly.",
        ("sports", L::Short, Medium) => "Swift strikers sprint smoothly.",
        ("sports", L::Short, Hard) => "Stout sprinters stretch, sprint, surge.",
        ("sports", L::Short, Expert) => "Stout sprinters stretch, sprint, surge swiftly.",
        ("sports", L::Medium, Easy) => "Swift strikers sprint, score, and celebrate smooth victories.",
        ("sports", L::Medium, Medium) => "Swift strikers sprint, score, and celebrate steady victories.",
        ("sports", L::Medium, Hard) => "Stout sprinters stretch, sprint, and surge past stubborn starters.",
        ("sports", L::Medium, Expert) => "Stout sprinters stretch, sprint, and surge past stubborn starters swiftly.",
        ("sports", L::Long, Easy) => "Swift strikers sprint, score, and celebrate smooth victories with steady stamina today.",
        ("sports", L::Long, Medium) => "Swift strikers sprint, score, and celebrate steady victories with steady stamina today.",
        ("sports", L::Long, Hard) => "Stout sprinters stretch, sprint, and surge past stubborn starters and stiff stadium steps.",
        ("sports", L::Long, Expert) => "Stout sprinters stretch, sprint, and surge past stubborn starters and stiff stadium steps swiftly.",

        ("animals", L::Short, Easy) => "Fuzzy foxes frisk fast.",
        ("animals", L::Short, Medium) => "Fuzzy foxes frisk freely.",
        ("animals", L::Short, Hard) => "Bristled bears bellow, bound, bash.",
        ("animals", L::Short, Expert) => "Bristled bears bellow, bound, bash boldly.",
        ("animals", L::Medium, Easy) => "Fuzzy foxes flutter through fields, following friendly fawns.",
        ("animals", L::Medium, Medium) => "Fuzzy foxes flutter through fields, following friendly forest friends.",
        ("animals", L::Medium, Hard) => "Bristled bears bellow, bounding boldly beyond broken branches.",
        ("animals", L::Medium, Expert) => "Bristled bears bellow, bounding boldly beyond broken branches and brambles.",
        ("animals", L::Long, Easy) => "Fuzzy foxes flutter through fields, following friendly fawns and feisty ferrets nearby.",
        ("animals", L::Long, Medium) => "Fuzzy foxes flutter through fields, following friendly forest friends and feisty ferrets nearby.",
        ("animals", L::Long, Hard) => "Bristled bears bellow, bounding boldly beyond broken branches and bristly bushes today.",
        ("animals", L::Long, Expert) => "Bristled bears bellow, bounding boldly beyond broken branches and bristly bushes by brookbanks.",

        _ => return None,
    };

    Some(entry)
}
