use icy_core::Platform;

/// Category keyword to content-focus phrases. Checked in order against the
/// lower-cased category; the first keyword contained in it wins.
const CONTENT_FOCUS: &[(&str, &[&str])] = &[
    (
        "fashion",
        &["styling", "outfit coordination", "fashion sense", "trendsetting"],
    ),
    (
        "beauty",
        &["makeup artistry", "skincare routine", "beauty tips", "glam looks"],
    ),
    (
        "fitness",
        &["workout routines", "fitness journey", "health tips", "transformation"],
    ),
    (
        "food",
        &["recipe creation", "cooking skills", "food photography", "culinary expertise"],
    ),
    (
        "tech",
        &["tech reviews", "product insights", "technical knowledge", "innovation coverage"],
    ),
    (
        "lifestyle",
        &["lifestyle content", "daily inspiration", "life tips", "authentic sharing"],
    ),
    (
        "travel",
        &["travel adventures", "destination guides", "travel photography", "wanderlust content"],
    ),
];

const FALLBACK_FOCUS: &[&str] = &["content"];

/// Phrase pool for the creator's category, or `["content"]` if none applies.
#[must_use]
pub fn content_focus_phrases(category: &str) -> &'static [&'static str] {
    let category = category.to_lowercase();
    CONTENT_FOCUS
        .iter()
        .find(|(keyword, _)| category.contains(keyword))
        .map_or(FALLBACK_FOCUS, |(_, phrases)| *phrases)
}

pub const SUSTAINABLE_REFERENCE: &str = "I especially loved your recent post about sustainable fashion - it really resonates with our brand values!";
pub const FITNESS_REFERENCE: &str = "Your latest workout video was incredible - the transformation results speak for themselves!";
pub const COOKING_REFERENCE: &str = "That homemade pasta recipe you shared looked absolutely delicious!";
pub const VIDEO_REFERENCE: &str = "Your recent video content has been amazing - the production quality is top-notch!";
pub const GENERIC_REFERENCE: &str = "I saw your recent post and it perfectly captures what we love about your content!";

struct ReferenceRule {
    applies: fn(excerpt: &str, platform: Platform) -> bool,
    text: &'static str,
}

const REFERENCE_RULES: &[ReferenceRule] = &[
    ReferenceRule {
        applies: |excerpt, _| excerpt.contains("sustainable"),
        text: SUSTAINABLE_REFERENCE,
    },
    ReferenceRule {
        applies: |excerpt, _| excerpt.contains("workout") || excerpt.contains("fitness"),
        text: FITNESS_REFERENCE,
    },
    ReferenceRule {
        applies: |excerpt, _| excerpt.contains("recipe") || excerpt.contains("cooking"),
        text: COOKING_REFERENCE,
    },
    ReferenceRule {
        applies: |_, platform| platform == Platform::Youtube,
        text: VIDEO_REFERENCE,
    },
];

/// Sentence referring to the creator's latest content. Empty when there is
/// no excerpt to refer to.
#[must_use]
pub fn personal_reference(recent_excerpt: &str, platform: Platform) -> &'static str {
    if recent_excerpt.trim().is_empty() {
        return "";
    }
    let excerpt = recent_excerpt.to_lowercase();
    REFERENCE_RULES
        .iter()
        .find(|rule| (rule.applies)(&excerpt, platform))
        .map_or(GENERIC_REFERENCE, |rule| rule.text)
}
