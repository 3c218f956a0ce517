//! Prompt text sent to the model.

/// Instructions for full itinerary generation.
pub const ITINERARY_INSTRUCTIONS: &str = "You are TravelGPT, an expert AI travel planner.
You must respond with valid JSON only, with no markdown formatting, no code blocks, and no extra text.
Your response must be a single JSON object with this exact structure:
{\"days\": [{\"day\": 1, \"summary\": \"...\"}, {\"day\": 2, \"summary\": \"...\"}, ...]}

Each summary should be a concise paragraph describing the day's activities, attractions, and recommendations.
Do not include any text before or after the JSON object.";

/// Instructions for single day regeneration.
pub const DAY_INSTRUCTIONS: &str = "You are TravelGPT, an expert AI travel planner.
You must respond with valid JSON only, with no markdown formatting, no code blocks, and no extra text.
Your response must be a single JSON object with this exact structure:
{\"day\": <number>, \"summary\": \"...\"}

The summary should be a concise paragraph describing the day's activities, attractions, and recommendations.
Do not include any text before or after the JSON object.";

/// Blank preferences count as none.
fn preferences(prefs: Option<&str>) -> Option<&str> {
    prefs.map(str::trim).filter(|p| !p.is_empty())
}

pub fn itinerary_prompt(destination: &str, days: i32, prefs: Option<&str>) -> String {
    let mut prompt = format!(
        "{}\n\nPlan a {}-day trip to {}.",
        ITINERARY_INSTRUCTIONS, days, destination
    );
    if let Some(prefs) = preferences(prefs) {
        prompt.push_str(&format!(" User preferences: {}.", prefs));
    }

    prompt
}

/// Stricter prompt used for the single retry after an unparsable reply.
pub fn strict_itinerary_prompt(destination: &str, days: i32, prefs: Option<&str>) -> String {
    format!(
        "{}\n\nPlan a {}-day trip to {}. \
        CRITICAL: Respond with ONLY valid JSON, no markdown, no code blocks. \
        Format: {{\"days\": [{{\"day\": 1, \"summary\": \"...\"}}, ...]}}. \
        Preferences: {}.",
        ITINERARY_INSTRUCTIONS,
        days,
        destination,
        preferences(prefs).unwrap_or("none")
    )
}

pub fn day_prompt(destination: &str, day: i32, total_days: i32, prefs: Option<&str>) -> String {
    let mut prompt = format!(
        "{}\n\nRegenerate the itinerary for Day {} of a {}-day trip to {}.",
        DAY_INSTRUCTIONS, day, total_days, destination
    );
    if let Some(prefs) = preferences(prefs) {
        prompt.push_str(&format!(" User preferences: {}.", prefs));
    }

    prompt
}
