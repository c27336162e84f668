//! Prompt composition
//!
//! Owns the fixed persona texts and builds the provider payload for
//! each chat-based operation. Composition is deterministic and does no
//! I/O; whatever survives handler validation is forwarded as-is and
//! the provider's own validation surfaces any remaining problem.

use ai_core::{ChatMessage, ChatRequest, ContentPart};
use domain::{GeoLocation, MenuConstraints};

/// Persona for photo analysis: a street-smart local expert.
///
/// Reproduced verbatim in every outbound photo request.
pub const LOCAL_CONCIERGE_PERSONA: &str = r#"
You are a seasoned, local travel expert (a "Local Concierge").
You are NOT a boring encyclopedia. You are a street-smart friend who knows the hidden gems, the history, and the tourist traps.

When the user uploads a photo (of a landmark, food, street, or object):
1. **Identify it** accurately.
2. **Tell a Story (The "Hook"):** Don't just say "This is the Eiffel Tower." Say "Did you know the Eiffel Tower was originally hated by Parisians and called a 'useless monster'?"
3. **Local Insight/Secret:** Share a specific tip. E.g., "Don't eat at the cafe right under it; walk two blocks east to Rue de Monttessuy for better views and cheaper coffee."
4. **Verdict:** Is it a "Must-Do" or a "Tourist Trap"?

Tone: Witty, knowledgeable, helpful, slightly opinionated (like a real local).
Language: Simplified Chinese (unless the user asks otherwise).
"#;

/// Persona for location narration: a walking guide at the user's feet.
pub const WALKING_GUIDE_PERSONA: &str = r#"
You are a 'Walking Guide' AI. The user is at the coordinates provided.
Based on this location, identify the MOST interesting landmark, building, or historical site within walking distance (100m).
Provide a short, engaging audio script (in Chinese) about what they are looking at or should look at.
Focus on: "Look to your left/right...", "Did you know that...", "This spot is famous for...".
Don't just list facts. Be a storyteller.
"#;

/// Persona for menu recommendation: an opinionated ordering companion.
pub const MENU_MASTER_PERSONA: &str = r#"
You are a 'Menu Master', a local foodie who orders for friends.
Given the party size, budget and tastes (and a photo of the menu or storefront when provided):
1. Recommend a concrete set of dishes that fits the budget and feeds everyone.
2. Flag anything on the menu that is a tourist trap or poor value.
3. Suggest one adventurous pick the group would probably not order themselves.

Tone: Warm, decisive, slightly opinionated (like a real local).
Language: Simplified Chinese (unless the user asks otherwise).
"#;

/// Fixed instruction text accompanying an uploaded photo
pub const PHOTO_INSTRUCTION: &str = "What is this? Give me the local scoop.";

const PHOTO_MAX_TOKENS: u32 = 500;
const LOCATION_MAX_TOKENS: u32 = 300;
const MENU_MAX_TOKENS: u32 = 500;

/// Build the photo-analysis payload: the concierge persona plus one
/// user message with exactly one text part and one image part.
#[must_use]
pub fn compose_photo_prompt(base64_image: &str) -> ChatRequest {
    ChatRequest::with_persona(
        LOCAL_CONCIERGE_PERSONA,
        ChatMessage::user_parts(vec![
            ContentPart::text(PHOTO_INSTRUCTION),
            ContentPart::image_base64(base64_image),
        ]),
    )
    .with_max_tokens(PHOTO_MAX_TOKENS)
}

/// Build the location-narration payload, interpolating both
/// coordinates with four decimal digits.
#[must_use]
pub fn compose_location_prompt(location: GeoLocation) -> ChatRequest {
    let user_text = format!(
        "I am currently at Latitude: {:.4}, Longitude: {:.4}. What is around me? Guide me.",
        location.latitude(),
        location.longitude()
    );
    ChatRequest::with_persona(WALKING_GUIDE_PERSONA, ChatMessage::user(user_text))
        .with_max_tokens(LOCATION_MAX_TOKENS)
}

/// Build the menu-recommendation payload; an optional photo is
/// appended as an extra image part in the same user message.
#[must_use]
pub fn compose_menu_prompt(constraints: &MenuConstraints, base64_image: Option<&str>) -> ChatRequest {
    let user_text = format!(
        "We are {} people. Our budget is: {}. Our tastes: {}. \
         Put together the best order for us.",
        constraints.people(),
        constraints.budget(),
        constraints.taste()
    );

    let mut parts = vec![ContentPart::text(user_text)];
    if let Some(image) = base64_image {
        parts.push(ContentPart::image_base64(image));
    }

    ChatRequest::with_persona(MENU_MASTER_PERSONA, ChatMessage::user_parts(parts))
        .with_max_tokens(MENU_MAX_TOKENS)
}
