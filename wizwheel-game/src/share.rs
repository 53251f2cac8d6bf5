//! Share-message formatting.
//!
//! Pure mapping from session field values and locale to the chat share text.
//! URL-encoding and the chat platform link itself belong to the shell; this
//! module only assembles the plain message.

use crate::data::TraitWheel;
use crate::locale::Locale;
use crate::session::FormFields;
use once_cell::sync::Lazy;
use regex::Regex;

/// Fixed destination embedded at the end of every share message.
pub const SHARE_URL: &str = "https://wizwheel.app/";

/// Name used when the form's name field is blank.
pub const FALLBACK_NAME: &str = "A Wizard";

struct ShareTemplate {
    casting_line: &'static str,
    next_turn: &'static str,
    team_turn: &'static str,
    call_to_action: &'static str,
    link_prefix: &'static str,
}

const EN_TEMPLATE: ShareTemplate = ShareTemplate {
    casting_line: "\u{2728} {name} casts the Spell of Integrity by...",
    next_turn: "\u{1fa84} Next to spin the Wheel of Integrity is {tags}!",
    team_turn: "\u{1fa84} Now it's @TeamNucleus's turn to spin the Wheel of Integrity!",
    call_to_action: "Unleash your element and spin your magic earth \u{1f30d}",
    link_prefix: "\u{1f449}",
};

const ID_TEMPLATE: ShareTemplate = ShareTemplate {
    casting_line: "\u{2728} {name} mengucapkan Mantra Integritas dengan...",
    next_turn: "\u{1fa84} Giliran selanjutnya memutar Roda Integritas adalah {tags}!",
    team_turn: "\u{1fa84} Sekarang giliran @TimNucleus untuk memutar Roda Integritas!",
    call_to_action: "Bebaskan elemenmu dan putar sihir bumimu \u{1f30d}",
    link_prefix: "\u{1f449}",
};

const fn template(locale: Locale) -> &'static ShareTemplate {
    match locale {
        Locale::En => &EN_TEMPLATE,
        Locale::Id => &ID_TEMPLATE,
    }
}

static TAG_SEPARATOR: Lazy<Regex> =
    Lazy::new(|| Regex::new(r", ?").expect("tag separator pattern should compile"));

/// Normalize a comma-separated tag list into `@`-prefixed mentions.
/// Returns `None` for a blank list.
#[must_use]
pub fn format_tags(raw: &str) -> Option<String> {
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        return None;
    }
    Some(format!("@{}", TAG_SEPARATOR.replace_all(trimmed, ", @")))
}

/// Assemble the full share message for a completed session.
#[must_use]
pub fn share_message(locale: Locale, wheel: &TraitWheel, form: &FormFields) -> String {
    let template = template(locale);

    let name = form.name.trim();
    let name = if name.is_empty() { FALLBACK_NAME } else { name };
    let casting_line = template
        .casting_line
        .replace("{name}", &format!("*{name}*"));

    let next_turn_line = format_tags(&form.tags).map_or_else(
        || template.team_turn.to_string(),
        |tags| template.next_turn.replace("{tags}", &tags),
    );

    let intro_question = wheel.intro_prompt(locale).unwrap_or_default();

    format!(
        "{intro}\n\n{casting}\n\"{spell}\"\n\n{next_turn}\n{call}\n{prefix} {url}",
        intro = intro_question,
        casting = casting_line,
        spell = form.spell_text.trim(),
        next_turn = next_turn_line,
        call = template.call_to_action,
        prefix = template.link_prefix,
        url = SHARE_URL,
    )
}
