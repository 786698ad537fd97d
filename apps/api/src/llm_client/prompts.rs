// Shared prompt constants and prompt-building utilities.
// Each service that needs LLM calls defines its own prompts.rs alongside it.
// This file contains cross-cutting prompt fragments.

/// System instruction sent with every prompt. Replies are still parsed
/// defensively because models do not always honour it.
pub const JSON_ONLY_SYSTEM: &str = "You are a precise, structured assistant \
    helping candidates prepare for technical interviews. \
    You MUST respond with valid JSON only. \
    Do NOT include any text outside the JSON value. \
    Do NOT include explanations or apologies.";

/// Fills `{name}` placeholders in `template` in a single left-to-right pass.
///
/// Substituted values are copied verbatim and never rescanned, so user text
/// that happens to contain `{role}` cannot pull in another variable. Braces
/// that do not open a known placeholder (e.g. JSON examples) are kept as-is.
pub fn render(template: &str, vars: &[(&str, &str)]) -> String {
    let mut out = String::with_capacity(template.len());
    let mut rest = template;

    while let Some(open) = rest.find('{') {
        out.push_str(&rest[..open]);
        let tail = &rest[open..];

        let hit = vars.iter().find_map(|(name, value)| {
            let inner = tail.strip_prefix('{')?.strip_prefix(name)?;
            inner.strip_prefix('}').map(|after| (*value, after))
        });

        match hit {
            Some((value, after)) => {
                out.push_str(value);
                rest = after;
            }
            None => {
                out.push('{');
                rest = &tail[1..];
            }
        }
    }

    out.push_str(rest);
    out
}
