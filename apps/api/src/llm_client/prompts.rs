// Shared prompt fragments. Each generator defines its own prompts alongside it;
// this file holds what every prompt reuses.

/// Appended to every system instruction. The request also sets
/// `response_format: json_object`, which some compatible endpoints ignore.
pub const JSON_ONLY_SYSTEM: &str = "You MUST respond with a single valid JSON object only. \
    Do NOT include any text outside the JSON object. \
    Do NOT use markdown code fences. \
    Do NOT include explanations or apologies.";

/// Builds a system instruction from a persona line and the JSON-only rule.
pub fn system_prompt(persona: &str) -> String {
    format!("{persona} {JSON_ONLY_SYSTEM}")
}

/// Fills `{name}` placeholders in one left-to-right pass over `template`.
///
/// Inserted values are never scanned again, so caller text that happens to
/// contain `{title}` or similar reaches the model verbatim. Braces that do not
/// name a known placeholder (the JSON shape in a prompt) are kept as-is.
pub fn fill_template(template: &str, values: &[(&str, &str)]) -> String {
    let mut out = String::with_capacity(template.len());
    let mut rest = template;

    while let Some(open) = rest.find('{') {
        out.push_str(&rest[..open]);
        let tail = &rest[open + 1..];

        let filled = tail.find('}').and_then(|close| {
            let name = &tail[..close];
            values
                .iter()
                .find(|(key, _)| *key == name)
                .map(|(_, value)| (*value, close + 1))
        });

        match filled {
            Some((value, consumed)) => {
                out.push_str(value);
                rest = &tail[consumed..];
            }
            None => {
                out.push('{');
                rest = tail;
            }
        }
    }

    out.push_str(rest);
    out
}
