//! Template rendering
//!
//! Templates contain `{}` (next capture group, in order), `{N}` (capture
//! group N, 1-based) and the escapes `{{` / `}}`. A template that refers to a
//! group the match does not have renders as its raw text.

/// Render `template` with the given capture groups.
///
/// Groups that did not participate in the match render as empty strings.
pub fn render(template: &str, groups: &[Option<&str>]) -> String {
    try_render(template, groups).unwrap_or_else(|| template.to_string())
}

fn try_render(template: &str, groups: &[Option<&str>]) -> Option<String> {
    let mut out = String::with_capacity(template.len() + 16);
    let mut next_auto = 0usize;
    let mut chars = template.chars().peekable();

    while let Some(c) = chars.next() {
        match c {
            '{' if chars.peek() == Some(&'{') => {
                chars.next();
                out.push('{');
            }
            '}' if chars.peek() == Some(&'}') => {
                chars.next();
                out.push('}');
            }
            '{' => {
                let mut index = String::new();
                loop {
                    match chars.next() {
                        Some('}') => break,
                        Some(d) if d.is_ascii_digit() => index.push(d),
                        _ => return None,
                    }
                }
                let slot = if index.is_empty() {
                    next_auto += 1;
                    next_auto - 1
                } else {
                    index.parse::<usize>().ok()?.checked_sub(1)?
                };
                let value = groups.get(slot)?;
                out.push_str(value.unwrap_or(""));
            }
            other => out.push(other),
        }
    }

    Some(out)
}
