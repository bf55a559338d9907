use super::Args;
use crate::error::{PlateError, Result};

/// Replaces `{name}` placeholders in `template`.
///
/// `{{` and `}}` produce literal braces. When `count` is set it is bound to
/// `{count}`, shadowing any `count` entry in `args`. Substituted values are
/// not scanned again.
///
/// `key` names the phrase in syntax error messages.
pub fn interpolate(template: &str, key: &str, args: &Args, count: Option<u64>) -> Result<String> {
    let syntax_error = |reason: &str| PlateError::FormatSyntax {
        key: key.to_string(),
        reason: reason.to_string(),
    };

    let mut result = String::with_capacity(template.len());
    let mut chars = template.chars().peekable();

    while let Some(ch) = chars.next() {
        match ch {
            '{' if chars.peek() == Some(&'{') => {
                chars.next();
                result.push('{');
            }
            '{' => {
                let mut name = String::new();
                let mut closed = false;
                for c in chars.by_ref() {
                    if c == '}' {
                        closed = true;
                        break;
                    }
                    name.push(c);
                }

                if !closed {
                    return Err(syntax_error("expected '}' before end of string"));
                }
                if name.is_empty() {
                    return Err(syntax_error("empty placeholder '{}'"));
                }
                if !name.chars().all(|c| c.is_alphanumeric() || c == '_') {
                    return Err(syntax_error(&format!("invalid placeholder '{{{}}}'", name)));
                }

                if name == "count"
                    && let Some(count) = count
                {
                    result.push_str(&count.to_string());
                } else {
                    match args.get(&name) {
                        Some(value) => result.push_str(value),
                        None => return Err(PlateError::MissingInterpolationValue { name }),
                    }
                }
            }
            '}' if chars.peek() == Some(&'}') => {
                chars.next();
                result.push('}');
            }
            '}' => return Err(syntax_error("single '}' encountered")),
            _ => result.push(ch),
        }
    }

    Ok(result)
}
