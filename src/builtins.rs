//! Built-in syntax rules
//!
//! Registered lowest priority first; the most frequently hit rules go last so they are
//! tried first.

use crate::{
    compiler::{starts_with_quantifier, CompileContext},
    error::{RegexError, Result},
    syntax::{Flags, Scope},
    tokens::{TokenMatch, TokenRegistry, TokenRule},
};

/// Replacement for syntax that vanishes: nothing if a quantifier follows, otherwise an empty
/// group so the tokens around it stay apart
fn separator(token: &TokenMatch<'_>) -> String {
    if starts_with_quantifier(token.rest()) {
        String::new()
    } else {
        "(?:)".to_string()
    }
}

/// Install the built-in rules into `registry`, which must be enabled
pub(crate) fn install(registry: &TokenRegistry) -> Result<()> {
    // \p{..}, \P{..}, \p{^..} placeholder until a Unicode package is registered
    registry.register(
        TokenRule::new(r"\\[pP]\{\^?[^}]*\}", |token, _, _| {
            Err(RegexError::UnsupportedUnicodeToken(token.as_str().to_string()))
        })?
        .scope(Scope::INSIDE_CLASS | Scope::OUTSIDE_CLASS),
    )?;

    // [] never matches, [^] matches anything
    registry.register(TokenRule::new(r"\[\^?\]", |token, _, _| {
        Ok(if token.as_str() == "[]" {
            r"\b\B".to_string()
        } else {
            r"[\s\S]".to_string()
        })
    })?)?;

    // (?#...) inline comment
    registry.register(TokenRule::new(r"\(\?#[^)]*\)", |token, _, _| {
        Ok(separator(token))
    })?)?;

    // Leading mode modifier, e.g. (?ix); only at the very start of the pattern
    registry.register(TokenRule::new(
        r"^\(\?([imnsx]+)\)",
        |token, _, context: &mut CompileContext| {
            let letters = token.get(1).unwrap_or("");
            context.set_flag(Flags::from_letters(letters)?);
            Ok(String::new())
        },
    )?)?;

    // \k<name>, resolved against the groups opened so far
    registry.register(TokenRule::new(
        r"\\k<([A-Za-z0-9_$]+)>",
        |token, _, context: &mut CompileContext| {
            let name = token.get(1).unwrap_or("");
            Ok(match context.capture_index(name) {
                Some(index) => {
                    let mut backref = format!("\\{}", index + 1);
                    if token.rest().starts_with(|ch: char| ch.is_ascii_digit()) {
                        backref.push_str("(?:)");
                    }
                    backref
                }
                None => token.as_str().to_string(),
            })
        },
    )?)?;

    // Whitespace and # line comments, free-spacing mode only
    registry.register(
        TokenRule::new(r"(?:\s+|#.*)+", |token, _, _| Ok(separator(token)))?
            .trigger(|context| context.has_flag(Flags::EXTENDED)),
    )?;

    // Dot, dot-matches-all mode only
    registry.register(
        TokenRule::new(r"\.", |_, _, _| Ok(r"[\s\S]".to_string()))?
            .trigger(|context| context.has_flag(Flags::DOT_ALL)),
    )?;

    // (?<name> opener of a named group
    registry.register(TokenRule::new(
        r"\(\?<([A-Za-z0-9_$]+)>",
        |token, _, context: &mut CompileContext| {
            let name = token.get(1).unwrap_or("");
            if name.bytes().all(|b| b.is_ascii_digit()) {
                return Err(RegexError::InvalidCaptureName(name.to_string()));
            }
            context.push_capture(Some(name.to_string()));
            Ok("(".to_string())
        },
    )?)?;

    // ( opener of a plain group; non-capturing under explicit capture
    registry.register(TokenRule::new(
        r"\((?!\?)",
        |_, _, context: &mut CompileContext| {
            if context.has_flag(Flags::EXPLICIT_CAPTURE) {
                Ok("(?:".to_string())
            } else {
                context.push_capture(None);
                Ok("(".to_string())
            }
        },
    )?)?;

    Ok(())
}
