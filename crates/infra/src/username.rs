use thiserror::Error;
use unicode_normalization::char::is_combining_mark;
use unicode_normalization::UnicodeNormalization;

pub const USERNAME_MIN_LEN: usize = 3;
pub const USERNAME_MAX_LEN: usize = 30;

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum UsernameError {
    #[error("Escolhe um username entre 3 e 30 caracteres (letras, números, _ ou .).")]
    LengthOutOfRange,
    #[error("O username só pode ter letras, números, _ e . (sem espaços ou acentos).")]
    InvalidShape,
}

/// Best-effort cleanup of free-form input into username alphabet:
/// NFKD fold, drop accents, keep `[A-Za-z0-9._]`, trim and collapse dots,
/// lowercase, cap at 30 characters.
pub fn sanitize_username(input: &str) -> String {
    let cleaned: String = input
        .nfkd()
        .filter(|c| !is_combining_mark(*c))
        .filter(|c| c.is_ascii_alphanumeric() || *c == '.' || *c == '_')
        .collect();

    let trimmed = cleaned.trim_matches('.');

    let mut out = String::with_capacity(trimmed.len());
    let mut prev_dot = false;
    for c in trimmed.chars() {
        if c == '.' {
            if prev_dot {
                continue;
            }
            prev_dot = true;
        } else {
            prev_dot = false;
        }
        out.push(c.to_ascii_lowercase());
        if out.len() == USERNAME_MAX_LEN {
            break;
        }
    }
    out
}

fn matches_shape(username: &str) -> bool {
    let bytes = username.as_bytes();
    let Some((&first, rest)) = bytes.split_first() else {
        return false;
    };
    let edge_ok = |b: u8| b.is_ascii_lowercase() || b.is_ascii_digit();
    let inner_ok = |b: u8| edge_ok(b) || b == b'.' || b == b'_';
    match rest.split_last() {
        None => edge_ok(first),
        Some((&last, middle)) => {
            edge_ok(first) && edge_ok(last) && middle.iter().all(|b| inner_ok(*b))
        }
    }
}

/// Sanitize then validate; returns the normalized username on success.
pub fn validate_username(raw: &str) -> Result<String, UsernameError> {
    let normalized = sanitize_username(raw);
    if normalized.len() < USERNAME_MIN_LEN || normalized.len() > USERNAME_MAX_LEN {
        return Err(UsernameError::LengthOutOfRange);
    }
    if !matches_shape(&normalized) {
        return Err(UsernameError::InvalidShape);
    }
    Ok(normalized)
}

/// A stored username is acceptable as-is when validation would not
/// rewrite it. The repair job uses this to find rows needing a fix.
pub fn is_valid_username(stored: &str) -> bool {
    matches!(validate_username(stored), Ok(ref normalized) if normalized == stored)
}
