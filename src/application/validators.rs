/// Maximum accepted email length in characters, measured after trimming.
pub const MAX_EMAIL_LEN: usize = 254;

/// Validates that the input looks like a deliverable email address.
/// Rules:
/// - Non-empty after trimming, at most 254 characters
/// - No whitespace anywhere
/// - Exactly one `@` with a non-empty local part
/// - Domain contains an interior dot (not first or last character)
pub fn is_valid_email(email: &str) -> bool {
    let email = email.trim();
    if email.is_empty() || email.chars().count() > MAX_EMAIL_LEN {
        return false;
    }
    has_email_shape(email)
}

fn has_email_shape(email: &str) -> bool {
    if email.chars().any(char::is_whitespace) {
        return false;
    }

    let Some((local, domain)) = email.split_once('@') else {
        return false;
    };
    if local.is_empty() || domain.is_empty() || domain.contains('@') {
        return false;
    }

    // '.' is ASCII, so a byte scan is safe on UTF-8 input
    domain
        .bytes()
        .enumerate()
        .any(|(i, b)| b == b'.' && i > 0 && i < domain.len() - 1)
}

/// Canonical storage form: trimmed and lowercased.
pub fn normalize_email(email: &str) -> String {
    email.trim().to_lowercase()
}

/// Strips angle brackets so pasted `Name <user@host>` forms cannot smuggle
/// markup into stored values.
pub fn sanitize_email(email: &str) -> String {
    email.replace(['<', '>'], "")
}
