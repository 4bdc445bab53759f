//! Slug derivation for project names.

/// Derive a URL/shell-safe slug from a name.
///
/// Lowercases, maps spaces and underscores to `-`, drops anything outside
/// `[a-z0-9-]`, collapses hyphen runs and trims hyphens from both ends.
pub fn slugify(name: &str) -> String {
    let mut slug = String::with_capacity(name.len());

    for ch in name.chars().flat_map(char::to_lowercase) {
        let ch = match ch {
            ' ' | '_' => '-',
            c => c,
        };

        if !(ch.is_ascii_lowercase() || ch.is_ascii_digit() || ch == '-') {
            continue;
        }
        if ch == '-' && slug.ends_with('-') {
            continue;
        }
        slug.push(ch);
    }

    slug.trim_matches('-').to_string()
}
