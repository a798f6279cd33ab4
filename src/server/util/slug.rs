/// Derives a URL-safe slug from a display name.
///
/// Lowercases ASCII alphanumerics, collapses runs of whitespace, hyphens and
/// underscores into single hyphens, and strips everything else — including
/// accented characters, which are dropped rather than transliterated so the
/// rule stays a pure ASCII filter.
pub fn slugify(name: &str) -> String {
    let mut slug = String::with_capacity(name.len());
    let mut pending_hyphen = false;

    for ch in name.chars() {
        if ch.is_ascii_alphanumeric() {
            if pending_hyphen && !slug.is_empty() {
                slug.push('-');
            }
            pending_hyphen = false;
            slug.push(ch.to_ascii_lowercase());
        } else if matches!(ch, ' ' | '\t' | '-' | '_') {
            pending_hyphen = true;
        }
    }

    slug
}

/// Candidate slug for collision round `n`: the base itself first, numeric
/// suffixes from `-2` on.
pub fn candidate(base: &str, n: u32) -> String {
    if n <= 1 {
        base.to_string()
    } else {
        format!("{base}-{n}")
    }
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn lowercases_and_hyphenates() {
        assert_eq!(slugify("Playa Grande"), "playa-grande");
    }

    #[test]
    fn strips_punctuation_and_accents() {
        assert_eq!(slugify("Montaña Azul!!"), "montaa-azul");
    }

    #[test]
    fn collapses_separator_runs() {
        assert_eq!(slugify("  Cabo  -  San _ Lucas  "), "cabo-san-lucas");
    }

    #[test]
    fn no_leading_or_trailing_hyphen() {
        assert_eq!(slugify("!Viva!"), "viva");
        assert_eq!(slugify(" - fin - "), "fin");
    }

    #[test]
    fn all_symbols_yields_empty() {
        assert_eq!(slugify("¡¿!?"), "");
    }

    #[test]
    fn candidates_start_at_the_bare_base() {
        assert_eq!(candidate("playa", 1), "playa");
        assert_eq!(candidate("playa", 2), "playa-2");
        assert_eq!(candidate("playa", 3), "playa-3");
    }
}
