use rand::{distributions::Alphanumeric, Rng};

use crate::domain::ports::WorkspaceRepository;
use crate::error::AppError;

const MAX_SLUG_LEN: usize = 30;
const SUFFIX_LEN: usize = 4;

/// Derives a URL-safe slug from a free-text business name. Lowercases the
/// input, collapses every run of characters outside [a-z0-9] into a single
/// hyphen, trims hyphens and truncates to 30 characters. Total: empty input
/// yields an empty slug.
pub fn slugify(name: &str) -> String {
    let mut slug = String::with_capacity(name.len());
    let mut pending_dash = false;

    for c in name.chars() {
        let c = c.to_ascii_lowercase();
        if c.is_ascii_lowercase() || c.is_ascii_digit() {
            if pending_dash && !slug.is_empty() {
                slug.push('-');
            }
            pending_dash = false;
            slug.push(c);
        } else {
            pending_dash = true;
        }
        if slug.len() >= MAX_SLUG_LEN {
            break;
        }
    }

    slug.truncate(MAX_SLUG_LEN);
    while slug.ends_with('-') {
        slug.pop();
    }
    slug
}

/// Slug used at workspace creation: the derived slug plus a random
/// four-character suffix. The datastore's unique constraint is the real
/// collision guard; the suffix just makes collisions unlikely.
pub fn creation_slug(name: &str) -> String {
    let base = slugify(name);
    let suffix: String = rand::thread_rng()
        .sample_iter(&Alphanumeric)
        .map(|b| (b as char).to_ascii_lowercase())
        .take(SUFFIX_LEN)
        .collect();

    if base.is_empty() {
        suffix
    } else {
        format!("{}-{}", base, suffix)
    }
}

/// Advisory availability check. Concurrent signups can still collide
/// between this check and creation; callers must not treat the result as a
/// reservation.
pub async fn is_available(repo: &dyn WorkspaceRepository, slug: &str) -> Result<bool, AppError> {
    Ok(!repo.subdomain_taken(slug).await?)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_slugify_basic() {
        assert_eq!(slugify("Acme Coaching"), "acme-coaching");
        assert_eq!(slugify("  Fit & Strong!  "), "fit-strong");
        assert_eq!(slugify("ALL CAPS 123"), "all-caps-123");
    }

    #[test]
    fn test_slugify_collapses_runs() {
        assert_eq!(slugify("a---b___c"), "a-b-c");
        assert_eq!(slugify("a!!!???b"), "a-b");
    }

    #[test]
    fn test_slugify_total_on_degenerate_input() {
        assert_eq!(slugify(""), "");
        assert_eq!(slugify("!!!"), "");
        assert_eq!(slugify("---"), "");
    }

    #[test]
    fn test_slugify_truncates_to_thirty() {
        let slug = slugify("the quick brown fox jumps over the lazy dog");
        assert!(slug.len() <= 30);
        // Truncation never leaves a trailing hyphen.
        assert!(!slug.ends_with('-'));
    }

    #[test]
    fn test_slugify_idempotent() {
        for input in [
            "Acme Coaching",
            "  Fit & Strong!  ",
            "the quick brown fox jumps over the lazy dog",
            "éàü unicode Überläßt",
            "123---456",
        ] {
            let once = slugify(input);
            assert_eq!(slugify(&once), once, "not idempotent for {:?}", input);
        }
    }

    #[test]
    fn test_slugify_shape() {
        let shape_ok = |s: &str| {
            // ^[a-z0-9]*(-[a-z0-9]+)*$
            !s.starts_with('-')
                && !s.ends_with('-')
                && !s.contains("--")
                && s.chars().all(|c| c.is_ascii_lowercase() || c.is_ascii_digit() || c == '-')
        };
        for input in ["Acme Coaching", "a!!!b", "", "ÜBER fit 2024", "x"] {
            assert!(shape_ok(&slugify(input)), "bad shape for {:?}", input);
        }
    }

    #[test]
    fn test_creation_slug_has_suffix() {
        let slug = creation_slug("Acme Coaching");
        assert!(slug.starts_with("acme-coaching-"));
        let suffix = slug.rsplit('-').next().unwrap();
        assert_eq!(suffix.len(), 4);
        assert!(suffix.chars().all(|c| c.is_ascii_lowercase() || c.is_ascii_digit()));
    }

    #[test]
    fn test_creation_slug_empty_name() {
        let slug = creation_slug("!!!");
        assert_eq!(slug.len(), 4);
    }
}
