use std::cmp::Ordering;
use std::collections::{hash_map::Entry, HashMap, HashSet};
use std::path::{Path, PathBuf};

/// Bundle identifiers pinned to the top of the browser list, in order.
pub const DEFAULT_PREFERRED_BROWSERS: &[&str] = &["com.apple.Safari", "com.google.Chrome"];

const SYSTEM_APPLICATIONS_PREFIX: &str = "/Applications/";
const USER_APPLICATIONS_SUBPATH: &str = "/Applications/";

/// One installed application able to handle web URLs, as resolved by the
/// host's OS integration layer.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BrowserCandidate {
    pub bundle_id: String,
    pub app_path: PathBuf,
    pub display_name: String,
}

/// Full ranking: deduplicate by display name, pin the preferred bundle IDs
/// first (in `preferred_order` order), then sort the rest by display name.
///
/// The output never contains duplicate identifiers, even when
/// `preferred_order` repeats one.
pub fn ordered_bundle_ids(
    preferred_order: &[&str],
    candidates: Vec<BrowserCandidate>,
    home_dir: &Path,
) -> Vec<String> {
    let survivors = deduplicate_by_display_name(candidates, home_dir);
    let surviving_ids: HashSet<&str> = survivors.iter().map(|c| c.bundle_id.as_str()).collect();

    let mut ordered: Vec<String> = Vec::with_capacity(survivors.len());
    for id in preferred_order {
        if surviving_ids.contains(id) && !ordered.iter().any(|taken| taken == id) {
            ordered.push((*id).to_string());
        }
    }

    let mut others: Vec<&BrowserCandidate> = survivors
        .iter()
        .filter(|c| !preferred_order.contains(&c.bundle_id.as_str()))
        .collect();
    others.sort_by(|a, b| {
        caseless_cmp(&a.display_name, &b.display_name)
            .then_with(|| caseless_cmp(&a.bundle_id, &b.bundle_id))
    });

    ordered.extend(others.into_iter().map(|c| c.bundle_id.clone()));
    ordered
}

/// Collapses candidates that share a display name (trimmed, case-folded)
/// down to the one at the most canonical install location. Candidates with
/// a blank display name key on their bundle ID instead, so they are never
/// merged with each other.
///
/// The returned order is unspecified; callers impose their own.
pub fn deduplicate_by_display_name(
    candidates: Vec<BrowserCandidate>,
    home_dir: &Path,
) -> Vec<BrowserCandidate> {
    let mut best_by_name: HashMap<String, BrowserCandidate> = HashMap::new();

    for candidate in candidates {
        let name_key = candidate.display_name.trim().to_lowercase();
        let key = if name_key.is_empty() {
            candidate.bundle_id.clone()
        } else {
            name_key
        };

        match best_by_name.entry(key) {
            Entry::Vacant(slot) => {
                slot.insert(candidate);
            }
            Entry::Occupied(mut slot) => {
                if is_preferred_install_location(&candidate.app_path, &slot.get().app_path, home_dir)
                {
                    slot.insert(candidate);
                }
            }
        }
    }

    best_by_name.into_values().collect()
}

/// Strict total order over distinct paths: location tier, then shorter
/// path, then case-insensitive lexical path order.
pub fn is_preferred_install_location(lhs: &Path, rhs: &Path, home_dir: &Path) -> bool {
    let lhs_rank = install_location_rank(lhs, home_dir);
    let rhs_rank = install_location_rank(rhs, home_dir);
    if lhs_rank != rhs_rank {
        return lhs_rank < rhs_rank;
    }

    let lhs_path = lhs.to_string_lossy();
    let rhs_path = rhs.to_string_lossy();
    let lhs_len = lhs_path.chars().count();
    let rhs_len = rhs_path.chars().count();
    if lhs_len != rhs_len {
        return lhs_len < rhs_len;
    }
    caseless_cmp(&lhs_path, &rhs_path) == Ordering::Less
}

/// Install-location tier: 0 for the system applications directory, 1 for
/// the per-user one, 2 otherwise. Lower wins.
pub fn install_location_rank(path: &Path, home_dir: &Path) -> u8 {
    let path = path.to_string_lossy();
    if path.starts_with(SYSTEM_APPLICATIONS_PREFIX) {
        return 0;
    }
    let user_applications = format!("{}{USER_APPLICATIONS_SUBPATH}", home_dir.display());
    if path.starts_with(&user_applications) {
        return 1;
    }
    2
}

/// Filters the raw URL-handler query results down to candidate bundle IDs:
/// the identifier must handle both http and https, must not be blank, and
/// must not be the app itself. First-seen order is kept and later
/// duplicates dropped, so the result is reproducible.
pub fn eligible_handler_ids(
    http_handlers: &[String],
    https_handlers: &[String],
    own_bundle_id: &str,
) -> Vec<String> {
    let https: HashSet<&str> = https_handlers.iter().map(String::as_str).collect();
    let mut seen: HashSet<&str> = HashSet::new();

    http_handlers
        .iter()
        .filter(|id| !id.is_empty() && id.as_str() != own_bundle_id)
        .filter(|id| https.contains(id.as_str()))
        .filter(|id| seen.insert(id.as_str()))
        .cloned()
        .collect()
}

fn caseless_cmp(lhs: &str, rhs: &str) -> Ordering {
    lhs.to_lowercase().cmp(&rhs.to_lowercase())
}
