/// A header navigation entry.
pub struct NavModule {
    pub label: &'static str,
    pub url: &'static str,
    pub is_active: bool,
}

/// (label, url) pairs in display order. Nothing here is permission-gated:
/// every entry sits behind the same gate session.
const NAV_ITEMS: &[(&str, &str)] = &[
    ("Home", "/"),
    ("About", "/about"),
    ("Vision", "/vision"),
    ("Programs", "/programs"),
    ("Documentation", "/documentation"),
    ("Candidates", "/candidates"),
    ("OCR Tool", "/tools/ocr"),
];

/// Build the header navigation for the current path.
pub fn find_navigation(current_path: &str) -> Vec<NavModule> {
    NAV_ITEMS
        .iter()
        .map(|&(label, url)| NavModule {
            label,
            url,
            is_active: is_active(url, current_path),
        })
        .collect()
}

/// "/" only matches exactly; every other entry also claims its subpaths,
/// and the candidate detail pages highlight the Candidates entry.
fn is_active(url: &str, current_path: &str) -> bool {
    match url {
        "/" => current_path == "/",
        "/candidates" => {
            current_path.starts_with("/candidates") || current_path.starts_with("/candidate/")
        }
        _ => current_path == url || current_path.starts_with(&format!("{url}/")),
    }
}
