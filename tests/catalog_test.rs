//! Content catalog tests — lookup semantics, ordering, and the structural
//! invariants the navigation flows rely on.

use std::collections::HashSet;

use vanguard::models::catalog::{Catalog, SessionKind};
use vanguard::models::nav_item;

#[test]
fn test_find_module_ethics() {
    let catalog = Catalog::load();

    let module = catalog.find_module("ethics").expect("ethics module missing");

    assert_eq!(module.name, "Ethics");
    assert_eq!(module.presentations.len(), 2);
    assert_eq!(module.presentations_of(SessionKind::Lecture).count(), 1);
    assert_eq!(module.presentations_of(SessionKind::Social).count(), 1);
}

#[test]
fn test_find_module_not_found() {
    let catalog = Catalog::load();

    assert!(catalog.find_module("nonexistent").is_none());
    assert!(catalog.find_module("").is_none());
}

#[test]
fn test_modules_are_ordered_and_start_at_day_zero() {
    let catalog = Catalog::load();
    let modules = catalog.modules();

    assert_eq!(modules.len(), 7);
    assert_eq!(modules[0].id, "day-zero");
    assert_eq!(modules[6].id, "the-grand-spectrum");
}

#[test]
fn test_module_ids_are_unique() {
    let catalog = Catalog::load();

    let ids: HashSet<&str> = catalog.modules().iter().map(|m| m.id).collect();
    assert_eq!(ids.len(), catalog.modules().len());
}

#[test]
fn test_presentation_ids_are_unique_within_each_module() {
    let catalog = Catalog::load();

    for module in catalog.modules() {
        let ids: HashSet<&str> = module.presentations.iter().map(|p| p.id).collect();
        assert_eq!(
            ids.len(),
            module.presentations.len(),
            "duplicate presentation id in module {}",
            module.id
        );
    }
}

#[test]
fn test_every_module_has_presentations() {
    let catalog = Catalog::load();

    for module in catalog.modules() {
        assert!(
            !module.presentations.is_empty(),
            "module {} has no presentations",
            module.id
        );
    }
}

#[test]
fn test_presentations_of_partitions_by_kind() {
    let catalog = Catalog::load();

    for module in catalog.modules() {
        let lectures = module.presentations_of(SessionKind::Lecture).count();
        let socials = module.presentations_of(SessionKind::Social).count();
        assert_eq!(lectures + socials, module.presentations.len());
    }
}

#[test]
fn test_outside_core_programs() {
    let catalog = Catalog::load();

    let ids: Vec<&str> = catalog.programs().iter().map(|p| p.id).collect();
    assert_eq!(
        ids,
        vec!["leadership-workshops", "community-service", "mentorship"]
    );
}

#[test]
fn test_candidate_lookup() {
    let catalog = Catalog::load();

    let first = &catalog.candidates()[0];
    let found = catalog.find_candidate(first.id).expect("candidate missing");
    assert_eq!(found.name, first.name);

    assert!(catalog.find_candidate("nonexistent").is_none());
}

#[test]
fn test_session_kind_parse() {
    assert_eq!(SessionKind::parse("lecture"), Some(SessionKind::Lecture));
    assert_eq!(SessionKind::parse("social"), Some(SessionKind::Social));
    assert_eq!(SessionKind::parse("Lecture"), None);
    assert_eq!(SessionKind::parse("workshop"), None);
}

#[test]
fn test_session_kind_labels() {
    assert_eq!(SessionKind::Lecture.as_str(), "lecture");
    assert_eq!(SessionKind::Social.as_str(), "social");
    assert_eq!(SessionKind::Lecture.label(), "Lecture");
    assert_eq!(SessionKind::Social.label(), "Social Session");
}

#[test]
fn test_navigation_marks_active_entry() {
    let nav = nav_item::find_navigation("/documentation/ethics");

    let active: Vec<&str> = nav
        .iter()
        .filter(|item| item.is_active)
        .map(|item| item.label)
        .collect();
    assert_eq!(active, vec!["Documentation"]);
}

#[test]
fn test_navigation_home_matches_exactly() {
    let nav = nav_item::find_navigation("/");
    let home = nav.iter().find(|item| item.url == "/").expect("no home entry");
    assert!(home.is_active);

    let nav = nav_item::find_navigation("/about");
    let home = nav.iter().find(|item| item.url == "/").expect("no home entry");
    assert!(!home.is_active);
}

#[test]
fn test_navigation_candidate_pages_highlight_candidates() {
    let nav = nav_item::find_navigation("/candidate/amara-osei/class-type");

    let candidates = nav
        .iter()
        .find(|item| item.url == "/candidates")
        .expect("no candidates entry");
    assert!(candidates.is_active);
}
