//! The program content catalog: core modules with their presentations,
//! outside-core programs, and the candidate roster.
//!
//! The catalog is an immutable configuration table built once at startup
//! (`Catalog::load`) and shared by reference. Lookups are pure and return
//! an explicit `Option` — unknown identifiers are a normal outcome, not a
//! panic.

use serde::{Deserialize, Serialize};

mod data;

/// A presentation is either a lecture or an interactive social session.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SessionKind {
    Lecture,
    Social,
}

impl SessionKind {
    /// Stable identifier used in routes and JSON.
    pub fn as_str(self) -> &'static str {
        match self {
            SessionKind::Lecture => "lecture",
            SessionKind::Social => "social",
        }
    }

    /// Human-readable badge label.
    pub fn label(self) -> &'static str {
        match self {
            SessionKind::Lecture => "Lecture",
            SessionKind::Social => "Social Session",
        }
    }

    /// Parse a route segment. Unknown values are an explicit `None`.
    pub fn parse(s: &str) -> Option<SessionKind> {
        match s {
            "lecture" => Some(SessionKind::Lecture),
            "social" => Some(SessionKind::Social),
            _ => None,
        }
    }
}

/// A single content item within a module.
#[derive(Debug, Clone)]
pub struct Presentation {
    pub id: &'static str,
    pub title: &'static str,
    pub kind: SessionKind,
    pub description: &'static str,
    /// Display label, e.g. "45 min".
    pub duration: Option<&'static str>,
    /// Materials are not uploaded yet, so this is `None` everywhere today.
    pub file_url: Option<&'static str>,
}

/// A named unit of the core program, with an ordered set of presentations.
#[derive(Debug, Clone)]
pub struct Module {
    pub id: &'static str,
    pub name: &'static str,
    pub description: &'static str,
    /// Category color tag consumed by the stylesheet (e.g. "red", "purple").
    pub color: &'static str,
    pub presentations: Vec<Presentation>,
}

impl Module {
    /// Presentations of the given kind, in catalog order.
    pub fn presentations_of(&self, kind: SessionKind) -> impl Iterator<Item = &Presentation> {
        self.presentations.iter().filter(move |p| p.kind == kind)
    }
}

/// A program offered outside the core module track.
#[derive(Debug, Clone)]
pub struct Program {
    pub id: &'static str,
    pub name: &'static str,
    pub description: &'static str,
    pub color: &'static str,
}

/// A program candidate selectable in the feedback flow.
#[derive(Debug, Clone)]
pub struct Candidate {
    pub id: &'static str,
    pub name: &'static str,
    pub cohort: &'static str,
}

/// Immutable content catalog, built once at startup.
#[derive(Debug, Clone)]
pub struct Catalog {
    modules: Vec<Module>,
    programs: Vec<Program>,
    candidates: Vec<Candidate>,
}

impl Catalog {
    /// Build the catalog from the embedded configuration table.
    pub fn load() -> Self {
        Self {
            modules: data::core_modules(),
            programs: data::outside_core_programs(),
            candidates: data::candidate_roster(),
        }
    }

    /// The full ordered set of core modules.
    pub fn modules(&self) -> &[Module] {
        &self.modules
    }

    /// Look up a core module by identifier.
    pub fn find_module(&self, id: &str) -> Option<&Module> {
        self.modules.iter().find(|m| m.id == id)
    }

    /// Programs offered outside the core track.
    pub fn programs(&self) -> &[Program] {
        &self.programs
    }

    pub fn candidates(&self) -> &[Candidate] {
        &self.candidates
    }

    pub fn find_candidate(&self, id: &str) -> Option<&Candidate> {
        self.candidates.iter().find(|c| c.id == id)
    }
}
