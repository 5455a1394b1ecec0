//! Embedded catalog configuration. Edited by hand when the program changes.

use super::{Candidate, Module, Presentation, Program, SessionKind};

pub(super) fn core_modules() -> Vec<Module> {
    vec![
        Module {
            id: "day-zero",
            name: "Day Zero",
            description: "Foundation and orientation for the Vanguard journey",
            color: "purple",
            presentations: vec![
                Presentation {
                    id: "day-zero-intro",
                    title: "Welcome to Vanguard",
                    kind: SessionKind::Lecture,
                    description: "Introduction to the Vanguard program and its core principles",
                    duration: Some("45 min"),
                    file_url: None,
                },
                Presentation {
                    id: "day-zero-orientation",
                    title: "Program Orientation",
                    kind: SessionKind::Social,
                    description: "Interactive session for program overview and expectations",
                    duration: Some("60 min"),
                    file_url: None,
                },
            ],
        },
        Module {
            id: "ethics",
            name: "Ethics",
            description: "Building moral foundations and ethical decision-making",
            color: "red",
            presentations: vec![
                Presentation {
                    id: "ethics-lecture",
                    title: "Foundations of Ethics",
                    kind: SessionKind::Lecture,
                    description: "Core principles of ethical thinking and moral reasoning",
                    duration: Some("50 min"),
                    file_url: None,
                },
                Presentation {
                    id: "ethics-social",
                    title: "Ethical Dilemmas Workshop",
                    kind: SessionKind::Social,
                    description: "Interactive discussion on real-world ethical challenges",
                    duration: Some("45 min"),
                    file_url: None,
                },
            ],
        },
        Module {
            id: "empathy",
            name: "Empathy",
            description: "Developing emotional intelligence and understanding others",
            color: "pink",
            presentations: vec![
                Presentation {
                    id: "empathy-lecture",
                    title: "The Science of Empathy",
                    kind: SessionKind::Lecture,
                    description: "Understanding empathy from psychological and neurological perspectives",
                    duration: Some("45 min"),
                    file_url: None,
                },
                Presentation {
                    id: "empathy-social",
                    title: "Empathy in Action",
                    kind: SessionKind::Social,
                    description: "Practical exercises in perspective-taking and emotional awareness",
                    duration: Some("60 min"),
                    file_url: None,
                },
            ],
        },
        Module {
            id: "communication",
            name: "Communication",
            description: "Mastering effective verbal and non-verbal communication",
            color: "blue",
            presentations: vec![
                Presentation {
                    id: "communication-lecture",
                    title: "Principles of Effective Communication",
                    kind: SessionKind::Lecture,
                    description: "Fundamentals of clear, persuasive, and impactful communication",
                    duration: Some("55 min"),
                    file_url: None,
                },
                Presentation {
                    id: "communication-social",
                    title: "Communication Skills Practice",
                    kind: SessionKind::Social,
                    description: "Hands-on practice with public speaking and interpersonal communication",
                    duration: Some("75 min"),
                    file_url: None,
                },
            ],
        },
        Module {
            id: "thinking",
            name: "Thinking",
            description: "Developing critical thinking and problem-solving skills",
            color: "indigo",
            presentations: vec![
                Presentation {
                    id: "thinking-lecture",
                    title: "Critical Thinking Framework",
                    kind: SessionKind::Lecture,
                    description: "Systematic approaches to analysis, evaluation, and reasoning",
                    duration: Some("50 min"),
                    file_url: None,
                },
                Presentation {
                    id: "thinking-social",
                    title: "Problem-Solving Workshop",
                    kind: SessionKind::Social,
                    description: "Collaborative problem-solving exercises and case studies",
                    duration: Some("90 min"),
                    file_url: None,
                },
            ],
        },
        Module {
            id: "time-management",
            name: "Time Management",
            description: "Optimizing productivity and work-life balance",
            color: "green",
            presentations: vec![
                Presentation {
                    id: "time-lecture",
                    title: "Time Management Strategies",
                    kind: SessionKind::Lecture,
                    description: "Proven techniques for prioritization and efficiency",
                    duration: Some("40 min"),
                    file_url: None,
                },
                Presentation {
                    id: "time-social",
                    title: "Personal Productivity Planning",
                    kind: SessionKind::Social,
                    description: "Creating personalized time management systems",
                    duration: Some("60 min"),
                    file_url: None,
                },
            ],
        },
        Module {
            id: "the-grand-spectrum",
            name: "The Grand Spectrum",
            description: "Comprehensive worldview and systems thinking",
            color: "yellow",
            presentations: vec![
                Presentation {
                    id: "spectrum-lecture",
                    title: "Understanding Complex Systems",
                    kind: SessionKind::Lecture,
                    description: "Holistic thinking and interconnected perspectives",
                    duration: Some("65 min"),
                    file_url: None,
                },
                Presentation {
                    id: "spectrum-social",
                    title: "Systems Mapping Exercise",
                    kind: SessionKind::Social,
                    description: "Collaborative mapping of complex real-world systems",
                    duration: Some("120 min"),
                    file_url: None,
                },
            ],
        },
    ]
}

pub(super) fn outside_core_programs() -> Vec<Program> {
    vec![
        Program {
            id: "leadership-workshops",
            name: "Leadership Workshops",
            description: "Advanced leadership development sessions",
            color: "orange",
        },
        Program {
            id: "community-service",
            name: "Community Service Projects",
            description: "Hands-on service learning opportunities",
            color: "teal",
        },
        Program {
            id: "mentorship",
            name: "Mentorship Program",
            description: "One-on-one guidance and support",
            color: "cyan",
        },
    ]
}

pub(super) fn candidate_roster() -> Vec<Candidate> {
    vec![
        Candidate {
            id: "amara-osei",
            name: "Amara Osei",
            cohort: "Cohort 2025",
        },
        Candidate {
            id: "daniel-reyes",
            name: "Daniel Reyes",
            cohort: "Cohort 2025",
        },
        Candidate {
            id: "ingrid-halvorsen",
            name: "Ingrid Halvorsen",
            cohort: "Cohort 2025",
        },
        Candidate {
            id: "jun-park",
            name: "Jun Park",
            cohort: "Cohort 2025",
        },
        Candidate {
            id: "leila-haddad",
            name: "Leila Haddad",
            cohort: "Cohort 2026",
        },
        Candidate {
            id: "marcus-webb",
            name: "Marcus Webb",
            cohort: "Cohort 2026",
        },
        Candidate {
            id: "sofia-lindqvist",
            name: "Sofia Lindqvist",
            cohort: "Cohort 2026",
        },
        Candidate {
            id: "tomas-vidal",
            name: "Tomas Vidal",
            cohort: "Cohort 2026",
        },
    ]
}
