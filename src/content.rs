//! Content store
//!
//! The fixed collections of display records rendered by the page. Order is
//! authored order and every renderer preserves it.

use serde::Serialize;

use crate::models::{
    CapabilityCategory, ExperienceEntry, Link, LinkTarget, PhilosophyEntry, Profile, ProjectRecord,
    SectionId,
};

/// Process-wide, immutable set of display records
#[derive(Debug, Serialize)]
pub struct ContentStore {
    profile: Profile,
    projects: &'static [ProjectRecord],
    capabilities: &'static [CapabilityCategory],
    philosophy: &'static [PhilosophyEntry],
    experience: &'static [ExperienceEntry],
}

impl ContentStore {
    /// The authored portfolio
    pub fn portfolio() -> &'static ContentStore {
        &PORTFOLIO
    }

    pub fn profile(&self) -> &Profile {
        &self.profile
    }

    pub fn projects(&self) -> &'static [ProjectRecord] {
        self.projects
    }

    /// Ordered mapping from category name to skill list
    pub fn capabilities(&self) -> &'static [CapabilityCategory] {
        self.capabilities
    }

    pub fn philosophy(&self) -> &'static [PhilosophyEntry] {
        self.philosophy
    }

    /// Newest position first
    pub fn experience(&self) -> &'static [ExperienceEntry] {
        self.experience
    }
}

static PORTFOLIO: ContentStore = ContentStore {
    profile: PROFILE,
    projects: PROJECTS,
    capabilities: CAPABILITIES,
    philosophy: PHILOSOPHY,
    experience: EXPERIENCE,
};

const PROFILE: Profile = Profile {
    name: "Elise Straub",
    initials: "ES",
    headline: "Senior Frontend Engineer",
    tagline: "I build scalable, maintainable React applications by aligning technical decisions with product goals.",
    about: &[
        "I'm a pragmatic frontend engineer who enjoys solving real product problems. I care deeply about maintainable code, performance, and building software that's easy for teams to evolve over time.",
        "Currently focused on modern React patterns and frontend scalability, with particular interest in state management strategies and real-time collaborative applications.",
    ],
    availability: "Open to senior frontend or staff-track roles.",
    resume: Link {
        label: "Resume",
        target: LinkTarget::Asset("#"),
    },
    contact: &[
        Link {
            label: "Email Me",
            target: LinkTarget::Mail("elise@example.com"),
        },
        Link {
            label: "GitHub",
            target: LinkTarget::External("https://github.com"),
        },
        Link {
            label: "LinkedIn",
            target: LinkTarget::External("https://linkedin.com"),
        },
    ],
    copyright_year: 2025,
    built_with: "Built with Rust.",
};

/// Hero call to action pointing at the project list
pub const VIEW_WORK: Link = Link::anchor("View Work", SectionId::Work);

const PROJECTS: &[ProjectRecord] = &[
    ProjectRecord {
        title: "Multi-Service Web App Migration",
        subtitle: "AngularJS → React",
        context: "Legacy production app with growing performance and scalability issues across multiple service teams.",
        role: "Frontend lead, collaborating with PM and backend engineers.",
        decisions: &[
            "Chose React over Vue for stronger ecosystem and team familiarity",
            "Implemented Redux Toolkit for predictable global state with minimal boilerplate",
            "Designed incremental migration strategy to avoid big-bang rewrite risks",
            "Built WebSocket manager with reconnection logic and message queuing",
        ],
        impact: &[
            "Reduced initial load time by ~40% through code splitting",
            "Enabled independent feature delivery across 3 teams",
            "Improved developer onboarding time from 2 weeks to 3 days",
        ],
        stack: "React, TypeScript, Redux Toolkit, WebSockets, Vite",
    },
    ProjectRecord {
        title: "Design System Implementation",
        subtitle: "Component Library & Theming",
        context: "Inconsistent UI patterns across products leading to duplicated code and poor accessibility.",
        role: "Technical lead for design system architecture and rollout.",
        decisions: &[
            "Built atomic component structure with composition patterns",
            "Implemented CSS-in-JS with theme provider for consistent theming",
            "Created accessibility-first components with ARIA best practices",
            "Established documentation and contribution guidelines",
        ],
        impact: &[
            "Reduced UI bug reports by 60% through standardization",
            "Decreased feature development time by ~30%",
            "Achieved WCAG 2.1 AA compliance across all components",
        ],
        stack: "React, TypeScript, Styled Components, Storybook",
    },
    ProjectRecord {
        title: "Real-Time Collaboration Dashboard",
        subtitle: "Multi-User Data Visualization",
        context: "Analytics platform requiring real-time updates for multiple concurrent users viewing shared data.",
        role: "Senior engineer owning frontend architecture and API design collaboration.",
        decisions: &[
            "Implemented optimistic updates with conflict resolution",
            "Used React Query for intelligent caching and background sync",
            "Built custom virtualization for large datasets (10k+ rows)",
            "Designed error boundary strategy with graceful degradation",
        ],
        impact: &[
            "Maintained 60fps performance with 50+ concurrent users",
            "Reduced API calls by 75% through smart caching",
            "Achieved 99.9% uptime with robust error handling",
        ],
        stack: "React, TypeScript, React Query, D3.js, WebSockets",
    },
];

const CAPABILITIES: &[CapabilityCategory] = &[
    CapabilityCategory {
        name: "Frontend Engineering",
        skills: &[
            "React (Hooks, modern patterns)",
            "JavaScript (ES6+), TypeScript",
            "Component architecture & design systems",
        ],
    },
    CapabilityCategory {
        name: "State & Data",
        skills: &[
            "Redux Toolkit, Context API",
            "React Query, async data flows",
            "WebSocket-based updates",
        ],
    },
    CapabilityCategory {
        name: "Performance & Reliability",
        skills: &[
            "Code splitting & lazy loading",
            "Render optimization, memoization",
            "Initial load performance tuning",
        ],
    },
    CapabilityCategory {
        name: "Accessibility & UX",
        skills: &[
            "Keyboard navigation & focus management",
            "ARIA patterns & screen reader testing",
            "Responsive design & mobile-first",
        ],
    },
    CapabilityCategory {
        name: "Tooling & Process",
        skills: &[
            "Vite, Webpack, build optimization",
            "Git workflows & code review",
            "Incremental refactoring strategies",
        ],
    },
];

const PHILOSOPHY: &[PhilosophyEntry] = &[
    PhilosophyEntry {
        title: "Architecture",
        content: "I favor predictable state flow and clear ownership boundaries. I avoid premature abstraction but refactor aggressively once patterns emerge.",
    },
    PhilosophyEntry {
        title: "Performance",
        content: "I optimize only after measuring, focusing on initial load, render frequency, and network behavior. Fast by default beats optimized by exception.",
    },
    PhilosophyEntry {
        title: "Product Collaboration",
        content: "I work closely with PMs to clarify requirements early and surface technical constraints before they become delivery risks.",
    },
    PhilosophyEntry {
        title: "Code Quality",
        content: "I prioritize readability and maintainability over cleverness, especially in shared code paths. Future developers will thank us.",
    },
];

const EXPERIENCE: &[ExperienceEntry] = &[
    ExperienceEntry {
        role: "Senior Frontend Engineer",
        company: "Company X",
        period: "2021 - Present",
        highlights: &[
            "Owned major user-facing features from design to release",
            "Partnered with PMs to balance scope, UX, and delivery timelines",
            "Led frontend architecture decisions during app scaling",
            "Mentored 4 junior engineers on React best practices",
        ],
    },
    ExperienceEntry {
        role: "Frontend Engineer",
        company: "Company Y",
        period: "2018 - 2021",
        highlights: &[
            "Built core features for SaaS product serving 10k+ users",
            "Drove migration from class components to hooks",
            "Established testing standards and CI/CD practices",
        ],
    },
];
