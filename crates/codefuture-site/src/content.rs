//! Static Site Content
//!
//! Every piece of copy the site renders lives here as immutable tables:
//! course cards for the landing page, full curriculum blocks per track, the
//! FAQ, and contact details. Defined once at startup, never mutated.

use std::collections::HashMap;

/// External site URL used in QR codes and outbound links.
pub const SITE_URL: &str = "https://mohammad-ahmadi-fard.com";

/// Track rendered when a curriculum id is unknown or absent.
pub const DEFAULT_TRACK: &str = "python-11-14";

/// A course card on the landing page.
#[derive(Debug)]
pub struct CourseSummary {
    pub id: &'static str,
    pub title: &'static str,
    pub level: &'static str,
    pub blurb: &'static str,
    pub bullets: &'static [&'static str],
    pub duration: &'static str,
    /// CSS class selecting the card's gradient wash.
    pub accent: &'static str,
}

/// Full curriculum content for one track.
///
/// The outline always has 12 weekly entries and the fast-track variant 4
/// phases; the array types keep that true by construction.
#[derive(Debug)]
pub struct CurriculumBlock {
    pub id: &'static str,
    pub title: &'static str,
    pub subtitle: &'static str,
    pub audience: &'static str,
    pub tools: &'static str,
    pub outcomes: &'static [&'static str],
    pub projects: &'static [&'static str],
    pub outline12: [&'static str; 12],
    pub capstone_note: Option<&'static str>,
    pub fast8: [&'static str; 4],
}

/// One entry of the landing-page FAQ accordion.
#[derive(Debug)]
pub struct FaqEntry {
    pub question: &'static str,
    pub answer: &'static str,
}

/// Contact details for the booking panel. Opaque strings, not validated.
#[derive(Debug)]
pub struct Contact {
    pub instructor: &'static str,
    pub email: &'static str,
    pub phone_e164: &'static str,
    pub phone_human: &'static str,
    pub whatsapp: &'static str,
}

pub static CONTACT: Contact = Contact {
    instructor: "Mohammad Ahmadi Fard",
    email: "mehmamadfard04@gmail.com",
    phone_e164: "+14168844778",
    phone_human: "(416) 884-4778",
    whatsapp: "https://wa.me/14168844478",
};

static COURSES: [CourseSummary; 3] = [
    CourseSummary {
        id: "python-7-10",
        title: "Python Starter (Ages 7–10)",
        level: "Beginner",
        blurb: "Turtle art, quiz games, and Pygame Zero mini-games. Fun first, concepts second.",
        bullets: &[
            "Loops & decisions by making things move",
            "Turtle art + simple animations",
            "Click-the-Bug & Catch-the-Fruits mini-games",
        ],
        duration: "8 / 12 / 24 weeks • 75–90 min",
        accent: "accent-emerald",
    },
    CourseSummary {
        id: "python-11-14",
        title: "Python Foundations (Ages 11–14)",
        level: "Beginner → Intermediate",
        blurb: "Functions, lists & dictionaries, files/CSV → charts, APIs (JSON), and an arcade game.",
        bullets: &[
            "Build a password generator & quiz app",
            "Plot real data with charts",
            "Pygame arcade capstone",
        ],
        duration: "8 / 12 / 24 weeks • 75–90 min",
        accent: "accent-amber",
    },
    CourseSummary {
        id: "python-15-18",
        title: "Python Pro Track (Ages 15–18)",
        level: "Intermediate",
        blurb: "Clean Python, Git/GitHub, pytest, FastAPI + SQLite, pandas (intro ML) — ship a real project.",
        bullets: &[
            "Publish a tiny API or data story",
            "Testing & docs for confidence",
            "Portfolio-ready capstone",
        ],
        duration: "8 / 12 / 24 weeks • 90 min",
        accent: "accent-violet",
    },
];

static PYTHON_7_10: CurriculumBlock = CurriculumBlock {
    id: "python-7-10",
    title: "Python Starter",
    subtitle: "Create with Turtle, mini-games, and playful logic",
    audience: "Ages 7–10 • Beginner",
    tools: "Thonny or Mu Editor, Python 3.12, Turtle, Pygame Zero, (optional) micro:bit",
    outcomes: &[
        "Understand sequences, loops, conditionals, variables",
        "Read/write simple Python; debug with print and editor tools",
        "Use Turtle and Pygame Zero to draw, animate, and build mini-games",
        "Collaborate in pairs; present a short demo",
    ],
    projects: &[
        "Name Art with Turtle (shapes, colors, loops)",
        "Magic 8-Ball / Quizzer (random, input, lists)",
        "Click-the-Bug game (sprites, timers) with Pygame Zero",
        "Virtual Pet (state & events)",
        "Optional: micro:bit step counter or reaction timer",
    ],
    outline12: [
        "Start Strong — editor basics, print, input, variables; Turtle drawings",
        "Loops — for/while, range; spiral art",
        "Decisions — if/elif/else; quiz game",
        "Events & Random — dice roller; magic 8-ball",
        "Lists — question banks; shuffle choices",
        "Functions — reuse code; Turtle stamp toolkit",
        "Sprites 1 — Pygame Zero setup, images, coordinates",
        "Sprites 2 — mouse/keyboard events; collisions",
        "Game Polish — score, lives, levels; sounds",
        "Capstone Build (part 1)",
        "Capstone Build (part 2)",
        "Showcase & Reflection — mini-expo for families",
    ],
    capstone_note: Some("Capstone ideas: Catch-the-Fruits, Space Dodge, Maze Runner."),
    fast8: [
        "Foundations sprint (Weeks 1–3)",
        "Mini-projects (Weeks 4–5)",
        "Capstone sprint (Weeks 6–7)",
        "Demo day & certificates (Week 8)",
    ],
};

static PYTHON_11_14: CurriculumBlock = CurriculumBlock {
    id: "python-11-14",
    title: "Python Foundations",
    subtitle: "From fundamentals to data & arcade games",
    audience: "Ages 11–14 • Beginner → Intermediate",
    tools: "VS Code or Thonny, Git (local), Pygame Zero/Pygame, matplotlib, (optional) Flask",
    outcomes: &[
        "Confident with functions, lists/dicts, loops, modules, and files",
        "Break problems into algorithms; pseudocode; test and debug",
        "Create 2D games or simple data dashboards",
        "Introduce web apps and APIs",
    ],
    projects: &[
        "Password Generator (random, strings)",
        "CSV Data Explorer (read files, plot with matplotlib)",
        "Weather or Trivia App (JSON API or offline dataset)",
        "Arcade Game (Pygame) with menus & levels",
    ],
    outline12: [
        "Pro Dev Setup — Python 3.12, VS Code, Git intro; coding warm-ups",
        "Deep Dive Variables & Types — strings, f-strings, formatting",
        "Control Flow Mastery — loops, intro to comprehensions",
        "Functions & Modules — parameters, standard library tour",
        "Lists & Dicts — nested data; basic searching/sorting",
        "Files & CSV — read/write; data stories with charts",
        "APIs 101 — JSON; trivia/quiz app (or weather with cached JSON)",
        "Game Dev 1 — sprites, collisions, sound",
        "Game Dev 2 — light physics, scoreboards, power-ups",
        "Capstone Plan — spec, wireframe, backlog",
        "Capstone Build",
        "Shipping Day — play-test + parent demo; reflections",
    ],
    capstone_note: Some(
        "Capstone options: Space Invaders, Platformer, Top-down racer, or Data Story Dashboard.",
    ),
    fast8: [
        "Foundations sprint (Weeks 1–3)",
        "Mini-projects (Weeks 4–5)",
        "Capstone sprint (Weeks 6–7)",
        "Demo day & certificates (Week 8)",
    ],
};

static PYTHON_15_18: CurriculumBlock = CurriculumBlock {
    id: "python-15-18",
    title: "Python Pro Track",
    subtitle: "Ship a real web, game, or data/AI project",
    audience: "Ages 15–18 • Intermediate/Advanced",
    tools: "VS Code, virtualenv, Git/GitHub, pytest, Flask/FastAPI, SQLite, pandas, Pygame, (optional) scikit-learn",
    outcomes: &[
        "Write clean, modular Python with functions, classes, and docstrings",
        "Use Git & GitHub (branches, pull requests); read errors and logs",
        "Build and test a small web API or game or data/AI project",
        "Store data in SQLite; analyze with pandas",
    ],
    projects: &[
        "Web/API Track — Task Tracker API (FastAPI) + minimal client; auth basics; SQLite; pytest",
        "Game Track — Pygame 2D game with state machine, asset pipeline, save/load",
        "Data & AI Track — Data Story (pandas/matplotlib) + intro ML (k-NN or decision tree)",
    ],
    outline12: [
        "Professional Setup — virtualenv, Git workflow, Black/Ruff, README",
        "Core Python Review — iterables, functions, exceptions",
        "OOP Essentials — classes, dataclasses, composition vs. inheritance",
        "Testing 101 — pytest, fixtures, TDD mini-kata",
        "SQLite & ORM-lite — schema, CRUD; persistence layer",
        "Track Start — choose Web/Game/Data; project plan",
        "Track Build 1",
        "Track Build 2",
        "Track Build 3",
        "Polish & Docs — logging, config, simple UI/CLI",
        "Deployment or Packaging — free host or installable",
        "Capstone Expo & Portfolio review",
    ],
    capstone_note: None,
    fast8: [
        "Foundations sprint (Weeks 1–3)",
        "Mini-projects (Weeks 4–5)",
        "Capstone sprint (Weeks 6–7)",
        "Demo day & certificates (Week 8)",
    ],
};

static FAQ: [FaqEntry; 4] = [
    FaqEntry {
        question: "Is prior experience required?",
        answer: "No. We meet students where they are and level up with hands-on projects.",
    },
    FaqEntry {
        question: "What do students need?",
        answer: "A laptop (Windows/Mac/Chromebook). We provide all starter files and safe guidance.",
    },
    FaqEntry {
        question: "How big are classes?",
        answer: "Small groups (6–10) for personalized support and feedback.",
    },
    FaqEntry {
        question: "How do you assess progress?",
        answer: "Weekly mini-demos, skill badges (Loops, Functions, Data, Game Dev, APIs, Testing), and a final showcase.",
    },
];

/// Store for all site content.
#[derive(Debug)]
pub struct ContentStore {
    tracks: HashMap<&'static str, &'static CurriculumBlock>,
    track_order: Vec<&'static str>,
}

impl ContentStore {
    /// Builds the content tables. Called once at startup.
    pub fn load() -> Self {
        let track_order = vec!["python-7-10", "python-11-14", "python-15-18"];
        let mut tracks = HashMap::new();
        for block in [&PYTHON_7_10, &PYTHON_11_14, &PYTHON_15_18] {
            tracks.insert(block.id, block);
        }
        Self { tracks, track_order }
    }

    /// Course cards in display order.
    pub fn courses(&self) -> &'static [CourseSummary] {
        &COURSES
    }

    /// Looks up a curriculum track by id.
    pub fn curriculum(&self, id: &str) -> Option<&'static CurriculumBlock> {
        self.tracks.get(id).copied()
    }

    /// Resolves a route parameter to a track.
    ///
    /// Total: an absent or unknown id yields the default track, never an
    /// error.
    pub fn curriculum_or_default(&self, id: Option<&str>) -> &'static CurriculumBlock {
        id.and_then(|id| self.curriculum(id))
            .unwrap_or_else(|| self.tracks[DEFAULT_TRACK])
    }

    /// All tracks in declared order, for the landing links and the
    /// curriculum page's quick path switcher.
    pub fn tracks_in_order(&self) -> Vec<&'static CurriculumBlock> {
        self.track_order
            .iter()
            .filter_map(|id| self.curriculum(id))
            .collect()
    }

    /// FAQ entries in display order.
    pub fn faq(&self) -> &'static [FaqEntry] {
        &FAQ
    }

    /// Contact details for the booking panel.
    pub fn contact(&self) -> &'static Contact {
        &CONTACT
    }
}

impl Default for ContentStore {
    fn default() -> Self {
        Self::load()
    }
}
