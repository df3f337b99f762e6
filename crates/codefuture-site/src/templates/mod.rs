//! Askama Templates
//!
//! Template structs for rendering HTML pages.

use askama::Template;
use askama_web::WebTemplate;

use codefuture_viewport::toc::{TocEntry, TOC};
use codefuture_viewport::{page, ViewportConfig};

use crate::content::{Contact, ContentStore, CourseSummary, CurriculumBlock, FaqEntry, SITE_URL};
use crate::BUILD_VERSION;

/// Landing page template.
#[derive(Template, WebTemplate)]
#[template(path = "home.html")]
pub struct LandingTemplate {
    pub title: &'static str,
    pub courses: &'static [CourseSummary],
    pub tracks: Vec<&'static CurriculumBlock>,
    pub faq: &'static [FaqEntry],
    pub contact: &'static Contact,
    pub site_url: &'static str,
    pub build_version: &'static str,
    pub live_reload: bool,
}

impl LandingTemplate {
    pub fn new(content: &ContentStore) -> Self {
        Self {
            title: "Code the Future — Coding Classes for Ages 7–18",
            courses: content.courses(),
            tracks: content.tracks_in_order(),
            faq: content.faq(),
            contact: content.contact(),
            site_url: SITE_URL,
            build_version: BUILD_VERSION,
            live_reload: cfg!(debug_assertions),
        }
    }
}

/// Curriculum detail page template.
#[derive(Template, WebTemplate)]
#[template(path = "curriculum.html")]
pub struct CurriculumTemplate {
    pub title: String,
    pub track: &'static CurriculumBlock,
    pub tracks: Vec<&'static CurriculumBlock>,
    pub toc: &'static [TocEntry],
    /// JSON configuration the client viewport script reads back.
    pub viewport_config: String,
    pub contact: &'static Contact,
    pub build_version: &'static str,
    pub live_reload: bool,
}

impl CurriculumTemplate {
    pub fn new(track: &'static CurriculumBlock, content: &ContentStore) -> Self {
        let viewport_config = serde_json::to_string(&ViewportConfig::curriculum())
            .expect("viewport config serializes");

        Self {
            title: page::document_title(track.title),
            track,
            tracks: content.tracks_in_order(),
            toc: &TOC,
            viewport_config,
            contact: content.contact(),
            build_version: BUILD_VERSION,
            live_reload: cfg!(debug_assertions),
        }
    }
}
