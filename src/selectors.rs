//! CSS selectors, element ids, class names and data attributes the page
//! markup exposes. Kept in one place so the bindings never spell them twice.

// ── Navigation ──────────────────────────────────────────────────
pub const NAV: &str = ".nav";
pub const NAV_TOGGLE: &str = ".nav-toggle";
pub const NAV_ROUTE_LINKS: &str = "#primaryNav a";
pub const NAV_SPY_LINKS: &str = ".nav ul li a";
pub const NAV_OPEN_CLASS: &str = "open";

// ── Typewriter ──────────────────────────────────────────────────
pub const TYPEWRITER_TEXT: &str = ".typewriter-text";

// ── Projects ────────────────────────────────────────────────────
pub const FILTER_BUTTONS: &str = ".filter";
pub const PROJECT_CARDS: &str = ".project-card";
pub const PROJECTS_TOGGLE: &str = ".projects-toggle-btn";
pub const PROJECT_VISIBLE_CLASS: &str = "project-visible";
pub const PROJECT_HIDDEN_CLASS: &str = "project-hidden";

// ── Group toggles ───────────────────────────────────────────────
pub const AWARD_CARDS: &str = ".award-card";
pub const AWARDS_TOGGLE: &str = ".awards-toggle-btn";
pub const AWARD_VISIBLE_CLASS: &str = "award-visible";
pub const AWARD_HIDDEN_CLASS: &str = "award-hidden";
pub const COMMUNITY_ITEMS: &str = ".community-item";
pub const COMMUNITY_TOGGLE: &str = ".community-toggle-btn";
pub const COMMUNITY_VISIBLE_CLASS: &str = "community-visible";
pub const COMMUNITY_HIDDEN_CLASS: &str = "community-hidden";

// ── Read more panels ────────────────────────────────────────────
pub const PUB_TOGGLE: &str = ".pub-toggle";
pub const PUB_CARD: &str = ".publication-card";
pub const PUB_EXTRA: &str = ".pub-extra";
pub const EXPERIENCE_TOGGLE: &str = ".experience-toggle";
pub const EXPERIENCE_ITEM: &str = ".experience-item";
pub const EXPERIENCE_EXTRA: &str = ".experience-extra";

// ── Dialogs ─────────────────────────────────────────────────────
pub const INFO_MODAL: &str = ".modal:not(.certificate-modal):not(.curriculum-modal)";
pub const INFO_TITLE_ID: &str = "modalTitle";
pub const INFO_DESCRIPTION: &str = ".modal-description";
pub const INFO_TAGS: &str = ".modal-tags";
pub const INFO_OPENERS: &str = ".details";
pub const CERT_MODAL: &str = ".certificate-modal";
pub const CERT_FRAME_ID: &str = "certFrame";
pub const CERT_IMAGE_ID: &str = "certImage";
pub const CERT_DOWNLOAD_ID: &str = "downloadLink";
pub const CERT_OPENERS: &str = ".view-cert-btn";
pub const CURRICULUM_MODAL: &str = ".curriculum-modal";
pub const CURRICULUM_TITLE_ID: &str = "curriculumTitle";
pub const CURRICULUM_CONTENT: &str = ".curriculum-content";
pub const CURRICULUM_OPENERS: &str = ".curriculum-btn";
pub const MODAL_CLOSE: &str = ".modal-close";
pub const MODAL_BACKDROP: &str = ".modal-backdrop";
pub const IS_OPEN_CLASS: &str = "is-open";

// ── Scroll-spy / counters ───────────────────────────────────────
pub const SECTIONS: &str = "section";
pub const ACTIVE_CLASS: &str = "active";
pub const STATS_SECTION: &str = "#stats-counter";
pub const COUNTER: &str = ".counter";

// ── Contact / footer ────────────────────────────────────────────
pub const CONTACT_FORM_ID: &str = "contact-form";
pub const SUBMIT_BUTTON_ID: &str = "submit-btn";
pub const YEAR_ID: &str = "year";

// ── Data attributes ─────────────────────────────────────────────
pub const DATA_CATEGORY: &str = "data-category";
pub const DATA_FILTER: &str = "data-filter";
pub const DATA_TITLE: &str = "data-title";
pub const DATA_DESCRIPTION: &str = "data-description";
pub const DATA_TAGS: &str = "data-tags";
pub const DATA_EDUCATION: &str = "data-education";
pub const DATA_SRC: &str = "data-src";
pub const DATA_TARGET: &str = "data-target";
