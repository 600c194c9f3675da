//! Modal dialogs: project info, certificate viewer and curriculum.
//!
//! All three share one [`DialogStack`]. Scroll-lock is derived from the stack
//! (locked while anything is open) and Escape closes only the topmost dialog,
//! so closing one dialog never unlocks the page under another.

pub mod certificate;
pub mod curriculum;
#[cfg(target_arch = "wasm32")]
pub mod render;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DialogKind {
    Info,
    Certificate,
    Curriculum,
}

impl DialogKind {
    pub fn all() -> &'static [DialogKind] {
        &[
            DialogKind::Info,
            DialogKind::Certificate,
            DialogKind::Curriculum,
        ]
    }
}

/// Open dialogs, bottom to top.
#[derive(Debug, Default)]
pub struct DialogStack {
    open: Vec<DialogKind>,
}

impl DialogStack {
    pub fn new() -> Self {
        Self::default()
    }

    /// Open `kind`, or raise it to the top if it is already open.
    pub fn open(&mut self, kind: DialogKind) {
        self.open.retain(|k| *k != kind);
        self.open.push(kind);
    }

    /// Returns true if `kind` was open.
    pub fn close(&mut self, kind: DialogKind) -> bool {
        let before = self.open.len();
        self.open.retain(|k| *k != kind);
        self.open.len() != before
    }

    /// Close whatever is on top (the Escape key).
    pub fn close_top(&mut self) -> Option<DialogKind> {
        self.open.pop()
    }

    pub fn topmost(&self) -> Option<DialogKind> {
        self.open.last().copied()
    }

    pub fn is_open(&self, kind: DialogKind) -> bool {
        self.open.contains(&kind)
    }

    pub fn scroll_locked(&self) -> bool {
        !self.open.is_empty()
    }
}

/// Body `overflow` value for a lock state.
pub fn body_overflow(locked: bool) -> &'static str {
    if locked {
        "hidden"
    } else {
        ""
    }
}

/// Content of the project info dialog, read from the opener's data attributes.
#[derive(Debug, Clone, PartialEq)]
pub struct InfoContent {
    pub title: String,
    pub description: String,
    pub tags: Option<String>,
}

impl InfoContent {
    /// "Tags: …" line, empty when there are no tags.
    pub fn tags_line(&self) -> String {
        match self.tags.as_deref() {
            Some(tags) if !tags.is_empty() => format!("Tags: {tags}"),
            _ => String::new(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn opening_any_dialog_locks_scroll() {
        for &kind in DialogKind::all() {
            let mut stack = DialogStack::new();
            assert!(!stack.scroll_locked());
            stack.open(kind);
            assert!(stack.scroll_locked());
            assert!(stack.close(kind));
            assert!(!stack.scroll_locked());
        }
    }

    #[test]
    fn escape_closes_topmost_only() {
        let mut stack = DialogStack::new();
        stack.open(DialogKind::Info);
        stack.open(DialogKind::Certificate);
        assert_eq!(stack.close_top(), Some(DialogKind::Certificate));
        assert!(stack.is_open(DialogKind::Info));
        assert!(stack.scroll_locked());
        assert_eq!(stack.close_top(), Some(DialogKind::Info));
        assert!(!stack.scroll_locked());
        assert_eq!(stack.close_top(), None);
    }

    #[test]
    fn closing_one_keeps_lock_for_the_other() {
        let mut stack = DialogStack::new();
        stack.open(DialogKind::Curriculum);
        stack.open(DialogKind::Info);
        stack.close(DialogKind::Curriculum);
        assert!(stack.scroll_locked());
        assert_eq!(stack.topmost(), Some(DialogKind::Info));
    }

    #[test]
    fn reopening_raises_to_top() {
        let mut stack = DialogStack::new();
        stack.open(DialogKind::Info);
        stack.open(DialogKind::Curriculum);
        stack.open(DialogKind::Info);
        assert_eq!(stack.topmost(), Some(DialogKind::Info));
        stack.close_top();
        assert_eq!(stack.topmost(), Some(DialogKind::Curriculum));
        assert_eq!(stack.close_top(), Some(DialogKind::Curriculum));
        assert!(!stack.scroll_locked());
    }

    #[test]
    fn closing_a_closed_dialog_is_a_no_op() {
        let mut stack = DialogStack::new();
        assert!(!stack.close(DialogKind::Certificate));
    }

    #[test]
    fn overflow_values() {
        assert_eq!(body_overflow(true), "hidden");
        assert_eq!(body_overflow(false), "");
    }

    #[test]
    fn tags_line_formats() {
        let mut info = InfoContent {
            title: "Robot".to_string(),
            description: "Line follower".to_string(),
            tags: Some("C++, Arduino".to_string()),
        };
        assert_eq!(info.tags_line(), "Tags: C++, Arduino");
        info.tags = Some(String::new());
        assert_eq!(info.tags_line(), "");
        info.tags = None;
        assert_eq!(info.tags_line(), "");
    }
}
