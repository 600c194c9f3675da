//! Scroll-spy: highlight the nav link of the section crossing the middle of
//! the viewport.

#[cfg(target_arch = "wasm32")]
pub mod render;

/// One entry of an intersection batch.
#[derive(Debug, Clone, Copy)]
pub struct SpyEntry<'a> {
    /// Section `id`, if it has one.
    pub id: Option<&'a str>,
    pub intersecting: bool,
}

pub struct ScrollSpy {
    hrefs: Vec<Option<String>>,
    active: Option<usize>,
}

impl ScrollSpy {
    /// `hrefs` holds each nav link's `href`, in document order.
    pub fn new(hrefs: Vec<Option<String>>) -> Self {
        Self { hrefs, active: None }
    }

    /// Index of the highlighted link.
    pub fn active(&self) -> Option<usize> {
        self.active
    }

    /// Process one observer batch in reported order. Every intersecting
    /// entry replaces the highlight, so the last one wins; a section with no
    /// matching link clears it. Returns true if the links need repainting.
    pub fn observe(&mut self, entries: &[SpyEntry<'_>]) -> bool {
        let mut touched = false;
        for entry in entries.iter().filter(|e| e.intersecting) {
            self.active = entry.id.and_then(|id| self.link_for(id));
            touched = true;
        }
        touched
    }

    fn link_for(&self, id: &str) -> Option<usize> {
        self.hrefs.iter().position(|href| {
            href.as_deref()
                .and_then(|h| h.strip_prefix('#'))
                .is_some_and(|h| h == id)
        })
    }
}
