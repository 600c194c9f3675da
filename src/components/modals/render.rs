use std::cell::RefCell;
use std::rc::Rc;

use wasm_bindgen::JsCast;
use web_sys::{Element, HtmlAnchorElement, HtmlElement, HtmlIFrameElement, HtmlImageElement};

use super::certificate::{CertificateView, Media};
use super::{body_overflow, curriculum, DialogKind, DialogStack, InfoContent};
use crate::config::SiteConfig;
use crate::dom;
use crate::error::{PageError, Result};
use crate::selectors::{
    CERT_DOWNLOAD_ID, CERT_FRAME_ID, CERT_IMAGE_ID, CERT_MODAL, CERT_OPENERS, CURRICULUM_CONTENT,
    CURRICULUM_MODAL, CURRICULUM_OPENERS, CURRICULUM_TITLE_ID, DATA_DESCRIPTION, DATA_EDUCATION,
    DATA_SRC, DATA_TAGS, DATA_TITLE, INFO_DESCRIPTION, INFO_MODAL, INFO_OPENERS, INFO_TAGS,
    INFO_TITLE_ID, IS_OPEN_CLASS, MODAL_BACKDROP, MODAL_CLOSE,
};
use crate::task;

struct CertificateParts {
    image: Option<HtmlImageElement>,
    frame: Option<HtmlIFrameElement>,
    download: Option<HtmlAnchorElement>,
}

/// Owns the dialog stack and the dialog roots present on the page.
struct ModalHost {
    stack: RefCell<DialogStack>,
    roots: Vec<(DialogKind, Element)>,
    body: Option<HtmlElement>,
    certificate: CertificateParts,
    certificate_clear_ms: u32,
}

impl ModalHost {
    fn root(&self, kind: DialogKind) -> Option<&Element> {
        self.roots.iter().find(|(k, _)| *k == kind).map(|(_, el)| el)
    }

    fn open(&self, kind: DialogKind) {
        self.stack.borrow_mut().open(kind);
        self.sync();
    }

    fn close(self: &Rc<Self>, kind: DialogKind) {
        if self.stack.borrow_mut().close(kind) {
            self.closed(kind);
        }
    }

    fn close_top(self: &Rc<Self>) {
        let closed = self.stack.borrow_mut().close_top();
        if let Some(kind) = closed {
            self.closed(kind);
        }
    }

    fn closed(self: &Rc<Self>, kind: DialogKind) {
        self.sync();
        if kind == DialogKind::Certificate {
            let host = self.clone();
            task::after(self.certificate_clear_ms, move || {
                // Reopened in the meantime: keep the new document.
                if !host.stack.borrow().is_open(DialogKind::Certificate) {
                    host.clear_certificate();
                }
            });
        }
    }

    /// Reflect the stack onto the page: `is-open` per dialog, body scroll-lock.
    fn sync(&self) {
        let stack = self.stack.borrow();
        for (kind, root) in &self.roots {
            let _ = dom::set_class(root, IS_OPEN_CLASS, stack.is_open(*kind));
        }
        if let Some(body) = &self.body {
            let _ = body
                .style()
                .set_property("overflow", body_overflow(stack.scroll_locked()));
        }
    }

    fn show_certificate(&self, view: &CertificateView) {
        let parts = &self.certificate;
        match view.media {
            Media::Image => {
                if let Some(image) = &parts.image {
                    image.set_src(&view.src);
                }
            }
            Media::Document => {
                if let Some(frame) = &parts.frame {
                    frame.set_src(&view.src);
                }
            }
        }
        if let Some(image) = &parts.image {
            let _ = image.style().set_property("display", view.image_display());
        }
        if let Some(frame) = &parts.frame {
            let _ = frame.style().set_property("display", view.frame_display());
        }
        if let Some(download) = &parts.download {
            download.set_href(&view.src);
        }
    }

    /// Stop the hidden viewer from loading in the background.
    fn clear_certificate(&self) {
        if let Some(frame) = &self.certificate.frame {
            frame.set_src("");
        }
        if let Some(image) = &self.certificate.image {
            image.set_src("");
        }
    }
}

fn by_id_as<T: JsCast>(id: &str) -> Result<Option<T>> {
    Ok(dom::by_id(id)?.and_then(|el| el.dyn_into::<T>().ok()))
}

pub fn mount(config: &SiteConfig) -> Result<()> {
    let mut roots = Vec::new();
    for (kind, selector) in [
        (DialogKind::Info, INFO_MODAL),
        (DialogKind::Certificate, CERT_MODAL),
        (DialogKind::Curriculum, CURRICULUM_MODAL),
    ] {
        if let Some(root) = dom::query(selector)? {
            roots.push((kind, root));
        }
    }

    let host = Rc::new(ModalHost {
        stack: RefCell::new(DialogStack::new()),
        roots,
        body: dom::document()?.body(),
        certificate: CertificateParts {
            image: by_id_as(CERT_IMAGE_ID)?,
            frame: by_id_as(CERT_FRAME_ID)?,
            download: by_id_as(CERT_DOWNLOAD_ID)?,
        },
        certificate_clear_ms: config.certificate_clear_ms,
    });

    for (kind, root) in &host.roots {
        for selector in [MODAL_CLOSE, MODAL_BACKDROP] {
            if let Some(el) = dom::query_in(root, selector)? {
                let host = host.clone();
                let kind = *kind;
                dom::on_click(&el, move |_| host.close(kind))?;
            }
        }
    }

    {
        let host = host.clone();
        dom::on_keydown(&dom::document()?, move |event| {
            if event.key() == "Escape" {
                host.close_top();
            }
        })?;
    }

    mount_info(&host)?;
    mount_certificate(&host)?;
    mount_curriculum(&host)?;
    Ok(())
}

fn mount_info(host: &Rc<ModalHost>) -> Result<()> {
    let Some(root) = host.root(DialogKind::Info) else {
        return Ok(());
    };
    let title = dom::by_id(INFO_TITLE_ID)?;
    let description = dom::query_in(root, INFO_DESCRIPTION)?;
    let tags = dom::query_in(root, INFO_TAGS)?;

    for opener in dom::query_all(INFO_OPENERS)? {
        let host = host.clone();
        let (title, description, tags) = (title.clone(), description.clone(), tags.clone());
        let opener_ref = opener.clone();
        dom::on_click(&opener, move |_| {
            let content = InfoContent {
                title: opener_ref.get_attribute(DATA_TITLE).unwrap_or_default(),
                description: opener_ref.get_attribute(DATA_DESCRIPTION).unwrap_or_default(),
                tags: opener_ref.get_attribute(DATA_TAGS),
            };
            if let Some(el) = &title {
                dom::set_text(el, &content.title);
            }
            if let Some(el) = &description {
                dom::set_text(el, &content.description);
            }
            if let Some(el) = &tags {
                dom::set_text(el, &content.tags_line());
            }
            host.open(DialogKind::Info);
        })?;
    }
    Ok(())
}

fn mount_certificate(host: &Rc<ModalHost>) -> Result<()> {
    for opener in dom::query_all(CERT_OPENERS)? {
        let host = host.clone();
        let opener_ref = opener.clone();
        dom::on_click(&opener, move |event| {
            event.prevent_default();
            if let Err(e) = open_certificate(&host, &opener_ref) {
                web_sys::console::error_1(&format!("certificate: {e}").into());
            }
        })?;
    }
    Ok(())
}

fn open_certificate(host: &ModalHost, opener: &Element) -> Result<()> {
    let src = opener
        .get_attribute(DATA_SRC)
        .ok_or(PageError::MissingAttribute {
            element: CERT_OPENERS,
            attribute: DATA_SRC,
        })?;
    if host.root(DialogKind::Certificate).is_none() {
        return Err(PageError::MissingElement(CERT_MODAL));
    }
    host.show_certificate(&CertificateView::from_path(&src));
    host.open(DialogKind::Certificate);
    Ok(())
}

fn mount_curriculum(host: &Rc<ModalHost>) -> Result<()> {
    let Some(root) = host.root(DialogKind::Curriculum) else {
        return Ok(());
    };
    let title = dom::by_id(CURRICULUM_TITLE_ID)?;
    let content = dom::query_in(root, CURRICULUM_CONTENT)?;

    for opener in dom::query_all(CURRICULUM_OPENERS)? {
        let host = host.clone();
        let (title, content) = (title.clone(), content.clone());
        let opener_ref = opener.clone();
        dom::on_click(&opener, move |_| {
            let Some(curriculum) = opener_ref
                .get_attribute(DATA_EDUCATION)
                .and_then(|key| curriculum::lookup(&key))
            else {
                return;
            };
            if let Some(el) = &title {
                dom::set_text(el, curriculum.title);
            }
            if let Some(el) = &content {
                el.set_inner_html(&curriculum.to_html());
            }
            host.open(DialogKind::Curriculum);
        })?;
    }
    Ok(())
}
