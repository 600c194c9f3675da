use std::rc::Rc;

use super::{Group, Panel, PanelKind, COLLAPSED_HEIGHT};
use crate::config::SiteConfig;
use crate::disclosure::ToggleLabels;
use crate::dom;
use crate::error::Result;
use crate::selectors::{
    AWARDS_TOGGLE, AWARD_CARDS, AWARD_HIDDEN_CLASS, AWARD_VISIBLE_CLASS, COMMUNITY_HIDDEN_CLASS,
    COMMUNITY_ITEMS, COMMUNITY_TOGGLE, COMMUNITY_VISIBLE_CLASS, EXPERIENCE_EXTRA,
    EXPERIENCE_ITEM, EXPERIENCE_TOGGLE, IS_OPEN_CLASS, PUB_CARD, PUB_EXTRA, PUB_TOGGLE,
};

const PANEL_KINDS: [PanelKind; 2] = [
    PanelKind {
        toggle: PUB_TOGGLE,
        container: PUB_CARD,
        extra: PUB_EXTRA,
    },
    PanelKind {
        toggle: EXPERIENCE_TOGGLE,
        container: EXPERIENCE_ITEM,
        extra: EXPERIENCE_EXTRA,
    },
];

/// Selectors and labels for one page-level group toggle.
struct GroupKind {
    items: &'static str,
    toggle: &'static str,
    hidden_class: &'static str,
    visible_class: &'static str,
    labels: ToggleLabels,
}

pub fn mount(config: &SiteConfig) -> Result<()> {
    let read_labels = Rc::new(ToggleLabels {
        more: config.labels.read_more.clone(),
        less: config.labels.read_less.clone(),
    });
    for kind in PANEL_KINDS {
        mount_panels(kind, &read_labels)?;
    }

    let groups = [
        GroupKind {
            items: AWARD_CARDS,
            toggle: AWARDS_TOGGLE,
            hidden_class: AWARD_HIDDEN_CLASS,
            visible_class: AWARD_VISIBLE_CLASS,
            labels: ToggleLabels {
                more: config.labels.awards_more.clone(),
                less: config.labels.awards_less.clone(),
            },
        },
        GroupKind {
            items: COMMUNITY_ITEMS,
            toggle: COMMUNITY_TOGGLE,
            hidden_class: COMMUNITY_HIDDEN_CLASS,
            visible_class: COMMUNITY_VISIBLE_CLASS,
            labels: ToggleLabels {
                more: config.labels.community_more.clone(),
                less: config.labels.community_less.clone(),
            },
        },
    ];
    for kind in groups {
        mount_group(kind)?;
    }
    Ok(())
}

fn mount_panels(kind: PanelKind, labels: &Rc<ToggleLabels>) -> Result<()> {
    for button in dom::query_all(kind.toggle)? {
        let Some(container) = button.closest(kind.container)? else {
            continue;
        };
        let Some(extra) = dom::query_in(&container, kind.extra)? else {
            continue;
        };
        dom::set_style(&extra, "max-height", COLLAPSED_HEIGHT)?;

        let mut panel = Panel::new();
        let labels = labels.clone();
        let button_ref = button.clone();
        dom::on_click(&button, move |_| {
            let frame = panel.toggle(extra.scroll_height(), &labels);
            let _ = dom::set_class(&extra, IS_OPEN_CLASS, frame.open);
            let _ = dom::set_style(&extra, "max-height", &frame.max_height);
            dom::set_text(&button_ref, frame.label);
        })?;
    }
    Ok(())
}

fn mount_group(kind: GroupKind) -> Result<()> {
    let Some(toggle) = dom::query(kind.toggle)? else {
        return Ok(());
    };
    let items = dom::query_all(kind.items)?;
    let hidden = items
        .iter()
        .map(|item| item.class_list().contains(kind.hidden_class))
        .collect();
    let mut group = Group::new(hidden, kind.labels);
    if !group.is_collapsible() {
        return Ok(());
    }

    let toggle_ref = toggle.clone();
    dom::on_click(&toggle, move |_| {
        for (i, visible) in group.toggle() {
            let _ = dom::set_class(&items[i], kind.hidden_class, !visible);
            let _ = dom::set_class(&items[i], kind.visible_class, visible);
        }
        dom::set_text(&toggle_ref, group.label());
    })
}
