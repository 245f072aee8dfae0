use std::time::Duration;

use editor_portfolio::{
    content::{Anchor, ProjectCategory, SITE},
    motion::MotionConfig,
    state::{ContactWidget, Gallery, NavMenu, ScrollRequest},
};

#[test]
fn filter_to_reels() {
    let mut gallery = Gallery::new(&SITE.registry);
    assert_eq!(gallery.filtered().len(), 6);

    gallery.set_filter(ProjectCategory::Reels);
    let ids: Vec<&str> = gallery.filtered().iter().map(|p| p.id.as_str()).collect();
    assert_eq!(ids, vec!["2", "5"]);
}

#[test]
fn menu_destination_scrolls_after_close() {
    let motion = MotionConfig::default();
    let mut menu = NavMenu::new(motion.menu_close());
    menu.toggle();
    assert!(menu.is_open());

    let anchor: Anchor = "#about".parse().expect("about is a known anchor");
    let request = menu.select_destination(anchor);
    assert!(!menu.is_open());
    assert_eq!(
        request,
        Some(ScrollRequest {
            anchor: Anchor::About,
            delay: Duration::from_millis(500),
        })
    );
    assert_eq!(request.map(|r| r.anchor.selector()), Some("#about"));
}

#[test]
fn contact_appears_after_entrance_delay() {
    let motion = MotionConfig::default();
    let mut widget = ContactWidget::new(motion.contact_entrance());
    let menu_open = false;

    assert!(widget.mount(), "first mount schedules the entrance");
    let delay = widget.entrance_delay();
    assert_eq!(delay, Duration::from_millis(2000));
    assert!(!widget.is_visible(menu_open));

    // virtual clock: nothing fires until the full delay has passed
    let mut elapsed = Duration::ZERO;
    let step = Duration::from_millis(250);
    while elapsed < delay + step {
        elapsed += step;
        if elapsed >= delay {
            widget.entrance_elapsed();
        }
        assert_eq!(widget.is_visible(menu_open), elapsed >= delay);
    }
    assert!(widget.is_visible(false));
    assert!(!widget.is_visible(true));
}

#[test]
fn select_binds_detail_view() {
    let mut gallery = Gallery::new(&SITE.registry);
    assert!(gallery.select("3"));
    let project = gallery.selected_project().expect("project 3 exists");
    assert_eq!(project.title, "Tech Review: The Future");
    assert_eq!(project.client, "TechDaily");

    gallery.dismiss();
    assert!(gallery.selected_project().is_none());
}

#[test]
fn every_category_filters_in_registry_order() {
    let registry = &SITE.registry;
    for category in ProjectCategory::ALL {
        let mut gallery = Gallery::new(registry);
        gallery.set_filter(category);
        let shown = gallery.filtered();
        let expected: Vec<_> = registry
            .projects()
            .iter()
            .filter(|p| category == ProjectCategory::All || p.category == category)
            .collect();
        assert_eq!(shown, expected);
    }
}
