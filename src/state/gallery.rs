use crate::content::{Project, ProjectCategory, Registry};

/// Filter and selection state for the project grid.
///
/// The selection borrows its id from the registry, so it can only ever name a
/// project that exists.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Gallery<'a> {
    registry: &'a Registry,
    filter: ProjectCategory,
    selected: Option<&'a str>,
}

impl<'a> Gallery<'a> {
    pub fn new(registry: &'a Registry) -> Self {
        Self {
            registry,
            filter: ProjectCategory::All,
            selected: None,
        }
    }

    pub fn filter(&self) -> ProjectCategory {
        self.filter
    }

    pub fn is_active(&self, category: ProjectCategory) -> bool {
        self.filter == category
    }

    pub fn set_filter(&mut self, category: ProjectCategory) {
        log::debug!("gallery filter: {} -> {}", self.filter, category);
        self.filter = category;
    }

    pub fn filtered(&self) -> Vec<&'a Project> {
        self.registry.filtered(self.filter)
    }

    /// Opens the detail view for `id`. Unknown ids leave the selection alone.
    pub fn select(&mut self, id: &str) -> bool {
        match self.registry.get(id) {
            Some(project) => {
                log::debug!("gallery selected project {}", project.id);
                self.selected = Some(project.id.as_str());
                true
            }
            None => {
                log::warn!("ignoring selection of unknown project id {id:?}");
                false
            }
        }
    }

    pub fn dismiss(&mut self) {
        self.selected = None;
    }

    pub fn selected_id(&self) -> Option<&'a str> {
        self.selected
    }

    pub fn selected_project(&self) -> Option<&'a Project> {
        self.selected.and_then(|id| self.registry.get(id))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::content::SITE;

    #[test]
    fn test_defaults_to_all() {
        let gallery = Gallery::new(&SITE.registry);
        assert_eq!(gallery.filter(), ProjectCategory::All);
        assert_eq!(gallery.filtered().len(), 6);
        assert!(gallery.selected_project().is_none());
    }

    #[test]
    fn test_set_filter() {
        let mut gallery = Gallery::new(&SITE.registry);
        gallery.set_filter(ProjectCategory::Shorts);
        let ids: Vec<&str> = gallery.filtered().iter().map(|p| p.id.as_str()).collect();
        assert_eq!(ids, vec!["4"]);
        assert!(gallery.is_active(ProjectCategory::Shorts));
        assert!(!gallery.is_active(ProjectCategory::All));

        gallery.set_filter(ProjectCategory::All);
        assert_eq!(gallery.filtered().len(), SITE.registry.len());
    }

    #[test]
    fn test_select_and_dismiss() {
        let mut gallery = Gallery::new(&SITE.registry);
        assert!(gallery.select("5"));
        assert_eq!(gallery.selected_id(), Some("5"));
        assert_eq!(
            gallery.selected_project().map(|p| p.title.as_str()),
            Some("Minimalist Workspace")
        );

        gallery.dismiss();
        assert_eq!(gallery.selected_id(), None);

        // dismissing twice is a no-op
        let before = gallery;
        gallery.dismiss();
        assert_eq!(gallery, before);
    }

    #[test]
    fn test_unknown_id_keeps_selection() {
        let mut gallery = Gallery::new(&SITE.registry);
        assert!(!gallery.select("42"));
        assert_eq!(gallery.selected_id(), None);

        gallery.select("1");
        assert!(!gallery.select(""));
        assert_eq!(gallery.selected_id(), Some("1"));
    }

    #[test]
    fn test_filter_change_keeps_selection() {
        let mut gallery = Gallery::new(&SITE.registry);
        gallery.select("2");
        gallery.set_filter(ProjectCategory::YouTube);
        assert_eq!(gallery.selected_id(), Some("2"));
    }

    #[test]
    fn test_selection_always_valid() {
        let mut gallery = Gallery::new(&SITE.registry);
        for category in ProjectCategory::ALL {
            gallery.set_filter(category);
            let ids: Vec<String> = gallery.filtered().iter().map(|p| p.id.clone()).collect();
            for id in ids {
                gallery.select(&id);
                let selected = gallery.selected_id().expect("selection should be set");
                assert!(SITE.registry.get(selected).is_some());
            }
        }
    }
}
