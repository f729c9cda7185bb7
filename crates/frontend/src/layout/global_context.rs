use leptos::prelude::*;
use std::collections::HashMap;
use web_sys::window;

/// Top-level screens reachable from the sidebar.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum AppView {
    #[default]
    Dashboard,
    Analysis,
    Requirements,
    Design,
    Testing,
    Projects,
}

impl AppView {
    /// Key used in the `?view=` query parameter.
    pub fn as_str(&self) -> &'static str {
        match self {
            AppView::Dashboard => "dashboard",
            AppView::Analysis => "analysis",
            AppView::Requirements => "requirements",
            AppView::Design => "design",
            AppView::Testing => "testing",
            AppView::Projects => "projects",
        }
    }

    /// Parse a query-parameter value; unknown values land on the dashboard.
    pub fn from_str(s: &str) -> Self {
        match s {
            "analysis" => AppView::Analysis,
            "requirements" => AppView::Requirements,
            "design" => AppView::Design,
            "testing" => AppView::Testing,
            "projects" => AppView::Projects,
            _ => AppView::Dashboard,
        }
    }

    pub fn title(&self) -> &'static str {
        match self {
            AppView::Dashboard => "Dashboard",
            AppView::Analysis => "Analysis Sessions",
            AppView::Requirements => "Requirements",
            AppView::Design => "Design Documents",
            AppView::Testing => "Test Cases",
            AppView::Projects => "Projects",
        }
    }

    pub fn icon_name(&self) -> &'static str {
        match self {
            AppView::Dashboard => "dashboard",
            AppView::Analysis => "analysis",
            AppView::Requirements => "requirements",
            AppView::Design => "design",
            AppView::Testing => "testing",
            AppView::Projects => "projects",
        }
    }

    pub fn all() -> [AppView; 6] {
        [
            AppView::Dashboard,
            AppView::Analysis,
            AppView::Requirements,
            AppView::Design,
            AppView::Testing,
            AppView::Projects,
        ]
    }
}

/// Проект, выбранный в шапке приложения
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SelectedProject {
    pub id: String,
    pub code: String,
    pub status: String,
}

/// Filter state for the requirements list.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct RequirementFilter {
    pub module: String,
    pub status: String,
    pub search: String,
}

impl RequirementFilter {
    pub fn is_empty(&self) -> bool {
        self.module.is_empty() && self.status.is_empty() && self.search.trim().is_empty()
    }
}

const SELECTED_PROJECT_KEY: &str = "selected-project-id";

/// Application-wide state, provided once at the app root and threaded to
/// every view through context instead of ambient globals.
#[derive(Clone, Copy)]
pub struct AppGlobalContext {
    pub selected_project: RwSignal<Option<SelectedProject>>,
    pub active_view: RwSignal<AppView>,
    pub requirement_filter: RwSignal<RequirementFilter>,
    pub left_open: RwSignal<bool>,
}

impl AppGlobalContext {
    pub fn new() -> Self {
        Self {
            selected_project: RwSignal::new(None),
            active_view: RwSignal::new(AppView::Dashboard),
            requirement_filter: RwSignal::new(RequirementFilter::default()),
            left_open: RwSignal::new(true),
        }
    }

    /// Project id persisted from a previous visit, if any.
    ///
    /// This is the only durable client-side state; the header selector
    /// resolves it back to a project once the project list has loaded.
    pub fn stored_project_id() -> Option<String> {
        window()
            .and_then(|w| w.local_storage().ok().flatten())
            .and_then(|storage| storage.get_item(SELECTED_PROJECT_KEY).ok().flatten())
    }

    /// Adopt a project as the global working context and persist the choice.
    pub fn select_project(&self, project: Option<SelectedProject>) {
        if let Some(storage) = window().and_then(|w| w.local_storage().ok().flatten()) {
            match &project {
                Some(p) => {
                    let _ = storage.set_item(SELECTED_PROJECT_KEY, &p.id);
                }
                None => {
                    let _ = storage.remove_item(SELECTED_PROJECT_KEY);
                }
            }
        }
        self.selected_project.set(project);
    }

    pub fn selected_project_id(&self) -> Option<String> {
        self.selected_project
            .with(|p| p.as_ref().map(|p| p.id.clone()))
    }

    pub fn navigate(&self, view: AppView) {
        self.active_view.set(view);
    }

    pub fn toggle_left(&self) {
        self.left_open.update(|val| *val = !*val);
    }

    /// Sync the active view with the `?view=` query parameter. Runs once when
    /// the main layout is created.
    pub fn init_router_integration(&self) {
        let search = window()
            .and_then(|w| w.location().search().ok())
            .unwrap_or_default();
        let params: HashMap<String, String> =
            serde_qs::from_str(search.trim_start_matches('?')).unwrap_or_default();
        if let Some(view) = params.get("view") {
            self.active_view.set(AppView::from_str(view));
        }

        let this = *self;
        Effect::new(move |_| {
            let view = this.active_view.get();
            let query_string = serde_qs::to_string(&HashMap::from([(
                "view".to_string(),
                view.as_str().to_string(),
            )]))
            .unwrap_or_default();
            let new_url = format!("?{}", query_string);

            let current_search = window()
                .and_then(|w| w.location().search().ok())
                .unwrap_or_default();

            // Only update URL if it actually changed
            if current_search != new_url {
                if let Some(w) = window() {
                    if let Ok(history) = w.history() {
                        let _ = history.replace_state_with_url(
                            &wasm_bindgen::JsValue::NULL,
                            "",
                            Some(&new_url),
                        );
                    }
                }
            }
        });
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_view_key_round_trip() {
        for view in AppView::all() {
            assert_eq!(AppView::from_str(view.as_str()), view);
        }
    }

    #[test]
    fn test_unknown_view_falls_back_to_dashboard() {
        assert_eq!(AppView::from_str("settings"), AppView::Dashboard);
        assert_eq!(AppView::from_str(""), AppView::Dashboard);
    }

    #[test]
    fn test_filter_is_empty_ignores_whitespace_search() {
        let mut filter = RequirementFilter::default();
        assert!(filter.is_empty());
        filter.search = "  ".into();
        assert!(filter.is_empty());
        filter.module = "FI".into();
        assert!(!filter.is_empty());
    }
}
