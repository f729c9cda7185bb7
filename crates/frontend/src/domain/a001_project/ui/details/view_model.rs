use crate::domain::a001_project::api;
use contracts::domain::a001_project::aggregate::ProjectDto;
use leptos::prelude::*;
use std::rc::Rc;

/// ViewModel for the project creation form
#[derive(Clone, Copy)]
pub struct ProjectDetailsVm {
    pub form: RwSignal<ProjectDto>,
    pub error: RwSignal<Option<String>>,
    pub is_saving: RwSignal<bool>,
}

impl ProjectDetailsVm {
    pub fn new() -> Self {
        Self {
            form: RwSignal::new(ProjectDto::default()),
            error: RwSignal::new(None),
            is_saving: RwSignal::new(false),
        }
    }

    pub fn is_form_valid(&self) -> bool {
        let f = self.form.get();
        !f.code.trim().is_empty() && !f.name.trim().is_empty()
    }

    /// Save form data to server
    pub fn save_command(&self, on_saved: Rc<dyn Fn(())>) {
        let current = self.form.get_untracked();

        if current.code.trim().is_empty() || current.name.trim().is_empty() {
            self.error
                .set(Some("Project Code and Name are required".to_string()));
            return;
        }

        let error = self.error;
        let is_saving = self.is_saving;
        is_saving.set(true);
        wasm_bindgen_futures::spawn_local(async move {
            match api::save_project(&current).await {
                Ok(_) => {
                    is_saving.set(false);
                    (on_saved)(());
                }
                Err(e) => {
                    is_saving.set(false);
                    error.set(Some(e));
                }
            }
        });
    }
}
