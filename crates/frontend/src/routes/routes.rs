use crate::dashboards::d400_overview::ui::OverviewDashboard;
use crate::domain::a001_project::ui::list::ProjectList;
use crate::domain::a002_requirement::ui::list::RequirementList;
use crate::domain::a003_analysis_session::ui::list::AnalysisSessionList;
use crate::domain::a004_design_document::ui::list::DesignDocumentList;
use crate::domain::a005_test_case::ui::list::TestCaseList;
use crate::layout::global_context::{AppGlobalContext, AppView};
use crate::layout::left::navbar::Sidebar;
use crate::layout::Shell;
use leptos::prelude::*;

/// Renders the view selected in the sidebar.
#[component]
fn ActiveView() -> impl IntoView {
    let ctx = use_context::<AppGlobalContext>().expect("AppGlobalContext context not found");

    move || match ctx.active_view.get() {
        AppView::Dashboard => view! { <OverviewDashboard /> }.into_any(),
        AppView::Analysis => view! { <AnalysisSessionList /> }.into_any(),
        AppView::Requirements => view! { <RequirementList /> }.into_any(),
        AppView::Design => view! { <DesignDocumentList /> }.into_any(),
        AppView::Testing => view! { <TestCaseList /> }.into_any(),
        AppView::Projects => view! { <ProjectList /> }.into_any(),
    }
}

#[component]
fn MainLayout() -> impl IntoView {
    let ctx = use_context::<AppGlobalContext>().expect("AppGlobalContext context not found");

    // Initialize query-string integration. This runs once when the component is created.
    ctx.init_router_integration();

    view! {
        <Shell
            left=|| view! { <Sidebar /> }.into_any()
            center=|| view! { <ActiveView /> }.into_any()
        />
    }
}

#[component]
pub fn AppRoutes() -> impl IntoView {
    view! { <MainLayout /> }
}
