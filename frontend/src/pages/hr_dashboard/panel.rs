use super::{
    components::{
        active_staff::ActiveStaffTable,
        employee_history::{EmployeeHistoryResults, EmployeeHistorySearch},
        on_leave::OnLeaveList,
        pending_requests::{Decision, PendingRequestsTable},
    },
    utils::DashboardPanel,
    view_model::use_hr_dashboard_view_model,
};
use crate::components::{cards::StatCard, error::InlineErrorMessage};
use crate::pages::vacation_history::VacationHistoryPanel;
use leptos::*;

#[component]
fn DashboardSection(
    panel: DashboardPanel,
    #[prop(into)] title: String,
    visible: Signal<bool>,
    children: Children,
) -> impl IntoView {
    view! {
        <section
            id=panel.element_id()
            class="bg-surface-elevated shadow rounded-lg p-6 space-y-4"
            class:hidden=move || !visible.get()
        >
            <h3 class="text-lg font-medium text-fg">{title}</h3>
            {children()}
        </section>
    }
}

#[component]
pub fn HrDashboardPage() -> impl IntoView {
    let vm = use_hr_dashboard_view_model();
    let counts = vm.counts();
    let hr_user = vm.hr_user;
    let decision_pending = vm.decision_action.pending();
    let on_decide = Callback::new(move |decision: Decision| {
        vm.decide(decision.request_id, decision.status, decision.remarks)
    });
    let selected_staff = vm.selected_staff;
    let history = vm.history;

    view! {
        <div class="space-y-6 px-4">
            <div>
                <h2 class="text-2xl font-bold text-fg">"HR dashboard"</h2>
                <p class="text-sm text-fg-muted">
                    {move || hr_user.get().map(|u| format!("Welcome, {}", u.name)).unwrap_or_default()}
                </p>
            </div>
            <dl class="grid grid-cols-1 gap-5 sm:grid-cols-3">
                <StatCard
                    title="Pending requests"
                    value=Signal::derive(move || counts.get().pending)
                    active=vm.is_visible(DashboardPanel::Pending)
                    on_toggle=Callback::new(move |_| vm.toggle_panel(DashboardPanel::Pending))
                />
                <StatCard
                    title="Total employees"
                    value=Signal::derive(move || counts.get().total_employees)
                    active=vm.is_visible(DashboardPanel::ActiveStaff)
                    on_toggle=Callback::new(move |_| vm.toggle_panel(DashboardPanel::ActiveStaff))
                />
                <StatCard
                    title="On leave"
                    value=Signal::derive(move || counts.get().on_leave)
                    active=vm.is_visible(DashboardPanel::OnLeave)
                    on_toggle=Callback::new(move |_| vm.toggle_panel(DashboardPanel::OnLeave))
                />
            </dl>
            <DashboardSection
                panel=DashboardPanel::Pending
                title="Pending requests"
                visible=vm.is_visible(DashboardPanel::Pending)
            >
                <InlineErrorMessage error=vm.action_error />
                <PendingRequestsTable
                    requests=vm.pending_requests()
                    loading=vm.pending_resource.loading().into()
                    error=vm.pending_error()
                    disabled=decision_pending.into()
                    on_decide=on_decide
                />
            </DashboardSection>
            <DashboardSection
                panel=DashboardPanel::ActiveStaff
                title="Active staff"
                visible=vm.is_visible(DashboardPanel::ActiveStaff)
            >
                <ActiveStaffTable
                    staff=vm.active_staff()
                    loading=vm.active_staff_resource.loading().into()
                    error=vm.active_staff_error()
                    selected=selected_staff
                    on_history=Callback::new(move |id| vm.toggle_staff_history(id))
                />
                <VacationHistoryPanel employee_id=selected_staff title="Vacation history" />
            </DashboardSection>
            <DashboardSection
                panel=DashboardPanel::OnLeave
                title="Staff on leave"
                visible=vm.is_visible(DashboardPanel::OnLeave)
            >
                <OnLeaveList
                    staff=vm.on_leave_staff()
                    loading=vm.on_leave_resource.loading().into()
                    error=vm.on_leave_error()
                />
            </DashboardSection>
            <section class="bg-surface-elevated shadow rounded-lg p-6 space-y-4">
                <h3 class="text-lg font-medium text-fg">"Employee history"</h3>
                <EmployeeHistorySearch
                    input=history.input
                    validation_error=history.error.into()
                    on_search=Callback::new(move |_| history.search())
                />
                <EmployeeHistoryResults
                    groups=history.groups()
                    loading=history.resource.loading().into()
                    searched=history.searched()
                    error=history.load_error()
                />
            </section>
        </div>
    }
}
