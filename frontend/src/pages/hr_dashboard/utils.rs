use crate::api::{ActiveStaffResponse, ApiError, LeaveRequest, StaffSummary};
use crate::utils::date::{inclusive_duration_days, year_of};

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum DashboardPanel {
    Pending,
    ActiveStaff,
    OnLeave,
}

impl DashboardPanel {
    pub fn element_id(&self) -> &'static str {
        match self {
            DashboardPanel::Pending => "pending-panel",
            DashboardPanel::ActiveStaff => "active-staff-panel",
            DashboardPanel::OnLeave => "on-leave-panel",
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct PanelVisibility {
    pub pending: bool,
    pub active_staff: bool,
    pub on_leave: bool,
}

impl Default for PanelVisibility {
    fn default() -> Self {
        Self {
            pending: true,
            active_staff: false,
            on_leave: false,
        }
    }
}

impl PanelVisibility {
    pub fn is_visible(&self, panel: DashboardPanel) -> bool {
        match panel {
            DashboardPanel::Pending => self.pending,
            DashboardPanel::ActiveStaff => self.active_staff,
            DashboardPanel::OnLeave => self.on_leave,
        }
    }

    /// Flips one panel and returns whether it is now shown.
    pub fn toggle(&mut self, panel: DashboardPanel) -> bool {
        let flag = match panel {
            DashboardPanel::Pending => &mut self.pending,
            DashboardPanel::ActiveStaff => &mut self.active_staff,
            DashboardPanel::OnLeave => &mut self.on_leave,
        };
        *flag = !*flag;
        *flag
    }
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct SummaryCounts {
    pub pending: Option<usize>,
    pub total_employees: Option<usize>,
    pub on_leave: Option<usize>,
}

pub fn summary_counts(
    pending: Option<&[LeaveRequest]>,
    active: Option<&ActiveStaffResponse>,
    on_leave: Option<&[StaffSummary]>,
) -> SummaryCounts {
    SummaryCounts {
        pending: pending.map(<[LeaveRequest]>::len),
        total_employees: active.map(|a| {
            a.total_employees
                .map(|total| total as usize)
                .unwrap_or(a.staff.len())
        }),
        on_leave: on_leave.map(<[StaffSummary]>::len).or_else(|| {
            active
                .and_then(|a| a.on_leave_count)
                .map(|count| count as usize)
        }),
    }
}

/// Days shown in the pending table; `-` when either date is unusable.
pub fn duration_label(request: &LeaveRequest) -> String {
    inclusive_duration_days(&request.start_date, &request.end_date)
        .map(|days| days.to_string())
        .unwrap_or_else(|| "-".into())
}

pub fn validate_history_id(raw: &str) -> Result<String, ApiError> {
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        Err(ApiError::validation("Please enter an employee ID"))
    } else {
        Ok(trimmed.to_string())
    }
}

#[derive(Clone, Debug, PartialEq)]
pub struct HistoryYear {
    pub year: Option<i32>,
    pub requests: Vec<LeaveRequest>,
}

impl HistoryYear {
    pub fn label(&self) -> String {
        self.year
            .map(|year| year.to_string())
            .unwrap_or_else(|| "Unknown".into())
    }
}

fn request_year(request: &LeaveRequest) -> Option<i32> {
    request
        .timestamp
        .as_deref()
        .and_then(year_of)
        .or_else(|| year_of(&request.start_date))
}

/// Groups past requests by the year they were filed, newest first. The
/// backend's own year listing runs oldest first; this order is intentional.
pub fn group_history_by_year(requests: Vec<LeaveRequest>) -> Vec<HistoryYear> {
    let mut groups: Vec<HistoryYear> = Vec::new();
    for request in requests {
        let year = request_year(&request);
        match groups.iter_mut().find(|group| group.year == year) {
            Some(group) => group.requests.push(request),
            None => groups.push(HistoryYear {
                year,
                requests: vec![request],
            }),
        }
    }
    groups.sort_by_key(|group| std::cmp::Reverse(group.year));
    groups
}
