use crate::api::LeaveRequest;
use crate::utils::date::year_of;

#[derive(Clone, Debug, Default, PartialEq)]
pub struct PartitionedRequests {
    pub current: Vec<LeaveRequest>,
    pub older: Vec<LeaveRequest>,
}

impl PartitionedRequests {
    pub fn is_empty(&self) -> bool {
        self.current.is_empty() && self.older.is_empty()
    }
}

/// Splits requests on the calendar year of their start date. Start dates
/// that do not parse land in `older`.
pub fn partition_by_year(requests: Vec<LeaveRequest>, current_year: i32) -> PartitionedRequests {
    let (current, older) = requests
        .into_iter()
        .partition(|request| year_of(&request.start_date) == Some(current_year));
    PartitionedRequests { current, older }
}

pub fn can_resubmit(request: &LeaveRequest) -> bool {
    request.status.is_rejected()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::api::LeaveStatus;
    use crate::test_support::helpers::leave_request;

    #[test]
    fn partitions_on_start_year_without_loss() {
        let requests = vec![
            leave_request("a", "2024-01-10", "2024-01-11", LeaveStatus::Approved),
            leave_request("b", "2023-12-30", "2024-01-02", LeaveStatus::Pending),
            leave_request("c", "not-a-date", "", LeaveStatus::Rejected),
            leave_request("d", "2024-06-01", "2024-06-01", LeaveStatus::Rejected),
        ];
        let parts = partition_by_year(requests.clone(), 2024);
        let current: Vec<_> = parts.current.iter().map(|r| r.id.as_str()).collect();
        let older: Vec<_> = parts.older.iter().map(|r| r.id.as_str()).collect();
        assert_eq!(current, ["a", "d"]);
        assert_eq!(older, ["b", "c"]);
        assert_eq!(parts.current.len() + parts.older.len(), requests.len());
    }

    #[test]
    fn empty_input_gives_empty_partition() {
        assert!(partition_by_year(Vec::new(), 2024).is_empty());
    }

    #[test]
    fn only_rejected_requests_can_be_resubmitted() {
        for (status, expected) in [
            (LeaveStatus::Pending, false),
            (LeaveStatus::Approved, false),
            (LeaveStatus::Rejected, true),
            (LeaveStatus::Unknown, false),
        ] {
            let request = leave_request("x", "2024-01-01", "2024-01-01", status);
            assert_eq!(can_resubmit(&request), expected);
        }
    }
}
