use crate::api::VacationEvent;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum TimelineSide {
    Left,
    Right,
}

impl TimelineSide {
    pub fn for_index(index: usize) -> Self {
        if index % 2 == 0 {
            TimelineSide::Left
        } else {
            TimelineSide::Right
        }
    }

    pub fn class(&self) -> &'static str {
        match self {
            TimelineSide::Left => "timeline-left",
            TimelineSide::Right => "timeline-right",
        }
    }
}

#[derive(Clone, Debug, PartialEq)]
pub struct YearGroup {
    pub year: String,
    pub events: Vec<VacationEvent>,
}

/// Groups events by year, newest year first. Events keep their order inside
/// a year; years that are not numbers sort last.
pub fn group_by_year(events: &[VacationEvent]) -> Vec<YearGroup> {
    let mut groups: Vec<YearGroup> = Vec::new();
    for event in events {
        let year = event.year.trim();
        match groups.iter_mut().find(|group| group.year == year) {
            Some(group) => group.events.push(event.clone()),
            None => groups.push(YearGroup {
                year: year.to_string(),
                events: vec![event.clone()],
            }),
        }
    }
    groups.sort_by_key(|group| std::cmp::Reverse(group.year.parse::<i32>().ok()));
    groups
}
