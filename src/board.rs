use serde::ser::{Serialize, SerializeMap, Serializer};

use crate::models::{Complaint, Status};

/// Complaints partitioned into one column per status, in `Status::ORDER`.
/// Every column exists even when empty.
#[derive(Debug, Clone, PartialEq)]
pub struct Board<'a> {
    columns: [(Status, Vec<&'a Complaint>); 3],
}

impl<'a> Board<'a> {
    pub fn get(&self, status: Status) -> &[&'a Complaint] {
        self.columns
            .iter()
            .find(|(s, _)| *s == status)
            .map(|(_, items)| items.as_slice())
            .unwrap_or(&[])
    }

    pub fn columns(&self) -> impl Iterator<Item = (Status, &[&'a Complaint])> + '_ {
        self.columns.iter().map(|(s, items)| (*s, items.as_slice()))
    }

    pub fn len(&self) -> usize {
        self.columns.iter().map(|(_, items)| items.len()).sum()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

impl Serialize for Board<'_> {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(self.columns.len()))?;
        for (status, items) in &self.columns {
            map.serialize_entry(status.key(), items)?;
        }
        map.end()
    }
}

pub fn group_by_status<'a>(filtered: &[&'a Complaint]) -> Board<'a> {
    let mut columns = Status::ORDER.map(|status| (status, Vec::new()));
    for complaint in filtered {
        if let Some((_, items)) = columns.iter_mut().find(|(s, _)| *s == complaint.status) {
            items.push(*complaint);
        }
    }
    Board { columns }
}

/// Totals per status over the unfiltered collection.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, serde::Serialize)]
#[serde(rename_all = "kebab-case")]
pub struct StatusCounts {
    pub pending: usize,
    pub in_progress: usize,
    pub resolved: usize,
}

impl StatusCounts {
    pub fn get(&self, status: Status) -> usize {
        match status {
            Status::Pending => self.pending,
            Status::InProgress => self.in_progress,
            Status::Resolved => self.resolved,
        }
    }

    pub fn total(&self) -> usize {
        self.pending + self.in_progress + self.resolved
    }
}

pub fn status_counts(complaints: &[Complaint]) -> StatusCounts {
    let mut counts = StatusCounts::default();
    for complaint in complaints {
        match complaint.status {
            Status::Pending => counts.pending += 1,
            Status::InProgress => counts.in_progress += 1,
            Status::Resolved => counts.resolved += 1,
        }
    }
    counts
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::filter::{CategoryFilter, ComplaintFilter};
    use crate::models::Category;
    use crate::seed;
    use pretty_assertions::assert_eq;

    fn titles<'a>(items: &[&'a Complaint]) -> Vec<&'a str> {
        items.iter().map(|c| c.title.as_str()).collect()
    }

    #[test]
    fn groups_sample_complaints_by_status() {
        let complaints = seed::sample_complaints();
        let all: Vec<&Complaint> = complaints.iter().collect();
        let board = group_by_status(&all);

        assert_eq!(titles(board.get(Status::Pending)), vec!["Library AC not working"]);
        assert_eq!(
            titles(board.get(Status::InProgress)),
            vec!["Cafeteria food quality", "Parking space shortage"]
        );
        assert_eq!(
            titles(board.get(Status::Resolved)),
            vec!["Broken projector in Room 204", "Wi-Fi connectivity issues"]
        );
    }

    #[test]
    fn every_column_present_when_empty() {
        let board = group_by_status(&[]);
        let keys: Vec<Status> = board.columns().map(|(s, _)| s).collect();
        assert_eq!(keys, Status::ORDER.to_vec());
        assert!(board.is_empty());
    }

    #[test]
    fn buckets_partition_any_filtered_view() {
        let complaints = seed::sample_complaints();
        let filters = [
            ComplaintFilter::default(),
            ComplaintFilter {
                category: CategoryFilter::Only(Category::Equipment),
                ..ComplaintFilter::default()
            },
            ComplaintFilter {
                status: Some(Status::InProgress),
                ..ComplaintFilter::default()
            },
            ComplaintFilter {
                search: "i".to_string(),
                ..ComplaintFilter::default()
            },
        ];

        for filter in filters {
            let filtered = filter.apply(&complaints);
            let board = group_by_status(&filtered);
            assert_eq!(board.len(), filtered.len());

            for complaint in &filtered {
                let hits = board
                    .columns()
                    .filter(|(_, items)| items.iter().any(|c| c.id == complaint.id))
                    .count();
                assert_eq!(hits, 1, "complaint {} in {} buckets", complaint.id, hits);
                assert!(board.get(complaint.status).iter().any(|c| c.id == complaint.id));
            }
        }
    }

    #[test]
    fn serializes_with_status_keys() {
        let board = group_by_status(&[]);
        let json = serde_json::to_value(&board).unwrap();
        assert_eq!(
            json,
            serde_json::json!({"pending": [], "in-progress": [], "resolved": []})
        );
    }

    #[test]
    fn counts_cover_the_full_collection() {
        let counts = status_counts(&seed::sample_complaints());
        assert_eq!(
            counts,
            StatusCounts {
                pending: 1,
                in_progress: 2,
                resolved: 2
            }
        );
        assert_eq!(counts.total(), 5);
        assert_eq!(counts.get(Status::InProgress), 2);
    }
}
