use std::collections::HashMap;

use crate::models::SisCourse;

/// Canonical courses keyed by `course_id`.
pub type CourseIndex = HashMap<String, SisCourse>;

/// Keys courses by id. A repeated id keeps the last record seen.
pub fn index_by_id<I>(courses: I) -> CourseIndex
where
    I: IntoIterator<Item = SisCourse>,
{
    courses
        .into_iter()
        .map(|c| (c.course_id.clone(), c))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::CourseStatus;

    fn course(id: &str, name: &str) -> SisCourse {
        SisCourse {
            course_id: id.to_string(),
            short_name: id.to_string(),
            long_name: name.to_string(),
            status: CourseStatus::Active,
            start_date: None,
            end_date: None,
        }
    }

    #[test]
    fn empty_input_gives_empty_index() {
        assert!(index_by_id(Vec::new()).is_empty());
    }

    #[test]
    fn later_duplicate_wins() {
        let index = index_by_id(vec![
            course("C1", "first"),
            course("C2", "other"),
            course("C1", "second"),
        ]);
        assert_eq!(index.len(), 2);
        assert_eq!(index["C1"].long_name, "second");
    }
}
