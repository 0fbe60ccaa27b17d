use crate::models::SisCourse;
use crate::sync::index::CourseIndex;

/// Ids present in both indexes. Order follows `source` iteration and is not
/// meaningful.
pub fn common_ids<'a>(source: &'a CourseIndex, target: &CourseIndex) -> Vec<&'a str> {
    source
        .keys()
        .filter(|id| target.contains_key(id.as_str()))
        .map(String::as_str)
        .collect()
}

/// JEX records for every shared id whose Canvas copy differs.
///
/// Ids known to only one side are left to the create/delete generators.
/// The result is unordered; callers sort before serializing.
pub fn compute_updates(source: &CourseIndex, target: &CourseIndex) -> Vec<SisCourse> {
    common_ids(source, target)
        .into_iter()
        .filter_map(|id| {
            let desired = &source[id];
            let current = &target[id];
            (desired != current).then(|| desired.clone())
        })
        .collect()
}

/// Names of the columns where `current` must change to match `desired`.
pub fn changed_fields(desired: &SisCourse, current: &SisCourse) -> Vec<&'static str> {
    let mut fields = Vec::new();
    if desired.course_id != current.course_id {
        fields.push("course_id");
    }
    if desired.short_name != current.short_name {
        fields.push("short_name");
    }
    if desired.long_name != current.long_name {
        fields.push("long_name");
    }
    if desired.status != current.status {
        fields.push("status");
    }
    if desired.start_date != current.start_date {
        fields.push("start_date");
    }
    if desired.end_date != current.end_date {
        fields.push("end_date");
    }
    fields
}
