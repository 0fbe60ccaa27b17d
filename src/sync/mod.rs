//! Course reconciliation: normalize both sides, key them by id, keep the
//! shared ids whose records disagree.

pub mod dates;
pub mod diff;
pub mod index;
pub mod normalize;

pub use diff::{changed_fields, common_ids, compute_updates};
pub use index::{CourseIndex, index_by_id};
pub use normalize::{canvas_course_to_sis, jex_course_to_sis};
