//! Core type definitions

mod section;
mod topic;

pub use section::Section;
pub use topic::{ContentOrigin, Topic, TopicContent};
