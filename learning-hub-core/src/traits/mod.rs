//! Storage abstraction traits

mod topic_source;

pub use topic_source::TopicSource;
