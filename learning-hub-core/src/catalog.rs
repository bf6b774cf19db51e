//! Static section/topic catalog
//!
//! The catalog is the single authority on which topics exist, which one a
//! section opens with, and where their Markdown files are expected to live.

use crate::types::{Section, Topic};

/// Topics owned by a section, in display order
///
/// `Home` owns none; it renders the learning path instead of lessons.
pub fn topics(section: Section) -> &'static [Topic] {
    match section {
        Section::Home => &[],
        Section::History => &[
            Topic { slug: "evolution", title: "Evolution" },
            Topic { slug: "why-containers", title: "Why Containers?" },
            Topic { slug: "before-containers", title: "Before Containers" },
            Topic { slug: "docker-story", title: "The Docker Story" },
        ],
        Section::Basics => &[
            Topic { slug: "what-is-docker", title: "What is Docker?" },
            Topic { slug: "containers-vs-vms", title: "Containers vs VMs" },
            Topic { slug: "images-containers", title: "Images & Containers" },
            Topic { slug: "docker-architecture", title: "Architecture" },
            Topic { slug: "basic-commands", title: "Basic Commands" },
        ],
        Section::Advanced => &[
            Topic { slug: "multi-stage", title: "Multi-Stage Builds" },
            Topic { slug: "docker-compose", title: "Docker Compose" },
            Topic { slug: "networking", title: "Networking" },
            Topic { slug: "volumes", title: "Volumes & Storage" },
            Topic { slug: "optimization", title: "Optimization" },
        ],
        Section::Security => &[
            Topic { slug: "security-fundamentals", title: "Fundamentals" },
            Topic { slug: "vulnerability-scanning", title: "Vulnerability Scanning" },
            Topic { slug: "runtime-security", title: "Runtime Security" },
            Topic { slug: "best-practices", title: "Best Practices" },
            Topic { slug: "compliance", title: "Compliance" },
        ],
        Section::Practical => &[
            Topic { slug: "hello-world", title: "Hello World" },
            Topic { slug: "web-app", title: "Web App" },
            Topic { slug: "database", title: "Database" },
            Topic { slug: "multi-service", title: "Multi-Service" },
            Topic { slug: "production", title: "Production" },
        ],
    }
}

/// The topic a section opens with
///
/// Every lesson section has exactly one default entry; `Home` has none.
pub fn default_topic(section: Section) -> Option<&'static str> {
    match section {
        Section::Home => None,
        Section::History => Some("evolution"),
        Section::Basics => Some("what-is-docker"),
        Section::Advanced => Some("multi-stage"),
        Section::Security => Some("security-fundamentals"),
        Section::Practical => Some("hello-world"),
    }
}

/// Relative path of a topic's Markdown file
pub fn content_path(section: Section, slug: &str) -> String {
    format!("content/{}/{}.md", section.slug(), slug)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn every_lesson_section_has_a_default() {
        for section in Section::lessons() {
            let default = default_topic(*section);
            assert!(default.is_some(), "{} has no default topic", section.slug());
        }
        assert_eq!(default_topic(Section::Home), None);
    }

    #[test]
    fn defaults_are_catalogued() {
        for section in Section::lessons() {
            let default = default_topic(*section).unwrap();
            assert!(
                topics(*section).iter().any(|t| t.slug == default),
                "default {default} missing from {} catalog",
                section.slug()
            );
        }
    }

    #[test]
    fn content_path_layout() {
        assert_eq!(
            content_path(Section::Basics, "what-is-docker"),
            "content/basics/what-is-docker.md"
        );
        assert_eq!(
            content_path(Section::Practical, "unknown-slug"),
            "content/practical/unknown-slug.md"
        );
    }

    #[test]
    fn home_owns_no_topics() {
        assert!(topics(Section::Home).is_empty());
    }
}
