//! Built-in placeholder lessons
//!
//! Shown whenever a topic's Markdown file cannot be retrieved. Every
//! catalogued topic has a pre-authored fragment; anything else gets a
//! synthesized stub naming the file the hub expected to find.

use crate::catalog::content_path;
use crate::types::Section;

// ===== History =====

const EVOLUTION: &str = "\
# 📚 Evolution of Containerization

This section will cover the complete history of how containers evolved from mainframes to modern cloud-native applications.

## Key Topics:

- Mainframe era and virtualization
- Unix chroot and process isolation
- Solaris Zones and FreeBSD Jails
- LXC (Linux Containers)
- Docker's revolutionary approach

*Content will be loaded from: content/history/evolution.md*
";

const WHY_CONTAINERS: &str = "\
# 🤔 Why Containers?

Understanding the fundamental problems containers solve and why they're essential in modern software development.

## Problems Solved:

- Environment consistency
- Deployment reliability
- Resource efficiency
- Scalability challenges
- Development workflow
";

const BEFORE_CONTAINERS: &str = "\
# ⏰ Before Containers

How software was deployed and managed before the container revolution.
";

const DOCKER_STORY: &str = "\
# 🐳 The Docker Story

How Docker changed the game and became the de facto standard for containerization.
";

// ===== Basics =====

const WHAT_IS_DOCKER: &str = "\
# 🔰 What is Docker?

Docker is a platform for developing, shipping, and running applications in containers.

## Core Concepts:

- Containerization technology
- Application packaging
- Platform independence
- Resource isolation
";

const CONTAINERS_VS_VMS: &str = "\
# ⚖️ Containers vs Virtual Machines

Understanding the key differences and when to use each approach.
";

const IMAGES_CONTAINERS: &str = "\
# 🖼️ Images & Containers

The relationship between Docker images and running containers.
";

const DOCKER_ARCHITECTURE: &str = "\
# 🏗️ Docker Architecture

How Docker works under the hood.
";

const BASIC_COMMANDS: &str = "\
# ⌨️ Basic Docker Commands

Essential commands to get started with Docker.
";

// ===== Advanced =====

const MULTI_STAGE: &str = "\
# 🚀 Multi-Stage Builds

Advanced techniques for creating optimized Docker images.
";

const DOCKER_COMPOSE: &str = "\
# 🎼 Docker Compose

Orchestrating multi-container applications.
";

const NETWORKING: &str = "\
# 🌐 Docker Networking

Understanding container networking and communication.
";

const VOLUMES: &str = "\
# 💾 Volumes & Storage

Managing persistent data in containers.
";

const OPTIMIZATION: &str = "\
# ⚡ Image Optimization

Techniques for creating smaller, faster Docker images.
";

// ===== Security =====

const SECURITY_FUNDAMENTALS: &str = "\
# 🛡️ Container Security Fundamentals

Essential security concepts for containerized applications.

## Key Areas:

- Container isolation
- Image security
- Runtime protection
- Access control
- Vulnerability management
";

const VULNERABILITY_SCANNING: &str = "\
# 🔍 Vulnerability Scanning

Tools and techniques for finding security issues in containers.
";

const RUNTIME_SECURITY: &str = "\
# 🔄 Runtime Security

Protecting containers while they're running.
";

const BEST_PRACTICES: &str = "\
# ✅ Security Best Practices

Proven strategies for secure container deployments.
";

const COMPLIANCE: &str = "\
# 📋 Compliance & Governance

Meeting regulatory and organizational security requirements.
";

// ===== Practical =====

const HELLO_WORLD: &str = "\
# 💻 Hello World Container

Your first Docker container - step by step.
";

const WEB_APP: &str = "\
# 🌐 Web Application Container

Containerizing a real web application.
";

const DATABASE: &str = "\
# 🗄️ Database Container

Running databases in containers.
";

const MULTI_SERVICE: &str = "\
# 🔗 Multi-Service Application

Complex applications with multiple containers.
";

const PRODUCTION: &str = "\
# 🚀 Production Deployment

Best practices for production container deployments.
";

/// Pre-authored fragment for a known (section, slug) pair
pub fn placeholder(section: Section, slug: &str) -> Option<&'static str> {
    let fragment = match (section, slug) {
        (Section::History, "evolution") => EVOLUTION,
        (Section::History, "why-containers") => WHY_CONTAINERS,
        (Section::History, "before-containers") => BEFORE_CONTAINERS,
        (Section::History, "docker-story") => DOCKER_STORY,

        (Section::Basics, "what-is-docker") => WHAT_IS_DOCKER,
        (Section::Basics, "containers-vs-vms") => CONTAINERS_VS_VMS,
        (Section::Basics, "images-containers") => IMAGES_CONTAINERS,
        (Section::Basics, "docker-architecture") => DOCKER_ARCHITECTURE,
        (Section::Basics, "basic-commands") => BASIC_COMMANDS,

        (Section::Advanced, "multi-stage") => MULTI_STAGE,
        (Section::Advanced, "docker-compose") => DOCKER_COMPOSE,
        (Section::Advanced, "networking") => NETWORKING,
        (Section::Advanced, "volumes") => VOLUMES,
        (Section::Advanced, "optimization") => OPTIMIZATION,

        (Section::Security, "security-fundamentals") => SECURITY_FUNDAMENTALS,
        (Section::Security, "vulnerability-scanning") => VULNERABILITY_SCANNING,
        (Section::Security, "runtime-security") => RUNTIME_SECURITY,
        (Section::Security, "best-practices") => BEST_PRACTICES,
        (Section::Security, "compliance") => COMPLIANCE,

        (Section::Practical, "hello-world") => HELLO_WORLD,
        (Section::Practical, "web-app") => WEB_APP,
        (Section::Practical, "database") => DATABASE,
        (Section::Practical, "multi-service") => MULTI_SERVICE,
        (Section::Practical, "production") => PRODUCTION,

        _ => return None,
    };
    Some(fragment)
}

/// Resolve a fallback body for any (section, slug) pair
///
/// Unknown pairs synthesize a generic stub so the pane is never empty.
pub fn resolve(section: Section, slug: &str) -> String {
    match placeholder(section, slug) {
        Some(fragment) => fragment.to_string(),
        None => format!(
            "# {slug}\n\n\
             Content for this section will be loaded from your Markdown files.\n\n\
             *Expected file: {}*\n",
            content_path(section, slug)
        ),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::topics;

    #[test]
    fn every_catalogued_topic_has_a_fragment() {
        for section in Section::lessons() {
            for topic in topics(*section) {
                assert!(
                    placeholder(*section, topic.slug).is_some(),
                    "no placeholder for {}/{}",
                    section.slug(),
                    topic.slug
                );
            }
        }
    }

    #[test]
    fn known_pair_returns_exact_fragment() {
        let body = resolve(Section::Security, "compliance");
        assert_eq!(body, COMPLIANCE);
        assert!(body.starts_with("# 📋 Compliance & Governance"));
    }

    #[test]
    fn unknown_pair_synthesizes_stub() {
        let body = resolve(Section::Practical, "unknown-slug");
        assert!(body.starts_with("# unknown-slug"));
        assert!(body.contains("content/practical/unknown-slug.md"));
    }

    #[test]
    fn home_has_no_fragments() {
        assert!(placeholder(Section::Home, "evolution").is_none());
        let body = resolve(Section::Home, "anything");
        assert!(body.contains("content/home/anything.md"));
    }

    #[test]
    fn resolution_is_never_empty() {
        for section in Section::all() {
            assert!(!resolve(*section, "").is_empty());
            assert!(!resolve(*section, "x").is_empty());
        }
    }
}
