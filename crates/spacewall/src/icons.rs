//! Technology icon catalog
//!
//! Maps technology names to simpleicons CDN URLs and brand colors. The
//! scene uses the colors for target tints and explosion bursts; the URLs
//! say where a matching icon file can be fetched from.

use scene_engine::render::Color;

/// One catalog entry
pub struct TechIcon {
    /// Display name
    pub name: &'static str,

    /// Icon URL on the simpleicons CDN
    pub url: &'static str,

    /// Brand color used for tinting and bursts
    pub color: Color,
}

/// Known technologies
pub const TECH_ICONS: &[TechIcon] = &[
    TechIcon {
        name: "React",
        url: "https://cdn.simpleicons.org/react/00f0ff",
        color: Color::rgb(0.0, 0.941, 1.0),
    },
    TechIcon {
        name: "TypeScript",
        url: "https://cdn.simpleicons.org/typescript/007acc",
        color: Color::rgb(0.0, 0.478, 0.8),
    },
    TechIcon {
        name: "Next.js",
        url: "https://cdn.simpleicons.org/nextdotjs/ffffff",
        color: Color::rgb(1.0, 1.0, 1.0),
    },
    TechIcon {
        name: "Node.js",
        url: "https://cdn.simpleicons.org/nodedotjs/339933",
        color: Color::rgb(0.2, 0.6, 0.2),
    },
    TechIcon {
        name: "Prisma",
        url: "https://cdn.simpleicons.org/prisma/2d3748",
        color: Color::rgb(0.176, 0.216, 0.282),
    },
    TechIcon {
        name: "Tailwind",
        url: "https://cdn.simpleicons.org/tailwindcss/06b6d4",
        color: Color::rgb(0.024, 0.714, 0.831),
    },
    TechIcon {
        name: "PostgreSQL",
        url: "https://cdn.simpleicons.org/postgresql/4169e1",
        color: Color::rgb(0.255, 0.412, 0.882),
    },
    TechIcon {
        name: "Linux",
        url: "https://cdn.simpleicons.org/linux/fcc624",
        color: Color::rgb(0.988, 0.776, 0.141),
    },
    TechIcon {
        name: "Docker",
        url: "https://cdn.simpleicons.org/docker/2496ed",
        color: Color::rgb(0.141, 0.588, 0.929),
    },
    TechIcon {
        name: "Git",
        url: "https://cdn.simpleicons.org/git/f05032",
        color: Color::rgb(0.941, 0.314, 0.196),
    },
    TechIcon {
        name: "MongoDB",
        url: "https://cdn.simpleicons.org/mongodb/47a248",
        color: Color::rgb(0.278, 0.635, 0.282),
    },
    TechIcon {
        name: "GraphQL",
        url: "https://cdn.simpleicons.org/graphql/e10098",
        color: Color::rgb(0.882, 0.0, 0.596),
    },
    TechIcon {
        name: "Redux",
        url: "https://cdn.simpleicons.org/redux/764abc",
        color: Color::rgb(0.463, 0.29, 0.737),
    },
    TechIcon {
        name: "Python",
        url: "https://cdn.simpleicons.org/python/3776ab",
        color: Color::rgb(0.216, 0.463, 0.671),
    },
    TechIcon {
        name: "Django",
        url: "https://cdn.simpleicons.org/django/092e20",
        color: Color::rgb(0.035, 0.18, 0.125),
    },
    TechIcon {
        name: "AWS",
        url: "https://cdn.simpleicons.org/amazonaws/232f3e",
        color: Color::rgb(0.137, 0.184, 0.243),
    },
];

/// Icon URL for a technology name.
///
/// Unknown names map deterministically to a grey icon on the same CDN.
pub fn icon_url(name: &str) -> String {
    TECH_ICONS
        .iter()
        .find(|t| t.name == name)
        .map_or_else(
            || format!("https://cdn.simpleicons.org/{}/cccccc", slug(name)),
            |t| t.url.to_string(),
        )
}

/// File-name slug for a technology: lowercase alphanumerics only, so
/// "Next.js" becomes "nextjs".
pub fn slug(name: &str) -> String {
    name.chars()
        .filter(char::is_ascii_alphanumeric)
        .collect::<String>()
        .to_lowercase()
}
