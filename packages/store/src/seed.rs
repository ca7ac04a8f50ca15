//! Built-in example portfolio, used as the initial committed user.

use crate::icons::IconKey;
use crate::models::{
    Connect, ProjectArtwork, ProjectLink, ProjectTools, Projects, ProjectsMode, Section,
    SectionData, User, WorkExperience, WorkType,
};

fn tags(values: &[&str]) -> Vec<String> {
    values.iter().map(|v| v.to_string()).collect()
}

fn artwork(id: &str, image: &str, title: &str, description: &str, year: &str) -> ProjectArtwork {
    ProjectArtwork {
        id: id.to_string(),
        image: image.to_string(),
        title: title.to_string(),
        description: description.to_string(),
        year: year.to_string(),
    }
}

fn connect(id: &str, icon: IconKey, media_name: &str, nick_name: &str, link: &str) -> Connect {
    Connect {
        id: id.to_string(),
        icon: Some(icon),
        media_name: media_name.to_string(),
        nick_name: nick_name.to_string(),
        link: link.to_string(),
    }
}

pub fn example_user() -> User {
    let links = vec![
        ProjectLink {
            id: "link-1".to_string(),
            icon: Some("/pokeIcon.png".to_string()),
            cover: Some("/imageWeb.png".to_string()),
            slug: "poke-catch".to_string(),
            title: "Poke Catch".to_string(),
            subtitle: "Catch them all!".to_string(),
            description: "A Pokémon collecting web app. Players get a limited number of rolls \
                every few hours, each revealing a random Pokémon whose rarity decides the catch \
                chance. Catches land in a personal Pokédex with a separate shiny Pokédex, and a \
                global leaderboard ranks every registered player."
                .to_string(),
            link: "https://poke-catch-front.vercel.app".to_string(),
            year: "2024".to_string(),
            tools: ProjectTools {
                frontend: tags(&["React", "TypeScript", "Tailwind CSS", "Material UI"]),
                backend: tags(&["Node.js", "Firebase Auth"]),
                database: tags(&["MongoDB Atlas"]),
            },
        },
        ProjectLink {
            id: "link-2".to_string(),
            icon: Some("/placeholder.webp".to_string()),
            cover: Some("/portf.png".to_string()),
            slug: "portfolio-personal".to_string(),
            title: "Portfolio personal".to_string(),
            subtitle: "Interactive web portfolio".to_string(),
            description: "This portfolio, built as an editable web app. Projects, sections and \
                profile data are added, changed and removed straight from the page, with a \
                modular structure that keeps the content easy to update."
                .to_string(),
            link: "#".to_string(),
            year: "2025".to_string(),
            tools: ProjectTools {
                frontend: tags(&["Rust", "Dioxus", "WebAssembly"]),
                backend: Vec::new(),
                database: Vec::new(),
            },
        },
    ];

    let artwork = vec![
        artwork(
            "art-1",
            "/artwork/lake-sunset-1000x1000.jpg",
            "Lake at sunset",
            "A calm lake ringed by rocks at sunset, the warm sky mirrored on the water.",
            "2024",
        ),
        artwork(
            "art-2",
            "/artwork/caged-tiger-1500x1000.jpg",
            "Tiger in captivity",
            "A close-up of a captive tiger, focused on the fur, the eyes and a quiet sadness.",
            "2023",
        ),
        artwork(
            "art-3",
            "/artwork/leaf-tunnel-1500x1000.jpg",
            "Natural passage",
            "A path covered by leaves forming a natural tunnel, lit by light through the trees.",
            "2025",
        ),
        artwork(
            "art-4",
            "/artwork/snowy-mountain-1800x770.jpg",
            "Snowy mountains",
            "A wide view of a snow-covered summit and the open space around it.",
            "2023",
        ),
        artwork(
            "art-5",
            "/artwork/beach-surfboard-1200x900.jpg",
            "Sunset at the beach",
            "A surfboard resting on the sand while the sun sets over the sea.",
            "2024",
        ),
        artwork(
            "art-6",
            "/artwork/starry-sky-1600x900.jpg",
            "Under the starry sky",
            "The silhouette of a person watching a night sky full of stars.",
            "2025",
        ),
    ];

    User {
        id: "user-1".to_string(),
        name: "Gingy".to_string(),
        sub_title: "Systems Analyst".to_string(),
        avatar: "/avatar.png".to_string(),
        sections: vec![
            Section::new(
                "About",
                SectionData::About(
                    "I am a web developer focused on building modern, interactive applications. \
                     I care about clear, efficient and well structured interfaces, mixing design \
                     and logic into functional products, and I keep learning new technologies \
                     while looking after the user experience."
                        .to_string(),
                ),
            ),
            Section::new(
                "Projects",
                SectionData::Projects(Projects {
                    mode: ProjectsMode::Links,
                    links,
                    artwork,
                }),
            ),
            Section::new(
                "Work Experience",
                SectionData::WorkExp(vec![WorkExperience {
                    id: "work-1".to_string(),
                    start: "2022".to_string(),
                    end: "2023".to_string(),
                    title: "Frontend Developer".to_string(),
                    work_type: Some(WorkType::Remote),
                    description: "Built web interfaces with React and Tailwind.".to_string(),
                }]),
            ),
            Section::new(
                "Connect",
                SectionData::Connect(vec![
                    connect("connect-1", IconKey::Github, "GitHub", "Gingy", "https://github.com/Gingy-Geek"),
                    connect("connect-2", IconKey::Instagram, "Instagram", "Gingy", "https://instagram.com/"),
                    connect(
                        "connect-3",
                        IconKey::Gmail,
                        "Gmail",
                        "gingy@example.com",
                        "mailto:gingy@example.com",
                    ),
                    connect("connect-4", IconKey::Linkedin, "LinkedIn", "Gingy", "https://linkedin.com"),
                ]),
            ),
        ],
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::format::format_slug;

    #[test]
    fn test_seed_slugs_match_titles() {
        let user = example_user();
        for link in &user.projects().unwrap().links {
            assert_eq!(link.slug, format_slug(&link.title));
        }
    }
}
