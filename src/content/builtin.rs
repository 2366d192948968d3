// Built-in portfolio content (same data as content/portfolio.json)

use super::model::*;
use crate::reveal::SectionId;

const GITHUB_URL: &str = "https://github.com/ashishoo1";

fn strings(items: &[&str]) -> Vec<String> {
    items.iter().map(|s| s.to_string()).collect()
}

impl Default for PortfolioContent {
    fn default() -> Self {
        Self {
            profile: Profile {
                name: "Ashish Pandey".to_string(),
                title: "Full Stack Developer".to_string(),
                bio: "Passionate full-stack developer with 2 years of experience building scalable web applications. \
                      Specialized in creating innovative solutions using modern technologies."
                    .to_string(),
                avatar_url: "https://images.unsplash.com/photo-1507003211169-0a1dd7228f2d?w=400&h=400&fit=crop&crop=faces"
                    .to_string(),
                avatar_alt: None,
                actions: vec![
                    HeroAction {
                        label: "Get in Touch".to_string(),
                        target: SectionId::Contact,
                        primary: false,
                    },
                    HeroAction {
                        label: "View Projects".to_string(),
                        target: SectionId::Projects,
                        primary: true,
                    },
                ],
            },
            skills_heading: "Technical Expertise".to_string(),
            skills: vec![
                SkillCategory {
                    label: "Frontend".to_string(),
                    skills: strings(&[
                        "JavaScript",
                        "TypeScript",
                        "React.js",
                        "Next.js",
                        "Tailwind CSS",
                    ]),
                },
                SkillCategory {
                    label: "Backend".to_string(),
                    skills: strings(&["Node.js", "Express.js", "RESTful APIs", "GraphQL"]),
                },
                SkillCategory {
                    label: "Database".to_string(),
                    skills: strings(&["MySQL", "PostgreSQL", "MongoDB", "Redis"]),
                },
                SkillCategory {
                    label: "Tools".to_string(),
                    skills: strings(&["Git", "GitHub", "Docker", "Vercel", "AWS"]),
                },
            ],
            projects_heading: "Featured Projects".to_string(),
            projects: vec![
                Project {
                    title: "E-Commerce Platform".to_string(),
                    description: "Full-stack e-commerce solution with real-time inventory management".to_string(),
                    tech: strings(&["Next.js", "Node.js", "PostgreSQL", "Redis"]),
                    link: GITHUB_URL.to_string(),
                },
                Project {
                    title: "Task Management System".to_string(),
                    description: "Collaborative project management tool with real-time updates".to_string(),
                    tech: strings(&["React", "Express.js", "MongoDB", "Socket.io"]),
                    link: GITHUB_URL.to_string(),
                },
                Project {
                    title: "Social Media Dashboard".to_string(),
                    description: "Analytics dashboard for social media metrics".to_string(),
                    tech: strings(&["Next.js", "TypeScript", "Chart.js", "MySQL"]),
                    link: GITHUB_URL.to_string(),
                },
            ],
            contact: ContactInfo {
                heading: "Get in Touch".to_string(),
                channels: vec![
                    ContactChannel {
                        kind: ChannelKind::Email,
                        label: "krashish2001@gmail.com".to_string(),
                        href: "mailto:krashish2001@gmail.com".to_string(),
                    },
                    // Display text and dial target differ; both kept as given
                    ContactChannel {
                        kind: ChannelKind::Phone,
                        label: "+91 8128406537".to_string(),
                        href: "tel:+1234567890".to_string(),
                    },
                    ContactChannel {
                        kind: ChannelKind::Github,
                        label: "GitHub".to_string(),
                        href: GITHUB_URL.to_string(),
                    },
                    ContactChannel {
                        kind: ChannelKind::Linkedin,
                        label: "LinkedIn".to_string(),
                        href: "https://linkedin.com/in/ashishpandey-1".to_string(),
                    },
                ],
            },
            form: ContactForm {
                fields: vec![
                    FormField {
                        kind: FieldKind::Text,
                        placeholder: "Your Name".to_string(),
                    },
                    FormField {
                        kind: FieldKind::Email,
                        placeholder: "Your Email".to_string(),
                    },
                    FormField {
                        kind: FieldKind::Textarea,
                        placeholder: "Your Message".to_string(),
                    },
                ],
                submit_label: "Send Message".to_string(),
            },
        }
    }
}
