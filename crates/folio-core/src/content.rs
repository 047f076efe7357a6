//! Static page content.

use crate::section::Section;

/// Owner details shown in the hero, about and contact sections.
#[derive(Debug, Clone, Copy)]
pub struct Profile {
    pub name: &'static str,
    pub brand: &'static str,
    pub title: &'static str,
    pub tagline: &'static str,
    pub availability: &'static str,
    pub location: &'static str,
    pub email: &'static str,
    pub experience: &'static str,
    pub resume_path: &'static str,
}

pub const PROFILE: Profile = Profile {
    name: "Usama Ikram",
    brand: "Usama.Code",
    title: "Frontend Web Developer",
    tagline: "I craft beautiful, responsive, and user-friendly web experiences using modern \
        technologies. Passionate about creating clean code and stunning designs that make an impact.",
    availability: "Available for freelance work",
    location: "Lahore, Pakistan",
    email: "usama.code404@gmail.com",
    experience: "3+ Months",
    resume_path: "/resume.pdf",
};

/// Animated statistic in the about section.
#[derive(Debug, Clone, Copy)]
pub struct Stat {
    pub value: u32,
    pub suffix: &'static str,
    pub label: &'static str,
}

pub const STATS: &[Stat] = &[
    Stat {
        value: 8,
        suffix: "+",
        label: "Projects Created",
    },
    Stat {
        value: 300,
        suffix: "+",
        label: "Cups of Coffee",
    },
    Stat {
        value: 3,
        suffix: "+",
        label: "Months of Coding",
    },
];

#[derive(Debug, Clone, Copy)]
pub struct Service {
    pub title: &'static str,
    pub description: &'static str,
}

pub const SERVICES: &[Service] = &[
    Service {
        title: "Web Development",
        description: "Building responsive and performant websites using modern frameworks like \
            React, Next.js, and Vue.",
    },
    Service {
        title: "UI/UX Design",
        description: "Creating intuitive and visually appealing user interfaces that provide \
            excellent user experiences.",
    },
    Service {
        title: "Performance Optimization",
        description: "Optimizing web applications for speed, SEO, and accessibility to reach \
            wider audiences.",
    },
];

/// A skill with a proficiency level in percent.
#[derive(Debug, Clone, Copy)]
pub struct Skill {
    pub name: &'static str,
    pub level: u8,
}

#[derive(Debug, Clone, Copy)]
pub struct SkillCategory {
    pub name: &'static str,
    pub skills: &'static [Skill],
}

const fn skill(name: &'static str, level: u8) -> Skill {
    Skill { name, level }
}

pub const SKILL_CATEGORIES: &[SkillCategory] = &[
    SkillCategory {
        name: "Frontend Core",
        skills: &[
            skill("HTML5", 95),
            skill("CSS3", 92),
            skill("JavaScript", 90),
            skill("TypeScript", 50),
        ],
    },
    SkillCategory {
        name: "Frameworks & Libraries",
        skills: &[
            skill("React.js", 92),
            skill("Next.js", 25),
            skill("jQuery", 80),
            skill("Bootstrap", 85),
            skill("Tailwind CSS", 95),
            skill("Framer Motion", 50),
        ],
    },
    SkillCategory {
        name: "Tools & Platforms",
        skills: &[
            skill("Git", 70),
            skill("GitHub", 60),
            skill("VS Code", 92),
            skill("Vercel", 85),
        ],
    },
];

/// Marquee row scrolling left.
pub const TECH_ROW_LEFT: &[&str] = &[
    "HTML5",
    "CSS3",
    "JavaScript",
    "TypeScript",
    "React.js",
    "Next.js",
    "jQuery",
    "Bootstrap",
    "Tailwind CSS",
];

/// Marquee row scrolling right.
pub const TECH_ROW_RIGHT: &[&str] = &[
    "Git", "GitHub", "VS Code", "Vercel", "Node.js", "npm", "Webpack", "Figma",
];

pub const LEARNING_TOPICS: &[&str] = &[
    "React Server Components",
    "Next.js 14",
    "AI Integration",
    "Web Performance",
];

#[derive(Debug, Clone, Copy)]
pub struct ContactInfo {
    pub label: &'static str,
    pub value: &'static str,
    pub href: &'static str,
}

pub const CONTACT_INFO: &[ContactInfo] = &[
    ContactInfo {
        label: "Email",
        value: "usama.code404@gmail.com",
        href: "mailto:usama.code404@gmail.com",
    },
    ContactInfo {
        label: "Phone",
        value: "+923098525906",
        href: "tel:+923098525906",
    },
    ContactInfo {
        label: "Location",
        value: "Lahore, Pakistan",
        href: "#",
    },
];

#[derive(Debug, Clone, Copy)]
pub struct SocialLink {
    pub label: &'static str,
    pub href: &'static str,
}

pub const SOCIAL_LINKS: &[SocialLink] = &[
    SocialLink {
        label: "GitHub",
        href: "https://github.com/chusamaikram",
    },
    SocialLink {
        label: "LinkedIn",
        href: "https://www.linkedin.com/in/usama-ikram-252052182",
    },
    SocialLink {
        label: "Twitter",
        href: "https://twitter.com",
    },
];

/// A footer link. In-page anchors resolve to a [`Section`].
#[derive(Debug, Clone, Copy)]
pub struct FooterLink {
    pub name: &'static str,
    pub href: &'static str,
}

impl FooterLink {
    /// Section this link scrolls to, if it is an in-page anchor.
    pub fn section(&self) -> Option<Section> {
        if self.href.starts_with('#') {
            Section::from_anchor(self.href)
        } else {
            None
        }
    }

    pub fn is_external(&self) -> bool {
        self.href.starts_with("http")
    }
}

#[derive(Debug, Clone, Copy)]
pub struct FooterGroup {
    pub title: &'static str,
    pub links: &'static [FooterLink],
}

const fn link(name: &'static str, href: &'static str) -> FooterLink {
    FooterLink { name, href }
}

pub const FOOTER_GROUPS: &[FooterGroup] = &[
    FooterGroup {
        title: "Quick Links",
        links: &[
            link("Home", "#home"),
            link("About", "#about"),
            link("Skills", "#skills"),
            link("Projects", "#projects"),
            link("Contact", "#contact"),
        ],
    },
    FooterGroup {
        title: "Services",
        links: &[
            link("Web Development", "#about"),
            link("UI/UX Design", "#about"),
            link("Performance Optimization", "#about"),
            link("Consulting", "#contact"),
        ],
    },
    FooterGroup {
        title: "Connect",
        links: &[
            link("GitHub", "https://github.com/chusamaikram"),
            link("LinkedIn", "https://github.com/chusamaikram"),
            link("Twitter", "https://twitter.com"),
            link("Email", "mailto:usama.code404@gmail.com"),
        ],
    },
];

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_skill_levels_are_percentages() {
        for category in SKILL_CATEGORIES {
            for skill in category.skills {
                assert!(skill.level <= 100, "{} out of range", skill.name);
            }
        }
    }

    #[test]
    fn test_footer_anchor_links_resolve() {
        let quick = &FOOTER_GROUPS[0];
        let sections: Vec<_> = quick.links.iter().filter_map(FooterLink::section).collect();
        assert_eq!(sections, Section::ALL.to_vec());

        let mail = link("Email", "mailto:someone@example.com");
        assert_eq!(mail.section(), None);
        assert!(!mail.is_external());
    }
}
