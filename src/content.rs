//! Everything the page says. Views only arrange this data.

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct NavItem {
    pub id: &'static str,
    pub label: &'static str,
}

pub const NAV_ITEMS: &[NavItem] = &[
    NavItem { id: "home", label: "Home" },
    NavItem { id: "about", label: "About" },
    NavItem { id: "projects", label: "Projects" },
    NavItem { id: "skills", label: "Skills" },
    NavItem { id: "contact", label: "Contact" },
];

/// Section ids linked from the footer.
pub const FOOTER_LINKS: &[&str] = &["about", "projects", "skills", "contact"];

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Owner {
    pub name: &'static str,
    pub role: &'static str,
    pub tagline: &'static str,
    pub availability: &'static str,
    pub email: &'static str,
}

pub const OWNER: Owner = Owner {
    name: "Arman Wiranda",
    role: "Web Developer",
    tagline: "I craft fast, maintainable web apps with Laravel, PHP, Tailwind CSS, and MySQL. Clean code, clean UI, real results.",
    availability: "Available for freelance",
    email: "hello@example.com",
};

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum SocialKind {
    Github,
    Mail,
    Linkedin,
    Website,
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct SocialLink {
    pub kind: SocialKind,
    pub label: &'static str,
    pub href: &'static str,
}

impl SocialLink {
    /// mailto links stay in the current tab, everything else opens a new one.
    pub fn target(&self) -> Option<&'static str> {
        if self.href.starts_with("mailto:") { None } else { Some("_blank") }
    }
}

pub const SOCIAL_LINKS: &[SocialLink] = &[
    SocialLink { kind: SocialKind::Github, label: "GitHub", href: "https://github.com/" },
    SocialLink { kind: SocialKind::Mail, label: "hello@example.com", href: "mailto:hello@example.com" },
    SocialLink { kind: SocialKind::Linkedin, label: "LinkedIn", href: "https://www.linkedin.com/" },
    SocialLink { kind: SocialKind::Website, label: "Website", href: "https://armanwiranda.com" },
];

pub const HERO_SCENE_URL: &str = "https://prod.spline.design/VJLoxp84lCdVfdZu/scene.splinecode";
pub const SPLINE_VIEWER_SCRIPT: &str = "https://unpkg.com/@splinetool/viewer@1.9.82/build/spline-viewer.js";

pub const ABOUT_IMAGE_URL: &str =
    "https://images.unsplash.com/photo-1555066931-4365d14bab8c?q=80&w=1600&auto=format&fit=crop";
pub const ABOUT_IMAGE_ALT: &str = "Coding desk";
pub const ABOUT_SUMMARY: &str =
    "I specialize in building modern, responsive web applications. My focus is on performance, accessibility, and clean, maintainable code.";

pub const ABOUT_HIGHLIGHTS: &[&str] = &[
    "5+ years of experience",
    "Full-stack with Laravel",
    "Tailwind-first design",
    "MySQL optimization",
];

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Project {
    pub title: &'static str,
    pub stack: &'static [&'static str],
    pub description: &'static str,
    pub link: &'static str,
}

pub const PROJECTS: &[Project] = &[
    Project {
        title: "E-Commerce Platform",
        stack: &["Laravel", "MySQL", "Tailwind"],
        description: "Scalable e-commerce with product management, cart, and checkout.",
        link: "#",
    },
    Project {
        title: "Company Profile CMS",
        stack: &["Laravel", "PHP", "Tailwind"],
        description: "CMS for pages, blog, and media with role-based access.",
        link: "#",
    },
    Project {
        title: "Internal Tools Suite",
        stack: &["Laravel", "MySQL"],
        description: "Dashboards and CRUD micro-apps for operations efficiency.",
        link: "#",
    },
];

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Skill {
    pub name: &'static str,
    /// Percentage, 0 to 100.
    pub level: u8,
}

impl Skill {
    pub fn percent_label(&self) -> String {
        format!("{}%", self.level.min(100))
    }

    pub fn width_style(&self) -> String {
        format!("width: {}%", self.level.min(100))
    }
}

pub const SKILLS: &[Skill] = &[
    Skill { name: "Laravel", level: 90 },
    Skill { name: "PHP", level: 85 },
    Skill { name: "Tailwind CSS", level: 90 },
    Skill { name: "MySQL", level: 80 },
    Skill { name: "REST APIs", level: 80 },
];

pub fn copyright_line(year: i32) -> String {
    format!("© {} {}. All rights reserved.", year, OWNER.name)
}
