pub struct Feature {
    pub icon: &'static str,
    pub title: &'static str,
    pub description: &'static str,
}

pub struct Screenshot {
    pub src: &'static str,
    pub alt: &'static str,
}

pub struct Testimonial {
    pub quote: &'static str,
    pub author: &'static str,
    pub role: &'static str,
}

pub struct SocialLink {
    pub name: &'static str,
    pub icon: &'static str,
    pub url: &'static str,
}

pub struct LegalItem {
    pub label: Option<&'static str>,
    pub text: &'static str,
}

/// One numbered section of a legal page. Sections without items render
/// `intro` as a single paragraph.
pub struct LegalSection {
    pub title: &'static str,
    pub intro: Option<&'static str>,
    pub items: &'static [LegalItem],
    pub outro: Option<&'static str>,
}

pub const FEATURES: &[Feature] = &[
    Feature {
        icon: "zap",
        title: "Blazing Fast Input",
        description: "Add tasks, set deadlines, and organize with intuitive keyboard shortcuts.",
    },
    Feature {
        icon: "layout-dashboard",
        title: "Pure Minimalist Design",
        description: "A distraction-free interface that gets out of your way and lets you work.",
    },
    Feature {
        icon: "lock",
        title: "Built for Privacy",
        description: "Your tasks and data are always local to your device, no cloud, no tracking.",
    },
    Feature {
        icon: "smartphone",
        title: "Seamless Cross-Platform",
        description: "Access your tasks on desktop and mobile, perfectly synced.",
    },
    Feature {
        icon: "lightbulb",
        title: "Smart Suggestions",
        description: "Tasky learns your habits and suggests tasks to keep you productive.",
    },
    Feature {
        icon: "settings",
        title: "Highly Customizable",
        description: "Tailor themes, fonts, and settings to match your personal workflow.",
    },
];

pub const SCREENSHOTS: &[Screenshot] = &[
    Screenshot {
        src: "/static/img/dashboard.svg",
        alt: "Tasky Dashboard",
    },
    Screenshot {
        src: "/static/img/task.svg",
        alt: "Create a new task",
    },
    Screenshot {
        src: "/static/img/habit.svg",
        alt: "Create a new habit",
    },
    Screenshot {
        src: "/static/img/journal.svg",
        alt: "Journal your day away",
    },
    Screenshot {
        src: "/static/img/recordings.svg",
        alt: "Get all your thoughts in one place",
    },
    Screenshot {
        src: "/static/img/record.svg",
        alt: "Record your thoughts",
    },
    Screenshot {
        src: "/static/img/settings.svg",
        alt: "Settings and preferences",
    },
];

pub const TESTIMONIALS: &[Testimonial] = &[
    Testimonial {
        quote: "Tasky has completely transformed how I manage my day. It's so clean and genuinely helps me focus.",
        author: "Sarah J.",
        role: "Freelance Designer",
    },
    Testimonial {
        quote: "Finally, a task app that isn't bloated. Tasky is intuitive, fast, and exactly what I needed for productivity.",
        author: "Mark T.",
        role: "Software Engineer",
    },
    Testimonial {
        quote: "The minimalist design is a game-changer. I feel less overwhelmed and more in control. Highly recommend!",
        author: "Emily R.",
        role: "Student & Entrepreneur",
    },
];

pub const PLATFORMS: &[&str] = &["iOS (Coming soon)", "Android", "Web (Coming Soon)"];

/// Shown in the contact section.
pub const CONTACT_SOCIALS: &[SocialLink] = &[
    SocialLink {
        name: "X",
        icon: "twitter",
        url: "https://x.com/kwamboka_012?t=4D3jgTfG4Fhf_yHKurgQZw&s=09",
    },
    SocialLink {
        name: "LinkedIn",
        icon: "linkedin",
        url: "https://www.linkedin.com/in/mobisa-kwamboka-a56691223/",
    },
    SocialLink {
        name: "Instagram",
        icon: "instagram",
        url: "https://www.instagram.com/kwambokamobisa/profilecard/?igsh=cGtqcWhmemd5d3Fi",
    },
];

/// Shown in the footer.
pub const FOOTER_SOCIALS: &[SocialLink] = &[
    SocialLink {
        name: "X",
        icon: "twitter",
        url: "https://x.com/kwamboka_012?t=4D3jgTfG4Fhf_yHKurgQZw&s=09",
    },
    SocialLink {
        name: "GitHub",
        icon: "github",
        url: "https://github.com/mobisa-012",
    },
    SocialLink {
        name: "LinkedIn",
        icon: "linkedin",
        url: "https://www.linkedin.com/in/mobisa-kwamboka-a56691223/",
    },
    SocialLink {
        name: "Portfolio",
        icon: "user",
        url: "https://mobisaportfolio.web.app/",
    },
];

const fn paragraph(title: &'static str, text: &'static str) -> LegalSection {
    LegalSection {
        title,
        intro: Some(text),
        items: &[],
        outro: None,
    }
}

const fn item(text: &'static str) -> LegalItem {
    LegalItem { label: None, text }
}

const fn labeled(label: &'static str, text: &'static str) -> LegalItem {
    LegalItem {
        label: Some(label),
        text,
    }
}

pub const TERMS: &[LegalSection] = &[
    paragraph(
        "1. Acceptance of Terms",
        "By accessing or using Tasky, you agree to be bound by these Terms. If you disagree with any part, please discontinue use immediately.",
    ),
    LegalSection {
        title: "2. Data Usage & Personalization",
        intro: Some(
            "To provide and improve our services, Tasky collects and processes certain user data including:",
        ),
        items: &[
            item("Usage patterns and interaction data"),
            item("Task completion history and preferences"),
            item("Device information for optimization"),
        ],
        outro: Some(
            "This data enables personalized features like intelligent task suggestions, productivity insights, and interface customization. You may opt-out of non-essential data collection in Settings.",
        ),
    },
    paragraph(
        "3. Privacy & Data Protection",
        "We implement industry-standard security measures to protect your data. Personal information is never sold to third parties. Anonymous aggregated data may be used for analytical purposes.",
    ),
    paragraph(
        "4. User Responsibilities",
        "You are responsible for maintaining account confidentiality and all activities under your account. Notify us immediately of any unauthorized use.",
    ),
    paragraph(
        "5. Intellectual Property",
        "All app content and features are Tasky's property. You may not reverse engineer, modify, or create derivative works without explicit permission.",
    ),
    paragraph(
        "6. Service Modifications",
        "Tasky reserves the right to modify or discontinue services temporarily or permanently with notice. We may impose limits on certain features.",
    ),
    paragraph(
        "7. Limitation of Liability",
        "Tasky shall not be liable for any indirect, incidental, or consequential damages arising from service use. Our total liability is limited to amounts paid by you, if any.",
    ),
    paragraph(
        "8. Governing Law",
        "These Terms shall be governed by the laws of Kenya without regard to conflict of law principles.",
    ),
    paragraph(
        "9. Changes to Terms",
        "We may revise these Terms at any time. Continued use after changes constitutes acceptance. Material changes will be notified via email or in-app notice.",
    ),
    paragraph(
        "10. Contact Information",
        "For questions about these Terms, contact us at legal@taskyapp.com.",
    ),
];

pub const PRIVACY: &[LegalSection] = &[
    LegalSection {
        title: "1. Information We Collect",
        intro: Some("To provide our productivity services, we collect:"),
        items: &[
            labeled("Account Data", "Email, name (if provided)"),
            labeled("Task Data", "Your tasks, deadlines, and project information"),
            labeled(
                "Usage Data",
                "How you interact with the app (features used, time spent)",
            ),
            labeled("Device Data", "Device type, OS version for compatibility"),
            labeled("Performance Data", "App responsiveness and crash reports"),
        ],
        outro: None,
    },
    LegalSection {
        title: "2. How We Use Your Information",
        intro: None,
        items: &[
            item("Provide and maintain Tasky services"),
            item("Personalize your experience (task suggestions, themes)"),
            item("Improve app performance and features"),
            item("Develop new productivity tools"),
            item("Communicate important service updates"),
            item("Prevent fraud and ensure security"),
        ],
        outro: None,
    },
    LegalSection {
        title: "3. Data Sharing & Disclosure",
        intro: Some("We do not sell your personal data. Limited sharing occurs with:"),
        items: &[
            labeled(
                "Service Providers",
                "Hosting, analytics, and customer support partners",
            ),
            labeled(
                "Legal Requirements",
                "When required by law or to protect our rights",
            ),
            labeled("Business Transfers", "In case of merger or acquisition"),
        ],
        outro: Some("All third parties must comply with equivalent privacy standards."),
    },
    LegalSection {
        title: "4. Data Security",
        intro: Some("We implement:"),
        items: &[
            item("End-to-end encryption for task data"),
            item("Regular security audits"),
            item("Access controls and authentication"),
        ],
        outro: Some(
            "While we implement robust measures, no electronic transmission is 100% secure.",
        ),
    },
    LegalSection {
        title: "5. Your Data Rights",
        intro: Some("You can:"),
        items: &[
            item("Access, update, or delete your information"),
            item("Export your task data anytime"),
            item("Opt-out of non-essential data collection"),
            item("Request information about data processing"),
        ],
        outro: Some("Contact privacy@taskyapp.com to exercise these rights."),
    },
    paragraph(
        "6. Data Retention",
        "We retain your data only as long as necessary to provide services or as required by law. Deleted tasks are purged from our systems within 30 days.",
    ),
    paragraph(
        "7. Children's Privacy",
        "Tasky is not intended for users under 13. We do not knowingly collect data from children.",
    ),
    paragraph(
        "8. International Transfers",
        "Data may be processed outside your country but always protected under GDPR-style standards regardless of location.",
    ),
    paragraph(
        "9. Changes to This Policy",
        "We'll notify you of significant changes via email or in-app notice. Continued use constitutes acceptance.",
    ),
    paragraph(
        "10. Contact Us",
        "For privacy concerns: privacy@taskyapp.com or mail to: Tasky Privacy, 123 Productivity Lane, San Francisco, CA 94107",
    ),
];

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn legal_pages_have_ten_numbered_sections() {
        for sections in [TERMS, PRIVACY] {
            assert_eq!(sections.len(), 10);

            for (index, section) in sections.iter().enumerate() {
                assert!(section.title.starts_with(&format!("{}. ", index + 1)));
                assert!(section.intro.is_some() || !section.items.is_empty());
            }
        }
    }

    #[test]
    fn screenshots_are_embedded_assets() {
        for screenshot in SCREENSHOTS {
            let path = screenshot.src.trim_start_matches("/static");
            assert!(
                crate::assets::exists(path),
                "{} is not embedded",
                screenshot.src
            );
        }
    }
}
