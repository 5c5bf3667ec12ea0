//! Built-in portfolio content.

use super::{
    About, BlogPost, ContactInfo, Content, ExperienceEntry, Link, NavItem, Profile, ProjectEntry,
    Skill, SkillCategory,
};
use crate::models::SectionId;

fn strings(items: &[&str]) -> Vec<String> {
    items.iter().map(|s| s.to_string()).collect()
}

fn link(label: &str, url: &str) -> Link {
    Link {
        label: label.to_string(),
        url: url.to_string(),
    }
}

fn project(title: &str, description: &str, tech: &[&str], featured: bool) -> ProjectEntry {
    ProjectEntry {
        title: title.to_string(),
        description: description.to_string(),
        tech: strings(tech),
        link: Some("#".to_string()),
        featured,
    }
}

fn category(title: &str, skills: &[(&str, u8)]) -> SkillCategory {
    SkillCategory {
        title: title.to_string(),
        skills: skills
            .iter()
            .map(|&(name, level)| Skill {
                name: name.to_string(),
                level,
            })
            .collect(),
    }
}

fn social_links() -> Vec<Link> {
    vec![
        link("LinkedIn", "https://www.linkedin.com/in/rodney-gitonga"),
        link("GitHub", "https://github.com/rodneygitonga"),
        link("Email", "mailto:rodneyroygitonga@gmail.com"),
    ]
}

pub(super) fn builtin() -> Content {
    Content {
        nav: SectionId::ALL
            .iter()
            .map(|id| NavItem {
                id: id.as_str().to_string(),
                label: id.label().to_string(),
            })
            .collect(),
        profile: Profile {
            name: "Rodney Roy Gitonga".to_string(),
            headline: "Innovative IT Professional".to_string(),
            tagline: "Software Development | System Administration | Cloud Technologies"
                .to_string(),
            summary: "Combining technical expertise with practical problem-solving to deliver \
                      exceptional IT solutions and user support."
                .to_string(),
        },
        about: About {
            title: "Innovative IT Solutions Expert".to_string(),
            paragraphs: strings(&[
                "I bring a strong mix of IT support, software development, and system design \
                 expertise. I combine technical know-how with a practical, client-focused \
                 approach to problem-solving. My background in software design includes user \
                 interface planning, system architecture, and translating client needs into \
                 functional solutions.",
                "I'm skilled in network and system administration across Windows and Linux \
                 platforms, and well-versed with cloud tools like Office 365, Google Workspace, \
                 Git, and Docker. My passion lies in ensuring seamless technical operations and \
                 providing exceptional user support.",
                "I thrive in dynamic environments where I can apply my expertise to diagnose and \
                 resolve complex issues, optimize systems, and contribute to a productive \
                 technological ecosystem.",
            ]),
            education: "BSc Information Technology - Zetech University (2024)".to_string(),
            certifications_blurb:
                "15+ Professional Certifications including AWS, ITIL, Power BI, and Cisco"
                    .to_string(),
            links: social_links(),
        },
        experience: vec![
            ExperienceEntry {
                title: "IT Support Specialist Intern".to_string(),
                company: "GULF AFRICAN BANK".to_string(),
                period: "January 2025 – Present".to_string(),
                description: "Providing responsive end-user support and resolving technical \
                              issues to ensure smooth day-to-day operations across banking \
                              systems."
                    .to_string(),
                achievements: strings(&[
                    "Delivered on-site and remote technical support for hardware, software, and peripheral devices",
                    "Assisted in maintenance and monitoring of enterprise systems including core banking applications",
                    "Supported IT Service Desk operations and improved resolution times",
                    "Participated in system updates, patching, and maintenance tasks",
                ]),
            },
            ExperienceEntry {
                title: "Office Accountant & IT Assistant".to_string(),
                company: "VOI WINNERS HOUSING COOPERATIVE SOCIETY LIMITED".to_string(),
                period: "May 2024 – January 2025".to_string(),
                description: "Managed dual responsibilities in financial operations and IT \
                              infrastructure management."
                    .to_string(),
                achievements: strings(&[
                    "Managed daily financial operations including ledger reconciliation and budgeting",
                    "Led IT infrastructure management including network setup and administration",
                    "Designed and implemented digital communication strategies",
                    "Proactively troubleshot IT issues ensuring minimal downtime",
                ]),
            },
            ExperienceEntry {
                title: "Junior Software Developer Intern".to_string(),
                company: "NUMERAL IOT LIMITED".to_string(),
                period: "June 2022 – October 2022".to_string(),
                description: "Developed web applications and provided comprehensive technical \
                              support in a dynamic IoT environment."
                    .to_string(),
                achievements: strings(&[
                    "Developed responsive web applications using AngularJS",
                    "Installed and configured Windows Server environments",
                    "Managed web hosting environments using cPanel",
                    "Performed hardware diagnostics and system optimization",
                ]),
            },
        ],
        projects: vec![
            project(
                "Personal Automation Dashboard",
                "Streamlit-based application centralizing daily tasks with crypto tracking, \
                 weather updates, AI-powered news summarization, and Google Drive integration.",
                &["Python", "Streamlit", "Google Gemini", "APIs", "Google Drive"],
                true,
            ),
            project(
                "E-Commerce Data Analysis & Customer Segmentation",
                "Comprehensive Python script for e-commerce analytics with RFM analysis, sales \
                 trends, and customer behavior insights using synthetic data generation.",
                &["Python", "Data Analysis", "RFM Analysis", "Visualization", "Machine Learning"],
                true,
            ),
            project(
                "Multi-Tool System Monitor",
                "Command-line application for monitoring network traffic, Wi-Fi signal \
                 strength, and clipboard history with cross-platform compatibility.",
                &["Python", "System Monitoring", "Cross-platform", "CLI", "SQLite"],
                true,
            ),
            project(
                "SHOP YETU3D - 3D Printing Platform",
                "Web application for ordering pre-designed 3D prints and submitting custom \
                 design requests with file upload capabilities.",
                &["Web Development", "File Upload", "E-commerce", "Custom Orders"],
                false,
            ),
            project(
                "Daily System Health Reporter",
                "Automated Windows system health monitoring with HTML report generation and \
                 email notifications for IT administrators.",
                &["Python", "Windows Server", "HTML Reports", "Email Automation", "WMI"],
                false,
            ),
            project(
                "Google Drive Sync Script",
                "Python script for automatic folder synchronization with Google Drive using \
                 OAuth 2.0 authentication and recursive directory mirroring.",
                &["Python", "Google Drive API", "OAuth 2.0", "File Sync", "Automation"],
                false,
            ),
            project(
                "Terminal REST Client",
                "Lightweight command-line REST API client supporting multiple HTTP methods, \
                 custom headers, and response formatting.",
                &["Python", "REST API", "CLI", "HTTP Client", "JSON"],
                false,
            ),
            project(
                "Catch the Falling Squares Online",
                "Real-time web-based game with WebSocket communication, featuring \
                 client-server architecture and Pygame backend.",
                &["Python", "Pygame", "WebSockets", "Real-time", "Game Development"],
                false,
            ),
        ],
        skill_categories: vec![
            category(
                "Operating Systems",
                &[
                    ("Windows 10/11", 95),
                    ("Windows Server", 90),
                    ("Linux (Ubuntu/CentOS)", 88),
                    ("macOS", 85),
                ],
            ),
            category(
                "Development",
                &[
                    ("Python", 95),
                    ("JavaScript", 90),
                    ("C#", 85),
                    ("AngularJS", 88),
                ],
            ),
            category(
                "Cloud & DevOps",
                &[("AWS", 85), ("Docker", 80), ("Git", 92), ("Office 365", 95)],
            ),
            category(
                "System Administration",
                &[
                    ("Active Directory", 90),
                    ("Network Administration", 88),
                    ("System Monitoring", 92),
                    ("ITIL Processes", 85),
                ],
            ),
        ],
        certifications: strings(&[
            "AWS Technical Essentials",
            "Power BI for Beginners",
            "Introduction to ITIL® V4",
            "Data Analytics Essentials - Cisco",
            "Endpoint Security - Cisco",
            "CGRC Governance, Risk & Compliance",
            "Python Essentials 1 & 2 - Cisco",
            "JavaScript Essentials 2 - Cisco",
            "Networking Devices Configuration - Cisco",
        ]),
        blog_intro: "Insights, challenges, and solutions from my projects. Deep dives into \
                     technologies, problems I solve, and lessons learned."
            .to_string(),
        blog: vec![
            BlogPost {
                title: "Building My Personal Automation Dashboard with Streamlit and Python"
                    .to_string(),
                date: "June 13, 2025".to_string(),
                category: "Python, Automation, AI".to_string(),
                excerpt: "Walk through the creation of my Personal Automation Dashboard, \
                          showcasing how Python can be leveraged for powerful personal \
                          automation with Streamlit and Google Gemini."
                    .to_string(),
                tags: strings(&[
                    "Python",
                    "Streamlit",
                    "API Integration",
                    "Google Gemini",
                    "Automation",
                ]),
            },
            BlogPost {
                title: "Understanding Network Monitoring: My Multi-Tool System Monitor Project"
                    .to_string(),
                date: "June 20, 2025".to_string(),
                category: "Networking, Python, System Admin".to_string(),
                excerpt: "Dive deep into system monitoring with my Multi-Tool System Monitor. \
                          Discover the challenges of cross-platform compatibility and network \
                          traffic analysis."
                    .to_string(),
                tags: strings(&["Networking", "Python", "System Monitoring", "CLI"]),
            },
            BlogPost {
                title: "Automating Daily Health Checks: The Daily System Health Reporter"
                    .to_string(),
                date: "June 25, 2025".to_string(),
                category: "Automation, Windows, System Admin".to_string(),
                excerpt: "Learn how I built an automated system health reporter for Windows, \
                          covering WMI queries to secure email configurations for proactive IT \
                          management."
                    .to_string(),
                tags: strings(&["Automation", "Windows Server", "Python", "IT Operations"]),
            },
        ],
        contact_intro: "I'm always open to new opportunities and collaborations. Feel free to \
                        reach out!"
            .to_string(),
        contact: ContactInfo {
            email: "rodneyroygitonga@gmail.com".to_string(),
            phone: "+254 705 762 775".to_string(),
            location: "Nairobi, Kenya".to_string(),
            links: social_links(),
        },
        footer: "© 2025 Rodney Roy Gitonga. All rights reserved. Built with Rust & ratatui."
            .to_string(),
    }
}
