//! Bundled showcase projects used to seed an empty portfolio

use folio_core::NewProject;

struct ShowcaseProject {
    title: &'static str,
    description: &'static str,
    /// Placeholder image label
    image_text: &'static str,
    demo_url: Option<&'static str>,
    github_url: &'static str,
    tech_stack: &'static [&'static str],
    featured: bool,
}

const PLACEHOLDER_IMAGE_BASE: &str = "https://placehold.co/600x400?text=";

const SHOWCASE: &[ShowcaseProject] = &[
    ShowcaseProject {
        title: "Glow Folio",
        description: "A modern, animated portfolio website built with React, TypeScript, and Tailwind CSS. Features smooth animations, glassmorphism design, and a fully responsive layout.",
        image_text: "Glow+Folio",
        demo_url: Some("https://prashanth-glow-folio.vercel.app"),
        github_url: "https://github.com/Prash9-coder/prashanth-glow-folio",
        tech_stack: &[
            "React",
            "TypeScript",
            "Tailwind CSS",
            "Framer Motion",
            "Express.js",
            "MongoDB",
        ],
        featured: false,
    },
    ShowcaseProject {
        title: "AI-powered Threat Detection SaaS",
        description: "An enterprise-grade SaaS platform for AI-powered cybersecurity threat detection and analysis.",
        image_text: "Threat+Detection",
        demo_url: None,
        github_url: "https://github.com/Prash9-coder/AI-powered-Threat-Detection-SaaS--MVP-",
        tech_stack: &["TypeScript", "React", "Node.js", "Machine Learning", "AWS", "MongoDB"],
        featured: true,
    },
    ShowcaseProject {
        title: "AI English Trainer",
        description: "An AI-powered platform for English learning with conversation practice and grammar assistance.",
        image_text: "English+Trainer",
        demo_url: None,
        github_url: "https://github.com/Prash9-coder/AI_English_Trainer",
        tech_stack: &["TypeScript", "React", "AI/ML", "Node.js", "PostgreSQL"],
        featured: false,
    },
    ShowcaseProject {
        title: "K-Mart E-Commerce",
        description: "A full e-commerce platform with products, cart, payment, and admin dashboard.",
        image_text: "K-Mart",
        demo_url: None,
        github_url: "https://github.com/Prash9-coder/K-Mart",
        tech_stack: &["JavaScript", "React", "Node.js", "Express", "MongoDB", "Stripe"],
        featured: true,
    },
    ShowcaseProject {
        title: "Auravel Webflow Clone",
        description: "A perfect clone of the Auravel Webflow template using React and Tailwind.",
        image_text: "Auravel+Clone",
        demo_url: None,
        github_url: "https://github.com/Prash9-coder/auravel-clone",
        tech_stack: &["TypeScript", "React", "Tailwind CSS", "Responsive Design"],
        featured: false,
    },
    ShowcaseProject {
        title: "English-Telugu AI",
        description: "AI-powered English ↔ Telugu translator with pronunciation and ML models.",
        image_text: "Eng-Telugu+AI",
        demo_url: None,
        github_url: "https://github.com/Prash9-coder/eng-telugu-ai",
        tech_stack: &["TypeScript", "AI/ML", "React", "Node.js", "NLP"],
        featured: false,
    },
    ShowcaseProject {
        title: "Code Agent",
        description: "AI-based code generation and debugging assistant.",
        image_text: "Code+Agent",
        demo_url: None,
        github_url: "https://github.com/Prash9-coder/prash-codeAgent12",
        tech_stack: &["JavaScript", "AI/ML", "Node.js", "React", "Claude API"],
        featured: false,
    },
    ShowcaseProject {
        title: "AI Technical Teacher",
        description: "AI tutor for programming and CS concepts with interactive learning.",
        image_text: "Tech+Teacher",
        demo_url: None,
        github_url: "https://github.com/Prash9-coder/AI_Technical_Teacher",
        tech_stack: &["JavaScript", "React", "Node.js", "AI/ML", "MongoDB"],
        featured: false,
    },
    ShowcaseProject {
        title: "AI Assessment Test Platform",
        description: "AI-based assessment platform with auto-grading and analytics.",
        image_text: "Assessment+Test",
        demo_url: None,
        github_url: "https://github.com/Prash9-coder/AI-Assessment-Test",
        tech_stack: &["JavaScript", "React", "Node.js", "MongoDB", "Chart.js"],
        featured: false,
    },
    ShowcaseProject {
        title: "News Aggregator",
        description: "Mobile app that aggregates news from multiple APIs.",
        image_text: "News+Aggregator",
        demo_url: None,
        github_url: "https://github.com/Prash9-coder/news_aggretor",
        tech_stack: &["Dart", "Flutter", "REST API", "Firebase"],
        featured: false,
    },
    ShowcaseProject {
        title: "JARVIS Desktop Assistant",
        description: "Voice-controlled desktop assistant with automation.",
        image_text: "JARVIS",
        demo_url: None,
        github_url: "https://github.com/Prash9-coder/JARVIS-DESKTOP-ASSISTANT",
        tech_stack: &["Python", "Voice Recognition", "NLP", "Automation"],
        featured: true,
    },
    ShowcaseProject {
        title: "Smile Detector",
        description: "Computer vision model detecting facial smiles.",
        image_text: "Smile+Detector",
        demo_url: None,
        github_url: "https://github.com/Prash9-coder/smiledetecter",
        tech_stack: &["Python", "OpenCV", "Computer Vision", "TensorFlow"],
        featured: false,
    },
    ShowcaseProject {
        title: "E-Commerce Backend (Flask)",
        description: "Flask-based backend with authentication and order management.",
        image_text: "Flask+Backend",
        demo_url: None,
        github_url: "https://github.com/Prash9-coder/E-Commerce-flask-backend",
        tech_stack: &["Python", "Flask", "SQLAlchemy", "PostgreSQL", "JWT"],
        featured: true,
    },
    ShowcaseProject {
        title: "E-Commerce Frontend",
        description: "Frontend for e-commerce with product and cart UI.",
        image_text: "Commerce+Frontend",
        demo_url: None,
        github_url: "https://github.com/Prash9-coder/E-commerce-frontend",
        tech_stack: &["HTML", "CSS", "JavaScript", "Responsive Design"],
        featured: false,
    },
    ShowcaseProject {
        title: "E-Cell Initiative",
        description: "Web application for entrepreneurship cell events and members.",
        image_text: "E-Cell",
        demo_url: Some("https://e-cell-sunstone.vercel.app/"),
        github_url: "https://github.com/Prash9-coder/E-Cell",
        tech_stack: &["JavaScript", "React", "Node.js", "MongoDB"],
        featured: true,
    },
    ShowcaseProject {
        title: "Srivari Seva Ticketing Bot",
        description: "Automated bot for ticket booking.",
        image_text: "Ticketing+Bot",
        demo_url: None,
        github_url: "https://github.com/Prash9-coder/srivari_seva_ticket-booking_bot",
        tech_stack: &["Python", "Bot Framework", "Database", "REST API"],
        featured: false,
    },
    ShowcaseProject {
        title: "State Automation",
        description: "State machine implementation for automation tasks.",
        image_text: "State+Automation",
        demo_url: None,
        github_url: "https://github.com/Prash9-coder/stateautomation",
        tech_stack: &["Python", "State Machines", "Automation"],
        featured: false,
    },
    ShowcaseProject {
        title: "Swift Statement",
        description: "High-performance statement parser.",
        image_text: "Swift+Statement",
        demo_url: None,
        github_url: "https://github.com/Prash9-coder/SwiftStatement",
        tech_stack: &["TypeScript", "Parser", "Performance Optimization"],
        featured: false,
    },
    ShowcaseProject {
        title: "JavaScript Milestones",
        description: "Series of beginner-to-advanced JavaScript milestone projects.",
        image_text: "JS+Milestones",
        demo_url: None,
        github_url: "https://github.com/Prash9-coder/js-milestone-2",
        tech_stack: &["JavaScript", "HTML", "CSS", "DOM"],
        featured: false,
    },
    ShowcaseProject {
        title: "Web Milestones",
        description: "Web development milestone projects.",
        image_text: "Web+Milestones",
        demo_url: None,
        github_url: "https://github.com/Prash9-coder/web-milestone-2",
        tech_stack: &["JavaScript", "HTML", "CSS", "Web Development"],
        featured: false,
    },
    ShowcaseProject {
        title: "AI Post Generator",
        description: "AI tool generating social media posts automatically.",
        image_text: "AI+Post+Generator",
        demo_url: Some("https://ai-post-generator-sage.vercel.app"),
        github_url: "https://github.com/Prash9-coder/ai-post-generator",
        tech_stack: &["JavaScript", "AI/ML", "React", "API Integration"],
        featured: true,
    },
    ShowcaseProject {
        title: "AndroRAT",
        description: "Android Remote Access Tool for research.",
        image_text: "AndroRAT",
        demo_url: None,
        github_url: "https://github.com/Prash9-coder/AndroRAT",
        tech_stack: &["Java", "Android", "Security"],
        featured: false,
    },
    ShowcaseProject {
        title: "Crypton Watch",
        description: "Crypto tracking app with real-time data.",
        image_text: "Crypton+Watch",
        demo_url: None,
        github_url: "https://github.com/Prash9-coder/crypton-watch",
        tech_stack: &["TypeScript", "React", "API Integration", "Finance"],
        featured: true,
    },
];

/// The showcase list, in display order
pub fn showcase_projects() -> Vec<NewProject> {
    SHOWCASE
        .iter()
        .map(|p| NewProject {
            title: p.title.to_string(),
            description: p.description.to_string(),
            image_url: Some(format!("{PLACEHOLDER_IMAGE_BASE}{}", p.image_text)),
            demo_url: p.demo_url.map(String::from),
            github_url: Some(p.github_url.to_string()),
            tech_stack: p.tech_stack.iter().map(|t| t.to_string()).collect(),
            featured: p.featured,
        })
        .collect()
}
