use yew::prelude::*;

use crate::chat::contact::ContactChat;
use crate::components::about_tabs::{AboutTab, AboutTabs};
use crate::components::carousel::{Carousel, Testimonial};
use crate::components::footer::Footer;
use crate::components::particles::Particles;
use crate::components::project_filter::{Project, ProjectGrid};
use crate::components::reveal::{Reveal, RevealKind};
use crate::components::typing::TypingText;
use crate::config;
use crate::dom;
use crate::HeroReveal;

const TECH_ICONS: &[(&str, &str)] = &[
    ("Rust", "🦀"),
    ("TypeScript", "🟦"),
    ("Python", "🐍"),
    ("Docker", "🐳"),
];

const SKILLS: &[(&str, &[&str])] = &[
    ("Frontend", &["React", "Yew", "TypeScript", "CSS"]),
    ("Backend", &["Rust", "Node.js", "Python", "PostgreSQL"]),
    ("AI & Data", &["PyTorch", "LangChain", "Pandas"]),
    ("Tooling", &["Docker", "Git", "CI/CD", "Linux"]),
];

const EXPERIENCE: &[(&str, &str, &str, &str)] = &[
    (
        "2023 – Present",
        "Senior Full Stack Developer",
        "Northwind Labs",
        "Leads the web platform team, owning the design system and the API gateway.",
    ),
    (
        "2020 – 2023",
        "Software Engineer",
        "Brightline Studio",
        "Built client dashboards and data pipelines for analytics products.",
    ),
    (
        "2018 – 2020",
        "Junior Developer",
        "Freelance",
        "Shipped marketing sites and small e-commerce stores for local businesses.",
    ),
];

fn projects() -> Vec<Project> {
    vec![
        Project {
            title: "Realtime Dashboard",
            description: "Streaming metrics dashboard with live charts and alerting.",
            category: "web",
            tags: &["Rust", "WebSockets", "Yew"],
            link: Some("https://github.com/"),
        },
        Project {
            title: "Document Q&A",
            description: "Retrieval-augmented assistant that answers questions over PDFs.",
            category: "ai",
            tags: &["Python", "LLM", "Vector DB"],
            link: Some("https://github.com/"),
        },
        Project {
            title: "Habit Tracker",
            description: "Offline-first mobile app for building daily routines.",
            category: "mobile",
            tags: &["React Native", "SQLite"],
            link: None,
        },
        Project {
            title: "Storefront API",
            description: "Headless commerce backend with payments and inventory sync.",
            category: "web",
            tags: &["Node.js", "PostgreSQL"],
            link: Some("https://github.com/"),
        },
        Project {
            title: "Image Tagger",
            description: "Vision model that auto-tags photo libraries on upload.",
            category: "ai",
            tags: &["PyTorch", "FastAPI"],
            link: None,
        },
    ]
}

fn testimonials() -> Vec<Testimonial> {
    vec![
        Testimonial {
            quote: "Turned a vague idea into a polished product in weeks.",
            author: "Jordan Lee",
            role: "Founder, Brightline Studio",
        },
        Testimonial {
            quote: "Clear communicator who cares about the details.",
            author: "Priya Nair",
            role: "Engineering Manager, Northwind Labs",
        },
        Testimonial {
            quote: "The dashboard rewrite cut our page loads in half.",
            author: "Sam Ortega",
            role: "CTO, Fieldnote",
        },
    ]
}

fn about_tabs() -> Vec<AboutTab> {
    vec![
        AboutTab {
            id: "about-story".into(),
            label: "Story".into(),
            body: html! {
                <p>{format!("I'm {}, a developer who enjoys building fast, friendly interfaces on top of solid backends.", config::OWNER_NAME)}</p>
            },
        },
        AboutTab {
            id: "about-education".into(),
            label: "Education".into(),
            body: html! {
                <ul>
                    <li>{"B.Sc. Computer Science"}</li>
                    <li>{"Certificate in Machine Learning"}</li>
                </ul>
            },
        },
        AboutTab {
            id: "about-interests".into(),
            label: "Interests".into(),
            body: html! {
                <p>{"Open source, climbing, and teaching beginners to code."}</p>
            },
        },
    ]
}

#[function_component(Hero)]
fn hero() -> Html {
    let revealed = use_context::<HeroReveal>().map(|r| r.0).unwrap_or(true);
    let shown = |base: &'static str| classes!(base, "hero-anim", revealed.then(|| "hero-visible"));

    let to_contact = Callback::from(|e: MouseEvent| {
        e.prevent_default();
        dom::scroll_to_section("contact");
    });
    let to_projects = Callback::from(|e: MouseEvent| {
        e.prevent_default();
        dom::scroll_to_section("projects");
    });

    html! {
        <section id="hero" class="hero-section">
            <Particles id="particles-js" />
            <div class="hero-inner">
                <div class={shown("hero-content")}>
                    <p class="hero-greeting">{"Hello, I'm"}</p>
                    <h1 class="hero-name">{config::OWNER_NAME}</h1>
                    <h2 class="hero-subtitle"><TypingText /></h2>
                    <div class="hero-actions">
                        <a href="#projects" class="btn-primary" onclick={to_projects}>{"View my work"}</a>
                        <a href="#contact" class="btn-outline" onclick={to_contact}>{"Get in touch"}</a>
                    </div>
                </div>
                <div class={shown("hero-image-wrapper")}>
                    <div class="hero-image">{config::OWNER_NAME.chars().next().unwrap_or('A')}</div>
                    <div class="tech-icons">
                        { for TECH_ICONS.iter().enumerate().map(|(i, (name, icon))| html! {
                            <span class={shown("icon")}
                                  title={*name}
                                  style={format!("transition-delay: {}ms;", 400 + i * 200)}>
                                {*icon}
                            </span>
                        }) }
                    </div>
                </div>
            </div>
            <div class={shown("scroll-indicator")}>
                <span class="mouse"></span>
            </div>
        </section>
    }
}

#[function_component(Home)]
pub fn home() -> Html {
    html! {
        <main class="portfolio">
            <Hero />

            <section id="about" class="about-section">
                <Reveal kind={RevealKind::Section}>
                    <h2 class="section-title">{"About me"}</h2>
                    <AboutTabs tabs={about_tabs()} />
                </Reveal>
            </section>

            <section id="skills" class="skills-section">
                <Reveal kind={RevealKind::Section}>
                    <h2 class="section-title">{"Skills"}</h2>
                    <div class="skills-grid">
                        { for SKILLS.iter().map(|(group, items)| html! {
                            <div class="skill-group">
                                <h3>{*group}</h3>
                                <ul>
                                    { for items.iter().map(|item| html! { <li>{*item}</li> }) }
                                </ul>
                            </div>
                        }) }
                    </div>
                </Reveal>
            </section>

            <section id="projects" class="projects-section">
                <Reveal kind={RevealKind::Section}>
                    <h2 class="section-title">{"Projects"}</h2>
                </Reveal>
                <ProjectGrid projects={projects()} />
            </section>

            <section id="experience" class="experience-section">
                <Reveal kind={RevealKind::Section}>
                    <h2 class="section-title">{"Experience"}</h2>
                </Reveal>
                <div class="timeline">
                    { for EXPERIENCE.iter().map(|(period, role, company, summary)| html! {
                        <Reveal kind={RevealKind::TimelineItem} class={classes!("timeline-item")}>
                            <span class="timeline-period">{*period}</span>
                            <h3>{*role}</h3>
                            <h4>{*company}</h4>
                            <p>{*summary}</p>
                        </Reveal>
                    }) }
                </div>
                <div class="testimonials">
                    <Carousel items={testimonials()} />
                </div>
            </section>

            <section id="contact" class="contact-section">
                <Reveal kind={RevealKind::Section}>
                    <h2 class="section-title">{"Contact"}</h2>
                    <p class="section-lead">
                        {format!("Answer a few quick questions and {} will get back to you.", config::OWNER_NAME)}
                    </p>
                    <ContactChat />
                </Reveal>
            </section>

            <Footer />

            <style>
                {r#"
                    body {
                        margin: 0;
                        background: #0a0f1f;
                        color: #e2e8f0;
                        font-family: -apple-system, BlinkMacSystemFont, "Segoe UI", Roboto, Helvetica, Arial, sans-serif;
                    }
                    section {
                        padding: 6rem 2rem;
                        max-width: 1200px;
                        margin: 0 auto;
                    }
                    .section-title {
                        font-size: 2.25rem;
                        text-align: center;
                        margin-bottom: 2.5rem;
                        background: linear-gradient(45deg, #fff, #60a5fa);
                        -webkit-background-clip: text;
                        -webkit-text-fill-color: transparent;
                    }
                    .section-lead {
                        text-align: center;
                        color: #94a3b8;
                        margin-bottom: 2rem;
                    }

                    .hero-section {
                        position: relative;
                        min-height: 100vh;
                        max-width: none;
                        display: flex;
                        flex-direction: column;
                        justify-content: center;
                        overflow: hidden;
                    }
                    .particles-bg {
                        position: absolute;
                        inset: 0;
                        z-index: 0;
                    }
                    .hero-inner {
                        position: relative;
                        z-index: 1;
                        max-width: 1200px;
                        margin: 0 auto;
                        display: flex;
                        align-items: center;
                        justify-content: space-between;
                        gap: 3rem;
                        flex-wrap: wrap;
                    }
                    .hero-name {
                        font-size: 4rem;
                        margin: 0.25rem 0;
                    }
                    .hero-subtitle {
                        color: #60a5fa;
                        min-height: 2.5rem;
                    }
                    .typing-cursor {
                        animation: blink 1s step-end infinite;
                    }
                    @keyframes blink {
                        50% { opacity: 0; }
                    }
                    .hero-actions {
                        display: flex;
                        gap: 1rem;
                        margin-top: 2rem;
                    }
                    .btn-primary, .btn-outline {
                        padding: 0.8rem 1.6rem;
                        border-radius: 999px;
                        text-decoration: none;
                        font-weight: 600;
                    }
                    .btn-primary {
                        background: #327ffc;
                        color: #fff;
                    }
                    .btn-outline {
                        border: 1px solid #60a5fa;
                        color: #60a5fa;
                    }
                    .hero-image {
                        width: 260px;
                        height: 260px;
                        border-radius: 50%;
                        display: flex;
                        align-items: center;
                        justify-content: center;
                        font-size: 6rem;
                        font-weight: 700;
                        background: linear-gradient(135deg, #0b42da, #60a5fa);
                    }
                    .tech-icons {
                        display: flex;
                        justify-content: center;
                        gap: 1rem;
                        margin-top: 1.5rem;
                        font-size: 1.75rem;
                    }
                    .scroll-indicator {
                        position: absolute;
                        bottom: 2rem;
                        left: 50%;
                    }
                    .scroll-indicator .mouse {
                        display: block;
                        width: 24px;
                        height: 38px;
                        border: 2px solid #94a3b8;
                        border-radius: 12px;
                    }

                    .hero-anim {
                        opacity: 0;
                        visibility: hidden;
                        transition: opacity 1s ease-out, transform 1s ease-out;
                    }
                    .hero-content.hero-anim { transform: translateY(50px); }
                    .hero-image-wrapper.hero-anim { transform: scale(0.8); transition-delay: 0.2s; }
                    .icon.hero-anim { transform: scale(0); transition-duration: 0.5s; }
                    .scroll-indicator.hero-anim { transform: translate(-50%, 20px); transition-delay: 0.5s; }
                    .hero-anim.hero-visible {
                        opacity: 1;
                        visibility: visible;
                        transform: none;
                    }
                    .scroll-indicator.hero-anim.hero-visible { transform: translateX(-50%); }

                    .reveal {
                        opacity: 0;
                        transition: opacity 1s ease-out, transform 1s ease-out;
                    }
                    .reveal-up { transform: translateY(50px); }
                    .reveal-card { transform: translateY(30px); transition-duration: 0.8s; }
                    .reveal-left { transform: translateX(-50px); transition-duration: 0.8s; }
                    .reveal.revealed {
                        opacity: 1;
                        transform: none;
                    }

                    .skills-grid {
                        display: grid;
                        grid-template-columns: repeat(auto-fit, minmax(220px, 1fr));
                        gap: 1.5rem;
                    }
                    .skill-group {
                        padding: 1.5rem;
                        border-radius: 16px;
                        background: rgba(255, 255, 255, 0.04);
                    }
                    .skill-group ul {
                        padding-left: 1.1rem;
                        color: #cbd5e1;
                    }

                    .timeline {
                        border-left: 2px solid rgba(96, 165, 250, 0.3);
                        padding-left: 2rem;
                        display: flex;
                        flex-direction: column;
                        gap: 2rem;
                    }
                    .timeline-period {
                        color: #60a5fa;
                        font-size: 0.9rem;
                    }
                    .timeline-item h4 {
                        color: #94a3b8;
                        margin: 0.25rem 0 0.5rem;
                    }
                    .testimonials {
                        margin-top: 4rem;
                    }
                    .testimonial {
                        margin: 0;
                        padding: 2rem;
                        text-align: center;
                        font-style: italic;
                    }
                    .testimonial footer {
                        margin-top: 1rem;
                        font-style: normal;
                        display: flex;
                        flex-direction: column;
                        color: #94a3b8;
                    }

                    @media (max-width: 768px) {
                        .hero-name { font-size: 2.75rem; }
                        .hero-inner { justify-content: center; text-align: center; }
                        .hero-actions { justify-content: center; }
                    }
                "#}
            </style>
        </main>
    }
}
