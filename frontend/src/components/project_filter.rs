use yew::prelude::*;

use crate::components::reveal::{Reveal, RevealKind};

#[derive(Clone, PartialEq)]
pub struct Project {
    pub title: &'static str,
    pub description: &'static str,
    pub category: &'static str,
    pub tags: &'static [&'static str],
    pub link: Option<&'static str>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ProjectFilter {
    All,
    Category(String),
}

impl ProjectFilter {
    /// Parses a filter button value; `"all"` shows every card.
    pub fn parse(value: &str) -> Self {
        if value.eq_ignore_ascii_case("all") {
            ProjectFilter::All
        } else {
            ProjectFilter::Category(value.to_string())
        }
    }

    pub fn value(&self) -> &str {
        match self {
            ProjectFilter::All => "all",
            ProjectFilter::Category(c) => c,
        }
    }

    pub fn matches(&self, category: &str) -> bool {
        match self {
            ProjectFilter::All => true,
            ProjectFilter::Category(c) => c == category,
        }
    }
}

/// Filter buttons in display order: `all` first, then each category once.
pub fn filter_options(projects: &[Project]) -> Vec<ProjectFilter> {
    let mut options = vec![ProjectFilter::All];
    for project in projects {
        let filter = ProjectFilter::parse(project.category);
        if !options.contains(&filter) {
            options.push(filter);
        }
    }
    options
}

fn label(filter: &ProjectFilter) -> String {
    let value = filter.value();
    let mut chars = value.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}

#[derive(Properties, PartialEq)]
pub struct ProjectGridProps {
    pub projects: Vec<Project>,
}

#[function_component(ProjectGrid)]
pub fn project_grid(props: &ProjectGridProps) -> Html {
    let filter = use_state(|| ProjectFilter::All);

    let buttons = filter_options(&props.projects).into_iter().map(|option| {
        let is_active = *filter == option;
        let text = label(&option);
        let onclick = {
            let filter = filter.clone();
            let option = option.clone();
            Callback::from(move |_: MouseEvent| filter.set(option.clone()))
        };
        html! {
            <button class={classes!("filter-btn", is_active.then(|| "active"))}
                    data-filter={option.value().to_string()}
                    onclick={onclick}>
                {text}
            </button>
        }
    });

    let cards = props.projects.iter().map(|project| {
        let shown = filter.matches(project.category);
        // Keyed on the filter so the fade-in replays on every switch.
        let key = format!("{}-{}", filter.value(), project.title);
        html! {
            <div key={key}
                 class={classes!("project-card-slot", shown.then(|| "shown"))}
                 style={if shown { "display: block;" } else { "display: none;" }}
                 data-category={project.category}>
                <Reveal kind={RevealKind::Card} class={classes!("project-card")}>
                    <h3>{project.title}</h3>
                    <p>{project.description}</p>
                    <div class="project-tags">
                        { for project.tags.iter().map(|tag| html! { <span class="tag">{*tag}</span> }) }
                    </div>
                    {
                        if let Some(link) = project.link {
                            html! {
                                <a class="project-link" href={link} target="_blank" rel="noopener">
                                    {"View project →"}
                                </a>
                            }
                        } else {
                            html! {}
                        }
                    }
                </Reveal>
            </div>
        }
    });

    html! {
        <div class="projects-wrapper">
            <div class="project-filters">
                { for buttons }
            </div>
            <div class="project-grid">
                { for cards }
            </div>
            <style>
                {r#"
                    .project-filters {
                        display: flex;
                        flex-wrap: wrap;
                        justify-content: center;
                        gap: 0.75rem;
                        margin-bottom: 2rem;
                    }
                    .filter-btn {
                        padding: 0.5rem 1.25rem;
                        border-radius: 999px;
                        border: 1px solid rgba(96, 165, 250, 0.4);
                        background: transparent;
                        color: #cbd5e1;
                        cursor: pointer;
                        transition: all 0.2s ease;
                    }
                    .filter-btn.active, .filter-btn:hover {
                        background: #327ffc;
                        color: #fff;
                    }
                    .project-grid {
                        display: grid;
                        grid-template-columns: repeat(auto-fill, minmax(280px, 1fr));
                        gap: 1.5rem;
                    }
                    .project-card-slot.shown {
                        animation: cardFadeIn 0.5s ease-out;
                    }
                    .project-card {
                        height: 100%;
                        padding: 1.5rem;
                        border-radius: 16px;
                        background: rgba(255, 255, 255, 0.04);
                        border: 1px solid rgba(255, 255, 255, 0.08);
                    }
                    .project-tags {
                        display: flex;
                        flex-wrap: wrap;
                        gap: 0.5rem;
                        margin: 1rem 0;
                    }
                    .project-tags .tag {
                        font-size: 0.8rem;
                        padding: 0.2rem 0.6rem;
                        border-radius: 6px;
                        background: rgba(50, 127, 252, 0.15);
                        color: #93c5fd;
                    }
                    .project-link {
                        color: #60a5fa;
                        text-decoration: none;
                    }
                    @keyframes cardFadeIn {
                        from { opacity: 0; transform: translateY(20px); }
                        to { opacity: 1; transform: translateY(0); }
                    }
                "#}
            </style>
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn project(category: &'static str) -> Project {
        Project {
            title: "p",
            description: "",
            category,
            tags: &[],
            link: None,
        }
    }

    #[test]
    fn all_matches_every_category() {
        let all = ProjectFilter::parse("all");
        assert_eq!(all, ProjectFilter::All);
        assert!(all.matches("web"));
        assert!(all.matches("ai"));
    }

    #[test]
    fn category_filter_is_exact() {
        let web = ProjectFilter::parse("web");
        assert!(web.matches("web"));
        assert!(!web.matches("ai"));
        assert!(!web.matches("web-app"));
    }

    #[test]
    fn options_are_deduplicated_in_order() {
        let projects = [project("web"), project("ai"), project("web"), project("mobile")];
        let values: Vec<_> = filter_options(&projects)
            .iter()
            .map(|f| f.value().to_string())
            .collect();
        assert_eq!(values, ["all", "web", "ai", "mobile"]);
    }

    #[test]
    fn labels_are_capitalised() {
        assert_eq!(label(&ProjectFilter::All), "All");
        assert_eq!(label(&ProjectFilter::parse("ai")), "Ai");
    }
}
