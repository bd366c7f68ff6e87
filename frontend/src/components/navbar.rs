use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys::HtmlElement;
use yew::prelude::*;

use crate::config;
use crate::dom::{self, Debouncer};

pub const NAV_SECTIONS: &[(&str, &str)] = &[
    ("hero", "Home"),
    ("about", "About"),
    ("skills", "Skills"),
    ("projects", "Projects"),
    ("experience", "Experience"),
    ("contact", "Contact"),
];

const HOME_SECTION: &str = "hero";

#[derive(Debug, Clone, PartialEq)]
pub struct SectionBounds {
    pub id: String,
    pub top: f64,
    pub height: f64,
}

/// Which section the viewport is currently in, given page sections in
/// document order. Above the first section the home link is active.
pub fn active_section(scroll_y: f64, sections: &[SectionBounds]) -> Option<String> {
    let offset = config::SECTION_ACTIVE_OFFSET_PX;
    let first = sections.first()?;
    if scroll_y < first.top - offset {
        return Some(HOME_SECTION.to_string());
    }
    sections
        .iter()
        .filter(|s| {
            let top = s.top - offset;
            scroll_y >= top && scroll_y < top + s.height
        })
        .last()
        .map(|s| s.id.clone())
}

fn measure_sections() -> Vec<SectionBounds> {
    let Ok(document) = dom::get_document() else {
        return Vec::new();
    };
    let Ok(nodes) = document.query_selector_all("section[id]") else {
        return Vec::new();
    };
    (0..nodes.length())
        .filter_map(|i| nodes.item(i))
        .filter_map(|node| node.dyn_into::<HtmlElement>().ok())
        .map(|el| SectionBounds {
            id: el.id(),
            top: el.offset_top() as f64,
            height: el.offset_height() as f64,
        })
        .collect()
}

/// Inline style for each line of the burger icon; open menus show an "X".
pub fn toggler_line_style(index: usize, open: bool) -> &'static str {
    match (index, open) {
        (0, true) => "transform: rotate(45deg) translate(5px, 5px);",
        (1, true) => "opacity: 0;",
        (2, true) => "transform: rotate(-45deg) translate(7px, -7px);",
        (1, false) => "opacity: 1;",
        _ => "transform: none;",
    }
}

#[function_component(Navbar)]
pub fn navbar() -> Html {
    let is_scrolled = use_state(|| false);
    let active = use_state(|| Some(HOME_SECTION.to_string()));
    let menu_open = use_state(|| false);

    {
        let is_scrolled = is_scrolled.clone();
        let active = active.clone();
        use_effect_with_deps(
            move |_| {
                let scrolled_debounce = Debouncer::new(config::NAVBAR_DEBOUNCE_MS);
                let active_debounce = Debouncer::new(config::ACTIVE_LINK_DEBOUNCE_MS);
                let window = dom::get_window().ok();

                let scroll_callback = {
                    let scrolled_debounce = scrolled_debounce.clone();
                    let active_debounce = active_debounce.clone();
                    Closure::wrap(Box::new(move || {
                        let is_scrolled = is_scrolled.clone();
                        scrolled_debounce.call(move || {
                            is_scrolled.set(dom::scroll_y() > config::NAVBAR_SCROLLED_PX);
                        });
                        let active = active.clone();
                        active_debounce.call(move || {
                            active.set(active_section(dom::scroll_y(), &measure_sections()));
                        });
                    }) as Box<dyn FnMut()>)
                };

                if let Some(window) = &window {
                    if let Err(e) = window.add_event_listener_with_callback(
                        "scroll",
                        scroll_callback.as_ref().unchecked_ref(),
                    ) {
                        log::warn!("Could not watch scroll for navbar: {:?}", e);
                    }
                }

                move || {
                    if let Some(window) = window {
                        let _ = window.remove_event_listener_with_callback(
                            "scroll",
                            scroll_callback.as_ref().unchecked_ref(),
                        );
                    }
                    scrolled_debounce.cancel();
                    active_debounce.cancel();
                }
            },
            (),
        );
    }

    let toggle_menu = {
        let menu_open = menu_open.clone();
        Callback::from(move |e: MouseEvent| {
            e.prevent_default();
            menu_open.set(!*menu_open);
        })
    };

    let nav_link = |id: &'static str, label: &'static str| {
        let onclick = {
            let active = active.clone();
            let menu_open = menu_open.clone();
            Callback::from(move |e: MouseEvent| {
                e.prevent_default();
                active.set(Some(id.to_string()));
                menu_open.set(false);
                dom::scroll_to_section(id);
            })
        };
        let is_active = active.as_deref() == Some(id);
        html! {
            <li class="nav-item">
                <a href={format!("#{}", id)}
                   class={classes!("nav-link", is_active.then(|| "active"))}
                   onclick={onclick}>
                    {label}
                </a>
            </li>
        }
    };

    html! {
        <nav id="navbar" class={classes!("navbar", (*is_scrolled).then(|| "scrolled"))}>
            <div class="nav-content">
                <a class="nav-logo" href="#hero" onclick={Callback::from(|e: MouseEvent| {
                    e.prevent_default();
                    dom::scroll_to_section(HOME_SECTION);
                })}>
                    {config::OWNER_NAME}
                </a>
                <button class="navbar-toggler"
                        aria-expanded={(*menu_open).to_string()}
                        aria-label="Toggle navigation"
                        onclick={toggle_menu}>
                    { for (0..3).map(|i| html! {
                        <span class="line" style={toggler_line_style(i, *menu_open)}></span>
                    }) }
                </button>
                <ul class={classes!("nav-links", (*menu_open).then(|| "open"))}>
                    { for NAV_SECTIONS.iter().map(|&(id, label)| nav_link(id, label)) }
                </ul>
            </div>
            <style>
                {r#"
                    .navbar {
                        position: fixed;
                        top: 0;
                        width: 100%;
                        z-index: 100;
                        padding: 1.25rem 2rem;
                        transition: background 0.3s ease, padding 0.3s ease;
                    }
                    .navbar.scrolled {
                        background: rgba(10, 15, 31, 0.92);
                        backdrop-filter: blur(10px);
                        padding: 0.75rem 2rem;
                        box-shadow: 0 4px 20px rgba(0, 0, 0, 0.3);
                    }
                    .nav-content {
                        max-width: 1200px;
                        margin: 0 auto;
                        display: flex;
                        align-items: center;
                        justify-content: space-between;
                    }
                    .nav-logo {
                        color: #fff;
                        font-weight: 700;
                        font-size: 1.4rem;
                        text-decoration: none;
                    }
                    .nav-links {
                        display: flex;
                        gap: 1.5rem;
                        list-style: none;
                        margin: 0;
                        padding: 0;
                    }
                    .nav-link {
                        color: #cbd5e1;
                        text-decoration: none;
                        transition: color 0.2s ease;
                    }
                    .nav-link:hover, .nav-link.active {
                        color: #60a5fa;
                    }
                    .navbar-toggler {
                        display: none;
                        flex-direction: column;
                        gap: 5px;
                        background: none;
                        border: none;
                        cursor: pointer;
                    }
                    .navbar-toggler .line {
                        width: 24px;
                        height: 2px;
                        background: #fff;
                        transition: transform 0.3s ease, opacity 0.3s ease;
                    }
                    @media (max-width: 768px) {
                        .navbar-toggler {
                            display: flex;
                        }
                        .nav-links {
                            display: none;
                            position: absolute;
                            top: 100%;
                            left: 0;
                            right: 0;
                            flex-direction: column;
                            padding: 1rem 2rem;
                            background: rgba(10, 15, 31, 0.97);
                        }
                        .nav-links.open {
                            display: flex;
                        }
                    }
                "#}
            </style>
        </nav>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sections() -> Vec<SectionBounds> {
        [("hero", 0.0, 800.0), ("about", 800.0, 600.0), ("skills", 1400.0, 500.0)]
            .iter()
            .map(|(id, top, height)| SectionBounds {
                id: id.to_string(),
                top: *top,
                height: *height,
            })
            .collect()
    }

    #[test]
    fn picks_section_under_offset_viewport() {
        let s = sections();
        assert_eq!(active_section(0.0, &s).as_deref(), Some("hero"));
        assert_eq!(active_section(699.0, &s).as_deref(), Some("hero"));
        assert_eq!(active_section(700.0, &s).as_deref(), Some("about"));
        assert_eq!(active_section(1350.0, &s).as_deref(), Some("skills"));
    }

    #[test]
    fn past_the_last_section_nothing_is_active() {
        assert_eq!(active_section(5_000.0, &sections()), None);
    }

    #[test]
    fn above_the_first_section_home_is_active() {
        let s = vec![SectionBounds { id: "about".into(), top: 900.0, height: 400.0 }];
        assert_eq!(active_section(100.0, &s).as_deref(), Some("hero"));
        assert_eq!(active_section(800.0, &s).as_deref(), Some("about"));
    }

    #[test]
    fn no_sections_no_active_link() {
        assert_eq!(active_section(100.0, &[]), None);
    }

    #[test]
    fn burger_turns_into_a_cross() {
        assert_eq!(toggler_line_style(1, true), "opacity: 0;");
        assert_eq!(toggler_line_style(1, false), "opacity: 1;");
        assert_eq!(toggler_line_style(0, false), "transform: none;");
        assert!(toggler_line_style(2, true).contains("-45deg"));
    }
}
