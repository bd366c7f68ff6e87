use yew::prelude::*;

#[derive(Clone, PartialEq)]
pub struct AboutTab {
    pub id: AttrValue,
    pub label: AttrValue,
    pub body: Html,
}

/// Exactly one tab is active; the first one starts active.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TabSelection {
    active: usize,
    len: usize,
}

impl TabSelection {
    pub fn new(len: usize) -> Self {
        Self { active: 0, len }
    }

    pub fn active(&self) -> Option<usize> {
        (self.active < self.len).then_some(self.active)
    }

    pub fn is_active(&self, index: usize) -> bool {
        self.active() == Some(index)
    }

    /// Out-of-range indices are ignored. Returns whether anything changed.
    pub fn select(&mut self, index: usize) -> bool {
        if index >= self.len || index == self.active {
            return false;
        }
        self.active = index;
        true
    }
}

#[derive(Properties, PartialEq)]
pub struct AboutTabsProps {
    pub tabs: Vec<AboutTab>,
}

#[function_component(AboutTabs)]
pub fn about_tabs(props: &AboutTabsProps) -> Html {
    let selection = use_state(|| TabSelection::new(props.tabs.len()));

    let tab_links = props.tabs.iter().enumerate().map(|(index, tab)| {
        let onclick = {
            let selection = selection.clone();
            Callback::from(move |e: MouseEvent| {
                e.prevent_default();
                let mut next = *selection;
                if next.select(index) {
                    selection.set(next);
                }
            })
        };
        let active = selection.is_active(index);
        html! {
            <li class="nav-item" role="presentation">
                <a class={classes!("nav-link", active.then(|| "active"))}
                   href={format!("#{}", tab.id)}
                   role="tab"
                   aria-controls={tab.id.clone()}
                   aria-selected={active.to_string()}
                   onclick={onclick}>
                    {tab.label.clone()}
                </a>
            </li>
        }
    });

    let panes = props.tabs.iter().enumerate().map(|(index, tab)| {
        let active = selection.is_active(index);
        html! {
            <div id={tab.id.clone()}
                 role="tabpanel"
                 class={classes!("tab-pane", active.then(|| "show active"))}
                 style={if active { "display: block;" } else { "display: none;" }}>
                {tab.body.clone()}
            </div>
        }
    });

    html! {
        <div class="about-tabs-wrapper">
            <ul class="nav about-tabs" role="tablist">
                { for tab_links }
            </ul>
            <div class="tab-content">
                { for panes }
            </div>
            <style>
                {r#"
                    .about-tabs {
                        display: flex;
                        gap: 1rem;
                        list-style: none;
                        padding: 0;
                        margin-bottom: 1.5rem;
                        border-bottom: 1px solid rgba(255, 255, 255, 0.1);
                    }
                    .about-tabs .nav-link {
                        display: inline-block;
                        padding: 0.5rem 1rem;
                        color: #94a3b8;
                        text-decoration: none;
                        border-bottom: 2px solid transparent;
                    }
                    .about-tabs .nav-link.active {
                        color: #60a5fa;
                        border-bottom-color: #60a5fa;
                    }
                    .tab-pane.active {
                        animation: tabFadeIn 0.5s ease-out;
                    }
                    @keyframes tabFadeIn {
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

    #[test]
    fn first_tab_starts_active() {
        let tabs = TabSelection::new(3);
        assert!(tabs.is_active(0));
        assert!(!tabs.is_active(1));
    }

    #[test]
    fn selecting_moves_the_single_active_tab() {
        let mut tabs = TabSelection::new(3);
        assert!(tabs.select(2));
        assert_eq!(tabs.active(), Some(2));
        assert_eq!((0..3).filter(|i| tabs.is_active(*i)).count(), 1);
        assert!(!tabs.select(2));
    }

    #[test]
    fn out_of_range_is_ignored() {
        let mut tabs = TabSelection::new(2);
        assert!(!tabs.select(5));
        assert_eq!(tabs.active(), Some(0));
    }

    #[test]
    fn no_tabs_means_nothing_active() {
        let tabs = TabSelection::new(0);
        assert_eq!(tabs.active(), None);
    }
}
