use log::debug;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys::js_sys::Array;
use web_sys::{IntersectionObserver, IntersectionObserverEntry, IntersectionObserverInit};
use yew::prelude::*;

/// What is being revealed decides how far into the viewport it must scroll
/// and which entrance animation it plays.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RevealKind {
    Section,
    Card,
    TimelineItem,
}

impl RevealKind {
    /// Percentage of the viewport height the element's top must pass.
    pub fn start_percent(&self) -> u32 {
        match self {
            RevealKind::Section => 80,
            RevealKind::Card | RevealKind::TimelineItem => 85,
        }
    }

    pub fn root_margin(&self) -> String {
        format!("0px 0px -{}% 0px", 100 - self.start_percent())
    }

    pub fn class(&self) -> &'static str {
        match self {
            RevealKind::Section => "reveal-up",
            RevealKind::Card => "reveal-card",
            RevealKind::TimelineItem => "reveal-left",
        }
    }
}

#[derive(Properties, PartialEq)]
pub struct RevealProps {
    pub kind: RevealKind,
    #[prop_or_default]
    pub class: Classes,
    #[prop_or_default]
    pub id: Option<AttrValue>,
    #[prop_or_default]
    pub children: Children,
}

#[function_component(Reveal)]
pub fn reveal(props: &RevealProps) -> Html {
    let node = use_node_ref();
    let revealed = use_state(|| false);

    {
        let node = node.clone();
        let revealed = revealed.clone();
        let kind = props.kind;
        use_effect_with_deps(
            move |_| {
                let mut observer = None;
                let mut callback = None;

                if let Some(element) = node.cast::<web_sys::Element>() {
                    let on_intersect = {
                        let revealed = revealed.clone();
                        Closure::wrap(Box::new(move |entries: Array, observer: IntersectionObserver| {
                            let visible = entries.iter().any(|entry| {
                                entry
                                    .dyn_into::<IntersectionObserverEntry>()
                                    .map(|e| e.is_intersecting())
                                    .unwrap_or(false)
                            });
                            if visible {
                                revealed.set(true);
                                observer.disconnect();
                            }
                        }) as Box<dyn FnMut(Array, IntersectionObserver)>)
                    };

                    let options = IntersectionObserverInit::new();
                    options.set_root_margin(&kind.root_margin());

                    match IntersectionObserver::new_with_options(
                        on_intersect.as_ref().unchecked_ref(),
                        &options,
                    ) {
                        Ok(obs) => {
                            obs.observe(&element);
                            observer = Some(obs);
                            callback = Some(on_intersect);
                        }
                        Err(_) => {
                            debug!("IntersectionObserver unavailable, revealing immediately");
                            revealed.set(true);
                        }
                    }
                }

                move || {
                    if let Some(observer) = observer {
                        observer.disconnect();
                    }
                    drop(callback);
                }
            },
            (),
        );
    }

    let class = classes!(
        "reveal",
        props.kind.class(),
        (*revealed).then(|| "revealed"),
        props.class.clone()
    );

    html! {
        <div ref={node} id={props.id.clone()} class={class}>
            { for props.children.iter() }
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn sections_reveal_at_eighty_percent() {
        assert_eq!(RevealKind::Section.root_margin(), "0px 0px -20% 0px");
    }

    #[test]
    fn cards_and_timeline_reveal_at_eighty_five_percent() {
        assert_eq!(RevealKind::Card.root_margin(), "0px 0px -15% 0px");
        assert_eq!(RevealKind::TimelineItem.root_margin(), "0px 0px -15% 0px");
        assert_ne!(RevealKind::Card.class(), RevealKind::TimelineItem.class());
    }
}
