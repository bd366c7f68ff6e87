use std::collections::BTreeMap;

use log::{debug, warn};
use serde::Serialize;
use wasm_bindgen::JsCast;
use web_sys::js_sys::{Array, Function, Reflect};
use yew::prelude::*;
use yew_hooks::prelude::use_mount;

use crate::config;
use crate::dom::{self, DomError};

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SliderOptions {
    #[serde(rename = "type")]
    pub kind: &'static str,
    pub per_page: u32,
    pub autoplay: bool,
    pub interval: u32,
    pub pause_on_hover: bool,
    pub arrows: bool,
    pub pagination: bool,
    pub gap: &'static str,
    pub breakpoints: BTreeMap<u32, Breakpoint>,
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Breakpoint {
    pub per_page: u32,
    pub gap: &'static str,
}

impl Default for SliderOptions {
    fn default() -> Self {
        let mut breakpoints = BTreeMap::new();
        breakpoints.insert(767, Breakpoint { per_page: 1, gap: "0.5rem" });
        Self {
            kind: "loop",
            per_page: 1,
            autoplay: true,
            interval: config::CAROUSEL_INTERVAL_MS,
            pause_on_hover: true,
            arrows: true,
            pagination: true,
            gap: "1rem",
            breakpoints,
        }
    }
}

fn mount_slider(root: &web_sys::Element) -> Result<(), DomError> {
    let splide = dom::capability_function("Splide")?;
    let options = dom::to_js_options(&SliderOptions::default())?;
    let instance = Reflect::construct(&splide, &Array::of2(root, &options))?;
    dom::get_path(&instance, &["mount"])?
        .unchecked_into::<Function>()
        .call0(&instance)?;
    Ok(())
}

#[derive(Clone, PartialEq)]
pub struct Testimonial {
    pub quote: &'static str,
    pub author: &'static str,
    pub role: &'static str,
}

#[derive(Properties, PartialEq)]
pub struct CarouselProps {
    pub items: Vec<Testimonial>,
}

/// Testimonial slider. Without the host slider library the slides render as a plain list.
#[function_component(Carousel)]
pub fn carousel(props: &CarouselProps) -> Html {
    let root = use_node_ref();

    {
        let root = root.clone();
        use_mount(move || {
            let Some(element) = root.cast::<web_sys::Element>() else {
                return;
            };
            match mount_slider(&element) {
                Ok(()) => debug!("Testimonial slider mounted"),
                Err(DomError::MissingCapability(name)) => {
                    debug!("{} not loaded, showing static testimonials", name)
                }
                Err(e) => warn!("Testimonial slider failed: {}", e),
            }
        });
    }

    html! {
        <div ref={root} class="splide" aria-label="Testimonials">
            <div class="splide__track">
                <ul class="splide__list">
                    { for props.items.iter().map(|item| html! {
                        <li class="splide__slide">
                            <blockquote class="testimonial">
                                <p>{item.quote}</p>
                                <footer>
                                    <strong>{item.author}</strong>
                                    <span>{item.role}</span>
                                </footer>
                            </blockquote>
                        </li>
                    }) }
                </ul>
            </div>
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn options_use_slider_field_names() {
        let json = serde_json::to_value(SliderOptions::default()).unwrap();
        assert_eq!(json["type"], "loop");
        assert_eq!(json["perPage"], 1);
        assert_eq!(json["pauseOnHover"], true);
        assert_eq!(json["interval"], 5_000);
        assert_eq!(json["breakpoints"]["767"]["gap"], "0.5rem");
    }
}
