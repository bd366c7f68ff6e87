use log::{debug, warn};
use serde::Serialize;
use wasm_bindgen::{JsCast, JsValue};
use web_sys::js_sys::Function;
use yew::prelude::*;
use yew_hooks::prelude::{use_event_with_window, use_mount, use_unmount};

use crate::config;
use crate::dom::{self, Debouncer, DomError};

#[derive(Debug, Clone, Serialize)]
pub struct ParticlesConfig {
    pub particles: ParticleSettings,
    pub interactivity: Interactivity,
    pub retina_detect: bool,
}

#[derive(Debug, Clone, Serialize)]
pub struct ParticleSettings {
    pub number: Number,
    pub color: Value<Vec<&'static str>>,
    pub shape: Shape,
    pub opacity: RandomValue,
    pub size: RandomValue,
    pub line_linked: LineLinked,
    #[serde(rename = "move")]
    pub movement: Movement,
}

#[derive(Debug, Clone, Serialize)]
pub struct Value<T> {
    pub value: T,
}

#[derive(Debug, Clone, Serialize)]
pub struct Number {
    pub value: u32,
    pub density: Density,
}

#[derive(Debug, Clone, Serialize)]
pub struct Density {
    pub enable: bool,
    pub value_area: u32,
}

#[derive(Debug, Clone, Serialize)]
pub struct Shape {
    #[serde(rename = "type")]
    pub kind: &'static str,
}

#[derive(Debug, Clone, Serialize)]
pub struct RandomValue {
    pub value: f64,
    pub random: bool,
}

#[derive(Debug, Clone, Serialize)]
pub struct LineLinked {
    pub enable: bool,
    pub distance: u32,
    pub color: &'static str,
    pub opacity: f64,
    pub width: u32,
}

#[derive(Debug, Clone, Serialize)]
pub struct Movement {
    pub enable: bool,
    pub speed: u32,
    pub direction: &'static str,
    pub random: bool,
    pub straight: bool,
    pub out_mode: &'static str,
    pub bounce: bool,
}

#[derive(Debug, Clone, Serialize)]
pub struct Interactivity {
    pub detect_on: &'static str,
    pub events: Events,
    pub modes: Modes,
}

#[derive(Debug, Clone, Serialize)]
pub struct Events {
    pub onhover: ModeToggle,
    pub onclick: ModeToggle,
    pub resize: bool,
}

#[derive(Debug, Clone, Serialize)]
pub struct ModeToggle {
    pub enable: bool,
    pub mode: &'static str,
}

#[derive(Debug, Clone, Serialize)]
pub struct Modes {
    pub repulse: Repulse,
    pub push: Push,
}

#[derive(Debug, Clone, Serialize)]
pub struct Repulse {
    pub distance: u32,
    pub duration: f64,
}

#[derive(Debug, Clone, Serialize)]
pub struct Push {
    pub particles_nb: u32,
}

impl Default for ParticlesConfig {
    fn default() -> Self {
        Self {
            particles: ParticleSettings {
                number: Number {
                    value: 60,
                    density: Density { enable: true, value_area: 800 },
                },
                color: Value { value: vec!["#327ffc", "#0b42da", "#60a5fa"] },
                shape: Shape { kind: "circle" },
                opacity: RandomValue { value: 0.5, random: true },
                size: RandomValue { value: 3.0, random: true },
                line_linked: LineLinked {
                    enable: true,
                    distance: 150,
                    color: "#60a5fa",
                    opacity: 0.4,
                    width: 1,
                },
                movement: Movement {
                    enable: true,
                    speed: 2,
                    direction: "none",
                    random: false,
                    straight: false,
                    out_mode: "out",
                    bounce: false,
                },
            },
            interactivity: Interactivity {
                detect_on: "canvas",
                events: Events {
                    onhover: ModeToggle { enable: true, mode: "repulse" },
                    onclick: ModeToggle { enable: true, mode: "push" },
                    resize: true,
                },
                modes: Modes {
                    repulse: Repulse { distance: 100, duration: 0.4 },
                    push: Push { particles_nb: 4 },
                },
            },
            retina_detect: true,
        }
    }
}

/// Density overrides for narrow viewports: `(particle count, link distance)`.
pub fn mobile_density(viewport_width: f64) -> Option<(u32, u32)> {
    (viewport_width < config::MOBILE_BREAKPOINT_PX).then_some((30, 100))
}

fn init_particles(container_id: &str) -> Result<(), DomError> {
    let particles_js = dom::capability_function("particlesJS")?;
    let options = dom::to_js_options(&ParticlesConfig::default())?;
    particles_js.call2(&JsValue::NULL, &JsValue::from_str(container_id), &options)?;
    Ok(())
}

fn adjust_for_mobile() -> Result<(), DomError> {
    let Some((count, distance)) = dom::viewport_width().and_then(mobile_density) else {
        return Ok(());
    };
    let instances = dom::capability("pJSDom")?;
    let pjs = dom::get_path(&instances, &["0", "pJS"])?;
    dom::set_path(&pjs, &["particles", "number", "value"], &JsValue::from(count))?;
    dom::set_path(&pjs, &["particles", "line_linked", "distance"], &JsValue::from(distance))?;
    let vendors = dom::get_path(&pjs, &["fn", "vendors"])?;
    let refresh = dom::get_path(&vendors, &["refresh"])?;
    refresh.unchecked_into::<Function>().call0(&vendors)?;
    Ok(())
}

fn log_outcome(what: &str, result: Result<(), DomError>) {
    match result {
        Ok(()) => {}
        Err(DomError::MissingCapability(name)) => debug!("{} skipped, {} not loaded", what, name),
        Err(e) => warn!("{} failed: {}", what, e),
    }
}

#[derive(Properties, PartialEq)]
pub struct ParticlesProps {
    pub id: AttrValue,
}

/// Particle background drawn by the host page's particles library, if present.
#[function_component(Particles)]
pub fn particles(props: &ParticlesProps) -> Html {
    let debounce = use_memo(|_| Debouncer::new(config::RESIZE_DEBOUNCE_MS), ());

    {
        let id = props.id.clone();
        use_mount(move || {
            log_outcome("Particle background", init_particles(&id));
            log_outcome("Mobile particle density", adjust_for_mobile());
        });
    }

    {
        let debounce = debounce.clone();
        use_event_with_window("resize", move |_: Event| {
            debounce.call(|| log_outcome("Mobile particle density", adjust_for_mobile()));
        });
    }

    {
        let debounce = debounce.clone();
        use_unmount(move || debounce.cancel());
    }

    html! {
        <div id={props.id.clone()} class="particles-bg"></div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn config_serializes_with_library_field_names() {
        let json = serde_json::to_value(ParticlesConfig::default()).unwrap();
        assert_eq!(json["particles"]["number"]["value"], 60);
        assert_eq!(json["particles"]["move"]["out_mode"], "out");
        assert_eq!(json["particles"]["shape"]["type"], "circle");
        assert_eq!(json["particles"]["line_linked"]["distance"], 150);
        assert_eq!(json["interactivity"]["modes"]["push"]["particles_nb"], 4);
        assert_eq!(json["retina_detect"], true);
    }

    #[test]
    fn narrow_viewports_thin_out_particles() {
        assert_eq!(mobile_density(375.0), Some((30, 100)));
        assert_eq!(mobile_density(767.9), Some((30, 100)));
        assert_eq!(mobile_density(768.0), None);
        assert_eq!(mobile_density(1440.0), None);
    }
}
