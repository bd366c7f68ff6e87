use std::cell::RefCell;
use std::rc::Rc;

use gloo_timers::callback::{Interval, Timeout};
use log::{debug, info};
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys::js_sys::Date;
use yew::prelude::*;

use crate::config;
use crate::dom;

const TARGET_PROGRESS: f64 = 100.0;

/// Simulated load progress shown while the page boots.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PreloaderProgress {
    progress: f64,
}

impl Default for PreloaderProgress {
    fn default() -> Self {
        Self { progress: 0.0 }
    }
}

impl PreloaderProgress {
    pub fn progress(&self) -> f64 {
        self.progress
    }

    pub fn is_full(&self) -> bool {
        self.progress >= TARGET_PROGRESS
    }

    pub fn tick(&mut self) {
        if !self.is_full() {
            self.progress = (self.progress + config::PRELOADER_INCREMENT).min(TARGET_PROGRESS);
        }
    }

    pub fn complete(&mut self) {
        self.progress = TARGET_PROGRESS;
    }

    pub fn percentage_label(&self) -> String {
        format!("{}%", self.progress.round() as u32)
    }
}

/// How much longer the preloader must stay up once the page has loaded.
pub fn remaining_display_ms(elapsed_ms: f64) -> u32 {
    let remaining = config::PRELOADER_MIN_DISPLAY_MS as f64 - elapsed_ms;
    if remaining <= 0.0 {
        0
    } else {
        remaining.ceil() as u32
    }
}

/// Time from the start of a hide until `on_hidden` fires.
pub fn hide_latency_ms() -> u32 {
    config::PRELOADER_FADE_DELAY_MS + config::PRELOADER_FADE_OUT_MS
}

/// One-shot latch shared by the load and emergency paths.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct HideLatch {
    started: bool,
}

impl HideLatch {
    /// Returns true only for the first caller.
    pub fn begin(&mut self) -> bool {
        !std::mem::replace(&mut self.started, true)
    }

    pub fn started(&self) -> bool {
        self.started
    }
}

pub enum ProgressAction {
    Tick,
    Loaded,
}

impl Reducible for PreloaderProgress {
    type Action = ProgressAction;

    fn reduce(self: Rc<Self>, action: Self::Action) -> Rc<Self> {
        let mut next = *self;
        match action {
            ProgressAction::Tick => next.tick(),
            ProgressAction::Loaded => next.complete(),
        }
        Rc::new(next)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Phase {
    Visible,
    Loaded,
    Fading,
    Hidden,
}

#[derive(Properties, PartialEq)]
pub struct PreloaderProps {
    pub on_hidden: Callback<()>,
}

#[function_component(Preloader)]
pub fn preloader(props: &PreloaderProps) -> Html {
    let progress = use_reducer(PreloaderProgress::default);
    let phase = use_state(|| Phase::Visible);
    let latch = use_mut_ref(HideLatch::default);

    {
        let progress = progress.clone();
        let phase = phase.clone();
        let on_hidden = props.on_hidden.clone();
        use_effect_with_deps(
            move |_| {
                let start = Date::now();
                let timers: Rc<RefCell<Vec<Timeout>>> = Rc::new(RefCell::new(Vec::new()));
                let interval_handle: Rc<RefCell<Option<Interval>>> = Rc::new(RefCell::new(None));

                let hide: Rc<dyn Fn()> = {
                    let timers = timers.clone();
                    let interval_handle = interval_handle.clone();
                    Rc::new(move || {
                        if !latch.borrow_mut().begin() {
                            return;
                        }
                        interval_handle.borrow_mut().take();
                        phase.set(Phase::Loaded);

                        let phase = phase.clone();
                        let on_hidden = on_hidden.clone();
                        let fade_timers = timers.clone();
                        let delay = Timeout::new(config::PRELOADER_FADE_DELAY_MS, move || {
                            phase.set(Phase::Fading);
                            let fade = Timeout::new(config::PRELOADER_FADE_OUT_MS, move || {
                                phase.set(Phase::Hidden);
                                info!("Preloader hidden");
                                on_hidden.emit(());
                            });
                            fade_timers.borrow_mut().push(fade);
                        });
                        timers.borrow_mut().push(delay);
                    })
                };

                {
                    let progress = progress.clone();
                    let interval = Interval::new(config::PRELOADER_TICK_MS, move || {
                        progress.dispatch(ProgressAction::Tick);
                    });
                    *interval_handle.borrow_mut() = Some(interval);
                }

                let on_load = {
                    let timers = timers.clone();
                    let interval_handle = interval_handle.clone();
                    let hide = hide.clone();
                    move || {
                        interval_handle.borrow_mut().take();
                        let delay = remaining_display_ms(Date::now() - start);
                        progress.dispatch(ProgressAction::Loaded);
                        debug!("Page loaded, hiding preloader in {}ms", delay);
                        let hide = hide.clone();
                        timers.borrow_mut().push(Timeout::new(delay, move || hide()));
                    }
                };

                {
                    let hide = hide.clone();
                    timers.borrow_mut().push(Timeout::new(config::PRELOADER_EMERGENCY_MS, move || {
                        debug!("Preloader emergency timeout reached");
                        hide();
                    }));
                }

                let window = dom::get_window().ok();
                let already_loaded = dom::get_document()
                    .map(|doc| doc.ready_state() == "complete")
                    .unwrap_or(true);

                let load_listener = if already_loaded {
                    on_load();
                    None
                } else {
                    let on_load = RefCell::new(Some(on_load));
                    let callback = Closure::wrap(Box::new(move || {
                        if let Some(on_load) = on_load.borrow_mut().take() {
                            on_load();
                        }
                    }) as Box<dyn FnMut()>);
                    if let Some(window) = &window {
                        let _ = window.add_event_listener_with_callback(
                            "load",
                            callback.as_ref().unchecked_ref(),
                        );
                    }
                    Some(callback)
                };

                move || {
                    if let (Some(window), Some(callback)) = (window, load_listener) {
                        let _ = window.remove_event_listener_with_callback(
                            "load",
                            callback.as_ref().unchecked_ref(),
                        );
                    }
                    interval_handle.borrow_mut().take();
                    timers.borrow_mut().clear();
                }
            },
            (),
        );
    }

    if *phase == Phase::Hidden {
        return html! {};
    }

    let class = classes!(
        "preloader",
        (*phase != Phase::Visible).then(|| "loaded"),
        (*phase == Phase::Fading).then(|| "fade-out"),
    );
    let width = format!("width: {}%;", progress.progress());

    html! {
        <div class={class}>
            <div class="preloader-inner">
                <div class="preloader-logo">{config::OWNER_NAME}</div>
                <div class="preloader-bar">
                    <div class="preloader-progress" style={width}></div>
                </div>
                <div class="preloader-percentage">{progress.percentage_label()}</div>
            </div>
            <style>
                {format!(r#"
                    .preloader {{
                        position: fixed;
                        inset: 0;
                        z-index: 9999;
                        display: flex;
                        align-items: center;
                        justify-content: center;
                        background: #0a0f1f;
                        opacity: 1;
                        transition: opacity {}ms ease-out;
                    }}
                    .preloader.fade-out {{
                        opacity: 0;
                        pointer-events: none;
                    }}
                    .preloader-logo {{
                        color: #60a5fa;
                        font-size: 2rem;
                        font-weight: 700;
                        margin-bottom: 1.5rem;
                        text-align: center;
                    }}
                    .preloader-bar {{
                        width: 240px;
                        height: 4px;
                        background: rgba(255, 255, 255, 0.1);
                        border-radius: 2px;
                        overflow: hidden;
                    }}
                    .preloader-progress {{
                        height: 100%;
                        background: linear-gradient(90deg, #327ffc, #60a5fa);
                        transition: width 50ms linear;
                    }}
                    .preloader-percentage {{
                        margin-top: 0.75rem;
                        color: #ddd;
                        text-align: center;
                        font-variant-numeric: tabular-nums;
                    }}
                "#, config::PRELOADER_FADE_OUT_MS)}
            </style>
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn ticks_toward_full_and_stops() {
        let mut p = PreloaderProgress::default();
        p.tick();
        assert_eq!(p.progress(), 1.5);
        for _ in 0..200 {
            p.tick();
        }
        assert_eq!(p.progress(), 100.0);
        assert!(p.is_full());
        assert_eq!(p.percentage_label(), "100%");
    }

    #[test]
    fn label_rounds() {
        let mut p = PreloaderProgress::default();
        p.tick();
        assert_eq!(p.percentage_label(), "2%");
        p.tick();
        assert_eq!(p.percentage_label(), "3%");
    }

    #[test]
    fn load_waits_out_the_minimum_display() {
        let mut p = PreloaderProgress::default();
        p.tick();
        p.complete();
        assert!(p.is_full());
        assert_eq!(remaining_display_ms(1_000.0), 2_000);
        assert_eq!(remaining_display_ms(3_000.0), 0);
        assert_eq!(remaining_display_ms(4_500.0), 0);
        assert_eq!(remaining_display_ms(2_999.5), 1);
    }

    #[test]
    fn reducer_follows_the_model() {
        let p = Rc::new(PreloaderProgress::default());
        let p = p.reduce(ProgressAction::Tick);
        assert_eq!(p.progress(), 1.5);
        let p = p.reduce(ProgressAction::Loaded);
        assert!(p.is_full());
    }

    #[test]
    fn hiding_waits_before_fading() {
        assert_eq!(hide_latency_ms(), 1_100);
        // emergency path: hidden at 6000 ms, on_hidden at 7100 ms
        assert_eq!(config::PRELOADER_EMERGENCY_MS + hide_latency_ms(), 7_100);
    }

    #[test]
    fn load_and_emergency_hide_only_once() {
        let mut latch = HideLatch::default();
        assert!(!latch.started());

        let mut on_hidden = 0;
        // load hides at the minimum display, emergency fires later anyway
        for _source in ["load", "emergency"] {
            if latch.begin() {
                on_hidden += 1;
            }
        }
        assert_eq!(on_hidden, 1);
        assert!(latch.started());
        assert!(!latch.begin());
    }

    #[test]
    fn emergency_deadline_is_after_minimum() {
        assert!(config::PRELOADER_EMERGENCY_MS > config::PRELOADER_MIN_DISPLAY_MS);
    }
}
