use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use yew::prelude::*;

use crate::config;
use crate::dom::{self, Debouncer};

#[function_component(BackToTop)]
pub fn back_to_top() -> Html {
    let visible = use_state(|| false);

    {
        let visible = visible.clone();
        use_effect_with_deps(
            move |_| {
                let debounce = Debouncer::new(config::BACK_TO_TOP_DEBOUNCE_MS);
                let window = dom::get_window().ok();

                let scroll_callback = {
                    let debounce = debounce.clone();
                    Closure::wrap(Box::new(move || {
                        let visible = visible.clone();
                        debounce.call(move || {
                            visible.set(dom::scroll_y() > config::BACK_TO_TOP_PX);
                        });
                    }) as Box<dyn FnMut()>)
                };

                if let Some(window) = &window {
                    let _ = window.add_event_listener_with_callback(
                        "scroll",
                        scroll_callback.as_ref().unchecked_ref(),
                    );
                }

                move || {
                    if let Some(window) = window {
                        let _ = window.remove_event_listener_with_callback(
                            "scroll",
                            scroll_callback.as_ref().unchecked_ref(),
                        );
                    }
                    debounce.cancel();
                }
            },
            (),
        );
    }

    let onclick = Callback::from(|e: MouseEvent| {
        e.prevent_default();
        dom::scroll_to_top();
    });

    html! {
        <>
            <a href="#hero"
               class={classes!("back-to-top", (*visible).then(|| "visible"))}
               aria-label="Back to top"
               onclick={onclick}>
                {"↑"}
            </a>
            <style>
                {r#"
                    .back-to-top {
                        position: fixed;
                        right: 2rem;
                        bottom: 2rem;
                        width: 44px;
                        height: 44px;
                        border-radius: 50%;
                        display: flex;
                        align-items: center;
                        justify-content: center;
                        background: #327ffc;
                        color: #fff;
                        text-decoration: none;
                        opacity: 0;
                        visibility: hidden;
                        transform: translateY(20px);
                        transition: all 0.3s ease;
                        z-index: 90;
                    }
                    .back-to-top.visible {
                        opacity: 1;
                        visibility: visible;
                        transform: translateY(0);
                    }
                "#}
            </style>
        </>
    }
}
