use gloo_timers::callback::Timeout;
use gloo_timers::future::TimeoutFuture;
use log::info;
use wasm_bindgen_futures::spawn_local;
use yew::prelude::*;
use yew_router::prelude::*;

mod config;
mod dom;
mod chat {
    pub mod contact;
    pub mod conversation;
}
mod components {
    pub mod about_tabs;
    pub mod back_to_top;
    pub mod carousel;
    pub mod footer;
    pub mod navbar;
    pub mod particles;
    pub mod preloader;
    pub mod project_filter;
    pub mod reveal;
    pub mod typing;
}
mod pages {
    pub mod home;
}

use components::{
    back_to_top::BackToTop,
    navbar::Navbar,
    preloader::Preloader,
};
use pages::home::Home;

/// Whether the hero section has played its entrance. Never goes back to false.
#[derive(Clone, Copy, PartialEq, Eq, Debug, Default)]
pub struct HeroReveal(pub bool);

impl HeroReveal {
    /// Marks the hero revealed. True only on the first call.
    pub fn reveal(&mut self) -> bool {
        !std::mem::replace(&mut self.0, true)
    }
}

#[derive(Clone, Routable, PartialEq)]
pub enum Route {
    #[at("/")]
    Home,
    #[not_found]
    #[at("/404")]
    NotFound,
}

fn switch(routes: Route) -> Html {
    match routes {
        Route::Home => {
            info!("Rendering Home page");
            html! { <Home /> }
        }
        Route::NotFound => {
            info!("Unknown route, redirecting home");
            html! { <Redirect<Route> to={Route::Home} /> }
        }
    }
}

#[function_component]
fn App() -> Html {
    let hero_revealed = use_state_eq(|| false);
    let gate = use_mut_ref(HeroReveal::default);

    let reveal_hero = {
        let hero_revealed = hero_revealed.clone();
        Callback::from(move |reason: &'static str| {
            if !gate.borrow_mut().reveal() {
                return;
            }
            info!("Revealing hero ({})", reason);
            hero_revealed.set(true);
        })
    };

    // Safety nets in case the preloader never reports back.
    {
        let reveal_hero = reveal_hero.clone();
        use_effect_with_deps(
            move |_| {
                let fallback = {
                    let reveal_hero = reveal_hero.clone();
                    Timeout::new(config::HERO_FALLBACK_MS, move || reveal_hero.emit("fallback"))
                };
                let final_check = Timeout::new(config::HERO_FINAL_CHECK_MS, move || {
                    reveal_hero.emit("final check")
                });
                move || {
                    drop(fallback);
                    drop(final_check);
                }
            },
            (),
        );
    }

    let on_preloader_hidden = {
        let reveal_hero = reveal_hero.clone();
        Callback::from(move |_: ()| {
            let reveal_hero = reveal_hero.clone();
            spawn_local(async move {
                TimeoutFuture::new(config::HERO_REVEAL_DELAY_MS).await;
                reveal_hero.emit("preloader hidden");
            });
        })
    };

    html! {
        <ContextProvider<HeroReveal> context={HeroReveal(*hero_revealed)}>
            <BrowserRouter>
                <Preloader on_hidden={on_preloader_hidden} />
                <Navbar />
                <Switch<Route> render={switch} />
                <BackToTop />
            </BrowserRouter>
        </ContextProvider<HeroReveal>>
    }
}

fn main() {
    // Initialize console error panic hook for better error messages
    console_error_panic_hook::set_once();

    // Initialize logging
    console_log::init_with_level(config::log_level()).expect("error initializing log");

    info!("Starting portfolio");
    yew::Renderer::<App>::new().render();
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn hero_reveals_once_whichever_trigger_wins() {
        let mut hero = HeroReveal::default();
        let triggers = ["preloader hidden", "fallback", "final check"];
        let fired: Vec<_> = triggers.iter().filter(|_| hero.reveal()).collect();
        assert_eq!(fired, vec![&"preloader hidden"]);
        assert_eq!(hero, HeroReveal(true));
    }

    #[test]
    fn late_preloader_does_not_unreveal() {
        let mut hero = HeroReveal::default();
        assert!(hero.reveal()); // 5 s fallback
        assert!(!hero.reveal()); // preloader finally hidden
        assert!(!hero.reveal()); // 8 s check
        assert!(hero.0);
    }
}
