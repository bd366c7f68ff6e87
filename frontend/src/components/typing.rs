use std::cell::Cell;
use std::rc::Rc;

use gloo_timers::future::TimeoutFuture;
use wasm_bindgen_futures::spawn_local;
use yew::prelude::*;

use crate::config;

/// Looping type-then-erase effect over a fixed list of phrases.
#[derive(Debug, Clone)]
pub struct Typewriter {
    phrases: &'static [&'static str],
    index: usize,
    visible: usize,
    deleting: bool,
}

impl Typewriter {
    pub fn new(phrases: &'static [&'static str]) -> Self {
        Self {
            phrases,
            index: 0,
            visible: 0,
            deleting: false,
        }
    }

    fn current_len(&self) -> usize {
        self.phrases
            .get(self.index)
            .map(|p| p.chars().count())
            .unwrap_or(0)
    }

    pub fn text(&self) -> String {
        self.phrases
            .get(self.index)
            .map(|p| p.chars().take(self.visible).collect())
            .unwrap_or_default()
    }

    /// Advances one character and returns how long to wait before the next step.
    pub fn step(&mut self) -> u32 {
        if self.phrases.is_empty() {
            return config::TYPE_SPEED_MS;
        }

        if self.deleting {
            self.visible = self.visible.saturating_sub(1);
            if self.visible == 0 {
                self.deleting = false;
                self.index = (self.index + 1) % self.phrases.len();
                return config::TYPE_SPEED_MS;
            }
            return config::BACK_SPEED_MS;
        }

        if self.visible < self.current_len() {
            self.visible += 1;
        }
        if self.visible >= self.current_len() {
            self.deleting = true;
            return config::BACK_DELAY_MS;
        }
        config::TYPE_SPEED_MS
    }
}

#[function_component(TypingText)]
pub fn typing_text() -> Html {
    let text = use_state(String::new);

    {
        let text = text.clone();
        use_effect_with_deps(
            move |_| {
                let alive = Rc::new(Cell::new(true));
                {
                    let alive = alive.clone();
                    spawn_local(async move {
                        let mut typewriter = Typewriter::new(config::TYPED_STRINGS);
                        while alive.get() {
                            let delay = typewriter.step();
                            text.set(typewriter.text());
                            TimeoutFuture::new(delay).await;
                        }
                    });
                }
                move || alive.set(false)
            },
            (),
        );
    }

    html! {
        <span class="typing-text">
            {(*text).clone()}
            <span class="typing-cursor">{"|"}</span>
        </span>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const WORDS: &[&str] = &["ab", "c"];

    #[test]
    fn types_pauses_erases_and_loops() {
        let mut t = Typewriter::new(WORDS);
        assert_eq!(t.step(), config::TYPE_SPEED_MS);
        assert_eq!(t.text(), "a");
        assert_eq!(t.step(), config::BACK_DELAY_MS);
        assert_eq!(t.text(), "ab");
        assert_eq!(t.step(), config::BACK_SPEED_MS);
        assert_eq!(t.text(), "a");
        assert_eq!(t.step(), config::TYPE_SPEED_MS);
        assert_eq!(t.text(), "");

        assert_eq!(t.step(), config::BACK_DELAY_MS);
        assert_eq!(t.text(), "c");
        t.step();
        // wrapped back to the first phrase
        t.step();
        assert_eq!(t.text(), "a");
    }

    #[test]
    fn handles_multibyte_phrases() {
        let mut t = Typewriter::new(&["héllo"]);
        t.step();
        t.step();
        assert_eq!(t.text(), "hé");
    }

    #[test]
    fn empty_phrase_list_is_inert() {
        let mut t = Typewriter::new(&[]);
        assert_eq!(t.step(), config::TYPE_SPEED_MS);
        assert_eq!(t.text(), "");
    }

    #[test]
    fn default_phrases_cycle() {
        let mut t = Typewriter::new(config::TYPED_STRINGS);
        let mut seen = Vec::new();
        for _ in 0..2_000 {
            t.step();
            let text = t.text();
            if config::TYPED_STRINGS.contains(&text.as_str()) && seen.last() != Some(&text) {
                seen.push(text);
            }
        }
        assert!(seen.len() > config::TYPED_STRINGS.len());
        assert_eq!(seen[0], "Full Stack Developer");
        assert_eq!(seen[config::TYPED_STRINGS.len()], "Full Stack Developer");
    }
}
