use log::debug;
use web_sys::{HtmlElement, HtmlInputElement};
use yew::prelude::*;

use super::conversation::{greeting, ChatMessage, ConversationState};

/// Conversation plus the transcript it has produced so far.
#[derive(Debug, Clone, PartialEq)]
pub struct Dialogue {
    conversation: ConversationState,
    transcript: Vec<ChatMessage>,
}

impl Default for Dialogue {
    fn default() -> Self {
        Self {
            conversation: ConversationState::new(),
            transcript: vec![ChatMessage::bot(greeting())],
        }
    }
}

impl Dialogue {
    pub fn transcript(&self) -> &[ChatMessage] {
        &self.transcript
    }

    pub fn conversation(&self) -> &ConversationState {
        &self.conversation
    }

    pub fn input_enabled(&self) -> bool {
        self.conversation.accepts_input()
    }

    /// Appends the user's message and the bot's reply. Blank input and
    /// input after the dialogue has finished are ignored.
    pub fn submit(&mut self, raw: &str) -> bool {
        if !self.input_enabled() {
            return false;
        }
        match self.conversation.submit(raw) {
            Some(turn) => {
                debug!("Contact step is now {}", self.conversation.step());
                self.transcript.push(turn.user);
                self.transcript.push(turn.bot);
                true
            }
            None => false,
        }
    }
}

pub enum ContactChatMsg {
    SetInput(String),
    Submit,
}

pub struct ContactChat {
    dialogue: Dialogue,
    input: String,
    messages_ref: NodeRef,
}

impl Component for ContactChat {
    type Message = ContactChatMsg;
    type Properties = ();

    fn create(_ctx: &Context<Self>) -> Self {
        Self {
            dialogue: Dialogue::default(),
            input: String::new(),
            messages_ref: NodeRef::default(),
        }
    }

    fn update(&mut self, _ctx: &Context<Self>, msg: Self::Message) -> bool {
        match msg {
            ContactChatMsg::SetInput(value) => {
                self.input = value;
                true
            }
            ContactChatMsg::Submit => {
                if self.dialogue.submit(&self.input) {
                    self.input.clear();
                    true
                } else {
                    false
                }
            }
        }
    }

    fn rendered(&mut self, _ctx: &Context<Self>, _first_render: bool) {
        if let Some(list) = self.messages_ref.cast::<HtmlElement>() {
            list.set_scroll_top(list.scroll_height());
        }
    }

    fn view(&self, ctx: &Context<Self>) -> Html {
        let link = ctx.link();

        let oninput = link.callback(|e: InputEvent| {
            let input: HtmlInputElement = e.target_unchecked_into();
            ContactChatMsg::SetInput(input.value())
        });
        let onkeypress = link.batch_callback(|e: KeyboardEvent| {
            (e.key() == "Enter").then_some(ContactChatMsg::Submit)
        });
        let onclick = link.callback(|_: MouseEvent| ContactChatMsg::Submit);

        html! {
            <div class="chatbot">
                <div class="chatbot-header">
                    <span class="chatbot-status"></span>
                    {"Let's talk"}
                </div>
                <div id="chatbotMessages" class="chatbot-messages" ref={self.messages_ref.clone()}>
                    { for self.dialogue.transcript().iter().map(|message| html! {
                        <div class={classes!("message", message.participant.class())}>
                            <span>{message.text.clone()}</span>
                        </div>
                    }) }
                </div>
                {
                    if self.dialogue.input_enabled() {
                        html! {
                            <div id="chatbotInput" class="chatbot-input">
                                <input
                                    id="chatbotInputField"
                                    type="text"
                                    placeholder="Type your answer..."
                                    value={self.input.clone()}
                                    oninput={oninput}
                                    onkeypress={onkeypress}
                                />
                                <button onclick={onclick}>{"Send"}</button>
                            </div>
                        }
                    } else {
                        html! {}
                    }
                }
                <style>
                    {r#"
                        .chatbot {
                            max-width: 560px;
                            margin: 0 auto;
                            border-radius: 20px;
                            overflow: hidden;
                            background: rgba(255, 255, 255, 0.04);
                            border: 1px solid rgba(96, 165, 250, 0.2);
                        }
                        .chatbot-header {
                            display: flex;
                            align-items: center;
                            gap: 0.5rem;
                            padding: 1rem 1.25rem;
                            font-weight: 600;
                            background: rgba(50, 127, 252, 0.15);
                        }
                        .chatbot-status {
                            width: 8px;
                            height: 8px;
                            border-radius: 50%;
                            background: #22c55e;
                        }
                        .chatbot-messages {
                            height: 320px;
                            overflow-y: auto;
                            padding: 1rem;
                            display: flex;
                            flex-direction: column;
                            gap: 0.6rem;
                        }
                        .message {
                            display: flex;
                        }
                        .message span {
                            max-width: 80%;
                            padding: 0.6rem 0.9rem;
                            border-radius: 14px;
                            line-height: 1.4;
                        }
                        .message.bot span {
                            background: rgba(255, 255, 255, 0.08);
                            color: #e2e8f0;
                        }
                        .message.user {
                            justify-content: flex-end;
                        }
                        .message.user span {
                            background: #327ffc;
                            color: #fff;
                        }
                        .chatbot-input {
                            display: flex;
                            gap: 0.5rem;
                            padding: 0.75rem;
                            border-top: 1px solid rgba(255, 255, 255, 0.08);
                        }
                        .chatbot-input input {
                            flex: 1;
                            padding: 0.6rem 0.9rem;
                            border-radius: 10px;
                            border: 1px solid rgba(255, 255, 255, 0.15);
                            background: transparent;
                            color: #fff;
                        }
                        .chatbot-input button {
                            padding: 0.6rem 1.2rem;
                            border: none;
                            border-radius: 10px;
                            background: #327ffc;
                            color: #fff;
                            cursor: pointer;
                        }
                    "#}
                </style>
            </div>
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::chat::conversation::{Participant, Step};

    #[test]
    fn opens_with_a_greeting() {
        let dialogue = Dialogue::default();
        assert_eq!(dialogue.transcript().len(), 1);
        assert_eq!(dialogue.transcript()[0].participant, Participant::Bot);
        assert!(dialogue.input_enabled());
    }

    #[test]
    fn each_turn_appends_user_then_bot() {
        let mut dialogue = Dialogue::default();
        assert!(dialogue.submit("Sam"));
        let participants: Vec<_> = dialogue.transcript().iter().map(|m| m.participant).collect();
        assert_eq!(participants, [Participant::Bot, Participant::User, Participant::Bot]);
        assert_eq!(dialogue.transcript()[1].text, "Sam");
    }

    #[test]
    fn blank_submit_appends_nothing() {
        let mut dialogue = Dialogue::default();
        let before = dialogue.clone();
        assert!(!dialogue.submit("   "));
        assert_eq!(dialogue, before);
    }

    #[test]
    fn finishing_disables_input_for_good() {
        let mut dialogue = Dialogue::default();
        for input in ["Sam", "sam@x.io", "Hi", "Hello", "no"] {
            assert!(dialogue.submit(input));
        }
        assert_eq!(dialogue.conversation().step(), Step::Finished);
        assert!(!dialogue.input_enabled());

        let len = dialogue.transcript().len();
        assert!(!dialogue.submit("hello again"));
        assert_eq!(dialogue.transcript().len(), len);
    }
}
