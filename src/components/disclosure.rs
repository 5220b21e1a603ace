use web_sys::MouseEvent;
use yew::prelude::*;

/// Open/closed state of one FAQ entry. Entries never affect each other.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum Disclosure {
    #[default]
    Collapsed,
    Expanded,
}

impl Disclosure {
    pub fn toggled(self) -> Self {
        match self {
            Disclosure::Collapsed => Disclosure::Expanded,
            Disclosure::Expanded => Disclosure::Collapsed,
        }
    }

    pub fn is_open(self) -> bool {
        self == Disclosure::Expanded
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct FaqEntry {
    pub question: &'static str,
    pub answer: &'static str,
}

/// Id of the answer region, only while it is in the DOM.
fn rendered_answer_id(item_id: &str, state: Disclosure) -> Option<String> {
    state.is_open().then(|| format!("{}-answer", item_id))
}

#[derive(Properties, PartialEq)]
pub struct DisclosureItemProps {
    pub id: AttrValue,
    pub question: AttrValue,
    pub answer: AttrValue,
}

#[function_component(DisclosureItem)]
pub fn disclosure_item(props: &DisclosureItemProps) -> Html {
    let state = use_state(Disclosure::default);

    let toggle = {
        let state = state.clone();
        Callback::from(move |e: MouseEvent| {
            e.prevent_default();
            state.set(state.toggled());
        })
    };

    let is_open = state.is_open();
    let answer_id = rendered_answer_id(&props.id, *state);

    html! {
        <div id={props.id.clone()} class={classes!("faq-item", is_open.then(|| "open"))}>
            <button
                class="faq-question"
                onclick={toggle}
                aria-expanded={is_open.to_string()}
                aria-controls={answer_id.clone()}
            >
                <span class="question-text">{&props.question}</span>
                <span class={classes!("faq-chevron", is_open.then(|| "rotated"))}>{"⌄"}</span>
            </button>
            {
                // Collapsed answers are left out of the DOM entirely
                match answer_id {
                    Some(answer_id) => html! {
                        <div id={answer_id} class="faq-answer">
                            <p>{&props.answer}</p>
                        </div>
                    },
                    None => html! {},
                }
            }
        </div>
    }
}

#[derive(Properties, PartialEq)]
pub struct DisclosureListProps {
    pub entries: &'static [FaqEntry],
}

#[function_component(DisclosureList)]
pub fn disclosure_list(props: &DisclosureListProps) -> Html {
    html! {
        <div class="faq-list">
            {
                props.entries.iter().enumerate().map(|(i, entry)| {
                    html! {
                        <DisclosureItem
                            key={i}
                            id={format!("faq-{}", i)}
                            question={entry.question}
                            answer={entry.answer}
                        />
                    }
                }).collect::<Html>()
            }
        </div>
    }
}
