use web_sys::MouseEvent;
use yew::prelude::*;

#[derive(Debug, Clone, PartialEq)]
pub struct FaqEntry {
    pub question: &'static str,
    pub answer: &'static str,
}

#[derive(Properties, PartialEq)]
pub struct FaqSectionProps {
    pub entries: Vec<FaqEntry>,
}

/// Exclusive accordion: opening one question closes the rest.
#[function_component(FaqSection)]
pub fn faq_section(props: &FaqSectionProps) -> Html {
    let open = use_state(|| None::<usize>);

    let on_toggle = {
        let open = open.clone();
        Callback::from(move |index: usize| {
            open.set(if *open == Some(index) { None } else { Some(index) });
        })
    };

    html! {
        <div class="faq-list">
            {
                for props.entries.iter().enumerate().map(|(index, entry)| html! {
                    <FaqItem
                        index={index}
                        question={entry.question}
                        answer={entry.answer}
                        open={*open == Some(index)}
                        on_toggle={on_toggle.clone()}
                    />
                })
            }
        </div>
    }
}

#[derive(Properties, PartialEq)]
struct FaqItemProps {
    index: usize,
    question: &'static str,
    answer: &'static str,
    open: bool,
    on_toggle: Callback<usize>,
}

#[function_component(FaqItem)]
fn faq_item(props: &FaqItemProps) -> Html {
    let toggle = {
        let on_toggle = props.on_toggle.clone();
        let index = props.index;
        Callback::from(move |e: MouseEvent| {
            e.prevent_default();
            on_toggle.emit(index);
        })
    };

    html! {
        <div class={classes!("faq-item", props.open.then_some("open"))}>
            <button
                type="button"
                class="faq-trigger"
                aria-expanded={if props.open { "true" } else { "false" }}
                onclick={toggle}
            >
                <span class="question-text">{props.question}</span>
                <span class="toggle-icon">{if props.open { "−" } else { "+" }}</span>
            </button>
            <div class="faq-panel">
                <p>{props.answer}</p>
            </div>
        </div>
    }
}
