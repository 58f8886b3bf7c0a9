use gloo_timers::callback::Timeout;
use web_sys::HtmlInputElement;
use yew::prelude::*;

use crate::config::StoreSettings;
use crate::domain::SignupRecord;
use crate::waitlist::{self, FormStatus, OutcomeView, Preflight, Tone, LABEL_BUSY};

/// How long the "Added OK" / "Already Added" marker stays on the button
/// before the default label comes back.
const SUBMITTED_REVERT_MS: u32 = 1_200;

#[derive(Properties, PartialEq)]
pub struct WaitlistFormProps {
    /// Acquisition channel recorded with the signup.
    #[prop_or(AttrValue::Static("unknown"))]
    pub source: AttrValue,
    #[prop_or(AttrValue::Static("Start free early access"))]
    pub submit_label: AttrValue,
}

/// One waitlist signup form. Each instance runs its own submission flow;
/// the disabled button is what prevents a double submit while a request is
/// in flight.
#[function_component(WaitlistForm)]
pub fn waitlist_form(props: &WaitlistFormProps) -> Html {
    let email = use_state(String::new);
    // Honeypot. Real users never fill it; a value means a bot, and the
    // submission becomes a silent no-op.
    let company = use_state(String::new);
    let status = use_state(|| None::<FormStatus>);
    let busy = use_state(|| false);
    let submitted = use_state(|| false);
    let submitted_label = use_state(|| None::<&'static str>);

    let onsubmit = {
        let email = email.clone();
        let company = company.clone();
        let status = status.clone();
        let busy = busy.clone();
        let submitted = submitted.clone();
        let submitted_label = submitted_label.clone();
        let source = props.source.clone();

        Callback::from(move |e: SubmitEvent| {
            e.prevent_default();

            let parsed = match waitlist::preflight(&email, &company) {
                Preflight::Skip => return,
                Preflight::Invalid => {
                    status.set(Some(FormStatus::invalid_email()));
                    return;
                }
                Preflight::Proceed(parsed) => parsed,
            };

            // Lock the form before the call goes out so it cannot be
            // double-submitted while the request is outstanding.
            status.set(Some(FormStatus::pending()));
            busy.set(true);

            let record = SignupRecord::new(parsed, source.to_string(), user_agent());
            let email = email.clone();
            let company = company.clone();
            let status = status.clone();
            let busy = busy.clone();
            let submitted = submitted.clone();
            let submitted_label = submitted_label.clone();

            wasm_bindgen_futures::spawn_local(async move {
                let store = StoreSettings::from_window().client();
                let outcome = waitlist::submit(store.as_ref(), record).await;
                let view = OutcomeView::for_outcome(&outcome);

                if !view.is_success() {
                    gloo_console::error!("waitlist submission failed", view.status.message);
                }

                status.set(Some(view.status.clone()));
                if view.clears_form {
                    email.set(String::new());
                    company.set(String::new());
                }

                busy.set(false);
                if view.is_success() {
                    submitted.set(true);
                    submitted_label.set(view.submitted_label);
                    let submitted = submitted.clone();
                    let submitted_label = submitted_label.clone();
                    // Fire-and-forget; if the form is gone by then, the
                    // state handles just update nothing anyone renders.
                    Timeout::new(SUBMITTED_REVERT_MS, move || {
                        submitted.set(false);
                        submitted_label.set(None);
                    })
                    .forget();
                } else {
                    submitted_label.set(None);
                }
            });
        })
    };

    let on_email_input = {
        let email = email.clone();
        Callback::from(move |e: InputEvent| {
            let input: HtmlInputElement = e.target_unchecked_into();
            email.set(input.value());
        })
    };
    let on_company_input = {
        let company = company.clone();
        Callback::from(move |e: InputEvent| {
            let input: HtmlInputElement = e.target_unchecked_into();
            company.set(input.value());
        })
    };

    let button_label: &str = if *busy {
        LABEL_BUSY
    } else if let Some(label) = *submitted_label {
        label
    } else {
        props.submit_label.as_str()
    };

    html! {
        <form class="waitlist-form" data-source={props.source.clone()} onsubmit={onsubmit}>
            <div class="waitlist-fields">
                <input
                    type="email"
                    name="email"
                    placeholder="you@company.com"
                    aria-label="Email address"
                    value={(*email).clone()}
                    oninput={on_email_input}
                />
                <input
                    type="text"
                    name="company"
                    class="honeypot"
                    tabindex="-1"
                    autocomplete="off"
                    aria-hidden="true"
                    value={(*company).clone()}
                    oninput={on_company_input}
                />
                <button
                    type="submit"
                    class={classes!((*submitted).then_some("submitted"))}
                    disabled={*busy}
                >
                    {button_label}
                </button>
            </div>
            {
                match (*status).as_ref() {
                    Some(line) => html! {
                        <p class={classes!("form-status", line.tone.map(Tone::css_class))} role="status">
                            {line.message}
                        </p>
                    },
                    None => html! { <p class="form-status" role="status"></p> },
                }
            }
        </form>
    }
}

fn user_agent() -> String {
    web_sys::window()
        .and_then(|window| window.navigator().user_agent().ok())
        .unwrap_or_default()
}
