use yew::prelude::*;

use crate::components::counter::{HeroStats, StatFigure};
use crate::components::faq::{FaqEntry, FaqSection};
use crate::components::reveal::Reveal;
use crate::components::waitlist_form::WaitlistForm;

const FAQ_ENTRIES: &[FaqEntry] = &[
    FaqEntry {
        question: "What exactly does Quarterly do?",
        answer: "Quarterly pulls your recurring money admin into one quarterly checklist: tax to set \
                 aside, subscriptions to prune, invoices still unpaid. You get one calm review every \
                 three months instead of a year-end scramble.",
    },
    FaqEntry {
        question: "When does early access open?",
        answer: "We are onboarding the waitlist in small weekly batches. Joining today puts you in \
                 the next batch; we will email you when your spot opens.",
    },
    FaqEntry {
        question: "How much will it cost?",
        answer: "Early access is free. At launch there will be a single flat plan; waitlist members \
                 keep a founding discount for their first year.",
    },
    FaqEntry {
        question: "Do you connect to my bank?",
        answer: "Not during early access. You start from a read-only import, and bank connections \
                 arrive later through a regulated open-banking provider.",
    },
    FaqEntry {
        question: "What happens to my email address?",
        answer: "It is stored only to invite you and is never shared. One click in any email removes \
                 you from the list.",
    },
];

#[function_component(Landing)]
pub fn landing() -> Html {
    let figures = vec![
        StatFigure {
            amount: 12_400,
            caption: "average put aside per year",
        },
        StatFigure {
            amount: 3_150,
            caption: "tax reserved each quarter",
        },
        StatFigure {
            amount: 940,
            caption: "forgotten subscriptions cut",
        },
    ];

    html! {
        <div class="landing-page">
            <style>{LANDING_CSS}</style>
            <header class="hero">
                <div class="hero-content">
                    <p class="eyebrow">{"Quarterly early access"}</p>
                    <h1 class="hero-title">{"Your quarter, sorted."}</h1>
                    <p class="hero-sub">
                        {"One calm review every three months. Quarterly rounds up the money admin \
                          you keep postponing and hands it back as a short checklist."}
                    </p>
                    <WaitlistForm source="hero" />
                </div>
                <HeroStats figures={figures} />
            </header>
            <main>
                <section class="features">
                    <Reveal index={0} class={classes!("feature")}>
                        <h2>{"Everything due, in one place"}</h2>
                        <p>
                            {"VAT deadlines, subscription renewals, invoices drifting past due. \
                              Quarterly collects them into a single list ordered by what it costs \
                              you to ignore."}
                        </p>
                    </Reveal>
                    <Reveal index={1} class={classes!("feature")}>
                        <h2>{"Set aside the right amount"}</h2>
                        <p>
                            {"Tell it roughly what you earn and Quarterly suggests what to move \
                              into the tax pot before the quarter closes. No spreadsheets, no \
                              guessing in January."}
                        </p>
                    </Reveal>
                    <Reveal index={2} class={classes!("feature")}>
                        <h2>{"Fifteen minutes, four times a year"}</h2>
                        <p>
                            {"The whole review is designed to fit in a coffee break. Tick the list, \
                              close the tab, forget about money until next quarter."}
                        </p>
                    </Reveal>
                </section>
                <section class="faq">
                    <Reveal>
                        <h2>{"Questions, answered"}</h2>
                        <FaqSection entries={FAQ_ENTRIES.to_vec()} />
                    </Reveal>
                </section>
            </main>
            <footer class="footer">
                <Reveal>
                    <h2>{"Be first in line"}</h2>
                    <p>{"No spam, no noise. One email when your early-access spot opens."}</p>
                    <WaitlistForm source="footer" submit_label="Join the waitlist" />
                </Reveal>
            </footer>
        </div>
    }
}

const LANDING_CSS: &str = r#"
:root {
    color-scheme: dark;
}
body {
    margin: 0;
    background: #101418;
    color: #e8edf2;
    font-family: "Inter", "Helvetica Neue", Arial, sans-serif;
    line-height: 1.6;
}
.landing-page h1,
.landing-page h2 {
    line-height: 1.2;
    background: linear-gradient(45deg, #fff, #8fd3b6);
    -webkit-background-clip: text;
    -webkit-text-fill-color: transparent;
}
.hero {
    display: flex;
    flex-wrap: wrap;
    gap: 3rem;
    align-items: center;
    justify-content: space-between;
    max-width: 1080px;
    margin: 0 auto;
    padding: 6rem 2rem 4rem;
}
.hero-content {
    flex: 1 1 420px;
}
.eyebrow {
    text-transform: uppercase;
    letter-spacing: 0.12em;
    font-size: 0.8rem;
    color: #8fd3b6;
}
.hero-title {
    font-size: 3rem;
    margin: 0.5rem 0 1rem;
}
.hero-sub {
    color: rgba(232, 237, 242, 0.75);
    max-width: 34rem;
}

/* Waitlist form */
.waitlist-form {
    margin-top: 1.5rem;
}
.waitlist-fields {
    display: flex;
    gap: 0.6rem;
    flex-wrap: wrap;
}
.waitlist-fields input[type="email"] {
    flex: 1 1 240px;
    padding: 0.85rem 1rem;
    border-radius: 10px;
    border: 1px solid rgba(143, 211, 182, 0.25);
    background: rgba(255, 255, 255, 0.04);
    color: inherit;
    font-size: 1rem;
}
.waitlist-fields button {
    padding: 0.85rem 1.4rem;
    border-radius: 10px;
    border: none;
    background: #8fd3b6;
    color: #0e1513;
    font-weight: 600;
    font-size: 1rem;
    cursor: pointer;
    transition: background 0.2s ease, transform 0.2s ease;
}
.waitlist-fields button:disabled {
    opacity: 0.7;
    cursor: wait;
}
.waitlist-fields button.submitted {
    background: #c9f2df;
    transform: translateY(-1px);
}
.honeypot {
    position: absolute;
    left: -9999px;
    width: 1px;
    height: 1px;
    opacity: 0;
    pointer-events: none;
}
.form-status {
    min-height: 1.4em;
    margin: 0.6rem 0 0;
    font-size: 0.92rem;
    color: rgba(232, 237, 242, 0.7);
}
.form-status.success {
    color: #8fd3b6;
}
.form-status.error {
    color: #f2a0a0;
}

/* Hero stats */
.hero-visual {
    flex: 0 1 320px;
    display: grid;
    gap: 1.2rem;
    padding: 1.8rem;
    border-radius: 16px;
    border: 1px solid rgba(143, 211, 182, 0.18);
    background: rgba(255, 255, 255, 0.03);
    opacity: 0.6;
    transition: opacity 0.5s ease;
}
.hero-visual.is-live {
    opacity: 1;
}
.stat {
    display: flex;
    flex-direction: column;
}
.stat-value {
    font-size: 1.7rem;
    font-weight: 700;
    color: #c9f2df;
    font-variant-numeric: tabular-nums;
}
.stat-caption {
    font-size: 0.85rem;
    color: rgba(232, 237, 242, 0.6);
}

/* Features */
.features {
    max-width: 1080px;
    margin: 0 auto;
    padding: 2rem;
    display: grid;
    grid-template-columns: repeat(auto-fit, minmax(260px, 1fr));
    gap: 2rem;
}
.feature h2 {
    font-size: 1.4rem;
}
.feature p {
    color: rgba(232, 237, 242, 0.72);
}

/* Reveal-on-scroll, gated on the root class so content never hides when
   the script is not running. */
.has-reveal .reveal {
    opacity: 0;
    transform: translateY(18px);
    transition: opacity 0.6s ease, transform 0.6s ease;
}
.has-reveal .reveal.is-visible {
    opacity: 1;
    transform: none;
}

/* FAQ */
.faq {
    max-width: 720px;
    margin: 0 auto;
    padding: 3rem 2rem;
}
.faq h2 {
    font-size: 1.8rem;
}
.faq-item {
    border-bottom: 1px solid rgba(232, 237, 242, 0.12);
}
.faq-trigger {
    width: 100%;
    display: flex;
    justify-content: space-between;
    align-items: center;
    gap: 1rem;
    padding: 1rem 0;
    border: none;
    background: none;
    color: inherit;
    font-size: 1.05rem;
    text-align: left;
    cursor: pointer;
}
.toggle-icon {
    color: #8fd3b6;
    font-size: 1.3rem;
}
.faq-panel {
    max-height: 0;
    overflow: hidden;
    transition: max-height 0.3s ease;
}
.faq-item.open .faq-panel {
    max-height: 16rem;
}
.faq-panel p {
    margin: 0 0 1rem;
    color: rgba(232, 237, 242, 0.72);
}

/* Footer */
.footer {
    max-width: 720px;
    margin: 0 auto;
    padding: 3rem 2rem 5rem;
    text-align: center;
}
.footer .waitlist-fields {
    justify-content: center;
}

@media (max-width: 768px) {
    .hero {
        padding-top: 4rem;
    }
    .hero-title {
        font-size: 2.2rem;
    }
}
"#;
