use web_sys::Element;
use yew::prelude::*;

use crate::components::observer::VisibilityObserver;

const REVEAL_THRESHOLD: f64 = 0.16;

#[derive(Properties, PartialEq)]
pub struct RevealProps {
    /// Position within its row; reveals in the same row stagger by
    /// `(index % 3) * 70` ms.
    #[prop_or(0)]
    pub index: usize,
    #[prop_or_default]
    pub class: Classes,
    #[prop_or_default]
    pub children: Children,
}

/// Wraps a section that fades in the first time it scrolls into view.
/// Without IntersectionObserver support the content is visible straight
/// away; the `has-reveal` root class set in `main` keeps the page readable
/// when no script runs at all.
#[function_component(Reveal)]
pub fn reveal(props: &RevealProps) -> Html {
    let node = use_node_ref();
    let visible = use_state(|| false);
    let observer = use_mut_ref(|| None::<VisibilityObserver>);

    {
        let node = node.clone();
        let visible = visible.clone();
        let observer = observer.clone();
        use_effect_with_deps(
            move |_| {
                if !VisibilityObserver::supported() {
                    visible.set(true);
                } else if let Some(element) = node.cast::<Element>() {
                    let on_visible = {
                        let visible = visible.clone();
                        move || visible.set(true)
                    };
                    match VisibilityObserver::once(&element, REVEAL_THRESHOLD, on_visible) {
                        Some(guard) => *observer.borrow_mut() = Some(guard),
                        None => visible.set(true),
                    }
                }
                move || {
                    observer.borrow_mut().take();
                }
            },
            (),
        );
    }

    let delay = (props.index % 3) * 70;
    html! {
        <div
            ref={node}
            class={classes!("reveal", (*visible).then_some("is-visible"), props.class.clone())}
            style={format!("transition-delay: {delay}ms")}
        >
            { for props.children.iter() }
        </div>
    }
}
