use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use yew::prelude::*;

use crate::scroll::{past_threshold, FLOATING_CTA_THRESHOLD};

const FLOATING_CTA_STYLE: &str = r#"
.floating-cta {
    position: fixed;
    bottom: 1.5rem;
    left: 50%;
    transform: translateX(-50%);
    z-index: 50;
    transition: opacity 0.3s ease, transform 0.3s ease;
}
.floating-cta.hidden {
    opacity: 0;
    transform: translateX(-50%) translateY(1rem);
    pointer-events: none;
}
.floating-cta a {
    display: flex;
    align-items: center;
    justify-content: center;
    gap: 0.5rem;
    padding: 0.875rem 1.5rem;
    border-radius: 9999px;
    font-size: 0.875rem;
    font-weight: 700;
    white-space: nowrap;
    box-shadow: 0 8px 32px rgba(249, 115, 22, 0.5);
}
"#;

/// Floating consultation button. Stays mounted while hidden so the
/// fade transition has something to run on.
#[function_component(FloatingCta)]
pub fn floating_cta() -> Html {
    let visible = use_state(|| false);

    {
        let visible = visible.clone();
        use_effect_with_deps(
            move |_| {
                let window = web_sys::window().unwrap();
                let window_clone = window.clone();

                let scroll_callback = Closure::wrap(Box::new(move || {
                    let scroll_y = window_clone.scroll_y().unwrap_or(0.0);
                    visible.set(past_threshold(scroll_y, FLOATING_CTA_THRESHOLD));
                }) as Box<dyn FnMut()>);

                window
                    .add_event_listener_with_callback(
                        "scroll",
                        scroll_callback.as_ref().unchecked_ref(),
                    )
                    .unwrap();

                move || {
                    window
                        .remove_event_listener_with_callback(
                            "scroll",
                            scroll_callback.as_ref().unchecked_ref(),
                        )
                        .unwrap();
                }
            },
            (),
        );
    }

    html! {
        <div class={classes!("floating-cta", (!*visible).then(|| "hidden"))}>
            <style>{FLOATING_CTA_STYLE}</style>
            <a href="#contact" class="btn-primary">
                <svg width="16" height="16" viewBox="0 0 16 16" fill="none">
                    <path d="M2 4.5C2 3.67 2.67 3 3.5 3h9C13.33 3 14 3.67 14 4.5v7c0 .83-.67 1.5-1.5 1.5h-9C2.67 13 2 12.33 2 11.5v-7z" stroke="white" stroke-width="1.5"/>
                    <path d="M2 5l6 4 6-4" stroke="white" stroke-width="1.5" stroke-linecap="round"/>
                </svg>
                {"무료 기술 상담 신청하기"}
            </a>
        </div>
    }
}
