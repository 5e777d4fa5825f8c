use stylist::yew::Global;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::{JsCast, JsValue};
use yew::prelude::*;

use crate::components::contact::ContactSection;
use crate::components::footer::Footer;
use crate::components::hero::Hero;
use crate::components::social_proof::SocialProof;
use crate::components::technology::Technology;
use crate::components::warranty::Warranty;

/// Fraction of the viewport height a section top must cross before the
/// section is revealed.
const REVEAL_VIEWPORT_FRACTION: f64 = 0.85;

const GLOBAL_STYLE: &str = r#"
* { box-sizing: border-box; }
html { scroll-behavior: smooth; }
body {
    margin: 0;
    background: #060D18;
    color: #fff;
    font-family: "Noto Sans KR", -apple-system, BlinkMacSystemFont, "Segoe UI", sans-serif;
    -webkit-font-smoothing: antialiased;
}
.section-label {
    display: inline-block;
    color: #F97316;
    font-size: 0.8rem;
    font-weight: 700;
    letter-spacing: 0.12em;
    text-transform: uppercase;
    margin-bottom: 0.75rem;
}
.section-head { text-align: center; margin-bottom: 4rem; }
.section-title {
    font-size: clamp(2rem, 4vw, 3rem);
    font-weight: 900;
    color: #fff;
    margin: 0.75rem 0 1rem;
}
.section-lede {
    color: #94A9C7;
    font-size: 1.125rem;
    max-width: 42rem;
    margin: 0 auto;
    line-height: 1.7;
}
.gradient-text {
    background: linear-gradient(90deg, #F97316, #FB923C);
    -webkit-background-clip: text;
    background-clip: text;
    -webkit-text-fill-color: transparent;
}
.btn-primary {
    background: linear-gradient(135deg, #F97316, #EA580C);
    color: #fff;
    font-weight: 700;
    border: none;
    cursor: pointer;
    text-decoration: none;
    transition: filter 0.2s ease, transform 0.2s ease;
}
.btn-primary:hover { filter: brightness(1.1); }
.hero-cta-main {
    padding: 1rem 2rem;
    border-radius: 0.75rem;
    font-size: 1rem;
    text-align: center;
}
.form-input {
    width: 100%;
    padding: 0.75rem 1rem;
    border-radius: 0.75rem;
    font-size: 0.875rem;
    background: #0A1628;
    border: 1px solid #1E3F6F;
    color: #fff;
    outline: none;
    transition: border-color 0.2s ease;
    font-family: inherit;
}
.form-input:focus { border-color: #F97316; }
.form-input::placeholder { color: #5A7090; }
textarea.form-input { resize: none; }
.reveal {
    opacity: 0;
    transform: translateY(30px);
    transition: opacity 0.8s ease, transform 0.8s ease;
}
.reveal-visible {
    opacity: 1;
    transform: none;
}
"#;

#[function_component(Home)]
pub fn home() -> Html {
    // Scroll to top only on initial mount
    use_effect_with_deps(
        move |_| {
            if let Some(window) = web_sys::window() {
                window.scroll_to_with_x_and_y(0.0, 0.0);
            }
            || ()
        },
        (),
    );

    // Reveal sections once they cross the viewport threshold
    use_effect_with_deps(
        move |_| {
            let window = web_sys::window().unwrap();
            let document = window.document().unwrap();
            let window_clone = window.clone();

            let reveal_callback = Closure::wrap(Box::new(move || {
                let viewport_h = window_clone
                    .inner_height()
                    .ok()
                    .and_then(|h| h.as_f64())
                    .unwrap_or(0.0);

                if let Ok(nodes) = document.query_selector_all(".reveal") {
                    for i in 0..nodes.length() {
                        let el = match nodes.item(i).and_then(|n| n.dyn_into::<web_sys::Element>().ok()) {
                            Some(el) => el,
                            None => continue,
                        };
                        if el.get_bounding_client_rect().top() < viewport_h * REVEAL_VIEWPORT_FRACTION {
                            let _ = el.class_list().add_1("reveal-visible");
                        }
                    }
                }
            }) as Box<dyn FnMut()>);

            window
                .add_event_listener_with_callback("scroll", reveal_callback.as_ref().unchecked_ref())
                .unwrap();

            // Initial pass so above-the-fold sections don't wait for a scroll
            reveal_callback
                .as_ref()
                .unchecked_ref::<web_sys::js_sys::Function>()
                .call0(&JsValue::NULL)
                .unwrap();

            move || {
                window
                    .remove_event_listener_with_callback(
                        "scroll",
                        reveal_callback.as_ref().unchecked_ref(),
                    )
                    .unwrap();
            }
        },
        (),
    );

    html! {
        <>
            <Global css={GLOBAL_STYLE} />
            <main class="landing-page">
                <Hero />
                <Technology />
                <Warranty />
                <SocialProof />
                <ContactSection />
                <Footer />
            </main>
        </>
    }
}
