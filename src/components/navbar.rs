use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys::MouseEvent;
use yew::prelude::*;

use crate::scroll::{past_threshold, NAVBAR_THRESHOLD};

const NAV_LINKS: [(&str, &str); 4] = [
    ("#technology", "기술사양"),
    ("#warranty", "보증정책"),
    ("#projects", "납품실적"),
    ("#contact", "상담신청"),
];

const NAV_STYLE: &str = r#"
.top-nav {
    position: fixed;
    top: 0;
    left: 0;
    right: 0;
    z-index: 50;
    background: transparent;
    transition: background 0.3s ease, border-color 0.3s ease;
    border-bottom: 1px solid transparent;
}
.top-nav.scrolled {
    background: rgba(6, 13, 24, 0.95);
    backdrop-filter: blur(12px);
    border-bottom: 1px solid #1E3F6F;
}
.nav-content {
    max-width: 80rem;
    margin: 0 auto;
    padding: 0 1.5rem;
    height: 5rem;
    display: flex;
    align-items: center;
    justify-content: space-between;
}
.nav-logo {
    color: #fff;
    font-weight: 900;
    font-size: 1.05rem;
    letter-spacing: 0.04em;
    text-decoration: none;
}
.nav-logo-sub {
    color: #94A9C7;
    font-weight: 500;
    font-size: 0.85rem;
}
.nav-links {
    display: flex;
    align-items: center;
    gap: 2rem;
}
.nav-link {
    color: #94A9C7;
    font-size: 0.875rem;
    font-weight: 500;
    text-decoration: none;
    transition: color 0.2s ease;
}
.nav-link:hover { color: #fff; }
.nav-cta {
    display: inline-flex;
    align-items: center;
    justify-content: center;
    padding: 0.625rem 1.25rem;
    border-radius: 0.5rem;
    font-size: 0.875rem;
}
.burger-menu {
    display: none;
    flex-direction: column;
    gap: 4px;
    background: none;
    border: none;
    padding: 0.5rem;
    cursor: pointer;
}
.burger-menu span {
    display: block;
    width: 20px;
    height: 2px;
    background: #94A9C7;
    border-radius: 1px;
}
.mobile-menu {
    display: none;
    flex-direction: column;
    gap: 1rem;
    padding: 1rem 1.5rem 1.5rem;
    background: rgba(6, 13, 24, 0.98);
    backdrop-filter: blur(12px);
    border-bottom: 1px solid #1E3F6F;
}
@media (max-width: 768px) {
    .nav-links, .nav-cta.desktop { display: none; }
    .burger-menu { display: flex; }
    .mobile-menu { display: flex; }
    .mobile-menu .nav-link { padding: 0.25rem 0; }
}
"#;

#[function_component(Navbar)]
pub fn navbar() -> Html {
    let menu_open = use_state(|| false);
    let is_scrolled = use_state(|| false);

    {
        let is_scrolled = is_scrolled.clone();
        use_effect_with_deps(
            move |_| {
                let window = web_sys::window().unwrap();
                let window_clone = window.clone();

                let scroll_callback = Closure::wrap(Box::new(move || {
                    let scroll_y = window_clone.scroll_y().unwrap_or(0.0);
                    is_scrolled.set(past_threshold(scroll_y, NAVBAR_THRESHOLD));
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

    let toggle_menu = {
        let menu_open = menu_open.clone();
        Callback::from(move |e: MouseEvent| {
            e.prevent_default();
            menu_open.set(!*menu_open);
        })
    };

    let close_menu = {
        let menu_open = menu_open.clone();
        Callback::from(move |_: MouseEvent| {
            menu_open.set(false);
        })
    };

    html! {
        <nav class={classes!("top-nav", (*is_scrolled).then(|| "scrolled"))}>
            <style>{NAV_STYLE}</style>
            <div class="nav-content">
                <a href="#" class="nav-logo">
                    {"GOLDEN SOLAR"}
                    <span class="nav-logo-sub">{" × 이에프글로벌코리아"}</span>
                </a>

                <div class="nav-links">
                    { for NAV_LINKS.iter().map(|(href, label)| html! {
                        <a href={*href} class="nav-link">{*label}</a>
                    }) }
                </div>

                <a href="#contact" class="nav-cta desktop btn-primary">{"단가 문의하기"}</a>

                <button class="burger-menu" onclick={toggle_menu} aria-label="메뉴">
                    <span></span>
                    <span></span>
                    <span></span>
                </button>
            </div>
            {
                if *menu_open {
                    html! {
                        <div class="mobile-menu">
                            { for NAV_LINKS.iter().map(|(href, label)| html! {
                                <a href={*href} class="nav-link" onclick={close_menu.clone()}>{*label}</a>
                            }) }
                            <a href="#contact" class="nav-cta btn-primary" onclick={close_menu.clone()}>
                                {"단가 문의하기"}
                            </a>
                        </div>
                    }
                } else {
                    html! {}
                }
            }
        </nav>
    }
}
