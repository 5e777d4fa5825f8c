use gloo_console::log;
use wasm_bindgen_futures::spawn_local;
use web_sys::{HtmlInputElement, HtmlSelectElement, HtmlTextAreaElement};
use yew::prelude::*;

use crate::emailjs::{self, LeadSubmission, FALLBACK_PHONE};

/// The fixed region choices offered in the form.
pub const REGIONS: [&str; 11] = [
    "서울 / 경기",
    "인천 / 강화",
    "강원도",
    "충청북도",
    "충청남도 / 대전",
    "전라북도",
    "전라남도 / 광주",
    "경상북도 / 대구",
    "경상남도 / 부산",
    "제주도",
    "기타",
];

const BENEFITS: [(&str, &str); 4] = [
    ("맞춤형 기술 제안서", "현장 조건 분석 및 최적 시스템 구성 제안"),
    ("경쟁력 있는 단가 제공", "물량 및 지역에 따른 최우선 파트너 단가"),
    ("전국 물류 지원", "경기/남부 물류센터를 통한 신속 배송"),
    ("AS 및 사후 관리", "설치 후 30년 출력 보증 서비스 지원"),
];

const CONTACT_STYLE: &str = r#"
.contact {
    padding: 6rem 0;
    position: relative;
    overflow: hidden;
    background: #0D2044;
}
.contact .glow {
    position: absolute;
    top: 0;
    right: 0;
    width: 500px;
    height: 500px;
    opacity: 0.04;
    pointer-events: none;
    background: radial-gradient(circle, #F97316, transparent 70%);
}
.contact .accent-line {
    position: absolute;
    top: 0; left: 0; right: 0;
    height: 1px;
    background: linear-gradient(to right, transparent, #F97316, transparent);
    opacity: 0.3;
}
.contact-inner {
    max-width: 80rem;
    margin: 0 auto;
    padding: 0 1.5rem;
    display: grid;
    grid-template-columns: 1fr 1fr;
    gap: 3rem;
    align-items: flex-start;
}
.contact-headline {
    font-size: clamp(2rem, 4vw, 3rem);
    font-weight: 900;
    color: #fff;
    line-height: 1.2;
    margin: 0 0 1.5rem;
}
.contact-lede {
    color: #94A9C7;
    font-size: 1.125rem;
    line-height: 1.7;
    margin-bottom: 2rem;
}
.contact-lede strong { color: #fff; }
.benefit-row { display: flex; align-items: flex-start; gap: 1rem; margin-bottom: 1rem; }
.benefit-row .bullet { color: #F97316; font-size: 0.75rem; margin-top: 0.25rem; flex-shrink: 0; }
.benefit-title { color: #fff; font-weight: 600; font-size: 0.875rem; }
.benefit-desc { color: #5A7090; font-size: 0.75rem; margin-top: 0.125rem; }
.direct-contact {
    margin-top: 2rem;
    background: #0A1628;
    border: 1px solid #1E3F6F;
    border-radius: 0.75rem;
    padding: 1.25rem;
}
.direct-contact .head { color: #94A9C7; font-size: 0.875rem; font-weight: 600; margin-bottom: 0.75rem; }
.direct-row { display: flex; align-items: center; gap: 0.75rem; margin-bottom: 0.625rem; }
.direct-row .icon { color: #F97316; }
.direct-main { color: #fff; font-size: 0.875rem; font-weight: 700; }
.direct-sub { color: #5A7090; font-size: 0.75rem; }
.form-frame {
    background: #060D18;
    border: 1px solid #1E3F6F;
    border-radius: 1rem;
    padding: 2rem;
}
.form-frame h3 { color: #fff; font-weight: 700; font-size: 1.25rem; margin: 0 0 0.5rem; }
.form-frame .form-sub { color: #5A7090; font-size: 0.875rem; margin-bottom: 1.5rem; }
.form-field { margin-bottom: 1rem; }
.form-label {
    display: block;
    color: #94A9C7;
    font-size: 0.875rem;
    font-weight: 500;
    margin-bottom: 0.375rem;
}
.form-label .required { color: #F97316; }
.form-label .optional { color: #5A7090; font-weight: 400; }
.submit-note { color: #5A7090; font-size: 0.75rem; text-align: center; margin-top: 1rem; }
.submit-button {
    width: 100%;
    padding: 1rem;
    border-radius: 0.75rem;
    font-size: 1rem;
    font-weight: 700;
    display: flex;
    align-items: center;
    justify-content: center;
    gap: 0.5rem;
}
.submit-button:disabled { opacity: 0.6; cursor: not-allowed; }
.submit-spinner { animation: spin 1s linear infinite; }
@keyframes spin { to { transform: rotate(360deg); } }
.success-panel { text-align: center; padding: 3rem 0; }
.success-icon {
    width: 4rem;
    height: 4rem;
    background: rgba(249, 115, 22, 0.2);
    border-radius: 50%;
    display: flex;
    align-items: center;
    justify-content: center;
    margin: 0 auto 1rem;
}
.success-panel h3 { color: #fff; font-size: 1.5rem; font-weight: 700; margin-bottom: 0.75rem; }
.success-panel p { color: #94A9C7; font-size: 1rem; line-height: 1.7; }
@media (max-width: 1024px) {
    .contact-inner { grid-template-columns: 1fr; }
    .form-frame { order: -1; }
}
"#;

fn success_panel() -> Html {
    html! {
        <div class="success-panel">
            <div class="success-icon">
                <svg width="32" height="32" viewBox="0 0 32 32" fill="none">
                    <circle cx="16" cy="16" r="14" fill="#F97316" opacity="0.2"/>
                    <path d="M10 16L14 20L22 12" stroke="#F97316" stroke-width="2.5" stroke-linecap="round" stroke-linejoin="round"/>
                </svg>
            </div>
            <h3>{"상담 신청 완료"}</h3>
            <p>
                {"빠른 시일 내로 전문 기술 담당자가"}<br/>
                {"연락드리겠습니다. 감사합니다."}
            </p>
        </div>
    }
}

#[function_component(ContactSection)]
pub fn contact_section() -> Html {
    let name = use_state(String::new);
    let phone = use_state(String::new);
    let region = use_state(String::new);
    let message = use_state(String::new);
    let loading = use_state(|| false);
    let submitted = use_state(|| false);

    let on_name = {
        let name = name.clone();
        Callback::from(move |e: InputEvent| {
            let input: HtmlInputElement = e.target_unchecked_into();
            name.set(input.value());
        })
    };

    let on_phone = {
        let phone = phone.clone();
        Callback::from(move |e: InputEvent| {
            let input: HtmlInputElement = e.target_unchecked_into();
            phone.set(input.value());
        })
    };

    let on_region = {
        let region = region.clone();
        Callback::from(move |e: Event| {
            let select: HtmlSelectElement = e.target_unchecked_into();
            region.set(select.value());
        })
    };

    let on_message = {
        let message = message.clone();
        Callback::from(move |e: InputEvent| {
            let area: HtmlTextAreaElement = e.target_unchecked_into();
            message.set(area.value());
        })
    };

    // Runs only when the browser accepted the form as valid; the required
    // fields never reach the delivery call empty.
    let onsubmit = {
        let name = name.clone();
        let phone = phone.clone();
        let region = region.clone();
        let message = message.clone();
        let loading = loading.clone();
        let submitted = submitted.clone();
        Callback::from(move |e: SubmitEvent| {
            e.prevent_default();
            loading.set(true);

            let lead = LeadSubmission::new(&name, &phone, &region, &message);
            let loading = loading.clone();
            let submitted = submitted.clone();
            spawn_local(async move {
                match emailjs::send_lead(&lead).await {
                    Ok(()) => {
                        submitted.set(true);
                    }
                    Err(err) => {
                        log!("lead delivery failed:", err);
                        if let Some(window) = web_sys::window() {
                            let _ = window.alert_with_message(&format!(
                                "전송 중 오류가 발생했습니다. 직접 전화({})로 문의해 주세요.",
                                FALLBACK_PHONE
                            ));
                        }
                    }
                }
                loading.set(false);
            });
        })
    };

    html! {
        <section id="contact" class="contact">
            <style>{CONTACT_STYLE}</style>
            <div class="glow"></div>
            <div class="accent-line"></div>

            <div class="contact-inner">
                <div class="reveal">
                    <div class="section-label">{"전문 기술 상담"}</div>
                    <h2 class="contact-headline">
                        {"귀사의 현장에"}<br/>
                        <span class="gradient-text">{"최적화된"}</span><br/>
                        {"솔루션을 제안합니다."}
                    </h2>
                    <p class="contact-lede">
                        {"시공 규모, 지역, 시스템 구성에 맞는 상세 데이터 시트와 파트너십 조건을 확인하세요."}<br/>
                        <strong>{"24시간 이내"}</strong>
                        {" 전문 기술 담당자가 연락드립니다."}
                    </p>

                    { for BENEFITS.iter().map(|(title, desc)| html! {
                        <div class="benefit-row">
                            <span class="bullet">{"◆"}</span>
                            <div>
                                <div class="benefit-title">{*title}</div>
                                <div class="benefit-desc">{*desc}</div>
                            </div>
                        </div>
                    }) }

                    <div class="direct-contact">
                        <div class="head">{"직접 연락"}</div>
                        <div class="direct-row">
                            <span class="icon">{"📞"}</span>
                            <div>
                                <div class="direct-main">{FALLBACK_PHONE}</div>
                                <div class="direct-sub">{"평일 09:00~18:00"}</div>
                            </div>
                        </div>
                        <div class="direct-row">
                            <span class="icon">{"✉️"}</span>
                            <span class="direct-main">{"efglobalkorea@gmail.com"}</span>
                        </div>
                        <div class="direct-row">
                            <span class="icon">{"📍"}</span>
                            <div>
                                <div class="direct-sub" style="color: #fff;">{"경기도 구리시 건원대로 51, 3105호"}</div>
                                <div class="direct-sub">{"고양시 덕양구 향동로 217 (서울 사무소)"}</div>
                            </div>
                        </div>
                    </div>
                </div>

                <div class="reveal">
                    <div class="form-frame">
                        {
                            if *submitted {
                                success_panel()
                            } else {
                                html! {
                                    <>
                                        <h3>{"전문 기술 상담 신청"}</h3>
                                        <p class="form-sub">{"간단한 정보 입력으로 맞춤 제안을 받으세요."}</p>

                                        <form onsubmit={onsubmit}>
                                            <div class="form-field">
                                                <label class="form-label">
                                                    {"성함 "}<span class="required">{"*"}</span>
                                                </label>
                                                <input
                                                    type="text"
                                                    class="form-input"
                                                    required={true}
                                                    placeholder="홍길동 대표"
                                                    value={(*name).clone()}
                                                    oninput={on_name}
                                                />
                                            </div>

                                            <div class="form-field">
                                                <label class="form-label">
                                                    {"연락처 "}<span class="required">{"*"}</span>
                                                </label>
                                                <input
                                                    type="tel"
                                                    class="form-input"
                                                    required={true}
                                                    placeholder="010-0000-0000"
                                                    value={(*phone).clone()}
                                                    oninput={on_phone}
                                                />
                                            </div>

                                            <div class="form-field">
                                                <label class="form-label">
                                                    {"지역 "}<span class="required">{"*"}</span>
                                                </label>
                                                <select
                                                    class="form-input"
                                                    required={true}
                                                    value={(*region).clone()}
                                                    onchange={on_region}
                                                >
                                                    <option value="" disabled={true} selected={region.is_empty()}>
                                                        {"지역 선택"}
                                                    </option>
                                                    { for REGIONS.iter().map(|r| html! {
                                                        <option value={*r} selected={*region == *r}>{*r}</option>
                                                    }) }
                                                </select>
                                            </div>

                                            <div class="form-field">
                                                <label class="form-label">
                                                    {"상담 내용 "}<span class="optional">{"(선택)"}</span>
                                                </label>
                                                <textarea
                                                    class="form-input"
                                                    rows="3"
                                                    placeholder="시공 규모, 예상 MW, 질문 사항 등을 입력해주세요."
                                                    value={(*message).clone()}
                                                    oninput={on_message}
                                                />
                                            </div>

                                            <button type="submit" class="btn-primary submit-button" disabled={*loading}>
                                                {
                                                    if *loading {
                                                        html! {
                                                            <>
                                                                <svg class="submit-spinner" width="18" height="18" viewBox="0 0 18 18" fill="none">
                                                                    <circle cx="9" cy="9" r="7" stroke="white" stroke-width="2" stroke-dasharray="22 10"/>
                                                                </svg>
                                                                {"처리 중..."}
                                                            </>
                                                        }
                                                    } else {
                                                        html! { {"전문 기술 상담 신청하기 →"} }
                                                    }
                                                }
                                            </button>

                                            <p class="submit-note">{"입력하신 정보는 상담 목적으로만 활용됩니다."}</p>
                                        </form>
                                    </>
                                }
                            }
                        }
                    </div>
                </div>
            </div>
        </section>
    }
}
