use yew::prelude::*;

use crate::components::counter::AnimatedCounter;

struct MainSpec {
    value: f64,
    decimals: usize,
    unit: &'static str,
    label: &'static str,
    sub: &'static str,
}

const MAIN_SPECS: [MainSpec; 3] = [
    MainSpec {
        value: 23.18,
        decimals: 2,
        unit: "%",
        label: "모듈 효율",
        sub: "BNPI 기준 25.43%",
    },
    MainSpec {
        value: 720.0,
        decimals: 0,
        unit: "W",
        label: "최대 출력",
        sub: "BNPI 기준 790W",
    },
    MainSpec {
        value: 4.1,
        decimals: 1,
        unit: "%",
        label: "TOPCon 대비 우위",
        sub: "전면 출력 기준",
    },
];

const TECH_FEATURES: [&str; 5] = [
    "0BB 얇은 슬라이스 하프컷 기술 — 은도금 구리 적용으로 전도율 극대화",
    "Anti-LID · Anti-PID · Anti-LeTID — 장기 출력 손실 원천 차단",
    "저온도 계수 -0.248%/°C — 폭염에서도 경쟁 대비 높은 실발전량",
    "스텐실 프린팅 공법 — 균일한 셀 품질 및 일관된 출력 보장",
    "강화 유리 2.0mm + IP68 접합 상자 — 극한 환경 내구성",
];

const CERTIFICATIONS: [&str; 8] = [
    "IEC 61215",
    "IEC 61730",
    "ISO 9001",
    "ISO 14001",
    "ISO 45001",
    "KS (2025)",
    "UL 790",
    "MCS",
];

/// Electrical specifications at STC, as printed on the datasheet.
const TECH_SPECS: [(&str, &str); 12] = [
    ("최대출력 전압 (Vmp)", "42.89 V"),
    ("최대출력 전류 (Imp)", "16.79 A"),
    ("개방회로전압 (Voc)", "51.00 V"),
    ("단락전류 (Isc)", "17.63 A"),
    ("양면 계수 (Φ)", "90 ± 5%"),
    ("온도 계수 (Pmax)", "-0.248 %/°C"),
    ("최대 시스템 전압", "1,500 V"),
    ("모듈 크기", "2384 × 1303 × 33 mm"),
    ("모듈 무게", "37.5 kg"),
    ("적설 하중", "5,400 Pa"),
    ("풍 하중", "2,400 Pa"),
    ("작동 온도", "-40 ~ +85 °C"),
];

const TECHNOLOGY_STYLE: &str = r#"
.technology {
    padding: 6rem 0;
    position: relative;
    background: #0A1628;
}
.technology .accent-line {
    position: absolute;
    top: 0; left: 0; right: 0;
    height: 1px;
    background: linear-gradient(to right, transparent, #F97316, transparent);
    opacity: 0.4;
}
.tech-inner { max-width: 80rem; margin: 0 auto; padding: 0 1.5rem; }
.tech-main-grid {
    display: grid;
    grid-template-columns: repeat(3, 1fr);
    gap: 1.5rem;
    margin-bottom: 3rem;
}
.tech-main-card {
    background: #0D2044;
    border: 1px solid #1E3F6F;
    border-radius: 1rem;
    padding: 2rem;
    text-align: center;
}
.tech-main-value {
    font-size: 3.25rem;
    font-weight: 900;
    color: #F97316;
    line-height: 1;
}
.tech-main-unit { font-size: 1.75rem; font-weight: 700; }
.tech-main-label { color: #fff; font-weight: 700; font-size: 1.05rem; margin-top: 0.5rem; }
.tech-main-sub { color: #5A7090; font-size: 0.875rem; margin-top: 0.25rem; }
.tech-two-col {
    display: grid;
    grid-template-columns: 1fr 1fr;
    gap: 2rem;
    margin-bottom: 3rem;
}
.tech-panel {
    background: #0D2044;
    border: 1px solid #1E3F6F;
    border-radius: 1rem;
    padding: 2rem;
}
.tech-panel h3 {
    color: #fff;
    font-weight: 700;
    font-size: 1.25rem;
    margin: 0 0 1.5rem;
    display: flex;
    align-items: center;
    gap: 0.5rem;
}
.tech-panel h3::before {
    content: "";
    width: 0.375rem;
    height: 1.25rem;
    background: #F97316;
    border-radius: 9999px;
    display: inline-block;
}
.tech-feature {
    display: flex;
    align-items: flex-start;
    gap: 0.75rem;
    margin-bottom: 1rem;
}
.tech-feature .bullet { color: #F97316; font-size: 0.75rem; margin-top: 0.25rem; }
.tech-feature p { color: #94A9C7; font-size: 0.875rem; line-height: 1.6; margin: 0; }
.cert-grid {
    display: grid;
    grid-template-columns: 1fr 1fr;
    gap: 0.75rem;
    margin-bottom: 1.5rem;
}
.cert-chip {
    background: #132847;
    border: 1px solid #1E3F6F;
    border-radius: 0.5rem;
    padding: 0.75rem 1rem;
    display: flex;
    align-items: center;
    gap: 0.5rem;
    color: #fff;
    font-size: 0.875rem;
    font-weight: 600;
}
.ks-callout {
    background: rgba(249, 115, 22, 0.1);
    border: 1px solid rgba(249, 115, 22, 0.3);
    border-radius: 0.75rem;
    padding: 1rem;
}
.ks-callout .title { color: #F97316; font-weight: 700; font-size: 0.875rem; margin-bottom: 0.25rem; }
.ks-callout .body { color: #94A9C7; font-size: 0.75rem; }
.spec-table {
    background: #0D2044;
    border: 1px solid #1E3F6F;
    border-radius: 1rem;
    overflow: hidden;
}
.spec-table-head {
    padding: 1.25rem 2rem;
    border-bottom: 1px solid #1E3F6F;
    display: flex;
    align-items: center;
    justify-content: space-between;
    flex-wrap: wrap;
    gap: 0.25rem;
}
.spec-table-head h3 { color: #fff; font-weight: 700; font-size: 1.125rem; margin: 0; }
.spec-table-head span { color: #5A7090; font-size: 0.75rem; }
.spec-rows { display: grid; grid-template-columns: 1fr 1fr; }
.spec-row {
    display: flex;
    align-items: center;
    justify-content: space-between;
    padding: 1rem 2rem;
    border-bottom: 1px solid rgba(30, 63, 111, 0.5);
}
.spec-row.alt { background: rgba(10, 22, 40, 0.4); }
.spec-row .label { color: #94A9C7; font-size: 0.875rem; }
.spec-row .value { color: #fff; font-weight: 700; font-size: 0.875rem; }
@media (max-width: 1024px) {
    .tech-two-col { grid-template-columns: 1fr; }
    .spec-rows { grid-template-columns: 1fr; }
}
@media (max-width: 640px) {
    .tech-main-grid { gap: 0.5rem; }
    .tech-main-card { padding: 0.75rem; }
    .tech-main-value { font-size: 1.875rem; }
    .tech-main-unit { font-size: 1.125rem; }
    .tech-main-sub { display: none; }
}
"#;

fn check_icon() -> Html {
    html! {
        <svg width="14" height="14" viewBox="0 0 14 14" fill="none">
            <circle cx="7" cy="7" r="6" fill="#F97316" opacity="0.2"/>
            <path d="M4.5 7L6.5 9L9.5 5.5" stroke="#F97316" stroke-width="1.5" stroke-linecap="round" stroke-linejoin="round"/>
        </svg>
    }
}

#[function_component(Technology)]
pub fn technology() -> Html {
    html! {
        <section id="technology" class="technology">
            <style>{TECHNOLOGY_STYLE}</style>
            <div class="accent-line"></div>

            <div class="tech-inner">
                <div class="section-head reveal">
                    <div class="section-label">{"JGDN132-720 · HJT 양면 모듈"}</div>
                    <h2 class="section-title">{"압도적인 기술 스펙"}</h2>
                    <p class="section-lede">
                        {"210mm 웨이퍼 기반 N형 양면 HJT 하프컷 셀."}<br/>
                        {"숫자가 증명하는 대한민국 최고 효율 태양광 모듈."}
                    </p>
                </div>

                <div class="tech-main-grid reveal">
                    { for MAIN_SPECS.iter().enumerate().map(|(i, spec)| {
                        let delay_ms = 400 + (i as u32) * 150;
                        html! {
                            <div class="tech-main-card" style={format!("transition-delay: {}ms", i * 150)}>
                                <div class="tech-main-value">
                                    <AnimatedCounter target={spec.value} decimals={spec.decimals} delay_ms={delay_ms} />
                                    <span class="tech-main-unit">{spec.unit}</span>
                                </div>
                                <div class="tech-main-label">{spec.label}</div>
                                <div class="tech-main-sub">{spec.sub}</div>
                            </div>
                        }
                    }) }
                </div>

                <div class="tech-two-col">
                    <div class="tech-panel reveal">
                        <h3>{"핵심 기술 특징"}</h3>
                        { for TECH_FEATURES.iter().map(|text| html! {
                            <div class="tech-feature">
                                <span class="bullet">{"◆"}</span>
                                <p>{*text}</p>
                            </div>
                        }) }
                    </div>

                    <div class="tech-panel reveal">
                        <h3>{"국제 인증 현황"}</h3>
                        <div class="cert-grid">
                            { for CERTIFICATIONS.iter().map(|cert| html! {
                                <div class="cert-chip">
                                    { check_icon() }
                                    <span>{*cert}</span>
                                </div>
                            }) }
                        </div>
                        <div class="ks-callout">
                            <div class="title">{"2025년 KS 인증 신규 취득"}</div>
                            <div class="body">{"국내 최고 수준의 품질 검증 완료. 국내 공공사업 입찰 적격 제품."}</div>
                        </div>
                    </div>
                </div>

                <div class="spec-table reveal">
                    <div class="spec-table-head">
                        <h3>{"전기적 사양 (STC 기준)"}</h3>
                        <span>{"일사량 1000W/㎡ · 셀 온도 25°C · AM 1.5"}</span>
                    </div>
                    <div class="spec-rows">
                        { for TECH_SPECS.iter().enumerate().map(|(i, (label, value))| html! {
                            <div class={classes!("spec-row", (i % 2 == 1).then(|| "alt"))}>
                                <span class="label">{*label}</span>
                                <span class="value">{*value}</span>
                            </div>
                        }) }
                    </div>
                </div>
            </div>
        </section>
    }
}
