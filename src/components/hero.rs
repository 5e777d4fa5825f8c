use yew::prelude::*;

use crate::components::counter::AnimatedCounter;

const HERO_STYLE: &str = r#"
.hero {
    position: relative;
    min-height: 100vh;
    display: flex;
    align-items: center;
    overflow: hidden;
    background: linear-gradient(160deg, #060D18 0%, #0A1628 50%, #060D18 100%);
}
.hero-grid-bg {
    position: absolute;
    inset: 0;
    opacity: 0.04;
    background-image:
        linear-gradient(#F97316 1px, transparent 1px),
        linear-gradient(90deg, #F97316 1px, transparent 1px);
    background-size: 60px 60px;
}
.hero-glow {
    position: absolute;
    top: 50%;
    right: 25%;
    width: 600px;
    height: 600px;
    border-radius: 50%;
    opacity: 0.06;
    pointer-events: none;
    background: radial-gradient(circle, #F97316, transparent 70%);
    transform: translate(50%, -50%);
}
.hero-inner {
    max-width: 80rem;
    margin: 0 auto;
    padding: 5rem 1.5rem 4rem;
    width: 100%;
    display: grid;
    grid-template-columns: 1fr 1fr;
    gap: 3rem;
    align-items: center;
}
.hero-headline {
    font-size: clamp(2.8rem, 6vw, 4.5rem);
    font-weight: 900;
    line-height: 1.05;
    letter-spacing: -0.02em;
    color: #fff;
    margin: 0 0 1.5rem;
}
.hero-sub {
    color: #94A9C7;
    font-size: 1.125rem;
    line-height: 1.7;
    margin-bottom: 2.5rem;
    max-width: 36rem;
}
.hero-sub strong { color: #fff; }
.hero-stats {
    display: grid;
    grid-template-columns: repeat(3, 1fr);
    gap: 1rem;
    margin-bottom: 2.5rem;
}
.hero-stat {
    background: rgba(13, 32, 68, 0.8);
    border: 1px solid #1E3F6F;
    border-radius: 0.75rem;
    padding: 1rem;
    text-align: center;
}
.hero-stat-value {
    font-size: 1.875rem;
    font-weight: 900;
    color: #F97316;
}
.hero-stat-unit { font-size: 1.125rem; }
.hero-stat-label {
    color: #94A9C7;
    font-size: 0.75rem;
    margin-top: 0.25rem;
    font-weight: 500;
}
.hero-cta-row {
    display: flex;
    gap: 1rem;
    flex-wrap: wrap;
}
.hero-cta-secondary {
    border: 1px solid #1E3F6F;
    color: #94A9C7;
    padding: 1rem 2rem;
    border-radius: 0.75rem;
    font-size: 1rem;
    font-weight: 600;
    text-align: center;
    text-decoration: none;
    transition: border-color 0.2s ease, color 0.2s ease;
}
.hero-cta-secondary:hover {
    border-color: #F97316;
    color: #fff;
}
.hero-panel {
    position: relative;
    animation: panel-float 3.5s ease-in-out 1.5s infinite alternate;
}
@keyframes panel-float {
    from { transform: translateY(0); }
    to { transform: translateY(-12px); }
}
.hero-badge-top {
    position: absolute;
    top: -1rem;
    right: -0.5rem;
    z-index: 10;
    background: #F97316;
    color: #fff;
    font-size: 0.75rem;
    font-weight: 700;
    padding: 0.375rem 0.75rem;
    border-radius: 9999px;
    box-shadow: 0 8px 24px rgba(0, 0, 0, 0.4);
}
.hero-badge-bottom {
    position: absolute;
    bottom: -1rem;
    left: -0.5rem;
    z-index: 10;
    background: #0D2044;
    border: 1px solid #F97316;
    color: #fff;
    font-size: 0.75rem;
    font-weight: 700;
    padding: 0.5rem 0.75rem;
    border-radius: 0.5rem;
    box-shadow: 0 8px 24px rgba(0, 0, 0, 0.4);
}
.hero-badge-bottom span { color: #F97316; }
.panel-art { width: 100%; height: auto; }
.scroll-indicator {
    position: absolute;
    bottom: 2rem;
    left: 50%;
    transform: translateX(-50%);
    display: flex;
    flex-direction: column;
    align-items: center;
    gap: 0.5rem;
    opacity: 0.5;
}
.scroll-indicator-label { color: #94A9C7; font-size: 0.75rem; }
.scroll-indicator-track {
    width: 1.25rem;
    height: 2rem;
    border: 1px solid #94A9C7;
    border-radius: 9999px;
    display: flex;
    justify-content: center;
    padding-top: 0.375rem;
}
.scroll-indicator-dot {
    width: 0.25rem;
    height: 0.5rem;
    background: #94A9C7;
    border-radius: 9999px;
    animation: scroll-bounce 1.5s infinite;
}
@keyframes scroll-bounce {
    0%, 100% { transform: translateY(0); opacity: 1; }
    50% { transform: translateY(8px); opacity: 0.3; }
}
@media (max-width: 1024px) {
    .hero-inner { grid-template-columns: 1fr; }
    .scroll-indicator { display: none; }
}
"#;

/// Procedural rendering of the JGDN132-720 module: frame, cell grid,
/// busbars, junction boxes and nameplate.
fn solar_panel_svg() -> Html {
    // Busbar rows every 25px down the laminate.
    let busbars = (1..12).map(|i| {
        let y = (18 + i * 25).to_string();
        html! {
            <line x1="20" y1={y.clone()} x2="560" y2={y} stroke="#9AAEC4" stroke-width="1" opacity="0.35" />
        }
    });

    html! {
        <svg viewBox="0 0 580 320" fill="none" xmlns="http://www.w3.org/2000/svg" class="panel-art">
            <defs>
                <pattern id="cellPattern" x="0" y="0" width="43.5" height="25" patternUnits="userSpaceOnUse">
                    <rect x="0" y="0" width="40" height="22" rx="1.5" fill="#0D2854" stroke="#1B3D7A" stroke-width="0.6"/>
                    <line x1="10" y1="0" x2="10" y2="22" stroke="#C8D6E8" stroke-width="0.3" opacity="0.5"/>
                    <line x1="20" y1="0" x2="20" y2="22" stroke="#C8D6E8" stroke-width="0.3" opacity="0.5"/>
                    <line x1="30" y1="0" x2="30" y2="22" stroke="#C8D6E8" stroke-width="0.3" opacity="0.5"/>
                    <line x1="0" y1="11" x2="40" y2="11" stroke="#C8D6E8" stroke-width="0.4" opacity="0.3"/>
                </pattern>
                <linearGradient id="glassGrad" x1="0" y1="0" x2="0.6" y2="1">
                    <stop offset="0%" stop-color="white" stop-opacity="0.08"/>
                    <stop offset="40%" stop-color="white" stop-opacity="0.02"/>
                    <stop offset="100%" stop-color="white" stop-opacity="0"/>
                </linearGradient>
                <linearGradient id="frameGrad" x1="0" y1="0" x2="1" y2="1">
                    <stop offset="0%" stop-color="#D0D8E0"/>
                    <stop offset="50%" stop-color="#A8B4C0"/>
                    <stop offset="100%" stop-color="#8896A4"/>
                </linearGradient>
                <clipPath id="panelClip">
                    <rect x="12" y="12" width="556" height="296" rx="4"/>
                </clipPath>
            </defs>
            <rect x="18" y="18" width="556" height="296" rx="8" fill="#000" opacity="0.4"/>
            <rect x="8" y="8" width="564" height="304" rx="8" fill="url(#frameGrad)"/>
            <rect x="12" y="12" width="556" height="296" rx="5" fill="#050E1E"/>
            <rect x="20" y="18" width="540" height="284" fill="url(#cellPattern)" clip-path="url(#panelClip)"/>
            { for busbars }
            <rect x="12" y="12" width="556" height="296" rx="5" fill="url(#glassGrad)"/>
            <rect x="190" y="285" width="45" height="18" rx="3" fill="#1A2A3A" stroke="#2A4A6A" stroke-width="0.8"/>
            <rect x="267" y="285" width="45" height="18" rx="3" fill="#1A2A3A" stroke="#2A4A6A" stroke-width="0.8"/>
            <rect x="344" y="285" width="45" height="18" rx="3" fill="#1A2A3A" stroke="#2A4A6A" stroke-width="0.8"/>
            <rect x="8" y="305" width="564" height="7" fill="#F97316" opacity="0.85"/>
            <rect x="440" y="22" width="110" height="34" rx="3" fill="#F97316" opacity="0.9"/>
            <text x="495" y="34" text-anchor="middle" fill="white" font-size="8" font-weight="700" font-family="Arial">{"JGDN132-720"}</text>
            <text x="495" y="48" text-anchor="middle" fill="white" font-size="11" font-weight="900" font-family="Arial">{"720W HJT"}</text>
            <text x="30" y="36" fill="#6A8AAA" font-size="9" font-weight="600" font-family="Arial" opacity="0.7">{"EF GLOBAL KOREA"}</text>
        </svg>
    }
}

#[function_component(Hero)]
pub fn hero() -> Html {
    html! {
        <section class="hero">
            <style>{HERO_STYLE}</style>
            <div class="hero-grid-bg"></div>
            <div class="hero-glow"></div>

            <div class="hero-inner">
                <div class="reveal">
                    <div class="section-label">{"대한민국 유일 · HJT 기술"}</div>

                    <h1 class="hero-headline">
                        {"600W 시대를"}<br/>
                        {"끝내고"}<br/>
                        <span class="gradient-text">{"720W 시대를"}</span><br/>
                        <span class="gradient-text">{"엽니다."}</span>
                    </h1>

                    <p class="hero-sub">
                        {"이제는 효율이 시공사의 실력입니다."}<br/>
                        <strong>{"2025년 KS 인증"}</strong>
                        {"을 획득한 HJT 720W로 귀사의 수익률을 극대화하세요."}
                    </p>

                    <div class="hero-stats">
                        <div class="hero-stat">
                            <div class="hero-stat-value">
                                <AnimatedCounter target={720.0} duration_ms={2500} delay_ms={1000} />
                                <span class="hero-stat-unit">{"W"}</span>
                            </div>
                            <div class="hero-stat-label">{"최대 출력"}</div>
                        </div>
                        <div class="hero-stat">
                            <div class="hero-stat-value">
                                <AnimatedCounter target={23.18} decimals={2} duration_ms={2500} delay_ms={1000} />
                                <span class="hero-stat-unit">{"%"}</span>
                            </div>
                            <div class="hero-stat-label">{"모듈 효율"}</div>
                        </div>
                        <div class="hero-stat">
                            <div class="hero-stat-value">
                                <AnimatedCounter target={90.3} decimals={1} duration_ms={2500} delay_ms={1000} />
                                <span class="hero-stat-unit">{"%"}</span>
                            </div>
                            <div class="hero-stat-label">{"30년 보장"}</div>
                        </div>
                    </div>

                    <div class="hero-cta-row">
                        <a href="#contact" class="btn-primary hero-cta-main">{"전문 기술 상담 신청 →"}</a>
                        <a href="#technology" class="hero-cta-secondary">{"기술 사양 보기"}</a>
                    </div>
                </div>

                <div class="hero-panel reveal">
                    <div class="hero-badge-top">{"✓ 2025 KS 인증"}</div>
                    <div class="hero-badge-bottom">
                        <span>{"TOPCon 대비"}</span>
                        {" +4.1% 출력 우위"}
                    </div>
                    { solar_panel_svg() }
                </div>
            </div>

            <div class="scroll-indicator">
                <span class="scroll-indicator-label">{"스크롤하여 확인"}</span>
                <div class="scroll-indicator-track">
                    <div class="scroll-indicator-dot"></div>
                </div>
            </div>
        </section>
    }
}
