use yew::prelude::*;

struct TimelineEntry {
    year: &'static str,
    event: &'static str,
    detail: &'static str,
    highlight: &'static str,
    color: &'static str,
}

const TIMELINE: [TimelineEntry; 5] = [
    TimelineEntry {
        year: "2018",
        event: "미국 캘리포니아 발전소",
        detail: "태양광 모듈 20MW 공급계약 체결",
        highlight: "20 MW",
        color: "#F97316",
    },
    TimelineEntry {
        year: "2020",
        event: "법인 설립 · 수출탑 수상",
        detail: "주식회사 이에프글로벌코리아 설립 · 수출 100만불 탑 수상",
        highlight: "$1M",
        color: "#FB923C",
    },
    TimelineEntry {
        year: "2023",
        event: "전라도 정읍 태양광발전소",
        detail: "태양광 모듈 6.5MW 공급계약 체결",
        highlight: "6.5 MW",
        color: "#F97316",
    },
    TimelineEntry {
        year: "2024",
        event: "Golden Solar 공식 수입사 체결",
        detail: "한국 단독 공식 수입사 지위 획득. 삼성반도체 1차 Vendor 원익QnC 계약 체결",
        highlight: "독점",
        color: "#FB923C",
    },
    TimelineEntry {
        year: "2025",
        event: "KS 인증 취득",
        detail: "Golden Solar HJT 모듈 국내 KS 제품 인증 취득 — 공공사업 입찰 적격",
        highlight: "KS",
        color: "#F97316",
    },
];

const PROJECT_STATS: [(&str, &str, &str, &str); 4] = [
    ("20 MW", "미국 캘리포니아", "단일 현장 공급", "🇺🇸"),
    ("6.5 MW", "전라도 정읍", "국내 대형 발전소", "🇰🇷"),
    ("350 MW+", "글로벌 누적 공급", "Golden Solar 전세계", "🌏"),
    ("15+", "글로벌 진출 국가", "독일, 영국, 중국 등", "🌐"),
];

const OFFICES: [(&str, &str, &str); 4] = [
    ("#F97316", "서울 사무소", "고양시 덕양구 향동로 217"),
    ("#FB923C", "구리 본사", "구리시 건원대로 51, 3105호"),
    ("#FBBF24", "경기 물류센터", "경기도 남양주시"),
    ("#FBBF24", "남부 물류센터", "경남 거제시"),
];

const PARTNERS: [&str; 5] = ["🇩🇪 독일", "🇬🇧 영국", "🇨🇳 중국 (본사)", "🇺🇸 미국", "🇮🇳 인도"];

const SOCIAL_PROOF_STYLE: &str = r#"
.projects {
    padding: 6rem 0;
    position: relative;
    background: #0A1628;
}
.projects .accent-line {
    position: absolute;
    top: 0; left: 0; right: 0;
    height: 1px;
    background: linear-gradient(to right, transparent, #F97316, transparent);
    opacity: 0.2;
}
.projects-inner { max-width: 80rem; margin: 0 auto; padding: 0 1.5rem; }
.proof-stats {
    display: grid;
    grid-template-columns: repeat(4, 1fr);
    gap: 1rem;
    margin-bottom: 4rem;
}
.proof-stat {
    background: #0D2044;
    border: 1px solid #1E3F6F;
    border-radius: 1rem;
    padding: 1.5rem;
    text-align: center;
}
.proof-stat .flag { font-size: 1.875rem; margin-bottom: 0.75rem; }
.proof-stat .value { font-size: 1.875rem; font-weight: 900; color: #F97316; margin-bottom: 0.25rem; }
.proof-stat .label { color: #fff; font-weight: 600; font-size: 0.875rem; margin-bottom: 0.25rem; }
.proof-stat .sub { color: #5A7090; font-size: 0.75rem; }
.projects-two-col {
    display: grid;
    grid-template-columns: 1fr 1fr;
    gap: 2rem;
}
.projects-panel {
    background: #0D2044;
    border: 1px solid #1E3F6F;
    border-radius: 1rem;
    padding: 2rem;
}
.projects-panel h3 {
    color: #fff;
    font-weight: 700;
    font-size: 1.25rem;
    margin: 0 0 0.5rem;
    display: flex;
    align-items: center;
    gap: 0.5rem;
}
.projects-panel h3::before {
    content: "";
    width: 0.375rem;
    height: 1.25rem;
    background: #F97316;
    border-radius: 9999px;
    display: inline-block;
}
.projects-panel .panel-sub { color: #5A7090; font-size: 0.875rem; margin-bottom: 1.5rem; }
.timeline { position: relative; margin-top: 2rem; }
.timeline::before {
    content: "";
    position: absolute;
    left: 2rem;
    top: 0;
    bottom: 0;
    width: 1px;
    background: linear-gradient(to bottom, #F97316, #1E3F6F);
}
.timeline-item {
    display: flex;
    align-items: flex-start;
    gap: 1.5rem;
    margin-bottom: 1.5rem;
}
.timeline-marker {
    position: relative;
    z-index: 10;
    flex-shrink: 0;
    width: 4rem;
    display: flex;
    flex-direction: column;
    align-items: center;
}
.timeline-dot {
    width: 1rem;
    height: 1rem;
    border-radius: 50%;
    border: 2px solid;
}
.timeline-year { font-size: 0.75rem; font-weight: 700; margin-top: 0.25rem; }
.timeline-body { flex: 1; padding-bottom: 0.5rem; }
.timeline-event-row { display: flex; align-items: center; gap: 0.5rem; margin-bottom: 0.25rem; flex-wrap: wrap; }
.timeline-event { color: #fff; font-weight: 600; font-size: 0.875rem; }
.timeline-highlight { font-size: 0.75rem; font-weight: 700; padding: 0.125rem 0.5rem; border-radius: 9999px; }
.timeline-detail { color: #5A7090; font-size: 0.75rem; line-height: 1.6; margin: 0; }
.korea-map-frame {
    background: #0A1628;
    border-radius: 0.75rem;
    padding: 1rem;
    margin-bottom: 1.5rem;
}
.korea-map { width: 100%; max-width: 200px; margin: 0 auto; display: block; }
.office-row { display: flex; align-items: center; gap: 0.75rem; margin-bottom: 0.75rem; }
.office-dot { width: 0.625rem; height: 0.625rem; border-radius: 50%; flex-shrink: 0; }
.office-name { color: #fff; font-size: 0.875rem; font-weight: 600; }
.office-desc { color: #5A7090; font-size: 0.75rem; margin-left: 0.5rem; }
.partners {
    margin-top: 1.5rem;
    padding-top: 1.25rem;
    border-top: 1px solid #1E3F6F;
}
.partner-tags { display: flex; flex-wrap: wrap; gap: 0.5rem; }
.partner-tag {
    background: #132847;
    border: 1px solid #1E3F6F;
    color: #94A9C7;
    font-size: 0.75rem;
    padding: 0.375rem 0.75rem;
    border-radius: 0.5rem;
}
@media (max-width: 1024px) {
    .projects-two-col { grid-template-columns: 1fr; }
    .proof-stats { grid-template-columns: repeat(2, 1fr); }
}
"#;

fn korea_map() -> Html {
    html! {
        <svg viewBox="0 0 200 300" class="korea-map" fill="none">
            <path
                d="M 90,20 L 110,18 L 130,25 L 150,40 L 155,60 L 150,80 L 160,100 L 155,120
                   L 145,140 L 150,160 L 140,180 L 130,195 L 120,210 L 110,220 L 105,235
                   L 95,240 L 85,235 L 75,220 L 65,205 L 55,190 L 45,170 L 40,150
                   L 45,130 L 40,110 L 45,90 L 50,70 L 45,50 L 55,35 L 70,25 Z"
                fill="#132847"
                stroke="#1E3F6F"
                stroke-width="1.5"
            />
            <ellipse cx="80" cy="268" rx="18" ry="10" fill="#132847" stroke="#1E3F6F" stroke-width="1.5"/>

            <circle cx="90" cy="105" r="5" fill="#F97316" opacity="0.9">
                <animate attributeName="r" values="5;7;5" dur="2s" repeatCount="indefinite"/>
                <animate attributeName="opacity" values="0.9;0.5;0.9" dur="2s" repeatCount="indefinite"/>
            </circle>
            <circle cx="90" cy="105" r="10" fill="#F97316" opacity="0.15"/>

            <circle cx="98" cy="100" r="4" fill="#FB923C" opacity="0.9">
                <animate attributeName="r" values="4;6;4" dur="2.5s" repeatCount="indefinite"/>
            </circle>
            <circle cx="98" cy="100" r="8" fill="#FB923C" opacity="0.15"/>

            <circle cx="82" cy="95" r="3.5" fill="#FBBF24" opacity="0.85"/>
            <circle cx="82" cy="95" r="7" fill="#FBBF24" opacity="0.1"/>

            <circle cx="75" cy="190" r="3.5" fill="#FBBF24" opacity="0.85"/>
            <circle cx="75" cy="190" r="7" fill="#FBBF24" opacity="0.1"/>

            <text x="102" y="109" fill="#F97316" font-size="7" font-weight="bold">{"서울"}</text>
            <text x="101" y="97" fill="#FB923C" font-size="7" font-weight="bold">{"구리"}</text>
            <text x="60" y="93" fill="#FBBF24" font-size="6.5">{"경기 물류"}</text>
            <text x="58" y="195" fill="#FBBF24" font-size="6.5">{"남부 물류"}</text>
        </svg>
    }
}

#[function_component(SocialProof)]
pub fn social_proof() -> Html {
    html! {
        <section id="projects" class="projects">
            <style>{SOCIAL_PROOF_STYLE}</style>
            <div class="accent-line"></div>

            <div class="projects-inner">
                <div class="section-head reveal">
                    <div class="section-label">{"검증된 레퍼런스"}</div>
                    <h2 class="section-title">{"글로벌이 인정한 공급 실적"}</h2>
                    <p class="section-lede">
                        {"미국에서 국내까지. 대형 현장에서 검증된 제품력."}<br/>
                        {"한국 공식 독점 수입사로서 안정적인 공급망을 보장합니다."}
                    </p>
                </div>

                <div class="proof-stats reveal">
                    { for PROJECT_STATS.iter().enumerate().map(|(i, (value, label, sub, flag))| html! {
                        <div class="proof-stat" style={format!("transition-delay: {}ms", i * 100)}>
                            <div class="flag">{*flag}</div>
                            <div class="value">{*value}</div>
                            <div class="label">{*label}</div>
                            <div class="sub">{*sub}</div>
                        </div>
                    }) }
                </div>

                <div class="projects-two-col">
                    <div class="projects-panel reveal">
                        <h3>{"주요 연혁"}</h3>
                        <div class="timeline">
                            { for TIMELINE.iter().enumerate().map(|(i, item)| html! {
                                <div class="timeline-item" style={format!("transition-delay: {}ms", i * 120)}>
                                    <div class="timeline-marker">
                                        <div
                                            class="timeline-dot"
                                            style={format!(
                                                "background: {c}; border-color: {c}; box-shadow: 0 0 8px {c}60;",
                                                c = item.color
                                            )}
                                        ></div>
                                        <div class="timeline-year" style={format!("color: {}", item.color)}>
                                            {item.year}
                                        </div>
                                    </div>
                                    <div class="timeline-body">
                                        <div class="timeline-event-row">
                                            <span class="timeline-event">{item.event}</span>
                                            <span
                                                class="timeline-highlight"
                                                style={format!("background: {c}20; color: {c};", c = item.color)}
                                            >
                                                {item.highlight}
                                            </span>
                                        </div>
                                        <p class="timeline-detail">{item.detail}</p>
                                    </div>
                                </div>
                            }) }
                        </div>
                    </div>

                    <div class="projects-panel reveal">
                        <h3>{"전국 인프라 네트워크"}</h3>
                        <p class="panel-sub">{"서울 · 구리 사무소 + 경기/남부 물류센터 운영"}</p>

                        <div class="korea-map-frame">
                            { korea_map() }
                        </div>

                        { for OFFICES.iter().map(|(dot, name, desc)| html! {
                            <div class="office-row">
                                <div class="office-dot" style={format!("background: {dot}")}></div>
                                <div>
                                    <span class="office-name">{*name}</span>
                                    <span class="office-desc">{*desc}</span>
                                </div>
                            </div>
                        }) }

                        <div class="partners">
                            <div class="section-label">{"글로벌 파트너 네트워크"}</div>
                            <div class="partner-tags">
                                { for PARTNERS.iter().map(|c| html! {
                                    <span class="partner-tag">{*c}</span>
                                }) }
                            </div>
                        </div>
                    </div>
                </div>
            </div>
        </section>
    }
}
