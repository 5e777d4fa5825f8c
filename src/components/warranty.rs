use yew::prelude::*;

use crate::chart::{
    self, chart_x, chart_y, HJT_SERIES, NTYPE_SERIES, X_AXIS_LABELS, Y_AXIS_LABELS,
};
use crate::components::counter::AnimatedCounter;

fn px(v: f64) -> String {
    format!("{v:.1}")
}

const WARRANTY_STYLE: &str = r#"
.warranty {
    padding: 6rem 0;
    position: relative;
    background: #060D18;
}
.warranty .accent-line {
    position: absolute;
    top: 0; left: 0; right: 0;
    height: 1px;
    background: linear-gradient(to right, transparent, #1E3F6F, transparent);
}
.warranty-inner { max-width: 80rem; margin: 0 auto; padding: 0 1.5rem; }
.warranty-cards {
    display: grid;
    grid-template-columns: repeat(4, 1fr);
    gap: 1rem;
    margin-bottom: 3rem;
}
.warranty-card {
    background: #0D2044;
    border: 1px solid #1E3F6F;
    border-radius: 1rem;
    padding: 1.5rem;
    text-align: center;
}
.warranty-card-value {
    font-size: 2.25rem;
    font-weight: 900;
    line-height: 1.2;
    margin-bottom: 0.5rem;
    color: #F97316;
}
.warranty-card-value.plain { color: #fff; }
.warranty-card-value .small { font-size: 1.5rem; }
.warranty-card-label { color: #fff; font-weight: 600; font-size: 0.875rem; margin-bottom: 0.25rem; }
.warranty-card-sub { color: #5A7090; font-size: 0.75rem; }
.chart-frame {
    background: #0D2044;
    border: 1px solid #1E3F6F;
    border-radius: 1rem;
    padding: 2.5rem;
}
.chart-head {
    display: flex;
    align-items: center;
    justify-content: space-between;
    flex-wrap: wrap;
    gap: 1rem;
    margin-bottom: 2rem;
}
.chart-head h3 { color: #fff; font-weight: 700; font-size: 1.25rem; margin: 0; }
.chart-head .sub { color: #5A7090; font-size: 0.875rem; margin-top: 0.25rem; }
.chart-legend { display: flex; align-items: center; gap: 1.5rem; }
.chart-legend .entry { display: flex; align-items: center; gap: 0.5rem; }
.chart-legend .swatch-hjt { width: 2rem; height: 2px; background: #F97316; }
.chart-legend .swatch-std { width: 2rem; border-top: 2px dashed #4A6080; }
.chart-legend span { color: #94A9C7; font-size: 0.875rem; }
.retention-chart { width: 100%; overflow: visible; }
.chart-line-hjt {
    stroke-dasharray: 1400;
    stroke-dashoffset: 1400;
}
.reveal-visible .chart-line-hjt {
    animation: draw-line 2.5s ease-in-out forwards;
}
@keyframes draw-line {
    to { stroke-dashoffset: 0; }
}
.chart-note {
    margin-top: 1.5rem;
    background: rgba(249, 115, 22, 0.1);
    border: 1px solid rgba(249, 115, 22, 0.3);
    border-radius: 0.75rem;
    padding: 1rem;
    display: flex;
    align-items: flex-start;
    gap: 0.75rem;
}
.chart-note p { color: #94A9C7; font-size: 0.875rem; line-height: 1.7; margin: 0; }
.chart-note strong { color: #fff; }
.chart-note .gain { color: #F97316; font-weight: 700; }
@media (max-width: 640px) {
    .warranty-cards { grid-template-columns: repeat(2, 1fr); }
    .chart-frame { padding: 1.5rem; }
}
"#;

fn grid_lines() -> Html {
    let horizontal = Y_AXIS_LABELS.iter().map(|&pct| {
        let y = chart_y(pct);
        html! {
            <g>
                <line
                    x1={px(chart::PLOT_LEFT)} y1={px(y)}
                    x2={px(chart::PLOT_RIGHT)} y2={px(y)}
                    stroke="#1E3F6F" stroke-width="1" stroke-dasharray="4 4"
                />
                <text
                    x={px(chart::PLOT_LEFT - 8.0)} y={px(y + 4.0)} text-anchor="end"
                    fill="#5A7090" font-size="11" font-family="Arial"
                >
                    { format!("{pct:.0}%") }
                </text>
            </g>
        }
    });

    let vertical = X_AXIS_LABELS.iter().map(|&yr| {
        let x = chart_x(yr);
        html! {
            <g>
                <line
                    x1={px(x)} y1={px(chart::PLOT_TOP)}
                    x2={px(x)} y2={px(chart::PLOT_BASELINE)}
                    stroke="#1E3F6F" stroke-width="1" stroke-dasharray="4 4" opacity="0.5"
                />
                <text
                    x={px(x)} y={px(chart::PLOT_BASELINE + 18.0)} text-anchor="middle"
                    fill="#5A7090" font-size="11" font-family="Arial"
                >
                    { format!("{yr:.0}년") }
                </text>
            </g>
        }
    });

    html! {
        <>
            { for horizontal }
            { for vertical }
        </>
    }
}

fn retention_chart() -> Html {
    let hjt_line = chart::line_path(&HJT_SERIES);
    let hjt_area = chart::area_path(&HJT_SERIES);
    let std_line = chart::line_path(&NTYPE_SERIES);
    let std_area = chart::area_path(&NTYPE_SERIES);

    // Highlighted HJT data points: year 1 and year 30.
    let key_points = [(1.0, 99.0, false), (30.0, 90.3, true)].into_iter().map(|(yr, pct, end)| {
        let (x, y) = (chart_x(yr), chart_y(pct));
        let (label_x, anchor) = if end { (x - 8.0, "end") } else { (x + 8.0, "start") };
        html! {
            <g>
                <circle cx={px(x)} cy={px(y)} r="5" fill="#F97316" stroke="#060D18" stroke-width="2"/>
                <text
                    x={px(label_x)} y={px(y - 10.0)}
                    fill="#F97316" font-size="11" font-weight="bold" font-family="Arial"
                    text-anchor={anchor}
                >
                    { format!("{pct}%") }
                </text>
            </g>
        }
    });

    let std_end_y = chart_y(84.95);
    let hjt_end_y = chart_y(90.3);
    let gap_x = chart_x(30.0) + 15.0;
    let gap_mid_y = (std_end_y + hjt_end_y) / 2.0 + 4.0;

    html! {
        <svg viewBox="0 0 620 270" class="retention-chart">
            <defs>
                <linearGradient id="hjtGrad" x1="0" y1="0" x2="0" y2="1">
                    <stop offset="0%" stop-color="#F97316" stop-opacity="0.3"/>
                    <stop offset="100%" stop-color="#F97316" stop-opacity="0.02"/>
                </linearGradient>
            </defs>

            { grid_lines() }

            <line
                x1={px(chart::PLOT_LEFT)} y1={px(chart::PLOT_BASELINE)}
                x2={px(chart::PLOT_RIGHT)} y2={px(chart::PLOT_BASELINE)}
                stroke="#2A4A6A" stroke-width="1.5"
            />
            <line
                x1={px(chart::PLOT_LEFT)} y1={px(chart::PLOT_TOP)}
                x2={px(chart::PLOT_LEFT)} y2={px(chart::PLOT_BASELINE)}
                stroke="#2A4A6A" stroke-width="1.5"
            />

            <path d={std_area} fill="#4A6080" opacity="0.05"/>
            <path d={hjt_area} fill="url(#hjtGrad)"/>

            <path
                d={std_line}
                fill="none" stroke="#4A6080" stroke-width="2" stroke-dasharray="6 4"
            />
            <path
                class="chart-line-hjt"
                d={hjt_line}
                fill="none" stroke="#F97316" stroke-width="2.5"
                stroke-linecap="round" stroke-linejoin="round"
            />

            { for key_points }

            <circle cx={px(chart_x(30.0))} cy={px(std_end_y)} r="4" fill="#4A6080" stroke="#060D18" stroke-width="2"/>
            <text
                x={px(chart_x(30.0) - 8.0)} y={px(std_end_y + 16.0)}
                fill="#4A6080" font-size="10" font-family="Arial" text-anchor="end"
            >
                {"약 85%"}
            </text>

            <line
                x1={px(gap_x)} y1={px(std_end_y)}
                x2={px(gap_x)} y2={px(hjt_end_y)}
                stroke="#F97316" stroke-width="1.5" stroke-dasharray="3 2"
            />
            <text
                x={px(gap_x + 5.0)} y={px(gap_mid_y)}
                fill="#F97316" font-size="10" font-weight="bold" font-family="Arial"
            >
                {"+5.35%p"}
            </text>
        </svg>
    }
}

#[function_component(Warranty)]
pub fn warranty() -> Html {
    html! {
        <section id="warranty" class="warranty">
            <style>{WARRANTY_STYLE}</style>
            <div class="accent-line"></div>

            <div class="warranty-inner">
                <div class="section-head reveal">
                    <div class="section-label">{"출력 보증 30년"}</div>
                    <h2 class="section-title">{"30년이 증명하는 신뢰"}</h2>
                    <p class="section-lede">
                        {"경쟁사 대비 약 3% 더 높은 출력 유지율."}<br/>
                        {"시공사가 건축주에게 제시할 수 있는 가장 강력한 수익 보장 근거입니다."}
                    </p>
                </div>

                <div class="warranty-cards reveal">
                    <div class="warranty-card">
                        <div class="warranty-card-value">
                            <AnimatedCounter target={99.0} duration_ms={2000} delay_ms={400} />
                            {"%"}
                        </div>
                        <div class="warranty-card-label">{"1년차 출력 보장"}</div>
                        <div class="warranty-card-sub">{"타사 98% vs HJT 99%"}</div>
                    </div>
                    <div class="warranty-card" style="transition-delay: 150ms">
                        <div class="warranty-card-value">
                            <AnimatedCounter target={90.3} from={80.0} decimals={1} duration_ms={2200} delay_ms={400} />
                            {"%"}
                        </div>
                        <div class="warranty-card-label">{"30년차 출력 보장"}</div>
                        <div class="warranty-card-sub">{"경쟁 기술 대비 +3%"}</div>
                    </div>
                    <div class="warranty-card" style="transition-delay: 300ms">
                        <div class="warranty-card-value plain">
                            {"15"}<span class="small">{"년"}</span>
                        </div>
                        <div class="warranty-card-label">{"제품 보증기간"}</div>
                        <div class="warranty-card-sub">{"제품 품질 무상 보증"}</div>
                    </div>
                    <div class="warranty-card" style="transition-delay: 450ms">
                        <div class="warranty-card-value plain">
                            {"30"}<span class="small">{"년"}</span>
                        </div>
                        <div class="warranty-card-label">{"출력 보증기간"}</div>
                        <div class="warranty-card-sub">{"장기 수익 안정 보장"}</div>
                    </div>
                </div>

                <div class="chart-frame reveal">
                    <div class="chart-head">
                        <div>
                            <h3>{"30년 출력 유지율 비교"}</h3>
                            <div class="sub">{"STC 기준 · 연간 출력 보증 곡선"}</div>
                        </div>
                        <div class="chart-legend">
                            <div class="entry">
                                <div class="swatch-hjt"></div>
                                <span>{"HJT 720W (JGDN132)"}</span>
                            </div>
                            <div class="entry">
                                <div class="swatch-std"></div>
                                <span>{"타사 N-type 모듈"}</span>
                            </div>
                        </div>
                    </div>

                    { retention_chart() }

                    <div class="chart-note">
                        <svg width="20" height="20" viewBox="0 0 20 20" fill="none">
                            <circle cx="10" cy="10" r="9" stroke="#F97316" stroke-width="1.5"/>
                            <path d="M10 6V10.5L13 13" stroke="#F97316" stroke-width="1.5" stroke-linecap="round"/>
                        </svg>
                        <p>
                            <strong>{"30년 후 차이 = 현금의 차이입니다."}</strong>
                            {" 1MW 규모 발전소 기준, HJT 720W의 30년차 추가 발전량은 경쟁 제품 대비 "}
                            <span class="gain">{"수천만 원의 추가 수익"}</span>
                            {"으로 환산됩니다."}
                        </p>
                    </div>
                </div>
            </div>
        </section>
    }
}
