use yew::prelude::*;

const PRODUCT_LINKS: [(&str, &str); 3] = [
    ("#technology", "기술 사양"),
    ("#warranty", "보증 정책"),
    ("#projects", "납품 실적"),
];

const INQUIRY_LINKS: [&str; 3] = ["기술 상담 신청", "단가 문의", "파트너십 제안"];

const FOOTER_STYLE: &str = r#"
.footer {
    padding: 3rem 0;
    border-top: 1px solid #1E3F6F;
    background: #060D18;
}
.footer-inner { max-width: 80rem; margin: 0 auto; padding: 0 1.5rem; }
.footer-grid {
    display: grid;
    grid-template-columns: 2fr 1fr 1fr;
    gap: 2rem;
    margin-bottom: 2.5rem;
    align-items: flex-start;
}
.footer-brand-name { color: #fff; font-weight: 900; font-size: 1.125rem; margin-bottom: 0.75rem; }
.footer-brand-name span { color: #94A9C7; font-weight: 500; font-size: 0.875rem; }
.footer-tagline {
    color: #5A7090;
    font-size: 0.875rem;
    line-height: 1.7;
    margin-bottom: 1rem;
    max-width: 24rem;
}
.footer-contact-lines { color: #5A7090; font-size: 0.75rem; line-height: 2; }
.footer-col-head { color: #fff; font-weight: 600; font-size: 0.875rem; margin-bottom: 1rem; }
.footer-link {
    display: block;
    color: #5A7090;
    font-size: 0.875rem;
    text-decoration: none;
    margin-bottom: 0.75rem;
    transition: color 0.2s ease;
}
.footer-link:hover { color: #F97316; }
.footer-bottom {
    border-top: 1px solid #1E3F6F;
    padding-top: 1.5rem;
    display: flex;
    align-items: center;
    justify-content: space-between;
    flex-wrap: wrap;
    gap: 0.75rem;
}
.footer-copyright { color: #5A7090; font-size: 0.75rem; }
.footer-meta { display: flex; align-items: center; gap: 0.5rem; flex-wrap: wrap; }
.footer-meta .reg { color: #5A7090; font-size: 0.75rem; }
.footer-meta .dot { color: #1E3F6F; }
.footer-meta .importer { color: #F97316; font-size: 0.75rem; font-weight: 600; }
@media (max-width: 768px) {
    .footer-grid { grid-template-columns: 1fr; }
}
"#;

#[function_component(Footer)]
pub fn footer() -> Html {
    html! {
        <footer class="footer">
            <style>{FOOTER_STYLE}</style>
            <div class="footer-inner">
                <div class="footer-grid">
                    <div>
                        <div class="footer-brand-name">
                            {"GOLDEN SOLAR"}
                            <span>{" × 이에프글로벌코리아"}</span>
                        </div>
                        <p class="footer-tagline">
                            {"대한민국 유일의 HJT 720W 공급사. 23.18% 효율과 30년 90.3% 출력 보증으로 시공사의 수익률을 극대화합니다."}
                        </p>
                        <div class="footer-contact-lines">
                            <div>{"📍 서울 사무소: 경기도 고양시 덕양구 향동로 217"}</div>
                            <div>{"📍 구리 본사: 경기도 구리시 건원대로 51, 3105호"}</div>
                            <div>{"📞 010-5630-8344"}</div>
                            <div>{"✉️ efglobalkorea@gmail.com"}</div>
                        </div>
                    </div>

                    <div>
                        <div class="footer-col-head">{"제품 정보"}</div>
                        { for PRODUCT_LINKS.iter().map(|(href, label)| html! {
                            <a href={*href} class="footer-link">{*label}</a>
                        }) }
                    </div>

                    <div>
                        <div class="footer-col-head">{"문의"}</div>
                        { for INQUIRY_LINKS.iter().map(|label| html! {
                            <a href="#contact" class="footer-link">{*label}</a>
                        }) }
                    </div>
                </div>

                <div class="footer-bottom">
                    <div class="footer-copyright">
                        {"© 2025 주식회사 이에프글로벌코리아. All rights reserved."}
                    </div>
                    <div class="footer-meta">
                        <span class="reg">{"사업자등록번호: 630-88-00643"}</span>
                        <span class="dot">{"·"}</span>
                        <span class="importer">{"Golden Solar 공식 수입사"}</span>
                    </div>
                </div>
            </div>
        </footer>
    }
}
