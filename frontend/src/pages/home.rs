use std::rc::Rc;

use yew::prelude::*;

use crate::components::anchor::AnchorLink;
use crate::components::application_form::ApplicationForm;
use crate::components::faq::Faq;
use crate::components::header::SiteHeader;
use crate::components::reveal::{use_entrance_animation, REVEAL_STYLES};
use crate::submission::{SimulatedSubmitter, Submitter};

const RULES: [(&str, &str, &str); 6] = [
    ("fa-handshake", "الاحترام أولاً", "لا سب ولا تنمر ولا عنصرية تجاه أي لاعب أو عضو في الطاقم."),
    ("fa-ban", "ممنوع الغش", "أي هاك أو ماكرو أو استغلال للثغرات يؤدي إلى حظر دائم."),
    ("fa-gavel", "العدل في القرارات", "عضو الطاقم يطبق القوانين على الجميع دون محاباة."),
    ("fa-user-secret", "السرية", "لا تشارك معلومات الطاقم أو بيانات اللاعبين خارج القنوات الرسمية."),
    ("fa-clock", "الالتزام بالوقت", "التواجد في الساعات التي تحددها في طلبك والإبلاغ عن الغياب مسبقاً."),
    ("fa-comments", "التواصل الواضح", "استخدم قنوات الديسكورد الرسمية لكل ما يخص عمل الطاقم."),
];

const CONTACTS: [(&str, &str, &str, &str); 3] = [
    ("fab fa-discord", "ديسكورد", "انضم إلى سيرفر الديسكورد الرسمي", "https://discord.gg/hydraland"),
    ("fas fa-envelope", "البريد الإلكتروني", "staff.hydraland@gmail.com", "mailto:staff.hydraland@gmail.com"),
    ("fas fa-server", "عنوان السيرفر", "play.hydraland.net", "#home"),
];

#[function_component(Home)]
pub fn home() -> Html {
    let submitter = use_memo(|_| Rc::new(SimulatedSubmitter::default()) as Rc<dyn Submitter>, ());

    use_entrance_animation();

    html! {
        <div class="home-page" dir="rtl" lang="ar">
            <style>
                {REVEAL_STYLES}
                {r#"
                .home-page {
                    font-family: 'Cairo', 'Segoe UI', Tahoma, sans-serif;
                    color: #2d3436;
                    background: #f5f6fa;
                    min-height: 100vh;
                }
                section {
                    padding: 5rem 2rem;
                }
                .section-title {
                    text-align: center;
                    font-size: 2.25rem;
                    margin-bottom: 3rem;
                }
                .hero {
                    min-height: 100vh;
                    display: flex;
                    flex-direction: column;
                    align-items: center;
                    justify-content: center;
                    text-align: center;
                    background: linear-gradient(135deg, #6c5ce7 0%, #341f97 100%);
                    color: #ffffff;
                }
                .hero h1 {
                    font-size: 3.5rem;
                    margin-bottom: 1rem;
                }
                .hero p {
                    font-size: 1.25rem;
                    max-width: 640px;
                    opacity: 0.9;
                }
                .cta-button {
                    display: inline-block;
                    margin-top: 2rem;
                    padding: 1rem 2.5rem;
                    border-radius: 50px;
                    background: #ffffff;
                    color: #6c5ce7;
                    font-weight: 700;
                    text-decoration: none;
                }
                .cards {
                    max-width: 1200px;
                    margin: 0 auto;
                    display: grid;
                    grid-template-columns: repeat(auto-fit, minmax(260px, 1fr));
                    gap: 1.5rem;
                }
                .rule-card,
                .contact-card {
                    background: #ffffff;
                    border-radius: 16px;
                    padding: 2rem;
                    box-shadow: 0 4px 20px rgba(0, 0, 0, 0.06);
                    text-align: center;
                }
                .rule-card i,
                .contact-card i {
                    font-size: 2rem;
                    color: #6c5ce7;
                    margin-bottom: 1rem;
                }
                .contact-card a {
                    color: #6c5ce7;
                    text-decoration: none;
                }
                .footer {
                    text-align: center;
                    padding: 2rem;
                    background: #2d3436;
                    color: #b2bec3;
                }
                @media (max-width: 768px) {
                    .hero h1 {
                        font-size: 2.25rem;
                    }
                }
                "#}
            </style>

            <SiteHeader />

            <section id="home" class="hero">
                <h1>{"انضم إلى طاقم Hydra Land"}</h1>
                <p>{"نبحث عن لاعبين متعاونين ومسؤولين لمساعدتنا في إدارة السيرفر ودعم المجتمع."}</p>
                <AnchorLink href="#apply" class="cta-button">{"قدّم الآن"}</AnchorLink>
            </section>

            <section id="rules">
                <h2 class="section-title">{"قوانين الطاقم"}</h2>
                <div class="cards">
                    { for RULES.iter().map(|(icon, title, text)| html! {
                        <div class="rule-card">
                            <i class={classes!("fas", *icon)}></i>
                            <h3>{*title}</h3>
                            <p>{*text}</p>
                        </div>
                    }) }
                </div>
            </section>

            <section id="apply">
                <h2 class="section-title">{"نموذج التقديم"}</h2>
                <ApplicationForm submitter={(*submitter).clone()} />
            </section>

            <section id="faq">
                <h2 class="section-title">{"الأسئلة الشائعة"}</h2>
                <Faq />
            </section>

            <section id="contact">
                <h2 class="section-title">{"تواصل معنا"}</h2>
                <div class="cards">
                    { for CONTACTS.iter().map(|(icon, title, text, href)| html! {
                        <div class="contact-card">
                            <i class={*icon}></i>
                            <h3>{*title}</h3>
                            if href.starts_with('#') {
                                <AnchorLink href={*href}>{*text}</AnchorLink>
                            } else {
                                <a href={*href} target="_blank" rel="noopener">{*text}</a>
                            }
                        </div>
                    }) }
                </div>
            </section>

            <footer class="footer">
                <p>{"© Hydra Land. جميع الحقوق محفوظة."}</p>
            </footer>
        </div>
    }
}
