use yew::prelude::*;
use web_sys::MouseEvent;

/// Open/closed state of a fixed list of questions. At most one is open.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Accordion {
    open: Option<usize>,
}

impl Accordion {
    /// Closes everything, then opens `index` unless it was the one already open.
    pub fn toggle(&mut self, index: usize) {
        let was_open = self.is_open(index);
        self.open = None;
        if !was_open {
            self.open = Some(index);
        }
    }

    pub fn is_open(&self, index: usize) -> bool {
        self.open == Some(index)
    }
}

const QUESTIONS: [(&str, &str); 6] = [
    (
        "من يمكنه التقديم على الطاقم؟",
        "أي لاعب في Hydra Land عمره بين 13 و 99 سنة ويلتزم بقوانين السيرفر يمكنه التقديم.",
    ),
    (
        "لماذا يجب أن يكون البريد من Gmail؟",
        "نتواصل مع المقبولين عبر Google Workspace، لذلك نحتاج حساب Gmail فعال.",
    ),
    (
        "كم ساعة يجب أن أكون متاحاً أسبوعياً؟",
        "لا يوجد حد أدنى ثابت، لكن الأولوية لمن يستطيع التواجد بانتظام خلال أوقات الذروة.",
    ),
    (
        "متى سأحصل على الرد؟",
        "تتم مراجعة الطلبات خلال 7 أيام، وستصلك رسالة على بريدك الإلكتروني بالنتيجة.",
    ),
    (
        "هل أحتاج إلى خبرة سابقة؟",
        "الخبرة ميزة وليست شرطاً. أخبرنا بما قمت به سابقاً حتى لو كان في سيرفرات صغيرة.",
    ),
    (
        "هل يمكنني التقديم أكثر من مرة؟",
        "نعم، يمكنك إعادة التقديم بعد 30 يوماً من آخر طلب.",
    ),
];

#[function_component(Faq)]
pub fn faq() -> Html {
    let accordion = use_state(Accordion::default);

    html! {
        <div class="faq-list">
            <style>
                {r#"
                .faq-list {
                    max-width: 800px;
                    margin: 0 auto;
                }
                .faq-item {
                    background: #ffffff;
                    border-radius: 12px;
                    margin-bottom: 1rem;
                    box-shadow: 0 4px 15px rgba(0, 0, 0, 0.06);
                    overflow: hidden;
                }
                .faq-question {
                    width: 100%;
                    display: flex;
                    justify-content: space-between;
                    align-items: center;
                    padding: 1.25rem 1.5rem;
                    background: none;
                    border: none;
                    font: inherit;
                    font-weight: 600;
                    text-align: right;
                    cursor: pointer;
                }
                .faq-answer {
                    max-height: 0;
                    overflow: hidden;
                    padding: 0 1.5rem;
                    color: #636e72;
                    transition: max-height 0.3s ease, padding 0.3s ease;
                }
                .faq-item.active .faq-answer {
                    max-height: 300px;
                    padding: 0 1.5rem 1.25rem;
                }
                .faq-item.active .toggle-icon {
                    transform: rotate(45deg);
                }
                .toggle-icon {
                    transition: transform 0.3s ease;
                }
                "#}
            </style>
            { for QUESTIONS.iter().enumerate().map(|(index, (question, answer))| {
                let toggle = {
                    let accordion = accordion.clone();
                    Callback::from(move |e: MouseEvent| {
                        e.prevent_default();
                        let mut next = (*accordion).clone();
                        next.toggle(index);
                        accordion.set(next);
                    })
                };

                html! {
                    <div class={classes!("faq-item", accordion.is_open(index).then(|| "active"))}>
                        <button class="faq-question" onclick={toggle}>
                            <span class="question-text">{*question}</span>
                            <span class="toggle-icon">{"+"}</span>
                        </button>
                        <div class="faq-answer">
                            <p>{*answer}</p>
                        </div>
                    </div>
                }
            }) }
        </div>
    }
}
