use wasm_bindgen::JsValue;
use web_sys::window;
use yew::prelude::*;

fn set_body_overflow(value: &str) {
    if let Some(body) = window().and_then(|w| w.document()).and_then(|d| d.body()) {
        let _ = body.style().set_property("overflow", value);
    }
}

#[derive(Properties, PartialEq)]
pub struct SuccessModalProps {
    pub open: bool,
    pub on_close: Callback<()>,
}

#[function_component(SuccessModal)]
pub fn success_modal(props: &SuccessModalProps) -> Html {
    let backdrop = use_node_ref();

    // Page scrolling is locked while the dialog shows.
    use_effect_with_deps(
        move |open| {
            set_body_overflow(if *open { "hidden" } else { "auto" });
            || ()
        },
        props.open,
    );

    // Only clicks on the backdrop itself close the dialog, not clicks inside it.
    let on_backdrop_click = {
        let backdrop = backdrop.clone();
        let on_close = props.on_close.clone();
        Callback::from(move |e: MouseEvent| {
            let target = e.target().map(JsValue::from);
            let backdrop = backdrop.get().map(JsValue::from);
            if target.is_some() && target == backdrop {
                on_close.emit(());
            }
        })
    };

    let on_close_click = {
        let on_close = props.on_close.clone();
        Callback::from(move |_: MouseEvent| on_close.emit(()))
    };

    let style = if props.open { "display: block;" } else { "display: none;" };

    html! {
        <div id="successModal" class="modal" ref={backdrop} {style} onclick={on_backdrop_click}>
            <style>
                {r#"
                .modal {
                    position: fixed;
                    inset: 0;
                    z-index: 1000;
                    background: rgba(0, 0, 0, 0.6);
                }
                .modal-content {
                    max-width: 440px;
                    margin: 15vh auto 0;
                    background: #ffffff;
                    border-radius: 16px;
                    padding: 2.5rem 2rem;
                    text-align: center;
                    box-shadow: 0 20px 60px rgba(0, 0, 0, 0.3);
                }
                .modal-icon {
                    font-size: 3.5rem;
                    color: #2ed573;
                    margin-bottom: 1rem;
                }
                .modal-button {
                    margin-top: 1.5rem;
                    padding: 0.75rem 2rem;
                    border: none;
                    border-radius: 8px;
                    background: #6c5ce7;
                    color: #ffffff;
                    font: inherit;
                    cursor: pointer;
                }
                "#}
            </style>
            <div class="modal-content">
                <div class="modal-icon"><i class="fas fa-check-circle"></i></div>
                <h3>{"تم إرسال طلبك بنجاح!"}</h3>
                <p>{"شكراً لاهتمامك بالانضمام إلى طاقم Hydra Land. سنراجع طلبك ونتواصل معك عبر البريد الإلكتروني قريباً."}</p>
                <button class="modal-button" onclick={on_close_click}>{"حسناً"}</button>
            </div>
        </div>
    }
}
