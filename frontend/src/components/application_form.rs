use std::rc::Rc;

use chrono::{Local, NaiveDate};
use log::{debug, info};
use wasm_bindgen::JsCast;
use wasm_bindgen_futures::spawn_local;
use web_sys::js_sys::{try_iter, Array};
use web_sys::{
    window, EventTarget, FormData, HtmlFormElement, HtmlInputElement, HtmlSelectElement,
    HtmlTextAreaElement,
};
use yew::prelude::*;

use crate::application::{Application, Field, FormValues, CHECKED};
use crate::components::modal::SuccessModal;
use crate::form_state::{FormAction, FormState};
use crate::submission::Submitter;
use crate::workflow::{submit_application, ApplicationView, SubmissionOutcome};

fn today() -> NaiveDate {
    Local::now().date_naive()
}

fn set_body_loading(loading: bool) {
    if let Some(body) = window().and_then(|w| w.document()).and_then(|d| d.body()) {
        let classes = body.class_list();
        let _ = if loading {
            classes.add_1("loading")
        } else {
            classes.remove_1("loading")
        };
    }
}

/// `name` and current value of whichever form control fired the event.
fn control_value(target: Option<EventTarget>) -> Option<(String, String)> {
    let target = target?;
    if let Some(input) = target.dyn_ref::<HtmlInputElement>() {
        let value = if input.type_() == "checkbox" {
            if input.checked() { CHECKED.to_string() } else { String::new() }
        } else {
            input.value()
        };
        return Some((input.name(), value));
    }
    if let Some(select) = target.dyn_ref::<HtmlSelectElement>() {
        return Some((select.name(), select.value()));
    }
    if let Some(area) = target.dyn_ref::<HtmlTextAreaElement>() {
        return Some((area.name(), area.value()));
    }
    None
}

fn control_name(target: Option<EventTarget>) -> Option<String> {
    control_value(target).map(|(name, _)| name)
}

/// Snapshot of the form as the browser would submit it.
fn collect_form(form: &HtmlFormElement) -> Option<FormValues> {
    let data = FormData::new_with_form(form).ok()?;
    let entries = try_iter(&data).ok()??;
    let pairs = entries.filter_map(Result::ok).filter_map(|entry| {
        let pair: Array = entry.unchecked_into();
        Some((pair.get(0).as_string()?, pair.get(1).as_string()?))
    });
    Some(FormValues::from_pairs(pairs))
}

/// Routes workflow updates into the form's reducer and the document body.
#[derive(Clone)]
struct PageView {
    dispatcher: UseReducerDispatcher<FormState>,
}

impl ApplicationView for PageView {
    fn show_notice(&self, message: &str) {
        if let Some(window) = window() {
            let _ = window.alert_with_message(message);
        }
    }

    fn set_sending(&self, sending: bool) {
        self.dispatcher.dispatch(FormAction::Sending(sending));
        set_body_loading(sending);
    }

    fn show_success(&self) {
        self.dispatcher.dispatch(FormAction::ShowSuccess);
    }

    fn reset_form(&self) {
        self.dispatcher.dispatch(FormAction::Reset);
    }
}

#[derive(Properties, Clone)]
pub struct ApplicationFormProps {
    pub submitter: Rc<dyn Submitter>,
}

impl PartialEq for ApplicationFormProps {
    fn eq(&self, other: &Self) -> bool {
        Rc::ptr_eq(&self.submitter, &other.submitter)
    }
}

#[function_component(ApplicationForm)]
pub fn application_form(props: &ApplicationFormProps) -> Html {
    let state = use_reducer(FormState::default);

    let on_edit = {
        let dispatcher = state.dispatcher();
        Callback::from(move |target: Option<EventTarget>| {
            if let Some((name, value)) = control_value(target) {
                dispatcher.dispatch(FormAction::Input { name, value, today: today() });
            }
        })
    };
    let oninput = on_edit.reform(|e: InputEvent| e.target());
    let onchange = on_edit.reform(|e: Event| e.target());

    let onfocus = {
        let dispatcher = state.dispatcher();
        Callback::from(move |e: FocusEvent| {
            if let Some(name) = control_name(e.target()) {
                dispatcher.dispatch(FormAction::Focus { name });
            }
        })
    };

    let onblur = {
        let dispatcher = state.dispatcher();
        Callback::from(move |e: FocusEvent| {
            if let Some(name) = control_name(e.target()) {
                dispatcher.dispatch(FormAction::Blur { name, today: today() });
            }
        })
    };

    let onsubmit = {
        let state = state.clone();
        let submitter = props.submitter.clone();
        Callback::from(move |e: SubmitEvent| {
            e.prevent_default();
            let values = e
                .target_dyn_into::<HtmlFormElement>()
                .and_then(|form| collect_form(&form))
                .unwrap_or_else(|| state.values.clone());
            let application = Application::from_values(&values);
            let view = PageView { dispatcher: state.dispatcher() };
            let submitter = submitter.clone();
            spawn_local(async move {
                match submit_application(&view, submitter.as_ref(), application, today()).await {
                    SubmissionOutcome::Sent(receipt) => {
                        info!("Application delivered at {}", receipt.submitted_at.to_rfc3339());
                    }
                    SubmissionOutcome::Invalid(failure) => {
                        debug!("{} validation rule(s) failed", failure.messages.len());
                    }
                    SubmissionOutcome::Failed(e) => debug!("Submission left for retry: {}", e),
                }
            });
        })
    };

    let on_close_modal = {
        let dispatcher = state.dispatcher();
        Callback::from(move |_| dispatcher.dispatch(FormAction::CloseSuccess))
    };

    let group = |field: Field| classes!("form-group", state.is_focused(field).then(|| "focused"));
    let control = |field: Field| classes!(state.feedback_class(field));

    html! {
        <>
            <style>
                {r#"
                .application-form {
                    max-width: 720px;
                    margin: 0 auto;
                    background: #ffffff;
                    border-radius: 16px;
                    padding: 2.5rem;
                    box-shadow: 0 10px 40px rgba(0, 0, 0, 0.08);
                }
                .form-row {
                    display: grid;
                    grid-template-columns: 1fr 1fr;
                    gap: 1.25rem;
                }
                .form-group {
                    display: flex;
                    flex-direction: column;
                    margin-bottom: 1.25rem;
                }
                .form-group label {
                    font-weight: 600;
                    margin-bottom: 0.5rem;
                    transition: color 0.2s ease;
                }
                .form-group.focused label {
                    color: #6c5ce7;
                }
                .form-group input,
                .form-group select,
                .form-group textarea {
                    padding: 0.75rem 1rem;
                    border: 2px solid #dfe6e9;
                    border-radius: 8px;
                    font: inherit;
                    transition: border-color 0.2s ease, box-shadow 0.2s ease;
                }
                .form-group textarea {
                    min-height: 120px;
                    resize: vertical;
                }
                .form-group input.error,
                .form-group select.error,
                .form-group textarea.error {
                    border-color: #ff4757;
                    box-shadow: 0 0 0 3px rgba(255, 71, 87, 0.1);
                }
                .form-group input.success,
                .form-group select.success,
                .form-group textarea.success {
                    border-color: #2ed573;
                    box-shadow: 0 0 0 3px rgba(46, 213, 115, 0.1);
                }
                .checkbox-group {
                    flex-direction: row;
                    align-items: center;
                    gap: 0.5rem;
                }
                .submit-button {
                    width: 100%;
                    padding: 1rem;
                    border: none;
                    border-radius: 8px;
                    background: linear-gradient(45deg, #6c5ce7, #a29bfe);
                    color: #ffffff;
                    font: inherit;
                    font-weight: 700;
                    cursor: pointer;
                }
                .submit-button:disabled {
                    opacity: 0.7;
                    cursor: wait;
                }
                body.loading {
                    cursor: progress;
                }
                @media (max-width: 768px) {
                    .form-row {
                        grid-template-columns: 1fr;
                    }
                    .application-form {
                        padding: 1.5rem;
                    }
                }
                "#}
            </style>
            <form id="staffApplication" class="application-form" {onsubmit}>
                <div class="form-row">
                    <div class={group(Field::Name)}>
                        <label for="name">{"الاسم"}</label>
                        <input
                            type="text"
                            id="name"
                            name="name"
                            required=true
                            class={control(Field::Name)}
                            value={state.values.get(Field::Name).to_string()}
                            oninput={oninput.clone()}
                            onfocus={onfocus.clone()}
                            onblur={onblur.clone()}
                        />
                    </div>
                    <div class={group(Field::Email)}>
                        <label for="email">{"البريد الإلكتروني (Gmail)"}</label>
                        <input
                            type="email"
                            id="email"
                            name="email"
                            required=true
                            placeholder="example@gmail.com"
                            class={control(Field::Email)}
                            value={state.values.get(Field::Email).to_string()}
                            oninput={oninput.clone()}
                            onfocus={onfocus.clone()}
                            onblur={onblur.clone()}
                        />
                    </div>
                </div>
                <div class="form-row">
                    <div class={group(Field::Age)}>
                        <label for="age">{"العمر"}</label>
                        <input
                            type="number"
                            id="age"
                            name="age"
                            required=true
                            class={control(Field::Age)}
                            value={state.values.get(Field::Age).to_string()}
                            oninput={oninput.clone()}
                            onfocus={onfocus.clone()}
                            onblur={onblur.clone()}
                        />
                    </div>
                    <div class={group(Field::Birthday)}>
                        <label for="birthday">{"تاريخ الميلاد"}</label>
                        <input
                            type="date"
                            id="birthday"
                            name="birthday"
                            required=true
                            class={control(Field::Birthday)}
                            value={state.values.get(Field::Birthday).to_string()}
                            oninput={oninput.clone()}
                            onfocus={onfocus.clone()}
                            onblur={onblur.clone()}
                        />
                    </div>
                </div>
                <div class="form-row">
                    <div class={group(Field::Timezone)}>
                        <label for="timezone">{"المنطقة الزمنية"}</label>
                        <select
                            id="timezone"
                            name="timezone"
                            required=true
                            class={control(Field::Timezone)}
                            oninput={oninput.clone()}
                            onfocus={onfocus.clone()}
                            onblur={onblur.clone()}
                        >
                            <option value="" selected={state.values.get(Field::Timezone).is_empty()}>
                                {"اختر منطقتك الزمنية"}
                            </option>
                            {
                                chrono_tz::TZ_VARIANTS.iter().map(|tz| {
                                    html! {
                                        <option value={tz.name()} selected={tz.name() == state.values.get(Field::Timezone)}>
                                            {tz.name()}
                                        </option>
                                    }
                                }).collect::<Html>()
                            }
                        </select>
                    </div>
                    <div class={group(Field::WeeklyHours)}>
                        <label for="weeklyHours">{"الساعات المتاحة أسبوعياً"}</label>
                        <input
                            type="number"
                            id="weeklyHours"
                            name="weeklyHours"
                            min="1"
                            max="168"
                            required=true
                            class={control(Field::WeeklyHours)}
                            value={state.values.get(Field::WeeklyHours).to_string()}
                            oninput={oninput.clone()}
                            onfocus={onfocus.clone()}
                            onblur={onblur.clone()}
                        />
                    </div>
                </div>
                <div class={group(Field::Experience)}>
                    <label for="experience">{"خبرتك السابقة في إدارة السيرفرات"}</label>
                    <textarea
                        id="experience"
                        name="experience"
                        required=true
                        class={control(Field::Experience)}
                        value={state.values.get(Field::Experience).to_string()}
                        oninput={oninput.clone()}
                        onfocus={onfocus.clone()}
                        onblur={onblur.clone()}
                    />
                </div>
                <div class={group(Field::Motivation)}>
                    <label for="motivation">{"لماذا تريد الانضمام إلى الطاقم؟"}</label>
                    <textarea
                        id="motivation"
                        name="motivation"
                        required=true
                        class={control(Field::Motivation)}
                        value={state.values.get(Field::Motivation).to_string()}
                        oninput={oninput.clone()}
                        onfocus={onfocus.clone()}
                        onblur={onblur.clone()}
                    />
                </div>
                <div class={classes!(group(Field::AgreeRules), "checkbox-group")}>
                    <input
                        type="checkbox"
                        id="agreeRules"
                        name="agreeRules"
                        checked={state.values.is_checked(Field::AgreeRules)}
                        {onchange}
                        onfocus={onfocus.clone()}
                        onblur={onblur.clone()}
                    />
                    <label for="agreeRules">{"قرأت قوانين السيرفر وأوافق عليها"}</label>
                </div>
                <button type="submit" class="submit-button" disabled={state.sending}>
                    {
                        if state.sending {
                            html! { <><i class="fas fa-spinner fa-spin"></i>{" جاري الإرسال..."}</> }
                        } else {
                            html! { <><i class="fas fa-paper-plane"></i>{" إرسال الطلب"}</> }
                        }
                    }
                </button>
            </form>
            <SuccessModal open={state.success_open} on_close={on_close_modal} />
        </>
    }
}
