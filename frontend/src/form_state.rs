use std::collections::BTreeMap;
use std::rc::Rc;

use chrono::NaiveDate;
use yew::prelude::*;

use crate::application::{Field, FormValues};
use crate::validation::{field_feedback, FieldFeedback};

/// Everything that can happen to the application form.
#[derive(Debug, Clone, PartialEq)]
pub enum FormAction {
    /// A control's value changed. `name` is the control's `name` attribute.
    Input { name: String, value: String, today: NaiveDate },
    Focus { name: String },
    Blur { name: String, today: NaiveDate },
    Sending(bool),
    ShowSuccess,
    CloseSuccess,
    Reset,
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct FormState {
    pub values: FormValues,
    pub feedback: BTreeMap<Field, FieldFeedback>,
    pub focused: Option<Field>,
    pub sending: bool,
    pub success_open: bool,
}

impl FormState {
    pub fn feedback_class(&self, field: Field) -> Option<&'static str> {
        self.feedback.get(&field).and_then(|feedback| feedback.class())
    }

    pub fn is_focused(&self, field: Field) -> bool {
        self.focused == Some(field)
    }
}

impl Reducible for FormState {
    type Action = FormAction;

    fn reduce(self: Rc<Self>, action: Self::Action) -> Rc<Self> {
        let mut next = (*self).clone();
        match action {
            FormAction::Input { name, value, today } => {
                if let Some(field) = Field::from_name(&name) {
                    next.feedback.insert(field, field_feedback(field, &value, today));
                    next.values.set(field, value);
                }
            }
            FormAction::Focus { name } => {
                next.focused = Field::from_name(&name);
            }
            FormAction::Blur { name, today } => {
                if let Some(field) = Field::from_name(&name) {
                    if next.focused == Some(field) {
                        next.focused = None;
                    }
                    let feedback = field_feedback(field, next.values.get(field), today);
                    next.feedback.insert(field, feedback);
                }
            }
            FormAction::Sending(sending) => next.sending = sending,
            FormAction::ShowSuccess => next.success_open = true,
            FormAction::CloseSuccess => next.success_open = false,
            FormAction::Reset => {
                next.values = FormValues::default();
                next.feedback.clear();
            }
        }
        next.into()
    }
}
