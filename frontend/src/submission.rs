use chrono::{DateTime, Local};
use futures::future::LocalBoxFuture;
use futures::FutureExt;
use gloo_timers::future::TimeoutFuture;
use log::{debug, info};
use thiserror::Error;

use crate::application::Application;
use crate::config;

/// Why an application did not reach its destination. The form keeps its
/// values so the applicant can try again.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SubmitError {
    #[error("submission rejected: {0}")]
    Rejected(String),
}

#[derive(Debug, Clone, PartialEq)]
pub struct SubmitReceipt {
    pub submitted_at: DateTime<Local>,
}

/// Sends one application somewhere. The page ships only [`SimulatedSubmitter`];
/// a real delivery backend plugs in here.
pub trait Submitter {
    fn submit<'a>(
        &'a self,
        application: &'a Application,
    ) -> LocalBoxFuture<'a, Result<SubmitReceipt, SubmitError>>;
}

/// Logs what would be sent, waits, and reports success.
#[derive(Debug, Clone, PartialEq)]
pub struct SimulatedSubmitter {
    pub delay_ms: u32,
}

impl Default for SimulatedSubmitter {
    fn default() -> Self {
        Self {
            delay_ms: config::SUBMISSION_DELAY_MS,
        }
    }
}

impl Submitter for SimulatedSubmitter {
    fn submit<'a>(
        &'a self,
        application: &'a Application,
    ) -> LocalBoxFuture<'a, Result<SubmitReceipt, SubmitError>> {
        async move {
            let form_data = match serde_wasm_bindgen::to_value(application) {
                Ok(form_data) => form_data,
                Err(e) => {
                    debug!("Could not encode the application: {}", e);
                    return Err(SubmitError::Rejected(e.to_string()));
                }
            };
            gloo_console::log!("Form Data:", form_data);

            let submitted_at = Local::now();
            info!("Email Content:\n{}", compose_summary(application, &submitted_at));

            TimeoutFuture::new(self.delay_ms).await;

            Ok(SubmitReceipt { submitted_at })
        }
        .boxed_local()
    }
}

/// Text of the notification a reviewer would receive for this application.
pub fn compose_summary(application: &Application, submitted_at: &DateTime<Local>) -> String {
    format!(
        "طلب انضمام جديد لفريق الطاقم - Hydra Land
===========================================

معلومات المتقدم:
- الاسم: {name}
- البريد الإلكتروني: {email}
- العمر: {age}
- تاريخ الميلاد: {birthday}
- المنطقة الزمنية: {timezone}
- الساعات المتاحة أسبوعياً: {weekly_hours}

الخبرة:
{experience}

دوافع الانضمام:
{motivation}

تاريخ التقديم: {submitted}

---
يرجى مراجعة الطلب والرد على المتقدم عبر البريد الإلكتروني.
",
        name = application.name,
        email = application.email,
        age = application.age,
        birthday = application.birthday,
        timezone = application.timezone,
        weekly_hours = application.weekly_hours,
        experience = application.experience,
        motivation = application.motivation,
        submitted = localized_timestamp(submitted_at),
    )
}

/// `d/m/yyyy، h:mm:ss ص|م` written with Arabic-Indic digits.
pub fn localized_timestamp(at: &DateTime<Local>) -> String {
    let meridiem = if at.format("%P").to_string() == "am" { "ص" } else { "م" };
    let latin = format!("{}، {} {}", at.format("%-d/%-m/%Y"), at.format("%-I:%M:%S"), meridiem);
    latin
        .chars()
        .map(|c| match c.to_digit(10) {
            Some(d) => char::from_u32(0x0660 + d).unwrap_or(c),
            None => c,
        })
        .collect()
}
