use chrono::NaiveDate;
use log::{error, info, warn};

use crate::application::Application;
use crate::submission::{SubmitError, SubmitReceipt, Submitter};
use crate::validation::{validate, ValidationFailure};

pub const SUBMIT_FAILED_NOTICE: &str = "حدث خطأ أثناء إرسال الطلب. يرجى المحاولة مرة أخرى.";

/// The parts of the page a submission attempt touches.
pub trait ApplicationView {
    /// Blocking notice shown to the applicant.
    fn show_notice(&self, message: &str);
    /// Sending: submit control disabled with the progress label, body marked `loading`.
    /// Not sending: original label, control enabled, marker removed.
    fn set_sending(&self, sending: bool);
    fn show_success(&self);
    fn reset_form(&self);
}

#[derive(Debug)]
pub enum SubmissionOutcome {
    Invalid(ValidationFailure),
    Sent(SubmitReceipt),
    Failed(SubmitError),
}

// Puts the submit control back however the attempt ends.
struct SendingGuard<'a, V: ApplicationView + ?Sized> {
    view: &'a V,
}

impl<'a, V: ApplicationView + ?Sized> SendingGuard<'a, V> {
    fn start(view: &'a V) -> Self {
        view.set_sending(true);
        Self { view }
    }
}

impl<V: ApplicationView + ?Sized> Drop for SendingGuard<'_, V> {
    fn drop(&mut self) {
        self.view.set_sending(false);
    }
}

/// One submit attempt: validate, send through `submitter`, report back through `view`.
pub async fn submit_application<V, S>(
    view: &V,
    submitter: &S,
    application: Application,
    today: NaiveDate,
) -> SubmissionOutcome
where
    V: ApplicationView + ?Sized,
    S: Submitter + ?Sized,
{
    if let Err(failure) = validate(&application, today) {
        warn!("Application rejected by validation: {:?}", failure.messages);
        view.show_notice(&failure.to_string());
        return SubmissionOutcome::Invalid(failure);
    }

    let _sending = SendingGuard::start(view);

    match submitter.submit(&application).await {
        Ok(receipt) => {
            info!("Application from {} submitted at {}", application.email, receipt.submitted_at);
            view.show_success();
            view.reset_form();
            SubmissionOutcome::Sent(receipt)
        }
        Err(e) => {
            error!("Error submitting form: {}", e);
            view.show_notice(SUBMIT_FAILED_NOTICE);
            SubmissionOutcome::Failed(e)
        }
    }
}
