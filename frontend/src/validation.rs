//! Rule table shared by whole-form validation (run on submit, blocking) and
//! field-level feedback (run live while typing, advisory).
//!
//! Every rule belongs to one field. Value rules only look at that field's
//! value and therefore also drive the per-field feedback; record rules need
//! the whole application and only take part in whole-form validation.

use chrono::NaiveDate;
use once_cell::sync::Lazy;
use regex::Regex;
use thiserror::Error;

use crate::application::{parse_date, parse_int, Application, Field};
use crate::config;

static EMAIL_SHAPE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^[^\s@]+@[^\s@]+\.[^\s@]+$").expect("email pattern compiles"));

pub const NOTICE_HEADER: &str = "يرجى تصحيح الأخطاء التالية:";

pub const EMAIL_SHAPE_MESSAGE: &str = "يرجى إدخال بريد إلكتروني صحيح";
pub const EMAIL_DOMAIN_MESSAGE: &str = "يجب استخدام بريد إلكتروني من Gmail";
pub const AGE_RANGE_MESSAGE: &str = "العمر يجب أن يكون بين 13 و 99 سنة";
pub const NAME_MESSAGE: &str = "يرجى إدخال اسم صحيح";
pub const EXPERIENCE_MESSAGE: &str = "يرجى كتابة تفاصيل أكثر عن خبرتك (10 أحرف على الأقل)";
pub const MOTIVATION_MESSAGE: &str = "يرجى كتابة تفاصيل أكثر عن دوافعك (10 أحرف على الأقل)";
pub const AGREEMENT_MESSAGE: &str = "يجب الموافقة على قوانين السيرفر";
pub const BIRTHDAY_MESSAGE: &str = "تاريخ الميلاد يجب أن يكون في الماضي";
pub const TIMEZONE_MESSAGE: &str = "يرجى اختيار المنطقة الزمنية";
pub const WEEKLY_HOURS_MESSAGE: &str = "يرجى تحديد عدد الساعات المتاحة أسبوعياً";
pub const AGE_MISMATCH_MESSAGE: &str = "العمر المدخل لا يتطابق مع تاريخ الميلاد";

#[derive(Clone, Copy)]
pub enum Check {
    Value(fn(&str, NaiveDate) -> bool),
    Record(fn(&Application, NaiveDate) -> bool),
}

pub struct Rule {
    pub field: Field,
    pub message: &'static str,
    pub check: Check,
}

impl Rule {
    fn passes(&self, application: &Application, today: NaiveDate) -> bool {
        match self.check {
            Check::Value(check) => check(application.value(self.field), today),
            Check::Record(check) => check(application, today),
        }
    }
}

/// Ordered by the position their message takes in the aggregated notice.
pub static RULES: &[Rule] = &[
    Rule {
        field: Field::Email,
        message: EMAIL_SHAPE_MESSAGE,
        check: Check::Value(email_well_formed),
    },
    Rule {
        field: Field::Email,
        message: EMAIL_DOMAIN_MESSAGE,
        check: Check::Value(email_on_required_domain),
    },
    Rule {
        field: Field::Age,
        message: AGE_RANGE_MESSAGE,
        check: Check::Value(age_in_range),
    },
    Rule {
        field: Field::Name,
        message: NAME_MESSAGE,
        check: Check::Value(name_long_enough),
    },
    Rule {
        field: Field::Experience,
        message: EXPERIENCE_MESSAGE,
        check: Check::Value(essay_long_enough),
    },
    Rule {
        field: Field::Motivation,
        message: MOTIVATION_MESSAGE,
        check: Check::Value(essay_long_enough),
    },
    Rule {
        field: Field::AgreeRules,
        message: AGREEMENT_MESSAGE,
        check: Check::Value(is_set),
    },
    Rule {
        field: Field::Birthday,
        message: BIRTHDAY_MESSAGE,
        check: Check::Value(birthday_in_past),
    },
    Rule {
        field: Field::Timezone,
        message: TIMEZONE_MESSAGE,
        check: Check::Value(is_present),
    },
    Rule {
        field: Field::WeeklyHours,
        message: WEEKLY_HOURS_MESSAGE,
        check: Check::Value(is_present),
    },
    Rule {
        field: Field::Age,
        message: AGE_MISMATCH_MESSAGE,
        check: Check::Record(age_matches_birthday),
    },
];

fn email_well_formed(value: &str, _today: NaiveDate) -> bool {
    EMAIL_SHAPE.is_match(value)
}

// Substring match: `someone@x.gmail.com.example` is accepted too.
fn email_on_required_domain(value: &str, _today: NaiveDate) -> bool {
    value.contains(config::REQUIRED_EMAIL_DOMAIN)
}

fn age_in_range(value: &str, _today: NaiveDate) -> bool {
    parse_int(value).map_or(false, |age| {
        (config::MIN_AGE..=config::MAX_AGE).contains(&age)
    })
}

fn name_long_enough(value: &str, _today: NaiveDate) -> bool {
    value.trim().chars().count() >= config::MIN_NAME_LENGTH
}

fn essay_long_enough(value: &str, _today: NaiveDate) -> bool {
    value.trim().chars().count() >= config::MIN_ESSAY_LENGTH
}

fn is_set(value: &str, _today: NaiveDate) -> bool {
    !value.is_empty()
}

fn is_present(value: &str, _today: NaiveDate) -> bool {
    !value.trim().is_empty()
}

fn birthday_in_past(value: &str, today: NaiveDate) -> bool {
    parse_date(value).map_or(false, |birthday| birthday < today)
}

// Only meaningful once both sides parse; the value rules report the rest.
fn age_matches_birthday(application: &Application, today: NaiveDate) -> bool {
    match (application.declared_age(), application.birthday_date()) {
        (Some(declared), Some(birthday)) => {
            declared.abs_diff(computed_age(birthday, today)) <= config::AGE_TOLERANCE_YEARS as u64
        }
        _ => true,
    }
}

/// Whole years between `birthday` and `today`, using 365.25-day years.
pub fn computed_age(birthday: NaiveDate, today: NaiveDate) -> i64 {
    let days = (today - birthday).num_days() as f64;
    (days / config::DAYS_PER_YEAR).floor() as i64
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("{}\n{}", NOTICE_HEADER, .messages.join("\n"))]
pub struct ValidationFailure {
    pub messages: Vec<&'static str>,
}

/// Runs every rule and collects all failures.
pub fn validate(application: &Application, today: NaiveDate) -> Result<(), ValidationFailure> {
    let messages: Vec<&'static str> = RULES
        .iter()
        .filter(|rule| !rule.passes(application, today))
        .map(|rule| rule.message)
        .collect();

    if messages.is_empty() {
        Ok(())
    } else {
        Err(ValidationFailure { messages })
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FieldFeedback {
    Neutral,
    Affirmed,
    Flagged,
}

impl FieldFeedback {
    pub fn class(self) -> Option<&'static str> {
        match self {
            FieldFeedback::Neutral => None,
            FieldFeedback::Affirmed => Some("success"),
            FieldFeedback::Flagged => Some("error"),
        }
    }
}

/// Whether `value` satisfies every value rule of `field`. Fields without a
/// rule of their own only need to be non-empty.
pub fn field_passes(field: Field, value: &str, today: NaiveDate) -> bool {
    let mut checks = RULES
        .iter()
        .filter(|rule| rule.field == field)
        .filter_map(|rule| match rule.check {
            Check::Value(check) => Some(check),
            Check::Record(_) => None,
        })
        .peekable();

    if checks.peek().is_none() {
        return !value.is_empty();
    }
    checks.all(|check| check(value, today))
}

pub fn field_feedback(field: Field, raw: &str, today: NaiveDate) -> FieldFeedback {
    let value = raw.trim();
    if value.is_empty() {
        FieldFeedback::Neutral
    } else if field_passes(field, value, today) {
        FieldFeedback::Affirmed
    } else {
        FieldFeedback::Flagged
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::application::FormValues;
    use chrono::{Duration, Months};
    use proptest::prelude::*;

    impl ValidationFailure {
        pub(crate) fn contains(&self, message: &str) -> bool {
            self.messages.iter().any(|m| *m == message)
        }
    }

    fn today() -> NaiveDate {
        NaiveDate::from_ymd_opt(2026, 10, 15).expect("valid date")
    }

    fn years_ago(years: u32) -> NaiveDate {
        today()
            .checked_sub_months(Months::new(12 * years))
            .expect("in range")
    }

    fn valid_application() -> Application {
        Application::from_values(&FormValues::from_pairs([
            ("name", "Ali Hassan".to_string()),
            ("email", "ali.hassan@gmail.com".to_string()),
            ("age", "20".to_string()),
            ("birthday", years_ago(20).format("%Y-%m-%d").to_string()),
            ("timezone", "Asia/Riyadh".to_string()),
            ("weeklyHours", "15".to_string()),
            ("experience", "Moderated two Minecraft servers".to_string()),
            ("motivation", "I want to help the community grow".to_string()),
            ("agreeRules", "on".to_string()),
        ]))
    }

    #[test]
    fn valid_application_passes() {
        assert_eq!(validate(&valid_application(), today()), Ok(()));
    }

    #[test]
    fn non_gmail_address_names_the_domain_rule_only() {
        let mut application = valid_application();
        application.email = "ali@yahoo.com".to_string();

        let failure = validate(&application, today()).unwrap_err();
        assert_eq!(failure.messages, vec![EMAIL_DOMAIN_MESSAGE]);
    }

    #[test]
    fn age_birthday_mismatch_is_caught_by_cross_check_alone() {
        let mut application = valid_application();
        application.birthday = years_ago(25).format("%Y-%m-%d").to_string();

        let failure = validate(&application, today()).unwrap_err();
        assert_eq!(failure.messages, vec![AGE_MISMATCH_MESSAGE]);
    }

    #[test]
    fn empty_form_reports_every_rule_in_order() {
        let failure = validate(&Application::from_values(&FormValues::default()), today())
            .unwrap_err();

        assert_eq!(
            failure.messages,
            vec![
                EMAIL_SHAPE_MESSAGE,
                EMAIL_DOMAIN_MESSAGE,
                AGE_RANGE_MESSAGE,
                NAME_MESSAGE,
                EXPERIENCE_MESSAGE,
                MOTIVATION_MESSAGE,
                AGREEMENT_MESSAGE,
                BIRTHDAY_MESSAGE,
                TIMEZONE_MESSAGE,
                WEEKLY_HOURS_MESSAGE,
            ]
        );
    }

    #[test]
    fn notice_lists_one_message_per_line() {
        let failure = ValidationFailure {
            messages: vec![NAME_MESSAGE, AGREEMENT_MESSAGE],
        };
        let notice = failure.to_string();
        let lines: Vec<&str> = notice.lines().collect();
        assert_eq!(lines, vec![NOTICE_HEADER, NAME_MESSAGE, AGREEMENT_MESSAGE]);
    }

    #[test]
    fn essays_are_measured_after_trimming() {
        let mut application = valid_application();
        application.experience = "   short    ".to_string();
        application.motivation = "\n\t0123456789\n".to_string();

        let failure = validate(&application, today()).unwrap_err();
        assert_eq!(failure.messages, vec![EXPERIENCE_MESSAGE]);
    }

    #[test]
    fn names_count_characters_not_bytes() {
        assert!(field_passes(Field::Name, "عل", today()));
        assert!(!field_passes(Field::Name, "ع", today()));
    }

    #[test]
    fn suffix_unanchored_domain_check_is_preserved() {
        assert!(field_passes(Field::Email, "a@b.gmail.com.evil", today()));
        assert!(field_passes(Field::Email, "x@gmail.com.evil.example", today()));
    }

    #[test]
    fn birthday_today_is_rejected() {
        let value = today().format("%Y-%m-%d").to_string();
        assert!(!field_passes(Field::Birthday, &value, today()));
    }

    #[test]
    fn cross_check_waits_for_parseable_inputs() {
        let mut application = valid_application();
        application.age = "twenty".to_string();

        let failure = validate(&application, today()).unwrap_err();
        assert_eq!(failure.messages, vec![AGE_RANGE_MESSAGE]);
    }

    #[test]
    fn absurd_ages_fail_the_range_without_overflowing_the_cross_check() {
        let past = years_ago(20).format("%Y-%m-%d").to_string();
        let future = "2030-01-01".to_string();

        for age in ["99999999999999999999", "-99999999999999999999"] {
            for birthday in [&past, &future] {
                let mut application = valid_application();
                application.age = age.to_string();
                application.birthday = birthday.clone();

                let failure = validate(&application, today()).unwrap_err();
                assert!(failure.contains(AGE_RANGE_MESSAGE), "{age} / {birthday}");
                assert!(failure.contains(AGE_MISMATCH_MESSAGE), "{age} / {birthday}");
            }
        }
    }

    #[test]
    fn computed_age_uses_quarter_day_years() {
        let birthday = NaiveDate::from_ymd_opt(2006, 10, 16).expect("valid date");
        assert_eq!(computed_age(birthday, today()), 19);
        let birthday = NaiveDate::from_ymd_opt(2006, 10, 10).expect("valid date");
        assert_eq!(computed_age(birthday, today()), 20);
    }

    #[test]
    fn feedback_is_neutral_for_blank_values() {
        for field in Field::ALL {
            assert_eq!(field_feedback(field, "   ", today()), FieldFeedback::Neutral);
        }
    }

    #[test]
    fn feedback_flags_and_affirms() {
        assert_eq!(
            field_feedback(Field::Email, " ali@gmail.com ", today()),
            FieldFeedback::Affirmed
        );
        assert_eq!(
            field_feedback(Field::Email, "ali@yahoo.com", today()),
            FieldFeedback::Flagged
        );
        assert_eq!(field_feedback(Field::Age, "12", today()), FieldFeedback::Flagged);
        assert_eq!(field_feedback(Field::Age, "99", today()), FieldFeedback::Affirmed);
        assert_eq!(
            field_feedback(Field::Experience, "too short", today()),
            FieldFeedback::Flagged
        );
        assert_eq!(
            field_feedback(Field::Timezone, "Asia/Riyadh", today()),
            FieldFeedback::Affirmed
        );
        assert_eq!(FieldFeedback::Affirmed.class(), Some("success"));
        assert_eq!(FieldFeedback::Flagged.class(), Some("error"));
        assert_eq!(FieldFeedback::Neutral.class(), None);
    }

    #[test]
    fn per_field_can_affirm_what_the_cross_check_rejects() {
        let mut application = valid_application();
        application.birthday = years_ago(40).format("%Y-%m-%d").to_string();

        for field in Field::ALL {
            assert_eq!(
                field_feedback(field, application.value(field), today()),
                FieldFeedback::Affirmed,
                "{}",
                field.name()
            );
        }
        assert!(validate(&application, today())
            .unwrap_err()
            .contains(AGE_MISMATCH_MESSAGE));
    }

    proptest! {
        #[test]
        fn age_range_is_inclusive(age in -50i64..200) {
            let expected = (13..=99).contains(&age);
            prop_assert_eq!(field_passes(Field::Age, &age.to_string(), today()), expected);
        }

        #[test]
        fn well_shaped_email_passes_iff_it_mentions_gmail(
            local in "[a-z0-9._]{1,10}",
            domain in prop_oneof![Just("gmail".to_string()), "[a-z]{1,8}"],
            tld in prop_oneof![Just("com".to_string()), "[a-z]{2,4}"],
        ) {
            let email = format!("{local}@{domain}.{tld}");
            prop_assert_eq!(
                field_passes(Field::Email, &email, today()),
                email.contains("gmail.com")
            );
        }

        #[test]
        fn email_without_at_sign_fails(text in "[a-z.]{1,20}") {
            let email = format!("{text}gmail.com");
            prop_assert!(!field_passes(Field::Email, &email, today()));
        }

        #[test]
        fn birthday_must_precede_today(offset in -20_000i64..40_000) {
            let birthday = today() - Duration::days(offset);
            let value = birthday.format("%Y-%m-%d").to_string();
            prop_assert_eq!(field_passes(Field::Birthday, &value, today()), offset > 0);
        }

        #[test]
        fn cross_check_tolerates_one_year(age in 13i64..=99, days in 1i64..40_000) {
            let mut application = valid_application();
            application.age = age.to_string();
            application.birthday = (today() - Duration::days(days)).format("%Y-%m-%d").to_string();

            let computed = (days * 4).div_euclid(1461);
            let mismatch = validate(&application, today())
                .err()
                .map_or(false, |failure| failure.contains(AGE_MISMATCH_MESSAGE));
            prop_assert_eq!(mismatch, (age - computed).abs() > 1);
        }
    }
}
