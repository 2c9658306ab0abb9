use std::collections::BTreeMap;

use chrono::NaiveDate;
use serde::Serialize;

/// Controls of the staff application form, keyed by their `name` attribute.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Field {
    Name,
    Email,
    Age,
    Birthday,
    Timezone,
    WeeklyHours,
    Experience,
    Motivation,
    AgreeRules,
}

impl Field {
    pub const ALL: [Field; 9] = [
        Field::Name,
        Field::Email,
        Field::Age,
        Field::Birthday,
        Field::Timezone,
        Field::WeeklyHours,
        Field::Experience,
        Field::Motivation,
        Field::AgreeRules,
    ];

    pub fn name(self) -> &'static str {
        match self {
            Field::Name => "name",
            Field::Email => "email",
            Field::Age => "age",
            Field::Birthday => "birthday",
            Field::Timezone => "timezone",
            Field::WeeklyHours => "weeklyHours",
            Field::Experience => "experience",
            Field::Motivation => "motivation",
            Field::AgreeRules => "agreeRules",
        }
    }

    pub fn from_name(name: &str) -> Option<Field> {
        Field::ALL.into_iter().find(|field| field.name() == name)
    }
}

/// Value a checked checkbox contributes to the form data.
pub const CHECKED: &str = "on";

/// Raw form contents, one string per field. Missing fields read as empty.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct FormValues(BTreeMap<Field, String>);

impl FormValues {
    /// Generic name -> value extraction. Unknown names are skipped, later pairs win.
    pub fn from_pairs<I, K, V>(pairs: I) -> Self
    where
        I: IntoIterator<Item = (K, V)>,
        K: AsRef<str>,
        V: Into<String>,
    {
        let mut values = FormValues::default();
        for (key, value) in pairs {
            if let Some(field) = Field::from_name(key.as_ref()) {
                values.set(field, value);
            }
        }
        values
    }

    pub fn get(&self, field: Field) -> &str {
        self.0.get(&field).map(String::as_str).unwrap_or("")
    }

    pub fn set(&mut self, field: Field, value: impl Into<String>) {
        self.0.insert(field, value.into());
    }

    pub fn is_checked(&self, field: Field) -> bool {
        !self.get(field).is_empty()
    }
}

/// One form-fill attempt. Built at submit time and dropped once processed.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Application {
    pub name: String,
    pub email: String,
    pub age: String,
    pub birthday: String,
    pub timezone: String,
    pub weekly_hours: String,
    pub experience: String,
    pub motivation: String,
    pub agree_rules: bool,
}

impl Application {
    pub fn from_values(values: &FormValues) -> Self {
        Application {
            name: values.get(Field::Name).to_string(),
            email: values.get(Field::Email).to_string(),
            age: values.get(Field::Age).to_string(),
            birthday: values.get(Field::Birthday).to_string(),
            timezone: values.get(Field::Timezone).to_string(),
            weekly_hours: values.get(Field::WeeklyHours).to_string(),
            experience: values.get(Field::Experience).to_string(),
            motivation: values.get(Field::Motivation).to_string(),
            agree_rules: values.is_checked(Field::AgreeRules),
        }
    }

    /// The value as the form would report it. The agreement flag reads as `on` or empty.
    pub fn value(&self, field: Field) -> &str {
        match field {
            Field::Name => &self.name,
            Field::Email => &self.email,
            Field::Age => &self.age,
            Field::Birthday => &self.birthday,
            Field::Timezone => &self.timezone,
            Field::WeeklyHours => &self.weekly_hours,
            Field::Experience => &self.experience,
            Field::Motivation => &self.motivation,
            Field::AgreeRules => {
                if self.agree_rules {
                    CHECKED
                } else {
                    ""
                }
            }
        }
    }

    pub fn declared_age(&self) -> Option<i64> {
        parse_int(&self.age)
    }

    pub fn birthday_date(&self) -> Option<NaiveDate> {
        parse_date(&self.birthday)
    }
}

/// Lenient integer parse: skips leading whitespace, takes an optional sign and
/// the leading run of digits, ignores whatever follows. `None` when no digits.
pub fn parse_int(raw: &str) -> Option<i64> {
    let rest = raw.trim_start();
    let (negative, rest) = match rest.as_bytes().first() {
        Some(b'-') => (true, &rest[1..]),
        Some(b'+') => (false, &rest[1..]),
        _ => (false, rest),
    };

    let digits: Vec<i64> = rest
        .chars()
        .map_while(|c| c.to_digit(10).map(i64::from))
        .collect();
    if digits.is_empty() {
        return None;
    }

    let magnitude = digits
        .into_iter()
        .fold(0i64, |acc, d| acc.saturating_mul(10).saturating_add(d));
    Some(if negative { -magnitude } else { magnitude })
}

/// Dates arrive from `<input type="date">` as `YYYY-MM-DD`.
pub fn parse_date(raw: &str) -> Option<NaiveDate> {
    NaiveDate::parse_from_str(raw.trim(), "%Y-%m-%d").ok()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn extraction_ignores_unknown_names() {
        let values = FormValues::from_pairs([
            ("name", "Ali Hassan"),
            ("favouriteColour", "blue"),
            ("weeklyHours", "15"),
        ]);

        assert_eq!(values.get(Field::Name), "Ali Hassan");
        assert_eq!(values.get(Field::WeeklyHours), "15");
        assert_eq!(values.get(Field::Email), "");
    }

    impl FormValues {
        pub(crate) fn is_blank(&self) -> bool {
            self.0.values().all(String::is_empty)
        }
    }

    #[test]
    fn form_data_without_checkbox_or_timezone_reads_as_unset() {
        // An unchecked box is absent from FormData; an untouched select submits "".
        let values = FormValues::from_pairs(vec![
            ("name".to_string(), "Ahmed".to_string()),
            ("timezone".to_string(), String::new()),
            ("weeklyHours".to_string(), "12".to_string()),
            ("submitButton".to_string(), String::new()),
        ]);
        let application = Application::from_values(&values);

        assert_eq!(application.name, "Ahmed");
        assert_eq!(application.timezone, "");
        assert_eq!(application.weekly_hours, "12");
        assert!(!application.agree_rules);
        assert!(!values.is_checked(Field::AgreeRules));
    }

    #[test]
    fn later_pairs_overwrite_earlier_ones() {
        let values = FormValues::from_pairs([("age", "20"), ("age", "21")]);
        assert_eq!(values.get(Field::Age), "21");
    }

    #[test]
    fn agreement_is_true_only_when_checkbox_submitted() {
        let unchecked = Application::from_values(&FormValues::from_pairs([("name", "x")]));
        assert!(!unchecked.agree_rules);
        assert_eq!(unchecked.value(Field::AgreeRules), "");

        let checked = Application::from_values(&FormValues::from_pairs([("agreeRules", CHECKED)]));
        assert!(checked.agree_rules);
        assert_eq!(checked.value(Field::AgreeRules), CHECKED);
    }

    #[test]
    fn serializes_with_form_field_names() {
        let application = Application::from_values(&FormValues::from_pairs([
            ("weeklyHours", "10"),
            ("agreeRules", "on"),
        ]));
        let json = serde_json::to_value(&application).expect("serializable");

        assert_eq!(json["weeklyHours"], "10");
        assert_eq!(json["agreeRules"], true);
        for field in Field::ALL {
            assert!(json.get(field.name()).is_some(), "missing {}", field.name());
        }
    }

    #[test]
    fn parse_int_takes_leading_digits() {
        assert_eq!(parse_int("20"), Some(20));
        assert_eq!(parse_int("  42 years"), Some(42));
        assert_eq!(parse_int("-7"), Some(-7));
        assert_eq!(parse_int("+15"), Some(15));
        assert_eq!(parse_int("3.9"), Some(3));
        assert_eq!(parse_int(""), None);
        assert_eq!(parse_int("abc"), None);
        assert_eq!(parse_int("-"), None);
    }

    #[test]
    fn parse_date_accepts_iso_dates_only() {
        assert_eq!(
            parse_date("2004-03-09"),
            NaiveDate::from_ymd_opt(2004, 3, 9)
        );
        assert_eq!(parse_date("09/03/2004"), None);
        assert_eq!(parse_date(""), None);
    }

    #[test]
    fn blank_form_detection() {
        let mut values = FormValues::default();
        assert!(values.is_blank());
        values.set(Field::Name, "");
        assert!(values.is_blank());
        values.set(Field::Name, "A");
        assert!(!values.is_blank());
    }
}
