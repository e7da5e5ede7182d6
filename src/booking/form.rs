use std::fmt;
use std::rc::Rc;
use std::str::FromStr;

use serde::Serialize;
use thiserror::Error;
use yew::prelude::*;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum BookingError {
    #[error("no booking field named {0:?}")]
    UnknownField(String),
    #[error("{0:?} is not one of the offered services")]
    UnknownService(String),
    #[error("{0} is required")]
    MissingField(Field),
}

/// Services offered in the booking dropdown, in dropdown order.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub enum ServiceKind {
    #[default]
    #[serde(rename = "General Maintenance")]
    GeneralMaintenance,
    #[serde(rename = "Emergency Repair")]
    EmergencyRepair,
    #[serde(rename = "Geyser Service")]
    GeyserService,
    #[serde(rename = "Drain Cleaning")]
    DrainCleaning,
    #[serde(rename = "Leak Detection")]
    LeakDetection,
    #[serde(rename = "Bathroom Remodel")]
    BathroomRemodel,
}

impl ServiceKind {
    pub const ALL: [ServiceKind; 6] = [
        ServiceKind::GeneralMaintenance,
        ServiceKind::EmergencyRepair,
        ServiceKind::GeyserService,
        ServiceKind::DrainCleaning,
        ServiceKind::LeakDetection,
        ServiceKind::BathroomRemodel,
    ];

    pub fn label(self) -> &'static str {
        match self {
            ServiceKind::GeneralMaintenance => "General Maintenance",
            ServiceKind::EmergencyRepair => "Emergency Repair",
            ServiceKind::GeyserService => "Geyser Service",
            ServiceKind::DrainCleaning => "Drain Cleaning",
            ServiceKind::LeakDetection => "Leak Detection",
            ServiceKind::BathroomRemodel => "Bathroom Remodel",
        }
    }
}

impl fmt::Display for ServiceKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

impl FromStr for ServiceKind {
    type Err = BookingError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        ServiceKind::ALL
            .into_iter()
            .find(|kind| kind.label() == s)
            .ok_or_else(|| BookingError::UnknownService(s.to_string()))
    }
}

/// Form fields, keyed by the `name` attribute of their input.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Field {
    Name,
    Email,
    Phone,
    Date,
    Service,
}

impl Field {
    pub fn as_str(self) -> &'static str {
        match self {
            Field::Name => "name",
            Field::Email => "email",
            Field::Phone => "phone",
            Field::Date => "date",
            Field::Service => "service",
        }
    }
}

impl fmt::Display for Field {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Field {
    type Err = BookingError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "name" => Ok(Field::Name),
            "email" => Ok(Field::Email),
            "phone" => Ok(Field::Phone),
            "date" => Ok(Field::Date),
            "service" => Ok(Field::Service),
            other => Err(BookingError::UnknownField(other.to_string())),
        }
    }
}

/// Appointment request as typed by the visitor. Serializes to the snapshot
/// written to the console on submit.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct BookingForm {
    pub name: String,
    pub email: String,
    pub phone: String,
    /// `YYYY-MM-DD`, as produced by the native date input.
    pub date: String,
    pub service: ServiceKind,
}

impl BookingForm {
    pub fn update_field(&mut self, field: Field, value: impl Into<String>) -> Result<(), BookingError> {
        let value = value.into();
        match field {
            Field::Name => self.name = value,
            Field::Email => self.email = value,
            Field::Phone => self.phone = value,
            Field::Date => self.date = value,
            Field::Service => self.service = value.parse()?,
        }
        Ok(())
    }

    /// First empty required field, if any. Mirrors the inputs' `required`
    /// check, so whitespace is a value.
    pub fn validate(&self) -> Result<(), BookingError> {
        let text_fields = [
            (Field::Name, &self.name),
            (Field::Email, &self.email),
            (Field::Phone, &self.phone),
            (Field::Date, &self.date),
        ];
        match text_fields.into_iter().find(|(_, value)| value.is_empty()) {
            Some((field, _)) => Err(BookingError::MissingField(field)),
            None => Ok(()),
        }
    }
}

pub enum BookingAction {
    Update(Field, String),
    Submit,
    Expire,
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct BookingState {
    pub form: BookingForm,
    pub submitted: bool,
}

impl Reducible for BookingState {
    type Action = BookingAction;

    fn reduce(self: Rc<Self>, action: BookingAction) -> Rc<Self> {
        let mut next = (*self).clone();
        match action {
            BookingAction::Update(field, value) => {
                if let Err(err) = next.form.update_field(field, value) {
                    log::warn!("Ignoring booking input: {}", err);
                    return self;
                }
            }
            BookingAction::Submit => next.submitted = true,
            BookingAction::Expire => next.submitted = false,
        }
        Rc::new(next)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn fresh_form_defaults_to_general_maintenance() {
        let state = BookingState::default();
        assert_eq!(state.form.service, ServiceKind::GeneralMaintenance);
        assert_eq!(state.form.service.to_string(), "General Maintenance");
        assert!(state.form.name.is_empty());
        assert!(!state.submitted);
    }

    #[test]
    fn updating_name_leaves_other_fields_alone() {
        let mut form = BookingForm {
            email: "a@b.com".to_string(),
            service: ServiceKind::LeakDetection,
            ..Default::default()
        };
        let before = form.clone();
        form.update_field(Field::Name, "Jane").unwrap();

        assert_eq!(form.name, "Jane");
        assert_eq!(form.email, before.email);
        assert_eq!(form.phone, before.phone);
        assert_eq!(form.date, before.date);
        assert_eq!(form.service, before.service);
    }

    #[test]
    fn service_accepts_only_dropdown_labels() {
        let mut form = BookingForm::default();
        form.update_field(Field::Service, "Geyser Service").unwrap();
        assert_eq!(form.service, ServiceKind::GeyserService);

        let err = form.update_field(Field::Service, "Roof Repair").unwrap_err();
        assert_eq!(err, BookingError::UnknownService("Roof Repair".to_string()));
        assert_eq!(form.service, ServiceKind::GeyserService);
    }

    #[test]
    fn every_label_parses_back_to_its_variant() {
        for kind in ServiceKind::ALL {
            assert_eq!(kind.label().parse::<ServiceKind>(), Ok(kind));
        }
    }

    #[test]
    fn input_names_map_to_fields() {
        for field in [Field::Name, Field::Email, Field::Phone, Field::Date, Field::Service] {
            assert_eq!(field.as_str().parse::<Field>(), Ok(field));
        }
        assert_eq!(
            "message".parse::<Field>(),
            Err(BookingError::UnknownField("message".to_string()))
        );
    }

    #[test]
    fn validate_reports_first_missing_field() {
        let mut form = BookingForm::default();
        assert_eq!(form.validate(), Err(BookingError::MissingField(Field::Name)));

        form.update_field(Field::Name, "A").unwrap();
        form.update_field(Field::Email, "a@b.com").unwrap();
        assert_eq!(form.validate(), Err(BookingError::MissingField(Field::Phone)));

        form.update_field(Field::Phone, "0800000000").unwrap();
        form.update_field(Field::Date, "2025-01-01").unwrap();
        assert_eq!(form.validate(), Ok(()));
    }

    #[test]
    fn whitespace_passes_like_the_required_attribute() {
        let mut form = BookingForm::default();
        form.update_field(Field::Name, " ").unwrap();
        form.update_field(Field::Email, "a@b.com").unwrap();
        form.update_field(Field::Phone, "0800000000").unwrap();
        form.update_field(Field::Date, "2025-01-01").unwrap();
        assert_eq!(form.validate(), Ok(()));
    }

    #[test]
    fn rejected_update_keeps_the_same_state() {
        let state = Rc::new(BookingState::default());
        let next = Rc::clone(&state).reduce(BookingAction::Update(Field::Service, "Pool Cleaning".into()));
        assert!(Rc::ptr_eq(&state, &next));
    }

    #[test]
    fn submit_and_expire_toggle_only_the_flag() {
        let state = Rc::new(BookingState::default())
            .reduce(BookingAction::Update(Field::Name, "A".into()))
            .reduce(BookingAction::Submit);
        assert!(state.submitted);
        assert_eq!(state.form.name, "A");

        let state = state.reduce(BookingAction::Expire);
        assert!(!state.submitted);
        assert_eq!(state.form.name, "A");
    }

    #[test]
    fn snapshot_serializes_with_dropdown_label() {
        let form = BookingForm {
            name: "A".into(),
            email: "a@b.com".into(),
            phone: "0800000000".into(),
            date: "2025-01-01".into(),
            service: ServiceKind::DrainCleaning,
        };
        assert_eq!(
            serde_json::to_value(&form).unwrap(),
            serde_json::json!({
                "name": "A",
                "email": "a@b.com",
                "phone": "0800000000",
                "date": "2025-01-01",
                "service": "Drain Cleaning",
            })
        );
    }
}
