use std::rc::Rc;

use yew::functional::Reducible;

use crate::booking::date::format_long_date;
use crate::error::BookingError;

pub const DEFAULT_MESSAGE: &str = "No additional message";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum FormField {
    Name,
    Email,
    Phone,
    Service,
    PreferredDate,
    PreferredTime,
    Message,
}

impl FormField {
    pub const REQUIRED: [FormField; 6] = [
        FormField::Name,
        FormField::Email,
        FormField::Phone,
        FormField::Service,
        FormField::PreferredDate,
        FormField::PreferredTime,
    ];

    /// The `name` attribute of the matching form control.
    pub fn form_name(self) -> &'static str {
        match self {
            FormField::Name => "name",
            FormField::Email => "email",
            FormField::Phone => "phone",
            FormField::Service => "service",
            FormField::PreferredDate => "preferred-date",
            FormField::PreferredTime => "preferred-time",
            FormField::Message => "message",
        }
    }
}

/// Raw values of the booking form as typed by the visitor.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct BookingFields {
    pub name: String,
    pub email: String,
    pub phone: String,
    pub service: String,
    pub preferred_date: String,
    pub preferred_time: String,
    pub message: String,
}

/// A validated submission, ready to be turned into links.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BookingRequest {
    pub name: String,
    pub email: String,
    pub phone: String,
    pub service: String,
    /// Long human-readable form, e.g. "Wednesday 25 December 2024".
    pub date: String,
    pub time: String,
    pub message: String,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FieldAction {
    Set(FormField, String),
    Reset,
}

impl FieldAction {
    /// What the form does once a submission has been handled: cleared after a
    /// dispatched booking, left as typed after a rejected one.
    pub fn after_submit<T>(outcome: &Result<T, BookingError>) -> Option<FieldAction> {
        match outcome {
            Ok(_) => Some(FieldAction::Reset),
            Err(_) => None,
        }
    }
}

impl BookingFields {
    pub fn get(&self, field: FormField) -> &str {
        match field {
            FormField::Name => &self.name,
            FormField::Email => &self.email,
            FormField::Phone => &self.phone,
            FormField::Service => &self.service,
            FormField::PreferredDate => &self.preferred_date,
            FormField::PreferredTime => &self.preferred_time,
            FormField::Message => &self.message,
        }
    }

    pub fn set(&mut self, field: FormField, value: String) {
        let slot = match field {
            FormField::Name => &mut self.name,
            FormField::Email => &mut self.email,
            FormField::Phone => &mut self.phone,
            FormField::Service => &mut self.service,
            FormField::PreferredDate => &mut self.preferred_date,
            FormField::PreferredTime => &mut self.preferred_time,
            FormField::Message => &mut self.message,
        };
        *slot = value;
    }

    pub fn missing(&self) -> Vec<FormField> {
        FormField::REQUIRED
            .into_iter()
            .filter(|field| self.get(*field).trim().is_empty())
            .collect()
    }

    pub fn validate(&self) -> Result<BookingRequest, BookingError> {
        let missing = self.missing();
        if !missing.is_empty() {
            return Err(BookingError::MissingFields(missing));
        }

        let message = match self.message.trim() {
            "" => DEFAULT_MESSAGE.to_string(),
            text => text.to_string(),
        };

        Ok(BookingRequest {
            name: self.name.trim().to_string(),
            email: self.email.trim().to_string(),
            phone: self.phone.trim().to_string(),
            service: self.service.trim().to_string(),
            date: format_long_date(&self.preferred_date)?,
            time: self.preferred_time.trim().to_string(),
            message,
        })
    }
}

impl Reducible for BookingFields {
    type Action = FieldAction;

    fn reduce(self: Rc<Self>, action: Self::Action) -> Rc<Self> {
        match action {
            FieldAction::Set(field, value) => {
                if self.get(field) == value {
                    return self;
                }
                let mut next = (*self).clone();
                next.set(field, value);
                Rc::new(next)
            }
            FieldAction::Reset => Rc::new(BookingFields::default()),
        }
    }
}


#[cfg(test)]
mod tests {
    use super::testing::jane_doe;
    use super::*;

    #[test]
    fn complete_form_validates() {
        let request = jane_doe().validate().unwrap();
        assert_eq!(request.name, "Jane Doe");
        assert_eq!(request.date, "Wednesday 25 December 2024");
        assert_eq!(request.message, DEFAULT_MESSAGE);
    }

    #[test]
    fn each_required_field_is_enforced() {
        for field in FormField::REQUIRED {
            let mut fields = jane_doe();
            fields.set(field, String::new());
            assert_eq!(
                fields.validate(),
                Err(BookingError::MissingFields(vec![field])),
                "{:?} should be required",
                field
            );
        }
    }

    #[test]
    fn whitespace_only_counts_as_missing() {
        let mut fields = jane_doe();
        fields.phone = "   ".to_string();
        assert_eq!(fields.missing(), vec![FormField::Phone]);
    }

    #[test]
    fn all_missing_fields_are_reported() {
        let missing = BookingFields::default().missing();
        assert_eq!(missing, FormField::REQUIRED.to_vec());
    }

    #[test]
    fn message_is_optional_but_kept() {
        let mut fields = jane_doe();
        fields.message = " Please ring first ".to_string();
        assert_eq!(fields.validate().unwrap().message, "Please ring first");
    }

    #[test]
    fn bad_date_is_rejected() {
        let mut fields = jane_doe();
        fields.preferred_date = "25/12/2024".to_string();
        assert!(matches!(fields.validate(), Err(BookingError::InvalidDate(_))));
    }

    #[test]
    fn form_names_match_markup() {
        let names: Vec<_> = FormField::REQUIRED.iter().map(|f| f.form_name()).collect();
        assert_eq!(names, ["name", "email", "phone", "service", "preferred-date", "preferred-time"]);
        assert_eq!(FormField::Message.form_name(), "message");
    }

    #[test]
    fn reducer_sets_and_resets() {
        let state = Rc::new(BookingFields::default());
        let state = state.reduce(FieldAction::Set(FormField::Service, "Brake Repair".to_string()));
        assert_eq!(state.service, "Brake Repair");

        let same = state.clone().reduce(FieldAction::Set(FormField::Service, "Brake Repair".to_string()));
        assert!(Rc::ptr_eq(&state, &same));

        let cleared = state.reduce(FieldAction::Reset);
        assert_eq!(*cleared, BookingFields::default());
    }

    #[test]
    fn rejected_submission_keeps_form() {
        let mut fields = jane_doe();
        fields.phone.clear();
        let outcome = fields.validate();
        assert_eq!(FieldAction::after_submit(&outcome), None);
    }

    #[test]
    fn dispatched_submission_clears_form() {
        let state = Rc::new(jane_doe());
        let outcome = state.validate();
        let action = FieldAction::after_submit(&outcome).unwrap();
        assert_eq!(*state.reduce(action), BookingFields::default());
    }
}
