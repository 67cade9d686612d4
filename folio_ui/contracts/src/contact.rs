use folio_models::contact::{ContactField, ContactForm};

/// A transient message shown below the contact form.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Banner {
    Success,
    Failure,
}

impl Banner {
    pub fn element_id(self) -> &'static str {
        match self {
            Self::Success => "successMsg",
            Self::Failure => "errorMsg",
        }
    }
}

pub trait ContactFormView: Clone + Send + Sync + 'static {
    fn read_field(&self, field: ContactField) -> String;

    fn write_field(&self, field: ContactField, value: &str);

    /// Displays `text` in the error slot of `field`.
    fn set_error(&self, field: ContactField, text: &str);

    /// Empties the error slots of all fields.
    fn clear_errors(&self);

    /// Displays `text` in `banner`, creating the banner if it does not exist yet.
    fn show_banner(&self, banner: Banner, text: &str);

    fn hide_banner(&self, banner: Banner);

    fn clear_field(&self, field: ContactField) {
        self.write_field(field, "");
    }

    fn clear_fields(&self) {
        for field in ContactField::ALL {
            self.clear_field(field);
        }
    }

    /// Reads the current values of all fields.
    fn read_form(&self) -> ContactForm {
        let mut form = ContactForm::default();
        for field in ContactField::ALL {
            *form.get_mut(field) = self.read_field(field);
        }
        form
    }
}
