use strum::{AsRefStr, Display, VariantArray};

#[derive(Display, AsRefStr, VariantArray, Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[strum(serialize_all = "snake_case")]
pub enum Field {
    Name,
    Phone,
    Email,
    Service,
    Message,
}

impl Field {
    pub fn label(&self) -> &'static str {
        match self {
            Field::Name => "Name",
            Field::Phone => "Phone Number",
            Field::Email => "Email",
            Field::Service => "Service",
            Field::Message => "Message",
        }
    }
}

/// Raw text of every field, as typed or selected by the user.
#[derive(Default, Clone, Debug, PartialEq, Eq)]
pub struct FormValues {
    pub name: String,
    pub phone: String,
    pub email: String,
    pub service: String,
    pub message: String,
}

impl FormValues {
    pub fn get(&self, field: Field) -> &str {
        match field {
            Field::Name => &self.name,
            Field::Phone => &self.phone,
            Field::Email => &self.email,
            Field::Service => &self.service,
            Field::Message => &self.message,
        }
    }

    /// Returns a copy with `field` replaced and every other field unchanged.
    pub fn with(self, field: Field, value: impl Into<String>) -> Self {
        let value = value.into();
        match field {
            Field::Name => Self { name: value, ..self },
            Field::Phone => Self {
                phone: value,
                ..self
            },
            Field::Email => Self {
                email: value,
                ..self
            },
            Field::Service => Self {
                service: value,
                ..self
            },
            Field::Message => Self {
                message: value,
                ..self
            },
        }
    }

    pub fn is_empty(&self) -> bool {
        Field::VARIANTS
            .iter()
            .all(|field| self.get(*field).is_empty())
    }
}
