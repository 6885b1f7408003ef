use crate::Field;

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum LeadError {
    #[error("{} is required", .0.label())]
    Required(Field),

    #[error("unknown service \"{0}\"")]
    InvalidService(String),

    #[error("Invalid Phone Number")]
    InvalidPhone,

    #[error("Invalid Email")]
    InvalidEmail,

    #[error("a submission is already in flight")]
    Busy,
}

impl LeadError {
    pub fn title(&self) -> &'static str {
        match self {
            LeadError::Required(_) => "Missing Required Field",
            LeadError::InvalidService(_) => "Invalid Service",
            LeadError::InvalidPhone => "Invalid Phone Number",
            LeadError::InvalidEmail => "Invalid Email",
            LeadError::Busy => "Please Wait",
        }
    }

    pub fn description(&self) -> String {
        match self {
            LeadError::Required(field) => {
                format!("Please fill in the {} field.", field.label())
            }
            LeadError::InvalidService(_) => "Please select one of the listed services.".to_owned(),
            LeadError::InvalidPhone => "Please enter a valid 10-digit phone number.".to_owned(),
            LeadError::InvalidEmail => "Please enter a valid email address.".to_owned(),
            LeadError::Busy => "Your previous request is still being sent.".to_owned(),
        }
    }
}
