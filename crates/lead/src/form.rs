use std::{marker::PhantomData, sync::Arc};

use moskill_delivery::{DeliveryAdapter, DeliveryError, DeliveryReceipt};

use crate::{Field, FormSchema, FormValues, LeadError, ServiceOption, validation};

/// Validated, frozen lead. Never outlives the submit attempt.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct LeadSubmission<S> {
    pub name: String,
    pub phone: String,
    pub email: Option<String>,
    pub service: S,
    pub message: Option<String>,
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum Phase {
    #[default]
    Idle,
    Validating,
    Sending,
}

/// Result of one submit attempt. The form is back to [`Phase::Idle`] whatever
/// the variant.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Outcome {
    /// A rule failed; nothing was sent and fields are untouched.
    Rejected(LeadError),
    /// Sent; fields were reset.
    Delivered(DeliveryReceipt),
    /// The provider failed; fields are untouched for a retry.
    Failed(DeliveryError),
    /// Submit was invoked while a send was in flight.
    Ignored,
}

impl Outcome {
    /// Whether the form should be closed once the outcome is shown.
    pub fn closes(&self, schema: &FormSchema) -> bool {
        matches!(self, Outcome::Delivered(_)) && schema.closes_on_success
    }
}

/// Field values and submission state of one mounted form.
pub struct LeadForm<S> {
    schema: Arc<FormSchema>,
    values: FormValues,
    phase: Phase,
    service: PhantomData<S>,
}

impl<S: ServiceOption> LeadForm<S> {
    pub fn new(schema: Arc<FormSchema>) -> Self {
        Self::with_values(schema, FormValues::default())
    }

    pub fn with_values(schema: Arc<FormSchema>, values: FormValues) -> Self {
        Self {
            schema,
            values,
            phase: Phase::Idle,
            service: PhantomData,
        }
    }

    pub fn schema(&self) -> &FormSchema {
        &self.schema
    }

    pub fn values(&self) -> &FormValues {
        &self.values
    }

    pub fn value(&self, field: Field) -> &str {
        self.values.get(field)
    }

    pub fn set(&mut self, field: Field, value: impl Into<String>) {
        self.values = std::mem::take(&mut self.values).with(field, value);
    }

    pub fn reset(&mut self) {
        self.values = FormValues::default();
    }

    pub fn phase(&self) -> Phase {
        self.phase
    }

    /// True from the start of a submit attempt until the send settles.
    pub fn is_submitting(&self) -> bool {
        self.phase != Phase::Idle
    }

    /// Validates the current values and, when they pass, enters
    /// [`Phase::Sending`] with the frozen submission.
    pub fn begin_submit(&mut self) -> Result<LeadSubmission<S>, LeadError> {
        if self.is_submitting() {
            return Err(LeadError::Busy);
        }

        self.phase = Phase::Validating;

        match validation::validate::<S>(&self.schema, &self.values) {
            Ok(submission) => {
                self.phase = Phase::Sending;
                Ok(submission)
            }
            Err(err) => {
                self.phase = Phase::Idle;
                Err(err)
            }
        }
    }

    /// Leaves [`Phase::Sending`]. Fields reset on success only.
    pub fn settle(&mut self, result: &Result<DeliveryReceipt, DeliveryError>) {
        self.phase = Phase::Idle;

        if result.is_ok() {
            self.reset();
        }
    }

    pub async fn submit<A>(&mut self, adapter: &A) -> Outcome
    where
        A: DeliveryAdapter + ?Sized,
    {
        let submission = match self.begin_submit() {
            Ok(submission) => submission,
            Err(LeadError::Busy) => return Outcome::Ignored,
            Err(err) => {
                tracing::debug!(form = %self.schema.kind, err = %err, "lead rejected");
                return Outcome::Rejected(err);
            }
        };

        let request = self.schema.request(&submission);
        let result = adapter.send(request).await;
        self.settle(&result);

        match result {
            Ok(receipt) => {
                tracing::info!(
                    form = %self.schema.kind,
                    template_id = %self.schema.template_id,
                    status = receipt.status,
                    "lead delivered"
                );
                Outcome::Delivered(receipt)
            }
            Err(err) => {
                tracing::error!(
                    form = %self.schema.kind,
                    template_id = %self.schema.template_id,
                    status = ?err.status,
                    text = %err.text,
                    "lead delivery failed"
                );
                Outcome::Failed(err)
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::QuoteService;

    fn form() -> LeadForm<QuoteService> {
        LeadForm::new(Arc::new(FormSchema::quote("template_quote")))
    }

    #[test]
    fn test_set_updates_one_field() {
        let mut form = form();
        form.set(Field::Name, "Asha Rao");
        form.set(Field::Phone, "9876543210");
        form.set(Field::Name, "Asha R.");

        assert_eq!(form.value(Field::Name), "Asha R.");
        assert_eq!(form.value(Field::Phone), "9876543210");
        assert_eq!(form.value(Field::Email), "");
    }

    #[test]
    fn test_rejected_attempt_returns_to_idle() {
        let mut form = form();
        form.set(Field::Name, "Asha Rao");
        form.set(Field::Phone, "98765432");
        form.set(Field::Service, "Bird Netting");

        assert_eq!(form.begin_submit().unwrap_err(), LeadError::InvalidPhone);
        assert_eq!(form.phase(), Phase::Idle);
        assert!(!form.is_submitting());
    }

    #[test]
    fn test_second_begin_while_sending_is_busy() {
        let mut form = form();
        form.set(Field::Name, "Asha Rao");
        form.set(Field::Phone, "9876543210");
        form.set(Field::Service, "Other");

        assert!(form.begin_submit().is_ok());
        assert_eq!(form.phase(), Phase::Sending);
        assert_eq!(form.begin_submit().unwrap_err(), LeadError::Busy);
    }

    #[test]
    fn test_settle_failure_keeps_values() {
        let mut form = form();
        form.set(Field::Name, "Asha Rao");
        form.set(Field::Phone, "9876543210");
        form.set(Field::Service, "Other");
        let before = form.values().clone();

        form.begin_submit().unwrap();
        form.settle(&Err(DeliveryError::transport("timeout")));

        assert_eq!(form.values(), &before);
        assert!(!form.is_submitting());
    }

    #[test]
    fn test_only_delivered_popup_closes() {
        let quote = FormSchema::quote("t");
        let contact = FormSchema::contact("t");
        let delivered = Outcome::Delivered(DeliveryReceipt {
            status: 200,
            text: "OK".to_owned(),
        });

        assert!(delivered.closes(&quote));
        assert!(!delivered.closes(&contact));
        assert!(!Outcome::Failed(DeliveryError::transport("x")).closes(&quote));
        assert!(!Outcome::Rejected(LeadError::InvalidEmail).closes(&quote));
    }
}
