use formwork_types::{FormSchema, FormValues};

/// Trait for backend implementations that present a form and collect values.
///
/// Backends receive a `FormSchema` and return the captured submission
/// payload. They decide how to present the form (one section per page,
/// scripted fill, etc.) and drive a `FormInterpreter` internally, so
/// section-level validation and navigation behave identically everywhere.
pub trait FormBackend {
    /// The error type for this backend.
    type Error: Into<anyhow::Error>;

    /// Present the form and collect its values.
    ///
    /// # Returns
    /// * `Ok(values)` once the final section has been submitted and the
    ///   confirmation delay has elapsed
    /// * `Err` on cancellation or backend failure
    fn run(&self, schema: FormSchema) -> Result<FormValues, Self::Error>;
}
