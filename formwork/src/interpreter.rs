use std::time::{Duration, Instant};

use tracing::debug;

use formwork_types::{FormSchema, FormValues, SchemaError, Section, ValidationErrors};

use crate::{CompletionTimer, SectionNavigator};

/// How long the confirmation is shown before the completion handler fires.
pub const CONFIRMATION_DELAY: Duration = Duration::from_secs(2);

/// Where a form-filling session is in its lifecycle.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Phase {
    /// No schema yet; the caller shows a loading indicator.
    Loading,

    /// A schema is present and the user is filling sections.
    Active,

    /// The final section validated; the confirmation is showing. One-way:
    /// a session never leaves this phase.
    Submitted,
}

type CompletionHandler = Box<dyn FnOnce(FormValues)>;

/// Owns one form-filling session over a server-supplied schema.
///
/// Composes the [`SectionNavigator`] over the schema's sections and routes
/// user edits into an explicit [`FormValues`] / [`ValidationErrors`] pair.
/// Purely reactive: every transition is a response to one call (a field
/// edit, a navigation click, a poll), and the only deferred work is the
/// post-submission [`CompletionTimer`].
pub struct FormInterpreter {
    phase: Phase,
    schema: Option<FormSchema>,
    navigator: Option<SectionNavigator>,
    values: FormValues,
    errors: ValidationErrors,
    submission: Option<FormValues>,
    timer: Option<CompletionTimer>,
    handler: Option<CompletionHandler>,
    delay: Duration,
}

impl FormInterpreter {
    /// Create an interpreter waiting for its schema.
    pub fn new() -> Self {
        Self {
            phase: Phase::Loading,
            schema: None,
            navigator: None,
            values: FormValues::new(),
            errors: ValidationErrors::new(),
            submission: None,
            timer: None,
            handler: None,
            delay: CONFIRMATION_DELAY,
        }
    }

    /// Override the confirmation display delay.
    pub fn with_confirmation_delay(mut self, delay: Duration) -> Self {
        self.delay = delay;
        self
    }

    /// Register the handler invoked exactly once, after the confirmation
    /// delay, with the captured submission payload. The engine never
    /// transmits the payload anywhere itself; what to do with it is the
    /// caller's decision.
    pub fn on_complete(&mut self, handler: impl FnOnce(FormValues) + 'static) {
        self.handler = Some(Box::new(handler));
    }

    /// The current lifecycle phase.
    pub fn phase(&self) -> Phase {
        self.phase
    }

    /// Supply the schema, transitioning `Loading` into `Active` immediately.
    ///
    /// The schema is validated first; a structurally broken schema leaves
    /// the interpreter in `Loading`. A schema supplied after the session has
    /// started is ignored — the session keeps the schema it mounted with.
    pub fn supply_schema(&mut self, schema: FormSchema) -> Result<(), SchemaError> {
        if self.phase != Phase::Loading {
            debug!("schema supplied to a running session; ignored");
            return Ok(());
        }
        schema.validate()?;
        self.navigator = Some(SectionNavigator::new(schema.section_count()));
        self.schema = Some(schema);
        self.phase = Phase::Active;
        Ok(())
    }

    /// The schema of this session, once supplied.
    pub fn schema(&self) -> Option<&FormSchema> {
        self.schema.as_ref()
    }

    /// The active section index; 0 while loading.
    pub fn section_index(&self) -> usize {
        self.navigator.as_ref().map_or(0, SectionNavigator::current)
    }

    /// The active section, once a schema is present.
    pub fn current_section(&self) -> Option<&Section> {
        self.schema.as_ref()?.section(self.section_index())
    }

    /// Check if the first section is active ("Previous" is hidden).
    pub fn is_first_section(&self) -> bool {
        self.navigator.as_ref().is_none_or(SectionNavigator::is_first)
    }

    /// Check if the last section is active ("Submit" replaces "Next").
    pub fn is_last_section(&self) -> bool {
        self.navigator.as_ref().is_some_and(SectionNavigator::is_last)
    }

    /// The values entered so far.
    pub fn values(&self) -> &FormValues {
        &self.values
    }

    /// The inline errors of the most recent rejected transition.
    pub fn errors(&self) -> &ValidationErrors {
        &self.errors
    }

    /// Set the text of a text-like field. Clears the field's stale error.
    pub fn set_text(&mut self, field_id: &str, text: impl Into<String>) {
        if self.phase != Phase::Active {
            return;
        }
        self.values.set_text(field_id, text);
        self.errors.remove(field_id);
    }

    /// Select the option value of a dropdown or radio field.
    pub fn select(&mut self, field_id: &str, value: impl Into<String>) {
        if self.phase != Phase::Active {
            return;
        }
        self.values.select(field_id, value);
        self.errors.remove(field_id);
    }

    /// Toggle one option value of a checkbox field.
    pub fn toggle(&mut self, field_id: &str, value: impl Into<String>) {
        if self.phase != Phase::Active {
            return;
        }
        self.values.toggle(field_id, value);
        self.errors.remove(field_id);
    }

    /// Validate the active section and move forward.
    ///
    /// On rejection the error map is retained for inline display and also
    /// returned; the active section does not change.
    pub fn advance(&mut self) -> Result<usize, ValidationErrors> {
        if self.phase != Phase::Active {
            return Ok(self.section_index());
        }
        let (Some(schema), Some(navigator)) = (self.schema.as_ref(), self.navigator.as_mut()) else {
            return Ok(0);
        };
        let Some(section) = schema.section(navigator.current()) else {
            return Ok(navigator.current());
        };
        match navigator.next(section, &self.values) {
            Ok(index) => {
                self.errors.clear();
                Ok(index)
            }
            Err(errors) => {
                self.errors = errors.clone();
                Err(errors)
            }
        }
    }

    /// Move back one section, unconditionally. Entered values are kept;
    /// stale errors from the section being left are dropped.
    pub fn retreat(&mut self) -> usize {
        if self.phase != Phase::Active {
            return self.section_index();
        }
        self.errors.clear();
        self.navigator.as_mut().map_or(0, SectionNavigator::prev)
    }

    /// Validate the final section and latch into `Submitted`.
    ///
    /// On success the full value map is captured as the submission payload
    /// and the confirmation timer is armed from `now`. Returns `Ok(false)`
    /// when submit is not enabled (not active, or not on the last section).
    pub fn submit(&mut self, now: Instant) -> Result<bool, ValidationErrors> {
        if self.phase != Phase::Active {
            return Ok(false);
        }
        let (Some(schema), Some(navigator)) = (self.schema.as_ref(), self.navigator.as_ref()) else {
            return Ok(false);
        };
        if !navigator.is_last() {
            return Ok(false);
        }
        let Some(section) = schema.section(navigator.current()) else {
            return Ok(false);
        };
        if let Err(errors) = navigator.submit(section, &self.values) {
            self.errors = errors.clone();
            return Err(errors);
        }
        self.errors.clear();
        let payload = self.values.clone();
        debug!(fields = payload.len(), "form submitted; payload captured");
        self.submission = Some(payload);
        self.timer = Some(CompletionTimer::new(now, self.delay));
        self.phase = Phase::Submitted;
        Ok(true)
    }

    /// Drive the deferred completion.
    ///
    /// Returns `true` exactly once: when the confirmation delay has elapsed
    /// after submission and the timer was not cancelled. If a completion
    /// handler is registered it is invoked here with the captured payload;
    /// otherwise the payload stays available via [`take_submission`].
    ///
    /// [`take_submission`]: Self::take_submission
    pub fn poll_completion(&mut self, now: Instant) -> bool {
        let Some(timer) = self.timer.as_mut() else {
            return false;
        };
        if !timer.poll(now) {
            return false;
        }
        if let Some(handler) = self.handler.take() {
            let payload = self.submission.take().unwrap_or_default();
            handler(payload);
        }
        true
    }

    /// Disarm the completion timer; used on teardown so a discarded session
    /// never invokes the handler late.
    pub fn cancel_completion(&mut self) {
        if let Some(timer) = self.timer.as_mut() {
            timer.cancel();
        }
    }

    /// The armed completion timer, while submitted.
    pub fn completion_timer(&self) -> Option<&CompletionTimer> {
        self.timer.as_ref()
    }

    /// The captured submission payload, while it has not been handed out.
    pub fn submission(&self) -> Option<&FormValues> {
        self.submission.as_ref()
    }

    /// Take ownership of the captured submission payload.
    pub fn take_submission(&mut self) -> Option<FormValues> {
        self.submission.take()
    }
}

impl Default for FormInterpreter {
    fn default() -> Self {
        Self::new()
    }
}

impl Drop for FormInterpreter {
    fn drop(&mut self) {
        self.cancel_completion();
    }
}
