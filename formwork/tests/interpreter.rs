//! Integration tests for the form interpreter lifecycle.

use std::cell::RefCell;
use std::rc::Rc;
use std::time::{Duration, Instant};

use formwork::{
    Choice, Field, FieldType, FormInterpreter, FormSchema, Phase, Section, ValidationError,
};

fn registration_schema() -> FormSchema {
    FormSchema::new(
        "Student Registration",
        vec![
            Section::new(
                "Identity",
                "Who are you?",
                vec![
                    Field::new("name", FieldType::Text, "Full name")
                        .required()
                        .with_min_length(2),
                    Field::new("dob", FieldType::Date, "Date of birth"),
                ],
            ),
            Section::new(
                "Contact",
                "How do we reach you?",
                vec![
                    Field::new("email", FieldType::Email, "Email").required(),
                    Field::new("phone", FieldType::Tel, "Phone").with_max_length(15),
                ],
            ),
            Section::new(
                "Preferences",
                "",
                vec![
                    Field::new("track", FieldType::Radio, "Track").required().with_options(vec![
                        Choice::new("cs", "Computer Science"),
                        Choice::new("ee", "Electrical Engineering"),
                    ]),
                    Field::new("clubs", FieldType::Checkbox, "Clubs").with_options(vec![
                        Choice::new("chess", "Chess"),
                        Choice::new("robotics", "Robotics"),
                        Choice::new("debate", "Debate"),
                    ]),
                ],
            ),
        ],
    )
}

fn active_form() -> FormInterpreter {
    let mut form = FormInterpreter::new();
    form.supply_schema(registration_schema()).unwrap();
    form
}

#[test]
fn starts_at_the_first_section() {
    let form = active_form();
    assert_eq!(form.phase(), Phase::Active);
    assert_eq!(form.section_index(), 0);
    assert!(form.is_first_section());
    assert_eq!(form.current_section().unwrap().title, "Identity");
}

#[test]
fn next_stays_put_when_a_required_field_is_empty() {
    let mut form = active_form();

    let errors = form.advance().unwrap_err();
    assert_eq!(form.section_index(), 0);
    assert_eq!(errors.get("name"), Some(&ValidationError::Required));
    // The retained error map drives inline display
    assert_eq!(form.errors().get("name"), Some(&ValidationError::Required));
}

#[test]
fn next_reports_all_failures_of_the_section_at_once() {
    let mut form = active_form();
    form.set_text("name", "A"); // below min_length 2

    let errors = form.advance().unwrap_err();
    assert_eq!(errors.get("name"), Some(&ValidationError::TooShort { min: 2 }));
}

#[test]
fn next_advances_and_preserves_entered_values() {
    let mut form = active_form();
    form.set_text("name", "Alice");
    form.set_text("dob", "2001-05-17");

    assert_eq!(form.advance().unwrap(), 1);
    assert_eq!(form.current_section().unwrap().title, "Contact");
    assert_eq!(form.values().get_text("name"), Some("Alice"));
    assert_eq!(form.values().get_text("dob"), Some("2001-05-17"));
}

#[test]
fn prev_always_succeeds_and_preserves_values() {
    let mut form = active_form();
    form.set_text("name", "Alice");
    form.advance().unwrap();
    form.set_text("email", "alice@example.org");

    // Going back ignores validation state entirely
    assert_eq!(form.retreat(), 0);
    assert_eq!(form.values().get_text("email"), Some("alice@example.org"));

    // And does nothing on the first section
    assert_eq!(form.retreat(), 0);
}

#[test]
fn buttons_follow_the_section_position() {
    let mut form = active_form();
    assert!(form.is_first_section());
    assert!(!form.is_last_section());

    form.set_text("name", "Alice");
    form.advance().unwrap();
    assert!(!form.is_first_section());
    assert!(!form.is_last_section());

    form.set_text("email", "alice@example.org");
    form.advance().unwrap();
    assert!(form.is_last_section());
}

#[test]
fn radio_holds_one_value_and_checkbox_accumulates_a_set() {
    let mut form = active_form();
    form.select("track", "cs");
    form.select("track", "ee");
    form.toggle("clubs", "chess");
    form.toggle("clubs", "robotics");

    assert_eq!(form.values().get_text("track"), Some("ee"));
    let clubs = form.values().get_checked("clubs").unwrap();
    assert_eq!(clubs.len(), 2);
    assert!(clubs.contains("chess"));
    assert!(clubs.contains("robotics"));
}

#[test]
fn submission_latches_and_fires_the_handler_exactly_once() {
    let mut form = active_form();
    form.set_text("name", "Alice");
    form.advance().unwrap();
    form.set_text("email", "alice@example.org");
    form.advance().unwrap();
    form.select("track", "cs");

    let fired = Rc::new(RefCell::new(Vec::new()));
    let sink = Rc::clone(&fired);
    form.on_complete(move |payload| sink.borrow_mut().push(payload));

    let start = Instant::now();
    assert!(form.submit(start).unwrap());
    assert_eq!(form.phase(), Phase::Submitted);

    // Nothing happens before the confirmation delay elapses
    assert!(!form.poll_completion(start));
    assert!(!form.poll_completion(start + Duration::from_secs(1)));
    assert!(fired.borrow().is_empty());

    // Exactly one firing, with the captured payload
    let due = start + Duration::from_secs(2);
    assert!(form.poll_completion(due));
    assert!(!form.poll_completion(due));
    assert!(!form.poll_completion(due + Duration::from_secs(5)));

    let payloads = fired.borrow();
    assert_eq!(payloads.len(), 1);
    assert_eq!(payloads[0].get_text("name"), Some("Alice"));
    assert_eq!(payloads[0].get_text("track"), Some("cs"));
}

#[test]
fn rejected_submission_stays_active_with_errors_shown() {
    let mut form = active_form();
    form.set_text("name", "Alice");
    form.advance().unwrap();
    form.set_text("email", "alice@example.org");
    form.advance().unwrap();

    let errors = form.submit(Instant::now()).unwrap_err();
    assert_eq!(form.phase(), Phase::Active);
    assert_eq!(errors.get("track"), Some(&ValidationError::Required));
    assert!(form.submission().is_none());
}

#[test]
fn cancelled_completion_never_fires() {
    let mut form = active_form();
    form.set_text("name", "Alice");
    form.advance().unwrap();
    form.set_text("email", "alice@example.org");
    form.advance().unwrap();
    form.select("track", "cs");

    let fired = Rc::new(RefCell::new(0u32));
    let sink = Rc::clone(&fired);
    form.on_complete(move |_| *sink.borrow_mut() += 1);

    let start = Instant::now();
    form.submit(start).unwrap();
    form.cancel_completion();

    assert!(!form.poll_completion(start + Duration::from_secs(10)));
    assert_eq!(*fired.borrow(), 0);
}

#[test]
fn edits_after_submission_do_not_change_the_payload() {
    let mut form = active_form();
    form.set_text("name", "Alice");
    form.advance().unwrap();
    form.set_text("email", "alice@example.org");
    form.advance().unwrap();
    form.select("track", "cs");

    form.submit(Instant::now()).unwrap();
    form.set_text("name", "Mallory");

    assert_eq!(form.submission().unwrap().get_text("name"), Some("Alice"));
}

#[test]
fn single_section_schema_from_the_wire() {
    let schema = FormSchema::from_json(
        r#"{ "formTitle": "T",
             "sections": [ { "title": "A", "description": "",
                             "fields": [ { "fieldId": "x", "type": "text",
                                           "label": "X", "required": true } ] } ] }"#,
    )
    .unwrap();

    let mut form = FormInterpreter::new();
    form.supply_schema(schema).unwrap();
    assert!(form.is_last_section());

    // Submitting empty shows "This field is required" and stays active
    form.set_text("x", "");
    let errors = form.submit(Instant::now()).unwrap_err();
    assert_eq!(errors.get("x").unwrap().to_string(), "This field is required");
    assert_eq!(form.phase(), Phase::Active);

    // A non-empty value submits
    form.set_text("x", "ok");
    assert!(form.submit(Instant::now()).unwrap());
    assert_eq!(form.phase(), Phase::Submitted);
}
