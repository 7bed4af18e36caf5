use formwork::{Choice, Field, FieldType, FormSchema, Section};

/// A short single-section feedback form, handy when a test only needs one
/// page and a submit button.
pub fn event_feedback() -> FormSchema {
    FormSchema::new(
        "Event Feedback",
        vec![Section::new(
            "Your Impressions",
            "A minute of your time helps us improve.",
            vec![
                Field::new("rating", FieldType::Radio, "Overall rating")
                    .required()
                    .with_options(vec![
                        Choice::new("great", "Great"),
                        Choice::new("okay", "Okay"),
                        Choice::new("poor", "Poor"),
                    ]),
                Field::new("highlights", FieldType::Checkbox, "What stood out?").with_options(
                    vec![
                        Choice::new("talks", "Talks"),
                        Choice::new("workshops", "Workshops"),
                        Choice::new("networking", "Networking"),
                        Choice::new("venue", "Venue"),
                    ],
                ),
                Field::new("comments", FieldType::Textarea, "Anything else?")
                    .with_max_length(500)
                    .with_placeholder("Your comments"),
            ],
        )],
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use formwork::{FormBackend, TestFill};

    #[test]
    fn schema_is_structurally_valid() {
        event_feedback().validate().unwrap();
    }

    #[test]
    fn rating_is_the_only_mandatory_field() {
        let payload = TestFill::new()
            .with_selection("rating", "great")
            .run(event_feedback())
            .unwrap();
        assert_eq!(payload.get_text("rating"), Some("great"));
        assert!(payload.get_checked("highlights").is_none());
    }
}
