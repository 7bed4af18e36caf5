use formwork::{Choice, Field, FieldType, FormSchema, Section};

/// A student registration form covering all eight field types, spread over
/// three sections. The same schema as [`STUDENT_REGISTRATION_JSON`], built
/// with constructors.
pub fn student_registration() -> FormSchema {
    FormSchema::new(
        "Student Registration",
        vec![
            Section::new(
                "Personal Details",
                "Tell us who you are.",
                vec![
                    Field::new("fullName", FieldType::Text, "Full name")
                        .required()
                        .with_min_length(2)
                        .with_max_length(60)
                        .with_placeholder("Ada Lovelace")
                        .with_test_id("full-name"),
                    Field::new("dateOfBirth", FieldType::Date, "Date of birth").required(),
                    Field::new("gender", FieldType::Radio, "Gender")
                        .with_options(vec![
                            Choice::new("female", "Female"),
                            Choice::new("male", "Male"),
                            Choice::new("other", "Other"),
                        ]),
                ],
            ),
            Section::new(
                "Contact Information",
                "How can we reach you?",
                vec![
                    Field::new("email", FieldType::Email, "Email address")
                        .required()
                        .with_placeholder("you@example.org"),
                    Field::new("phone", FieldType::Tel, "Phone number")
                        .with_min_length(7)
                        .with_max_length(15),
                    Field::new("address", FieldType::Textarea, "Postal address")
                        .with_max_length(200),
                ],
            ),
            Section::new(
                "Programme",
                "Pick your programme and interests.",
                vec![
                    Field::new("department", FieldType::Dropdown, "Department")
                        .required()
                        .with_options(vec![
                            Choice::new("cs", "Computer Science"),
                            Choice::new("ee", "Electrical Engineering"),
                            Choice::new("me", "Mechanical Engineering"),
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

/// The same registration form in the JSON wire format a server would send.
pub const STUDENT_REGISTRATION_JSON: &str = r#"{
  "formTitle": "Student Registration",
  "sections": [
    {
      "title": "Personal Details",
      "description": "Tell us who you are.",
      "fields": [
        {
          "fieldId": "fullName",
          "type": "text",
          "label": "Full name",
          "required": true,
          "minLength": 2,
          "maxLength": 60,
          "placeholder": "Ada Lovelace",
          "testId": "full-name"
        },
        { "fieldId": "dateOfBirth", "type": "date", "label": "Date of birth", "required": true },
        {
          "fieldId": "gender",
          "type": "radio",
          "label": "Gender",
          "required": false,
          "options": [
            { "value": "female", "label": "Female" },
            { "value": "male", "label": "Male" },
            { "value": "other", "label": "Other" }
          ]
        }
      ]
    },
    {
      "title": "Contact Information",
      "description": "How can we reach you?",
      "fields": [
        {
          "fieldId": "email",
          "type": "email",
          "label": "Email address",
          "required": true,
          "placeholder": "you@example.org"
        },
        { "fieldId": "phone", "type": "tel", "label": "Phone number", "minLength": 7, "maxLength": 15 },
        { "fieldId": "address", "type": "textarea", "label": "Postal address", "maxLength": 200 }
      ]
    },
    {
      "title": "Programme",
      "description": "Pick your programme and interests.",
      "fields": [
        {
          "fieldId": "department",
          "type": "dropdown",
          "label": "Department",
          "required": true,
          "options": [
            { "value": "cs", "label": "Computer Science" },
            { "value": "ee", "label": "Electrical Engineering" },
            { "value": "me", "label": "Mechanical Engineering" }
          ]
        },
        {
          "fieldId": "clubs",
          "type": "checkbox",
          "label": "Clubs",
          "options": [
            { "value": "chess", "label": "Chess" },
            { "value": "robotics", "label": "Robotics" },
            { "value": "debate", "label": "Debate" }
          ]
        }
      ]
    }
  ]
}"#;

#[cfg(test)]
mod tests {
    use super::*;
    use formwork::{FormBackend, TestFill};

    #[test]
    fn json_sample_matches_the_built_schema() {
        let from_wire = FormSchema::from_json(STUDENT_REGISTRATION_JSON).unwrap();
        assert_eq!(from_wire, student_registration());
    }

    #[test]
    fn schema_is_structurally_valid() {
        student_registration().validate().unwrap();
    }

    #[test]
    fn can_be_filled_end_to_end() {
        let payload = TestFill::new()
            .with_text("fullName", "Ada Lovelace")
            .with_text("dateOfBirth", "1815-12-10")
            .with_selection("gender", "female")
            .with_text("email", "ada@example.org")
            .with_selection("department", "cs")
            .with_checked("clubs", ["chess", "robotics"])
            .run(student_registration())
            .unwrap();

        assert_eq!(payload.get_text("department"), Some("cs"));
        assert_eq!(payload.get_checked("clubs").unwrap().len(), 2);
    }
}
