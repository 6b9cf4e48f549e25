//! DTOs for the student resource.

use serde::{Deserialize, Serialize};
use validator::Validate;

use crate::domain::entities::{NewStudent, Student};

/// Request body for creating or replacing a student.
///
/// Fields are declared optional so that a body missing several of them fails
/// validation with every omission enumerated, instead of bailing out at the
/// first absent field during deserialization.
#[derive(Debug, Deserialize, Validate)]
pub struct StudentPayload {
    #[validate(required(message = "This field is required."))]
    #[validate(length(min = 1, max = 255, message = "Must be between 1 and 255 characters."))]
    pub name: Option<String>,

    #[validate(required(message = "This field is required."))]
    #[validate(range(min = 0, max = 150, message = "Must be between 0 and 150."))]
    pub age: Option<i64>,
}

impl StudentPayload {
    /// Converts a validated payload into store input.
    ///
    /// Call only after `validate()` succeeded; required fields are present
    /// by then.
    pub fn into_new_student(self) -> NewStudent {
        NewStudent {
            name: self.name.unwrap_or_default(),
            age: self.age.unwrap_or_default(),
        }
    }
}

/// A single student in a response body.
#[derive(Debug, Serialize)]
pub struct StudentItem {
    pub id: i64,
    pub name: String,
    pub age: i64,
}

impl From<Student> for StudentItem {
    fn from(s: Student) -> Self {
        Self {
            id: s.id,
            name: s.name,
            age: s.age,
        }
    }
}
