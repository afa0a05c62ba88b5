//! Employee record and its validation rules.

use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::error::ApiError;

/// Bounds on name and department length.
const MIN_TEXT_LEN: usize = 3;
const MAX_TEXT_LEN: usize = 30;

/// Minimum employee age (exclusive).
const MIN_AGE: u32 = 18;

/// An employee record.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct Employee {
    /// Unique identifier, must be positive.
    #[schema(example = 1, minimum = 1)]
    pub id: u32,

    /// Full name, 3 to 30 characters.
    #[schema(example = "Ada Lovelace")]
    pub name: String,

    /// Department name, 3 to 30 characters.
    #[schema(example = "Engineering")]
    pub department: String,

    /// Age in years, must be greater than 18.
    #[schema(example = 36)]
    pub age: u32,
}

impl Employee {
    /// Check field constraints, returning a validation error on the first
    /// violated rule.
    pub fn validate(&self) -> Result<(), ApiError> {
        if self.id == 0 {
            return Err(ApiError::Validation(
                "id must be greater than 0".to_string(),
            ));
        }

        let name_len = self.name.chars().count();
        if !(MIN_TEXT_LEN..=MAX_TEXT_LEN).contains(&name_len) {
            return Err(ApiError::Validation(format!(
                "name must be {MIN_TEXT_LEN} to {MAX_TEXT_LEN} characters"
            )));
        }

        let dept_len = self.department.chars().count();
        if !(MIN_TEXT_LEN..=MAX_TEXT_LEN).contains(&dept_len) {
            return Err(ApiError::Validation(format!(
                "department must be {MIN_TEXT_LEN} to {MAX_TEXT_LEN} characters"
            )));
        }

        if self.age <= MIN_AGE {
            return Err(ApiError::Validation(format!(
                "age must be greater than {MIN_AGE}"
            )));
        }

        Ok(())
    }
}

/// Confirmation message returned by delete operations.
#[derive(Debug, Serialize, ToSchema)]
pub struct Message {
    /// Outcome description.
    pub message: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn valid_employee() -> Employee {
        Employee {
            id: 1,
            name: "Ada Lovelace".to_string(),
            department: "Engineering".to_string(),
            age: 36,
        }
    }

    #[test]
    fn valid_employee_passes() {
        assert!(valid_employee().validate().is_ok());
    }

    #[test]
    fn zero_id_is_rejected() {
        let emp = Employee {
            id: 0,
            ..valid_employee()
        };
        assert!(emp.validate().is_err());
    }

    #[test]
    fn short_name_is_rejected() {
        let emp = Employee {
            name: "Al".to_string(),
            ..valid_employee()
        };
        assert!(emp.validate().is_err());
    }

    #[test]
    fn long_department_is_rejected() {
        let emp = Employee {
            department: "x".repeat(31),
            ..valid_employee()
        };
        assert!(emp.validate().is_err());
    }

    #[test]
    fn underage_is_rejected() {
        let emp = Employee {
            age: 18,
            ..valid_employee()
        };
        assert!(emp.validate().is_err());

        let emp = Employee {
            age: 19,
            ..valid_employee()
        };
        assert!(emp.validate().is_ok());
    }
}
