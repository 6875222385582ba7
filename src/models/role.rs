//! Role class model.
//!
//! This module defines the closed role classification that selects which
//! bound pair of a compensation bracket applies to an entry.

use serde::{Deserialize, Serialize};

/// The closed role classification for a revenue entry.
///
/// The role class is resolved once, upstream, by the identity collaborator
/// and passed into the engine as a tagged value. The engine never derives
/// it from free-text role names.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RoleClass {
    /// Regular staff. Uses the employee bound pair of each bracket.
    Employee,
    /// Owner/manager class (patron or co-patron). Uses the patron bound pair.
    Patron,
}

impl RoleClass {
    /// Returns true if the role belongs to the owner/manager class.
    ///
    /// # Examples
    ///
    /// ```
    /// use compensation_engine::models::RoleClass;
    ///
    /// assert!(RoleClass::Patron.is_patron());
    /// assert!(!RoleClass::Employee.is_patron());
    /// ```
    pub fn is_patron(&self) -> bool {
        matches!(self, RoleClass::Patron)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_role_class_serialization() {
        assert_eq!(
            serde_json::to_string(&RoleClass::Employee).unwrap(),
            "\"employee\""
        );
        assert_eq!(
            serde_json::to_string(&RoleClass::Patron).unwrap(),
            "\"patron\""
        );
    }

    #[test]
    fn test_role_class_deserialization() {
        let role: RoleClass = serde_json::from_str("\"patron\"").unwrap();
        assert_eq!(role, RoleClass::Patron);

        let role: RoleClass = serde_json::from_str("\"employee\"").unwrap();
        assert_eq!(role, RoleClass::Employee);
    }

    #[test]
    fn test_is_patron() {
        assert!(RoleClass::Patron.is_patron());
        assert!(!RoleClass::Employee.is_patron());
    }
}
