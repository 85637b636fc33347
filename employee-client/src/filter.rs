//! Free-text search over the fetched employee list

use shared::models::EmployeeResponse;

/// Case-insensitive substring match against every string field of the record
///
/// An empty term matches everything.
pub fn matches(employee: &EmployeeResponse, term: &str) -> bool {
    let needle = term.to_lowercase();
    if needle.is_empty() {
        return true;
    }
    employee
        .string_fields()
        .any(|value| value.to_lowercase().contains(&needle))
}

/// Records of `employees` matching `term`, in their original order
pub fn filter<'a>(employees: &'a [EmployeeResponse], term: &str) -> Vec<&'a EmployeeResponse> {
    employees.iter().filter(|e| matches(e, term)).collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use shared::models::BloodGroup;

    fn employee(id: &str, name: &str, email: &str, address: &str) -> EmployeeResponse {
        EmployeeResponse {
            id: id.into(),
            name: name.into(),
            email: email.into(),
            address: address.into(),
            date_of_join: Some("2023-01-09".into()),
            blood_group: Some(BloodGroup::AB),
            employee_id: None,
        }
    }

    #[test]
    fn matches_any_string_field_ignoring_case() {
        let list = vec![
            employee("1", "Jaya", "j@x.com", "Delhi"),
            employee("2", "Ravi", "ravi@jaymail.com", "Pune"),
            employee("3", "Anu", "anu@x.com", "Ajay Nagar"),
            employee("4", "Mohan", "m@x.com", "Goa"),
        ];
        let hits: Vec<_> = filter(&list, "JAY").iter().map(|e| e.id.as_str()).collect();
        assert_eq!(hits, ["1", "2", "3"]);
    }

    #[test]
    fn empty_term_keeps_everything() {
        let list = vec![employee("1", "A", "", ""), employee("2", "B", "", "")];
        assert_eq!(filter(&list, "").len(), 2);
        assert_eq!(filter(&list, " ").len(), 0);
    }

    #[test]
    fn searches_derived_and_enum_fields() {
        let mut e = employee("k9", "A", "", "");
        e.employee_id = Some("0007".into());
        assert!(matches(&e, "0007"));
        assert!(matches(&e, "ab"));
        assert!(matches(&e, "2023-01"));
        assert!(matches(&e, "K9"));
        assert!(!matches(&e, "zzz"));
    }
}
