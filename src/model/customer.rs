//! Customer payload

use std::fmt;

use serde::{Deserialize, Serialize};

/// Customer payload, never stored
///
/// The XML root element is `<customer>`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename = "customer")]
pub struct Customer {
    pub firstname: String,
    pub lastname: String,
    pub age: i32,
}

impl Customer {
    pub fn new(firstname: impl Into<String>, lastname: impl Into<String>, age: i32) -> Self {
        Self {
            firstname: firstname.into(),
            lastname: lastname.into(),
            age,
        }
    }

    /// The fixed customer returned by `GET /api/customer`
    pub fn sample() -> Self {
        Self::new("Peter", "Smith", 30)
    }
}

impl fmt::Display for Customer {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Customer [firstname={}, lastname={}, age={}]",
            self.firstname, self.lastname, self.age
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_sample_customer() {
        let customer = Customer::sample();
        assert_eq!(customer.firstname, "Peter");
        assert_eq!(customer.lastname, "Smith");
        assert_eq!(customer.age, 30);
    }

    #[test]
    fn test_xml_payload_in_any_field_order() {
        let xml = "<customer><age>30</age><firstname>Peter</firstname><lastname>Smith</lastname></customer>";
        let customer: Customer = quick_xml::de::from_str(xml).unwrap();
        assert_eq!(customer, Customer::sample());
    }
}
