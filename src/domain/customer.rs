use serde::{Deserialize, Serialize};

use crate::models::NewCustomer;

use super::{CustomerEmail, CustomerName, CustomerPhoneNumber, ValidationErrors};

// Request body for creating / updating a customer
#[derive(Deserialize, Serialize, Debug, Clone)]
pub struct CustomerPayload{
    #[serde(default)]
    pub id: Option<i64>,
    pub name: String,
    pub email: String,
    pub phone_number: String
}

impl TryFrom<CustomerPayload> for NewCustomer {
    type Error = ValidationErrors;

    fn try_from(payload: CustomerPayload) -> Result<Self, Self::Error> {
        let mut errors = ValidationErrors::new();

        let name = errors.check("name", CustomerName::parse(payload.name));
        let email = errors.check("email", CustomerEmail::parse(payload.email));
        let phone_number = errors.check("phone_number", CustomerPhoneNumber::parse(payload.phone_number));

        match (name, email, phone_number) {
            (Some(name), Some(email), Some(phone_number)) => Ok(NewCustomer{
                name: name.into_inner(),
                email: email.into_inner(),
                phone_number: phone_number.into_inner()
            }),
            _ => Err(errors)
        }
    }
}
