use serde::{Deserialize, Serialize};

use crate::models::NewHotel;

use super::{HotelLocation, HotelName, HotelPhoneNumber, PostalCode, ValidationErrors};

#[derive(Deserialize, Serialize, Debug, Clone)]
pub struct HotelPayload{
    #[serde(default)]
    pub id: Option<i64>,
    pub name: String,
    pub location: String,
    pub phone_number: String,
    pub postal_code: String
}

impl TryFrom<HotelPayload> for NewHotel {
    type Error = ValidationErrors;

    fn try_from(payload: HotelPayload) -> Result<Self, Self::Error> {
        let mut errors = ValidationErrors::new();

        let name = errors.check("name", HotelName::parse(payload.name));
        let location = errors.check("location", HotelLocation::parse(payload.location));
        let phone_number = errors.check("phone_number", HotelPhoneNumber::parse(payload.phone_number));
        let postal_code = errors.check("postal_code", PostalCode::parse(payload.postal_code));

        match (name, location, phone_number, postal_code) {
            (Some(name), Some(location), Some(phone_number), Some(postal_code)) => Ok(NewHotel{
                name: name.into_inner(),
                location: location.into_inner(),
                phone_number: phone_number.into_inner(),
                postal_code: postal_code.into_inner()
            }),
            _ => Err(errors)
        }
    }
}
