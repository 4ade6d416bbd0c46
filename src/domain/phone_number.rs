// Exactly 11 digits, e.g. 07123456789
#[derive(Debug, Clone)]
pub struct CustomerPhoneNumber(String);

impl CustomerPhoneNumber {
    pub fn parse(number: String) -> Result<CustomerPhoneNumber, String> {
        if number.len() == 11 && number.chars().all(|c| c.is_ascii_digit()) {
            Ok(Self(number))
        } else {
            Err("Phone number must be exactly 11 digits".to_string())
        }
    }

    pub fn into_inner(self) -> String {
        self.0
    }
}

// A leading 0 followed by 10 digits
#[derive(Debug, Clone)]
pub struct HotelPhoneNumber(String);

impl HotelPhoneNumber {
    pub fn parse(number: String) -> Result<HotelPhoneNumber, String> {
        if number.trim().is_empty() {
            return Err("Phone number is required".to_string());
        }

        let valid = number.len() == 11
            && number.starts_with('0')
            && number.chars().all(|c| c.is_ascii_digit());

        if valid {
            Ok(Self(number))
        } else {
            Err("Invalid phone number format".to_string())
        }
    }

    pub fn into_inner(self) -> String {
        self.0
    }
}
