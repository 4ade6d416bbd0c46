#[derive(Debug, Clone)]
pub struct HotelName(String);

impl HotelName {
    pub const MAX_LENGTH: usize = 50;

    pub fn parse(name: String) -> Result<HotelName, String> {
        if name.trim().is_empty() {
            return Err("Hotel name is required".to_string());
        }

        if name.chars().count() > Self::MAX_LENGTH {
            return Err(format!("Hotel name must be less than or equal to {} characters", Self::MAX_LENGTH));
        }

        Ok(Self(name))
    }

    pub fn into_inner(self) -> String {
        self.0
    }
}

#[derive(Debug, Clone)]
pub struct HotelLocation(String);

impl HotelLocation {
    pub fn parse(location: String) -> Result<HotelLocation, String> {
        if location.trim().is_empty() {
            Err("Location is required".to_string())
        } else {
            Ok(Self(location))
        }
    }

    pub fn into_inner(self) -> String {
        self.0
    }
}
