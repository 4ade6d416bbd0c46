#[derive(Debug, Clone)]
pub struct PostalCode(String);

impl PostalCode {
    pub const LENGTH: usize = 6;

    pub fn parse(code: String) -> Result<PostalCode, String> {
        if code.trim().is_empty() {
            return Err("Postal code is required".to_string());
        }

        if !code.chars().all(|c| c.is_ascii_alphanumeric()) {
            return Err("Postal code must be alphanumeric".to_string());
        }

        if code.len() != Self::LENGTH {
            return Err(format!("Postal code must be {} characters long", Self::LENGTH));
        }

        Ok(Self(code))
    }

    pub fn into_inner(self) -> String {
        self.0
    }
}
