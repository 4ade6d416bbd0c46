use validator::ValidateEmail;

#[derive(Debug, Clone)]
pub struct CustomerEmail(String);

impl CustomerEmail {
    pub fn parse(email: String) -> Result<CustomerEmail, String> {
        if email.trim().is_empty() {
            return Err("Email is required".to_string());
        }

        if email.validate_email() {
            Ok(Self(email))
        } else {
            Err("The email address must be in the format of name@domain.com".to_string())
        }
    }

    pub fn into_inner(self) -> String {
        self.0
    }
}
