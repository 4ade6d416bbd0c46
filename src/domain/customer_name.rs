#[derive(Debug, Clone)]
pub struct CustomerName(String);

impl CustomerName {
    pub const MAX_LENGTH: usize = 50;

    pub fn parse(name: String) -> Result<CustomerName, String> {
        let length = name.chars().count();

        if length == 0 || length > Self::MAX_LENGTH {
            return Err(format!("Name must be between 1 and {} characters", Self::MAX_LENGTH));
        }

        let is_allowed = |c: char| c.is_ascii_alphabetic() || c == '-' || c == '\'';
        if !name.chars().all(is_allowed) {
            return Err("Please use a name without numbers or specials".to_string());
        }

        Ok(Self(name))
    }

    pub fn into_inner(self) -> String {
        self.0
    }
}
