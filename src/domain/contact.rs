use super::*;
use serde::{Deserialize, Serialize};
use std::fmt;

#[derive(Debug, PartialEq, Eq, Clone, Serialize, Deserialize)]
pub struct Contact {
    pub name: String,
    pub email: String,
    pub phone: i64,
}

impl Contact {
    pub fn new(name: impl Into<String>, email: impl Into<String>, phone: i64) -> Self {
        Contact {
            name: name.into(),
            email: email.into(),
            phone,
        }
    }
}

impl fmt::Display for Contact {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} - {} - {}", self.name, self.email, self.phone)
    }
}

/// Coerces operator or file input into a phone number.
///
/// Surrounding whitespace is ignored. Anything that is not a plain integer
/// (dashes, spaces between digits, letters) is rejected.
pub fn parse_phone(input: &str) -> Result<i64, AppError> {
    Ok(input.trim().parse::<i64>()?)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn contact_display_format() {
        let contact = Contact::new("Ada Lovelace", "ada@x.com", 111);
        assert_eq!(contact.to_string(), "Ada Lovelace - ada@x.com - 111");
    }

    #[test]
    fn phone_coercion() -> Result<(), AppError> {
        assert_eq!(parse_phone("2029123345")?, 2029123345);
        assert_eq!(parse_phone("  222 ")?, 222);

        assert!(matches!(parse_phone("abc"), Err(AppError::ParseInt(_))));
        assert!(matches!(
            parse_phone("202-912-3345"),
            Err(AppError::ParseInt(_))
        ));
        assert!(matches!(parse_phone(""), Err(AppError::ParseInt(_))));
        Ok(())
    }
}
