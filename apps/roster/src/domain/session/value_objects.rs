use std::fmt;

/// Shortest username the login form accepts
pub const MIN_USERNAME_LEN: usize = 3;

/// Username value object
///
/// # Invariants
/// - Surrounding whitespace is trimmed
/// - At least 3 characters after trimming
///
/// # Example
/// ```
/// use roster_engine::domain::session::Username;
///
/// let name = Username::new("  jordan ").expect("valid username");
/// assert_eq!(name.as_str(), "jordan");
/// assert!(Username::new("jo").is_err());
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Username(String);

impl Username {
    /// Creates a new Username, returning the login form message on failure
    pub fn new(raw: &str) -> Result<Self, String> {
        let trimmed = raw.trim();
        if trimmed.is_empty() {
            return Err("Username is required".to_string());
        }
        if trimmed.chars().count() < MIN_USERNAME_LEN {
            return Err("Username must be at least 3 characters long".to_string());
        }
        Ok(Self(trimmed.to_string()))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for Username {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_username_is_required() {
        assert_eq!(Username::new("   ").unwrap_err(), "Username is required");
    }

    #[test]
    fn short_username_rejected() {
        assert_eq!(
            Username::new(" ab ").unwrap_err(),
            "Username must be at least 3 characters long"
        );
    }

    #[test]
    fn minimum_length_accepted() {
        assert_eq!(Username::new("abc").unwrap().as_str(), "abc");
    }

    #[test]
    fn display_shows_trimmed_value() {
        let name = Username::new("\tkobe\n").unwrap();
        assert_eq!(format!("{}", name), "kobe");
    }
}
