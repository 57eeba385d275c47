//! Password strength scoring shown under the registration password input.

#[cfg(test)]
#[path = "password_strength_test.rs"]
mod password_strength_test;

pub const SYMBOLS: &str = "!@#$%^&*(),.?\":{}|<>";

pub const LABELS: [&str; 6] = ["Very Weak", "Weak", "Fair", "Good", "Strong", "Very Strong"];

/// One point per satisfied requirement, in display order.
const REQUIREMENTS: [(&str, fn(&str) -> bool); 5] = [
    ("8+ characters", long_enough),
    ("lowercase letter", has_lowercase),
    ("uppercase letter", has_uppercase),
    ("number", has_digit),
    ("special character", has_symbol),
];

fn long_enough(p: &str) -> bool {
    p.chars().count() >= 8
}

fn has_lowercase(p: &str) -> bool {
    p.chars().any(|c| c.is_ascii_lowercase())
}

fn has_uppercase(p: &str) -> bool {
    p.chars().any(|c| c.is_ascii_uppercase())
}

fn has_digit(p: &str) -> bool {
    p.chars().any(|c| c.is_ascii_digit())
}

fn has_symbol(p: &str) -> bool {
    p.chars().any(|c| SYMBOLS.contains(c))
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct PasswordStrength {
    pub score: u8,
    pub label: &'static str,
    pub missing_requirements: Vec<&'static str>,
}

impl PasswordStrength {
    /// `"Missing: a, b"`, or `"All requirements met"`.
    #[must_use]
    pub fn feedback(&self) -> String {
        if self.missing_requirements.is_empty() {
            "All requirements met".to_owned()
        } else {
            format!("Missing: {}", self.missing_requirements.join(", "))
        }
    }
}

#[must_use]
pub fn score(password: &str) -> PasswordStrength {
    let missing_requirements: Vec<&'static str> = REQUIREMENTS
        .iter()
        .filter(|(_, met)| !met(password))
        .map(|(name, _)| *name)
        .collect();
    let points = REQUIREMENTS.len() - missing_requirements.len();
    PasswordStrength {
        score: u8::try_from(points).unwrap_or(u8::MAX),
        label: LABELS[points],
        missing_requirements,
    }
}
