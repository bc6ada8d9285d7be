//! Role value object identifying an area of expertise

use serde::{Deserialize, Deserializer, Serialize, Serializer};

/// Expertise identity of a panel worker (Value Object)
///
/// The built-in roles cover the default review panel. `Custom` is the
/// extension point: configuration can bind new role names to endpoints
/// without a code change.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum Role {
    Accounting,
    Industry,
    Risk,
    Custom(String),
}

impl Role {
    /// Get the string identifier for this role
    pub fn as_str(&self) -> &str {
        match self {
            Role::Accounting => "accounting",
            Role::Industry => "industry",
            Role::Risk => "risk",
            Role::Custom(s) => s,
        }
    }

    /// Parse a role name; unknown names become `Custom`
    pub fn from_name(name: &str) -> Role {
        match name {
            "accounting" => Role::Accounting,
            "industry" => Role::Industry,
            "risk" => Role::Risk,
            other => Role::Custom(other.to_string()),
        }
    }

    /// The roles every registry knows without configuration
    pub fn builtin() -> Vec<Role> {
        vec![Role::Accounting, Role::Industry, Role::Risk]
    }

    /// Uppercased name used in context block headers
    pub fn display_name(&self) -> String {
        self.as_str().to_uppercase()
    }
}

impl std::fmt::Display for Role {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl std::str::FromStr for Role {
    type Err = std::convert::Infallible;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        Ok(Role::from_name(s))
    }
}

impl Serialize for Role {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.serialize_str(self.as_str())
    }
}

impl<'de> Deserialize<'de> for Role {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        Ok(Role::from_name(&s))
    }
}
