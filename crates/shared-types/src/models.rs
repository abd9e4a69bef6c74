use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;
use std::fmt;

/// Identifier naming an authorization role.
///
/// Compared byte-for-byte: `"Admin"` and `"admin"` are different roles.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct RoleId(String);

impl RoleId {
    pub fn new(role: impl Into<String>) -> Self {
        Self(role.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for RoleId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for RoleId {
    fn from(s: &str) -> Self {
        RoleId::new(s)
    }
}

impl From<String> for RoleId {
    fn from(s: String) -> Self {
        RoleId(s)
    }
}

impl From<HotelRole> for RoleId {
    fn from(role: HotelRole) -> Self {
        role.role_id()
    }
}

/// The roles the front desk ships dashboards for.
///
/// - `Admin`: hotel management; may open every dashboard.
/// - `Guest`: a registered guest viewing their stay.
/// - `Housekeeping`: cleaning staff working room assignments.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum HotelRole {
    Admin,
    Guest,
    Housekeeping,
}

/// All known roles in display order.
pub const ALL_ROLES: &[HotelRole] = &[HotelRole::Admin, HotelRole::Guest, HotelRole::Housekeeping];

impl HotelRole {
    /// Identifier stored in the user record's `Role` field.
    pub fn as_str(&self) -> &'static str {
        match self {
            HotelRole::Admin => "admin",
            HotelRole::Guest => "guest",
            HotelRole::Housekeeping => "housekeeping",
        }
    }

    /// Human-readable name for display in UI.
    pub fn display_name(&self) -> &'static str {
        match self {
            HotelRole::Admin => "Administrator",
            HotelRole::Guest => "Guest",
            HotelRole::Housekeeping => "Housekeeping",
        }
    }

    pub fn role_id(&self) -> RoleId {
        RoleId::new(self.as_str())
    }

    /// Exact-match lookup. Unknown or differently-cased ids return `None`.
    pub fn from_role_id(role: &RoleId) -> Option<Self> {
        Self::from_key(role.as_str())
    }

    pub fn from_key(s: &str) -> Option<Self> {
        match s {
            "admin" => Some(HotelRole::Admin),
            "guest" => Some(HotelRole::Guest),
            "housekeeping" => Some(HotelRole::Housekeeping),
            _ => None,
        }
    }
}

/// Roles allowed to open a protected view.
///
/// An empty set authorizes nobody.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct RequiredRoles(BTreeSet<RoleId>);

impl RequiredRoles {
    pub fn of<I, R>(roles: I) -> Self
    where
        I: IntoIterator<Item = R>,
        R: Into<RoleId>,
    {
        roles.into_iter().collect()
    }

    pub fn contains(&self, role: &RoleId) -> bool {
        self.0.contains(role)
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl<R: Into<RoleId>> FromIterator<R> for RequiredRoles {
    fn from_iter<T: IntoIterator<Item = R>>(iter: T) -> Self {
        Self(iter.into_iter().map(Into::into).collect())
    }
}

impl fmt::Display for RequiredRoles {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let names: Vec<&str> = self.0.iter().map(RoleId::as_str).collect();
        write!(f, "{{{}}}", names.join(", "))
    }
}

/// Signed-in user as persisted under the session store's user key.
///
/// Field names follow the stored JSON (`{"Role": "guest", ...}`).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct UserRecord {
    #[serde(rename = "Role")]
    pub role: RoleId,
    #[serde(rename = "Name", default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(rename = "Email", default, skip_serializing_if = "Option::is_none")]
    pub email: Option<String>,
}

impl UserRecord {
    pub fn with_role(role: impl Into<RoleId>) -> Self {
        Self {
            role: role.into(),
            name: None,
            email: None,
        }
    }

    /// The known hotel role, if the stored role is one.
    pub fn hotel_role(&self) -> Option<HotelRole> {
        HotelRole::from_role_id(&self.role)
    }

    /// Name for greetings, falling back to the email, then the role.
    pub fn display_name(&self) -> String {
        self.name
            .as_deref()
            .filter(|n| !n.trim().is_empty())
            .or(self.email.as_deref())
            .map(str::to_string)
            .unwrap_or_else(|| self.role.to_string())
    }
}
