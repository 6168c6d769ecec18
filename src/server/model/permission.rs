//! Permission tiers and capability checks.
//!
//! Every authorization decision goes through `Tier::allows` or `authorize`, so
//! roles are never compared as strings.

use crate::server::{error::auth::AuthError, model::user::User};

/// Permission level of a requester, ordered from least to most privileged.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum Tier {
    Anonymous,
    User,
    Moderator,
    Admin,
}

/// Something a requester may be allowed to do.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Capability {
    /// Safe methods on any public resource.
    Read,
    /// Post reviews and comments.
    CreateContent,
    /// Edit or delete reviews and comments written by others.
    ModerateContent,
    /// Write categories, genres and titles.
    ManageCatalog,
    /// List, create and edit user accounts.
    ManageUsers,
}

impl Tier {
    pub fn allows(self, capability: Capability) -> bool {
        match capability {
            Capability::Read => true,
            Capability::CreateContent => self >= Tier::User,
            Capability::ModerateContent => self >= Tier::Moderator,
            Capability::ManageCatalog | Capability::ManageUsers => self >= Tier::Admin,
        }
    }
}

/// Permission an operation requires from an authenticated user.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Permission {
    Capability(Capability),
    /// Edit or delete a review/comment: the author, or anyone allowed to moderate.
    ModifyContent { author_id: i32 },
}

/// Checks `permission` for `user`.
///
/// # Returns
/// - `Ok(())` - The user holds the permission
/// - `Err(AuthError::AccessDenied)` - The user lacks it
pub fn authorize(user: &User, permission: Permission) -> Result<(), AuthError> {
    let allowed = match permission {
        Permission::Capability(capability) => user.tier().allows(capability),
        Permission::ModifyContent { author_id } => {
            user.id == author_id || user.tier().allows(Capability::ModerateContent)
        }
    };

    if allowed {
        Ok(())
    } else {
        Err(AuthError::AccessDenied(
            user.id,
            format!("missing permission {:?}", permission),
        ))
    }
}
