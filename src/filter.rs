//! Valid-user filtering

use crate::types::User;
use crate::{Error, Result};

/// Keep users whose status is [`User::VALID_STATUS`], in their original order
///
/// Stops at the first `None` and reports its zero-based index as
/// [`Error::DirtyData`]. Entries after it are not inspected.
pub fn filter_valid_users(users: Vec<Option<User>>) -> Result<Vec<User>> {
    let mut valid = Vec::with_capacity(users.len());

    for (index, entry) in users.into_iter().enumerate() {
        let Some(user) = entry else {
            tracing::warn!(index, "dirty data in user list");
            return Err(Error::DirtyData { index });
        };

        if user.is_valid() {
            valid.push(user);
        }
    }

    Ok(valid)
}
