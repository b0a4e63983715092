use std::sync::{Arc, Mutex, MutexGuard};

use crate::models::profile::{Profile, ProfileData, ProfileError};

/// Exclusive owner of the profile collection.
///
/// Cloning yields another handle to the same collection, so one store can be
/// shared across concurrent request handlers as router state. Every
/// operation takes the lock exactly once and holds it for the whole
/// operation, so concurrent callers observe either the fully-pre-mutation or
/// fully-post-mutation state.
#[derive(Debug, Clone)]
pub struct ProfileStore {
    profiles: Arc<Mutex<Vec<Profile>>>,
}

impl ProfileStore {
    pub fn new() -> Self {
        Self {
            profiles: Arc::new(Mutex::new(Vec::new())),
        }
    }

    fn lock(&self) -> Result<MutexGuard<'_, Vec<Profile>>, ProfileError> {
        self.profiles.lock().map_err(|e| {
            tracing::error!("profile store lock poisoned: {e}");
            ProfileError::Internal
        })
    }

    /// Validates the candidate, assigns the next id (max existing id + 1,
    /// or 1 for an empty store) and stores the record.
    pub fn create(&self, data: &ProfileData) -> Result<Profile, ProfileError> {
        data.validate()?;

        let mut profiles = self.lock()?;
        let id = profiles.iter().map(|p| p.id).max().unwrap_or(0) + 1;
        let profile = Profile {
            id,
            first_name: data.first_name.clone().unwrap_or_default(),
            last_name: data.last_name.clone().unwrap_or_default(),
            email: data.email.clone(),
            phone_number: data.phone_number.clone(),
        };
        profiles.push(profile.clone());
        tracing::debug!(id, "created profile");
        Ok(profile)
    }

    /// Overwrites all four mutable fields on the record with the candidate's
    /// values. Full replacement, never a field-by-field merge: a blank
    /// candidate field blanks the stored field. The id never changes.
    pub fn update(&self, id: i64, data: &ProfileData) -> Result<Profile, ProfileError> {
        let mut profiles = self.lock()?;
        let existing = profiles
            .iter_mut()
            .find(|p| p.id == id)
            .ok_or(ProfileError::NotFound(id))?;

        existing.first_name = data.first_name.clone().unwrap_or_default();
        existing.last_name = data.last_name.clone().unwrap_or_default();
        existing.email = data.email.clone();
        existing.phone_number = data.phone_number.clone();
        tracing::debug!(id, "updated profile");
        Ok(existing.clone())
    }

    pub fn get_by_id(&self, id: i64) -> Result<Profile, ProfileError> {
        let profiles = self.lock()?;
        profiles
            .iter()
            .find(|p| p.id == id)
            .cloned()
            .ok_or(ProfileError::NotFound(id))
    }

    /// Every stored record in insertion order (equivalently ascending id).
    pub fn list_all(&self) -> Result<Vec<Profile>, ProfileError> {
        let profiles = self.lock()?;
        Ok(profiles.clone())
    }
}

impl Default for ProfileStore {
    fn default() -> Self {
        Self::new()
    }
}
