use crate::error::Result;
use crate::kv::KeyValueStore;
use crate::models::Profile;

const NAME_KEY: &str = "name";
const PHONE_KEY: &str = "phone";

/// Profile fields kept in their own namespace
#[derive(Clone, Debug)]
pub struct ProfileStore<S: KeyValueStore> {
    kv: S,
}

impl<S: KeyValueStore> ProfileStore<S> {
    pub const fn new(kv: S) -> Self {
        Self { kv }
    }

    pub fn load(&self) -> Result<Profile> {
        Ok(Profile {
            name: self.kv.get(NAME_KEY)?.unwrap_or_default(),
            phone: self.kv.get(PHONE_KEY)?.unwrap_or_default(),
        })
    }

    pub fn save(&self, profile: &Profile) -> Result<()> {
        self.kv.set_many(&[
            (NAME_KEY, profile.name.as_str()),
            (PHONE_KEY, profile.phone.as_str()),
        ])?;
        tracing::debug!("Saved profile");
        Ok(())
    }
}
