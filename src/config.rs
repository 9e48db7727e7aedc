use crate::birth_date::BirthDatePolicy;
use crate::gender::Gender;
use serde::{Deserialize, Serialize};

/// Per-call validation settings.
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq, Eq, Default)]
pub struct ValidationConfig {
    /// Gender the gender digit must encode; `None` disables the check.
    #[serde(default)]
    pub expected_gender: Option<Gender>,

    #[serde(default)]
    pub birth_date_policy: BirthDatePolicy,
}

impl ValidationConfig {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn expected_gender(&self, gender: Gender) -> Self {
        self.mutate_clone(|x| x.expected_gender = Some(gender))
    }

    pub fn birth_date_policy(&self, policy: BirthDatePolicy) -> Self {
        self.mutate_clone(|x| x.birth_date_policy = policy)
    }

    fn mutate_clone(&self, modify: impl FnOnce(&mut Self)) -> Self {
        let mut clone = self.clone();
        modify(&mut clone);
        clone
    }
}
