pub use messaging_utils_derive::Patch;

/// A single field of a partial update. `Unchanged` keeps the stored value.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum PatchValue<T> {
    Update(T),
    #[default]
    Unchanged,
}

impl<T> PatchValue<T> {
    pub fn update(self, old_value: T) -> T {
        match self {
            Self::Update(new_value) => new_value,
            Self::Unchanged => old_value,
        }
    }
}

impl<T> From<Option<T>> for PatchValue<T> {
    fn from(value: Option<T>) -> Self {
        value.map_or(Self::Unchanged, Self::Update)
    }
}

pub trait Patch {
    type Patch;

    /// Applies `patch`, keeping every field the patch leaves unchanged.
    fn update(self, patch: Self::Patch) -> Self;
}
