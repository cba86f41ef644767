use std::ops::Deref;
use std::sync::Arc;

pub mod definition;

mod dummy;

pub use definition::AbstractDatabase;
pub use dummy::DummyDb;

/// Durable account store in use
#[derive(Clone)]
pub enum Database {
    Dummy(DummyDb),
    Custom(Arc<dyn AbstractDatabase>),
}

impl Default for Database {
    fn default() -> Self {
        Self::Dummy(Default::default())
    }
}

impl Deref for Database {
    type Target = dyn AbstractDatabase;

    fn deref(&self) -> &Self::Target {
        match self {
            Database::Dummy(dummy) => dummy,
            Database::Custom(custom) => custom.as_ref(),
        }
    }
}
