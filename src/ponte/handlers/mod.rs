pub mod callback;
pub use self::callback::callback;

pub mod health;
pub use self::health::health;

pub mod index;
pub use self::index::index;

pub mod success;
pub use self::success::success;
