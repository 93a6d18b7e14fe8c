pub mod atomic;
pub mod byte;
pub mod char;

pub use self::atomic::AtomicCursor;
pub use self::byte::ByteCursor;
pub use self::char::CharCursor;
