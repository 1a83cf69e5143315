pub mod clock;
pub mod viewport;
