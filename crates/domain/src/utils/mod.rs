//! Pure helpers over domain values

pub mod dates;
