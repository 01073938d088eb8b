//! Use-Case-Funktionen: die eigentliche Mutationslogik hinter den Handlern.

pub mod editing;
pub mod file_io;
