// Output formatting — terminal display and report generation.

pub mod markdown;
pub mod terminal;
