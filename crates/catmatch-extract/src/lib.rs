pub mod error;
pub mod extract;
pub mod rules;
pub mod text;

pub use error::RulesError;
pub use extract::extract;
pub use rules::{load_rules, RuleTable, SpecRule};
pub use text::clean_text;
