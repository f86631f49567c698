//! Rules, rule containers and style sheets.

mod list;
mod rule;
mod stylesheet;

pub use list::RuleList;
pub use rule::{ConditionalRule, Rule, RuleOptions, StyleRule};
pub use stylesheet::{SheetOptions, StyleSheet};
