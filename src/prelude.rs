//! String-based convenience API for quick experimentation.

pub use crate::config::{Arithmetic, Settings};
pub use crate::format::RenderStyle;
pub use crate::ui::{build_system, explain_eqs, parse, respond, solve_eqs, validate};
