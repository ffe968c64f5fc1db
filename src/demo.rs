//! Sample nested application
//!
//! A [`Dashboard`] owns a [`Title`] and two [`Counter`]s. Its update function
//! is written only with the combinators from [`crate::core`]:
//! - counters report through optional out-messages (`resolve_optional`)
//! - renames report through fallible out-messages (`resolve_fallible`)
//! - syncing hands persistence commands up through the out slot
//!   (`resolve_effect_stream`)

pub mod counter;
pub mod dashboard;
pub mod title;

pub use counter::{Counter, CounterEffect, CounterMsg, CounterOut};
pub use dashboard::{Dashboard, DashboardEffect, DashboardMsg, Side};
pub use title::{Title, TitleEffect, TitleError};
