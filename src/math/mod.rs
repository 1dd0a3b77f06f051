//! Mathematical core: Punnett-square outcome probabilities and
//! continued-fraction approximation for display.

pub mod fraction;
pub mod punnett;

pub use fraction::*;
pub use punnett::*;
