//! Callback system for training events
//!
//! The host training loop owns scheduling; this crate only hooks into it.
//!
//! # Example
//!
//! ```rust
//! use sumar::train::callback::{CallbackAction, CallbackContext, TrainerCallback};
//!
//! struct PrintCallback;
//!
//! impl TrainerCallback for PrintCallback {
//!     fn on_epoch_end(&mut self, ctx: &CallbackContext) -> CallbackAction {
//!         println!("Epoch {} finished with loss {:.4}", ctx.epoch, ctx.loss);
//!         CallbackAction::Continue
//!     }
//! }
//! ```

mod sampling;
mod traits;

pub use sampling::SamplingCallback;
pub use traits::{CallbackAction, CallbackContext, TrainerCallback};
