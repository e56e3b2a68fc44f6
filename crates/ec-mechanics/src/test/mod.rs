//! Dice tests: data model, lifecycle, Edge actions, and chaining.
//!
//! A [`SuccessTest`] is built from an action or raw [`TestData`], driven
//! through its lifecycle with [`SuccessTest::execute`] (or step by step with
//! [`SuccessTest::start`] and [`PendingReview::resume`]), and can spawn
//! opposed, follow-up, and extended tests once evaluated.

pub mod kinds;

pub use data::{EdgeGain, OriginSummary, TestData, TestOptions, TestValues};
pub use edge::ActionOutcome;
pub use engine::{CancelHook, SuccessTest};
pub use flow::{
    AcceptAll, Execution, ExecutionStatus, PendingReview, ReviewResponse, Reviewer, Step,
};
pub use kinds::{TestBehavior, TestKind};
pub use record::{RECORD_VERSION, TestRecord};
