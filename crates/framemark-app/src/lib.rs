//! framemark Application
//!
//! Native shell that replays recorded pointer sessions through the shape
//! editor and exports the resulting frame and submissions.

mod session;

pub use session::{Action, Session, SessionError, SessionReport, SessionScript, run_session};
