//! Registration form reconciliation engine.
//!
//! [`FormEngine`] owns the field values and error map of one form instance and
//! keeps them consistent while the user types and address data arrives from
//! the postal-code lookup or the device location.
//!
//! # Event flow
//!
//! ```text
//! edit / locate / submit ──► FormEngine ──► spawn gateway task
//!                                ▲                 │
//!                                └── FormMsg ◄─────┘  (drain_messages / pump)
//! ```
//!
//! Gateway calls are the only suspension points. Each dispatched lookup
//! carries a ticket (request id + digit string); a completion is applied only
//! if its ticket is still the pending one and its digits still match the live
//! postal-code field. Anything else is dropped without surfacing an error.

mod dispatch;
mod engine;
mod msg;
mod notifications;
mod options;
mod status;
mod view;

pub use dispatch::Channel;
pub use engine::{FormEngine, Gateways, Submission};
pub use msg::{Dirty, FormMsg};
pub use notifications::{Level, Notification, NotificationCenter, messages};
pub use options::{FormOptions, ValidationMode};
pub use status::{LookupStatus, PostalTicket, RequestId};
pub use view::{FieldView, FormView, Render};
