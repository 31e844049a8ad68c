// Library surface for the core quiz logic, headless tests and reuse.
// Terminal drawing and key bindings stay in the binary.
pub mod app_dirs;
pub mod config;
pub mod error;
pub mod feedback;
pub mod generator;
pub mod interval;
pub mod membership;
pub mod neighborhood;
pub mod render;
pub mod runtime;
pub mod session;
pub mod text_field;
pub mod theory;
pub mod util;
pub mod validator;

pub use error::InputError;
pub use interval::{Interval, IntervalKind, TypeTag};
pub use session::{Session, SessionStats};
