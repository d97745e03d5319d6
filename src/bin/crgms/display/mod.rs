mod banner;
mod error;
mod progress;
mod tables;

pub use banner::{banner_for_help, print_banner};
pub use error::print_error;
pub use progress::Progress;
pub use tables::{print_input_summary, print_ranking};

/// How much to draw around a run. Reports always go to their own target.
#[derive(Debug, Clone, Copy)]
pub struct Context {
    /// Banner, spinners and tables on stderr.
    pub interactive: bool,
}

impl Context {
    pub fn new(quiet: bool) -> Self {
        Self {
            interactive: !quiet && crate::io::stderr_is_tty(),
        }
    }
}
