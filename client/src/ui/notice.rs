//! User-facing notifications

use std::fmt;
use std::io::Write;

/// A message the user must acknowledge
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Notice {
    /// Save attempted without a logged-in session
    LoginRequired,
    /// Quick form result stored
    SavedQuick,
    /// Dashboard result stored
    SavedDashboard,
    /// Server refused the save, with its reason
    SaveFailed(String),
    /// No usable answer from the server
    NetworkError,
}

impl fmt::Display for Notice {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Notice::LoginRequired => write!(f, "Please login to save measurements."),
            Notice::SavedQuick => write!(f, "Saved to your history."),
            Notice::SavedDashboard => write!(f, "Saved — refresh to see in history."),
            Notice::SaveFailed(reason) => write!(f, "Save failed: {}", reason),
            Notice::NetworkError => write!(f, "Network error saving BMI."),
        }
    }
}

/// Shows notices to the user
pub trait Notifier: Send + Sync {
    fn notify(&self, notice: Notice);
}

impl<T: Notifier + ?Sized> Notifier for std::sync::Arc<T> {
    fn notify(&self, notice: Notice) {
        (**self).notify(notice)
    }
}

/// Prints notices to stderr
#[derive(Debug, Default, Clone, Copy)]
pub struct ConsoleNotifier;

impl Notifier for ConsoleNotifier {
    fn notify(&self, notice: Notice) {
        let mut stderr = std::io::stderr().lock();
        let _ = writeln!(stderr, "{}", notice);
    }
}
