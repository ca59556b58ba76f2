//! Display implementations for domain models.

use std::fmt;

use crate::models::{DurationType, OfflineOption, OfflineSettings};

impl fmt::Display for DurationType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl fmt::Display for OfflineOption {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let text = match self {
            OfflineOption::None => "none",
            OfflineOption::Today => "today",
            OfflineOption::Custom => "custom",
        };
        f.write_str(text)
    }
}

impl fmt::Display for OfflineSettings {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.start_date() == self.end_date() {
            write!(f, "{} ({})", self.start_date(), self.duration_type())
        } else {
            write!(
                f,
                "{} to {} ({})",
                self.start_date(),
                self.end_date(),
                self.duration_type()
            )
        }
    }
}
