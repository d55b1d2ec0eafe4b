use std::fmt;

const UNITS: [&str; 5] = ["B", "KB", "MB", "GB", "TB"];
const STEP: f64 = 1024.0;

/// HumanSize formats a byte count with binary unit steps
///
/// Values below one kilobyte print as whole bytes (`512 B`); larger values
/// print with one decimal place (`1.0 KB`, `12.3 MB`).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct HumanSize(pub u64);

impl fmt::Display for HumanSize {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.0 < STEP as u64 {
            return write!(f, "{} {}", self.0, UNITS[0]);
        }

        let mut value = self.0 as f64;
        let mut unit = 0;
        while value >= STEP && unit < UNITS.len() - 1 {
            value /= STEP;
            unit += 1;
        }
        write!(f, "{:.1} {}", value, UNITS[unit])
    }
}
