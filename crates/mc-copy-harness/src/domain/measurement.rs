//! Per-case timing result

use std::time::Duration;

use super::format::format_millis;

/// Elapsed time of one case in both phases.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Measurement {
    pub case_name: &'static str,
    pub unlocked: Duration,
    pub locked: Duration,
}

impl Measurement {
    pub fn unlocked_ms(&self) -> u128 {
        self.unlocked.as_millis()
    }

    pub fn locked_ms(&self) -> u128 {
        self.locked.as_millis()
    }

    /// `name\tunlocked\tlocked`, milliseconds grouped by thousands.
    pub fn to_row(&self) -> String {
        format!(
            "{}\t{}\t{}",
            self.case_name,
            format_millis(self.unlocked),
            format_millis(self.locked)
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_to_row() {
        let m = Measurement {
            case_name: "loop→put→PlainMap",
            unlocked: Duration::from_millis(1_532),
            locked: Duration::from_micros(12_900),
        };

        assert_eq!(m.to_row(), "loop→put→PlainMap\t1,532\t12");
        assert_eq!(m.unlocked_ms(), 1_532);
        assert_eq!(m.locked_ms(), 12);
    }
}
