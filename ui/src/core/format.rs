//! Formatting helpers for presenting counters and prices.

pub fn format_counter(value: u32, suffix: &str) -> String {
    format!("{value}{suffix}")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn appends_suffix() {
        assert_eq!(format_counter(92, "%"), "92%");
        assert_eq!(format_counter(0, ""), "0");
    }
}
