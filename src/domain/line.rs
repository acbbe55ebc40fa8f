use std::fmt;

/// A release line: every version sharing the same major and minor numbers
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct ReleaseLine {
    pub major: u64,
    pub minor: u64,
}

impl ReleaseLine {
    pub fn new(major: u64, minor: u64) -> Self {
        ReleaseLine { major, minor }
    }
}

impl fmt::Display for ReleaseLine {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}.{}", self.major, self.minor)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_line_display() {
        assert_eq!(ReleaseLine::new(1, 10).to_string(), "1.10");
    }

    #[test]
    fn test_line_ordering() {
        assert!(ReleaseLine::new(1, 10) > ReleaseLine::new(1, 9));
        assert!(ReleaseLine::new(2, 0) > ReleaseLine::new(1, 99));
    }
}
