//! Healthy status range.
//!
//! Any code in `[200, 400)` passes, redirects included. This matches the
//! health check on the green target group (`200-399`).

use std::ops::Range;

/// Status codes that count as a healthy probe.
pub const HEALTHY_STATUS: Range<u16> = 200..400;

pub fn is_healthy_status(code: u16) -> bool {
    HEALTHY_STATUS.contains(&code)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_range_boundaries() {
        assert!(!is_healthy_status(199));
        assert!(is_healthy_status(200));
        assert!(is_healthy_status(204));
        assert!(is_healthy_status(302));
        assert!(is_healthy_status(399));
        assert!(!is_healthy_status(400));
        assert!(!is_healthy_status(503));
    }
}
