/// Threshold between two consecutive IPIDs above which a machine is no longer
/// considered to have a global IPID. Covers the packets a busy host sends
/// between two probe responses; raise it to tolerate noisier hosts.
pub const IPID_DIFF_THRESHOLD: u16 = 10;

/// Number of distinct values the 16-bit identification field can take.
const IPID_MODULUS: u32 = 1 << 16;

/// A single observed value of the IP Identification field.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct Ipid(pub u16);

impl Ipid {
    /// distance travelled moving forward from `self` to `next`, with the
    /// counter wrapping past 65535 back to 0.
    pub fn forward_delta(self, next: Ipid) -> u16 {
        // explicit modulo-65536 arithmetic in a wider type, so the result
        // does not depend on native wrapping behaviour.
        ((u32::from(next.0) + IPID_MODULUS - u32::from(self.0)) % IPID_MODULUS) as u16
    }

    /// whether the transition from `self` to `next` is consistent with a
    /// shared global counter: the counter must have moved, and by no more
    /// than [`IPID_DIFF_THRESHOLD`]. A repeated value or a jump beyond the
    /// threshold disqualifies the pair.
    pub fn is_sequential_to(self, next: Ipid) -> bool {
        let delta = self.forward_delta(next);

        delta > 0 && delta <= IPID_DIFF_THRESHOLD
    }
}

impl From<u16> for Ipid {
    fn from(id: u16) -> Self {
        Ipid(id)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_forward_delta() {
        assert_eq!(Ipid(10).forward_delta(Ipid(14)), 4);
        assert_eq!(Ipid(7).forward_delta(Ipid(7)), 0);
        assert_eq!(Ipid(0).forward_delta(Ipid(65535)), 65535);

        // crossing the 65535 -> 0 boundary counts as forward movement
        assert_eq!(Ipid(65530).forward_delta(Ipid(0)), 6);
        assert_eq!(Ipid(65530).forward_delta(Ipid(3)), 9);
        assert_eq!(Ipid(65530).forward_delta(Ipid(4)), 10);
        assert_eq!(Ipid(65530).forward_delta(Ipid(5)), 11);
    }

    #[test]
    fn test_sequential_step() {
        assert!(Ipid(100).is_sequential_to(Ipid(101)));
        assert!(Ipid(100).is_sequential_to(Ipid(110)));
        assert!(!Ipid(100).is_sequential_to(Ipid(111)));
        assert!(!Ipid(100).is_sequential_to(Ipid(99)));
    }

    #[test]
    fn test_repeated_value_is_not_sequential() {
        for id in &[0u16, 1, 42, 65535] {
            assert!(!Ipid(*id).is_sequential_to(Ipid(*id)));
        }
    }

    #[test]
    fn test_sequential_across_wraparound() {
        assert!(Ipid(65530).is_sequential_to(Ipid(0)));
        assert!(Ipid(65530).is_sequential_to(Ipid(3)));
        assert!(Ipid(65530).is_sequential_to(Ipid(4)));
        assert!(!Ipid(65530).is_sequential_to(Ipid(5)));
        assert!(Ipid(65535).is_sequential_to(Ipid(9)));
    }
}
