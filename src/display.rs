use core::fmt;

use crate::ipid::Ipid;
use crate::Verdict;

impl fmt::Display for Ipid {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl fmt::Display for Verdict {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.write_str(match self {
            Verdict::Global => "global",
            Verdict::NonGlobal => "non-global",
            Verdict::InsufficientData => "error: not enough ipids",
            Verdict::NoInput => "error: no input",
        })
    }
}
