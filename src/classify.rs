use crate::ipid::Ipid;
use crate::Verdict;

/// Single-pass scan over an observed IPID sequence.
///
/// Feed values in arrival order with [`observe`]; the classifier keeps only
/// the previously seen value and fails the run the instant one pairwise step
/// is inconsistent with a global counter. [`finish`] turns end-of-input into
/// the final verdict.
///
/// [`observe`]: Classifier::observe
/// [`finish`]: Classifier::finish
#[derive(Debug)]
pub struct Classifier {
    state: State,
}

#[derive(Debug)]
enum State {
    Start,
    HaveOne(Ipid),
    Accumulating(Ipid),
    Done(Verdict),
}

impl Default for Classifier {
    fn default() -> Self {
        Classifier::new()
    }
}

impl Classifier {
    pub fn new() -> Self {
        Classifier {
            state: State::Start,
        }
    }

    /// Feed the next observed value. Returns the verdict as soon as the
    /// sequence is known to be non-global; `None` means keep feeding.
    /// Once a verdict is reached further values do not change it.
    pub fn observe(&mut self, ipid: Ipid) -> Option<Verdict> {
        match self.state {
            State::Start => {
                self.state = State::HaveOne(ipid);

                None
            }
            State::HaveOne(prev) | State::Accumulating(prev) => {
                if prev.is_sequential_to(ipid) {
                    trace!("{} -> {}: delta {}", prev.0, ipid.0, prev.forward_delta(ipid));

                    self.state = State::Accumulating(ipid);

                    None
                } else {
                    debug!(
                        "{} -> {} breaks the run: delta {}",
                        prev.0,
                        ipid.0,
                        prev.forward_delta(ipid)
                    );

                    self.state = State::Done(Verdict::NonGlobal);

                    Some(Verdict::NonGlobal)
                }
            }
            State::Done(verdict) => Some(verdict),
        }
    }

    /// Verdict at end of input. Fewer than two observed values cannot
    /// confirm a sequential relationship and yield the corresponding
    /// error verdict instead.
    pub fn finish(self) -> Verdict {
        match self.state {
            State::Start => Verdict::NoInput,
            State::HaveOne(_) => Verdict::InsufficientData,
            State::Accumulating(_) => Verdict::Global,
            State::Done(verdict) => verdict,
        }
    }
}

/// Classify a whole sequence, stopping at the first non-sequential pair
/// without consuming the rest of the iterator.
pub fn classify<I>(ipids: I) -> Verdict
where
    I: IntoIterator<Item = Ipid>,
{
    let mut classifier = Classifier::new();

    for ipid in ipids {
        if let Some(verdict) = classifier.observe(ipid) {
            return verdict;
        }
    }

    classifier.finish()
}
