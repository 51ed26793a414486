/// Fraction of the bracket kept by each shrink: `1/φ = (√5 − 1) / 2`.
const RATIO: f64 = 0.618_033_988_749_894_9;

/// Step sizes `[lo, hi]` known to contain a line minimum.
///
/// The probes `t1 < t2` sit at `1 − 1/φ` and `1/φ` of the way from `lo` to
/// `hi`. Dropping either end turns the surviving probe into the other probe
/// of the narrower bracket.
#[derive(Debug, Clone, Copy)]
pub(super) struct StepBracket {
    pub(super) lo: f64,
    pub(super) hi: f64,
    pub(super) t1: f64,
    pub(super) t2: f64,
}

impl StepBracket {
    /// Steps from zero up to `hi`.
    pub(super) fn new(hi: f64) -> Self {
        Self {
            lo: 0.0,
            hi,
            t1: (1.0 - RATIO) * hi,
            t2: RATIO * hi,
        }
    }

    pub(super) fn width(&self) -> f64 {
        self.hi - self.lo
    }

    pub(super) fn midpoint(&self) -> f64 {
        0.5 * (self.lo + self.hi)
    }

    /// Keeps `[lo, t2]`: `t1` moves up to `t2` and a fresh `t1` is placed.
    pub(super) fn keep_lower(&mut self) {
        self.hi = self.t2;
        self.t2 = self.t1;
        self.t1 = self.hi - RATIO * self.width();
    }

    /// Keeps `[t1, hi]`: `t2` moves down to `t1` and a fresh `t2` is placed.
    pub(super) fn keep_upper(&mut self) {
        self.lo = self.t1;
        self.t1 = self.t2;
        self.t2 = self.lo + RATIO * self.width();
    }
}
