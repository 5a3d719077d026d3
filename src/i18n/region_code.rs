pub struct RegionCode {}

impl RegionCode {
    /// Returns the region code string the wrapped library uses for the
    /// "unknown" region. It must never appear in a candidate list nor be
    /// returned from country resolution.
    pub fn unknown() -> &'static str {
        Self::zz()
    }

    pub fn zz() -> &'static str {
        "ZZ"
    }
}
