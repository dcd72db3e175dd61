/// Weekly hours above this threshold are overtime.
pub const WEEKLY_REGULAR_CAP: f64 = 40.0;

#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct HoursSplit {
    pub total: f64,
    pub regular: f64,
    pub overtime: f64,
}

impl HoursSplit {
    /// `min(total, 40)` regular, the rest overtime.
    pub fn weekly(total: f64) -> Self {
        Self {
            total,
            regular: total.min(WEEKLY_REGULAR_CAP),
            overtime: (total - WEEKLY_REGULAR_CAP).max(0.0),
        }
    }

    pub fn add(&mut self, other: HoursSplit) {
        self.total += other.total;
        self.regular += other.regular;
        self.overtime += other.overtime;
    }

    /// Replace overtime with an authoritative figure; total is kept.
    pub fn reconciled(self, overtime: f64) -> Self {
        Self {
            total: self.total,
            regular: self.total - overtime,
            overtime,
        }
    }
}
