use crate::Money;

/// Outcome of a withdraw request. None of these are errors; a declined withdrawal leaves the
/// balance untouched.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Withdrawal {
    Debited,
    /// Base accounts only: the balance was zeroed and the shortfall deposited back
    Recapitalized { shortfall: Money },
    Declined,
}

impl Withdrawal {
    pub fn is_declined(&self) -> bool {
        return matches!(self, Withdrawal::Declined);
    }
}
