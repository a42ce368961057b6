use chrono::Datelike;
use serde::Serialize;
use tripdesk_shared::Booking;

const MONTHS: [&str; 12] = [
    "Jan", "Feb", "Mar", "Apr", "May", "Jun", "Jul", "Aug", "Sep", "Oct", "Nov", "Dec",
];

#[derive(Debug, Clone, Serialize, PartialEq, Eq)]
pub struct MonthlySpend {
    pub name: &'static str,
    pub spending: u64,
}

/// Spending per calendar month, as plotted on the dashboard.
/// Bookings from different years land in the same month bucket.
#[derive(Debug, Clone, Serialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct SpendingSummary {
    pub months: Vec<MonthlySpend>,
    pub total_spent: u64,
    pub booking_count: usize,
}

impl SpendingSummary {
    pub fn from_bookings(bookings: &[Booking]) -> Self {
        let mut months: Vec<MonthlySpend> = MONTHS
            .iter()
            .map(|&name| MonthlySpend { name, spending: 0 })
            .collect();

        for booking in bookings {
            let index = booking.date.month0() as usize;
            if let Some(bucket) = months.get_mut(index) {
                bucket.spending += u64::from(booking.total_amount);
            }
        }

        Self {
            total_spent: months.iter().map(|m| m.spending).sum(),
            booking_count: bookings.len(),
            months,
        }
    }

    pub fn spending_in(&self, month: &str) -> Option<u64> {
        self.months.iter().find(|m| m.name == month).map(|m| m.spending)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ledger::BookingLedger;
    use tripdesk_core::repository::BookingRepository;

    #[tokio::test]
    async fn test_demo_booking_lands_in_october() {
        let ledger = BookingLedger::with_demo_booking().unwrap();
        let bookings = ledger.list_by_user("u1").await.unwrap();

        let summary = SpendingSummary::from_bookings(&bookings);
        assert_eq!(summary.months.len(), 12);
        assert_eq!(summary.spending_in("Oct"), Some(450));
        assert_eq!(summary.spending_in("Jan"), Some(0));
        assert_eq!(summary.total_spent, 450);
        assert_eq!(summary.booking_count, 1);
    }

    #[test]
    fn test_empty_summary() {
        let summary = SpendingSummary::from_bookings(&[]);
        assert!(summary.months.iter().all(|m| m.spending == 0));
        assert_eq!(summary.total_spent, 0);
        assert_eq!(summary.spending_in("Foo"), None);
    }
}
