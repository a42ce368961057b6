//! Demo catalog loaded at startup.

use chrono::{DateTime, NaiveDate, Utc};
use tripdesk_shared::{Flight, Hotel, User, UserRole};

fn utc(year: i32, month: u32, day: u32, hour: u32, minute: u32) -> DateTime<Utc> {
    NaiveDate::from_ymd_opt(year, month, day)
        .and_then(|date| date.and_hms_opt(hour, minute, 0))
        .map(|naive| naive.and_utc())
        .unwrap_or_default()
}

#[allow(clippy::too_many_arguments)]
fn flight(
    id: &str,
    airline: &str,
    flight_number: &str,
    origin: &str,
    destination: &str,
    depart_time: DateTime<Utc>,
    arrive_time: DateTime<Utc>,
    duration: &str,
    price: u32,
    seats_available: u32,
) -> Flight {
    Flight {
        id: id.to_string(),
        airline: airline.to_string(),
        flight_number: flight_number.to_string(),
        origin: origin.to_string(),
        destination: destination.to_string(),
        depart_time,
        arrive_time,
        duration: duration.to_string(),
        price,
        seats_available,
    }
}

fn hotel(id: &str, name: &str, location: &str, rating: f64, price_per_night: u32, image: u32, amenities: &[&str]) -> Hotel {
    Hotel {
        id: id.to_string(),
        name: name.to_string(),
        location: location.to_string(),
        rating,
        price_per_night,
        image_url: format!("https://picsum.photos/seed/hotel{}/400/300", image),
        amenities: amenities.iter().map(|a| a.to_string()).collect(),
    }
}

pub fn flights() -> Vec<Flight> {
    vec![
        flight("f1", "SkyHigh Airways", "SH-101", "New York (JFK)", "London (LHR)",
            utc(2023, 12, 15, 10, 0), utc(2023, 12, 15, 22, 0), "7h 00m", 450, 12),
        flight("f2", "Oceanic Airlines", "OA-815", "Los Angeles (LAX)", "Sydney (SYD)",
            utc(2023, 12, 16, 14, 0), utc(2023, 12, 18, 6, 0), "15h 00m", 1200, 5),
        flight("f3", "British Airways", "BA-112", "London (LHR)", "New York (JFK)",
            utc(2023, 12, 20, 8, 0), utc(2023, 12, 20, 11, 0), "8h 00m", 520, 20),
        flight("f4", "Emirates", "EK-202", "New York (JFK)", "Dubai (DXB)",
            utc(2023, 12, 18, 23, 0), utc(2023, 12, 19, 20, 0), "12h 30m", 950, 8),
        flight("f5", "Delta", "DL-44", "New York (JFK)", "Paris (CDG)",
            utc(2023, 12, 15, 18, 0), utc(2023, 12, 16, 7, 30), "7h 30m", 680, 15),
    ]
}

pub fn hotels() -> Vec<Hotel> {
    vec![
        hotel("h1", "Grand Plaza Hotel", "New York", 4.8, 350, 1, &["Pool", "Spa", "Gym", "Free WiFi"]),
        hotel("h2", "Seaside Resort", "Sydney", 4.5, 220, 2, &["Beach Access", "Breakfast Included", "Bar"]),
        hotel("h3", "The Royal London", "London", 4.2, 180, 3, &["City View", "Concierge", "Restaurant"]),
        hotel("h4", "Desert Oasis", "Dubai", 4.9, 500, 4, &["Luxury", "Private Pool", "Butler Service"]),
        hotel("h5", "Eiffel Tower View", "Paris", 4.6, 290, 5, &["Romantic", "Near Metro", "Bathtub"]),
    ]
}

pub fn users() -> Vec<User> {
    vec![
        User {
            id: "u1".to_string(),
            name: "Demo User".to_string(),
            email: "user@demo.com".to_string(),
            role: UserRole::User,
            avatar_url: Some("https://picsum.photos/seed/user1/100/100".to_string()),
        },
        User {
            id: "u2".to_string(),
            name: "Admin User".to_string(),
            email: "admin@demo.com".to_string(),
            role: UserRole::Admin,
            avatar_url: Some("https://picsum.photos/seed/admin1/100/100".to_string()),
        },
    ]
}

/// Date of the booking the demo ledger starts with (`b1`, user `u1`, flight `f1`)
pub fn demo_booking_date() -> DateTime<Utc> {
    utc(2023, 10, 10, 0, 0)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_seed_timestamps_are_valid() {
        let first = &flights()[0];
        assert_eq!(first.depart_time.to_rfc3339(), "2023-12-15T10:00:00+00:00");
        assert_eq!(flights()[4].arrive_time.to_rfc3339(), "2023-12-16T07:30:00+00:00");
        assert_ne!(demo_booking_date(), DateTime::<Utc>::default());
    }

    #[test]
    fn test_seed_sizes() {
        assert_eq!(flights().len(), 5);
        assert_eq!(hotels().len(), 5);
        assert_eq!(users().len(), 2);
        assert_eq!(hotels()[0].image_url, "https://picsum.photos/seed/hotel1/400/300");
    }
}
