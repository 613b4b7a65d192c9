//! Fixed rosters and rotation lists the generator draws from.

use chrono::NaiveDate;

use shopgen_core::{LoyaltyTier, Money, OrderStatus, PaymentMethod, PaymentStatus};

/// Rows produced per table.
pub const ROW_COUNT: usize = 15;

pub const EMAIL_DOMAIN: &str = "shopperhub.com";

pub const USER_NAMES: [&str; ROW_COUNT] = [
    "Ava Patel",
    "Noah Smith",
    "Liam Chen",
    "Emma Lopez",
    "Mia Davis",
    "Elijah Lee",
    "Isabella Brown",
    "Sophia Wilson",
    "James Garcia",
    "Lucas Nguyen",
    "Amelia Clark",
    "Harper Miller",
    "Ethan Hernandez",
    "Oliver Johnson",
    "Charlotte Martinez",
];

/// Product fixture: name, category and unit price.
#[derive(Debug, Clone, Copy)]
pub struct ProductFixture {
    pub name: &'static str,
    pub category: &'static str,
    pub price: Money,
}

const fn product(name: &'static str, category: &'static str, cents: u64) -> ProductFixture {
    ProductFixture {
        name,
        category,
        price: Money::from_cents(cents),
    }
}

pub const PRODUCTS: [ProductFixture; ROW_COUNT] = [
    product("Smartwatch", "Wearables", 14999),
    product("Noise Cancelling Headphones", "Audio", 19950),
    product("4K Monitor", "Displays", 32900),
    product("Mechanical Keyboard", "Peripherals", 11900),
    product("Gaming Mouse", "Peripherals", 5900),
    product("Wireless Charger", "Accessories", 3999),
    product("Portable SSD", "Storage", 10950),
    product("Bluetooth Speaker", "Audio", 8900),
    product("Fitness Tracker", "Wearables", 9900),
    product("Smart Home Hub", "Smart Home", 12900),
    product("Action Camera", "Cameras", 24900),
    product("Drone Mini", "Cameras", 39900),
    product("E-reader", "Tablets", 13900),
    product("USB-C Hub", "Accessories", 4950),
    product("Noise Sensor", "Smart Home", 7900),
];

pub const REVIEW_COMMENTS: [&str; 5] = [
    "Great value for the price.",
    "Fast shipping and solid quality.",
    "Met my expectations.",
    "Would definitely recommend.",
    "Packaging could be better, product works fine.",
];

pub const LOYALTY_TIERS: [LoyaltyTier; 3] =
    [LoyaltyTier::Bronze, LoyaltyTier::Silver, LoyaltyTier::Gold];

pub const ORDER_STATUSES: [OrderStatus; 3] = [
    OrderStatus::Processing,
    OrderStatus::Shipped,
    OrderStatus::Delivered,
];

pub const PAYMENT_METHODS: [PaymentMethod; 3] = [
    PaymentMethod::CreditCard,
    PaymentMethod::PayPal,
    PaymentMethod::GiftCard,
];

// Two of every three payments are completed.
pub const PAYMENT_STATUSES: [PaymentStatus; 3] = [
    PaymentStatus::Completed,
    PaymentStatus::Completed,
    PaymentStatus::Pending,
];

pub const QUANTITY_RANGE: std::ops::RangeInclusive<u32> = 1..=4;
pub const RATING_RANGE: std::ops::RangeInclusive<u8> = 3..=5;

/// Days between consecutive user join dates.
pub const JOIN_DATE_STEP_DAYS: u64 = 3;
pub const IN_STOCK_BASE: u32 = 50;
pub const IN_STOCK_STEP: u32 = 3;

pub fn users_base_date() -> NaiveDate {
    NaiveDate::from_ymd_opt(2024, 1, 1).unwrap_or_default()
}

pub fn orders_base_date() -> NaiveDate {
    NaiveDate::from_ymd_opt(2024, 2, 1).unwrap_or_default()
}

pub fn reviews_base_date() -> NaiveDate {
    NaiveDate::from_ymd_opt(2024, 3, 1).unwrap_or_default()
}

/// Pick the entry for row `index`, rotating through `values`.
pub fn cycle<T: Copy>(values: &[T], index: usize) -> T {
    values[index % values.len()]
}

/// Zero-padded identifier for the 1-based row `position`.
pub fn record_id(prefix: &str, position: usize) -> String {
    format!("{prefix}{position:03}")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn cycle_rotates_round_robin() {
        let picked: Vec<_> = (0..5).map(|idx| cycle(&LOYALTY_TIERS, idx)).collect();
        assert_eq!(
            picked,
            vec![
                LoyaltyTier::Bronze,
                LoyaltyTier::Silver,
                LoyaltyTier::Gold,
                LoyaltyTier::Bronze,
                LoyaltyTier::Silver,
            ]
        );
    }

    #[test]
    fn record_ids_are_zero_padded() {
        assert_eq!(record_id("U", 1), "U001");
        assert_eq!(record_id("PM", 15), "PM015");
    }

    #[test]
    fn fixture_rosters_are_unique() {
        let mut names: Vec<_> = USER_NAMES.to_vec();
        names.sort_unstable();
        names.dedup();
        assert_eq!(names.len(), ROW_COUNT);

        let mut products: Vec<_> = PRODUCTS.iter().map(|fixture| fixture.name).collect();
        products.sort_unstable();
        products.dedup();
        assert_eq!(products.len(), ROW_COUNT);
    }
}
