use std::collections::{BTreeMap, BTreeSet, HashMap};

use serde::{Deserialize, Serialize};

use shopgen_core::Dataset;

use crate::fixtures::RATING_RANGE;

/// Structured dataset violation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Violation {
    pub code: String,
    pub path: String,
    pub message: String,
}

impl Violation {
    fn new(code: &str, path: String, message: String) -> Self {
        Self {
            code: code.to_string(),
            path,
            message,
        }
    }
}

/// Check keys, references and derived amounts of an in-memory dataset.
///
/// Violations come back sorted by path then code, so the result is stable.
pub fn check_dataset(dataset: &Dataset) -> Vec<Violation> {
    let mut violations = Vec::new();

    check_unique("users", dataset.users.iter().map(|u| u.user_id.as_str()), &mut violations);
    check_unique(
        "products",
        dataset.products.iter().map(|p| p.product_id.as_str()),
        &mut violations,
    );
    check_unique("orders", dataset.orders.iter().map(|o| o.order_id.as_str()), &mut violations);
    check_unique(
        "reviews",
        dataset.reviews.iter().map(|r| r.review_id.as_str()),
        &mut violations,
    );
    check_unique(
        "payments",
        dataset.payments.iter().map(|p| p.payment_id.as_str()),
        &mut violations,
    );

    let users: BTreeSet<&str> = dataset.users.iter().map(|u| u.user_id.as_str()).collect();
    let prices: HashMap<&str, _> = dataset
        .products
        .iter()
        .map(|p| (p.product_id.as_str(), p.price))
        .collect();
    let totals: HashMap<&str, _> = dataset
        .orders
        .iter()
        .map(|o| (o.order_id.as_str(), o.order_total))
        .collect();

    for order in &dataset.orders {
        let path = format!("orders.{}", order.order_id);
        if !users.contains(order.user_id.as_str()) {
            violations.push(Violation::new(
                "fk",
                path.clone(),
                format!("unknown user_id '{}'", order.user_id),
            ));
        }
        match prices.get(order.product_id.as_str()) {
            Some(price) => {
                let expected = price.times(order.quantity);
                if expected != order.order_total {
                    violations.push(Violation::new(
                        "order_total",
                        path,
                        format!(
                            "order_total {} != {} x {} = {}",
                            order.order_total, order.quantity, price, expected
                        ),
                    ));
                }
            }
            None => violations.push(Violation::new(
                "fk",
                path,
                format!("unknown product_id '{}'", order.product_id),
            )),
        }
    }

    for review in &dataset.reviews {
        let path = format!("reviews.{}", review.review_id);
        if !totals.contains_key(review.order_id.as_str()) {
            violations.push(Violation::new(
                "fk",
                path.clone(),
                format!("unknown order_id '{}'", review.order_id),
            ));
        }
        if !RATING_RANGE.contains(&review.rating) {
            violations.push(Violation::new(
                "rating_range",
                path,
                format!("rating {} outside {:?}", review.rating, RATING_RANGE),
            ));
        }
    }

    for payment in &dataset.payments {
        let path = format!("payments.{}", payment.payment_id);
        match totals.get(payment.order_id.as_str()) {
            Some(total) if *total != payment.amount => violations.push(Violation::new(
                "payment_amount",
                path,
                format!("amount {} != order_total {}", payment.amount, total),
            )),
            Some(_) => {}
            None => violations.push(Violation::new(
                "fk",
                path,
                format!("unknown order_id '{}'", payment.order_id),
            )),
        }
    }

    violations.sort_by(|a, b| (&a.path, &a.code).cmp(&(&b.path, &b.code)));
    violations
}

fn check_unique<'a>(
    table: &str,
    ids: impl Iterator<Item = &'a str>,
    violations: &mut Vec<Violation>,
) {
    let mut counts: BTreeMap<&str, usize> = BTreeMap::new();
    for id in ids {
        *counts.entry(id).or_insert(0) += 1;
    }
    for (id, count) in counts {
        if count > 1 {
            violations.push(Violation::new(
                "pk",
                format!("{table}.{id}"),
                format!("id appears {count} times"),
            ));
        }
    }
}
