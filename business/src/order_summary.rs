//! Order totals shown on the dashboard.

use turbo_states::impl_state;

/// Amounts are whole rupees.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct OrderSummary {
    pub subtotal: u64,
    pub coupon_discount: u64,
    pub shipping_fee: u64,
}

impl_state!(OrderSummary);

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum SummaryMode {
    Small,
    #[default]
    Medium,
}

impl OrderSummary {
    pub fn new(subtotal: u64, coupon_discount: u64, shipping_fee: u64) -> Self {
        Self {
            subtotal,
            coupon_discount,
            shipping_fee,
        }
    }

    /// `subtotal - discount + shipping`, never below zero.
    pub fn grand_total(&self) -> u64 {
        self.subtotal
            .saturating_sub(self.coupon_discount)
            .saturating_add(self.shipping_fee)
    }

    /// Label/amount pairs in display order; the last one is the grand total.
    pub fn rows(&self) -> [(&'static str, String); 4] {
        [
            ("Subtotal", format_rupees(self.subtotal)),
            ("Coupon Discount", format_rupees(self.coupon_discount)),
            ("Shipping Fee", format_rupees(self.shipping_fee)),
            ("Grand Total", format_rupees(self.grand_total())),
        ]
    }
}

/// `Rs. 1,23,456`: last three digits, then groups of two.
pub fn format_rupees(amount: u64) -> String {
    let digits = amount.to_string();
    if digits.len() <= 3 {
        return format!("Rs. {digits}");
    }

    let (head, tail) = digits.split_at(digits.len() - 3);
    let mut groups = Vec::new();
    let mut rest = head;
    while rest.len() > 2 {
        let (more, group) = rest.split_at(rest.len() - 2);
        groups.push(group);
        rest = more;
    }
    groups.push(rest);
    groups.reverse();

    format!("Rs. {},{tail}", groups.join(","))
}
