// crates/shared-kernel/tests/quantity_add.rs
use panel_order_shared_kernel::Quantity;

#[test]
fn checked_add_accumulates() {
    let total = Quantity::from(2).checked_add(Quantity::from(3));
    assert_eq!(total, Some(Quantity::from(5)));
}

#[test]
fn checked_add_reports_overflow() {
    assert_eq!(Quantity::from(u64::MAX).checked_add(Quantity::from(1)), None);
}

#[test]
fn default_is_zero() {
    assert!(Quantity::default().is_zero());
    assert_eq!(Quantity::new(7), 7u64);
}
