use std::collections::HashMap;

use log::trace;
use panel_order_shared_kernel::{DomainError, DomainResult, Inches, Quantity};
use serde::Serialize;

use crate::order::OrderLine;

/// Total panel count at one distinct length.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct PanelGroup {
    pub length: Inches,
    pub quantity: Quantity,
}

impl PanelGroup {
    fn new(length: Inches, quantity: Quantity) -> Self {
        Self { length, quantity }
    }

    /// Length of material covered by this group.
    pub fn total_length(&self) -> Option<Inches> {
        self.length.checked_mul_quantity(self.quantity)
    }
}

/// Grouped order, longest panels first, with the grand total length.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct OrderSummary {
    pub groups: Vec<PanelGroup>,
    pub total: Inches,
}

impl OrderSummary {
    pub fn is_empty(&self) -> bool {
        self.groups.is_empty()
    }

    pub fn panel_count(&self) -> u64 {
        self.groups
            .iter()
            .fold(0u64, |acc, g| acc.saturating_add(g.quantity.value()))
    }
}

/// Groups order lines by length and totals them.
pub struct Aggregator;

impl Aggregator {
    /// # Errors
    /// Returns [`DomainError::QuantityOverflow`] or [`DomainError::TotalOverflow`]
    /// when a sum leaves the supported range.
    pub fn aggregate(lines: &[OrderLine]) -> DomainResult<OrderSummary> {
        let map = Self::build_aggregation_map(lines)?;
        let groups = Self::map_to_sorted_groups(map);
        let total = Self::grand_total(&groups)?;
        Ok(OrderSummary { groups, total })
    }

    fn build_aggregation_map(lines: &[OrderLine]) -> DomainResult<HashMap<Inches, Quantity>> {
        let mut map: HashMap<Inches, Quantity> = HashMap::new();
        for line in lines {
            let entry = map.entry(line.length).or_default();
            *entry = entry
                .checked_add(line.quantity)
                .ok_or(DomainError::QuantityOverflow { length: line.length })?;
        }
        Ok(map)
    }

    fn map_to_sorted_groups(map: HashMap<Inches, Quantity>) -> Vec<PanelGroup> {
        let mut groups: Vec<PanelGroup> = map
            .into_iter()
            .map(|(length, quantity)| PanelGroup::new(length, quantity))
            .collect();
        // Keys are unique, so ordering by length alone is total.
        groups.sort_unstable_by(|a, b| b.length.cmp(&a.length));
        for group in &groups {
            trace!("group: {} @ {:#}", group.quantity, group.length);
        }
        groups
    }

    fn grand_total(groups: &[PanelGroup]) -> DomainResult<Inches> {
        groups.iter().try_fold(Inches::zero(), |acc, group| {
            group
                .total_length()
                .and_then(|len| acc.checked_add(len))
                .ok_or(DomainError::TotalOverflow)
        })
    }
}
