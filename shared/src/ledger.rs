//! Balance calculator
//!
//! Derives what each worker has earned, what they were advanced and what is
//! still due, from immutable record collections. Everything here is pure: no
//! I/O, no interior state, inputs are only borrowed.
//!
//! Balances cover a worker's whole history. There is no pay period or
//! settlement marker, so an advance reduces the lifetime balance for good.

use rust_decimal::Decimal;
use serde::Serialize;

use crate::models::{Advance, Harvest, WorkTask, Worker, WorkerStatus};
use crate::types::WorkerId;

/// Earnings and deductions of a single worker
#[derive(Debug, Clone, Copy, Serialize, PartialEq, Eq, Default)]
pub struct Balance {
    /// Σ weight × pay rate, unrounded
    pub earned_from_harvests: Decimal,
    /// Σ task amounts, unrounded
    pub earned_from_tasks: Decimal,
    /// Σ advances paid to the worker, unrounded
    pub advanced: Decimal,
    /// Net amount owed, rounded to the whole franc
    pub due: Decimal,
}

impl Balance {
    /// Total earnings before deductions, unrounded
    pub fn earned(&self) -> Decimal {
        self.earned_from_harvests + self.earned_from_tasks
    }
}

/// One line of the roster report
#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct RosterRow<'a> {
    pub worker: &'a Worker,
    #[serde(flatten)]
    pub balance: Balance,
}

/// Round to the nearest whole unit, halves going up (`1049.5` → `1050`,
/// `-0.5` → `0`).
pub fn round_half_up(amount: Decimal) -> Decimal {
    (amount + Decimal::new(5, 1)).floor().normalize()
}

/// Net amount due to `worker_id`.
///
/// Unknown workers and workers without records are owed `0`.
pub fn balance_for(
    worker_id: WorkerId,
    harvests: &[Harvest],
    tasks: &[WorkTask],
    advances: &[Advance],
) -> Decimal {
    balance_breakdown(worker_id, harvests, tasks, advances).due
}

/// Full balance of `worker_id` over records that may belong to anyone.
///
/// Contractor advances never count against a worker. Only the final `due`
/// is rounded.
pub fn balance_breakdown(
    worker_id: WorkerId,
    harvests: &[Harvest],
    tasks: &[WorkTask],
    advances: &[Advance],
) -> Balance {
    let earned_from_harvests: Decimal = harvests
        .iter()
        .filter(|h| h.worker_id == worker_id)
        .map(Harvest::value)
        .sum();

    let earned_from_tasks: Decimal = tasks
        .iter()
        .filter(|t| t.worker_id == worker_id)
        .map(|t| t.amount)
        .sum();

    let advanced: Decimal = advances
        .iter()
        .filter(|a| a.is_for_worker(worker_id))
        .map(|a| a.amount)
        .sum();

    Balance {
        earned_from_harvests,
        earned_from_tasks,
        advanced,
        due: round_half_up(earned_from_harvests + earned_from_tasks - advanced),
    }
}

/// One row per worker, in roster order
pub fn roster_report<'a>(
    workers: &'a [Worker],
    harvests: &[Harvest],
    tasks: &[WorkTask],
    advances: &[Advance],
) -> Vec<RosterRow<'a>> {
    workers
        .iter()
        .map(|worker| RosterRow {
            worker,
            balance: balance_breakdown(worker.id, harvests, tasks, advances),
        })
        .collect()
}

/// Totals shown above the roster on the dashboard
#[derive(Debug, Clone, Serialize, PartialEq, Eq, Default)]
pub struct RosterSummary {
    pub worker_count: usize,
    pub active_worker_count: usize,
    pub total_earned: Decimal,
    pub total_advanced: Decimal,
    /// Sum of the rounded per-worker dues, so it matches the export
    pub total_due: Decimal,
}

impl RosterSummary {
    pub fn from_rows(rows: &[RosterRow<'_>]) -> Self {
        rows.iter().fold(Self::default(), |mut acc, row| {
            acc.worker_count += 1;
            if row.worker.status == WorkerStatus::Active {
                acc.active_worker_count += 1;
            }
            acc.total_earned += row.balance.earned();
            acc.total_advanced += row.balance.advanced;
            acc.total_due += row.balance.due;
            acc
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{AdvanceTarget, CropType, ExpenseCategory};
    use chrono::NaiveDate;
    use std::str::FromStr;
    use uuid::Uuid;

    fn dec(s: &str) -> Decimal {
        Decimal::from_str(s).unwrap()
    }

    fn date() -> NaiveDate {
        NaiveDate::from_ymd_opt(2024, 5, 2).unwrap()
    }

    fn worker(name: &str, status: WorkerStatus) -> Worker {
        Worker {
            id: Uuid::new_v4(),
            name: name.to_string(),
            status,
            category: CropType::Hevea,
            phone: None,
            notes: None,
            user_id: None,
            created_at: None,
        }
    }

    fn harvest(worker_id: WorkerId, weight: &str, rate: &str) -> Harvest {
        Harvest {
            id: Uuid::new_v4(),
            worker_id,
            date: date(),
            weight: dec(weight),
            pay_rate: dec(rate),
            crop: CropType::Hevea,
        }
    }

    fn task(worker_id: WorkerId, amount: &str) -> WorkTask {
        WorkTask {
            id: Uuid::new_v4(),
            worker_id,
            date: date(),
            description: "Désherbage".to_string(),
            amount: dec(amount),
        }
    }

    fn advance(target: AdvanceTarget, amount: &str) -> Advance {
        Advance {
            id: Uuid::new_v4(),
            target,
            date: date(),
            amount: dec(amount),
            category: ExpenseCategory::Advance,
            payment_method: None,
            notes: None,
        }
    }

    #[test]
    fn test_empty_collections_owe_nothing() {
        assert_eq!(balance_for(Uuid::new_v4(), &[], &[], &[]), Decimal::ZERO);
    }

    #[test]
    fn test_reference_balance() {
        let w = Uuid::new_v4();
        let due = balance_for(
            w,
            &[harvest(w, "10", "75")],
            &[task(w, "500")],
            &[advance(AdvanceTarget::Worker(w), "200")],
        );
        assert_eq!(due, Decimal::from(1050));
    }

    #[test]
    fn test_breakdown_keeps_raw_sums() {
        let w = Uuid::new_v4();
        let balance = balance_breakdown(
            w,
            &[harvest(w, "12.5", "75"), harvest(w, "0.3", "75")],
            &[task(w, "500")],
            &[advance(AdvanceTarget::Worker(w), "200")],
        );
        assert_eq!(balance.earned_from_harvests, dec("960"));
        assert_eq!(balance.earned_from_tasks, dec("500"));
        assert_eq!(balance.advanced, dec("200"));
        assert_eq!(balance.due, dec("1260"));
    }

    #[test]
    fn test_records_of_other_workers_are_ignored() {
        let w = Uuid::new_v4();
        let other = Uuid::new_v4();
        let due = balance_for(
            w,
            &[harvest(other, "100", "75"), harvest(w, "2", "75")],
            &[task(other, "1000")],
            &[advance(AdvanceTarget::Worker(other), "50")],
        );
        assert_eq!(due, Decimal::from(150));
    }

    #[test]
    fn test_contractor_advances_are_ignored() {
        let w = Uuid::new_v4();
        // Same id on purpose: a contractor target must never match a worker.
        let due = balance_for(
            w,
            &[harvest(w, "10", "75")],
            &[],
            &[advance(AdvanceTarget::Contractor(w), "700")],
        );
        assert_eq!(due, Decimal::from(750));
    }

    #[test]
    fn test_round_half_up() {
        assert_eq!(round_half_up(dec("1049.5")), Decimal::from(1050));
        assert_eq!(round_half_up(dec("1049.4")), Decimal::from(1049));
        assert_eq!(round_half_up(dec("1049.51")), Decimal::from(1050));
        assert_eq!(round_half_up(dec("-1.5")), Decimal::from(-1));
        assert_eq!(round_half_up(dec("-1.6")), Decimal::from(-2));
    }

    #[test]
    fn test_round_never_yields_negative_zero() {
        let rounded = round_half_up(dec("-0.5"));
        assert_eq!(rounded, Decimal::ZERO);
        assert_eq!(rounded.to_string(), "0");
        assert_eq!(round_half_up(dec("-0.2")).to_string(), "0");
    }

    #[test]
    fn test_only_the_final_total_is_rounded() {
        let w = Uuid::new_v4();
        // Each harvest is worth 0.4; rounding them one by one would give 0.
        let harvests: Vec<Harvest> = (0..5).map(|_| harvest(w, "0.4", "1")).collect();
        assert_eq!(balance_for(w, &harvests, &[], &[]), Decimal::from(2));
    }

    #[test]
    fn test_negative_balance_when_overadvanced() {
        let w = Uuid::new_v4();
        let due = balance_for(
            w,
            &[],
            &[task(w, "300")],
            &[advance(AdvanceTarget::Worker(w), "500")],
        );
        assert_eq!(due, Decimal::from(-200));
    }

    #[test]
    fn test_roster_report_keeps_roster_order() {
        let workers = vec![
            worker("Yao", WorkerStatus::Active),
            worker("Adjoua", WorkerStatus::Departed),
            worker("Koffi", WorkerStatus::Active),
        ];
        let harvests = vec![harvest(workers[2].id, "4", "75")];
        let rows = roster_report(&workers, &harvests, &[], &[]);

        let names: Vec<&str> = rows.iter().map(|r| r.worker.name.as_str()).collect();
        assert_eq!(names, vec!["Yao", "Adjoua", "Koffi"]);
        assert_eq!(rows[2].balance.due, Decimal::from(300));
    }

    #[test]
    fn test_worker_without_records_has_zero_row() {
        let workers = vec![worker("Awa", WorkerStatus::Active)];
        let rows = roster_report(&workers, &[], &[], &[]);
        assert_eq!(rows.len(), 1);
        assert_eq!(rows[0].balance, Balance::default());
    }

    #[test]
    fn test_departed_worker_keeps_balance() {
        let workers = vec![worker("Adjoua", WorkerStatus::Departed)];
        let tasks = vec![task(workers[0].id, "1200")];
        let rows = roster_report(&workers, &[], &tasks, &[]);
        assert_eq!(rows[0].balance.due, Decimal::from(1200));
    }

    #[test]
    fn test_summary_totals() {
        let workers = vec![
            worker("Yao", WorkerStatus::Active),
            worker("Adjoua", WorkerStatus::Departed),
        ];
        let harvests = vec![harvest(workers[0].id, "10.01", "50")];
        let tasks = vec![task(workers[1].id, "250")];
        let advances = vec![
            advance(AdvanceTarget::Worker(workers[0].id), "100"),
            advance(AdvanceTarget::Contractor(Uuid::new_v4()), "9000"),
        ];
        let rows = roster_report(&workers, &harvests, &tasks, &advances);
        let summary = RosterSummary::from_rows(&rows);

        assert_eq!(summary.worker_count, 2);
        assert_eq!(summary.active_worker_count, 1);
        assert_eq!(summary.total_earned, dec("750.5"));
        assert_eq!(summary.total_advanced, dec("100"));
        // 400.5 rounds to 401, plus 250
        assert_eq!(summary.total_due, dec("651"));
    }

    mod rounding_properties {
        use super::*;
        use proptest::prelude::*;

        proptest! {
            #![proptest_config(ProptestConfig::with_cases(200))]

            /// Rounding lands on a whole franc no more than half a franc away
            #[test]
            fn test_round_half_up_is_nearest_franc(cents in -10_000_000i64..10_000_000) {
                let amount = Decimal::new(cents, 2);
                let rounded = round_half_up(amount);

                prop_assert_eq!(rounded.fract(), Decimal::ZERO);
                prop_assert!((amount - rounded).abs() <= Decimal::new(5, 1));
            }

            /// Exact halves always go up, negatives included
            #[test]
            fn test_round_half_up_ties_go_up(francs in -100_000i64..100_000) {
                let half = Decimal::from(francs) + Decimal::new(5, 1);
                prop_assert_eq!(round_half_up(half), Decimal::from(francs + 1));
            }
        }
    }
}
