//! Aggregator
//!
//! Pure sums over a slice of expenses. Nothing here reads the clock; every
//! time-relative total takes `today` from the caller.

use chrono::{Datelike, Days, Month, NaiveDate};

use crate::models::Expense;

const MONTHS: [Month; 12] = [
    Month::January,
    Month::February,
    Month::March,
    Month::April,
    Month::May,
    Month::June,
    Month::July,
    Month::August,
    Month::September,
    Month::October,
    Month::November,
    Month::December,
];

fn sum_where(expenses: &[Expense], keep: impl Fn(&Expense) -> bool) -> f64 {
    expenses.iter().filter(|e| keep(e)).map(|e| e.amount).sum()
}

/// Sunday through Saturday of the week containing `today`
pub fn week_bounds(today: NaiveDate) -> (NaiveDate, NaiveDate) {
    let offset = u64::from(today.weekday().num_days_from_sunday());
    let start = today - Days::new(offset);
    (start, start + Days::new(6))
}

/// First and last day of the month containing `today`
pub fn month_bounds(today: NaiveDate) -> (NaiveDate, NaiveDate) {
    let start = today - Days::new(u64::from(today.day0()));
    let next_month = start
        .checked_add_months(chrono::Months::new(1))
        .unwrap_or(NaiveDate::MAX);
    (start, next_month.pred_opt().unwrap_or(next_month))
}

/// Total spent on `date`
pub fn total_for_date(expenses: &[Expense], date: NaiveDate) -> f64 {
    sum_where(expenses, |e| e.date == date)
}

/// Total spent in the Sunday-to-Saturday week containing `today`
pub fn total_for_week(expenses: &[Expense], today: NaiveDate) -> f64 {
    let (start, end) = week_bounds(today);
    sum_where(expenses, |e| e.date >= start && e.date <= end)
}

/// Total spent in the calendar month containing `today`
pub fn total_for_month(expenses: &[Expense], today: NaiveDate) -> f64 {
    let (start, end) = month_bounds(today);
    sum_where(expenses, |e| e.date >= start && e.date <= end)
}

/// Total of every record
pub fn grand_total(expenses: &[Expense]) -> f64 {
    expenses.iter().map(|e| e.amount).sum()
}

/// Budget left this month, never below 0
pub fn remaining_budget(budget: f64, month_total: f64) -> f64 {
    (budget - month_total).max(0.0)
}

/// Share of the budget spent as a percentage; 0 when there is no budget
///
/// Not capped at 100.
pub fn budget_usage_percent(budget: f64, month_total: f64) -> f64 {
    if budget <= 0.0 {
        0.0
    } else {
        month_total / budget * 100.0
    }
}

/// Totals per category, largest first
///
/// Equal totals keep the order their categories were first seen in.
pub fn by_category(expenses: &[Expense]) -> Vec<(String, f64)> {
    let mut totals: Vec<(String, f64)> = Vec::new();
    for expense in expenses {
        match totals.iter_mut().find(|(name, _)| *name == expense.category) {
            Some((_, total)) => *total += expense.amount,
            None => totals.push((expense.category.clone(), expense.amount)),
        }
    }
    totals.sort_by(|a, b| b.1.total_cmp(&a.1));
    totals
}

/// Totals per month of `year`, in calendar order
///
/// Months with no records in `year` are left out.
pub fn by_month(expenses: &[Expense], year: i32) -> Vec<(Month, f64)> {
    let mut totals: [Option<f64>; 12] = [None; 12];
    for expense in expenses.iter().filter(|e| e.date.year() == year) {
        let slot = &mut totals[expense.date.month0() as usize];
        *slot = Some(slot.unwrap_or(0.0) + expense.amount);
    }

    MONTHS
        .iter()
        .zip(totals)
        .filter_map(|(month, total)| total.map(|t| (*month, t)))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::ExpenseId;

    fn date(s: &str) -> NaiveDate {
        NaiveDate::parse_from_str(s, "%Y-%m-%d").unwrap()
    }

    fn expense(id: i64, day: &str, category: &str, amount: f64) -> Expense {
        Expense {
            id: ExpenseId::new(id),
            date: date(day),
            category: category.into(),
            amount,
            description: String::new(),
        }
    }

    fn create_test_expenses() -> Vec<Expense> {
        vec![
            expense(1, "2024-03-01", "Food", 100.0),
            expense(2, "2024-03-15", "Food", 50.0),
            expense(3, "2024-04-01", "Rent", 500.0),
        ]
    }

    #[test]
    fn test_month_total_and_categories() {
        let expenses = create_test_expenses();
        assert_eq!(total_for_month(&expenses, date("2024-03-20")), 150.0);
        assert_eq!(
            by_category(&expenses),
            vec![("Rent".to_string(), 500.0), ("Food".to_string(), 150.0)]
        );
    }

    #[test]
    fn test_budget_over_spent() {
        assert_eq!(remaining_budget(1000.0, 1200.0), 0.0);
        assert_eq!(budget_usage_percent(1000.0, 1200.0), 120.0);
        assert_eq!(remaining_budget(1000.0, 250.0), 750.0);
        assert_eq!(budget_usage_percent(0.0, 250.0), 0.0);
    }

    #[test]
    fn test_remaining_budget_never_negative() {
        for budget in [0.0, 1.0, 99.5, 1000.0] {
            for spent in [0.0, 0.5, 100.0, 5000.0] {
                assert!(remaining_budget(budget, spent) >= 0.0);
            }
        }
    }

    #[test]
    fn test_week_bounds_sunday_to_saturday() {
        // 2024-03-20 is a Wednesday
        assert_eq!(
            week_bounds(date("2024-03-20")),
            (date("2024-03-17"), date("2024-03-23"))
        );
        assert_eq!(
            week_bounds(date("2024-03-17")),
            (date("2024-03-17"), date("2024-03-23"))
        );
        assert_eq!(
            week_bounds(date("2024-03-23")),
            (date("2024-03-17"), date("2024-03-23"))
        );
    }

    #[test]
    fn test_week_total_crosses_month() {
        let expenses = vec![
            expense(1, "2024-02-25", "Food", 10.0),
            expense(2, "2024-03-02", "Food", 20.0),
            expense(3, "2024-03-03", "Food", 40.0),
        ];
        // Sun 2024-02-25 .. Sat 2024-03-02
        assert_eq!(total_for_week(&expenses, date("2024-02-28")), 30.0);
    }

    #[test]
    fn test_month_bounds() {
        assert_eq!(
            month_bounds(date("2024-02-10")),
            (date("2024-02-01"), date("2024-02-29"))
        );
        assert_eq!(
            month_bounds(date("2023-12-31")),
            (date("2023-12-01"), date("2023-12-31"))
        );
    }

    #[test]
    fn test_total_for_date() {
        let expenses = create_test_expenses();
        assert_eq!(total_for_date(&expenses, date("2024-03-15")), 50.0);
        assert_eq!(total_for_date(&expenses, date("2024-03-16")), 0.0);
    }

    #[test]
    fn test_by_category_ties_keep_first_seen() {
        let expenses = vec![
            expense(1, "2024-03-01", "Travel", 30.0),
            expense(2, "2024-03-01", "Bills", 30.0),
            expense(3, "2024-03-01", "Food", 45.0),
        ];
        let names: Vec<String> = by_category(&expenses).into_iter().map(|(n, _)| n).collect();
        assert_eq!(names, vec!["Food", "Travel", "Bills"]);
    }

    #[test]
    fn test_by_month_calendar_order() {
        let mut expenses = create_test_expenses();
        expenses.push(expense(4, "2024-01-09", "Bills", 80.0));
        expenses.push(expense(5, "2023-03-09", "Bills", 999.0));

        assert_eq!(
            by_month(&expenses, 2024),
            vec![
                (Month::January, 80.0),
                (Month::March, 150.0),
                (Month::April, 500.0)
            ]
        );
    }

    #[test]
    fn test_grand_total_matches_months() {
        let expenses = vec![
            expense(1, "2024-01-05", "Food", 12.5),
            expense(2, "2024-03-15", "Food", 50.0),
            expense(3, "2024-03-31", "Bills", 70.0),
            expense(4, "2024-12-01", "Rent", 500.0),
        ];
        let by_months: f64 = MONTHS
            .iter()
            .map(|m| {
                let day = NaiveDate::from_ymd_opt(2024, m.number_from_month(), 1).unwrap();
                total_for_month(&expenses, day)
            })
            .sum();
        assert_eq!(grand_total(&expenses), by_months);
        assert_eq!(
            by_month(&expenses, 2024).iter().map(|(_, t)| t).sum::<f64>(),
            grand_total(&expenses)
        );
    }
}
