//! Interactive line-based console over the [`Service`].

pub mod line;
pub mod view;

use std::{
    fmt,
    io::{self, BufRead, Write},
    iter,
};

use itertools::Itertools as _;
use service::{
    command::{
        CollectFullRent, CollectPartialPayment, CollectWithLateFee,
        TerminateLease,
    },
    query::{self, report},
    Command as _, Query as _, Service,
};
use tracing as log;

use crate::{AsError, Error};

pub use self::{line::Line, view::View};

/// Banner printed once the console starts.
const BANNER: &str = "--- Interactive Console (type 'exit' to quit) ---";

/// Runs the console reading [`Line`]s from the `input` and writing their
/// results to the `output`, until `exit` is entered or the `input` ends.
///
/// Failed [`Line`]s are reported to the `output` and never stop the console.
///
/// # Errors
///
/// If reading the `input` or writing the `output` fails.
pub fn run<R, W>(
    service: &mut Service,
    input: R,
    mut output: W,
    prompt: &str,
) -> io::Result<()>
where
    R: BufRead,
    W: Write,
{
    writeln!(output, "{BANNER}")?;
    writeln!(output, "{}", Line::USAGE)?;

    let mut lines = input.lines();
    loop {
        write!(output, "{prompt}")?;
        output.flush()?;

        let Some(line) = lines.next().transpose()? else {
            break;
        };
        let line = line.trim();
        if line.is_empty() {
            continue;
        }

        match line.parse().and_then(|l| execute(service, l)) {
            Ok(Some(text)) => writeln!(output, "{text}")?,
            Ok(None) => break,
            Err(e) => {
                log::debug!(line, "failed to execute: {e}");
                writeln!(output, "Error: [{}] {}", e.code, e.message)?;
            }
        }
    }

    Ok(())
}

/// Executes the provided [`Line`] against the [`Service`].
///
/// Returns the text to print, or [`None`] if the console should quit.
fn execute(
    service: &mut Service,
    line: Line,
) -> Result<Option<String>, Error> {
    Ok(Some(match line {
        Line::ListProperties => listing(
            "--- Properties ---",
            &service
                .execute(query::properties::List::by(()))
                .map_err(AsError::into_error)?,
        ),
        Line::ListTenants => listing(
            "--- Tenants ---",
            &service
                .execute(query::tenants::List::by(()))
                .map_err(AsError::into_error)?,
        ),
        Line::ListLeases => listing(
            "--- Leases ---",
            &service
                .execute(query::leases::List::by(()))
                .map_err(AsError::into_error)?,
        ),
        Line::Collect(lease_id) => {
            let amount = service
                .execute_mut(CollectFullRent {
                    lease_id: lease_id.clone(),
                })
                .map_err(AsError::into_error)?;
            format!("Collected full rent {amount} for lease {lease_id}")
        }
        Line::CollectPartial(lease_id, amount) => {
            let out = service
                .execute_mut(CollectPartialPayment {
                    lease_id: lease_id.clone(),
                    amount,
                })
                .map_err(AsError::into_error)?;
            format!(
                "Collected partial payment {} for lease {lease_id}, \
                 outstanding {}",
                out.paid, out.outstanding,
            )
        }
        Line::CollectLate(lease_id, days_late) => {
            let out = service
                .execute_mut(CollectWithLateFee {
                    lease_id: lease_id.clone(),
                    days_late,
                })
                .map_err(AsError::into_error)?;
            format!(
                "Collected rent {} + late fee {} for lease {lease_id}",
                out.rent, out.late_fee,
            )
        }
        Line::Terminate(lease_id) => {
            _ = service
                .execute_mut(TerminateLease {
                    lease_id: lease_id.clone(),
                })
                .map_err(AsError::into_error)?;
            format!("Lease {lease_id} terminated")
        }
        Line::Statement(tenant_id) => {
            let statement = service
                .execute(report::Statement { tenant_id })
                .map_err(AsError::into_error)?;
            View(&statement).to_string()
        }
        Line::Income => {
            let income = service
                .execute(report::Income)
                .map_err(AsError::into_error)?;
            format!("Total income collected this month: {income}")
        }
        Line::Occupancy => {
            let occupancy = service
                .execute(report::Occupancy)
                .map_err(AsError::into_error)?;
            View(&occupancy).to_string()
        }
        Line::Charges => {
            let total = service
                .execute(report::MonthlyCharges)
                .map_err(AsError::into_error)?;
            format!(
                "Total expected monthly charges across all properties \
                 (rent + maintenance): {total}",
            )
        }
        Line::Help => Line::USAGE.to_owned(),
        Line::Exit => return Ok(None),
    }))
}

/// Renders the provided `items` one per line under the `title`.
fn listing<'a, T>(title: &str, items: &'a [T]) -> String
where
    View<'a, T>: fmt::Display,
{
    iter::once(title.to_owned())
        .chain(items.iter().map(|item| View(item).to_string()))
        .join("\n")
}

#[cfg(test)]
mod spec {
    use common::Money;
    use service::{query::report, Query as _, Service};

    use crate::seed;

    use super::run;

    /// Runs the console over the seeded [`Service`] with the provided
    /// `input`, returning everything it printed.
    fn session(service: &mut Service, input: &str) -> String {
        let mut output = Vec::new();
        run(service, input.as_bytes(), &mut output, "> ").unwrap();
        String::from_utf8(output).unwrap()
    }

    fn seeded() -> Service {
        let mut service = Service::default();
        seed(&mut service).unwrap();
        service
    }

    #[test]
    fn collects_rent_in_all_modes() {
        let mut service = seeded();

        let output = session(
            &mut service,
            "collect L1002\n\
             collectPartial L1002 8000\n\
             collectLate L1001 5\n\
             income\n\
             exit\n",
        );

        assert!(output
            .contains("Collected full rent 20000.00 for lease L1002"));
        assert!(output.contains(
            "Collected partial payment 8000.00 for lease L1002, \
             outstanding 0.00",
        ));
        assert!(output.contains(
            "Collected rent 12000.00 + late fee 75.00 for lease L1001",
        ));
        assert!(
            output.contains("Total income collected this month: 40075.00")
        );
        assert_eq!(
            service.execute(report::Income).unwrap(),
            Money::from_units(40_075),
        );
    }

    #[test]
    fn terminates_lease() {
        let mut service = seeded();

        let output = session(
            &mut service,
            "occupancy\nterminate L1002\noccupancy\nterminate L1002\nexit\n",
        );

        assert!(output.contains("Occupancy: 2/4 occupied, 2 available"));
        assert!(output.contains("Lease L1002 terminated"));
        assert!(output.contains("Occupancy: 1/4 occupied, 3 available"));
        assert!(output.contains(
            "Error: [INVALID_STATE] `Lease(id: L1002)` is `TERMINATED`, not \
             `ACTIVE`",
        ));
    }

    #[test]
    fn reports_failures_and_keeps_going() {
        let mut service = seeded();

        let output = session(
            &mut service,
            "bogus\n\
             collect\n\
             collectLate L1001 soon\n\
             collect L404\n\
             collectPartial L1001 0\n\
             statement T404\n\
             \n\
             charges\n\
             EXIT\n\
             income\n",
        );

        for code in [
            "UNKNOWN_COMMAND",
            "MISSING_ARGUMENT",
            "INVALID_NUMBER",
            "NOT_FOUND",
            "INVALID_ARGUMENT",
        ] {
            assert!(output.contains(&format!("Error: [{code}]")), "{code}");
        }
        assert!(output.contains(
            "Total expected monthly charges across all properties \
             (rent + maintenance): 70580.00",
        ));
        assert!(!output.contains("Total income collected"));
        assert_eq!(service.execute(report::Income).unwrap(), Money::ZERO);
    }

    #[test]
    fn lists_entities() {
        let mut service = seeded();

        let output = session(
            &mut service,
            "listProps\nlistTenants\nlistLeases\nstatement T001\n",
        );

        assert!(output.contains(
            "--- Properties ---\n\
             [Apartment] A101 | 12B MG Road, Chennai | Rent: 12000.00 | \
             HOA: 800.00 | Floor: 3 | Available: false\n",
        ));
        assert!(output.contains(
            "[House] H202 | 9 Lake View, Madurai | Rent: 18000.00 | \
             YardFee: 900.00 | Garage: false | Available: true",
        ));
        assert!(output.contains(
            "Tenant T002 (Rohan) Contact: +91-91234-56789 Deposit: 18000.00 \
             ActiveLeases: [L1002]",
        ));
        assert!(output.contains(
            "--- Leases ---\n\
             Lease L1001 | Property: A101 | Tenant: T001 | \
             2025-09-01 -> 2026-08-31 | Cycle: MONTHLY | Status: ACTIVE | \
             O/S: 0.00\n",
        ));
        assert!(output.contains(
            "--- Statement for Ananya ---\nLease L1001 | Property: A101",
        ));
    }

    #[test]
    fn stops_on_end_of_input() {
        let mut service = Service::default();

        let output = session(&mut service, "help\n");

        assert!(output.starts_with(
            "--- Interactive Console (type 'exit' to quit) ---\n"
        ));
        assert_eq!(output.matches("Options: listProps").count(), 2);
        assert!(output.ends_with("> "));
    }

    #[test]
    fn refuses_payment_overflowing_income() {
        let mut service = seeded();

        let output = session(
            &mut service,
            "collectPartial L1001 79228162514264337593543950335\n\
             collectPartial L1001 79228162514264337593543950335\n\
             income\n\
             exit\n",
        );

        assert!(output.contains("Error: [INVALID_ARGUMENT] Collecting"));
        assert!(output.contains(
            "Total income collected this month: \
             79228162514264337593543950335.00",
        ));
    }
}
