//! Form-submit workflow.
//!
//! A submit runs Idle -> Validating -> Committed | Rejected -> Idle in one
//! synchronous call, so the UI never observes the intermediate states.

use tracing::{debug, info};

use crate::validate::{validate, FormInput, Policy, ValidationError};
use crate::{Inventory, Item, TableView};

/// Owns the store, the rendered table and the form text. The store is only
/// ever handed out by shared reference.
#[derive(Debug, Clone)]
pub struct Session {
    policy: Policy,
    inventory: Inventory<Item>,
    table: TableView,
    form: FormInput,
}

impl Session {
    pub fn new(policy: Policy) -> Self {
        Self {
            policy,
            inventory: Inventory::new(),
            table: TableView::default(),
            form: FormInput::default(),
        }
    }

    pub fn policy(&self) -> Policy {
        self.policy
    }

    pub fn inventory(&self) -> &Inventory<Item> {
        &self.inventory
    }

    pub fn table(&self) -> &TableView {
        &self.table
    }

    pub fn form(&self) -> &FormInput {
        &self.form
    }

    pub fn form_mut(&mut self) -> &mut FormInput {
        &mut self.form
    }

    /// Validate the form; on success store the item, redraw the table and
    /// clear the fields. On failure nothing changes.
    pub fn submit(&mut self) -> Result<&Item, ValidationError> {
        let item = match validate(&self.form, self.policy) {
            Ok(item) => item,
            Err(err) => {
                debug!(policy = ?self.policy, error = %err, "submit rejected");
                return Err(err);
            }
        };

        info!(
            name = item.name(),
            category = item.category(),
            quantity = item.quantity(),
            "item added"
        );
        self.inventory.add(item);
        self.table.refresh(self.inventory.list());
        self.form.clear();

        // add() just pushed, so the list is non-empty
        Ok(&self.inventory.list()[self.inventory.len() - 1])
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::validate::{Field, QuantityProblem};
    use crate::TableRow;

    fn fill(session: &mut Session, name: &str, category: &str, quantity: &str) {
        *session.form_mut() = FormInput::new(name, category, quantity);
    }

    #[test]
    fn strict_scenario_hammer_then_nail() {
        let mut session = Session::new(Policy::Strict);

        fill(&mut session, "Hammer", "Tools", "10");
        session.submit().unwrap();
        assert!(session.form().is_blank());

        fill(&mut session, "Nail", "Tools", "200");
        session.submit().unwrap();
        assert!(session.form().is_blank());

        assert_eq!(
            session.inventory().list(),
            [Item::new("Hammer", "Tools", 10), Item::new("Nail", "Tools", 200)]
        );
        let names: Vec<&str> = session.table().rows().iter().map(|r| r.name.as_str()).collect();
        assert_eq!(names, ["Hammer", "Nail"]);
    }

    #[test]
    fn rejected_submit_changes_nothing() {
        let mut session = Session::new(Policy::Strict);
        fill(&mut session, "Hammer", "Tools", "10");
        session.submit().unwrap();

        fill(&mut session, "  ", "Tools", "5");
        let err = session.submit().unwrap_err();
        assert_eq!(err, ValidationError::EmptyField(Field::Name));
        assert_eq!(session.inventory().len(), 1);
        assert_eq!(session.table().len(), 1);
        assert_eq!(session.form(), &FormInput::new("  ", "Tools", "5"));
    }

    #[test]
    fn non_numeric_quantity_is_rejected_under_both_policies() {
        for policy in [Policy::Strict, Policy::Lenient] {
            let mut session = Session::new(policy);
            fill(&mut session, "Hammer", "Tools", "abc");
            let err = session.submit().unwrap_err();
            assert!(matches!(
                err,
                ValidationError::InvalidQuantity {
                    reason: QuantityProblem::NotANumber,
                    ..
                }
            ));
            assert!(session.inventory().is_empty());
            assert!(session.table().is_empty());
        }
    }

    #[test]
    fn lenient_session_stores_non_positive_quantities() {
        let mut session = Session::new(Policy::Lenient);
        fill(&mut session, "Hammer", "Tools", "0");
        assert_eq!(session.submit().unwrap().quantity(), 0);
        fill(&mut session, "Hammer", "Tools", "-3");
        assert_eq!(session.submit().unwrap().quantity(), -3);
        assert_eq!(session.inventory().len(), 2);
    }

    #[test]
    fn strict_session_rejects_non_positive_quantities() {
        let mut session = Session::new(Policy::Strict);
        for text in ["0", "-3"] {
            fill(&mut session, "Hammer", "Tools", text);
            assert!(session.submit().is_err());
        }
        assert!(session.inventory().is_empty());
    }

    #[test]
    fn duplicates_are_kept() {
        let mut session = Session::new(Policy::Strict);
        for _ in 0..2 {
            fill(&mut session, "Nail", "Tools", "5");
            session.submit().unwrap();
        }
        assert_eq!(session.inventory().len(), 2);
        assert_eq!(session.inventory().list()[0], session.inventory().list()[1]);
    }

    mod proptest_tests {
        use super::*;
        use proptest::prelude::*;

        proptest! {
            /// Property: a valid triple grows the store by one and lands, trimmed, in the last row.
            #[test]
            fn valid_submit_appends_exactly_one(
                name in "[A-Za-z][A-Za-z0-9 ]{0,15}[A-Za-z0-9]",
                category in "[A-Za-z]{1,12}",
                quantity in 1..=i32::MAX,
                prior in 0usize..4,
            ) {
                let mut session = Session::new(Policy::Strict);
                for i in 0..prior {
                    fill(&mut session, "Seed", "Seed", &(i + 1).to_string());
                    session.submit().unwrap();
                }
                let before = session.inventory().len();

                fill(&mut session, &format!("  {name} "), &format!("{category}\t"), &format!(" {quantity}"));
                let stored = session.submit().unwrap().clone();

                prop_assert_eq!(session.inventory().len(), before + 1);
                prop_assert_eq!(&stored, &Item::new(name.as_str(), category.as_str(), quantity));
                prop_assert_eq!(
                    session.table().last_row(),
                    Some(&TableRow { name: name.clone(), category: category.clone(), quantity })
                );
                prop_assert!(session.form().is_blank());
            }
        }
    }
}
