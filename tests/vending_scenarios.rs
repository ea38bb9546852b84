//! End-to-end customer scenarios against the public machine API.

use vending_machine::core::{Denomination, Product, TransactionState};
use vending_machine::machine::{VendError, VendOutcome, VendingMachine, NO_SELECTION};
use vending_machine::{ChangePolicy, VendingMachineBuilder};

fn coin(value: u32) -> Denomination {
    Denomination::new(value).unwrap()
}

fn empty_machine() -> VendingMachine {
    VendingMachine::default()
}

#[test]
fn empty_machine_has_nothing_to_offer() {
    let mut machine = empty_machine();

    assert!(machine.products_in_stock().is_empty());
    assert_eq!(machine.amount_collected(), 0);
    assert_eq!(machine.selection(), NO_SELECTION);

    let outcome = machine.vend().unwrap();
    assert_eq!(outcome, VendOutcome::SelectProduct);
    assert_eq!(outcome.to_string(), "please select a product");
}

#[test]
fn exact_payment_vends_and_resets() {
    let mut machine: VendingMachine = VendingMachine::new([Product::new("Cola", 2)], Vec::new());

    machine.insert(coin(2));
    machine.select("Cola").unwrap();
    let outcome = machine.vend().unwrap();

    assert_eq!(outcome, VendOutcome::Vended(Product::new("Cola", 2)));
    assert_eq!(machine.selection(), NO_SELECTION);
    assert_eq!(machine.amount_inserted(), 0);
    assert_eq!(machine.amount_collected(), 2);
    assert!(!machine.products_in_stock().contains(&"Cola"));
    assert_eq!(machine.state(), TransactionState::Idle);
}

#[test]
fn underpayment_asks_for_more_coins() {
    let mut machine: VendingMachine = VendingMachine::new([Product::new("Cola", 2)], Vec::new());

    machine.select("Cola").unwrap();
    let outcome = machine.vend().unwrap();

    assert_eq!(outcome.to_string(), "please insert more coins");
    assert_eq!(outcome, VendOutcome::InsertMoreCoins { shortfall: 2 });
    assert_eq!(machine.selection(), "Cola");
    assert!(machine.products_in_stock().is_empty());
    assert_eq!(machine.amount_collected(), 0);
}

#[test]
fn overpayment_returns_exact_change_from_till() {
    let mut machine: VendingMachine =
        VendingMachine::new([Product::new("Soda", 98)], [coin(2)]);
    let till_before = machine.amount_collected();

    machine.insert(coin(100));
    machine.select("Soda").unwrap();
    let (product, change) = machine.vend().unwrap().into_parts().unwrap();

    assert_eq!(product, Product::new("Soda", 98));
    assert_eq!(change, Some(coin(2)));
    assert!(machine.till().to_list().iter().all(|c| c.value() != 2));
    assert_eq!(machine.amount_collected(), till_before + 100 - 2);
}

#[test]
fn unknown_selection_is_out_of_stock() {
    let mut machine = empty_machine();

    let err = machine.select("Unknown").unwrap_err();

    assert_eq!(
        err,
        VendError::OutOfStock {
            name: "Unknown".to_string()
        }
    );
    assert_eq!(err.to_string(), "Unknown not in stock");
    assert_eq!(machine.selection(), NO_SELECTION);
}

#[test]
fn missing_change_refuses_vend_by_default() {
    let mut machine: VendingMachine =
        VendingMachine::new([Product::new("Soda", 98)], [coin(1), coin(1)]);

    machine.insert(coin(100));
    machine.select("Soda").unwrap();

    assert_eq!(machine.vend(), Err(VendError::NoExactChange { change: 2 }));
    assert_eq!(machine.selection(), "Soda");
    assert_eq!(machine.amount_inserted(), 100);
    assert_eq!(machine.amount_collected(), 2);

    let refund = machine.cancel();
    assert_eq!(refund, vec![coin(100)]);
    assert_eq!(machine.products_in_stock(), vec!["Soda"]);
}

#[test]
fn missing_change_can_be_kept_by_policy() {
    let mut machine = VendingMachineBuilder::<Product, Denomination>::new()
        .products([Product::new("Soda", 98)])
        .change_policy(ChangePolicy::KeepOverpayment)
        .build()
        .unwrap();

    machine.insert(coin(100));
    machine.select("Soda").unwrap();
    let outcome = machine.vend().unwrap();

    assert_eq!(
        outcome,
        VendOutcome::VendedWithoutChange {
            product: Product::new("Soda", 98),
            owed: 2
        }
    );
    assert_eq!(machine.amount_collected(), 100);
}

#[test]
fn machine_serves_several_customers_in_turn() {
    let mut machine = VendingMachineBuilder::<Product, Denomination>::new()
        .products([
            Product::new("Cola", 70),
            Product::new("Cola", 70),
            Product::new("Crisps", 60),
        ])
        .coin_values([10, 20, 50])
        .build()
        .unwrap();

    machine.insert(coin(50));
    machine.insert(coin(20));
    machine.select("Cola").unwrap();
    assert!(matches!(machine.vend(), Ok(VendOutcome::Vended(_))));

    machine.select("Crisps").unwrap();
    machine.insert(coin(50));
    machine.insert(coin(20));
    assert!(matches!(
        machine.vend(),
        Ok(VendOutcome::VendedWithChange { .. })
    ));

    assert_eq!(machine.products_in_stock(), vec!["Cola"]);
    assert_eq!(machine.amount_collected(), 80 + 70 - 10 + 70);
    assert_eq!(machine.log().completed_sales(), 2);
}

#[test]
fn refunds_and_abandoned_selections_are_not_sales() {
    let mut machine: VendingMachine = VendingMachine::new([Product::new("Cola", 2)], Vec::new());

    machine.insert(coin(5));
    assert_eq!(machine.cancel(), vec![coin(5)]);
    machine.select("Cola").unwrap();
    assert!(machine.cancel().is_empty());

    assert_eq!(machine.log().completed_sales(), 0);
    assert_eq!(machine.log().cancellations(), 2);
    assert_eq!(machine.products_in_stock(), vec!["Cola"]);
    assert_eq!(machine.amount_collected(), 0);
}
