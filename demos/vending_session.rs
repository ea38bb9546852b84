//! Vending Session
//!
//! This demo walks one machine through a few customer transactions.
//!
//! Key concepts:
//! - Building a machine with stock, till coins and a change policy
//! - Advisory outcomes versus vends
//! - Exact change from the till, and what happens without it
//! - Structured logging of every transaction step
//!
//! Run with: RUST_LOG=debug cargo run --example vending_session

use tracing_subscriber::EnvFilter;
use vending_machine::core::{Denomination, Product};
use vending_machine::machine::VendOutcome;
use vending_machine::{ChangePolicy, VendingMachineBuilder};

fn main() -> Result<(), Box<dyn std::error::Error>> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    println!("=== Vending Session Example ===\n");

    let mut machine = VendingMachineBuilder::<Product, Denomination>::new()
        .products([
            Product::new("Cola", 70),
            Product::new("Cola", 70),
            Product::new("Crisps", 60),
            Product::new("Soda", 98),
        ])
        .coin_values([1, 2, 10, 10, 20])
        .change_policy(ChangePolicy::RejectVend)
        .build()?;

    println!("In stock: {:?}", machine.products_in_stock());
    println!("Till holds: {}p\n", machine.amount_collected());

    // Customer 1 pays exactly
    machine.select("Cola")?;
    let outcome = machine.vend()?;
    println!("Selected {}: {}", machine.selection(), outcome);
    machine.insert(Denomination::new(50)?);
    machine.insert(Denomination::new(20)?);
    report(machine.vend()?);

    // Customer 2 overpays and gets change
    machine.insert(Denomination::new(100)?);
    machine.select("Soda")?;
    report(machine.vend()?);

    // Customer 3 overpays but the till cannot make the change
    machine.insert(Denomination::new(200)?);
    machine.select("Crisps")?;
    match machine.vend() {
        Ok(outcome) => report(outcome),
        Err(err) => {
            println!("Vend refused: {err}");
            let refund = machine.cancel();
            println!("Refunded {} coin(s)", refund.len());
        }
    }

    // Customer 4 asks for something that has sold out
    if let Err(err) = machine.select("Water") {
        println!("{err}");
    }

    println!("\nIn stock: {:?}", machine.products_in_stock());
    println!("Till holds: {}p", machine.amount_collected());
    println!("Completed sales: {}", machine.log().completed_sales());
    println!("Cancelled transactions: {}", machine.log().cancellations());

    println!("\n=== Example Complete ===");
    Ok(())
}

fn report(outcome: VendOutcome<Product, Denomination>) {
    match outcome.into_parts() {
        Some((product, Some(change))) => {
            println!("Vended {} with {} change", product.name(), change)
        }
        Some((product, None)) => println!("Vended {}", product.name()),
        None => println!("Nothing vended"),
    }
}
