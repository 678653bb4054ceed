use anyhow::Context;
use log::info;
use outcomes::{Either, Nullable, Outcome, Result, Try};

#[derive(Debug)]
struct Order {
    id: u32,
    quantity: u32,
}

/// Parses `id:quantity` pairs, e.g. `7:3`.
fn parse_order(line: &str) -> Try<Order> {
    Try::to(|| {
        let (id, quantity) = line.split_once(':').context("expected id:quantity")?;
        Ok(Order {
            id: id.trim().parse()?,
            quantity: quantity.trim().parse()?,
        })
    })
}

fn validate(order: Order) -> Result<Order, String> {
    if order.quantity == 0 {
        return Result::failure(format!("order {} has no items", order.id));
    }
    Result::success(order)
}

fn main() -> anyhow::Result<()> {
    env_logger::init();

    let lines = ["1:2", "2:0", "three:1", "4:10"];

    let outcomes: Vec<Either<String, Order>> = lines
        .iter()
        .map(|line| {
            let checked = parse_order(line)
                .to_result()
                .recover(|e| Result::failure(format!("{}: {:#}", line, e)))
                .flat_map(validate)
                .on_failure(|e| info!("rejected - {}", e));

            match checked {
                Result::Success(order) => Either::right(order),
                Result::Failure(reason) => Either::left(reason),
            }
        })
        .collect();

    let accepted: u32 = outcomes
        .iter()
        .filter_map(Either::as_right)
        .map(|order| order.quantity)
        .sum();
    println!("accepted items: {}", accepted);

    let largest = Nullable::from(
        outcomes
            .iter()
            .filter_map(Either::as_right)
            .max_by_key(|order| order.quantity),
    );
    largest.if_present_or_else(
        |order| println!("largest order: {:?}", order),
        || println!("no orders"),
    );

    for rejected in outcomes.iter().filter_map(Either::as_left) {
        println!("rejected: {}", rejected);
    }

    let total = Try::call(|| accepted.checked_mul(100).unwrap_or(u32::MAX)).into_std()?;
    println!("total cents: {}", total);

    Ok(())
}
