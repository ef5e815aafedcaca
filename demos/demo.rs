//! End-to-end walk of the list: the fixed showcase lists first, then a
//! randomized list drawn from the classic two-digit value range.

use duplex_list::{List, Value};
use log::warn;
use rand::Rng;
use std::iter::FromIterator;

const MIN_VALUE: Value = 10;
const MAX_VALUE: Value = 99;
const MIN_LEN: usize = 5;
const MAX_LEN: usize = 20;

fn show(label: &str, list: &List) {
    println!("{}: {}", label, list);
    println!("{} (every other): {}", label, list.every_other());
}

fn main() {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();

    show("eight", &List::from_iter((1..=8).map(|i| i * 10)));
    show("nine", &List::from_iter((1..=9).map(|i| i * 10)));
    show("single", &List::from_iter(Some(100)));
    show("pair", &List::from_iter(vec![200, 300]));

    let mut rng = rand::thread_rng();
    let mut random = List::from_iter(
        (0..rng.gen_range(MIN_LEN..=MAX_LEN)).map(|_| rng.gen_range(MIN_VALUE..=MAX_VALUE)),
    );
    println!("random: {}", random);
    println!("random (reversed): {}", random.reversed());

    random.push_front(MIN_VALUE - 1);
    if let Err(error) = random.insert_after(MAX_VALUE + 1, 2) {
        warn!("insert_after rejected: {}", error);
    }
    println!("random (edited): {}", random);

    if !random.remove_value(MAX_VALUE + 1) {
        warn!("remove_value found nothing to remove");
    }
    if let Err(error) = random.remove_at(random.len() + 1) {
        warn!("remove_at rejected: {}", error);
    }
    match random.pop_front() {
        Ok(value) => println!("popped {} back off the front", value),
        Err(error) => warn!("pop_front rejected: {}", error),
    }
    println!("random (restored): {}", random);

    random.clear();
    println!("random (cleared): {}", random);
}
