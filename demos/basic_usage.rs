//! Basic BoundedVec / Expected usage example

use slotted::{BoundedVec, Expected};

fn parse_port(text: &str) -> Expected<u16, String> {
    match text.parse::<u16>() {
        Ok(port) => port.into(),
        Err(err) => Expected::make_error(format!("{text:?}: {err}")),
    }
}

fn main() {
    println!("BoundedVec Basic Usage Example");
    println!("==============================");

    let mut ports: BoundedVec<u16, 3> = BoundedVec::new();
    for text in ["80", "443", "http", "8080", "9090"] {
        let mut parsed = parse_port(text);
        match parsed.take_value() {
            Ok(port) => match ports.push_back(port).map(|_| ()) {
                Ok(()) => println!("  stored {port} ({}/{})", ports.len(), ports.capacity()),
                Err(err) => println!("  dropped {port}: {err}"),
            },
            Err(_) => println!("  rejected: {}", parsed.error().map_or("?", String::as_str)),
        }
    }

    println!("Final contents: {ports:?}");
    println!("Full: {}", ports.is_full());

    // Moving out leaves the source empty but usable
    let moved = ports.take();
    println!("\nAfter take:");
    println!("  moved: {moved:?}");
    println!("  source len: {}", ports.len());

    println!("\nExpected swap:");
    let mut a: Expected<u16, String> = Expected::make_value(1);
    let mut b: Expected<u16, String> = Expected::make_error("err".to_string());
    a.swap(&mut b);
    println!("  a = {a:?}");
    println!("  b = {b:?}");
}
